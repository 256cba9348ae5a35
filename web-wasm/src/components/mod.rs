//! UIコンポーネント

pub mod ask_bar;
pub mod assistant_panel;
pub mod calculator;
pub mod checklist_table;
pub mod project_form;
pub mod sidebar;
pub mod status_badge;
