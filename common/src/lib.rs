//! 容積代金估價報告檢核 共通ライブラリ
//!
//! Web(WASM)とネイティブで共有される型・算出ロジック・永続化/AIポート

pub mod analysis;
pub mod assistant;
pub mod catalog;
pub mod error;
pub mod gemini;
pub mod input;
pub mod prompts;
pub mod session;
pub mod store;
pub mod types;

pub use analysis::{analyze, analyze_with_tolerance, format_ratio, Analysis, RATIO_TOLERANCE_PCT};
pub use assistant::{ask, AssistantConfig, AssistantPanel, AssistantRequest, TextGenerator, Ticket};
pub use catalog::{categories, initial_checklist, EXCAVATION_REDUCTION_LIMIT_PCT};
pub use error::{Error, Result};
pub use gemini::{endpoint_url, GeminiRequest, GeminiResponse};
pub use input::NumericInput;
pub use session::{ChecklistStats, ReviewSession, ALL_CATEGORIES};
pub use store::{KeyValueStore, MemoryStore};
pub use types::{CalcField, CalculationData, CheckStatus, ChecklistItem, ProjectField, ProjectInfo};
