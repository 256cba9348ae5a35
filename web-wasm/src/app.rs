//! メインアプリケーションコンポーネント

use far_review_common::{ask, AssistantConfig, AssistantPanel, ReviewSession, ALL_CATEGORIES};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::FetchGenerator;
use crate::components::{
    ask_bar::AskBar, assistant_panel::AssistantPanelView, calculator::Calculator,
    checklist_table::ChecklistTable, project_form::ProjectForm, sidebar::Sidebar,
};
use crate::local_store::LocalStore;

/// ブラウザ上の検核セッション
pub type Session = ReviewSession<LocalStore>;

const RESET_CONFIRM: &str = "確定要清空所有資料嗎？";

/// ビルド時の環境変数からAPI設定を作る
fn assistant_config() -> AssistantConfig {
    let key = option_env!("GEMINI_API_KEY").or(option_env!("API_KEY"));
    if key.is_none() {
        gloo::console::warn!("GEMINI_API_KEY 未設定: AI 法規顧問は失敗メッセージのみ表示します");
    }
    AssistantConfig::default().with_api_key(key)
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 起動時に1回だけ読み込む
    let session = RwSignal::new(Session::open(LocalStore));
    let panel = RwSignal::new(AssistantPanel::new());
    let active_tab = RwSignal::new(ALL_CATEGORIES.to_string());

    let generator = FetchGenerator::new(assistant_config());

    // 質問ハンドラ
    let on_ask = move |question: String| {
        let mut ticket = None;
        panel.update(|p| ticket = p.begin(&question).ok());
        let Some(ticket) = ticket else {
            return;
        };

        let generator = generator.clone();
        spawn_local(async move {
            let outcome = ask(&generator, generator.model(), &question).await;
            if let Err(e) = &outcome {
                gloo::console::warn!(format!("AI 問い合わせ失敗: {}", e));
            }
            panel.update(|p| {
                p.finish(ticket, outcome);
            });
        });
    };

    // リセットハンドラ
    let on_reset = move |_: ()| {
        let confirmed = window()
            .confirm_with_message(RESET_CONFIRM)
            .unwrap_or(false);
        session.update(|s| {
            if s.reset(confirmed) {
                active_tab.set(ALL_CATEGORIES.to_string());
                panel.update(AssistantPanel::reset);
            }
        });
    };

    let busy = Signal::derive(move || panel.with(|p| p.is_busy()));

    view! {
        <div class="layout">
            <Sidebar session=session active_tab=active_tab on_reset=on_reset />

            <main class="main">
                <ProjectForm session=session />

                <section class="analysis-grid">
                    <Calculator session=session />
                    <AssistantPanelView panel=panel on_ask=on_ask.clone() />
                </section>

                <ChecklistTable session=session active_tab=active_tab />

                <AskBar busy=busy on_ask=on_ask />
            </main>
        </div>
    }
}
