//! AI 法規顧問パネル

use far_review_common::prompts::PRESET_QUESTIONS;
use far_review_common::AssistantPanel;
use leptos::prelude::*;

#[component]
pub fn AssistantPanelView<FA>(panel: RwSignal<AssistantPanel>, on_ask: FA) -> impl IntoView
where
    FA: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="card assistant">
            <h3>
                <span class="pulse" />
                "AI 法規顧問"
            </h3>
            <div class="presets">
                {PRESET_QUESTIONS
                    .iter()
                    .map(|(label, question)| {
                        let on_ask = on_ask.clone();
                        view! {
                            <button class="preset" on:click=move |_| on_ask(question.to_string())>
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="assistant-result" class:muted=move || panel.with(|p| !p.has_result())>
                {move || panel.with(|p| p.display_text().to_string())}
            </div>
        </div>
    }
}
