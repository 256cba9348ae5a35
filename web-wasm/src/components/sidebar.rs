//! サイドバー（進捗・分類タブ・リセット）

use leptos::prelude::*;
use crate::app::Session;

#[component]
pub fn Sidebar<FR>(
    session: RwSignal<Session>,
    active_tab: RwSignal<String>,
    on_reset: FR,
) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    let stats = Memo::new(move |_| session.with(|s| s.stats()));
    let tabs = session.with_untracked(|s| s.tabs());

    view! {
        <aside class="sidebar">
            <div class="brand">
                <h1>"估價報告智慧檢核"</h1>
                <p class="brand-sub">"113 TPE VOL PREMIUM"</p>
            </div>

            <div class="progress-block">
                <label>"檢核進度"</label>
                <div class="progress-bar">
                    <div
                        class="progress-fill"
                        style=move || format!("width: {}%", stats.get().progress_percent())
                    />
                </div>
                <div class="progress-text">
                    <span>{move || format!("已核 {} / {}", stats.get().completed, stats.get().total)}</span>
                    <span class:alert={move || stats.get().failed > 0}>
                        {move || format!("異常: {}", stats.get().failed)}
                    </span>
                </div>
            </div>

            <nav class="tabs">
                {tabs
                    .into_iter()
                    .map(|tab| {
                        let label = if tab == far_review_common::ALL_CATEGORIES { "全部項目" } else { tab };
                        view! {
                            <button
                                class="tab"
                                class:active=move || active_tab.get() == tab
                                on:click=move |_| active_tab.set(tab.to_string())
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <button
                class="reset-button"
                on:click={
                    let on_reset = on_reset.clone();
                    move |_| on_reset(())
                }
            >
                "重置專案資料"
            </button>
        </aside>
    }
}
