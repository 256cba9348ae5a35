//! 検核結果バッジ

use far_review_common::CheckStatus;
use leptos::prelude::*;

#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<CheckStatus>) -> impl IntoView {
    view! {
        <span class=move || format!("status-badge {}", status.get().as_str())>
            {move || status.get().label()}
        </span>
    }
}
