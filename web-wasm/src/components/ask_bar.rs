//! 浮動質問入力欄

use leptos::prelude::*;

#[component]
pub fn AskBar<FA>(busy: Signal<bool>, on_ask: FA) -> impl IntoView
where
    FA: Fn(String) + 'static + Clone + Send + Sync,
{
    let (question, set_question) = signal(String::new());

    let on_keydown = {
        let on_ask = on_ask.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if ev.key() == "Enter" {
                on_ask(question.get_untracked());
            }
        }
    };

    view! {
        <div class="ask-bar">
            <input
                type="text"
                placeholder="輸入問題，AI 為您解惑..."
                prop:value=move || question.get()
                on:input=move |ev| set_question.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button
                class="send"
                on:click={
                    let on_ask = on_ask.clone();
                    move |_| on_ask(question.get_untracked())
                }
            >
                {move || if busy.get() { "…" } else { "➤" }}
            </button>
        </div>
    }
}
