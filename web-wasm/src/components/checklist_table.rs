//! 検核表

use far_review_common::{CheckStatus, ChecklistItem};
use leptos::prelude::*;
use crate::app::Session;
use crate::components::status_badge::StatusBadge;

#[component]
pub fn ChecklistTable(session: RwSignal<Session>, active_tab: RwSignal<String>) -> impl IntoView {
    let rows = move || {
        let tab = active_tab.get();
        session.with(|s| s.filtered(&tab).into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="card checklist">
            <table>
                <thead>
                    <tr>
                        <th class="col-category">"分類"</th>
                        <th>"檢核規範與要點"</th>
                        <th class="col-status">"結果"</th>
                        <th>"估價師備註"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|item| item.id.clone()
                        children=move |item| view! { <ChecklistRow session=session item=item /> }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ChecklistRow(session: RwSignal<Session>, item: ChecklistItem) -> impl IntoView {
    let id = item.id.clone();

    // 行は id で固定されるため、状態と備考はセッションから都度読む
    let status = Signal::derive({
        let id = id.clone();
        move || {
            session.with(|s| {
                s.checklist()
                    .iter()
                    .find(|i| i.id == id)
                    .map(|i| i.status)
                    .unwrap_or(CheckStatus::Unchecked)
            })
        }
    });

    let remark = {
        let id = id.clone();
        move || {
            session.with(|s| {
                s.checklist()
                    .iter()
                    .find(|i| i.id == id)
                    .map(|i| i.remark.clone())
                    .unwrap_or_default()
            })
        }
    };

    view! {
        <tr>
            <td><span class="category-tag">{item.category.clone()}</span></td>
            <td>
                <h5>{item.title.clone()}</h5>
                <p class="description">{item.description.clone()}</p>
            </td>
            <td class="col-status">
                <button
                    class="status-button"
                    on:click={
                        let id = id.clone();
                        move |_| {
                            session.update(|s| {
                                if let Err(e) = s.cycle_status(&id) {
                                    gloo::console::warn!(format!("狀態更新失敗: {}", e));
                                }
                            });
                        }
                    }
                >
                    <StatusBadge status=status />
                </button>
            </td>
            <td>
                <input
                    type="text"
                    class="remark"
                    placeholder="點擊輸入備註..."
                    prop:value=remark
                    on:input={
                        let id = id.clone();
                        move |ev| {
                            let value = event_target_value(&ev);
                            session.update(|s| {
                                if let Err(e) = s.set_remark(&id, value) {
                                    gloo::console::warn!(format!("備註更新失敗: {}", e));
                                }
                            });
                        }
                    }
                />
            </td>
        </tr>
    }
}
