//! 案件情報フォーム

use far_review_common::ProjectField;
use leptos::prelude::*;
use crate::app::Session;

#[component]
pub fn ProjectForm(session: RwSignal<Session>) -> impl IntoView {
    view! {
        <section class="project-form">
            {ProjectField::ALL
                .into_iter()
                .map(|field| {
                    view! {
                        <div class="form-group">
                            <label>{field.label()}</label>
                            <input
                                type="text"
                                placeholder=field.placeholder()
                                prop:value=move || session.with(|s| s.project().get(field).to_string())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    session.update(|s| s.set_project_field(field, value));
                                }
                            />
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
