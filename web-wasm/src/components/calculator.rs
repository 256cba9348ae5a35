//! 核心數值與邏輯檢核

use far_review_common::{CalcField, NumericInput};
use leptos::prelude::*;
use crate::app::Session;

const PRE_FIELDS: [CalcField; 2] = [CalcField::PreTotalSales, CalcField::PreTotalCost];
const POST_FIELDS: [CalcField; 2] = [CalcField::PostTotalSales, CalcField::PostTotalCost];

#[component]
pub fn Calculator(session: RwSignal<Session>) -> impl IntoView {
    let analysis = Memo::new(move |_| session.with(|s| s.analysis()));

    let profit_ok = move || analysis.get().map(|a| a.is_profit_valid).unwrap_or(false);
    let ratio_ok = move || analysis.get().map(|a| a.is_ratio_consistent).unwrap_or(false);

    view! {
        <div class="card calculator">
            <h3>"核心數值與邏輯檢核"</h3>

            <div class="calc-columns">
                <CalcColumn
                    session=session
                    heading="容移前 (Pre-Transfer)"
                    amounts=PRE_FIELDS
                    sales_area=CalcField::PreSalesArea
                    building_area=CalcField::PreBuildingArea
                />
                <CalcColumn
                    session=session
                    heading="容移後 (Post-Transfer)"
                    amounts=POST_FIELDS
                    sales_area=CalcField::PostSalesArea
                    building_area=CalcField::PostBuildingArea
                />
            </div>

            <div class="result-cards">
                <div class="result-card" class:ok=profit_ok class:bad=move || !profit_ok()>
                    <p class="result-label">"增量收益邏輯"</p>
                    <p class="result-value">
                        {move || match analysis.get() {
                            None => "—".to_string(),
                            Some(a) if a.is_profit_valid => "符合 (收益 > 成本)".to_string(),
                            Some(_) => "異常 (收益 < 成本)".to_string(),
                        }}
                    </p>
                </div>

                <div class="result-card" class:ok=ratio_ok class:warn=move || !ratio_ok()>
                    <p class="result-label">"銷坪比一致性"</p>
                    <p class="result-value">
                        {move || match analysis.get() {
                            None => "—".to_string(),
                            Some(a) => format!("{}% → {}%", a.pre_ratio_display(), a.post_ratio_display()),
                        }}
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CalcColumn(
    session: RwSignal<Session>,
    heading: &'static str,
    amounts: [CalcField; 2],
    sales_area: CalcField,
    building_area: CalcField,
) -> impl IntoView {
    view! {
        <div class="calc-column">
            <h4>{heading}</h4>
            {amounts
                .into_iter()
                .map(|field| {
                    view! {
                        <div class="calc-row">
                            <span>{field.label()}</span>
                            <NumberInput session=session field=field kind="amount" />
                        </div>
                    }
                })
                .collect_view()}
            <div class="calc-row ratio-row">
                <span class="muted">"銷坪比 (銷/建)"</span>
                <div class="ratio-inputs">
                    <NumberInput session=session field=sales_area kind="area" />
                    <NumberInput session=session field=building_area kind="area" />
                </div>
            </div>
        </div>
    }
}

/// 数値入力欄
///
/// 入力中の文字列（"12." など）は保存値と一致する限りそのまま残す。
#[component]
fn NumberInput(session: RwSignal<Session>, field: CalcField, kind: &'static str) -> impl IntoView {
    let draft = RwSignal::new(session.with_untracked(|s| s.calculation().get(field).to_string()));

    let shown = move || {
        let (stored, invalid) = session.with(|s| (s.calculation().get(field), s.is_field_invalid(field)));
        let raw = draft.get_untracked();
        if invalid || NumericInput::parse(&raw).value() == Some(stored) {
            raw
        } else {
            stored.to_string()
        }
    };

    view! {
        <input
            type="text"
            inputmode="decimal"
            class=kind
            class:invalid=move || session.with(|s| s.is_field_invalid(field))
            placeholder=field.label()
            prop:value=shown
            on:input=move |ev| {
                let raw = event_target_value(&ev);
                let input = NumericInput::parse(&raw);
                draft.set(raw);
                session.update(|s| s.set_calc_field(field, input));
            }
        />
    }
}
