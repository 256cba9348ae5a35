//! 検核セッション
//!
//! 3つのレコード（検核表・案件情報・数値モデル）を単一所有し、
//! 変更のたびに全レコードを永続化ポートへ書き戻す。

use crate::analysis::{analyze, Analysis};
use crate::catalog::{categories, initial_checklist};
use crate::error::{Error, Result};
use crate::input::NumericInput;
use crate::store::{
    load_or_default, save_record, KeyValueStore, ALL_KEYS, CALCULATION_KEY, CHECKLIST_KEY,
    PROJECT_KEY,
};
use crate::types::{CalcField, CalculationData, CheckStatus, ChecklistItem, ProjectField, ProjectInfo};
use std::collections::BTreeSet;

/// 分類タブ「全部項目」
pub const ALL_CATEGORIES: &str = "all";

/// 検核進捗
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChecklistStats {
    pub total: usize,
    pub completed: usize,
    pub failed: usize,
}

impl ChecklistStats {
    pub fn of(items: &[ChecklistItem]) -> Self {
        Self {
            total: items.len(),
            completed: items
                .iter()
                .filter(|i| i.status != CheckStatus::Unchecked)
                .count(),
            failed: items
                .iter()
                .filter(|i| i.status == CheckStatus::Failed)
                .count(),
        }
    }

    pub fn progress_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }
}

/// 検核セッション
#[derive(Debug, Clone)]
pub struct ReviewSession<S: KeyValueStore> {
    store: S,
    checklist: Vec<ChecklistItem>,
    project: ProjectInfo,
    calculation: CalculationData,
    invalid_fields: BTreeSet<CalcField>,
}

impl<S: KeyValueStore> ReviewSession<S> {
    /// ストアから各レコードを個別に読み込む
    pub fn open(store: S) -> Self {
        let checklist = load_or_default(&store, CHECKLIST_KEY, initial_checklist);
        let project = load_or_default(&store, PROJECT_KEY, ProjectInfo::default);
        let calculation = load_or_default(&store, CALCULATION_KEY, CalculationData::default);

        Self {
            store,
            checklist,
            project,
            calculation,
            invalid_fields: BTreeSet::new(),
        }
    }

    pub fn checklist(&self) -> &[ChecklistItem] {
        &self.checklist
    }

    pub fn project(&self) -> &ProjectInfo {
        &self.project
    }

    pub fn calculation(&self) -> &CalculationData {
        &self.calculation
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// 全レコードを書き戻す（差分なし）
    ///
    /// 書き込み失敗はログのみでセッションは継続する。
    pub fn persist(&mut self) {
        let results = [
            save_record(&mut self.store, CHECKLIST_KEY, &self.checklist),
            save_record(&mut self.store, PROJECT_KEY, &self.project),
            save_record(&mut self.store, CALCULATION_KEY, &self.calculation),
        ];
        for (key, result) in ALL_KEYS.iter().zip(results) {
            if let Err(e) = result {
                tracing::warn!(key, error = %e, "保存に失敗");
            }
        }
    }

    /// ステータスを1段進める
    pub fn cycle_status(&mut self, id: &str) -> Result<CheckStatus> {
        let item = self.item_mut(id)?;
        item.status = item.status.cycle();
        let status = item.status;
        self.persist();
        Ok(status)
    }

    /// 估價師備註を設定
    pub fn set_remark(&mut self, id: &str, remark: impl Into<String>) -> Result<()> {
        self.item_mut(id)?.remark = remark.into();
        self.persist();
        Ok(())
    }

    pub fn set_project_field(&mut self, field: ProjectField, value: impl Into<String>) {
        self.project.set(field, value.into());
        self.persist();
    }

    /// 数値欄を更新
    ///
    /// Invalidの場合は保存値を変えず、欄を無効として記録する。
    pub fn set_calc_field(&mut self, field: CalcField, input: NumericInput) {
        match input {
            NumericInput::Value(v) => {
                self.invalid_fields.remove(&field);
                self.calculation.set(field, v);
                self.persist();
            }
            NumericInput::Invalid => {
                self.invalid_fields.insert(field);
            }
        }
    }

    pub fn is_field_invalid(&self, field: CalcField) -> bool {
        self.invalid_fields.contains(&field)
    }

    /// 派生値。無効な入力欄がある間はNone
    pub fn analysis(&self) -> Option<Analysis> {
        if self.invalid_fields.is_empty() {
            Some(analyze(&self.calculation))
        } else {
            None
        }
    }

    pub fn stats(&self) -> ChecklistStats {
        ChecklistStats::of(&self.checklist)
    }

    /// 分類タブ一覧（先頭は「all」）
    pub fn tabs(&self) -> Vec<&'static str> {
        let mut tabs = vec![ALL_CATEGORIES];
        tabs.extend(categories());
        tabs
    }

    /// タブで絞り込んだ検核項目
    pub fn filtered(&self, tab: &str) -> Vec<&ChecklistItem> {
        self.checklist
            .iter()
            .filter(|i| tab == ALL_CATEGORIES || i.category == tab)
            .collect()
    }

    /// 全データを消去して既定値に戻す
    ///
    /// `confirmed` がfalseなら何もしない。
    pub fn reset(&mut self, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }

        for key in ALL_KEYS {
            if let Err(e) = self.store.remove(key) {
                tracing::warn!(key, error = %e, "削除に失敗");
            }
        }

        self.checklist = initial_checklist();
        self.project = ProjectInfo::default();
        self.calculation = CalculationData::default();
        self.invalid_fields.clear();
        self.persist();
        tracing::info!("專案資料を初期化");
        true
    }

    fn item_mut(&mut self, id: &str) -> Result<&mut ChecklistItem> {
        self.checklist
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| Error::UnknownItem(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;

    fn session() -> ReviewSession<MemoryStore> {
        ReviewSession::open(MemoryStore::new())
    }

    fn status_of(s: &ReviewSession<MemoryStore>, id: &str) -> CheckStatus {
        s.checklist().iter().find(|i| i.id == id).unwrap().status
    }

    #[test]
    fn test_open_empty_store_uses_defaults() {
        let s = session();
        assert_eq!(s.checklist(), initial_checklist().as_slice());
        assert_eq!(s.project(), &ProjectInfo::default());
        assert_eq!(s.calculation(), &CalculationData::default());
    }

    #[test]
    fn test_open_falls_back_per_record() {
        let mut store = MemoryStore::new();
        store.set(CHECKLIST_KEY, "garbage").unwrap();
        store
            .set(PROJECT_KEY, r#"{"caseName":"A案","caseNumber":"","appraiser":"","valuationDate":""}"#)
            .unwrap();

        let s = ReviewSession::open(store);
        assert_eq!(s.checklist().len(), 16);
        assert_eq!(s.project().case_name, "A案");
    }

    #[test]
    fn test_cycle_once_gives_passed() {
        let mut s = session();
        assert_eq!(s.cycle_status("f-1").unwrap(), CheckStatus::Passed);
        assert_eq!(status_of(&s, "f-1"), CheckStatus::Passed);
    }

    #[test]
    fn test_cycle_four_times_back_to_unchecked() {
        let mut s = session();
        for _ in 0..4 {
            s.cycle_status("l-4").unwrap();
        }
        assert_eq!(status_of(&s, "l-4"), CheckStatus::Unchecked);
    }

    #[test]
    fn test_cycle_does_not_touch_other_items() {
        let mut s = session();
        s.cycle_status("c-2").unwrap();
        let changed: Vec<&str> = s
            .checklist()
            .iter()
            .filter(|i| i.status != CheckStatus::Unchecked)
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(changed, vec!["c-2"]);
    }

    #[test]
    fn test_cycle_unknown_item() {
        let mut s = session();
        let err = s.cycle_status("zzz").unwrap_err();
        assert!(matches!(err, Error::UnknownItem(ref id) if id == "zzz"));
        // 永続化されない
        assert!(s.store().is_empty());
    }

    #[test]
    fn test_remark_unknown_item_is_error() {
        let mut s = session();
        let err = s.set_remark("zzz", "備註").unwrap_err();
        assert!(matches!(err, Error::UnknownItem(ref id) if id == "zzz"));
        assert!(s.checklist().iter().all(|i| i.remark.is_empty()));
        assert!(s.store().is_empty());
    }

    #[test]
    fn test_mutation_persists_all_records() {
        let mut s = session();
        s.set_remark("p-1", "送件日 113/02/01").unwrap();

        let store = s.into_store();
        assert_eq!(store.len(), 3);
        let reopened = ReviewSession::open(store);
        let item = reopened.checklist().iter().find(|i| i.id == "p-1").unwrap();
        assert_eq!(item.remark, "送件日 113/02/01");
    }

    #[test]
    fn test_round_trip_all_records() {
        let mut s = session();
        s.cycle_status("f-2").unwrap();
        s.cycle_status("f-2").unwrap();
        s.set_project_field(ProjectField::Appraiser, "林估價師");
        s.set_calc_field(CalcField::PostTotalSales, NumericInput::Value(1400.0));

        let checklist = s.checklist().to_vec();
        let project = s.project().clone();
        let calc = *s.calculation();

        let reopened = ReviewSession::open(s.into_store());
        assert_eq!(reopened.checklist(), checklist.as_slice());
        assert_eq!(reopened.project(), &project);
        assert_eq!(reopened.calculation(), &calc);
    }

    #[test]
    fn test_invalid_input_keeps_stored_value() {
        let mut s = session();
        s.set_calc_field(CalcField::PreTotalSales, NumericInput::Value(1000.0));
        s.set_calc_field(CalcField::PreTotalSales, NumericInput::Invalid);

        assert_eq!(s.calculation().pre_total_sales, 1000.0);
        assert!(s.is_field_invalid(CalcField::PreTotalSales));
        assert!(s.analysis().is_none());
    }

    #[test]
    fn test_valid_input_clears_invalid_mark() {
        let mut s = session();
        s.set_calc_field(CalcField::PreSalesArea, NumericInput::Invalid);
        s.set_calc_field(CalcField::PreSalesArea, NumericInput::parse("50"));

        assert!(!s.is_field_invalid(CalcField::PreSalesArea));
        assert!(s.analysis().is_some());
    }

    #[test]
    fn test_analysis_tracks_calculation() {
        let mut s = session();
        for (field, value) in [
            (CalcField::PreTotalSales, 1000.0),
            (CalcField::PreTotalCost, 600.0),
            (CalcField::PostTotalSales, 1400.0),
            (CalcField::PostTotalCost, 900.0),
        ] {
            s.set_calc_field(field, NumericInput::Value(value));
        }
        let a = s.analysis().unwrap();
        assert!(a.is_profit_valid);
        assert_eq!(a.delta_val, 100.0);
    }

    #[test]
    fn test_stats() {
        let mut s = session();
        s.cycle_status("f-1").unwrap(); // 符合
        s.cycle_status("f-2").unwrap();
        s.cycle_status("f-2").unwrap(); // 不符
        s.cycle_status("f-3").unwrap();
        s.cycle_status("f-3").unwrap();
        s.cycle_status("f-3").unwrap(); // N/A

        let stats = s.stats();
        assert_eq!(stats, ChecklistStats { total: 16, completed: 3, failed: 1 });
        assert!((stats.progress_percent() - 18.75).abs() < 1e-9);
    }

    #[test]
    fn test_progress_empty_checklist() {
        assert_eq!(ChecklistStats::of(&[]).progress_percent(), 0.0);
    }

    #[test]
    fn test_tabs_and_filter() {
        let s = session();
        assert_eq!(s.tabs()[0], ALL_CATEGORIES);
        assert_eq!(s.tabs().len(), 6);
        assert_eq!(s.filtered(ALL_CATEGORIES).len(), 16);
        assert_eq!(s.filtered("土地開發分析").len(), 5);
        assert_eq!(s.filtered("呈現次序").len(), 2);
        assert!(s.filtered("不存在").is_empty());
    }

    #[test]
    fn test_reset_without_confirmation_is_noop() {
        let mut s = session();
        s.cycle_status("f-1").unwrap();
        assert!(!s.reset(false));
        assert_eq!(status_of(&s, "f-1"), CheckStatus::Passed);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut s = session();
        s.cycle_status("f-1").unwrap();
        s.set_project_field(ProjectField::CaseName, "X");
        s.set_calc_field(CalcField::PreBuildingArea, NumericInput::Value(0.0));
        s.set_calc_field(CalcField::PostSalesArea, NumericInput::Invalid);

        assert!(s.reset(true));
        assert_eq!(s.checklist(), initial_checklist().as_slice());
        assert_eq!(s.project(), &ProjectInfo::default());
        assert_eq!(s.calculation(), &CalculationData::default());
        assert!(s.analysis().is_some());

        let reopened = ReviewSession::open(s.into_store());
        assert_eq!(reopened.calculation().pre_building_area, 1.0);
    }
}
