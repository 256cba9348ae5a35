//! 検核データの型定義
//!
//! Web(WASM)とネイティブで共有される永続化レコード:
//! - ChecklistItem: 検核項目（状態と備考のみ可変）
//! - ProjectInfo: 案件情報フォーム
//! - CalculationData: 容積移転前後の数値モデル
//!
//! JSONのフィールド名は既存のブラウザ保存データと互換のcamelCase。

use serde::{Deserialize, Serialize};

/// 検核結果ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    #[default]
    Unchecked,
    Passed,
    Failed,
    #[serde(rename = "NA")]
    NotApplicable,
}

impl CheckStatus {
    /// 循環順序: 未檢 → 符合 → 不符 → N/A → 未檢
    pub const CYCLE: [CheckStatus; 4] = [
        CheckStatus::Unchecked,
        CheckStatus::Passed,
        CheckStatus::Failed,
        CheckStatus::NotApplicable,
    ];

    /// 次のステータス
    pub fn cycle(self) -> Self {
        match self {
            CheckStatus::Unchecked => CheckStatus::Passed,
            CheckStatus::Passed => CheckStatus::Failed,
            CheckStatus::Failed => CheckStatus::NotApplicable,
            CheckStatus::NotApplicable => CheckStatus::Unchecked,
        }
    }

    /// 画面表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Unchecked => "未檢",
            CheckStatus::Passed => "符合",
            CheckStatus::Failed => "不符",
            CheckStatus::NotApplicable => "N/A",
        }
    }

    /// CSSクラス名
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Unchecked => "unchecked",
            CheckStatus::Passed => "passed",
            CheckStatus::Failed => "failed",
            CheckStatus::NotApplicable => "na",
        }
    }
}

/// 検核項目
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChecklistItem {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub status: CheckStatus,
    pub remark: String,
}

/// 案件情報
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectInfo {
    pub case_name: String,    // 案件名稱
    pub case_number: String,  // 案號
    pub appraiser: String,    // 主辦估價師
    pub valuation_date: String, // 價格日期
}

/// 案件情報の入力欄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    CaseName,
    CaseNumber,
    Appraiser,
    ValuationDate,
}

impl ProjectField {
    pub const ALL: [ProjectField; 4] = [
        ProjectField::CaseName,
        ProjectField::CaseNumber,
        ProjectField::Appraiser,
        ProjectField::ValuationDate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectField::CaseName => "案件名稱",
            ProjectField::CaseNumber => "案號",
            ProjectField::Appraiser => "主辦估價師",
            ProjectField::ValuationDate => "價格日期",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ProjectField::CaseName => "例如：臺北市XX區XX段...",
            ProjectField::CaseNumber => "113-XXX-001",
            ProjectField::Appraiser => "",
            ProjectField::ValuationDate => "113/01/01",
        }
    }
}

impl ProjectInfo {
    pub fn get(&self, field: ProjectField) -> &str {
        match field {
            ProjectField::CaseName => &self.case_name,
            ProjectField::CaseNumber => &self.case_number,
            ProjectField::Appraiser => &self.appraiser,
            ProjectField::ValuationDate => &self.valuation_date,
        }
    }

    pub fn set(&mut self, field: ProjectField, value: String) {
        match field {
            ProjectField::CaseName => self.case_name = value,
            ProjectField::CaseNumber => self.case_number = value,
            ProjectField::Appraiser => self.appraiser = value,
            ProjectField::ValuationDate => self.valuation_date = value,
        }
    }
}

/// 容積移転前後の数値モデル
///
/// 建物面積は銷坪比の除算ガードとして既定値1。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculationData {
    pub pre_total_sales: f64,    // 容移前 總銷售額
    pub post_total_sales: f64,   // 容移後 總銷售額
    pub pre_total_cost: f64,     // 容移前 總造價
    pub post_total_cost: f64,    // 容移後 總造價
    pub pre_building_area: f64,  // 容移前 總建物面積
    pub post_building_area: f64, // 容移後 總建物面積
    pub pre_sales_area: f64,     // 容移前 總銷售面積
    pub post_sales_area: f64,    // 容移後 總銷售面積
}

impl Default for CalculationData {
    fn default() -> Self {
        Self {
            pre_total_sales: 0.0,
            post_total_sales: 0.0,
            pre_total_cost: 0.0,
            post_total_cost: 0.0,
            pre_building_area: 1.0,
            post_building_area: 1.0,
            pre_sales_area: 0.0,
            post_sales_area: 0.0,
        }
    }
}

/// 数値モデルの入力欄
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CalcField {
    PreTotalSales,
    PostTotalSales,
    PreTotalCost,
    PostTotalCost,
    PreBuildingArea,
    PostBuildingArea,
    PreSalesArea,
    PostSalesArea,
}

impl CalcField {
    pub const ALL: [CalcField; 8] = [
        CalcField::PreTotalSales,
        CalcField::PostTotalSales,
        CalcField::PreTotalCost,
        CalcField::PostTotalCost,
        CalcField::PreBuildingArea,
        CalcField::PostBuildingArea,
        CalcField::PreSalesArea,
        CalcField::PostSalesArea,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CalcField::PreTotalSales | CalcField::PostTotalSales => "總銷售額",
            CalcField::PreTotalCost | CalcField::PostTotalCost => "總造價",
            CalcField::PreBuildingArea | CalcField::PostBuildingArea => "建",
            CalcField::PreSalesArea | CalcField::PostSalesArea => "銷",
        }
    }
}

impl CalculationData {
    pub fn get(&self, field: CalcField) -> f64 {
        match field {
            CalcField::PreTotalSales => self.pre_total_sales,
            CalcField::PostTotalSales => self.post_total_sales,
            CalcField::PreTotalCost => self.pre_total_cost,
            CalcField::PostTotalCost => self.post_total_cost,
            CalcField::PreBuildingArea => self.pre_building_area,
            CalcField::PostBuildingArea => self.post_building_area,
            CalcField::PreSalesArea => self.pre_sales_area,
            CalcField::PostSalesArea => self.post_sales_area,
        }
    }

    pub fn set(&mut self, field: CalcField, value: f64) {
        let slot = match field {
            CalcField::PreTotalSales => &mut self.pre_total_sales,
            CalcField::PostTotalSales => &mut self.post_total_sales,
            CalcField::PreTotalCost => &mut self.pre_total_cost,
            CalcField::PostTotalCost => &mut self.post_total_cost,
            CalcField::PreBuildingArea => &mut self.pre_building_area,
            CalcField::PostBuildingArea => &mut self.post_building_area,
            CalcField::PreSalesArea => &mut self.pre_sales_area,
            CalcField::PostSalesArea => &mut self.post_sales_area,
        };
        *slot = value;
    }
}
