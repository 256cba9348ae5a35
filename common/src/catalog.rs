//! 検核項目の初期カタログ
//!
//! 臺北市容積代金估價報告（113年修正版範本）の自主検核表。
//! 参照専用データで、実行時に項目の追加・削除は行わない。

use crate::types::{CheckStatus, ChecklistItem};

/// 地下室開挖率の縮減幅上限（%）。参照値のみで判定には使わない
pub const EXCAVATION_REDUCTION_LIMIT_PCT: f64 = 10.0;

/// (id, 分類, 標題, 說明)
pub const SEED_CATALOG: &[(&str, &str, &str, &str)] = &[
    // 版面格式
    ("f-1", "版面格式", "字體規範", "內文14號字、表格10號字以上。"),
    ("f-2", "版面格式", "面積取位", "土地面積m2取2位/坪取4位；建物取2位。"),
    ("f-3", "版面格式", "金額進位", "單價取至千位、總價取至個位。採四捨五入。"),
    // 呈現次序
    ("o-1", "呈現次序", "附件排序", "調整表->專案意見->公會意見->自主檢核->摘要表。"),
    ("o-2", "呈現次序", "版本標註", "初審版/修正版/審議會版標註是否正確。"),
    // 估價前提
    ("p-1", "估價前提", "價格日期", "應為「都市設計審議送件日」。"),
    ("p-2", "估價前提", "勘察日期", "應在價格日期之前，且具時效性。"),
    ("p-3", "估價前提", "實設容積", "土開法面積應採「實設容積」而非基準容積。"),
    // 比較法
    ("c-1", "比較法", "案例屋齡", "應採3年內新成屋，若無則須說明。"),
    ("c-2", "比較法", "成交日期", "應在價格日期前後1年內。"),
    ("c-3", "比較法", "車位拆算", "車位價格應與市場行情一致且單獨列示。"),
    // 土地開發分析法（重点）
    ("l-1", "土地開發分析", "開挖率限制", "地下室開挖率縮減幅度以10%為限(如70%->63%)。"),
    ("l-2", "土地開發分析", "利潤率", "113年常見規範：通常不得超過15%或依審議決定。"),
    ("l-3", "土地開發分析", "營造單價", "應參考台北市營造工料標準並考慮物價指數調整。"),
    ("l-4", "土地開發分析", "銷坪比一致性", "容移前後銷坪比原則應一致，如有變動須詳述理由。"),
    ("l-5", "土地開發分析", "邏輯合理性", "[增量銷售 - 增量成本] > 0。"),
];

/// 初期状態（全項目が未檢）の検核表を生成
pub fn initial_checklist() -> Vec<ChecklistItem> {
    SEED_CATALOG
        .iter()
        .map(|(id, category, title, description)| ChecklistItem {
            id: id.to_string(),
            category: category.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            status: CheckStatus::Unchecked,
            remark: String::new(),
        })
        .collect()
}

/// 分類一覧（カタログ順、重複なし）
pub fn categories() -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for (_, category, _, _) in SEED_CATALOG {
        if !seen.contains(category) {
            seen.push(category);
        }
    }
    seen
}
