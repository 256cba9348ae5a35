//! 核心數值與邏輯檢核
//!
//! CalculationDataから2つの整合性判定を算出する純粋関数群:
//! - 増量収益ロジック: 増量銷售 > 増量成本
//! - 銷坪比一致性: 容移前後の銷坪比の差が0.1ポイント未満

use crate::types::CalculationData;

/// 銷坪比一致とみなす差の上限（パーセントポイント）
pub const RATIO_TOLERANCE_PCT: f64 = 0.1;

/// 派生値（永続化しない）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    pub delta_sales: f64,
    pub delta_cost: f64,
    /// 増量銷售 − 増量成本（符号付き、丸めなし）
    pub delta_val: f64,
    pub is_profit_valid: bool,
    pub pre_ratio: f64,
    pub post_ratio: f64,
    pub ratio_diff: f64,
    pub is_ratio_consistent: bool,
}

impl Analysis {
    pub fn pre_ratio_display(&self) -> String {
        format_ratio(self.pre_ratio)
    }

    pub fn post_ratio_display(&self) -> String {
        format_ratio(self.post_ratio)
    }
}

/// 既定の許容差で算出
pub fn analyze(calc: &CalculationData) -> Analysis {
    analyze_with_tolerance(calc, RATIO_TOLERANCE_PCT)
}

pub fn analyze_with_tolerance(calc: &CalculationData, tolerance: f64) -> Analysis {
    let delta_sales = calc.post_total_sales - calc.pre_total_sales;
    let delta_cost = calc.post_total_cost - calc.pre_total_cost;
    let pre_ratio = sales_ratio(calc.pre_sales_area, calc.pre_building_area);
    let post_ratio = sales_ratio(calc.post_sales_area, calc.post_building_area);
    let ratio_diff = (pre_ratio - post_ratio).abs();

    Analysis {
        delta_sales,
        delta_cost,
        delta_val: delta_sales - delta_cost,
        is_profit_valid: delta_sales > delta_cost,
        pre_ratio,
        post_ratio,
        ratio_diff,
        is_ratio_consistent: ratio_diff < tolerance,
    }
}

/// 銷坪比（%）。建物面積が0の場合は1で割る
pub fn sales_ratio(sales_area: f64, building_area: f64) -> f64 {
    sales_area / area_guard(building_area) * 100.0
}

fn area_guard(building_area: f64) -> f64 {
    if building_area == 0.0 || building_area.is_nan() {
        1.0
    } else {
        building_area
    }
}

/// 小数2桁表示。ちょうど半分は切り上げ
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.2}", (ratio * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc() -> CalculationData {
        CalculationData::default()
    }

    #[test]
    fn test_profit_valid_example() {
        let data = CalculationData {
            pre_total_sales: 1000.0,
            pre_total_cost: 600.0,
            post_total_sales: 1400.0,
            post_total_cost: 900.0,
            ..calc()
        };
        let a = analyze(&data);
        assert_eq!(a.delta_sales, 400.0);
        assert_eq!(a.delta_cost, 300.0);
        assert_eq!(a.delta_val, 100.0);
        assert!(a.is_profit_valid);
    }

    #[test]
    fn test_profit_invalid_when_cost_grows_faster() {
        let data = CalculationData {
            pre_total_sales: 1000.0,
            pre_total_cost: 600.0,
            post_total_sales: 1100.0,
            post_total_cost: 900.0,
            ..calc()
        };
        let a = analyze(&data);
        assert!(!a.is_profit_valid);
        assert_eq!(a.delta_val, -200.0);
    }

    #[test]
    fn test_profit_equal_deltas_is_invalid() {
        // 厳密な「>」判定
        let data = CalculationData {
            post_total_sales: 300.0,
            post_total_cost: 300.0,
            ..calc()
        };
        assert!(!analyze(&data).is_profit_valid);
    }

    #[test]
    fn test_profit_valid_iff_delta_sales_exceeds_delta_cost() {
        let samples = [
            (0.0, 0.0, 0.0, 0.0),
            (10.0, 5.0, 20.0, 14.0),
            (10.0, 5.0, 20.0, 15.0),
            (10.0, 5.0, 20.0, 16.0),
            (500.0, 100.0, 400.0, 50.0),
        ];
        for (pre_s, pre_c, post_s, post_c) in samples {
            let data = CalculationData {
                pre_total_sales: pre_s,
                pre_total_cost: pre_c,
                post_total_sales: post_s,
                post_total_cost: post_c,
                ..calc()
            };
            let expected = (post_s - pre_s) > (post_c - pre_c);
            assert_eq!(analyze(&data).is_profit_valid, expected);
        }
    }

    #[test]
    fn test_ratio_inconsistent_example() {
        let data = CalculationData {
            pre_sales_area: 50.0,
            pre_building_area: 100.0,
            post_sales_area: 48.0,
            post_building_area: 100.0,
            ..calc()
        };
        let a = analyze(&data);
        assert_eq!(a.pre_ratio_display(), "50.00");
        assert_eq!(a.post_ratio_display(), "48.00");
        assert!((a.ratio_diff - 2.0).abs() < 1e-9);
        assert!(!a.is_ratio_consistent);
    }

    #[test]
    fn test_ratio_consistent_within_tolerance() {
        let data = CalculationData {
            pre_sales_area: 5000.0,
            pre_building_area: 10000.0,
            post_sales_area: 5504.0,
            post_building_area: 11000.0,
            ..calc()
        };
        let a = analyze(&data);
        // 50.00% → 50.036...%
        assert!(a.ratio_diff < RATIO_TOLERANCE_PCT);
        assert!(a.is_ratio_consistent);
        assert_eq!(a.post_ratio_display(), "50.04");
    }

    #[test]
    fn test_zero_building_area_is_guarded() {
        let data = CalculationData {
            pre_sales_area: 30.0,
            pre_building_area: 0.0,
            post_sales_area: 0.0,
            post_building_area: 0.0,
            ..calc()
        };
        let a = analyze(&data);
        assert_eq!(a.pre_ratio, 3000.0);
        assert_eq!(a.post_ratio, 0.0);
        assert!(a.pre_ratio.is_finite());
        assert!(a.post_ratio.is_finite());
    }

    #[test]
    fn test_ratios_always_finite() {
        let areas = [0.0, 1.0, 0.5, 100.0, 12345.678];
        for sales in areas {
            for building in areas {
                assert!(sales_ratio(sales, building).is_finite());
            }
        }
    }

    #[test]
    fn test_default_record_is_consistent_and_not_profitable() {
        let a = analyze(&calc());
        assert_eq!(a.pre_ratio, 0.0);
        assert!(a.is_ratio_consistent);
        assert!(!a.is_profit_valid);
    }

    #[test]
    fn test_custom_tolerance() {
        let data = CalculationData {
            pre_sales_area: 50.0,
            pre_building_area: 100.0,
            post_sales_area: 48.0,
            post_building_area: 100.0,
            ..calc()
        };
        assert!(analyze_with_tolerance(&data, 2.5).is_ratio_consistent);
        assert!(!analyze_with_tolerance(&data, 2.0).is_ratio_consistent);
    }

    #[test]
    fn test_format_ratio_rounds_two_decimals() {
        assert_eq!(format_ratio(66.666666), "66.67");
        assert_eq!(format_ratio(0.0), "0.00");
    }

    #[test]
    fn test_ratio_display_rounds_half_up() {
        let data = CalculationData {
            pre_sales_area: 1.0,
            pre_building_area: 800.0,
            post_sales_area: 97.0,
            post_building_area: 800.0,
            ..calc()
        };
        let a = analyze(&data);
        assert_eq!(a.pre_ratio_display(), "0.13");
        assert_eq!(a.post_ratio_display(), "12.13");
    }
}
