//! 数値入力の検証

/// 入力欄の解析結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericInput {
    Value(f64),
    Invalid,
}

impl NumericInput {
    /// 入力文字列を解析
    ///
    /// 空欄は0。数値でない・有限でない・負の値はInvalid。
    /// 桁区切りのカンマは許容する（例: "1,200,000"）。
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return NumericInput::Value(0.0);
        }

        let normalized: String = trimmed.chars().filter(|c| *c != ',').collect();
        match normalized.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => NumericInput::Value(v),
            _ => NumericInput::Invalid,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            NumericInput::Value(v) => Some(*v),
            NumericInput::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, NumericInput::Value(_))
    }
}
