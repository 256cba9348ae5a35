//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unknown checklist item: {0}")]
    UnknownItem(String),

    #[error("API key is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error: {status}")]
    Api { status: u16 },

    #[error("Question is blank")]
    BlankQuestion,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_storage() {
        let error = Error::Storage("QuotaExceededError".to_string());
        assert_eq!(format!("{}", error), "Storage error: QuotaExceededError");
    }

    #[test]
    fn test_error_display_api_status() {
        let error = Error::Api { status: 403 };
        assert_eq!(format!("{}", error), "API error: 403");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug_unknown_item() {
        let error = Error::UnknownItem("x-9".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnknownItem"));
        assert!(debug.contains("x-9"));
    }
}
