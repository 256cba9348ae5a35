use thiserror::Error;

#[derive(Error, Debug)]
pub enum FarReviewError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。GEMINI_API_KEY を設定するか設定ファイルに api_key を記載してください")]
    MissingApiKey,

    #[error("データフォルダが見つかりません: {0}")]
    DataDirNotFound(String),

    #[error("HTTPクライアント生成エラー: {0}")]
    HttpClient(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] far_review_common::Error),
}

pub type Result<T> = std::result::Result<T, FarReviewError>;
