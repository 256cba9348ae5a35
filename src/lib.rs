//! 容積代金估價報告檢核 ネイティブ実装
//!
//! 共通ライブラリのポートをネイティブ環境で実装する:
//! - FileStore: JSONファイル保存
//! - HttpGenerator: reqwest による Gemini 呼び出し
//! - Config: ~/.config/far-review/config.json と環境変数

pub mod config;
pub mod error;
pub mod file_store;
pub mod gemini;
pub mod logging;

pub use config::Config;
pub use error::{FarReviewError, Result};
pub use file_store::FileStore;
pub use gemini::HttpGenerator;

use far_review_common::ReviewSession;

/// ファイル保存の検核セッションを開く
pub fn open_session(config: &Config) -> Result<ReviewSession<FileStore>> {
    let store = FileStore::open(config.resolve_data_dir()?)?;
    tracing::info!(dir = %store.dir().display(), "檢核資料を読み込み");
    Ok(ReviewSession::open(store))
}
