//! tracing サブスクライバの初期化

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "far_review=info,far_review_common=info";

/// RUST_LOG があればそれを使う。二度目以降の呼び出しは無視
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
