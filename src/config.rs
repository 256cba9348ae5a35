use crate::error::{FarReviewError, Result};
use far_review_common::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};
use far_review_common::AssistantConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub timeout_seconds: u64,
    /// 保存先（省略時はOS標準のデータフォルダ）
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            api_base: DEFAULT_API_BASE.into(),
            timeout_seconds: 60,
            data_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FarReviewError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("far-review").join("config.json"))
    }

    /// 保存先フォルダ
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|d| d.join("far-review"))
            .ok_or_else(|| FarReviewError::DataDirNotFound("OS標準のデータフォルダ".into()))
    }

    pub fn get_api_key(&self) -> Result<String> {
        // 環境変数を優先
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }

        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(FarReviewError::MissingApiKey)
    }

    /// 共通ライブラリ向けの接続設定
    ///
    /// キー未設定でもエラーにせず、問い合わせ時の失敗として扱う。
    pub fn assistant_config(&self) -> AssistantConfig {
        let key = self.get_api_key().ok();
        AssistantConfig {
            model: self.model.clone(),
            api_base: self.api_base.clone(),
            ..AssistantConfig::default()
        }
        .with_api_key(key.as_deref())
    }
}
