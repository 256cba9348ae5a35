//! 永続化ポート
//!
//! ブラウザのlocalStorage、ネイティブのJSONファイル、テスト用メモリの
//! いずれも `KeyValueStore` を実装する。値はJSON文字列。

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

pub const CHECKLIST_KEY: &str = "valuation-checklist";
pub const PROJECT_KEY: &str = "valuation-project";
pub const CALCULATION_KEY: &str = "valuation-calc";

/// 永続化する全キー
pub const ALL_KEYS: [&str; 3] = [CHECKLIST_KEY, PROJECT_KEY, CALCULATION_KEY];

/// 文字列キー・文字列値のストア
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// 保存値を読み込み、無い・壊れている場合は既定値
pub fn load_or_default<T, S, F>(store: &S, key: &str, default: F) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
    F: FnOnce() -> T,
{
    let Some(raw) = store.get(key) else {
        return default();
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "保存データを読み込めないため既定値を使用");
            default()
        }
    }
}

/// JSONにシリアライズして保存
pub fn save_record<T, S>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

/// メモリ上のストア（テスト・一時利用）
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
