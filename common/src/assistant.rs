//! AI法規顧問ゲートウェイ
//!
//! - TextGenerator: 外部生成APIの抽象（WASMはfetch、ネイティブはreqwest）
//! - ask: 固定プロンプトで1回だけ問い合わせる
//! - AssistantPanel: 表示欄と処理中フラグ。チケットが最新の応答だけ反映する

use crate::error::{Error, Result};
use crate::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::prompts::{
    build_question_prompt, EMPTY_RESULT_MESSAGE, FAILURE_MESSAGE, IDLE_HINT, PENDING_MESSAGE,
    SYSTEM_INSTRUCTION,
};
use async_trait::async_trait;

/// 接続設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl AssistantConfig {
    /// 空文字のキーは未設定扱い
    pub fn with_api_key(mut self, api_key: Option<&str>) -> Self {
        self.api_key = api_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);
        self
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(Error::MissingApiKey)
    }
}

/// 生成APIへの1リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantRequest {
    pub model: String,
    pub system_instruction: String,
    pub user_content: String,
}

impl AssistantRequest {
    pub fn for_question(model: &str, question: &str) -> Self {
        Self {
            model: model.to_string(),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            user_content: build_question_prompt(question),
        }
    }
}

/// 外部テキスト生成サービス
#[async_trait(?Send)]
pub trait TextGenerator {
    async fn generate(&self, request: &AssistantRequest) -> Result<String>;
}

/// 質問を1回送信する（リトライなし）
pub async fn ask<G>(generator: &G, model: &str, question: &str) -> Result<String>
where
    G: TextGenerator + ?Sized,
{
    let request = AssistantRequest::for_question(model, question);
    tracing::debug!(model, chars = request.user_content.chars().count(), "AI問い合わせ");
    generator.generate(&request).await
}

/// 問い合わせチケット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// 回答表示欄
#[derive(Debug, Clone, Default)]
pub struct AssistantPanel {
    display: Option<String>,
    busy: bool,
    latest: u64,
}

impl AssistantPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// 問い合わせ開始。処理中表示にしてチケットを発行
    pub fn begin(&mut self, question: &str) -> Result<Ticket> {
        if question.trim().is_empty() {
            return Err(Error::BlankQuestion);
        }
        self.latest += 1;
        self.busy = true;
        self.display = Some(PENDING_MESSAGE.to_string());
        Ok(Ticket(self.latest))
    }

    /// 応答を反映。古いチケットなら破棄してfalse
    pub fn finish(&mut self, ticket: Ticket, outcome: Result<String>) -> bool {
        if ticket.0 != self.latest {
            tracing::debug!(ticket = ticket.0, latest = self.latest, "古い応答を破棄");
            return false;
        }

        self.busy = false;
        let text = match outcome {
            Ok(text) if text.is_empty() => EMPTY_RESULT_MESSAGE.to_string(),
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "AI問い合わせ失敗");
                FAILURE_MESSAGE.to_string()
            }
        };
        self.display = Some(text);
        true
    }

    /// 初期表示に戻す。処理中の応答は古いチケット扱いになる
    pub fn reset(&mut self) {
        self.latest += 1;
        self.busy = false;
        self.display = None;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn has_result(&self) -> bool {
        self.display.is_some()
    }

    /// 表示テキスト（未使用ならヒント）
    pub fn display_text(&self) -> &str {
        self.display.as_deref().unwrap_or(IDLE_HINT)
    }
}
