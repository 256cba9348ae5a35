//! Gemini API連携（fetch）

use async_trait::async_trait;
use far_review_common::{
    endpoint_url, AssistantConfig, AssistantRequest, Error, GeminiRequest, GeminiResponse, Result,
    TextGenerator,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// ブラウザのfetchで generateContent を呼ぶ
#[derive(Debug, Clone)]
pub struct FetchGenerator {
    config: AssistantConfig,
}

impl FetchGenerator {
    pub fn new(config: AssistantConfig) -> Self {
        Self { config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

/// リクエスト本文のJSON
pub fn request_body(request: &AssistantRequest) -> Result<String> {
    let body = GeminiRequest::new(&request.system_instruction, &request.user_content);
    Ok(serde_json::to_string(&body)?)
}

fn js_error(e: JsValue) -> Error {
    Error::Http(format!("{:?}", e))
}

#[async_trait(?Send)]
impl TextGenerator for FetchGenerator {
    async fn generate(&self, request: &AssistantRequest) -> Result<String> {
        let api_key = self.config.require_api_key()?;
        let url = endpoint_url(&self.config.api_base, &request.model, api_key);
        let body = request_body(request)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let req = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
        req.headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let window = web_sys::window().ok_or_else(|| Error::Http("window unavailable".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_error)?;

        if !resp.ok() {
            return Err(Error::Api { status: resp.status() });
        }

        let json = JsFuture::from(resp.json().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        let response: GeminiResponse =
            serde_wasm_bindgen::from_value(json).map_err(|e| Error::Http(e.to_string()))?;

        Ok(response.text())
    }
}
