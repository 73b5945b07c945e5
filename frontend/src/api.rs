use assistant_ui::models::{ChatAnswer, ChatRequest, GenerationRequest, GenerationResponse};
use assistant_ui::{AppError, AssistantApi, ClientConfig};
use gloo_net::http::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Talks to the backend over `fetch`.
pub struct HttpAssistantApi {
    config: ClientConfig,
}

impl HttpAssistantApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

/// POSTs `body` as JSON and decodes a JSON response.
async fn post_json<B: Serialize, R: DeserializeOwned>(url: &str, body: &B) -> Result<R, AppError> {
    let resp = Request::post(url)
        .json(body)
        .map_err(|e| AppError::Encode { message: e.to_string() })?
        .send()
        .await
        .map_err(|e| AppError::network(e.to_string()))?;

    if !resp.ok() {
        return Err(AppError::ServerStatus { status: resp.status() });
    }

    resp.json::<R>().await.map_err(|e| AppError::decode(e.to_string()))
}

impl AssistantApi for HttpAssistantApi {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatAnswer, AppError> {
        post_json(&self.config.chat_url(), request).await
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, AppError> {
        post_json(&self.config.generate_url(), request).await
    }
}
