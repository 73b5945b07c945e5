use crate::errors::AppError;
use crate::models::{ChatAnswer, ChatRequest, GenerationRequest, GenerationResponse};

/// The two backend calls the page makes.
///
/// Everything runs on one execution context, so the returned futures are
/// not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait AssistantApi {
    /// `POST /api/chat`
    async fn chat(&self, request: &ChatRequest) -> Result<ChatAnswer, AppError>;

    /// `POST /api/blog/generate`
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, AppError>;
}
