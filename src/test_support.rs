use std::cell::RefCell;
use std::collections::VecDeque;

use tokio::sync::oneshot;

use crate::api::AssistantApi;
use crate::errors::AppError;
use crate::models::{ChatAnswer, ChatRequest, GenerationRequest, GenerationResponse};
use crate::view::View;

type Reply<T> = oneshot::Receiver<Result<T, AppError>>;

/// Fake backend whose replies are released by the test, one channel per call.
#[derive(Default)]
pub struct ScriptedApi {
    chat_replies: RefCell<VecDeque<Reply<ChatAnswer>>>,
    generate_replies: RefCell<VecDeque<Reply<GenerationResponse>>>,
    pub chat_requests: RefCell<Vec<ChatRequest>>,
    pub generate_requests: RefCell<Vec<GenerationRequest>>,
    observed: RefCell<Option<View>>,
    /// Conversation length seen as each chat request was issued.
    pub history_at_chat_call: RefCell<Vec<usize>>,
    /// Pending flag seen as each generate request was issued.
    pub pending_at_generate_call: RefCell<Vec<bool>>,
}

impl ScriptedApi {
    /// Snapshots `view` whenever a request is issued.
    pub fn observe(&self, view: View) {
        *self.observed.borrow_mut() = Some(view);
    }

    /// Queues a chat reply slot; send on the returned sender to settle it.
    pub fn expect_chat(&self) -> oneshot::Sender<Result<ChatAnswer, AppError>> {
        let (tx, rx) = oneshot::channel();
        self.chat_replies.borrow_mut().push_back(rx);
        tx
    }

    pub fn expect_generate(&self) -> oneshot::Sender<Result<GenerationResponse, AppError>> {
        let (tx, rx) = oneshot::channel();
        self.generate_replies.borrow_mut().push_back(rx);
        tx
    }

    pub fn chat_answer(&self, answer: &str) {
        let _ = self.expect_chat().send(Ok(ChatAnswer { answer: answer.to_string() }));
    }

    pub fn chat_failure(&self, err: AppError) {
        let _ = self.expect_chat().send(Err(err));
    }

    pub fn generated(&self, content: &str) {
        let _ = self
            .expect_generate()
            .send(Ok(GenerationResponse { content: content.to_string() }));
    }

    pub fn generate_failure(&self, err: AppError) {
        let _ = self.expect_generate().send(Err(err));
    }
}

impl AssistantApi for ScriptedApi {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatAnswer, AppError> {
        self.chat_requests.borrow_mut().push(request.clone());
        if let Some(view) = self.observed.borrow().as_ref() {
            self.history_at_chat_call.borrow_mut().push(view.read(|m| m.history.len()));
        }
        let reply = self.chat_replies.borrow_mut().pop_front();
        match reply {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(AppError::network("reply dropped"))),
            None => Err(AppError::network("no scripted chat reply")),
        }
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, AppError> {
        self.generate_requests.borrow_mut().push(request.clone());
        if let Some(view) = self.observed.borrow().as_ref() {
            self.pending_at_generate_call.borrow_mut().push(view.read(|m| m.generator.pending));
        }
        let reply = self.generate_replies.borrow_mut().pop_front();
        match reply {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(AppError::network("reply dropped"))),
            None => Err(AppError::network("no scripted generate reply")),
        }
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "assistant_ui=debug".into()),
        )
        .with_test_writer()
        .try_init();
}
