use std::rc::Rc;

use tracing::{debug, error};

use crate::api::AssistantApi;
use crate::markup::{emphasize, Markup};
use crate::models::{ChatRequest, MessageRole};
use crate::view::View;

pub const CHAT_ERROR_NOTICE: &str = "Error: Could not reach the server.";

/// Drives the turn-by-turn chat.
///
/// There is no in-flight tracking: overlapping submits each append their
/// user message immediately and their reply whenever it settles.
pub struct ChatSession<A> {
    api: Rc<A>,
    view: View,
}

impl<A> Clone for ChatSession<A> {
    fn clone(&self) -> Self {
        Self { api: self.api.clone(), view: self.view.clone() }
    }
}

impl<A: AssistantApi> ChatSession<A> {
    pub fn new(api: Rc<A>, view: View) -> Self {
        Self { api, view }
    }

    /// Mirrors the input control.
    pub fn set_input(&self, value: impl Into<String>) {
        let value = value.into();
        self.view.update(|m| m.chat_input = value);
    }

    /// Submits on Enter. Modifier keys are not distinguished.
    pub async fn handle_key(&self, key: &str) {
        if key == "Enter" {
            self.submit_input().await;
        }
    }

    /// Submits whatever is in the input control.
    pub async fn submit_input(&self) {
        let text = self.view.read(|m| m.chat_input.clone());
        self.submit(&text).await;
    }

    pub async fn submit(&self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        // ── User turn, before the request goes out ────────────────────────────
        self.view.update(|m| {
            m.append_message(MessageRole::User, Markup::plain(text));
            m.chat_input.clear();
        });

        let request = ChatRequest { query: text.to_string() };
        debug!("Sending chat query ({} chars)", request.query.len());

        // ── Assistant turn, in completion order ───────────────────────────────
        match self.api.chat(&request).await {
            Ok(reply) => {
                let content = emphasize(&reply.answer);
                self.view.update(|m| m.append_message(MessageRole::Assistant, content));
            }
            Err(e) => {
                error!("Chat request failed: {e}");
                self.view.update(|m| m.append_error(CHAT_ERROR_NOTICE));
            }
        }
    }
}
