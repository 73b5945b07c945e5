pub mod chat_session;
pub mod content_generator;
pub mod tab_controller;

use std::rc::Rc;

use crate::api::AssistantApi;
use crate::view::render::{render, RenderedView};
use crate::view::View;

use self::chat_session::ChatSession;
use self::content_generator::ContentGenerator;
use self::tab_controller::TabController;

/// The three controllers wired over one shared view and one backend.
pub struct Assistant<A> {
    view: View,
    tabs: TabController,
    chat: ChatSession<A>,
    generator: ContentGenerator<A>,
}

impl<A: AssistantApi> Assistant<A> {
    pub fn new(api: A) -> Self {
        let api = Rc::new(api);
        let view = View::new();
        Self {
            tabs: TabController::new(view.clone()),
            chat: ChatSession::new(api.clone(), view.clone()),
            generator: ContentGenerator::new(api, view.clone()),
            view,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn tabs(&self) -> &TabController {
        &self.tabs
    }

    pub fn chat(&self) -> &ChatSession<A> {
        &self.chat
    }

    pub fn generator(&self) -> &ContentGenerator<A> {
        &self.generator
    }

    pub fn render(&self) -> RenderedView {
        self.view.read(render)
    }
}

impl<A> Clone for Assistant<A> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            tabs: self.tabs.clone(),
            chat: self.chat.clone(),
            generator: self.generator.clone(),
        }
    }
}
