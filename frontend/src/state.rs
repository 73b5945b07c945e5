use assistant_ui::service::tab_controller::TabBinding;
use assistant_ui::{Assistant, ClientConfig, RenderedView, TabId, render};
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;

use crate::api::HttpAssistantApi;

/// Shared application state, provided via Leptos context.
///
/// The controllers own the view-model; every change is re-rendered into
/// `rendered`, which is all the components read.
#[derive(Clone, Copy)]
pub struct AppState {
    pub rendered: ReadSignal<RenderedView>,
    assistant: StoredValue<Assistant<HttpAssistantApi>, LocalStorage>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide(config: ClientConfig) -> Self {
        let assistant = Assistant::new(HttpAssistantApi::new(config));
        let (rendered, set_rendered) = signal(assistant.render());
        assistant
            .view()
            .subscribe(move |model| set_rendered.set(render(model)));

        let state = Self {
            rendered,
            assistant: StoredValue::new_local(assistant),
        };
        provide_context(state);
        state
    }

    pub fn tab_bindings(&self) -> Vec<(TabId, TabBinding)> {
        self.assistant.with_value(|a| a.tabs().bindings().to_vec())
    }

    pub fn switch_tab(&self, panel: &str) {
        self.assistant.with_value(|a| {
            if let Err(e) = a.tabs().switch_to_named(panel) {
                log::warn!("Ignoring tab click: {e}");
            }
        });
    }

    pub fn set_chat_input(&self, value: String) {
        self.assistant.with_value(|a| a.chat().set_input(value));
    }

    pub fn send_chat(&self) {
        let assistant = self.assistant.get_value();
        spawn_local(async move { assistant.chat().submit_input().await });
    }

    pub fn chat_key(&self, key: String) {
        let assistant = self.assistant.get_value();
        spawn_local(async move { assistant.chat().handle_key(&key).await });
    }

    pub fn set_topic(&self, value: String) {
        self.assistant.with_value(|a| a.generator().set_topic(value));
    }

    pub fn generate(&self) {
        let assistant = self.assistant.get_value();
        spawn_local(async move { assistant.generator().generate_from_input().await });
    }

    /// Blocking notifications queued by the controllers.
    pub fn take_notices(&self) -> Vec<String> {
        self.assistant.with_value(|a| a.view().take_notices())
    }
}
