use crate::markup::Span;
use crate::models::{ChatEntry, MessageRole};
use crate::view::{GenerationPhase, TabId, ViewModel};

pub const USER_MESSAGE_CLASS: &str = "message user-msg";
pub const ASSISTANT_MESSAGE_CLASS: &str = "message ai-msg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTab {
    pub id: TabId,
    pub active: bool,
    pub panel_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub key: u64,
    pub class: &'static str,
    pub is_error: bool,
    /// Rendered as text nodes; strong spans get a `<strong>` wrapper.
    pub spans: Vec<Span>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChat {
    pub input: String,
    pub entries: Vec<RenderedEntry>,
    pub scroll_revision: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGenerator {
    pub topic: String,
    pub loading_visible: bool,
    pub button_disabled: bool,
    pub result_visible: bool,
    pub result: Option<Vec<Span>>,
}

/// What the DOM should look like for a given [`ViewModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub tabs: Vec<RenderedTab>,
    pub chat: RenderedChat,
    pub generator: RenderedGenerator,
}

impl RenderedView {
    pub fn active_tab(&self) -> Option<&RenderedTab> {
        self.tabs.iter().find(|t| t.active)
    }
}

/// Pure projection of the view-model; the frontend reconciles the DOM to it.
pub fn render(model: &ViewModel) -> RenderedView {
    let tabs = TabId::ALL
        .into_iter()
        .map(|id| {
            let active = model.tabs.active == id;
            RenderedTab {
                id,
                active,
                panel_visible: active,
            }
        })
        .collect();

    let entries = model.history.entries().iter().map(render_entry).collect();

    let generator = &model.generator;
    let phase = generator.phase();

    RenderedView {
        tabs,
        chat: RenderedChat {
            input: model.chat_input.clone(),
            entries,
            scroll_revision: model.scroll_revision,
        },
        generator: RenderedGenerator {
            topic: generator.topic.clone(),
            loading_visible: phase == GenerationPhase::Pending,
            button_disabled: phase == GenerationPhase::Pending,
            result_visible: phase == GenerationPhase::Showing,
            result: generator.result.as_ref().map(|r| r.content.spans().to_vec()),
        },
    }
}

fn render_entry(entry: &ChatEntry) -> RenderedEntry {
    match entry {
        ChatEntry::Message(message) => RenderedEntry {
            key: entry.id(),
            class: match message.role {
                MessageRole::User => USER_MESSAGE_CLASS,
                MessageRole::Assistant => ASSISTANT_MESSAGE_CLASS,
            },
            is_error: false,
            spans: message.content.spans().to_vec(),
        },
        ChatEntry::Error { notice, .. } => RenderedEntry {
            key: entry.id(),
            class: ASSISTANT_MESSAGE_CLASS,
            is_error: true,
            spans: vec![Span::Plain(notice.clone())],
        },
    }
}
