pub mod render;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::markup::Markup;
use crate::models::{ChatEntry, GenerationResult, Message, MessageRole};

// ── Element binding contract ──────────────────────────────────────────────────

pub const CHAT_INPUT_ID: &str = "chat-input";
pub const CHAT_HISTORY_ID: &str = "chat-history";
pub const BLOG_TOPIC_ID: &str = "blog-topic";
pub const BLOG_RESULT_ID: &str = "blog-result";
pub const BLOG_LOADING_ID: &str = "blog-loading";
pub const GENERATE_BUTTON_ID: &str = "generate-btn";

// ── Tabs ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Chat,
    Blog,
}

impl TabId {
    pub const ALL: [TabId; 2] = [TabId::Chat, TabId::Blog];

    /// The panel element id.
    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::Chat => "chat",
            TabId::Blog => "blog",
        }
    }

    /// The element id of the clickable tab bound to this panel.
    pub fn affordance_id(&self) -> &'static str {
        match self {
            TabId::Chat => "tab-chat",
            TabId::Blog => "tab-blog",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TabId::Chat => "Travel Assistant",
            TabId::Blog => "Blog Generator",
        }
    }
}

/// Exactly one tab is active; its affordance and panel are derived from the
/// same field and cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    pub active: TabId,
}

impl Default for TabState {
    fn default() -> Self {
        Self { active: TabId::Chat }
    }
}

// ── Conversation ──────────────────────────────────────────────────────────────

/// Append-only chat log for the lifetime of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationHistory {
    entries: Vec<ChatEntry>,
}

impl ConversationHistory {
    /// Every rendered entry, error notices included, in append order.
    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    /// Conversation turns only.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter().filter_map(ChatEntry::as_message)
    }

    pub fn len(&self) -> usize {
        self.messages().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, entry: ChatEntry) {
        self.entries.push(entry);
    }
}

// ── Generator ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    Idle,
    Showing,
    Pending,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorState {
    pub topic: String,
    pub pending: bool,
    pub result: Option<GenerationResult>,
    pub result_visible: bool,
}

impl GeneratorState {
    pub fn phase(&self) -> GenerationPhase {
        if self.pending {
            GenerationPhase::Pending
        } else if self.result_visible && self.result.is_some() {
            GenerationPhase::Showing
        } else {
            GenerationPhase::Idle
        }
    }
}

// ── View-model ────────────────────────────────────────────────────────────────

/// Everything the page displays. Controllers mutate it through [`View`];
/// [`render::render`] turns it into what the DOM should show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModel {
    pub tabs: TabState,
    pub chat_input: String,
    pub history: ConversationHistory,
    /// Bumped whenever a message is appended; the log then scrolls to its end.
    /// Error notices do not scroll.
    pub scroll_revision: u64,
    pub generator: GeneratorState,
    /// Blocking notifications waiting to be shown.
    pub notices: VecDeque<String>,
    next_entry_id: u64,
}

impl ViewModel {
    pub fn append_message(&mut self, role: MessageRole, content: Markup) {
        let id = self.next_id();
        self.history.push(ChatEntry::Message(Message { id, role, content }));
        self.scroll_revision += 1;
    }

    pub fn append_error(&mut self, notice: impl Into<String>) {
        let id = self.next_id();
        self.history.push(ChatEntry::Error { id, notice: notice.into() });
    }

    fn next_id(&mut self) -> u64 {
        self.next_entry_id += 1;
        self.next_entry_id
    }
}

type Listener = Rc<dyn Fn(&ViewModel)>;

/// Shared handle to the page's single [`ViewModel`].
///
/// Cloning is cheap. Never keep a borrow across an `.await`; every mutation
/// goes through one synchronous [`View::update`].
#[derive(Clone, Default)]
pub struct View {
    model: Rc<RefCell<ViewModel>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut ViewModel) -> R) -> R {
        let out = f(&mut self.model.borrow_mut());
        self.notify();
        out
    }

    pub fn read<R>(&self, f: impl FnOnce(&ViewModel) -> R) -> R {
        f(&self.model.borrow())
    }

    pub fn snapshot(&self) -> ViewModel {
        self.model.borrow().clone()
    }

    /// Registers a listener called with a snapshot after every update.
    pub fn subscribe(&self, listener: impl Fn(&ViewModel) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Drains queued notifications, oldest first.
    pub fn take_notices(&self) -> Vec<String> {
        let drained: Vec<String> = self.model.borrow_mut().notices.drain(..).collect();
        if !drained.is_empty() {
            self.notify();
        }
        drained
    }

    fn notify(&self) {
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        if listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

impl std::fmt::Debug for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View")
            .field("model", &self.model.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}
