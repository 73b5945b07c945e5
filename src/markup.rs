//! The one rich-text rule the page supports: `**X**` becomes bold.
//!
//! Backend text is untrusted. It is only split into spans here; the view
//! renders every span as a text node, so no backend markup reaches the page.

use std::sync::LazyLock;

use regex::Regex;

/// A pair never spans a line terminator (`\n`, `\r`, U+2028, U+2029).
static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*([^\n\r\x{2028}\x{2029}]*?)\*\*").expect("emphasis pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Strong(String),
}

/// A run of spans ready to be rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    spans: Vec<Span>,
}

impl Markup {
    /// Text shown verbatim, with no emphasis processing.
    pub fn plain(text: impl Into<String>) -> Self {
        Self { spans: vec![Span::Plain(text.into())] }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }
}

/// Applies the emphasis rule: every non-greedy `**X**` pair, scanned first to
/// last, becomes a strong span. Unpaired markers stay in the plain text.
pub fn emphasize(text: &str) -> Markup {
    let mut spans = Vec::new();
    let mut last = 0;
    for caps in EMPHASIS.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            spans.push(Span::Plain(text[last..whole.start()].to_string()));
        }
        spans.push(Span::Strong(inner.as_str().to_string()));
        last = whole.end();
    }
    if last < text.len() || spans.is_empty() {
        spans.push(Span::Plain(text[last..].to_string()));
    }
    Markup { spans }
}
