use assistant_ui::markup::Span;
use leptos::prelude::*;

/// Emphasis spans as text nodes; only `<strong>` is added around bold runs.
#[component]
pub fn Spans(spans: Vec<Span>) -> impl IntoView {
    spans
        .into_iter()
        .map(|span| match span {
            Span::Plain(text) => text.into_any(),
            Span::Strong(text) => view! { <strong>{text}</strong> }.into_any(),
        })
        .collect_view()
}
