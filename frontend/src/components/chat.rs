use assistant_ui::TabId;
use assistant_ui::view::{CHAT_HISTORY_ID, CHAT_INPUT_ID};
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;

use crate::components::markup::Spans;
use crate::components::tabs::panel_visible;
use crate::state::AppState;

/// Chat panel: message history plus the input row.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let history_ref = NodeRef::<Div>::new();

    // Keep the newest message in view
    Effect::new(move |_| {
        state.rendered.with(|v| v.chat.scroll_revision);
        if let Some(history) = history_ref.get() {
            history.set_scroll_top(history.scroll_height());
        }
    });

    view! {
        <section id={TabId::Chat.as_str()} class="content" class:active={panel_visible(state, TabId::Chat)}>
            <div id=CHAT_HISTORY_ID class="chat-history" node_ref=history_ref>
                <For
                    each=move || state.rendered.with(|v| v.chat.entries.clone())
                    key=|entry| entry.key
                    let:entry
                >
                    <div
                        class=entry.class
                        style={if entry.is_error { "color:red" } else { "" }}
                    >
                        <Spans spans=entry.spans />
                    </div>
                </For>
            </div>
            <ChatInput />
        </section>
    }
}

/// Input row; Enter or the button sends.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_keypress = move |ev: ev::KeyboardEvent| {
        state.chat_key(ev.key());
    };

    view! {
        <div class="input-row">
            <input
                id=CHAT_INPUT_ID
                type="text"
                placeholder="Ask about tours, cities, the desert…"
                prop:value=move || state.rendered.with(|v| v.chat.input.clone())
                on:input=move |ev| state.set_chat_input(event_target_value(&ev))
                on:keypress=on_keypress
            />
            <button class="send-btn" on:click=move |_| state.send_chat()>
                "Send"
            </button>
        </div>
    }
}
