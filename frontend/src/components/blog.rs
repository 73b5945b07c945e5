use assistant_ui::TabId;
use assistant_ui::view::{BLOG_LOADING_ID, BLOG_RESULT_ID, BLOG_TOPIC_ID, GENERATE_BUTTON_ID};
use leptos::prelude::*;

use crate::components::markup::Spans;
use crate::components::tabs::panel_visible;
use crate::state::AppState;

fn display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

/// Blog generator panel: topic field, trigger, loading indicator and result.
#[component]
pub fn BlogPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let generator = move || state.rendered.with(|v| v.generator.clone());

    view! {
        <section id={TabId::Blog.as_str()} class="content" class:active={panel_visible(state, TabId::Blog)}>
            <div class="input-row">
                <input
                    id=BLOG_TOPIC_ID
                    type="text"
                    placeholder="Blog topic, e.g. Hidden gems of the Fes medina"
                    prop:value=move || generator().topic
                    on:input=move |ev| state.set_topic(event_target_value(&ev))
                />
                <button
                    id=GENERATE_BUTTON_ID
                    on:click=move |_| state.generate()
                    disabled=move || generator().button_disabled
                >
                    "Generate"
                </button>
            </div>
            <div id=BLOG_LOADING_ID class="loading" style:display=move || display(generator().loading_visible)>
                "Writing your post…"
            </div>
            <div
                id=BLOG_RESULT_ID
                class="blog-result"
                style:display=move || display(generator().result_visible)
            >
                {move || generator().result.map(|spans| view! { <Spans spans=spans /> })}
            </div>
        </section>
    }
}
