use assistant_ui::TabId;
use leptos::prelude::*;

use crate::state::AppState;

/// Tab strip built from the controller's registry; exactly one tab carries
/// the `active` class.
#[component]
pub fn TabBar() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="tabs">
            {state
                .tab_bindings()
                .into_iter()
                .map(|(id, binding)| {
                    let is_active = move || {
                        state.rendered.with(|v| v.active_tab().map(|t| t.id) == Some(id))
                    };
                    view! {
                        <div
                            id={binding.affordance}
                            class="tab"
                            class:active=is_active
                            on:click=move |_| state.switch_tab(binding.panel)
                        >
                            {binding.label}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Whether the panel for `id` should be shown.
pub fn panel_visible(state: AppState, id: TabId) -> impl Fn() -> bool + Copy {
    move || {
        state
            .rendered
            .with(|v| v.tabs.iter().any(|t| t.id == id && t.panel_visible))
    }
}
