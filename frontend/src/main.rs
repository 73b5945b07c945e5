mod api;
mod components;
mod state;

use assistant_ui::ClientConfig;
use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::blog::BlogPanel;
use components::chat::ChatPanel;
use components::tabs::TabBar;
use state::AppState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    let state = AppState::provide(client_config());

    // Blocking notices from the controllers
    Effect::new(move |_| {
        state.rendered.track();
        for notice in state.take_notices() {
            if window().alert_with_message(&notice).is_err() {
                log::error!("Could not show alert: {notice}");
            }
        }
    });

    view! {
        <div class="container">
            <header>
                <h1>"Luminous Morocco Tours"</h1>
            </header>
            <TabBar />
            <ChatPanel />
            <BlogPanel />
        </div>
    }
}

/// Endpoint settings bundled at build time; `ASSISTANT_API_BASE` overrides
/// the base. An empty base means same-origin requests.
fn client_config() -> ClientConfig {
    let config = ClientConfig::from_json(include_str!("../assistant.json")).unwrap_or_else(|e| {
        log::error!("Falling back to default client config: {e}");
        ClientConfig::default()
    });
    match option_env!("ASSISTANT_API_BASE") {
        Some(base) => config.with_api_base(base),
        None => config,
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
