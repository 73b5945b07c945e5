//! Client-side controller for the assistant page: a chat tab and a blog
//! generator tab sharing one view-model.

pub mod api;
pub mod config;
pub mod errors;
pub mod markup;
pub mod models;
pub mod service;
pub mod view;

#[cfg(test)]
mod test_support;

pub use api::AssistantApi;
pub use config::ClientConfig;
pub use errors::AppError;
pub use service::Assistant;
pub use view::render::{render, RenderedView};
pub use view::{TabId, View, ViewModel};
