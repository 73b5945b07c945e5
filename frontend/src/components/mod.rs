pub mod blog;
pub mod chat;
pub mod markup;
pub mod tabs;
