pub mod api;
pub mod client;
pub mod config;
pub mod utils;
pub mod view;

pub use client::ContactClient;
pub use view::{ChatMessage, ChatSender, ContactForm, ContactView};
