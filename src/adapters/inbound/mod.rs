/// Inbound adapters - Drivers of the application core
pub mod console_chat;

pub use console_chat::ConsoleChat;
