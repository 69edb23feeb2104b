/// Network adapters for external API calls
mod groq_client;
mod nvd_client;

pub use groq_client::GroqChatClient;
pub use nvd_client::NvdClient;
