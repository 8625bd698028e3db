pub mod claude;
pub mod openrouter;

pub use claude::ClaudeClient;
pub use openrouter::OpenRouterClient;
