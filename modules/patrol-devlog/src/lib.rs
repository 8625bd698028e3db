pub mod announce;
pub mod bridge;
pub mod discord;
pub mod github;
pub mod parser;
pub mod triage;
