pub mod config;
pub mod detector;
pub mod error;
pub mod takedown;
pub mod types;

pub use config::Config;
pub use detector::*;
pub use error::PatrolError;
pub use takedown::*;
pub use types::*;
