pub mod agent;
pub mod config;
pub mod error;
pub mod extract;
pub mod intent;
pub mod memory;
pub mod personality;
pub mod types;
pub mod util;

pub use error::{AssistantError, Result};

/// Crate version, reported by UIs in their about screens.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Display name the assistant uses when referring to itself.
pub const ASSISTANT_NAME: &str = "EchoNova";
