pub mod config;
pub mod dashboard;
pub mod error;
pub mod llm;
pub mod notes;
pub mod server;
pub mod telemetry;

pub use error::{Error, Result};
