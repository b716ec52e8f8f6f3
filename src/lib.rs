//! Crate entrypoint wiring together configuration, prompts, and the iDNS client.

pub mod config;
pub mod error;
pub mod idns;
pub mod prompt;
pub mod workflow;

pub use error::HelperError;
