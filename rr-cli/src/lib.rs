//! RadioRemote CLI library.
//!
//! Wires a serial remote to the radio player:
//! - Command line arguments and their translation into configuration
//! - Serial port setup
//! - Start-up messages
//! - The `run` entry point used by the binary

pub mod args;
pub mod config;
pub mod messages;
pub mod run;
pub mod serial;

pub use args::Args;
pub use config::RemoteConfig;
