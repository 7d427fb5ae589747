//! Command-line interface for newsdesk.
//!
//! The binary wires infrastructure together at its composition root and
//! dispatches to `AppCore`; no domain logic lives here.

pub mod parser;

pub use parser::{Cli, Commands, NewsCommand, SettingsCommand};
