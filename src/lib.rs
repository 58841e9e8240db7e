//! Remote control of the crawler: a fixed command registry, a controller
//! that validates and scales motion requests, and the transports that carry
//! the encoded packets.

pub mod cli;
pub mod commands;
pub mod config;
pub mod connection;
pub mod controller;
pub mod diagnostics;
pub mod packet;
pub mod teleop;

pub use commands::{Command, CommandKind, Commands};
pub use connection::{Connection, ConnectionError};
pub use controller::{CrawlerController, Outcome, Rejection};
pub use diagnostics::{DiagnosticSink, TracingSink};
pub use packet::{Packet, Value};
