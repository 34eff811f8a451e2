//! Host side of the quote API client.
//!
//! # Overview
//! `quote-core` builds and parses requests without I/O; this crate executes
//! them (`transport`) and drives the fixed consumption sequence (`runner`)
//! with the parameters in `config`.

pub mod config;
pub mod runner;
pub mod transport;

pub use config::{RunConfig, DEFAULT_BASE_URL};
pub use runner::{preview_lines, Runner, Step, StepReport, PREVIEW_LIMIT};
pub use transport::{Transport, UreqTransport};
