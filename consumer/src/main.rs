//! Quote consumer: issues four calls against a quote service and logs the
//! responses. Failures are logged per call; the exit code is always 0.
//!
//! Usage example (CLI):
//! ```bash
//! RUST_LOG=debug quote-consumer --base-url http://localhost:8080
//! ```
mod args;

use clap::Parser;
use log::debug;
use quote_consumer::{RunConfig, Runner, UreqTransport};

use crate::args::Args;

fn main() {
    init_logger();
    let args = Args::parse();

    let config = RunConfig::default().with_base_url(&args.base_url);
    let runner = Runner::new(config, UreqTransport::new());
    let reports = runner.run();

    let failed = reports.iter().filter(|r| !r.is_success()).count();
    debug!("{failed} of {} calls failed", reports.len());
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
