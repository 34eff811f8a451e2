//! Command-line arguments for the quote consumer.
use clap::Parser;
use quote_consumer::DEFAULT_BASE_URL;

/// Runs the fixed GET/GET/POST/DELETE sequence against a quote service and logs the answers.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the quote service.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}
