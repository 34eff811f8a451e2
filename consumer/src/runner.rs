//! The fixed four-call consumption sequence.
//!
//! # Design
//! Every step builds its request through `QuoteClient`, hands it to the
//! `Transport`, parses the answer and logs what it got. A failing step is
//! logged at `error` and the sequence carries on; nothing is propagated to
//! the caller beyond the per-step `StepReport` list.

use std::fmt::Display;

use log::{error, info};
use quote_core::{ApiError, Quote, QuoteClient};

use crate::config::RunConfig;
use crate::transport::Transport;

/// Maximum number of quotes from `/apiWithHeader` that get logged.
pub const PREVIEW_LIMIT: usize = 3;

/// One call of the sequence, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    GetWithHeader,
    GetWithRequestParam,
    PostQuote,
    DeleteQuote,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::GetWithHeader,
        Step::GetWithRequestParam,
        Step::PostQuote,
        Step::DeleteQuote,
    ];

    /// Method and relative target, e.g. `DELETE /api/quote/12`.
    pub fn endpoint(&self, config: &RunConfig) -> String {
        match self {
            Step::GetWithHeader => "GET /apiWithHeader".to_string(),
            Step::GetWithRequestParam => {
                format!("GET /apiWithRequestParam?id={}", config.param_id)
            }
            Step::PostQuote => "POST /api/quote".to_string(),
            Step::DeleteQuote => format!("DELETE /api/quote/{}", config.delete_id),
        }
    }

    /// Name used in error lines; the query string is left out.
    pub fn error_label(&self, config: &RunConfig) -> String {
        match self {
            Step::GetWithRequestParam => "GET /apiWithRequestParam".to_string(),
            _ => self.endpoint(config),
        }
    }
}

/// Outcome of a single step: the HTTP status on success.
#[derive(Debug)]
pub struct StepReport {
    pub step: Step,
    pub outcome: Result<u16, ApiError>,
}

impl StepReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

pub struct Runner<T> {
    client: QuoteClient,
    config: RunConfig,
    transport: T,
}

impl<T: Transport> Runner<T> {
    pub fn new(config: RunConfig, transport: T) -> Self {
        Self {
            client: QuoteClient::new(&config.base_url),
            config,
            transport,
        }
    }

    /// Run all steps in order. Never stops early.
    pub fn run(&self) -> Vec<StepReport> {
        info!("=== Starting API consumption tests ===");
        let reports = Step::ALL.iter().map(|&step| self.run_step(step)).collect();
        info!("=== API consumption tests completed ===");
        reports
    }

    pub fn run_step(&self, step: Step) -> StepReport {
        let endpoint = step.endpoint(&self.config);
        match step {
            Step::GetWithHeader => info!("--- Testing {endpoint} with requestId header ---"),
            _ => info!("--- Testing {endpoint} ---"),
        }

        let outcome = match step {
            Step::GetWithHeader => self.get_with_header(),
            Step::GetWithRequestParam => self.get_with_request_param(),
            Step::PostQuote => self.post_quote(),
            Step::DeleteQuote => self.delete_quote(),
        };
        if let Err(e) = &outcome {
            error!("Error testing {}: {e}", step.error_label(&self.config));
        }
        StepReport { step, outcome }
    }

    fn get_with_header(&self) -> Result<u16, ApiError> {
        let request = self.client.build_get_with_header(&self.config.request_id);
        let response = self.transport.execute(&request)?;
        let status = response.status;
        let quotes = self.client.parse_quote_list(response)?;

        info!("Response status: {status}");
        info!("Number of quotes received: {}", quotes.len());
        for line in preview_lines(&quotes) {
            info!("{line}");
        }
        Ok(status)
    }

    fn get_with_request_param(&self) -> Result<u16, ApiError> {
        let request = self.client.build_get_with_request_param(self.config.param_id);
        let response = self.transport.execute(&request)?;
        let status = response.status;
        let quote = self.client.parse_quote(response)?;

        info!("Quote retrieved: {}", or_null(quote.as_ref()));
        if let Some(quote) = &quote {
            info!("Quote type: {}", quote.kind);
            if let Some(value) = &quote.value {
                info!("Quote ID: {}", or_null(value.id));
                info!("Quote text: '{}'", value.quote);
            }
        }
        Ok(status)
    }

    fn post_quote(&self) -> Result<u16, ApiError> {
        let request = self.client.build_post_quote(&self.config.new_quote)?;
        let response = self.transport.execute(&request)?;
        let status = response.status;
        let created = self.client.parse_quote(response)?;

        info!("Response status: {status}");
        info!("Created quote: {}", or_null(created.as_ref()));
        if let Some(quote) = &created {
            info!("Created quote type: {}", quote.kind);
            if let Some(value) = &quote.value {
                info!("New quote ID: {}", or_null(value.id));
                info!("New quote text: '{}'", value.quote);
            }
        }
        Ok(status)
    }

    fn delete_quote(&self) -> Result<u16, ApiError> {
        let request = self.client.build_delete_quote(self.config.delete_id);
        let response = self.transport.execute(&request)?;
        let status = response.status;
        let result = self.client.parse_quote(response)?;

        info!("Response status: {status}");
        info!("Delete result: {}", or_null(result.as_ref()));
        if let Some(quote) = &result {
            info!("Delete response type: {}", quote.kind);
            if let Some(text) = quote.text() {
                info!("Delete response quote: '{text}'");
            }
        }
        Ok(status)
    }
}

/// Log lines for at most the first `PREVIEW_LIMIT` quotes.
pub fn preview_lines(quotes: &[Quote]) -> Vec<String> {
    quotes
        .iter()
        .take(PREVIEW_LIMIT)
        .enumerate()
        .map(|(i, quote)| {
            format!(
                "Quote {}: type='{}', id={}, text='{}'",
                i + 1,
                quote.kind,
                or_null(quote.id()),
                or_null(quote.text())
            )
        })
        .collect()
}

fn or_null<V: Display>(value: Option<V>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}
