//! Fixed parameters of a consumption run.

use quote_core::{Quote, Value};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_ID: &str = "someID";
pub const DEFAULT_PARAM_ID: i64 = 11;
pub const DEFAULT_DELETE_ID: i64 = 12;

/// Everything the runner sends. `Default` yields the stock sequence against
/// `http://localhost:8080`.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub base_url: String,
    pub request_id: String,
    pub param_id: i64,
    pub delete_id: i64,
    pub new_quote: Quote,
}

impl RunConfig {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_id: DEFAULT_REQUEST_ID.to_string(),
            param_id: DEFAULT_PARAM_ID,
            delete_id: DEFAULT_DELETE_ID,
            new_quote: Quote::new("success", Some(Value::unsaved("some quote"))),
        }
    }
}
