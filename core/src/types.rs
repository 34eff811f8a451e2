//! Data records exchanged with the quote service.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Envelope returned (and accepted) by the quote service.
///
/// `kind` carries the service's status word (`"success"` in practice) and is
/// serialized as `type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: Option<Value>,
}

/// A single quote record. `id` is `None` when submitting a new quote; the
/// server assigns it. A missing id is still written as an explicit `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Value {
    #[serde(default)]
    pub id: Option<i64>,
    pub quote: String,
}

impl Quote {
    pub fn new(kind: &str, value: Option<Value>) -> Self {
        Self {
            kind: kind.to_string(),
            value,
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.value.as_ref().and_then(|v| v.id)
    }

    pub fn text(&self) -> Option<&str> {
        self.value.as_ref().map(|v| v.quote.as_str())
    }
}

impl Value {
    /// A value not yet stored by the server.
    pub fn unsaved(quote: &str) -> Self {
        Self {
            id: None,
            quote: quote.to_string(),
        }
    }
}

/// Written with the wire field names, e.g.
/// `Quote[type=success, value=Value[id=11, quote=Eleven]]`.
impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quote[type={}, value=", self.kind)?;
        match &self.value {
            Some(value) => write!(f, "{value}]"),
            None => write!(f, "null]"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Value[id={id}, quote={}]", self.quote),
            None => write!(f, "Value[id=null, quote={}]", self.quote),
        }
    }
}
