//! Stateless HTTP request builder and response parser for the quote API.
//!
//! # Design
//! `QuoteClient` holds only a `base_url`. Each endpoint is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. The caller executes the HTTP round-trip.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Quote;

/// Header the service reads on `/apiWithHeader`.
pub const REQUEST_ID_HEADER: &str = "requestId";

/// Synchronous, stateless client for the quote API.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    base_url: String,
}

impl QuoteClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_get_with_header(&self, request_id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/apiWithHeader", self.base_url),
            headers: vec![(REQUEST_ID_HEADER.to_string(), request_id.to_string())],
            body: None,
        }
    }

    pub fn build_get_with_request_param(&self, id: i64) -> HttpRequest {
        self.get(format!("{}/apiWithRequestParam?id={id}", self.base_url))
    }

    pub fn build_post_quote(&self, quote: &Quote) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(quote).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/api/quote", self.base_url),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_quote(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/api/quote/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_list_quotes(&self) -> HttpRequest {
        self.get(format!("{}/api", self.base_url))
    }

    pub fn build_get_quote(&self, id: i64) -> HttpRequest {
        self.get(format!("{}/api/{id}", self.base_url))
    }

    pub fn build_random_quote(&self) -> HttpRequest {
        self.get(format!("{}/api/random", self.base_url))
    }

    /// Parse a JSON array of quotes. An empty or `null` 2xx body yields an
    /// empty list.
    pub fn parse_quote_list(&self, response: HttpResponse) -> Result<Vec<Quote>, ApiError> {
        Ok(decode_body(response)?.unwrap_or_default())
    }

    /// Parse a single quote. An empty or `null` 2xx body yields `None`.
    pub fn parse_quote(&self, response: HttpResponse) -> Result<Option<Quote>, ApiError> {
        decode_body(response)
    }

    fn get(&self, path: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: Vec::new(),
            body: None,
        }
    }
}

fn decode_body<T: DeserializeOwned>(response: HttpResponse) -> Result<Option<T>, ApiError> {
    check_status(&response)?;
    if response.body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<T>>(&response.body)
        .map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Value;

    fn client() -> QuoteClient {
        QuoteClient::new("http://localhost:8080")
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_get_with_header_sets_request_id() {
        let req = client().build_get_with_header("someID");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/apiWithHeader");
        assert_eq!(req.header("requestId"), Some("someID"));
        assert!(req.body.is_none());
    }

    #[test]
    fn build_get_with_request_param_puts_id_in_query() {
        let req = client().build_get_with_request_param(11);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/apiWithRequestParam?id=11");
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_post_quote_sends_json_with_null_id() {
        let quote = Quote::new("success", Some(Value::unsaved("some quote")));
        let req = client().build_post_quote(&quote).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8080/api/quote");
        assert_eq!(req.header("content-type"), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["type"], "success");
        assert!(body["value"]["id"].is_null());
        assert_eq!(body["value"]["quote"], "some quote");
    }

    #[test]
    fn build_delete_quote_has_no_body() {
        let req = client().build_delete_quote(12);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8080/api/quote/12");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_read_endpoints() {
        let c = client();
        assert_eq!(c.build_list_quotes().path, "http://localhost:8080/api");
        assert_eq!(c.build_get_quote(3).path, "http://localhost:8080/api/3");
        assert_eq!(c.build_random_quote().path, "http://localhost:8080/api/random");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = QuoteClient::new("http://localhost:8080/");
        assert_eq!(
            client.build_delete_quote(12).path,
            "http://localhost:8080/api/quote/12"
        );
    }

    #[test]
    fn parse_quote_list_success() {
        let quotes = client()
            .parse_quote_list(ok(
                r#"[{"type":"success","value":{"id":1,"quote":"A"}},{"type":"success","value":null}]"#,
            ))
            .unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].id(), Some(1));
        assert!(quotes[1].value.is_none());
    }

    #[test]
    fn parse_quote_list_empty_body_is_empty() {
        let quotes = client().parse_quote_list(ok("")).unwrap();
        assert!(quotes.is_empty());
    }

    #[test]
    fn parse_quote_success() {
        let quote = client()
            .parse_quote(ok(r#"{"type":"success","value":{"id":11,"quote":"Eleven"}}"#))
            .unwrap()
            .unwrap();
        assert_eq!(quote.kind, "success");
        assert_eq!(quote.text(), Some("Eleven"));
    }

    #[test]
    fn parse_quote_empty_body_is_none() {
        assert!(client().parse_quote(ok("  ")).unwrap().is_none());
    }

    #[test]
    fn parse_quote_null_body_is_none() {
        assert!(client().parse_quote(ok("null")).unwrap().is_none());
    }

    #[test]
    fn parse_quote_list_null_body_is_empty() {
        let quotes = client().parse_quote_list(ok("null")).unwrap();
        assert!(quotes.is_empty());
    }

    #[test]
    fn parse_quote_accepts_created() {
        let response = HttpResponse {
            status: 201,
            headers: Vec::new(),
            body: r#"{"type":"success","value":{"id":13,"quote":"some quote"}}"#.to_string(),
        };
        let quote = client().parse_quote(response).unwrap().unwrap();
        assert_eq!(quote.id(), Some(13));
    }

    #[test]
    fn parse_quote_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client().parse_quote(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_quote_server_error() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = client().parse_quote(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_quote_list_rejects_single_object() {
        let err = client()
            .parse_quote_list(ok(r#"{"type":"success","value":null}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_quote_bad_json() {
        let err = client().parse_quote(ok("not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
