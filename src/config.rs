//! API Configuration
//!
//! The endpoint is taken from the host page so one build can point at
//! different servers.

/// Name of the `<meta>` tag carrying the endpoint URL
pub const ENDPOINT_META: &str = "todo-api-endpoint";

/// Endpoint used when the page does not specify one
pub const DEFAULT_ENDPOINT: &str = "/api/graphql";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub endpoint: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ApiConfig {
    /// Build from an optional raw value; blank means default
    pub fn from_endpoint(raw: Option<String>) -> Self {
        match raw.map(|s| s.trim().to_string()) {
            Some(endpoint) if !endpoint.is_empty() => Self { endpoint },
            _ => Self::default(),
        }
    }

    /// Read `<meta name="todo-api-endpoint" content="...">` from the document
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| {
                doc.query_selector(&format!("meta[name=\"{}\"]", ENDPOINT_META))
                    .ok()
                    .flatten()
            })
            .and_then(|meta| meta.get_attribute("content"));
        Self::from_endpoint(raw)
    }
}
