//! GraphQL Transport
//!
//! Posts one operation per request and unwraps the `{data, errors}` envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// A named operation document
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    pub name: &'static str,
    pub document: &'static str,
    /// Field under `data` holding the result
    pub root: &'static str,
}

#[derive(Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: &'a V,
    #[serde(rename = "operationName")]
    operation_name: &'a str,
}

#[derive(Deserialize)]
struct Envelope {
    data: Option<Map<String, Value>>,
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    message: String,
}

/// Operations without variables send `{}`
#[derive(Serialize)]
pub struct NoArgs {}

/// HTTP client bound to one endpoint
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphQlClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
        }
    }

    pub async fn execute<V, T>(&self, op: &Operation, variables: &V) -> ApiResult<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        log::debug!("dispatch {} -> {}", op.name, self.endpoint);
        let body = GraphQlRequest {
            query: op.document,
            variables,
            operation_name: op.name,
        };
        let request = self.http.post(&self.endpoint).json(&body);
        // Carry the server-side session cookie
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        decode_response(status, &text, op.root)
    }
}

/// Unwrap a response body.
///
/// Server-reported errors win over partial data and over the HTTP status,
/// since GraphQL servers often pair a 4xx with a useful `errors` array.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str, root: &'static str) -> ApiResult<T> {
    let envelope: Envelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(_) if !(200..300).contains(&status) => return Err(ApiError::Http { status }),
        Err(err) => return Err(err.into()),
    };

    if !envelope.errors.is_empty() {
        let message = envelope
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ApiError::GraphQl(message));
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::Http { status });
    }

    let mut data = envelope.data.ok_or(ApiError::MissingField("data"))?;
    match data.remove(root) {
        None | Some(Value::Null) => Err(ApiError::MissingField(root)),
        Some(value) => Ok(serde_json::from_value(value)?),
    }
}
