//! Blocking API client wrapping the shared HTTP agent.
//!
//! Every call either returns the decoded body or an [`ApiError`] the
//! controller turns into a user-visible notice; no failure is silent.

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::http_client;

use super::types::*;

const MAX_RESPONSE_BYTES: usize = 1024 * 1024;

/// Errors surfaced by the gateway.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The configured backend URL is not a valid absolute URL.
    #[error("Invalid backend URL {url}: {source}")]
    InvalidBaseUrl {
        /// The rejected URL text.
        url: String,
        /// Underlying parse error.
        source: url::ParseError,
    },
    /// The backend answered with a non-success status.
    #[error("HTTP {code}: {body}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body, truncated to the read limit.
        body: String,
    },
    /// The request never produced a response.
    #[error("Request failed: {0}")]
    Transport(String),
    /// The response body was not the expected JSON shape.
    #[error("Invalid response: {0}")]
    Json(String),
}

/// Typed access to the backend's REST endpoints.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: Url,
}

impl ApiClient {
    /// Build a client for the given base URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url).map_err(|source| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self { base })
    }

    /// Dashboard snapshot: totals, distributions, recent events.
    pub fn dashboard(&self) -> Result<DashboardSummary, ApiError> {
        self.get("/api/analytics/dashboard", &[])
    }

    /// All data objects.
    pub fn data_objects(&self) -> Result<Vec<DataObject>, ApiError> {
        self.get("/api/data-objects", &[])
    }

    /// Create a data object; the backend scores it and may fire rules.
    pub fn create_data_object(
        &self,
        object: &NewDataObject,
    ) -> Result<CreateObjectResponse, ApiError> {
        self.send("POST", "/api/data-objects", object)
    }

    /// Delete a data object by id.
    pub fn delete_data_object(&self, id: i64) -> Result<MessageResponse, ApiError> {
        let path = format!("/api/data-objects/{id}");
        let request = self.request("DELETE", &path, &[]);
        Self::decode(request.call())
    }

    /// Threats, optionally filtered server-side by lifecycle stage.
    pub fn threats(&self, stage: Option<&str>) -> Result<Vec<Threat>, ApiError> {
        match stage {
            Some(stage) if !stage.is_empty() => self.get("/api/threats", &[("stage", stage)]),
            _ => self.get("/api/threats", &[]),
        }
    }

    /// Current scoring weights.
    pub fn weights(&self) -> Result<Vec<WeightConfig>, ApiError> {
        self.get("/api/weights", &[])
    }

    /// Replace all five scoring weights in one atomic write.
    pub fn replace_weights(&self, updates: &[WeightUpdate]) -> Result<MessageResponse, ApiError> {
        self.send("PUT", "/api/weights", &updates)
    }

    /// All configured rules.
    pub fn rules(&self) -> Result<Vec<Rule>, ApiError> {
        self.get("/api/rules", &[])
    }

    /// Recent audit events.
    pub fn events(&self) -> Result<Vec<SecurityEvent>, ApiError> {
        self.get("/api/events", &[])
    }

    /// Score candidate objects without persisting anything.
    pub fn batch_assessment(
        &self,
        objects: &[serde_json::Value],
    ) -> Result<BatchResponse, ApiError> {
        let body = serde_json::json!({ "data_objects": objects });
        self.send("POST", "/api/batch-assessment", &body)
    }

    fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let request = self.request("GET", path, query);
        Self::decode(request.call())
    }

    fn send<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &str,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.request(method, path, &[]);
        Self::decode(request.send_json(body))
    }

    /// Build a request with JSON defaults; later `set` calls may override.
    fn request(&self, method: &str, path: &str, query: &[(&str, &str)]) -> ureq::Request {
        let mut url = self.base.clone();
        url.set_path(path);
        let mut request = http_client::agent()
            .request(method, url.as_str())
            .set("Accept", "application/json");
        for (name, value) in query {
            request = request.query(name, value);
        }
        request
    }

    fn decode<T: DeserializeOwned>(
        outcome: Result<ureq::Response, ureq::Error>,
    ) -> Result<T, ApiError> {
        let response = match outcome {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let body = read_body_limited(response).unwrap_or_else(|err| err);
                return Err(ApiError::Status { code, body });
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(ApiError::Transport(err.to_string()));
            }
        };
        let body = read_body_limited(response).map_err(ApiError::Json)?;
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Err(ApiError::Json("Empty response body".to_string()));
        }
        serde_json::from_str(trimmed).map_err(|err| ApiError::Json(err.to_string()))
    }
}

fn read_body_limited(response: ureq::Response) -> Result<String, String> {
    let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES)
        .map_err(|err| err.to_string())?;
    String::from_utf8(bytes).map_err(|err| err.to_string())
}
