use std::{collections::BTreeSet, time::Duration};

use reqwest::StatusCode;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::api::{LOAD_MAPPINGS_PATH, MappingsRequest, MappingsResponse};

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("could not build HTTP client")]
    Build(#[source] reqwest::Error),

    #[error("request to {0} failed")]
    Request(String, #[source] reqwest::Error),

    #[error("{0} responded with status {1}")]
    Status(String, StatusCode),

    #[error("could not read response body from {0}")]
    Body(String, #[source] reqwest::Error),

    #[error("response body is not valid JSON")]
    InvalidJson(#[source] serde_json::Error),

    #[error("response body is not a JSON object")]
    NotAnObject,

    #[error("response has an unexpected shape")]
    Shape(#[source] serde_json::Error),
}

/// A decoded `load_mappings` response along with every top-level key the
/// server sent, including ones the client does not use.
#[derive(Debug)]
pub struct LoadedMappings {
    pub keys: BTreeSet<String>,
    pub response: MappingsResponse,
}

pub struct MappingsClient {
    http: reqwest::Client,
    base_url: String,
}

impl MappingsClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Build)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, LOAD_MAPPINGS_PATH)
    }

    pub async fn load_mappings(
        &self,
        request: &MappingsRequest,
    ) -> Result<LoadedMappings, ClientError> {
        let url = self.endpoint();
        info!("Requesting {:?} from {}", request.targets, url);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Request(url.clone(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(url, status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Body(url.clone(), e))?;
        debug!("Received {} bytes from {}", body.len(), url);

        decode(&body)
    }
}

/// Decodes a response body, validating the whole shape before anything is
/// returned.
pub fn decode(body: &str) -> Result<LoadedMappings, ClientError> {
    let object: Map<String, Value> = match serde_json::from_str(body) {
        Ok(Value::Object(object)) => object,
        Ok(_) => return Err(ClientError::NotAnObject),
        Err(e) => return Err(ClientError::InvalidJson(e)),
    };
    let keys: BTreeSet<String> = object.keys().cloned().collect();
    info!("Response keys {:?}", keys);
    let response = serde_json::from_value(Value::Object(object)).map_err(ClientError::Shape)?;

    Ok(LoadedMappings { keys, response })
}
