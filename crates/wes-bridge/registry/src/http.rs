//! Workflow manager REST backend
//!
//! Endpoints used:
//!
//! - `GET /api/v1/workflowrun/?portalRunId={id}`: paginated workflow runs
//! - `GET /api/v1/workflowrun/{orcabusId}/state/`: state history of a run
//! - `GET /api/v1/payload/{payloadId}/`: a single payload

use crate::error::{RegistryError, Result};
use crate::registry::WorkflowRegistry;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use wes_bridge_types::{Payload, WorkflowRunRecord};

/// Connection settings for the workflow manager
#[derive(Clone, Debug)]
pub struct HttpRegistryConfig {
    /// e.g. `https://workflow.dev.umccr.org`
    pub base_url: String,
    /// Sent as `Authorization: Bearer <token>` when set
    pub auth_token: Option<String>,
    pub timeout_secs: u64,
}

impl HttpRegistryConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
            timeout_secs: 30,
        }
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// List endpoints answer either a DRF page or a bare array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Listing<T> {
    Page { results: Vec<T> },
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            Listing::Page { results } => results,
            Listing::Plain(items) => items,
        }
    }
}

const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// One entry of a workflow run's state history
#[derive(Clone, Debug, Deserialize)]
pub struct WorkflowRunState {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Payload id, or the payload object itself on expanded responses
    #[serde(default)]
    pub payload: Option<Value>,
}

impl WorkflowRunState {
    pub fn payload_id(&self) -> Option<&str> {
        match self.payload.as_ref()? {
            Value::String(id) => Some(id),
            Value::Object(payload) => payload.get("orcabusId").and_then(Value::as_str),
            _ => None,
        }
    }

    /// Offset-less timestamps are read as UTC
    fn recorded_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.as_deref()?;
        if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
            return Some(at.with_timezone(&Utc));
        }
        NAIVE_TIMESTAMP_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .map(|at| at.and_utc())
    }
}

/// Pick the payload of the most recent state that has one
///
/// States are ordered by timestamp (offset-less ones read as UTC); timestamps that
/// do not parse at all sort first and ties go to the later entry in the history.
pub fn select_latest_payload_id(states: &[WorkflowRunState]) -> Option<&str> {
    states
        .iter()
        .enumerate()
        .filter_map(|(index, state)| state.payload_id().map(|id| (state.recorded_at(), index, id)))
        .max_by_key(|(recorded_at, index, _)| (*recorded_at, *index))
        .map(|(_, _, id)| id)
}

/// Workflow registry backed by the workflow manager REST API
pub struct HttpWorkflowRegistry {
    client: Client,
    base_url: String,
}

impl HttpWorkflowRegistry {
    pub fn new(config: HttpRegistryConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(RegistryError::Configuration(
                "workflow manager base URL is empty".into(),
            ));
        }

        let mut headers = HeaderMap::new();
        if let Some(token) = &config.auth_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| RegistryError::Configuration(format!("invalid auth token: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path`, returning `None` on 404
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<Option<T>> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Querying workflow manager");

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(RegistryError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map(Some)
            .map_err(|e| RegistryError::Decode(format!("{}: {}", url, e)))
    }
}

#[async_trait]
impl WorkflowRegistry for HttpWorkflowRegistry {
    async fn lookup_run_by_portal_id(&self, portal_run_id: &str) -> Result<WorkflowRunRecord> {
        let listing: Option<Listing<WorkflowRunRecord>> = self
            .get("/api/v1/workflowrun/", &[("portalRunId", portal_run_id)])
            .await?;

        listing
            .map(Listing::into_items)
            .and_then(|runs| runs.into_iter().next())
            .ok_or_else(|| RegistryError::WorkflowRunNotFound(portal_run_id.to_string()))
    }

    async fn lookup_latest_payload(&self, run_id: &str) -> Result<Payload> {
        let states: Vec<WorkflowRunState> = self
            .get::<Listing<WorkflowRunState>>(&format!("/api/v1/workflowrun/{}/state/", run_id), &[])
            .await?
            .map(Listing::into_items)
            .unwrap_or_default();

        let payload_id = select_latest_payload_id(&states)
            .ok_or_else(|| RegistryError::PayloadNotFound(run_id.to_string()))?;
        debug!(run_id = %run_id, payload_id = %payload_id, "Resolved latest payload");

        self.get(&format!("/api/v1/payload/{}/", payload_id), &[])
            .await?
            .ok_or_else(|| RegistryError::PayloadNotFound(run_id.to_string()))
    }
}
