use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::types::position::PositionBundle;

// ===== Job listing =====

/// Display row of the company job table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub location: String,
    pub status: String,
    #[serde(default)]
    pub new_candidates: u32,
    #[serde(default)]
    pub total_candidates: u32,
    pub created_on: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<bool>,
}

pub const DEFAULT_JOB_STATUS: &str = "OPEN";

impl Job {
    /// Synthesize a row from a positions bundle when the jobs endpoint is missing.
    /// Bundles without a position revision yield nothing.
    pub fn from_bundle(bundle: PositionBundle) -> Option<Self> {
        let details = bundle.into_latest()?;
        let position = details.position;

        let created_on = DateTime::parse_from_rfc3339(&position.timestamp)
            .map(|ts| ts.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|_| position.timestamp.clone());

        Some(Self {
            id: position.id,
            title: position.position_title,
            location: String::new(),
            status: DEFAULT_JOB_STATUS.to_string(),
            new_candidates: 0,
            total_candidates: 0,
            created_on,
            remote: None,
        })
    }
}

// ===== Chat =====

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub question: String,
    pub position_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub answer: Option<String>,
}
