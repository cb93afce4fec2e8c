// src/types/position.rs
//! Position bundle structures as served by the positions API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::versioning::{latest_versions, Versioned};

// ===== Versioned records =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: i64,
    #[serde(default)]
    pub company_id: i64,
    pub position_title: String,
    pub position_description: String,
    pub version: i64,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionInfo {
    pub id: i64,
    pub position_id: i64,
    #[serde(default)]
    pub generated_by_user: bool,
    #[serde(default, rename = "answeredByHR")]
    pub answered_by_hr: bool,
    pub subject: String,
    pub answer: Option<String>,
    pub version: i64,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: i64,
    pub position_id: i64,
    #[serde(default)]
    pub generated_by_user: bool,
    #[serde(default, rename = "answeredByHR")]
    pub answered_by_hr: bool,
    #[serde(default)]
    pub times_asked: i64,
    pub question: String,
    pub response: Option<String>,
    pub version: i64,
    pub timestamp: String,
}

impl Versioned for Position {
    fn identity(&self) -> i64 {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Versioned for PositionInfo {
    fn identity(&self) -> i64 {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Versioned for Faq {
    fn identity(&self) -> i64 {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Position {
    /// Last-modified time, when the server sent an RFC 3339 timestamp
    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }
}

impl PositionInfo {
    /// Blank HR fact appended while editing; becomes durable on save
    pub fn placeholder(id: i64, position_id: i64) -> Self {
        Self {
            id,
            position_id,
            generated_by_user: true,
            answered_by_hr: false,
            subject: String::new(),
            answer: Some(String::new()),
            version: 1,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }
}

impl Faq {
    /// Blank FAQ appended while editing; becomes durable on save
    pub fn placeholder(id: i64, position_id: i64) -> Self {
        Self {
            id,
            position_id,
            generated_by_user: true,
            answered_by_hr: false,
            times_asked: 1,
            question: String::new(),
            response: None,
            version: 1,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

// ===== Bundles =====

/// The `position` field arrives either as one record or as its stored revisions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionRevisions {
    One(Position),
    Many(Vec<Position>),
}

impl PositionRevisions {
    fn latest(&self) -> Option<Position> {
        match self {
            PositionRevisions::One(position) => Some(position.clone()),
            PositionRevisions::Many(revisions) => {
                // A bundle is scoped to one position, but keep the highest
                // version even if the server mixes identities.
                latest_versions(revisions)
                    .into_iter()
                    .max_by_key(|p| p.version)
            }
        }
    }
}

/// Unreduced bundle: every stored revision of the position, its info and FAQs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionBundle {
    pub position: Option<PositionRevisions>,
    #[serde(rename = "positionFAQs", default)]
    pub position_faqs: Vec<Faq>,
    #[serde(rename = "positionInfo", default)]
    pub position_info: Vec<PositionInfo>,
}

impl PositionBundle {
    /// Collapse every list to its latest revisions. `None` without any position revision.
    pub fn into_latest(self) -> Option<PositionDetails> {
        let position = self.position.as_ref()?.latest()?;
        Some(PositionDetails {
            position,
            position_faqs: latest_versions(&self.position_faqs),
            position_info: latest_versions(&self.position_info),
        })
    }
}

/// Reduced bundle shown in the views and submitted on save
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionDetails {
    pub position: Position,
    #[serde(rename = "positionFAQs", default)]
    pub position_faqs: Vec<Faq>,
    #[serde(rename = "positionInfo", default)]
    pub position_info: Vec<PositionInfo>,
}
