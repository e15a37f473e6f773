//! Input models
//!
//! Inputs are read-only from the bridge's perspective; they surface in zone
//! configs as the sources a zone can play.

use serde::Deserialize;

/// One input as reported by the input-list endpoint
///
/// The legacy listing endpoint reports `volume` as a string.
#[derive(Debug, Clone, Deserialize)]
pub struct Input {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub volume: String,
}

/// Input ids known to the server
#[derive(Debug, Clone, Deserialize)]
pub struct InputIds {
    pub input_ids: Vec<String>,
}

/// Configuration for a single input from `api/v2/inputs/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub input_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub volume: u8,
}
