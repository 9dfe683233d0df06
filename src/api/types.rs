//! API request and response types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::estimator::Category;

fn default_event_type() -> String {
    "Other".to_string()
}

fn default_location() -> String {
    "Generic".to_string()
}

/// Request to estimate a budget breakdown.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictBudgetRequest {
    /// Event type label; unrecognised values fall back to `Other`
    #[serde(default = "default_event_type")]
    pub event_type: String,

    /// Expected number of guests
    #[serde(default)]
    pub guests: u64,

    /// Client-supplied total budget; `0` requests a guest-based estimate
    #[serde(default)]
    pub budget: f64,

    /// Event location (accepted for forward compatibility, not used)
    #[serde(default = "default_location")]
    pub location: String,
}

/// Normalised input echoed back to the client.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateInput {
    pub event_type: String,
    pub guests: u64,
    pub budget: f64,
}

/// Response for a budget estimation.
#[derive(Debug, Clone, Serialize)]
pub struct PredictBudgetResponse {
    /// Always `"success"` for a computed estimate
    pub status: String,

    /// Echo of the input the estimate was computed from
    pub input: EstimateInput,

    /// Estimated total in whole currency units
    pub estimated_total: u64,

    /// Per-category allocation of the total
    pub breakdown: BTreeMap<Category, u64>,

    /// Fixed human-readable summary
    pub message: String,

    /// Zero or more advisory warnings
    pub warnings: Vec<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}
