//! Request payloads
//!
//! Bodies that are not customer records.

use serde::{Deserialize, Serialize};

/// Body of a bulk-load request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadRequest {
    /// Path of a JSON file on the server's filesystem
    pub path: String,
}

impl LoadRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}
