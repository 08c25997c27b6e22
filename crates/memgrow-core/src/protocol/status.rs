//! Status endpoint body.
//!
//! Field names and string-typed numbers are part of the public contract:
//! `{"status":"ok","nbInstances":"<int>","intervalInSecs":"<int>","customMessage":"<string>"}`.

use serde::{Deserialize, Serialize};

use crate::error::{MemgrowError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBody {
    pub status: String,
    pub nb_instances: String,
    pub interval_in_secs: String,
    pub custom_message: String,
}

impl StatusBody {
    pub fn ok(nb_instances: u64, interval_in_secs: u64, custom_message: &str) -> Self {
        Self {
            status: "ok".to_string(),
            nb_instances: nb_instances.to_string(),
            interval_in_secs: interval_in_secs.to_string(),
            custom_message: custom_message.to_string(),
        }
    }

    /// Parse `nbInstances` back into a number.
    pub fn nb_instances(&self) -> Result<u64> {
        self.nb_instances
            .parse()
            .map_err(|e| MemgrowError::Internal(format!("nbInstances is not an integer: {e}")))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| MemgrowError::Internal(format!("status encode failed: {e}")))
    }
}
