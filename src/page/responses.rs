use serde::{Deserialize, Serialize};

/// What the page needs to know before it asks the browser for a position.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub timeout_ms: u64,
    pub max_accuracy_meters: f64,
    pub destination_delta_miles: f64,
}
