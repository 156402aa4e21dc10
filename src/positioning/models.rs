use crate::geo::consts::MAX_ACCURACY_METERS;
use crate::geo::models::LatLng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_POSITION_TIMEOUT_MS: u64 = 15_000;

#[derive(Copy, Clone, Debug)]
pub struct PositionOptions {
    pub timeout: Duration,
    pub max_accuracy_meters: f64,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_POSITION_TIMEOUT_MS),
            max_accuracy_meters: MAX_ACCURACY_METERS,
        }
    }
}

/// A single position reported by the positioning capability.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fix {
    #[serde(flatten)]
    pub location: LatLng,
    /// Radius in meters of the 68% confidence circle around `location`.
    pub accuracy: f64,
}

/// The browser geolocation API's error codes, by name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PositionErrorCode {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionError {
    pub code: PositionErrorCode,
    #[serde(default)]
    pub message: String,
}

impl PositionError {
    pub fn new(code: PositionErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AcquisitionError {
    /// The platform has no positioning capability at all.
    Unsupported,
    Platform(PositionError),
    /// The fix came back, but its accuracy radius exceeds the configured limit.
    InsufficientAccuracy { fix: Fix, max_accuracy_meters: f64 },
}
