use crate::geo::models::LatLng;
use crate::positioning::models::PositionErrorCode;
use crate::sessions::models::{CycleStatus, DestinationError, DestinationState};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleStartedResponse {
    /// Identifies the cycle in its report and outcome routes.
    pub generation: u64,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<DestinationResponseError>,
    /// Human-readable explanation of `error_code`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<DestinationStateView>,
}

impl DestinationResponse {
    pub fn failure(error_code: DestinationResponseError, message: &str) -> Self {
        Self {
            error: true,
            error_code: Some(error_code),
            message: Some(message.to_string()),
            state: None,
        }
    }
}

impl From<DestinationState> for DestinationResponse {
    fn from(state: DestinationState) -> Self {
        Self {
            error: state.error.is_some(),
            error_code: state.error.map(DestinationResponseError::from),
            message: state.error.map(|err| err.message()),
            state: Some(DestinationStateView::from(state)),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DestinationResponseError {
    SessionNotFound,
    UnknownCycle,
    Superseded,
    AlreadyReported,
    CycleCrashed,
    NoDestination,
    Unsupported,
    LocationUnavailable,
    InsufficientAccuracy,
    SourceAtPole,
}

impl From<DestinationError> for DestinationResponseError {
    fn from(err: DestinationError) -> Self {
        match err {
            DestinationError::Unsupported => Self::Unsupported,
            DestinationError::LocationUnavailable { .. } => Self::LocationUnavailable,
            DestinationError::InsufficientAccuracy { .. } => Self::InsufficientAccuracy,
            DestinationError::SourceAtPole => Self::SourceAtPole,
            DestinationError::CycleCrashed => Self::CycleCrashed,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationStateView {
    pub status: CycleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_location: Option<LatLng>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<LatLng>,
    /// `destination` as it will be copied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_error_code: Option<PositionErrorCode>,
}

impl From<DestinationState> for DestinationStateView {
    fn from(state: DestinationState) -> Self {
        let platform_error_code = match state.error {
            Some(DestinationError::LocationUnavailable { platform_code }) => Some(platform_code),
            _ => None,
        };
        Self {
            status: state.status,
            current_location: state.current_location,
            accuracy: state.accuracy,
            destination: state.destination,
            destination_text: state
                .destination
                .map(|destination| destination.to_clipboard_text()),
            platform_error_code,
        }
    }
}
