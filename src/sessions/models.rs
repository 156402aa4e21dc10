use crate::geo::models::LatLng;
use crate::positioning::models::PositionErrorCode;
use crate::positioning::reported::PositionReport;
use futures_util::future::{BoxFuture, Shared};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tokio::sync::oneshot;
use tokio::task::AbortHandle;

/// Resolves to the state a cycle produced, or `None` if it never got to store one.
pub type CycleOutcome = Shared<BoxFuture<'static, Option<DestinationState>>>;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CycleStatus {
    #[default]
    Idle,
    Pending,
    Ready,
    Failed,
}

/// Why a cycle ended without a destination.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DestinationError {
    Unsupported,
    /// Permission denied, position unavailable and timeouts all end up here.
    LocationUnavailable { platform_code: PositionErrorCode },
    InsufficientAccuracy {
        accuracy: f64,
        max_accuracy_meters: f64,
    },
    SourceAtPole,
    CycleCrashed,
}

impl DestinationError {
    pub fn message(&self) -> String {
        match self {
            DestinationError::Unsupported => {
                String::from("Geolocation is not supported by your device.")
            }
            DestinationError::LocationUnavailable { .. } => {
                String::from("Could not determine your location.")
            }
            DestinationError::InsufficientAccuracy {
                accuracy,
                max_accuracy_meters,
            } => format!(
                "Your location is only accurate to {accuracy:.0} meters; \
                at most {max_accuracy_meters:.0} meters is needed to pick a destination."
            ),
            DestinationError::SourceAtPole => {
                String::from("Cannot pick a destination this close to a pole.")
            }
            DestinationError::CycleCrashed => String::from("Something went wrong, try again."),
        }
    }
}

/// Everything the page shows for one cycle. Always replaced as a whole.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DestinationState {
    pub status: CycleStatus,
    pub current_location: Option<LatLng>,
    pub accuracy: Option<f64>,
    pub destination: Option<LatLng>,
    pub error: Option<DestinationError>,
}

impl DestinationState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn crashed() -> Self {
        Self {
            status: CycleStatus::Failed,
            error: Some(DestinationError::CycleCrashed),
            ..Self::default()
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CycleError {
    SessionNotFound,
    /// No cycle with this generation was ever started on the session.
    UnknownCycle,
    /// A newer cycle replaced this one.
    Superseded,
    AlreadyReported,
    Crashed,
}

/// The cycle currently occupying a session's single pending slot.
pub struct PendingCycle {
    pub abort: AbortHandle,
    /// Taken by the first report; absent for cycles that expect none.
    pub reports: Option<oneshot::Sender<PositionReport>>,
    pub outcome: CycleOutcome,
}

pub enum CycleProgress {
    Pending(CycleOutcome),
    Finished(DestinationState),
}

pub struct Session {
    pub state: DestinationState,
    pub generation: u64,
    pub pending: Option<PendingCycle>,
    pub last_seen: Instant,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            state: DestinationState::default(),
            generation: 0,
            pending: None,
            last_seen: Instant::now(),
        }
    }
}

impl Session {
    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }

    /// Clears the displayed state and cancels whatever cycle was still in flight.
    pub fn begin_cycle(&mut self) -> u64 {
        if let Some(pending) = self.pending.take() {
            pending.abort.abort();
        }
        self.state.reset();
        self.state.status = CycleStatus::Pending;
        self.generation += 1;
        self.touch();
        self.generation
    }

    fn check_generation(&self, generation: u64) -> Result<(), CycleError> {
        if generation == 0 || generation > self.generation {
            return Err(CycleError::UnknownCycle);
        }
        if generation < self.generation {
            return Err(CycleError::Superseded);
        }
        Ok(())
    }

    /// The sender for cycle `generation`'s report, or `None` if that cycle already finished.
    pub fn take_reports(
        &mut self,
        generation: u64,
    ) -> Result<Option<oneshot::Sender<PositionReport>>, CycleError> {
        self.check_generation(generation)?;
        self.touch();
        match self.pending.as_mut() {
            Some(pending) => pending
                .reports
                .take()
                .map(Some)
                .ok_or(CycleError::AlreadyReported),
            None => Ok(None),
        }
    }

    pub fn progress(&mut self, generation: u64) -> Result<CycleProgress, CycleError> {
        self.check_generation(generation)?;
        self.touch();
        Ok(match &self.pending {
            Some(pending) => CycleProgress::Pending(pending.outcome.clone()),
            None => CycleProgress::Finished(self.state.clone()),
        })
    }

    /// Stores the outcome of cycle `generation` unless a newer cycle has started since.
    pub fn complete_cycle(&mut self, generation: u64, state: DestinationState) -> bool {
        if generation != self.generation {
            return false;
        }
        self.pending = None;
        self.state = state;
        true
    }

    /// Whether a cycle task is still running for this session.
    pub fn is_busy(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.abort.is_finished())
    }
}
