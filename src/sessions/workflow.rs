use crate::app_context::AppContext;
use crate::geo;
use crate::geo::models::OffsetError;
use crate::positioning::models::{AcquisitionError, Fix, PositionErrorCode};
use crate::positioning::reported::PositionReport;
use crate::positioning::{self, Locator};
use crate::sessions::models::{
    CycleError, CycleProgress, CycleStatus, DestinationError, DestinationState, PendingCycle,
};
use crate::sessions::storage::{CycleStarter, ISessionStorage};
use futures_util::FutureExt;
use rand::Rng;
use tokio::sync::oneshot;
use uuid::Uuid;

pub struct DestinationWorkflow<SS: ISessionStorage> {
    app_context: AppContext<SS>,
    session_id: Uuid,
}

impl<SS> DestinationWorkflow<SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>, session_id: Uuid) -> Self {
        Self {
            app_context,
            session_id,
        }
    }

    /// Starts a cycle against `locator`, superseding whatever cycle the session had in flight.
    ///
    /// The position deadline starts here, so `reports` has to deliver the page's report
    /// within the configured timeout.
    pub async fn begin<L>(
        &self,
        locator: L,
        reports: Option<oneshot::Sender<PositionReport>>,
    ) -> Result<u64, CycleError>
    where
        L: Locator + 'static,
    {
        let sessions = self.app_context.sessions.clone();
        let options = self.app_context.position_options;
        let session_id = self.session_id;

        let start: CycleStarter = Box::new(move |generation: u64| {
            let cycle = tokio::spawn(async move {
                let outcome = positioning::acquire(&locator, &options).await;
                let state = resolve(&mut rand::thread_rng(), outcome);
                sessions
                    .complete_cycle(&session_id, generation, state.clone())
                    .await
                    .then_some(state)
            });
            let abort = cycle.abort_handle();
            let outcome = cycle
                .map(move |joined| match joined {
                    Ok(state) => state,
                    Err(err) => {
                        if err.is_panic() {
                            tracing::error!(
                                session_id = %session_id,
                                generation,
                                "Destination cycle crashed: {err}"
                            );
                        }
                        None
                    }
                })
                .boxed()
                .shared();
            PendingCycle {
                abort,
                reports,
                outcome,
            }
        });

        let generation = self
            .app_context
            .sessions
            .begin_cycle(&self.session_id, start)
            .await
            .ok_or(CycleError::SessionNotFound)?;
        tracing::debug!(session_id = %self.session_id, generation, "Began destination cycle.");
        Ok(generation)
    }

    /// Hands the page's report to cycle `generation` and waits for what it produced.
    pub async fn report(
        &self,
        generation: u64,
        report: PositionReport,
    ) -> Result<DestinationState, CycleError> {
        let reports = self
            .app_context
            .sessions
            .take_reports(&self.session_id, generation)
            .await?;
        if let Some(reports) = reports {
            // The cycle may have hit its deadline in the meantime.
            let _ = reports.send(report);
        }
        self.outcome(generation).await
    }

    /// Waits for cycle `generation` to finish.
    pub async fn outcome(&self, generation: u64) -> Result<DestinationState, CycleError> {
        let sessions = &self.app_context.sessions;
        let finished = match sessions.progress(&self.session_id, generation).await? {
            CycleProgress::Finished(state) => Some(state),
            CycleProgress::Pending(outcome) => outcome.await,
        };

        let state = match finished {
            Some(state) => state,
            None => {
                // Either a newer cycle took the slot or the task died before storing a state.
                return if sessions
                    .complete_cycle(&self.session_id, generation, DestinationState::crashed())
                    .await
                {
                    Err(CycleError::Crashed)
                } else {
                    Err(CycleError::Superseded)
                };
            }
        };
        tracing::info!(
            task = "destination_cycle",
            session_id = %self.session_id,
            generation,
            status = ?state.status,
            accuracy = ?state.accuracy,
        );
        Ok(state)
    }
}

/// Turns the outcome of an acquisition into the state shown to the user.
pub fn resolve<R: Rng + ?Sized>(
    rng: &mut R,
    outcome: Result<Fix, AcquisitionError>,
) -> DestinationState {
    let fix = match outcome {
        Ok(fix) => fix,
        Err(AcquisitionError::Unsupported) => {
            return failed(None, DestinationError::Unsupported);
        }
        Err(AcquisitionError::Platform(err)) => {
            tracing::warn!(
                platform_code = ?err.code,
                platform_message = %err.message,
                "Could not acquire a position."
            );
            return failed(
                None,
                DestinationError::LocationUnavailable {
                    platform_code: err.code,
                },
            );
        }
        Err(AcquisitionError::InsufficientAccuracy {
            fix,
            max_accuracy_meters,
        }) => {
            return failed(
                Some(fix),
                DestinationError::InsufficientAccuracy {
                    accuracy: fix.accuracy,
                    max_accuracy_meters,
                },
            );
        }
    };
    match geo::random_nearby(rng, fix.location) {
        Ok(destination) => DestinationState {
            status: CycleStatus::Ready,
            current_location: Some(fix.location),
            accuracy: Some(fix.accuracy),
            destination: Some(destination),
            error: None,
        },
        Err(OffsetError::SourceAtPole) => failed(Some(fix), DestinationError::SourceAtPole),
        Err(OffsetError::InvalidSource) => failed(
            Some(fix),
            DestinationError::LocationUnavailable {
                platform_code: PositionErrorCode::PositionUnavailable,
            },
        ),
    }
}

fn failed(fix: Option<Fix>, error: DestinationError) -> DestinationState {
    DestinationState {
        status: CycleStatus::Failed,
        current_location: fix.map(|fix| fix.location),
        accuracy: fix.map(|fix| fix.accuracy),
        destination: None,
        error: Some(error),
    }
}
