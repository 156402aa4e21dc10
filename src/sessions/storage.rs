use crate::positioning::reported::PositionReport;
use crate::sessions::models::{
    CycleError, CycleProgress, DestinationState, PendingCycle, Session,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, RwLock};
use uuid::Uuid;

/// Builds the pending cycle for the generation it is handed.
pub type CycleStarter = Box<dyn FnOnce(u64) -> PendingCycle + Send>;

#[async_trait]
pub trait ISessionStorage: Clone + Send + Sync + 'static {
    async fn create(&self) -> Uuid;

    async fn state(&self, session_id: &Uuid) -> Option<DestinationState>;

    /// Resets the session, supersedes its in-flight cycle and installs a new one, all under
    /// one lock.
    async fn begin_cycle(&self, session_id: &Uuid, start: CycleStarter) -> Option<u64>;

    async fn take_reports(
        &self,
        session_id: &Uuid,
        generation: u64,
    ) -> Result<Option<oneshot::Sender<PositionReport>>, CycleError>;

    async fn progress(&self, session_id: &Uuid, generation: u64)
        -> Result<CycleProgress, CycleError>;

    async fn complete_cycle(
        &self,
        session_id: &Uuid,
        generation: u64,
        state: DestinationState,
    ) -> bool;

    async fn evict_idle(&self, max_idle: Duration) -> usize;
}

#[derive(Clone, Default)]
pub struct HashMapSessionStorage {
    storage: Arc<RwLock<HashMap<Uuid, Session>>>,
}

#[async_trait]
impl ISessionStorage for HashMapSessionStorage {
    async fn create(&self) -> Uuid {
        let session_id = Uuid::new_v4();
        self.storage
            .write()
            .await
            .insert(session_id, Session::default());
        session_id
    }

    async fn state(&self, session_id: &Uuid) -> Option<DestinationState> {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .map(|session| {
                session.touch();
                session.state.clone()
            })
    }

    async fn begin_cycle(&self, session_id: &Uuid, start: CycleStarter) -> Option<u64> {
        let mut storage = self.storage.write().await;
        let session = storage.get_mut(session_id)?;
        let generation = session.begin_cycle();
        session.pending = Some(start(generation));
        Some(generation)
    }

    async fn take_reports(
        &self,
        session_id: &Uuid,
        generation: u64,
    ) -> Result<Option<oneshot::Sender<PositionReport>>, CycleError> {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .ok_or(CycleError::SessionNotFound)?
            .take_reports(generation)
    }

    async fn progress(
        &self,
        session_id: &Uuid,
        generation: u64,
    ) -> Result<CycleProgress, CycleError> {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .ok_or(CycleError::SessionNotFound)?
            .progress(generation)
    }

    async fn complete_cycle(
        &self,
        session_id: &Uuid,
        generation: u64,
        state: DestinationState,
    ) -> bool {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .map_or(false, |session| session.complete_cycle(generation, state))
    }

    async fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut storage = self.storage.write().await;
        let before = storage.len();
        storage.retain(|_, session| session.is_busy() || session.last_seen.elapsed() <= max_idle);
        before - storage.len()
    }
}
