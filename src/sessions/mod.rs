use crate::app_context::AppContext;
use crate::cli::Args;
use std::time::Duration;
use storage::ISessionStorage;

pub mod handlers;
pub mod models;
pub mod requests;
pub mod responses;
pub mod storage;
pub mod workflow;

/// Spawns the task that forgets abandoned page sessions.
pub fn init<SS: ISessionStorage>(args: &Args, app_context: &AppContext<SS>) {
    let max_idle = Duration::from_secs(args.session_ttl_secs);
    let sessions = app_context.sessions.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(max_idle.max(Duration::from_secs(1)));
        loop {
            interval.tick().await;
            let evicted = sessions.evict_idle(max_idle).await;
            if evicted > 0 {
                tracing::info!(task = "session_eviction", evicted, "Evicted idle sessions.");
            }
        }
    });
}
