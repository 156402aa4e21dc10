use crate::positioning::models::{Fix, PositionError, PositionErrorCode, PositionOptions};
use crate::positioning::Locator;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Mutex;
use tokio::sync::oneshot;

/// What the page learned from `navigator.geolocation.getCurrentPosition`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum PositionReport {
    Fix(Fix),
    Error(PositionError),
}

impl PositionReport {
    pub fn into_fix(self) -> Result<Fix, PositionError> {
        match self {
            PositionReport::Fix(fix) => {
                if !fix.location.is_valid() || !fix.accuracy.is_finite() || fix.accuracy < 0.0 {
                    return Err(PositionError::new(
                        PositionErrorCode::PositionUnavailable,
                        format!("malformed fix reported: {:?}", fix),
                    ));
                }
                Ok(fix)
            }
            PositionReport::Error(err) => Err(err),
        }
    }
}

/// Waits for the page to report the outcome of its own position lookup.
pub struct ReportedLocator {
    supported: bool,
    reports: Mutex<Option<oneshot::Receiver<PositionReport>>>,
}

impl ReportedLocator {
    /// A locator together with the sender the report has to be delivered through.
    pub fn channel() -> (Self, oneshot::Sender<PositionReport>) {
        let (sender, receiver) = oneshot::channel();
        let locator = Self {
            supported: true,
            reports: Mutex::new(Some(receiver)),
        };
        (locator, sender)
    }

    /// The page has no `navigator.geolocation` at all.
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            reports: Mutex::new(None),
        }
    }
}

#[async_trait]
impl Locator for ReportedLocator {
    fn supports_positioning(&self) -> bool {
        self.supported
    }

    async fn current_position(&self, _options: &PositionOptions) -> Result<Fix, PositionError> {
        let receiver = self
            .reports
            .lock()
            .ok()
            .and_then(|mut reports| reports.take());
        let Some(receiver) = receiver else {
            return Err(PositionError::new(
                PositionErrorCode::PositionUnavailable,
                "position was already requested",
            ));
        };
        match receiver.await {
            Ok(report) => report.into_fix(),
            Err(_closed) => Err(PositionError::new(
                PositionErrorCode::PositionUnavailable,
                "the page went away before reporting a position",
            )),
        }
    }
}
