use async_trait::async_trait;
use models::{AcquisitionError, Fix, PositionError, PositionErrorCode, PositionOptions};

pub mod models;
pub mod reported;

/// The platform's positioning capability.
#[async_trait]
pub trait Locator: Send + Sync {
    fn supports_positioning(&self) -> bool;

    async fn current_position(&self, options: &PositionOptions) -> Result<Fix, PositionError>;
}

/// Requests one fix from `locator`, bounded by `options.timeout`, and rejects fixes whose
/// accuracy radius is above `options.max_accuracy_meters`. A radius equal to the limit passes.
pub async fn acquire<L>(locator: &L, options: &PositionOptions) -> Result<Fix, AcquisitionError>
where
    L: Locator + ?Sized,
{
    if !locator.supports_positioning() {
        return Err(AcquisitionError::Unsupported);
    }
    let fix = match tokio::time::timeout(options.timeout, locator.current_position(options)).await
    {
        Ok(Ok(fix)) => fix,
        Ok(Err(err)) => return Err(AcquisitionError::Platform(err)),
        Err(_elapsed) => {
            return Err(AcquisitionError::Platform(PositionError::new(
                PositionErrorCode::Timeout,
                format!("no position within {} ms", options.timeout.as_millis()),
            )))
        }
    };
    if fix.accuracy > options.max_accuracy_meters {
        return Err(AcquisitionError::InsufficientAccuracy {
            fix,
            max_accuracy_meters: options.max_accuracy_meters,
        });
    }
    Ok(fix)
}
