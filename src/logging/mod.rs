use crate::cli::Args;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const FALLBACK_LOG_FILTER: &str = "nearby_destination_server=info";

pub fn init(args: &Args) {
    let (env_filter, filter_error) = match EnvFilter::try_new(&args.log_filter) {
        Ok(env_filter) => (env_filter, None),
        Err(err) => (EnvFilter::new(FALLBACK_LOG_FILTER), Some(err)),
    };
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_timer(UtcTime::rfc_3339()))
        .init();
    if let Some(err) = filter_error {
        tracing::warn!(
            "Ignoring invalid log filter `{}` ({err}), using `{FALLBACK_LOG_FILTER}`.",
            args.log_filter
        );
    }
}
