use crate::geo::consts::MAX_ACCURACY_METERS;
use crate::positioning::models::{PositionOptions, DEFAULT_POSITION_TIMEOUT_MS};
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

#[derive(Debug, Parser)]
#[command(about = "Serves a page that picks a random destination near you.")]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// Origins allowed to call the API from another host; may be repeated.
    #[arg(long = "allowed-origin")]
    #[arg(default_values = ["http://127.0.0.1:3030", "http://localhost:3030"])]
    pub allowed_origins: Vec<Url>,
    /// How long the page waits for a position fix.
    #[arg(long)]
    #[arg(default_value_t = DEFAULT_POSITION_TIMEOUT_MS)]
    pub position_timeout_ms: u64,
    /// Fixes with a larger accuracy radius are refused.
    #[arg(long)]
    #[arg(default_value_t = MAX_ACCURACY_METERS)]
    pub max_accuracy_meters: f64,
    #[arg(long)]
    #[arg(default_value_t = 3600)]
    pub session_ttl_secs: u64,
    #[arg(long)]
    #[arg(default_value = "nearby_destination_server=info")]
    pub log_filter: String,
}

impl Args {
    pub fn position_options(&self) -> PositionOptions {
        PositionOptions {
            timeout: Duration::from_millis(self.position_timeout_ms),
            max_accuracy_meters: self.max_accuracy_meters,
        }
    }
}
