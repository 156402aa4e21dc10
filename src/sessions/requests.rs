use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeginCycleRequest {
    /// Whether the page found `navigator.geolocation` at all.
    pub geolocation_supported: bool,
}
