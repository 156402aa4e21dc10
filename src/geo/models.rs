use crate::geo::consts::COORDINATE_DECIMALS;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// The `"lat, lng"` string handed to the clipboard.
    pub fn to_clipboard_text(&self) -> String {
        format!(
            "{:.prec$}, {:.prec$}",
            self.lat,
            self.lng,
            prec = COORDINATE_DECIMALS
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OffsetError {
    InvalidSource,
    /// `cos(lat)` vanishes, so a mile of longitude has no finite width in degrees.
    SourceAtPole,
}
