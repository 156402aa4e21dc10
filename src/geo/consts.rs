/// Approximate number of miles per degree of latitude.
pub const MILES_PER_DEGREE_LAT: f64 = 69.1;
/// Half-width of the destination box, applied to both axes.
pub const DESTINATION_DELTA_MILES: f64 = 0.25;
/// One eighth of a mile, in meters.
pub const MAX_ACCURACY_METERS: f64 = 201.0;
pub const COORDINATE_DECIMALS: usize = 5;
