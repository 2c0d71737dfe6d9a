//! Weather decoding and aircraft performance figures for the runway pages.

pub mod airports;
pub mod cessna150j;
pub mod cessna172m;
pub mod error;
pub mod metar;
pub mod units;
pub mod wind;

pub use airports::{Airport, AirportCatalog, RunwayEnd};
pub use cessna150j::{Cessna150J, Landing, TakeOff};
pub use cessna172m::{Cessna172M, TakeOffWeight};
pub use error::{MetarError, PerformanceError};
pub use metar::Metar;
pub use units::{Bounds, Distance, Temperature, Velocity};

/// Standard-atmosphere temperature in °F at `elevation_ft`, using a lapse
/// rate of 3.5 °F per 1000 ft from 59 °F at sea level. Truncates toward zero.
pub fn standard_temperature_f(elevation_ft: i16) -> i16 {
    (59.0 - (f64::from(elevation_ft) / 1000.0) * 3.5) as i16
}
