//! Performance pages, one module per aircraft, sharing the query the runway
//! page builds.

use performance::{Temperature, Velocity};
use serde::Deserialize;

use super::lenient_bool;

pub mod cessna150j;
pub mod cessna172m;

const STANDARD_DAY_F: i16 = 59;

#[derive(Debug, Deserialize)]
pub(crate) struct PerformanceQuery {
    #[serde(default, deserialize_with = "lenient_bool")]
    is_grass: bool,
    elevation_ft: i16,
    headwind_kts: i16,
    pressure_in_hg: Option<f64>,
    temperature_f: Option<i16>,
    temperature_c: Option<i16>,
    standard_temperature_f: Option<i16>,
    standard_temperature_c: Option<i16>,
    aircraft_weight_lbs: Option<i16>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PerformanceInputs {
    pub is_grass: bool,
    pub elevation_ft: i16,
    pub headwind: Velocity,
    pub pressure_in_hg: Option<f64>,
    pub temperature: Temperature,
    pub standard_temperature: Temperature,
    pub aircraft_weight_lbs: Option<i16>,
}

impl PerformanceQuery {
    /// Celsius wins over Fahrenheit; a temperature given in neither is 59 °F.
    pub(crate) fn inputs(&self) -> PerformanceInputs {
        PerformanceInputs {
            is_grass: self.is_grass,
            elevation_ft: self.elevation_ft,
            headwind: Velocity::Knots(self.headwind_kts),
            pressure_in_hg: self.pressure_in_hg,
            temperature: pick_temperature(self.temperature_c, self.temperature_f),
            standard_temperature: pick_temperature(
                self.standard_temperature_c,
                self.standard_temperature_f,
            ),
            aircraft_weight_lbs: self.aircraft_weight_lbs,
        }
    }
}

fn pick_temperature(celsius: Option<i16>, fahrenheit: Option<i16>) -> Temperature {
    match (celsius, fahrenheit) {
        (Some(c), _) => Temperature::Celsius(c),
        (None, Some(f)) => Temperature::Fahrenheit(f),
        (None, None) => Temperature::Fahrenheit(STANDARD_DAY_F),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(temperature_c: Option<i16>, temperature_f: Option<i16>) -> PerformanceQuery {
        PerformanceQuery {
            is_grass: false,
            elevation_ft: 5000,
            headwind_kts: 0,
            pressure_in_hg: None,
            temperature_f,
            temperature_c,
            standard_temperature_f: None,
            standard_temperature_c: None,
            aircraft_weight_lbs: None,
        }
    }

    #[test]
    fn missing_temperatures_default_to_59_f() {
        let inputs = query(None, None).inputs();
        assert_eq!(inputs.standard_temperature, Temperature::Fahrenheit(59));
        assert_eq!(inputs.temperature, Temperature::Fahrenheit(59));
    }

    #[test]
    fn celsius_takes_precedence() {
        let inputs = query(Some(20), Some(50)).inputs();
        assert_eq!(inputs.temperature.fahrenheit(), 68);
    }
}
