//! Cessna 150J short-field performance, interpolated from the owner's manual
//! tables over headwind and pressure altitude.

use serde::Serialize;
use tracing::debug;

use crate::{
    error::PerformanceError,
    units::{fraction_between, lerp_distance, Bounds, Distance, Velocity},
};

const HEADWIND_BAND_KTS: i16 = 10;
const MAX_TABULATED_HEADWIND_KTS: i16 = 20;

const TAKE_OFF_TEMPERATURE_INTERVAL_F: f64 = 35.0;
const TAKE_OFF_GRASS_FACTOR: f64 = 0.07;
const LANDING_TEMPERATURE_INTERVAL_F: f64 = 60.0;
const LANDING_GRASS_FACTOR: f64 = 0.2;
const LANDING_HEADWIND_INTERVAL_KTS: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AtmosphereLevel {
    SeaLevel59F,
    Alt2500Ft50F,
    Alt5000Ft41F,
    Alt7500Ft32F,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AtmosphereRow {
    pub altitude_ft: i16,
    pub temperature_f: i16,
    pub level: AtmosphereLevel,
}

const ATMOSPHERE_ROWS: [AtmosphereRow; 4] = [
    AtmosphereRow {
        altitude_ft: 0,
        temperature_f: 59,
        level: AtmosphereLevel::SeaLevel59F,
    },
    AtmosphereRow {
        altitude_ft: 2500,
        temperature_f: 50,
        level: AtmosphereLevel::Alt2500Ft50F,
    },
    AtmosphereRow {
        altitude_ft: 5000,
        temperature_f: 41,
        level: AtmosphereLevel::Alt5000Ft41F,
    },
    AtmosphereRow {
        altitude_ft: 7500,
        temperature_f: 32,
        level: AtmosphereLevel::Alt7500Ft32F,
    },
];

fn atmosphere_bounds(elevation_ft: i16) -> Result<Bounds<AtmosphereRow>, PerformanceError> {
    let out_of_range = PerformanceError::ElevationOutOfRange { feet: elevation_ft };
    if elevation_ft < 0 {
        return Err(out_of_range);
    }

    for pair in ATMOSPHERE_ROWS.windows(2) {
        let (lower, upper) = (pair[0], pair[1]);
        if elevation_ft == lower.altitude_ft {
            return Ok(Bounds { lower, upper: lower });
        }
        if elevation_ft < upper.altitude_ft {
            return Ok(Bounds { lower, upper });
        }
    }

    let top = ATMOSPHERE_ROWS[ATMOSPHERE_ROWS.len() - 1];
    if elevation_ft == top.altitude_ft {
        Ok(Bounds {
            lower: top,
            upper: top,
        })
    } else {
        Err(out_of_range)
    }
}

fn headwind_bounds(headwind_kts: i16) -> Result<Bounds<i16>, PerformanceError> {
    if headwind_kts < 0 {
        return Err(PerformanceError::Tailwind {
            knots: headwind_kts.unsigned_abs(),
        });
    }
    if headwind_kts > MAX_TABULATED_HEADWIND_KTS {
        return Err(PerformanceError::HeadwindOutOfRange {
            knots: headwind_kts,
        });
    }

    let lower = ((headwind_kts / HEADWIND_BAND_KTS) * HEADWIND_BAND_KTS)
        .min(MAX_TABULATED_HEADWIND_KTS - HEADWIND_BAND_KTS);
    Ok(Bounds {
        lower,
        upper: lower + HEADWIND_BAND_KTS,
    })
}

fn take_off_distance(headwind_kts: i16, level: AtmosphereLevel) -> Distance {
    use AtmosphereLevel::*;
    match (headwind_kts, level) {
        (0, SeaLevel59F) => Distance::new(735, 1385),
        (0, Alt2500Ft50F) => Distance::new(910, 1660),
        (0, Alt5000Ft41F) => Distance::new(1115, 1985),
        (0, Alt7500Ft32F) => Distance::new(1360, 2440),
        (10, SeaLevel59F) => Distance::new(500, 1035),
        (10, Alt2500Ft50F) => Distance::new(630, 1250),
        (10, Alt5000Ft41F) => Distance::new(780, 1510),
        (10, Alt7500Ft32F) => Distance::new(970, 1875),
        (_, SeaLevel59F) => Distance::new(305, 730),
        (_, Alt2500Ft50F) => Distance::new(395, 890),
        (_, Alt5000Ft41F) => Distance::new(505, 1090),
        (_, Alt7500Ft32F) => Distance::new(640, 1375),
    }
}

fn landing_distance(level: AtmosphereLevel) -> Distance {
    match level {
        AtmosphereLevel::SeaLevel59F => Distance::new(445, 1075),
        AtmosphereLevel::Alt2500Ft50F => Distance::new(470, 1135),
        AtmosphereLevel::Alt5000Ft41F => Distance::new(495, 1195),
        AtmosphereLevel::Alt7500Ft32F => Distance::new(520, 1255),
    }
}

/// One table row: the distances at the bracketing altitudes and the value
/// interpolated between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerformanceRow {
    pub headwind_kts: Option<i16>,
    pub lower: Distance,
    pub interpolated: Distance,
    pub upper: Distance,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Corrections {
    pub temperature_correction: f64,
    pub corrected_for_temperature: Distance,
    pub grass_offset_ft: i32,
    pub corrected_for_grass: Distance,
}

impl Corrections {
    pub fn final_distance(&self, is_grass: bool) -> Distance {
        if is_grass {
            self.corrected_for_grass
        } else {
            self.corrected_for_temperature
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TakeOff {
    pub rows: [PerformanceRow; 3],
    pub distance_at_elevation: Distance,
    pub corrections: Corrections,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Landing {
    pub row: PerformanceRow,
    pub distance_at_elevation: Distance,
    pub headwind_correction: f64,
    pub corrected_for_headwind: Distance,
    pub corrections: Corrections,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cessna150J {
    pub headwind_kts: i16,
    pub headwinds: Bounds<i16>,
    pub headwind_fraction: f64,
    pub elevation_ft: i16,
    pub atmosphere: Bounds<AtmosphereRow>,
    pub altitude_fraction: f64,
    pub temperature_f: i16,
    pub standard_temperature_f: i16,
    pub temperature_above_standard_f: i32,
}

impl Cessna150J {
    pub fn new(
        headwind: Velocity,
        temperature_f: i16,
        elevation_ft: i16,
        standard_temperature_f: i16,
    ) -> Result<Self, PerformanceError> {
        let headwind_kts = headwind.knots();
        let headwinds = headwind_bounds(headwind_kts)?;
        let headwind_fraction = fraction_between(
            f64::from(headwind_kts),
            f64::from(headwinds.lower),
            f64::from(headwinds.upper),
        );

        let atmosphere = atmosphere_bounds(elevation_ft)?;
        let altitude_fraction = fraction_between(
            f64::from(elevation_ft),
            f64::from(atmosphere.lower.altitude_ft),
            f64::from(atmosphere.upper.altitude_ft),
        );

        debug!(
            headwind_kts,
            elevation_ft, headwind_fraction, altitude_fraction, "bracketed cessna 150j tables"
        );

        Ok(Self {
            headwind_kts,
            headwinds,
            headwind_fraction,
            elevation_ft,
            atmosphere,
            altitude_fraction,
            temperature_f,
            standard_temperature_f,
            temperature_above_standard_f: i32::from(temperature_f) - i32::from(standard_temperature_f),
        })
    }

    pub fn calc_take_off(&self) -> TakeOff {
        let (low_wind, high_wind) = (self.headwinds.lower, self.headwinds.upper);
        let (low_alt, high_alt) = (self.atmosphere.lower.level, self.atmosphere.upper.level);

        let low_wind_low_alt = take_off_distance(low_wind, low_alt);
        let low_wind_high_alt = take_off_distance(low_wind, high_alt);
        let high_wind_low_alt = take_off_distance(high_wind, low_alt);
        let high_wind_high_alt = take_off_distance(high_wind, high_alt);

        let low_wind_row = lerp_distance(self.altitude_fraction, low_wind_low_alt, low_wind_high_alt);
        let high_wind_row =
            lerp_distance(self.altitude_fraction, high_wind_low_alt, high_wind_high_alt);

        let actual_wind_low_alt =
            lerp_distance(self.headwind_fraction, low_wind_low_alt, high_wind_low_alt);
        let actual_wind_high_alt =
            lerp_distance(self.headwind_fraction, low_wind_high_alt, high_wind_high_alt);
        let distance_at_elevation = lerp_distance(
            self.altitude_fraction,
            actual_wind_low_alt,
            actual_wind_high_alt,
        );

        let rows = [
            PerformanceRow {
                headwind_kts: Some(low_wind),
                lower: low_wind_low_alt,
                interpolated: low_wind_row,
                upper: low_wind_high_alt,
            },
            PerformanceRow {
                headwind_kts: Some(self.headwind_kts),
                lower: actual_wind_low_alt,
                interpolated: distance_at_elevation,
                upper: actual_wind_high_alt,
            },
            PerformanceRow {
                headwind_kts: Some(high_wind),
                lower: high_wind_low_alt,
                interpolated: high_wind_row,
                upper: high_wind_high_alt,
            },
        ];

        TakeOff {
            rows,
            distance_at_elevation,
            corrections: self.corrections(
                distance_at_elevation,
                TAKE_OFF_TEMPERATURE_INTERVAL_F,
                TAKE_OFF_GRASS_FACTOR,
            ),
        }
    }

    pub fn calc_landing(&self) -> Landing {
        let lower = landing_distance(self.atmosphere.lower.level);
        let upper = landing_distance(self.atmosphere.upper.level);
        let distance_at_elevation = lerp_distance(self.altitude_fraction, lower, upper);

        let headwind_correction =
            (f64::from(self.headwind_kts) / LANDING_HEADWIND_INTERVAL_KTS) * 0.1;
        let corrected_for_headwind = distance_at_elevation.scaled(1.0 - headwind_correction);

        Landing {
            row: PerformanceRow {
                headwind_kts: None,
                lower,
                interpolated: distance_at_elevation,
                upper,
            },
            distance_at_elevation,
            headwind_correction,
            corrected_for_headwind,
            corrections: self.corrections(
                corrected_for_headwind,
                LANDING_TEMPERATURE_INTERVAL_F,
                LANDING_GRASS_FACTOR,
            ),
        }
    }

    // 10% more distance for every `temperature_interval_f` above standard; never
    // less than the table. Grass adds a share of the obstacle distance to both
    // figures.
    fn corrections(
        &self,
        distance: Distance,
        temperature_interval_f: f64,
        grass_factor: f64,
    ) -> Corrections {
        let temperature_correction =
            (0.1 * (f64::from(self.temperature_above_standard_f) / temperature_interval_f)).max(0.0);
        let corrected_for_temperature = distance.scaled(1.0 + temperature_correction);
        let grass_offset_ft =
            (f64::from(corrected_for_temperature.clear_50_ft_obstacle) * grass_factor).round() as i32;

        Corrections {
            temperature_correction,
            corrected_for_temperature,
            grass_offset_ft,
            corrected_for_grass: corrected_for_temperature.offset(grass_offset_ft),
        }
    }
}

#[cfg(test)]
#[path = "tests/cessna150j_tests.rs"]
mod tests;
