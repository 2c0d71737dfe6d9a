//! The parts of a decoded METAR that runway performance needs: station,
//! surface wind and temperature. Decoding itself is done by the `metar` crate.

use metar::{Data, WindDirection as DecodedDirection, WindSpeed};

use crate::{
    error::MetarError,
    units::{Temperature, Velocity},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindDirection {
    Heading(u16),
    Variable,
    Calm,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wind {
    pub direction: WindDirection,
    pub speed: Velocity,
    pub gust: Option<Velocity>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metar {
    pub station: Option<String>,
    pub wind: Wind,
    pub temperature: Temperature,
    pub dewpoint: Option<Temperature>,
}

impl Metar {
    pub fn parse(report: &str) -> Result<Self, MetarError> {
        let report = report.trim();
        if report.is_empty() {
            return Err(MetarError::Empty);
        }
        let report = ["METAR ", "SPECI "]
            .iter()
            .find_map(|prefix| report.strip_prefix(prefix))
            .unwrap_or(report)
            .trim_start();

        let decoded =
            metar::Metar::parse(report).map_err(|err| MetarError::Decode(err.to_string()))?;

        let speed = match &decoded.wind.speed {
            Data::Known(speed) => velocity(speed),
            Data::Unknown => return Err(MetarError::MissingWind),
        };
        let direction = match (&decoded.wind.dir, speed) {
            (_, Some(speed)) if speed.knots() == 0 => WindDirection::Calm,
            (_, None) => WindDirection::Calm,
            (Data::Known(DecodedDirection::Heading(heading)), _) => {
                WindDirection::Heading(u16::try_from(*heading % 360).unwrap_or_default())
            }
            (Data::Known(_), _) => WindDirection::Variable,
            (Data::Unknown, _) => return Err(MetarError::MissingWind),
        };

        let temperature = match &decoded.temperature {
            Data::Known(celsius) => celsius_from(*celsius)?,
            Data::Unknown => return Err(MetarError::MissingTemperature),
        };
        let dewpoint = match &decoded.dewpoint {
            Data::Known(celsius) => Some(celsius_from(*celsius)?),
            Data::Unknown => None,
        };

        Ok(Self {
            station: Some(decoded.station.to_string()).filter(|station| !station.is_empty()),
            wind: Wind {
                direction,
                speed: speed.unwrap_or(Velocity::Knots(0)),
                gust: decoded.wind.gusting.as_ref().and_then(velocity),
            },
            temperature,
            dewpoint,
        })
    }
}

// `None` is a calm report.
fn velocity(speed: &WindSpeed) -> Option<Velocity> {
    match speed {
        WindSpeed::Calm => None,
        WindSpeed::Knot(knots) => Some(Velocity::Knots(saturating_i16(*knots))),
        WindSpeed::MetresPerSecond(mps) => Some(Velocity::MetresPerSecond(saturating_i16(*mps))),
        WindSpeed::KilometresPerHour(kph) => Some(Velocity::KilometresPerHour(saturating_i16(*kph))),
    }
}

fn saturating_i16(value: u32) -> i16 {
    i16::try_from(value).unwrap_or(i16::MAX)
}

fn celsius_from(value: i32) -> Result<Temperature, MetarError> {
    i16::try_from(value)
        .map(Temperature::Celsius)
        .map_err(|_| MetarError::TemperatureOutOfRange(value))
}

#[cfg(test)]
#[path = "tests/metar_tests.rs"]
mod tests;
