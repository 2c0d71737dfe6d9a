use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetarError {
    #[error("METAR report is empty")]
    Empty,
    #[error("METAR report could not be decoded: {0}")]
    Decode(String),
    #[error("METAR report has no wind")]
    MissingWind,
    #[error("METAR report has no temperature")]
    MissingTemperature,
    #[error("METAR temperature of {0} °C is out of range")]
    TemperatureOutOfRange(i32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PerformanceError {
    #[error("tailwind of {knots} kts detected, unable to compute")]
    Tailwind { knots: u16 },
    #[error("tailwind of {knots} kts is over the {limit} kts the table allows")]
    TailwindOverLimit { knots: u16, limit: u16 },
    #[error("headwind of {knots} kts is beyond the published table")]
    HeadwindOutOfRange { knots: i16 },
    #[error("elevation of {feet} ft is beyond the published table")]
    ElevationOutOfRange { feet: i16 },
    #[error("pressure altitude of {feet} ft is beyond the published table")]
    PressureAltitudeOutOfRange { feet: i32 },
    #[error("temperature of {celsius} °C is beyond the published table")]
    TemperatureOutOfRange { celsius: i16 },
    #[error("weight of {pounds} lbs is over the maximum of {max} lbs")]
    OverMaxWeight { pounds: i16, max: i16 },
    #[error("no published distance at {pressure_altitude_ft} ft and {temperature_c} °C")]
    NotPublished {
        pressure_altitude_ft: i32,
        temperature_c: i16,
    },
    #[error(transparent)]
    Metar(#[from] MetarError),
    #[error("airport catalog could not be read: {0}")]
    Catalog(String),
}
