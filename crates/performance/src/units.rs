use std::fmt;

use serde::Serialize;

const KNOTS_PER_MPH: f64 = 1.151;
const KNOTS_PER_METRE_PER_SECOND: f64 = 1.944;
const KILOMETRES_PER_HOUR_PER_KNOT: f64 = 1.852;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Velocity {
    Knots(i16),
    MilesPerHour(i16),
    MetresPerSecond(i16),
    KilometresPerHour(i16),
}

impl Velocity {
    pub fn knots(self) -> i16 {
        match self {
            Self::Knots(kts) => kts,
            Self::MilesPerHour(mph) => (f64::from(mph) / KNOTS_PER_MPH).round() as i16,
            Self::MetresPerSecond(mps) => (f64::from(mps) * KNOTS_PER_METRE_PER_SECOND).round() as i16,
            Self::KilometresPerHour(kph) => {
                (f64::from(kph) / KILOMETRES_PER_HOUR_PER_KNOT).round() as i16
            }
        }
    }

    pub fn miles_per_hour(self) -> i16 {
        match self {
            Self::MilesPerHour(mph) => mph,
            other => (f64::from(other.knots()) * KNOTS_PER_MPH).round() as i16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Temperature {
    Fahrenheit(i16),
    Celsius(i16),
}

impl Temperature {
    pub fn celsius(self) -> i16 {
        match self {
            Self::Celsius(c) => c,
            Self::Fahrenheit(f) => ((f64::from(f) - 32.0) * 5.0 / 9.0).round() as i16,
        }
    }

    pub fn fahrenheit(self) -> i16 {
        match self {
            Self::Fahrenheit(f) => f,
            Self::Celsius(c) => (f64::from(c) * 9.0 / 5.0 + 32.0).round() as i16,
        }
    }
}

/// Ground run and total distance to clear a 50 ft obstacle, in feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Distance {
    pub ground_run: i32,
    pub clear_50_ft_obstacle: i32,
}

impl Distance {
    pub const fn new(ground_run: i32, clear_50_ft_obstacle: i32) -> Self {
        Self {
            ground_run,
            clear_50_ft_obstacle,
        }
    }

    pub fn from_f64(ground_run: f64, clear_50_ft_obstacle: f64) -> Self {
        Self::new(ground_run.round() as i32, clear_50_ft_obstacle.round() as i32)
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self::from_f64(
            f64::from(self.ground_run) * factor,
            f64::from(self.clear_50_ft_obstacle) * factor,
        )
    }

    pub fn offset(self, feet: i32) -> Self {
        Self::new(
            self.ground_run.saturating_add(feet),
            self.clear_50_ft_obstacle.saturating_add(feet),
        )
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ft ground run / {} ft over 50 ft",
            self.ground_run, self.clear_50_ft_obstacle
        )
    }
}

/// The table entries either side of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds<T> {
    pub lower: T,
    pub upper: T,
}

/// Position of `value` between `lower` and `upper` as a fraction. Zero when the
/// bounds coincide.
pub fn fraction_between(value: f64, lower: f64, upper: f64) -> f64 {
    let span = upper - lower;
    if span == 0.0 {
        0.0
    } else {
        (value - lower) / span
    }
}

pub fn lerp(fraction: f64, lower: f64, upper: f64) -> f64 {
    fraction * (upper - lower) + lower
}

pub fn lerp_distance(fraction: f64, lower: Distance, upper: Distance) -> Distance {
    Distance::from_f64(
        lerp(
            fraction,
            f64::from(lower.ground_run),
            f64::from(upper.ground_run),
        ),
        lerp(
            fraction,
            f64::from(lower.clear_50_ft_obstacle),
            f64::from(upper.clear_50_ft_obstacle),
        ),
    )
}
