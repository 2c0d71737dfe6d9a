use crate::{
    metar::{Wind, WindDirection},
    units::Velocity,
};

pub trait WindComponents {
    /// Wind component along `heading`; negative values are a tailwind.
    fn headwind_component(&self, heading: i16) -> Velocity;
    fn crosswind_component(&self, heading: i16) -> Velocity;
}

impl WindComponents for Wind {
    fn headwind_component(&self, heading: i16) -> Velocity {
        let (angle, speed) = relative_angle_and_speed(self, heading);
        Velocity::Knots((speed * angle.cos()).round() as i16)
    }

    fn crosswind_component(&self, heading: i16) -> Velocity {
        let (angle, speed) = relative_angle_and_speed(self, heading);
        Velocity::Knots((speed * angle.sin()).round() as i16)
    }
}

// Variable and calm winds have no direction to resolve against; they count as
// blowing from north.
fn relative_angle_and_speed(wind: &Wind, heading: i16) -> (f64, f64) {
    let wind_heading = match wind.direction {
        WindDirection::Heading(heading) => f64::from(heading),
        WindDirection::Variable | WindDirection::Calm => 0.0,
    };
    let angle = (wind_heading - f64::from(heading)).to_radians();
    (angle, f64::from(wind.speed.knots()))
}
