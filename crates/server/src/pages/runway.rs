use askama::Template;
use axum::extract::Query;
use performance::{standard_temperature_f, wind::WindComponents, Metar, PerformanceError};
use serde::Deserialize;
use shared::domain::PerformanceAction;

use super::{lenient_bool, HtmlTemplate, PageResult};

#[derive(Debug, Deserialize)]
pub(crate) struct AtmosphericConditions {
    #[serde(default, deserialize_with = "lenient_bool")]
    is_takeoff: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    is_grass: bool,
    metar: String,
    heading: i16,
    elevation: i16,
}

/// Conditions for one runway as derived from its METAR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RunwayConditions {
    pub action: PerformanceAction,
    pub is_grass: bool,
    pub elevation_ft: i16,
    pub headwind_kts: i16,
    pub crosswind_kts: i16,
    pub standard_temperature_f: i16,
    pub temperature_f: i16,
}

impl RunwayConditions {
    pub(crate) fn derive(
        metar: &Metar,
        heading: i16,
        elevation_ft: i16,
        is_takeoff: bool,
        is_grass: bool,
    ) -> Self {
        Self {
            action: if is_takeoff {
                PerformanceAction::TakeOff
            } else {
                PerformanceAction::Landing
            },
            is_grass,
            elevation_ft,
            headwind_kts: metar.wind.headwind_component(heading).knots(),
            crosswind_kts: metar.wind.crosswind_component(heading).knots(),
            standard_temperature_f: standard_temperature_f(elevation_ft),
            temperature_f: metar.temperature.fahrenheit(),
        }
    }
}

// The section's data attributes feed the embedding page's performance request.
#[derive(Template)]
#[template(path = "runway.html")]
pub(crate) struct RunwayTemplate {
    title: &'static str,
    conditions: RunwayConditions,
    wind: String,
    crosswind_kts: u16,
    difference_f: i32,
}

impl RunwayTemplate {
    fn new(conditions: RunwayConditions) -> Self {
        let title = match conditions.action {
            PerformanceAction::TakeOff => "Take Off",
            PerformanceAction::Landing => "Landing",
        };
        let wind = if conditions.headwind_kts < 0 {
            format!("{} kts tailwind", conditions.headwind_kts.unsigned_abs())
        } else {
            format!("{} kts headwind", conditions.headwind_kts)
        };

        Self {
            title,
            wind,
            crosswind_kts: conditions.crosswind_kts.unsigned_abs(),
            difference_f: i32::from(conditions.temperature_f)
                - i32::from(conditions.standard_temperature_f),
            conditions,
        }
    }
}

pub(crate) async fn get(
    Query(conditions): Query<AtmosphericConditions>,
) -> PageResult<RunwayTemplate> {
    let metar = Metar::parse(&conditions.metar).map_err(PerformanceError::from)?;
    let derived = RunwayConditions::derive(
        &metar,
        conditions.heading,
        conditions.elevation,
        conditions.is_takeoff,
        conditions.is_grass,
    );

    Ok(HtmlTemplate(RunwayTemplate::new(derived)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_components_and_temperatures_from_metar() {
        let metar = Metar::parse("KPAO 121753Z 31012KT 10SM FEW030 21/10 A3001").expect("metar");
        let conditions = RunwayConditions::derive(&metar, 310, 120, true, false);

        assert_eq!(conditions.action, PerformanceAction::TakeOff);
        assert_eq!(conditions.headwind_kts, 12);
        assert_eq!(conditions.crosswind_kts, 0);
        assert_eq!(conditions.temperature_f, 70);
        assert_eq!(conditions.standard_temperature_f, 58);
    }

    #[test]
    fn tailwind_and_temperature_difference_are_spelled_out() {
        let metar = Metar::parse("KPAO 121753Z 13010KT 10SM CLR 21/10 A3001").expect("metar");
        let conditions = RunwayConditions::derive(&metar, 310, 120, false, true);
        let html = RunwayTemplate::new(conditions).render().expect("render");

        assert!(html.contains("Landing on grass"));
        assert!(html.contains("10 kts tailwind"));
        assert!(html.contains("<dd>12 &deg;F</dd>"));
    }
}
