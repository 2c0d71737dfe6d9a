use askama::Template;
use axum::extract::Query;
use performance::{cessna172m::Performance, Cessna172M, Distance, PerformanceError};
use shared::domain::PerformanceAction;
use tracing::debug;

use super::{PerformanceInputs, PerformanceQuery};
use crate::pages::{HtmlTemplate, PageResult};

/// Take-off weight when the query leaves it out.
const DEFAULT_WEIGHT_LBS: i16 = performance::cessna172m::MAX_WEIGHT_LBS;

#[derive(Template)]
#[template(path = "cessna172m.html")]
pub(crate) struct PerformanceTemplate {
    action: PerformanceAction,
    heading: &'static str,
    is_grass: bool,
    cessna: Cessna172M,
    performance: Performance,
    wind_factor_pct: f64,
    required: Distance,
}

impl PerformanceTemplate {
    fn new(
        action: PerformanceAction,
        inputs: &PerformanceInputs,
        cessna: Cessna172M,
        performance: Performance,
    ) -> Self {
        Self {
            action,
            heading: match action {
                PerformanceAction::TakeOff => "Take off",
                PerformanceAction::Landing => "Landing",
            },
            is_grass: inputs.is_grass,
            cessna,
            wind_factor_pct: performance.corrections.wind_factor * 100.0,
            required: performance.corrections.final_distance(inputs.is_grass),
            performance,
        }
    }
}

fn aircraft(inputs: &PerformanceInputs) -> Result<Cessna172M, PerformanceError> {
    Cessna172M::new(
        inputs.headwind,
        inputs.elevation_ft,
        inputs.pressure_in_hg,
        inputs.temperature,
    )
}

pub(crate) async fn get_take_off(
    Query(query): Query<PerformanceQuery>,
) -> PageResult<PerformanceTemplate> {
    let inputs = query.inputs();
    let cessna = aircraft(&inputs)?;
    let weight_lbs = inputs.aircraft_weight_lbs.unwrap_or(DEFAULT_WEIGHT_LBS);
    let take_off = cessna.calc_take_off(weight_lbs)?;
    debug!(
        pressure_altitude_ft = cessna.pressure_altitude_ft,
        weight_lbs, "rendering cessna 172m take-off"
    );

    Ok(HtmlTemplate(PerformanceTemplate::new(
        PerformanceAction::TakeOff,
        &inputs,
        cessna,
        take_off,
    )))
}

pub(crate) async fn get_landing(
    Query(query): Query<PerformanceQuery>,
) -> PageResult<PerformanceTemplate> {
    let inputs = query.inputs();
    let cessna = aircraft(&inputs)?;
    let landing = cessna.calc_landing();
    debug!(
        pressure_altitude_ft = cessna.pressure_altitude_ft,
        "rendering cessna 172m landing"
    );

    Ok(HtmlTemplate(PerformanceTemplate::new(
        PerformanceAction::Landing,
        &inputs,
        cessna,
        landing,
    )))
}
