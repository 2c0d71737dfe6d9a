use askama::Template;
use axum::extract::Query;
use performance::{
    cessna150j::{Corrections, PerformanceRow},
    Cessna150J, Distance, PerformanceError,
};
use shared::domain::PerformanceAction;
use tracing::debug;

use super::{PerformanceInputs, PerformanceQuery};
use crate::pages::{HtmlTemplate, PageResult};

#[derive(Template)]
#[template(path = "cessna150j_take_off.html")]
pub(crate) struct TakeOffTemplate {
    action: PerformanceAction,
    heading: &'static str,
    is_grass: bool,
    cessna: Cessna150J,
    rows: Vec<PerformanceRow>,
    corrections: Corrections,
    temperature_correction_pct: f64,
    required: Distance,
}

#[derive(Template)]
#[template(path = "cessna150j_landing.html")]
pub(crate) struct LandingTemplate {
    action: PerformanceAction,
    heading: &'static str,
    is_grass: bool,
    cessna: Cessna150J,
    rows: Vec<PerformanceRow>,
    headwind_correction_pct: f64,
    corrected_for_headwind: Distance,
    corrections: Corrections,
    temperature_correction_pct: f64,
    required: Distance,
}

fn aircraft(inputs: &PerformanceInputs) -> Result<Cessna150J, PerformanceError> {
    Cessna150J::new(
        inputs.headwind,
        inputs.temperature.fahrenheit(),
        inputs.elevation_ft,
        inputs.standard_temperature.fahrenheit(),
    )
}

pub(crate) async fn get_take_off(
    Query(query): Query<PerformanceQuery>,
) -> PageResult<TakeOffTemplate> {
    let inputs = query.inputs();
    let cessna = aircraft(&inputs)?;
    let take_off = cessna.calc_take_off();
    debug!(
        elevation_ft = inputs.elevation_ft,
        headwind_kts = cessna.headwind_kts,
        "rendering cessna 150j take-off"
    );

    Ok(HtmlTemplate(TakeOffTemplate {
        action: PerformanceAction::TakeOff,
        heading: "Take off",
        is_grass: inputs.is_grass,
        cessna,
        rows: take_off.rows.to_vec(),
        corrections: take_off.corrections,
        temperature_correction_pct: take_off.corrections.temperature_correction * 100.0,
        required: take_off.corrections.final_distance(inputs.is_grass),
    }))
}

pub(crate) async fn get_landing(
    Query(query): Query<PerformanceQuery>,
) -> PageResult<LandingTemplate> {
    let inputs = query.inputs();
    let cessna = aircraft(&inputs)?;
    let landing = cessna.calc_landing();
    debug!(
        elevation_ft = inputs.elevation_ft,
        headwind_kts = cessna.headwind_kts,
        "rendering cessna 150j landing"
    );

    Ok(HtmlTemplate(LandingTemplate {
        action: PerformanceAction::Landing,
        heading: "Landing",
        is_grass: inputs.is_grass,
        cessna,
        rows: vec![landing.row],
        headwind_correction_pct: landing.headwind_correction * 100.0,
        corrected_for_headwind: landing.corrected_for_headwind,
        corrections: landing.corrections,
        temperature_correction_pct: landing.corrections.temperature_correction * 100.0,
        required: landing.corrections.final_distance(inputs.is_grass),
    }))
}
