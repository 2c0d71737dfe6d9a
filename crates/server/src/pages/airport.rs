use std::sync::Arc;

use askama::Template;
use axum::extract::{Path, State};
use performance::Airport;
use shared::error::ErrorCode;
use tracing::debug;

use super::{HtmlTemplate, PageFailure, PageResult};
use crate::app_state::AppState;

/// Runway form: a METAR picker, a custom METAR field and one radio row per
/// runway end. The row cells carry `RunwayEnd::data_attributes` for the form
/// script, two per cell.
#[derive(Template)]
#[template(path = "airport.html")]
pub(crate) struct AirportTemplate {
    airport: Airport,
}

pub(crate) async fn get(
    State(state): State<Arc<AppState>>,
    Path(identifier): Path<String>,
) -> PageResult<AirportTemplate> {
    let airport = state.catalog.find(&identifier).ok_or_else(|| {
        PageFailure::new(
            ErrorCode::NotFound,
            format!("No airport found for identifier '{identifier}'."),
        )
    })?;
    debug!(%identifier, ident = %airport.ident, "rendering airport");

    Ok(HtmlTemplate(AirportTemplate {
        airport: airport.clone(),
    }))
}
