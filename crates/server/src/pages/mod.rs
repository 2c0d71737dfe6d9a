//! Server-rendered pages loaded into the planner's frames.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use performance::PerformanceError;
use serde::{Deserialize, Deserializer};
use shared::error::{ApiException, ErrorCode};
use tracing::error;

pub mod aircraft;
pub mod airport;
pub mod runway;

pub(crate) type PageResult<T> = Result<HtmlTemplate<T>, PageFailure>;

/// Renders an askama template as the response body.
pub(crate) struct HtmlTemplate<T>(pub T);

impl<T: Template> IntoResponse for HtmlTemplate<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                error!(%err, "template render failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub(crate) struct ErrorTemplate {
    title: &'static str,
    message: String,
}

/// Error rendered as a page so it shows inside the frame that asked.
#[derive(Debug)]
pub(crate) struct PageFailure(pub ApiException);

impl PageFailure {
    pub(crate) fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self(ApiException::new(code, message))
    }

    fn status(&self) -> StatusCode {
        match self.0.code {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Validation => StatusCode::BAD_REQUEST,
            ErrorCode::OutOfRange => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PerformanceError> for PageFailure {
    fn from(value: PerformanceError) -> Self {
        let code = match &value {
            PerformanceError::Metar(_) => ErrorCode::Validation,
            PerformanceError::Catalog(_) => ErrorCode::Internal,
            PerformanceError::Tailwind { .. }
            | PerformanceError::TailwindOverLimit { .. }
            | PerformanceError::HeadwindOutOfRange { .. }
            | PerformanceError::ElevationOutOfRange { .. }
            | PerformanceError::PressureAltitudeOutOfRange { .. }
            | PerformanceError::TemperatureOutOfRange { .. }
            | PerformanceError::OverMaxWeight { .. }
            | PerformanceError::NotPublished { .. } => ErrorCode::OutOfRange,
        };
        Self::new(code, value.to_string())
    }
}

impl IntoResponse for PageFailure {
    fn into_response(self) -> Response {
        let status = self.status();
        let template = ErrorTemplate {
            title: self.0.code.title(),
            message: self.0.message,
        };
        (status, HtmlTemplate(template)).into_response()
    }
}

/// Query flags arrive as whatever the page interpolated, `undefined`
/// included. Only the literal `true` is true.
pub(crate) fn lenient_bool<'de, D>(de: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.as_deref() == Some("true"))
}
