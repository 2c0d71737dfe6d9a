//! Navigation targets for the server-rendered frames.

use std::fmt::Display;

use shared::{
    domain::PerformanceAction,
    records::{PerformanceRequest, RunwaySelectionRecord},
};
use url::form_urlencoded;

/// Rendered in place of a value the record does not hold yet.
const UNDEFINED: &str = "undefined";

/// Percent-encodes one query value or path segment. Spaces become `%20`, the
/// form a browser produces when a frame source is assigned.
pub fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

struct QueryBuilder {
    target: String,
    has_params: bool,
}

impl QueryBuilder {
    fn new(path: impl Into<String>) -> Self {
        Self {
            target: path.into(),
            has_params: false,
        }
    }

    fn param(mut self, name: &str, value: impl Display) -> Self {
        self.target.push(if self.has_params { '&' } else { '?' });
        self.target.push_str(name);
        self.target.push('=');
        self.target.push_str(&encode_component(&value.to_string()));
        self.has_params = true;
        self
    }

    fn optional_param<T: Display>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self.param(name, UNDEFINED),
        }
    }

    fn finish(self) -> String {
        self.target
    }
}

/// `/airport/{value}`
pub fn airport_path(value: &str) -> String {
    format!("/airport/{}", encode_component(value))
}

/// `/runway?is_takeoff=..&is_grass=..&metar=..&heading=..&elevation=..`
pub fn runway_path(record: &RunwaySelectionRecord, is_takeoff: bool) -> String {
    QueryBuilder::new("/runway")
        .param("is_takeoff", is_takeoff)
        .optional_param("is_grass", record.is_grass)
        .optional_param("metar", record.metar.as_deref())
        .optional_param("heading", record.heading)
        .optional_param("elevation", record.elevation)
        .finish()
}

/// `/aircraft/cessna150j/{take-off|landing}?elevation_ft=..&headwind_kts=..&standard_temperature_f=..&temperature_f=..&is_grass=..`
pub fn performance_path(action: PerformanceAction, request: &PerformanceRequest) -> String {
    QueryBuilder::new(format!("/aircraft/cessna150j/{}", action.frame_id()))
        .param("elevation_ft", request.elevation)
        .param("headwind_kts", request.headwind)
        .param("standard_temperature_f", request.standard_temperature)
        .param("temperature_f", request.temperature)
        .param("is_grass", request.is_grass)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runway_path_encodes_metar_and_normalizes_numbers() {
        let mut record = RunwaySelectionRecord::default();
        for (key, value) in [
            ("length", "3000"),
            ("elevation", "120"),
            ("heading", "090"),
            ("isGrass", "true"),
            ("displacedThreshold", "0"),
        ] {
            record.merge_attribute(key, value);
        }
        record.set_metar("METAR KXYZ...");

        assert_eq!(
            runway_path(&record, true),
            "/runway?is_takeoff=true&is_grass=true&metar=METAR%20KXYZ...&heading=90&elevation=120"
        );
    }

    #[test]
    fn missing_record_fields_render_as_undefined() {
        let mut record = RunwaySelectionRecord::default();
        record.set_metar("KPAO 31012KT 21/10");
        record.merge_attribute("length", "2443");

        assert_eq!(
            runway_path(&record, false),
            "/runway?is_takeoff=false&is_grass=undefined&metar=KPAO%2031012KT%2021%2F10&heading=undefined&elevation=undefined"
        );
    }

    #[test]
    fn performance_path_selects_page_by_action() {
        let request = PerformanceRequest {
            elevation: 500,
            headwind: 10,
            standard_temperature: 59,
            temperature: 70,
            is_grass: false,
        };

        assert_eq!(
            performance_path(PerformanceAction::TakeOff, &request),
            "/aircraft/cessna150j/take-off?elevation_ft=500&headwind_kts=10&standard_temperature_f=59&temperature_f=70&is_grass=false"
        );
        assert!(performance_path(PerformanceAction::from_label("arrive"), &request)
            .starts_with("/aircraft/cessna150j/landing?"));
    }

    #[test]
    fn literal_plus_signs_survive_encoding() {
        assert_eq!(encode_component("+RA BR"), "%2BRA%20BR");
        assert_eq!(airport_path("KPAO"), "/airport/KPAO");
    }
}
