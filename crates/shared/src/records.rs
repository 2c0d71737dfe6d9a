use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Runway and weather data accumulated by the runway form.
///
/// Keys use the camelCase dataset names from the form. Attributes that are not
/// one of the typed fields land in `extra` as verbatim strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunwaySelectionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displaced_threshold: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_grass: Option<bool>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl RunwaySelectionRecord {
    /// True once both `metar` and `length` hold truthy values: a non-empty
    /// string and a non-zero number.
    pub fn is_submittable(&self) -> bool {
        let has_metar = self.metar.as_deref().is_some_and(|metar| !metar.is_empty());
        let has_length = self.length.is_some_and(|length| length != 0);
        has_metar && has_length
    }

    pub fn set_metar(&mut self, metar: impl Into<String>) {
        self.metar = Some(metar.into());
    }

    /// Merges one dataset entry, overwriting any earlier value for the key.
    pub fn merge_attribute(&mut self, key: &str, value: &str) {
        match key {
            "length" => self.length = parse_leading_int(value),
            "displacedThreshold" => self.displaced_threshold = parse_leading_int(value),
            "elevation" => self.elevation = parse_leading_int(value),
            "heading" => self.heading = parse_leading_int(value),
            "isGrass" => self.is_grass = Some(value == "true"),
            "metar" => self.metar = Some(value.to_string()),
            _ => {
                self.extra.insert(key.to_string(), value.to_string());
            }
        }
    }
}

/// Reads the leading integer of `raw`: optional whitespace, an optional sign,
/// then a run of decimal digits. Trailing text is ignored, so `"090"` is 90 and
/// `"3000ft"` is 3000. Returns `None` when no digit follows.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_digit())
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude = rest[..digits_end].parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Inputs for one aircraft performance page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRequest {
    pub elevation: i64,
    pub headwind: i64,
    pub standard_temperature: i64,
    pub temperature: i64,
    pub is_grass: bool,
}

#[cfg(test)]
#[path = "tests/records_tests.rs"]
mod tests;
