//! Airport and runway catalog behind the airport pages.

use std::{
    collections::HashMap,
    fmt::Display,
    fs::{self, File},
    io::Read,
    path::Path,
};

use serde::{Deserialize, Deserializer};
use tracing::{debug, info};

use crate::error::PerformanceError;

const BUNDLED_CATALOG: &str = include_str!("../data/airports.json");
const OURAIRPORTS_RUNWAYS_FILE: &str = "runways.csv";
const GRASS_SURFACE_MARKERS: [&str; 4] = ["GRASS", "TURF", "SOD", "GRS"];

fn default_if_null<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(de).map(Option::unwrap_or_default)
}

#[derive(Debug, Deserialize)]
struct RawRunway {
    // Only set in OurAirports runway rows, which refer to their airport by id.
    #[serde(default)]
    airport_ref: Option<u32>,
    #[serde(default, deserialize_with = "default_if_null")]
    length_ft: u32,
    #[serde(default)]
    surface: String,
    le_ident: String,
    #[serde(default, deserialize_with = "default_if_null")]
    le_elevation_ft: i32,
    #[serde(rename = "le_heading_degT", default, deserialize_with = "default_if_null")]
    le_heading_deg_t: f32,
    #[serde(default, deserialize_with = "default_if_null")]
    le_displaced_threshold_ft: u32,
    he_ident: String,
    #[serde(default, deserialize_with = "default_if_null")]
    he_elevation_ft: i32,
    #[serde(rename = "he_heading_degT", default, deserialize_with = "default_if_null")]
    he_heading_deg_t: f32,
    #[serde(default, deserialize_with = "default_if_null")]
    he_displaced_threshold_ft: u32,
}

#[derive(Debug, Deserialize)]
struct RawAirport {
    ident: String,
    name: String,
    #[serde(default, deserialize_with = "default_if_null")]
    elevation_ft: i32,
    #[serde(default)]
    metars: Vec<String>,
    #[serde(default)]
    runways: Vec<RawRunway>,
}

/// A row of the OurAirports `airports.csv` export.
#[derive(Debug, Deserialize)]
struct CsvAirport {
    id: u32,
    ident: String,
    name: String,
    #[serde(default, deserialize_with = "default_if_null")]
    elevation_ft: i32,
}

/// One usable direction of a runway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunwayEnd {
    pub ident: String,
    pub length_ft: u32,
    pub displaced_threshold_ft: u32,
    pub elevation_ft: i32,
    pub heading: u16,
    pub is_grass: bool,
}

impl RunwayEnd {
    /// The `data-*` attributes the runway form carries for this end.
    pub fn data_attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("data-ident", self.ident.clone()),
            ("data-length", self.length_ft.to_string()),
            (
                "data-displaced-threshold",
                self.displaced_threshold_ft.to_string(),
            ),
            ("data-elevation", self.elevation_ft.to_string()),
            ("data-heading", format!("{:03}", self.heading)),
            ("data-is-grass", self.is_grass.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airport {
    pub ident: String,
    pub name: String,
    pub elevation_ft: i32,
    pub metars: Vec<String>,
    pub runway_ends: Vec<RunwayEnd>,
}

#[derive(Debug, Clone, Default)]
pub struct AirportCatalog {
    airports: HashMap<String, Airport>,
}

impl AirportCatalog {
    pub fn bundled() -> Result<Self, PerformanceError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// Reads a JSON catalog, or an OurAirports `airports.csv` export when the
    /// path ends in `.csv`; its `runways.csv` is expected alongside.
    pub fn load(path: &Path) -> Result<Self, PerformanceError> {
        let read_error = |path: &Path, e: std::io::Error| {
            PerformanceError::Catalog(format!("{}: {e}", path.display()))
        };

        let is_csv = path
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"));
        let catalog = if is_csv {
            let runways_path = path.with_file_name(OURAIRPORTS_RUNWAYS_FILE);
            let airports = File::open(path).map_err(|e| read_error(path, e))?;
            let runways = File::open(&runways_path).map_err(|e| read_error(&runways_path, e))?;
            Self::from_ourairports_csv(airports, runways)?
        } else {
            let raw = fs::read_to_string(path).map_err(|e| read_error(path, e))?;
            Self::from_json_str(&raw)?
        };
        info!(path = %path.display(), airports = catalog.len(), "loaded airport catalog");
        Ok(catalog)
    }

    /// Joins OurAirports runway rows onto their airports through `airport_ref`.
    /// CSV airports carry no METAR reports.
    pub fn from_ourairports_csv(
        airports: impl Read,
        runways: impl Read,
    ) -> Result<Self, PerformanceError> {
        let mut runways_by_airport: HashMap<u32, Vec<RawRunway>> = HashMap::new();
        for record in csv::Reader::from_reader(runways).deserialize::<RawRunway>() {
            let runway = record.map_err(catalog_error)?;
            match runway.airport_ref {
                Some(airport_ref) => runways_by_airport.entry(airport_ref).or_default().push(runway),
                None => debug!(ident = %runway.le_ident, "runway row without airport_ref skipped"),
            }
        }

        let mut catalog = HashMap::new();
        for record in csv::Reader::from_reader(airports).deserialize::<CsvAirport>() {
            let row = record.map_err(catalog_error)?;
            let airport = normalize_airport(RawAirport {
                ident: row.ident,
                name: row.name,
                elevation_ft: row.elevation_ft,
                metars: Vec::new(),
                runways: runways_by_airport.remove(&row.id).unwrap_or_default(),
            });
            catalog.insert(airport.ident.clone(), airport);
        }
        Ok(Self { airports: catalog })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, PerformanceError> {
        let raw_airports: Vec<RawAirport> = serde_json::from_str(raw).map_err(catalog_error)?;

        let airports = raw_airports
            .into_iter()
            .map(|airport| {
                let airport = normalize_airport(airport);
                (airport.ident.clone(), airport)
            })
            .collect();
        Ok(Self { airports })
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Case-insensitive lookup. An identifier that misses is retried without
    /// its first character, so `KPAO` also finds a catalog entry `PAO`.
    pub fn find(&self, identifier: &str) -> Option<&Airport> {
        let identifier = identifier.trim().to_ascii_uppercase();
        if let Some(airport) = self.airports.get(&identifier) {
            return Some(airport);
        }

        let short = identifier.get(1..).filter(|short| !short.is_empty())?;
        let found = self.airports.get(short);
        if found.is_some() {
            debug!(%identifier, short, "airport found by short identifier");
        }
        found
    }
}

fn catalog_error(error: impl Display) -> PerformanceError {
    PerformanceError::Catalog(error.to_string())
}

fn normalize_airport(raw: RawAirport) -> Airport {
    let mut runway_ends = Vec::with_capacity(raw.runways.len() * 2);
    for runway in raw.runways {
        let is_grass = is_grass_surface(&runway.surface);
        let ends = [
            (
                runway.le_ident,
                runway.le_elevation_ft,
                runway.le_heading_deg_t,
                runway.le_displaced_threshold_ft,
            ),
            (
                runway.he_ident,
                runway.he_elevation_ft,
                runway.he_heading_deg_t,
                runway.he_displaced_threshold_ft,
            ),
        ];

        for (ident, elevation_ft, true_heading, displaced_threshold_ft) in ends {
            if ident.is_empty() {
                continue;
            }
            let heading = heading_from_runway_number(&ident)
                .unwrap_or_else(|| true_heading.round() as u16);
            runway_ends.push(RunwayEnd {
                ident,
                length_ft: runway.length_ft,
                displaced_threshold_ft,
                elevation_ft: if elevation_ft == 0 {
                    raw.elevation_ft
                } else {
                    elevation_ft
                },
                heading,
                is_grass,
            });
        }
    }

    Airport {
        ident: raw.ident.to_ascii_uppercase(),
        name: raw.name,
        elevation_ft: raw.elevation_ft,
        metars: raw.metars,
        runway_ends,
    }
}

/// `09L` is heading 090; idents without a runway number (`N`, `H1`, `99`)
/// have none.
fn heading_from_runway_number(ident: &str) -> Option<u16> {
    let digits: String = ident.chars().take_while(|ch| ch.is_ascii_digit()).collect();
    let number = digits.parse::<u16>().ok()?;
    number
        .checked_mul(10)
        .filter(|heading| (1..=360).contains(heading))
}

fn is_grass_surface(surface: &str) -> bool {
    let surface = surface.to_ascii_uppercase();
    GRASS_SURFACE_MARKERS
        .iter()
        .any(|marker| surface.contains(marker))
}

#[cfg(test)]
#[path = "tests/airports_tests.rs"]
mod tests;
