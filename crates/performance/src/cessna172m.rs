//! Cessna 172M take-off and landing distances from the owner's manual tables,
//! interpolated over pressure altitude and temperature.
//!
//! Take-off is published at 2300, 2100 and 1900 lbs, landing at 2300 lbs only.
//! Blank take-off cells are where climb after lift-off falls under 150 fpm.

use serde::Serialize;
use tracing::debug;

use crate::{
    error::PerformanceError,
    units::{fraction_between, lerp_distance, Bounds, Distance, Temperature, Velocity},
};

pub const MAX_WEIGHT_LBS: i16 = 2300;
pub const MAX_TAILWIND_KTS: u16 = 10;
pub const STANDARD_PRESSURE_IN_HG: f64 = 29.92;

const ALTITUDE_STEP_FT: i32 = 1000;
const TEMPERATURE_STEP_C: i16 = 10;
const TABLE_ROWS: usize = 9;
const TABLE_COLUMNS: usize = 5;

// 10% less per 9 kts of headwind, 10% more per 2 kts of tailwind.
const HEADWIND_INTERVAL_KTS: f64 = 9.0;
const TAILWIND_INTERVAL_KTS: f64 = 2.0;
const TAKE_OFF_GRASS_SHARE: f64 = 0.15;
const LANDING_GRASS_SHARE: f64 = 0.45;

const fn cell(ground_run: i32, clear_50_ft_obstacle: i32) -> Option<Distance> {
    Some(Distance::new(ground_run, clear_50_ft_obstacle))
}

const TAKE_OFF_AT_2300_LBS: [[Option<Distance>; 5]; 9] = [
    [cell(775, 1380), cell(835, 1475), cell(895, 1575), cell(960, 1685), cell(1030, 1795)],
    [cell(850, 1510), cell(915, 1615), cell(980, 1725), cell(1050, 1845), cell(1125, 1970)],
    [cell(930, 1650), cell(1000, 1770), cell(1075, 1895), cell(1155, 2030), cell(1235, 2170)],
    [cell(1020, 1815), cell(1100, 1945), cell(1180, 2085), cell(1270, 2235), cell(1360, 2395)],
    [cell(1125, 2000), cell(1210, 2145), cell(1300, 2305), cell(1395, 2475), cell(1495, 2655)],
    [cell(1235, 2210), cell(1330, 2375), cell(1430, 2555), cell(1540, 2750), cell(1650, 2960)],
    [cell(1365, 2450), cell(1470, 2640), cell(1580, 2850), cell(1700, 3070), None],
    [cell(1505, 2730), cell(1625, 2955), cell(1750, 3190), None, None],
    [cell(1505, 2730), cell(1625, 2955), cell(1750, 3190), None, None],
];

const TAKE_OFF_AT_2100_LBS: [[Option<Distance>; 5]; 9] = [
    [cell(630, 1130), cell(680, 1210), cell(725, 1290), cell(780, 1375), cell(835, 1465)],
    [cell(690, 1235), cell(740, 1320), cell(795, 1405), cell(855, 1500), cell(915, 1600)],
    [cell(755, 1350), cell(810, 1440), cell(870, 1540), cell(935, 1645), cell(1000, 1755)],
    [cell(830, 1475), cell(890, 1580), cell(955, 1690), cell(1025, 1805), cell(1100, 1930)],
    [cell(910, 1620), cell(980, 1735), cell(1050, 1860), cell(1125, 1990), cell(1210, 2130)],
    [cell(1000, 1780), cell(1075, 1910), cell(1155, 2050), cell(1240, 2195), cell(1330, 2355)],
    [cell(1100, 1965), cell(1185, 2115), cell(1275, 2270), cell(1370, 2435), cell(1465, 2615)],
    [cell(1215, 2180), cell(1305, 2345), cell(1405, 2520), cell(1510, 2715), cell(1620, 2920)],
    [cell(1340, 2425), cell(1445, 2615), cell(1555, 2815), cell(1675, 3040), cell(1795, 3280)],
];

const TAKE_OFF_AT_1900_LBS: [[Option<Distance>; 5]; 9] = [
    [cell(505, 915), cell(540, 975), cell(580, 1035), cell(620, 1105), cell(665, 1175)],
    [cell(550, 995), cell(590, 1060), cell(635, 1130), cell(680, 1205), cell(725, 1280)],
    [cell(600, 1085), cell(645, 1155), cell(695, 1230), cell(745, 1315), cell(795, 1400)],
    [cell(660, 1180), cell(710, 1260), cell(760, 1345), cell(815, 1435), cell(870, 1530)],
    [cell(725, 1290), cell(775, 1380), cell(835, 1475), cell(895, 1575), cell(955, 1680)],
    [cell(795, 1415), cell(855, 1515), cell(915, 1620), cell(985, 1735), cell(1055, 1850)],
    [cell(870, 1555), cell(940, 1670), cell(1010, 1785), cell(1080, 1910), cell(1160, 2045)],
    [cell(960, 1715), cell(1035, 1840), cell(1110, 1975), cell(1195, 2115), cell(1280, 2265)],
    [cell(1060, 1900), cell(1140, 2040), cell(1225, 2190), cell(1320, 2350), cell(1415, 2520)],
];

const LANDING_AT_2300_LBS: [[Distance; 5]; 9] = [
    [Distance::new(495, 1205), Distance::new(510, 1235), Distance::new(530, 1265), Distance::new(545, 1295), Distance::new(565, 1330)],
    [Distance::new(510, 1235), Distance::new(530, 1265), Distance::new(550, 1300), Distance::new(565, 1330), Distance::new(585, 1365)],
    [Distance::new(530, 1265), Distance::new(550, 1300), Distance::new(570, 1335), Distance::new(590, 1370), Distance::new(610, 1405)],
    [Distance::new(550, 1300), Distance::new(570, 1335), Distance::new(590, 1370), Distance::new(610, 1405), Distance::new(630, 1440)],
    [Distance::new(570, 1335), Distance::new(590, 1370), Distance::new(615, 1410), Distance::new(635, 1445), Distance::new(655, 1480)],
    [Distance::new(590, 1370), Distance::new(615, 1415), Distance::new(635, 1450), Distance::new(655, 1485), Distance::new(680, 1525)],
    [Distance::new(615, 1415), Distance::new(640, 1455), Distance::new(660, 1490), Distance::new(685, 1535), Distance::new(705, 1570)],
    [Distance::new(640, 1455), Distance::new(660, 1495), Distance::new(685, 1535), Distance::new(710, 1575), Distance::new(730, 1615)],
    [Distance::new(665, 1500), Distance::new(690, 1540), Distance::new(710, 1580), Distance::new(735, 1620), Distance::new(760, 1665)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TakeOffWeight {
    At2300Lbs,
    At2100Lbs,
    At1900Lbs,
}

impl TakeOffWeight {
    /// The lightest published weight that is not below `weight_lbs`.
    pub fn for_weight(weight_lbs: i16) -> Result<Self, PerformanceError> {
        match weight_lbs {
            w if w > MAX_WEIGHT_LBS => Err(PerformanceError::OverMaxWeight {
                pounds: w,
                max: MAX_WEIGHT_LBS,
            }),
            w if w > 2100 => Ok(Self::At2300Lbs),
            w if w > 1900 => Ok(Self::At2100Lbs),
            _ => Ok(Self::At1900Lbs),
        }
    }

    pub fn pounds(self) -> i16 {
        match self {
            Self::At2300Lbs => 2300,
            Self::At2100Lbs => 2100,
            Self::At1900Lbs => 1900,
        }
    }

    fn table(self) -> &'static [[Option<Distance>; TABLE_COLUMNS]; TABLE_ROWS] {
        match self {
            Self::At2300Lbs => &TAKE_OFF_AT_2300_LBS,
            Self::At2100Lbs => &TAKE_OFF_AT_2100_LBS,
            Self::At1900Lbs => &TAKE_OFF_AT_1900_LBS,
        }
    }
}

/// Pressure altitude from field elevation and altimeter setting; the field
/// elevation itself without a setting.
pub fn pressure_altitude_ft(elevation_ft: i16, pressure_in_hg: Option<f64>) -> i32 {
    match pressure_in_hg {
        Some(in_hg) => {
            (f64::from(elevation_ft) + (STANDARD_PRESSURE_IN_HG - in_hg) * 1000.0).round() as i32
        }
        None => i32::from(elevation_ft),
    }
}

/// Rows and columns of the tables either side of the conditions. Below sea
/// level and below 0 °C the first row or column is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableBracket {
    pub rows: Bounds<usize>,
    pub columns: Bounds<usize>,
}

impl TableBracket {
    fn find(pressure_altitude_ft: i32, temperature_c: i16) -> Result<Self, PerformanceError> {
        let top_altitude_ft = ALTITUDE_STEP_FT * (TABLE_ROWS as i32 - 1);
        if pressure_altitude_ft > top_altitude_ft {
            return Err(PerformanceError::PressureAltitudeOutOfRange {
                feet: pressure_altitude_ft,
            });
        }
        let top_temperature_c = TEMPERATURE_STEP_C * (TABLE_COLUMNS as i16 - 1);
        if temperature_c > top_temperature_c {
            return Err(PerformanceError::TemperatureOutOfRange {
                celsius: temperature_c,
            });
        }

        let altitude = pressure_altitude_ft.max(0);
        let row = (altitude / ALTITUDE_STEP_FT) as usize;
        let upper_row = if altitude % ALTITUDE_STEP_FT == 0 {
            row
        } else {
            row + 1
        };

        let temperature = temperature_c.max(0);
        let column = (temperature / TEMPERATURE_STEP_C) as usize;
        let upper_column = if temperature % TEMPERATURE_STEP_C == 0 {
            column
        } else {
            column + 1
        };

        Ok(Self {
            rows: Bounds {
                lower: row,
                upper: upper_row,
            },
            columns: Bounds {
                lower: column,
                upper: upper_column,
            },
        })
    }

    pub fn pressure_altitudes_ft(&self) -> Bounds<i32> {
        Bounds {
            lower: self.rows.lower as i32 * ALTITUDE_STEP_FT,
            upper: self.rows.upper as i32 * ALTITUDE_STEP_FT,
        }
    }

    pub fn temperatures_c(&self) -> Bounds<i16> {
        Bounds {
            lower: self.columns.lower as i16 * TEMPERATURE_STEP_C,
            upper: self.columns.upper as i16 * TEMPERATURE_STEP_C,
        }
    }
}

/// One table row labelled with its pressure altitude: the distances at the
/// bracketing temperatures and the value interpolated between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AltitudeRow {
    pub pressure_altitude_ft: i32,
    pub lower: Distance,
    pub interpolated: Distance,
    pub upper: Distance,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Corrections {
    pub wind_factor: f64,
    pub corrected_for_wind: Distance,
    pub grass_share: f64,
    pub grass_offset_ft: i32,
    pub corrected_for_grass: Distance,
}

impl Corrections {
    pub fn final_distance(&self, is_grass: bool) -> Distance {
        if is_grass {
            self.corrected_for_grass
        } else {
            self.corrected_for_wind
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Performance {
    pub weight_lbs: i16,
    pub temperatures_c: Bounds<i16>,
    pub altitude_fraction: f64,
    pub temperature_fraction: f64,
    pub rows: [AltitudeRow; 3],
    pub distance_at_elevation: Distance,
    pub corrections: Corrections,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cessna172M {
    pub headwind_kts: i16,
    pub elevation_ft: i16,
    pub pressure_in_hg: Option<f64>,
    pub pressure_altitude_ft: i32,
    pub temperature_c: i16,
    pub bracket: TableBracket,
}

impl Cessna172M {
    pub fn new(
        headwind: Velocity,
        elevation_ft: i16,
        pressure_in_hg: Option<f64>,
        temperature: Temperature,
    ) -> Result<Self, PerformanceError> {
        let headwind_kts = headwind.knots();
        if headwind_kts < 0 && headwind_kts.unsigned_abs() > MAX_TAILWIND_KTS {
            return Err(PerformanceError::TailwindOverLimit {
                knots: headwind_kts.unsigned_abs(),
                limit: MAX_TAILWIND_KTS,
            });
        }

        let pressure_altitude_ft = pressure_altitude_ft(elevation_ft, pressure_in_hg);
        let temperature_c = temperature.celsius();
        let bracket = TableBracket::find(pressure_altitude_ft, temperature_c)?;
        debug!(
            headwind_kts,
            pressure_altitude_ft,
            temperature_c,
            ?bracket,
            "bracketed cessna 172m tables"
        );

        Ok(Self {
            headwind_kts,
            elevation_ft,
            pressure_in_hg,
            pressure_altitude_ft,
            temperature_c,
            bracket,
        })
    }

    pub fn calc_take_off(&self, weight_lbs: i16) -> Result<Performance, PerformanceError> {
        let weight = TakeOffWeight::for_weight(weight_lbs)?;
        let published = |cell: Option<Distance>| {
            cell.ok_or(PerformanceError::NotPublished {
                pressure_altitude_ft: self.pressure_altitude_ft,
                temperature_c: self.temperature_c,
            })
        };
        let [[low_low, low_high], [high_low, high_high]] = self.corners(weight.table());
        let corners = [
            [published(low_low)?, published(low_high)?],
            [published(high_low)?, published(high_high)?],
        ];
        Ok(self.performance(weight.pounds(), corners, TAKE_OFF_GRASS_SHARE))
    }

    pub fn calc_landing(&self) -> Performance {
        let corners = self.corners(&LANDING_AT_2300_LBS);
        self.performance(MAX_WEIGHT_LBS, corners, LANDING_GRASS_SHARE)
    }

    // [lower row, upper row] x [lower column, upper column]
    fn corners<T: Copy>(&self, table: &[[T; TABLE_COLUMNS]; TABLE_ROWS]) -> [[T; 2]; 2] {
        let rows = self.bracket.rows;
        let columns = self.bracket.columns;
        [
            [
                table[rows.lower][columns.lower],
                table[rows.lower][columns.upper],
            ],
            [
                table[rows.upper][columns.lower],
                table[rows.upper][columns.upper],
            ],
        ]
    }

    fn performance(
        &self,
        weight_lbs: i16,
        corners: [[Distance; 2]; 2],
        grass_share: f64,
    ) -> Performance {
        let altitudes = self.bracket.pressure_altitudes_ft();
        let temperatures_c = self.bracket.temperatures_c();
        let altitude_fraction = fraction_between(
            f64::from(self.pressure_altitude_ft.max(0)),
            f64::from(altitudes.lower),
            f64::from(altitudes.upper),
        );
        let temperature_fraction = fraction_between(
            f64::from(self.temperature_c.max(0)),
            f64::from(temperatures_c.lower),
            f64::from(temperatures_c.upper),
        );

        let [[low_low, low_high], [high_low, high_high]] = corners;
        let low_row = lerp_distance(temperature_fraction, low_low, low_high);
        let high_row = lerp_distance(temperature_fraction, high_low, high_high);
        let at_low_temperature = lerp_distance(altitude_fraction, low_low, high_low);
        let at_high_temperature = lerp_distance(altitude_fraction, low_high, high_high);
        let distance_at_elevation = lerp_distance(altitude_fraction, low_row, high_row);

        Performance {
            weight_lbs,
            temperatures_c,
            altitude_fraction,
            temperature_fraction,
            rows: [
                AltitudeRow {
                    pressure_altitude_ft: altitudes.lower,
                    lower: low_low,
                    interpolated: low_row,
                    upper: low_high,
                },
                AltitudeRow {
                    pressure_altitude_ft: self.pressure_altitude_ft,
                    lower: at_low_temperature,
                    interpolated: distance_at_elevation,
                    upper: at_high_temperature,
                },
                AltitudeRow {
                    pressure_altitude_ft: altitudes.upper,
                    lower: high_low,
                    interpolated: high_row,
                    upper: high_high,
                },
            ],
            distance_at_elevation,
            corrections: self.corrections(distance_at_elevation, grass_share),
        }
    }

    // Grass adds a share of the ground run to both figures.
    fn corrections(&self, distance: Distance, grass_share: f64) -> Corrections {
        let headwind_kts = f64::from(self.headwind_kts);
        let wind_factor = if headwind_kts >= 0.0 {
            (1.0 - 0.1 * (headwind_kts / HEADWIND_INTERVAL_KTS)).max(0.0)
        } else {
            1.0 + 0.1 * (-headwind_kts / TAILWIND_INTERVAL_KTS)
        };
        let corrected_for_wind = distance.scaled(wind_factor);
        let grass_offset_ft = (f64::from(corrected_for_wind.ground_run) * grass_share).round() as i32;

        Corrections {
            wind_factor,
            corrected_for_wind,
            grass_share,
            grass_offset_ft,
            corrected_for_grass: corrected_for_wind.offset(grass_offset_ft),
        }
    }
}

#[cfg(test)]
#[path = "tests/cessna172m_tests.rs"]
mod tests;
