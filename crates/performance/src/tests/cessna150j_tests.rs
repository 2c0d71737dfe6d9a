use super::*;

fn cessna(headwind_kts: i16, temperature_f: i16, elevation_ft: i16, standard_f: i16) -> Cessna150J {
    Cessna150J::new(
        Velocity::Knots(headwind_kts),
        temperature_f,
        elevation_ft,
        standard_f,
    )
    .expect("within table")
}

#[test]
fn sea_level_calm_standard_day_matches_table() {
    let take_off = cessna(0, 59, 0, 59).calc_take_off();

    assert_eq!(take_off.distance_at_elevation, Distance::new(735, 1385));
    assert_eq!(take_off.corrections.temperature_correction, 0.0);
    assert_eq!(take_off.corrections.grass_offset_ft, 97);
    assert_eq!(
        take_off.corrections.final_distance(true),
        Distance::new(832, 1482)
    );
    assert_eq!(
        take_off.corrections.final_distance(false),
        Distance::new(735, 1385)
    );
}

#[test]
fn take_off_interpolates_altitude_and_corrects_for_heat() {
    let aircraft = cessna(10, 70, 500, 59);
    assert_eq!(aircraft.atmosphere.lower.altitude_ft, 0);
    assert_eq!(aircraft.atmosphere.upper.altitude_ft, 2500);

    let take_off = aircraft.calc_take_off();
    assert_eq!(take_off.distance_at_elevation, Distance::new(526, 1078));
    assert_eq!(
        take_off.corrections.corrected_for_temperature,
        Distance::new(543, 1112)
    );
    assert_eq!(take_off.corrections.grass_offset_ft, 78);
    assert_eq!(take_off.rows[0].headwind_kts, Some(10));
    assert_eq!(take_off.rows[2].headwind_kts, Some(20));
}

#[test]
fn take_off_at_table_edge_uses_top_headwind_row() {
    let take_off = cessna(20, 32, 7500, 32).calc_take_off();
    assert_eq!(take_off.distance_at_elevation, Distance::new(640, 1375));
}

#[test]
fn cold_day_never_shortens_distances() {
    let take_off = cessna(0, 20, 0, 59).calc_take_off();
    assert_eq!(take_off.corrections.temperature_correction, 0.0);
    assert_eq!(
        take_off.corrections.corrected_for_temperature,
        Distance::new(735, 1385)
    );
}

#[test]
fn landing_applies_headwind_and_grass_corrections() {
    let calm = cessna(0, 59, 0, 59).calc_landing();
    assert_eq!(calm.distance_at_elevation, Distance::new(445, 1075));
    assert_eq!(calm.corrections.grass_offset_ft, 215);
    assert_eq!(
        calm.corrections.final_distance(true),
        Distance::new(660, 1290)
    );

    let windy = cessna(8, 59, 0, 59).calc_landing();
    assert_eq!(windy.corrected_for_headwind, Distance::new(356, 860));
}

#[test]
fn rejects_conditions_outside_the_table() {
    assert_eq!(
        Cessna150J::new(Velocity::Knots(-5), 59, 0, 59).err(),
        Some(PerformanceError::Tailwind { knots: 5 })
    );
    assert_eq!(
        Cessna150J::new(Velocity::Knots(25), 59, 0, 59).err(),
        Some(PerformanceError::HeadwindOutOfRange { knots: 25 })
    );
    assert_eq!(
        Cessna150J::new(Velocity::Knots(5), 59, 8000, 59).err(),
        Some(PerformanceError::ElevationOutOfRange { feet: 8000 })
    );
    assert_eq!(
        Cessna150J::new(Velocity::Knots(5), 59, -10, 59).err(),
        Some(PerformanceError::ElevationOutOfRange { feet: -10 })
    );
}

#[test]
fn extreme_inputs_are_rejected_or_widened() {
    assert_eq!(
        Cessna150J::new(Velocity::Knots(i16::MIN), 59, 0, 59).err(),
        Some(PerformanceError::Tailwind { knots: 32768 })
    );

    let hot = Cessna150J::new(Velocity::Knots(0), i16::MAX, 0, -100).expect("within table");
    assert_eq!(hot.temperature_above_standard_f, 32867);
    let take_off = hot.calc_take_off();
    assert!(take_off.corrections.corrected_for_temperature.ground_run > 735);
}
