use super::*;

#[test]
fn reads_station_wind_and_temperature() {
    let metar = Metar::parse("METAR KPAO 121753Z 31012G18KT 10SM FEW030 21/10 A3001")
        .expect("metar");

    assert_eq!(metar.station.as_deref(), Some("KPAO"));
    assert_eq!(metar.wind.direction, WindDirection::Heading(310));
    assert_eq!(metar.wind.speed, Velocity::Knots(12));
    assert_eq!(metar.wind.gust, Some(Velocity::Knots(18)));
    assert_eq!(metar.temperature, Temperature::Celsius(21));
    assert_eq!(metar.dewpoint, Some(Temperature::Celsius(10)));
}

#[test]
fn negative_temperatures_and_calm_wind() {
    let metar = Metar::parse("KHAF 020356Z 00000KT 10SM CLR M02/M05 A2992").expect("metar");

    assert_eq!(metar.wind.direction, WindDirection::Calm);
    assert_eq!(metar.wind.speed.knots(), 0);
    assert_eq!(metar.temperature, Temperature::Celsius(-2));
    assert_eq!(metar.dewpoint, Some(Temperature::Celsius(-5)));
}

#[test]
fn variable_wind_keeps_its_speed() {
    let metar = Metar::parse("KPAO 121753Z VRB04KT 10SM CLR 18/09 A3001").expect("metar");

    assert_eq!(metar.wind.direction, WindDirection::Variable);
    assert_eq!(metar.wind.speed, Velocity::Knots(4));
}

#[test]
fn metric_wind_converts_to_knots() {
    let metar = Metar::parse("EGLL 121150Z 24005MPS 9999 FEW020 12/08 Q1012").expect("metar");

    assert_eq!(metar.wind.direction, WindDirection::Heading(240));
    assert_eq!(metar.wind.speed.knots(), 10);
}

#[test]
fn rejects_unreadable_reports() {
    assert_eq!(Metar::parse("   "), Err(MetarError::Empty));
    assert!(matches!(
        Metar::parse("not a report"),
        Err(MetarError::Decode(_))
    ));
}
