use super::*;

#[test]
fn bundled_catalog_normalizes_runway_ends() {
    let catalog = AirportCatalog::bundled().expect("bundled catalog");
    assert_eq!(catalog.len(), 3);

    let paly = catalog.find("kpao").expect("KPAO");
    assert_eq!(paly.runway_ends.len(), 2);

    let rwy31 = &paly.runway_ends[1];
    assert_eq!(rwy31.ident, "31");
    assert_eq!(rwy31.heading, 310);
    assert_eq!(rwy31.displaced_threshold_ft, 150);
    assert!(!rwy31.is_grass);

    let half_moon = catalog.find("KHAF").expect("KHAF");
    assert!(half_moon.runway_ends.iter().all(|end| end.elevation_ft == 66));
}

#[test]
fn lettered_runways_fall_back_to_true_heading_and_turf_is_grass() {
    let catalog = AirportCatalog::bundled().expect("bundled catalog");
    let strip = catalog.find("8CA9").expect("strip");

    assert_eq!(strip.runway_ends[0].heading, 2);
    assert_eq!(strip.runway_ends[1].heading, 182);
    assert!(strip.runway_ends.iter().all(|end| end.is_grass));
}

#[test]
fn lookup_retries_without_the_first_character() {
    let catalog = AirportCatalog::from_json_str(
        r#"[{"ident": "O69", "name": "Petaluma", "elevation_ft": 90, "runways": []}]"#,
    )
    .expect("catalog");

    assert!(catalog.find("KO69").is_some());
    assert!(catalog.find("O69").is_some());
    assert!(catalog.find("X").is_none());
    assert!(catalog.find("KSFO").is_none());
}

#[test]
fn data_attributes_use_zero_padded_heading() {
    let end = RunwayEnd {
        ident: "09".to_string(),
        length_ft: 3000,
        displaced_threshold_ft: 0,
        elevation_ft: 120,
        heading: 90,
        is_grass: true,
    };

    let attributes = end.data_attributes();
    assert!(attributes.contains(&("data-heading", "090".to_string())));
    assert!(attributes.contains(&("data-is-grass", "true".to_string())));
    assert!(attributes.contains(&("data-displaced-threshold", "0".to_string())));
}

#[test]
fn malformed_catalog_is_a_typed_error() {
    assert!(matches!(
        AirportCatalog::from_json_str("{not json"),
        Err(PerformanceError::Catalog(_))
    ));
}

#[test]
fn oversized_runway_numbers_have_no_heading() {
    assert_eq!(heading_from_runway_number("36"), Some(360));
    assert_eq!(heading_from_runway_number("09L"), Some(90));
    assert_eq!(heading_from_runway_number("99"), None);
    assert_eq!(heading_from_runway_number("9999"), None);
    assert_eq!(heading_from_runway_number("00"), None);
}

#[test]
fn ourairports_export_joins_runways_by_airport_ref() {
    let airports = "\
id,ident,type,name,latitude_deg,longitude_deg,elevation_ft,iso_country
3580,KPAO,small_airport,Palo Alto Airport,37.461111,-122.115,7,US
9001,8CA9,small_airport,Sky Ranch,37.1,-121.9,,US
";
    let runways = "\
id,airport_ref,airport_ident,length_ft,width_ft,surface,le_ident,le_elevation_ft,le_heading_degT,le_displaced_threshold_ft,he_ident,he_elevation_ft,he_heading_degT,he_displaced_threshold_ft
1,3580,KPAO,2443,70,ASP,13,5,143,,31,7,323,150
2,9001,8CA9,2100,50,TURF,N,,2,,S,,182,
";

    let catalog = AirportCatalog::from_ourairports_csv(airports.as_bytes(), runways.as_bytes())
        .expect("csv catalog");
    assert_eq!(catalog.len(), 2);

    let paly = catalog.find("KPAO").expect("KPAO");
    assert!(paly.metars.is_empty());
    assert_eq!(paly.runway_ends.len(), 2);
    assert_eq!(paly.runway_ends[1].heading, 310);
    assert_eq!(paly.runway_ends[1].displaced_threshold_ft, 150);
    assert_eq!(paly.runway_ends[0].displaced_threshold_ft, 0);

    let strip = catalog.find("8CA9").expect("strip");
    assert_eq!(strip.elevation_ft, 0);
    assert_eq!(strip.runway_ends[1].heading, 182);
    assert!(strip.runway_ends.iter().all(|end| end.is_grass));
}

#[test]
fn malformed_csv_is_a_typed_error() {
    let airports = "id,ident,name,elevation_ft\nnot-a-number,KPAO,Palo Alto,7\n";
    assert!(matches!(
        AirportCatalog::from_ourairports_csv(airports.as_bytes(), "airport_ref\n".as_bytes()),
        Err(PerformanceError::Catalog(_))
    ));
}
