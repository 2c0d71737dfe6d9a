use super::*;

#[test]
fn leading_int_parsing_matches_form_values() {
    assert_eq!(parse_leading_int("090"), Some(90));
    assert_eq!(parse_leading_int("  3000ft"), Some(3000));
    assert_eq!(parse_leading_int("-12"), Some(-12));
    assert_eq!(parse_leading_int("+7"), Some(7));
    assert_eq!(parse_leading_int("ft3000"), None);
    assert_eq!(parse_leading_int(""), None);
    assert_eq!(parse_leading_int("-"), None);
}

#[test]
fn merge_coerces_known_keys_and_keeps_others_verbatim() {
    let mut record = RunwaySelectionRecord::default();
    record.merge_attribute("length", "3000");
    record.merge_attribute("heading", "090");
    record.merge_attribute("isGrass", "true");
    record.merge_attribute("ident", "09");

    assert_eq!(record.length, Some(3000));
    assert_eq!(record.heading, Some(90));
    assert_eq!(record.is_grass, Some(true));
    assert_eq!(record.extra.get("ident").map(String::as_str), Some("09"));

    record.merge_attribute("isGrass", "TRUE");
    assert_eq!(record.is_grass, Some(false));
}

#[test]
fn submittable_requires_truthy_metar_and_length() {
    let mut record = RunwaySelectionRecord::default();
    assert!(!record.is_submittable());

    record.set_metar("");
    record.merge_attribute("length", "3000");
    assert!(!record.is_submittable());

    record.set_metar("KXYZ 121753Z 09010KT 10SM CLR 21/10 A3001");
    assert!(record.is_submittable());

    record.merge_attribute("length", "0");
    assert!(!record.is_submittable());

    record.merge_attribute("length", "unknown");
    assert_eq!(record.length, None);
    assert!(!record.is_submittable());
}

#[test]
fn record_serializes_with_dataset_key_names() {
    let mut record = RunwaySelectionRecord::default();
    record.merge_attribute("displacedThreshold", "150");
    record.merge_attribute("isGrass", "false");
    record.merge_attribute("ident", "27");

    let json = serde_json::to_value(&record).expect("json");
    assert_eq!(json["displacedThreshold"], 150);
    assert_eq!(json["isGrass"], false);
    assert_eq!(json["ident"], "27");
    assert!(json.get("metar").is_none());

    let back: RunwaySelectionRecord = serde_json::from_value(json).expect("record");
    assert_eq!(back, record);
}
