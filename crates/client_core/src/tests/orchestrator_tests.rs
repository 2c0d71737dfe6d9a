use super::*;
use crate::frame::{HeadlessFrame, HeadlessRegion};
use shared::domain::FrameId;
use tokio::sync::mpsc::unbounded_channel;

fn page_frames() -> Vec<HeadlessFrame> {
    vec![
        HeadlessFrame::new("departure-airport").with_content_bottom(410.2),
        HeadlessFrame::new(DEPARTING_RUNWAY).with_content_bottom(220.0),
        HeadlessFrame::new("take-off"),
        HeadlessFrame::new(ARRIVAL_RUNWAY),
        HeadlessFrame::new("landing"),
    ]
}

fn orchestrator() -> Orchestrator<HeadlessFrame, HeadlessRegion> {
    Orchestrator::new(
        FrameRegistry::from_frames(page_frames()),
        HeadlessRegion::hidden(),
    )
}

fn record(metar: &str, heading: &str) -> RunwaySelectionRecord {
    let mut record = RunwaySelectionRecord::default();
    for (key, value) in [
        ("length", "3000"),
        ("elevation", "120"),
        ("heading", heading),
        ("isGrass", "true"),
        ("displacedThreshold", "0"),
    ] {
        record.merge_attribute(key, value);
    }
    record.set_metar(metar);
    record
}

fn source_of<'a>(
    orchestrator: &'a Orchestrator<HeadlessFrame, HeadlessRegion>,
    id: &str,
) -> Option<&'a str> {
    orchestrator.registry().get(id).expect("frame").source()
}

#[test]
fn first_runway_is_the_departure() {
    let mut orchestrator = orchestrator();
    assert_eq!(orchestrator.routing(), RunwayRouting::AwaitingDeparture);

    orchestrator
        .load_runway(&record("METAR KXYZ...", "090"))
        .expect("load");

    assert_eq!(
        source_of(&orchestrator, DEPARTING_RUNWAY),
        Some("/runway?is_takeoff=true&is_grass=true&metar=METAR%20KXYZ...&heading=90&elevation=120")
    );
    assert_eq!(source_of(&orchestrator, ARRIVAL_RUNWAY), None);
    assert_eq!(orchestrator.routing(), RunwayRouting::AwaitingArrival);
}

#[test]
fn later_runways_fill_and_then_replace_the_arrival() {
    let mut orchestrator = orchestrator();
    orchestrator.load_runway(&record("KXYZ 1", "090")).expect("departure");
    orchestrator.load_runway(&record("KXYZ 2", "270")).expect("arrival");

    let arrival = source_of(&orchestrator, ARRIVAL_RUNWAY).expect("arrival source");
    assert!(arrival.starts_with("/runway?is_takeoff=false&"));
    assert!(arrival.contains("metar=KXYZ%202"));

    orchestrator.load_runway(&record("KXYZ 3", "270")).expect("again");
    let registry = orchestrator.registry();
    assert_eq!(registry.get(DEPARTING_RUNWAY).expect("frame").navigations(), 1);
    assert_eq!(registry.get(ARRIVAL_RUNWAY).expect("frame").navigations(), 2);
    assert!(source_of(&orchestrator, ARRIVAL_RUNWAY)
        .expect("arrival source")
        .contains("metar=KXYZ%203"));
}

#[test]
fn routing_starts_from_an_already_navigated_departure() {
    let frames = vec![
        HeadlessFrame::new(DEPARTING_RUNWAY).with_source("/runway?is_takeoff=true"),
        HeadlessFrame::new(ARRIVAL_RUNWAY),
    ];
    let orchestrator = Orchestrator::new(
        FrameRegistry::from_frames(frames),
        HeadlessRegion::hidden(),
    );
    assert_eq!(orchestrator.routing(), RunwayRouting::AwaitingArrival);

    let empty_source = vec![HeadlessFrame::new(DEPARTING_RUNWAY).with_source("")];
    let orchestrator = Orchestrator::new(
        FrameRegistry::from_frames(empty_source),
        HeadlessRegion::hidden(),
    );
    assert_eq!(orchestrator.routing(), RunwayRouting::AwaitingDeparture);
}

#[test]
fn transition_is_absorbing() {
    assert_eq!(
        RunwayRouting::AwaitingDeparture.transition(),
        RunwayRouting::AwaitingArrival
    );
    assert_eq!(
        RunwayRouting::AwaitingArrival.transition(),
        RunwayRouting::AwaitingArrival
    );
}

#[test]
fn performance_navigates_by_action_and_reveals_arrival_section() {
    let mut orchestrator = orchestrator();
    let request = PerformanceRequest {
        elevation: 500,
        headwind: 10,
        standard_temperature: 59,
        temperature: 70,
        is_grass: false,
    };

    orchestrator
        .load_performance(PerformanceAction::from_label("take off"), &request)
        .expect("take off");

    assert_eq!(
        source_of(&orchestrator, "take-off"),
        Some("/aircraft/cessna150j/take-off?elevation_ft=500&headwind_kts=10&standard_temperature_f=59&temperature_f=70&is_grass=false")
    );
    assert!(orchestrator.arrival_section().is_visible());

    orchestrator
        .load_performance(PerformanceAction::from_label("land"), &request)
        .expect("landing");
    assert!(source_of(&orchestrator, "landing")
        .expect("landing source")
        .starts_with("/aircraft/cessna150j/landing?"));
}

#[test]
fn unknown_frames_fail_without_side_effects() {
    let mut orchestrator = Orchestrator::new(
        FrameRegistry::from_frames([HeadlessFrame::new("departure-airport")]),
        HeadlessRegion::hidden(),
    );

    assert_eq!(
        orchestrator.load_airport("KPAO", "arrival-airport"),
        Err(PageError::UnknownFrame("arrival-airport".to_string()))
    );
    assert!(orchestrator
        .load_runway(&record("KXYZ", "090"))
        .is_err());
    assert_eq!(orchestrator.routing(), RunwayRouting::AwaitingDeparture);

    let request = PerformanceRequest {
        elevation: 0,
        headwind: 0,
        standard_temperature: 59,
        temperature: 59,
        is_grass: true,
    };
    assert!(orchestrator
        .load_performance(PerformanceAction::TakeOff, &request)
        .is_err());
    assert!(!orchestrator.arrival_section().is_visible());
}

#[test]
fn resize_sets_heights_to_content_ceiling_every_time() {
    let mut orchestrator = orchestrator();
    assert!(orchestrator
        .registry()
        .iter()
        .all(|frame| frame.height_px() == Some(0)));

    orchestrator.resize_iframes();
    let heights: Vec<Option<u32>> = orchestrator
        .registry()
        .iter()
        .map(HeadlessFrame::height_px)
        .collect();
    assert_eq!(
        heights,
        [Some(411), Some(220), Some(0), Some(0), Some(0)]
    );

    let mut frames = orchestrator.registry;
    frames
        .get_mut("take-off")
        .expect("frame")
        .set_content_bottom(95.5);
    let mut orchestrator = Orchestrator::new(frames, HeadlessRegion::hidden());
    orchestrator.resize_iframes();
    assert_eq!(
        orchestrator.registry().get("take-off").expect("frame").height_px(),
        Some(96)
    );
}

#[tokio::test]
async fn run_dispatches_messages_in_order_and_survives_failures() {
    let (tx, rx) = unbounded_channel();
    let orchestrator = orchestrator();

    tx.send(ParentMessage::LoadAirport {
        value: "KPAO".to_string(),
        target: FrameId::new("departure-airport"),
    })
    .expect("send");
    tx.send(ParentMessage::LoadAirport {
        value: "KHAF".to_string(),
        target: FrameId::new("missing-frame"),
    })
    .expect("send");
    tx.send(ParentMessage::LoadRunway {
        record: record("KXYZ 1", "090"),
    })
    .expect("send");
    tx.send(ParentMessage::LoadRunway {
        record: record("KXYZ 2", "270"),
    })
    .expect("send");
    tx.send(ParentMessage::ResizeFrames).expect("send");
    drop(tx);

    let orchestrator = orchestrator.run(rx).await;

    assert_eq!(
        source_of(&orchestrator, "departure-airport"),
        Some("/airport/KPAO")
    );
    assert!(source_of(&orchestrator, DEPARTING_RUNWAY)
        .expect("departing")
        .contains("metar=KXYZ%201"));
    assert!(source_of(&orchestrator, ARRIVAL_RUNWAY)
        .expect("arrival")
        .contains("metar=KXYZ%202"));
    assert_eq!(
        orchestrator
            .registry()
            .get("departure-airport")
            .expect("frame")
            .height_px(),
        Some(411)
    );
}
