use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    dataset_from_attributes, urls, Collector, FrameHandle, FrameRegistry, HeadlessFrame,
    HeadlessRegion, MetarSelect, Orchestrator, PageRegion,
};
use performance::{
    standard_temperature_f, wind::WindComponents, AirportCatalog, Cessna150J, Metar, RunwayEnd,
    Velocity,
};
use shared::{
    domain::{FrameId, PerformanceAction, ARRIVAL_RUNWAY, DEPARTING_RUNWAY, LANDING, TAKE_OFF},
    protocol::ParentMessage,
    records::{PerformanceRequest, RunwaySelectionRecord},
};
use tokio::sync::mpsc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEPARTING_AIRPORT: &str = "departing-airport";
const ARRIVAL_AIRPORT: &str = "arrival-airport";
const FRAME_CONTENT_BOTTOM_PX: f64 = 240.5;

#[derive(Parser, Debug)]
#[command(about = "Runway planner page tools")]
struct Cli {
    /// JSON airport catalog; the bundled one when omitted.
    #[arg(long)]
    airports: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the runway frame path for one selection.
    RunwayUrl {
        #[arg(long)]
        metar: String,
        #[arg(long)]
        heading: String,
        #[arg(long)]
        elevation: String,
        #[arg(long)]
        is_grass: Option<bool>,
        #[arg(long)]
        landing: bool,
    },
    /// Print the performance frame path for one set of conditions.
    PerformanceUrl {
        #[arg(long, default_value = "take off")]
        action: String,
        #[arg(long)]
        elevation: i64,
        #[arg(long)]
        headwind: i64,
        #[arg(long)]
        standard_temperature: i64,
        #[arg(long)]
        temperature: i64,
        #[arg(long)]
        is_grass: bool,
    },
    /// Compute Cessna 150 J take-off or landing distances as JSON.
    Performance {
        #[arg(long, default_value = "take off")]
        action: String,
        #[arg(long)]
        elevation_ft: i16,
        #[arg(long, allow_hyphen_values = true)]
        headwind_kts: i16,
        #[arg(long, allow_hyphen_values = true)]
        temperature_f: i16,
        #[arg(long, allow_hyphen_values = true)]
        standard_temperature_f: Option<i16>,
        #[arg(long)]
        is_grass: bool,
    },
    /// Run a headless page session: pick an airport, a report and runways,
    /// then print where every frame ended up.
    Simulate {
        airport: String,
        departure: String,
        arrival: Option<String>,
        /// Position of the report in the airport's METAR list, starting at 1.
        #[arg(long, default_value_t = 1)]
        metar_index: usize,
        /// Typed report used instead of the listed ones.
        #[arg(long)]
        custom_metar: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::RunwayUrl {
            metar,
            heading,
            elevation,
            is_grass,
            landing,
        } => {
            let mut record = RunwaySelectionRecord::default();
            record.set_metar(metar);
            record.merge_attribute("heading", &heading);
            record.merge_attribute("elevation", &elevation);
            record.is_grass = is_grass;
            println!("{}", urls::runway_path(&record, !landing));
        }
        Command::PerformanceUrl {
            action,
            elevation,
            headwind,
            standard_temperature,
            temperature,
            is_grass,
        } => {
            let request = PerformanceRequest {
                elevation,
                headwind,
                standard_temperature,
                temperature,
                is_grass,
            };
            let action = PerformanceAction::from_label(&action);
            println!("{}", urls::performance_path(action, &request));
        }
        Command::Performance {
            action,
            elevation_ft,
            headwind_kts,
            temperature_f,
            standard_temperature_f: standard,
            is_grass,
        } => {
            let standard = standard.unwrap_or_else(|| standard_temperature_f(elevation_ft));
            let cessna = Cessna150J::new(
                Velocity::Knots(headwind_kts),
                temperature_f,
                elevation_ft,
                standard,
            )?;
            let json = match PerformanceAction::from_label(&action) {
                PerformanceAction::TakeOff => {
                    let take_off = cessna.calc_take_off();
                    let required = take_off.corrections.final_distance(is_grass);
                    info!(
                        ground_run = required.ground_run,
                        obstacle = required.clear_50_ft_obstacle,
                        "take-off computed"
                    );
                    serde_json::to_string_pretty(&take_off)?
                }
                PerformanceAction::Landing => {
                    let landing = cessna.calc_landing();
                    let required = landing.corrections.final_distance(is_grass);
                    info!(
                        ground_run = required.ground_run,
                        obstacle = required.clear_50_ft_obstacle,
                        "landing computed"
                    );
                    serde_json::to_string_pretty(&landing)?
                }
            };
            println!("{json}");
        }
        Command::Simulate {
            airport,
            departure,
            arrival,
            metar_index,
            custom_metar,
        } => {
            let catalog = match &cli.airports {
                Some(path) => AirportCatalog::load(path)?,
                None => AirportCatalog::bundled()?,
            };
            let frames = simulate(
                &catalog,
                &airport,
                &departure,
                arrival.as_deref(),
                metar_index,
                custom_metar,
            )
            .await?;
            for (id, source, height) in frames {
                println!(
                    "{:<18} {:>4}px  {}",
                    id.as_str(),
                    height.unwrap_or(0),
                    source.as_deref().unwrap_or("-")
                );
            }
        }
    }

    Ok(())
}

type FrameSummary = (FrameId, Option<String>, Option<u32>);

async fn simulate(
    catalog: &AirportCatalog,
    airport_ident: &str,
    departure: &str,
    arrival: Option<&str>,
    metar_index: usize,
    custom_metar: Option<String>,
) -> Result<Vec<FrameSummary>> {
    let airport = catalog
        .find(airport_ident)
        .ok_or_else(|| anyhow!("no airport found for identifier '{airport_ident}'"))?;

    let frames = [
        DEPARTING_AIRPORT,
        DEPARTING_RUNWAY,
        ARRIVAL_AIRPORT,
        ARRIVAL_RUNWAY,
        TAKE_OFF,
        LANDING,
    ]
    .into_iter()
    .map(|id| HeadlessFrame::new(id).with_content_bottom(FRAME_CONTENT_BOTTOM_PX));
    let orchestrator = Orchestrator::new(
        FrameRegistry::from_frames(frames),
        HeadlessRegion::hidden(),
    );

    let (tx, rx) = mpsc::unbounded_channel();
    let page = tokio::spawn(orchestrator.run(rx));

    let mut legs = vec![(DEPARTING_AIRPORT, departure, PerformanceAction::TakeOff)];
    if let Some(arrival) = arrival {
        legs.push((ARRIVAL_AIRPORT, arrival, PerformanceAction::Landing));
    }

    for (airport_frame, runway_ident, action) in legs {
        tx.send(ParentMessage::LoadAirport {
            value: airport.ident.clone(),
            target: FrameId::new(airport_frame),
        })
        .context("page session closed")?;

        let end = airport
            .runway_ends
            .iter()
            .find(|end| end.ident.eq_ignore_ascii_case(runway_ident))
            .ok_or_else(|| anyhow!("{} has no runway '{runway_ident}'", airport.ident))?;

        let mut form = Collector::new(
            Some(tx.clone()),
            MetarSelect::new(airport.metars.iter().cloned()),
        );
        form.on_load();
        match &custom_metar {
            Some(text) => form.enter_custom_metar(text.clone()),
            None => form.select_metar(metar_index),
        }
        form.select_runway(&row_datasets(end));
        if form.submissions() == 0 {
            bail!(
                "runway {} was not submitted; pick a METAR between 1 and {}",
                end.ident,
                airport.metars.len()
            );
        }

        let request = performance_request(form.record())?;
        debug!(runway = %end.ident, ?request, "conditions derived from the runway page");
        tx.send(ParentMessage::LoadPerformance { action, request })
            .context("page session closed")?;
    }
    tx.send(ParentMessage::ResizeFrames)
        .context("page session closed")?;
    drop(tx);

    let orchestrator = page.await.context("page session panicked")?;
    info!(
        arrival_visible = orchestrator.arrival_section().is_visible(),
        "page session finished"
    );
    Ok(orchestrator
        .registry()
        .iter()
        .map(|frame| {
            (
                frame.id().clone(),
                frame.source().map(str::to_string),
                frame.height_px(),
            )
        })
        .collect())
}

// The airport page spreads a runway's attributes over three cells of its row.
fn row_datasets(end: &RunwayEnd) -> Vec<client_core::Dataset> {
    end.data_attributes()
        .chunks(2)
        .map(|cell| dataset_from_attributes(cell.iter().cloned()))
        .collect()
}

/// What the runway page derives from a submitted selection.
fn performance_request(record: &RunwaySelectionRecord) -> Result<PerformanceRequest> {
    let metar = Metar::parse(record.metar.as_deref().unwrap_or_default())?;
    let heading = record.heading.unwrap_or_default();
    let elevation = record.elevation.unwrap_or_default();
    let elevation_ft = i16::try_from(elevation).context("elevation out of range")?;
    let heading = i16::try_from(heading).context("heading out of range")?;

    Ok(PerformanceRequest {
        elevation,
        headwind: metar.wind.headwind_component(heading).knots().into(),
        standard_temperature: standard_temperature_f(elevation_ft).into(),
        temperature: metar.temperature.fahrenheit().into(),
        is_grass: record.is_grass.unwrap_or(false),
    })
}
