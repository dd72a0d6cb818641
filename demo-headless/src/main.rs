use clap::Parser;
use route_emissions_core::routing::RouteOverrides;
use route_emissions_core::{
    Coordinate, EngineConfig, FuelBlend, HazardOverride, Knots, Meters, PortCatalog,
    VesselProfile, VoyageComparison, VoyageEngine, VoyageRequest,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Route deviation and emissions comparison demo
#[derive(Parser, Debug)]
#[command(name = "route-emissions-demo")]
#[command(about = "Compare a direct voyage with a hazard-avoiding, slow-steaming alternative", long_about = None)]
struct Args {
    /// Destination index into the port catalog
    #[arg(short, long, default_value_t = 0)]
    port: usize,

    /// Start latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Start longitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Cruise speed in knots
    #[arg(short, long, default_value_t = 14.0)]
    speed: f64,

    /// LNG share of the fuel blend in % (the rest is LSFO)
    #[arg(long, default_value_t = 50.0)]
    lng_percent: f64,

    /// Significant wave height of a hazard replacing the destination's obstacle (m)
    #[arg(long)]
    hazard_height: Option<f64>,

    /// Deviation shift for the hazard override (degrees)
    #[arg(long, requires = "hazard_height", allow_hyphen_values = true)]
    shift: Option<f64>,

    /// Keep the optimal route equal to the baseline when nothing forces a deviation
    #[arg(long)]
    no_force_distinct: bool,

    /// Engine configuration JSON (missing fields keep their defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Port catalog JSON (array of ports)
    #[arg(long)]
    ports: Option<PathBuf>,

    /// Compare against every port in the catalog
    #[arg(short, long)]
    all: bool,

    /// Print comparisons as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if args.no_force_distinct {
        config.force_distinct_paths = false;
    }
    let catalog = match &args.ports {
        Some(path) => PortCatalog::load(path)?,
        None => PortCatalog::default_catalog(),
    };
    info!(
        ports = catalog.len(),
        lng_bunkering = catalog.lng_bunkering_ports().count(),
        "Loaded port catalog"
    );

    let engine = VoyageEngine::new(config, catalog, RouteOverrides::default_table());

    let start = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
        _ => None,
    };
    let request = VoyageRequest {
        start,
        destination_index: args.port,
        cruise_speed: Knots::new(args.speed),
        fuel_blend: FuelBlend::from_lng_percent(args.lng_percent),
        vessel: VesselProfile::amaryllis_vlgc(),
        hazard_override: args.hazard_height.map(|height| HazardOverride {
            height: Meters::new(height),
            shift_magnitude_degrees: args.shift,
        }),
    };

    let comparisons = if args.all {
        engine.compare_all_destinations(&request)?
    } else {
        vec![engine.compare(&request)?]
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparisons)?);
        return Ok(());
    }

    println!("=== Route Emissions Comparison ===");
    println!(
        "Vessel: {} (DWT {:.0}), {:.0}% LNG / {:.0}% LSFO",
        request.vessel.name,
        request.vessel.deadweight,
        request.fuel_blend.lng_fraction() * 100.0,
        request.fuel_blend.liquid_fuel_fraction() * 100.0
    );
    for comparison in &comparisons {
        print_dashboard(comparison);
    }
    Ok(())
}

fn row(metric: &str, normal: String, optimal: String, change: String) {
    println!("{metric:<26} | {normal:>14} | {optimal:>14} | {change}");
}

fn print_dashboard(c: &VoyageComparison) {
    let (base, opt, d) = (&c.baseline, &c.optimal, &c.deltas);

    let bunkering = if c.destination.has_lng_bunkering {
        "LNG bunkering available"
    } else {
        "no LNG bunkering"
    };
    println!("\n--- {} ({bunkering}) ---", c.destination.name);
    println!(
        "Start: {:.4}  Outcome: {:?}  Hazards: {}",
        base.path.origin(),
        c.outcome,
        c.hazards.len()
    );
    row("Metric", "Normal".into(), "Optimal".into(), "Change".into());
    println!("{:-<26}-+-{:-<14}-+-{:-<14}-+-{:-<12}", "", "", "", "");
    row(
        "Distance",
        format!("{:.0}", base.distance),
        format!("{:.0}", opt.distance),
        d.distance_pct.to_string(),
    );
    row(
        "CO2e Emissions",
        format!("{:.1}", base.co2e),
        format!("{:.1}", opt.co2e),
        d.emissions_pct.to_string(),
    );
    row(
        "Fuel Consumption (Total)",
        format!("{:.2}", base.fuel.total()),
        format!("{:.2}", opt.fuel.total()),
        d.fuel_pct.to_string(),
    );
    row(
        "CII Rating",
        base.cii.to_string(),
        opt.cii.to_string(),
        d.cii_grade_change.to_string(),
    );
    row(
        "Average Speed",
        format!("{:.1}", base.speed),
        format!("{:.1}", opt.speed),
        format!("{:.0}", d.speed_pct),
    );
    row(
        "Estimated Duration",
        base.formatted_duration(),
        opt.formatted_duration(),
        d.duration_pct.to_string(),
    );
    row(
        "Significant Wave Height",
        format!("{:.1}", base.wave_height),
        format!("{:.1}", opt.wave_height),
        d.wave_pct.to_string(),
    );
    println!("\nRECOMMENDATION: {}", c.recommendation);
}
