//! Console front end for the fleet simulator: builds a scenario from CLI
//! flags, steps it tick by tick, and renders proximity alerts as a table.

mod app;
mod export;
#[cfg(feature = "geocode")]
mod geocode;
mod table;

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use fleet_core::proximity::{ACCIDENT_RANGE_DEG, COMMUNICATION_RANGE_DEG};
use fleet_core::scenario::{ScenarioParams, SeedFleetKind, DEFAULT_TICK_INTERVAL_MS};

use crate::app::ConsoleApp;
#[cfg(feature = "geocode")]
use crate::app::SearchOutcome;
#[cfg(feature = "geocode")]
use crate::geocode::GeocodeClient;

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "fleet_console",
    about = "Tick-driven vehicle fleet simulator with proximity alerts",
    long_about = "Simulates a fleet of vehicles drifting around a city center.\n\
                  Each tick perturbs position, speed, direction, and condition,\n\
                  then the console reports nearby vehicles, congestion, and\n\
                  accident risk per vehicle."
)]
struct Cli {
    /// Number of ticks to simulate
    #[arg(long, default_value_t = 10)]
    ticks: u64,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Scatter this many vehicles around the center instead of the
    /// built-in ten-vehicle fleet
    #[arg(long)]
    fleet_size: Option<usize>,

    /// Load the starting fleet from a JSON file
    #[arg(long, conflicts_with = "fleet_size")]
    fleet_file: Option<PathBuf>,

    /// Simulated milliseconds between ticks
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    interval_ms: u64,

    /// Recenter the fleet on this place name before the run (geocoded
    /// via Nominatim)
    #[cfg(feature = "geocode")]
    #[arg(long)]
    city: Option<String>,

    /// Recenter the fleet on this latitude before the run
    #[arg(long, requires = "center_lon")]
    center_lat: Option<f64>,

    /// Recenter the fleet on this longitude before the run
    #[arg(long, requires = "center_lat")]
    center_lon: Option<f64>,

    /// Print a table after every tick, pacing output by the tick interval
    #[arg(long)]
    follow: bool,

    /// Write the full snapshot history to this CSV file
    #[arg(long)]
    csv_out: Option<PathBuf>,

    /// Write the final snapshot to this JSON file
    #[arg(long)]
    json_out: Option<PathBuf>,

    /// Print event metrics after the run
    #[arg(long)]
    stats: bool,

    /// Nearby-vehicle search range in degrees
    #[arg(long, default_value_t = COMMUNICATION_RANGE_DEG)]
    comm_range: f64,

    /// Accident-risk range in degrees
    #[arg(long, default_value_t = ACCIDENT_RANGE_DEG)]
    accident_range: f64,
}

// ── main ───────────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let fleet = if let Some(path) = &cli.fleet_file {
        SeedFleetKind::Custom(app::load_fleet_file(path)?)
    } else if let Some(count) = cli.fleet_size {
        SeedFleetKind::Uniform { count }
    } else {
        SeedFleetKind::Reference
    };

    let mut params = ScenarioParams::default()
        .with_fleet(fleet)
        .with_tick_interval_ms(cli.interval_ms)
        .with_communication_range_deg(cli.comm_range)
        .with_accident_range_deg(cli.accident_range)
        .with_tick_budget(cli.ticks);
    if let Some(seed) = cli.seed {
        params = params.with_seed(seed);
    }

    let mut sim = ConsoleApp::new(params);

    #[cfg(feature = "geocode")]
    if let Some(city) = &cli.city {
        let client = GeocodeClient::default();
        match sim.search_city(&client, city) {
            SearchOutcome::Recentered { label } => println!("Relocated fleet to {label}"),
            SearchOutcome::EmptyQuery => eprintln!("Please enter a city name!"),
            SearchOutcome::NotFound => {
                eprintln!("Location not found! Please try another city.")
            }
            SearchOutcome::Failed(detail) => {
                eprintln!("An error occurred while searching for the location. ({detail})")
            }
        }
    }

    if let (Some(lat), Some(lon)) = (cli.center_lat, cli.center_lon) {
        sim.recenter(lat, lon, None);
    }

    // Drain the bootstrap events (and any staged recenter) at t=0.
    sim.process_due_events();
    print_snapshot(&sim);

    let completed = if cli.follow {
        let pace = Duration::from_millis(sim.tick_interval_ms());
        let mut completed = 0;
        while completed < cli.ticks && sim.step_tick() {
            completed += 1;
            print_snapshot(&sim);
            thread::sleep(pace);
        }
        completed
    } else {
        let completed = sim.run_ticks(cli.ticks);
        print_snapshot(&sim);
        completed
    };

    println!("Simulated {completed} ticks ({} events).", sim.steps_executed);

    if let Some(path) = &cli.csv_out {
        if let Some(history) = sim.snapshot_history() {
            export::export_history_csv(history, path)?;
            println!("Wrote snapshot history to {}", path.display());
        }
    }
    if let Some(path) = &cli.json_out {
        if let Some(latest) = sim.latest_snapshot() {
            export::export_snapshot_json(&latest, path)?;
            println!("Wrote final snapshot to {}", path.display());
        }
    }

    if cli.stats {
        if let Some(metrics) = sim.event_metrics() {
            metrics.print_summary();
        }
    }

    Ok(())
}

fn print_snapshot(sim: &ConsoleApp) {
    let Some(snapshot) = sim.latest_snapshot() else {
        return;
    };
    let headline = match sim.city_origin() {
        Some(origin) => match origin.label {
            Some(label) => label,
            None => format!("({:.4}, {:.4})", origin.lat, origin.lon),
        },
        None => String::from("(unknown origin)"),
    };
    let table = table::render_table(&snapshot, &sim.proximity_config(), &headline);
    println!("{table}");
}
