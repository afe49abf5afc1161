use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use simulation::hud::HudText;
use simulation::{App, Autopilot, Intent, IntentProvider, RandomPilot, SessionStatus, Settings};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Pilot {
    Autopilot,
    Random,
    Idle,
}

#[derive(Parser)]
#[command(version, about = "Headless lunar lander", long_about = None)]
struct Cli {
    /// Settings json file path, built-in defaults when omitted
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Who flies the lander
    #[arg(long, value_enum, default_value = "autopilot")]
    pilot: Pilot,

    /// Simulation time step in seconds
    #[arg(long, default_value = "0.0166667")]
    dt: f32,

    /// Maximal number of ticks per attempt
    #[arg(long, short, default_value = "100000")]
    max_ticks: usize,

    /// Number of attempts to fly, continuing with the remaining fuel
    #[arg(long, short, default_value = "1")]
    attempts: usize,

    /// Print the final world snapshot as json
    #[arg(long)]
    json: bool,

    /// Print the flight history of the last attempt
    #[arg(long)]
    history: bool,
}

fn fly(app: &mut App, pilot: &mut impl IntentProvider, cli: &Cli) -> Result<(), String> {
    for attempt in 0..cli.attempts {
        if attempt > 0 && !app.next_attempt() {
            log::warn!("Out of fuel, cannot continue after attempt {attempt}");
            break;
        }
        let status = app.run(pilot, cli.max_ticks).map_err(|e| e.to_string())?;
        log::info!(
            "Attempt {} finished: {status:?}, fuel left {}",
            attempt + 1,
            app.world().lander().fuel()
        );
        if let SessionStatus::Won = status {
            log::info!("Score {}", app.world().session().display_score());
        }
    }
    Ok(())
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut app = match &cli.settings {
        Some(path) => App::try_from_file(path, cli.dt),
        None => App::try_new(&Settings::default(), cli.dt),
    }
    .map_err(|e| e.to_string())?;

    let now = std::time::Instant::now();
    let result = match cli.pilot {
        Pilot::Autopilot => fly(&mut app, &mut Autopilot::default(), &cli),
        Pilot::Random => fly(&mut app, &mut RandomPilot::default(), &cli),
        Pilot::Idle => fly(&mut app, &mut Intent::idle(), &cli),
    };
    log::info!(
        "Run ended with result: {result:?} time: {:?}",
        now.elapsed()
    );

    let snapshot = app.world().snapshot();
    for line in HudText::from_snapshot(&snapshot).lines() {
        println!("{line}");
    }
    if cli.history {
        app.print_flight_state_results();
    }
    if cli.json {
        let json = serde_json::to_string_pretty(&snapshot).map_err(|e| e.to_string())?;
        println!("{json}");
    }
    result
}
