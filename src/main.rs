use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};

use u_dispatch::constructive::clarke_wright_savings;
use u_dispatch::evaluation::RouteEvaluator;
use u_dispatch::io::{format_routes, format_routes_json, format_violations, read_loads};
use u_dispatch::models::{Point, Vehicle, DEFAULT_MAX_DURATION};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// One `[id1,id2,...]` line per route
    Text,
    /// JSON object with the routes and any violations
    Json,
}

/// Builds vehicle routes for point-to-point loads with the Clarke-Wright
/// savings heuristic.
#[derive(Parser, Debug)]
#[command(about, version, author)]
struct Args {
    /// Load file, one `<loadNumber> (<startX>,<startY>) (<endX>,<endY>)` per line
    path: PathBuf,

    /// Maximum round-trip time of a single vehicle
    #[arg(long, env = "U_DISPATCH_MAX_DURATION", default_value_t = DEFAULT_MAX_DURATION)]
    max_duration: f64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    ensure!(
        args.max_duration.is_finite() && args.max_duration >= 0.0,
        "--max-duration must be a non-negative number, got {}",
        args.max_duration
    );

    let vehicle = Vehicle::new(args.max_duration);
    let registry = read_loads(&args.path, Point::ORIGIN)
        .with_context(|| format!("cannot read loads from {}", args.path.display()))?;
    info!("{} loads, max round trip {}", registry.len(), vehicle.max_duration());

    let solution = clarke_wright_savings(&registry, &vehicle)?;
    info!(
        "{} routes, total time {:.3}",
        solution.num_routes(),
        solution.total_time()
    );

    let (replayed, over_limit) =
        RouteEvaluator::new(&registry, &vehicle).evaluate_solution(&solution)?;
    debug!(
        "replayed total time {:.3}, {} routes over the limit",
        replayed,
        over_limit.len()
    );

    match args.format {
        OutputFormat::Text => print!("{}", format_routes(&solution)),
        OutputFormat::Json => println!("{}", format_routes_json(&solution)?),
    }
    eprint!("{}", format_violations(&solution));
    Ok(())
}
