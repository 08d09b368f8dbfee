//! curvelab CLI - geodesic triangles on a bumped sheet and special-relativity
//! lab checks from the terminal.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use curvelab::curvelab_geodesic::TriangleMetrics;
use curvelab::curvelab_spacetime::{lorentz_factor, CheckOutcome};
use curvelab::{
    classify, interval_squared, measure_ray, proper_time, shortest_path, Boost, CurvedSpaceScene,
    Event, GridCell, IntervalClass, LabConfig, LabSession, LabTask, Point2,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "curvelab")]
#[command(about = "Relativity intuition through toy geometry", long_about = None)]
struct Cli {
    /// TOML config file (defaults are used for anything it omits)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log more (-v debug, -vv trace); default is warn or RUST_LOG
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the geodesic triangle and print lengths, angles and deficit
    Triangle {
        /// Vertex A as x,y
        #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
        a: Option<[f64; 2]>,
        /// Vertex B as x,y
        #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
        b: Option<[f64; 2]>,
        /// Vertex C as x,y
        #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
        c: Option<[f64; 2]>,
    },
    /// Shortest grid path between two planar points
    Path {
        /// Start point as x,y
        #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
        from: [f64; 2],
        /// End point as x,y
        #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
        to: [f64; 2],
    },
    /// Planar vs surface length of a horizontal ray
    Ray {
        /// Planar y of the ray (default: from config)
        #[arg(long, allow_hyphen_values = true)]
        y: Option<f64>,
    },
    /// Interval, causal class and proper time between two events
    Interval {
        /// First event as t,x
        #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
        a: [f64; 2],
        /// Second event as t,x
        #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
        b: [f64; 2],
        /// Boost velocity for the boosted times
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        v: f64,
    },
    /// Run a special-relativity lab check (sr1, sr2, sr3)
    Lab {
        /// Task id
        task: String,
        /// Slider positions to visit in order, comma separated
        #[arg(long = "sweep", value_delimiter = ',', allow_hyphen_values = true)]
        sweep: Vec<f64>,
        /// Event to place for sr3 as t,x
        #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
        place: Option<[f64; 2]>,
    },
    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Triangle { a, b, c } => {
            let mut config = config;
            for (slot, value) in [
                (&mut config.triangle.a, a),
                (&mut config.triangle.b, b),
                (&mut config.triangle.c, c),
            ] {
                if let Some(v) = value {
                    *slot = v;
                }
            }
            triangle(&config, cli.json)?;
        }
        Commands::Path { from, to } => {
            path(&config, from, to, cli.json)?;
        }
        Commands::Ray { y } => {
            ray(&config, y.unwrap_or(config.ray.y), cli.json)?;
        }
        Commands::Interval { a, b, v } => {
            interval(a, b, v, cli.json)?;
        }
        Commands::Lab { task, sweep, place } => {
            lab(&config, &task, &sweep, place, cli.json)?;
        }
        Commands::Config => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    logger(verbose, env_logger::Env::default().default_filter_or("warn")).init();
}

/// `RUST_LOG` (falling back to `warn`) unless `-v`/`-vv` asks for
/// debug or trace.
fn logger(verbose: u8, env: env_logger::Env<'_>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(env);
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder
}

fn load_config(path: Option<&Path>) -> Result<LabConfig> {
    match path {
        Some(path) => LabConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(LabConfig::default()),
    }
}

fn parse_pair(s: &str) -> std::result::Result<[f64; 2], String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected two comma-separated numbers, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("'{}': {e}", v.trim()))
    };
    Ok([parse(a)?, parse(b)?])
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn triangle(config: &LabConfig, json: bool) -> Result<()> {
    let mut scene = CurvedSpaceScene::new(config)?;
    let report = scene.report()?;
    if json {
        return print_json(&report);
    }

    let TriangleMetrics {
        lengths,
        angle_sum_deg,
        deficit_deg,
        ..
    } = report.metrics;
    let [da, db, dc] = report.metrics.angles_deg();
    println!(
        "Grid {0}x{0}, span {1}, bump radius {2}",
        report.surface.resolution, report.surface.span, report.surface.bump_radius
    );
    println!(
        "Lengths  AB={:.3}  BC={:.3}  CA={:.3}",
        lengths[0], lengths[1], lengths[2]
    );
    println!("Angles   A={da:.2}°  B={db:.2}°  C={dc:.2}°");
    println!(
        "Sum {angle_sum_deg:.2}°  deficit {deficit_deg:+.2}°  ({})",
        report.deficit_label
    );
    Ok(())
}

#[derive(Serialize)]
struct PathReport {
    from: GridCell,
    to: GridCell,
    cells: Vec<GridCell>,
    length: f64,
}

fn path(config: &LabConfig, from: [f64; 2], to: [f64; 2], json: bool) -> Result<()> {
    config.validate()?;
    let grid = config.surface.build_grid()?;
    let from = grid.cell_at(Point2::new(from[0], from[1]));
    let to = grid.cell_at(Point2::new(to[0], to[1]));
    let path = shortest_path(&grid, from, to);
    let report = PathReport {
        from,
        to,
        length: path.length(&grid),
        cells: path.cells,
    };
    if json {
        return print_json(&report);
    }

    println!(
        "({}, {}) -> ({}, {}): {} cells, length {:.4}",
        from.i,
        from.j,
        to.i,
        to.j,
        report.cells.len(),
        report.length
    );
    for cell in &report.cells {
        let p = grid.point3d(*cell);
        println!(
            "  ({:3}, {:3})  x={:+.3} y={:+.3} z={:.3}",
            cell.i, cell.j, p.x, p.y, p.z
        );
    }
    Ok(())
}

fn ray(config: &LabConfig, y: f64, json: bool) -> Result<()> {
    config.validate()?;
    let grid = config.surface.build_grid()?;
    let profile = measure_ray(&grid, y, config.ray.samples)?;
    if json {
        return print_json(&profile);
    }

    println!("Ray y={:+.3}, {} samples", y, profile.samples.len());
    println!("  planar length  {:.4}", profile.planar_length);
    println!("  surface length {:.4}", profile.surface_length);
    println!("  excess         {:+.4}", profile.excess);
    Ok(())
}

#[derive(Serialize)]
struct IntervalReport {
    a: Event,
    b: Event,
    s2: f64,
    class: IntervalClass,
    /// Zero unless the separation is timelike.
    proper_time: f64,
    v: f64,
    gamma: f64,
    t_prime_a: f64,
    t_prime_b: f64,
}

fn interval(a: [f64; 2], b: [f64; 2], v: f64, json: bool) -> Result<()> {
    let (a, b) = (Event::new(a[0], a[1]), Event::new(b[0], b[1]));
    let boost = Boost::new(v)?;
    let report = IntervalReport {
        a,
        b,
        s2: interval_squared(&a, &b),
        class: classify(&a, &b),
        proper_time: proper_time(&a, &b),
        v,
        gamma: lorentz_factor(v)?,
        t_prime_a: boost.time(&a),
        t_prime_b: boost.time(&b),
    };
    if json {
        return print_json(&report);
    }

    println!("s² = {:.6}  ({})", report.s2, report.class);
    println!("τ  = {:.6}", report.proper_time);
    println!(
        "v = {:.3}c, γ = {:.4}: t'(a) = {:.4}, t'(b) = {:.4}",
        report.v, report.gamma, report.t_prime_a, report.t_prime_b
    );
    Ok(())
}

#[derive(Serialize)]
struct LabReport {
    velocity: f64,
    outcome: CheckOutcome,
    boosted_times: Vec<(Event, f64)>,
}

fn lab(
    config: &LabConfig,
    task: &str,
    sweep: &[f64],
    place: Option<[f64; 2]>,
    json: bool,
) -> Result<()> {
    let Some(task) = LabTask::from_id(task) else {
        bail!("Unknown lab task: {} (expected sr1, sr2 or sr3)", task);
    };

    let mut session = LabSession::new(config.spacetime.events(), config.spacetime.velocity)?;
    session.select(task);
    for &v in sweep {
        session.set_velocity(v)?;
    }
    if let Some([t, x]) = place {
        if task != LabTask::NullSeparation {
            log::warn!("--place only affects {}", LabTask::NullSeparation.id());
        }
        session.place_event(Event::new(t, x));
    }

    let report = LabReport {
        velocity: session.velocity(),
        outcome: session.check(),
        boosted_times: session.boosted_times(),
    };
    if json {
        return print_json(&report);
    }

    println!("{}", task);
    println!(
        "{} at v = {:.3}c",
        if report.outcome.pass { "PASS" } else { "not yet" },
        report.velocity
    );
    println!("{}", serde_json::to_string(&report.outcome.detail)?);
    for (event, t_prime) in &report.boosted_times {
        println!("  (t={:.2}, x={:.2})  t' = {:.4}", event.t, event.x, t_prime);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair("-1.8,-0.5").unwrap(), [-1.8, -0.5]);
        assert_eq!(parse_pair(" 2 , 0.6 ").unwrap(), [2.0, 0.6]);
        assert!(parse_pair("1.0").is_err());
        assert!(parse_pair("a,b").is_err());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from([
            "curvelab", "--json", "path", "--from", "-1.8,-0.5", "--to", "1.2,-0.3",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Path { from, to } => {
                assert_eq!(from, [-1.8, -0.5]);
                assert_eq!(to, [1.2, -0.3]);
            }
            _ => panic!("expected path"),
        }

        let cli = Cli::try_parse_from(["curvelab", "lab", "sr2", "--sweep", "0.1,0.5", "-vv"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Lab { task, sweep, place } => {
                assert_eq!(task, "sr2");
                assert_eq!(sweep, vec![0.1, 0.5]);
                assert!(place.is_none());
            }
            _ => panic!("expected lab"),
        }
    }

    #[test]
    fn test_log_levels() {
        let env = || env_logger::Env::new().filter_or("CURVELAB_TEST_LOG_UNSET", "warn");
        assert_eq!(logger(0, env()).build().filter(), log::LevelFilter::Warn);
        assert_eq!(logger(1, env()).build().filter(), log::LevelFilter::Debug);
        assert_eq!(logger(2, env()).build().filter(), log::LevelFilter::Trace);
        assert_eq!(logger(5, env()).build().filter(), log::LevelFilter::Trace);
    }

    #[test]
    fn test_cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
