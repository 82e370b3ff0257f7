use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::{SeedableRng, rngs::SmallRng};
use tracing::info;

use antlattice_core::{
    AntLine, AntPlane, LineSimulation, PlaneSimulation, SimulationConfig, Trajectory,
    scatter_line_ants, scatter_plane_ants,
};
use antlattice_render::{write_entropy_csv, write_line_history_png, write_plane_frames};

const PROGRESS_INTERVAL: u64 = 10;

#[derive(Parser, Debug)]
#[command(
    name = "antlattice",
    version,
    about = "Reversible multi-ant lattice simulations with entropy tracking"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the two-dimensional lattice and write per-step frames.
    Plane(PlaneArgs),
    /// Run the one-dimensional lattice and write its space-time image.
    Line(LineArgs),
}

#[derive(Args, Debug)]
struct PlaneArgs {
    /// Lattice width in cells.
    #[arg(short = 'W', long, default_value_t = 300)]
    width: usize,

    /// Lattice height in cells.
    #[arg(short = 'H', long, default_value_t = 300)]
    height: usize,

    /// Total step count.
    #[arg(short, long, default_value_t = 3000)]
    count: u64,

    /// Step index at which to start stepping backward; negative never
    /// reverses.
    #[arg(short, long, default_value_t = 1000, allow_hyphen_values = true)]
    reverse: i64,

    /// RNG seed for the initial scatter.
    #[arg(short, long, default_value_t = 8)]
    seed: u64,

    /// Number of ants requested for the initial scatter.
    #[arg(short = 'n', long, default_value_t = 50)]
    ants: u32,

    /// Directory for PNG frames and the entropy CSV.
    #[arg(short, long, default_value = "out-plane")]
    output: PathBuf,

    /// Write every Nth frame.
    #[arg(long, default_value_t = 10)]
    frame_interval: u64,
}

#[derive(Args, Debug)]
struct LineArgs {
    /// Lattice width in cells.
    #[arg(short = 'W', long, default_value_t = 100)]
    width: usize,

    /// Total step count.
    #[arg(short, long, default_value_t = 30000)]
    count: u64,

    /// Step index at which to start stepping backward; negative never
    /// reverses.
    #[arg(short, long, default_value_t = 1000, allow_hyphen_values = true)]
    reverse: i64,

    /// RNG seed for the initial scatter.
    #[arg(short, long, default_value_t = 8)]
    seed: u64,

    /// Number of ants requested for the initial scatter.
    #[arg(short = 'n', long, default_value_t = 4)]
    ants: u32,

    /// Directory for the space-time image and the entropy CSV.
    #[arg(short, long, default_value = "out-line")]
    output: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Plane(args) => run_plane(args),
        Command::Line(args) => run_line(args),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Negative values disable the reversal entirely.
fn reverse_at(reverse: i64) -> Option<u64> {
    u64::try_from(reverse).ok()
}

fn run_plane(args: PlaneArgs) -> Result<()> {
    let config = SimulationConfig {
        max_steps: args.count,
        reverse_at: reverse_at(args.reverse),
        rng_seed: Some(args.seed),
    };

    let mut plane = AntPlane::new(args.width, args.height)?;
    let mut rng = SmallRng::seed_from_u64(config.rng_seed.unwrap_or_default());
    // Seeding contract: one fewer cell than the requested ant count.
    scatter_plane_ants(&mut plane, &mut rng, args.ants.saturating_sub(1));
    info!(
        width = args.width,
        height = args.height,
        ants = plane.ant_count(),
        "seeded plane",
    );

    let max_steps = config.max_steps;
    let mut sim = PlaneSimulation::new(plane, config)?;
    let trajectory = sim.run_with(|record| {
        if record.step % PROGRESS_INTERVAL == 0 {
            info!(
                step = record.step,
                max_steps,
                direction = record.direction.label(),
                entropy = record.entropy,
                "stepped",
            );
        }
    });

    report(&trajectory);
    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let frames = write_plane_frames(
        &args.output,
        args.width,
        args.height,
        &trajectory,
        args.frame_interval,
    )
    .context("writing frames")?;
    write_entropy_csv(&args.output.join("entropy.csv"), &trajectory)
        .context("writing entropy csv")?;
    info!(frames, output = %args.output.display(), "plane run complete");
    Ok(())
}

fn run_line(args: LineArgs) -> Result<()> {
    let config = SimulationConfig {
        max_steps: args.count,
        reverse_at: reverse_at(args.reverse),
        rng_seed: Some(args.seed),
    };

    let mut line = AntLine::new(args.width)?;
    let mut rng = SmallRng::seed_from_u64(config.rng_seed.unwrap_or_default());
    // Seeding contract: one fewer cell than the requested ant count.
    scatter_line_ants(&mut line, &mut rng, args.ants.saturating_sub(1));
    info!(width = args.width, ants = line.ant_count(), "seeded line");

    let max_steps = config.max_steps;
    let mut sim = LineSimulation::new(line, config)?;
    let trajectory = sim.run_with(|record| {
        if record.step % PROGRESS_INTERVAL == 0 {
            info!(
                step = record.step,
                max_steps,
                direction = record.direction.label(),
                entropy = record.entropy,
                "stepped",
            );
        }
    });

    report(&trajectory);
    if let Some(cycle) = trajectory.cycle() {
        info!(
            first_seen = cycle.first_seen,
            repeated_at = cycle.repeated_at,
            "state cycle detected",
        );
    }

    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_line_history_png(&args.output.join("history.png"), args.width, &trajectory)
        .context("writing space-time image")?;
    write_entropy_csv(&args.output.join("entropy.csv"), &trajectory)
        .context("writing entropy csv")?;
    info!(output = %args.output.display(), "line run complete");
    Ok(())
}

fn report(trajectory: &Trajectory) {
    let entropies = trajectory.entropies();
    let peak = entropies.iter().copied().fold(0.0f64, f64::max);
    let last = entropies.last().copied().unwrap_or(0.0);
    info!(
        steps = trajectory.len(),
        reversed_at = trajectory.reversed_at(),
        peak_entropy = peak,
        final_entropy = last,
        "run finished",
    );
}
