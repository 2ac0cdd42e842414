//! Society Simulation
//!
//! Headless runner: ticks the simulation on its configured period and logs
//! population statistics and media headlines as they happen.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use broadcast::{BroadcastConfig, HeadlineTicker};
use society_core::config::{default_config_toml, DEFAULT_CONFIG_PATH};
use society_core::output::write_snapshot;
use society_core::{Simulation, SocietyConfig};
use society_events::ThinkerKind;

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "society_sim")]
#[command(about = "Simulates the spread of critical thinking through a society")]
struct Args {
    /// TOML configuration file. Defaults to `society.toml` when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// TOML file with headline display settings
    #[arg(long)]
    broadcast_config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Number of generations to simulate
    #[arg(long)]
    generations: Option<u64>,

    /// Milliseconds between generations
    #[arg(long)]
    tick_period_ms: Option<u64>,

    /// Grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Grid columns
    #[arg(long)]
    cols: Option<usize>,

    /// Log statistics every N generations
    #[arg(long)]
    report_interval: Option<u64>,

    /// Run generations back to back, ignoring the tick period
    #[arg(long)]
    no_delay: bool,

    /// Write the final state as JSON to this path
    #[arg(long)]
    output_state: Option<PathBuf>,

    /// Print the default configuration file and exit
    #[arg(long)]
    print_default_config: bool,
}

impl Args {
    /// Loads the configuration file, if any, and applies flag overrides.
    fn resolve_config(&self) -> Result<SocietyConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => SocietyConfig::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                SocietyConfig::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => SocietyConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.run.seed = seed;
        }
        if let Some(generations) = self.generations {
            config.run.generations = generations;
        }
        if let Some(interval) = self.report_interval {
            config.run.report_interval = interval;
        }
        if let Some(period) = self.tick_period_ms {
            config.parameters.tick_period_ms = period;
        }
        if let Some(rows) = self.rows {
            config.grid.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.grid.cols = cols;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.print_default_config {
        print!("{}", default_config_toml());
        return;
    }

    if let Err(e) = run(&args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = args.resolve_config()?;
    let broadcast_config = match &args.broadcast_config {
        Some(path) => BroadcastConfig::from_file(path)?,
        None => BroadcastConfig::default(),
    };

    tracing::info!(
        "Seed {} | {}x{} grid | {} generations | {}ms period",
        config.run.seed,
        config.grid.rows,
        config.grid.cols,
        config.run.generations,
        config.parameters.tick_period_ms
    );

    let mut sim = Simulation::new(&config)?;
    let mut ticker = HeadlineTicker::new(broadcast_config);
    log_stats(&sim);

    let clock = Instant::now();
    sim.start(Duration::ZERO);

    while sim.generation() < config.run.generations {
        let now = clock.elapsed();
        let report = if args.no_delay {
            sim.step()?
        } else {
            match sim.poll(now)? {
                Some(report) => report,
                None => {
                    if let Some(wait) = sim.time_until_next_tick(now) {
                        std::thread::sleep(wait);
                    }
                    continue;
                }
            }
        };

        if ticker.observe(&report, now).is_some() {
            if let Some(caption) = ticker.caption(now) {
                tracing::info!("[Gen {:>5}] {}", report.generation, caption);
            }
        }
        ticker.expire(now);

        if config.run.report_interval > 0 && report.generation % config.run.report_interval == 0 {
            log_stats(&sim);
        }
    }

    sim.pause();
    tracing::info!(
        "Simulation complete. Ran {} generations, {} media events.",
        sim.generation(),
        ticker.announced()
    );
    log_stats(&sim);

    if let Some(path) = &args.output_state {
        write_snapshot(&sim.state().snapshot(), path)?;
        tracing::info!("Wrote final state to {}", path.display());
    }

    Ok(())
}

fn log_stats(sim: &Simulation) {
    let stats = sim.stats();
    let shares: Vec<String> = ThinkerKind::all()
        .iter()
        .map(|&kind| format!("{} {:>5.1}%", kind, stats.percent_of(kind)))
        .collect();
    tracing::info!("[Gen {:>5}] {}", sim.generation(), shares.join(" | "));
}
