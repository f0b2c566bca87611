use anyhow::{Context, Result};
use clap::Parser;
use heft::{Config, FromJson, GenerationReport, Outcome, Reporter, Simulation, ToJson, Weight};
use std::{path::PathBuf, time::Instant};
use tracing::Level;

/// Breed a population of rats toward a goal weight.
#[derive(Parser, Debug)]
#[command(name = "heft", version, about)]
struct Cli {
    /// JSON config to start from; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Target mean weight, in grams
    #[arg(long)]
    goal: Option<u64>,

    /// Initial number of rats (rounded up to an even number)
    #[arg(long)]
    num_rats: Option<usize>,

    /// Weight of the lightest rat of the initial sample
    #[arg(long)]
    min_weight: Option<Weight>,

    /// Weight of the heaviest rat of the initial sample
    #[arg(long)]
    max_weight: Option<Weight>,

    /// Most common weight of the initial sample
    #[arg(long)]
    mode_weight: Option<Weight>,

    /// Chance of a pup being mutated (two decimals)
    #[arg(long)]
    mutate_odds: Option<f64>,

    /// Smallest mutation factor (one decimal)
    #[arg(long)]
    mutate_min: Option<f64>,

    /// Largest mutation factor (one decimal)
    #[arg(long)]
    mutate_max: Option<f64>,

    /// Pups per litter
    #[arg(long)]
    litter_size: Option<usize>,

    /// Litters per year
    #[arg(long)]
    litters_per_year: Option<usize>,

    /// Generations to run before giving up
    #[arg(long)]
    generation_limit: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Write the final outcome to this file as JSON
    #[arg(long)]
    report: Option<PathBuf>,

    /// Only print the summary
    #[arg(short, long)]
    quiet: bool,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("reading config {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(goal) = self.goal {
            config.goal = goal as f64;
        }
        if let Some(n) = self.num_rats {
            config.num_rats = n;
        }
        if let Some(w) = self.min_weight {
            config.min_weight = w;
        }
        if let Some(w) = self.max_weight {
            config.max_weight = w;
        }
        if let Some(w) = self.mode_weight {
            config.mode_weight = w;
        }
        if let Some(odds) = self.mutate_odds {
            config.mutate_odds = odds;
        }
        if let Some(f) = self.mutate_min {
            config.mutate_min = f;
        }
        if let Some(f) = self.mutate_max {
            config.mutate_max = f;
        }
        if let Some(n) = self.litter_size {
            config.litter_size = n;
        }
        if let Some(n) = self.litters_per_year {
            config.litters_per_year = n;
        }
        if let Some(n) = self.generation_limit {
            config.generation_limit = n;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }

        config.mutate_odds = round_to(config.mutate_odds, 2);
        config.mutate_min = round_to(config.mutate_min, 1);
        config.mutate_max = round_to(config.mutate_max, 1);
        Ok(config)
    }
}

struct Printer {
    quiet: bool,
}

impl Reporter for Printer {
    fn on_start(&mut self, population: &[Weight]) {
        if !self.quiet {
            println!("initial population weights = {population:?}");
        }
    }

    fn on_generation(&mut self, report: &GenerationReport) {
        if self.quiet {
            return;
        }
        if report.generation == 0 {
            println!("initial population fitness = {:.4}", report.fitness);
        } else {
            println!(
                "Generation {} fitness = {:.4}",
                report.generation, report.fitness
            );
        }
    }

    fn on_finish(&mut self, outcome: &Outcome) {
        if !self.quiet {
            println!("final population weights = {:?}", outcome.population);
        }
        println!("average weight = {} g", outcome.average_weight);
        println!("final fitness = {:.4} ({:?})", outcome.fitness, outcome.state);
        println!("\nnumber of generations = {}", outcome.generations);
        println!("number of years = {}", outcome.years);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let sim = Simulation::new(cli.config()?).context("invalid simulation parameters")?;
    if !cli.quiet {
        println!("number to retain = {}", sim.config().num_rats);
    }

    let start = Instant::now();
    let outcome = sim
        .run(&mut Printer { quiet: cli.quiet })
        .context("simulation aborted")?;
    let runtime = start.elapsed();

    if let Some(path) = &cli.report {
        outcome
            .to_file(path)
            .with_context(|| format!("writing report {}", path.display()))?;
    }

    println!("\nRuntime for this program was {:.3} seconds", runtime.as_secs_f64());
    Ok(())
}
