// main.rs - Command-line driver for the sparse Game of Life engine
// Parallel runs evolve on chunk coroutines spawned onto an owned tokio runtime

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Parser};
use log::{LevelFilter, info, warn};

use conway::patterns::{self, PATTERNS};
use conway::{Evolver, Parallel, Population, Sequential, Simulation};

mod config;
mod output;

use config::Config;
use output::{Format, Stats};

#[derive(Parser, Debug)]
#[command(name = "conway_coro", version, about = "Conway's Game of Life on an unbounded grid")]
#[command(group(ArgGroup::new("seed_source").args(["pattern", "file", "random"])))]
struct Cli {
    /// Named seed from the built-in catalog (see --list)
    #[arg(short, long)]
    pattern: Option<String>,

    /// Seed in Life plaintext format (`O` or `*` alive, `.` dead, `!` comments)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Random soup of the given size, e.g. 64x64
    #[arg(short, long, value_parser = parse_size)]
    random: Option<(u32, u32)>,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Generations to run (overrides the config file)
    #[arg(short, long)]
    generations: Option<u64>,

    /// Evolve on parallel chunk workers
    #[arg(long)]
    parallel: bool,

    /// Worker count for --parallel (overrides the config file)
    #[arg(short, long)]
    workers: Option<usize>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format for the final population
    #[arg(long, value_enum, default_value_t = Format::Coords)]
    format: Format,

    /// List catalog patterns and exit
    #[arg(long)]
    list: bool,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {:?}", s))?;
    let w = w.trim().parse::<u32>().map_err(|e| format!("bad width {:?}: {}", w, e))?;
    let h = h.trim().parse::<u32>().map_err(|e| format!("bad height {:?}: {}", h, e))?;
    Ok((w, h))
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn load_seed(cli: &Cli) -> Result<Population> {
    if let Some(name) = &cli.pattern {
        return Ok(patterns::find(name)?.population());
    }
    if let Some(path) = &cli.file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading seed {}", path.display()))?;
        return conway::parse_plaintext(&text)
            .with_context(|| format!("parsing seed {}", path.display()));
    }
    if let Some((width, height)) = cli.random {
        return Ok(patterns::random_soup(width, height, cli.seed));
    }
    bail!("no seed given: use --pattern, --file or --random")
}

fn build_evolver(cli: &Cli, config: &Config) -> Result<Box<dyn Evolver>> {
    if cli.parallel || config.parallel.enabled {
        let workers = cli.workers.unwrap_or(config.parallel.workers);
        info!("evolving on {} parallel workers", workers);
        Ok(Box::new(Parallel::new(workers)?))
    } else {
        Ok(Box::new(Sequential))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    simple_logger::SimpleLogger::new()
        .with_level(log_level(cli.verbose))
        .init()?;

    if cli.list {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for pattern in PATTERNS {
            writeln!(out, "{:<20} {} cells", pattern.name, pattern.cells.len())?;
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let generations = cli.generations.unwrap_or(config.sim.generations);

    let seed = load_seed(&cli)?;
    info!("seed has {} live cells, running {} generations", seed.len(), generations);

    let evolver = build_evolver(&cli, &config)?;
    let mut sim = Simulation::new(seed, evolver, config.sim_config());
    if config.sim.stop_on_cycle {
        while sim.generation() < generations && sim.cycle().is_none() {
            sim.step()?;
        }
        if sim.generation() < generations {
            warn!("stopped at generation {} of {}: population repeats", sim.generation(), generations);
        }
    } else {
        sim.advance(generations)?;
    }

    let stats = Stats::new(sim.generation(), sim.population(), sim.cycle());
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    output::write_population(&mut out, sim.population(), cli.format)?;
    out.flush()?;
    info!("{}", stats);
    Ok(())
}
