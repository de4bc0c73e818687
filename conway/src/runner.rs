// runner.rs - Multi-generation driving and cycle watching

use std::collections::VecDeque;
use std::sync::Arc;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::evolve::{evolve, evolve_parallel};
use crate::population::Population;

/// Applies [`evolve`] `generations` times. Zero returns the seed unchanged.
pub fn run(seed: &Population, generations: u64) -> Population {
    let mut current = seed.clone();
    for _ in 0..generations {
        current = evolve(&current);
    }
    current
}

/// Same loop as [`run`], stepping through any [`Evolver`].
pub fn run_with(evolver: &mut dyn Evolver, seed: &Population, generations: u64) -> Result<Population> {
    let mut current = seed.clone();
    for _ in 0..generations {
        current = evolver.step(&current)?;
    }
    Ok(current)
}

/// Strategy for producing the next generation
pub trait Evolver {
    fn step(&mut self, population: &Population) -> Result<Population>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Sequential;

impl Evolver for Sequential {
    fn step(&mut self, population: &Population) -> Result<Population> {
        Ok(evolve(population))
    }
}

/// Evolves on an owned tokio runtime, one task per candidate chunk.
pub struct Parallel {
    runtime: tokio::runtime::Runtime,
    workers: usize,
}

impl Parallel {
    pub fn new(workers: usize) -> Result<Self> {
        let workers = workers.max(1);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(workers)
            .thread_name("conway-worker")
            .build()?;
        Ok(Self { runtime, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl Evolver for Parallel {
    fn step(&mut self, population: &Population) -> Result<Population> {
        // Tasks need a 'static snapshot
        let snapshot = Arc::new(population.clone());
        self.runtime.block_on(evolve_parallel(snapshot, self.workers))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Generation number `advance` refuses to pass.
    pub max_generations: Option<u64>,
    /// Fingerprints remembered for cycle detection.
    pub history: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_generations: None,
            history: 10,
        }
    }
}

/// A population that repeated an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    /// Generations between repeats; 1 for a still life.
    pub period: u64,
    /// First generation of the repeating stretch.
    pub since: u64,
}

pub struct Simulation {
    population: Population,
    generation: u64,
    evolver: Box<dyn Evolver>,
    config: SimConfig,
    history: VecDeque<(u64, u64)>,  // (fingerprint, generation)
    cycle: Option<Cycle>,
}

impl Simulation {
    pub fn new(seed: Population, evolver: Box<dyn Evolver>, config: SimConfig) -> Self {
        let mut sim = Self {
            population: seed,
            generation: 0,
            evolver,
            config,
            history: VecDeque::new(),
            cycle: None,
        };
        sim.record();
        sim
    }

    pub fn sequential(seed: Population) -> Self {
        Self::new(seed, Box::new(Sequential), SimConfig::default())
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn into_population(self) -> Population {
        self.population
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// First repeat seen so far, if any. Stepping continues regardless.
    pub fn cycle(&self) -> Option<Cycle> {
        self.cycle
    }

    pub fn step(&mut self) -> Result<()> {
        self.advance(1)
    }

    pub fn advance(&mut self, generations: u64) -> Result<()> {
        let requested = self.generation.saturating_add(generations);
        if let Some(limit) = self.config.max_generations {
            if requested > limit {
                return Err(Error::GenerationLimit { requested, limit });
            }
        }
        for _ in 0..generations {
            self.population = self.evolver.step(&self.population)?;
            self.generation += 1;
            debug!("generation {}: {} live cells", self.generation, self.population.len());
            self.record();
        }
        Ok(())
    }

    fn record(&mut self) {
        let fingerprint = self.population.fingerprint();
        if self.cycle.is_none() {
            if let Some(&(_, since)) = self.history.iter().rev().find(|(fp, _)| *fp == fingerprint) {
                let cycle = Cycle { period: self.generation - since, since };
                info!("cycle of period {} detected at generation {}", cycle.period, self.generation);
                self.cycle = Some(cycle);
            }
        }
        if self.config.history == 0 {
            return;
        }
        if self.history.len() == self.config.history {
            self.history.pop_front();
        }
        self.history.push_back((fingerprint, self.generation));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pop(cells: &[(i64, i64)]) -> Population {
        cells.iter().copied().collect()
    }

    fn glider() -> Population {
        pop(&[(0, 0), (1, 0), (2, 0), (0, 1), (1, 2)])
    }

    #[test]
    fn zero_generations_is_identity() {
        let seed = glider();
        assert_eq!(run(&seed, 0), seed);
        assert_eq!(run(&Population::new(), 0), Population::new());
    }

    #[test]
    fn blinker_returns_after_two() {
        let blinker = pop(&[(1, 0), (1, 1), (1, 2)]);
        assert_eq!(run(&blinker, 1), pop(&[(0, 1), (1, 1), (2, 1)]));
        assert_eq!(run(&blinker, 2), blinker);
    }

    #[test]
    fn glider_translates_every_four() {
        let seed = glider();
        assert_eq!(run(&seed, 4), seed.translated(-1, -1));
        assert_eq!(run(&seed, 8), seed.translated(-2, -2));
        assert_ne!(run(&seed, 4), seed.translated(1, -1));
    }

    #[test]
    fn run_with_sequential_matches_run() {
        let seed = pop(&[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)]);
        let via_trait = run_with(&mut Sequential, &seed, 30).unwrap();
        assert_eq!(via_trait, run(&seed, 30));
    }

    #[test]
    fn run_with_parallel_matches_run() {
        let seed = pop(&[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)]);
        let mut parallel = Parallel::new(2).unwrap();
        assert_eq!(parallel.workers(), 2);
        assert_eq!(run_with(&mut parallel, &seed, 30).unwrap(), run(&seed, 30));
    }

    #[test]
    fn block_reports_period_one() {
        let mut sim = Simulation::sequential(pop(&[(0, 0), (1, 0), (0, 1), (1, 1)]));
        assert_eq!(sim.cycle(), None);
        sim.step().unwrap();
        assert_eq!(sim.cycle(), Some(Cycle { period: 1, since: 0 }));
    }

    #[test]
    fn blinker_reports_period_two() {
        let mut sim = Simulation::sequential(pop(&[(1, 0), (1, 1), (1, 2)]));
        sim.step().unwrap();
        assert_eq!(sim.cycle(), None);
        sim.step().unwrap();
        assert_eq!(sim.cycle(), Some(Cycle { period: 2, since: 0 }));
        sim.advance(5).unwrap();
        assert_eq!(sim.generation(), 7);
        assert_eq!(sim.cycle(), Some(Cycle { period: 2, since: 0 }));
    }

    #[test]
    fn dying_population_settles_on_empty() {
        let mut sim = Simulation::sequential(pop(&[(0, 0)]));
        sim.advance(2).unwrap();
        assert!(sim.population().is_empty());
        assert_eq!(sim.cycle(), Some(Cycle { period: 1, since: 1 }));
    }

    #[test]
    fn glider_is_not_a_cycle() {
        let mut sim = Simulation::sequential(glider());
        sim.advance(12).unwrap();
        assert_eq!(sim.cycle(), None);
        assert_eq!(sim.population().normalized(), glider().normalized());
    }

    #[test]
    fn short_history_misses_long_period() {
        let config = SimConfig { history: 1, ..SimConfig::default() };
        let mut sim = Simulation::new(pop(&[(1, 0), (1, 1), (1, 2)]), Box::new(Sequential), config);
        sim.advance(6).unwrap();
        assert_eq!(sim.cycle(), None);
    }

    #[test]
    fn generation_limit_is_enforced_before_stepping() {
        let config = SimConfig { max_generations: Some(5), ..SimConfig::default() };
        let mut sim = Simulation::new(glider(), Box::new(Sequential), config);
        sim.advance(5).unwrap();
        match sim.advance(1) {
            Err(Error::GenerationLimit { requested, limit }) => {
                assert_eq!((requested, limit), (6, 5));
            }
            other => panic!("expected generation limit, got {:?}", other),
        }
        assert_eq!(sim.generation(), 5);
        assert_eq!(sim.into_population(), run(&glider(), 5));
    }
}
