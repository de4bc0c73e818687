// config.rs - Run configuration, read from an optional TOML file

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use conway::SimConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sim: SimSection,
    #[serde(default)]
    pub parallel: ParallelSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimSection {
    #[serde(default = "default_generations")]
    pub generations: u64,
    #[serde(default)]
    pub max_generations: Option<u64>,
    #[serde(default = "default_history")]
    pub history: usize,
    #[serde(default)]
    pub stop_on_cycle: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallelSection {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_generations() -> u64 { 100 }
fn default_history() -> usize { 10 }
fn default_workers() -> usize { 4 }

impl Default for SimSection {
    fn default() -> Self {
        Self {
            generations: default_generations(),
            max_generations: None,
            history: default_history(),
            stop_on_cycle: false,
        }
    }
}

impl Default for ParallelSection {
    fn default() -> Self {
        Self {
            enabled: false,
            workers: default_workers(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// The library-side part of the config.
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            max_generations: self.sim.max_generations,
            history: self.sim.history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.sim.generations, 100);
        assert_eq!(config.sim.history, 10);
        assert!(!config.parallel.enabled);
        assert_eq!(config.parallel.workers, 4);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::parse("[sim]\nmax_generations = 500\n\n[parallel]\nenabled = true\n").unwrap();
        assert_eq!(config.sim.generations, 100);
        assert_eq!(config.sim.max_generations, Some(500));
        assert!(config.parallel.enabled);
        assert_eq!(config.parallel.workers, 4);
        assert_eq!(config.sim_config(), SimConfig { max_generations: Some(500), history: 10 });
    }

    #[test]
    fn negative_generations_are_rejected() {
        assert!(Config::parse("[sim]\ngenerations = -3\n").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load(Path::new("/nonexistent/conway.toml")).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }
}
