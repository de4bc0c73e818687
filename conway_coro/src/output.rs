// output.rs - Writing the final population and run statistics

use std::fmt;
use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use conway::{Cycle, Population};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// One `x y` pair per line, sorted
    #[default]
    Coords,
    /// JSON array of `{"x": .., "y": ..}` objects, sorted
    Json,
}

pub fn write_population(out: &mut impl Write, population: &Population, format: Format) -> Result<()> {
    match format {
        Format::Coords => {
            for cell in population.sorted() {
                writeln!(out, "{} {}", cell.x, cell.y)?;
            }
        }
        Format::Json => {
            serde_json::to_writer(&mut *out, population)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Summary of a finished run
pub struct Stats {
    pub generation: u64,
    pub live_cells: usize,
    pub bounds: Option<(i64, i64)>,  // width, height
    pub cycle: Option<Cycle>,
}

impl Stats {
    pub fn new(generation: u64, population: &Population, cycle: Option<Cycle>) -> Self {
        let bounds = population
            .bounding_box()
            .map(|(lo, hi)| (hi.x - lo.x + 1, hi.y - lo.y + 1));
        Self {
            generation,
            live_cells: population.len(),
            bounds,
            cycle,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generation: {}  Live cells: {}", self.generation, self.live_cells)?;
        if let Some((w, h)) = self.bounds {
            write!(f, "  Bounds: {}x{}", w, h)?;
        }
        match self.cycle {
            Some(Cycle { period: 1, since }) => write!(f, "  Stable since generation {}", since),
            Some(Cycle { period, since }) => write!(f, "  Period {} since generation {}", period, since),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> Population {
        [(1, 0), (1, 1), (1, 2)].into_iter().collect()
    }

    #[test]
    fn coords_are_sorted_lines() {
        let mut buf = Vec::new();
        write_population(&mut buf, &blinker(), Format::Coords).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1 0\n1 1\n1 2\n");
    }

    #[test]
    fn json_is_an_array_of_cells() {
        let mut buf = Vec::new();
        write_population(&mut buf, &blinker(), Format::Json).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "[{\"x\":1,\"y\":0},{\"x\":1,\"y\":1},{\"x\":1,\"y\":2}]\n"
        );
    }

    #[test]
    fn empty_population_writes_nothing() {
        let mut buf = Vec::new();
        write_population(&mut buf, &Population::new(), Format::Coords).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn stats_line() {
        let stats = Stats::new(4, &blinker(), Some(Cycle { period: 2, since: 0 }));
        assert_eq!(stats.to_string(), "Generation: 4  Live cells: 3  Bounds: 1x3  Period 2 since generation 0");
        let still = Stats::new(9, &Population::new(), Some(Cycle { period: 1, since: 2 }));
        assert_eq!(still.to_string(), "Generation: 9  Live cells: 0  Stable since generation 2");
    }
}
