// patterns.rs - Named seeds and pseudo-random soups

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::population::Population;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],  // (x, y), top-left at the origin
}

impl Pattern {
    pub fn population(&self) -> Population {
        self.cells.iter().copied().collect()
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (1, 4), (0, 5), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
            (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (34, 3), (35, 2), (35, 3),
        ],
    },
];

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(*c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Looks a pattern up by name, ignoring case, spaces, `-` and `_`.
pub fn find(name: &str) -> Result<&'static Pattern> {
    let wanted = normalize_name(name);
    PATTERNS
        .iter()
        .find(|p| normalize_name(p.name) == wanted)
        .ok_or_else(|| Error::UnknownPattern(name.to_string()))
}

/// Fills a `width` x `height` box at the origin with roughly a third of cells
/// alive. The same `seed` always gives the same soup.
pub fn random_soup(width: u32, height: u32, seed: u64) -> Population {
    // Simple pseudo-random generator
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    let mut state = hasher.finish();

    let mut population = Population::new();
    for y in 0..height {
        for x in 0..width {
            state = state.wrapping_mul(1103515245).wrapping_add(12345);
            if (state >> 16) % 3 == 0 {
                population.extend([Cell::new(x as i64, y as i64)]);
            }
        }
    }
    population
}
