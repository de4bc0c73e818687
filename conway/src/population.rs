// population.rs - The set of live cells, plus plaintext seed parsing

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashSet, hash_set};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{Error, Result};

/// All live cells of one generation. A cell is alive iff it is a member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct Population {
    cells: HashSet<Cell>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { cells: HashSet::with_capacity(capacity) }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Cells ordered by `(x, y)`.
    pub fn sorted(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.cells.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    /// Inclusive `(min, max)` corners, or `None` when empty.
    pub fn bounding_box(&self) -> Option<(Cell, Cell)> {
        let mut iter = self.cells.iter();
        let first = *iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), c| {
            (
                Cell::new(lo.x.min(c.x), lo.y.min(c.y)),
                Cell::new(hi.x.max(c.x), hi.y.max(c.y)),
            )
        }))
    }

    pub fn translated(&self, dx: i64, dy: i64) -> Self {
        self.cells.iter().map(|c| c.offset(dx, dy)).collect()
    }

    /// Same shape moved so its bounding box starts at the origin.
    pub fn normalized(&self) -> Self {
        match self.bounding_box() {
            Some((lo, _)) => self.translated(-lo.x, -lo.y),
            None => Self::new(),
        }
    }

    /// Order-independent hash of the membership.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.cells.len().hash(&mut hasher);
        for cell in self.sorted() {
            cell.hash(&mut hasher);
        }
        hasher.finish()
    }
}

impl FromIterator<Cell> for Population {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}

impl FromIterator<(i64, i64)> for Population {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        iter.into_iter().map(Cell::from).collect()
    }
}

impl Extend<Cell> for Population {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Cell;
    type IntoIter = hash_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl IntoIterator for Population {
    type Item = Cell;
    type IntoIter = hash_set::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl From<Vec<Cell>> for Population {
    fn from(cells: Vec<Cell>) -> Self {
        cells.into_iter().collect()
    }
}

impl From<Population> for Vec<Cell> {
    fn from(population: Population) -> Self {
        population.sorted()
    }
}

/// Parses the Life "plaintext" format: `!` starts a comment line, `O` or `*`
/// is alive, `.` is dead. Column index is x, row index is y.
pub fn parse_plaintext(text: &str) -> Result<Population> {
    let mut population = Population::new();
    let mut y = 0;
    for (line_no, line) in text.lines().enumerate() {
        if line.starts_with('!') {
            continue;
        }
        for (x, ch) in line.trim_end().chars().enumerate() {
            match ch {
                'O' | '*' => {
                    population.cells.insert(Cell::new(x as i64, y));
                }
                '.' => {}
                found => {
                    return Err(Error::Parse { line: line_no + 1, column: x + 1, found });
                }
            }
        }
        y += 1;
    }
    Ok(population)
}

impl FromStr for Population {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_plaintext(s)
    }
}
