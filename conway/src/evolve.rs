// evolve.rs - One generation of B3/S23, sequential and as chunk coroutines

use std::collections::HashSet;
use std::sync::Arc;

use log::trace;

use crate::cell::Cell;
use crate::error::Result;
use crate::population::Population;

/// Every cell whose state could change: the live cells and their neighbors.
pub fn candidates(population: &Population) -> HashSet<Cell> {
    let mut set = HashSet::with_capacity(population.len() * 9);
    for &cell in population {
        set.insert(cell);
        set.extend(cell.neighbors());
    }
    set
}

/// Number of `cell`'s neighbors alive in `population`.
pub fn live_neighbors(population: &Population, cell: Cell) -> usize {
    cell.neighbors().iter().filter(|n| population.contains(n)).count()
}

/// Conway's rule.
pub fn next_state(alive: bool, count: usize) -> bool {
    match (alive, count) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

fn survives(population: &Population, cell: Cell) -> bool {
    next_state(population.contains(&cell), live_neighbors(population, cell))
}

/// Computes the next generation. The input is only read.
pub fn evolve(population: &Population) -> Population {
    candidates(population)
        .into_iter()
        .filter(|&cell| survives(population, cell))
        .collect()
}

/// Chunk coroutine: decides the fate of each candidate in `chunk`
async fn process_chunk(index: usize, snapshot: Arc<Population>, chunk: Vec<Cell>) -> (usize, Vec<Cell>) {
    let mut alive = Vec::new();
    for cell in chunk {
        if survives(&snapshot, cell) {
            alive.push(cell);
        }
        tokio::task::yield_now().await;  // Cooperative yielding
    }
    trace!("chunk {} produced {} live cells", index, alive.len());
    (index, alive)
}

/// Same result as [`evolve`], with the candidate set split across `workers`
/// spawned tasks that share one read-only snapshot. Must run inside a tokio runtime.
pub async fn evolve_parallel(snapshot: Arc<Population>, workers: usize) -> Result<Population> {
    let mut cells: Vec<Cell> = candidates(&snapshot).into_iter().collect();
    if cells.is_empty() {
        return Ok(Population::new());
    }
    cells.sort_unstable();

    let chunk_len = cells.len().div_ceil(workers.max(1));
    let mut handles = Vec::new();
    for (index, chunk) in cells.chunks(chunk_len).enumerate() {
        let handle = tokio::spawn(process_chunk(index, Arc::clone(&snapshot), chunk.to_vec()));
        handles.push(handle);
    }

    // Chunks are disjoint, so the union never merges two entries for one cell
    let mut next = Population::with_capacity(snapshot.len());
    for handle in handles {
        let (_, alive) = handle.await?;
        next.extend(alive);
    }
    Ok(next)
}
