// lib.rs - Conway's Game of Life on an unbounded grid
//
// Only live cells are stored, so each generation costs time proportional to
// the population rather than to any grid area.

pub mod cell;
pub mod error;
pub mod evolve;
pub mod patterns;
pub mod population;
pub mod runner;

pub use cell::{Cell, neighbors};
pub use error::{Error, Result};
pub use evolve::{evolve, evolve_parallel};
pub use population::{Population, parse_plaintext};
pub use runner::{Cycle, Evolver, Parallel, Sequential, SimConfig, Simulation, run, run_with};
