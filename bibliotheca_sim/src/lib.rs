//! Bibliotheca Simulation Harness
//!
//! Runs a library through a seeded sequence of catalog events. A run of
//! `steps` iterations executes steps `1..=steps`, applies one randomly
//! chosen [`CatalogEvent`] per step and records one [`StepRecord`] per step.
//!
//! All randomness derives from a single 64-bit seed, so any run is
//! reproducible from `(steps, seed)`.
//!
//! # Usage
//!
//! ```
//! use bibliotheca_sim::run_simulation;
//!
//! let log = run_simulation(1, 42);
//! assert_eq!(log.len(), 1);
//! assert_eq!(log[0].index, 1);
//! ```

mod context;
mod exporter;
mod runner;
pub mod catalog;
pub mod events;

pub use context::SimContext;
pub use events::CatalogEvent;
pub use exporter::{ExportError, RunExport};
pub use runner::{run_simulation, RunOutcome, SimConfig, SimulationRun, StepRecord};
