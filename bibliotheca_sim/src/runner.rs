//! Step runner - drives a library through a seeded sequence of events.

use crate::context::SimContext;
use crate::events::CatalogEvent;

use bibliotheca_core::Library;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Upper bound on records reserved before the first step runs.
const MAX_PREALLOCATED_RECORDS: usize = 1024;

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Master seed for determinism
    pub seed: u64,

    /// Number of steps to execute (non-positive runs nothing)
    pub steps: i64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            steps: 20,
        }
    }
}

impl SimConfig {
    pub fn with_steps(mut self, steps: i64) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// One executed step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// 1-based step number
    pub index: u64,

    /// Human-readable label, `Step N`
    pub description: String,

    /// Event applied during this step
    pub event: CatalogEvent,

    /// Line reported by the event
    pub message: String,
}

impl StepRecord {
    fn new(index: u64, event: CatalogEvent, message: String) -> Self {
        Self {
            index,
            description: format!("Step {}", index),
            event,
            message,
        }
    }
}

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Seed the run was started with
    pub seed: u64,

    /// Steps requested by the caller
    pub steps_requested: i64,

    /// Step log, in execution order
    pub records: Vec<StepRecord>,

    /// Library state after the last step
    pub library: Library,
}

/// A single simulation run: `steps` iterations from one seed.
#[derive(Debug, Clone)]
pub struct SimulationRun {
    steps: i64,
    seed: u64,
}

impl SimulationRun {
    /// Creates a run. Nothing executes until [`SimulationRun::execute`].
    pub fn new(steps: i64, seed: u64) -> Self {
        Self { steps, seed }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.steps, config.seed)
    }

    pub fn steps(&self) -> i64 {
        self.steps
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Executes steps `1..=steps` against an empty library.
    ///
    /// The range is inclusive: a request for N steps yields exactly N
    /// records numbered 1 through N. A non-positive `steps` yields none.
    pub fn execute(&self) -> RunOutcome {
        let mut ctx = SimContext::new(self.seed);
        let mut library = Library::new();
        let mut records = Vec::with_capacity(record_capacity(self.steps));

        info!("Starting simulation: steps={} seed={}", self.steps, ctx.seed());

        for index in 1..=self.steps {
            let event = CatalogEvent::choose(ctx.rng());
            let message = event.apply(&mut library, ctx.rng());
            let record = StepRecord::new(index as u64, event, message);

            info!(step = record.index, kind = %record.event, "{}", record.description);
            debug!("{}", record.message);

            records.push(record);
        }

        info!(
            "Simulation finished: {} steps, {} books on the shelf",
            records.len(),
            library.len()
        );

        RunOutcome {
            seed: self.seed,
            steps_requested: self.steps,
            records,
            library,
        }
    }
}

/// Initial log capacity for a run of `steps`; the log grows past it as needed.
fn record_capacity(steps: i64) -> usize {
    usize::try_from(steps).unwrap_or(0).min(MAX_PREALLOCATED_RECORDS)
}

/// Runs a simulation and returns its step log.
pub fn run_simulation(steps: i64, seed: u64) -> Vec<StepRecord> {
    SimulationRun::new(steps, seed).execute().records
}
