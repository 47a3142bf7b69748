//! Parameter sweep driver
//!
//! The outer control loop: one fresh scenario per coordinate tuple, 81 in
//! all. State never crosses a scenario boundary; each run owns its state
//! and history exclusively and hands the statistics aggregator the final
//! snapshot.

use serde::Serialize;

use crate::core::types::{MovementCondition, Period};
use crate::input::RunInputs;
use crate::model::coords::ScenarioCoords;
use crate::model::history::ScenarioHistory;
use crate::model::period::run_period;
use crate::model::state::ScenarioState;
use crate::model::stats::ScenarioStats;

/// One summary record per scenario: the coordinates plus the statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub coords: ScenarioCoords,
    pub stats: ScenarioStats,
}

/// Everything one scenario produced
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRun {
    pub summary: ScenarioSummary,
    pub history: ScenarioHistory,
}

/// Complete sweep output in machine-readable form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepOutput {
    pub movement: MovementCondition,
    pub scenarios: Vec<ScenarioSummary>,
}

/// Run a single scenario from a fresh state.
pub fn run_scenario(coords: ScenarioCoords, inputs: &RunInputs) -> ScenarioRun {
    let mut state = ScenarioState::new(coords);
    let mut history = ScenarioHistory::new();
    for period in Period::all() {
        run_period(&mut state, inputs, period, &mut history);
    }
    let stats = ScenarioStats::from_history(&history, &state);
    ScenarioRun {
        summary: ScenarioSummary { coords, stats },
        history,
    }
}

/// Run all 81 sweep combinations in fixed nested order.
pub fn run_sweep(inputs: &RunInputs) -> Vec<ScenarioRun> {
    tracing::info!(movement = inputs.movement.0, "starting 81-scenario sweep");
    ScenarioCoords::sweep()
        .map(|coords| {
            tracing::debug!(
                load = coords.load.code(),
                access = coords.access.code(),
                structure = coords.structure.code(),
                energy = coords.energy.code(),
                "running scenario"
            );
            run_scenario(coords, inputs)
        })
        .collect()
}

impl SweepOutput {
    pub fn new(movement: MovementCondition, runs: &[ScenarioRun]) -> Self {
        Self {
            movement,
            scenarios: runs.iter().map(|run| run.summary).collect(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }
}
