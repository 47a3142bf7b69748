pub mod coords;
pub mod history;
pub mod period;
pub mod state;
pub mod stats;
pub mod sweep;

pub use coords::{
    AccessStructure, DecisionStructure, EnergyDistribution, EnergyLoad, ScenarioCoords,
};
pub use history::{ProblemCell, ScenarioHistory};
pub use state::ScenarioState;
pub use stats::ScenarioStats;
pub use sweep::{run_scenario, run_sweep, ScenarioRun, ScenarioSummary, SweepOutput};
