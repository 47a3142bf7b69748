//! Summary statistics derived from scenario history
//!
//! Computed once per scenario from the three snapshot matrices plus the
//! accumulators the period simulator carried. The legacy letter codes are
//! kept on each field for cross-reference with the classic model's output.

use serde::{Deserialize, Serialize};

use crate::core::types::{ChoiceStatus, NUM_PERIODS, NUM_PROBLEMS};
use crate::model::history::{ProblemCell, ScenarioHistory};
use crate::model::state::ScenarioState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioStats {
    /// Choices still active in the final period (KZ)
    pub choices_active_at_end: u32,
    /// Period-choice cells spent active (KY)
    pub active_choice_periods: u32,
    /// Decision-maker reassignments between consecutive periods (KX)
    pub maker_moves: u32,
    /// Problems not solved by the final period (KW)
    pub problems_unresolved: u32,
    /// Problem-cell changes between consecutive periods (KV)
    pub problem_moves: u32,
    /// Period-problem cells spent entered but unattached (KU)
    pub unattached_problem_periods: u32,
    /// Period-problem cells spent attached to a choice (KT)
    pub attached_problem_periods: u32,
    /// Periods a decision maker ended unassigned (KS)
    pub idle_maker_periods: u32,
    /// Energy of unassigned decision makers, summed over periods (XR)
    pub unused_energy: f64,
    /// Energy beyond requirement at the moment choices were made (XS)
    pub surplus_energy: f64,
}

impl ScenarioStats {
    /// Derive the full statistics record for a finished scenario.
    pub fn from_history(history: &ScenarioHistory, state: &ScenarioState) -> Self {
        let mut choices_active_at_end = 0;
        let mut active_choice_periods = 0;
        for (t, row) in history.choices.iter().enumerate() {
            for status in row {
                if *status != ChoiceStatus::Active {
                    continue;
                }
                active_choice_periods += 1;
                if t == NUM_PERIODS - 1 {
                    choices_active_at_end += 1;
                }
            }
        }

        let mut maker_moves = 0;
        for t in 1..NUM_PERIODS {
            for k in 0..history.makers[t].len() {
                if history.makers[t][k] != history.makers[t - 1][k] {
                    maker_moves += 1;
                }
            }
        }

        let mut unattached_problem_periods = 0;
        let mut attached_problem_periods = 0;
        let mut solved_at_end = 0;
        for (t, row) in history.problems.iter().enumerate() {
            for cell in row {
                match cell {
                    ProblemCell::Unattached => unattached_problem_periods += 1,
                    ProblemCell::NotEntered => {}
                    ProblemCell::Solved => {
                        if t == NUM_PERIODS - 1 {
                            solved_at_end += 1;
                        }
                    }
                    ProblemCell::Attached(_) => attached_problem_periods += 1,
                }
            }
        }
        let problems_unresolved = NUM_PROBLEMS as u32 - solved_at_end;

        let mut problem_moves = 0;
        for t in 1..NUM_PERIODS {
            for j in 0..history.problems[t].len() {
                if history.problems[t][j] != history.problems[t - 1][j] {
                    problem_moves += 1;
                }
            }
        }

        Self {
            choices_active_at_end,
            active_choice_periods,
            maker_moves,
            problems_unresolved,
            problem_moves,
            unattached_problem_periods,
            attached_problem_periods,
            idle_maker_periods: state.idle_maker_periods,
            unused_energy: state.unused_energy,
            surplus_energy: state.surplus_energy,
        }
    }
}
