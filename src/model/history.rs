//! Per-scenario history snapshots
//!
//! One row per period for each population, recorded after choice
//! resolution and before queued decision-maker releases take effect, so a
//! period's snapshot still shows the attachments that produced it. The
//! three matrices are the sole input to the statistics aggregator.

use serde::{Deserialize, Serialize};

use crate::core::types::{
    ChoiceId, ChoiceStatus, DecisionMakerId, Period, ProblemId, ProblemStatus, NUM_CHOICES,
    NUM_DECISION_MAKERS, NUM_PERIODS, NUM_PROBLEMS,
};
use crate::model::state::ScenarioState;

/// Recorded state of one problem in one period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProblemCell {
    /// The problem has not yet entered the organization
    NotEntered,
    /// Entered but attached to no choice
    Unattached,
    /// Attached to the given choice
    Attached(ChoiceId),
    /// Solved
    Solved,
}

impl ProblemCell {
    /// Table code: -1 / 0 / choice id / 1000
    pub fn code(self) -> i32 {
        match self {
            ProblemCell::NotEntered => -1,
            ProblemCell::Unattached => 0,
            ProblemCell::Attached(choice) => choice.0 as i32,
            ProblemCell::Solved => 1000,
        }
    }
}

/// The three per-period snapshot matrices of one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioHistory {
    pub choices: [[ChoiceStatus; NUM_CHOICES]; NUM_PERIODS],
    pub makers: [[Option<ChoiceId>; NUM_DECISION_MAKERS]; NUM_PERIODS],
    pub problems: [[ProblemCell; NUM_PROBLEMS]; NUM_PERIODS],
}

impl ScenarioHistory {
    pub fn new() -> Self {
        Self {
            choices: [[ChoiceStatus::Inactive; NUM_CHOICES]; NUM_PERIODS],
            makers: [[None; NUM_DECISION_MAKERS]; NUM_PERIODS],
            problems: [[ProblemCell::NotEntered; NUM_PROBLEMS]; NUM_PERIODS],
        }
    }

    /// Record the post-resolution snapshot for one period.
    pub fn record(&mut self, period: Period, state: &ScenarioState) {
        let t = period.index();
        for choice in ChoiceId::all() {
            self.choices[t][choice.index()] = state.choice_status[choice.index()];
        }
        for maker in DecisionMakerId::all() {
            self.makers[t][maker.index()] = state.maker_choice[maker.index()];
        }
        for problem in ProblemId::all() {
            let j = problem.index();
            self.problems[t][j] = match state.problem_status[j] {
                ProblemStatus::NotEntered => ProblemCell::NotEntered,
                ProblemStatus::Solved => ProblemCell::Solved,
                ProblemStatus::Active => match state.problem_choice[j] {
                    Some(choice) => ProblemCell::Attached(choice),
                    None => ProblemCell::Unattached,
                },
            };
        }
    }
}

impl Default for ScenarioHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::coords::{
        AccessStructure, DecisionStructure, EnergyDistribution, EnergyLoad, ScenarioCoords,
    };

    fn empty_state() -> ScenarioState {
        ScenarioState::new(ScenarioCoords {
            load: EnergyLoad::Light,
            access: AccessStructure::Unsegmented,
            structure: DecisionStructure::Unsegmented,
            energy: EnergyDistribution::Uniform,
        })
    }

    #[test]
    fn test_problem_cell_codes() {
        assert_eq!(ProblemCell::NotEntered.code(), -1);
        assert_eq!(ProblemCell::Unattached.code(), 0);
        assert_eq!(ProblemCell::Attached(ChoiceId(7)).code(), 7);
        assert_eq!(ProblemCell::Solved.code(), 1000);
    }

    #[test]
    fn test_record_encodes_problem_states() {
        let mut state = empty_state();
        state.problem_status[0] = ProblemStatus::Active;
        state.problem_choice[0] = Some(ChoiceId(3));
        state.problem_status[1] = ProblemStatus::Active;
        state.problem_status[2] = ProblemStatus::Solved;
        // A solved problem's stale attachment must not leak into the cell
        state.problem_choice[2] = Some(ChoiceId(5));

        let mut history = ScenarioHistory::new();
        history.record(Period(1), &state);

        assert_eq!(history.problems[0][0], ProblemCell::Attached(ChoiceId(3)));
        assert_eq!(history.problems[0][1], ProblemCell::Unattached);
        assert_eq!(history.problems[0][2], ProblemCell::Solved);
        assert_eq!(history.problems[0][3], ProblemCell::NotEntered);
    }

    #[test]
    fn test_record_captures_statuses_and_assignments() {
        let mut state = empty_state();
        state.choice_status[4] = ChoiceStatus::Active;
        state.choice_status[5] = ChoiceStatus::Made;
        state.maker_choice[2] = Some(ChoiceId(5));

        let mut history = ScenarioHistory::new();
        history.record(Period(3), &state);

        assert_eq!(history.choices[2][4], ChoiceStatus::Active);
        assert_eq!(history.choices[2][5], ChoiceStatus::Made);
        assert_eq!(history.makers[2][2], Some(ChoiceId(5)));
        assert_eq!(history.makers[2][0], None);
    }
}
