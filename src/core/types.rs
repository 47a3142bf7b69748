//! Core type definitions used throughout the codebase
//!
//! Populations are fixed: 10 choice opportunities, 20 problems, 10 decision
//! makers, 20 time periods. Entity ids are 1-based in the public vocabulary
//! (id 1..N) and map to 0-based storage through `index`.

use serde::{Deserialize, Serialize};

/// Number of choice opportunities in the organization
pub const NUM_CHOICES: usize = 10;

/// Number of problems circulating through the organization
pub const NUM_PROBLEMS: usize = 20;

/// Number of decision makers supplying energy
pub const NUM_DECISION_MAKERS: usize = 10;

/// Number of simulated time periods per scenario
pub const NUM_PERIODS: usize = 20;

/// Unique identifier for choice opportunities (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChoiceId(pub u32);

impl ChoiceId {
    /// Storage index backing this id
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    pub fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    /// All choice ids in ascending order
    pub fn all() -> impl Iterator<Item = ChoiceId> {
        (1..=NUM_CHOICES as u32).map(ChoiceId)
    }
}

/// Unique identifier for problems (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProblemId(pub u32);

impl ProblemId {
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    pub fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    pub fn all() -> impl Iterator<Item = ProblemId> {
        (1..=NUM_PROBLEMS as u32).map(ProblemId)
    }
}

/// Unique identifier for decision makers (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecisionMakerId(pub u32);

impl DecisionMakerId {
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    pub fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    pub fn all() -> impl Iterator<Item = DecisionMakerId> {
        (1..=NUM_DECISION_MAKERS as u32).map(DecisionMakerId)
    }
}

/// One simulated time period (1-based simulation clock)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period(pub u32);

impl Period {
    pub fn get(self) -> u32 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// All periods in simulation order
    pub fn all() -> impl Iterator<Item = Period> {
        (1..=NUM_PERIODS as u32).map(Period)
    }

    pub fn is_last(self) -> bool {
        self.0 as usize == NUM_PERIODS
    }

    /// The previous period, clamped to the first period
    pub fn prior(self) -> Period {
        Period(self.0.saturating_sub(1).max(1))
    }
}

/// Lifecycle of a choice opportunity within one scenario
///
/// Status only moves forward: a made choice never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceStatus {
    Inactive,
    Active,
    Made,
}

impl ChoiceStatus {
    /// Numeric code used by the history tables (0/1/2)
    pub fn code(self) -> i32 {
        match self {
            ChoiceStatus::Inactive => 0,
            ChoiceStatus::Active => 1,
            ChoiceStatus::Made => 2,
        }
    }
}

/// Lifecycle of a problem within one scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProblemStatus {
    NotEntered,
    Active,
    Solved,
}

impl ProblemStatus {
    pub fn code(self) -> i32 {
        match self {
            ProblemStatus::NotEntered => 0,
            ProblemStatus::Active => 1,
            ProblemStatus::Solved => 2,
        }
    }
}

/// Decision-maker movement condition (the legacy NA selector)
///
/// Conditions 2 and 4 freeze problem attachments; 3 and 4 freeze decision
/// maker attachments. Any other integer leaves both populations free to
/// re-search every period, matching the reference model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementCondition(pub i64);

impl MovementCondition {
    /// Problems keep an existing attachment instead of re-searching
    pub fn problems_hold(self) -> bool {
        matches!(self.0, 2 | 4)
    }

    /// Decision makers keep an existing attachment instead of re-searching
    pub fn makers_hold(self) -> bool {
        matches!(self.0, 3 | 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_index_round_trip() {
        for choice in ChoiceId::all() {
            assert_eq!(ChoiceId::from_index(choice.index()), choice);
        }
        for problem in ProblemId::all() {
            assert_eq!(ProblemId::from_index(problem.index()), problem);
        }
        assert_eq!(ChoiceId(1).index(), 0);
        assert_eq!(ProblemId(20).index(), 19);
    }

    #[test]
    fn test_population_iteration_counts() {
        assert_eq!(ChoiceId::all().count(), NUM_CHOICES);
        assert_eq!(ProblemId::all().count(), NUM_PROBLEMS);
        assert_eq!(DecisionMakerId::all().count(), NUM_DECISION_MAKERS);
        assert_eq!(Period::all().count(), NUM_PERIODS);
    }

    #[test]
    fn test_period_prior_clamps_at_first() {
        assert_eq!(Period(1).prior(), Period(1));
        assert_eq!(Period(2).prior(), Period(1));
        assert_eq!(Period(20).prior(), Period(19));
    }

    #[test]
    fn test_movement_condition_predicates() {
        assert!(!MovementCondition(0).problems_hold());
        assert!(!MovementCondition(1).makers_hold());
        assert!(MovementCondition(2).problems_hold());
        assert!(!MovementCondition(2).makers_hold());
        assert!(MovementCondition(3).makers_hold());
        assert!(!MovementCondition(3).problems_hold());
        assert!(MovementCondition(4).problems_hold());
        assert!(MovementCondition(4).makers_hold());
        // Out-of-range selectors behave like unrestricted movement
        assert!(!MovementCondition(7).problems_hold());
        assert!(!MovementCondition(-1).makers_hold());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ChoiceStatus::Inactive.code(), 0);
        assert_eq!(ChoiceStatus::Active.code(), 1);
        assert_eq!(ChoiceStatus::Made.code(), 2);
        assert_eq!(ProblemStatus::Solved.code(), 2);
    }
}
