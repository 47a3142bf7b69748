//! Sweep coordinates and the 81-combination parameter grid
//!
//! Each scenario is addressed by four structural coordinates: the net
//! energy load, the problem access structure, the decision structure, and
//! the energy distribution. Reported coordinate codes are 0-based.

use serde::{Deserialize, Serialize};

use crate::core::types::{ChoiceId, DecisionMakerId, ProblemId};

/// Net energy load the problem population places on the organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyLoad {
    Light,
    Moderate,
    Heavy,
}

impl EnergyLoad {
    pub const ALL: [EnergyLoad; 3] = [EnergyLoad::Light, EnergyLoad::Moderate, EnergyLoad::Heavy];

    /// Reported coordinate code (0..2)
    pub fn code(self) -> u8 {
        match self {
            EnergyLoad::Light => 0,
            EnergyLoad::Moderate => 1,
            EnergyLoad::Heavy => 2,
        }
    }

    /// Energy a single problem demands under this load
    ///
    /// The multiplier is 1, 2 or 3; the reported code is multiplier - 1.
    pub fn problem_energy(self) -> f64 {
        (self.code() as f64 + 1.0) * 1.1
    }
}

/// Which choices a problem may attach to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessStructure {
    /// Any problem may reach any choice
    Unsegmented,
    /// Problem p reaches choice c when (p - c) <= floor(p / 2)
    Hierarchical,
    /// Problems 2c-1 and 2c reach only choice c
    Specialized,
}

impl AccessStructure {
    pub const ALL: [AccessStructure; 3] = [
        AccessStructure::Unsegmented,
        AccessStructure::Hierarchical,
        AccessStructure::Specialized,
    ];

    pub fn code(self) -> u8 {
        match self {
            AccessStructure::Unsegmented => 0,
            AccessStructure::Hierarchical => 1,
            AccessStructure::Specialized => 2,
        }
    }

    /// Whether the given problem may attach to the given choice
    pub fn admits(self, problem: ProblemId, choice: ChoiceId) -> bool {
        let p = problem.0 as i64;
        let c = choice.0 as i64;
        match self {
            AccessStructure::Unsegmented => true,
            AccessStructure::Hierarchical => p - c <= p / 2,
            AccessStructure::Specialized => p == 2 * c || p + 1 == 2 * c,
        }
    }
}

/// Which choices a decision maker may work on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionStructure {
    /// Any decision maker may work on any choice
    Unsegmented,
    /// Decision maker k reaches only choices c >= k
    Hierarchical,
    /// Decision maker k reaches only choice k
    Specialized,
}

impl DecisionStructure {
    pub const ALL: [DecisionStructure; 3] = [
        DecisionStructure::Unsegmented,
        DecisionStructure::Hierarchical,
        DecisionStructure::Specialized,
    ];

    pub fn code(self) -> u8 {
        match self {
            DecisionStructure::Unsegmented => 0,
            DecisionStructure::Hierarchical => 1,
            DecisionStructure::Specialized => 2,
        }
    }

    /// Whether the given decision maker may work on the given choice
    pub fn admits(self, choice: ChoiceId, maker: DecisionMakerId) -> bool {
        match self {
            DecisionStructure::Unsegmented => true,
            DecisionStructure::Hierarchical => choice.0 >= maker.0,
            DecisionStructure::Specialized => maker.0 == choice.0,
        }
    }
}

/// How energy is distributed over the decision makers
///
/// Under the hierarchical decision structure low ids are the senior
/// members, so `Rising` gives the seniors the least energy and `Falling`
/// the most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyDistribution {
    /// Energy k/10, rising with id
    Rising,
    /// Flat 0.55 for everyone
    Uniform,
    /// Energy (11 - k)/10, falling with id
    Falling,
}

impl EnergyDistribution {
    pub const ALL: [EnergyDistribution; 3] = [
        EnergyDistribution::Rising,
        EnergyDistribution::Uniform,
        EnergyDistribution::Falling,
    ];

    pub fn code(self) -> u8 {
        match self {
            EnergyDistribution::Rising => 0,
            EnergyDistribution::Uniform => 1,
            EnergyDistribution::Falling => 2,
        }
    }

    /// Energy the given decision maker can supply in any one period
    pub fn available(self, maker: DecisionMakerId) -> f64 {
        match self {
            EnergyDistribution::Rising => maker.0 as f64 / 10.0,
            EnergyDistribution::Uniform => 0.55,
            EnergyDistribution::Falling => (11.0 - maker.0 as f64) / 10.0,
        }
    }
}

/// The four sweep coordinates addressing one scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioCoords {
    pub load: EnergyLoad,
    pub access: AccessStructure,
    pub structure: DecisionStructure,
    pub energy: EnergyDistribution,
}

impl ScenarioCoords {
    /// All 81 coordinate tuples in fixed nested order: load outermost,
    /// then access, then decision structure, then energy distribution.
    pub fn sweep() -> impl Iterator<Item = ScenarioCoords> {
        EnergyLoad::ALL.into_iter().flat_map(|load| {
            AccessStructure::ALL.into_iter().flat_map(move |access| {
                DecisionStructure::ALL.into_iter().flat_map(move |structure| {
                    EnergyDistribution::ALL
                        .into_iter()
                        .map(move |energy| ScenarioCoords {
                            load,
                            access,
                            structure,
                            energy,
                        })
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_has_81_combinations_in_order() {
        let all: Vec<ScenarioCoords> = ScenarioCoords::sweep().collect();
        assert_eq!(all.len(), 81);
        assert_eq!(
            all[0],
            ScenarioCoords {
                load: EnergyLoad::Light,
                access: AccessStructure::Unsegmented,
                structure: DecisionStructure::Unsegmented,
                energy: EnergyDistribution::Rising,
            }
        );
        // Innermost coordinate varies first
        assert_eq!(all[1].energy, EnergyDistribution::Uniform);
        assert_eq!(all[1].load, EnergyLoad::Light);
        // Outermost coordinate varies last
        assert_eq!(all[80].load, EnergyLoad::Heavy);
        assert_eq!(all[80].energy, EnergyDistribution::Falling);
    }

    #[test]
    fn test_problem_energy_by_load() {
        assert!((EnergyLoad::Light.problem_energy() - 1.1).abs() < 1e-12);
        assert!((EnergyLoad::Moderate.problem_energy() - 2.2).abs() < 1e-12);
        assert!((EnergyLoad::Heavy.problem_energy() - 3.3).abs() < 1e-12);
    }

    #[test]
    fn test_hierarchical_access_pattern() {
        let access = AccessStructure::Hierarchical;
        // Problem 1: 1 - c <= 0 holds for every choice
        for choice in ChoiceId::all() {
            assert!(access.admits(ProblemId(1), choice));
        }
        // Problem 10 reaches choices 5..=10 (10 - c <= 5)
        assert!(!access.admits(ProblemId(10), ChoiceId(4)));
        assert!(access.admits(ProblemId(10), ChoiceId(5)));
        // Problem 20 reaches choices 10 down to 20 - 10
        assert!(access.admits(ProblemId(20), ChoiceId(10)));
    }

    #[test]
    fn test_specialized_access_pairs_problems() {
        let access = AccessStructure::Specialized;
        for choice in ChoiceId::all() {
            for problem in ProblemId::all() {
                let expected =
                    problem.0 == 2 * choice.0 || problem.0 + 1 == 2 * choice.0;
                assert_eq!(access.admits(problem, choice), expected);
            }
        }
        // Choice 3 serves exactly problems 5 and 6
        assert!(access.admits(ProblemId(5), ChoiceId(3)));
        assert!(access.admits(ProblemId(6), ChoiceId(3)));
        assert!(!access.admits(ProblemId(7), ChoiceId(3)));
    }

    #[test]
    fn test_decision_structure_patterns() {
        let hierarchy = DecisionStructure::Hierarchical;
        assert!(hierarchy.admits(ChoiceId(5), DecisionMakerId(5)));
        assert!(hierarchy.admits(ChoiceId(10), DecisionMakerId(1)));
        assert!(!hierarchy.admits(ChoiceId(1), DecisionMakerId(2)));

        let specialized = DecisionStructure::Specialized;
        assert!(specialized.admits(ChoiceId(4), DecisionMakerId(4)));
        assert!(!specialized.admits(ChoiceId(4), DecisionMakerId(5)));
    }

    #[test]
    fn test_energy_distribution_values() {
        assert!((EnergyDistribution::Rising.available(DecisionMakerId(1)) - 0.1).abs() < 1e-12);
        assert!((EnergyDistribution::Rising.available(DecisionMakerId(10)) - 1.0).abs() < 1e-12);
        for maker in DecisionMakerId::all() {
            assert!((EnergyDistribution::Uniform.available(maker) - 0.55).abs() < 1e-12);
        }
        assert!((EnergyDistribution::Falling.available(DecisionMakerId(1)) - 1.0).abs() < 1e-12);
        assert!((EnergyDistribution::Falling.available(DecisionMakerId(10)) - 0.1).abs() < 1e-12);
    }
}
