//! ScenarioState - the mutable state of one scenario run
//!
//! Built fresh by the initializer for every sweep coordinate tuple and
//! owned exclusively by the period simulator; nothing survives a scenario
//! boundary.

use crate::core::types::{
    ChoiceId, ChoiceStatus, DecisionMakerId, Period, ProblemId, ProblemStatus, NUM_CHOICES,
    NUM_DECISION_MAKERS, NUM_PERIODS, NUM_PROBLEMS,
};
use crate::model::coords::ScenarioCoords;

/// Problem-to-choice eligibility, fixed for the scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessMatrix {
    cells: [[bool; NUM_CHOICES]; NUM_PROBLEMS],
}

impl AccessMatrix {
    fn build(coords: ScenarioCoords) -> Self {
        let mut cells = [[false; NUM_CHOICES]; NUM_PROBLEMS];
        for problem in ProblemId::all() {
            for choice in ChoiceId::all() {
                cells[problem.index()][choice.index()] = coords.access.admits(problem, choice);
            }
        }
        Self { cells }
    }

    pub fn admits(&self, problem: ProblemId, choice: ChoiceId) -> bool {
        self.cells[problem.index()][choice.index()]
    }
}

/// Choice-to-decision-maker eligibility, fixed for the scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionMatrix {
    cells: [[bool; NUM_DECISION_MAKERS]; NUM_CHOICES],
}

impl DecisionMatrix {
    fn build(coords: ScenarioCoords) -> Self {
        let mut cells = [[false; NUM_DECISION_MAKERS]; NUM_CHOICES];
        for choice in ChoiceId::all() {
            for maker in DecisionMakerId::all() {
                cells[choice.index()][maker.index()] = coords.structure.admits(choice, maker);
            }
        }
        Self { cells }
    }

    pub fn admits(&self, choice: ChoiceId, maker: DecisionMakerId) -> bool {
        self.cells[choice.index()][maker.index()]
    }
}

/// Per-maker, per-period energy supply table, fixed for the scenario
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyTable {
    cells: [[f64; NUM_PERIODS]; NUM_DECISION_MAKERS],
}

impl EnergyTable {
    fn build(coords: ScenarioCoords) -> Self {
        let mut cells = [[0.0; NUM_PERIODS]; NUM_DECISION_MAKERS];
        for maker in DecisionMakerId::all() {
            let supply = coords.energy.available(maker);
            for period in Period::all() {
                cells[maker.index()][period.index()] = supply;
            }
        }
        Self { cells }
    }

    pub fn available(&self, maker: DecisionMakerId, period: Period) -> f64 {
        self.cells[maker.index()][period.index()]
    }
}

/// Everything mutable about one scenario
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioState {
    pub coords: ScenarioCoords,

    pub choice_status: [ChoiceStatus; NUM_CHOICES],
    /// Energy each choice currently requires (sum over attached problems)
    pub energy_required: [f64; NUM_CHOICES],
    /// Energy currently applied to each choice by its decision makers
    pub energy_applied: [f64; NUM_CHOICES],

    pub problem_status: [ProblemStatus; NUM_PROBLEMS],
    /// Energy each problem demands, set by the load coordinate
    pub problem_energy: [f64; NUM_PROBLEMS],
    /// Choice each problem is attached to
    pub problem_choice: [Option<ChoiceId>; NUM_PROBLEMS],

    /// Choice each decision maker is working on
    pub maker_choice: [Option<ChoiceId>; NUM_DECISION_MAKERS],

    pub access: AccessMatrix,
    pub structure: DecisionMatrix,
    pub energy: EnergyTable,

    /// Energy of decision makers left unassigned, summed over periods
    pub unused_energy: f64,
    /// Energy beyond requirement at the moment choices were made
    pub surplus_energy: f64,
    /// Periods a decision maker ended unassigned
    pub idle_maker_periods: u32,
}

impl ScenarioState {
    /// Build the initial state for one sweep coordinate tuple.
    pub fn new(coords: ScenarioCoords) -> Self {
        Self {
            coords,
            choice_status: [ChoiceStatus::Inactive; NUM_CHOICES],
            energy_required: [1.1; NUM_CHOICES],
            energy_applied: [0.0; NUM_CHOICES],
            problem_status: [ProblemStatus::NotEntered; NUM_PROBLEMS],
            problem_energy: [coords.load.problem_energy(); NUM_PROBLEMS],
            problem_choice: [None; NUM_PROBLEMS],
            maker_choice: [None; NUM_DECISION_MAKERS],
            access: AccessMatrix::build(coords),
            structure: DecisionMatrix::build(coords),
            energy: EnergyTable::build(coords),
            unused_energy: 0.0,
            surplus_energy: 0.0,
            idle_maker_periods: 0,
        }
    }
}
