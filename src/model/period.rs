//! Period simulator - advances one scenario through a single time period
//!
//! Phase order within a period: activation, problem assignment, decision
//! maker assignment, energy recompute, choice resolution, history
//! snapshot. Both assignment phases are two-phase commits: every decision
//! is computed against the attachments the period started with, then
//! applied at once, so earlier searches never see later ones.
//!
//! Tie-breaking is a design invariant, not an iteration accident: the
//! searches scan candidates in ascending id order and only a strictly
//! cheaper candidate displaces the current best, so the first minimum
//! encountered wins.

use crate::core::types::{
    ChoiceId, ChoiceStatus, DecisionMakerId, MovementCondition, Period, ProblemId, ProblemStatus,
    NUM_DECISION_MAKERS, NUM_PROBLEMS,
};
use crate::input::RunInputs;
use crate::model::history::ScenarioHistory;
use crate::model::state::ScenarioState;

/// Cost ceiling for the greedy searches; candidates at or above it lose.
const COST_CEILING: f64 = 1_000_000.0;

/// Advance one scenario through one period.
pub fn run_period(
    state: &mut ScenarioState,
    inputs: &RunInputs,
    period: Period,
    history: &mut ScenarioHistory,
) {
    activate_entrants(state, inputs, period);
    assign_problems(state, inputs.movement);
    assign_decision_makers(state, inputs, period);
    recompute_energy(state, inputs, period);
    let released = resolve_choices(state, inputs.movement);

    // Snapshot first: this period's row still shows the attachments that
    // made the resolved choices, releases take effect afterwards.
    history.record(period, state);
    for maker in DecisionMakerId::all() {
        if released[maker.index()] {
            state.maker_choice[maker.index()] = None;
        }
    }
}

/// Activate every choice and problem whose entry period is now.
fn activate_entrants(state: &mut ScenarioState, inputs: &RunInputs, period: Period) {
    let now = period.get() as i64;
    for choice in ChoiceId::all() {
        if inputs.choice_entry[choice.index()] == now {
            state.choice_status[choice.index()] = ChoiceStatus::Active;
        }
    }
    for problem in ProblemId::all() {
        if inputs.problem_entry[problem.index()] == now {
            state.problem_status[problem.index()] = ProblemStatus::Active;
        }
    }
}

/// Reattach every active problem to its cheapest eligible active choice.
///
/// Staying with the current choice costs its unmet requirement; switching
/// adds the problem's own energy demand on top. Problems that find no
/// eligible active choice end the period unattached, as do problems not
/// currently active (solved problems shed their stale attachment here).
fn assign_problems(state: &mut ScenarioState, movement: MovementCondition) {
    let mut pending: [Option<ChoiceId>; NUM_PROBLEMS] = [None; NUM_PROBLEMS];

    for problem in ProblemId::all() {
        let j = problem.index();
        if state.problem_status[j] != ProblemStatus::Active {
            continue;
        }
        if movement.problems_hold() {
            if let Some(current) = state.problem_choice[j] {
                pending[j] = Some(current);
                continue;
            }
        }

        let mut floor = COST_CEILING;
        for choice in ChoiceId::all() {
            let i = choice.index();
            if state.choice_status[i] != ChoiceStatus::Active {
                continue;
            }
            if !state.access.admits(problem, choice) {
                continue;
            }
            let staying = state.problem_choice[j].map_or(true, |held| held == choice);
            let mut trial = state.energy_required[i] - state.energy_applied[i];
            if !staying {
                trial += state.problem_energy[j];
            }
            if trial >= floor {
                continue;
            }
            floor = trial;
            pending[j] = Some(choice);
        }
    }

    state.problem_choice = pending;
}

/// Reattach every decision maker to its cheapest eligible active choice.
///
/// Switching away from a held choice is credited with the energy the maker
/// supplied in the prior period, scaled by that period's coefficient.
/// Makers left unassigned contribute this period's energy to the unused
/// total and count as idle.
fn assign_decision_makers(state: &mut ScenarioState, inputs: &RunInputs, period: Period) {
    let prior = period.prior();
    let mut pending: [Option<ChoiceId>; NUM_DECISION_MAKERS] = [None; NUM_DECISION_MAKERS];

    for maker in DecisionMakerId::all() {
        let k = maker.index();
        if inputs.movement.makers_hold() {
            if let Some(current) = state.maker_choice[k] {
                pending[k] = Some(current);
                continue;
            }
        }

        let mut floor = COST_CEILING;
        for choice in ChoiceId::all() {
            let i = choice.index();
            if state.choice_status[i] != ChoiceStatus::Active {
                continue;
            }
            if !state.structure.admits(choice, maker) {
                continue;
            }
            let staying = state.maker_choice[k].map_or(true, |held| held == choice);
            let mut trial = state.energy_required[i] - state.energy_applied[i];
            if !staying {
                trial -= state.energy.available(maker, prior)
                    * inputs.solution_coefficient[prior.index()];
            }
            if trial >= floor {
                continue;
            }
            floor = trial;
            pending[k] = Some(choice);
        }
    }

    for maker in DecisionMakerId::all() {
        let k = maker.index();
        state.maker_choice[k] = pending[k];
        if state.maker_choice[k].is_none() {
            state.unused_energy += state.energy.available(maker, period)
                * inputs.solution_coefficient[period.index()];
            state.idle_maker_periods += 1;
        }
    }
}

/// Recompute each non-inactive choice's requirement and applied energy.
///
/// Made choices are recomputed too; their problems are solved so the
/// requirement collapses to zero.
fn recompute_energy(state: &mut ScenarioState, inputs: &RunInputs, period: Period) {
    let coefficient = inputs.solution_coefficient[period.index()];
    for choice in ChoiceId::all() {
        let i = choice.index();
        if state.choice_status[i] == ChoiceStatus::Inactive {
            continue;
        }

        let mut required = 0.0;
        for problem in ProblemId::all() {
            let j = problem.index();
            if state.problem_status[j] == ProblemStatus::Active
                && state.problem_choice[j] == Some(choice)
            {
                required += state.problem_energy[j];
            }
        }

        let mut applied = 0.0;
        for maker in DecisionMakerId::all() {
            let k = maker.index();
            if state.structure.admits(choice, maker) && state.maker_choice[k] == Some(choice) {
                applied += coefficient * state.energy.available(maker, period);
            }
        }

        state.energy_required[i] = required;
        state.energy_applied[i] = applied;
    }
}

/// Make every active choice whose applied energy covers its requirement.
///
/// The excess accrues to the surplus total, attached problems become
/// solved, and under maker-holding movement conditions the choice's
/// decision makers are queued for release after the history snapshot.
fn resolve_choices(
    state: &mut ScenarioState,
    movement: MovementCondition,
) -> [bool; NUM_DECISION_MAKERS] {
    let mut released = [false; NUM_DECISION_MAKERS];

    for choice in ChoiceId::all() {
        let i = choice.index();
        if state.choice_status[i] != ChoiceStatus::Active {
            continue;
        }
        if state.energy_required[i] > state.energy_applied[i] {
            continue;
        }

        state.surplus_energy += state.energy_applied[i] - state.energy_required[i];
        state.choice_status[i] = ChoiceStatus::Made;
        for problem in ProblemId::all() {
            let j = problem.index();
            if state.problem_choice[j] == Some(choice) {
                state.problem_status[j] = ProblemStatus::Solved;
            }
        }
        if movement.makers_hold() {
            for maker in DecisionMakerId::all() {
                let k = maker.index();
                if state.maker_choice[k] == Some(choice) {
                    released[k] = true;
                }
            }
        }
    }

    released
}
