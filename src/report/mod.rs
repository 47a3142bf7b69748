//! Legacy-format text reporting
//!
//! Renders the classic column-aligned report: one header naming the
//! movement condition, one summary line per scenario, and optionally the
//! three per-period history tables.

use crate::core::types::{MovementCondition, Period};
use crate::model::history::ScenarioHistory;
use crate::model::sweep::{ScenarioRun, ScenarioSummary};

pub fn render_header(movement: MovementCondition) -> String {
    format!("DEC.MAKER MOVEMENT CONDITION (NA) IS {}", movement.0)
}

/// One summary line: the four coordinates and the ten statistics.
pub fn render_summary(summary: &ScenarioSummary) -> String {
    let coords = &summary.coords;
    let stats = &summary.stats;
    format!(
        "LOAD={} PR.ACC.={} DEC.STR.={} EN.DIST.={} STATS 1-10 \
         {:5}{:5}{:5}{:5}{:5}{:5}{:5}{:5} {:6.2}{:6.2}",
        coords.load.code(),
        coords.access.code(),
        coords.structure.code(),
        coords.energy.code(),
        stats.choices_active_at_end,
        stats.active_choice_periods,
        stats.maker_moves,
        stats.problems_unresolved,
        stats.problem_moves,
        stats.unattached_problem_periods,
        stats.attached_problem_periods,
        stats.idle_maker_periods,
        stats.unused_energy,
        stats.surplus_energy,
    )
}

/// The three history tables for one scenario, one line per string row.
pub fn render_history(history: &ScenarioHistory) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<46}{}\n",
        " CHOICE ACTIVATION HISTORY", "DEC.MAKER ACTIVITY HISTORY"
    ));
    out.push_str(&format!(
        "{:<46}{}\n",
        " 0=INACTIVE, 1=ACTIVE, 2=MADE", "0=INACTIVE, X=WORKING ON CHOICE X"
    ));
    for period in Period::all() {
        let t = period.index();
        let mut left = String::new();
        for status in &history.choices[t] {
            left.push_str(&format!("{:2}", status.code()));
        }
        let mut right = String::new();
        for assignment in &history.makers[t] {
            right.push_str(&format!("{:2}", assignment.map_or(0, |c| c.0 as i32)));
        }
        out.push_str(&format!(
            "{:2} {}    {:2} {}\n",
            period.get(),
            left,
            period.get(),
            right
        ));
    }

    out.push_str(" PROBLEM HISTORY: -1=NOT ENTERED, 0=UNATTACHED, X=ATTACHED, 1000=SOLVED\n");
    for period in Period::all() {
        let t = period.index();
        let mut row = String::new();
        for cell in &history.problems[t] {
            row.push_str(&format!("{:3}", cell.code()));
        }
        out.push_str(&format!("{:2} {}\n", period.get(), row));
    }
    out
}

/// Render the whole sweep report as it is printed.
pub fn render_sweep(
    runs: &[ScenarioRun],
    movement: MovementCondition,
    show_history: bool,
) -> String {
    let mut out = String::new();
    out.push_str(&render_header(movement));
    out.push('\n');
    for run in runs {
        out.push_str(&render_summary(&run.summary));
        out.push('\n');
        if show_history {
            out.push_str(&render_history(&run.history));
        }
    }
    out
}
