//! Input acquisition for the simulation batch
//!
//! The engine consumes a flat ordered sequence of at least 52 numeric
//! values: 10 choice entry periods, 20 per-period solution coefficients,
//! 20 problem entry periods, then the movement condition and the report
//! verbosity selector. Two encodings of that sequence are accepted: a
//! free-form numeric token stream, and the legacy fixed-width card layout
//! which is tried when the free-form scan comes up short.

use crate::core::error::{ModelError, Result};
use crate::core::types::{MovementCondition, NUM_CHOICES, NUM_PERIODS, NUM_PROBLEMS};

/// Values consumed by the input partition (surplus values are ignored)
pub const REQUIRED_VALUES: usize = NUM_CHOICES + NUM_PERIODS + NUM_PROBLEMS + 2;

/// Static per-run inputs, shared by all 81 sweep scenarios
#[derive(Debug, Clone, PartialEq)]
pub struct RunInputs {
    /// Entry period of each choice opportunity (legacy ICH)
    pub choice_entry: [i64; NUM_CHOICES],
    /// Per-period solution coefficient (legacy XSC)
    pub solution_coefficient: [f64; NUM_PERIODS],
    /// Entry period of each problem (legacy JET)
    pub problem_entry: [i64; NUM_PROBLEMS],
    /// Decision-maker movement condition (legacy NA)
    pub movement: MovementCondition,
    /// Report verbosity selector (legacy IO)
    pub verbosity: i64,
}

impl RunInputs {
    /// Whether the per-period history tables were requested
    pub fn history_requested(&self) -> bool {
        self.verbosity == 2
    }

    /// Partition an ordered value sequence into run inputs.
    ///
    /// Fails fast when fewer than 52 values are present; the whole sweep is
    /// aborted rather than producing partial output.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        if values.len() < REQUIRED_VALUES {
            return Err(ModelError::InsufficientInput {
                needed: REQUIRED_VALUES,
                got: values.len(),
            });
        }

        let mut choice_entry = [0i64; NUM_CHOICES];
        for (slot, value) in choice_entry.iter_mut().zip(values) {
            *slot = *value as i64;
        }

        let mut solution_coefficient = [0.0f64; NUM_PERIODS];
        for (slot, value) in solution_coefficient
            .iter_mut()
            .zip(&values[NUM_CHOICES..])
        {
            *slot = *value;
        }

        let mut problem_entry = [0i64; NUM_PROBLEMS];
        for (slot, value) in problem_entry
            .iter_mut()
            .zip(&values[NUM_CHOICES + NUM_PERIODS..])
        {
            *slot = *value as i64;
        }

        let tail = NUM_CHOICES + NUM_PERIODS + NUM_PROBLEMS;
        let movement = MovementCondition(values[tail] as i64);
        let verbosity = values[tail + 1] as i64;

        Ok(Self {
            choice_entry,
            solution_coefficient,
            problem_entry,
            movement,
            verbosity,
        })
    }
}

/// Scan free-form text for signed decimal tokens.
///
/// A token is an optional sign, digits, and an optional fraction; anything
/// else is a separator. Scientific notation is not recognized.
pub fn scan_numeric_tokens(text: &str) -> Vec<f64> {
    let bytes = text.as_bytes();
    let mut values = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let start = i;
        let mut j = i;
        if bytes[j] == b'+' || bytes[j] == b'-' {
            j += 1;
        }
        let digits_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j == digits_start {
            i = start + 1;
            continue;
        }
        if j + 1 < bytes.len() && bytes[j] == b'.' && bytes[j + 1].is_ascii_digit() {
            j += 1;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
        }
        if let Ok(value) = text[start..j].parse::<f64>() {
            values.push(value);
        }
        i = j;
    }
    values
}

/// Column cursor over the legacy card text.
///
/// Line breaks are transparent: a field may straddle a card boundary, so
/// CR/LF are stripped before slicing. Blank or malformed fields decode to
/// zero (lenient legacy-compatibility policy).
struct FixedWidthReader {
    chars: Vec<char>,
    cursor: usize,
}

impl FixedWidthReader {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect(),
            cursor: 0,
        }
    }

    fn field(&mut self, width: usize) -> String {
        let end = (self.cursor + width).min(self.chars.len());
        let field: String = self.chars[self.cursor..end].iter().collect();
        self.cursor = end;
        field
    }

    fn integer(&mut self, width: usize) -> i64 {
        self.field(width).trim().parse().unwrap_or(0)
    }

    fn fixed_point(&mut self, width: usize) -> f64 {
        self.field(width).trim().parse().unwrap_or(0.0)
    }

    fn skip(&mut self, width: usize) {
        let _ = self.field(width);
    }
}

/// Decode the legacy fixed-width card layout into the flat value sequence.
///
/// Field widths: 3+1 for each choice entry, 4 for each solution
/// coefficient (two-decimal fixed point), 3+1 for each problem entry,
/// 1+1 for the movement condition and the verbosity selector.
pub fn decode_fixed_width(text: &str) -> Vec<f64> {
    let mut reader = FixedWidthReader::new(text);
    let mut values = Vec::with_capacity(REQUIRED_VALUES);
    for _ in 0..NUM_CHOICES {
        values.push(reader.integer(3) as f64);
        reader.skip(1);
    }
    for _ in 0..NUM_PERIODS {
        values.push(reader.fixed_point(4));
    }
    for _ in 0..NUM_PROBLEMS {
        values.push(reader.integer(3) as f64);
        reader.skip(1);
    }
    for _ in 0..2 {
        values.push(reader.integer(1) as f64);
        reader.skip(1);
    }
    values
}

/// Parse input text in either encoding into run inputs.
pub fn parse_input(text: &str) -> Result<RunInputs> {
    let mut values = scan_numeric_tokens(text);
    if values.len() < REQUIRED_VALUES {
        values = decode_fixed_width(text);
    }
    RunInputs::from_values(&values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free_form_sample() -> String {
        let mut text = String::new();
        for _ in 0..NUM_CHOICES {
            text.push_str("1 ");
        }
        text.push('\n');
        for _ in 0..NUM_PERIODS {
            text.push_str("1.00 ");
        }
        text.push('\n');
        for _ in 0..NUM_PROBLEMS {
            text.push_str("1 ");
        }
        text.push_str("\n4 2\n");
        text
    }

    #[test]
    fn test_free_form_parse() {
        let inputs = parse_input(&free_form_sample()).unwrap();
        assert_eq!(inputs.choice_entry, [1; NUM_CHOICES]);
        assert_eq!(inputs.solution_coefficient, [1.0; NUM_PERIODS]);
        assert_eq!(inputs.problem_entry, [1; NUM_PROBLEMS]);
        assert_eq!(inputs.movement, MovementCondition(4));
        assert_eq!(inputs.verbosity, 2);
        assert!(inputs.history_requested());
    }

    #[test]
    fn test_token_scan_signs_and_fractions() {
        let values = scan_numeric_tokens("a-3.5b+2 7. .5 --4");
        assert_eq!(values, vec![-3.5, 2.0, 7.0, 5.0, -4.0]);
    }

    #[test]
    fn test_insufficient_values_fails_fast() {
        let err = parse_input("1 2 3").unwrap_err();
        match err {
            ModelError::InsufficientInput { needed, got } => {
                assert_eq!(needed, REQUIRED_VALUES);
                assert_eq!(got, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_surplus_values_ignored() {
        let mut text = free_form_sample();
        text.push_str("99 98 97\n");
        let inputs = parse_input(&text).unwrap();
        assert_eq!(inputs.verbosity, 2);
    }

    fn fixed_width_sample() -> String {
        let mut text = String::new();
        for _ in 0..NUM_CHOICES {
            text.push_str("  1 ");
        }
        text.push('\n');
        for i in 0..NUM_PERIODS {
            // Packed two-decimal fields, no separators
            text.push_str(if i % 2 == 0 { "0.50" } else { "1.25" });
        }
        text.push('\n');
        for _ in 0..NUM_PROBLEMS {
            text.push_str("  2 ");
        }
        text.push_str("\n3 2 \n");
        text
    }

    #[test]
    fn test_fixed_width_decode() {
        let values = decode_fixed_width(&fixed_width_sample());
        assert_eq!(values.len(), REQUIRED_VALUES);
        let inputs = RunInputs::from_values(&values).unwrap();
        assert_eq!(inputs.choice_entry, [1; NUM_CHOICES]);
        assert_eq!(inputs.solution_coefficient[0], 0.50);
        assert_eq!(inputs.solution_coefficient[1], 1.25);
        assert_eq!(inputs.problem_entry, [2; NUM_PROBLEMS]);
        assert_eq!(inputs.movement, MovementCondition(3));
        assert_eq!(inputs.verbosity, 2);
    }

    #[test]
    fn test_fixed_width_blank_fields_decode_to_zero() {
        let mut text = String::new();
        for _ in 0..NUM_CHOICES {
            text.push_str("    ");
        }
        for _ in 0..NUM_PERIODS {
            text.push_str("    ");
        }
        for _ in 0..NUM_PROBLEMS {
            text.push_str("  x ");
        }
        text.push_str("1 2 ");
        let values = decode_fixed_width(&text);
        let inputs = RunInputs::from_values(&values).unwrap();
        assert_eq!(inputs.choice_entry, [0; NUM_CHOICES]);
        assert_eq!(inputs.solution_coefficient, [0.0; NUM_PERIODS]);
        assert_eq!(inputs.problem_entry, [0; NUM_PROBLEMS]);
        assert_eq!(inputs.movement, MovementCondition(1));
    }

    #[test]
    fn test_fields_straddle_line_breaks() {
        // The width-3 field "  7" split across a card boundary
        let mut text = String::from(" ");
        text.push('\n');
        text.push_str(" 7 ");
        for _ in 0..NUM_CHOICES - 1 {
            text.push_str("  1 ");
        }
        let values = decode_fixed_width(&text);
        assert_eq!(values[0], 7.0);
    }
}
