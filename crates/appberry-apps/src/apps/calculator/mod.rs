//! Calculator Application
//!
//! Digits and operators are appended to an expression string. `=` evaluates
//! it with [`evaluate`] and replaces the expression with the result; an
//! expression that cannot be evaluated clears the display. `C` clears.

mod expr;

pub use expr::{evaluate, ExprError};

use serde::Serialize;
use tracing::debug;

/// Button pad, row by row
pub const CALCULATOR_BUTTONS: [[&str; 4]; 4] = [
    ["7", "8", "9", "+"],
    ["4", "5", "6", "×"],
    ["1", "2", "3", "-"],
    ["0", "C", "=", "÷"],
];

/// Calculator application state
#[derive(Clone, Debug, Default, Serialize)]
pub struct CalculatorApp {
    /// Expression as typed, or the last result
    expression: String,
}

impl CalculatorApp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text shown in the display
    pub fn display(&self) -> &str {
        &self.expression
    }

    /// Handle a press of the button labelled `label`. Unknown labels are ignored.
    pub fn press(&mut self, label: &str) {
        match label {
            "C" => self.expression.clear(),
            "=" => self.handle_equals(),
            "+" | "-" | "×" | "÷" => self.expression.push_str(label),
            digit if digit.len() == 1 && digit.chars().all(|c| c.is_ascii_digit()) => {
                self.expression.push_str(digit)
            }
            _ => {}
        }
    }

    fn handle_equals(&mut self) {
        match evaluate(&self.expression) {
            Ok(result) => self.expression = format_result(result),
            Err(err) => {
                debug!(expression = %self.expression, error = %err, "calculator: evaluation failed");
                self.expression.clear();
            }
        }
    }
}

/// Integers print without a decimal point; everything else keeps up to
/// eight fractional digits with trailing zeros trimmed.
fn format_result(result: f64) -> String {
    if result.fract() == 0.0 && result.abs() < 1e15 {
        format!("{}", result as i64)
    } else {
        let s = format!("{:.8}", result);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(calc: &mut CalculatorApp, labels: &[&str]) {
        for label in labels {
            calc.press(label);
        }
    }

    #[test]
    fn test_builds_expression() {
        let mut calc = CalculatorApp::new();
        press_all(&mut calc, &["1", "2", "+", "3"]);
        assert_eq!(calc.display(), "12+3");
    }

    #[test]
    fn test_equals_uses_precedence() {
        let mut calc = CalculatorApp::new();
        press_all(&mut calc, &["7", "+", "8", "×", "2", "="]);
        assert_eq!(calc.display(), "23");
    }

    #[test]
    fn test_result_can_be_extended() {
        let mut calc = CalculatorApp::new();
        press_all(&mut calc, &["1", "-", "4", "=", "+", "1", "="]);
        assert_eq!(calc.display(), "-2");
    }

    #[test]
    fn test_fractional_result() {
        let mut calc = CalculatorApp::new();
        press_all(&mut calc, &["1", "÷", "3", "="]);
        assert_eq!(calc.display(), "0.33333333");

        press_all(&mut calc, &["C", "1", "÷", "4", "="]);
        assert_eq!(calc.display(), "0.25");
    }

    #[test]
    fn test_invalid_expression_clears() {
        let mut calc = CalculatorApp::new();
        press_all(&mut calc, &["5", "÷", "0", "="]);
        assert_eq!(calc.display(), "");

        press_all(&mut calc, &["5", "+", "="]);
        assert_eq!(calc.display(), "");
    }

    #[test]
    fn test_clear_and_unknown_labels() {
        let mut calc = CalculatorApp::new();
        press_all(&mut calc, &["9", "sqrt", "(", "C"]);
        assert_eq!(calc.display(), "");
    }

    #[test]
    fn test_every_pad_button_is_accepted() {
        let mut calc = CalculatorApp::new();
        for label in CALCULATOR_BUTTONS.iter().flatten() {
            calc.press(label);
        }
        // "C" clears, "=" on an empty expression leaves it empty, then "÷".
        assert_eq!(calc.display(), "÷");
    }

    #[test]
    fn test_many_minus_presses_evaluate() {
        let mut calc = CalculatorApp::new();
        for _ in 0..20_000 {
            calc.press("-");
        }
        press_all(&mut calc, &["1", "="]);
        assert_eq!(calc.display(), "1");
    }
}
