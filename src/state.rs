use crate::evaluator;

/// The four keypad operations. Buttons carry the display symbol, so
/// construction goes through `from_symbol` and display through `symbol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operation::Add),
            "-" => Some(Operation::Subtract),
            "*" => Some(Operation::Multiply),
            "÷" => Some(Operation::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "÷",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddDigit(char),
    ChooseOperation(Operation),
    Clear,
    DeleteDigit,
    Evaluate,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculatorState {
    pub current_operand: Option<String>,
    pub previous_operand: Option<String>,
    pub operation: Option<Operation>,
    pub overwrite: bool,
}

impl CalculatorState {
    /// Apply one keypad action and produce the next state. Incomplete or
    /// malformed transitions return a state equal to the input, never an
    /// error.
    pub fn apply(&self, action: Action) -> CalculatorState {
        match action {
            Action::AddDigit(digit) => self.add_digit(digit),
            Action::ChooseOperation(op) => self.choose_operation(op),
            Action::Clear => CalculatorState::default(),
            Action::DeleteDigit => self.delete_digit(),
            Action::Evaluate => self.evaluate(),
        }
    }

    fn add_digit(&self, digit: char) -> CalculatorState {
        // A finished calculation is replaced by the next digit, not extended.
        if self.overwrite {
            return CalculatorState {
                current_operand: Some(digit.to_string()),
                overwrite: false,
                ..self.clone()
            };
        }
        // No leading zeros.
        if digit == '0' && self.current_operand.as_deref() == Some("0") {
            return self.clone();
        }
        // At most one decimal point.
        if digit == '.'
            && self
                .current_operand
                .as_deref()
                .is_some_and(|c| c.contains('.'))
        {
            return self.clone();
        }
        let mut operand = self.current_operand.clone().unwrap_or_default();
        operand.push(digit);
        CalculatorState {
            current_operand: Some(operand),
            ..self.clone()
        }
    }

    fn choose_operation(&self, op: Operation) -> CalculatorState {
        // Nothing typed yet, nothing to attach an operator to.
        if self.current_operand.is_none() && self.previous_operand.is_none() {
            return self.clone();
        }
        // Operator pressed twice in a row: the user changed their mind.
        if self.current_operand.is_none() {
            return CalculatorState {
                operation: Some(op),
                ..self.clone()
            };
        }
        // First operator: shift the typed operand up.
        if self.previous_operand.is_none() {
            return CalculatorState {
                operation: Some(op),
                previous_operand: self.current_operand.clone(),
                current_operand: None,
                ..self.clone()
            };
        }
        // A full pair is pending: fold it left-to-right before taking the
        // new operator. No precedence.
        CalculatorState {
            previous_operand: Some(evaluator::evaluate(
                self.previous_operand.as_deref().unwrap_or(""),
                self.current_operand.as_deref().unwrap_or(""),
                self.operation.unwrap_or(op),
            )),
            operation: Some(op),
            current_operand: None,
            ..self.clone()
        }
    }

    fn delete_digit(&self) -> CalculatorState {
        // The first delete after a result discards it wholesale.
        if self.overwrite {
            return CalculatorState {
                overwrite: false,
                current_operand: None,
                ..self.clone()
            };
        }
        match self.current_operand.as_deref() {
            None => self.clone(),
            // Deleting the last character goes back to "nothing typed",
            // never to an empty string.
            Some(operand) if operand.chars().count() <= 1 => CalculatorState {
                current_operand: None,
                ..self.clone()
            },
            Some(operand) => {
                let mut trimmed = operand.to_string();
                trimmed.pop();
                CalculatorState {
                    current_operand: Some(trimmed),
                    ..self.clone()
                }
            }
        }
    }

    fn evaluate(&self) -> CalculatorState {
        let (Some(op), Some(previous), Some(current)) = (
            self.operation,
            self.previous_operand.as_deref(),
            self.current_operand.as_deref(),
        ) else {
            return self.clone();
        };
        CalculatorState {
            overwrite: true,
            previous_operand: None,
            operation: None,
            current_operand: Some(evaluator::evaluate(previous, current, op)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(actions: &[Action]) -> CalculatorState {
        actions
            .iter()
            .fold(CalculatorState::default(), |state, action| {
                state.apply(action.clone())
            })
    }

    #[test]
    fn test_digit_entry_appends() {
        let state = press_all(&[Action::AddDigit('1'), Action::AddDigit('2')]);
        assert_eq!(state.current_operand.as_deref(), Some("12"));
        assert!(!state.overwrite);
    }

    #[test]
    fn test_overwrite_replaces_result() {
        let state = CalculatorState {
            current_operand: Some("8".to_string()),
            overwrite: true,
            ..Default::default()
        };
        let next = state.apply(Action::AddDigit('5'));
        assert_eq!(next.current_operand.as_deref(), Some("5"));
        assert!(!next.overwrite);
    }

    #[test]
    fn test_no_leading_zeros() {
        let state = press_all(&[Action::AddDigit('0'), Action::AddDigit('0')]);
        assert_eq!(state.current_operand.as_deref(), Some("0"));
    }

    #[test]
    fn test_single_decimal_point() {
        let state = press_all(&[
            Action::AddDigit('1'),
            Action::AddDigit('.'),
            Action::AddDigit('5'),
            Action::AddDigit('.'),
        ]);
        assert_eq!(state.current_operand.as_deref(), Some("1.5"));
    }

    #[test]
    fn test_operation_on_empty_state_is_noop() {
        let state = CalculatorState::default();
        let next = state.apply(Action::ChooseOperation(Operation::Add));
        assert_eq!(next, state);
    }

    #[test]
    fn test_operation_shifts_operand() {
        let state = press_all(&[
            Action::AddDigit('5'),
            Action::ChooseOperation(Operation::Add),
        ]);
        assert_eq!(state.previous_operand.as_deref(), Some("5"));
        assert_eq!(state.current_operand, None);
        assert_eq!(state.operation, Some(Operation::Add));
    }

    #[test]
    fn test_operator_change_after_operand_folds() {
        // 7 + 2, then the operator is changed to '-': the pair folds first.
        let state = press_all(&[
            Action::AddDigit('7'),
            Action::ChooseOperation(Operation::Add),
            Action::AddDigit('2'),
            Action::ChooseOperation(Operation::Subtract),
        ]);
        assert_eq!(state.previous_operand.as_deref(), Some("9"));
        assert_eq!(state.current_operand, None);
        assert_eq!(state.operation, Some(Operation::Subtract));
    }

    #[test]
    fn test_retarget_pending_operator() {
        let state = press_all(&[
            Action::AddDigit('5'),
            Action::ChooseOperation(Operation::Add),
            Action::ChooseOperation(Operation::Multiply),
        ]);
        assert_eq!(state.previous_operand.as_deref(), Some("5"));
        assert_eq!(state.operation, Some(Operation::Multiply));
    }

    #[test]
    fn test_evaluate_full_pair() {
        let state = press_all(&[
            Action::AddDigit('5'),
            Action::ChooseOperation(Operation::Add),
            Action::AddDigit('3'),
            Action::Evaluate,
        ]);
        assert_eq!(
            state,
            CalculatorState {
                current_operand: Some("8".to_string()),
                previous_operand: None,
                operation: None,
                overwrite: true,
            }
        );
    }

    #[test]
    fn test_evaluate_incomplete_is_noop() {
        let state = press_all(&[Action::AddDigit('5'), Action::Evaluate]);
        assert_eq!(state.current_operand.as_deref(), Some("5"));
        assert!(!state.overwrite);
    }

    #[test]
    fn test_second_evaluate_is_noop() {
        let state = press_all(&[
            Action::AddDigit('5'),
            Action::ChooseOperation(Operation::Add),
            Action::AddDigit('3'),
            Action::Evaluate,
        ]);
        assert_eq!(state.apply(Action::Evaluate), state);
    }

    #[test]
    fn test_division_by_zero_shows_infinity() {
        let state = press_all(&[
            Action::AddDigit('1'),
            Action::AddDigit('0'),
            Action::ChooseOperation(Operation::Divide),
            Action::AddDigit('0'),
            Action::Evaluate,
        ]);
        assert_eq!(state.current_operand.as_deref(), Some("inf"));
    }

    #[test]
    fn test_clear_resets_everything() {
        let state = press_all(&[
            Action::AddDigit('5'),
            Action::ChooseOperation(Operation::Add),
            Action::AddDigit('3'),
            Action::Clear,
        ]);
        assert_eq!(state, CalculatorState::default());
    }

    #[test]
    fn test_delete_trims_last_digit() {
        let state = press_all(&[
            Action::AddDigit('1'),
            Action::AddDigit('2'),
            Action::DeleteDigit,
        ]);
        assert_eq!(state.current_operand.as_deref(), Some("1"));
    }

    #[test]
    fn test_delete_last_digit_clears_operand() {
        let state = press_all(&[Action::AddDigit('1'), Action::DeleteDigit]);
        assert_eq!(state.current_operand, None);
    }

    #[test]
    fn test_delete_on_empty_is_noop() {
        let state = CalculatorState::default();
        assert_eq!(state.apply(Action::DeleteDigit), state);
    }

    #[test]
    fn test_delete_after_result_discards_it() {
        let state = press_all(&[
            Action::AddDigit('6'),
            Action::ChooseOperation(Operation::Multiply),
            Action::AddDigit('7'),
            Action::Evaluate,
            Action::DeleteDigit,
        ]);
        assert_eq!(state.current_operand, None);
        assert!(!state.overwrite);
    }

    #[test]
    fn test_chained_operations_fold_left_to_right() {
        // 2 + 3 * 4 = 20, not 14: no precedence.
        let state = press_all(&[
            Action::AddDigit('2'),
            Action::ChooseOperation(Operation::Add),
            Action::AddDigit('3'),
            Action::ChooseOperation(Operation::Multiply),
            Action::AddDigit('4'),
            Action::Evaluate,
        ]);
        assert_eq!(state.current_operand.as_deref(), Some("20"));
    }

    #[test]
    fn test_operation_symbols_round_trip() {
        for symbol in ["+", "-", "*", "÷"] {
            let op = Operation::from_symbol(symbol).unwrap();
            assert_eq!(op.symbol(), symbol);
        }
        assert_eq!(Operation::from_symbol("%"), None);
    }
}
