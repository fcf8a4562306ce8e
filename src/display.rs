use crate::state::CalculatorState;

/// Thousands-group an operand for display: the integer part gets comma
/// separators, the fractional part passes through verbatim so trailing
/// zeros the user typed stay visible.
pub fn format_operand(operand: Option<&str>, group_thousands: bool) -> Option<String> {
    let operand = operand?;
    if !group_thousands {
        return Some(operand.to_string());
    }
    let (integer, fraction) = match operand.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (operand, None),
    };
    let grouped = group_integer(integer);
    Some(match fraction {
        Some(fraction) => format!("{}.{}", grouped, fraction),
        None => grouped,
    })
}

// Evaluation results can be "inf", "NaN" or exponent forms; anything that is
// not a plain digit string passes through ungrouped.
fn group_integer(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return integer.to_string();
    }
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push_str(sign);
    let lead = digits.len() % 3;
    if lead > 0 {
        grouped.push_str(&digits[..lead]);
    }
    for (i, chunk) in digits.as_bytes()[lead..].chunks(3).enumerate() {
        if lead > 0 || i > 0 {
            grouped.push(',');
        }
        grouped.push_str(std::str::from_utf8(chunk).unwrap_or(""));
    }
    grouped
}

/// The upper display line: the pending operand and operator, or empty when
/// nothing is pending.
pub fn previous_line(state: &CalculatorState, group_thousands: bool) -> String {
    match (
        format_operand(state.previous_operand.as_deref(), group_thousands),
        state.operation,
    ) {
        (Some(operand), Some(op)) => format!("{} {}", operand, op.symbol()),
        (Some(operand), None) => operand,
        (None, Some(op)) => op.symbol().to_string(),
        (None, None) => String::new(),
    }
}

/// The lower display line: the operand being typed or the last result.
pub fn current_line(state: &CalculatorState, group_thousands: bool) -> String {
    format_operand(state.current_operand.as_deref(), group_thousands).unwrap_or_default()
}
