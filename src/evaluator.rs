use crate::state::Operation;

/// Fold one previous/current operand pair through the pending operation.
///
/// Returns the canonical `f64` display form of the result, or the empty
/// string when either operand does not parse to a number. The empty string
/// means "no displayable result"; it is not an error. Division by zero
/// follows IEEE-754 and yields "inf" / "-inf", both of which parse back
/// through `parse_operand` so a result can be chained into the next
/// operation.
pub fn evaluate(previous: &str, current: &str, operation: Operation) -> String {
    let prev = parse_operand(previous);
    let cur = parse_operand(current);
    if prev.is_nan() || cur.is_nan() {
        return String::new();
    }
    let computation = match operation {
        Operation::Add => prev + cur,
        Operation::Subtract => prev - cur,
        Operation::Multiply => prev * cur,
        Operation::Divide => prev / cur,
    };
    computation.to_string()
}

/// Locale-invariant float parse that honors a leading numeric prefix, so
/// "12x" parses as 12. Returns NaN when no prefix parses at all.
pub fn parse_operand(text: &str) -> f64 {
    let text = text.trim();
    if let Ok(value) = text.parse::<f64>() {
        return value;
    }
    // Longest prefix that still parses, on char boundaries.
    let boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    for &end in boundaries.iter().skip(1).rev() {
        if let Ok(value) = text[..end].parse::<f64>() {
            return value;
        }
    }
    f64::NAN
}
