/// Extract the leading amount from a budget string
///
/// Currency symbols, unit words and range delimiters are skipped; the first
/// run of digits wins. Thousands separators inside that run are ignored.
///
/// # Examples
/// * `"$1200-1600"` -> `Some(1200)`
/// * `"25000 PKR"` -> `Some(25000)`
/// * `"$1,600+"` -> `Some(1600)`
/// * `"Flexible"` -> `None`
pub fn parse_leading_amount(budget: &str) -> Option<u64> {
    let start = budget.find(|c: char| c.is_ascii_digit())?;
    let rest = &budget[start..];

    let mut digits = String::new();
    let mut chars = rest.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if c == ',' && chars.peek().is_some_and(|n| n.is_ascii_digit()) {
            continue;
        } else {
            break;
        }
    }

    digits.parse().ok()
}

/// Absolute difference between two budgets, `None` when either side has no amount
#[inline]
pub fn budget_gap(a: &str, b: &str) -> Option<u64> {
    let a = parse_leading_amount(a)?;
    let b = parse_leading_amount(b)?;
    Some(a.abs_diff(b))
}
