//! Utility helpers shared across the frontend.

/// Remove the first `$` from a displayed price (`"$79.99"` -> `"79.99"`).
pub fn strip_currency(text: &str) -> String {
    text.replacen('$', "", 1)
}

/// Parse the leading decimal number of a price string, the way browsers
/// read `"79.99"` or `" 79.99 USD"`.  Returns `None` when no number leads
/// the string.
pub fn parse_price(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in trimmed.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    trimmed[..end].trim_end_matches('.').parse().ok()
}
