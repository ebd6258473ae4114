//! Number formatting for axis labels and SVG attributes

/// Group the integer digits of `value` by thousands, keeping `decimals` places
///
/// `format_grouped(18000.0, 0)` gives `18,000`.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 && fixed.chars().any(|c| c != '0' && c != '.') {
        grouped.push('-');
    }
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// One decimal place, rounding exact ties upward like JavaScript's `toFixed(1)`
///
/// A tie at one decimal is only representable as a multiple of 0.25 with an
/// odd count of quarters (`0.25`, `0.75`, ...); everything else is unambiguous.
pub fn format_one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return format!("{:.1}", value + 0.05);
    }
    format!("{:.1}", value)
}

/// Compact coordinate for SVG output: at most three decimals, no trailing zeros
pub fn format_coord(value: f64) -> String {
    let mut s = format!("{:.3}", value);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}
