/// Round a USD amount to whole cents.
///
/// Pricing math stays in plain f64; rounding is applied only at display or
/// formatting boundaries.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Format a USD amount for human-facing copy, e.g. `$1980.00`.
pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", round_to_cents(amount))
}
