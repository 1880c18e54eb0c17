//! Display formatting shared by the API consumers and the CLI report.

/// Formats a raw numeric string as Argentine pesos: `$ 1.234,56`
/// (thousands separated by `.`, two decimals after `,`).
///
/// Input that does not parse as a finite number is returned unchanged, so
/// whatever the sheet contained still shows up in the dashboard.
#[must_use]
pub fn format_currency(raw: &str) -> String {
    let Ok(value) = raw.trim().parse::<f64>() else {
        return raw.to_string();
    };
    if !value.is_finite() {
        return raw.to_string();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}$ {},{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Inserts `.` thousands separators into a non-negative integer.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
