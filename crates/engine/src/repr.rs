//! Textual form of averaged values.
//!
//! Values are written with the fewest digits that still round-trip, the
//! way interactive numeric tooling prints floats: `3.0` rather than `3`,
//! positional between `1e-4` and `1e16`, scientific (`1e-05`, `2.5e+16`)
//! outside that window.

/// Smallest decimal exponent rendered positionally.
const MIN_POSITIONAL_EXP: i32 = -4;
/// First decimal exponent rendered in scientific form.
const MAX_POSITIONAL_EXP: i32 = 16;

#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `-1.2345e3`.
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let negative = mantissa.starts_with('-');
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    let body = if (MIN_POSITIONAL_EXP..MAX_POSITIONAL_EXP).contains(&exponent) {
        positional(&digits, exponent)
    } else {
        exponential(&digits, exponent)
    };

    if negative { format!("-{body}") } else { body }
}

fn positional(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat(exponent.unsigned_abs() as usize - 1);
        return format!("0.{zeros}{digits}");
    }

    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        let zeros = "0".repeat(int_len - digits.len());
        format!("{digits}{zeros}.0")
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        format!("{int_part}.{frac_part}")
    }
}

fn exponential(digits: &str, exponent: i32) -> String {
    let (lead, rest) = digits.split_at(1);
    let sign = if exponent < 0 { '-' } else { '+' };
    let magnitude = exponent.unsigned_abs();
    if rest.is_empty() {
        format!("{lead}e{sign}{magnitude:02}")
    } else {
        format!("{lead}.{rest}e{sign}{magnitude:02}")
    }
}
