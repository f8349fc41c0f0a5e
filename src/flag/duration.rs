//! Duration flag syntax: a sequence of `<number><unit>` terms such as `1h30m` or `1.5s`.

use crate::error::ParseValueError;
use std::time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const NANOS_PER_MIN: u128 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MIN;

/// Fraction digits beyond this cannot change a nanosecond count
const MAX_FRACTION_DIGITS: usize = 18;

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(NANOS_PER_MIN),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

fn invalid(raw: &str, reason: &str) -> ParseValueError {
    ParseValueError::new("duration", format!("\"{}\": {}", raw, reason))
}

/// Parse a duration such as `300ms`, `2h` or `1h15m30.5s`.
///
/// A bare `0` is accepted. Negative durations are rejected.
pub fn parse_duration(raw: &str) -> Result<Duration, ParseValueError> {
    let mut rest = raw;
    let mut negative = false;
    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid(raw, "empty duration"));
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let int_len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        let (int_part, after_int) = rest.split_at(int_len);

        let (frac_part, after_number) = match after_int.strip_prefix('.') {
            Some(frac) => {
                let frac_len = frac.find(|c: char| !c.is_ascii_digit()).unwrap_or(frac.len());
                frac.split_at(frac_len)
            }
            None => ("", after_int),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid(raw, "expected a number"));
        }

        let unit_len = after_number
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_number.len());
        let (unit, remainder) = after_number.split_at(unit_len);
        if unit.is_empty() {
            return Err(invalid(raw, "missing unit"));
        }
        let scale = unit_nanos(unit).ok_or_else(|| invalid(raw, &format!("unknown unit \"{}\"", unit)))?;

        let whole: u128 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| invalid(raw, "value out of range"))?
        };
        let mut term = whole
            .checked_mul(scale)
            .ok_or_else(|| invalid(raw, "value out of range"))?;

        let frac_digits = &frac_part[..frac_part.len().min(MAX_FRACTION_DIGITS)];
        if !frac_digits.is_empty() {
            let numerator: u128 = frac_digits.parse().map_err(|_| invalid(raw, "bad fraction"))?;
            let denominator = 10u128.pow(frac_digits.len() as u32);
            term = term
                .checked_add(numerator * scale / denominator)
                .ok_or_else(|| invalid(raw, "value out of range"))?;
        }

        total = total
            .checked_add(term)
            .ok_or_else(|| invalid(raw, "value out of range"))?;
        rest = remainder;
    }

    if negative && total != 0 {
        return Err(invalid(raw, "negative durations are not supported"));
    }

    let secs = u64::try_from(total / NANOS_PER_SEC).map_err(|_| invalid(raw, "value out of range"))?;
    Ok(Duration::new(secs, (total % NANOS_PER_SEC) as u32))
}

/// Render `value` with `unit` as a whole number plus a trimmed decimal fraction.
fn scaled(value: u128, unit: u128) -> String {
    let whole = value / unit;
    let frac = value % unit;
    if frac == 0 {
        return whole.to_string();
    }
    let width = unit.to_string().len() - 1;
    let digits = format!("{:0width$}", frac, width = width);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}

/// Format a duration the way it is written on the command line, e.g. `1h0m0s`.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_nanos();
    if total == 0 {
        return "0s".to_string();
    }
    if total < NANOS_PER_MICRO {
        return format!("{}ns", total);
    }
    if total < NANOS_PER_MILLI {
        return format!("{}µs", scaled(total, NANOS_PER_MICRO));
    }
    if total < NANOS_PER_SEC {
        return format!("{}ms", scaled(total, NANOS_PER_MILLI));
    }

    let hours = total / NANOS_PER_HOUR;
    let minutes = (total % NANOS_PER_HOUR) / NANOS_PER_MIN;
    let seconds = scaled(total % NANOS_PER_MIN, NANOS_PER_SEC);
    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
