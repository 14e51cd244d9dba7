use std::time::Duration;

use crate::error::DurationError;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;
const NANOS_PER_MIN: u64 = 60_000_000_000;
const NANOS_PER_HOUR: u64 = 3_600_000_000_000;
/// Fraction digits beyond this scale no longer change a nanosecond result.
const MAX_FRACTION_SCALE: u64 = 1_000_000_000_000_000_000;
const DECIMAL_BASE: u64 = 10;

/// Parses a duration string such as `300ms`, `1.5s` or `2h45m`.
///
/// A duration is a sequence of decimal numbers, each with an optional
/// fraction and a mandatory unit (`ns`, `us`, `µs`, `ms`, `s`, `m`, `h`).
/// A bare `0` is accepted.
///
/// # Errors
///
/// Returns an error when the string is empty, negative, missing a unit,
/// uses an unknown unit or overflows.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let value = input.trim();
    if value.is_empty() {
        return Err(DurationError::Empty);
    }
    if value.starts_with('-') {
        return Err(DurationError::Negative {
            value: value.to_owned(),
        });
    }
    let unsigned = value.strip_prefix('+').unwrap_or(value);
    if unsigned == "0" {
        return Ok(Duration::ZERO);
    }
    if unsigned.is_empty() {
        return Err(DurationError::InvalidFormat {
            value: value.to_owned(),
        });
    }

    let overflow = || DurationError::Overflow {
        value: value.to_owned(),
    };

    let mut total_nanos: u64 = 0;
    let mut remaining = unsigned;
    while !remaining.is_empty() {
        let (whole, after_whole) = split_digits(remaining);
        let (fraction, after_fraction) = match after_whole.strip_prefix('.') {
            Some(tail) => split_digits(tail),
            None => ("", after_whole),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(DurationError::InvalidFormat {
                value: value.to_owned(),
            });
        }

        let unit_len = after_fraction
            .find(|ch: char| ch.is_ascii_digit() || ch == '.')
            .unwrap_or(after_fraction.len());
        let (unit, rest) = after_fraction.split_at(unit_len);
        if unit.is_empty() {
            return Err(DurationError::MissingUnit {
                value: value.to_owned(),
            });
        }
        let unit_nanos = unit_nanos(unit).ok_or_else(|| DurationError::InvalidUnit {
            value: value.to_owned(),
            unit: unit.to_owned(),
        })?;

        let whole_value: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_parse_err| overflow())?
        };
        let mut component = whole_value.checked_mul(unit_nanos).ok_or_else(overflow)?;
        component = component
            .checked_add(fraction_nanos(fraction, unit_nanos))
            .ok_or_else(overflow)?;
        total_nanos = total_nanos.checked_add(component).ok_or_else(overflow)?;
        remaining = rest;
    }

    Ok(Duration::from_nanos(total_nanos))
}

fn split_digits(value: &str) -> (&str, &str) {
    let len = value
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(value.len());
    value.split_at(len)
}

fn unit_nanos(unit: &str) -> Option<u64> {
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

fn fraction_nanos(fraction: &str, unit_nanos: u64) -> u64 {
    let mut numerator: u64 = 0;
    let mut scale: u64 = 1;
    for digit in fraction.bytes() {
        if scale >= MAX_FRACTION_SCALE {
            break;
        }
        numerator = numerator
            .saturating_mul(DECIMAL_BASE)
            .saturating_add(u64::from(digit.saturating_sub(b'0')));
        scale = scale.saturating_mul(DECIMAL_BASE);
    }
    let scaled = u128::from(numerator)
        .saturating_mul(u128::from(unit_nanos))
        .checked_div(u128::from(scale))
        .unwrap_or(0);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}
