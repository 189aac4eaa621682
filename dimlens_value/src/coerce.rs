// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Total coercions from raw [`Value`]s into kind-specific representations.

use core::cmp::Ordering;

use crate::{Timestamp, Value};

/// Display label reserved for missing values in categorical contexts.
pub const NO_VALUE_LABEL: &str = "(no value)";

/// Interprets `value` as a finite number.
///
/// Numbers pass through when finite. Text is trimmed and parsed as a decimal
/// number. Missing values, unparsable text, and non-finite results are `None`.
///
/// ```rust
/// use dimlens_value::{Value, to_number};
///
/// assert_eq!(to_number(&Value::from("1e3")), Some(1000.0));
/// assert_eq!(to_number(&Value::from(f64::NAN)), None);
/// assert_eq!(to_number(&Value::from("  ")), None);
/// ```
#[must_use]
pub fn to_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => *n,
        Value::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        Value::Missing => return None,
    };
    number.is_finite().then_some(number)
}

/// Interprets `value` as a UTC instant.
///
/// See the crate documentation for the accepted date grammar. Numbers are read
/// as milliseconds since the Unix epoch.
#[must_use]
pub fn to_timestamp(value: &Value) -> Option<Timestamp> {
    match value {
        Value::Number(n) => Timestamp::from_epoch_number(*n),
        Value::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            Timestamp::parse_text(trimmed)
        }
        Value::Missing => None,
    }
}

/// Returns the display label of `value`.
///
/// Missing values map to [`NO_VALUE_LABEL`]. Text is returned as-is, without
/// trimming; numbers use [`format_number`].
#[must_use]
pub fn to_label(value: &Value) -> String {
    if value.is_missing() {
        return NO_VALUE_LABEL.to_owned();
    }
    match value {
        Value::Number(n) => format_number(*n),
        Value::Text(text) => text.clone(),
        Value::Missing => NO_VALUE_LABEL.to_owned(),
    }
}

/// Formats a number in its shortest canonical form.
///
/// Integral values print without a fractional part and negative zero prints as
/// `0`. Magnitudes from `1e21` up and below `1e-6` use exponent notation with
/// an explicit sign on positive exponents.
///
/// ```rust
/// use dimlens_value::format_number;
///
/// assert_eq!(format_number(20.0), "20");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1e-7), "1e-7");
/// ```
#[must_use]
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_owned();
    }
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "integral and below 2^53 in magnitude"
        )]
        return (n as i64).to_string();
    }
    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{n:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }
    n.to_string()
}

/// Orders display labels case-insensitively, falling back to exact order.
///
/// This is the canonical category order used by axes and filter pickers. The
/// tie-break keeps the order total so labels differing only in case still sort
/// deterministically.
#[must_use]
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Returns the distinct display labels of `values` in [`compare_labels`] order.
///
/// Missing values contribute [`NO_VALUE_LABEL`].
#[must_use]
pub fn distinct_labels<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut labels: Vec<String> = values.into_iter().map(to_label).collect();
    labels.sort_by(|a, b| compare_labels(a, b));
    labels.dedup();
    labels
}
