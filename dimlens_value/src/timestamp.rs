// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use core::fmt;

/// Naive date-time layouts accepted after RFC 3339 fails, read as UTC.
///
/// `%.f` makes the fractional part optional and missing seconds default to zero.
const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A UTC instant with millisecond precision.
///
/// Every `Timestamp` is representable as a calendar date, so [`Timestamp::date`]
/// is infallible.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from milliseconds since the Unix epoch.
    ///
    /// Returns `None` if the instant is outside the supported calendar range.
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp_millis(millis).map(|_| Self(millis))
    }

    /// Creates a timestamp at UTC midnight of `date`.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp_millis())
    }

    /// Returns milliseconds since the Unix epoch.
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Returns the UTC calendar date of this instant.
    #[must_use]
    pub fn date(self) -> NaiveDate {
        self.date_time().date_naive()
    }

    /// Returns the calendar date formatted as `YYYY-MM-DD`.
    #[must_use]
    pub fn date_label(self) -> String {
        self.date().format("%Y-%m-%d").to_string()
    }

    /// Returns the instant halfway between `self` and `other`, rounded toward `self`.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        let half = (i128::from(other.0) - i128::from(self.0)) / 2;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "the midpoint of two representable instants lies between them"
        )]
        Self((i128::from(self.0) + half) as i64)
    }

    /// Returns UTC midnight of the day after this instant's date.
    ///
    /// Used as the exclusive upper limit for inclusive date bounds.
    #[must_use]
    pub fn next_day_start(self) -> Option<Self> {
        let next = self.date().checked_add_signed(TimeDelta::days(1))?;
        Some(Self::from_date(next))
    }

    pub(crate) fn parse_text(text: &str) -> Option<Self> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Self::from_millis(dt.timestamp_millis());
        }
        for format in NAIVE_DATE_TIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
                return Self::from_millis(dt.and_utc().timestamp_millis());
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Some(Self::from_date(date));
        }
        text.parse::<f64>().ok().and_then(Self::from_epoch_number)
    }

    pub(crate) fn from_epoch_number(millis: f64) -> Option<Self> {
        if !millis.is_finite() {
            return None;
        }
        let millis = millis.trunc();
        // Bound before casting so saturation cannot alias a far-away instant.
        if millis.abs() > 8.64e15 {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "bounded to the epoch range above"
        )]
        Self::from_millis(millis as i64)
    }

    fn date_time(self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(self.0).unwrap_or_default()
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Timestamp")
            .field(&self.date_time().to_rfc3339())
            .finish()
    }
}

impl From<NaiveDate> for Timestamp {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}
