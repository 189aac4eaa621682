// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeSet;

use dimlens_value::{DimensionKind, NaiveDate, Timestamp, Value, to_label, to_number, to_timestamp};

/// A per-dimension filter, one variant per [`DimensionKind`].
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    /// Inclusive numeric bounds.
    Numeric(NumericFilter),
    /// Inclusive calendar-date bounds.
    Datetime(DatetimeFilter),
    /// Accepted display labels.
    Categorical(CategoricalFilter),
}

impl Filter {
    /// Returns a filter of `kind` that accepts every value.
    #[must_use]
    pub fn unconstrained(kind: DimensionKind) -> Self {
        match kind {
            DimensionKind::Numeric => Self::Numeric(NumericFilter::default()),
            DimensionKind::Datetime => Self::Datetime(DatetimeFilter::default()),
            DimensionKind::Categorical => Self::Categorical(CategoricalFilter::default()),
        }
    }

    /// Returns the dimension kind this filter applies to.
    #[must_use]
    pub fn kind(&self) -> DimensionKind {
        match self {
            Self::Numeric(_) => DimensionKind::Numeric,
            Self::Datetime(_) => DimensionKind::Datetime,
            Self::Categorical(_) => DimensionKind::Categorical,
        }
    }

    /// Returns `true` if this filter imposes no constraint.
    ///
    /// Unconstrained filters are never stored; setting one is the same as
    /// clearing the filter.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        match self {
            Self::Numeric(f) => f.is_unconstrained(),
            Self::Datetime(f) => f.is_unconstrained(),
            Self::Categorical(f) => f.is_unconstrained(),
        }
    }

    /// Returns `true` if `value` passes this filter.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Numeric(f) => f.matches(value),
            Self::Datetime(f) => f.matches(value),
            Self::Categorical(f) => f.matches(value),
        }
    }
}

impl From<NumericFilter> for Filter {
    fn from(filter: NumericFilter) -> Self {
        Self::Numeric(filter)
    }
}

impl From<DatetimeFilter> for Filter {
    fn from(filter: DatetimeFilter) -> Self {
        Self::Datetime(filter)
    }
}

impl From<CategoricalFilter> for Filter {
    fn from(filter: CategoricalFilter) -> Self {
        Self::Categorical(filter)
    }
}

/// Inclusive numeric bounds; `None` leaves that side open.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NumericFilter {
    /// Smallest accepted value.
    pub min: Option<f64>,
    /// Largest accepted value.
    pub max: Option<f64>,
}

impl NumericFilter {
    /// Creates a filter with both bounds.
    #[must_use]
    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Creates a filter with only a lower bound.
    #[must_use]
    pub const fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Creates a filter with only an upper bound.
    #[must_use]
    pub const fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Returns `true` if neither bound is set.
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Returns `true` if `value` coerces to a number within the bounds.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        within(to_number(value), self.min, self.max)
    }

    /// Updates the lower bound from user text.
    ///
    /// Empty text clears the bound. Text that is not a finite number is
    /// ignored and the previous bound kept. Returns `true` if the input was
    /// accepted.
    pub fn apply_min_input(&mut self, text: &str) -> bool {
        apply_number_input(&mut self.min, text)
    }

    /// Updates the upper bound from user text, like [`Self::apply_min_input`].
    pub fn apply_max_input(&mut self, text: &str) -> bool {
        apply_number_input(&mut self.max, text)
    }
}

/// Inclusive calendar-date bounds; `None` leaves that side open.
///
/// Bounds have day resolution: a value passes `end` if it falls anywhere on
/// that UTC day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DatetimeFilter {
    /// First accepted day.
    pub start: Option<NaiveDate>,
    /// Last accepted day.
    pub end: Option<NaiveDate>,
}

impl DatetimeFilter {
    /// Creates a filter with both bounds.
    #[must_use]
    pub const fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Creates a filter whose bounds are coerced from raw values.
    ///
    /// Bounds that do not coerce to a timestamp are left open.
    #[must_use]
    pub fn from_values(start: &Value, end: &Value) -> Self {
        Self {
            start: to_timestamp(start).map(Timestamp::date),
            end: to_timestamp(end).map(Timestamp::date),
        }
    }

    /// Returns `true` if neither bound is set.
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Returns `true` if `value` coerces to an instant within the bounds.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        let instant = to_timestamp(value);
        if let Some(start) = self.start
            && instant.is_none_or(|t| t < Timestamp::from_date(start))
        {
            return false;
        }
        if let Some(end) = self.end {
            let Some(t) = instant else {
                return false;
            };
            if let Some(limit) = Timestamp::from_date(end).next_day_start()
                && t >= limit
            {
                return false;
            }
        }
        true
    }

    /// Updates the start bound from user text.
    ///
    /// Empty text clears the bound; text the date grammar rejects is ignored
    /// and the previous bound kept. Returns `true` if the input was accepted.
    pub fn apply_start_input(&mut self, text: &str) -> bool {
        apply_date_input(&mut self.start, text)
    }

    /// Updates the end bound from user text, like [`Self::apply_start_input`].
    pub fn apply_end_input(&mut self, text: &str) -> bool {
        apply_date_input(&mut self.end, text)
    }
}

/// A set of accepted display labels.
///
/// An empty set accepts everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoricalFilter {
    /// Accepted labels, including [`NO_VALUE_LABEL`](dimlens_value::NO_VALUE_LABEL)
    /// to accept missing values.
    pub allowed: BTreeSet<String>,
}

impl CategoricalFilter {
    /// Creates a filter accepting the given labels.
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if no label is listed.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.allowed.is_empty()
    }

    /// Returns `true` if `label` is listed.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.allowed.contains(label)
    }

    /// Adds `label` if absent, removes it if present.
    pub fn toggle(&mut self, label: &str) {
        if !self.allowed.remove(label) {
            self.allowed.insert(label.to_owned());
        }
    }

    /// Returns `true` if the label of `value` is listed, or nothing is listed.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        self.allowed.is_empty() || self.allowed.contains(&to_label(value))
    }
}

fn within(value: Option<f64>, min: Option<f64>, max: Option<f64>) -> bool {
    if let Some(min) = min
        && value.is_none_or(|v| v < min)
    {
        return false;
    }
    if let Some(max) = max
        && value.is_none_or(|v| v > max)
    {
        return false;
    }
    true
}

fn apply_number_input(slot: &mut Option<f64>, text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        *slot = None;
        return true;
    }
    match to_number(&Value::from(trimmed)) {
        Some(bound) => {
            *slot = Some(bound);
            true
        }
        None => false,
    }
}

fn apply_date_input(slot: &mut Option<NaiveDate>, text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        *slot = None;
        return true;
    }
    match to_timestamp(&Value::from(trimmed)) {
        Some(instant) => {
            *slot = Some(instant.date());
            true
        }
        None => false,
    }
}
