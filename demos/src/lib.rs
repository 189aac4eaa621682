// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers shared by the Dimlens demos.

use dimlens_explorer::Explorer;
use dimlens_filter::Filter;
use dimlens_selection::FilterOutcome;
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Applies a command-line filter of the form `dimension=constraint`.
///
/// - Numeric and datetime constraints are ranges `low..high`; either side may
///   be empty to leave it open.
/// - Categorical constraints list accepted labels separated by `|`.
///
/// A bound that does not parse for the dimension's kind is an error, and the
/// stored filter is left as it was.
pub fn apply_filter_arg(explorer: &mut Explorer, arg: &str) -> Result<FilterOutcome, String> {
    let (dimension_id, constraint) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected `dimension=constraint`, got `{arg}`"))?;
    if explorer.dataset().dimension(dimension_id).is_none() {
        return Err(format!("unknown dimension `{dimension_id}`"));
    }

    let (low, high) = constraint.split_once("..").unwrap_or((constraint, ""));
    let mut rejected = None;
    let outcome = explorer.edit_filter(dimension_id, |filter| {
        let mut next = filter.clone();
        let accepted = match &mut next {
            Filter::Numeric(range) => [range.apply_min_input(low), range.apply_max_input(high)],
            Filter::Datetime(range) => [
                range.apply_start_input(low),
                range.apply_end_input(high),
            ],
            Filter::Categorical(set) => {
                set.allowed = constraint
                    .split('|')
                    .filter(|label| !label.is_empty())
                    .map(str::to_owned)
                    .collect();
                [true, true]
            }
        };
        match accepted {
            [true, true] => *filter = next,
            [false, _] => rejected = Some(low),
            [true, false] => rejected = Some(high),
        }
    });
    match rejected {
        Some(text) => Err(format!("invalid bound `{text}` for `{dimension_id}`")),
        None => Ok(outcome),
    }
}
