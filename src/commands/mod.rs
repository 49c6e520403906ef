// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod categories;
pub mod credit_cards;
pub mod invoices;
pub mod transactions;
pub mod budgets;
pub mod users;

use anyhow::{Context, Result};
use clap::ArgMatches;

pub(crate) fn required<'a, T>(m: &'a ArgMatches, name: &str) -> Result<&'a T>
where
    T: Clone + Send + Sync + 'static,
{
    m.get_one::<T>(name)
        .with_context(|| format!("missing --{}", name))
}

pub(crate) fn opt<T>(m: &ArgMatches, name: &str) -> Option<T>
where
    T: Clone + Send + Sync + 'static,
{
    m.get_one::<T>(name).cloned()
}

/// `--json` / `--jsonl` flags, false when the subcommand does not define them.
pub(crate) fn json_flags(m: &ArgMatches) -> (bool, bool) {
    let get = |name: &str| {
        m.try_get_one::<bool>(name)
            .ok()
            .flatten()
            .copied()
            .unwrap_or(false)
    };
    (get("json"), get("jsonl"))
}
