// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{json_flags, opt};
use crate::resources::budgets;
use crate::session::Session;
use crate::utils::{fmt_cents, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        list(session, sub)?;
    }
    Ok(())
}

fn list(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let data = match opt::<i32>(sub, "year") {
        Some(year) => budgets::list(session, year, opt(sub, "month"))?,
        None => budgets::list_current(session)?,
    };
    let (json_flag, jsonl_flag) = json_flags(sub);
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    let rows = data
        .iter()
        .map(|b| {
            vec![
                b.date.format("%Y-%m").to_string(),
                b.category_id.to_string(),
                fmt_cents(b.amount_in_cents),
                fmt_cents(b.total),
                fmt_cents(b.predicted_total),
                format!("{}%", b.percentage),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Month", "Category", "Goal", "Total", "Predicted", "Progress"],
            rows
        )
    );
    Ok(())
}
