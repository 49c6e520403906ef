// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{json_flags, required};
use crate::models::Invoice;
use crate::resources::invoices;
use crate::session::Session;
use crate::utils::{fmt_cents, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let card = *required::<i64>(sub, "card")?;
            print_invoices(sub, &invoices::list(session, card)?)?;
        }
        Some(("show", sub)) => {
            let card = *required::<i64>(sub, "card")?;
            let id = *required::<i64>(sub, "id")?;
            print_invoices(sub, &[invoices::get(session, card, id)?])?;
        }
        Some(("payments", sub)) => {
            let card = *required::<i64>(sub, "card")?;
            let id = *required::<i64>(sub, "id")?;
            let payments = invoices::list_payments(session, card, id)?;
            println!("{}", serde_json::to_string_pretty(&payments)?);
        }
        _ => {}
    }
    Ok(())
}

fn print_invoices(sub: &clap::ArgMatches, data: &[Invoice]) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    let rows = data
        .iter()
        .map(|i| {
            vec![
                i.id.to_string(),
                i.date.to_string(),
                format!("{} .. {}", i.starting_date, i.closing_date),
                fmt_cents(i.amount_cents),
                fmt_cents(i.payment_amount_cents),
                fmt_cents(i.previous_balance_cents),
                fmt_cents(i.balance_cents),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Due", "Period", "Amount", "Paid", "Previous", "Balance"],
            rows
        )
    );
    Ok(())
}
