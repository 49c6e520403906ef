// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{json_flags, opt, required};
use crate::models::CreditCard;
use crate::resources::credit_cards::{self, CreditCardChanges, NewCreditCard};
use crate::session::Session;
use crate::utils::{fmt_cents, maybe_print_json, parse_cents, parse_date, pretty_table};
use anyhow::Result;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let data = credit_cards::list(session)?;
            print_cards(sub, &data)?;
        }
        Some(("show", sub)) => {
            let id = *required::<i64>(sub, "id")?;
            print_cards(sub, &[credit_cards::get(session, id)?])?;
        }
        Some(("add", sub)) => {
            let mut card = NewCreditCard::new(
                required::<String>(sub, "name")?.as_str(),
                required::<String>(sub, "network")?.as_str(),
                *required::<u32>(sub, "due-day")?,
                *required::<u32>(sub, "closing-day")?,
                parse_cents(required::<String>(sub, "limit")?)?,
            );
            card.description = opt(sub, "description");
            credit_cards::create(session, &card)?;
            println!("Added credit card '{}' ({})", card.name, card.card_network);
        }
        Some(("update", sub)) => {
            let id = *required::<i64>(sub, "id")?;
            let changes = changes_from(sub)?;
            if changes.is_empty() {
                println!("Nothing to update for credit card {}", id);
                return Ok(());
            }
            credit_cards::update(session, id, &changes)?;
            println!("Updated credit card {}", id);
        }
        Some(("archive", sub)) => {
            let id = *required::<i64>(sub, "id")?;
            credit_cards::archive(session, id)?;
            println!("Archived credit card {}", id);
        }
        Some(("rm", sub)) => {
            let id = *required::<i64>(sub, "id")?;
            credit_cards::delete(session, id)?;
            println!("Removed credit card {}", id);
        }
        _ => {}
    }
    Ok(())
}

pub fn changes_from(sub: &clap::ArgMatches) -> Result<CreditCardChanges> {
    let limit_cents = match sub.get_one::<String>("limit") {
        Some(raw) => Some(parse_cents(raw)?),
        None => None,
    };
    let update_invoices_since = match sub.get_one::<String>("invoices-since") {
        Some(raw) => Some(parse_date(raw)?),
        None => None,
    };
    Ok(CreditCardChanges {
        name: opt(sub, "name"),
        due_day: opt(sub, "due-day"),
        closing_day: opt(sub, "closing-day"),
        card_network: opt(sub, "network"),
        limit_cents,
        update_invoices_since,
    })
}

fn print_cards(sub: &clap::ArgMatches, data: &[CreditCard]) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    let rows = data
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                c.name.clone(),
                c.card_network.clone(),
                c.closing_day.to_string(),
                c.due_day.to_string(),
                fmt_cents(c.limit_cents),
                if c.archived { "yes".into() } else { String::new() },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Name", "Network", "Closing", "Due", "Limit", "Archived"],
            rows
        )
    );
    Ok(())
}
