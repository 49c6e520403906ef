// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{json_flags, opt, required};
use crate::filters::filter_transactions;
use crate::models::{Tag, Transaction};
use crate::resources::transactions::{
    self, NewTransaction, Periodicity, RecurrenceScope, TransactionChanges,
};
use crate::session::Session;
use crate::utils::{fmt_cents, maybe_print_json, parse_cents, parse_date, pretty_table};
use anyhow::Result;

/// How `tx add` should create the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Creation {
    Single,
    Fixed(Periodicity),
    Installments(Periodicity, u32),
}

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(session, sub)?,
        Some(("list", sub)) => list(session, sub)?,
        Some(("show", sub)) => {
            let id = *required::<i64>(sub, "id")?;
            print_transactions(sub, &[transactions::get(session, id)?])?;
        }
        Some(("update", sub)) => {
            let id = *required::<i64>(sub, "id")?;
            let changes = changes_from(sub)?;
            let scope = RecurrenceScope::from_flags(sub.get_flag("future"), sub.get_flag("all"));
            transactions::update(session, id, &changes, scope)?;
            println!("Updated transaction {}", id);
        }
        Some(("rm", sub)) => {
            let id = *required::<i64>(sub, "id")?;
            let scope = RecurrenceScope::from_flags(sub.get_flag("future"), sub.get_flag("all"));
            transactions::delete(session, id, scope)?;
            println!("Removed transaction {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn add(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let (tx, creation) = new_transaction_from(sub)?;
    match creation {
        Creation::Single => transactions::create(session, &tx)?,
        Creation::Fixed(p) => transactions::create_fixed(session, &tx, p)?,
        Creation::Installments(p, n) => transactions::create_installments(session, &tx, p, n)?,
    }
    println!(
        "Recorded {} on {} '{}'",
        fmt_cents(tx.amount_cents),
        tx.date,
        tx.description
    );
    Ok(())
}

pub fn new_transaction_from(sub: &clap::ArgMatches) -> Result<(NewTransaction, Creation)> {
    let date = parse_date(required::<String>(sub, "date")?)?;
    let amount = parse_cents(required::<String>(sub, "amount")?)?;
    let mut tx = NewTransaction::new(required::<String>(sub, "description")?.as_str(), date, amount);
    tx.account_id = opt(sub, "account");
    tx.category_id = opt(sub, "category");
    tx.credit_card_id = opt(sub, "card");
    tx.notes = opt(sub, "notes");
    if sub.get_flag("paid") {
        tx.paid = Some(true);
    }
    if let Some(tags) = sub.get_many::<String>("tag") {
        tx.tags = tags.map(|t| Tag { name: t.clone() }).collect();
    }

    let creation = if let Some(raw) = sub.get_one::<String>("fixed") {
        Creation::Fixed(raw.parse()?)
    } else if let Some(n) = opt::<u32>(sub, "installments") {
        let period: Periodicity = required::<String>(sub, "period")?.parse()?;
        Creation::Installments(period, n)
    } else {
        Creation::Single
    };
    Ok((tx, creation))
}

pub fn changes_from(sub: &clap::ArgMatches) -> Result<TransactionChanges> {
    let date = match sub.get_one::<String>("date") {
        Some(raw) => Some(parse_date(raw)?),
        None => None,
    };
    let amount_cents = match sub.get_one::<String>("amount") {
        Some(raw) => Some(parse_cents(raw)?),
        None => None,
    };
    let paid = if sub.get_flag("paid") {
        Some(true)
    } else if sub.get_flag("unpaid") {
        Some(false)
    } else {
        None
    };
    Ok(TransactionChanges {
        description: opt(sub, "description"),
        date,
        amount_cents,
        paid,
        account_id: opt(sub, "account"),
        category_id: opt(sub, "category"),
        notes: opt(sub, "notes"),
        tags: None,
    })
}

fn list(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let from = parse_date(required::<String>(sub, "from")?)?;
    let to = parse_date(required::<String>(sub, "to")?)?;
    let fetched = transactions::list(session, from, to)?;
    let data = filter_transactions(
        &fetched,
        opt(sub, "account"),
        sub.get_one::<String>("title").map(|s| s.as_str()),
        sub.get_flag("regex"),
    )?;
    print_transactions(sub, &data)
}

fn print_transactions(sub: &clap::ArgMatches, data: &[Transaction]) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    let rows = data
        .iter()
        .map(|t| {
            let installment = if t.total_installments > 1 {
                format!("{}/{}", t.installment, t.total_installments)
            } else {
                String::new()
            };
            vec![
                t.id.to_string(),
                t.date.to_string(),
                t.description.clone(),
                fmt_cents(t.amount_cents),
                t.account_id.map(|a| a.to_string()).unwrap_or_default(),
                t.category_id.map(|c| c.to_string()).unwrap_or_default(),
                installment,
                if t.paid { "yes".into() } else { String::new() },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Date", "Description", "Amount", "Account", "Category", "Inst.", "Paid"],
            rows,
        )
    );
    Ok(())
}
