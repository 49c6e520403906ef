// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{json_flags, opt, required};
use crate::models::{Account, AccountType};
use crate::resources::accounts::{self, AccountChanges, NewAccount};
use crate::session::Session;
use crate::utils::{maybe_print_json, opt_to_string, pretty_table};
use anyhow::Result;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let data = accounts::list(session)?;
            print_accounts(sub, &data)?;
        }
        Some(("show", sub)) => {
            let id = *required::<i64>(sub, "id")?;
            let data = vec![accounts::get(session, id)?];
            print_accounts(sub, &data)?;
        }
        Some(("add", sub)) => {
            let name = required::<String>(sub, "name")?;
            let typ: AccountType = required::<String>(sub, "type")?.parse()?;
            let mut account = NewAccount::new(name.as_str(), typ).default(sub.get_flag("default"));
            if let Some(desc) = opt::<String>(sub, "description") {
                account = account.description(desc);
            }
            accounts::create(session, &account)?;
            println!("Added account '{}' ({})", name, typ);
        }
        Some(("update", sub)) => {
            let id = *required::<i64>(sub, "id")?;
            let changes = AccountChanges {
                name: opt(sub, "name"),
                description: opt(sub, "description"),
                default: None,
            };
            accounts::update(session, id, &changes)?;
            println!("Updated account {}", id);
        }
        Some(("rm", sub)) => {
            let id = *required::<i64>(sub, "id")?;
            accounts::delete(session, id)?;
            println!("Removed account {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn print_accounts(sub: &clap::ArgMatches, data: &[Account]) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    let rows = data
        .iter()
        .map(|a| {
            vec![
                a.id.to_string(),
                a.name.clone(),
                opt_to_string(&a.r#type),
                opt_to_string(&a.description),
                if a.default { "yes".into() } else { String::new() },
                if a.archived { "yes".into() } else { String::new() },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Name", "Type", "Description", "Default", "Archived"],
            rows
        )
    );
    Ok(())
}
