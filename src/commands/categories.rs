// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{json_flags, opt, required};
use crate::filters::filter_categories;
use crate::models::Category;
use crate::resources::categories::{self, CategoryChanges, NewCategory};
use crate::session::Session;
use crate::utils::{maybe_print_json, opt_to_string, pretty_table};
use anyhow::Result;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let data = categories::list(session)?;
            print_categories(sub, &data)?;
        }
        Some(("show", sub)) => {
            let id = *required::<i64>(sub, "id")?;
            print_categories(sub, &[categories::get(session, id)?])?;
        }
        Some(("find", sub)) => {
            let name = required::<String>(sub, "name")?;
            let all = categories::list(session)?;
            let data = filter_categories(&all, name, sub.get_flag("regex"))?;
            print_categories(sub, &data)?;
        }
        Some(("add", sub)) => {
            let name = required::<String>(sub, "name")?;
            let mut category = NewCategory::new(name.as_str());
            if let Some(parent) = opt::<i64>(sub, "parent") {
                category = category.parent(parent);
            }
            categories::create(session, &category)?;
            println!("Added category '{}'", name);
        }
        Some(("update", sub)) => {
            let id = *required::<i64>(sub, "id")?;
            let parent_id = if sub.get_flag("root") {
                Some(None)
            } else {
                opt::<i64>(sub, "parent").map(Some)
            };
            let changes = CategoryChanges {
                name: opt(sub, "name"),
                parent_id,
            };
            categories::update(session, id, &changes)?;
            println!("Updated category {}", id);
        }
        Some(("rm", sub)) => {
            let id = *required::<i64>(sub, "id")?;
            let replacement = opt::<i64>(sub, "replacement");
            categories::delete(session, id, replacement)?;
            match replacement {
                Some(r) => println!("Removed category {} (transactions moved to {})", id, r),
                None => println!("Removed category {}", id),
            }
        }
        _ => {}
    }
    Ok(())
}

fn print_categories(sub: &clap::ArgMatches, data: &[Category]) -> Result<()> {
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
                c.color.clone(),
                opt_to_string(&c.parent_id),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["ID", "Name", "Color", "Parent"], rows));
    Ok(())
}
