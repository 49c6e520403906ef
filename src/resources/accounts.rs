// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use super::Endpoint;
use crate::error::Result;
use crate::models::{Account, AccountType, parse_many};
use crate::session::Session;

fn endpoint() -> Endpoint<Account> {
    Endpoint::new("/accounts")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAccount {
    pub name: String,
    pub r#type: AccountType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub default: bool,
}

impl NewAccount {
    pub fn new(name: impl Into<String>, r#type: AccountType) -> Self {
        Self {
            name: name.into(),
            r#type,
            description: None,
            default: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }
}

/// Fields left as `None` are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}

/// Lists accounts. Entries without a `type` are inconsistent on the remote
/// side and are dropped with a warning.
/// Lists accounts. Entries with no `type` key at all are inconsistent
/// remote data and are left out; a null `type` is kept.
pub fn list(session: &Session) -> Result<Vec<Account>> {
    let mut raw = endpoint().fetch(session, &[])?;
    if let Value::Array(items) = &mut raw {
        items.retain(|item| {
            let typed = item.get("type").is_some();
            if !typed {
                warn!(id = ?item.get("id"), "skipping account without a type");
            }
            typed
        });
    }
    parse_many(raw)
}

pub fn get(session: &Session, id: i64) -> Result<Account> {
    endpoint().get(session, id)
}

pub fn create(session: &Session, account: &NewAccount) -> Result<()> {
    endpoint().create(session, account)
}

pub fn update(session: &Session, id: i64, changes: &AccountChanges) -> Result<()> {
    endpoint().update(session, id, changes)
}

pub fn delete(session: &Session, id: i64) -> Result<()> {
    endpoint().delete(session, id, &[])
}
