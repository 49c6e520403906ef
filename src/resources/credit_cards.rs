// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use super::Endpoint;
use crate::error::{Error, Result};
use crate::models::CreditCard;
use crate::session::Session;

fn endpoint() -> Endpoint<CreditCard> {
    Endpoint::new("/credit_cards")
}

fn check_day(field: &str, day: u32) -> Result<()> {
    if (1..=31).contains(&day) {
        Ok(())
    } else {
        Err(Error::validation(format!(
            "{} must be a day of the month (1-31), got {}",
            field, day
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCreditCard {
    pub name: String,
    pub card_network: String,
    pub due_day: u32,
    pub closing_day: u32,
    pub limit_cents: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewCreditCard {
    pub fn new(
        name: impl Into<String>,
        card_network: impl Into<String>,
        due_day: u32,
        closing_day: u32,
        limit_cents: i64,
    ) -> Self {
        Self {
            name: name.into(),
            card_network: card_network.into(),
            due_day,
            closing_day,
            limit_cents,
            description: None,
        }
    }
}

/// Partial card update.
///
/// `update_invoices_since` only qualifies the other fields; on its own it
/// does not make an update worth sending.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreditCardChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_invoices_since: Option<NaiveDate>,
}

impl CreditCardChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.due_day.is_none()
            && self.closing_day.is_none()
            && self.card_network.is_none()
            && self.limit_cents.is_none()
    }
}

pub fn list(session: &Session) -> Result<Vec<CreditCard>> {
    endpoint().list(session, &[])
}

pub fn get(session: &Session, id: i64) -> Result<CreditCard> {
    endpoint().get(session, id)
}

pub fn create(session: &Session, card: &NewCreditCard) -> Result<()> {
    check_day("due_day", card.due_day)?;
    check_day("closing_day", card.closing_day)?;
    endpoint().create(session, card)
}

/// Sends the set fields; does nothing when no card field is set.
pub fn update(session: &Session, id: i64, changes: &CreditCardChanges) -> Result<()> {
    if changes.is_empty() {
        debug!(id, "credit card update has no fields, not sending");
        return Ok(());
    }
    if let Some(day) = changes.due_day {
        check_day("due_day", day)?;
    }
    if let Some(day) = changes.closing_day {
        check_day("closing_day", day)?;
    }
    endpoint().update(session, id, changes)
}

/// Archives a card. The API offers no way back besides the web app.
pub fn archive(session: &Session, id: i64) -> Result<()> {
    endpoint().update(session, id, &json!({ "archived": true }))
}

pub fn delete(session: &Session, id: i64) -> Result<()> {
    endpoint().delete(session, id, &[])
}
