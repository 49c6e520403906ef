// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde_json::Value;

use super::Endpoint;
use crate::error::{Error, Result};
use crate::models::Invoice;
use crate::session::Session;

fn endpoint(card_id: i64) -> Endpoint<Invoice> {
    Endpoint::new(format!("/credit_cards/{}/invoices", card_id))
}

pub fn list(session: &Session, card_id: i64) -> Result<Vec<Invoice>> {
    endpoint(card_id).list(session, &[])
}

pub fn get(session: &Session, card_id: i64, invoice_id: i64) -> Result<Invoice> {
    endpoint(card_id).get(session, invoice_id)
}

/// Payment entries of one invoice, exactly as the API returns them.
pub fn list_payments(session: &Session, card_id: i64, invoice_id: i64) -> Result<Vec<Value>> {
    let path = format!("{}/payments", endpoint(card_id).item(invoice_id));
    match session.get(&path, &[])? {
        Value::Array(items) => Ok(items),
        _ => Err(Error::Decode(serde::de::Error::custom(format!(
            "expected a JSON array from {}",
            path
        )))),
    }
}
