// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use organizze::Session;
use organizze::error::{Error, Result};
use organizze::session::{ApiRequest, RawResponse, Transport};
use serde_json::{Value, json};

enum Scripted {
    Reply(RawResponse),
    Drop(String),
}

#[derive(Default)]
struct State {
    script: VecDeque<Scripted>,
    seen: Vec<ApiRequest>,
}

/// Replays queued responses and records every request it receives.
/// With an empty queue it answers `200 []`.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<State>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.state
            .lock()
            .unwrap()
            .script
            .push_back(Scripted::Reply(RawResponse::new(status, body)));
        self
    }

    pub fn reply_json(&self, value: Value) -> &Self {
        self.reply(200, &value.to_string())
    }

    pub fn drop_connection(&self, reason: &str) -> &Self {
        self.state
            .lock()
            .unwrap()
            .script
            .push_back(Scripted::Drop(reason.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.lock().unwrap().seen.clone()
    }

    pub fn last(&self) -> ApiRequest {
        self.requests().pop().expect("no request was sent")
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: &ApiRequest) -> Result<RawResponse> {
        let mut state = self.state.lock().unwrap();
        state.seen.push(request.clone());
        match state.script.pop_front() {
            Some(Scripted::Reply(resp)) => Ok(resp),
            Some(Scripted::Drop(reason)) => Err(Error::Transport(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                reason,
            )))),
            None => Ok(RawResponse::new(200, "[]")),
        }
    }
}

pub fn setup() -> (Session, MockTransport) {
    let mock = MockTransport::new();
    let session = Session::with_transport("ana@example.com", "s3cret", "Ana", mock.clone())
        .unwrap()
        .with_base_url("https://api.test/rest/v2");
    (session, mock)
}

pub fn path_of(req: &ApiRequest) -> &str {
    req.url
        .strip_prefix("https://api.test/rest/v2")
        .unwrap_or(req.url.as_str())
}

pub fn query_of(req: &ApiRequest) -> Vec<(&str, &str)> {
    req.query
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

pub const TS: &str = "2024-03-05T10:00:00-03:00";

pub fn account_json(id: i64, name: &str, kind: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": null,
        "type": kind,
        "default": false,
        "archived": false,
        "created_at": TS,
        "updated_at": TS
    })
}

pub fn category_json(id: i64, name: &str, parent_id: Option<i64>) -> Value {
    json!({ "id": id, "name": name, "color": "5c8a4f", "parent_id": parent_id })
}

pub fn card_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": null,
        "card_network": "visa",
        "closing_day": 2,
        "due_day": 10,
        "limit_cents": 500000,
        "type": "credit_card",
        "archived": false,
        "default": true,
        "created_at": TS,
        "updated_at": TS
    })
}

pub fn invoice_json(id: i64, card_id: i64) -> Value {
    json!({
        "id": id,
        "date": "2024-03-10",
        "starting_date": "2024-02-03",
        "closing_date": "2024-03-02",
        "amount_cents": 125000,
        "payment_amount_cents": -125000,
        "balance_cents": 0,
        "previous_balance_cents": 0,
        "credit_card_id": card_id
    })
}

pub fn transaction_json(id: i64, description: &str, account_id: i64, date: &str) -> Value {
    json!({
        "id": id,
        "description": description,
        "date": date,
        "paid": true,
        "amount_cents": -4290,
        "total_installments": 1,
        "installment": 1,
        "recurring": false,
        "account_id": account_id,
        "category_id": 21,
        "tags": [],
        "notes": null,
        "attachments_count": 0,
        "credit_card_id": null,
        "credit_card_invoice_id": null,
        "paid_credit_card_id": null,
        "paid_credit_card_invoice_id": null,
        "oposite_transaction_id": null,
        "oposite_account_id": null,
        "created_at": TS,
        "updated_at": TS
    })
}

pub fn budget_json(category_id: i64, date: &str) -> Value {
    json!({
        "amount_in_cents": 150000,
        "category_id": category_id,
        "date": date,
        "activity_type": 0,
        "total": 120000,
        "predicted_total": 0,
        "percentage": "80.0"
    })
}
