// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use chrono::NaiveDate;
use common::{path_of, query_of, setup, transaction_json};
use organizze::Error;
use organizze::filters::filter_transactions;
use organizze::models::{Transaction, parse_many};
use organizze::resources::transactions::{
    self, NewTransaction, Periodicity, RecurrenceScope, TransactionChanges,
};
use reqwest::Method;
use serde_json::json;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn groceries() -> NewTransaction {
    NewTransaction::new("Groceries", d("2024-03-05"), -4290).account(5)
}

#[test]
fn list_walks_the_interval_in_80_day_windows() {
    let (session, mock) = setup();
    mock.reply_json(json!([transaction_json(1, "Rent", 5, "2024-01-05")]))
        .reply_json(json!([transaction_json(2, "Rent", 5, "2024-03-25")]))
        .reply_json(json!([]));

    let got = transactions::list(&session, d("2024-01-01"), d("2024-06-30")).unwrap();
    assert_eq!(got.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);

    let reqs = mock.requests();
    assert_eq!(reqs.len(), 3);
    for req in &reqs {
        assert_eq!(req.method, Method::GET);
        assert_eq!(path_of(req), "/transactions");
    }
    assert_eq!(
        query_of(&reqs[0]),
        vec![("start_date", "2024-01-01"), ("end_date", "2024-03-20")]
    );
    assert_eq!(
        query_of(&reqs[1]),
        vec![("start_date", "2024-03-21"), ("end_date", "2024-06-08")]
    );
    assert_eq!(
        query_of(&reqs[2]),
        vec![("start_date", "2024-06-09"), ("end_date", "2024-06-30")]
    );
}

#[test]
fn list_with_reversed_interval_sends_nothing() {
    let (session, mock) = setup();
    let got = transactions::list(&session, d("2024-02-01"), d("2024-01-01")).unwrap();
    assert!(got.is_empty());
    assert!(mock.requests().is_empty());
}

#[test]
fn list_aborts_on_first_failing_window() {
    let (session, mock) = setup();
    mock.reply_json(json!([])).reply(500, "down");
    let err = transactions::list_with_span(&session, d("2024-01-01"), d("2024-01-30"), 10)
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(mock.requests().len(), 2);
}

#[test]
fn get_reads_the_misspelled_opposite_fields() {
    let (session, mock) = setup();
    let mut raw = transaction_json(9, "Transfer", 5, "2024-03-05");
    raw["oposite_transaction_id"] = json!(10);
    raw["oposite_account_id"] = json!(6);
    mock.reply_json(raw);
    let tx = transactions::get(&session, 9).unwrap();
    assert_eq!(tx.opposite_transaction_id, Some(10));
    assert_eq!(tx.opposite_account_id, Some(6));
    assert_eq!(path_of(&mock.last()), "/transactions/9");
}

#[test]
fn null_tags_decode_as_empty() {
    let (session, mock) = setup();
    let mut untagged = transaction_json(2, "Bus", 5, "2024-03-06");
    untagged["tags"] = json!(null);
    let mut bare = transaction_json(3, "Taxi", 5, "2024-03-07");
    bare.as_object_mut().unwrap().remove("tags");
    mock.reply_json(json!([transaction_json(1, "Metro", 5, "2024-03-05"), untagged, bare]));

    let got = transactions::list(&session, d("2024-03-01"), d("2024-03-31")).unwrap();
    assert_eq!(got.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(got.iter().all(|t| t.tags.is_empty()));
}

#[test]
fn create_single_sends_plain_body() {
    let (session, mock) = setup();
    transactions::create(&session, &groceries().tag("market")).unwrap();
    let req = mock.last();
    assert_eq!(req.method, Method::POST);
    assert_eq!(path_of(&req), "/transactions");
    assert_eq!(
        req.body,
        Some(json!({
            "description": "Groceries",
            "date": "2024-03-05",
            "amount_cents": -4290,
            "account_id": 5,
            "tags": [{"name": "market"}]
        }))
    );
}

#[test]
fn create_fixed_attaches_recurrence() {
    let (session, mock) = setup();
    transactions::create_fixed(&session, &groceries(), Periodicity::Monthly).unwrap();
    let body = mock.last().body.unwrap();
    assert_eq!(body["recurrence_attributes"], json!({"periodicity": "monthly"}));
    assert!(body.get("installments_attributes").is_none());
}

#[test]
fn installment_count_is_checked_before_sending() {
    let (session, mock) = setup();
    for bad in [0, 1, 481] {
        let err = transactions::create_installments(&session, &groceries(), Periodicity::Monthly, bad)
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
    assert!(mock.requests().is_empty());

    for ok in [2, 480] {
        transactions::create_installments(&session, &groceries(), Periodicity::Weekly, ok).unwrap();
        let body = mock.last().body.unwrap();
        assert_eq!(
            body["installments_attributes"],
            json!({"periodicity": "weekly", "total": ok})
        );
        assert!(body.get("recurrence_attributes").is_none());
    }
    assert_eq!(mock.requests().len(), 2);
}

#[test]
fn update_puts_scope_flag_in_body() {
    let (session, mock) = setup();
    let changes = TransactionChanges {
        paid: Some(true),
        ..Default::default()
    };

    transactions::update(&session, 4, &changes, RecurrenceScope::Single).unwrap();
    assert_eq!(mock.last().body, Some(json!({"paid": true})));

    transactions::update(&session, 4, &changes, RecurrenceScope::Future).unwrap();
    assert_eq!(mock.last().body, Some(json!({"paid": true, "update_future": true})));

    let both = RecurrenceScope::from_flags(true, true);
    transactions::update(&session, 4, &changes, both).unwrap();
    let req = mock.last();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(path_of(&req), "/transactions/4");
    assert_eq!(req.body, Some(json!({"paid": true, "update_all": true})));
}

#[test]
fn delete_puts_scope_flag_in_query() {
    let (session, mock) = setup();
    transactions::delete(&session, 4, RecurrenceScope::Single).unwrap();
    assert!(mock.last().query.is_empty());

    transactions::delete(&session, 4, RecurrenceScope::Future).unwrap();
    assert_eq!(query_of(&mock.last()), vec![("update_future", "true")]);

    transactions::delete(&session, 4, RecurrenceScope::All).unwrap();
    let req = mock.last();
    assert_eq!(req.method, Method::DELETE);
    assert_eq!(query_of(&req), vec![("update_all", "true")]);
    assert!(req.body.is_none());
}

fn sample() -> Vec<Transaction> {
    parse_many(json!([
        transaction_json(1, "Rent March", 5, "2024-03-01"),
        transaction_json(2, "Coffee", 5, "2024-03-02"),
        transaction_json(3, "rent garage", 6, "2024-03-03"),
        transaction_json(4, "RENT April", 5, "2024-04-01"),
    ]))
    .unwrap()
}

#[test]
fn filter_by_account_and_title() {
    let txs = sample();
    let found = filter_transactions(&txs, Some(5), Some("rent"), false).unwrap();
    assert_eq!(found.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 4]);

    let found = filter_transactions(&txs, None, Some("^Rent"), true).unwrap();
    assert_eq!(found.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn filter_without_criteria_keeps_everything() {
    let txs = sample();
    assert_eq!(filter_transactions(&txs, None, None, false).unwrap(), txs);
    assert_eq!(filter_transactions(&txs, None, Some(""), true).unwrap(), txs);
}

#[test]
fn filter_bad_regex_is_validation_error() {
    let txs = sample();
    assert!(matches!(
        filter_transactions(&txs, None, Some("[rent"), true),
        Err(Error::Validation(_))
    ));
}
