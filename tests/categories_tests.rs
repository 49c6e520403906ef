// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{category_json, path_of, query_of, setup};
use organizze::filters::filter_categories;
use organizze::models::Category;
use organizze::resources::categories::{self, CategoryChanges, NewCategory};
use serde_json::json;

fn cat(id: i64, name: &str) -> Category {
    Category {
        id,
        name: name.into(),
        color: "000000".into(),
        parent_id: None,
    }
}

#[test]
fn list_maps_parent_ids() {
    let (session, mock) = setup();
    mock.reply_json(json!([
        category_json(1, "Food", None),
        category_json(2, "Restaurants", Some(1)),
    ]));
    let cats = categories::list(&session).unwrap();
    assert_eq!(cats.len(), 2);
    assert_eq!(cats[0].parent_id, None);
    assert_eq!(cats[1].parent_id, Some(1));
}

#[test]
fn create_always_sends_parent_id() {
    let (session, mock) = setup();
    categories::create(&session, &NewCategory::new("Pets")).unwrap();
    assert_eq!(mock.last().body, Some(json!({"name": "Pets", "parent_id": null})));

    categories::create(&session, &NewCategory::new("Vet").parent(4)).unwrap();
    assert_eq!(mock.last().body, Some(json!({"name": "Vet", "parent_id": 4})));
}

#[test]
fn update_distinguishes_unset_from_detach() {
    let (session, mock) = setup();
    let rename = CategoryChanges {
        name: Some("Groceries".into()),
        parent_id: None,
    };
    categories::update(&session, 3, &rename).unwrap();
    assert_eq!(mock.last().body, Some(json!({"name": "Groceries"})));

    let detach = CategoryChanges {
        name: None,
        parent_id: Some(None),
    };
    categories::update(&session, 3, &detach).unwrap();
    assert_eq!(mock.last().body, Some(json!({"parent_id": null})));
}

#[test]
fn delete_attaches_replacement_only_when_given() {
    let (session, mock) = setup();
    categories::delete(&session, 3, None).unwrap();
    let req = mock.last();
    assert_eq!(path_of(&req), "/categories/3");
    assert!(req.query.is_empty());

    categories::delete(&session, 3, Some(8)).unwrap();
    assert_eq!(query_of(&mock.last()), vec![("replacement_id", "8")]);
}

#[test]
fn filter_by_substring_ignores_case() {
    let cats = vec![cat(1, "Food"), cat(2, "Transport"), cat(3, "Fast Food")];
    let found = filter_categories(&cats, "food", false).unwrap();
    let ids: Vec<i64> = found.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn filter_by_regex() {
    let cats = vec![cat(1, "Food"), cat(2, "Transport"), cat(3, "Fast Food")];
    let found = filter_categories(&cats, "^(Food|Transport)$", true).unwrap();
    let ids: Vec<i64> = found.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn filter_rejects_invalid_regex() {
    let cats = vec![cat(1, "Food")];
    let err = filter_categories(&cats, "(?P<", true).unwrap_err();
    assert!(err.to_string().contains("Invalid regex pattern"));
}
