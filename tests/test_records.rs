//! Integration tests for the person record manager.

mod common;

use std::collections::HashSet;

use common::*;

#[test]
fn test_submit_then_reject_scenario() {
    let mut records = RecordManager::new();

    let mut draft = make_draft("Ann", "a@x.com", "France");
    let id = records.submit(&mut draft);
    assert!(id.is_some());
    assert_eq!(records.len(), 1);
    assert!(draft.is_empty(), "draft should reset after a successful submit");

    let mut draft = make_draft("", "b@x.com", "France");
    assert_eq!(records.submit(&mut draft), None);
    assert_eq!(records.len(), 1);
    assert_eq!(draft, make_draft("", "b@x.com", "France"));
}

#[test]
fn test_each_required_field_is_enforced() {
    let drafts = [
        make_draft("", "a@x.com", "France"),
        make_draft("Ann", "", "France"),
        make_draft("Ann", "a@x.com", ""),
        PersonDraft {
            phone: "555".into(),
            city: "Paris".into(),
            ..Default::default()
        },
    ];

    let mut records = RecordManager::new();
    for mut draft in drafts {
        assert_eq!(records.submit(&mut draft), None);
    }
    assert!(records.is_empty());
}

#[test]
fn test_ids_are_unique_and_order_is_kept() {
    let mut records = RecordManager::new();
    let mut ids = HashSet::new();

    for i in 0..50 {
        let mut draft = make_draft(&format!("Person {i}"), &format!("p{i}@x.com"), "Ghana");
        let id = records.submit(&mut draft).expect("complete draft is accepted");
        assert!(ids.insert(id), "id {id} was issued twice");
        assert_eq!(records.len(), i + 1);
    }

    let names: Vec<&str> = records.persons().iter().map(|p| p.full_name.as_str()).collect();
    assert_eq!(names.first(), Some(&"Person 0"));
    assert_eq!(names.last(), Some(&"Person 49"));
}

#[test]
fn test_remove_existing_and_missing() {
    let mut records = RecordManager::new();
    let first = records.submit(&mut make_draft("Ann", "a@x.com", "France")).unwrap();
    let second = records.submit(&mut make_draft("Bob", "b@x.com", "Ghana")).unwrap();

    assert!(!records.remove(&PersonId::generate()));
    assert_eq!(records.len(), 2);

    assert!(records.remove(&first));
    assert_eq!(records.len(), 1);
    assert_eq!(records.persons()[0].id, second);

    assert!(!records.remove(&first));
    assert_eq!(records.len(), 1);
}

#[test]
fn test_country_name_is_not_checked_against_dataset() {
    let mut records = RecordManager::new();
    let id = records
        .submit(&mut make_draft("Ann", "a@x.com", "Atlantis"))
        .unwrap();
    assert_eq!(records.get(&id).unwrap().country_name, "Atlantis");
}
