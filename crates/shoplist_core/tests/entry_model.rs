use shoplist_core::{Entry, Filter, FilterParseError};
use uuid::Uuid;

#[test]
fn entry_new_sets_defaults() {
    let entry = Entry::new("milk");

    assert!(!entry.id.is_nil());
    assert_eq!(entry.title, "milk");
    assert!(!entry.completed);
}

#[test]
fn entry_ids_are_generated_per_entry() {
    let first = Entry::new("bread");
    let second = Entry::new("bread");

    assert_ne!(first.id, second.id);
}

#[test]
fn toggle_flips_completion_both_ways() {
    let mut entry = Entry::new("eggs");

    entry.toggle();
    assert!(entry.completed);

    entry.toggle();
    assert!(!entry.completed);
}

#[test]
fn entry_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut entry = Entry::with_id(id, "olive oil");
    entry.completed = true;

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "olive oil");
    assert_eq!(json["completed"], true);

    let decoded: Entry = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, entry);
}

#[test]
fn filter_defaults_to_all() {
    assert_eq!(Filter::default(), Filter::All);
}

#[test]
fn filter_parses_canonical_names() {
    assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
    assert_eq!("active".parse::<Filter>().unwrap(), Filter::Active);
    assert_eq!("completed".parse::<Filter>().unwrap(), Filter::Completed);
}

#[test]
fn filter_rejects_unrecognized_names() {
    let err = "done".parse::<Filter>().unwrap_err();
    assert_eq!(
        err,
        FilterParseError {
            value: "done".to_string()
        }
    );
    assert!(err.to_string().contains("unsupported filter"));
}

#[test]
fn filter_matches_selects_the_right_subset() {
    let mut done = Entry::new("flour");
    done.completed = true;
    let pending = Entry::new("sugar");

    assert!(Filter::All.matches(&done));
    assert!(Filter::All.matches(&pending));

    assert!(!Filter::Active.matches(&done));
    assert!(Filter::Active.matches(&pending));

    assert!(Filter::Completed.matches(&done));
    assert!(!Filter::Completed.matches(&pending));
}
