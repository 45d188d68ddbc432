use editor_ui_glue::{
	duplicates::{is_duplicate_array_input, is_duplicate_input},
	WarningQueue,
};
use std::collections::HashMap;

struct Record {
	name: String,
}

fn record(name: &str) -> Record {
	Record { name: name.to_owned() }
}

#[test]
fn keyed_duplicate_under_another_key() {
	let mut collection = HashMap::new();
	collection.insert("a".to_owned(), record("X"));
	collection.insert("b".to_owned(), record("Y"));

	assert!(is_duplicate_input(collection.iter(), |r: &Record| r.name.as_str(), "a", "Y"));
	assert!(!is_duplicate_input(collection.iter(), |r: &Record| r.name.as_str(), "b", "Y"));
	assert!(!is_duplicate_input(collection.iter(), |r: &Record| r.name.as_str(), "a", "Z"));
}

#[test]
fn keyed_check_accepts_hashbrown_maps() {
	let mut collection = hashbrown::HashMap::new();
	collection.insert(1_u32, record("X"));
	collection.insert(2_u32, record("Y"));

	assert!(is_duplicate_input(&collection, |r: &Record| r.name.as_str(), &2, "X"));
	assert!(!is_duplicate_input(&collection, |r: &Record| r.name.as_str(), &1, "X"));
}

#[test]
fn array_duplicate_warns() {
	let mut warnings = WarningQueue::new();
	let sequence = [record("A"), record("B")];

	assert!(is_duplicate_array_input(&mut warnings, &sequence, |r: &Record| r.name.as_str(), 0, "B"));
	assert_eq!(warnings.warnings(), ["The name 'B' is already in use."]);
}

#[test]
fn array_same_index_is_not_a_duplicate() {
	let mut warnings = WarningQueue::new();
	let sequence = [record("A"), record("B")];

	assert!(!is_duplicate_array_input(&mut warnings, &sequence, |r: &Record| r.name.as_str(), 0, "A"));
	assert!(warnings.is_empty());
}
