//! Checks whether a user-entered value is already taken by another record.
//!
//! Records are accessed through a caller-supplied `field` accessor rather than by field name.

use crate::warnings::WarningQueue;
use core::{borrow::Borrow, fmt::Display};
use tracing::trace;

/// Returns `true` iff any entry of `collection` whose key is not `current_key` has `field(record) == new_input`.
///
/// `collection` is typically a map's `iter()`. Unlike [`is_duplicate_array_input`], this never adds a warning.
pub fn is_duplicate_input<'a, K, Q, R, V, F>(collection: impl IntoIterator<Item = (&'a K, &'a R)>, field: F, current_key: &Q, new_input: &V) -> bool
where
	K: Borrow<Q> + ?Sized + 'a,
	Q: PartialEq + ?Sized,
	R: 'a,
	V: PartialEq + ?Sized,
	F: Fn(&R) -> &V,
{
	collection
		.into_iter()
		.any(|(key, record)| Borrow::<Q>::borrow(key) != current_key && field(record) == new_input)
}

/// Returns `true` iff any element of `sequence` at an index other than `current_index` has `field(record) == new_input`.
///
/// On a match, a warning naming `new_input` is appended to `warnings`.
pub fn is_duplicate_array_input<R, V, F>(warnings: &mut WarningQueue, sequence: &[R], field: F, current_index: usize, new_input: &V) -> bool
where
	V: PartialEq + Display + ?Sized,
	F: Fn(&R) -> &V,
{
	let duplicate = sequence
		.iter()
		.enumerate()
		.position(|(i, record)| i != current_index && field(record) == new_input);

	match duplicate {
		Some(index) => {
			trace!(index, current_index, "Duplicate input found.");
			warnings.add_warning(format!("The name '{}' is already in use.", new_input));
			true
		}
		None => false,
	}
}
