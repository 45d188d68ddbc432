//! Entity name validation (chapter and question names and the like).

use crate::warnings::WarningQueue;
use regex::Regex;
use std::{borrow::Cow, sync::OnceLock};
use thiserror::Error;
use tracing::trace;

/// Why a candidate entity name was rejected.
///
/// The [`Display`](`core::fmt::Display`) text is the warning shown to the user.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidName {
	#[error("Please enter a non-empty name.")]
	Empty,

	/// `[` opens the prefix that auto-suggest boxes use to tag chapters, questions etc.
	#[error("Names should not start with a '['.")]
	LeadingBracket,

	#[error("Invalid input. Please use a non-empty description consisting of alphanumeric characters, underscores, spaces and/or hyphens.")]
	DisallowedCharacters,
}

fn allowed_characters() -> &'static Regex {
	static ALLOWED: OnceLock<Regex> = OnceLock::new();
	ALLOWED.get_or_init(|| Regex::new(r#"^[ A-Za-z0-9.?,+()\[\];!'":_-]+$"#).expect("valid allow-list pattern"))
}

fn whitespace_runs() -> &'static Regex {
	static RUNS: OnceLock<Regex> = OnceLock::new();
	RUNS.get_or_init(|| Regex::new(r"[\s\x{FEFF}]{2,}").expect("valid whitespace pattern"))
}

/// Unicode whitespace plus the byte order mark, which browsers also treat as whitespace.
fn is_name_whitespace(c: char) -> bool {
	c.is_whitespace() || c == '\u{FEFF}'
}

/// Trims `input` and collapses each interior run of two or more whitespace characters into one space.
///
/// Single whitespace characters other than space are kept as they are.
#[must_use]
pub fn normalize_entity_name(input: &str) -> Cow<'_, str> {
	whitespace_runs().replace_all(input.trim_matches(is_name_whitespace), " ")
}

/// Checks `input` and returns its normalized form.
///
/// # Errors
///
/// Iff `input` is not an acceptable entity name.
/// Emptiness is checked before normalization, so a whitespace-only name fails with [`InvalidName::DisallowedCharacters`].
pub fn validate_entity_name(input: &str) -> Result<Cow<'_, str>, InvalidName> {
	if input.is_empty() {
		return Err(InvalidName::Empty);
	}

	let normalized = normalize_entity_name(input);
	if normalized.starts_with('[') {
		return Err(InvalidName::LeadingBracket);
	}
	if !allowed_characters().is_match(&normalized) {
		return Err(InvalidName::DisallowedCharacters);
	}
	Ok(normalized)
}

/// Checks whether `input` is a valid entity name.
///
/// If `warnings` is given, a failed check appends exactly one warning explaining the problem.
pub fn is_valid_entity_name(input: &str, warnings: Option<&mut WarningQueue>) -> bool {
	match validate_entity_name(input) {
		Ok(_) => true,
		Err(invalid) => {
			trace!(reason = ?invalid, "Rejected entity name.");
			if let Some(warnings) = warnings {
				warnings.add_warning(invalid.to_string());
			}
			false
		}
	}
}
