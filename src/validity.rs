use hashbrown::HashSet;
use std::borrow::Cow;

/// Per-key validity flags of a form field.
///
/// A field is valid while no key is flagged invalid.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Validity(HashSet<Cow<'static, str>>);

impl Validity {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Flags `key` as valid or invalid. Returns whether the flag changed.
	pub fn set_validity(&mut self, key: impl Into<Cow<'static, str>>, valid: bool) -> bool {
		let key = key.into();
		if valid {
			self.0.remove(&key)
		} else {
			self.0.insert(key)
		}
	}

	#[must_use]
	pub fn is_invalid(&self, key: &str) -> bool {
		self.0.contains(key)
	}

	#[must_use]
	pub fn is_valid(&self) -> bool {
		self.0.is_empty()
	}

	/// The keys currently flagged invalid, in no particular order.
	pub fn invalid_keys(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(|key| &**key)
	}
}
