use crate::error::{Error, Result};
use tracing::{trace, warn};

/// An ordered list of user-facing warning messages, as shown in the editor's notification bar.
///
/// Messages are kept in insertion order, without deduplication or size limit,
/// until they are deleted explicitly.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WarningQueue {
	warnings: Vec<String>,
}

impl WarningQueue {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends `message` to the end of the queue.
	pub fn add_warning(&mut self, message: impl Into<String>) {
		let message = message.into();
		if cfg!(feature = "dangerous-logging") {
			warn!("WARNING: {}", message);
		} else {
			warn!(len = message.len(), "Warning added.");
		}
		self.warnings.push(message);
	}

	/// Removes and returns the warning at `index`.
	///
	/// # Errors
	///
	/// Iff `index` is out of range, in which case the queue is left unchanged.
	pub fn delete_warning(&mut self, index: usize) -> Result<String> {
		if index >= self.warnings.len() {
			return Err(Error::WarningIndexOutOfRange {
				index,
				len: self.warnings.len(),
			});
		}
		trace!(index, "Deleting warning.");
		Ok(self.warnings.remove(index))
	}

	#[must_use]
	pub fn warnings(&self) -> &[String] {
		&self.warnings
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.warnings.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.warnings.is_empty()
	}

	pub fn clear(&mut self) {
		self.warnings.clear();
	}
}
