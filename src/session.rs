use crate::{active_input::ActiveInputTracker, duplicates, validation, warnings::WarningQueue};
use core::fmt::Display;

/// The shared UI state of one editor page session.
///
/// Hand out `&mut EditorSession` (or wrap it in an `Rc<RefCell<…>>`) to the views that need it,
/// so that warnings and the active input have a single, explicit owner.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug)]
pub struct EditorSession<S> {
	pub warnings: WarningQueue,
	pub active_input: ActiveInputTracker<S>,
}

impl<S> Default for EditorSession<S> {
	fn default() -> Self {
		Self {
			warnings: WarningQueue::new(),
			active_input: ActiveInputTracker::new(),
		}
	}
}

impl<S> EditorSession<S> {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// See [`validation::is_valid_entity_name`]. Warnings go to this session's queue iff `show_warnings`.
	pub fn is_valid_entity_name(&mut self, input: &str, show_warnings: bool) -> bool {
		validation::is_valid_entity_name(input, if show_warnings { Some(&mut self.warnings) } else { None })
	}

	/// See [`duplicates::is_duplicate_array_input`].
	pub fn is_duplicate_array_input<R, V, F>(&mut self, sequence: &[R], field: F, current_index: usize, new_input: &V) -> bool
	where
		V: PartialEq + Display + ?Sized,
		F: Fn(&R) -> &V,
	{
		duplicates::is_duplicate_array_input(&mut self.warnings, sequence, field, current_index, new_input)
	}
}
