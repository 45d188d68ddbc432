//! Tracks the one input widget of the editor view that is currently open for editing.
//!
//! Many inputs in the view are revealed on click, and only one of them may be active at a time.
//! Each activation is an [`ActiveInput`] handle. Replacing it always releases the previous
//! handle (running its teardown) before the next one's setup runs.

use core::fmt::{self, Debug, Formatter};
use tracing::trace;

/// Runs once with the scope of the input being activated.
pub type Setup<S> = Box<dyn FnOnce(&S)>;
/// Runs once with the scope of the input being released.
pub type Teardown<S> = Box<dyn FnOnce(&S)>;

/// A held activation: the input's name, its opaque scope and an optional teardown.
///
/// The teardown runs exactly once, either through [`release`](`ActiveInput::release`) or when the handle is dropped.
pub struct ActiveInput<S> {
	name: String,
	scope: Option<S>,
	teardown: Option<Teardown<S>>,
}

impl<S> ActiveInput<S> {
	#[must_use]
	pub fn new(name: impl Into<String>, scope: S, teardown: Option<Teardown<S>>) -> Self {
		Self {
			name: name.into(),
			scope: Some(scope),
			teardown,
		}
	}

	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	#[must_use]
	pub fn scope(&self) -> &S {
		// Only `release` takes the scope, and it consumes `self`.
		self.scope.as_ref().expect("unreachable: scope already released")
	}

	/// Runs the teardown (if any) with this handle's scope and hands the scope back.
	pub fn release(mut self) -> S {
		self.run_teardown();
		self.scope.take().expect("unreachable: scope already released")
	}

	fn run_teardown(&mut self) {
		if let (Some(teardown), Some(scope)) = (self.teardown.take(), self.scope.as_ref()) {
			trace!(name = %self.name, "Running active input teardown.");
			teardown(scope);
		}
	}
}

impl<S> Drop for ActiveInput<S> {
	fn drop(&mut self) {
		self.run_teardown();
	}
}

impl<S: Debug> Debug for ActiveInput<S> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("ActiveInput")
			.field("name", &self.name)
			.field("scope", &self.scope)
			.field("teardown", &self.teardown.as_ref().map(|_| "<teardown>"))
			.finish()
	}
}

/// Owns at most one [`ActiveInput`] at a time.
pub struct ActiveInputTracker<S> {
	current: Option<ActiveInput<S>>,
}

impl<S> Default for ActiveInputTracker<S> {
	fn default() -> Self {
		Self { current: None }
	}
}

impl<S> ActiveInputTracker<S> {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Makes `name` the active input.
	///
	/// The previous input's teardown runs with its own scope first, then `setup` runs with the new `scope`.
	pub fn change_active_input(
		&mut self,
		name: impl Into<String>,
		scope: S,
		setup: Option<Setup<S>>,
		teardown: Option<Teardown<S>>,
	) {
		self.release_current();

		let current = self.current.insert(ActiveInput::new(name, scope, teardown));
		trace!(name = %current.name, "Changed active input.");
		if let Some(setup) = setup {
			setup(current.scope());
		}
	}

	/// Releases the active input, if any, without activating another one.
	pub fn clear(&mut self) {
		self.release_current();
	}

	/// The active input's name, or `""` if there is none.
	#[must_use]
	pub fn name(&self) -> &str {
		self.current.as_ref().map_or("", ActiveInput::name)
	}

	#[must_use]
	pub fn scope(&self) -> Option<&S> {
		self.current.as_ref().map(ActiveInput::scope)
	}

	#[must_use]
	pub fn is_active(&self, name: &str) -> bool {
		self.current.as_ref().map_or(false, |current| current.name == name)
	}

	fn release_current(&mut self) -> Option<S> {
		self.current.take().map(ActiveInput::release)
	}
}

impl<S: Debug> Debug for ActiveInputTracker<S> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("ActiveInputTracker").field("current", &self.current).finish()
	}
}
