//! An input filter that only lets valid entity names through.
//!
//! Each edit of the bound `<input>` is checked with [`validate_entity_name`](`crate::validation::validate_entity_name`)
//! (without adding warnings). Valid values update the model. Invalid ones are reverted to the last accepted
//! model value and flag the field invalid for a short while, so the invalid-state indicator is transient.

use crate::{
	error::{Error, Result},
	validation::validate_entity_name,
	validity::Validity,
};
use core::{convert::TryFrom, time::Duration};
use js_sys::Function;
use std::{
	borrow::Cow,
	cell::RefCell,
	rc::{Rc, Weak},
};
use tracing::{error, instrument, trace, trace_span};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::HtmlInputElement;

/// What a pending flag reset does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetPolicy {
	/// Always clear the flag, even if a later invalid edit re-flagged the field.
	Unconditional,
	/// Only the reset belonging to the most recent rejection clears the flag.
	LatestOnly,
}

impl Default for ResetPolicy {
	fn default() -> Self {
		Self::Unconditional
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInputOptions {
	/// How long the field stays flagged after a rejected edit.
	pub reset_delay: Duration,
	/// The [`Validity`] key that is flagged.
	pub validity_key: Cow<'static, str>,
	/// CSS class toggled on the element while flagged, if any.
	pub invalid_class: Option<Cow<'static, str>>,
	pub reset_policy: ResetPolicy,
}

impl Default for ValidatedInputOptions {
	fn default() -> Self {
		Self {
			reset_delay: Duration::from_secs(2),
			validity_key: Cow::Borrowed("invalidChar"),
			invalid_class: Some(Cow::Borrowed("invalid-char")),
			reset_policy: ResetPolicy::default(),
		}
	}
}

/// Identifies the rejection a delayed flag reset belongs to.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keystroke {
	/// The view value became the new model value.
	Accepted,
	/// The view value was refused. Display `revert_to` instead and pass `reset` to [`ValidatedInputState::expire`] after the reset delay.
	Rejected { revert_to: String, reset: ResetTicket },
}

/// The DOM-independent part of [`ValidatedInput`].
#[derive(Debug, Clone)]
pub struct ValidatedInputState {
	model_value: String,
	validity: Validity,
	options: ValidatedInputOptions,
	rejections: u64,
}

impl ValidatedInputState {
	#[must_use]
	pub fn new(model_value: impl Into<String>, options: ValidatedInputOptions) -> Self {
		Self {
			model_value: model_value.into(),
			validity: Validity::new(),
			options,
			rejections: 0,
		}
	}

	pub fn apply_view_value(&mut self, view_value: &str) -> Keystroke {
		let key = self.options.validity_key.clone();
		if validate_entity_name(view_value).is_ok() {
			self.validity.set_validity(key, true);
			self.model_value = view_value.to_owned();
			Keystroke::Accepted
		} else {
			self.validity.set_validity(key, false);
			self.rejections += 1;
			if cfg!(feature = "dangerous-logging") {
				trace!(view_value, "Rejected edit.");
			} else {
				trace!(rejections = self.rejections, "Rejected edit.");
			}
			Keystroke::Rejected {
				revert_to: self.model_value.clone(),
				reset: ResetTicket(self.rejections),
			}
		}
	}

	/// Clears the flag set by the rejection `reset` belongs to, as allowed by the [`ResetPolicy`].
	///
	/// Returns whether the flag was cleared by this call.
	pub fn expire(&mut self, reset: ResetTicket) -> bool {
		let stale = reset.0 != self.rejections;
		if stale && self.options.reset_policy == ResetPolicy::LatestOnly {
			trace!("Ignoring stale flag reset.");
			return false;
		}
		self.validity.set_validity(self.options.validity_key.clone(), true)
	}

	#[must_use]
	pub fn is_flagged(&self) -> bool {
		self.validity.is_invalid(&self.options.validity_key)
	}

	#[must_use]
	pub fn model_value(&self) -> &str {
		&self.model_value
	}

	/// Replaces the model value without validating it, as a model-side update does.
	pub fn set_model_value(&mut self, model_value: impl Into<String>) {
		self.model_value = model_value.into();
	}

	#[must_use]
	pub fn validity(&self) -> &Validity {
		&self.validity
	}

	#[must_use]
	pub fn options(&self) -> &ValidatedInputOptions {
		&self.options
	}
}

/// A [`ValidatedInputState`] bound to an `<input>` element's `input` events.
///
/// The listener is removed when this instance is dropped. Pending flag resets then do nothing.
#[derive(Debug)]
pub struct ValidatedInput {
	input: HtmlInputElement,
	state: Rc<RefCell<ValidatedInputState>>,
	listener: Closure<dyn FnMut(web_sys::Event)>,
}

impl ValidatedInput {
	/// Binds to `input`, displaying `model_value`.
	///
	/// # Errors
	///
	/// Iff the event listener can't be added.
	#[instrument(skip(model_value))]
	pub fn attach(input: HtmlInputElement, model_value: impl Into<String>, options: ValidatedInputOptions) -> Result<Self> {
		let state = Rc::new(RefCell::new(ValidatedInputState::new(model_value, options)));
		input.set_value(state.borrow().model_value());
		reflect(&input, &state.borrow());

		let listener = {
			let input = input.clone();
			let state = Rc::downgrade(&state);
			Closure::wrap(Box::new(move |_: web_sys::Event| {
				let span = trace_span!("validated_input");
				let _enter = span.enter();
				on_input(&input, &state)
			}) as Box<dyn FnMut(web_sys::Event)>)
		};
		input.add_event_listener_with_callback("input", listener.as_ref().unchecked_ref())?;

		Ok(Self { input, state, listener })
	}

	#[must_use]
	pub fn model_value(&self) -> String {
		self.state.borrow().model_value().to_owned()
	}

	/// Pushes a model-side change into the element.
	pub fn set_model_value(&self, model_value: impl Into<String>) {
		let mut state = self.state.borrow_mut();
		state.set_model_value(model_value);
		self.input.set_value(state.model_value());
	}

	#[must_use]
	pub fn is_flagged(&self) -> bool {
		self.state.borrow().is_flagged()
	}

	#[must_use]
	pub fn input(&self) -> &HtmlInputElement {
		&self.input
	}
}

impl Drop for ValidatedInput {
	fn drop(&mut self) {
		if let Err(error) = self
			.input
			.remove_event_listener_with_callback("input", self.listener.as_ref().unchecked_ref())
		{
			error!("Failed to remove input listener: {}", Error::from(error));
		}
	}
}

fn on_input(input: &HtmlInputElement, state: &Weak<RefCell<ValidatedInputState>>) {
	let state = match state.upgrade() {
		Some(state) => state,
		None => {
			trace!("Input event after the binding was dropped.");
			return;
		}
	};

	let keystroke = state.borrow_mut().apply_view_value(&input.value());
	if let Keystroke::Rejected { revert_to, reset } = keystroke {
		input.set_value(&revert_to);
		if let Err(error) = schedule_reset(input, &state, reset) {
			error!("Failed to schedule flag reset: {}", error);
		}
	}
	reflect(input, &state.borrow());
}

fn schedule_reset(input: &HtmlInputElement, state: &Rc<RefCell<ValidatedInputState>>, reset: ResetTicket) -> Result<()> {
	let window = web_sys::window().ok_or(Error::NoWindow)?;
	let delay = state.borrow().options().reset_delay.as_millis();
	let delay = i32::try_from(delay).unwrap_or(i32::MAX);

	let input = input.clone();
	let state = Rc::downgrade(state);
	let callback = Closure::once_into_js(move || {
		if let Some(state) = state.upgrade() {
			if state.borrow_mut().expire(reset) {
				trace!("Cleared invalid flag.");
			}
			reflect(&input, &state.borrow());
		}
	});
	window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref::<Function>(), delay)?;
	Ok(())
}

fn reflect(input: &HtmlInputElement, state: &ValidatedInputState) {
	let flagged = state.is_flagged();
	if let Some(class) = &state.options().invalid_class {
		if let Err(error) = input.class_list().toggle_with_force(class, flagged) {
			error!("Failed to toggle {:?}: {}", class, Error::from(error));
		}
	}
	if let Err(error) = input.set_attribute("aria-invalid", if flagged { "true" } else { "false" }) {
		error!("Failed to set aria-invalid: {}", Error::from(error));
	}
}
