//! Rendering of caller-vetted markup into the page.
//!
//! Nothing here escapes or sanitizes anything. Markup has to be wrapped in [`TrustedHtml`] first,
//! which makes every injection site easy to find.

use core::fmt::{self, Debug, Formatter};
use tracing::{instrument, trace};
use web_sys::Element;

/// HTML that the caller has already sanitized or otherwise vetted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrustedHtml(String);

impl TrustedHtml {
	/// Wraps `html` without checking it.
	///
	/// Only call this with markup from a trusted source or after sanitizing it.
	#[must_use]
	pub fn assume_trusted(html: impl Into<String>) -> Self {
		Self(html.into())
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn into_string(self) -> String {
		self.0
	}
}

/// Replaces the content of `element` with `html`.
#[instrument(skip(html), fields(len = html.as_str().len()))]
pub fn render_trusted_markup(element: &Element, html: &TrustedHtml) {
	element.set_inner_html(html.as_str());
}

/// Re-renders an element whenever a watched markup value changes.
///
/// The first observed value only sets the baseline and is not rendered,
/// unless the binding was created with [`render_initial`](`HtmlBinding::render_initial`).
///
/// After each render, the activation hook runs over the element so that the caller's renderer can bind
/// the inserted content (for example via [`load_child_nodes`](`crate::load::load_child_nodes`)).
pub struct HtmlBinding {
	element: Element,
	/// `None` until the first observation.
	last_seen: Option<Option<TrustedHtml>>,
	render_initial: bool,
	activate: Box<dyn FnMut(&Element)>,
}

impl HtmlBinding {
	#[must_use]
	pub fn new(element: Element, activate: impl FnMut(&Element) + 'static) -> Self {
		Self {
			element,
			last_seen: None,
			render_initial: false,
			activate: Box::new(activate),
		}
	}

	/// Also renders the first observed value, if it is non-empty.
	#[must_use]
	pub fn render_initial(mut self) -> Self {
		self.render_initial = true;
		self
	}

	/// Observes the watched value.
	///
	/// Renders iff `value` is present, non-empty and differs from the previously observed value
	/// (including observed values that weren't rendered). Returns whether it rendered.
	pub fn update(&mut self, value: Option<TrustedHtml>) -> bool {
		let changed = match &self.last_seen {
			Some(last_seen) => value != *last_seen,
			None => self.render_initial,
		};
		let last_seen = self.last_seen.insert(value);

		match last_seen {
			Some(html) if changed && !html.is_empty() => {
				render_trusted_markup(&self.element, html);
				(self.activate)(&self.element);
				true
			}
			_ => {
				trace!(changed, "Skipped markup render.");
				false
			}
		}
	}

	#[must_use]
	pub fn element(&self) -> &Element {
		&self.element
	}
}

impl Debug for HtmlBinding {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("HtmlBinding")
			.field("element", &self.element)
			.field("last_seen", &self.last_seen)
			.finish_non_exhaustive()
	}
}
