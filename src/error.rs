use thiserror::Error;
use wasm_bindgen::JsValue;

/// Recoverable failures of the plumbing itself.
///
/// User-facing validation problems are not represented here; those become warnings in a [`WarningQueue`](`crate::WarningQueue`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
	#[error("warning index {index} is out of range (queue length {len})")]
	WarningIndexOutOfRange { index: usize, len: usize },

	#[error("no element with id {0:?} found")]
	ElementNotFound(String),

	#[error("element {0:?} is not an iframe")]
	NotAnIframe(String),

	#[error("no document available")]
	NoDocument,

	#[error("no window available")]
	NoWindow,

	#[error("JavaScript exception: {0}")]
	Js(String),
}

impl From<JsValue> for Error {
	fn from(value: JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
	}
}

pub type Result<T> = core::result::Result<T, Error>;
