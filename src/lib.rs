#![doc(html_root_url = "https://docs.rs/editor-ui-glue/0.0.1")]
#![warn(clippy::pedantic)]

pub use lignin;

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod active_input;
pub mod duplicates;
pub mod error;
pub mod iframe;
pub mod load;
pub mod session;
pub mod trusted_html;
pub mod validated_input;
pub mod validation;
pub mod validity;
pub mod warnings;

pub use crate::{
	active_input::{ActiveInput, ActiveInputTracker},
	error::Error,
	session::EditorSession,
	validation::{is_valid_entity_name, validate_entity_name, InvalidName},
	warnings::WarningQueue,
};
