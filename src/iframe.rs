use crate::{
	error::{Error, Result},
	trusted_html::TrustedHtml,
};
use tracing::{instrument, trace};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument, HtmlIFrameElement};

/// Replaces the whole document of the iframe with id `iframe_id` in `document` by `content`.
///
/// # Errors
///
/// Iff there is no such iframe, it has no accessible document, or writing to it throws.
#[instrument(skip(document, content))]
pub fn write_iframe_content(document: &Document, iframe_id: &str, content: &TrustedHtml) -> Result<()> {
	let iframe = document
		.get_element_by_id(iframe_id)
		.ok_or_else(|| Error::ElementNotFound(iframe_id.to_owned()))?
		.dyn_into::<HtmlIFrameElement>()
		.map_err(|_| Error::NotAnIframe(iframe_id.to_owned()))?;

	let inner = iframe
		.content_document()
		.or_else(|| iframe.content_window().and_then(|window| window.document()))
		.ok_or(Error::NoDocument)?
		.dyn_into::<HtmlDocument>()
		.map_err(|_| Error::NoDocument)?;

	inner.open()?;
	inner.writeln_1(content.as_str())?;
	inner.close()?;
	trace!(len = content.as_str().len(), "Wrote iframe content.");
	Ok(())
}
