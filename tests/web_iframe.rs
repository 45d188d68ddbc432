#![cfg(target_arch = "wasm32")]

use editor_ui_glue::{iframe::write_iframe_content, trusted_html::TrustedHtml, Error};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::window;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn writes_into_the_iframe_document() {
	let document = window().unwrap().document().unwrap();
	let iframe = document.create_element("iframe").unwrap();
	iframe.set_id("preview");
	document.body().unwrap().append_child(&iframe).unwrap();

	write_iframe_content(&document, "preview", &TrustedHtml::assume_trusted("<p id=\"inside\">Preview</p>")).unwrap();

	let inner = iframe.unchecked_into::<web_sys::HtmlIFrameElement>().content_document().unwrap();
	assert_eq!(inner.get_element_by_id("inside").unwrap().text_content().as_deref(), Some("Preview"));
}

#[wasm_bindgen_test]
fn missing_iframe_is_an_error() {
	let document = window().unwrap().document().unwrap();
	let content = TrustedHtml::assume_trusted("");
	assert_eq!(write_iframe_content(&document, "nowhere", &content), Err(Error::ElementNotFound("nowhere".to_owned())));

	let div = document.create_element("div").unwrap();
	div.set_id("not-a-frame");
	document.body().unwrap().append_child(&div).unwrap();
	assert_eq!(write_iframe_content(&document, "not-a-frame", &content), Err(Error::NotAnIframe("not-a-frame".to_owned())));
}
