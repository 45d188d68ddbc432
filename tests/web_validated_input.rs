#![cfg(target_arch = "wasm32")]

use core::time::Duration;
use editor_ui_glue::validated_input::{ResetPolicy, ValidatedInput, ValidatedInputOptions};
use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{window, Event, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

static mut LOG_INITIALIZED: bool = false;

fn new_input() -> HtmlInputElement {
	unsafe {
		if !LOG_INITIALIZED {
			tracing_wasm::set_as_global_default();
			LOG_INITIALIZED = true;
		}
	}

	let document = window().unwrap().document().unwrap();
	let input: HtmlInputElement = document.create_element("input").unwrap().dyn_into().unwrap();
	document.body().unwrap().append_child(&input).unwrap();
	input
}

fn type_value(input: &HtmlInputElement, value: &str) {
	input.set_value(value);
	input.dispatch_event(&Event::new("input").unwrap()).unwrap();
}

async fn sleep(ms: i32) {
	let promise = Promise::new(&mut |resolve, _| {
		window().unwrap().set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms).unwrap();
	});
	JsFuture::from(promise).await.unwrap();
}

fn options(reset_delay_ms: u64, reset_policy: ResetPolicy) -> ValidatedInputOptions {
	ValidatedInputOptions {
		reset_delay: Duration::from_millis(reset_delay_ms),
		reset_policy,
		..ValidatedInputOptions::default()
	}
}

fn assert_flagged(binding: &ValidatedInput, input: &HtmlInputElement, flagged: bool) {
	assert_eq!(binding.is_flagged(), flagged);
	assert_eq!(input.class_list().contains("invalid-char"), flagged);
	assert_eq!(input.get_attribute("aria-invalid").as_deref(), Some(if flagged { "true" } else { "false" }));
}

#[wasm_bindgen_test]
fn accepts_valid_names() {
	let input = new_input();
	let binding = ValidatedInput::attach(input.clone(), "Chapter", ValidatedInputOptions::default()).unwrap();
	assert_eq!(input.value(), "Chapter");

	type_value(&input, "Chapter 1");
	assert_eq!(binding.model_value(), "Chapter 1");
	assert_eq!(input.value(), "Chapter 1");
	assert!(!binding.is_flagged());
	assert_eq!(input.get_attribute("aria-invalid").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn reverts_invalid_names() {
	let input = new_input();
	let binding = ValidatedInput::attach(input.clone(), "Chapter", ValidatedInputOptions::default()).unwrap();

	type_value(&input, "Chapter#");
	assert_eq!(input.value(), "Chapter");
	assert_eq!(binding.model_value(), "Chapter");
	assert!(binding.is_flagged());
	assert!(input.class_list().contains("invalid-char"));
	assert_eq!(input.get_attribute("aria-invalid").as_deref(), Some("true"));

	type_value(&input, "Chapter 2");
	assert!(!binding.is_flagged());
	assert!(!input.class_list().contains("invalid-char"));
}

#[wasm_bindgen_test]
fn model_updates_reach_the_element() {
	let input = new_input();
	let binding = ValidatedInput::attach(input.clone(), "", ValidatedInputOptions::default()).unwrap();
	binding.set_model_value("From model");
	assert_eq!(input.value(), "From model");
}

#[wasm_bindgen_test]
fn dropping_detaches() {
	let input = new_input();
	let binding = ValidatedInput::attach(input.clone(), "Chapter", ValidatedInputOptions::default()).unwrap();
	drop(binding);

	type_value(&input, "Chapter#");
	assert_eq!(input.value(), "Chapter#");
}

#[wasm_bindgen_test]
async fn flag_clears_after_the_reset_delay() {
	let input = new_input();
	let binding = ValidatedInput::attach(input.clone(), "Chapter", options(50, ResetPolicy::Unconditional)).unwrap();

	type_value(&input, "Chapter#");
	assert_flagged(&binding, &input, true);

	sleep(150).await;
	assert_flagged(&binding, &input, false);
	assert_eq!(input.value(), "Chapter");
}

#[wasm_bindgen_test]
async fn stale_reset_clears_a_newer_flag_by_default() {
	let input = new_input();
	let binding = ValidatedInput::attach(input.clone(), "Chapter", options(200, ResetPolicy::Unconditional)).unwrap();

	type_value(&input, "Chapter#");
	sleep(100).await;
	type_value(&input, "[Chapter");
	assert_flagged(&binding, &input, true);

	sleep(150).await;
	assert_flagged(&binding, &input, false);
}

#[wasm_bindgen_test]
async fn latest_only_keeps_a_newer_flag() {
	let input = new_input();
	let binding = ValidatedInput::attach(input.clone(), "Chapter", options(200, ResetPolicy::LatestOnly)).unwrap();

	type_value(&input, "Chapter#");
	sleep(100).await;
	type_value(&input, "[Chapter");

	// The first rejection's reset fires here and is ignored.
	sleep(150).await;
	assert_flagged(&binding, &input, true);

	sleep(150).await;
	assert_flagged(&binding, &input, false);
}
