//! Reads injected DOM content back into [`lignin`] VDOM, so that a lignin-based renderer can adopt it.

use lignin::{Attribute, Element as lElement, ElementCreationOptions, Node, ThreadBound};
use tracing::{error, instrument, warn};
use wasm_bindgen::JsCast;
use web_sys::{Attr, Comment, Element, HtmlElement, NamedNodeMap, Node as wNode, NodeList, SvgElement, Text};

const MATHML_NAMESPACE: &str = "http://www.w3.org/1998/Math/MathML";

/// Storage for loaded VDOM that lives at least as long as `'a`.
pub trait Allocator<'a> {
	fn allocate<T: 'a>(&self, instance: T) -> &'a T;
	fn allocate_slice<T: 'a>(&self, iter: &mut dyn ExactSizeIterator<Item = T>) -> &'a [T];
}

fn allocate_str<'a>(allocator: &impl Allocator<'a>, value: String) -> &'a str {
	allocator.allocate(value).as_str()
}

/// Loads all children of `element` as one [`Node::Multi`].
#[instrument(skip(allocator))]
pub fn load_fragment<'a>(element: &Element, allocator: &impl Allocator<'a>, depth_limit: usize) -> Node<'a, ThreadBound> {
	let node: &wNode = element.as_ref();
	Node::Multi(load_child_nodes(&node.child_nodes(), allocator, depth_limit))
}

/// Loads elements, text and comments. Other node types are skipped with a warning.
pub fn load_child_nodes<'a>(child_nodes: &NodeList, allocator: &impl Allocator<'a>, depth_limit: usize) -> &'a [Node<'a, ThreadBound>] {
	if child_nodes.length() == 0 {
		return &[];
	}
	if depth_limit == 0 {
		error!("Depth limit reached");
		return &[];
	}

	let mut nodes = Vec::with_capacity(child_nodes.length() as usize);
	for child in (0..child_nodes.length()).filter_map(|i| child_nodes.item(i)) {
		if let Some(element) = child.dyn_ref::<Element>() {
			if let Some(node) = load_element_node(element, allocator, depth_limit) {
				nodes.push(node);
			}
		} else if let Some(text) = child.dyn_ref::<Text>() {
			nodes.push(Node::Text {
				text: allocate_str(allocator, text.data()),
				dom_binding: None,
			});
		} else if let Some(comment) = child.dyn_ref::<Comment>() {
			nodes.push(Node::Comment {
				comment: allocate_str(allocator, comment.data()),
				dom_binding: None,
			});
		} else {
			warn!("Skipping unrecognised child node of type {}.", child.node_type());
		}
	}
	allocator.allocate_slice(&mut nodes.into_iter())
}

fn load_element_node<'a>(element: &Element, allocator: &impl Allocator<'a>, depth_limit: usize) -> Option<Node<'a, ThreadBound>> {
	Some(if element.dyn_ref::<HtmlElement>().is_some() {
		Node::HtmlElement {
			element: allocator.allocate(load_element(element, allocator, depth_limit)),
			dom_binding: None,
		}
	} else if element.dyn_ref::<SvgElement>().is_some() {
		Node::SvgElement {
			element: allocator.allocate(load_element(element, allocator, depth_limit)),
			dom_binding: None,
		}
	} else if element.namespace_uri().as_deref() == Some(MATHML_NAMESPACE) {
		Node::MathMlElement {
			element: allocator.allocate(load_element(element, allocator, depth_limit)),
			dom_binding: None,
		}
	} else {
		warn!("Skipping element <{}> in unsupported namespace {:?}.", element.tag_name(), element.namespace_uri());
		return None;
	})
}

pub fn load_element<'a>(element: &Element, allocator: &impl Allocator<'a>, depth_limit: usize) -> lElement<'a, ThreadBound> {
	let node: &wNode = element.as_ref();
	lElement {
		name: allocate_str(allocator, element.tag_name()),
		creation_options: ElementCreationOptions::new(),
		attributes: load_attributes(&element.attributes(), allocator),
		content: Node::Multi(load_child_nodes(&node.child_nodes(), allocator, depth_limit.saturating_sub(1))),
		event_bindings: &[],
	}
}

pub fn load_attributes<'a>(attributes: &NamedNodeMap, allocator: &impl Allocator<'a>) -> &'a [Attribute<'a>] {
	let loaded = (0..attributes.length())
		.filter_map(|i| attributes.item(i))
		.map(|attribute| load_attribute(&attribute, allocator))
		.collect::<Vec<_>>();
	allocator.allocate_slice(&mut loaded.into_iter())
}

pub fn load_attribute<'a>(attribute: &Attr, allocator: &impl Allocator<'a>) -> Attribute<'a> {
	Attribute {
		name: allocate_str(allocator, attribute.name()),
		value: allocate_str(allocator, attribute.value()),
	}
}
