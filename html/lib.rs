use derive_more::From;
use std::borrow::Cow;

pub use html_macro::{component, html};

extern crate self as html;

/// A tree of html. Components stay unrendered until the tree is written out with `render_to_string`.
#[derive(From)]
pub enum Node {
	RawText(RawTextNode),
	EscapedText(EscapedTextNode),
	Fragment(FragmentNode),
	Host(HostNode),
	Component(ComponentNode),
	Option(Option<Box<Node>>),
	Vec(Vec<Node>),
}

pub struct RawTextNode(pub Cow<'static, str>);

pub struct EscapedTextNode(pub Cow<'static, str>);

pub struct FragmentNode {
	pub children: Vec<Node>,
}

pub struct HostNode {
	pub name: &'static str,
	pub attributes: Vec<(AttributeKey, AttributeValue)>,
	pub children: Vec<Node>,
	pub self_closing: bool,
}

pub type AttributeKey = &'static str;

/// `Bool` attributes are written as a bare key when `Some(true)`. `String` attributes are written when `Some`.
#[derive(From)]
pub enum AttributeValue {
	Bool(Option<bool>),
	String(Option<Cow<'static, str>>),
}

pub struct ComponentNode {
	pub component: Box<dyn Component>,
	pub children: Vec<Node>,
}

pub trait Component {
	fn render(self: Box<Self>, children: Vec<Node>) -> Node;
}

impl Node {
	pub fn render_to_string(self) -> String {
		let mut html = String::new();
		self.write(&mut html);
		html
	}

	fn write(self, html: &mut String) {
		match self {
			Node::RawText(RawTextNode(text)) => html.push_str(&text),
			Node::EscapedText(EscapedTextNode(text)) => push_escaped(html, &text),
			Node::Fragment(FragmentNode { children }) | Node::Vec(children) => {
				for child in children {
					child.write(html);
				}
			}
			Node::Host(node) => node.write(html),
			Node::Component(ComponentNode {
				component,
				children,
			}) => component.render(children).write(html),
			Node::Option(Some(node)) => (*node).write(html),
			Node::Option(None) => {}
		}
	}
}

impl HostNode {
	fn write(self, html: &mut String) {
		html.push('<');
		html.push_str(self.name);
		for (key, value) in self.attributes {
			match value {
				AttributeValue::Bool(Some(true)) => {
					html.push(' ');
					html.push_str(key);
				}
				AttributeValue::String(Some(value)) => {
					html.push(' ');
					html.push_str(key);
					html.push_str("=\"");
					push_escaped(html, &value);
					html.push('"');
				}
				AttributeValue::Bool(_) | AttributeValue::String(None) => {}
			}
		}
		if self.self_closing {
			html.push_str(" />");
			return;
		}
		html.push('>');
		for child in self.children {
			child.write(html);
		}
		html.push_str("</");
		html.push_str(self.name);
		html.push('>');
	}
}

fn push_escaped(html: &mut String, text: &str) {
	for c in text.chars() {
		match c {
			'>' => html.push_str("&gt;"),
			'<' => html.push_str("&lt;"),
			'"' => html.push_str("&quot;"),
			'&' => html.push_str("&amp;"),
			'\'' => html.push_str("&apos;"),
			c => html.push(c),
		}
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> AttributeValue {
		AttributeValue::Bool(Some(value))
	}
}

impl From<Option<String>> for AttributeValue {
	fn from(value: Option<String>) -> AttributeValue {
		AttributeValue::String(value.map(Cow::Owned))
	}
}

impl From<Option<&'static str>> for AttributeValue {
	fn from(value: Option<&'static str>) -> AttributeValue {
		AttributeValue::String(value.map(Cow::Borrowed))
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> AttributeValue {
		AttributeValue::String(Some(Cow::Owned(value)))
	}
}

impl From<&'static str> for AttributeValue {
	fn from(value: &'static str) -> AttributeValue {
		AttributeValue::String(Some(Cow::Borrowed(value)))
	}
}

impl From<String> for Node {
	fn from(value: String) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl From<&'static str> for Node {
	fn from(value: &'static str) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl<T> From<Option<T>> for Node
where
	T: Into<Node>,
{
	fn from(value: Option<T>) -> Node {
		Node::Option(value.map(|value| Box::new(value.into())))
	}
}

/// A value that may appear in `style!` or `classes!`. `None` omits the entry.
pub trait StyleValue {
	fn into_style_value(self) -> Option<Cow<'static, str>>;
}

impl StyleValue for &'static str {
	fn into_style_value(self) -> Option<Cow<'static, str>> {
		Some(Cow::Borrowed(self))
	}
}

impl StyleValue for String {
	fn into_style_value(self) -> Option<Cow<'static, str>> {
		Some(Cow::Owned(self))
	}
}

impl<T> StyleValue for Option<T>
where
	T: StyleValue,
{
	fn into_style_value(self) -> Option<Cow<'static, str>> {
		self.and_then(StyleValue::into_style_value)
	}
}

#[macro_export]
macro_rules! raw {
	($t:expr) => {
		$crate::RawTextNode($t.into())
	};
}

#[macro_export]
macro_rules! text {
	($t:expr) => {
		$crate::EscapedTextNode($t.into())
	};
}

/// Build the value of a `style` attribute from `"property" => value` pairs.
#[macro_export]
macro_rules! style {
	($($key:expr => $value:expr),* $(,)?) => {{
		let mut declarations: Vec<String> = Vec::new();
		$(
			if let Some(value) = $crate::StyleValue::into_style_value($value) {
				declarations.push(format!("{}: {}", $key, value));
			}
		)*
		declarations.join("; ")
	}};
}

/// Join class names, skipping `None`s.
#[macro_export]
macro_rules! classes {
	($($class:expr),* $(,)?) => {{
		let mut classes: Vec<String> = Vec::new();
		$(
			if let Some(class) = $crate::StyleValue::into_style_value($class) {
				classes.push(class.into_owned());
			}
		)*
		classes.join(" ")
	}};
}
