use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
	ext::IdentExt,
	parse::{Parse, ParseStream},
	parse_macro_input,
	punctuated::Punctuated,
	Token,
};

enum Node {
	Text(syn::LitStr),
	Block(syn::Block),
	Fragment(Vec<Node>),
	Element(Element),
}

struct Element {
	name: syn::Path,
	attributes: Vec<Attribute>,
	children: Vec<Node>,
	self_closing: bool,
}

/// An attribute such as `data-index="1"`, `selected={true}`, or the shorthand `hidden`.
struct Attribute {
	key: Punctuated<syn::Ident, Token![-]>,
	value: Option<AttributeValue>,
}

enum AttributeValue {
	Text(syn::LitStr),
	Block(syn::Block),
}

impl Parse for Node {
	fn parse(input: ParseStream) -> syn::Result<Self> {
		if input.peek(syn::LitStr) {
			Ok(Node::Text(input.parse()?))
		} else if input.peek(syn::token::Brace) {
			Ok(Node::Block(input.parse()?))
		} else if input.peek(Token![<]) && input.peek2(Token![>]) {
			input.parse::<Token![<]>()?;
			input.parse::<Token![>]>()?;
			let children = parse_children(input)?;
			parse_close(input, None)?;
			Ok(Node::Fragment(children))
		} else if input.peek(Token![<]) {
			Ok(Node::Element(input.parse()?))
		} else {
			Err(input.error("expected a string literal, a block, or a tag"))
		}
	}
}

impl Parse for Element {
	fn parse(input: ParseStream) -> syn::Result<Self> {
		input.parse::<Token![<]>()?;
		let name = input.parse::<syn::Path>()?;
		let mut attributes = Vec::new();
		while !input.peek(Token![>]) && !input.peek(Token![/]) {
			attributes.push(input.parse()?);
		}
		let self_closing = input.parse::<Option<Token![/]>>()?.is_some();
		input.parse::<Token![>]>()?;
		let children = if self_closing {
			Vec::new()
		} else {
			let children = parse_children(input)?;
			parse_close(input, Some(&name))?;
			children
		};
		Ok(Element {
			name,
			attributes,
			children,
			self_closing,
		})
	}
}

impl Parse for Attribute {
	fn parse(input: ParseStream) -> syn::Result<Self> {
		let key = Punctuated::parse_separated_nonempty_with(input, syn::Ident::parse_any)?;
		let value = if input.parse::<Option<Token![=]>>()?.is_some() {
			Some(if input.peek(syn::LitStr) {
				AttributeValue::Text(input.parse()?)
			} else {
				AttributeValue::Block(input.parse()?)
			})
		} else {
			None
		};
		Ok(Attribute { key, value })
	}
}

fn parse_children(input: ParseStream) -> syn::Result<Vec<Node>> {
	let mut children = Vec::new();
	while !(input.peek(Token![<]) && input.peek2(Token![/])) {
		if input.is_empty() {
			return Err(input.error("unclosed tag"));
		}
		children.push(input.parse()?);
	}
	Ok(children)
}

/// Parse `</name>`, or `</>` when `name` is `None`.
fn parse_close(input: ParseStream, name: Option<&syn::Path>) -> syn::Result<()> {
	input.parse::<Token![<]>()?;
	input.parse::<Token![/]>()?;
	if let Some(name) = name {
		let close_name = input.parse::<syn::Path>()?;
		if &close_name != name {
			return Err(syn::Error::new_spanned(
				close_name,
				format!("expected closing tag for `{}`", quote!(#name)),
			));
		}
	}
	input.parse::<Token![>]>()?;
	Ok(())
}

impl Attribute {
	fn name(&self) -> String {
		self.key
			.iter()
			.map(|ident| ident.unraw().to_string())
			.collect::<Vec<_>>()
			.join("-")
	}

	fn value(&self) -> TokenStream2 {
		match &self.value {
			Some(AttributeValue::Text(text)) => quote! { #text },
			Some(AttributeValue::Block(block)) => block_expr(block),
			None => {
				let key = &self.key;
				quote! { #key }
			}
		}
	}
}

fn expand_node(node: &Node) -> TokenStream2 {
	match node {
		Node::Text(text) => quote! { ::html::Node::from(#text) },
		Node::Block(block) => {
			let expr = block_expr(block);
			quote! { ::html::Node::from(#expr) }
		}
		Node::Fragment(children) => {
			let children = expand_children(children);
			quote! { ::html::Node::Fragment(::html::FragmentNode { children: #children }) }
		}
		Node::Element(element) if is_host_element(&element.name) => expand_host(element),
		Node::Element(element) => expand_component(element),
	}
}

/// A block holding a single expression is forwarded as that expression so the braces written at the call site do not end up around a function argument.
fn block_expr(block: &syn::Block) -> TokenStream2 {
	match block.stmts.as_slice() {
		[syn::Stmt::Expr(expr)] => quote! { #expr },
		_ => quote! { #block },
	}
}

fn expand_children(children: &[Node]) -> TokenStream2 {
	let children = children.iter().map(expand_node);
	quote! { vec![#(#children),*] }
}

/// Host elements are written with a single lowercase identifier. Everything else names a component.
fn is_host_element(name: &syn::Path) -> bool {
	name.get_ident()
		.and_then(|ident| ident.to_string().chars().next())
		.map(|c| c.is_ascii_lowercase())
		.unwrap_or(false)
}

fn expand_host(element: &Element) -> TokenStream2 {
	let name = element
		.name
		.get_ident()
		.map(|ident| ident.to_string())
		.unwrap_or_default();
	let attributes = element.attributes.iter().map(|attribute| {
		let name = attribute.name();
		let value = attribute.value();
		quote! { (#name, ::html::AttributeValue::from(#value)) }
	});
	let children = expand_children(&element.children);
	let self_closing = element.self_closing;
	quote! {
		::html::Node::Host(::html::HostNode {
			name: #name,
			attributes: vec![#(#attributes),*],
			children: #children,
			self_closing: #self_closing,
		})
	}
}

fn expand_component(element: &Element) -> TokenStream2 {
	let name = &element.name;
	let fields = element.attributes.iter().map(|attribute| {
		let key = &attribute.key;
		match &attribute.value {
			Some(AttributeValue::Text(text)) => quote! { #key: #text.into() },
			Some(AttributeValue::Block(block)) => {
				let expr = block_expr(block);
				quote! { #key: #expr }
			}
			None => quote! { #key },
		}
	});
	let children = expand_children(&element.children);
	quote! {
		::html::Node::Component(::html::ComponentNode {
			component: Box::new(#name { #(#fields),* }),
			children: #children,
		})
	}
}

/// Turn `fn Name(prop: Type, ...) { body }` into a props struct named `Name` whose `render` runs `body` with the props and `children` in scope.
fn expand_component_fn(function: syn::ItemFn) -> TokenStream2 {
	let visibility = &function.vis;
	let name = &function.sig.ident;
	let generics = &function.sig.generics;
	let (impl_generics, type_generics, where_clause) = generics.split_for_impl();
	let props = function
		.sig
		.inputs
		.iter()
		.filter_map(|input| match input {
			syn::FnArg::Typed(typed) => Some(typed),
			syn::FnArg::Receiver(_) => None,
		})
		.collect::<Vec<_>>();
	let patterns = props.iter().map(|prop| &prop.pat);
	let body = &function.block;
	quote! {
		#visibility struct #name #impl_generics #where_clause { #(#visibility #props),* }
		impl #impl_generics ::html::Component for #name #type_generics #where_clause {
			#[allow(unused_variables)]
			fn render(self: Box<Self>, children: Vec<::html::Node>) -> ::html::Node {
				let #name { #(#patterns),* } = *self;
				#body
			}
		}
	}
}

#[proc_macro]
pub fn html(input: TokenStream) -> TokenStream {
	let node = parse_macro_input!(input as Node);
	expand_node(&node).into()
}

#[proc_macro_attribute]
pub fn component(_attr: TokenStream, input: TokenStream) -> TokenStream {
	let function = parse_macro_input!(input as syn::ItemFn);
	expand_component_fn(function).into()
}
