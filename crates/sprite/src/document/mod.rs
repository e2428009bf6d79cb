//! Minimal structural model of one icon's SVG markup.

use std::borrow::Cow;

use roxmltree::{Document, NS_XML_URI, Node, ParsingOptions};

use crate::error::ParseError;
use crate::XLINK_NS;

/// Root attributes that stay behind when an icon's `<svg>` becomes a `<symbol>`.
///
/// Sizing and placement belong to the referencing `<use>`, and the root id would clash
/// with the symbol id. Every other root attribute is carried over in source order.
const DROPPED_ATTRIBUTES: &[&str] = &["width", "height", "x", "y", "id", "version"];

/// Entities every XML parser knows without a DTD.
const PREDEFINED_ENTITIES: &[&str] = &["amp", "lt", "gt", "quot", "apos"];

/// Parsed view of one icon.
///
/// Holds only what the sprite needs: the view box and title surfaced to application code,
/// the verbatim inner markup merged into the sprite, and the root attributes and namespace
/// declarations required to render that markup correctly inside a `<symbol>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgDocument {
	view_box: String,
	title: String,
	inner: String,
	attributes: Vec<(String, String)>,
	namespaces: Vec<(String, String)>,
}

impl SvgDocument {
	/// Parses optimized icon markup.
	///
	/// Missing `viewBox` and `<title>` are not errors; both read back as empty strings.
	/// A `<!DOCTYPE>` prologue is accepted.
	///
	/// # Errors
	///
	/// Returns [`ParseError`] for invalid UTF-8, malformed XML, a root element other than
	/// `<svg>`, or content referencing an entity declared in the icon's own DTD (the DTD does
	/// not travel into the sprite).
	pub fn parse(markup: &[u8]) -> Result<Self, ParseError> {
		Self::parse_str(std::str::from_utf8(markup)?)
	}

	/// Parses optimized icon markup that is already a string.
	pub fn parse_str(text: &str) -> Result<Self, ParseError> {
		let mut options = ParsingOptions::default();
		options.allow_dtd = true;
		let doc = Document::parse_with_options(text, options)?;

		let root = doc.root_element();
		if root.tag_name().name() != "svg" {
			return Err(ParseError::NotSvg {
				root: root.tag_name().name().to_owned(),
			});
		}

		let view_box = root.attribute("viewBox").unwrap_or_default().to_owned();
		let title = root
			.children()
			.find(|n| n.has_tag_name("title"))
			.map(text_content)
			.unwrap_or_default();

		let inner = inner_markup(text, root).to_owned();
		if let Some(name) = declared_entity_reference(&inner) {
			return Err(ParseError::DeclaredEntity {
				name: name.to_owned(),
			});
		}

		let attributes = root
			.attributes()
			.filter_map(|a| {
				let name = match a.namespace() {
					None if DROPPED_ATTRIBUTES.contains(&a.name()) => return None,
					None => a.name().to_owned(),
					Some(NS_XML_URI) => format!("xml:{}", a.name()),
					Some(uri) => {
						// Skip the default binding, which may share the URI.
						let prefix = root
							.namespaces()
							.find_map(|ns| ns.name().filter(|_| ns.uri() == uri))?;
						format!("{prefix}:{}", a.name())
					}
				};
				Some((name, a.value().to_owned()))
			})
			.collect();

		// The sprite root binds the SVG default namespace and `xlink`; every other prefix
		// the icon root declares is redeclared on its symbol, SVG-bound prefixes included.
		let namespaces = root
			.namespaces()
			.filter_map(|ns| {
				let prefix = ns.name()?;
				let builtin = prefix == "xml" || (prefix == "xlink" && ns.uri() == XLINK_NS);
				(!builtin).then(|| (prefix.to_owned(), ns.uri().to_owned()))
			})
			.collect();

		Ok(Self {
			view_box,
			title,
			inner,
			attributes,
			namespaces,
		})
	}

	/// Value of the root `viewBox` attribute, or `""`.
	pub fn view_box(&self) -> &str {
		&self.view_box
	}

	/// Text content of the root's `<title>` child, trimmed, or `""`.
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Markup between the root `<svg>` start and end tags, byte for byte.
	pub fn inner_markup(&self) -> &str {
		&self.inner
	}

	/// Renders this document as a standalone `<symbol>` element.
	pub fn render_symbol(&self, symbol_id: &str) -> String {
		let mut out = String::with_capacity(self.inner.len() + 64);
		self.write_symbol(&mut out, symbol_id);
		out
	}

	pub(crate) fn write_symbol(&self, out: &mut String, symbol_id: &str) {
		out.push_str("<symbol id=\"");
		out.push_str(&escape_attr(symbol_id));
		out.push('"');
		for (name, value) in &self.attributes {
			push_attr(out, name, value);
		}
		for (prefix, uri) in &self.namespaces {
			out.push_str(" xmlns:");
			out.push_str(prefix);
			out.push_str("=\"");
			out.push_str(&escape_attr(uri));
			out.push('"');
		}
		out.push('>');
		out.push_str(&self.inner);
		out.push_str("</symbol>");
	}
}

/// Source text between the root's start and end tags.
///
/// Child node ranges are not used for the end: adjacent text and CDATA merge into one
/// text node whose range covers only the first piece.
fn inner_markup<'a>(text: &'a str, root: Node<'_, '_>) -> &'a str {
	let Some(first) = root.first_child() else {
		return "";
	};
	let range = root.range();
	match text[range.clone()].rfind("</") {
		Some(close) => &text[first.range().start..range.start + close],
		None => "",
	}
}

/// First entity reference in `markup` that is neither predefined nor a character
/// reference. Comments, CDATA sections and processing instructions are skipped.
fn declared_entity_reference(markup: &str) -> Option<&str> {
	let mut rest = markup;
	while let Some(at) = rest.find(['&', '<']) {
		rest = &rest[at..];
		if rest.starts_with('&') {
			let end = rest.find(';')?;
			let name = &rest[1..end];
			if !name.starts_with('#') && !PREDEFINED_ENTITIES.contains(&name) {
				return Some(name);
			}
			rest = &rest[end + 1..];
			continue;
		}

		let skip_to = [("<!--", "-->"), ("<![CDATA[", "]]>"), ("<?", "?>")]
			.into_iter()
			.find(|(open, _)| rest.starts_with(open));
		match skip_to {
			Some((open, close)) => {
				let end = rest[open.len()..].find(close)?;
				rest = &rest[open.len() + end + close.len()..];
			}
			None => rest = &rest[1..],
		}
	}
	None
}

fn text_content(node: Node<'_, '_>) -> String {
	let text: String = node
		.descendants()
		.filter(Node::is_text)
		.filter_map(|n| n.text())
		.collect();
	text.trim().to_owned()
}

fn push_attr(out: &mut String, name: &str, value: &str) {
	out.push(' ');
	out.push_str(name);
	out.push_str("=\"");
	out.push_str(&escape_attr(value));
	out.push('"');
}

/// Escapes a value for use inside a double-quoted attribute.
fn escape_attr(value: &str) -> Cow<'_, str> {
	if !value.contains(['&', '<', '>', '"']) {
		return Cow::Borrowed(value);
	}
	let mut escaped = String::with_capacity(value.len() + 8);
	for c in value.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			c => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}
