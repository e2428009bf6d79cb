//! Symbol-id templates.
//!
//! A template is literal text mixed with bracketed placeholders:
//!
//! | Placeholder | Expands to |
//! |-------------|------------|
//! | `[name]` | file stem of the source path (`home` for `icons/home.svg`) |
//! | `[ext]` | extension without the dot (`svg`) |
//! | `[folder]` | name of the directory containing the file (`icons`) |
//! | `[hash]` | content hash supplied by the caller |
//! | `[hash:N]` | first `N` characters of the content hash |

use std::ffi::OsStr;
use std::path::Path;
use std::str::FromStr;

use crate::error::ConfigurationError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Literal(String),
	Name,
	Ext,
	Folder,
	Hash(Option<usize>),
}

/// Parsed symbol-id template. See the module docs for the placeholder set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolIdTemplate {
	segments: Vec<Segment>,
}

impl SymbolIdTemplate {
	/// Parses `template`.
	///
	/// # Errors
	///
	/// [`ConfigurationError`] for an empty template, an unknown placeholder, or a `[` with
	/// no closing `]`.
	pub fn parse(template: &str) -> Result<Self, ConfigurationError> {
		if template.is_empty() {
			return Err(ConfigurationError::EmptySymbolIdTemplate);
		}

		let mut segments = Vec::new();
		let mut rest = template;
		let mut offset = 0;
		while let Some(open) = rest.find('[') {
			if open > 0 {
				segments.push(Segment::Literal(rest[..open].to_owned()));
			}
			let after = &rest[open + 1..];
			let close = after
				.find(']')
				.ok_or(ConfigurationError::UnterminatedPlaceholder(offset + open))?;
			segments.push(placeholder(&after[..close])?);

			let consumed = open + close + 2;
			offset += consumed;
			rest = &rest[consumed..];
		}
		if !rest.is_empty() {
			segments.push(Segment::Literal(rest.to_owned()));
		}

		Ok(Self { segments })
	}

	/// Whether the template references the content hash.
	///
	/// Callers can skip hashing entirely when this is `false`.
	pub fn uses_hash(&self) -> bool {
		self.segments.iter().any(|s| matches!(s, Segment::Hash(_)))
	}

	/// Expands the template for one icon.
	pub fn render(&self, source_path: &str, content_hash: &str) -> String {
		let path = Path::new(source_path);
		let name = path.file_stem().and_then(OsStr::to_str).unwrap_or_default();
		let ext = path.extension().and_then(OsStr::to_str).unwrap_or_default();
		let folder = path
			.parent()
			.and_then(Path::file_name)
			.and_then(OsStr::to_str)
			.unwrap_or_default();

		let mut id = String::new();
		for segment in &self.segments {
			match segment {
				Segment::Literal(text) => id.push_str(text),
				Segment::Name => id.push_str(name),
				Segment::Ext => id.push_str(ext),
				Segment::Folder => id.push_str(folder),
				Segment::Hash(None) => id.push_str(content_hash),
				Segment::Hash(Some(len)) => id.extend(content_hash.chars().take(*len)),
			}
		}
		id
	}
}

impl FromStr for SymbolIdTemplate {
	type Err = ConfigurationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

fn placeholder(token: &str) -> Result<Segment, ConfigurationError> {
	let unknown = || ConfigurationError::UnknownPlaceholder(token.to_owned());
	match token {
		"name" => Ok(Segment::Name),
		"ext" => Ok(Segment::Ext),
		"folder" => Ok(Segment::Folder),
		"hash" => Ok(Segment::Hash(None)),
		_ => {
			let len = token.strip_prefix("hash:").ok_or_else(unknown)?;
			match len.parse::<usize>() {
				Ok(len) if len > 0 => Ok(Segment::Hash(Some(len))),
				_ => Err(unknown()),
			}
		}
	}
}
