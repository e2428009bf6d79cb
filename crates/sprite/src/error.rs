//! Error types for icon parsing and sprite mutation.

use thiserror::Error;

/// Markup handed to [`crate::SvgDocument::parse`] is not a well-formed SVG document.
#[derive(Debug, Error)]
pub enum ParseError {
	/// Markup bytes are not valid UTF-8.
	#[error("markup is not valid UTF-8: {0}")]
	Utf8(#[from] std::str::Utf8Error),

	/// Markup is not well-formed XML.
	#[error("malformed XML: {0}")]
	Xml(#[from] roxmltree::Error),

	/// Document parsed, but its root element is not `<svg>`.
	#[error("root element is <{root}>, expected <svg>")]
	NotSvg {
		/// Local name of the offending root element.
		root: String,
	},

	/// Content references an entity declared in the icon's DTD.
	#[error("reference to DTD-declared entity &{name}; is not supported")]
	DeclaredEntity {
		/// Name of the entity.
		name: String,
	},
}

/// Rejected [`crate::Sprite::add_icon`] call. The sprite is left unchanged.
#[derive(Debug, Error)]
pub enum SpriteError {
	/// Icon markup failed to parse.
	#[error("failed to parse {source_path}: {source}")]
	Parse {
		source_path: String,
		#[source]
		source: ParseError,
	},

	/// Two different source paths resolved to the same symbol id.
	#[error(
		"symbol id {symbol_id:?} in sprite {sprite:?} is already used by {existing}, cannot assign it to {incoming}"
	)]
	NamingConflict {
		sprite: String,
		symbol_id: String,
		existing: String,
		incoming: String,
	},
}
