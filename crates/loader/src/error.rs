//! Error types for loader configuration and icon loading.

use sprig_sprite::SpriteError;
use thiserror::Error;

/// Loader options rejected before any icon reaches the registry.
#[derive(Debug, Error)]
pub enum ConfigurationError {
	/// `sprite-filename` is empty or whitespace.
	#[error("sprite filename must not be empty")]
	EmptySpriteFilename,

	/// `symbol-id` is empty.
	#[error("symbol id template must not be empty")]
	EmptySymbolIdTemplate,

	/// A `[...]` placeholder the template language does not define.
	#[error("unknown placeholder [{0}] in symbol id template")]
	UnknownPlaceholder(String),

	/// A `[` without a matching `]`.
	#[error("unterminated placeholder at byte {0} in symbol id template")]
	UnterminatedPlaceholder(usize),

	/// Options file is not valid TOML or does not match the options schema.
	#[error("invalid loader options: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Failure to load one icon. Other icons in the same sprite are unaffected.
///
/// Configuration problems never appear here: they are reported as [`ConfigurationError`]
/// when the loader is constructed.
#[derive(Debug, Error)]
pub enum LoadError {
	#[error(transparent)]
	Sprite(#[from] SpriteError),

	/// The symbol-id template expanded to nothing for this file.
	#[error("symbol id template produced an empty id for {source_path}")]
	EmptySymbolId { source_path: String },
}
