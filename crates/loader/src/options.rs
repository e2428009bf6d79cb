//! Loader options.
//!
//! Options usually arrive from the build tool's configuration. They can also be read from
//! a TOML table:
//!
//! ```toml
//! sprite-filename = "img/sprite.svg"
//! symbol-id = "icon-[name]-[hash:5]"
//! public-path = "/assets/"
//! ```

use serde::Deserialize;

use crate::error::ConfigurationError;
use crate::template::SymbolIdTemplate;

/// Options shared by every icon routed through one [`crate::SpriteLoader`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct LoaderOptions {
	/// Output name of the sprite icons are merged into. Also the key in the registry.
	pub sprite_filename: String,
	/// Symbol-id template, see [`SymbolIdTemplate`].
	pub symbol_id: String,
	/// Prefix prepended verbatim to every URL handed back to application code.
	pub public_path: String,
}

impl Default for LoaderOptions {
	fn default() -> Self {
		Self {
			sprite_filename: "sprite.svg".to_owned(),
			symbol_id: "[name]".to_owned(),
			public_path: String::new(),
		}
	}
}

impl LoaderOptions {
	/// Parses and validates options from TOML. Missing keys take their defaults.
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigurationError> {
		let options: Self = toml::from_str(input)?;
		options.validate()?;
		Ok(options)
	}

	/// Checks the sprite filename and the symbol-id template.
	pub fn validate(&self) -> Result<(), ConfigurationError> {
		self.symbol_id_template().map(|_| ())
	}

	/// Validates and returns the parsed symbol-id template.
	pub fn symbol_id_template(&self) -> Result<SymbolIdTemplate, ConfigurationError> {
		if self.sprite_filename.trim().is_empty() {
			return Err(ConfigurationError::EmptySpriteFilename);
		}
		SymbolIdTemplate::parse(&self.symbol_id)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::LoaderOptions;
	use crate::error::ConfigurationError;

	#[test]
	fn empty_table_uses_defaults() {
		assert_eq!(LoaderOptions::from_toml_str("").unwrap(), LoaderOptions::default());
	}

	#[test]
	fn reads_kebab_case_keys() {
		let options = LoaderOptions::from_toml_str(
			r#"
			sprite-filename = "img/sprite.svg"
			symbol-id = "icon-[name]"
			public-path = "/assets/"
			"#,
		)
		.unwrap();
		assert_eq!(options.sprite_filename, "img/sprite.svg");
		assert_eq!(options.symbol_id, "icon-[name]");
		assert_eq!(options.public_path, "/assets/");
	}

	#[test]
	fn unknown_keys_are_rejected() {
		let err = LoaderOptions::from_toml_str("extract = true").unwrap_err();
		assert!(matches!(err, ConfigurationError::Toml(_)));
	}

	#[test]
	fn blank_sprite_filename_is_rejected() {
		let err = LoaderOptions::from_toml_str(r#"sprite-filename = "  ""#).unwrap_err();
		assert!(matches!(err, ConfigurationError::EmptySpriteFilename));
	}

	#[test]
	fn bad_template_is_rejected() {
		let err = LoaderOptions::from_toml_str(r#"symbol-id = "[hash:abc]""#).unwrap_err();
		assert!(matches!(err, ConfigurationError::UnknownPlaceholder(_)));
	}
}
