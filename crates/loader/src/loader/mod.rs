use std::sync::Arc;

use serde::Serialize;
use sprig_sprite::{Icon, SpriteRegistry};
use tracing::debug;

use crate::error::{ConfigurationError, LoadError};
use crate::options::LoaderOptions;
use crate::policy::CacheBustPolicy;
use crate::template::SymbolIdTemplate;

/// One icon handed over by the build tool.
#[derive(Debug, Clone, Copy)]
pub struct IconRequest<'a> {
	source_path: &'a str,
	markup: &'a [u8],
	content_hash: &'a str,
	resource_path: Option<&'a str>,
	policy: CacheBustPolicy,
}

impl<'a> IconRequest<'a> {
	/// Request for the icon at `source_path` with already-optimized `markup`.
	pub fn new(source_path: &'a str, markup: &'a [u8]) -> Self {
		Self {
			source_path,
			markup,
			content_hash: "",
			resource_path: None,
			policy: CacheBustPolicy::default(),
		}
	}

	/// Content hash substituted for `[hash]` placeholders.
	pub fn content_hash(mut self, hash: &'a str) -> Self {
		self.content_hash = hash;
		self
	}

	/// Module asking for the icon's URLs. Defaults to the source path.
	pub fn resource_path(mut self, path: &'a str) -> Self {
		self.resource_path = Some(path);
		self
	}

	pub fn policy(mut self, policy: CacheBustPolicy) -> Self {
		self.policy = policy;
		self
	}
}

/// Addresses and metadata for one loaded icon, ready to be serialized for application
/// code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconMetadata {
	/// Symbol id inside the sprite.
	pub id: String,
	/// Public URL of the icon's symbol, for `<use>` references.
	pub url: String,
	/// Public URL for displaying the icon on its own.
	pub view_url: String,
	pub view_box: String,
	pub title: String,
}

impl IconMetadata {
	/// Builds metadata for `icon`, prefixing both URLs with `public_path`.
	pub fn from_icon(icon: &Icon, public_path: &str, cache_bust: bool) -> Self {
		let document = icon.document();
		Self {
			id: icon.symbol_id().to_owned(),
			url: format!("{public_path}{}", icon.url_to_symbol(cache_bust)),
			view_url: format!("{public_path}{}", icon.url_to_view(cache_bust)),
			view_box: document.view_box().to_owned(),
			title: document.title().to_owned(),
		}
	}
}

/// Routes icons into one sprite of a shared registry.
#[derive(Debug)]
pub struct SpriteLoader {
	registry: Arc<SpriteRegistry>,
	options: LoaderOptions,
	template: SymbolIdTemplate,
}

impl SpriteLoader {
	/// Validates `options` and binds them to `registry`.
	pub fn new(
		registry: Arc<SpriteRegistry>,
		options: LoaderOptions,
	) -> Result<Self, ConfigurationError> {
		let template = options.symbol_id_template()?;
		Ok(Self {
			registry,
			options,
			template,
		})
	}

	pub fn registry(&self) -> &Arc<SpriteRegistry> {
		&self.registry
	}

	pub fn options(&self) -> &LoaderOptions {
		&self.options
	}

	/// Whether requests need a content hash at all.
	pub fn needs_content_hash(&self) -> bool {
		self.template.uses_hash()
	}

	/// Registers one icon and returns its metadata.
	///
	/// The sprite's URL base is recorded only after the icon is accepted, so a rejected
	/// icon never becomes the resource that established it.
	pub fn load(&self, request: &IconRequest<'_>) -> Result<IconMetadata, LoadError> {
		let symbol_id = self.template.render(request.source_path, request.content_hash);
		if symbol_id.is_empty() {
			return Err(LoadError::EmptySymbolId {
				source_path: request.source_path.to_owned(),
			});
		}

		let sprite = self.registry.get_sprite(&self.options.sprite_filename);
		let icon = sprite.add_icon(request.source_path, &symbol_id, request.markup)?;

		let resource = request.resource_path.unwrap_or(request.source_path);
		let origin = sprite.record_url_query(resource);
		let cache_bust = request.policy.should_bust(origin);
		debug!(
			sprite = %sprite.name(),
			source = %request.source_path,
			symbol = %symbol_id,
			?origin,
			cache_bust,
			"icon loaded"
		);

		Ok(IconMetadata::from_icon(
			&icon,
			&self.options.public_path,
			cache_bust,
		))
	}
}
