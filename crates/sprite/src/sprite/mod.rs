//! One named sprite and its ordered icon collection.
//!
//! # Invariants
//!
//! - Source paths are unique keys; re-registering a path replaces its icon in place.
//! - Composition order is first-registration order.
//! - Symbol ids are unique; the symbol index always mirrors the icon map.
//! - A rejected [`Sprite::add_icon`] leaves icons, index and revision untouched.
//! - The URL base is written once, by the first [`Sprite::record_url_query`].

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use indexmap::IndexMap;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::document::SvgDocument;
use crate::error::SpriteError;
use crate::icon::Icon;

const SPRITE_OPEN: &str =
	r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">"#;
const SPRITE_CLOSE: &str = "</svg>";

/// Resource that first asked a sprite for a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBase {
	resource_path: Arc<str>,
	established_at: u64,
}

impl UrlBase {
	/// Resource path of the first URL query.
	pub fn resource_path(&self) -> &str {
		&self.resource_path
	}

	/// Registry-wide sequence number taken when the base was recorded.
	///
	/// Strictly increasing across all sprites of one registry, so bases can be ordered
	/// without relying on wall-clock time.
	pub fn established_at(&self) -> u64 {
		self.established_at
	}
}

/// How a URL query relates to the sprite's recorded [`UrlBase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlOrigin {
	/// This query recorded the base.
	Established,
	/// Same resource path as the recorded base, asking again.
	SameResource,
	/// A different resource path.
	OtherResource,
}

#[derive(Default)]
struct SpriteState {
	icons: IndexMap<Arc<str>, Icon>,
	/// symbol id -> source path
	by_symbol: FxHashMap<Arc<str>, Arc<str>>,
	url_base: Option<UrlBase>,
	revision: u64,
}

/// Named aggregate of icons, composed into a single SVG document on demand.
///
/// Obtained from [`crate::SpriteRegistry::get_sprite`]. All methods take `&self`; mutation
/// is serialized by an internal lock.
pub struct Sprite {
	name: Arc<str>,
	this: Weak<Sprite>,
	sequence: Arc<AtomicU64>,
	state: Mutex<SpriteState>,
}

impl Sprite {
	pub(crate) fn new(name: Arc<str>, sequence: Arc<AtomicU64>) -> Arc<Self> {
		Arc::new_cyclic(|this| Self {
			name,
			this: this.clone(),
			sequence,
			state: Mutex::new(SpriteState::default()),
		})
	}

	/// Output name this sprite was created under.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Registers or updates the icon for `source_path`.
	///
	/// A new path is appended. A known path has its document and symbol id replaced while
	/// keeping its position, so that incremental rebuilds compose to the same layout.
	///
	/// # Errors
	///
	/// - [`SpriteError::Parse`] if `markup` is not a well-formed SVG document.
	/// - [`SpriteError::NamingConflict`] if `symbol_id` already belongs to another path.
	///
	/// On error the sprite is unchanged.
	pub fn add_icon(
		&self,
		source_path: &str,
		symbol_id: &str,
		markup: impl AsRef<[u8]>,
	) -> Result<Icon, SpriteError> {
		let document =
			SvgDocument::parse(markup.as_ref()).map_err(|source| SpriteError::Parse {
				source_path: source_path.to_owned(),
				source,
			})?;
		let document = Arc::new(document);

		let mut state = self.state.lock();

		if let Some(owner) = state.by_symbol.get(symbol_id) {
			if owner.as_ref() != source_path {
				return Err(SpriteError::NamingConflict {
					sprite: self.name.to_string(),
					symbol_id: symbol_id.to_owned(),
					existing: owner.to_string(),
					incoming: source_path.to_owned(),
				});
			}
		}

		let key = match state.icons.get_key_value(source_path) {
			Some((key, _)) => Arc::clone(key),
			None => Arc::from(source_path),
		};
		let symbol_id: Arc<str> = Arc::from(symbol_id);
		let icon = Icon::new(
			Arc::clone(&key),
			Arc::clone(&symbol_id),
			document,
			Arc::clone(&self.name),
			self.this.clone(),
		);

		let previous = state.icons.insert(Arc::clone(&key), icon.clone());
		if let Some(previous) = &previous {
			if previous.symbol_id != symbol_id {
				state.by_symbol.remove(&previous.symbol_id);
			}
		}
		state.by_symbol.insert(symbol_id, key);
		state.revision += 1;

		debug!(
			sprite = %self.name,
			source = %icon.source_path,
			symbol = %icon.symbol_id,
			replaced = previous.is_some(),
			revision = state.revision,
			"icon registered"
		);

		Ok(icon)
	}

	/// Renders every icon as a `<symbol>` inside one `<svg>` root, in registration order.
	///
	/// The root declares the SVG and xlink namespaces and nothing else; each symbol carries
	/// its own view box. Output depends only on the current icons, so repeated calls
	/// without intervening registrations are byte-identical.
	pub fn composed_document(&self) -> String {
		let icons = self.icons();

		let body_len: usize = icons
			.iter()
			.map(|icon| icon.document.inner_markup().len() + icon.symbol_id.len() + 64)
			.sum();
		let mut out = String::with_capacity(SPRITE_OPEN.len() + body_len + SPRITE_CLOSE.len());
		out.push_str(SPRITE_OPEN);
		for icon in &icons {
			icon.document.write_symbol(&mut out, &icon.symbol_id);
		}
		out.push_str(SPRITE_CLOSE);

		trace!(sprite = %self.name, icons = icons.len(), bytes = out.len(), "sprite composed");
		out
	}

	/// Notes a URL query from `resource_path` and reports how it relates to the first one.
	///
	/// The first call records the [`UrlBase`] and returns [`UrlOrigin::Established`]. Later
	/// calls compare against the recorded resource path.
	pub fn record_url_query(&self, resource_path: &str) -> UrlOrigin {
		let mut state = self.state.lock();
		if let Some(base) = &state.url_base {
			return if base.resource_path.as_ref() == resource_path {
				UrlOrigin::SameResource
			} else {
				UrlOrigin::OtherResource
			};
		}

		let established_at = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
		state.url_base = Some(UrlBase {
			resource_path: Arc::from(resource_path),
			established_at,
		});
		debug!(sprite = %self.name, resource = %resource_path, established_at, "url base established");
		UrlOrigin::Established
	}

	/// Recorded URL base, if any query has happened yet.
	pub fn url_base(&self) -> Option<UrlBase> {
		self.state.lock().url_base.clone()
	}

	/// Icon registered for `source_path`.
	pub fn icon(&self, source_path: &str) -> Option<Icon> {
		self.state.lock().icons.get(source_path).cloned()
	}

	/// All icons in registration order.
	pub fn icons(&self) -> Vec<Icon> {
		self.state.lock().icons.values().cloned().collect()
	}

	pub fn len(&self) -> usize {
		self.state.lock().icons.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Number of accepted [`Sprite::add_icon`] calls.
	///
	/// Emitters can compare revisions to skip rewriting an unchanged sprite.
	pub fn revision(&self) -> u64 {
		self.state.lock().revision
	}
}

impl fmt::Debug for Sprite {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = self.state.lock();
		f.debug_struct("Sprite")
			.field("name", &self.name)
			.field("icons", &state.icons.len())
			.field("revision", &state.revision)
			.field("url_base", &state.url_base)
			.finish()
	}
}
