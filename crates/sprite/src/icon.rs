use std::sync::{Arc, Weak};

use crate::document::SvgDocument;
use crate::sprite::Sprite;

/// Snapshot of one registered icon.
///
/// Returned by [`Sprite::add_icon`] and [`Sprite::icon`]. Cloning is cheap. A later
/// re-registration of the same source path stores a new snapshot in the sprite; handles
/// already given out keep describing the registration they came from.
#[derive(Debug, Clone)]
pub struct Icon {
	pub(crate) source_path: Arc<str>,
	pub(crate) symbol_id: Arc<str>,
	pub(crate) document: Arc<SvgDocument>,
	sprite_name: Arc<str>,
	sprite: Weak<Sprite>,
}

impl Icon {
	pub(crate) fn new(
		source_path: Arc<str>,
		symbol_id: Arc<str>,
		document: Arc<SvgDocument>,
		sprite_name: Arc<str>,
		sprite: Weak<Sprite>,
	) -> Self {
		Self {
			source_path,
			symbol_id,
			document,
			sprite_name,
			sprite,
		}
	}

	/// Source file this icon was registered from.
	pub fn source_path(&self) -> &str {
		&self.source_path
	}

	pub fn symbol_id(&self) -> &str {
		&self.symbol_id
	}

	pub fn document(&self) -> &SvgDocument {
		&self.document
	}

	/// Output name of the owning sprite.
	pub fn sprite_name(&self) -> &str {
		&self.sprite_name
	}

	/// Owning sprite, if its registry still holds it.
	pub fn sprite(&self) -> Option<Arc<Sprite>> {
		self.sprite.upgrade()
	}

	/// Address of this icon's `<symbol>` inside the sprite, for `<use>` references.
	///
	/// Produces `SPRITE#ID`. With `cache_bust`, a marker derived from the symbol id is
	/// inserted before the fragment (`SPRITE?ID#ID`) so that consumers holding a stale copy
	/// of an unhashed sprite file fetch it again.
	pub fn url_to_symbol(&self, cache_bust: bool) -> String {
		self.url(cache_bust)
	}

	/// Address for displaying this icon on its own, e.g. from an `<img>` or CSS `url()`.
	///
	/// Structurally identical to [`Icon::url_to_symbol`]; the two are kept apart so that
	/// renderers can choose the form their target expects.
	pub fn url_to_view(&self, cache_bust: bool) -> String {
		self.url(cache_bust)
	}

	fn url(&self, cache_bust: bool) -> String {
		let marker_len = if cache_bust { self.symbol_id.len() + 1 } else { 0 };
		let mut url =
			String::with_capacity(self.sprite_name.len() + marker_len + self.symbol_id.len() + 1);
		url.push_str(&self.sprite_name);
		if cache_bust {
			url.push('?');
			url.push_str(&self.symbol_id);
		}
		url.push('#');
		url.push_str(&self.symbol_id);
		url
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use crate::SpriteRegistry;

	const ARROW: &str = r#"<svg viewBox="0 0 24 24"><path d="M5 12h14"/></svg>"#;

	#[test]
	fn symbol_url_points_into_sprite() {
		let registry = SpriteRegistry::new();
		let icon = registry
			.get_sprite("img/sprite.svg")
			.add_icon("arrow.svg", "icon-arrow", ARROW)
			.unwrap();
		assert_eq!(icon.url_to_symbol(false), "img/sprite.svg#icon-arrow");
		assert_eq!(icon.url_to_view(false), "img/sprite.svg#icon-arrow");
	}

	#[test]
	fn cache_bust_only_inserts_marker() {
		let registry = SpriteRegistry::new();
		let icon = registry
			.get_sprite("sprite.svg")
			.add_icon("arrow.svg", "icon-arrow-9c1", ARROW)
			.unwrap();

		let plain = icon.url_to_symbol(false);
		let busted = icon.url_to_symbol(true);
		assert_eq!(busted, "sprite.svg?icon-arrow-9c1#icon-arrow-9c1");

		let (base, fragment) = plain.split_once('#').unwrap();
		let (busted_base, busted_fragment) = busted.split_once('#').unwrap();
		assert_eq!(fragment, busted_fragment);
		assert_eq!(busted_base.strip_prefix(base), Some("?icon-arrow-9c1"));

		assert_eq!(icon.url_to_view(true), busted);
	}
}
