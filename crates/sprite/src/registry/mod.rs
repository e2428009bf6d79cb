//! Sprite table keyed by output name.
//!
//! A registry is constructed by the host build and shared (typically as
//! `Arc<SpriteRegistry>`) with every registration site. Separate builds use separate
//! registries; nothing here is global.

use std::sync::Arc;
use std::sync::atomic::AtomicU64;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::sprite::Sprite;

/// Registry of sprites for one build.
///
/// Thread-safe; [`SpriteRegistry::get_sprite`] may be called from any number of
/// registration sites in any order.
#[derive(Default)]
pub struct SpriteRegistry {
	sprites: RwLock<FxHashMap<Arc<str>, Arc<Sprite>>>,
	/// Source of [`crate::UrlBase::established_at`] values for every sprite created here.
	sequence: Arc<AtomicU64>,
}

impl SpriteRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the sprite named `name`, creating an empty one on first use.
	///
	/// Creation is idempotent under races: when several callers ask for a new name at once,
	/// exactly one sprite is stored and all of them receive it. Validating `name` is the
	/// caller's responsibility.
	pub fn get_sprite(&self, name: &str) -> Arc<Sprite> {
		if let Some(sprite) = self.sprites.read().get(name) {
			return Arc::clone(sprite);
		}

		let mut sprites = self.sprites.write();
		if let Some(sprite) = sprites.get(name) {
			return Arc::clone(sprite);
		}

		let name: Arc<str> = Arc::from(name);
		let sprite = Sprite::new(Arc::clone(&name), Arc::clone(&self.sequence));
		sprites.insert(name, Arc::clone(&sprite));
		debug!(sprite = %sprite.name(), total = sprites.len(), "sprite created");
		sprite
	}

	/// Returns the sprite named `name` without creating it.
	pub fn get(&self, name: &str) -> Option<Arc<Sprite>> {
		self.sprites.read().get(name).cloned()
	}

	/// All sprites, sorted by name.
	pub fn sprites(&self) -> Vec<Arc<Sprite>> {
		let mut sprites: Vec<_> = self.sprites.read().values().cloned().collect();
		sprites.sort_by(|a, b| a.name().cmp(b.name()));
		sprites
	}

	pub fn len(&self) -> usize {
		self.sprites.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Drops every sprite, for starting an independent build run.
	///
	/// Handles obtained earlier stay usable but are no longer reachable from this
	/// registry; the next [`SpriteRegistry::get_sprite`] for their name creates a new
	/// sprite.
	pub fn reset(&self) {
		let dropped = std::mem::take(&mut *self.sprites.write());
		debug!(dropped = dropped.len(), "sprite registry reset");
	}
}

impl std::fmt::Debug for SpriteRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SpriteRegistry")
			.field("sprites", &self.sprites())
			.finish()
	}
}

#[cfg(test)]
mod tests;
