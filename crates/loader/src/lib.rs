//! Boundary between a build tool and the sprite registry.
//!
//! The build tool calls [`SpriteLoader::load`] once per icon source file it encounters.
//! This crate owns everything that happens before an icon reaches the core registry and
//! after it comes back:
//!
//! - validating [`LoaderOptions`] (sprite filename, symbol-id template, public path)
//! - expanding the [`SymbolIdTemplate`] with the file's name and an externally computed
//!   content hash
//! - applying the [`CacheBustPolicy`] to the sprite's [`sprig_sprite::UrlOrigin`]
//! - returning a typed [`IconMetadata`] that emitters serialize into whatever module format
//!   the target needs
//!
//! Optimizing markup, hashing file contents and writing the composed sprite to disk stay
//! with the caller.

mod error;
mod loader;
mod options;
mod policy;
mod template;

pub use error::{ConfigurationError, LoadError};
pub use loader::{IconMetadata, IconRequest, SpriteLoader};
pub use options::LoaderOptions;
pub use policy::CacheBustPolicy;
pub use template::SymbolIdTemplate;
