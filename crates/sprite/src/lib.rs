//! Sprite registry for SVG icons.
//!
//! # Purpose
//!
//! Build pipelines reference icons one source file at a time. This crate collects those
//! icons into shared sprite documents, where each icon becomes a uniquely named `<symbol>`
//! that downstream code can address by fragment (`sprite.svg#icon-home`).
//!
//! # Mental Model
//!
//! 1. **Lookup:** every registration call asks the [`SpriteRegistry`] for the [`Sprite`]
//!    matching its output name. The first call for a name creates it.
//! 2. **Registration:** [`Sprite::add_icon`] parses the optimized markup into an
//!    [`SvgDocument`] and inserts or replaces the [`Icon`] keyed by source path.
//! 3. **Addressing:** the returned [`Icon`] produces symbol and view URLs. The sprite
//!    records which resource first asked for a URL ([`Sprite::record_url_query`]) so the
//!    caller can decide whether a cache-busting marker is appropriate.
//! 4. **Emission:** an external flush step reads [`Sprite::composed_document`] for each
//!    sprite in [`SpriteRegistry::sprites`] and writes it out verbatim.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`SpriteRegistry`] | Table of sprites keyed by output name. |
//! | [`Sprite`] | Ordered icon collection plus URL-base record. |
//! | [`Icon`] | Immutable snapshot of one registered icon. |
//! | [`SvgDocument`] | Parsed view box, title and inner markup of one icon. |
//!
//! # Concurrency
//!
//! - **Registry:** read-locked fast path; insert-if-absent under the write lock.
//! - **Sprite:** one mutex over icons, symbol index and URL base. Markup is parsed before
//!   the lock is taken, so contention covers only map updates.
//!
//! # Invariants
//!
//! - At most one [`Sprite`] per name within a registry.
//! - Source paths are unique within a sprite; re-registration replaces in place.
//! - Symbol ids are unique within a sprite; a clash between two source paths is a
//!   [`SpriteError::NamingConflict`] and leaves the sprite untouched.
//! - Composed symbol order equals first-registration order.

mod document;
mod error;
mod icon;
mod registry;
mod sprite;

pub use document::SvgDocument;
pub use error::{ParseError, SpriteError};
pub use icon::Icon;
pub use registry::SpriteRegistry;
pub use sprite::{Sprite, UrlBase, UrlOrigin};

/// Namespace of SVG elements.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Namespace bound to the `xlink` prefix on every composed sprite.
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
