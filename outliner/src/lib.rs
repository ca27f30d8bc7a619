//! Decoding of sfnt fonts into glyph outlines.
//!
//! Outliner sits above the low level table parsing provided by
//! [`sfnt-read`](sfnt_read) and turns a font binary into geometry: every
//! glyph becomes a list of closed [`Contour`]s made of cubic Bézier
//! [`Curve`]s, addressable by Unicode codepoint or by glyph index.
//!
//! ```no_run
//! # fn load(bytes: &[u8]) -> Result<(), outliner::Error> {
//! let font = outliner::Font::new(bytes)?;
//! let glyph = font.glyph('A')?;
//! for contour in &glyph.outline {
//!     for curve in contour.curves() {
//!         println!("{:?} -> {:?}", curve.p0, curve.p1);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Only TrueType (`glyf`) outlines are decoded. Fonts with CFF outlines load
//! and expose their metadata, character map and metrics, but outline
//! requests fail with an unsupported format error.

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Expose our "raw" underlying parser crate.
pub extern crate sfnt_read as raw;

mod charmap;
mod curve;
mod decycler;
mod error;
mod font;
mod glyf;
mod glyph;
mod metrics;

pub use charmap::{Charmap, Mappings};
pub use curve::{Contour, Curve};
pub use error::Error;
pub use font::{Font, Glyphs, Metadata, TrueTypeMetadata};
pub use glyph::{Glyph, GlyphMetadata};
pub use metrics::Bearings;

pub use raw::{ErrorKind, ReadError, SfntFormat};

/// Type for a glyph identifier.
pub type GlyphId = raw::types::GlyphId;

/// Type for a 4-byte tag used to identify font tables.
pub type Tag = raw::types::Tag;

/// Type for a point in font units.
pub type Point = raw::types::Point<f64>;

/// Type for a bounding box in font units.
pub type BoundingBox = raw::types::BoundingBox<i16>;

/// Limit for recursion when loading composite glyphs.
///
/// Deeper component chains fail with [`Error::RecursionLimitExceeded`].
pub const COMPOSITE_RECURSION_LIMIT: usize = 32;

/// Maximum number of components visited while loading a single glyph.
///
/// Nesting multiplies the component count, so a shallow composite can
/// still reference an enormous number of outlines.
pub const COMPOSITE_COMPONENT_LIMIT: usize = 4096;
