//! test data shared between the sfnt crates.
//!
//! Everything here is generated in code: each helper returns the raw bytes
//! of a table (or a whole font) so tests can describe exactly the case they
//! exercise.

pub mod bebuffer;
pub mod cmap;
pub mod font_builder;
pub mod glyf;
pub mod tables;

pub use sfnt_types as types;
