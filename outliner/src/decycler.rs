//! Cycle detection for composite glyph traversal.

use core::ops::{Deref, DerefMut};

use crate::{Error, GlyphId, COMPOSITE_RECURSION_LIMIT};

/// Tracks the chain of glyphs currently being expanded while a composite
/// glyph is loaded.
///
/// This is an extension of Floyd's tortoise and hare algorithm
/// (<https://en.wikipedia.org/wiki/Cycle_detection#Floyd's_tortoise_and_hare>)
/// to depth first traversals, as in `hb_decycler_t` in HarfBuzz. The chain
/// is kept in a fixed size array indexed by depth, which also bounds the
/// recursion.
pub(crate) struct Decycler {
    glyph_ids: [GlyphId; COMPOSITE_RECURSION_LIMIT],
    depth: usize,
}

impl Decycler {
    pub fn new() -> Self {
        Self {
            glyph_ids: [GlyphId::NOTDEF; COMPOSITE_RECURSION_LIMIT],
            depth: 0,
        }
    }

    /// Enters the glyph with the given identifier.
    ///
    /// Fails when the glyph is already part of the chain being expanded or
    /// when the chain is at its depth limit. Otherwise, returns a guard that
    /// leaves the glyph when dropped. The guard derefs to the decycler so it
    /// can be passed down to load the glyph's components.
    pub fn enter(&mut self, glyph_id: GlyphId) -> Result<DecyclerGuard<'_>, Error> {
        if self.depth >= COMPOSITE_RECURSION_LIMIT {
            return Err(Error::RecursionLimitExceeded(glyph_id));
        }
        // the tortoise sits at half the depth of the hare
        if self.depth > 0 && self.glyph_ids[self.depth / 2] == glyph_id {
            return Err(Error::CycleDetected(glyph_id));
        }
        self.glyph_ids[self.depth] = glyph_id;
        self.depth += 1;
        Ok(DecyclerGuard { decycler: self })
    }

    /// Number of glyphs in the current chain.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Default for Decycler {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) struct DecyclerGuard<'a> {
    decycler: &'a mut Decycler,
}

impl Deref for DecyclerGuard<'_> {
    type Target = Decycler;

    fn deref(&self) -> &Self::Target {
        self.decycler
    }
}

impl DerefMut for DecyclerGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.decycler
    }
}

impl Drop for DecyclerGuard<'_> {
    fn drop(&mut self) {
        self.decycler.depth -= 1;
    }
}
