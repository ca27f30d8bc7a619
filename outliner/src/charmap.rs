//! Mapping of characters (codepoints, not graphemes) to nominal glyph identifiers.
//!
//! The mapping is read from the first
//! [cmap](https://learn.microsoft.com/en-us/typography/opentype/spec/cmap)
//! encoding record on the Unicode platform. Lookups dispatch on the format
//! of the selected subtable; currently only
//! [format 4](https://learn.microsoft.com/en-us/typography/opentype/spec/cmap#format-4-segment-mapping-to-delta-values)
//! is read, so codepoints outside the Basic Multilingual Plane are never
//! mapped.

use raw::{
    tables::cmap::{CmapSubtable, CmapSubtableIter, CodepointRange, UNICODE_PLATFORM_ID},
    ReadError, TableProvider,
};

use crate::GlyphId;

/// Mapping of characters to nominal glyph identifiers.
#[derive(Clone, Debug)]
pub struct Charmap<'a> {
    subtable: CmapSubtable<'a>,
}

impl<'a> Charmap<'a> {
    /// Creates a new character map from the given font.
    ///
    /// Fails if the font has no `cmap` table, no Unicode encoding record,
    /// or if the selected subtable has an unsupported format.
    pub fn new(font: &impl TableProvider<'a>) -> Result<Self, ReadError> {
        let cmap = font.cmap()?;
        for record in cmap
            .encoding_records()
            .filter(|record| record.platform_id != UNICODE_PLATFORM_ID)
        {
            log::warn!(
                "skipping cmap subtable for platform {} encoding {}",
                record.platform_id,
                record.encoding_id
            );
        }
        Ok(Self {
            subtable: cmap.unicode_subtable()?,
        })
    }

    /// The selected subtable.
    pub fn subtable(&self) -> &CmapSubtable<'a> {
        &self.subtable
    }

    /// Maps a character to a nominal glyph identifier.
    ///
    /// Returns [`GlyphId::NOTDEF`] if the character is not mapped.
    pub fn map(&self, ch: impl Into<u32>) -> GlyphId {
        self.subtable.map_codepoint(ch)
    }

    /// Returns an iterator over the ranges of codepoints covered by each
    /// segment of the subtable.
    pub fn code_ranges(&self) -> impl Iterator<Item = CodepointRange> + 'a + Clone {
        self.subtable.code_ranges()
    }

    /// Returns an iterator over all mappings of codepoint to nominal glyph
    /// identifiers in the character map.
    pub fn mappings(&self) -> Mappings<'a> {
        Mappings(self.subtable.iter())
    }
}

/// Iterator over all mappings of character to nominal glyph identifier
/// in a character map.
///
/// Codepoints are yielded in segment order. Characters mapped to
/// [`GlyphId::NOTDEF`] are skipped.
#[derive(Clone)]
pub struct Mappings<'a>(CmapSubtableIter<'a>);

impl Iterator for Mappings<'_> {
    type Item = (u32, GlyphId);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}
