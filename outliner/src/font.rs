//! Font loading and glyph lookup.

use raw::{types::Fixed, FontRef, ReadError, SfntFormat, TableProvider};

use crate::{
    charmap::{Charmap, Mappings},
    glyf::TrueType,
    Bearings, BoundingBox, Error, Glyph, GlyphId, GlyphMetadata,
};

/// Global values read from the font header tables.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Outline flavor declared by the sfnt version.
    pub format: SfntFormat,
    /// Number of entries in the table directory.
    pub num_tables: u16,
    /// Number of glyphs from the `maxp` table.
    pub num_glyphs: u16,
    pub units_per_em: u16,
    /// Bounding box of all glyphs from the `head` table.
    pub bbox: BoundingBox,
    pub font_revision: Fixed,
}

/// Values specific to fonts with TrueType outlines.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrueTypeMetadata {
    /// `true` if the `loca` table stores 32-bit offsets.
    pub loca_is_long: bool,
}

/// A parsed font, ready to produce glyph outlines.
///
/// The font borrows the underlying data and reads tables lazily. Only the
/// header tables and the character map are validated up front.
#[derive(Clone, Debug)]
pub struct Font<'a> {
    font: FontRef<'a>,
    metadata: Metadata,
    charmap: Charmap<'a>,
    truetype: Option<TrueType<'a>>,
}

impl<'a> Font<'a> {
    /// Parses the table directory and the required tables of a font.
    ///
    /// Fails if the data is not an sfnt font, if `head`, `maxp` or `cmap`
    /// are missing or malformed, or if a TrueType font lacks valid `loca`
    /// and `glyf` tables.
    pub fn new(data: &'a [u8]) -> Result<Self, Error> {
        let font = FontRef::new(data)?;
        let head = font.head()?;
        let maxp = font.maxp()?;
        let metadata = Metadata {
            format: font.format(),
            num_tables: font.table_directory().num_tables(),
            num_glyphs: maxp.num_glyphs(),
            units_per_em: head.units_per_em(),
            bbox: head.bbox(),
            font_revision: head.font_revision(),
        };
        let charmap = Charmap::new(&font)?;
        let truetype = match metadata.format {
            SfntFormat::TrueType => {
                let loca_is_long = head.index_to_loc_format()? == 1;
                Some(TrueType::new(&font, loca_is_long)?)
            }
            SfntFormat::OpenType => None,
        };
        log::debug!(
            "loaded {:?} font with {} tables and {} glyphs",
            metadata.format,
            metadata.num_tables,
            metadata.num_glyphs
        );
        Ok(Self {
            font,
            metadata,
            charmap,
            truetype,
        })
    }

    /// Returns the underlying table provider.
    pub fn font_ref(&self) -> &FontRef<'a> {
        &self.font
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn format(&self) -> SfntFormat {
        self.metadata.format
    }

    /// Returns `true` if outlines are stored in the `glyf` table.
    pub fn is_truetype(&self) -> bool {
        self.truetype.is_some()
    }

    /// Returns the TrueType specific metadata, if the font has TrueType
    /// outlines.
    pub fn truetype(&self) -> Option<TrueTypeMetadata> {
        self.truetype.as_ref().map(TrueType::metadata)
    }

    pub fn charmap(&self) -> &Charmap<'a> {
        &self.charmap
    }

    /// Maps a character to a nominal glyph identifier.
    ///
    /// Unmapped characters map to [`GlyphId::NOTDEF`].
    pub fn glyph_index(&self, ch: impl Into<u32>) -> GlyphId {
        self.charmap.map(ch)
    }

    /// Decodes the glyph mapped to the given character.
    ///
    /// Unmapped characters produce the `.notdef` glyph.
    pub fn glyph(&self, ch: impl Into<u32>) -> Result<Glyph, Error> {
        self.glyph_from_index(self.glyph_index(ch))
    }

    /// Decodes the glyph with the given identifier.
    pub fn glyph_from_index(&self, gid: GlyphId) -> Result<Glyph, Error> {
        if gid.to_u16() >= self.metadata.num_glyphs {
            return Err(Error::GlyphNotFound(gid));
        }
        let truetype = self
            .truetype
            .as_ref()
            .ok_or(ReadError::Unsupported("CFF outlines"))?;
        let (bbox, outline) = truetype.outline(gid)?;
        let bearings = self.bearings(gid)?;
        Ok(Glyph {
            outline,
            metadata: GlyphMetadata { bbox, bearings },
        })
    }

    /// Returns the side bearings for the given glyph.
    ///
    /// Axes without a metrics table have zero bearings.
    pub fn bearings(&self, gid: GlyphId) -> Result<Bearings, Error> {
        Ok(Bearings::new(&self.font, gid)?)
    }

    /// Returns an iterator over all mapped characters and their nominal
    /// glyph identifiers.
    pub fn mappings(&self) -> Mappings<'a> {
        self.charmap.mappings()
    }

    /// Returns an iterator that decodes the glyph for each mapped character.
    ///
    /// Glyphs are decoded as the iterator advances, so a failure for one
    /// character does not prevent decoding the rest.
    pub fn glyphs(&self) -> Glyphs<'_, 'a> {
        Glyphs {
            font: self,
            mappings: self.mappings(),
        }
    }
}

/// Iterator over the decoded glyphs of all mapped characters in a font.
///
/// See [`Font::glyphs`].
#[derive(Clone)]
pub struct Glyphs<'b, 'a> {
    font: &'b Font<'a>,
    mappings: Mappings<'a>,
}

impl Iterator for Glyphs<'_, '_> {
    type Item = (u32, Result<Glyph, Error>);

    fn next(&mut self) -> Option<Self::Item> {
        let (ch, gid) = self.mappings.next()?;
        Some((ch, self.font.glyph_from_index(gid)))
    }
}
