//! The [loca (Index to Location)][loca] table
//!
//! [loca]: https://docs.microsoft.com/en-us/typography/opentype/spec/loca

use core::ops::Range;

use types::{GlyphId, Tag};

use crate::{FontData, ReadError, ScalarArray};

/// 'loca'
pub const TAG: Tag = Tag::new(b"loca");

/// The [loca] table.
///
/// [loca]: https://docs.microsoft.com/en-us/typography/opentype/spec/loca
#[derive(Clone, Debug)]
pub enum Loca<'a> {
    Short(ScalarArray<'a, u16>),
    Long(ScalarArray<'a, u32>),
}

impl<'a> Loca<'a> {
    /// Read `num_glyphs + 1` offsets, in the width selected by `is_long`.
    pub fn read(data: FontData<'a>, is_long: bool, num_glyphs: u16) -> Result<Self, ReadError> {
        let len = num_glyphs as usize + 1;
        if is_long {
            data.read_array(0, len).map(Loca::Long)
        } else {
            data.read_array(0, len).map(Loca::Short)
        }
    }

    /// The number of glyphs covered by the table.
    pub fn len(&self) -> usize {
        match self {
            Loca::Short(data) => data.len().saturating_sub(1),
            Loca::Long(data) => data.len().saturating_sub(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` if the offsets are stored as u32.
    pub fn is_long(&self) -> bool {
        matches!(self, Loca::Long(_))
    }

    /// Attempt to return the byte offset for a given index.
    pub fn get_raw(&self, idx: usize) -> Option<u32> {
        match self {
            Loca::Short(data) => data.get(idx).map(|x| x as u32 * 2),
            Loca::Long(data) => data.get(idx),
        }
    }

    /// Returns the byte range of a glyph's data in the `glyf` table.
    ///
    /// An empty range means the glyph has no outline.
    pub fn glyph_range(&self, gid: GlyphId) -> Result<Range<usize>, ReadError> {
        let idx = gid.to_u16() as usize;
        let start = self.get_raw(idx).ok_or(ReadError::OutOfBounds)?;
        let end = self.get_raw(idx + 1).ok_or(ReadError::OutOfBounds)?;
        if end < start {
            return Err(ReadError::MalformedData("loca offsets must not decrease"));
        }
        Ok(start as usize..end as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfnt_test_data::tables;

    #[test]
    fn short_offsets_are_doubled() {
        let data = tables::loca_short(&[0, 10, 10, 32]);
        let loca = Loca::read(FontData::new(&data), false, 3).unwrap();
        assert!(!loca.is_long());
        assert_eq!(loca.len(), 3);
        assert_eq!(loca.glyph_range(GlyphId::new(0)), Ok(0..10));
        assert_eq!(loca.glyph_range(GlyphId::new(1)), Ok(10..10));
        assert_eq!(loca.glyph_range(GlyphId::new(2)), Ok(10..32));
        assert_eq!(
            loca.glyph_range(GlyphId::new(3)),
            Err(ReadError::OutOfBounds)
        );
    }

    #[test]
    fn long_offsets() {
        let data = tables::loca_long(&[0, 70000, 70004]);
        let loca = Loca::read(FontData::new(&data), true, 2).unwrap();
        assert!(loca.is_long());
        assert_eq!(loca.glyph_range(GlyphId::new(1)), Ok(70000..70004));
    }

    #[test]
    fn too_short_for_glyph_count() {
        let data = tables::loca_short(&[0, 10]);
        assert_eq!(
            Loca::read(FontData::new(&data), false, 2).unwrap_err(),
            ReadError::OutOfBounds
        );
    }

    #[test]
    fn decreasing_offsets() {
        let data = tables::loca_long(&[20, 10]);
        let loca = Loca::read(FontData::new(&data), true, 1).unwrap();
        assert!(matches!(
            loca.glyph_range(GlyphId::new(0)),
            Err(ReadError::MalformedData(_))
        ));
    }
}
