//! The [maxp](https://docs.microsoft.com/en-us/typography/opentype/spec/maxp) table

use types::Tag;

use crate::{FontData, FontRead, ReadError};

/// 'maxp'
pub const TAG: Tag = Tag::new(b"maxp");

/// The [maxp](https://docs.microsoft.com/en-us/typography/opentype/spec/maxp)
/// (maximum profile) table.
///
/// Only the glyph count is read; the remaining fields are hinting limits.
#[derive(Clone, Copy, Debug)]
pub struct Maxp {
    num_glyphs: u16,
}

impl FontRead<'_> for Maxp {
    fn read(data: FontData) -> Result<Self, ReadError> {
        // version
        data.read_at(4).map(|num_glyphs| Maxp { num_glyphs })
    }
}

impl Maxp {
    /// The number of glyphs in the font.
    pub fn num_glyphs(&self) -> u16 {
        self.num_glyphs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_glyphs() {
        let data = sfnt_test_data::tables::maxp(258);
        assert_eq!(Maxp::read(FontData::new(&data)).unwrap().num_glyphs(), 258);
        assert!(Maxp::read(FontData::new(&data[..5])).is_err());
    }
}
