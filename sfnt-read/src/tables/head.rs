//! The [head](https://docs.microsoft.com/en-us/typography/opentype/spec/head) table

use types::{BoundingBox, Fixed, Tag};

use crate::{FontData, FontRead, ReadError};

/// 'head'
pub const TAG: Tag = Tag::new(b"head");

/// The value of the `magicNumber` field.
pub const MAGIC_NUMBER: u32 = 0x5F0F3CF5;

/// The [head](https://docs.microsoft.com/en-us/typography/opentype/spec/head)
/// (font header) table.
#[derive(Clone, Debug)]
pub struct Head<'a> {
    data: FontData<'a>,
    font_revision: Fixed,
    units_per_em: u16,
    bbox: BoundingBox<i16>,
}

impl<'a> FontRead<'a> for Head<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        // majorVersion, minorVersion
        cursor.skip(4)?;
        let font_revision = cursor.read()?;
        // checksumAdjustment
        cursor.skip(4)?;
        let magic: u32 = cursor.read()?;
        if magic != MAGIC_NUMBER {
            return Err(ReadError::InvalidFormat(magic as i64));
        }
        // flags
        cursor.skip(2)?;
        let units_per_em = cursor.read()?;
        // created, modified
        cursor.skip(16)?;
        let bbox = BoundingBox {
            x_min: cursor.read()?,
            y_min: cursor.read()?,
            x_max: cursor.read()?,
            y_max: cursor.read()?,
        };
        // macStyle, lowestRecPPEM, fontDirectionHint
        cursor.skip(6)?;
        Ok(Head {
            data,
            font_revision,
            units_per_em,
            bbox,
        })
    }
}

impl Head<'_> {
    /// Set by font manufacturer.
    pub fn font_revision(&self) -> Fixed {
        self.font_revision
    }

    /// Font design units per em.
    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// The union of all glyph bounding boxes.
    pub fn bbox(&self) -> BoundingBox<i16> {
        self.bbox
    }

    /// 0 for short offsets (Offset16), 1 for long (Offset32).
    ///
    /// Only meaningful for fonts with TrueType outlines.
    pub fn index_to_loc_format(&self) -> Result<i16, ReadError> {
        let mut cursor = self.data.cursor();
        cursor.seek_from_end(4)?;
        cursor.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfnt_test_data::tables;

    #[test]
    fn read_fields() {
        let data = tables::head(2048, [-10, -300, 1200, 900], 1);
        let head = Head::read(FontData::new(&data)).unwrap();
        assert_eq!(head.units_per_em(), 2048);
        assert_eq!(
            head.bbox(),
            BoundingBox {
                x_min: -10,
                y_min: -300,
                x_max: 1200,
                y_max: 900,
            }
        );
        assert_eq!(head.index_to_loc_format(), Ok(1));
        assert_eq!(head.font_revision(), Fixed::ONE);
    }

    #[test]
    fn bad_magic() {
        let mut data = tables::head(1000, [0; 4], 0);
        data[12] = 0;
        let err = Head::read(FontData::new(&data)).unwrap_err();
        assert_eq!(err, ReadError::InvalidFormat(0x000F3CF5));
        assert_eq!(err.kind(), crate::ErrorKind::UnsupportedFormat);
    }

    #[test]
    fn truncated() {
        let data = tables::head(1000, [0; 4], 0);
        assert_eq!(
            Head::read(FontData::new(&data[..40])).unwrap_err(),
            ReadError::OutOfBounds
        );
    }
}
