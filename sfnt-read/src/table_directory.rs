//! The sfnt header and [table directory].
//!
//! [table directory]: https://learn.microsoft.com/en-us/typography/opentype/spec/otff#table-directory

use alloc::collections::BTreeMap;

use types::{Tag, CFF_SFNT_VERSION, TRUE_SFNT_VERSION, TT_SFNT_VERSION};

use crate::{FontData, ReadError};

/// Size of one table record in the directory.
pub const TABLE_RECORD_LEN: usize = 16;

/// The kind of outlines an sfnt declares in its header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SfntFormat {
    /// TrueType outlines in `glyf`/`loca`.
    TrueType,
    /// OpenType with CFF outlines.
    OpenType,
}

impl SfntFormat {
    /// Decode the 32-bit scalar type at the start of the font.
    pub fn from_version(version: u32) -> Result<Self, ReadError> {
        match version {
            TT_SFNT_VERSION | TRUE_SFNT_VERSION => Ok(SfntFormat::TrueType),
            CFF_SFNT_VERSION => Ok(SfntFormat::OpenType),
            other => Err(ReadError::InvalidSfnt(other)),
        }
    }
}

/// One entry in the table directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableRecord {
    /// Table identifier.
    pub tag: Tag,
    /// Checksum of the table data.
    pub checksum: u32,
    /// Offset from the beginning of the font data.
    pub offset: u32,
    /// Length of the table in bytes.
    pub length: u32,
}

/// The table directory of an sfnt font.
///
/// Records are keyed by tag. If a tag occurs more than once, the last
/// record wins.
#[derive(Clone, Debug)]
pub struct TableDirectory {
    format: SfntFormat,
    num_tables: u16,
    records: BTreeMap<Tag, TableRecord>,
}

impl TableDirectory {
    /// Read the sfnt header and table records.
    pub fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let format = SfntFormat::from_version(cursor.read()?)?;
        let num_tables: u16 = cursor.read()?;
        // searchRange, entrySelector, rangeShift
        cursor.skip(6)?;
        let mut records = BTreeMap::new();
        for _ in 0..num_tables {
            let record = TableRecord {
                tag: cursor.read()?,
                checksum: cursor.read()?,
                offset: cursor.read()?,
                length: cursor.read()?,
            };
            records.insert(record.tag, record);
        }
        Ok(TableDirectory {
            format,
            num_tables,
            records,
        })
    }

    /// The outline format declared by the header.
    pub fn format(&self) -> SfntFormat {
        self.format
    }

    /// The number of tables declared by the header.
    pub fn num_tables(&self) -> u16 {
        self.num_tables
    }

    /// Returns the record for the given tag.
    pub fn get(&self, tag: Tag) -> Option<&TableRecord> {
        self.records.get(&tag)
    }

    /// Returns an iterator over the records, in tag order.
    pub fn records(&self) -> impl Iterator<Item = &TableRecord> + '_ {
        self.records.values()
    }
}
