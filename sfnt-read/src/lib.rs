//! Reading sfnt font tables
//!
//! This crate provides memory safe zero-copy parsing of TrueType and
//! OpenType font files. It gives raw access to the tables needed to turn a
//! font binary into glyph outlines: the table directory, `head`, `maxp`,
//! `hhea`/`vhea`, `hmtx`/`vmtx`, `cmap`, `loca` and `glyf`.
//!
//! Where the raw data is not useful on its own, this crate also provides
//! the reference algorithm for interpreting it. For instance,
//! [mapping codepoints to glyph identifiers][cmap-impl] with a format 4
//! `cmap` subtable.
//!
//! For decoded outlines and metrics, see the `outliner` crate.
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_font_file = std::path::Path::new("");
//! use sfnt_read::{FontRef, TableProvider};
//! let font_bytes = std::fs::read(path_to_my_font_file).unwrap();
//! let font = FontRef::new(&font_bytes).expect("failed to read font data");
//! let head = font.head().expect("missing 'head' table");
//! let maxp = font.maxp().expect("missing 'maxp' table");
//!
//! println!("{} units per em, {} glyphs", head.units_per_em(), maxp.num_glyphs());
//! ```
//!
//! [cmap-impl]: tables::cmap::Cmap4::map_codepoint

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod array;
mod font_data;
mod read;
mod table_directory;
mod table_provider;
pub mod tables;

/// Public re-export of the sfnt-types crate.
pub extern crate sfnt_types as types;

pub use array::ScalarArray;
pub use font_data::{Cursor, FontData};
pub use read::{ErrorKind, FontRead, ReadError};
pub use table_directory::{SfntFormat, TableDirectory, TableRecord, TABLE_RECORD_LEN};
pub use table_provider::TableProvider;

use types::Tag;

/// Reference to an in-memory font.
///
/// This is a simple implementation of the [`TableProvider`] trait backed
/// by a borrowed slice containing font data.
#[derive(Clone, Debug)]
pub struct FontRef<'a> {
    data: FontData<'a>,
    table_directory: TableDirectory,
}

/// A table record along with the data it points to.
#[derive(Clone, Copy, Debug)]
pub struct Table<'a> {
    pub record: TableRecord,
    pub data: FontData<'a>,
}

impl<'a> FontRef<'a> {
    /// Creates a new reference to an in-memory font backed by the given data.
    ///
    /// The data must begin with a [table directory] to be considered valid.
    ///
    /// [table directory]: https://learn.microsoft.com/en-us/typography/opentype/spec/otff#table-directory
    pub fn new(data: &'a [u8]) -> Result<Self, ReadError> {
        let data = FontData::new(data);
        let table_directory = TableDirectory::read(data)?;
        Ok(FontRef {
            data,
            table_directory,
        })
    }

    /// Returns the underlying font data.
    pub fn data(&self) -> FontData<'a> {
        self.data
    }

    /// Returns the associated table directory.
    pub fn table_directory(&self) -> &TableDirectory {
        &self.table_directory
    }

    /// The outline format declared by the sfnt header.
    pub fn format(&self) -> SfntFormat {
        self.table_directory.format()
    }

    /// Returns the record and data for the table with the given tag.
    ///
    /// Fails with [`ReadError::TableIsMissing`] if there is no such table,
    /// and [`ReadError::OutOfBounds`] if its record points outside the font.
    pub fn table(&self, tag: Tag) -> Result<Table<'a>, ReadError> {
        let record = *self
            .table_directory
            .get(tag)
            .ok_or(ReadError::TableIsMissing(tag))?;
        let start = record.offset as usize;
        let end = start
            .checked_add(record.length as usize)
            .ok_or(ReadError::OutOfBounds)?;
        let data = self.data.slice(start..end).ok_or(ReadError::OutOfBounds)?;
        Ok(Table { record, data })
    }

    /// Returns the data for the table with the specified tag, if present.
    pub fn table_data(&self, tag: Tag) -> Option<FontData<'a>> {
        self.table(tag).ok().map(|table| table.data)
    }
}

impl<'a> TableProvider<'a> for FontRef<'a> {
    fn data_for_tag(&self, tag: Tag) -> Option<FontData<'a>> {
        self.table_data(tag)
    }

    fn expect_data_for_tag(&self, tag: Tag) -> Result<FontData<'a>, ReadError> {
        self.table(tag).map(|table| table.data)
    }
}

#[cfg(test)]
mod tests {
    use sfnt_test_data::{font_builder::FontBuilder, tables};
    use types::{Tag, CFF_SFNT_VERSION};

    use crate::{FontRef, ReadError, SfntFormat, TableProvider};

    #[test]
    fn table_lookup() {
        let head = tables::head(1000, [0, -200, 800, 900], 0);
        let maxp = tables::maxp(3);
        let font_data = FontBuilder::new()
            .add_raw(Tag::new(b"head"), head.clone())
            .add_raw(Tag::new(b"maxp"), maxp.clone())
            .build();
        let font = FontRef::new(&font_data).unwrap();
        assert_eq!(font.format(), SfntFormat::TrueType);
        assert_eq!(font.table_directory().num_tables(), 2);
        let table = font.table(Tag::new(b"head")).unwrap();
        assert_eq!(table.record.length as usize, head.len());
        assert_eq!(table.data.as_bytes(), &head[..]);
        assert_eq!(font.maxp().unwrap().num_glyphs(), 3);
        assert_eq!(
            font.table(Tag::new(b"glyf")).unwrap_err(),
            ReadError::TableIsMissing(Tag::new(b"glyf"))
        );
        assert!(font.table_data(Tag::new(b"cmap")).is_none());
    }

    #[test]
    fn cff_flavor() {
        let font_data = FontBuilder::new()
            .sfnt_version(CFF_SFNT_VERSION)
            .add_raw(Tag::new(b"maxp"), tables::maxp(1))
            .build();
        let font = FontRef::new(&font_data).unwrap();
        assert_eq!(font.format(), SfntFormat::OpenType);
    }

    #[test]
    fn record_out_of_bounds() {
        let mut font_data = FontBuilder::new()
            .add_raw(Tag::new(b"maxp"), tables::maxp(1))
            .build();
        // drop the table data, keeping only the header and directory
        font_data.truncate(12 + 16);
        let font = FontRef::new(&font_data).unwrap();
        assert_eq!(
            font.table(Tag::new(b"maxp")).unwrap_err(),
            ReadError::OutOfBounds
        );
        assert_eq!(font.maxp().unwrap_err(), ReadError::OutOfBounds);
    }

    #[test]
    fn not_a_font() {
        assert_eq!(
            FontRef::new(b"wOFF\0\0\0\0\0\0\0\0").unwrap_err(),
            ReadError::InvalidSfnt(u32::from_be_bytes(*b"wOFF"))
        );
        assert_eq!(FontRef::new(&[0, 1]).unwrap_err(), ReadError::OutOfBounds);
    }
}
