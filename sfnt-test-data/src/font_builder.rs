//! A builder for sfnt font files

use std::borrow::Cow;
use std::collections::BTreeMap;

use sfnt_types::{Tag, TT_SFNT_VERSION};

const TABLE_RECORD_LEN: usize = 16;

/// Build a font from some set of raw tables.
///
/// Tables are written in tag order, each padded to a four byte boundary.
#[derive(Debug, Clone)]
pub struct FontBuilder<'a> {
    sfnt_version: u32,
    tables: BTreeMap<Tag, Cow<'a, [u8]>>,
}

impl Default for FontBuilder<'_> {
    fn default() -> Self {
        Self {
            sfnt_version: TT_SFNT_VERSION,
            tables: BTreeMap::new(),
        }
    }
}

impl<'a> FontBuilder<'a> {
    /// Create a new builder to compile a binary font
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scalar type written at the start of the file.
    pub fn sfnt_version(&mut self, version: u32) -> &mut Self {
        self.sfnt_version = version;
        self
    }

    /// A builder method to add raw data for the provided tag
    pub fn add_raw(&mut self, tag: Tag, data: impl Into<Cow<'a, [u8]>>) -> &mut Self {
        self.tables.insert(tag, data.into());
        self
    }

    /// Returns `true` if the builder contains a table with this tag.
    pub fn contains(&self, tag: Tag) -> bool {
        self.tables.contains_key(&tag)
    }

    /// Assemble all the tables into a binary font file with a [Table Directory].
    ///
    /// [Table Directory]: https://learn.microsoft.com/en-us/typography/opentype/spec/otff#table-directory
    pub fn build(&mut self) -> Vec<u8> {
        let header_len = std::mem::size_of::<u32>() // sfnt
            + std::mem::size_of::<u16>() * 4 // num_tables to range_shift
            + self.tables.len() * TABLE_RECORD_LEN;

        let search = SearchRange::compute(self.tables.len(), TABLE_RECORD_LEN);
        let mut data = Vec::with_capacity(header_len);
        data.extend(self.sfnt_version.to_be_bytes());
        data.extend((self.tables.len() as u16).to_be_bytes());
        data.extend(search.search_range.to_be_bytes());
        data.extend(search.entry_selector.to_be_bytes());
        data.extend(search.range_shift.to_be_bytes());

        let mut position = header_len as u32;
        for (tag, table) in &self.tables {
            data.extend(tag.to_be_bytes());
            data.extend(compute_checksum(table).to_be_bytes());
            data.extend(position.to_be_bytes());
            data.extend((table.len() as u32).to_be_bytes());
            position += round4(table.len()) as u32;
        }
        for table in self.tables.values() {
            data.extend_from_slice(table);
            let rem = round4(table.len()) - table.len();
            let padding = [0u8; 4];
            data.extend_from_slice(&padding[..rem]);
        }
        data
    }
}

/// <https://github.com/google/woff2/blob/a0d0ed7da27b708c0a4e96ad7a998bddc933c06e/src/round.h#L19>
fn round4(sz: usize) -> usize {
    (sz + 3) & !3
}

/// Sum of the table interpreted as big-endian u32 values, zero padded.
fn compute_checksum(table: &[u8]) -> u32 {
    table.chunks(4).fold(0u32, |sum, chunk| {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        sum.wrapping_add(u32::from_be_bytes(word))
    })
}

/// The binary search assists written into the table directory header.
struct SearchRange {
    search_range: u16,
    entry_selector: u16,
    range_shift: u16,
}

impl SearchRange {
    fn compute(n_items: usize, item_size: usize) -> Self {
        let entry_selector = (n_items as f64).log2().floor() as usize;
        let search_range = (2.0_f64.powi(entry_selector as i32) * item_size as f64) as usize;
        // The result doesn't really make sense with 0 tables but ... let's at least not fail
        let range_shift = (n_items * item_size).saturating_sub(search_range);
        SearchRange {
            search_range: search_range.try_into().unwrap(),
            entry_selector: entry_selector.try_into().unwrap(),
            range_shift: range_shift.try_into().unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_u16(data: &[u8], pos: usize) -> u16 {
        u16::from_be_bytes([data[pos], data[pos + 1]])
    }

    fn read_u32(data: &[u8], pos: usize) -> u32 {
        u32::from_be_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
    }

    #[test]
    fn sets_binary_search_assists() {
        // Based on Roboto's num tables
        let data = b"doesn't matter".to_vec();
        let mut builder = FontBuilder::default();
        (0..0x16u32).for_each(|i| {
            builder.add_raw(Tag::from_u32(i), data.clone());
        });
        let bytes = builder.build();
        assert_eq!(
            (256, 4, 96),
            (read_u16(&bytes, 6), read_u16(&bytes, 8), read_u16(&bytes, 10))
        );
    }

    #[test]
    fn survives_no_tables() {
        let bytes = FontBuilder::default().build();
        assert_eq!(bytes.len(), 12);
        assert_eq!(read_u32(&bytes, 0), TT_SFNT_VERSION);
    }

    #[test]
    fn tables_are_padded() {
        let bytes = FontBuilder::new()
            .add_raw(Tag::new(b"bbbb"), vec![1u8; 5])
            .add_raw(Tag::new(b"aaaa"), vec![2u8; 3])
            .build();
        // records are sorted by tag
        assert_eq!(&bytes[12..16], b"aaaa");
        assert_eq!(read_u32(&bytes, 12 + 8), 44);
        assert_eq!(read_u32(&bytes, 12 + 12), 3);
        assert_eq!(&bytes[28..32], b"bbbb");
        assert_eq!(read_u32(&bytes, 28 + 8), 48);
        assert_eq!(bytes.len(), 48 + 8);
    }

    #[test]
    fn checksum() {
        assert_eq!(compute_checksum(&[0, 0, 0, 1, 0, 0, 0, 2, 1]), 0x0100_0003);
    }
}
