//! The [cmap](https://docs.microsoft.com/en-us/typography/opentype/spec/cmap) table

use core::ops::RangeInclusive;

use types::{GlyphId, Tag};

use crate::{FontData, FontRead, ReadError, ScalarArray};

/// 'cmap'
pub const TAG: Tag = Tag::new(b"cmap");

/// The platform identifier for Unicode encodings.
pub const UNICODE_PLATFORM_ID: u16 = 0;

const ENCODING_RECORD_LEN: usize = 8;

/// An inclusive range of codepoints covered by one cmap segment.
pub type CodepointRange = RangeInclusive<u32>;

/// The [cmap](https://docs.microsoft.com/en-us/typography/opentype/spec/cmap)
/// (character to glyph index mapping) table.
#[derive(Clone, Debug)]
pub struct Cmap<'a> {
    data: FontData<'a>,
    num_tables: u16,
}

/// A platform/encoding pair with the offset of its subtable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingRecord {
    pub platform_id: u16,
    pub encoding_id: u16,
    /// Byte offset from the start of the cmap table.
    pub subtable_offset: u32,
}

impl<'a> FontRead<'a> for Cmap<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        // version
        cursor.skip(2)?;
        let num_tables: u16 = cursor.read()?;
        // make sure all of the records are present
        cursor.read_array::<u16>(num_tables as usize * ENCODING_RECORD_LEN / 2)?;
        Ok(Cmap { data, num_tables })
    }
}

impl<'a> Cmap<'a> {
    /// Returns an iterator over the encoding records.
    pub fn encoding_records(&self) -> impl Iterator<Item = EncodingRecord> + 'a + Clone {
        let data = self.data;
        (0..self.num_tables as usize).filter_map(move |ix| {
            let offset = 4 + ix * ENCODING_RECORD_LEN;
            Some(EncodingRecord {
                platform_id: data.read_at(offset).ok()?,
                encoding_id: data.read_at(offset + 2).ok()?,
                subtable_offset: data.read_at(offset + 4).ok()?,
            })
        })
    }

    /// Reads the subtable referenced by an encoding record.
    pub fn subtable(&self, record: &EncodingRecord) -> Result<CmapSubtable<'a>, ReadError> {
        let data = self
            .data
            .split_off(record.subtable_offset as usize)
            .ok_or(ReadError::OutOfBounds)?;
        CmapSubtable::read(data)
    }

    /// Reads the subtable for the first record on the Unicode platform.
    ///
    /// Fails with [`ReadError::UnsupportedPlatform`] if no record uses the
    /// Unicode platform.
    pub fn unicode_subtable(&self) -> Result<CmapSubtable<'a>, ReadError> {
        let record = self
            .encoding_records()
            .find(|record| record.platform_id == UNICODE_PLATFORM_ID)
            .ok_or(ReadError::UnsupportedPlatform)?;
        self.subtable(&record)
    }
}

/// A character mapping subtable.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum CmapSubtable<'a> {
    Format4(Cmap4<'a>),
}

impl<'a> FontRead<'a> for CmapSubtable<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let format: u16 = data.read_at(0)?;
        match format {
            4 => Cmap4::read(data).map(CmapSubtable::Format4),
            other => Err(ReadError::InvalidFormat(other as i64)),
        }
    }
}

impl<'a> CmapSubtable<'a> {
    /// The format number of the subtable.
    pub fn format(&self) -> u16 {
        match self {
            CmapSubtable::Format4(_) => 4,
        }
    }

    /// Maps a codepoint to a nominal glyph identifier.
    ///
    /// Unmapped codepoints map to [`GlyphId::NOTDEF`].
    pub fn map_codepoint(&self, codepoint: impl Into<u32>) -> GlyphId {
        match self {
            CmapSubtable::Format4(subtable) => subtable.map_codepoint(codepoint),
        }
    }

    /// Returns the codepoint ranges covered by the subtable.
    pub fn code_ranges(&self) -> impl Iterator<Item = CodepointRange> + 'a + Clone {
        match self {
            CmapSubtable::Format4(subtable) => subtable.code_ranges(),
        }
    }

    /// Returns an iterator over all (codepoint, glyph identifier) pairs
    /// in the subtable.
    pub fn iter(&self) -> CmapSubtableIter<'a> {
        match self {
            CmapSubtable::Format4(subtable) => CmapSubtableIter::Format4(subtable.iter()),
        }
    }
}

/// Iterator over all (codepoint, glyph identifier) pairs in a
/// [`CmapSubtable`].
#[derive(Clone)]
#[non_exhaustive]
pub enum CmapSubtableIter<'a> {
    Format4(Cmap4Iter<'a>),
}

impl Iterator for CmapSubtableIter<'_> {
    type Item = (u32, GlyphId);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            CmapSubtableIter::Format4(iter) => iter.next(),
        }
    }
}

/// [cmap Format 4](https://docs.microsoft.com/en-us/typography/opentype/spec/cmap#format-4-segment-mapping-to-delta-values):
/// Segment mapping to delta values
#[derive(Clone, Copy, Debug)]
pub struct Cmap4<'a> {
    data: FontData<'a>,
    end_code: ScalarArray<'a, u16>,
    start_code: ScalarArray<'a, u16>,
    id_delta: ScalarArray<'a, u16>,
    id_range_offsets: ScalarArray<'a, u16>,
    id_range_offsets_pos: usize,
    glyph_id_array: ScalarArray<'a, u16>,
}

impl<'a> FontRead<'a> for Cmap4<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        // everything, including the glyph id array, ends at the declared length
        let length: u16 = data.read_at(2)?;
        let data = data
            .slice(..length as usize)
            .ok_or(ReadError::OutOfBounds)?;
        let mut cursor = data.cursor();
        // format, length, language
        cursor.skip(6)?;
        let seg_count_x2: u16 = cursor.read()?;
        let seg_count = seg_count_x2 as usize / 2;
        if seg_count == 0 {
            return Err(ReadError::MalformedData("cmap4 has no segments"));
        }
        // searchRange, entrySelector, rangeShift
        cursor.skip(6)?;
        let end_code = cursor.read_array(seg_count)?;
        // reservedPad
        cursor.read::<u16>()?;
        let start_code = cursor.read_array(seg_count)?;
        let id_delta = cursor.read_array(seg_count)?;
        let id_range_offsets_pos = cursor.position();
        let id_range_offsets = cursor.read_array(seg_count)?;
        let remaining = cursor.remaining_bytes() / 2;
        let glyph_id_array = cursor.read_array(remaining)?;
        if end_code.last() != Some(0xFFFF) {
            return Err(ReadError::MalformedData(
                "cmap4 final segment must end at 0xFFFF",
            ));
        }
        Ok(Cmap4 {
            data,
            end_code,
            start_code,
            id_delta,
            id_range_offsets,
            id_range_offsets_pos,
            glyph_id_array,
        })
    }
}

impl<'a> Cmap4<'a> {
    /// The number of segments.
    pub fn seg_count(&self) -> usize {
        self.end_code.len()
    }

    /// End character code for each segment, last = 0xFFFF.
    pub fn end_code(&self) -> ScalarArray<'a, u16> {
        self.end_code
    }

    /// Start character code for each segment.
    pub fn start_code(&self) -> ScalarArray<'a, u16> {
        self.start_code
    }

    /// Delta for all character codes in each segment, applied modulo 65536.
    pub fn id_delta(&self) -> ScalarArray<'a, u16> {
        self.id_delta
    }

    /// Offsets into the glyph id array, or 0.
    pub fn id_range_offsets(&self) -> ScalarArray<'a, u16> {
        self.id_range_offsets
    }

    /// The glyph index array, of arbitrary length.
    pub fn glyph_id_array(&self) -> ScalarArray<'a, u16> {
        self.glyph_id_array
    }

    /// Maps a codepoint to a nominal glyph identifier.
    ///
    /// Segments are scanned in order and the first one containing the
    /// codepoint is used. Unmapped codepoints map to [`GlyphId::NOTDEF`].
    pub fn map_codepoint(&self, codepoint: impl Into<u32>) -> GlyphId {
        let codepoint = codepoint.into();
        if codepoint > 0xFFFF {
            return GlyphId::NOTDEF;
        }
        let codepoint = codepoint as u16;
        for (ix, (start, end)) in self.start_code.iter().zip(self.end_code.iter()).enumerate() {
            if (start..=end).contains(&codepoint) {
                return self.lookup_glyph_id(codepoint, ix, start);
            }
        }
        GlyphId::NOTDEF
    }

    /// Returns the codepoint range covered by each segment.
    pub fn code_ranges(&self) -> impl Iterator<Item = CodepointRange> + 'a + Clone {
        self.start_code
            .iter()
            .zip(self.end_code.iter())
            .map(|(start, end)| start as u32..=end as u32)
    }

    /// Returns an iterator over all (codepoint, glyph identifier) pairs
    /// in the subtable.
    pub fn iter(&self) -> Cmap4Iter<'a> {
        Cmap4Iter::new(*self)
    }

    /// Does the final phase of glyph id lookup.
    ///
    /// Shared between Self::map_codepoint and Cmap4Iter.
    fn lookup_glyph_id(&self, codepoint: u16, index: usize, start_code: u16) -> GlyphId {
        let delta = self.id_delta.get(index).unwrap_or_default();
        let range_offset = self.id_range_offsets.get(index).unwrap_or_default();
        if range_offset == 0 {
            return GlyphId::new(codepoint.wrapping_add(delta));
        }
        // idRangeOffset is relative to the location of its own entry, and
        // the slot holds the glyph id as is
        let address = self.id_range_offsets_pos
            + index * 2
            + range_offset as usize
            + (codepoint - start_code) as usize * 2;
        self.data
            .read_at::<u16>(address)
            .map(GlyphId::new)
            .unwrap_or(GlyphId::NOTDEF)
    }
}

/// Iterator over all (codepoint, glyph identifier) pairs in
/// the subtable.
///
/// Codepoints explicitly mapped to [`GlyphId::NOTDEF`] are skipped.
#[derive(Clone)]
pub struct Cmap4Iter<'a> {
    subtable: Cmap4<'a>,
    cur_range: core::ops::Range<u32>,
    cur_start_code: u16,
    cur_range_ix: usize,
}

impl<'a> Cmap4Iter<'a> {
    fn new(subtable: Cmap4<'a>) -> Self {
        let cur_range = subtable.code_range(0).unwrap_or_default();
        let cur_start_code = cur_range.start as u16;
        Self {
            subtable,
            cur_range,
            cur_start_code,
            cur_range_ix: 0,
        }
    }
}

impl Cmap4<'_> {
    /// Returns the [start_code, end_code] range at the given index as a
    /// half-open range.
    fn code_range(&self, index: usize) -> Option<core::ops::Range<u32>> {
        // Extend to u32 to ensure we don't overflow on the end + 1 bound
        let start = self.start_code.get(index)? as u32;
        let end = self.end_code.get(index)? as u32;
        Some(start..end + 1)
    }
}

impl Iterator for Cmap4Iter<'_> {
    type Item = (u32, GlyphId);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(codepoint) = self.cur_range.next() {
                let glyph_id = self.subtable.lookup_glyph_id(
                    codepoint as u16,
                    self.cur_range_ix,
                    self.cur_start_code,
                );
                if glyph_id == GlyphId::NOTDEF {
                    continue;
                }
                return Some((codepoint, glyph_id));
            } else {
                self.cur_range_ix += 1;
                self.cur_range = self.subtable.code_range(self.cur_range_ix)?;
                self.cur_start_code = self.cur_range.start as u16;
            }
        }
    }
}
