//! cmap test data

use crate::{be_buffer, bebuffer::BeBuffer};

/// A format 4 subtable mapping `A..=Z` to glyphs `1..=26` by delta and
/// `a..=d` through the glyph id array to `40, 41, 45, 0`.
pub fn two_segment_cmap4() -> Vec<u8> {
    // <https://learn.microsoft.com/en-us/typography/opentype/spec/cmap#format-4-segment-mapping-to-delta-values>
    let buf = be_buffer! {
        4u16,                       // format
        48u16,                      // length
        0u16,                       // language
        6u16,                       // segCountX2, 3 segments
        0u16,                       // searchRange, unused
        0u16,                       // entrySelector, unused
        0u16,                       // rangeShift, unused
        [0x5Au16, 0x64, 0xFFFF],    // endCode
        0u16,                       // reservedPad
        [0x41u16, 0x61, 0xFFFF],    // startCode
        [0xFFC0u16, 0, 1],          // idDelta, -64 for the first segment
        [0u16, 4, 0],               // idRangeOffset
        [40u16, 41, 45, 0]          // glyphIdArray
    };
    buf.into()
}

/// A format 4 subtable for a list of `(start, end, first_glyph)` ranges,
/// each mapped by delta. The terminating segment is added automatically.
pub fn cmap4(ranges: &[(u16, u16, u16)]) -> Vec<u8> {
    let seg_count = ranges.len() + 1;
    let ends = ranges.iter().map(|(_, end, _)| *end).chain([0xFFFF]);
    let starts = ranges.iter().map(|(start, ..)| *start).chain([0xFFFF]);
    let deltas = ranges
        .iter()
        .map(|(start, _, glyph)| glyph.wrapping_sub(*start))
        .chain([1]);
    let length = 16 + seg_count * 8;
    BeBuffer::new()
        .push(4u16)
        .push(length as u16)
        .push(0u16)
        .push((seg_count * 2) as u16)
        .extend([0u16, 0, 0])
        .extend(ends)
        .push(0u16)
        .extend(starts)
        .extend(deltas)
        .extend(std::iter::repeat(0u16).take(seg_count))
        .into()
}

/// A `cmap` table with one encoding record per `(platform, encoding)` pair,
/// every record pointing at the same subtable.
pub fn cmap_with_subtable(records: &[(u16, u16)], subtable: &[u8]) -> Vec<u8> {
    let subtable_offset = 4 + 8 * records.len() as u32;
    let mut buf = BeBuffer::new().push(0u16).push(records.len() as u16);
    for (platform_id, encoding_id) in records {
        buf = buf
            .push(*platform_id)
            .push(*encoding_id)
            .push(subtable_offset);
    }
    buf.extend_bytes(subtable).into()
}

/// A `cmap` table with one encoding record per `(platform, encoding)` pair,
/// every record pointing at [`two_segment_cmap4`].
pub fn cmap_with_records(records: &[(u16, u16)]) -> Vec<u8> {
    cmap_with_subtable(records, &two_segment_cmap4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtable_lengths() {
        assert_eq!(two_segment_cmap4().len(), 48);
        assert_eq!(cmap4(&[(0x41, 0x5A, 1)]).len(), 32);
        let cmap = cmap_with_records(&[(0, 3), (3, 1)]);
        assert_eq!(cmap.len(), 4 + 16 + 48);
        // both records point past the header
        assert_eq!(&cmap[8..12], &[0, 0, 0, 20]);
        assert_eq!(&cmap[16..20], &[0, 0, 0, 20]);
    }
}
