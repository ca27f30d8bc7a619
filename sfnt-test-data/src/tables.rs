//! Builders for the fixed-layout tables.

use sfnt_types::Fixed;

use crate::{be_buffer, bebuffer::BeBuffer};

/// A `head` table with the given units per em, bounding box
/// (`[x_min, y_min, x_max, y_max]`) and `indexToLocFormat`.
pub fn head(units_per_em: u16, bbox: [i16; 4], index_to_loc_format: i16) -> Vec<u8> {
    let buf = be_buffer! {
        1u16, 0u16,                 // version 1.0
        (Fixed::ONE),               // fontRevision
        0u32,                       // checksumAdjustment
        0x5F0F3CF5u32,              // magicNumber
        0u16,                       // flags
        (units_per_em),
        0u64,                       // created
        0u64,                       // modified
        (bbox[0]), (bbox[1]), (bbox[2]), (bbox[3]),
        0u16,                       // macStyle
        8u16,                       // lowestRecPPEM
        2i16,                       // fontDirectionHint
        (index_to_loc_format),
        0i16                        // glyphDataFormat
    };
    buf.into()
}

/// A version 0.5 `maxp` table.
pub fn maxp(num_glyphs: u16) -> Vec<u8> {
    let buf = be_buffer! {
        0x00005000u32,
        (num_glyphs)
    };
    buf.into()
}

fn hvhea(number_of_long_metrics: u16) -> Vec<u8> {
    let buf = be_buffer! {
        1u16, 0u16,                 // version
        800i16,                     // ascender
        -200i16,                    // descender
        0i16,                       // lineGap
        1000u16,                    // advanceMax
        [0i16, 0, 0],               // min bearings, extent
        [1i16, 0, 0],               // caret slope rise/run/offset
        [0i16, 0, 0, 0],            // reserved
        0i16,                       // metricDataFormat
        (number_of_long_metrics)
    };
    buf.into()
}

/// An `hhea` table declaring the given number of long metrics.
pub fn hhea(number_of_h_metrics: u16) -> Vec<u8> {
    hvhea(number_of_h_metrics)
}

/// A `vhea` table declaring the given number of long metrics.
pub fn vhea(num_of_long_ver_metrics: u16) -> Vec<u8> {
    hvhea(num_of_long_ver_metrics)
}

/// An `hmtx` (or `vmtx`) table from `(advance, bearing)` pairs followed by
/// the trailing bearing array.
pub fn hmtx(long_metrics: &[(u16, i16)], bearings: &[i16]) -> Vec<u8> {
    let mut buf = BeBuffer::new();
    for (advance, bearing) in long_metrics {
        buf = buf.push(*advance).push(*bearing);
    }
    buf.extend(bearings.iter().copied()).into()
}

/// A `loca` table with short offsets, given as byte offsets into `glyf`.
///
/// # Panics
///
/// Panics if an offset is odd or too large for the short format.
pub fn loca_short(offsets: &[u32]) -> Vec<u8> {
    let offsets = offsets.iter().map(|offset| {
        assert!(offset % 2 == 0, "short loca offsets must be even");
        u16::try_from(offset / 2).expect("offset too large for short loca")
    });
    BeBuffer::new().extend(offsets).into()
}

/// A `loca` table with long offsets.
pub fn loca_long(offsets: &[u32]) -> Vec<u8> {
    BeBuffer::new().extend(offsets.iter().copied()).into()
}
