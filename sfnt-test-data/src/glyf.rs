//! Encoders for `glyf` and `loca` test data.

use crate::bebuffer::BeBuffer;

const ON_CURVE_POINT: u8 = 0x01;
const X_SHORT_VECTOR: u8 = 0x02;
const Y_SHORT_VECTOR: u8 = 0x04;
const REPEAT_FLAG: u8 = 0x08;
const X_IS_SAME_OR_POSITIVE: u8 = 0x10;
const Y_IS_SAME_OR_POSITIVE: u8 = 0x20;

const ARG_1_AND_2_ARE_WORDS: u16 = 0x0001;
const ARGS_ARE_XY_VALUES: u16 = 0x0002;
const MORE_COMPONENTS: u16 = 0x0020;

/// Encode a simple glyph from contours of `(x, y, on_curve)` points.
///
/// Deltas use the shortest encoding and runs of equal flags are compressed,
/// so decoding exercises every path. The bounding box is computed from the
/// points.
pub fn simple_glyph(contours: &[&[(i16, i16, bool)]]) -> Vec<u8> {
    let points = contours.iter().flat_map(|c| c.iter()).collect::<Vec<_>>();
    let bbox = points.iter().fold(None, |bbox: Option<[i16; 4]>, (x, y, _)| {
        Some(match bbox {
            None => [*x, *y, *x, *y],
            Some([x_min, y_min, x_max, y_max]) => {
                [x_min.min(*x), y_min.min(*y), x_max.max(*x), y_max.max(*y)]
            }
        })
    });
    let mut buf = BeBuffer::new()
        .push(contours.len() as i16)
        .extend(bbox.unwrap_or_default());
    let mut end = 0u16;
    for contour in contours {
        end += contour.len() as u16;
        buf = buf.push(end - 1);
    }
    // instructionLength
    buf = buf.push(0u16);

    let mut flags = Vec::with_capacity(points.len());
    let mut x_data = BeBuffer::new();
    let mut y_data = BeBuffer::new();
    let (mut last_x, mut last_y) = (0i16, 0i16);
    for (x, y, on_curve) in points {
        let mut flag = if *on_curve { ON_CURVE_POINT } else { 0 };
        let (x_flags, x_bytes) = encode_delta(
            x.wrapping_sub(last_x),
            X_SHORT_VECTOR,
            X_IS_SAME_OR_POSITIVE,
        );
        let (y_flags, y_bytes) = encode_delta(
            y.wrapping_sub(last_y),
            Y_SHORT_VECTOR,
            Y_IS_SAME_OR_POSITIVE,
        );
        flag |= x_flags | y_flags;
        x_data = x_data.extend_bytes(&x_bytes);
        y_data = y_data.extend_bytes(&y_bytes);
        flags.push(flag);
        (last_x, last_y) = (*x, *y);
    }

    let mut ix = 0;
    while ix < flags.len() {
        let flag = flags[ix];
        let run = flags[ix..]
            .iter()
            .take(256)
            .take_while(|f| **f == flag)
            .count();
        if run > 1 {
            buf = buf.push(flag | REPEAT_FLAG).push((run - 1) as u8);
        } else {
            buf = buf.push(flag);
        }
        ix += run;
    }
    buf.extend_bytes(&x_data).extend_bytes(&y_data).into()
}

fn encode_delta(delta: i16, short: u8, same_or_positive: u8) -> (u8, Vec<u8>) {
    match delta {
        0 => (same_or_positive, vec![]),
        1..=255 => (short | same_or_positive, vec![delta as u8]),
        -255..=-1 => (short, vec![delta.unsigned_abs() as u8]),
        _ => (0, delta.to_be_bytes().to_vec()),
    }
}

/// Encode a composite glyph from `(glyph_id, dx, dy)` components.
///
/// Offsets are written as 16-bit x/y values with no transform.
pub fn composite_glyph(bbox: [i16; 4], components: &[(u16, i16, i16)]) -> Vec<u8> {
    let mut buf = BeBuffer::new().push(-1i16).extend(bbox);
    for (i, (glyph, dx, dy)) in components.iter().enumerate() {
        let mut flags = ARG_1_AND_2_ARE_WORDS | ARGS_ARE_XY_VALUES;
        if i + 1 < components.len() {
            flags |= MORE_COMPONENTS;
        }
        buf = buf.push(flags).push(*glyph).push(*dx).push(*dy);
    }
    buf.into()
}

/// Collects glyph data and produces matching `glyf` and `loca` tables.
#[derive(Clone, Debug, Default)]
pub struct GlyfBuilder {
    glyphs: Vec<Vec<u8>>,
}

impl GlyfBuilder {
    /// Append the data for the next glyph.
    pub fn push(&mut self, data: impl Into<Vec<u8>>) -> &mut Self {
        self.glyphs.push(data.into());
        self
    }

    /// Append a glyph with no outline.
    pub fn push_empty(&mut self) -> &mut Self {
        self.glyphs.push(Vec::new());
        self
    }

    /// The number of glyphs added so far.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Returns the `glyf` data, the `loca` data, and `true` if `loca` uses
    /// long offsets.
    ///
    /// Glyphs are padded to an even length so short offsets are used
    /// whenever the table is small enough.
    pub fn build(&self) -> (Vec<u8>, Vec<u8>, bool) {
        let mut glyf = Vec::new();
        let mut offsets = vec![0u32];
        for glyph in &self.glyphs {
            glyf.extend_from_slice(glyph);
            if glyf.len() % 2 != 0 {
                glyf.push(0);
            }
            offsets.push(glyf.len() as u32);
        }
        let is_long = glyf.len() > u16::MAX as usize * 2;
        let loca = if is_long {
            crate::tables::loca_long(&offsets)
        } else {
            crate::tables::loca_short(&offsets)
        };
        (glyf, loca, is_long)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compresses_flags() {
        // three on-curve points with short positive x deltas and no y change
        let data = simple_glyph(&[&[(1, 0, true), (2, 0, true), (3, 0, true)]]);
        let flag = ON_CURVE_POINT | X_SHORT_VECTOR | X_IS_SAME_OR_POSITIVE | Y_IS_SAME_OR_POSITIVE;
        assert_eq!(
            data[10..],
            [0, 2, 0, 0, flag | REPEAT_FLAG, 2, 1, 1, 1]
        );
    }

    #[test]
    fn builder_pads_glyphs() {
        let mut builder = GlyfBuilder::default();
        builder.push(vec![1u8; 3]).push_empty().push(vec![2u8; 4]);
        let (glyf, loca, is_long) = builder.build();
        assert!(!is_long);
        assert_eq!(glyf.len(), 8);
        assert_eq!(loca, [0, 0, 0, 2, 0, 2, 0, 4]);
    }
}
