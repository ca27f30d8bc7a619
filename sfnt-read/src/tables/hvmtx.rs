//! Common parsing for the horizontal and vertical metrics tables.

use types::Tag;

use crate::{FontData, ReadError};

/// 'hmtx'
pub const HMTX_TAG: Tag = Tag::new(b"hmtx");

/// 'vmtx'
pub const VMTX_TAG: Tag = Tag::new(b"vmtx");

const LONG_METRIC_LEN: usize = 4;

/// An advance paired with the leading side bearing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LongMetric {
    /// Advance width or height in font units.
    pub advance: u16,
    /// Left or top side bearing in font units.
    pub side_bearing: i16,
}

impl LongMetric {
    pub fn new(advance: u16, side_bearing: i16) -> Self {
        Self {
            advance,
            side_bearing,
        }
    }
}

/// The [hmtx](https://docs.microsoft.com/en-us/typography/opentype/spec/hmtx)
/// or [vmtx](https://docs.microsoft.com/en-us/typography/opentype/spec/vmtx)
/// table.
///
/// When the count of long metrics from the matching header table is known,
/// glyphs past that count share the final advance and read their bearing
/// from the trailing bearing array. Without it every glyph is assumed to
/// have its own four byte record.
#[derive(Clone, Debug)]
pub struct HVmtx<'a> {
    data: FontData<'a>,
    number_of_long_metrics: Option<u16>,
}

impl<'a> HVmtx<'a> {
    pub fn new(data: FontData<'a>, number_of_long_metrics: Option<u16>) -> Self {
        Self {
            data,
            number_of_long_metrics,
        }
    }

    /// The number of long metrics declared by the header table, if known.
    pub fn long_metrics_count(&self) -> Option<u16> {
        self.number_of_long_metrics
    }

    /// Returns the advance and leading side bearing for a glyph.
    pub fn metric(&self, glyph_id: u16) -> Result<LongMetric, ReadError> {
        let ix = glyph_id as usize;
        match self.number_of_long_metrics.map(usize::from) {
            Some(count) if count > 0 && ix >= count => {
                let last = self.long_metric(count - 1)?;
                let bearing_offset = count * LONG_METRIC_LEN + (ix - count) * 2;
                Ok(LongMetric::new(
                    last.advance,
                    self.data.read_at(bearing_offset)?,
                ))
            }
            _ => self.long_metric(ix),
        }
    }

    fn long_metric(&self, ix: usize) -> Result<LongMetric, ReadError> {
        let offset = ix * LONG_METRIC_LEN;
        Ok(LongMetric::new(
            self.data.read_at(offset)?,
            self.data.read_at(offset + 2)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfnt_test_data::tables;

    #[test]
    fn out_of_range_glyph() {
        let data = tables::hmtx(&[(500, 10)], &[]);
        let hmtx = HVmtx::new(FontData::new(&data), None);
        assert_eq!(hmtx.metric(0), Ok(LongMetric::new(500, 10)));
        assert_eq!(hmtx.metric(1), Err(ReadError::OutOfBounds));
        let hmtx = HVmtx::new(FontData::new(&data), Some(1));
        assert_eq!(hmtx.metric(1), Err(ReadError::OutOfBounds));
    }
}
