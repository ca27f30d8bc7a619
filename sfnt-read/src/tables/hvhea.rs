//! Common parsing for the horizontal and vertical header tables.

use types::Tag;

use crate::{FontData, FontRead, ReadError};

/// 'hhea'
pub const HHEA_TAG: Tag = Tag::new(b"hhea");

/// 'vhea'
pub const VHEA_TAG: Tag = Tag::new(b"vhea");

/// Byte offset of `numberOfHMetrics`/`numOfLongVerMetrics`.
const NUMBER_OF_LONG_METRICS_OFFSET: usize = 34;

/// The [hhea](https://docs.microsoft.com/en-us/typography/opentype/spec/hhea)
/// or [vhea](https://docs.microsoft.com/en-us/typography/opentype/spec/vhea)
/// table.
///
/// The two tables share a layout; only the field that splits the paired
/// metrics table is read.
#[derive(Clone, Copy, Debug)]
pub struct HVhea {
    number_of_long_metrics: u16,
}

impl FontRead<'_> for HVhea {
    fn read(data: FontData) -> Result<Self, ReadError> {
        data.read_at(NUMBER_OF_LONG_METRICS_OFFSET)
            .map(|number_of_long_metrics| HVhea {
                number_of_long_metrics,
            })
    }
}

impl HVhea {
    /// Number of advance/bearing pairs in the paired metrics table.
    pub fn number_of_long_metrics(&self) -> u16 {
        self.number_of_long_metrics
    }
}
