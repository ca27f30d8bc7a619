//! Glyph side bearings.
//!
//! Bearings come from the [hmtx](https://learn.microsoft.com/en-us/typography/opentype/spec/hmtx)
//! table for the horizontal axis and the
//! [vmtx](https://learn.microsoft.com/en-us/typography/opentype/spec/vmtx)
//! table for the vertical axis. Many fonts have no vertical metrics at all,
//! so a missing table leaves that axis at zero rather than failing.

use raw::{tables::hvmtx::HVmtx, ReadError, TableProvider};

use crate::GlyphId;

/// Side bearings of a glyph in font units.
///
/// The trailing bearing on each axis is the advance minus the leading
/// bearing.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bearings {
    /// Left side bearing.
    pub lsb: i32,
    /// Right side bearing.
    pub rsb: i32,
    /// Top side bearing.
    pub tsb: i32,
    /// Bottom side bearing.
    pub bsb: i32,
}

impl Bearings {
    /// Reads the bearings for a glyph from the metrics tables of a font.
    pub(crate) fn new<'a>(
        font: &impl TableProvider<'a>,
        gid: GlyphId,
    ) -> Result<Self, ReadError> {
        let (lsb, rsb) = axis(font.hmtx(), gid)?;
        let (tsb, bsb) = axis(font.vmtx(), gid)?;
        Ok(Self { lsb, rsb, tsb, bsb })
    }
}

/// Leading and trailing bearing on one axis, or zeros if the table is absent.
fn axis(table: Result<HVmtx, ReadError>, gid: GlyphId) -> Result<(i32, i32), ReadError> {
    let table = match table {
        Ok(table) => table,
        Err(ReadError::TableIsMissing(_)) => return Ok((0, 0)),
        Err(e) => return Err(e),
    };
    let metric = table.metric(gid.to_u16())?;
    let leading = metric.side_bearing as i32;
    Ok((leading, metric.advance as i32 - leading))
}
