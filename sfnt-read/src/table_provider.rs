//! a trait for things that can serve font tables

use types::Tag;

use crate::{tables, FontData, FontRead, ReadError};

/// An interface for accessing tables from a font (or font-like object)
pub trait TableProvider<'a> {
    fn data_for_tag(&self, tag: Tag) -> Option<FontData<'a>>;

    fn expect_data_for_tag(&self, tag: Tag) -> Result<FontData<'a>, ReadError> {
        self.data_for_tag(tag).ok_or(ReadError::TableIsMissing(tag))
    }

    fn head(&self) -> Result<tables::head::Head<'a>, ReadError> {
        self.expect_data_for_tag(tables::head::TAG)
            .and_then(FontRead::read)
    }

    fn maxp(&self) -> Result<tables::maxp::Maxp, ReadError> {
        self.expect_data_for_tag(tables::maxp::TAG)
            .and_then(FontRead::read)
    }

    fn hhea(&self) -> Result<tables::hvhea::HVhea, ReadError> {
        self.expect_data_for_tag(tables::hvhea::HHEA_TAG)
            .and_then(FontRead::read)
    }

    fn vhea(&self) -> Result<tables::hvhea::HVhea, ReadError> {
        self.expect_data_for_tag(tables::hvhea::VHEA_TAG)
            .and_then(FontRead::read)
    }

    /// The `hmtx` table, split according to `hhea` when it is present.
    fn hmtx(&self) -> Result<tables::hvmtx::HVmtx<'a>, ReadError> {
        let data = self.expect_data_for_tag(tables::hvmtx::HMTX_TAG)?;
        let long_metrics = match self.data_for_tag(tables::hvhea::HHEA_TAG) {
            Some(hhea) => Some(tables::hvhea::HVhea::read(hhea)?.number_of_long_metrics()),
            None => None,
        };
        Ok(tables::hvmtx::HVmtx::new(data, long_metrics))
    }

    /// The `vmtx` table, split according to `vhea` when it is present.
    fn vmtx(&self) -> Result<tables::hvmtx::HVmtx<'a>, ReadError> {
        let data = self.expect_data_for_tag(tables::hvmtx::VMTX_TAG)?;
        let long_metrics = match self.data_for_tag(tables::hvhea::VHEA_TAG) {
            Some(vhea) => Some(tables::hvhea::HVhea::read(vhea)?.number_of_long_metrics()),
            None => None,
        };
        Ok(tables::hvmtx::HVmtx::new(data, long_metrics))
    }

    fn cmap(&self) -> Result<tables::cmap::Cmap<'a>, ReadError> {
        self.expect_data_for_tag(tables::cmap::TAG)
            .and_then(FontRead::read)
    }

    /// is_long can be optionally provided, if known, otherwise we look it up in head.
    fn loca(&self, is_long: impl Into<Option<bool>>) -> Result<tables::loca::Loca<'a>, ReadError> {
        let is_long = match is_long.into() {
            Some(val) => val,
            None => self.head()?.index_to_loc_format()? == 1,
        };
        let num_glyphs = self.maxp()?.num_glyphs();
        self.expect_data_for_tag(tables::loca::TAG)
            .and_then(|data| tables::loca::Loca::read(data, is_long, num_glyphs))
    }

    fn glyf(&self) -> Result<tables::glyf::Glyf<'a>, ReadError> {
        self.expect_data_for_tag(tables::glyf::TAG)
            .and_then(FontRead::read)
    }
}
