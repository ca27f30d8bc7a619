//! Traits for interpreting font data

use types::Tag;

use crate::font_data::FontData;

/// A type that can be read from raw table data.
///
/// This trait is implemented for all font tables that are self-describing: that
/// is, tables that do not require any external state in order to interpret their
/// underlying bytes. Tables that need external state (such as `loca`, which
/// needs the glyph count and offset width) provide their own `read`
/// constructor instead.
pub trait FontRead<'a>: Sized {
    /// Read an instance of `Self` from the provided data, performing validation.
    fn read(data: FontData<'a>) -> Result<Self, ReadError>;
}

/// The coarse category of a [`ReadError`].
///
/// Every failure surfaced while decoding a font falls into exactly one of
/// these kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A read or seek would exceed the bounds of the data.
    Overflow,
    /// The data is structurally readable but semantically invalid.
    InvalidParsed,
    /// A required table is absent from the table directory.
    TableNotFound,
    /// The data uses a recognized but unimplemented format.
    UnsupportedFormat,
}

/// An error that occurs when reading font data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    OutOfBounds,
    // i64 is flexible enough to store any value we might encounter
    InvalidFormat(i64),
    InvalidSfnt(u32),
    TableIsMissing(Tag),
    UnsupportedPlatform,
    Unsupported(&'static str),
    MalformedData(&'static str),
}

impl ReadError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReadError::OutOfBounds => ErrorKind::Overflow,
            ReadError::MalformedData(_) => ErrorKind::InvalidParsed,
            ReadError::TableIsMissing(_) => ErrorKind::TableNotFound,
            ReadError::InvalidFormat(_)
            | ReadError::InvalidSfnt(_)
            | ReadError::UnsupportedPlatform
            | ReadError::Unsupported(_) => ErrorKind::UnsupportedFormat,
        }
    }
}

impl core::fmt::Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "An offset was out of bounds"),
            ReadError::InvalidFormat(x) => write!(f, "Invalid format '{x}'"),
            ReadError::InvalidSfnt(ver) => write!(f, "Invalid sfnt version 0x{ver:08X}"),
            ReadError::TableIsMissing(tag) => write!(f, "the {tag} table is missing"),
            ReadError::UnsupportedPlatform => {
                write!(f, "No cmap subtable for the Unicode platform")
            }
            ReadError::Unsupported(what) => write!(f, "Unsupported: {what}"),
            ReadError::MalformedData(msg) => write!(f, "Malformed data: '{msg}'"),
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ErrorKind::Overflow => "overflow",
            ErrorKind::InvalidParsed => "invalid data",
            ErrorKind::TableNotFound => "table not found",
            ErrorKind::UnsupportedFormat => "unsupported format",
        };
        f.write_str(name)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadError {}
