//! Errors that may occur when decoding a font.

use core::fmt;

use raw::{ErrorKind, ReadError};

use crate::GlyphId;

/// Errors that may occur when loading a font or decoding a glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Error occurred when reading font data.
    Read(ReadError),
    /// The requested glyph was not present in the font.
    GlyphNotFound(GlyphId),
    /// A composite glyph references one of its own ancestors.
    CycleDetected(GlyphId),
    /// Exceeded a recursion limit when loading a composite glyph.
    RecursionLimitExceeded(GlyphId),
    /// Visited too many components when loading a composite glyph.
    ComponentLimitExceeded(GlyphId),
}

impl Error {
    /// The category of the underlying read error, if there is one.
    ///
    /// Lookup and traversal failures are not read errors and return `None`.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Read(e) => Some(e.kind()),
            _ => None,
        }
    }
}

impl From<ReadError> for Error {
    fn from(e: ReadError) -> Self {
        Self::Read(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Read(e) => write!(f, "{e}"),
            Self::GlyphNotFound(gid) => write!(f, "Glyph {gid} was not found in the given font"),
            Self::CycleDetected(gid) => {
                write!(f, "Cycle detected in composite glyph at component {gid}")
            }
            Self::RecursionLimitExceeded(gid) => write!(
                f,
                "Recursion limit ({}) exceeded when loading composite component {gid}",
                crate::COMPOSITE_RECURSION_LIMIT,
            ),
            Self::ComponentLimitExceeded(gid) => write!(
                f,
                "Component limit ({}) exceeded when loading composite component {gid}",
                crate::COMPOSITE_COMPONENT_LIMIT,
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        let err: Error = ReadError::MalformedData("bad").into();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidParsed));
        assert_eq!(Error::CycleDetected(GlyphId::new(2)).kind(), None);
    }

    #[test]
    fn display() {
        assert_eq!(
            Error::RecursionLimitExceeded(GlyphId::new(7)).to_string(),
            "Recursion limit (32) exceeded when loading composite component GID_7"
        );
        assert_eq!(
            Error::ComponentLimitExceeded(GlyphId::new(3)).to_string(),
            "Component limit (4096) exceeded when loading composite component GID_3"
        );
        assert_eq!(
            Error::Read(ReadError::OutOfBounds).to_string(),
            "An offset was out of bounds"
        );
    }
}
