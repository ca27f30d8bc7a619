//! raw font bytes

use core::ops::RangeBounds;

use alloc::string::String;
use types::{Endian, Scalar};

use crate::array::ScalarArray;
use crate::read::ReadError;

/// A reference to raw binary font data.
///
/// This is a wrapper around a byte slice, that provides convenience methods
/// for parsing and validating that data. All reads are bounds checked and
/// interpret multi-byte values in the byte order the data was created with
/// (big-endian unless stated otherwise).
#[derive(Debug, Default, Clone, Copy)]
pub struct FontData<'a> {
    bytes: &'a [u8],
    endian: Endian,
}

/// A cursor for reading sequential values out of [`FontData`].
///
/// Every read advances the position by the width of the value. A read that
/// would run past the end of the data fails with [`ReadError::OutOfBounds`]
/// and leaves the position unchanged.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    pos: usize,
    data: FontData<'a>,
}

impl<'a> FontData<'a> {
    /// Create a new big-endian `FontData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData {
            bytes,
            endian: Endian::Big,
        }
    }

    /// Create a new `FontData` whose values are stored in the given byte order.
    pub const fn with_endian(bytes: &'a [u8], endian: Endian) -> Self {
        FontData { bytes, endian }
    }

    /// The byte order used to interpret this data.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// The length of the data, in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the data has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the data from `pos` to the end.
    pub fn split_off(&self, pos: usize) -> Option<FontData<'a>> {
        self.bytes.get(pos..).map(|bytes| FontData {
            bytes,
            endian: self.endian,
        })
    }

    /// Returns a view of a sub-range of this data.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<FontData<'a>> {
        let bounds = (range.start_bound().cloned(), range.end_bound().cloned());
        self.bytes.get(bounds).map(|bytes| FontData {
            bytes,
            endian: self.endian,
        })
    }

    /// Read a scalar value at `offset`.
    pub fn read_at<T: Scalar>(&self, offset: usize) -> Result<T, ReadError> {
        let end = offset
            .checked_add(T::RAW_BYTE_LEN)
            .ok_or(ReadError::OutOfBounds)?;
        self.bytes
            .get(offset..end)
            .and_then(|bytes| T::read_endian(bytes, self.endian))
            .ok_or(ReadError::OutOfBounds)
    }

    /// Returns a lazily decoded array of `len` values starting at `offset`.
    pub fn read_array<T: Scalar>(
        &self,
        offset: usize,
        len: usize,
    ) -> Result<ScalarArray<'a, T>, ReadError> {
        let byte_len = len
            .checked_mul(T::RAW_BYTE_LEN)
            .ok_or(ReadError::OutOfBounds)?;
        let end = offset.checked_add(byte_len).ok_or(ReadError::OutOfBounds)?;
        let bytes = self.bytes.get(offset..end).ok_or(ReadError::OutOfBounds)?;
        Ok(ScalarArray::new(bytes, self.endian))
    }

    /// Returns a cursor positioned at the start of this data.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor {
            pos: 0,
            data: *self,
        }
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> Cursor<'a> {
    /// Read a scalar and advance past it.
    pub fn read<T: Scalar>(&mut self) -> Result<T, ReadError> {
        let value = self.data.read_at(self.pos)?;
        self.pos += T::RAW_BYTE_LEN;
        Ok(value)
    }

    /// Read `len` scalars as an array and advance past them.
    pub fn read_array<T: Scalar>(&mut self, len: usize) -> Result<ScalarArray<'a, T>, ReadError> {
        let array = self.data.read_array(self.pos, len)?;
        self.pos += array.len() * T::RAW_BYTE_LEN;
        Ok(array)
    }

    /// Read `len` bytes as a fixed-width Latin-1 string.
    pub fn read_string(&mut self, len: usize) -> Result<String, ReadError> {
        let end = self.pos.checked_add(len).ok_or(ReadError::OutOfBounds)?;
        let bytes = self
            .data
            .as_bytes()
            .get(self.pos..end)
            .ok_or(ReadError::OutOfBounds)?;
        // Latin-1 code points map one to one onto the first 256 chars
        let string = bytes.iter().map(|byte| *byte as char).collect();
        self.pos = end;
        Ok(string)
    }

    /// Move to an absolute position.
    ///
    /// Fails if `pos` is at or past the end of the data.
    pub fn seek(&mut self, pos: usize) -> Result<(), ReadError> {
        if pos >= self.data.len() {
            return Err(ReadError::OutOfBounds);
        }
        self.pos = pos;
        Ok(())
    }

    /// Move to `n` bytes before the end of the data.
    pub fn seek_from_end(&mut self, n: usize) -> Result<(), ReadError> {
        let pos = self
            .data
            .len()
            .checked_sub(n)
            .ok_or(ReadError::OutOfBounds)?;
        self.seek(pos)
    }

    /// Advance by `n` bytes; equivalent to `seek(position + n)`.
    pub fn skip(&mut self, n: usize) -> Result<(), ReadError> {
        self.seek(self.pos.checked_add(n).ok_or(ReadError::OutOfBounds)?)
    }

    /// Return to the start of the data.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Returns a new cursor over `len` bytes of the same data.
    ///
    /// The region begins at `start`, or at the current position if `start`
    /// is `None`. This cursor is not advanced.
    pub fn slice(&self, len: usize, start: Option<usize>) -> Result<Cursor<'a>, ReadError> {
        let start = start.unwrap_or(self.pos);
        let end = start.checked_add(len).ok_or(ReadError::OutOfBounds)?;
        self.data
            .slice(start..end)
            .map(|data| data.cursor())
            .ok_or(ReadError::OutOfBounds)
    }

    /// The current position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The number of bytes between the current position and the end.
    pub fn remaining_bytes(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// The data this cursor reads from.
    pub fn data(&self) -> FontData<'a> {
        self.data
    }

    /// The data from the current position to the end.
    pub fn remaining(&self) -> FontData<'a> {
        self.data.split_off(self.pos).unwrap_or_default()
    }
}

impl AsRef<[u8]> for FontData<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl<'a> From<&'a [u8]> for FontData<'a> {
    fn from(src: &'a [u8]) -> FontData<'a> {
        FontData::new(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::Tag;

    #[test]
    fn reads_advance_by_width() {
        let bytes = [
            0x01, // u8
            0xFF, 0xFE, // i16
            0x00, 0x01, 0x00, 0x00, // u32
            0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, // i64
        ];
        let mut cursor = FontData::new(&bytes).cursor();
        assert_eq!(cursor.read::<u8>(), Ok(1));
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.read::<i16>(), Ok(-2));
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.read::<u32>(), Ok(0x10000));
        assert_eq!(cursor.position(), 7);
        assert_eq!(cursor.read::<i64>(), Ok(i64::MIN + 1));
        assert_eq!(cursor.remaining_bytes(), 0);
    }

    #[test]
    fn overflow_for_every_width() {
        let bytes = [0xFFu8; 7];
        let data = FontData::new(&bytes);
        assert_eq!(data.slice(..0).unwrap().cursor().read::<u8>(), Err(ReadError::OutOfBounds));
        assert_eq!(data.slice(..1).unwrap().cursor().read::<i16>(), Err(ReadError::OutOfBounds));
        assert_eq!(data.slice(..3).unwrap().cursor().read::<u32>(), Err(ReadError::OutOfBounds));
        assert_eq!(data.cursor().read::<u64>(), Err(ReadError::OutOfBounds));
        assert_eq!(data.cursor().read::<f64>(), Err(ReadError::OutOfBounds));
        assert_eq!(data.read_at::<u16>(usize::MAX), Err(ReadError::OutOfBounds));
    }

    #[test]
    fn failed_read_does_not_advance() {
        let bytes = [1, 2, 3];
        let mut cursor = FontData::new(&bytes).cursor();
        cursor.read::<u16>().unwrap();
        assert!(cursor.read::<u16>().is_err());
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.read::<u8>(), Ok(3));
    }

    #[test]
    fn little_endian() {
        let bytes = [0x34, 0x12, 0x00, 0x00, 0xC0, 0x3F];
        let mut cursor = FontData::with_endian(&bytes, Endian::Little).cursor();
        assert_eq!(cursor.read::<u16>(), Ok(0x1234));
        assert_eq!(cursor.read::<f32>(), Ok(1.5));
    }

    #[test]
    fn big_endian_floats() {
        let mut bytes = 1.5f32.to_be_bytes().to_vec();
        bytes.extend((-2.25f64).to_be_bytes());
        let mut cursor = FontData::new(&bytes).cursor();
        assert_eq!(cursor.read::<f32>(), Ok(1.5));
        assert_eq!(cursor.read::<f64>(), Ok(-2.25));
    }

    #[test]
    fn seek_bounds() {
        let bytes = [0u8; 8];
        let mut cursor = FontData::new(&bytes).cursor();
        assert!(cursor.seek(7).is_ok());
        assert_eq!(cursor.seek(8), Err(ReadError::OutOfBounds));
        assert_eq!(cursor.position(), 7);
        cursor.reset();
        assert_eq!(cursor.position(), 0);
        cursor.seek_from_end(4).unwrap();
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.seek_from_end(0), Err(ReadError::OutOfBounds));
        assert_eq!(cursor.seek_from_end(9), Err(ReadError::OutOfBounds));
        cursor.skip(3).unwrap();
        assert_eq!(cursor.position(), 7);
        assert_eq!(cursor.skip(1), Err(ReadError::OutOfBounds));
    }

    #[test]
    fn slice_does_not_advance_parent() {
        let bytes = [0, 1, 2, 3, 4, 5, 6, 7];
        let mut cursor = FontData::new(&bytes).cursor();
        cursor.skip(2).unwrap();
        let mut sub = cursor.slice(4, None).unwrap();
        assert_eq!(sub.read::<u16>(), Ok(0x0203));
        assert_eq!(cursor.position(), 2);
        let mut sub = cursor.slice(2, Some(6)).unwrap();
        assert_eq!(sub.read::<u16>(), Ok(0x0607));
        assert!(sub.read::<u8>().is_err());
        assert!(cursor.slice(4, Some(6)).is_err());
    }

    #[test]
    fn strings_and_tags() {
        let bytes = b"glyf\xE9t";
        let mut cursor = FontData::new(bytes).cursor();
        assert_eq!(cursor.read_string(4).unwrap(), "glyf");
        assert_eq!(cursor.read_string(2).unwrap(), "\u{e9}t");
        cursor.reset();
        assert_eq!(cursor.read::<Tag>(), Ok(Tag::new(b"glyf")));
        assert!(cursor.read_string(3).is_err());
    }

    #[test]
    fn arrays() {
        let bytes = [0, 1, 0, 2, 0, 3];
        let mut cursor = FontData::new(&bytes).cursor();
        let array = cursor.read_array::<u16>(3).unwrap();
        assert_eq!(array.iter().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(cursor.remaining_bytes(), 0);
        cursor.reset();
        assert!(cursor.read_array::<u16>(4).is_err());
    }
}
