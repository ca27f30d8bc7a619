//! small utilities for writing big-endian test data

use std::collections::HashMap;

use sfnt_types::Scalar;

/// A convenience type for generating a buffer of big-endian bytes.
#[derive(Debug, Clone, Default)]
pub struct BeBuffer {
    data: Vec<u8>,
    tagged_locations: HashMap<String, usize>,
}

impl BeBuffer {
    pub fn new() -> Self {
        Default::default()
    }

    /// The current length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer contains zero bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return a reference to the contents of the buffer
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the bytes written so far.
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Write any scalar to this buffer.
    pub fn push(mut self, item: impl Scalar) -> Self {
        self.data.extend(item.to_raw().as_ref());
        self
    }

    pub fn push_with_tag(mut self, item: impl Scalar, tag: &str) -> Self {
        self.tagged_locations
            .insert(tag.to_string(), self.data.len());
        self.data.extend(item.to_raw().as_ref());
        self
    }

    /// Write multiple scalars into the buffer
    pub fn extend<T: Scalar>(mut self, iter: impl IntoIterator<Item = T>) -> Self {
        for item in iter {
            self.data.extend(item.to_raw().as_ref());
        }
        self
    }

    /// Append raw bytes without conversion.
    pub fn extend_bytes(mut self, bytes: &[u8]) -> Self {
        self.data.extend_from_slice(bytes);
        self
    }

    pub fn offset_for(&self, tag: &str) -> usize {
        // panic on unrecognized tags
        self.tagged_locations.get(tag).copied().unwrap()
    }

    fn data_for(&mut self, tag: &str) -> &mut [u8] {
        let offset = self.offset_for(tag);
        &mut self.data[offset..]
    }

    pub fn write_at(&mut self, tag: &str, item: impl Scalar) {
        let data = self.data_for(tag);
        let raw = item.to_raw();
        let new_data: &[u8] = raw.as_ref();

        if data.len() < new_data.len() {
            panic!("not enough room left in buffer for the requested write.");
        }

        for (left, right) in data.iter_mut().zip(new_data) {
            *left = *right
        }
    }
}

impl std::ops::Deref for BeBuffer {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl From<BeBuffer> for Vec<u8> {
    fn from(buf: BeBuffer) -> Self {
        buf.data
    }
}

/// Build a [`BeBuffer`] from a list of scalars.
///
/// Items are separated by commas. Each item is one of:
///
/// - a literal, such as `4u16` or `-1i16`
/// - an array of values sharing a type: `[1u16, 2, 3]`
/// - a value with a location tag, for later patching: `{0u32: "offset"}`
/// - any other expression, in parentheses: `(Tag::new(b"glyf"))`
#[macro_export]
macro_rules! be_buffer {
    ($($tokens:tt)*) => {{
        let builder = $crate::bebuffer::BeBuffer::new();
        $crate::be_buffer_add!(builder, $($tokens)*)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! be_buffer_add {
    ($b:expr $(,)?) => {
        $b
    };
    ($b:expr, $v:literal $(, $($rest:tt)*)?) => {
        $crate::be_buffer_add!($b.push($v), $($($rest)*)?)
    };
    ($b:expr, [$($v:expr),+ $(,)?] $(, $($rest:tt)*)?) => {
        $crate::be_buffer_add!($b.extend([$($v),*]), $($($rest)*)?)
    };
    ($b:expr, {$v:tt : $tag:literal} $(, $($rest:tt)*)?) => {
        $crate::be_buffer_add!($b.push_with_tag($v, $tag), $($($rest)*)?)
    };
    ($b:expr, ($v:expr) $(, $($rest:tt)*)?) => {
        $crate::be_buffer_add!($b.push($v), $($($rest)*)?)
    };
}

#[cfg(test)]
mod tests {
    use sfnt_types::Tag;

    #[test]
    fn macro_items() {
        let mut buf = be_buffer! {
            1u8,
            -2i16,
            [3u16, 4],
            {0u32: "offset"},
            (Tag::new(b"abcd")),
        };
        assert_eq!(buf.len(), 1 + 2 + 4 + 4 + 4);
        assert_eq!(buf.offset_for("offset"), 7);
        buf.write_at("offset", 0x0102_0304u32);
        assert_eq!(
            buf.as_slice(),
            &[1, 0xFF, 0xFE, 0, 3, 0, 4, 1, 2, 3, 4, b'a', b'b', b'c', b'd']
        );
    }
}
