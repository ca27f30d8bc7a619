//! Lazily decoded arrays of scalars.

use core::marker::PhantomData;

use types::{Endian, Scalar};

/// An array of fixed-width values, decoded on access.
#[derive(Clone, Copy)]
pub struct ScalarArray<'a, T> {
    bytes: &'a [u8],
    endian: Endian,
    phantom: PhantomData<T>,
}

impl<'a, T: Scalar> ScalarArray<'a, T> {
    pub(crate) fn new(bytes: &'a [u8], endian: Endian) -> Self {
        Self {
            bytes,
            endian,
            phantom: PhantomData,
        }
    }

    /// An empty array.
    pub fn empty() -> Self {
        Self::new(&[], Endian::Big)
    }

    /// The number of items in the array.
    pub fn len(&self) -> usize {
        self.bytes.len() / T::RAW_BYTE_LEN
    }

    /// `true` if the array has no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the item at `index`, if it is in bounds.
    pub fn get(&self, index: usize) -> Option<T> {
        let start = index.checked_mul(T::RAW_BYTE_LEN)?;
        let end = start.checked_add(T::RAW_BYTE_LEN)?;
        let bytes = self.bytes.get(start..end)?;
        T::read_endian(bytes, self.endian)
    }

    /// Returns the final item.
    pub fn last(&self) -> Option<T> {
        self.len().checked_sub(1).and_then(|ix| self.get(ix))
    }

    /// Returns an iterator over the items.
    pub fn iter(&self) -> impl Iterator<Item = T> + 'a + Clone {
        let endian = self.endian;
        self.bytes
            .chunks_exact(T::RAW_BYTE_LEN)
            .filter_map(move |chunk| T::read_endian(chunk, endian))
    }
}

impl<T: Scalar + core::fmt::Debug> core::fmt::Debug for ScalarArray<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access() {
        let bytes = [0xFF, 0xFF, 0x00, 0x02, 0x80, 0x00];
        let array = ScalarArray::<i16>::new(&bytes, Endian::Big);
        assert_eq!(array.len(), 3);
        assert_eq!(array.get(0), Some(-1));
        assert_eq!(array.get(1), Some(2));
        assert_eq!(array.last(), Some(i16::MIN));
        assert_eq!(array.get(3), None);
        assert!(ScalarArray::<u32>::empty().last().is_none());
    }

    #[test]
    fn huge_index() {
        let bytes = [0u8; 4];
        let array = ScalarArray::<u16>::new(&bytes, Endian::Big);
        // the end of the item would overflow
        assert_eq!(array.get(usize::MAX / 2), None);
        assert_eq!(array.get(usize::MAX), None);
    }
}
