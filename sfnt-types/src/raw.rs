//! types for working with raw bytes

/// The byte order used to interpret a run of font data.
///
/// sfnt data is big-endian throughout; little-endian reads exist for
/// embedded payloads that declare their own byte order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Endian {
    Little,
    #[default]
    Big,
}

/// A trait for font scalars.
///
/// This is an internal trait for decoding fixed-width values from raw bytes.
/// The raw representation is always a byte array; the byte order is chosen
/// at read time.
pub trait Scalar: Sized + Copy {
    /// The raw byte representation of this type.
    type Raw: sealed::ByteArray + AsRef<[u8]> + Copy;

    /// The size of the raw type.
    const RAW_BYTE_LEN: usize = std::mem::size_of::<Self::Raw>();

    /// Create an instance of this type from raw big-endian bytes
    fn from_raw(raw: Self::Raw) -> Self;

    /// Create an instance of this type from raw little-endian bytes
    fn from_raw_le(raw: Self::Raw) -> Self;

    /// Encode this type as raw big-endian bytes
    fn to_raw(self) -> Self::Raw;

    /// Attempt to read a big-endian scalar from a slice.
    ///
    /// This will always succeed if `slice.len() == Self::RAW_BYTE_LEN`, and will
    /// always return `None` otherwise.
    fn read(slice: &[u8]) -> Option<Self> {
        sealed::ByteArray::from_slice(slice).map(Self::from_raw)
    }

    /// Attempt to read a scalar in the given byte order from a slice.
    fn read_endian(slice: &[u8], endian: Endian) -> Option<Self> {
        let raw: Self::Raw = sealed::ByteArray::from_slice(slice)?;
        Some(match endian {
            Endian::Big => Self::from_raw(raw),
            Endian::Little => Self::from_raw_le(raw),
        })
    }
}

pub(crate) mod sealed {
    /// A fixed-size array of bytes.
    pub trait ByteArray: Copy + AsRef<[u8]> + bytemuck::Pod {
        fn from_slice(slice: &[u8]) -> Option<Self> {
            bytemuck::try_from_bytes(slice).ok().copied()
        }
    }

    impl<const N: usize> ByteArray for [u8; N] {}
}

/// An internal macro for implementing `Scalar` on a newtype around another scalar.
macro_rules! newtype_scalar {
    ($name:ident, $raw:ty) => {
        impl crate::raw::Scalar for $name {
            type Raw = $raw;

            fn from_raw(raw: $raw) -> Self {
                Self(crate::raw::Scalar::from_raw(raw))
            }

            fn from_raw_le(raw: $raw) -> Self {
                Self(crate::raw::Scalar::from_raw_le(raw))
            }

            fn to_raw(self) -> $raw {
                crate::raw::Scalar::to_raw(self.0)
            }
        }
    };
}

pub(crate) use newtype_scalar;

macro_rules! int_scalar {
    ($ty:ty, $raw:ty) => {
        impl Scalar for $ty {
            type Raw = $raw;

            fn from_raw(raw: $raw) -> $ty {
                Self::from_be_bytes(raw)
            }

            fn from_raw_le(raw: $raw) -> $ty {
                Self::from_le_bytes(raw)
            }

            fn to_raw(self) -> $raw {
                self.to_be_bytes()
            }
        }
    };
}

int_scalar!(u8, [u8; 1]);
int_scalar!(i8, [u8; 1]);
int_scalar!(u16, [u8; 2]);
int_scalar!(i16, [u8; 2]);
int_scalar!(u32, [u8; 4]);
int_scalar!(i32, [u8; 4]);
int_scalar!(u64, [u8; 8]);
int_scalar!(i64, [u8; 8]);
// floats are reinterpreted from their IEEE-754 bits after the byte order
// conversion, so the result does not depend on the host
int_scalar!(f32, [u8; 4]);
int_scalar!(f64, [u8; 8]);
