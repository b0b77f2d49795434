use crate::types::{Complex32, Complex64};
use derive_more::Display;

///
/// Scalar
///
/// Primitive payload of a [`super::Value::Scalar`].
///
/// Timestamp   → signed nanoseconds since the Unix epoch (absolute instant).
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    Char(char),
    Complex32(Complex32),
    Complex64(Complex64),
    Float32(f32),
    Float64(f64),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Int128(i128),
    Isize(isize),
    Text(&'a str),
    Timestamp(i128),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Uint128(u128),
    Usize(usize),
}

impl Scalar<'_> {
    #[must_use]
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::Bool(_) => ScalarKind::Bool,
            Self::Char(_) => ScalarKind::Char,
            Self::Complex32(_) => ScalarKind::Complex32,
            Self::Complex64(_) => ScalarKind::Complex64,
            Self::Float32(_) => ScalarKind::Float32,
            Self::Float64(_) => ScalarKind::Float64,
            Self::Int8(_) => ScalarKind::Int8,
            Self::Int16(_) => ScalarKind::Int16,
            Self::Int32(_) => ScalarKind::Int32,
            Self::Int64(_) => ScalarKind::Int64,
            Self::Int128(_) => ScalarKind::Int128,
            Self::Isize(_) => ScalarKind::Isize,
            Self::Text(_) => ScalarKind::Text,
            Self::Timestamp(_) => ScalarKind::Timestamp,
            Self::Uint8(_) => ScalarKind::Uint8,
            Self::Uint16(_) => ScalarKind::Uint16,
            Self::Uint32(_) => ScalarKind::Uint32,
            Self::Uint64(_) => ScalarKind::Uint64,
            Self::Uint128(_) => ScalarKind::Uint128,
            Self::Usize(_) => ScalarKind::Usize,
        }
    }
}

///
/// ScalarKind
///
/// Runtime kind probe for scalars. User newtypes over a primitive report the
/// primitive's kind while keeping their own dynamic type.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ScalarKind {
    Bool,
    Char,
    Complex32,
    Complex64,
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    Isize,
    Text,
    Timestamp,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uint128,
    Usize,
}

impl ScalarKind {
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(
            self,
            Self::Float32 | Self::Float64 | Self::Complex32 | Self::Complex64
        )
    }

    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Int128
                | Self::Isize
                | Self::Uint8
                | Self::Uint16
                | Self::Uint32
                | Self::Uint64
                | Self::Uint128
                | Self::Usize
        )
    }
}
