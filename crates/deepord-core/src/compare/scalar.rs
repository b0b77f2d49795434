use crate::{
    config::FloatOrder,
    error::CompareError,
    order::{Comparison, Order},
    value::Scalar,
};

/// Compare two scalars of the same kind.
///
/// Mixed kinds never coerce: an `Int32` and an `Int64` holding the same
/// number are a type mismatch.
pub(crate) fn compare_scalars(
    left: Scalar<'_>,
    right: Scalar<'_>,
    float_order: FloatOrder,
) -> Comparison {
    #[allow(clippy::match_same_arms)]
    match (left, right) {
        (Scalar::Bool(a), Scalar::Bool(b)) => a.cmp(&b).into(),
        (Scalar::Char(a), Scalar::Char(b)) => a.cmp(&b).into(),
        (Scalar::Complex32(a), Scalar::Complex32(b)) => {
            compare_complex(a.parts(), b.parts(), float_order)
        }
        (Scalar::Complex64(a), Scalar::Complex64(b)) => {
            compare_complex(a.parts(), b.parts(), float_order)
        }
        (Scalar::Float32(a), Scalar::Float32(b)) => {
            compare_floats(f64::from(a), f64::from(b), float_order)
        }
        (Scalar::Float64(a), Scalar::Float64(b)) => compare_floats(a, b, float_order),
        (Scalar::Int8(a), Scalar::Int8(b)) => a.cmp(&b).into(),
        (Scalar::Int16(a), Scalar::Int16(b)) => a.cmp(&b).into(),
        (Scalar::Int32(a), Scalar::Int32(b)) => a.cmp(&b).into(),
        (Scalar::Int64(a), Scalar::Int64(b)) => a.cmp(&b).into(),
        (Scalar::Int128(a), Scalar::Int128(b)) => a.cmp(&b).into(),
        (Scalar::Isize(a), Scalar::Isize(b)) => a.cmp(&b).into(),
        // byte order of UTF-8 is codepoint order
        (Scalar::Text(a), Scalar::Text(b)) => a.cmp(b).into(),
        (Scalar::Timestamp(a), Scalar::Timestamp(b)) => a.cmp(&b).into(),
        (Scalar::Uint8(a), Scalar::Uint8(b)) => a.cmp(&b).into(),
        (Scalar::Uint16(a), Scalar::Uint16(b)) => a.cmp(&b).into(),
        (Scalar::Uint32(a), Scalar::Uint32(b)) => a.cmp(&b).into(),
        (Scalar::Uint64(a), Scalar::Uint64(b)) => a.cmp(&b).into(),
        (Scalar::Uint128(a), Scalar::Uint128(b)) => a.cmp(&b).into(),
        (Scalar::Usize(a), Scalar::Usize(b)) => a.cmp(&b).into(),
        (a, b) => {
            tracing::trace!(left = %a.kind(), right = %b.kind(), "scalar kind mismatch");
            Comparison::invalid(CompareError::TypeMismatch {
                left: kind_label(a),
                right: kind_label(b),
            })
        }
    }
}

// Under the natural order NaN equals NaN and is unordered against numbers.
fn compare_floats(left: f64, right: f64, float_order: FloatOrder) -> Comparison {
    match float_order {
        FloatOrder::Total => left.total_cmp(&right).into(),
        FloatOrder::Natural => match left.partial_cmp(&right) {
            Some(ordering) => ordering.into(),
            None if left.is_nan() && right.is_nan() => Comparison::EQUAL,
            None => {
                tracing::trace!(left, right, "unordered float pair");
                Comparison::invalid(CompareError::Incomparable)
            }
        },
    }
}

// Real part first, imaginary part breaks ties.
fn compare_complex(left: (f64, f64), right: (f64, f64), float_order: FloatOrder) -> Comparison {
    let real = compare_floats(left.0, right.0, float_order);
    if real.order() != Order::Equal {
        return real;
    }

    compare_floats(left.1, right.1, float_order)
}

const fn kind_label(scalar: Scalar<'_>) -> &'static str {
    match scalar {
        Scalar::Bool(_) => "bool",
        Scalar::Char(_) => "char",
        Scalar::Complex32(_) => "Complex32",
        Scalar::Complex64(_) => "Complex64",
        Scalar::Float32(_) => "f32",
        Scalar::Float64(_) => "f64",
        Scalar::Int8(_) => "i8",
        Scalar::Int16(_) => "i16",
        Scalar::Int32(_) => "i32",
        Scalar::Int64(_) => "i64",
        Scalar::Int128(_) => "i128",
        Scalar::Isize(_) => "isize",
        Scalar::Text(_) => "text",
        Scalar::Timestamp(_) => "timestamp",
        Scalar::Uint8(_) => "u8",
        Scalar::Uint16(_) => "u16",
        Scalar::Uint32(_) => "u32",
        Scalar::Uint64(_) => "u64",
        Scalar::Uint128(_) => "u128",
        Scalar::Usize(_) => "usize",
    }
}
