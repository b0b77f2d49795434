//! Runtime value model.
//!
//! Comparison never looks at concrete Rust types directly. Every comparable
//! type implements [`Inspect`], which hands out a borrowed [`Value`] view
//! describing the shape of the datum. The engine dispatches on that closed
//! set of shapes and recurses through the capability traits below.

mod impls;
mod scalar;
mod tag;


use crate::types::Nil;
use std::{
    any::{Any, TypeId},
    cmp::Ordering,
    fmt,
};

// re-exports
pub use scalar::{Scalar, ScalarKind};
pub use tag::ShapeTag;

///
/// Inspect
///
/// Introspection capability for any comparable runtime value.
///
/// The dynamic type tag of a value is its concrete `TypeId`, reached through
/// the `Any` supertrait. Two values are only ever comparable when their tags
/// agree (or when one of them is nil).
///

pub trait Inspect: Any {
    /// Shape view of this value.
    fn inspect(&self) -> Value<'_>;

    /// Human-readable type label used in diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

///
/// Value
///
/// Borrowed shape view over an inspected datum.
///
/// Nil         → absent value (`None`, [`crate::types::Nil`]).
/// Reference   → pointer-like indirection to another inspected value.
/// Dynamic     → interface slot (`Box<dyn Inspect>`); compared by the type
///               of the value it holds, not by the slot type.
///

#[derive(Clone, Copy)]
pub enum Value<'a> {
    Nil,
    Scalar(Scalar<'a>),
    Reference(&'a dyn Inspect),
    Dynamic(&'a dyn Inspect),
    Record(&'a dyn Record),
    /// Fixed-length sequence; the length is part of the type.
    Array(&'a dyn Sequence),
    /// Dynamic-length sequence.
    List(&'a dyn Sequence),
    Map(&'a dyn Collection),
    Custom(&'a dyn DynComparable),
    Opaque(&'a dyn DynEq),
}

impl<'a> Value<'a> {
    #[must_use]
    pub const fn tag(&self) -> ShapeTag {
        match self {
            Self::Nil => ShapeTag::Nil,
            Self::Scalar(_) => ShapeTag::Scalar,
            Self::Reference(_) => ShapeTag::Reference,
            Self::Dynamic(_) => ShapeTag::Dynamic,
            Self::Record(_) => ShapeTag::Record,
            Self::Array(_) => ShapeTag::Array,
            Self::List(_) => ShapeTag::List,
            Self::Map(_) => ShapeTag::Map,
            Self::Custom(_) => ShapeTag::Custom,
            Self::Opaque(_) => ShapeTag::Opaque,
        }
    }

    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    #[must_use]
    pub const fn as_scalar(&self) -> Option<Scalar<'a>> {
        match self {
            Self::Scalar(scalar) => Some(*scalar),
            _ => None,
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => f.debug_tuple("Scalar").field(scalar).finish(),
            Self::Reference(target) | Self::Dynamic(target) => f
                .debug_tuple(self.tag().label())
                .field(&target.type_name())
                .finish(),
            Self::Record(record) => f
                .debug_struct("Record")
                .field("fields", &record.field_count())
                .finish(),
            Self::Array(seq) | Self::List(seq) => f
                .debug_struct(self.tag().label())
                .field("len", &seq.len())
                .finish(),
            Self::Map(map) => f.debug_struct("Map").field("len", &map.len()).finish(),
            _ => f.write_str(self.tag().label()),
        }
    }
}

// ============================================================================
// SHAPE CAPABILITIES
// ============================================================================
//
// Each aggregate shape exposes just enough structure for the engine to
// recurse: ordered fields, indexed elements, or keyed entries.
//

///
/// Record
///
/// Aggregate with a fixed list of fields in declaration order.
///

pub trait Record {
    fn field_count(&self) -> usize;

    /// Field at `index`, counting in declaration order.
    fn field(&self, index: usize) -> Option<&dyn Inspect>;

    fn field_name(&self, _index: usize) -> Option<&'static str> {
        None
    }
}

///
/// Sequence
///
/// Indexed run of elements, backing both the `Array` and `List` shapes.
///

pub trait Sequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn element(&self, index: usize) -> Option<&dyn Inspect>;

    /// Contiguous byte view, when the elements are raw `u8`s.
    fn as_bytes(&self) -> Option<&[u8]> {
        None
    }
}

///
/// Collection
///
/// Associative container keyed by inspected values.
///

pub trait Collection {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Inspect, &dyn Inspect)> + '_>;

    /// Value stored under a key taken from a collection of the same type.
    fn lookup(&self, key: &dyn Inspect) -> Option<&dyn Inspect>;

    /// True when `entries` yields keys in no particular order.
    fn is_unordered(&self) -> bool {
        false
    }
}

// ============================================================================
// CUSTOM COMPARISON
// ============================================================================

///
/// Comparable
///
/// Type-supplied three-way comparison. A type whose `inspect` reports
/// [`Value::Custom`] is ordered exclusively through this hook; its fields are
/// never visited.
///

pub trait Comparable: Any {
    fn compare_to(&self, other: &Self) -> Ordering;
}

///
/// DynComparable
///
/// Object-safe bridge over [`Comparable`].
///
/// The argument must be of the implementing type. Passing anything else is a
/// contract violation and panics rather than producing an arbitrary order.
///

pub trait DynComparable {
    fn compare_dyn(&self, other: &dyn Any) -> Ordering;

    fn as_any(&self) -> &dyn Any;
}

impl<T: Comparable> DynComparable for T {
    fn compare_dyn(&self, other: &dyn Any) -> Ordering {
        let Some(other) = other.downcast_ref::<Self>() else {
            panic!(
                "Comparable::compare_to contract violated: {} compared against an incompatible type",
                std::any::type_name::<Self>()
            );
        };

        self.compare_to(other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

///
/// DynEq
///
/// Object-safe equality for values without a recognized shape.
///

pub trait DynEq {
    fn dyn_eq(&self, other: &dyn Any) -> bool;

    fn as_any(&self) -> &dyn Any;
}

impl<T: PartialEq + 'static> DynEq for T {
    fn dyn_eq(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Self>().is_some_and(|other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Concrete runtime type of an inspected value.
#[must_use]
pub fn type_id_of(value: &dyn Inspect) -> TypeId {
    let any: &dyn Any = value;
    any.type_id()
}

/// Unwrap interface slots down to the concrete value they hold.
#[must_use]
pub fn resolve_dynamic(mut value: &dyn Inspect) -> &dyn Inspect {
    while let Value::Dynamic(inner) = value.inspect() {
        value = inner;
    }

    value
}

/// Follow every reference level to the final target.
///
/// Interface slots met along the way are unwrapped too, so a boxed pointer
/// to a pointer still reaches its innermost datum.
#[must_use]
pub fn dereference(mut value: &dyn Inspect) -> &dyn Inspect {
    loop {
        match value.inspect() {
            Value::Reference(target) | Value::Dynamic(target) => value = target,
            _ => return value,
        }
    }
}

/// True when the value is nil after following every indirection level.
#[must_use]
pub fn is_nil(value: &dyn Inspect) -> bool {
    dereference(value).inspect().is_nil()
}

/// True for [`Nil`], bare or held in an interface slot.
///
/// Typed nils such as `None::<i32>` are not untyped: they still carry the
/// type of the pointer they stand in for.
#[must_use]
pub fn is_untyped_nil(value: &dyn Inspect) -> bool {
    type_id_of(resolve_dynamic(value)) == TypeId::of::<Nil>()
}
