//! Comparator factory and combinators.
//!
//! A [`Comparator`] is any reusable `(left, right) -> Comparison` function.
//! [`comparator_for`] resolves one from a sample value, [`reverse`] flips
//! an existing one, and [`sort_with`] adapts one to slice sorting.


use crate::{
    compare::{Comparer, scalar},
    error::CompareError,
    order::{self, Comparison},
    value::{self, Inspect, ScalarKind, Value},
};
use std::{any::TypeId, error::Error};

///
/// Comparator
///

pub trait Comparator {
    fn compare(&self, left: &dyn Inspect, right: &dyn Inspect) -> Comparison;

    /// Descending counterpart of this comparator.
    fn reversed(self) -> Reverse<Self>
    where
        Self: Sized,
    {
        Reverse(self)
    }
}

impl<F> Comparator for F
where
    F: Fn(&dyn Inspect, &dyn Inspect) -> Comparison,
{
    fn compare(&self, left: &dyn Inspect, right: &dyn Inspect) -> Comparison {
        self(left, right)
    }
}

impl Comparator for Comparer {
    fn compare(&self, left: &dyn Inspect, right: &dyn Inspect) -> Comparison {
        Self::compare(self, left, right)
    }
}

///
/// Reverse
///
/// Negates the wrapped comparator's result. INVALID stays INVALID and keeps
/// its reason.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Reverse<C>(pub C);

impl<C: Comparator> Comparator for Reverse<C> {
    fn compare(&self, left: &dyn Inspect, right: &dyn Inspect) -> Comparison {
        self.0.compare(left, right).reverse()
    }
}

/// Flip ascending order into descending without duplicating logic.
pub const fn reverse<C: Comparator>(comparator: C) -> Reverse<C> {
    Reverse(comparator)
}

///
/// SampleComparator
///
/// Comparator resolved from a sample value. Scalar samples bind the
/// comparator to the sample's dynamic type and kind; anything else falls
/// back to the full structural engine.
///

#[derive(Clone, Copy, Debug)]
pub struct SampleComparator {
    binding: Binding,
    comparer: Comparer,
}

#[derive(Clone, Copy, Debug)]
enum Binding {
    Scalar {
        kind: ScalarKind,
        type_id: TypeId,
        type_name: &'static str,
    },
    Structural,
}

impl SampleComparator {
    pub(crate) fn bind(sample: &dyn Inspect, comparer: Comparer) -> Self {
        let sample = value::resolve_dynamic(sample);

        let binding = match sample.inspect() {
            Value::Scalar(scalar) => Binding::Scalar {
                kind: scalar.kind(),
                type_id: value::type_id_of(sample),
                type_name: sample.type_name(),
            },
            _ => Binding::Structural,
        };

        Self { binding, comparer }
    }

    /// Scalar kind this comparator is bound to, if any.
    #[must_use]
    pub const fn scalar_kind(&self) -> Option<ScalarKind> {
        match self.binding {
            Binding::Scalar { kind, .. } => Some(kind),
            Binding::Structural => None,
        }
    }

    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(self.binding, Binding::Structural)
    }
}

impl Comparator for SampleComparator {
    fn compare(&self, left: &dyn Inspect, right: &dyn Inspect) -> Comparison {
        let Binding::Scalar {
            kind,
            type_id,
            type_name,
        } = self.binding
        else {
            return self.comparer.compare(left, right);
        };

        let left = value::resolve_dynamic(left);
        let right = value::resolve_dynamic(right);

        for operand in [left, right] {
            if value::type_id_of(operand) != type_id {
                tracing::trace!(
                    expected = type_name,
                    got = operand.type_name(),
                    "argument does not match comparator type"
                );
                return Comparison::invalid(CompareError::TypeMismatch {
                    left: type_name,
                    right: operand.type_name(),
                });
            }
        }

        match (left.inspect(), right.inspect()) {
            (Value::Scalar(a), Value::Scalar(b)) if a.kind() == kind && b.kind() == kind => {
                scalar::compare_scalars(a, b, self.comparer.config().float_order)
            }
            _ => Comparison::invalid(CompareError::TypeMismatch {
                left: type_name,
                right: type_name,
            }),
        }
    }
}

/// Comparator for the dynamic type of `sample`, using default settings.
#[must_use]
pub fn comparator_for(sample: &dyn Inspect) -> SampleComparator {
    Comparer::default().comparator_for(sample)
}

/// Order two errors by their rendered messages.
#[must_use]
pub fn compare_error_messages(left: &dyn Error, right: &dyn Error) -> Comparison {
    left.to_string().cmp(&right.to_string()).into()
}

/// Stable sort that tolerates INVALID outcomes.
///
/// Items the comparator can order against each other come out sorted, in one
/// group. An item that is unordered against a group (NaN among numbers, a
/// different type in a heterogeneous list) is placed in a later group
/// instead. Groups follow the order in which their first item appeared.
pub fn sort_with<T, C>(items: &mut [T], comparator: &C)
where
    T: Inspect,
    C: Comparator + ?Sized,
{
    let order = order::grouped_order(items.len(), |a, b| {
        comparator.compare(&items[a], &items[b]).ordering()
    });

    order::apply_order(items, &order);
}

/// Sorted copy of `items`.
#[must_use]
pub fn sorted_with<T, C>(items: &[T], comparator: &C) -> Vec<T>
where
    T: Inspect + Clone,
    C: Comparator + ?Sized,
{
    let mut sorted = items.to_vec();
    sort_with(&mut sorted, comparator);

    sorted
}
