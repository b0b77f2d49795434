//! Recursive value-comparison engine.
//!
//! A call enters [`Walk::compare`], which resolves interface slots, applies
//! the untyped-nil rule, rejects mismatched dynamic types, and then dispatches
//! on the shape pair. Typed nil (`None`, a null pointer chain) is only
//! collapsed after the type check, alongside reference dereferencing. Aggregate shapes recurse back into `compare` for every nested
//! element until they bottom out at scalars or exhausted structure.

pub(crate) mod scalar;
mod structural;

#[cfg(test)]
mod property;

use crate::{
    comparator::SampleComparator,
    config::CompareConfig,
    error::{CompareError, ConfigError},
    order::Comparison,
    value::{self, Inspect, Value},
};
use std::cmp::Ordering;

///
/// Comparer
///
/// Configured comparison engine. Stateless between calls; a single instance
/// can be shared freely across threads.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Comparer {
    config: CompareConfig,
}

impl Comparer {
    /// Build an engine without validating the configuration.
    #[must_use]
    pub const fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    /// Build an engine, rejecting invalid configuration.
    pub fn try_new(config: CompareConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self::new(config))
    }

    #[must_use]
    pub const fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Three-way compare two values of any inspectable type.
    #[must_use]
    pub fn compare(&self, left: &dyn Inspect, right: &dyn Inspect) -> Comparison {
        Walk {
            config: &self.config,
        }
        .compare(left, right, 0)
    }

    /// `compare(left, right) == EQUAL`.
    #[must_use]
    pub fn equals(&self, left: &dyn Inspect, right: &dyn Inspect) -> bool {
        self.compare(left, right).is_equal()
    }

    /// Reusable comparator bound to the dynamic type of `sample`.
    #[must_use]
    pub fn comparator_for(&self, sample: &dyn Inspect) -> SampleComparator {
        SampleComparator::bind(sample, *self)
    }
}

/// Compare two values with the default configuration.
#[must_use]
pub fn compare(left: &dyn Inspect, right: &dyn Inspect) -> Comparison {
    Comparer::default().compare(left, right)
}

/// Equality derived from [`compare`]; never re-implements shape logic.
#[must_use]
pub fn equals(left: &dyn Inspect, right: &dyn Inspect) -> bool {
    compare(left, right).is_equal()
}

///
/// Walk
///
/// One comparison in flight. Holds nothing but the borrowed configuration;
/// `depth` travels on the call stack.
///

pub(crate) struct Walk<'c> {
    pub(crate) config: &'c CompareConfig,
}

impl Walk<'_> {
    pub(crate) fn compare(
        &self,
        left: &dyn Inspect,
        right: &dyn Inspect,
        depth: usize,
    ) -> Comparison {
        if let Some(limit) = self.config.max_depth
            && depth > limit
        {
            tracing::debug!(limit, depth, "comparison stopped at depth limit");
            return Comparison::invalid(CompareError::DepthExceeded { limit });
        }

        let left = value::resolve_dynamic(left);
        let right = value::resolve_dynamic(right);

        // only an untyped nil skips the type check; typed nil pointers are
        // collapsed once both sides are known to share a type
        if (value::is_untyped_nil(left) || value::is_untyped_nil(right))
            && let Some(cmp) = nil_rule(value::is_nil(left), value::is_nil(right))
        {
            return cmp;
        }

        if value::type_id_of(left) != value::type_id_of(right) {
            tracing::trace!(
                left = left.type_name(),
                right = right.type_name(),
                depth,
                "type mismatch"
            );
            return Comparison::invalid(CompareError::TypeMismatch {
                left: left.type_name(),
                right: right.type_name(),
            });
        }

        self.compare_shapes(left, right, depth)
    }

    fn compare_shapes(&self, left: &dyn Inspect, right: &dyn Inspect, depth: usize) -> Comparison {
        match (left.inspect(), right.inspect()) {
            (Value::Scalar(a), Value::Scalar(b)) => {
                scalar::compare_scalars(a, b, self.config.float_order)
            }
            (Value::Nil | Value::Reference(_), _) | (_, Value::Nil | Value::Reference(_)) => {
                self.compare_references(left, right, depth)
            }
            (Value::Custom(a), Value::Custom(b)) => Comparison::from(a.compare_dyn(b.as_any())),
            (Value::Record(a), Value::Record(b)) => self.compare_records(a, b, depth),
            (Value::Array(a), Value::Array(b)) | (Value::List(a), Value::List(b)) => {
                self.compare_sequences(a, b, depth)
            }
            (Value::Map(a), Value::Map(b)) => self.compare_collections(a, b, depth),
            (Value::Opaque(a), Value::Opaque(b)) => {
                if std::ptr::addr_eq(left, right) || a.dyn_eq(b.as_any()) {
                    Comparison::EQUAL
                } else {
                    tracing::trace!(left = left.type_name(), depth, "opaque values differ");
                    Comparison::invalid(CompareError::Incomparable)
                }
            }
            (a, b) => {
                // same dynamic type, different shapes: includes a custom
                // comparable paired with a plain record
                tracing::trace!(
                    left = a.tag().label(),
                    right = b.tag().label(),
                    depth,
                    "shape mismatch"
                );
                Comparison::invalid(CompareError::TypeMismatch {
                    left: left.type_name(),
                    right: right.type_name(),
                })
            }
        }
    }
}

/// EQUAL for two nils, otherwise nil orders first.
pub(crate) const fn nil_rule(left_nil: bool, right_nil: bool) -> Option<Comparison> {
    match (left_nil, right_nil) {
        (true, true) => Some(Comparison::EQUAL),
        (true, false) => Some(Comparison::nil_asymmetry(Ordering::Less)),
        (false, true) => Some(Comparison::nil_asymmetry(Ordering::Greater)),
        (false, false) => None,
    }
}
