use crate::{
    compare::{Walk, nil_rule},
    error::CompareError,
    order::{self, Comparison},
    value::{self, Collection, Inspect, Record, Sequence},
};
use std::ptr;

impl Walk<'_> {
    /// Dereference both pointers through every level, then compare targets.
    /// A chain that ends in nil is nil, whichever level it stops at.
    pub(super) fn compare_references(
        &self,
        left: &dyn Inspect,
        right: &dyn Inspect,
        depth: usize,
    ) -> Comparison {
        let left = value::dereference(left);
        let right = value::dereference(right);

        if let Some(cmp) = nil_rule(left.inspect().is_nil(), right.inspect().is_nil()) {
            return cmp;
        }

        if same_target(left, right) {
            return Comparison::EQUAL;
        }

        self.compare(left, right, depth + 1)
    }

    /// Field count first (fewer is LESS), then fields in declaration order.
    pub(super) fn compare_records(
        &self,
        left: &dyn Record,
        right: &dyn Record,
        depth: usize,
    ) -> Comparison {
        let (left_count, right_count) = (left.field_count(), right.field_count());
        if left_count != right_count {
            return left_count.cmp(&right_count).into();
        }

        for index in 0..left_count {
            let (Some(a), Some(b)) = (left.field(index), right.field(index)) else {
                tracing::trace!(index, "record field missing");
                return Comparison::invalid(CompareError::ValueMismatch);
            };

            let cmp = self.compare(a, b, depth + 1);
            if !cmp.is_equal() {
                return cmp;
            }
        }

        Comparison::EQUAL
    }

    /// Lexicographic: the first differing element decides; an equal common
    /// prefix falls back to length, shorter first.
    pub(super) fn compare_sequences(
        &self,
        left: &dyn Sequence,
        right: &dyn Sequence,
        depth: usize,
    ) -> Comparison {
        if ptr::addr_eq(left, right) {
            return Comparison::EQUAL;
        }

        if let (Some(a), Some(b)) = (left.as_bytes(), right.as_bytes()) {
            return a.cmp(b).into();
        }

        let shared = left.len().min(right.len());
        for index in 0..shared {
            let (Some(a), Some(b)) = (left.element(index), right.element(index)) else {
                tracing::trace!(index, "sequence element missing");
                return Comparison::invalid(CompareError::ValueMismatch);
            };

            let cmp = self.compare(a, b, depth + 1);
            if !cmp.is_equal() {
                return cmp;
            }
        }

        left.len().cmp(&right.len()).into()
    }

    /// Entry count first (larger is GREATER). Every left key must exist on
    /// the right; values are then compared in key order.
    pub(super) fn compare_collections(
        &self,
        left: &dyn Collection,
        right: &dyn Collection,
        depth: usize,
    ) -> Comparison {
        if ptr::addr_eq(left, right) {
            return Comparison::EQUAL;
        }

        let (left_len, right_len) = (left.len(), right.len());
        if left_len != right_len {
            return left_len.cmp(&right_len).into();
        }

        let mut pairs = Vec::with_capacity(left_len);
        for (key, value) in left.entries() {
            let Some(other) = right.lookup(key) else {
                tracing::trace!(key = key.type_name(), depth, "collection key missing");
                return Comparison::invalid(CompareError::ValueMismatch);
            };

            pairs.push((key, value, other));
        }

        // unspecified iteration order would make the first difference depend
        // on hasher state. Keys the engine cannot order among themselves
        // (opaque parts, NaN next to numbers) still follow iteration order.
        if left.is_unordered() {
            let keys = order::grouped_order(pairs.len(), |a, b| {
                self.compare(pairs[a].0, pairs[b].0, depth + 1).ordering()
            });
            pairs = keys.into_iter().map(|index| pairs[index]).collect();
        }

        for (_, value, other) in pairs {
            let cmp = self.compare(value, other, depth + 1);
            if !cmp.is_equal() {
                return cmp;
            }
        }

        Comparison::EQUAL
    }
}

// Same address and same dynamic type. A record and its first field can share
// an address, so the address alone is not identity.
fn same_target(left: &dyn Inspect, right: &dyn Inspect) -> bool {
    ptr::addr_eq(left, right) && value::type_id_of(left) == value::type_id_of(right)
}
