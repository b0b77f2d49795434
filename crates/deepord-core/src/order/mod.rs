#[cfg(test)]
mod tests;

use crate::error::CompareError;
use std::{cmp::Ordering, fmt};

///
/// Order
///
/// Tri-state ordering plus the "could not compare" outcome.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Order {
    Less,
    Equal,
    Greater,
    Invalid,
}

impl Order {
    /// Signed tri-state (-1, 0, 1); `None` for `Invalid`.
    #[must_use]
    pub const fn sign(self) -> Option<i8> {
        match self {
            Self::Less => Some(-1),
            Self::Equal => Some(0),
            Self::Greater => Some(1),
            Self::Invalid => None,
        }
    }

    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Less => Self::Greater,
            Self::Greater => Self::Less,
            other => other,
        }
    }

    #[must_use]
    pub const fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }

    #[must_use]
    pub const fn to_ordering(self) -> Option<Ordering> {
        match self {
            Self::Less => Some(Ordering::Less),
            Self::Equal => Some(Ordering::Equal),
            Self::Greater => Some(Ordering::Greater),
            Self::Invalid => None,
        }
    }
}

impl From<Ordering> for Order {
    fn from(ordering: Ordering) -> Self {
        Self::from_ordering(ordering)
    }
}

///
/// Comparison
///
/// Result of comparing two values: an [`Order`] and, when no clean relation
/// could be established, the [`CompareError`] explaining why.
///
/// `Invalid` always carries a reason. A directional order carries a reason
/// only for nil asymmetry, where nil sorts first.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Comparison {
    order: Order,
    reason: Option<CompareError>,
}

impl Comparison {
    pub const EQUAL: Self = Self::ordered(Order::Equal);
    pub const LESS: Self = Self::ordered(Order::Less);
    pub const GREATER: Self = Self::ordered(Order::Greater);

    const fn ordered(order: Order) -> Self {
        Self {
            order,
            reason: None,
        }
    }

    #[must_use]
    pub const fn invalid(reason: CompareError) -> Self {
        Self {
            order: Order::Invalid,
            reason: Some(reason),
        }
    }

    /// Directional result for a nil / non-nil pair.
    #[must_use]
    pub const fn nil_asymmetry(direction: Ordering) -> Self {
        Self {
            order: Order::from_ordering(direction),
            reason: Some(CompareError::NilValue),
        }
    }

    #[must_use]
    pub const fn order(self) -> Order {
        self.order
    }

    #[must_use]
    pub const fn reason(self) -> Option<CompareError> {
        self.reason
    }

    #[must_use]
    pub const fn ordering(self) -> Option<Ordering> {
        self.order.to_ordering()
    }

    #[must_use]
    pub const fn sign(self) -> Option<i8> {
        self.order.sign()
    }

    #[must_use]
    pub const fn is_equal(self) -> bool {
        matches!(self.order, Order::Equal)
    }

    #[must_use]
    pub const fn is_less(self) -> bool {
        matches!(self.order, Order::Less)
    }

    #[must_use]
    pub const fn is_greater(self) -> bool {
        matches!(self.order, Order::Greater)
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self.order, Order::Invalid)
    }

    /// Flip LESS and GREATER; EQUAL, INVALID, and the reason are kept.
    #[must_use]
    pub const fn reverse(self) -> Self {
        Self {
            order: self.order.reverse(),
            reason: self.reason,
        }
    }

    /// Ordering for sort adapters; INVALID maps to `default`.
    #[must_use]
    pub fn ordering_or(self, default: Ordering) -> Ordering {
        self.ordering().unwrap_or(default)
    }

    /// `Ok` for any usable direction (nil asymmetry included),
    /// `Err(reason)` for INVALID.
    pub fn into_result(self) -> Result<Ordering, CompareError> {
        match self.ordering() {
            Some(ordering) => Ok(ordering),
            None => Err(self.reason.unwrap_or(CompareError::Incomparable)),
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        Self::ordered(Order::from_ordering(ordering))
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.order {
            Order::Less => "less",
            Order::Equal => "equal",
            Order::Greater => "greater",
            Order::Invalid => "invalid",
        };

        match self.reason {
            Some(reason) => write!(f, "{label}: {reason}"),
            None => f.write_str(label),
        }
    }
}

// ============================================================================
// GROUPED ORDERING
// ============================================================================

/// Stable arrangement of `len` items under a possibly partial order.
///
/// Items are binary-inserted into groups. An item that is unordered (`None`)
/// against any member it meets in a group moves on to the next group, or
/// opens a new one.
/// Groups are emitted in order of first appearance. `std` sorts are never
/// handed an inconsistent comparator.
///
/// Returns item indexes in their final order.
pub(crate) fn grouped_order<F>(len: usize, mut cmp: F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> Option<Ordering>,
{
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for index in 0..len {
        let slot = groups.iter().enumerate().find_map(|(group, members)| {
            upper_bound(members, index, &mut cmp).map(|pos| (group, pos))
        });

        match slot {
            Some((group, pos)) => groups[group].insert(pos, index),
            None => groups.push(vec![index]),
        }
    }

    if groups.len() > 1 {
        tracing::trace!(len, groups = groups.len(), "items split into unordered groups");
    }

    groups.into_iter().flatten().collect()
}

// Position after every member not greater than `index`.
fn upper_bound<F>(members: &[usize], index: usize, cmp: &mut F) -> Option<usize>
where
    F: FnMut(usize, usize) -> Option<Ordering>,
{
    let (mut low, mut high) = (0, members.len());

    while low < high {
        let mid = low + (high - low) / 2;
        match cmp(members[mid], index)? {
            Ordering::Greater => high = mid,
            Ordering::Less | Ordering::Equal => low = mid + 1,
        }
    }

    Some(low)
}

/// Move `items` into the order given by `order` (a permutation of indexes).
pub(crate) fn apply_order<T>(items: &mut [T], order: &[usize]) {
    // target[i]: final position of the item currently at i
    let mut target = vec![0; order.len()];
    for (pos, &index) in order.iter().enumerate() {
        target[index] = pos;
    }

    for i in 0..items.len() {
        while target[i] != i {
            let to = target[i];
            items.swap(i, to);
            target.swap(i, to);
        }
    }
}
