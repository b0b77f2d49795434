use crate::{
    error::CompareError,
    order::{Comparison, Order, apply_order, grouped_order},
};
use std::cmp::Ordering;

#[test]
fn order_sign_is_a_signed_tri_state() {
    assert_eq!(Order::Less.sign(), Some(-1));
    assert_eq!(Order::Equal.sign(), Some(0));
    assert_eq!(Order::Greater.sign(), Some(1));
    assert_eq!(Order::Invalid.sign(), None);
}

#[test]
fn order_reverse_keeps_equal_and_invalid() {
    assert_eq!(Order::Less.reverse(), Order::Greater);
    assert_eq!(Order::Greater.reverse(), Order::Less);
    assert_eq!(Order::Equal.reverse(), Order::Equal);
    assert_eq!(Order::Invalid.reverse(), Order::Invalid);
}

#[test]
fn comparison_reverse_keeps_reason() {
    let nil = Comparison::nil_asymmetry(Ordering::Less);
    let reversed = nil.reverse();

    assert_eq!(reversed.order(), Order::Greater);
    assert_eq!(reversed.reason(), Some(CompareError::NilValue));

    let invalid = Comparison::invalid(CompareError::ValueMismatch);
    assert_eq!(invalid.reverse(), invalid);
}

#[test]
fn invalid_always_carries_a_reason() {
    let invalid = Comparison::invalid(CompareError::Incomparable);

    assert!(!invalid.is_valid());
    assert_eq!(invalid.reason(), Some(CompareError::Incomparable));
    assert_eq!(invalid.ordering(), None);
}

#[test]
fn into_result_keeps_nil_direction() {
    assert_eq!(
        Comparison::nil_asymmetry(Ordering::Greater).into_result(),
        Ok(Ordering::Greater)
    );
    assert_eq!(Comparison::LESS.into_result(), Ok(Ordering::Less));
    assert_eq!(
        Comparison::invalid(CompareError::ValueMismatch).into_result(),
        Err(CompareError::ValueMismatch)
    );
}

#[test]
fn ordering_or_maps_invalid_to_default() {
    let invalid = Comparison::invalid(CompareError::Incomparable);

    assert_eq!(invalid.ordering_or(Ordering::Equal), Ordering::Equal);
    assert_eq!(Comparison::GREATER.ordering_or(Ordering::Equal), Ordering::Greater);
}

#[test]
fn from_ordering_has_no_reason() {
    let cmp = Comparison::from(Ordering::Less);

    assert!(cmp.is_less());
    assert_eq!(cmp.reason(), None);
}

#[test]
fn display_includes_reason() {
    assert_eq!(Comparison::EQUAL.to_string(), "equal");
    assert_eq!(
        Comparison::invalid(CompareError::ValueMismatch).to_string(),
        "invalid: comparator: value mismatch"
    );
    assert_eq!(
        Comparison::nil_asymmetry(Ordering::Less).to_string(),
        "less: comparator: the parameter has a nil value"
    );
}

// ---- grouped ordering --------------------------------------------------

// Even values order among themselves, odd values among themselves, and an
// even/odd pair is unordered.
fn by_parity(values: &[i32]) -> impl FnMut(usize, usize) -> Option<Ordering> + '_ {
    move |a, b| {
        let (a, b) = (values[a], values[b]);
        (a % 2 == b % 2).then(|| a.cmp(&b))
    }
}

#[test]
fn grouped_order_sorts_a_total_order() {
    let values = [5, 3, 9, 1, 7];

    assert_eq!(grouped_order(values.len(), by_parity(&values)), vec![3, 1, 0, 4, 2]);
}

#[test]
fn grouped_order_splits_unordered_items_by_first_appearance() {
    let values = [4, 3, 2, 1, 6];
    let order = grouped_order(values.len(), by_parity(&values));
    let arranged: Vec<i32> = order.iter().map(|&index| values[index]).collect();

    assert_eq!(arranged, vec![2, 4, 6, 1, 3]);
}

#[test]
fn grouped_order_keeps_equal_items_stable() {
    let order = grouped_order(4, |_, _| Some(Ordering::Equal));

    assert_eq!(order, vec![0, 1, 2, 3]);
}

#[test]
fn apply_order_permutes_in_place() {
    let mut items = vec!['a', 'b', 'c', 'd', 'e'];
    apply_order(&mut items, &[4, 2, 0, 1, 3]);

    assert_eq!(items, vec!['e', 'c', 'a', 'b', 'd']);
}
