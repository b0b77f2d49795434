use crate::{
    comparator::{Comparator, comparator_for, reverse},
    compare::{Comparer, compare},
    config::{CompareConfig, FloatOrder},
    order::Order,
    value::Inspect,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

///
/// Sample
/// Generated scalar, boxed into an interface slot before comparison.
///

#[derive(Clone, Debug)]
enum Sample {
    Int(i64),
    Byte(u8),
    Flag(bool),
    Text(String),
    Real(f64),
    Missing,
}

impl Sample {
    fn boxed(&self) -> Box<dyn Inspect> {
        match self {
            Self::Int(n) => Box::new(*n),
            Self::Byte(n) => Box::new(*n),
            Self::Flag(b) => Box::new(*b),
            Self::Text(s) => Box::new(s.clone()),
            Self::Real(x) => Box::new(*x),
            Self::Missing => Box::new(None::<i64>),
        }
    }
}

fn arb_sample() -> impl Strategy<Value = Sample> {
    prop_oneof![
        any::<i64>().prop_map(Sample::Int),
        any::<u8>().prop_map(Sample::Byte),
        any::<bool>().prop_map(Sample::Flag),
        "[a-z]{0,6}".prop_map(Sample::Text),
        any::<f64>().prop_map(Sample::Real),
        Just(Sample::Real(f64::NAN)),
        Just(Sample::Missing),
    ]
}

fn arb_list() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-4_i32..4, 0..5)
}

fn arb_map() -> impl Strategy<Value = BTreeMap<String, i32>> {
    prop::collection::btree_map("[a-c]", -2_i32..2, 0..3)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn scalars_are_reflexive(sample in arb_sample()) {
        let (a, b) = (sample.boxed(), sample.boxed());

        prop_assert_eq!(compare(&a, &b).order(), Order::Equal);
    }

    #[test]
    fn mixed_scalars_are_anti_symmetric(a in arb_sample(), b in arb_sample()) {
        let (a, b) = (a.boxed(), b.boxed());
        let forward = compare(&a, &b);
        let backward = compare(&b, &a);

        if forward.is_valid() {
            prop_assert_eq!(forward.order(), backward.order().reverse());
        } else {
            prop_assert!(!backward.is_valid());
        }
    }

    #[test]
    fn integers_are_transitive(a: i64, b: i64, c: i64) {
        let mut sorted = [a, b, c];
        sorted.sort_unstable();
        let [low, mid, high] = sorted;

        if compare(&low, &mid).is_less() && compare(&mid, &high).is_less() {
            prop_assert!(compare(&low, &high).is_less());
        }
    }

    #[test]
    fn float_lists_are_reflexive(list in prop::collection::vec(any::<f64>(), 0..6)) {
        prop_assert_eq!(compare(&list, &list.clone()).order(), Order::Equal);
    }

    #[test]
    fn lists_are_anti_symmetric(a in arb_list(), b in arb_list()) {
        prop_assert_eq!(compare(&a, &b).order(), compare(&b, &a).order().reverse());
    }

    #[test]
    fn lists_match_slice_ordering(a in arb_list(), b in arb_list()) {
        prop_assert_eq!(compare(&a, &b).ordering(), Some(a.cmp(&b)));
    }

    #[test]
    fn maps_are_anti_symmetric(a in arb_map(), b in arb_map()) {
        let forward = compare(&a, &b);
        let backward = compare(&b, &a);

        prop_assert_eq!(forward.order(), backward.order().reverse());
        prop_assert_eq!(forward.reason(), backward.reason());
    }

    #[test]
    fn total_float_order_matches_total_cmp(a: f64, b: f64) {
        let comparer = Comparer::new(CompareConfig::DEFAULT.with_float_order(FloatOrder::Total));

        prop_assert_eq!(comparer.compare(&a, &b).ordering(), Some(a.total_cmp(&b)));
    }

    #[test]
    fn reverse_negates_sample_comparator(a: i32, b: i32) {
        let forward = comparator_for(&a);
        let backward = reverse(comparator_for(&a));

        prop_assert_eq!(
            backward.compare(&a, &b).order(),
            forward.compare(&a, &b).order().reverse()
        );
    }
}
