use deepord::{Comparable, Inspect, compare, equals};
use std::cmp::Ordering;

#[derive(Inspect)]
#[inspect(transparent)]
struct Meters(f64);

#[derive(Inspect)]
#[inspect(transparent)]
struct Named<T> {
    #[inspect(skip)]
    _label: &'static str,
    inner: T,
}

#[derive(Inspect)]
#[inspect(comparable)]
struct Priority<T: Ord + 'static>(T);

impl<T: Ord + 'static> Comparable for Priority<T> {
    fn compare_to(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

#[derive(Inspect, PartialEq)]
#[inspect(opaque)]
struct Token<T: PartialEq> {
    raw: T,
}

fn main() {
    assert!(compare(&Meters(1.0), &Meters(2.0)).is_less());
    assert!(equals(
        &Named {
            _label: "a",
            inner: 3_u8
        },
        &Named {
            _label: "b",
            inner: 3_u8
        }
    ));
    assert!(compare(&Priority(1_i32), &Priority(2_i32)).is_greater());
    assert!(equals(&Token { raw: 'x' }, &Token { raw: 'x' }));
}
