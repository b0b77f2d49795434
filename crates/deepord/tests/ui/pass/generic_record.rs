use deepord::{Comparison, Inspect, compare};

#[derive(Inspect)]
struct Wrapper<K, V>
where
    K: Ord,
{
    key: K,
    values: Vec<V>,
}

fn main() {
    let a = Wrapper {
        key: 1_u8,
        values: vec!["a"],
    };
    let b = Wrapper {
        key: 1_u8,
        values: vec!["b"],
    };

    assert_eq!(compare(&a, &b), Comparison::LESS);
}
