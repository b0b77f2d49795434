use deepord::{Inspect, equals};

#[derive(Inspect)]
struct Pair(i32, #[inspect(skip)] String);

#[derive(Inspect)]
struct Empty {}

#[derive(Inspect)]
struct Unit;

fn main() {
    assert!(equals(&Pair(1, "x".into()), &Pair(1, "y".into())));
    assert!(equals(&Empty {}, &Empty {}));
    assert!(equals(&Unit, &Unit));
}
