//! ## Crate layout
//! - `value`: the `Inspect` capability, the `Value` shape view, and the
//!   capability traits for records, sequences, and collections.
//! - `compare`: the recursive engine (`compare`, `equals`, `Comparer`).
//! - `comparator`: `comparator_for`, `reverse`, and sort helpers.
//! - `order`: the `Order` / `Comparison` result types.
//! - `error`: diagnostic reasons and configuration errors.
//! - `config`: engine settings (float order, depth limit).
//! - `types`: `Nil`, `Opaque`, and complex numbers.
//!
//! `#[derive(Inspect)]` implements the capability for user structs. The
//! `prelude` mirrors the surface most callers need.

pub use deepord_core as core;
pub use deepord_core::{comparator, compare, config, error, order, types, value};

// export so derived code resolves inside this crate too
extern crate self as deepord;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Entry points
//

// `compare` (module and function) already comes in with the modules above
pub use deepord_core::{
    Comparator, CompareError, Comparer, Comparison, ConfigError, Order, comparator_for, equals,
    reverse,
};
pub use deepord_core::value::{Comparable, Inspect};
pub use deepord_derive::Inspect;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        comparator::{Comparator as _, comparator_for, reverse, sort_with, sorted_with},
        compare::{Comparer, compare, equals},
        config::{CompareConfig, FloatOrder},
        order::{Comparison, Order},
        types::{Nil, Opaque},
        value::{Comparable, Inspect, Value},
    };
    pub use deepord_derive::Inspect;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use std::cmp::Ordering;

    #[derive(Inspect)]
    struct Pair {
        left: i32,
        right: i32,
    }

    #[derive(Inspect)]
    #[inspect(comparable)]
    struct ByLength(String);

    impl Comparable for ByLength {
        fn compare_to(&self, other: &Self) -> Ordering {
            self.0.len().cmp(&other.0.len())
        }
    }

    #[test]
    fn derived_records_resolve_inside_the_facade() {
        let a = Pair { left: 1, right: 2 };
        let b = Pair { left: 1, right: 3 };

        assert_eq!(compare(&a, &b), Comparison::LESS);
        assert_eq!(a.left, b.left);
        assert_ne!(a.right, b.right);
    }

    #[test]
    fn derived_comparable_uses_the_hook() {
        assert!(equals(&ByLength("abc".into()), &ByLength("xyz".into())));
    }

    #[test]
    fn version_matches_manifest() {
        assert_eq!(super::VERSION, env!("CARGO_PKG_VERSION"));
    }
}
