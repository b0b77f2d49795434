//! Core runtime for deepord: the value model, the recursive comparison
//! engine, comparator combinators, and the result/error types they share.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod comparator;
pub mod compare;
pub mod config;
pub mod error;
pub mod order;
pub mod types;
pub mod value;

pub use comparator::{Comparator, comparator_for, reverse};
pub use compare::{Comparer, compare, equals};
pub use error::{CompareError, ConfigError};
pub use order::{Comparison, Order};

///
/// Prelude
///
/// Prelude contains the comparison vocabulary and the traits needed to make
/// a type comparable. Traits are imported as `_` where only their methods
/// matter.
///

pub mod prelude {
    pub use crate::{
        comparator::{Comparator as _, comparator_for, reverse},
        compare::{Comparer, compare, equals},
        order::{Comparison, Order},
        types::{Nil, Opaque},
        value::{Comparable, Inspect, Value},
    };
}
