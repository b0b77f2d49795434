//! Value types with no direct std equivalent.

mod complex;
mod nil;
mod opaque;

pub use complex::{Complex32, Complex64};
pub use nil::Nil;
pub use opaque::Opaque;
