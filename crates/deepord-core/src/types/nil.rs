use derive_more::Display;

///
/// Nil
///
/// Untyped absent value. Orders before every non-nil value of any type and
/// equals anything that dereferences to nil.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[display("nil")]
pub struct Nil;
