///
/// Opaque
///
/// Wrapper that exposes only equality. Opaque values compare EQUAL when
/// `PartialEq` holds and are otherwise unordered.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct Opaque<T>(pub T);

impl<T> Opaque<T> {
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Opaque<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}
