use thiserror::Error as ThisError;

///
/// CompareError
///
/// Diagnostic reason attached to a [`crate::order::Comparison`].
///
/// `NilValue` is the only reason that travels with a usable direction
/// (nil orders first). Every other reason accompanies `Order::Invalid`.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, ThisError)]
pub enum CompareError {
    #[error("comparator: the parameter has a nil value")]
    NilValue,

    #[error("comparator: type mismatch ({left} vs {right})")]
    TypeMismatch {
        left: &'static str,
        right: &'static str,
    },

    #[error("comparator: value mismatch")]
    ValueMismatch,

    #[error("comparator: unable to establish a comparative relationship")]
    Incomparable,

    #[error("comparator: nesting depth exceeded the configured limit of {limit}")]
    DepthExceeded { limit: usize },
}

impl CompareError {
    /// True when the reason still permits a LESS/GREATER direction.
    #[must_use]
    pub const fn is_directional(self) -> bool {
        matches!(self, Self::NilValue)
    }
}

///
/// ConfigError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("max_depth must be at least 1")]
    ZeroDepth,
}
