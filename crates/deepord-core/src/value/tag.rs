///
/// ShapeTag
///
/// Fieldless mirror of [`super::Value`], used by diagnostics and trace
/// events. Labels are stable.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ShapeTag {
    Nil = 1,
    Scalar = 2,
    Reference = 3,
    Dynamic = 4,
    Record = 5,
    Array = 6,
    List = 7,
    Map = 8,
    Custom = 9,
    Opaque = 10,
}

impl ShapeTag {
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Stable human-readable shape label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nil => "Nil",
            Self::Scalar => "Scalar",
            Self::Reference => "Reference",
            Self::Dynamic => "Dynamic",
            Self::Record => "Record",
            Self::Array => "Array",
            Self::List => "List",
            Self::Map => "Map",
            Self::Custom => "Custom",
            Self::Opaque => "Opaque",
        }
    }
}
