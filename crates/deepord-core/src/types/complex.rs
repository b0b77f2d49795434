use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Complex32
///
/// Complex number with `f32` parts.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, PartialEq, Serialize)]
#[display("{re}{im:+}i")]
pub struct Complex32 {
    pub re: f32,
    pub im: f32,
}

impl Complex32 {
    #[must_use]
    pub const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }

    /// Parts widened to `f64` for comparison.
    #[must_use]
    pub fn parts(self) -> (f64, f64) {
        (f64::from(self.re), f64::from(self.im))
    }
}

impl From<f32> for Complex32 {
    fn from(re: f32) -> Self {
        Self::new(re, 0.0)
    }
}

///
/// Complex64
///
/// Complex number with `f64` parts.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, PartialEq, Serialize)]
#[display("{re}{im:+}i")]
pub struct Complex64 {
    pub re: f64,
    pub im: f64,
}

impl Complex64 {
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[must_use]
    pub const fn parts(self) -> (f64, f64) {
        (self.re, self.im)
    }
}

impl From<f64> for Complex64 {
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

impl From<Complex32> for Complex64 {
    fn from(value: Complex32) -> Self {
        let (re, im) = value.parts();

        Self::new(re, im)
    }
}
