use crate::complex::Complex;
use crate::error::Result;
use crate::input::Input;

/// Absolute tolerance applied to each component by [`Complex::equals`].
pub const EPSILON: f64 = 1e-16;

impl Complex {
    /// Component-wise comparison within [`EPSILON`].
    pub fn equals<T: Into<Input>>(self, other: T) -> Result<bool> {
        self.equals_within(other, EPSILON)
    }

    /// Component-wise comparison with a caller supplied absolute tolerance.
    pub fn equals_within<T: Into<Input>>(self, other: T, tolerance: f64) -> Result<bool> {
        let other = Complex::make(other)?;
        Ok((self.re() - other.re()).abs() <= tolerance
            && (self.im() - other.im()).abs() <= tolerance)
    }
}
