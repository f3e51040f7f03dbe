//! Trigonometric and hyperbolic functions of a complex argument.
//!
//! The inverse functions are composed from `log`, `sqrt` and the arithmetic
//! core, so they inherit the principal branches chosen there.

use crate::complex::Complex;
use crate::error::Result;

fn cosh(x: f64) -> f64 {
    (x.exp() + (-x).exp()) / 2.0
}

fn sinh(x: f64) -> f64 {
    (x.exp() - (-x).exp()) / 2.0
}

impl Complex {
    /// Sine
    pub fn sin(self) -> Result<Complex> {
        let (a, b) = (self.re(), self.im());
        Complex::checked(a.sin() * cosh(b), a.cos() * sinh(b))
    }

    /// Cosine
    pub fn cos(self) -> Result<Complex> {
        let (a, b) = (self.re(), self.im());
        Complex::checked(a.cos() * cosh(b), -a.sin() * sinh(b))
    }

    /// Tangent
    pub fn tan(self) -> Result<Complex> {
        let (a, b) = (self.re(), self.im());
        let d = (2.0 * a).cos() + cosh(2.0 * b);
        Complex::checked((2.0 * a).sin() / d, sinh(2.0 * b) / d)
    }

    /// Hyperbolic sine
    pub fn sinh(self) -> Result<Complex> {
        let (a, b) = (self.re(), self.im());
        Complex::checked(sinh(a) * b.cos(), cosh(a) * b.sin())
    }

    /// Hyperbolic cosine
    pub fn cosh(self) -> Result<Complex> {
        let (a, b) = (self.re(), self.im());
        Complex::checked(cosh(a) * b.cos(), sinh(a) * b.sin())
    }

    /// Hyperbolic tangent
    pub fn tanh(self) -> Result<Complex> {
        let (a, b) = (self.re(), self.im());
        let d = cosh(2.0 * a) + (2.0 * b).cos();
        Complex::checked(sinh(2.0 * a) / d, (2.0 * b).sin() / d)
    }

    /// `-i · log(i·z + sqrt(1 - z²))`
    pub fn asin(self) -> Result<Complex> {
        let root = Complex::ONE.minus(self.times(self)?)?.sqrt()?;
        let inner = self.times(Complex::I)?.plus(root)?;
        Ok(inner.log()?.times(Complex::I)?.neg())
    }

    /// `-i · log(z + i·sqrt(1 - z²))`
    pub fn acos(self) -> Result<Complex> {
        let root = Complex::ONE.minus(self.times(self)?)?.sqrt()?;
        let inner = root.times(Complex::I)?.plus(self)?;
        Ok(inner.log()?.times(Complex::I)?.neg())
    }

    /// `(i/2) · log((i + z) / (i - z))`; fails with division by zero at `z = i`
    /// and with an invalid parameter at `z = -i`, where the logarithm diverges.
    pub fn atan(self) -> Result<Complex> {
        let ratio = Complex::I.plus(self)?.checked_div(Complex::I.minus(self)?)?;
        ratio
            .log()?
            .times(Complex::I)?
            .checked_div(Complex::raw(2.0, 0.0))
    }
}
