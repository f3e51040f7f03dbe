//! Immutable complex number value and its arithmetic core.
//!
//! A [`Complex`] only exists with finite components: values are built from a
//! normalized input, and every operation sends its result through the same
//! finiteness check, failing with [`ComplexError::InvalidParameter`] when the
//! arithmetic overflows or produces NaN (`log(0)`, `exp(1000)`, ...). Binary
//! operations accept anything convertible into an [`Input`] (another
//! `Complex`, a number, a pair, text, ...) and normalize it before use.
//!
//! Multi-valued functions (`sqrt`, `log`, `pow`) use the principal branch:
//! arguments lie in `(-π, π]` and the square root has a non-negative real part.

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ComplexError, Result};
use crate::input::Input;
use crate::normalize::{check_finite, normalize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Input")
)]
pub struct Complex {
    #[cfg_attr(feature = "serde", serde(rename = "r"))]
    re: f64,
    #[cfg_attr(feature = "serde", serde(rename = "i"))]
    im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex::raw(0.0, 0.0);
    pub const ONE: Complex = Complex::raw(1.0, 0.0);
    pub const I: Complex = Complex::raw(0.0, 1.0);
    pub const PI: Complex = Complex::raw(std::f64::consts::PI, 0.0);
    pub const E: Complex = Complex::raw(std::f64::consts::E, 0.0);

    /// Build a value from any supported input shape.
    pub fn make<T: Into<Input>>(value: T) -> Result<Self> {
        let (re, im) = normalize(&value.into())?;
        Ok(Self::raw(re, im))
    }

    /// Build a value using the optional two-argument convention, see
    /// [`Input::from_args`].
    pub fn from_args(a: Option<Input>, b: Option<Input>) -> Result<Self> {
        Self::make(Input::from_args(a, b)?)
    }

    /// Create a complex number from real and imaginary parts
    pub fn new(re: f64, im: f64) -> Result<Self> {
        Self::make(Input::Pair(re, im))
    }

    /// Create a complex number from polar coordinates (magnitude, angle)
    pub fn from_polar(abs: f64, arg: f64) -> Result<Self> {
        Self::make(Input::Polar { abs, arg })
    }

    /// Wrap components without validating them. Constants and tests only.
    #[inline]
    pub(crate) const fn raw(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Wrap the components of an operation result, rejecting non-finite ones.
    pub(crate) fn checked(re: f64, im: f64) -> Result<Self> {
        check_finite((re, im))
            .map(|(re, im)| Self::raw(re, im))
            .map_err(|err| {
                debug!(re, im, "operation produced a non-finite result");
                err
            })
    }

    /// Real component
    #[inline]
    pub fn re(self) -> f64 {
        self.re
    }

    /// Imaginary component
    #[inline]
    pub fn im(self) -> f64 {
        self.im
    }

    /// Sum with any supported input
    pub fn add<T: Into<Input>>(self, other: T) -> Result<Self> {
        self.plus(Self::make(other)?)
    }

    /// Difference with any supported input
    pub fn sub<T: Into<Input>>(self, other: T) -> Result<Self> {
        self.minus(Self::make(other)?)
    }

    /// Product with any supported input
    pub fn mul<T: Into<Input>>(self, other: T) -> Result<Self> {
        self.times(Self::make(other)?)
    }

    /// Quotient by any supported input; fails when the divisor is zero
    pub fn div<T: Into<Input>>(self, other: T) -> Result<Self> {
        self.checked_div(Self::make(other)?)
    }

    pub(crate) fn plus(self, other: Complex) -> Result<Self> {
        Self::checked(self.re + other.re, self.im + other.im)
    }

    pub(crate) fn minus(self, other: Complex) -> Result<Self> {
        Self::checked(self.re - other.re, self.im - other.im)
    }

    pub(crate) fn times(self, other: Complex) -> Result<Self> {
        Self::checked(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }

    /// Divide by an already constructed value; fails when `divisor` has zero magnitude.
    pub fn checked_div(self, divisor: Complex) -> Result<Self> {
        let (a, b) = (divisor.re, divisor.im);
        let t = a * a + b * b;
        if t == 0.0 {
            debug!(dividend = %self, "division by zero");
            return Err(ComplexError::DivisionByZero);
        }
        Self::checked(
            (a * self.re + b * self.im) / t,
            (a * self.im - b * self.re) / t,
        )
    }

    /// `1 / self`.
    pub fn inverse(self) -> Result<Self> {
        Self::ONE.checked_div(self)
    }

    /// Raise to a complex power. A zero base yields zero for every exponent,
    /// including zero.
    pub fn pow<T: Into<Input>>(self, exponent: T) -> Result<Self> {
        let (er, ei) = normalize(&exponent.into())?;

        let abs = self.abs();
        if abs == 0.0 {
            return Ok(Self::ZERO);
        }
        let arg = self.arg();

        let magnitude = abs.powf(er) * (-ei * arg).exp();
        let angle = ei * abs.ln() + er * arg;
        Self::checked(magnitude * angle.cos(), magnitude * angle.sin())
    }

    /// Principal square root
    pub fn sqrt(self) -> Result<Self> {
        let r = self.abs();
        let sign = if self.im < 0.0 { -1.0 } else { 1.0 };
        Self::checked(
            ((r + self.re) / 2.0).sqrt(),
            sign * ((r - self.re) / 2.0).sqrt(),
        )
    }

    /// Complex exponential e^z
    pub fn exp(self) -> Result<Self> {
        let scale = self.re.exp();
        Self::checked(scale * self.im.cos(), scale * self.im.sin())
    }

    /// Natural logarithm, principal branch. Fails at zero.
    pub fn log(self) -> Result<Self> {
        Self::checked(
            (self.re * self.re + self.im * self.im).ln() / 2.0,
            self.arg(),
        )
    }

    /// Euclidean magnitude.
    #[inline]
    pub fn abs(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Angle in `(-π, π]`.
    #[inline]
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Complex conjugate
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::raw(self.re, -self.im)
    }

    /// Additive inverse
    #[inline]
    pub fn neg(self) -> Self {
        Self::raw(-self.re, -self.im)
    }
}

impl Default for Complex {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<Input> for Complex {
    type Error = ComplexError;

    fn try_from(input: Input) -> Result<Self> {
        Self::make(input)
    }
}

impl FromStr for Complex {
    type Err = ComplexError;

    fn from_str(s: &str) -> Result<Self> {
        Self::make(s)
    }
}
