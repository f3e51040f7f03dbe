//! Accepted input shapes for building a complex value.
//!
//! Every constructor and every binary operation takes its operand as an
//! [`Input`], which is resolved to a canonical `(re, im)` pair by
//! [`crate::normalize::normalize`]. With the `serde` feature enabled an
//! `Input` can also be read from JSON-like data: `null`, `[re, im]`,
//! `{"r": .., "i": ..}`, `{"abs": .., "arg": ..}`, a number or a string.

#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::complex::Complex;
use crate::error::{ComplexError, Result};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(untagged))]
pub enum Input {
    /// No value given; resolves to zero.
    Empty,
    /// Explicit real and imaginary components.
    Pair(f64, f64),
    /// Keyed cartesian form. Takes priority over polar when both are present.
    Cartesian { r: f64, i: f64 },
    /// Keyed polar form.
    Polar { abs: f64, arg: f64 },
    /// A real number.
    Scalar(f64),
    /// Free-form text such as `"3+2i"`.
    Text(String),
}

impl Input {
    /// Resolve the two-argument calling convention into a single shape.
    ///
    /// With neither argument the result is [`Input::Empty`]. When `b` is
    /// given both arguments are read as plain numbers and form a
    /// [`Input::Pair`]; otherwise `a` is used as is.
    pub fn from_args(a: Option<Input>, b: Option<Input>) -> Result<Input> {
        match (a, b) {
            (None, None) => Ok(Input::Empty),
            (a, Some(b)) => {
                let re = match a {
                    Some(a) => a.as_number()?,
                    None => {
                        return Err(ComplexError::invalid(
                            "real part missing while imaginary part is given",
                        ))
                    }
                };
                Ok(Input::Pair(re, b.as_number()?))
            }
            (Some(a), None) => Ok(a),
        }
    }

    /// Read this input as a single real number.
    ///
    /// Numeric text is trimmed and parsed; blank text counts as zero.
    pub fn as_number(&self) -> Result<f64> {
        match self {
            Input::Scalar(x) => Ok(*x),
            Input::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(0.0);
                }
                trimmed
                    .parse::<f64>()
                    .map_err(|_| ComplexError::invalid(format!("'{}' is not a number", text)))
            }
            other => Err(ComplexError::invalid(format!(
                "{} cannot be used as a number",
                other.shape_name()
            ))),
        }
    }

    /// Short human-readable name of the shape, used in error messages and logs.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Input::Empty => "empty input",
            Input::Pair(..) => "pair",
            Input::Cartesian { .. } => "cartesian object",
            Input::Polar { .. } => "polar object",
            Input::Scalar(_) => "number",
            Input::Text(_) => "text",
        }
    }
}

impl Default for Input {
    fn default() -> Self {
        Input::Empty
    }
}

impl From<f64> for Input {
    #[inline]
    fn from(x: f64) -> Self {
        Input::Scalar(x)
    }
}

impl From<f32> for Input {
    #[inline]
    fn from(x: f32) -> Self {
        Input::Scalar(x as f64)
    }
}

impl From<i32> for Input {
    #[inline]
    fn from(x: i32) -> Self {
        Input::Scalar(x as f64)
    }
}

impl From<i64> for Input {
    #[inline]
    fn from(x: i64) -> Self {
        Input::Scalar(x as f64)
    }
}

impl From<(f64, f64)> for Input {
    #[inline]
    fn from((re, im): (f64, f64)) -> Self {
        Input::Pair(re, im)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<Complex> for Input {
    #[inline]
    fn from(z: Complex) -> Self {
        Input::Pair(z.re(), z.im())
    }
}

impl From<&Complex> for Input {
    #[inline]
    fn from(z: &Complex) -> Self {
        Input::Pair(z.re(), z.im())
    }
}
