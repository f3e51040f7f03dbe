//! Canonical text rendering and plain-number projections.

use std::fmt;

use crate::complex::Complex;
use crate::lexer::IMAGINARY_UNIT;

/// Render a real number the way the text form expects: shortest round-trip
/// digits, switching to exponent notation outside `[1e-6, 1e21)`.
pub fn format_number(x: f64) -> String {
    let magnitude = x.abs();
    if magnitude != 0.0 && magnitude.is_finite() && !(1e-6..1e21).contains(&magnitude) {
        let s = format!("{:e}", x);
        return match s.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => s,
        };
    }
    x.to_string()
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = (self.re(), self.im());
        if !(a * b).is_finite() {
            return f.write_str("NaN");
        }

        let mut out = String::new();
        if a != 0.0 {
            out.push_str(&format_number(a));
        }
        if b != 0.0 {
            if b > 0.0 && a != 0.0 {
                out.push('+');
            }
            if b == -1.0 {
                out.push('-');
            } else if b != 1.0 {
                out.push_str(&format_number(b));
            }
            out.push(IMAGINARY_UNIT);
        }

        if out.is_empty() {
            f.write_str("0")
        } else {
            f.write_str(&out)
        }
    }
}

impl Complex {
    /// `[re, im]`
    #[inline]
    pub fn to_vector(self) -> [f64; 2] {
        [self.re(), self.im()]
    }

    /// The real component when the imaginary one is exactly zero, `None` otherwise.
    pub fn value_of(self) -> Option<f64> {
        if self.im() == 0.0 {
            Some(self.re())
        } else {
            None
        }
    }
}
