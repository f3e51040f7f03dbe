//! Resolution of an [`Input`] into a canonical `(re, im)` pair.
//!
//! Each call builds and returns its own pair; nothing is cached or shared
//! between calls.

use tracing::{debug, trace};

use crate::error::{ComplexError, Result};
use crate::input::Input;
use crate::lexer::{Lexer, TokenKind};

/// Resolve any input shape to finite `(re, im)` components.
pub fn normalize(input: &Input) -> Result<(f64, f64)> {
    let resolved = resolve(input).and_then(check_finite);
    match &resolved {
        Ok((re, im)) => trace!(shape = input.shape_name(), re, im, "normalized input"),
        Err(err) => debug!(shape = input.shape_name(), error = %err, "rejected input"),
    }
    resolved
}

fn resolve(input: &Input) -> Result<(f64, f64)> {
    match input {
        Input::Empty => Ok((0.0, 0.0)),
        Input::Pair(re, im) => Ok((*re, *im)),
        Input::Cartesian { r, i } => Ok((*r, *i)),
        Input::Polar { abs, arg } => Ok((abs * arg.cos(), abs * arg.sin())),
        Input::Scalar(x) => Ok((*x, 0.0)),
        Input::Text(text) => parse_text(text),
    }
}

/// Sum the real and imaginary terms of a textual complex number.
pub fn parse_text(text: &str) -> Result<(f64, f64)> {
    let tokens = Lexer::new(text).tokenize()?;
    if tokens.is_empty() {
        return Err(ComplexError::invalid(format!(
            "no numeric terms in '{}'",
            text
        )));
    }

    Ok(tokens
        .iter()
        .fold((0.0, 0.0), |(re, im), token| match token.kind {
            TokenKind::Real(x) => (re + x, im),
            TokenKind::Imaginary(y) => (re, im + y),
        }))
}

pub(crate) fn check_finite((re, im): (f64, f64)) -> Result<(f64, f64)> {
    if re.is_finite() && im.is_finite() && (re * im).is_finite() {
        Ok((re, im))
    } else {
        Err(ComplexError::invalid(format!(
            "non-finite component in ({}, {})",
            re, im
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn resolves_each_shape() {
        assert_eq!(normalize(&Input::Empty).unwrap(), (0.0, 0.0));
        assert_eq!(normalize(&Input::Pair(1.5, -2.0)).unwrap(), (1.5, -2.0));
        assert_eq!(normalize(&Input::Cartesian { r: 3.0, i: 2.0 }).unwrap(), (3.0, 2.0));
        assert_eq!(normalize(&Input::Scalar(7.0)).unwrap(), (7.0, 0.0));
        assert_eq!(normalize(&Input::Text("3+2i".into())).unwrap(), (3.0, 2.0));
    }

    #[test]
    fn polar_uses_cos_and_sin() {
        let (re, im) = normalize(&Input::Polar { abs: 2.0, arg: FRAC_PI_2 }).unwrap();
        assert!(re.abs() < 1e-15);
        assert_eq!(im, 2.0);
    }

    #[test]
    fn text_terms_accumulate() {
        assert_eq!(parse_text("1+2+3i").unwrap(), (3.0, 3.0));
        assert_eq!(parse_text("i+i-0.5i").unwrap(), (0.0, 1.5));
        assert_eq!(parse_text("-i").unwrap(), (0.0, -1.0));
    }

    #[test]
    fn text_without_terms_is_rejected() {
        assert!(matches!(
            parse_text("bogus"),
            Err(ComplexError::InvalidParameter(_))
        ));
    }

    #[test]
    fn non_finite_components_are_rejected() {
        for input in [
            Input::Pair(f64::NAN, 0.0),
            Input::Pair(0.0, f64::INFINITY),
            Input::Scalar(f64::NEG_INFINITY),
            Input::Pair(1e200, 1e200),
            Input::Polar { abs: f64::INFINITY, arg: 0.0 },
        ] {
            assert!(
                matches!(normalize(&input), Err(ComplexError::InvalidParameter(_))),
                "{:?} should be rejected",
                input
            );
        }
    }
}
