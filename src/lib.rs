//! Complex number values for Lyra.
//!
//! Values are built from loosely shaped input (pairs, `{r, i}` or
//! `{abs, arg}` objects, numbers and text like `"3-2i"`) through a single
//! normalizer, and every operation returns a fresh immutable [`Complex`].
//!
//! ```
//! use lyra_complex::Complex;
//!
//! let z = Complex::make("3+2i")?;
//! let w = z.mul((1.0, -1.0))?.div(2)?;
//! assert_eq!(w.to_string(), "2.5-0.5i");
//! # Ok::<(), lyra_complex::ComplexError>(())
//! ```

pub mod complex;
pub mod equality;
pub mod error;
pub mod input;
pub mod lexer;
pub mod normalize;
pub mod pretty;
pub mod trig;

pub use complex::Complex;
pub use equality::EPSILON;
pub use error::{ComplexError, Result};
pub use input::Input;
pub use normalize::normalize;
pub use pretty::format_number;
