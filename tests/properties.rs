use lyra_complex::{Complex, Result};
use proptest::prelude::*;

/// Integer-valued components keep add/sub/mul exact, so the 1e-16 tolerance holds.
fn arb_exact() -> impl Strategy<Value = Complex> {
    (-1_000_000i64..1_000_000, -1_000_000i64..1_000_000)
        .prop_map(|(re, im)| Complex::new(re as f64, im as f64).unwrap())
}

fn arb_finite() -> impl Strategy<Value = (f64, f64)> {
    (-1e150f64..1e150, -1e150f64..1e150)
}

fn is_finite_value(result: &Result<Complex>) -> bool {
    match result {
        Ok(v) => v.re().is_finite() && v.im().is_finite() && (v.re() * v.im()).is_finite(),
        Err(_) => true,
    }
}

proptest! {
    #[test]
    fn to_vector_returns_components((re, im) in arb_finite()) {
        let z = Complex::new(re, im).unwrap();
        prop_assert_eq!(z.to_vector(), [re, im]);
    }

    #[test]
    fn successful_results_are_finite((zr, zi) in arb_finite(), (wr, wi) in arb_finite()) {
        let z = Complex::new(zr, zi).unwrap();
        let w = Complex::new(wr, wi).unwrap();
        for result in [z.mul(w), z.add(w), z.exp(), z.pow(w), z.sinh()] {
            prop_assert!(is_finite_value(&result), "{:?}", result);
        }
    }

    #[test]
    fn add_then_sub_restores(z in arb_exact(), w in arb_exact()) {
        prop_assert!(z.add(w).unwrap().sub(w).unwrap().equals(z).unwrap());
    }

    #[test]
    fn equals_is_reflexive_and_symmetric(z in arb_exact(), w in arb_exact()) {
        prop_assert!(z.equals(z).unwrap());
        prop_assert_eq!(z.equals(w).unwrap(), w.equals(z).unwrap());
    }

    #[test]
    fn zero_power_is_one(z in arb_exact()) {
        prop_assume!(z != Complex::ZERO);
        prop_assert!(z.pow(0).unwrap().equals(Complex::ONE).unwrap());
    }

    #[test]
    fn zero_base_is_zero(er in -10.0f64..10.0, ei in -10.0f64..10.0) {
        prop_assert_eq!(Complex::ZERO.pow((er, ei)).unwrap(), Complex::ZERO);
    }

    #[test]
    fn sqrt_squares_back(z in arb_exact()) {
        let root = z.sqrt().unwrap();
        prop_assert!(root.re() >= 0.0);
        let scale = z.abs().max(1.0);
        prop_assert!(root.mul(root).unwrap().equals_within(z, 1e-12 * scale).unwrap());
    }

    #[test]
    fn display_parses_back(z in arb_exact()) {
        let text = z.to_string();
        prop_assert!(Complex::make(text.as_str()).unwrap().equals(z).unwrap(), "{}", text);
    }

    #[test]
    fn text_never_panics(text in "\\PC{0,32}") {
        let _ = Complex::make(text.as_str());
    }
}
