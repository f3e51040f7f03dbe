#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use lyra_complex::{Complex, Input};

const MAX_TEXT_SIZE: usize = 256;

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    Empty,
    Pair(f64, f64),
    Cartesian(f64, f64),
    Polar(f64, f64),
    Scalar(f64),
    Text(String),
}

impl FuzzInput {
    fn into_input(self) -> Input {
        match self {
            FuzzInput::Empty => Input::Empty,
            FuzzInput::Pair(re, im) => Input::Pair(re, im),
            FuzzInput::Cartesian(r, i) => Input::Cartesian { r, i },
            FuzzInput::Polar(abs, arg) => Input::Polar { abs, arg },
            FuzzInput::Scalar(x) => Input::Scalar(x),
            FuzzInput::Text(mut s) => {
                if s.len() > MAX_TEXT_SIZE {
                    let mut end = MAX_TEXT_SIZE;
                    while !s.is_char_boundary(end) {
                        end -= 1;
                    }
                    s.truncate(end);
                }
                Input::Text(s)
            }
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let mut unstructured = Unstructured::new(data);

    if let Ok(input) = FuzzInput::arbitrary(&mut unstructured) {
        if let Ok(z) = Complex::make(input.into_input()) {
            assert!(z.re().is_finite() && z.im().is_finite());
            assert!((z.re() * z.im()).is_finite());

            let _ = z.to_string();
            let results = [
                z.sqrt(),
                z.log(),
                z.sqrt().and_then(Complex::log).and_then(Complex::exp),
                z.asin(),
                z.acos(),
                z.atan(),
                z.inverse(),
            ];
            for v in results.into_iter().flatten() {
                assert!(v.re().is_finite() && v.im().is_finite());
                assert!((v.re() * v.im()).is_finite());
            }
        }
    }
});
