use std::f64::consts::PI;

use crate::constants::FACTORIAL_MAX;

const fn factorial_table() -> [f64; FACTORIAL_MAX + 1] {
    let mut table = [1.0f64; FACTORIAL_MAX + 1];
    let mut k = 1;
    while k <= FACTORIAL_MAX {
        table[k] = table[k - 1] * k as f64;
        k += 1;
    }
    table
}

/// 0! through 40!, computed once at compile time
pub static FACTORIALS: [f64; FACTORIAL_MAX + 1] = factorial_table();

/// Modified Bessel function of the first kind, order zero.
///
/// Evaluates the power series `sum (x^2/4)^k / (k!)^2` for k = 0..=40, which is
/// accurate to well below 1e-9 relative error over the beta range used by
/// Kaiser windows (0 to about 20).
pub fn bessel_i0(x: f64) -> f64 {
    let q = x * x / 4.0;
    let mut power = 1.0;
    let mut sum = 0.0;
    for f in FACTORIALS.iter() {
        sum += power / (f * f);
        power *= q;
    }
    sum
}

/// Normalized sinc, `sin(pi x) / (pi x)`.
///
/// Arguments closer to zero than one sample period (`1 / fs_hz`) return 1.
pub fn sinc(x: f64, fs_hz: u32) -> f64 {
    let epsilon = 1.0 / fs_hz as f64;
    if x.abs() < epsilon {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_factorials() {
        assert_eq!(FACTORIALS[0], 1.0);
        assert_eq!(FACTORIALS[1], 1.0);
        assert_eq!(FACTORIALS[5], 120.0);
        assert_eq!(FACTORIALS[20], 2432902008176640000.0);
        assert_relative_eq!(FACTORIALS[40], 8.159152832478977e47, max_relative = 1e-12);
    }

    #[test]
    fn test_bessel_i0_known_values() {
        assert_eq!(bessel_i0(0.0), 1.0);
        // MATLAB besseli(0, 10)
        assert_abs_diff_eq!(bessel_i0(10.0), 2815.716628, epsilon = 1e-6);
        assert_relative_eq!(bessel_i0(1.0), 1.2660658777520082, max_relative = 1e-12);
    }

    #[test]
    fn test_bessel_i0_is_even() {
        assert_eq!(bessel_i0(-3.5), bessel_i0(3.5));
    }

    #[test]
    fn test_sinc() {
        assert_eq!(sinc(0.0, 48000), 1.0);
        assert_abs_diff_eq!(sinc(1.0, 48000), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(sinc(0.5, 48000), 2.0 / PI, epsilon = 1e-15);
        assert_eq!(sinc(1e-6, 48000), 1.0);
    }
}
