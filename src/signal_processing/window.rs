use std::f64::consts::PI;

use crate::signal_processing::math::bessel_i0;

/// Window shapes available for FIR shaping
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Window {
    /// All ones, leaves the filter untouched
    Rectangular,
    Hamming,
    /// Kaiser window with shape parameter beta
    Kaiser { beta: f64 },
}

impl Window {
    /// Generate an `n`-point symmetric window of this shape
    pub fn generate(&self, n: usize) -> Vec<f64> {
        match *self {
            Window::Rectangular => vec![1.0; n],
            Window::Hamming => hamming_window(n),
            Window::Kaiser { beta } => kaiser_window(n, beta),
        }
    }
}

/// Fill `w` with a symmetric window, evaluating `f(i, n)` for the first half
/// only and mirroring it onto the second.
fn fill_symmetric(w: &mut [f64], f: impl Fn(usize, usize) -> f64) {
    let n = w.len();
    match n {
        0 => {}
        1 => w[0] = 1.0,
        _ => {
            for i in 0..n.div_ceil(2) {
                let v = f(i, n);
                w[i] = v;
                w[n - 1 - i] = v;
            }
        }
    }
}

/// N-point symmetric Hamming window
pub fn hamming_window(n: usize) -> Vec<f64> {
    let mut w = vec![0.0; n];
    hamming_window_into(&mut w);
    w
}

/// Write a symmetric Hamming window of length `w.len()` into `w`
pub fn hamming_window_into(w: &mut [f64]) {
    fill_symmetric(w, |i, n| {
        0.54 - 0.46 * (2.0 * PI * i as f64 / (n - 1) as f64).cos()
    });
}

/// N-point symmetric Kaiser window.
///
/// Larger `beta` widens the main lobe and lowers the side lobes; `beta = 0`
/// gives a rectangular window.
pub fn kaiser_window(n: usize, beta: f64) -> Vec<f64> {
    let mut w = vec![0.0; n];
    kaiser_window_into(&mut w, beta);
    w
}

/// Write a symmetric Kaiser window of length `w.len()` into `w`
pub fn kaiser_window_into(w: &mut [f64], beta: f64) {
    let denominator = bessel_i0(beta);
    fill_symmetric(w, |i, n| {
        let r = 2.0 * i as f64 / (n - 1) as f64 - 1.0;
        bessel_i0(beta * (1.0 - r * r).sqrt()) / denominator
    });
}
