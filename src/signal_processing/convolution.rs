//! Discrete linear convolution with MATLAB-compatible `full`, `same` and
//! `valid` index resolution.
//!
//! Every entry point computes the full-length convolution and then resolves
//! the sub-range belonging to the requested [`ConvolutionType`]. Ranges are
//! half-open (`start..end`) and relative to the full-length buffer.

use std::ops::{Add, Range};

use crate::error::{DspError, Result};
use crate::signal_processing::Sample;

/// Which part of the full convolution a caller is interested in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvolutionType {
    /// All `len(x) + len(h) - 1` samples
    #[default]
    Full,
    /// Central `len(x)` samples, compensating the delay of a centered kernel
    Same,
    /// Only samples computed without any implicit zero padding
    Valid,
}

impl ConvolutionType {
    /// Resolve the half-open range of the full convolution that belongs to this
    /// type, for a signal of `x_len` samples and a kernel of `h_len` taps.
    ///
    /// Returns `None` when either length is zero, and for
    /// [`ConvolutionType::Valid`] when the kernel is longer than the signal.
    pub fn resolve(self, x_len: usize, h_len: usize) -> Option<Range<usize>> {
        if x_len == 0 || h_len == 0 {
            return None;
        }
        match self {
            ConvolutionType::Full => Some(0..x_len + h_len - 1),
            ConvolutionType::Same => {
                // floor(h/2): even kernels keep the window biased left
                let start = h_len / 2;
                Some(start..start + x_len)
            }
            ConvolutionType::Valid => {
                if x_len >= h_len {
                    Some(h_len - 1..x_len)
                } else {
                    None
                }
            }
        }
    }
}

/// Full-length convolution plus the range selected by a [`ConvolutionType`]
#[derive(Debug, Clone, PartialEq)]
pub struct Convolution<T> {
    full: Vec<T>,
    range: Option<Range<usize>>,
}

impl<T> Convolution<T> {
    /// The full-length convolution, `len(x) + len(h) - 1` samples
    pub fn full(&self) -> &[T] {
        &self.full
    }

    /// Half-open range of the requested type within [`Self::full`]
    pub fn range(&self) -> Option<Range<usize>> {
        self.range.clone()
    }

    /// Inclusive `(first, last)` indices of the requested type
    pub fn first_last(&self) -> Option<(usize, usize)> {
        self.range.as_ref().map(|r| (r.start, r.end - 1))
    }

    /// Half-open `(start, end)` with `(-1, -1)` meaning no valid region
    pub fn indices(&self) -> (isize, isize) {
        match &self.range {
            Some(r) => (r.start as isize, r.end as isize),
            None => (-1, -1),
        }
    }

    /// Samples of the requested type (empty when there is no valid region)
    pub fn output(&self) -> &[T] {
        match &self.range {
            Some(r) => &self.full[r.clone()],
            None => &[],
        }
    }

    pub fn into_full(self) -> Vec<T> {
        self.full
    }
}

/// Core convolution loop shared by the floating and integer variants.
///
/// The summation range is clamped per output index instead of zero padding
/// either input.
fn convolve_with<A, B, Acc>(
    x: &[A],
    h: &[B],
    mut mul: impl FnMut(A, B) -> Acc,
    zero: Acc,
) -> Result<Vec<Acc>>
where
    A: Copy,
    B: Copy,
    Acc: Copy + Add<Output = Acc>,
{
    if x.is_empty() || h.is_empty() {
        return Err(DspError::EmptyInput);
    }

    let n = x.len() + h.len() - 1;
    let mut y = Vec::with_capacity(n);

    for t in 0..n {
        let tau_min = t.saturating_sub(h.len() - 1);
        let tau_max = t.min(x.len() - 1);

        let mut acc = zero;
        for tau in tau_min..=tau_max {
            acc = acc + mul(x[tau], h[t - tau]);
        }
        y.push(acc);
    }

    Ok(y)
}

/// Full-length convolution of signal `x` with real-valued kernel `h`,
/// accumulated in `f64`.
pub fn conv_full<T: Sample>(x: &[T], h: &[f64]) -> Result<Vec<f64>> {
    convolve_with(x, h, |a, b| a.to_f64() * b, 0.0)
}

/// Full-length convolution of two 16-bit signals, accumulated in `i64`
pub fn conv_full_int(x: &[i16], h: &[i16]) -> Result<Vec<i64>> {
    convolve_with(x, h, |a, b| i64::from(a) * i64::from(b), 0)
}

fn check_full_len<T>(full: &[T], x_len: usize, h_len: usize) -> Result<()> {
    let expected = x_len + h_len - 1;
    if full.len() != expected {
        return Err(DspError::LengthMismatch {
            expected,
            actual: full.len(),
        });
    }
    Ok(())
}

/// Convolve `x` with kernel `h` and resolve the range for `kind`.
///
/// # Example
/// ```
/// use handy_dsp::signal_processing::{ConvolutionType, conv};
///
/// let x = [0i16, 1, 2, 3, 4, 5, 6, 7];
/// let h = [0.0, 1.0, 2.0];
/// let y = conv(&x, &h, ConvolutionType::Same).unwrap();
/// assert_eq!(y.output(), &[0.0, 1.0, 4.0, 7.0, 10.0, 13.0, 16.0, 19.0]);
/// assert_eq!(y.first_last(), Some((1, 8)));
/// ```
pub fn conv<T: Sample>(x: &[T], h: &[f64], kind: ConvolutionType) -> Result<Convolution<f64>> {
    let full = conv_full(x, h)?;
    check_full_len(&full, x.len(), h.len())?;
    Ok(Convolution {
        range: kind.resolve(x.len(), h.len()),
        full,
    })
}

/// Integer counterpart of [`conv`]
pub fn conv_int(x: &[i16], h: &[i16], kind: ConvolutionType) -> Result<Convolution<i64>> {
    let full = conv_full_int(x, h)?;
    check_full_len(&full, x.len(), h.len())?;
    Ok(Convolution {
        range: kind.resolve(x.len(), h.len()),
        full,
    })
}
