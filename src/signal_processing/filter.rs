use crate::error::{DspError, Result};
use crate::signal_processing::convolution::{ConvolutionType, conv};
use crate::signal_processing::{FirFilter, Sample};

/// Common trait for frame-wise filters
///
/// Implemented by FirFilter.
pub trait FrameFilter {
    /// Filter a whole frame, returning exactly `frame.len()` samples
    fn filter_frame<T: Sample>(&self, frame: &[T]) -> Result<Vec<f64>>;
}

/// Zero-phase filter `x` with `filter`.
///
/// Takes the `same` slice of the full convolution, which cancels the
/// `(n - 1) / 2` sample group delay of a symmetric filter. The output always
/// has `x.len()` samples, whether the filter is shorter or longer than `x`.
///
/// # Errors
/// * `DspError::FilterNotDesigned` if the filter has no coefficients
/// * `DspError::EmptyInput` if `x` is empty
pub fn fir_filter<T: Sample>(x: &[T], filter: &FirFilter) -> Result<Vec<f64>> {
    let mut y = vec![0.0; x.len()];
    fir_filter_into(x, filter, &mut y)?;
    Ok(y)
}

/// Zero-phase filter `x` into `y[..x.len()]`.
///
/// `y` must hold at least `x.len()` samples. Nothing is written to `y`
/// unless filtering succeeds.
pub fn fir_filter_into<T: Sample>(x: &[T], filter: &FirFilter, y: &mut [f64]) -> Result<()> {
    if !filter.is_designed() {
        return Err(DspError::FilterNotDesigned);
    }
    if y.len() < x.len() {
        return Err(DspError::LengthMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }

    let convolution = conv(x, filter.coefficients(), ConvolutionType::Same)?;
    let same = convolution.output();
    if same.len() != x.len() {
        return Err(DspError::LengthMismatch {
            expected: x.len(),
            actual: same.len(),
        });
    }

    y[..x.len()].copy_from_slice(same);
    log::trace!(
        "Filtered {} samples with {} taps",
        x.len(),
        filter.num_taps()
    );
    Ok(())
}

impl FrameFilter for FirFilter {
    fn filter_frame<T: Sample>(&self, frame: &[T]) -> Result<Vec<f64>> {
        fir_filter(frame, self)
    }
}
