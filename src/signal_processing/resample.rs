use crate::error::{DspError, Result};
use crate::signal_processing::Sample;

fn check_factor(factor: usize) -> Result<()> {
    if factor < 1 {
        return Err(DspError::InvalidFactor(factor));
    }
    Ok(())
}

/// Output length of upsampling `x_len` samples by `factor`
fn upsampled_len(x_len: usize, factor: usize) -> Result<usize> {
    x_len
        .checked_mul(factor)
        .ok_or(DspError::InvalidFactor(factor))
}

fn check_output_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(DspError::LengthMismatch { expected, actual });
    }
    Ok(())
}

/// Upsample by zero insertion.
///
/// Every input sample is followed by `factor - 1` exact zeros, so a lowpass
/// filter applied afterwards interpolates between the original samples.
///
/// # Example
/// ```
/// use handy_dsp::signal_processing::upsample;
///
/// let y = upsample(&[1i16, 2, 3], 4).unwrap();
/// assert_eq!(y, vec![1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0]);
/// ```
pub fn upsample<T: Sample>(x: &[T], factor: usize) -> Result<Vec<T>> {
    check_factor(factor)?;
    let mut y = vec![T::ZERO; upsampled_len(x.len(), factor)?];
    upsample_into(x, factor, &mut y)?;
    Ok(y)
}

/// Upsample `x` into `y`, which must hold exactly `x.len() * factor` samples
pub fn upsample_into<T: Sample>(x: &[T], factor: usize, y: &mut [T]) -> Result<()> {
    if x.is_empty() {
        return Err(DspError::EmptyInput);
    }
    check_factor(factor)?;
    check_output_len(upsampled_len(x.len(), factor)?, y.len())?;

    if factor == 1 {
        y.copy_from_slice(x);
        return Ok(());
    }

    for (chunk, &sample) in y.chunks_exact_mut(factor).zip(x) {
        chunk[0] = sample;
        chunk[1..].fill(T::ZERO);
    }
    Ok(())
}

/// Downsample by keeping every `factor`-th sample, starting with the first.
///
/// No anti-aliasing filter is applied; lowpass the signal first.
pub fn downsample<T: Sample>(x: &[T], factor: usize) -> Result<Vec<T>> {
    check_factor(factor)?;
    let mut y = vec![T::ZERO; x.len() / factor];
    downsample_into(x, factor, &mut y)?;
    Ok(y)
}

/// Downsample `x` into `y`, which must hold exactly `x.len() / factor` samples
pub fn downsample_into<T: Sample>(x: &[T], factor: usize, y: &mut [T]) -> Result<()> {
    if x.is_empty() {
        return Err(DspError::EmptyInput);
    }
    check_factor(factor)?;
    let expected = x.len() / factor;
    if expected == 0 {
        return Err(DspError::InvalidLength(format!(
            "{} samples cannot be decimated by {}",
            x.len(),
            factor
        )));
    }
    check_output_len(expected, y.len())?;

    for (out, &sample) in y.iter_mut().zip(x.iter().step_by(factor)) {
        *out = sample;
    }
    Ok(())
}
