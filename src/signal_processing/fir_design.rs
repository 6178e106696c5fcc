use crate::config::KaiserSpec;
use crate::error::{DspError, Result};
use crate::signal_processing::fir_tables;
use crate::signal_processing::kaiser::validate_band;
use crate::signal_processing::math::sinc;
use crate::signal_processing::window::kaiser_window;

/// How a lowpass impulse response was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DesignMethod {
    /// Sampled inverse spectrum of an ideal rectangular lowpass (unwindowed sinc)
    #[default]
    SpectrumSampling,
    /// Precomputed least-squares design
    LeastSquares,
}

/// FIR lowpass filter: numerator coefficients plus the parameters they were
/// designed for.
///
/// A default-constructed filter has no coefficients and is rejected by
/// filtering and shaping until one of the design calls succeeds.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct FirFilter {
    b: Vec<f64>,
    passband_hz: u32,
    fs_hz: u32,
    method: DesignMethod,
}

impl FirFilter {
    /// Design a lowpass filter with `n` taps by the given method.
    ///
    /// The impulse response is not windowed; see [`FirFilter::shape`].
    ///
    /// # Errors
    /// * `DspError::InvalidLength` if `n` is zero
    /// * `DspError::InvalidBand` unless `0 < passband_hz < fs_hz / 2`
    /// * `DspError::UnsupportedDesign` for least-squares combinations with no
    ///   precomputed table
    pub fn lowpass(n: usize, fs_hz: u32, passband_hz: u32, method: DesignMethod) -> Result<Self> {
        match method {
            DesignMethod::SpectrumSampling => Self::lowpass_spectrum_sampling(n, fs_hz, passband_hz),
            DesignMethod::LeastSquares => Self::lowpass_least_squares(n, fs_hz, passband_hz),
        }
    }

    /// Ideal lowpass sampled at `n` points: `b[k] = 2Fp/Fs * sinc(2Fp(k-L)/Fs)`
    /// with `L = (n-1)/2`.
    pub fn lowpass_spectrum_sampling(n: usize, fs_hz: u32, passband_hz: u32) -> Result<Self> {
        if n == 0 {
            return Err(DspError::InvalidLength(
                "filter needs at least one tap".to_string(),
            ));
        }
        validate_band(passband_hz, fs_hz)?;

        let cutoff = 2.0 * passband_hz as f64 / fs_hz as f64;
        let center = (n - 1) as f64 / 2.0;
        let b = (0..n)
            .map(|k| cutoff * sinc(cutoff * (k as f64 - center), fs_hz))
            .collect();

        log::debug!(
            "Spectrum sampling lowpass: n={} passband={} Hz fs={} Hz",
            n,
            passband_hz,
            fs_hz
        );

        Ok(Self {
            b,
            passband_hz,
            fs_hz,
            method: DesignMethod::SpectrumSampling,
        })
    }

    /// Least-squares lowpass from the precomputed table for this exact
    /// (length, rate, passband).
    pub fn lowpass_least_squares(n: usize, fs_hz: u32, passband_hz: u32) -> Result<Self> {
        let design = fir_tables::find(n, fs_hz, passband_hz).ok_or_else(|| {
            DspError::UnsupportedDesign(format!(
                "no least-squares table for {} taps at passband {} Hz, fs {} Hz",
                n, passband_hz, fs_hz
            ))
        })?;

        log::debug!(
            "Least-squares lowpass: n={} passband={} Hz fs={} Hz",
            n,
            passband_hz,
            fs_hz
        );

        Ok(Self {
            b: design.taps.to_vec(),
            passband_hz,
            fs_hz,
            method: DesignMethod::LeastSquares,
        })
    }

    /// Least-squares lowpass shaped by a Kaiser window whose beta comes from
    /// the default [`KaiserSpec`]. The window length follows the canned table,
    /// not the Kaiser length estimate.
    ///
    /// # Errors
    /// Returns `DspError::UnsupportedDesign` unless a least-squares table
    /// exists for `(fs_hz, passband_hz)`.
    pub fn lowpass_kaiser_opt(fs_hz: u32, passband_hz: u32) -> Result<Self> {
        let table = fir_tables::find_by_band(fs_hz, passband_hz).ok_or_else(|| {
            DspError::UnsupportedDesign(format!(
                "no optimized Kaiser design for passband {} Hz, fs {} Hz",
                passband_hz, fs_hz
            ))
        })?;

        let params = KaiserSpec::default().design(passband_hz, fs_hz)?;
        let n = table.len();
        log::debug!(
            "Kaiser-optimized lowpass: estimated n={}, using table length {} (beta={:.5})",
            params.n,
            n,
            params.beta
        );

        let window = kaiser_window(n, params.beta);
        let mut filter = Self::lowpass_least_squares(n, fs_hz, passband_hz)?;
        filter.shape(&window)?;
        Ok(filter)
    }

    /// Redesign this filter in place.
    ///
    /// The filter is cleared first, so after a failed design it holds no
    /// coefficients.
    pub fn design_lowpass(
        &mut self,
        n: usize,
        fs_hz: u32,
        passband_hz: u32,
        method: DesignMethod,
    ) -> Result<()> {
        *self = Self::default();
        *self = Self::lowpass(n, fs_hz, passband_hz, method)?;
        Ok(())
    }

    /// Multiply the coefficients element-wise by `window`.
    ///
    /// # Errors
    /// * `DspError::FilterNotDesigned` if the filter has no coefficients
    /// * `DspError::LengthMismatch` if `window` is not exactly as long as the
    ///   filter (the filter is left untouched)
    pub fn shape(&mut self, window: &[f64]) -> Result<()> {
        if self.b.is_empty() {
            return Err(DspError::FilterNotDesigned);
        }
        if window.len() != self.b.len() {
            return Err(DspError::LengthMismatch {
                expected: self.b.len(),
                actual: window.len(),
            });
        }
        for (c, w) in self.b.iter_mut().zip(window) {
            *c *= w;
        }
        Ok(())
    }

    /// Numerator coefficients
    pub fn coefficients(&self) -> &[f64] {
        &self.b
    }

    /// Get the number of taps (filter length)
    pub fn num_taps(&self) -> usize {
        self.b.len()
    }

    pub fn is_designed(&self) -> bool {
        !self.b.is_empty()
    }

    /// Get the group delay in samples (half the filter length for linear phase)
    pub fn group_delay_samples(&self) -> usize {
        self.b.len().saturating_sub(1) / 2
    }

    pub fn passband_hz(&self) -> u32 {
        self.passband_hz
    }

    pub fn fs_hz(&self) -> u32 {
        self.fs_hz
    }

    pub fn method(&self) -> DesignMethod {
        self.method
    }
}

/// Design an `n`-tap lowpass by `method`; see [`FirFilter::lowpass`]
pub fn fir_design_lowpass(
    n: usize,
    fs_hz: u32,
    passband_hz: u32,
    method: DesignMethod,
) -> Result<FirFilter> {
    FirFilter::lowpass(n, fs_hz, passband_hz, method)
}

/// Shape `filter` with `window`; see [`FirFilter::shape`]
pub fn fir_shape(filter: &mut FirFilter, window: &[f64]) -> Result<()> {
    filter.shape(window)
}

/// Kaiser-shaped least-squares lowpass; see [`FirFilter::lowpass_kaiser_opt`]
pub fn fir_design_lowpass_kaiser_opt(fs_hz: u32, passband_hz: u32) -> Result<FirFilter> {
    FirFilter::lowpass_kaiser_opt(fs_hz, passband_hz)
}
