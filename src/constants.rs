//! Numeric constants for filter design
//!
//! Shared limits and default design targets used by the window, Kaiser and
//! FIR design modules.

/// Nominal maximum filter length.
///
/// Coefficients live in a `Vec<f64>`; nothing enforces this limit.
pub const FIR_FILTER_LEN_MAX: usize = 4096;

/// Highest k in the Bessel I0 power series (and the last factorial tabulated).
pub const FACTORIAL_MAX: usize = 40;

/// Default stopband attenuation target for Kaiser designs, in dB.
pub const KAISER_STOPBAND_ATTENUATION_DB: f64 = 60.0;

/// Default passband ripple target for Kaiser designs, in dB.
pub const KAISER_PASSBAND_RIPPLE_DB: f64 = 0.1;

/// Fraction of the band between passband edge and Nyquist left as passband
/// when placing the stopband edge (0.85 leaves a 15% transition).
pub const KAISER_STEEPNESS: f64 = 0.85;

/// Kaiser's empirical filter length constant, 2.285 scaled by 2π.
pub const KAISER_LENGTH_DENOMINATOR: f64 = 2.0 * std::f64::consts::PI * 2.285;

/// Sampling rate targeted by the frame resampler.
pub const TARGET_SAMPLE_RATE_HZ: u32 = 48000;

/// Convert stopband attenuation in dB to linear stopband deviation.
pub fn stopband_attenuation_db_to_linear(db: f64) -> f64 {
    10f64.powf(-db / 20.0)
}

/// Convert peak-to-peak passband ripple in dB to linear passband deviation.
pub fn passband_ripple_db_to_linear(db: f64) -> f64 {
    let g = 10f64.powf(db / 20.0);
    (g - 1.0) / (g + 1.0)
}
