use crate::config::KaiserSpec;
use crate::constants::{
    KAISER_LENGTH_DENOMINATOR, passband_ripple_db_to_linear, stopband_attenuation_db_to_linear,
};
use crate::error::{DspError, Result};

/// Length and shape parameter of a Kaiser-windowed lowpass design
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct KaiserParams {
    /// Number of filter taps
    pub n: usize,
    /// Kaiser window shape parameter
    pub beta: f64,
}

/// Kaiser window beta giving the requested stopband attenuation (dB).
///
/// Uses Kaiser's empirical rule. Below 21 dB a rectangular window already
/// meets the target, so beta is 0.
pub fn kaiser_beta(attenuation_db: f64) -> f64 {
    if attenuation_db > 50.0 {
        0.1102 * (attenuation_db - 8.7)
    } else if attenuation_db >= 21.0 {
        let a = attenuation_db - 21.0;
        0.5842 * a.powf(0.4) + 0.07886 * a
    } else {
        0.0
    }
}

/// Check that `passband_hz` lies strictly inside (0, fs/2)
pub(crate) fn validate_band(passband_hz: u32, fs_hz: u32) -> Result<()> {
    if passband_hz == 0 || fs_hz == 0 || passband_hz as f64 >= fs_hz as f64 / 2.0 {
        return Err(DspError::InvalidBand {
            passband_hz,
            fs_hz,
        });
    }
    Ok(())
}

/// Design filter length and beta for a Kaiser lowpass with the default
/// transition steepness.
///
/// # Arguments
/// * `passband_hz` - Passband edge frequency in Hz
/// * `fs_hz` - Sampling rate in Hz
/// * `stopband_attenuation_db` - Minimum stopband attenuation in dB
/// * `passband_ripple_db` - Maximum peak-to-peak passband ripple in dB
///
/// # Errors
/// Returns `DspError::InvalidBand` unless `0 < passband_hz < fs_hz / 2`
pub fn design_kaiser_n_beta(
    passband_hz: u32,
    fs_hz: u32,
    stopband_attenuation_db: f64,
    passband_ripple_db: f64,
) -> Result<KaiserParams> {
    KaiserSpec {
        stopband_attenuation_db,
        passband_ripple_db,
        ..KaiserSpec::default()
    }
    .design(passband_hz, fs_hz)
}

impl KaiserSpec {
    /// Design (n, beta) meeting these targets for a lowpass at `passband_hz`.
    ///
    /// The stopband edge sits `(1 - steepness)` of the way from the passband
    /// edge to Nyquist. The tighter of the two deviations sets the attenuation
    /// used for both the length estimate and beta.
    pub fn design(&self, passband_hz: u32, fs_hz: u32) -> Result<KaiserParams> {
        validate_band(passband_hz, fs_hz)?;

        let fs = fs_hz as f64;
        let passband = passband_hz as f64;
        let stopband = passband + (1.0 - self.steepness) * (fs / 2.0 - passband);
        let transition = (stopband - passband) / fs;
        if transition <= 0.0 {
            return Err(DspError::Config(format!(
                "steepness {} leaves no transition band",
                self.steepness
            )));
        }

        let delta_stop = stopband_attenuation_db_to_linear(self.stopband_attenuation_db);
        let delta_pass = passband_ripple_db_to_linear(self.passband_ripple_db);
        let attenuation_db = -20.0 * delta_stop.min(delta_pass).log10();

        let d = (attenuation_db - 7.95) / KAISER_LENGTH_DENOMINATOR;
        let n = ((d / transition).ceil() + 1.0).max(1.0) as usize;
        let beta = kaiser_beta(attenuation_db);

        log::debug!(
            "Kaiser design: passband={} Hz fs={} Hz A={:.2} dB -> n={} beta={:.5}",
            passband_hz,
            fs_hz,
            attenuation_db,
            n,
            beta
        );

        Ok(KaiserParams { n, beta })
    }
}
