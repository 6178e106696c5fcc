//! Configuration for filter design and frame resampling.
//!
//! ## Loading from TOML
//!
//! [`ResampleConfig`] can be read from a TOML file. Every key is optional and
//! falls back to [`ResampleConfig::default()`]:
//!
//! ```toml
//! input_rate = "16khz"
//! target_rate_hz = 48000
//! ptime_ms = 20
//!
//! [kaiser]
//! stopband_attenuation_db = 60.0
//! passband_ripple_db = 0.1
//! steepness = 0.85
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::constants::{
    KAISER_PASSBAND_RIPPLE_DB, KAISER_STEEPNESS, KAISER_STOPBAND_ATTENUATION_DB,
    TARGET_SAMPLE_RATE_HZ,
};
use crate::error::{DspError, Result};

/// Sampling rate in Hz
///
/// # Parsing formats
/// - `8000` - rate in Hz (no suffix)
/// - `8000hz` or `8000Hz` - rate in Hz (explicit)
/// - `8khz`, `8kHz` or `8k` - rate in kHz
///
/// # Example
/// ```
/// use handy_dsp::config::SampleRate;
///
/// let rate: SampleRate = "16khz".parse().unwrap();
/// assert_eq!(rate.as_hz(), 16000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawSampleRate")]
pub struct SampleRate(u32);

impl SampleRate {
    pub fn from_hz(hz: u32) -> Self {
        Self(hz)
    }

    pub fn as_hz(&self) -> u32 {
        self.0
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        Self(8000)
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}hz", self.0)
    }
}

impl FromStr for SampleRate {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();

        // kHz suffix, with or without the trailing "hz"
        if let Some(num) = lower
            .strip_suffix("khz")
            .or_else(|| lower.strip_suffix('k'))
        {
            let khz: f64 = num
                .trim()
                .parse()
                .map_err(|_| format!("invalid sample rate: {}", s))?;
            let hz = (khz * 1000.0).round();
            if hz <= 0.0 || hz > u32::MAX as f64 {
                return Err("sample rate must be positive".to_string());
            }
            return Ok(Self(hz as u32));
        }

        let num = lower.strip_suffix("hz").unwrap_or(&lower);
        let hz: u32 = num
            .trim()
            .parse()
            .map_err(|_| format!("invalid sample rate: {}", s))?;
        if hz == 0 {
            return Err("sample rate must be positive".to_string());
        }
        Ok(Self(hz))
    }
}

/// Sample rate as written in a config file: a number or a suffixed string
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSampleRate {
    Hz(u32),
    Text(String),
}

impl TryFrom<RawSampleRate> for SampleRate {
    type Error = String;

    fn try_from(raw: RawSampleRate) -> std::result::Result<Self, Self::Error> {
        match raw {
            RawSampleRate::Hz(0) => Err("sample rate must be positive".to_string()),
            RawSampleRate::Hz(hz) => Ok(Self(hz)),
            RawSampleRate::Text(s) => s.parse(),
        }
    }
}

/// Kaiser lowpass design targets
///
/// Used to derive filter length and window beta from a passband edge.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct KaiserSpec {
    /// Minimum stopband attenuation in dB
    pub stopband_attenuation_db: f64,
    /// Maximum peak-to-peak passband ripple in dB
    pub passband_ripple_db: f64,
    /// Fraction of the distance from passband edge to Nyquist that stays
    /// passband; the remainder is the transition band (0 < steepness < 1)
    pub steepness: f64,
}

impl Default for KaiserSpec {
    fn default() -> Self {
        Self {
            stopband_attenuation_db: KAISER_STOPBAND_ATTENUATION_DB,
            passband_ripple_db: KAISER_PASSBAND_RIPPLE_DB,
            steepness: KAISER_STEEPNESS,
        }
    }
}

/// Frame resampling configuration
///
/// Describes an input stream that is upsampled to `target_rate_hz`, lowpass
/// filtered and decimated back to the input rate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResampleConfig {
    /// Input sampling rate (8 kHz or 16 kHz with the built-in filters)
    pub input_rate: SampleRate,
    /// Output sampling rate in Hz, must be a multiple of the input rate
    pub target_rate_hz: u32,
    /// Frame duration in milliseconds
    pub ptime_ms: u32,
    /// Design targets for the anti-imaging filter estimate
    pub kaiser: KaiserSpec,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            input_rate: SampleRate::default(),
            target_rate_hz: TARGET_SAMPLE_RATE_HZ,
            ptime_ms: 20,
            kaiser: KaiserSpec::default(),
        }
    }
}

impl ResampleConfig {
    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DspError::Config(e.to_string()))
    }

    /// Read and parse a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| DspError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Integer ratio of target to input rate
    pub fn upsample_factor(&self) -> Result<usize> {
        let input = self.input_rate.as_hz();
        if input == 0 || self.target_rate_hz < input || self.target_rate_hz % input != 0 {
            return Err(DspError::Config(format!(
                "target rate {} Hz is not an integer multiple of input rate {} Hz",
                self.target_rate_hz, input
            )));
        }
        Ok((self.target_rate_hz / input) as usize)
    }

    /// Input samples per frame
    pub fn samples_per_frame(&self) -> Result<usize> {
        let samples = self.ptime_ms as u64 * self.input_rate.as_hz() as u64 / 1000;
        if samples == 0 {
            return Err(DspError::Config(format!(
                "frame of {} ms at {} holds no samples",
                self.ptime_ms, self.input_rate
            )));
        }
        Ok(samples as usize)
    }
}
