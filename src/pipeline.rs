//! Frame-wise upsample, filter and decimate pipeline.
//!
//! Each 16-bit input frame is zero-insertion upsampled to the target rate,
//! zero-phase lowpass filtered at half the input rate to remove the images
//! created by upsampling, then decimated back to the input rate.

use crate::config::ResampleConfig;
use crate::error::{DspError, Result};
use crate::signal_processing::{
    FirFilter, FrameFilter, convert_samples, downsample, fir_tables, kaiser_window, upsample,
};

/// Every intermediate stage of one processed frame, as 16-bit PCM
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    /// Zero-insertion upsampled frame at the target rate
    pub upsampled: Vec<i16>,
    /// Upsampled and lowpass filtered frame at the target rate
    pub filtered: Vec<i16>,
    /// Filtered frame decimated back to the input rate
    pub restored: Vec<i16>,
}

/// Upsample/filter/downsample processor for fixed-size frames
pub struct FrameResampler {
    filter: FirFilter,
    factor: usize,
    frame_len: usize,
}

impl FrameResampler {
    /// Create a resampler for the given configuration
    ///
    /// # Errors
    /// * `DspError::Config` if the target rate is not an integer multiple of
    ///   the input rate, or a frame would be empty
    /// * `DspError::UnsupportedDesign` if no lowpass exists for half the input
    ///   rate at the target rate
    pub fn new(config: &ResampleConfig) -> Result<Self> {
        let factor = config.upsample_factor()?;
        let frame_len = config.samples_per_frame()?;
        let passband_hz = config.input_rate.as_hz() / 2;

        // Length comes from the canned table; the Kaiser design only supplies beta
        let table = fir_tables::find_by_band(config.target_rate_hz, passband_hz).ok_or_else(|| {
            DspError::UnsupportedDesign(format!(
                "no anti-imaging filter for {} input at {} Hz",
                config.input_rate, config.target_rate_hz
            ))
        })?;
        let params = config.kaiser.design(passband_hz, config.target_rate_hz)?;
        let mut filter = FirFilter::lowpass_least_squares(
            table.len(),
            config.target_rate_hz,
            passband_hz,
        )?;
        filter.shape(&kaiser_window(table.len(), params.beta))?;

        log::debug!(
            "Frame resampler: {} -> {} Hz, factor {}, {} samples per frame, {} taps",
            config.input_rate,
            config.target_rate_hz,
            factor,
            frame_len,
            filter.num_taps()
        );

        Ok(Self {
            filter,
            factor,
            frame_len,
        })
    }

    /// Run one frame through the pipeline.
    ///
    /// # Errors
    /// Returns `DspError::LengthMismatch` if `frame` is not exactly
    /// [`Self::frame_len`] samples long.
    pub fn process_frame(&self, frame: &[i16]) -> Result<FrameOutput> {
        if frame.len() != self.frame_len {
            return Err(DspError::LengthMismatch {
                expected: self.frame_len,
                actual: frame.len(),
            });
        }

        let upsampled = upsample(frame, self.factor)?;
        let filtered = self.filter.filter_frame(&upsampled)?;
        let decimated = downsample(&filtered, self.factor)?;

        log::trace!(
            "Frame: {} in, {} upsampled, {} restored",
            frame.len(),
            upsampled.len(),
            decimated.len()
        );

        Ok(FrameOutput {
            upsampled,
            filtered: convert_samples(&filtered),
            restored: convert_samples(&decimated),
        })
    }

    /// Input samples per frame
    pub fn frame_len(&self) -> usize {
        self.frame_len
    }

    /// Output samples per frame at the target rate
    pub fn upsampled_frame_len(&self) -> usize {
        self.frame_len * self.factor
    }

    pub fn factor(&self) -> usize {
        self.factor
    }

    pub fn filter(&self) -> &FirFilter {
        &self.filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SampleRate;
    use crate::signal_processing::fir_design_lowpass_kaiser_opt;

    #[test]
    fn test_default_config_matches_kaiser_opt() {
        let resampler = FrameResampler::new(&ResampleConfig::default()).unwrap();
        assert_eq!(resampler.factor(), 6);
        assert_eq!(resampler.frame_len(), 160);
        assert_eq!(resampler.upsampled_frame_len(), 960);
        assert_eq!(
            resampler.filter(),
            &fir_design_lowpass_kaiser_opt(48000, 4000).unwrap()
        );
    }

    #[test]
    fn test_16khz_input() {
        let config = ResampleConfig {
            input_rate: SampleRate::from_hz(16000),
            ptime_ms: 10,
            ..ResampleConfig::default()
        };
        let resampler = FrameResampler::new(&config).unwrap();
        assert_eq!(resampler.factor(), 3);
        assert_eq!(resampler.filter().num_taps(), 75);

        let out = resampler.process_frame(&[0i16; 160]).unwrap();
        assert_eq!(out.upsampled.len(), 480);
        assert_eq!(out.filtered.len(), 480);
        assert_eq!(out.restored.len(), 160);
    }

    #[test]
    fn test_unsupported_rate() {
        let config = ResampleConfig {
            input_rate: SampleRate::from_hz(12000),
            ..ResampleConfig::default()
        };
        assert!(matches!(
            FrameResampler::new(&config),
            Err(DspError::UnsupportedDesign(_))
        ));
    }

    #[test]
    fn test_filtered_stage_is_frame_filter_output() {
        let resampler = FrameResampler::new(&ResampleConfig::default()).unwrap();
        let frame: Vec<i16> = (0..160).map(|i| ((i * 37) % 200) as i16 - 100).collect();
        let out = resampler.process_frame(&frame).unwrap();

        let expected = resampler.filter().filter_frame(&out.upsampled).unwrap();
        let expected: Vec<i16> = convert_samples(&expected);
        assert_eq!(out.filtered, expected);
    }

    #[test]
    fn test_wrong_frame_length() {
        let resampler = FrameResampler::new(&ResampleConfig::default()).unwrap();
        assert_eq!(
            resampler.process_frame(&[0i16; 100]),
            Err(DspError::LengthMismatch {
                expected: 160,
                actual: 100
            })
        );
    }
}
