mod test_signals;

use std::io::Cursor;

use handy_dsp::config::{ResampleConfig, SampleRate};
use handy_dsp::pcm::{RawPcmReader, RawPcmWriter};
use handy_dsp::signal_processing::{downsample, fir_design_lowpass_kaiser_opt, fir_filter, upsample};
use handy_dsp::{DspError, FrameResampler};

const AMPLITUDE: f64 = 6000.0;

fn config(input_rate_hz: u32, ptime_ms: u32) -> ResampleConfig {
    ResampleConfig {
        input_rate: SampleRate::from_hz(input_rate_hz),
        ptime_ms,
        ..ResampleConfig::default()
    }
}

#[test]
fn test_upsample_example() {
    let y = upsample(&[1i16, 2, 3], 4).unwrap();
    assert_eq!(y, vec![1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0]);
}

#[test]
fn test_round_trip_restores_scaled_input() {
    for (rate, tone_hz) in [(8000u32, 200.0), (16000, 1000.0)] {
        let resampler = FrameResampler::new(&config(rate, 20)).unwrap();
        let factor = resampler.factor() as i32;
        let n = resampler.frame_len();

        let x = test_signals::generate_pcm_sine(n, rate, tone_hz, AMPLITUDE);
        let out = resampler.process_frame(&x).unwrap();
        assert_eq!(out.upsampled.len(), n * factor as usize);
        assert_eq!(out.filtered.len(), n * factor as usize);
        assert_eq!(out.restored.len(), n);

        // Zero insertion leaves 1/factor of the passband energy per sample
        for i in 20..n - 20 {
            let restored = out.restored[i] as i32 * factor;
            assert!(
                (restored - x[i] as i32).abs() < 60,
                "{} Hz input, sample {}: restored {} vs {}",
                rate,
                i,
                restored,
                x[i]
            );
        }
    }
}

#[test]
fn test_filter_interpolates_between_samples() {
    let rate = 8000;
    let resampler = FrameResampler::new(&config(rate, 20)).unwrap();
    let factor = resampler.factor();
    let x = test_signals::generate_pcm_sine(resampler.frame_len(), rate, 200.0, AMPLITUDE);
    let out = resampler.process_frame(&x).unwrap();

    for j in 100..out.filtered.len() - 100 {
        let expected = AMPLITUDE * test_signals::reference_sine(j, 48000, 200.0);
        let actual = out.filtered[j] as f64 * factor as f64;
        assert!(
            (actual - expected).abs() < 60.0,
            "sample {}: {} vs {}",
            j,
            actual,
            expected
        );
    }
}

#[test]
fn test_pipeline_matches_manual_chain() {
    let resampler = FrameResampler::new(&config(8000, 10)).unwrap();
    let x = test_signals::generate_pcm_sine(80, 8000, 440.0, 3000.0);

    let filter = fir_design_lowpass_kaiser_opt(48000, 4000).unwrap();
    let up = upsample(&x, 6).unwrap();
    let filtered = fir_filter(&up, &filter).unwrap();
    let down = downsample(&filtered, 6).unwrap();

    let out = resampler.process_frame(&x).unwrap();
    assert_eq!(out.upsampled, up);
    let truncated: Vec<i16> = down.iter().map(|&v| v as i16).collect();
    assert_eq!(out.restored, truncated);
}

#[test]
fn test_silence_stays_silent() {
    let resampler = FrameResampler::new(&config(16000, 20)).unwrap();
    let out = resampler.process_frame(&vec![0i16; 320]).unwrap();
    assert!(out.filtered.iter().all(|&v| v == 0));
    assert!(out.restored.iter().all(|&v| v == 0));
}

#[test]
fn test_stream_of_frames_through_raw_pcm() {
    let resampler = FrameResampler::new(&config(8000, 20)).unwrap();
    let signal = test_signals::generate_pcm_sine(160 * 3 + 50, 8000, 300.0, 2000.0);

    let mut writer = RawPcmWriter::new(Vec::new());
    writer.write_samples(&signal).unwrap();
    let bytes = writer.into_inner();

    let mut restored = RawPcmWriter::new(Vec::new());
    let mut frames = 0;
    for frame in RawPcmReader::new(Cursor::new(bytes), resampler.frame_len()) {
        let out = resampler.process_frame(&frame.unwrap()).unwrap();
        restored.write_samples(&out.restored).unwrap();
        frames += 1;
    }

    // The trailing 50 samples do not fill a frame
    assert_eq!(frames, 3);
    assert_eq!(restored.samples_written(), 480);
}

#[test]
fn test_unsupported_configurations() {
    assert!(matches!(
        FrameResampler::new(&config(44100, 20)),
        Err(DspError::Config(_))
    ));
    assert!(matches!(
        FrameResampler::new(&config(24000, 20)),
        Err(DspError::UnsupportedDesign(_))
    ));
}
