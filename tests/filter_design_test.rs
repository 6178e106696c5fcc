use approx::assert_abs_diff_eq;
use handy_dsp::DspError;
use handy_dsp::signal_processing::{
    DesignMethod, FirFilter, fir_design_lowpass, fir_design_lowpass_kaiser_opt, fir_filter,
    fir_shape, fir_tables, hamming_window, kaiser_window,
};

// MATLAB: x_fir(8000, 48000, 71, 0)
const SPECTRUM_SAMPLING_71_8000_48000: [f64; 71] = [
    -0.007876, -0.008108, -0.000000, 0.008615, 0.008892, -0.000000, -0.009506,
    -0.009845, 0.000000, 0.010602, 0.011027, -0.000000, -0.011985, -0.012530,
    -0.000000, 0.013783, 0.014509, 0.000000, -0.016216, -0.017229, -0.000000,
    0.019690, 0.021205, 0.000000, -0.025060, -0.027566, -0.000000, 0.034458,
    0.039381, -0.000000, -0.055133, -0.068916, -0.000000, 0.137832, 0.275664,
    0.333333, 0.275664, 0.137832, -0.000000, -0.068916, -0.055133, -0.000000,
    0.039381, 0.034458, -0.000000, -0.027566, -0.025060, 0.000000, 0.021205,
    0.019690, -0.000000, -0.017229, -0.016216, 0.000000, 0.014509, 0.013783,
    -0.000000, -0.012530, -0.011985, -0.000000, 0.011027, 0.010602, 0.000000,
    -0.009845, -0.009506, -0.000000, 0.008892, 0.008615, -0.000000, -0.008108,
    -0.007876,
];
#[test]
fn test_spectrum_sampling_reference() {
    let filter = fir_design_lowpass(71, 48000, 8000, DesignMethod::SpectrumSampling).unwrap();
    assert_eq!(filter.num_taps(), 71);
    assert_eq!(filter.method(), DesignMethod::SpectrumSampling);
    for (b, r) in filter
        .coefficients()
        .iter()
        .zip(SPECTRUM_SAMPLING_71_8000_48000.iter())
    {
        assert_abs_diff_eq!(*b, *r, epsilon = 1e-5);
    }
    assert_abs_diff_eq!(filter.coefficients()[35], 2.0 * 8000.0 / 48000.0, epsilon = 1e-12);
}

#[test]
fn test_least_squares_reproduces_tables() {
    for design in fir_tables::LEAST_SQUARES_DESIGNS {
        let filter = fir_design_lowpass(
            design.len(),
            design.fs_hz,
            design.passband_hz,
            DesignMethod::LeastSquares,
        )
        .unwrap();
        assert_eq!(filter.method(), DesignMethod::LeastSquares);
        assert_eq!(filter.coefficients(), design.taps);
        assert_eq!(filter.passband_hz(), design.passband_hz);
        assert_eq!(filter.fs_hz(), design.fs_hz);
    }
}

#[test]
fn test_least_squares_rejects_other_lengths() {
    assert!(matches!(
        fir_design_lowpass(256, 48000, 8000, DesignMethod::LeastSquares),
        Err(DspError::UnsupportedDesign(_))
    ));
    assert!(matches!(
        fir_design_lowpass(57, 48000, 8000, DesignMethod::LeastSquares),
        Err(DspError::UnsupportedDesign(_))
    ));
}

#[test]
fn test_redesign_is_idempotent() {
    let mut a = FirFilter::default();
    let mut b = FirFilter::default();
    for (n, passband, method) in [
        (71, 8000, DesignMethod::SpectrumSampling),
        (57, 4000, DesignMethod::LeastSquares),
        (75, 8000, DesignMethod::LeastSquares),
    ] {
        a.design_lowpass(n, 48000, passband, method).unwrap();
        b.design_lowpass(n, 48000, passband, method).unwrap();
        assert_eq!(a, b);
        let bits_a: Vec<u64> = a.coefficients().iter().map(|v| v.to_bits()).collect();
        let bits_b: Vec<u64> = b.coefficients().iter().map(|v| v.to_bits()).collect();
        assert_eq!(bits_a, bits_b);
    }
}

#[test]
fn test_shaping_with_windows() {
    let mut filter = fir_design_lowpass(71, 48000, 8000, DesignMethod::SpectrumSampling).unwrap();
    let raw = filter.clone();
    fir_shape(&mut filter, &hamming_window(71)).unwrap();
    assert_abs_diff_eq!(filter.coefficients()[0], raw.coefficients()[0] * 0.08, epsilon = 1e-12);
    assert_abs_diff_eq!(filter.coefficients()[35], raw.coefficients()[35], epsilon = 1e-12);

    assert!(matches!(
        fir_shape(&mut filter, &kaiser_window(70, 5.0)),
        Err(DspError::LengthMismatch { expected: 71, actual: 70 })
    ));
}

#[test]
fn test_kaiser_opt_is_shaped_least_squares() {
    let shaped = fir_design_lowpass_kaiser_opt(48000, 8000).unwrap();
    let base = fir_design_lowpass(75, 48000, 8000, DesignMethod::LeastSquares).unwrap();
    let window = kaiser_window(75, 0.1102 * (60.0 - 8.7));
    for ((s, b), w) in shaped
        .coefficients()
        .iter()
        .zip(base.coefficients())
        .zip(&window)
    {
        assert_abs_diff_eq!(*s, b * w, epsilon = 1e-15);
    }
}

#[test]
fn test_windowed_sinc_attenuates_stopband() {
    let mut filter = fir_design_lowpass(71, 48000, 8000, DesignMethod::SpectrumSampling).unwrap();
    fir_shape(&mut filter, &hamming_window(71)).unwrap();

    let tone = |hz: f64| -> Vec<f64> {
        (0..4800)
            .map(|i| (2.0 * std::f64::consts::PI * hz * i as f64 / 48000.0).sin())
            .collect()
    };
    let rms = |v: &[f64]| (v.iter().map(|x| x * x).sum::<f64>() / v.len() as f64).sqrt();

    let pass = fir_filter(&tone(1000.0), &filter).unwrap();
    let stop = fir_filter(&tone(16000.0), &filter).unwrap();

    // Skip the edges where the filter runs off the frame
    let pass_rms = rms(&pass[100..4700]);
    let stop_rms = rms(&stop[100..4700]);
    let reference = rms(&tone(1000.0)[100..4700]);

    let pass_db = 20.0 * (pass_rms / reference).log10();
    let stop_db = 20.0 * (stop_rms / reference).log10();
    assert!(pass_db.abs() < 0.5, "Passband gain {} dB", pass_db);
    assert!(stop_db < -40.0, "Stopband gain {} dB", stop_db);
}

#[test]
fn test_filter_output_length_invariant() {
    let filters = [
        fir_design_lowpass(71, 48000, 8000, DesignMethod::SpectrumSampling).unwrap(),
        fir_design_lowpass(4, 48000, 8000, DesignMethod::SpectrumSampling).unwrap(),
        fir_design_lowpass_kaiser_opt(48000, 4000).unwrap(),
    ];
    for filter in &filters {
        for len in [1usize, 3, 56, 57, 58, 960] {
            let x: Vec<i16> = (0..len).map(|i| (i % 100) as i16).collect();
            assert_eq!(fir_filter(&x, filter).unwrap().len(), len);
        }
    }
}
