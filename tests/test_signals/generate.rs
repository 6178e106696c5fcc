use std::f64::consts::PI;

/// Generate a 16-bit PCM sine, truncating each sample like a C cast
pub fn generate_pcm_sine(
    num_samples: usize,
    sample_rate: u32,
    tone_hz: f64,
    amplitude: f64,
) -> Vec<i16> {
    (0..num_samples)
        .map(|i| (amplitude * reference_sine(i, sample_rate, tone_hz)) as i16)
        .collect()
}

/// Unit sine value at sample `i`
pub fn reference_sine(i: usize, sample_rate: u32, tone_hz: f64) -> f64 {
    (2.0 * PI * tone_hz * i as f64 / sample_rate as f64).sin()
}
