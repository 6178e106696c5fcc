use std::fmt::Debug;

/// A sample representation the toolkit can process.
///
/// Implemented for 16-bit PCM (`i16`), `f32` and `f64`. Conversion to `f64`
/// is exact; conversion back to `i16` truncates toward zero and saturates at
/// the `i16` range, matching a C `(int16_t)` cast for in-range values.
pub trait Sample: Copy + Default + PartialEq + Debug + Send + Sync + 'static {
    /// Additive identity, used for inserted samples
    const ZERO: Self;

    fn to_f64(self) -> f64;

    fn from_f64(value: f64) -> Self;
}

impl Sample for i16 {
    const ZERO: Self = 0;

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value as i16
    }
}

impl Sample for f32 {
    const ZERO: Self = 0.0;

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Sample for f64 {
    const ZERO: Self = 0.0;

    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

/// Convert a buffer between sample representations
pub fn convert_samples<A: Sample, B: Sample>(input: &[A]) -> Vec<B> {
    input.iter().map(|&s| B::from_f64(s.to_f64())).collect()
}
