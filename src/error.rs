use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DspError {
    #[error("Empty input: every signal and filter needs at least one sample")]
    EmptyInput,

    #[error("Invalid resampling factor: {0} (must be at least 1)")]
    InvalidFactor(usize),

    #[error("Buffer length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Invalid band: passband {passband_hz} Hz must lie in (0, {fs_hz}/2) Hz")]
    InvalidBand { passband_hz: u32, fs_hz: u32 },

    #[error("Unsupported filter design: {0}")]
    UnsupportedDesign(String),

    #[error("Filter has no coefficients; design it before use")]
    FilterNotDesigned,

    #[error("Invalid length: {0}")]
    InvalidLength(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DspError>;
