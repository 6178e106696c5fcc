pub mod config;
pub mod constants;
pub mod error;
pub mod pcm;
pub mod pipeline;
pub mod signal_processing;
pub mod wav;

pub use config::{KaiserSpec, ResampleConfig, SampleRate};
pub use error::{DspError, Result};
pub use pipeline::{FrameOutput, FrameResampler};
pub use signal_processing::{DesignMethod, FirFilter};
pub use wav::save_wav_i16;
