pub mod convolution;
pub mod filter;
pub mod fir_design;
pub mod fir_tables;
pub mod kaiser;
pub mod math;
pub mod resample;
pub mod sample;
pub mod window;

pub use convolution::{
    Convolution, ConvolutionType, conv, conv_full, conv_full_int, conv_int,
};
pub use filter::{FrameFilter, fir_filter, fir_filter_into};
pub use fir_design::{
    DesignMethod, FirFilter, fir_design_lowpass, fir_design_lowpass_kaiser_opt, fir_shape,
};
pub use kaiser::{KaiserParams, design_kaiser_n_beta, kaiser_beta};
pub use math::{bessel_i0, sinc};
pub use resample::{downsample, downsample_into, upsample, upsample_into};
pub use sample::{Sample, convert_samples};
pub use window::{Window, hamming_window, hamming_window_into, kaiser_window, kaiser_window_into};
