//! Precomputed least-squares lowpass coefficient sets.
//!
//! No least-squares solver runs at runtime: designs are looked up by exact
//! (sampling rate, passband, length). Add a row to [`LEAST_SQUARES_DESIGNS`]
//! to support another band.

/// One canned least-squares lowpass design
#[derive(Debug)]
pub struct LeastSquaresDesign {
    /// Sampling rate in Hz
    pub fs_hz: u32,
    /// Passband edge in Hz
    pub passband_hz: u32,
    /// Impulse response, symmetric (linear phase)
    pub taps: &'static [f64],
}

impl LeastSquaresDesign {
    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }
}

const LOWPASS_57_4000_48000: [f64; 57] = [
    0.0002317719, 0.0002933296, 0.0000653322, -0.0005152687,
    -0.0011996204, -0.0014443471, -0.0007086233, 0.0010787318,
    0.0031880267, 0.0042290905, 0.0028736999, -0.0011307916,
    -0.0062838011, -0.0096164325, -0.0081152050, -0.0007340415,
    0.0101430054, 0.0189368961, 0.0192239944, 0.0074220577,
    -0.0139930822, -0.0357312183, -0.0444435302, -0.0283134534,
    0.0168563899, 0.0840521946, 0.1560909305, 0.2113680921,
    0.2320833333, 0.2113680921, 0.1560909305, 0.0840521946,
    0.0168563899, -0.0283134534, -0.0444435302, -0.0357312183,
    -0.0139930822, 0.0074220577, 0.0192239944, 0.0189368961,
    0.0101430054, -0.0007340415, -0.0081152050, -0.0096164325,
    -0.0062838011, -0.0011307916, 0.0028736999, 0.0042290905,
    0.0031880267, 0.0010787318, -0.0007086233, -0.0014443471,
    -0.0011996204, -0.0005152687, 0.0000653322, 0.0002933296,
    0.0002317719,
];

const LOWPASS_75_8000_48000: [f64; 75] = [
    0.0001314414, -0.0000946699, -0.0003771918, -0.0001777816,
    0.0005110697, 0.0007632490, -0.0001520994, -0.0013277041,
    -0.0009119127, 0.0011928743, 0.0023294453, 0.0002466303,
    -0.0030619300, -0.0028634022, 0.0018347777, 0.0053608132,
    0.0018948703, -0.0055752556, -0.0069812104, 0.0016853716,
    0.0104324659, 0.0061577390, -0.0085634654, -0.0147862994,
    -0.0007589469, 0.0185192198, 0.0158431490, -0.0114528143,
    -0.0302037540, -0.0093372058, 0.0335644092, 0.0413488592,
    -0.0135605853, -0.0765310018, -0.0493965138, 0.1039680895,
    0.2974386077, 0.3856670000, 0.2974386077, 0.1039680895,
    -0.0493965138, -0.0765310018, -0.0135605853, 0.0413488592,
    0.0335644092, -0.0093372058, -0.0302037540, -0.0114528143,
    0.0158431490, 0.0185192198, -0.0007589469, -0.0147862994,
    -0.0085634654, 0.0061577390, 0.0104324659, 0.0016853716,
    -0.0069812104, -0.0055752556, 0.0018948703, 0.0053608132,
    0.0018347777, -0.0028634022, -0.0030619300, 0.0002466303,
    0.0023294453, 0.0011928743, -0.0009119127, -0.0013277041,
    -0.0001520994, 0.0007632490, 0.0005110697, -0.0001777816,
    -0.0003771918, -0.0000946699, 0.0001314414,
];

/// Every least-squares design the toolkit can produce
pub static LEAST_SQUARES_DESIGNS: &[LeastSquaresDesign] = &[
    LeastSquaresDesign {
        fs_hz: 48000,
        passband_hz: 4000,
        taps: &LOWPASS_57_4000_48000,
    },
    LeastSquaresDesign {
        fs_hz: 48000,
        passband_hz: 8000,
        taps: &LOWPASS_75_8000_48000,
    },
];

/// Find the canned design for a band, whatever its length
pub fn find_by_band(fs_hz: u32, passband_hz: u32) -> Option<&'static LeastSquaresDesign> {
    LEAST_SQUARES_DESIGNS
        .iter()
        .find(|d| d.fs_hz == fs_hz && d.passband_hz == passband_hz)
}

/// Find the canned design matching band and length exactly
pub fn find(n: usize, fs_hz: u32, passband_hz: u32) -> Option<&'static LeastSquaresDesign> {
    find_by_band(fs_hz, passband_hz).filter(|d| d.len() == n)
}
