use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use handy_dsp::config::{ResampleConfig, SampleRate};
use handy_dsp::pcm::{RawPcmReader, RawPcmWriter};
use handy_dsp::signal_processing::{DesignMethod, FirFilter, KaiserParams, Window};
use handy_dsp::{FrameResampler, KaiserSpec, save_wav_i16};

#[derive(Parser, Debug)]
#[command(name = "handy-dsp")]
#[command(about = "Resample raw PCM and design FIR lowpass filters", long_about = None)]
struct Args {
    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upsample to 48 kHz, lowpass filter and downsample a raw 16-bit PCM file,
    /// writing every stage to its own file
    Upsample {
        /// Input file, raw 16-bit little-endian mono PCM
        input: PathBuf,

        /// Input sampling rate (e.g. "8000", "16khz")
        rate: SampleRate,

        /// Frame duration in milliseconds
        ptime_ms: u32,

        /// Directory for the stage outputs
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// TOML resampling configuration (rate and ptime arguments win)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write WAV files instead of raw PCM
        #[arg(long)]
        wav: bool,
    },

    /// Design a lowpass filter and print it as JSON
    Design {
        /// Sampling rate in Hz
        #[arg(long, default_value_t = 48000)]
        rate: u32,

        /// Passband edge in Hz
        #[arg(long)]
        passband: u32,

        /// Number of taps (ignored by kaiser-opt)
        #[arg(long, default_value_t = 71)]
        taps: usize,

        /// Design method
        #[arg(short, long, value_enum, default_value = "spectrum")]
        method: Method,

        /// Window applied after design (ignored by kaiser-opt)
        #[arg(short, long, value_enum, default_value = "none")]
        window: WindowKind,

        /// Kaiser window beta
        #[arg(long, default_value_t = 5.65326)]
        beta: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Sampled ideal lowpass
    Spectrum,
    /// Precomputed least-squares table
    LeastSquares,
    /// Least-squares table shaped by an optimized Kaiser window
    KaiserOpt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WindowKind {
    None,
    Hamming,
    Kaiser,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match args.command {
        Command::Upsample {
            input,
            rate,
            ptime_ms,
            output_dir,
            config,
            wav,
        } => {
            let mut resample_config = match config {
                Some(path) => ResampleConfig::load(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => ResampleConfig::default(),
            };
            resample_config.input_rate = rate;
            resample_config.ptime_ms = ptime_ms;
            run_upsample(&input, &resample_config, &output_dir, wav)
        }
        Command::Design {
            rate,
            passband,
            taps,
            method,
            window,
            beta,
        } => run_design(rate, passband, taps, method, window, beta),
    }
}

/// Destination for one pipeline stage
enum StageSink {
    Raw(RawPcmWriter<BufWriter<File>>),
    Wav {
        path: PathBuf,
        sample_rate: u32,
        samples: Vec<i16>,
    },
}

impl StageSink {
    fn create(dir: &Path, stem: &str, sample_rate: u32, wav: bool) -> Result<Self> {
        if wav {
            return Ok(StageSink::Wav {
                path: dir.join(format!("{}.wav", stem)),
                sample_rate,
                samples: Vec::new(),
            });
        }
        let path = dir.join(format!("{}.raw", stem));
        let file = File::create(&path)
            .with_context(|| format!("Cannot open {} for writing", path.display()))?;
        Ok(StageSink::Raw(RawPcmWriter::new(BufWriter::new(file))))
    }

    fn write(&mut self, samples: &[i16]) -> Result<()> {
        match self {
            StageSink::Raw(writer) => writer.write_samples(samples).context("Failed to write"),
            StageSink::Wav { samples: buf, .. } => {
                buf.extend_from_slice(samples);
                Ok(())
            }
        }
    }

    fn finish(self) -> Result<()> {
        match self {
            StageSink::Raw(mut writer) => writer.flush().context("Failed to flush"),
            StageSink::Wav {
                path,
                sample_rate,
                samples,
            } => save_wav_i16(&path, &samples, sample_rate)
                .with_context(|| format!("Failed to write {}", path.display())),
        }
    }
}

fn run_upsample(input: &Path, config: &ResampleConfig, output_dir: &Path, wav: bool) -> Result<()> {
    let resampler = FrameResampler::new(config).context("Failed to create filter")?;

    let file = File::open(input).with_context(|| format!("Cannot open {}", input.display()))?;
    let reader = RawPcmReader::new(BufReader::new(file), resampler.frame_len());

    let input_rate = config.input_rate.as_hz();
    let target_rate = config.target_rate_hz;
    let prefix = format!("{}ms_x", config.ptime_ms);
    let mut x = StageSink::create(output_dir, &prefix, input_rate, wav)?;
    let mut x_u = StageSink::create(output_dir, &format!("{}_u", prefix), target_rate, wav)?;
    let mut x_u_f = StageSink::create(output_dir, &format!("{}_u_f", prefix), target_rate, wav)?;
    let mut x_u_f_d =
        StageSink::create(output_dir, &format!("{}_u_f_d", prefix), input_rate, wav)?;

    println!(
        "sampling rate={}, frame ms={}, frame samples={}, upsampling factor={}",
        input_rate,
        config.ptime_ms,
        resampler.frame_len(),
        resampler.factor()
    );

    let mut frames = 0usize;
    for frame in reader {
        let frame = frame.context("Failed to read input")?;
        let out = resampler.process_frame(&frame).context("Failed to process frame")?;

        x.write(&frame)?;
        x_u.write(&out.upsampled)?;
        x_u_f.write(&out.filtered)?;
        x_u_f_d.write(&out.restored)?;
        frames += 1;
    }

    for sink in [x, x_u, x_u_f, x_u_f_d] {
        sink.finish()?;
    }

    if frames == 0 {
        log::warn!(
            "Input shorter than one frame ({} samples); nothing processed",
            resampler.frame_len()
        );
    }

    println!(
        "Done. (frames: {}, bytes total: {})",
        frames,
        frames * resampler.frame_len() * std::mem::size_of::<i16>()
    );
    Ok(())
}

/// Designed filter plus the window that shaped it, printed as JSON
#[derive(Debug, Serialize)]
struct DesignReport {
    #[serde(flatten)]
    filter: FirFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    window: Option<Window>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kaiser: Option<KaiserParams>,
}

fn build_design(
    rate: u32,
    passband: u32,
    taps: usize,
    method: Method,
    window: WindowKind,
    beta: f64,
) -> Result<DesignReport> {
    if method == Method::KaiserOpt {
        let params = KaiserSpec::default().design(passband, rate)?;
        return Ok(DesignReport {
            filter: FirFilter::lowpass_kaiser_opt(rate, passband)?,
            window: Some(Window::Kaiser { beta: params.beta }),
            kaiser: Some(params),
        });
    }

    let design_method = if method == Method::Spectrum {
        DesignMethod::SpectrumSampling
    } else {
        DesignMethod::LeastSquares
    };
    let mut filter = FirFilter::lowpass(taps, rate, passband, design_method)?;
    let shape = match window {
        WindowKind::None => None,
        WindowKind::Hamming => Some(Window::Hamming),
        WindowKind::Kaiser => Some(Window::Kaiser { beta }),
    };
    if let Some(shape) = shape {
        filter.shape(&shape.generate(filter.num_taps()))?;
    }
    Ok(DesignReport {
        filter,
        window: shape,
        kaiser: None,
    })
}

fn run_design(
    rate: u32,
    passband: u32,
    taps: usize,
    method: Method,
    window: WindowKind,
    beta: f64,
) -> Result<()> {
    let report = build_design(rate, passband, taps, method, window, beta)?;
    log::info!(
        "Designed {} taps, group delay {} samples",
        report.filter.num_taps(),
        report.filter.group_delay_samples()
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
