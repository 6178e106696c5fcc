use std::path::Path;

use hound::{WavSpec, WavWriter};

/// Write mono 16-bit PCM samples to a WAV file
pub fn save_wav_i16<P: AsRef<Path>>(
    path: P,
    samples: &[i16],
    sample_rate: u32,
) -> Result<(), hound::Error> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;

    for &sample in samples {
        writer.write_sample(sample)?;
    }

    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_wav_i16() {
        let path = std::env::temp_dir().join(format!("handy_dsp_wav_{}.wav", std::process::id()));
        save_wav_i16(&path, &[0, 100, -100, i16::MAX], 8000).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().sample_rate, 8000);
        assert_eq!(reader.spec().channels, 1);
        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, vec![0, 100, -100, i16::MAX]);

        std::fs::remove_file(&path).ok();
    }
}
