//! Headerless 16-bit little-endian PCM streams.

use std::io::{self, ErrorKind, Read, Write};

/// Reads fixed-size frames of raw 16-bit little-endian PCM.
///
/// A trailing partial frame is discarded. A zero frame length yields no frames.
pub struct RawPcmReader<R> {
    inner: R,
    frame_len: usize,
    bytes: Vec<u8>,
}

impl<R: Read> RawPcmReader<R> {
    pub fn new(inner: R, frame_len: usize) -> Self {
        Self {
            inner,
            frame_len,
            bytes: vec![0; frame_len * 2],
        }
    }

    /// Read the next whole frame, or `None` at end of stream
    pub fn next_frame(&mut self) -> io::Result<Option<Vec<i16>>> {
        if self.frame_len == 0 {
            return Ok(None);
        }
        match self.inner.read_exact(&mut self.bytes) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(e),
        }
        Ok(Some(
            self.bytes
                .chunks_exact(2)
                .map(|b| i16::from_le_bytes([b[0], b[1]]))
                .collect(),
        ))
    }

    pub fn frame_len(&self) -> usize {
        self.frame_len
    }
}

impl<R: Read> Iterator for RawPcmReader<R> {
    type Item = io::Result<Vec<i16>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_frame().transpose()
    }
}

/// Writes raw 16-bit little-endian PCM
pub struct RawPcmWriter<W: Write> {
    inner: W,
    samples_written: usize,
}

impl<W: Write> RawPcmWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            samples_written: 0,
        }
    }

    pub fn write_samples(&mut self, samples: &[i16]) -> io::Result<()> {
        let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
        self.inner.write_all(&bytes)?;
        self.samples_written += samples.len();
        Ok(())
    }

    pub fn samples_written(&self) -> usize {
        self.samples_written
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
