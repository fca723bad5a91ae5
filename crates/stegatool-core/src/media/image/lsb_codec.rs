use std::io::{Read, Write};

use log::{debug, error};

use super::capacity::{self, ensure_embeddable_channels};
use super::iterators::{ColorIter, ColorIterMut, EMBEDDABLE_CHANNELS};
use super::PixelGrid;
use crate::error::StegaError;
use crate::lsb::LsbAlgorithm;
use crate::result::Result;
use crate::universal_decoder::Decoder;
use crate::universal_encoder::Encoder;

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Image Decoder that implements Read
    pub fn decoder<'i>(input: &'i PixelGrid) -> Box<dyn Read + 'i> {
        Box::new(Decoder::new(
            ColorIter::new(input, EMBEDDABLE_CHANNELS),
            LsbAlgorithm,
        ))
    }

    /// builds a LSB Image Encoder that implements Write
    pub fn encoder<'i>(carrier: &'i mut PixelGrid) -> Box<dyn Write + 'i> {
        Box::new(Encoder::new(
            ColorIterMut::new(carrier, EMBEDDABLE_CHANNELS),
            LsbAlgorithm,
        ))
    }
}

/// Hides `message` in the least significant bits of the first 3 channels of each pixel.
///
/// The carrier is modified in place and handed back. Only as many channels as the message
/// has bits are touched, everything after the message keeps its original bits. The caller
/// takes care of appending a terminator to `message`, nothing else is written.
pub fn embed(mut carrier: PixelGrid, message: &[u8]) -> Result<PixelGrid> {
    capacity::validate(message, &carrier)?;

    let written = LsbCodec::encoder(&mut carrier).write_all(message);
    written.map_err(|e| {
        error!("Error encoding image: {e}, kind {}", e.kind());
        match e.kind() {
            std::io::ErrorKind::WriteZero => StegaError::CapacityExceeded {
                needed: message.len() as u64 * 8,
                capacity: capacity::capacity_bits(&carrier),
            },
            _ => StegaError::IoError(e),
        }
    })?;
    debug!("Embedded {} bytes", message.len());

    Ok(carrier)
}

/// Reads back a window of `window_size` bytes from the carrier.
///
/// The hidden message length is unknown, so the full window is always returned. A carrier
/// holding fewer than `window_size * 8` bits leaves the remaining bytes zero.
pub fn extract(carrier: &PixelGrid, window_size: usize) -> Result<Vec<u8>> {
    ensure_embeddable_channels(carrier)?;

    let mut window = vec![0; window_size];
    let n = LsbCodec::decoder(carrier).read(&mut window)?;
    debug!("Extracted {n} of {window_size} bytes from the carrier");

    Ok(window)
}
