use log::debug;

use super::iterators::EMBEDDABLE_CHANNELS;
use super::PixelGrid;
use crate::error::StegaError;
use crate::result::Result;

/// Number of bits an image can carry, always assuming 3 usable channels per pixel.
pub fn capacity_bits(grid: &PixelGrid) -> u64 {
    grid.width() as u64 * grid.height() as u64 * EMBEDDABLE_CHANNELS as u64
}

/// Checks that `message` can be hidden in `grid` before any pixel is touched.
pub fn validate(message: &[u8], grid: &PixelGrid) -> Result<()> {
    ensure_embeddable_channels(grid)?;

    let needed = message.len() as u64 * 8;
    let capacity = capacity_bits(grid);
    debug!("Message needs {needed} bits of an image capacity of {capacity} bits");
    if needed > capacity {
        return Err(StegaError::CapacityExceeded { needed, capacity });
    }

    Ok(())
}

pub(crate) fn ensure_embeddable_channels(grid: &PixelGrid) -> Result<()> {
    if grid.channels() < EMBEDDABLE_CHANNELS {
        return Err(StegaError::InsufficientChannels(grid.channels()));
    }

    Ok(())
}
