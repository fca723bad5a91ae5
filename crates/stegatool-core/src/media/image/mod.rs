pub mod capacity;
mod iterators;
pub mod lsb_codec;
mod pixel_grid;

pub use iterators::EMBEDDABLE_CHANNELS;
pub use lsb_codec::{embed, extract, LsbCodec};
pub use pixel_grid::PixelGrid;
