pub mod codec_options;
pub mod image;

use std::path::Path;

pub use codec_options::CodecOptions;

pub trait Persist {
    fn save_as(&self, _: &Path) -> crate::Result<()>;
}
