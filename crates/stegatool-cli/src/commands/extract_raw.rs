use std::path::PathBuf;

use clap::Args;
use stegatool_core::CodecOptions;

use crate::CliResult;

#[derive(Args, Debug)]
pub struct ExtractRawArgs {
    /// Source image that contains the watermark
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub image: PathBuf,

    /// Raw window will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl ExtractRawArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        stegatool_core::commands::extract_raw(&self.image, &self.output_file, options)
    }
}
