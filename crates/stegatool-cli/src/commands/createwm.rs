use std::path::PathBuf;

use clap::Args;
use stegatool_core::{BatchReport, CodecOptions, ImageReport};

use crate::CliResult;

#[derive(Args, Debug)]
pub struct CreateWmArgs {
    /// Folder with the jpg and png images to watermark, used readonly
    #[arg(
        short = 'i',
        long = "inputdir",
        value_name = "input folder",
        required = true
    )]
    pub input_folder: PathBuf,

    /// Text file with one identity per line
    #[arg(
        short = 'p',
        long = "peoplelist",
        value_name = "identity list",
        required = true
    )]
    pub identity_list: PathBuf,

    /// Watermarked images will be stored in that folder, it must not exist yet
    #[arg(
        short = 'o',
        long = "outputdir",
        value_name = "output folder",
        required = true
    )]
    pub output_folder: PathBuf,
}

impl CreateWmArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let report = stegatool_core::commands::create_watermarks(
            &self.input_folder,
            &self.identity_list,
            &self.output_folder,
            options,
        )?;

        for line in report_lines(&report) {
            println!("{line}");
        }

        Ok(())
    }
}

/// one line per variant, and one line per image that could not be loaded
pub fn report_lines(report: &BatchReport) -> Vec<String> {
    let mut lines = Vec::new();
    for image in &report.images {
        match image {
            ImageReport::Skipped {
                file_name, reason, ..
            } => lines.push(format!("Skipped {file_name}: {reason}")),
            ImageReport::Processed(variants) => {
                lines.extend(variants.iter().map(|variant| match &variant.outcome {
                    Ok(()) => format!("Embedded message in {}", variant.file_name),
                    Err(e) => format!("Skipped {}: {e}", variant.file_name),
                }));
            }
        }
    }

    lines
}
