use std::path::PathBuf;

use clap::Args;
use stegatool_core::api::verify::VerifyReport;
use stegatool_core::{CodecOptions, Detection};

use crate::CliResult;

#[derive(Args, Debug)]
pub struct VerifyWmArgs {
    /// Folder with the jpg and png images to scan
    #[arg(
        short = 'i',
        long = "inputdir",
        value_name = "input folder",
        required = true
    )]
    pub input_folder: PathBuf,

    /// Identity list used for the watermarks, detected messages are matched against it
    #[arg(short = 'p', long = "peoplelist", value_name = "identity list")]
    pub identity_list: Option<PathBuf>,
}

impl VerifyWmArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let reports = stegatool_core::commands::verify_watermarks(
            &self.input_folder,
            self.identity_list.as_deref(),
            options,
        )?;

        for report in &reports {
            println!("{}", report_line(report));
        }

        Ok(())
    }
}

pub fn report_line(report: &VerifyReport) -> String {
    let file_name = &report.file_name;
    match (&report.outcome, report.identity_index) {
        (Ok(Detection::Watermark(msg)), Some(i)) => {
            format!("{file_name} -> {msg} (identity #{i})")
        }
        (Ok(Detection::Watermark(msg)), None) => format!("{file_name} -> {msg}"),
        (Ok(Detection::NoWatermark), _) => format!("{file_name} -> No Watermark Detected!"),
        (Err(e), _) => format!("{file_name} -> {e}"),
    }
}
