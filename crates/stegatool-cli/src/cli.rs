use clap::{Parser, Subcommand};
use stegatool_core::media::codec_options::DEFAULT_WINDOW_SIZE;

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Experimental: number of bytes read back from an image when verifying
    #[arg(long = "x-window-size", global = true, default_value_t = DEFAULT_WINDOW_SIZE)]
    pub window_size: usize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watermarks every image of a folder once per identity
    Createwm(createwm::CreateWmArgs),
    /// Reports the watermark found in every image of a folder
    Verifywm(verifywm::VerifyWmArgs),
    /// Dumps the raw extraction window of one image
    ExtractRaw(extract_raw::ExtractRawArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use stegatool_core::api::verify::VerifyReport;
    use stegatool_core::{BatchReport, Detection, ImageReport, StegaError, VariantReport};

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn should_parse_createwm() {
        let args = CliArgs::try_parse_from([
            "stegatool", "createwm", "-i", "imgs", "-p", "people.txt", "-o", "out",
        ])
        .expect("createwm arguments are valid");

        assert_eq!(args.window_size, DEFAULT_WINDOW_SIZE);
        match args.command {
            Commands::Createwm(cmd) => {
                assert_eq!(cmd.input_folder.to_str(), Some("imgs"));
                assert_eq!(cmd.identity_list.to_str(), Some("people.txt"));
                assert_eq!(cmd.output_folder.to_str(), Some("out"));
            }
            other => panic!("expected createwm, got {other:?}"),
        }
    }

    #[test]
    fn should_parse_verifywm_with_a_window_size() {
        let args = CliArgs::try_parse_from([
            "stegatool",
            "verifywm",
            "--inputdir",
            "out",
            "--x-window-size",
            "64",
        ])
        .expect("verifywm arguments are valid");

        assert_eq!(args.window_size, 64);
        assert!(matches!(
            args.command,
            Commands::Verifywm(verifywm::VerifyWmArgs {
                identity_list: None,
                ..
            })
        ));
    }

    #[test]
    fn should_require_all_createwm_folders() {
        assert!(CliArgs::try_parse_from(["stegatool", "createwm", "-i", "imgs"]).is_err());
    }

    fn variant(file_name: &str, outcome: Result<(), StegaError>) -> VariantReport {
        VariantReport {
            file_name: file_name.to_string(),
            identity_index: 0,
            image_index: 0,
            outcome,
        }
    }

    #[test]
    fn should_print_one_line_per_variant_and_skipped_image() {
        let report = BatchReport {
            images: vec![
                ImageReport::Processed(vec![
                    variant("00_cat.png", Ok(())),
                    variant(
                        "10_cat.png",
                        Err(StegaError::CapacityExceeded {
                            needed: 16,
                            capacity: 15,
                        }),
                    ),
                ]),
                ImageReport::Skipped {
                    file_name: "gray.png".to_string(),
                    image_index: 1,
                    reason: StegaError::InsufficientChannels(1),
                },
            ],
        };

        assert_eq!(
            createwm::report_lines(&report),
            vec![
                "Embedded message in 00_cat.png",
                "Skipped 10_cat.png: Capacity Error: the message needs 16 bits, but the image can only hold 15 bits",
                "Skipped gray.png: Image must have at least 3 channels, but it has 1",
            ]
        );
    }

    #[test]
    fn should_print_the_detected_watermark_per_file() {
        let report = |outcome, identity_index| VerifyReport {
            file_name: "10_cat.png".to_string(),
            outcome,
            identity_index,
        };

        assert_eq!(
            verifywm::report_line(&report(Ok(Detection::Watermark("bob".to_string())), Some(1))),
            "10_cat.png -> bob (identity #1)"
        );
        assert_eq!(
            verifywm::report_line(&report(Ok(Detection::Watermark("bob".to_string())), None)),
            "10_cat.png -> bob"
        );
        assert_eq!(
            verifywm::report_line(&report(Ok(Detection::NoWatermark), None)),
            "10_cat.png -> No Watermark Detected!"
        );
        assert_eq!(
            verifywm::report_line(&report(Err(StegaError::InsufficientChannels(2)), None)),
            "10_cat.png -> Image must have at least 3 channels, but it has 2"
        );
    }
}
