use log::{debug, warn};

use crate::identity::{identity_message, IdentityList};
use crate::media::image::{embed, PixelGrid};
use crate::media::CodecOptions;
use crate::result::Result;
use crate::StegaError;

/// Name of the variant of image `image_index` issued to identity `identity_index`.
///
/// Both indices are written as plain decimal numbers without any separator, followed by
/// an underscore and the original file name including its extension.
pub fn variant_file_name(identity_index: usize, image_index: usize, original: &str) -> String {
    format!("{identity_index}{image_index}_{original}")
}

/// The outcome of one image and identity pair
#[derive(Debug)]
pub struct VariantReport {
    pub file_name: String,
    pub identity_index: usize,
    pub image_index: usize,
    pub outcome: Result<()>,
}

impl VariantReport {
    pub fn is_written(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// The outcome of one source image of a batch
#[derive(Debug)]
pub enum ImageReport {
    /// the source image could not be loaded, none of its variants exist
    Skipped {
        file_name: String,
        image_index: usize,
        reason: StegaError,
    },
    Processed(Vec<VariantReport>),
}

/// All outcomes of a batch run, in processing order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub images: Vec<ImageReport>,
}

impl BatchReport {
    pub fn variants(&self) -> impl Iterator<Item = &VariantReport> {
        self.images
            .iter()
            .filter_map(|image| match image {
                ImageReport::Processed(variants) => Some(variants),
                ImageReport::Skipped { .. } => None,
            })
            .flatten()
    }

    pub fn written(&self) -> usize {
        self.variants().filter(|v| v.is_written()).count()
    }

    pub fn failed(&self) -> usize {
        self.variants().filter(|v| !v.is_written()).count()
    }

    pub fn skipped_images(&self) -> usize {
        self.images
            .iter()
            .filter(|image| matches!(image, ImageReport::Skipped { .. }))
            .count()
    }
}

/// Hides every identity of `identities` in its own copy of `source`.
///
/// Each variant starts from the untouched source pixels. `persist` receives the variant
/// name and the watermarked grid. A failing pair is reported and the remaining identities
/// are still processed.
pub fn watermark_image<P>(
    source: &PixelGrid,
    image_index: usize,
    file_name: &str,
    identities: &IdentityList,
    options: &CodecOptions,
    mut persist: P,
) -> Vec<VariantReport>
where
    P: FnMut(&str, &PixelGrid) -> Result<()>,
{
    identities
        .iter()
        .enumerate()
        .map(|(identity_index, identity)| {
            let variant_name = variant_file_name(identity_index, image_index, file_name);
            let message = identity_message(identity, options.sentinel);

            let outcome = embed(source.clone(), &message)
                .and_then(|variant| persist(&variant_name, &variant));
            match &outcome {
                Ok(()) => debug!("Embedded identity #{identity_index} in {variant_name}"),
                Err(e) => warn!("Skipping {variant_name}: {e}"),
            }

            VariantReport {
                file_name: variant_name,
                identity_index,
                image_index,
                outcome,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_noisy_rgb_image;

    #[test]
    fn should_concatenate_indices_without_separator() {
        assert_eq!(variant_file_name(0, 0, "cat.png"), "00_cat.png");
        assert_eq!(variant_file_name(1, 0, "cat.png"), "10_cat.png");
        assert_eq!(variant_file_name(12, 3, "dog.jpg"), "123_dog.jpg");
    }

    #[test]
    fn should_produce_one_variant_per_identity() {
        let source = prepare_noisy_rgb_image(16, 16);
        let identities = IdentityList::from_iter(["alice", "bob"]);
        let mut written = Vec::new();

        let reports = watermark_image(
            &source,
            0,
            "cat.png",
            &identities,
            &CodecOptions::default(),
            |name, variant| {
                written.push((name.to_string(), variant.clone()));
                Ok(())
            },
        );

        let names: Vec<&str> = written.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["00_cat.png", "10_cat.png"]);
        assert!(reports.iter().all(VariantReport::is_written));
        assert_eq!(
            reports.iter().map(|r| r.identity_index).collect::<Vec<_>>(),
            vec![0, 1]
        );
    }

    #[test]
    fn should_start_every_variant_from_the_source() {
        let source = prepare_noisy_rgb_image(16, 16);
        let identities = IdentityList::from_iter(["alice", "bob"]);
        let mut variants = Vec::new();

        watermark_image(
            &source,
            0,
            "cat.png",
            &identities,
            &CodecOptions::default(),
            |_, variant| {
                variants.push(variant.clone());
                Ok(())
            },
        );

        let expected_bob = embed(source.clone(), b"bob\0").expect("Cannot embed");
        assert_eq!(variants[1], expected_bob);
    }

    #[test]
    fn should_skip_pairs_that_do_not_fit_and_continue() {
        // 4x4 pixels hold 48 bits, i.e. 5 bytes plus sentinel
        let source = prepare_noisy_rgb_image(4, 4);
        let identities = IdentityList::from_iter(["a-much-too-long-identity", "bob"]);
        let mut written = Vec::new();

        let reports = watermark_image(
            &source,
            7,
            "tiny.png",
            &identities,
            &CodecOptions::default(),
            |name, _| {
                written.push(name.to_string());
                Ok(())
            },
        );

        assert_eq!(written, vec!["17_tiny.png"]);
        assert!(matches!(
            reports[0].outcome,
            Err(StegaError::CapacityExceeded { .. })
        ));
        assert!(reports[1].is_written());
    }

    #[test]
    fn should_report_persist_failures_per_pair() {
        let source = prepare_noisy_rgb_image(16, 16);
        let identities = IdentityList::from_iter(["alice", "bob"]);

        let reports = watermark_image(
            &source,
            0,
            "cat.png",
            &identities,
            &CodecOptions::default(),
            |name, _| {
                if name.starts_with('0') {
                    Err(StegaError::TargetNotSet)
                } else {
                    Ok(())
                }
            },
        );

        assert!(!reports[0].is_written());
        assert!(reports[1].is_written());
    }

    #[test]
    fn should_count_batch_outcomes() {
        let report = BatchReport {
            images: vec![
                ImageReport::Skipped {
                    file_name: "broken.png".to_string(),
                    image_index: 0,
                    reason: StegaError::SourceNotSet,
                },
                ImageReport::Processed(vec![
                    VariantReport {
                        file_name: "01_cat.png".to_string(),
                        identity_index: 0,
                        image_index: 1,
                        outcome: Ok(()),
                    },
                    VariantReport {
                        file_name: "11_cat.png".to_string(),
                        identity_index: 1,
                        image_index: 1,
                        outcome: Err(StegaError::TargetNotSet),
                    },
                ]),
            ],
        };

        assert_eq!(report.written(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.skipped_images(), 1);
    }
}
