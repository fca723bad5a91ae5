//! # Stegatool Core API
//!
//! Hides an identity marker in the least significant bits of an image and finds it again.
//! The main entry points are
//! - [`api::create`] for watermarking a folder of images for a list of identities
//! - [`api::verify`] for scanning a folder of images for watermarks
//! - [`api::extract_raw`] for dumping the plain raw window of an image
//!
//! The building blocks [`embed`], [`extract`] and [`detect`] work on an in memory
//! [`PixelGrid`] and never touch the file system.
//!
//! # Usage Examples
//!
//! ## Watermark a single image in memory
//!
//! ```rust
//! use stegatool_core::{detect, embed, extract, Detection, PixelGrid};
//!
//! let carrier = PixelGrid::from_fn(32, 32, 3, |x, y, c| (x * 7 + y * 3 + c as u32) as u8);
//! let watermarked = embed(carrier, b"alice\0").expect("Failed to embed the identity");
//!
//! let window = extract(&watermarked, 1024).expect("Failed to extract the window");
//! assert_eq!(detect(&window), Detection::Watermark("alice".to_string()));
//! ```
//!
//! ## Watermark a folder of images
//!
//! ```rust
//! use std::fs;
//! use stegatool_core::media::Persist;
//! use stegatool_core::PixelGrid;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let sources = temp_dir.path().join("sources");
//! fs::create_dir(&sources).expect("Failed to create source folder");
//! PixelGrid::from_fn(64, 64, 3, |x, y, c| (x ^ y) as u8 + c)
//!     .save_as(&sources.join("cat.png"))
//!     .expect("Failed to save source image");
//! fs::write(temp_dir.path().join("people.txt"), "alice\nbob\n")
//!     .expect("Failed to write identity list");
//!
//! let report = stegatool_core::api::create::prepare()
//!     .from_source_folder(&sources)
//!     .with_identity_list(temp_dir.path().join("people.txt"))
//!     .into_output_folder(temp_dir.path().join("out"))
//!     .execute()
//!     .expect("Failed to create watermarks");
//! assert_eq!(report.written(), 2);
//!
//! let reports = stegatool_core::api::verify::prepare()
//!     .from_candidates_folder(temp_dir.path().join("out"))
//!     .execute()
//!     .expect("Failed to verify watermarks");
//! assert_eq!(reports[0].file_name, "00_cat.png");
//! ```

#![warn(clippy::redundant_else)]

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod api;
pub mod batch;
pub mod commands;
pub mod detection;
pub mod error;
pub mod identity;
pub mod lsb;
pub mod media;
pub mod result;
pub mod universal_decoder;
pub mod universal_encoder;

pub use crate::batch::{BatchReport, ImageReport, VariantReport};
pub use crate::detection::{detect, Detection};
pub use crate::error::StegaError;
pub use crate::identity::IdentityList;
pub use crate::media::image::{embed, extract, PixelGrid};
pub use crate::media::CodecOptions;
pub use crate::result::Result;
