use std::fs;
use std::io::Write;
use std::path::Path;
use std::slice::{ChunksExact, ChunksExactMut};

use image::codecs::png::PngEncoder;
use image::io::Reader as ImageReader;
use image::{ColorType, DynamicImage, GenericImageView, ImageEncoder, ImageError};
use log::{debug, error};

use crate::error::StegaError;
use crate::media::Persist;
use crate::result::Result;

/// An owned image buffer of `width x height` pixels with a uniform number of channels.
///
/// Pixels are stored row by row, top to bottom, each row left to right, every pixel as
/// `channels` consecutive bytes. All access is bounds checked, accessors return `None`
/// for coordinates or channels outside of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl PixelGrid {
    /// a grid with all channels set to zero, `channels` is at least 1
    pub fn new(width: u32, height: u32, channels: u8) -> Self {
        Self::from_fn(width, height, channels, |_, _, _| 0)
    }

    /// a grid where every channel value is produced by `f(x, y, channel)`
    pub fn from_fn<F>(width: u32, height: u32, channels: u8, mut f: F) -> Self
    where
        F: FnMut(u32, u32, u8) -> u8,
    {
        let channels = channels.max(1);
        let mut data = Vec::with_capacity(width as usize * height as usize * channels as usize);
        for y in 0..height {
            for x in 0..width {
                for c in 0..channels {
                    data.push(f(x, y, c));
                }
            }
        }

        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// wraps raw row major pixel data, `None` if the length does not match the dimensions
    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Option<Self> {
        let expected = width as usize * height as usize * channels as usize;
        if channels == 0 || data.len() != expected {
            return None;
        }

        Some(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Keeps the channel layout of the decoded image: gray, gray with alpha, RGB or RGBA.
    /// Images with more than 8 bits per channel are reduced to 8 bits.
    pub fn from_image(img: DynamicImage) -> Self {
        let (width, height) = img.dimensions();
        let (channels, data) = match img.color().channel_count() {
            1 => (1, img.into_luma8().into_raw()),
            2 => (2, img.into_luma_alpha8().into_raw()),
            3 => (3, img.into_rgb8().into_raw()),
            _ => (4, img.into_rgba8().into_raw()),
        };

        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// Loads an image file, the format is guessed from the file content and not from the
    /// extension, so a PNG stored under a `.jpg` name loads fine.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let load_error = |source: ImageError| StegaError::ImageLoadError {
            path: path.to_path_buf(),
            source,
        };

        let img = ImageReader::open(path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|e| load_error(ImageError::IoError(e)))?
            .decode()
            .map_err(load_error)?;
        let (width, height) = img.dimensions();
        debug!(
            "Loaded {path:?} with {width}x{height} pixels and color type {:?}",
            img.color()
        );

        Ok(Self::from_image(img))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        let start = self.offset(x, y, 0)?;
        self.data.get(start..start + self.channels as usize)
    }

    pub fn channel(&self, x: u32, y: u32, channel: u8) -> Option<u8> {
        self.offset(x, y, channel)
            .and_then(|i| self.data.get(i).copied())
    }

    pub fn channel_mut(&mut self, x: u32, y: u32, channel: u8) -> Option<&mut u8> {
        let i = self.offset(x, y, channel)?;
        self.data.get_mut(i)
    }

    /// all pixels in row major order
    pub fn pixels(&self) -> ChunksExact<'_, u8> {
        self.data.chunks_exact(self.channels as usize)
    }

    /// all pixels in row major order, mutable
    pub fn pixels_mut(&mut self) -> ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(self.channels as usize)
    }

    fn offset(&self, x: u32, y: u32, channel: u8) -> Option<usize> {
        if x >= self.width || y >= self.height || channel >= self.channels {
            return None;
        }
        let pixel = y as usize * self.width as usize + x as usize;

        Some(pixel * self.channels as usize + channel as usize)
    }

    fn color_type(&self) -> ColorType {
        match self.channels {
            1 => ColorType::L8,
            2 => ColorType::La8,
            3 => ColorType::Rgb8,
            _ => ColorType::Rgba8,
        }
    }

    /// Encodes the grid as PNG into `writer`, whatever format the source image had.
    /// A lossy format would destroy the hidden bits.
    pub fn save_to_writer<W: Write>(&self, writer: W) -> std::result::Result<(), ImageError> {
        PngEncoder::new(writer).write_image(
            &self.data,
            self.width,
            self.height,
            self.color_type(),
        )
    }
}

impl Persist for PixelGrid {
    /// The PNG is encoded in memory first, an encoding failure leaves no file behind.
    fn save_as(&self, file: &Path) -> Result<()> {
        let write_error = |source: ImageError| StegaError::WriteError {
            path: file.to_path_buf(),
            source,
        };
        let mut encoded = Vec::new();
        self.save_to_writer(&mut encoded).map_err(|e| {
            error!("Error encoding image {file:?}: {e}");
            write_error(e)
        })?;

        fs::write(file, encoded).map_err(|e| {
            error!("Error saving image {file:?}: {e}");
            write_error(ImageError::IoError(e))
        })
    }
}
