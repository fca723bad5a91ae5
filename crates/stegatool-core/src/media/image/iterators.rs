use std::slice::{ChunksExact, ChunksExactMut, Iter, IterMut};

use super::PixelGrid;

/// Number of color channels per pixel that carry hidden bits
pub const EMBEDDABLE_CHANNELS: u8 = 3;

/// Read only access to the first `take` channels of every pixel, row major.
///
/// Pixels with fewer channels contribute all of theirs.
pub(crate) struct ColorIter<'a> {
    pixel: ChunksExact<'a, u8>,
    colors: Iter<'a, u8>,
    take: usize,
}

impl<'a> ColorIter<'a> {
    pub fn new(grid: &'a PixelGrid, take: u8) -> Self {
        Self {
            pixel: grid.pixels(),
            colors: Default::default(),
            take: take as usize,
        }
    }
}

impl<'a> Iterator for ColorIter<'a> {
    type Item = &'a u8;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(c) = self.colors.next() {
                return Some(c);
            }
            let pixel = self.pixel.next()?;
            let take = self.take.min(pixel.len());
            self.colors = pixel[..take].iter();
        }
    }
}

/// Mutable access to the first `take` channels of every pixel, row major.
pub(crate) struct ColorIterMut<'a> {
    pixel: ChunksExactMut<'a, u8>,
    colors: IterMut<'a, u8>,
    take: usize,
}

impl<'a> ColorIterMut<'a> {
    pub fn new(grid: &'a mut PixelGrid, take: u8) -> Self {
        Self {
            pixel: grid.pixels_mut(),
            colors: Default::default(),
            take: take as usize,
        }
    }
}

impl<'a> Iterator for ColorIterMut<'a> {
    type Item = &'a mut u8;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(c) = self.colors.next() {
                return Some(c);
            }
            let pixel = self.pixel.next()?;
            let take = self.take.min(pixel.len());
            self.colors = pixel[..take].iter_mut();
        }
    }
}
