use anyhow::{Result, anyhow, ensure};
use image::RgbImage;

use crate::color::Color;

/// Row-major `height × width` grid of colors, the decoded form of an image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorGrid {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl ColorGrid {
    /// Builds a grid from row-major pixels.
    ///
    /// Fails if `pixels.len()` is not `width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .ok_or_else(|| anyhow!("Grid dimensions {width}x{height} overflow"))?;
        ensure!(
            pixels.len() == expected,
            "Expected {expected} pixels for a {width}x{height} grid, got {}",
            pixels.len()
        );

        Ok(Self { width, height, pixels })
    }

    /// A grid where every pixel is `color`.
    pub fn filled(width: usize, height: usize, color: Color) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .ok_or_else(|| anyhow!("Grid dimensions {width}x{height} overflow"))?;

        Ok(Self {
            width,
            height,
            pixels: vec![color; len],
        })
    }

    pub fn from_rgb_image(img: &RgbImage) -> Self {
        let pixels = img.pixels().map(|p| Color::from(p.0)).collect();

        Self {
            width: img.width() as usize,
            height: img.height() as usize,
            pixels,
        }
    }

    pub fn to_rgb_image(&self) -> Result<RgbImage> {
        let raw: Vec<u8> = self
            .pixels
            .iter()
            .flat_map(|&c| <[u8; 3]>::from(c))
            .collect();

        RgbImage::from_raw(self.width as u32, self.height as u32, raw)
            .ok_or_else(|| anyhow!("Failed to rebuild {}x{} image buffer", self.width, self.height))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        // `chunks` panics on a zero chunk size; a zero-width grid has no pixels anyway.
        self.pixels.chunks(self.width.max(1))
    }

    pub(crate) fn map(&self, f: impl Fn(Color) -> Color) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&c| f(c)).collect(),
        }
    }
}
