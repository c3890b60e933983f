// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The picture being carved
//!
//! A `PixelGrid` owns a width × height field of 8-bit RGB pixels.  It
//! is never empty: construction rejects zero-sized input, and the
//! removal operations refuse to shrink a dimension below one.

use crate::error::{Result, SeamError};
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive, Rgb, RgbImage};
use itertools::iproduct;
use num_traits::NumCast;

/// An owned, exclusively mutable RGB raster.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    pixels: TwoDimensionalMap<Rgb<u8>>,
}

impl PixelGrid {
    /// Copy any `image` view into a grid.  Each pixel is converted to
    /// RGB; channels that do not fit in eight bits are rejected.
    pub fn from_view<I, P, S>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        let (width, height) = image.dimensions();
        check_dimensions(width, height)?;
        // Float subpixels are scaled to 0.0..=1.0, which no 8-bit
        // channel can represent.
        match <f64 as NumCast>::from(S::DEFAULT_MAX_VALUE) {
            Some(max) if max >= 255.0 => {}
            _ => {
                return Err(SeamError::invalid(
                    "floating-point channels are not supported; convert to 8-bit RGB first",
                ))
            }
        }

        let pixels = iproduct!(0..height, 0..width)
            .map(|(y, x)| {
                let rgb = image.get_pixel(x, y).to_rgb();
                let c = rgb.0;
                match (narrow(c[0]), narrow(c[1]), narrow(c[2])) {
                    (Some(r), Some(g), Some(b)) => Ok(Rgb([r, g, b])),
                    _ => Err(SeamError::invalid(format!(
                        "pixel ({}, {}) has a channel wider than 8 bits",
                        x, y
                    ))),
                }
            })
            .collect::<Result<Vec<_>>>()?;

        PixelGrid::wrap(width, height, pixels)
    }

    /// Take ownership of a packed `[r, g, b, r, g, b, ...]` buffer laid
    /// out row by row.
    pub fn from_raw(width: u32, height: u32, raw: Vec<u8>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize * 3;
        if raw.len() != expected {
            return Err(SeamError::invalid(format!(
                "a {}x{} RGB buffer needs {} bytes, got {}",
                width,
                height,
                expected,
                raw.len()
            )));
        }
        let pixels = raw
            .chunks_exact(3)
            .map(|c| Rgb([c[0], c[1], c[2]]))
            .collect();
        PixelGrid::wrap(width, height, pixels)
    }

    fn wrap(width: u32, height: u32, pixels: Vec<Rgb<u8>>) -> Result<Self> {
        TwoDimensionalMap::from_vec(width, height, pixels)
            .map(|pixels| PixelGrid { pixels })
            .ok_or_else(|| SeamError::invalid("pixel count does not match the picture size"))
    }

    /// Hand the current picture back as an `image` buffer.
    pub fn to_image(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width(), self.height(), |x, y| self.pixels[(x, y)])
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// The pixel at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> Result<Rgb<u8>> {
        self.check(x, y)?;
        Ok(self.pixels[(x, y)])
    }

    /// Overwrite the pixel at `(x, y)`.
    pub fn set(&mut self, x: u32, y: u32, pixel: Rgb<u8>) -> Result<()> {
        self.check(x, y)?;
        self.pixels[(x, y)] = pixel;
        Ok(())
    }

    pub(crate) fn check(&self, x: u32, y: u32) -> Result<()> {
        if self.pixels.contains(x, y) {
            Ok(())
        } else {
            Err(SeamError::OutOfRange {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    // Unchecked; for the energy calculation, which has already
    // established that the whole neighbourhood is in bounds.
    pub(crate) fn pixel(&self, x: u32, y: u32) -> &Rgb<u8> {
        &self.pixels[(x, y)]
    }

    /// Remove one pixel per row, at `seam[y]`, narrowing the grid by
    /// one.  The seam must already be validated against this grid.
    pub(crate) fn remove_column(&mut self, seam: &[u32]) {
        self.pixels.remove_column(seam);
    }

    /// Remove one pixel per column, at `seam[x]`, shortening the grid
    /// by one.  The seam must already be validated against this grid.
    pub(crate) fn remove_row(&mut self, seam: &[u32]) {
        self.pixels.remove_row(seam);
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(SeamError::invalid(format!(
            "a picture must be at least 1x1, got {}x{}",
            width, height
        )));
    }
    Ok(())
}

// Only exact conversions; anything that would change in the cast is
// rejected.
#[inline]
fn narrow<S: Primitive>(channel: S) -> Option<u8> {
    let narrowed: u8 = NumCast::from(channel)?;
    if <S as NumCast>::from(narrowed) == Some(channel) {
        Some(narrowed)
    } else {
        None
    }
}
