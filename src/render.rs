// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pictures of the carving process
//!
//! Nothing here is needed to carve; these are for looking at what the
//! carver sees.

use crate::error::Result;
use crate::flipper::Orientation;
use crate::pixelgrid::PixelGrid;
use crate::seamcarver::SeamCarver;
use crate::twodmap::TwoDimensionalMap;
use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage};
use log::debug;

/// The colour seams are painted in.
pub const SEAM_COLOUR: Rgb<u8> = Rgb([255, 0, 0]);

/// Scale an energy map to an 8-bit grayscale picture, the most
/// energetic pixel rendered white.
pub fn energy_to_image(energy: &TwoDimensionalMap<f64>) -> GrayImage {
    let factor = energy.cells().iter().cloned().fold(0.0, f64::max);
    ImageBuffer::from_fn(energy.width(), energy.height(), |x, y| {
        if factor <= 0.0 {
            return Luma([0]);
        }
        let level = (energy[(x, y)] / factor * 255.0).round();
        Luma([level.max(0.0).min(255.0) as u8])
    })
}

/// Carve `count` seams in one orientation out of a copy of `grid`,
/// and paint every removed pixel on the original picture.
///
/// Alongside the copy we carry a map from each surviving pixel to
/// where it started, and cut the same seam out of both, so a seam
/// found in a shrunken picture can be drawn where it really was.
pub fn mark_seams(grid: &PixelGrid, orientation: Orientation, count: u32) -> Result<RgbImage> {
    let mut carver = SeamCarver::new(grid.clone());
    let mut origins = TwoDimensionalMap::from_fn(grid.width(), grid.height(), |x, y| (x, y));
    let mut marked = grid.to_image();

    for _ in 0..count {
        let seam = carver.carve_once(orientation)?;
        for (along, across) in seam.iter().enumerate() {
            let (x, y) = orientation.point(*across, along as u32);
            let (ox, oy) = origins[(x, y)];
            marked.put_pixel(ox, oy, SEAM_COLOUR);
        }
        match orientation {
            Orientation::Vertical => origins.remove_column(&seam),
            Orientation::Horizontal => origins.remove_row(&seam),
        }
    }
    debug!("marked {} {:?} seams", count, orientation);
    Ok(marked)
}
