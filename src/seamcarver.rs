// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main type
//!
//! `SeamCarver` owns a picture and exposes the find/remove contract
//! over it, plus a driver that carves repeatedly to reach a target
//! size.  Every removal is validated in full before the grid is
//! touched, so a rejected seam leaves the picture exactly as it was.

use crate::energy;
use crate::error::{Result, SeamError};
use crate::flipper::Orientation;
use crate::pixelgrid::PixelGrid;
use crate::seamfinder::{DualGradient, SeamFinder};
use image::{GenericImageView, Pixel, Primitive, RgbImage};
use itertools::Itertools;
use log::debug;

/// A struct for holding the picture to be carved.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    grid: PixelGrid,
}

impl SeamCarver {
    /// Creates a new SeamCarver with a picture to be carved.
    pub fn new(grid: PixelGrid) -> Self {
        SeamCarver { grid }
    }

    /// Creates a new SeamCarver from a copy of any `image` view.
    pub fn from_view<I, P, S>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        PixelGrid::from_view(image).map(SeamCarver::new)
    }

    /// The current picture, as a fresh `image` buffer.
    pub fn picture(&self) -> RgbImage {
        self.grid.to_image()
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// The dual-gradient energy of the pixel at `(x, y)`.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64> {
        energy::energy(&self.grid, x, y)
    }

    /// Remove a left-to-right seam, shortening the picture by one row.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<&PixelGrid> {
        self.remove_seam(Orientation::Horizontal, seam)
    }

    /// Remove a top-to-bottom seam, narrowing the picture by one
    /// column.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<&PixelGrid> {
        self.remove_seam(Orientation::Vertical, seam)
    }

    /// Validate `seam` against the current picture and remove it.
    pub fn remove_seam(&mut self, orientation: Orientation, seam: &[u32]) -> Result<&PixelGrid> {
        validate_seam(&self.grid, orientation, seam)?;
        match orientation {
            Orientation::Vertical => self.grid.remove_column(seam),
            Orientation::Horizontal => self.grid.remove_row(seam),
        }
        debug!(
            "removed {:?} seam, picture is now {}x{}",
            orientation,
            self.width(),
            self.height()
        );
        Ok(&self.grid)
    }

    /// Find the cheapest seam in one direction and remove it,
    /// returning the seam that was removed.
    pub fn carve_once(&mut self, orientation: Orientation) -> Result<Vec<u32>> {
        let seam = self.find_seam(orientation);
        self.remove_seam(orientation, &seam)?;
        Ok(seam)
    }

    // This is absurdly inefficient, as the entire energy map and
    // energy seam digraph is recalculated every time.  It should be
    // possible to find the span of columns or rows affected by the
    // carve and recalculate only the new ones.

    /// Repeatedly carve seams out of the picture until it is
    /// `new_width` by `new_height`.  While both dimensions are too
    /// large, vertical and horizontal seams alternate.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<()> {
        if new_width == 0 || new_height == 0 {
            return Err(SeamError::invalid(format!(
                "cannot carve to {}x{}: both dimensions must be at least 1",
                new_width, new_height
            )));
        }
        if self.width() < new_width || self.height() < new_height {
            return Err(SeamError::invalid(format!(
                "seamcarve cannot upscale a {}x{} picture to {}x{}",
                self.width(),
                self.height(),
                new_width,
                new_height
            )));
        }

        let mut direction = Orientation::Vertical;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(direction)?;
            direction = direction.turn();
        }
        while self.width() > new_width {
            self.carve_once(Orientation::Vertical)?;
        }
        while self.height() > new_height {
            self.carve_once(Orientation::Horizontal)?;
        }
        debug!("carved to {}x{}", self.width(), self.height());
        Ok(())
    }
}

impl SeamFinder for SeamCarver {
    fn find_seam(&self, orientation: Orientation) -> Vec<u32> {
        DualGradient::new(&self.grid).find_seam(orientation)
    }
}

/// Check a seam against the picture it is about to be cut from:
/// the picture must be able to lose a line in that direction, the
/// seam must cross the whole picture, every entry must name a pixel,
/// and successive entries must touch.
pub fn validate_seam(grid: &PixelGrid, orientation: Orientation, seam: &[u32]) -> Result<()> {
    let (across, along) = orientation.span(grid.width(), grid.height());
    if across < 2 {
        return Err(SeamError::invalid(match orientation {
            Orientation::Vertical => "picture is already at its minimum width",
            Orientation::Horizontal => "picture is already at its minimum height",
        }));
    }
    if seam.len() != along as usize {
        return Err(SeamError::invalid(format!(
            "{:?} seam has {} entries, expected {}",
            orientation,
            seam.len(),
            along
        )));
    }
    if let Some((position, &entry)) = seam.iter().find_position(|&&entry| entry >= across) {
        let (x, y) = orientation.point(entry, position as u32);
        return Err(SeamError::OutOfRange {
            x,
            y,
            width: grid.width(),
            height: grid.height(),
        });
    }
    if let Some((position, (&from, &to))) = seam
        .iter()
        .tuple_windows()
        .find_position(|&(a, b)| a.max(b) - a.min(b) > 1)
    {
        return Err(SeamError::InvalidSeam { position, from, to });
    }
    Ok(())
}
