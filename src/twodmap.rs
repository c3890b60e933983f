// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Two-dimensional maps
//!
//! The one addressing scheme used by every grid in the crate: the
//! pixels themselves, the energy cache, the accumulated-energy
//! digraph, and the coordinate maps used when drawing seams.

use itertools::iproduct;
use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field, stored row-major.  The
/// content is whatever a stage of processing needs: a pixel, an
/// energy, an energy plus back pointer, an original coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P: Default + Clone> TwoDimensionalMap<P> {
    /// Define a new map with every cell at its default value.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, P::default())
    }
}

impl<P: Clone> TwoDimensionalMap<P> {
    /// Define a new map with every cell set to `value`.
    pub fn filled(width: u32, height: u32, value: P) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![value; width as usize * height as usize],
        }
    }
}

impl<P> TwoDimensionalMap<P> {
    /// Wrap an existing row-major buffer.  Returns `None` when the
    /// buffer does not hold exactly `width * height` cells.
    pub fn from_vec(width: u32, height: u32, cells: Vec<P>) -> Option<Self> {
        if cells.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            cells,
        })
    }

    /// Build a map by calling `f(x, y)` for every address.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> P,
    {
        let cells = iproduct!(0..height, 0..width)
            .map(|(y, x)| f(x, y))
            .collect();
        TwoDimensionalMap {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Is `(x, y)` a valid address in this map?
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Checked access.
    pub fn get(&self, x: u32, y: u32) -> Option<&P> {
        if self.contains(x, y) {
            Some(&self.cells[self.get_index(x, y)])
        } else {
            None
        }
    }

    /// The cells in row-major order.
    pub fn cells(&self) -> &[P] {
        &self.cells
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Drop one cell per row, the one at `seam[y]`, shifting the rest
    /// of that row left.  The caller guarantees `seam.len() == height`,
    /// every entry is in range, and the map is at least two wide.
    pub fn remove_column(&mut self, seam: &[u32]) {
        debug_assert_eq!(seam.len(), self.height as usize);
        debug_assert!(self.width >= 2);
        // Rows stay contiguous in row-major order, so dropping exactly
        // one cell from each leaves a valid (width - 1) layout in place.
        let width = self.width as usize;
        let mut index = 0;
        self.cells.retain(|_| {
            let (x, y) = (index % width, index / width);
            index += 1;
            x != seam[y] as usize
        });
        self.width -= 1;
    }
}

impl<P: Clone> TwoDimensionalMap<P> {
    /// Drop one cell per column, the one at `seam[x]`, shifting the
    /// rest of that column up.  The caller guarantees
    /// `seam.len() == width`, every entry is in range, and the map is
    /// at least two high.
    pub fn remove_row(&mut self, seam: &[u32]) {
        debug_assert_eq!(seam.len(), self.width as usize);
        debug_assert!(self.height >= 2);
        let height = self.height - 1;
        let cells = iproduct!(0..height, 0..self.width)
            .map(|(y, x)| {
                let source = if y < seam[x as usize] { y } else { y + 1 };
                self[(x, source)].clone()
            })
            .collect();
        self.cells = cells;
        self.height = height;
    }
}

impl<P> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

/// One cell of the seam digraph: the cheapest known energy of any
/// path reaching this cell, and the cross-axis coordinate of the cell
/// it was reached from.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub(crate) struct EnergyAndBackPointer<P> {
    pub energy: P,
    pub parent: u32,
}
