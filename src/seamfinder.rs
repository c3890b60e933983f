// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the seam of least energy
//!
//! The pixels of a picture form an implicit weighted digraph: every
//! pixel in row `y` has an edge to the (up to) three pixels touching
//! it in row `y + 1`, weighted by the energy of the target.  The
//! graph is acyclic and rows are already a topological order, so a
//! single pass relaxing every edge row by row yields the shortest
//! path from the top row to every pixel.  The cheapest pixel in the
//! bottom row ends the seam; its back pointers trace the rest.
//!
//! Horizontal seams are found by running the same pass over a
//! `Flipper` view of the energy map.

use crate::energy::calculate_energy;
use crate::flipper::{Flipper, Orientation};
use crate::pixelgrid::PixelGrid;
use crate::twodmap::{EnergyAndBackPointer, TwoDimensionalMap};
use itertools::Itertools;
use log::trace;

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for multiple seam
/// finders.
pub trait SeamFinder {
    /// The cheapest seam in the given orientation: one entry per row
    /// for a vertical seam, one per column for a horizontal one.
    fn find_seam(&self, orientation: Orientation) -> Vec<u32>;

    /// Request a horizontal seam: `width` y-coordinates.
    fn find_horizontal_seam(&self) -> Vec<u32> {
        self.find_seam(Orientation::Horizontal)
    }

    /// Request a vertical seam: `height` x-coordinates.
    fn find_vertical_seam(&self) -> Vec<u32> {
        self.find_seam(Orientation::Vertical)
    }
}

/// The dual-gradient seam finder: a reference to the picture, with
/// the energy map rebuilt on every request so a search never sees a
/// stale grid.
pub struct DualGradient<'a> {
    grid: &'a PixelGrid,
}

impl<'a> DualGradient<'a> {
    pub fn new(grid: &'a PixelGrid) -> Self {
        DualGradient { grid }
    }
}

impl<'a> SeamFinder for DualGradient<'a> {
    fn find_seam(&self, orientation: Orientation) -> Vec<u32> {
        let energy = calculate_energy(self.grid);
        let seam = energy_to_seam(&Flipper::new(&energy, orientation));
        trace!("{:?} seam: {:?}", orientation, seam);
        seam
    }
}

type SeamDigraph = TwoDimensionalMap<EnergyAndBackPointer<f64>>;

// Relax the edge from `from` in row `y` to `to` in row `y + 1`.
#[inline]
fn relax(target: &mut SeamDigraph, energy: &Flipper<f64>, from: u32, to: u32, y: u32) {
    let candidate = target[(from, y)].energy + energy.get(to, y + 1);
    if target[(to, y + 1)].energy > candidate {
        target[(to, y + 1)] = EnergyAndBackPointer {
            energy: candidate,
            parent: from,
        };
    }
}

/// Given an energy map viewed top to bottom, return the list of
/// x-coordinates that, when mapped with the range (0..height), give
/// the coordinates of every pixel in the cheapest seam.
pub(crate) fn energy_to_seam(energy: &Flipper<f64>) -> Vec<u32> {
    let (width, height) = energy.dimensions();
    let mut target: SeamDigraph = TwoDimensionalMap::filled(
        width,
        height,
        EnergyAndBackPointer {
            energy: f64::INFINITY,
            parent: 0,
        },
    );

    // Populate the first row with their native energies.
    for x in 0..width {
        target[(x, 0)] = EnergyAndBackPointer {
            energy: energy.get(x, 0),
            parent: x,
        };
    }

    let maxwidth = width - 1;
    // Relax every edge leaving row y before any edge leaving row
    // y + 1.  Sources run left to right and only a strictly cheaper
    // path replaces a parent, so ties keep the leftmost parent.
    for y in 0..height - 1 {
        for x in 0..width {
            if x > 0 {
                relax(&mut target, energy, x, x - 1, y);
            }
            relax(&mut target, energy, x, x, y);
            if x < maxwidth {
                relax(&mut target, energy, x, x + 1, y);
            }
        }
    }

    // Find the x coordinate of the bottommost seam with the least
    // energy; the first of equals wins.
    let mut seam_col = (0..width)
        .position_min_by(|a, b| {
            target[(*a, height - 1)]
                .energy
                .total_cmp(&target[(*b, height - 1)].energy)
        })
        .unwrap_or(0) as u32;

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    let mut seam = vec![0; height as usize];
    for y in (0..height).rev() {
        seam[y as usize] = seam_col;
        seam_col = target[(seam_col, y)].parent;
    }
    seam
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::energy;
    use itertools::iproduct;

    const ENERGY_DATA: [f64; 20] = [
        9., 9., 0., 9., 9., //
        9., 1., 9., 8., 9., //
        9., 9., 9., 9., 0., //
        9., 9., 9., 0., 9.,
    ];

    fn energies() -> TwoDimensionalMap<f64> {
        TwoDimensionalMap::from_vec(5, 4, ENERGY_DATA.to_vec()).unwrap()
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        let map = energies();
        let seam = energy_to_seam(&Flipper::new(&map, Orientation::Vertical));
        assert_eq!(seam, [2, 3, 4, 3]);
    }

    #[test]
    fn energy_grid_to_horizontal_seam() {
        let map = energies();
        let seam = energy_to_seam(&Flipper::new(&map, Orientation::Horizontal));
        assert_eq!(seam, [0, 1, 0, 1, 2]);
    }

    #[test]
    fn ties_go_to_the_leftmost_path() {
        let map = TwoDimensionalMap::filled(4, 3, 1.0);
        let seam = energy_to_seam(&Flipper::new(&map, Orientation::Vertical));
        assert_eq!(seam, [0, 0, 0]);
    }

    #[test]
    fn degenerate_maps_give_trivial_seams() {
        let column = TwoDimensionalMap::filled(1, 5, 7.0);
        assert_eq!(
            energy_to_seam(&Flipper::new(&column, Orientation::Vertical)),
            [0, 0, 0, 0, 0]
        );
        assert_eq!(
            energy_to_seam(&Flipper::new(&column, Orientation::Horizontal)),
            [0]
        );
        let row = TwoDimensionalMap::filled(3, 1, 7.0);
        assert_eq!(
            energy_to_seam(&Flipper::new(&row, Orientation::Vertical)),
            [0]
        );
        assert_eq!(
            energy_to_seam(&Flipper::new(&row, Orientation::Horizontal)),
            [0, 0, 0]
        );
    }

    // A small deterministic generator, so the brute force below
    // checks something other than a hand-picked picture.
    fn scrambled(width: u32, height: u32, seed: u32) -> PixelGrid {
        let mut state = seed;
        let raw = (0..width * height * 3)
            .map(|_| {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                (state >> 16) as u8
            })
            .collect();
        PixelGrid::from_raw(width, height, raw).unwrap()
    }

    fn cheapest_path(grid: &PixelGrid, x: u32, y: u32) -> f64 {
        let here = energy(grid, x, y).unwrap();
        if y == grid.height() - 1 {
            return here;
        }
        let lo = if x == 0 { 0 } else { x - 1 };
        let hi = (x + 1).min(grid.width() - 1);
        let rest = (lo..=hi)
            .map(|next| cheapest_path(grid, next, y + 1))
            .fold(f64::INFINITY, f64::min);
        here + rest
    }

    fn seam_total(grid: &PixelGrid, seam: &[u32]) -> f64 {
        seam.iter()
            .enumerate()
            .map(|(y, x)| energy(grid, *x, y as u32).unwrap())
            .sum()
    }

    #[test]
    fn vertical_seam_is_no_worse_than_any_path() {
        for seed in 1..6 {
            let grid = scrambled(4, 6, seed);
            let seam = DualGradient::new(&grid).find_vertical_seam();
            assert_eq!(seam.len(), 6);
            assert!(seam.iter().all(|x| *x < 4));
            assert!(seam.iter().tuple_windows().all(|(a, b)| a.max(b) - a.min(b) <= 1));

            let best = (0..4)
                .map(|x| cheapest_path(&grid, x, 0))
                .fold(f64::INFINITY, f64::min);
            assert!(seam_total(&grid, &seam) <= best + 1e-9);
        }
    }

    // The same picture with rows and columns exchanged; the energy
    // function is symmetric, so a left-to-right path here costs what
    // the matching top-to-bottom path costs there.
    fn transposed(grid: &PixelGrid) -> PixelGrid {
        let (width, height) = (grid.height(), grid.width());
        let raw = iproduct!(0..height, 0..width)
            .flat_map(|(y, x)| grid.get(y, x).unwrap().0.to_vec())
            .collect();
        PixelGrid::from_raw(width, height, raw).unwrap()
    }

    #[test]
    fn horizontal_seam_is_no_worse_than_any_path() {
        for seed in 1..6 {
            let grid = scrambled(6, 4, seed);
            let seam = DualGradient::new(&grid).find_horizontal_seam();
            assert_eq!(seam.len(), 6);
            assert!(seam.iter().all(|y| *y < 4));
            assert!(seam.iter().tuple_windows().all(|(a, b)| a.max(b) - a.min(b) <= 1));

            let total: f64 = seam
                .iter()
                .enumerate()
                .map(|(x, y)| energy(&grid, x as u32, *y).unwrap())
                .sum();
            let flipped = transposed(&grid);
            let best = (0..4)
                .map(|y| cheapest_path(&flipped, y, 0))
                .fold(f64::INFINITY, f64::min);
            assert!(total <= best + 1e-9);
        }
    }
}
