// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The dual-gradient energy function: a pixel's importance is the
//! square root of the summed squared R, G and B differences between
//! its left and right neighbours, plus the same between its upper and
//! lower neighbours.  Pixels on the picture's border have no
//! neighbour on one side and get a fixed, high energy instead, which
//! keeps seams off the edges whenever a cheaper interior path exists.

use crate::error::Result;
use crate::pixelgrid::PixelGrid;
use crate::twodmap::TwoDimensionalMap;
use image::Rgb;
use itertools::izip;

/// The energy assigned to every pixel on the picture's border.
pub const BORDER_ENERGY: f64 = 1000.0;

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up.  This
// is the rusty expression of:
//
//        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//       e(x,y) = √(|Δx|²+|Δy|²)
//
// This is one of the two squared terms.
#[inline]
fn energy_of_pair(p1: &Rgb<u8>, p2: &Rgb<u8>) -> u32 {
    izip!(p1.0.iter(), p2.0.iter())
        .map(|(c1, c2)| {
            let d = i32::from(*c1) - i32::from(*c2);
            (d * d) as u32
        })
        .sum()
}

fn is_border(grid: &PixelGrid, x: u32, y: u32) -> bool {
    x == 0 || y == 0 || x == grid.width() - 1 || y == grid.height() - 1
}

// Assumes (x, y) is in bounds.
fn energy_at(grid: &PixelGrid, x: u32, y: u32) -> f64 {
    if is_border(grid, x, y) {
        return BORDER_ENERGY;
    }
    let dx = energy_of_pair(grid.pixel(x - 1, y), grid.pixel(x + 1, y));
    let dy = energy_of_pair(grid.pixel(x, y - 1), grid.pixel(x, y + 1));
    f64::from(dx + dy).sqrt()
}

/// The dual-gradient energy of the pixel at `(x, y)`.
pub fn energy(grid: &PixelGrid, x: u32, y: u32) -> Result<f64> {
    grid.check(x, y)?;
    Ok(energy_at(grid, x, y))
}

/// Compute the energy of every pixel in the picture.  The seam search
/// reads each pixel's energy up to three times, so it works from this
/// map rather than calling `energy` per edge.  The map describes one
/// state of the grid and is stale after any removal.
pub fn calculate_energy(grid: &PixelGrid) -> TwoDimensionalMap<f64> {
    TwoDimensionalMap::from_fn(grid.width(), grid.height(), |x, y| {
        energy_at(grid, x, y)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeamError;

    // The 3x4 picture from the classic assignment handout, row by row.
    const PICTURE: [u8; 36] = [
        255, 101, 51, 255, 101, 153, 255, 101, 255, //
        255, 153, 51, 255, 153, 153, 255, 153, 255, //
        255, 203, 51, 255, 204, 153, 255, 205, 255, //
        255, 255, 51, 255, 255, 153, 255, 255, 255,
    ];

    fn picture() -> PixelGrid {
        PixelGrid::from_raw(3, 4, PICTURE.to_vec()).unwrap()
    }

    #[test]
    fn pair_energy_sums_squared_channel_differences() {
        assert_eq!(energy_of_pair(&Rgb([0, 0, 0]), &Rgb([0, 0, 0])), 0);
        assert_eq!(energy_of_pair(&Rgb([1, 2, 3]), &Rgb([4, 6, 3])), 9 + 16);
        assert_eq!(energy_of_pair(&Rgb([0, 255, 0]), &Rgb([255, 0, 0])), 2 * 65025);
    }

    #[test]
    fn border_pixels_have_the_border_energy() {
        let grid = picture();
        for (x, y) in &[(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 3), (1, 3), (2, 3)] {
            assert_eq!(energy(&grid, *x, *y).unwrap(), BORDER_ENERGY);
        }
    }

    #[test]
    fn interior_pixels_use_the_dual_gradient() {
        let grid = picture();
        // Δx = (0, 0, 204), Δy = (0, 103, 0)
        assert_eq!(energy(&grid, 1, 1).unwrap(), 52225f64.sqrt());
        // Δx = (0, 2, 204), Δy = (0, 102, 0)
        assert_eq!(energy(&grid, 1, 2).unwrap(), 52024f64.sqrt());
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let grid = picture();
        assert!(matches!(
            energy(&grid, 3, 0),
            Err(SeamError::OutOfRange { x: 3, y: 0, .. })
        ));
        assert!(energy(&grid, 0, 4).is_err());
    }

    #[test]
    fn single_row_and_column_pictures_are_all_border() {
        let grid = PixelGrid::from_raw(4, 1, vec![9; 12]).unwrap();
        assert!((0..4).all(|x| energy(&grid, x, 0).unwrap() == BORDER_ENERGY));
        let grid = PixelGrid::from_raw(1, 4, vec![9; 12]).unwrap();
        assert!((0..4).all(|y| energy(&grid, 0, y).unwrap() == BORDER_ENERGY));
    }

    #[test]
    fn energy_map_agrees_with_single_pixel_energy() {
        let grid = picture();
        let map = calculate_energy(&grid);
        assert_eq!((map.width(), map.height()), (3, 4));
        for y in 0..4 {
            for x in 0..3 {
                assert_eq!(map[(x, y)], energy(&grid, x, y).unwrap());
                assert!(map[(x, y)] >= 0.0);
            }
        }
    }
}
