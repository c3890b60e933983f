// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Map dimensional flipper
//!
//! A read-only proxy over a `TwoDimensionalMap` that, for horizontal
//! work, maps the width to the original height and vice versa, as
//! well as every x to y and vice versa.
//!
//! The seam search is written once, for top-to-bottom seams.  Handing
//! it a flipped map makes a left-to-right search look exactly like a
//! top-to-bottom one, so the two directions cannot drift apart.

use crate::twodmap::TwoDimensionalMap;

/// The direction a seam runs through the picture.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Orientation {
    /// Top to bottom, one x per row.  Removing it narrows the picture.
    Vertical,
    /// Left to right, one y per column.  Removing it shortens the
    /// picture.
    Horizontal,
}

impl Orientation {
    /// The other direction.  Used when alternating seams.
    pub fn turn(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }

    /// `(across, along)`: the number of values each seam entry may
    /// take, and the number of entries in a seam, for a picture of
    /// the given size.
    pub fn span(self, width: u32, height: u32) -> (u32, u32) {
        match self {
            Orientation::Vertical => (width, height),
            Orientation::Horizontal => (height, width),
        }
    }

    /// The picture coordinate of the `along`th seam entry when its
    /// value is `across`.
    pub fn point(self, across: u32, along: u32) -> (u32, u32) {
        match self {
            Orientation::Vertical => (across, along),
            Orientation::Horizontal => (along, across),
        }
    }
}

/// A map viewed so that seams in the given orientation always run
/// top to bottom.
pub struct Flipper<'a, P> {
    map: &'a TwoDimensionalMap<P>,
    orientation: Orientation,
}

impl<'a, P: Copy> Flipper<'a, P> {
    pub fn new(map: &'a TwoDimensionalMap<P>, orientation: Orientation) -> Self {
        Flipper { map, orientation }
    }

    pub fn width(&self) -> u32 {
        self.dimensions().0
    }

    pub fn height(&self) -> u32 {
        self.dimensions().1
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.orientation
            .span(self.map.width(), self.map.height())
    }

    pub fn get(&self, x: u32, y: u32) -> P {
        self.map[self.orientation.point(x, y)]
    }
}
