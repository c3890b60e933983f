// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving.
//!
//! A [`SeamCarver`] holds a picture, scores every pixel with the
//! dual-gradient energy function, finds the connected path of pixels
//! across the picture with the least total energy, and removes it,
//! shrinking the picture by one column or row without squashing what
//! matters in it.  Decoding and encoding image files is left to the
//! `image` crate and the `seamcarve` binary.

pub mod error;
pub use error::{Result, SeamError};

pub mod twodmap;
pub use twodmap::TwoDimensionalMap;

pub mod pixelgrid;
pub use pixelgrid::PixelGrid;

pub mod energy;
pub use energy::{calculate_energy, energy, BORDER_ENERGY};

pub mod flipper;
pub use flipper::Orientation;

pub mod seamfinder;
pub use seamfinder::{DualGradient, SeamFinder};

pub mod seamcarver;
pub use seamcarver::{validate_seam, SeamCarver};

pub mod render;
pub use render::{energy_to_image, mark_seams};
