// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors
//!
//! Every failure in this crate is a contract violation by the caller:
//! a coordinate outside the picture, a seam of the wrong shape, or a
//! picture that cannot shrink any further.  None of them are
//! transient, and all of them are reported before anything is
//! mutated.

use thiserror::Error;

/// The ways a request against a picture can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeamError {
    /// A pixel coordinate, or a seam entry naming one, lies outside
    /// the current picture.
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} picture")]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// A seam of the wrong length, a picture already at its minimum
    /// size along the requested axis, or unusable construction input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Two successive seam entries are more than one pixel apart.
    #[error("seam jumps from {from} to {to} after entry {position}")]
    InvalidSeam { position: usize, from: u32, to: u32 },
}

impl SeamError {
    pub(crate) fn invalid<S: Into<String>>(message: S) -> Self {
        SeamError::InvalidArgument(message.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SeamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = SeamError::OutOfRange {
            x: 3,
            y: 0,
            width: 3,
            height: 3,
        };
        assert_eq!(err.to_string(), "coordinate (3, 0) is outside the 3x3 picture");

        let err = SeamError::InvalidSeam {
            position: 0,
            from: 0,
            to: 2,
        };
        assert_eq!(err.to_string(), "seam jumps from 0 to 2 after entry 0");
    }
}
