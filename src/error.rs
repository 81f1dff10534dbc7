// Copyright (c) 2024-2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! Error type used by the crate.
//!
//! Only `Ellipsoid` construction can fail; numeric degeneracies in the
//! geodesic calculations are reported as NaN values or `None` instead.

use thiserror::Error;

/// Error enum.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum Error {
    /// The equatorial radius is not a finite, positive number of metres.
    #[error("invalid equatorial radius: {0}m")]
    InvalidEquatorialRadius(f64),

    /// The polar radius is not finite, positive or greater than the equatorial radius.
    #[error("invalid polar radius: {polar}m, equatorial radius: {equatorial}m")]
    InvalidPolarRadius {
        /// The rejected polar radius in metres.
        polar: f64,
        /// The equatorial radius in metres.
        equatorial: f64,
    },

    /// The flattening is outside of the range `0 <= f < 1`.
    #[error("invalid flattening: {0}")]
    InvalidFlattening(f64),
}
