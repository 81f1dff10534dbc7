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

//! The ellipsoid module contains functions for calculating the parameters of
//! an ellipsoid given its Semimajor axis (equatorial radius) and either its
//! Semiminor axis (polar radius) or flattening ratio.
//!
//! The submodules contain the defining parameters of well known ellipsoids.

#![allow(clippy::suboptimal_flops)]

pub mod clarke1866;
pub mod grs80;
pub mod wgs84;

use crate::{Metres, Radians};

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use vincenty_wgs84::Metres;
/// use vincenty_wgs84::ellipsoid::{calculate_minor_axis, wgs84};
///
/// // The WGS 84 Semiminor axis measured in metres.
/// let b : Metres = Metres(6_356_752.314_245_179);
/// assert_eq!(b, calculate_minor_axis(wgs84::A, wgs84::F));
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the flattening ratio of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `b` - the Semiminor axis of an ellipsoid.
#[must_use]
pub fn calculate_flattening(a: Metres, b: Metres) -> f64 {
    (a.0 - b.0) / a.0
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use vincenty_wgs84::ellipsoid::{calculate_sq_eccentricity, wgs84};
///
/// // The WGS 84 sq_eccentricity.
/// assert_eq!(0.0066943799901413165, calculate_sq_eccentricity(wgs84::F));
/// ```
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the square of the second Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
#[must_use]
pub fn calculate_sq_2nd_eccentricity(f: f64) -> f64 {
    let one_minus_f = 1.0 - f;
    calculate_sq_eccentricity(f) / (one_minus_f * one_minus_f)
}

/// Convert a geodetic latitude to a reduced (parametric) latitude on the
/// auxiliary sphere: `atan((1 - f) * tan(lat))`.
/// * `lat` - the geodetic latitude.
/// * `one_minus_f` - one minus the flattening ratio.
#[must_use]
pub fn calculate_reduced_latitude(lat: Radians, one_minus_f: f64) -> Radians {
    Radians(libm::atan(one_minus_f * libm::tan(lat.0)))
}

/// Calculate the radius of curvature in the prime vertical at a latitude.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `e_2` - the square of the Eccentricity of the ellipsoid.
/// * `lat` - the geodetic latitude.
#[must_use]
pub fn calculate_prime_vertical_radius(a: Metres, e_2: f64, lat: Radians) -> Metres {
    let sin_lat = libm::sin(lat.0);
    Metres(a.0 / libm::sqrt(1.0 - e_2 * sin_lat * sin_lat))
}
