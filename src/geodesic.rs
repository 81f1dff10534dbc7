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

//! The geodesic module contains Thaddeus Vincenty's solutions of the
//! [inverse and direct geodesic problems](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf)
//! on an ellipsoid of revolution.
//!
//! The inverse problem calculates the length and azimuths of the geodesic
//! between two points by iterating on the difference in longitude on the
//! auxiliary sphere, `lambda`.
//!
//! The direct problem calculates the destination point from a start point,
//! an initial azimuth and a distance by iterating on the arc length on the
//! auxiliary sphere, `sigma`.
//!
//! Vincenty's inverse method may fail to converge for nearly antipodal points.
//! In that case the iteration is stopped after `MAX_INVERSE_ITERATIONS`,
//! `lambda` is set to Pi and the result is marked as `Convergence::Degraded`.

#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

use crate::angle::round_to_decimals;
use crate::{Azimuth, Ellipsoid, GeodeticPoint, Latitude, Longitude, Metres, Radians};
use core::f64::consts::{FRAC_PI_2, PI, TAU};

/// The maximum number of iterations of the inverse solution.
pub const MAX_INVERSE_ITERATIONS: u32 = 50;

/// The change in lambda, in Radians, at which the inverse solution has converged.
pub const INVERSE_CONVERGENCE: f64 = 1e-12;

/// The maximum number of iterations of the direct solution.
pub const MAX_DIRECT_ITERATIONS: u32 = 30;

/// The change in sigma, in Radians, at which the direct solution has converged.
pub const DIRECT_CONVERGENCE: f64 = 1e-12;

/// Latitudes within this distance of a pole are moved to this distance from it.
pub const POLE_EPSILON: Radians = Radians(1e-10);

/// The number of decimal places of the degrees of a direct solution.
pub const DESTINATION_DECIMALS: i32 = 10;

/// Whether the inverse solution converged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Convergence {
    /// lambda converged within `INVERSE_CONVERGENCE`.
    Converged,
    /// The iteration limit was reached, the result has reduced precision.
    Degraded,
}

/// The solution of the inverse geodesic problem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InverseSolution {
    /// The length of the geodesic.
    distance: Metres,
    /// The azimuth of the geodesic at the start point.
    azimuth: Azimuth,
    /// The azimuth of the geodesic at the end point.
    final_azimuth: Azimuth,
    /// The number of iterations performed.
    iterations: u32,
    /// Whether the iteration converged.
    convergence: Convergence,
}

impl InverseSolution {
    /// The solution for an invalid input.
    pub const INVALID: Self = Self {
        distance: Metres(f64::NAN),
        azimuth: Azimuth::INVALID,
        final_azimuth: Azimuth::INVALID,
        iterations: 0,
        convergence: Convergence::Converged,
    };

    /// The solution between coincident points.
    const fn coincident(iterations: u32) -> Self {
        Self {
            distance: Metres(0.0),
            azimuth: Azimuth::NORTH,
            final_azimuth: Azimuth::NORTH,
            iterations,
            convergence: Convergence::Converged,
        }
    }

    #[must_use]
    pub const fn distance(&self) -> Metres {
        self.distance
    }

    #[must_use]
    pub const fn azimuth(&self) -> Azimuth {
        self.azimuth
    }

    #[must_use]
    pub const fn final_azimuth(&self) -> Azimuth {
        self.final_azimuth
    }

    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub const fn convergence(&self) -> Convergence {
        self.convergence
    }

    /// Whether the solution has reduced precision.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.convergence == Convergence::Degraded
    }
}

/// The terms of an inverse iteration used to calculate the solution.
#[derive(Clone, Copy, Debug)]
struct LambdaTerms {
    lambda: f64,
    alpha: f64,
    sigma: f64,
    cos_2sigma_m: f64,
}

impl LambdaTerms {
    /// The terms of the geodesic between antipodal points on the Equator.
    const ANTIPODAL: Self = Self {
        lambda: PI,
        alpha: 0.0,
        sigma: PI,
        cos_2sigma_m: -1.0,
    };

    const fn is_valid(&self) -> bool {
        !(self.lambda.is_nan()
            || self.alpha.is_nan()
            || self.sigma.is_nan()
            || self.cos_2sigma_m.is_nan())
    }
}

/// Whether a latitude (in Radians) is within `POLE_EPSILON` of a pole.
#[must_use]
fn is_near_pole(lat: f64) -> bool {
    libm::fabs(FRAC_PI_2 - libm::fabs(lat)) < POLE_EPSILON.0
}

/// Move a latitude (in Radians) that is within `POLE_EPSILON` of a pole
/// to `POLE_EPSILON` from the pole.
#[must_use]
fn correct_polar_latitude(lat: f64) -> f64 {
    if is_near_pole(lat) {
        libm::copysign(FRAC_PI_2 - POLE_EPSILON.0, lat)
    } else {
        lat
    }
}

/// Calculate Vincenty's `A` coefficient.
/// * `u_sq` - u squared: `cos^2 alpha * ep_2`.
#[must_use]
fn calculate_a(u_sq: f64) -> f64 {
    1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)))
}

/// Calculate Vincenty's `B` coefficient.
/// * `u_sq` - u squared: `cos^2 alpha * ep_2`.
#[must_use]
fn calculate_b(u_sq: f64) -> f64 {
    u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)))
}

/// Calculate Vincenty's `C` coefficient.
#[must_use]
fn calculate_c(f: f64, cos_sq_alpha: f64) -> f64 {
    f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha))
}

/// Calculate the difference between the arc length on the auxiliary sphere
/// and the scaled geodesic length, delta sigma.
#[must_use]
fn calculate_delta_sigma(b: f64, sin_sigma: f64, cos_sigma: f64, cos_2sigma_m: f64) -> f64 {
    let cos_sq_2sigma_m = cos_2sigma_m * cos_2sigma_m;
    let e = 2.0 * cos_sq_2sigma_m - 1.0;
    b * sin_sigma
        * (cos_2sigma_m
            + b / 4.0
                * (cos_sigma * e
                    - b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_sq_2sigma_m)))
}

/// The outcome of iterating on lambda.
enum LambdaIteration {
    /// The points coincide on the auxiliary sphere.
    Coincident(u32),
    /// The last valid terms, the number of iterations and whether lambda converged.
    Terms(Option<LambdaTerms>, u32, bool),
}

/// Iterate on lambda, the difference in longitude on the auxiliary sphere,
/// until it converges or `MAX_INVERSE_ITERATIONS` is reached.
/// * `l` - the difference in longitude, 0 <= l <= Pi.
/// * `sin_u1`, `cos_u1` - the sine and cosine of the start reduced latitude.
/// * `sin_u2`, `cos_u2` - the sine and cosine of the end reduced latitude.
/// * `f` - the flattening of the ellipsoid.
fn iterate_lambda(
    l: f64,
    (sin_u1, cos_u1): (f64, f64),
    (sin_u2, cos_u2): (f64, f64),
    f: f64,
) -> LambdaIteration {
    let mut lambda = l;
    let mut terms = None;
    for iteration in 1..=MAX_INVERSE_ITERATIONS {
        let (sin_lambda, cos_lambda) = libm::sincos(lambda);
        let t1 = cos_u2 * sin_lambda;
        let t2 = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
        let sin_sigma = libm::sqrt(t1 * t1 + t2 * t2);
        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;

        // coincident points on the auxiliary sphere
        if sin_sigma == 0.0 && 0.0 < cos_sigma {
            return LambdaIteration::Coincident(iteration);
        }

        let sigma = libm::atan2(sin_sigma, cos_sigma);
        let alpha = libm::asin(cos_u1 * cos_u2 * sin_lambda / sin_sigma);
        let cos_alpha = libm::cos(alpha);
        let cos_sq_alpha = cos_alpha * cos_alpha;
        // on the Equator
        let cos_2sigma_m = if cos_sq_alpha == 0.0 {
            0.0
        } else {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        };

        let c = calculate_c(f, cos_sq_alpha);
        let previous = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * libm::sin(alpha)
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        let candidate = LambdaTerms {
            lambda,
            alpha,
            sigma,
            cos_2sigma_m,
        };
        if candidate.is_valid() {
            terms = Some(candidate);
        }

        if libm::fabs(lambda - previous) <= INVERSE_CONVERGENCE {
            return LambdaIteration::Terms(terms, iteration, true);
        }
    }

    LambdaIteration::Terms(terms, MAX_INVERSE_ITERATIONS, false)
}

/// Calculate the solution of the inverse geodesic problem between a pair of
/// points using Vincenty's method.
/// * `a`, `b` - the start and end points.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the distance and azimuths between the points.
/// Identical points return a zero distance, points with a NaN or infinite
/// latitude or longitude return `InverseSolution::INVALID`.
#[must_use]
pub fn calculate_inverse(
    a: &GeodeticPoint,
    b: &GeodeticPoint,
    ellipsoid: &Ellipsoid,
) -> InverseSolution {
    if !(a.is_finite() && b.is_finite()) {
        return InverseSolution::INVALID;
    }
    if a == b {
        return InverseSolution::coincident(0);
    }

    let a = a.normalize();
    let b = b.normalize();

    let f = ellipsoid.f();
    let lat1 = a.lat().to_radians().0;
    let lat2 = b.lat().to_radians().0;

    let u1 = ellipsoid.calculate_reduced_latitude(Radians(correct_polar_latitude(lat1))).0;
    let u2 = ellipsoid.calculate_reduced_latitude(Radians(correct_polar_latitude(lat2))).0;
    let (sin_u1, cos_u1) = libm::sincos(u1);
    let (sin_u2, cos_u2) = libm::sincos(u2);

    let delta_lon = b.lon().to_radians().0 - a.lon().to_radians().0;
    let mut l = libm::fabs(delta_lon);
    if PI < l {
        l = TAU - l;
    }

    let (terms, iterations, converged) =
        match iterate_lambda(l, (sin_u1, cos_u1), (sin_u2, cos_u2), f) {
            LambdaIteration::Coincident(iterations) => {
                return InverseSolution::coincident(iterations);
            }
            LambdaIteration::Terms(terms, iterations, converged) => (terms, iterations, converged),
        };

    let terms = terms.unwrap_or(LambdaTerms::ANTIPODAL);
    let (lambda, convergence) = if converged {
        (terms.lambda, Convergence::Converged)
    } else {
        log::debug!(
            "inverse geodesic from {a} to {b} did not converge in {MAX_INVERSE_ITERATIONS} iterations"
        );
        (PI, Convergence::Degraded)
    };

    let (sin_sigma, cos_sigma) = libm::sincos(terms.sigma);
    let cos_alpha = libm::cos(terms.alpha);
    let u_sq = cos_alpha * cos_alpha * ellipsoid.ep_2();
    let big_a = calculate_a(u_sq);
    let big_b = calculate_b(u_sq);
    let delta_sigma = calculate_delta_sigma(big_b, sin_sigma, cos_sigma, terms.cos_2sigma_m);
    let distance = Metres(ellipsoid.b().0 * big_a * (terms.sigma - delta_sigma));

    let (sin_lambda, cos_lambda) = libm::sincos(lambda);
    let mut alpha1 = libm::atan2(
        cos_u2 * sin_lambda,
        cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda,
    );
    let mut alpha2 = libm::atan2(
        cos_u1 * sin_lambda,
        -sin_u1 * cos_u2 + cos_u1 * sin_u2 * cos_lambda,
    );
    // westbound
    if libm::sin(delta_lon) < 0.0 {
        alpha1 = -alpha1;
        alpha2 = -alpha2;
    }

    let azimuth = if is_near_pole(lat1) {
        if 0.0 < lat1 {
            Azimuth::SOUTH
        } else {
            Azimuth::NORTH
        }
    } else {
        Azimuth::from_radians(Radians(alpha1)).normalize()
    };

    InverseSolution {
        distance,
        azimuth,
        final_azimuth: Azimuth::from_radians(Radians(alpha2)).normalize(),
        iterations,
        convergence,
    }
}

/// Calculate the destination point from a start point, azimuth and distance
/// using Vincenty's direct method.
/// * `a` - the start point.
/// * `azimuth` - the initial azimuth of the geodesic.
/// * `distance` - the length of the geodesic.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the destination point, with its latitude and longitude rounded
/// to `DESTINATION_DECIMALS` decimal places of a degree.
/// A NaN or infinite input returns `GeodeticPoint::INVALID`.
#[must_use]
pub fn calculate_direct(
    a: &GeodeticPoint,
    azimuth: Azimuth,
    distance: Metres,
    ellipsoid: &Ellipsoid,
) -> GeodeticPoint {
    if !(a.is_finite() && azimuth.degrees().is_finite() && distance.0.is_finite()) {
        return GeodeticPoint::INVALID;
    }

    let f = ellipsoid.f();
    let a = a.normalize();
    let lat1 = a.lat().to_radians().0;
    let lon1 = a.lon().to_radians().0;
    let (sin_alpha1, cos_alpha1) = libm::sincos(azimuth.to_radians().0);

    let u1 = ellipsoid.calculate_reduced_latitude(Radians(lat1)).0;
    let (sin_u1, cos_u1) = libm::sincos(u1);
    let sigma1 = libm::atan2(libm::tan(u1), cos_alpha1);

    let sin_alpha = cos_u1 * sin_alpha1;
    let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
    let u_sq = cos_sq_alpha * ellipsoid.ep_2();
    let big_a = calculate_a(u_sq);
    let big_b = calculate_b(u_sq);

    let sigma0 = distance.0 / (ellipsoid.b().0 * big_a);
    let mut sigma = sigma0;
    for _ in 0..MAX_DIRECT_ITERATIONS {
        let cos_2sigma_m = libm::cos(2.0 * sigma1 + sigma);
        let (sin_sigma, cos_sigma) = libm::sincos(sigma);
        let previous = sigma;
        sigma = sigma0 + calculate_delta_sigma(big_b, sin_sigma, cos_sigma, cos_2sigma_m);
        if libm::fabs(sigma - previous) <= DIRECT_CONVERGENCE {
            break;
        }
    }

    let (sin_sigma, cos_sigma) = libm::sincos(sigma);
    let cos_2sigma_m = libm::cos(2.0 * sigma1 + sigma);
    let t = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;
    let lat2 = libm::atan2(
        sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1,
        ellipsoid.one_minus_f() * libm::sqrt(sin_alpha * sin_alpha + t * t),
    );
    let lambda = libm::atan2(
        sin_sigma * sin_alpha1,
        cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1,
    );
    let c = calculate_c(f, cos_sq_alpha);
    let l = lambda
        - (1.0 - c)
            * f
            * sin_alpha
            * (sigma
                + c * sin_sigma
                    * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));
    let lon2 = lon1 + l;
    let lon2 = lon2 - TAU * libm::floor(lon2 / TAU + 0.5);

    GeodeticPoint::new(
        Latitude::new(round_to_decimals(
            lat2.to_degrees(),
            DESTINATION_DECIMALS,
        )),
        Longitude::new(round_to_decimals(
            lon2.to_degrees(),
            DESTINATION_DECIMALS,
        )),
    )
}
