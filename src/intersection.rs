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

//! The `intersection` module contains functions for calculating the
//! intersection of two great circles on a sphere.
//!
//! Each great circle is defined by a point and an initial bearing.
//! The calculation uses the spherical trigonometry of Ed Williams'
//! [Aviation Formulary](https://edwilliams.org/avform147.htm#Intersection).
//! It does not account for the flattening of the ellipsoid, so it is only
//! intended as an approximation of the intersection of geodesics.

#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

use crate::{Azimuth, GeodeticPoint, Latitude, Longitude, Radians};
use core::f64::consts::{PI, TAU};

/// The square of the minimum product of the sines of the angles between the
/// great circles and the base line at which they intersect.
pub const INTERSECTION_TOLERANCE: f64 = 1e-12;

/// Wrap an angle into the range -Pi <= angle < Pi.
#[must_use]
fn wrap_pi(angle: f64) -> f64 {
    angle - TAU * libm::floor((angle + PI) / TAU)
}

/// Calculate the great circle distance between two points using the
/// haversine formula.
/// * `lat1`, `lat2` - the latitudes of the points.
/// * `delta_long` - the difference in longitude between the points.
///
/// returns the distance in Radians on the unit sphere.
#[must_use]
pub fn calculate_gc_distance(lat1: Radians, lat2: Radians, delta_long: Radians) -> Radians {
    let sin_half_dlat = libm::sin((lat1.0 - lat2.0) / 2.0);
    let sin_half_dlong = libm::sin(delta_long.0 / 2.0);
    let haversine = sin_half_dlat * sin_half_dlat
        + libm::cos(lat1.0) * libm::cos(lat2.0) * sin_half_dlong * sin_half_dlong;
    Radians(2.0 * libm::asin(libm::sqrt(haversine)))
}

/// Calculate the great circle courses between two points.
/// * `lat1`, `lat2` - the latitudes of the points.
/// * `delta_long` - the difference in longitude from the first point to the second.
/// * `distance` - the great circle distance between the points.
///
/// returns the course from the first point to the second and
/// the course from the second point to the first.
#[must_use]
fn calculate_gc_courses(
    lat1: Radians,
    lat2: Radians,
    delta_long: Radians,
    distance: Radians,
) -> (Radians, Radians) {
    let (sin_lat1, cos_lat1) = libm::sincos(lat1.0);
    let (sin_lat2, cos_lat2) = libm::sincos(lat2.0);
    let (sin_d, cos_d) = libm::sincos(distance.0);

    let angle1 =
        libm::acos(((sin_lat2 - sin_lat1 * cos_d) / (sin_d * cos_lat1)).clamp(-1.0, 1.0));
    let angle2 =
        libm::acos(((sin_lat1 - sin_lat2 * cos_d) / (sin_d * cos_lat2)).clamp(-1.0, 1.0));

    if 0.0 < libm::sin(delta_long.0) {
        (Radians(angle1), Radians(TAU - angle2))
    } else {
        (Radians(TAU - angle1), Radians(angle2))
    }
}

/// Calculate the intersection point of two great circles.
/// * `a` - a point on the first great circle.
/// * `bearing_a` - the initial bearing of the first great circle from `a`.
/// * `b` - a point on the second great circle.
/// * `bearing_b` - the initial bearing of the second great circle from `b`.
///
/// returns the intersection point ahead of both points, or None if the points
/// are coincident, the great circles are coincident or they diverge.
/// # Examples
/// ```
/// use vincenty_wgs84::{Azimuth, GeodeticPoint};
/// use vincenty_wgs84::intersection::calculate_intersection;
///
/// let a = GeodeticPoint::from_degrees(0.0, -10.0);
/// let b = GeodeticPoint::from_degrees(-10.0, 20.0);
/// let result = calculate_intersection(&a, Azimuth::EAST, &b, Azimuth::NORTH);
/// assert!(result.is_some());
/// ```
#[must_use]
pub fn calculate_intersection(
    a: &GeodeticPoint,
    bearing_a: Azimuth,
    b: &GeodeticPoint,
    bearing_b: Azimuth,
) -> Option<GeodeticPoint> {
    let lat1 = a.lat().to_radians();
    let lon1 = a.lon().to_radians();
    let lat2 = b.lat().to_radians();
    let delta_long = b.lon().to_radians() - lon1;

    let d12 = calculate_gc_distance(lat1, lat2, delta_long);
    if d12.0 == 0.0 || d12.0.is_nan() {
        return None;
    }

    let (crs12, crs21) = calculate_gc_courses(lat1, lat2, delta_long, d12);
    let crs13 = bearing_a.to_radians().0;
    let crs23 = bearing_b.to_radians().0;

    let angle1 = wrap_pi(crs13 - crs12.0);
    let angle2 = wrap_pi(crs21.0 - crs23);
    let product = libm::sin(angle1) * libm::sin(angle2);
    // coincident or diverging great circles
    if product.is_nan() || product <= libm::sqrt(INTERSECTION_TOLERANCE) {
        return None;
    }

    let (sin_angle1, cos_angle1) = libm::sincos(libm::fabs(angle1));
    let (sin_angle2, cos_angle2) = libm::sincos(libm::fabs(angle2));
    let (sin_d12, cos_d12) = libm::sincos(d12.0);
    let angle3 = libm::acos(
        (-cos_angle1 * cos_angle2 + sin_angle1 * sin_angle2 * cos_d12).clamp(-1.0, 1.0),
    );
    let d13 = libm::atan2(
        sin_d12 * sin_angle1 * sin_angle2,
        cos_angle2 + cos_angle1 * libm::cos(angle3),
    );

    let (sin_lat1, cos_lat1) = libm::sincos(lat1.0);
    let (sin_d13, cos_d13) = libm::sincos(d13);
    let (sin_crs13, cos_crs13) = libm::sincos(crs13);
    let lat3 = libm::asin((sin_lat1 * cos_d13 + cos_lat1 * sin_d13 * cos_crs13).clamp(-1.0, 1.0));
    let delta_lon = libm::atan2(
        sin_crs13 * sin_d13 * cos_lat1,
        cos_d13 - sin_lat1 * libm::sin(lat3),
    );
    let lon3 = wrap_pi(lon1.0 + delta_lon);

    Some(GeodeticPoint::new(
        Latitude::from_radians(Radians(lat3)),
        Longitude::from_radians(Radians(lon3)),
    ))
}
