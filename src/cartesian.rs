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

//! The cartesian module contains the `CartesianPoint` type: a position in
//! [Earth Centred, Earth Fixed](https://en.wikipedia.org/wiki/Earth-centered,_Earth-fixed_coordinate_system)
//! (ECEF) coordinates.
//!
//! The origin is the centre of the ellipsoid, the x axis passes through
//! the intersection of the Equator and the prime meridian, the y axis
//! through the Equator at 90° East and the z axis through the North pole.
//!
//! Geodetic coordinates are converted to ECEF coordinates with the standard
//! closed formulae. ECEF coordinates are converted back to geodetic
//! coordinates with Bowring's method.

#![allow(clippy::many_single_char_names, clippy::suboptimal_flops)]

use crate::{Ellipsoid, GeodeticPoint, Latitude, Longitude, Metres, Radians};
use core::f64::consts::TAU;
use core::fmt;

/// The distance, in metres, from the polar axis within which the altitude
/// of a point is measured along the axis.
const POLAR_AXIS_DISTANCE: f64 = 1.0;

/// A position in Earth Centred, Earth Fixed coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CartesianPoint {
    x: Metres,
    y: Metres,
    z: Metres,
}

impl CartesianPoint {
    #[must_use]
    pub const fn new(x: Metres, y: Metres, z: Metres) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub const fn x(&self) -> Metres {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> Metres {
        self.y
    }

    #[must_use]
    pub const fn z(&self) -> Metres {
        self.z
    }

    /// Convert a geodetic point at an altitude above the ellipsoid to
    /// Earth Centred, Earth Fixed coordinates.
    /// * `point` - the geodetic point.
    /// * `altitude` - the height above the surface of the ellipsoid.
    /// * `ellipsoid` - the `Ellipsoid`.
    /// # Examples
    /// ```
    /// use vincenty_wgs84::{CartesianPoint, GeodeticPoint, Metres, WGS84_ELLIPSOID};
    ///
    /// let point = GeodeticPoint::from_degrees(0.0, 0.0);
    /// let result = CartesianPoint::from_geodetic(&point, Metres(0.0), &WGS84_ELLIPSOID);
    /// assert_eq!(Metres(6_378_137.0), result.x());
    /// ```
    #[must_use]
    pub fn from_geodetic(point: &GeodeticPoint, altitude: Metres, ellipsoid: &Ellipsoid) -> Self {
        let lat = point.lat().to_radians();
        let (sin_lon, cos_lon) = libm::sincos(point.lon().to_radians().0);
        let (sin_lat, cos_lat) = libm::sincos(lat.0);

        let n = ellipsoid.calculate_prime_vertical_radius(lat).0;
        let h = altitude.0;
        Self::new(
            Metres((n + h) * cos_lat * cos_lon),
            Metres((n + h) * cos_lat * sin_lon),
            Metres(((1.0 - ellipsoid.e_2()) * n + h) * sin_lat),
        )
    }

    /// Convert the point to geodetic coordinates using Bowring's method.
    /// * `ellipsoid` - the `Ellipsoid`.
    ///
    /// Close to the centre of the ellipsoid the normal to the surface is not
    /// unique; the latitude is normalized into the range -90° <= lat <= 90°.
    ///
    /// returns the geodetic point and its altitude above the ellipsoid.
    #[must_use]
    pub fn to_geodetic(&self, ellipsoid: &Ellipsoid) -> (GeodeticPoint, Metres) {
        let (x, y, z) = (self.x.0, self.y.0, self.z.0);
        let a = ellipsoid.a().0;
        let b = ellipsoid.b().0;

        let p = libm::hypot(x, y);
        let theta = libm::atan2(a * z, b * p);
        let (sin_theta, cos_theta) = libm::sincos(theta);
        let lat = Latitude::from_radians(Radians(libm::atan2(
            z + ellipsoid.ep_2() * b * sin_theta * sin_theta * sin_theta,
            p - ellipsoid.e_2() * a * cos_theta * cos_theta * cos_theta,
        )))
        .normalize();

        let mut lon = libm::atan2(y, x);
        if lon < 0.0 {
            lon += TAU;
        }

        let altitude = if libm::fabs(x) < POLAR_AXIS_DISTANCE && libm::fabs(y) < POLAR_AXIS_DISTANCE
        {
            libm::fabs(z) - b
        } else {
            let lat = lat.to_radians();
            let n = ellipsoid.calculate_prime_vertical_radius(lat).0;
            p / libm::cos(lat.0) - n
        };

        let point = GeodeticPoint::new(lat, Longitude::from_radians(Radians(lon)).normalize());
        (point, Metres(altitude))
    }

    /// The straight line distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> Metres {
        let dx = self.x.0 - other.x.0;
        let dy = self.y.0 - other.y.0;
        let dz = self.z.0 - other.z.0;
        Metres(libm::sqrt(dx * dx + dy * dy + dz * dz))
    }
}

/// Write a distance in metres, honouring any requested precision.
fn write_metres(f: &mut fmt::Formatter<'_>, value: Metres) -> fmt::Result {
    if let Some(precision) = f.precision() {
        write!(f, "{:.precision$}m", value.0)
    } else {
        write!(f, "{}m", value.0)
    }
}

impl fmt::Display for CartesianPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_metres(f, self.x)?;
        f.write_str(", ")?;
        write_metres(f, self.y)?;
        f.write_str(", ")?;
        write_metres(f, self.z)?;
        f.write_str(")")
    }
}
