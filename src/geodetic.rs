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

//! The geodetic module contains the `GeodeticPoint` type: a position on the
//! surface of an ellipsoid given by its geodetic latitude and longitude.

use crate::angle::round_to_decimals;
use crate::{
    geodesic, intersection, Azimuth, CartesianPoint, Ellipsoid, InverseSolution, Latitude,
    Longitude, Metres, Validate,
};
use core::fmt;

/// A geodetic position: a `Latitude` and a `Longitude`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeodeticPoint {
    lat: Latitude,
    lon: Longitude,
}

impl Validate for GeodeticPoint {
    /// Test whether a `GeodeticPoint` is valid.
    /// I.e. whether both the latitude and longitude are normalized.
    fn is_valid(&self) -> bool {
        self.lat.is_valid() && self.lon.is_valid()
    }
}

impl GeodeticPoint {
    /// An invalid `GeodeticPoint`.
    pub const INVALID: Self = Self {
        lat: Latitude::INVALID,
        lon: Longitude::INVALID,
    };

    #[must_use]
    pub const fn new(lat: Latitude, lon: Longitude) -> Self {
        Self { lat, lon }
    }

    /// Construct a `GeodeticPoint` from a latitude and longitude in degrees.
    /// # Examples
    /// ```
    /// use vincenty_wgs84::GeodeticPoint;
    ///
    /// let denver = GeodeticPoint::from_degrees(39.75, -105.0);
    /// assert_eq!(39.75, denver.lat().degrees());
    /// assert_eq!(-105.0, denver.lon().degrees());
    /// ```
    #[must_use]
    pub const fn from_degrees(lat: f64, lon: f64) -> Self {
        Self::new(Latitude::new(lat), Longitude::new(lon))
    }

    #[must_use]
    pub const fn lat(&self) -> Latitude {
        self.lat
    }

    #[must_use]
    pub const fn lon(&self) -> Longitude {
        self.lon
    }

    /// Whether the latitude or longitude is NaN.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        self.lat.is_invalid() || self.lon.is_invalid()
    }

    /// Whether both the latitude and longitude are finite, i.e. neither NaN
    /// nor infinite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.lat.degrees().is_finite() && self.lon.degrees().is_finite()
    }

    /// Normalize the latitude and longitude.
    ///
    /// A latitude past a pole is reflected back over it and the longitude
    /// moved to the opposite meridian.
    /// # Examples
    /// ```
    /// use vincenty_wgs84::GeodeticPoint;
    ///
    /// let point = GeodeticPoint::from_degrees(100.0, 0.0).normalize();
    /// assert_eq!(GeodeticPoint::from_degrees(80.0, 180.0), point);
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Self {
        let lat = self.lat.degrees();
        let over_pole =
            lat.is_finite() && 90.0 < libm::fabs(crate::angle::wrap_180(lat));
        let lon = if over_pole {
            self.lon + Longitude::ANTIMERIDIAN
        } else {
            self.lon
        };
        Self::new(self.lat.normalize(), lon.normalize())
    }

    /// Whether the latitudes and longitudes are equal when rounded to a
    /// number of decimal places of a degree.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn eq_with_precision(&self, other: &Self, decimals: i32) -> bool {
        round_to_decimals(self.lat.degrees(), decimals)
            == round_to_decimals(other.lat.degrees(), decimals)
            && round_to_decimals(self.lon.degrees(), decimals)
                == round_to_decimals(other.lon.degrees(), decimals)
    }

    /// Calculate the geodesic distance and azimuths to another point.
    #[must_use]
    pub fn distance_and_bearing(&self, other: &Self, ellipsoid: &Ellipsoid) -> InverseSolution {
        geodesic::calculate_inverse(self, other, ellipsoid)
    }

    /// Calculate the geodesic distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: &Self, ellipsoid: &Ellipsoid) -> Metres {
        self.distance_and_bearing(other, ellipsoid).distance()
    }

    /// Calculate the initial azimuth of the geodesic to another point.
    #[must_use]
    pub fn bearing_to(&self, other: &Self, ellipsoid: &Ellipsoid) -> Azimuth {
        self.distance_and_bearing(other, ellipsoid).azimuth()
    }

    /// Calculate the point at a distance along the geodesic with the given
    /// initial azimuth.
    #[must_use]
    pub fn destination(&self, azimuth: Azimuth, distance: Metres, ellipsoid: &Ellipsoid) -> Self {
        geodesic::calculate_direct(self, azimuth, distance, ellipsoid)
    }

    /// Convert the point at an altitude above the ellipsoid to Earth Centred,
    /// Earth Fixed coordinates.
    #[must_use]
    pub fn to_cartesian(&self, altitude: Metres, ellipsoid: &Ellipsoid) -> CartesianPoint {
        CartesianPoint::from_geodetic(self, altitude, ellipsoid)
    }

    /// Calculate the intersection of the great circle from this point on
    /// `bearing` with the great circle from `other` on `other_bearing`.
    ///
    /// returns None if the great circles do not intersect ahead of both points.
    #[must_use]
    pub fn intersection(
        &self,
        bearing: Azimuth,
        other: &Self,
        other_bearing: Azimuth,
    ) -> Option<Self> {
        intersection::calculate_intersection(self, bearing, other, other_bearing)
    }
}

impl From<(Latitude, Longitude)> for GeodeticPoint {
    fn from(value: (Latitude, Longitude)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl fmt::Display for GeodeticPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(precision) = f.precision() {
            write!(f, "{:.*}, {:.*}", precision, self.lat, precision, self.lon)
        } else {
            write!(f, "{}, {}", self.lat, self.lon)
        }
    }
}
