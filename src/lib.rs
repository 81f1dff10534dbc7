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

//! vincenty-wgs84
//!
//! A library for performing geodesic calculations on the
//! [WGS-84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf)
//! ellipsoid using Thaddeus Vincenty's
//! [inverse and direct formulae](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf).
//!
//! [WGS-84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf)
//! has become the de facto standard for satellite navigation since its adoption
//! by the Navstar Global Positioning System
//! ([GPS](https://www.gps.gov/systems/gps/performance/accuracy/))
//! and the USA making GPS available for civilian use in 1983.
//!
//! ## Geodesic navigation
//!
//! The shortest path between two points on the surface of an ellipsoid is a
//! [geodesic segment](https://en.wikipedia.org/wiki/Geodesics_on_an_ellipsoid).
//!
//! This library calculates:
//!
//! - the length and azimuths of a geodesic segment between two positions;
//! - the position at a distance along a geodesic from a start position;
//! - the closest point on a geodesic segment to a position;
//! - the intersection of two geodesic segments (on a spherical approximation);
//! - and conversions between geodetic and
//!   [ECEF](https://en.wikipedia.org/wiki/Earth-centered,_Earth-fixed_coordinate_system)
//!   coordinates.
//!
//! ## Design
//!
//! The `Ellipsoid` class represents an ellipsoid of revolution.
//! The static `WGS84_ELLIPSOID` represents the WGS-84 `Ellipsoid` which is used
//! by the `GeodesicSegment` `From` traits to create `GeodesicSegment`s on the WGS-84 `Ellipsoid`.
//!
//! `GeodeticPoint` is a latitude and longitude in degrees and `CartesianPoint`
//! is an ECEF position in metres.
//!
//! Vincenty's inverse method does not converge for some nearly antipodal
//! points. The `InverseSolution` returned by `geodesic::calculate_inverse`
//! reports such results as `Convergence::Degraded`.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees`,
//!   `Radians` and the `Validate` trait;
//! - [icao-units](https://crates.io/crates/icao-units) - to define `Metres`
//!   and `NauticalMiles`;
//! - [libm](https://crates.io/crates/libm) - to perform trigonometric
//!   calculations without the standard library;
//! - [lazy_static](https://crates.io/crates/lazy_static) - to define the
//!   `WGS84_ELLIPSOID` static;
//! - [thiserror](https://crates.io/crates/thiserror) - to define `Error`;
//! - [log](https://crates.io/crates/log) - to report degraded calculations.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;

pub mod angle;
pub mod cartesian;
pub mod ellipsoid;
pub mod error;
pub mod geodesic;
pub mod geodetic;
pub mod intersection;

pub use angle::{Azimuth, Latitude, Longitude};
pub use angle_sc::{is_within_tolerance, Degrees, Radians, Validate};
pub use cartesian::CartesianPoint;
pub use error::Error;
pub use geodesic::{Convergence, InverseSolution};
pub use geodetic::GeodeticPoint;
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,

    /// One minus the flattening ratio.
    one_minus_f: f64,
    /// The square of the Eccentricity of the ellipsoid.
    e_2: f64,
    /// The Eccentricity of the ellipsoid.
    e: f64,
    /// The square of the second Eccentricity of the ellipsoid.
    ep_2: f64,
}

/// Check that an equatorial radius is finite and positive.
fn validate_equatorial_radius(a: Metres) -> Result<(), Error> {
    if a.0.is_finite() && 0.0 < a.0 {
        Ok(())
    } else {
        Err(Error::InvalidEquatorialRadius(a.0))
    }
}

impl Ellipsoid {
    /// Constructor from valid parameters.
    #[must_use]
    fn from_parameters(a: Metres, b: Metres, f: f64) -> Self {
        let e_2 = ellipsoid::calculate_sq_eccentricity(f);
        Self {
            a,
            b,
            f,
            one_minus_f: 1.0 - f,
            e_2,
            e: libm::sqrt(e_2),
            ep_2: ellipsoid::calculate_sq_2nd_eccentricity(f),
        }
    }

    /// Constructor from the equatorial and polar radii.
    /// * `a` - the Semimajor axis (equatorial radius) of the ellipsoid.
    /// * `b` - the Semiminor axis (polar radius) of the ellipsoid.
    ///
    /// # Errors
    ///
    /// `Error::InvalidEquatorialRadius` if `a` is not finite and positive,
    /// `Error::InvalidPolarRadius` if `b` is not finite, positive and at most `a`.
    pub fn new(a: Metres, b: Metres) -> Result<Self, Error> {
        validate_equatorial_radius(a)?;
        if !(b.0.is_finite() && 0.0 < b.0 && b.0 <= a.0) {
            return Err(Error::InvalidPolarRadius {
                polar: b.0,
                equatorial: a.0,
            });
        }

        Ok(Self::from_parameters(
            a,
            b,
            ellipsoid::calculate_flattening(a, b),
        ))
    }

    /// Constructor from the equatorial radius and flattening.
    /// * `a` - the Semimajor axis (equatorial radius) of the ellipsoid.
    /// * `f` - the flattening ratio.
    ///
    /// # Errors
    ///
    /// `Error::InvalidEquatorialRadius` if `a` is not finite and positive,
    /// `Error::InvalidFlattening` unless `0 <= f < 1`.
    pub fn from_flattening(a: Metres, f: f64) -> Result<Self, Error> {
        validate_equatorial_radius(a)?;
        if !(0.0..1.0).contains(&f) {
            return Err(Error::InvalidFlattening(f));
        }

        Ok(Self::from_parameters(
            a,
            ellipsoid::calculate_minor_axis(a, f),
            f,
        ))
    }

    /// Construct an `Ellipsoid` with the WGS84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::from_parameters(
            ellipsoid::wgs84::A,
            ellipsoid::calculate_minor_axis(ellipsoid::wgs84::A, ellipsoid::wgs84::F),
            ellipsoid::wgs84::F,
        )
    }

    /// Construct an `Ellipsoid` with the GRS80 parameters.
    #[must_use]
    pub fn grs80() -> Self {
        Self::from_parameters(
            ellipsoid::grs80::A,
            ellipsoid::calculate_minor_axis(ellipsoid::grs80::A, ellipsoid::grs80::F),
            ellipsoid::grs80::F,
        )
    }

    /// Construct an `Ellipsoid` with the Clarke 1866 parameters.
    #[must_use]
    pub fn clarke_1866() -> Self {
        Self::from_parameters(
            ellipsoid::clarke1866::A,
            ellipsoid::clarke1866::B,
            ellipsoid::calculate_flattening(ellipsoid::clarke1866::A, ellipsoid::clarke1866::B),
        )
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// One minus the flattening ratio.
    #[must_use]
    pub const fn one_minus_f(&self) -> f64 {
        self.one_minus_f
    }

    /// The Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e(&self) -> f64 {
        self.e
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }

    /// Convert a geodetic latitude to a reduced latitude.
    #[must_use]
    pub fn calculate_reduced_latitude(&self, lat: Radians) -> Radians {
        ellipsoid::calculate_reduced_latitude(lat, self.one_minus_f)
    }

    /// The radius of curvature in the prime vertical at a geodetic latitude.
    #[must_use]
    pub fn calculate_prime_vertical_radius(&self, lat: Radians) -> Metres {
        ellipsoid::calculate_prime_vertical_radius(self.a, self.e_2, lat)
    }
}

lazy_static::lazy_static! {
    /// A static instance of the WGS-84 `Ellipsoid`.
    pub static ref WGS84_ELLIPSOID: Ellipsoid = Ellipsoid::wgs84();
}

/// Calculate the geodesic distance and initial azimuth between a pair of points.
/// * `a`, `b` - the start and end points.
/// * `ellipsoid` - the `Ellipsoid`.
/// # Examples
/// ```
/// use vincenty_wgs84::{calculate_distance_and_azimuth, GeodeticPoint, WGS84_ELLIPSOID};
///
/// let denver = GeodeticPoint::from_degrees(39.75, -105.0);
/// let okc = GeodeticPoint::from_degrees(35.0 + 26.0 / 60.0, -(97.0 + 28.0 / 60.0));
/// let (distance, azimuth) = calculate_distance_and_azimuth(&denver, &okc, &WGS84_ELLIPSOID);
/// assert!((distance.0 - 819_373.914).abs() < 1e-3);
/// assert!((azimuth.degrees() - 123.410_792).abs() < 1e-6);
/// ```
#[must_use]
pub fn calculate_distance_and_azimuth(
    a: &GeodeticPoint,
    b: &GeodeticPoint,
    ellipsoid: &Ellipsoid,
) -> (Metres, Azimuth) {
    let result = geodesic::calculate_inverse(a, b, ellipsoid);
    (result.distance(), result.azimuth())
}

/// Calculate the destination point from a start point, initial azimuth and distance.
/// * `a` - the start point.
/// * `azimuth` - the initial azimuth.
/// * `distance` - the distance along the geodesic.
/// * `ellipsoid` - the `Ellipsoid`.
#[must_use]
pub fn calculate_destination(
    a: &GeodeticPoint,
    azimuth: Azimuth,
    distance: Metres,
    ellipsoid: &Ellipsoid,
) -> GeodeticPoint {
    geodesic::calculate_direct(a, azimuth, distance, ellipsoid)
}

/// A geodesic segment between a pair of points on an `Ellipsoid`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodesicSegment<'a> {
    /// The start point.
    start: GeodeticPoint,
    /// The end point.
    end: GeodeticPoint,
    /// A reference to the underlying `Ellipsoid`.
    ellipsoid: &'a Ellipsoid,
}

impl Validate for GeodesicSegment<'_> {
    /// Test whether a `GeodesicSegment` is valid.
    /// I.e. whether both of its points are valid.
    fn is_valid(&self) -> bool {
        self.start.is_valid() && self.end.is_valid()
    }
}

impl<'a> GeodesicSegment<'a> {
    #[must_use]
    pub const fn new(start: GeodeticPoint, end: GeodeticPoint, ellipsoid: &'a Ellipsoid) -> Self {
        Self {
            start,
            end,
            ellipsoid,
        }
    }

    #[must_use]
    pub const fn start(&self) -> GeodeticPoint {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> GeodeticPoint {
        self.end
    }

    #[must_use]
    pub const fn ellipsoid(&self) -> &'a Ellipsoid {
        self.ellipsoid
    }

    /// The solution of the inverse geodesic problem between the start and end points.
    #[must_use]
    pub fn inverse(&self) -> InverseSolution {
        geodesic::calculate_inverse(&self.start, &self.end, self.ellipsoid)
    }

    /// The length of the geodesic segment.
    #[must_use]
    pub fn length(&self) -> Metres {
        self.inverse().distance()
    }

    /// The azimuth at the start point.
    #[must_use]
    pub fn azimuth(&self) -> Azimuth {
        self.inverse().azimuth()
    }

    /// The azimuth at the end point.
    #[must_use]
    pub fn final_azimuth(&self) -> Azimuth {
        self.inverse().final_azimuth()
    }

    /// The segment from the end point to the start point.
    #[must_use]
    pub const fn reverse(&self) -> Self {
        Self::new(self.end, self.start, self.ellipsoid)
    }

    /// The point half way along the geodesic segment.
    /// # Examples
    /// ```
    /// use vincenty_wgs84::{GeodesicSegment, GeodeticPoint};
    ///
    /// let a = GeodeticPoint::from_degrees(0.0, 0.0);
    /// let b = GeodeticPoint::from_degrees(0.0, 10.0);
    /// let segment = GeodesicSegment::from((&a, &b));
    /// assert_eq!(GeodeticPoint::from_degrees(0.0, 5.0), segment.mid_point());
    /// ```
    #[must_use]
    pub fn mid_point(&self) -> GeodeticPoint {
        let result = self.inverse();
        let half_length = Metres(0.5 * result.distance().0);
        self.start
            .destination(result.azimuth(), half_length, self.ellipsoid)
    }

    /// Calculate the closest point on the geodesic segment to a point.
    ///
    /// The along track distance is estimated on a sphere with the radius of
    /// the ellipsoid's Semimajor axis, from the ellipsoidal distance and
    /// azimuth from the start point to the point.
    /// * `point` - the point.
    ///
    /// returns the start point if the point is behind the start of the
    /// segment, the end point if it is beyond the end of the segment.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn closest_point(&self, point: &GeodeticPoint) -> GeodeticPoint {
        let to_point = self.start.distance_and_bearing(point, self.ellipsoid);
        if to_point.distance().0 == 0.0 {
            return self.start;
        }

        let segment = self.inverse();
        let delta_azimuth = (to_point.azimuth() - segment.azimuth()).to_radians().0;
        if libm::cos(delta_azimuth) < 0.0 {
            return self.start;
        }

        let radius = self.ellipsoid.a().0;
        let d13 = to_point.distance().0 / radius;
        let xtd = libm::asin(libm::sin(d13) * libm::sin(delta_azimuth));
        let atd = Metres(libm::acos((libm::cos(d13) / libm::cos(xtd)).clamp(-1.0, 1.0)) * radius);
        if segment.distance() <= atd {
            return self.end;
        }

        self.start
            .destination(segment.azimuth(), atd, self.ellipsoid)
    }

    /// The geodesic distance from a point to the closest point on the segment.
    #[must_use]
    pub fn distance_to(&self, point: &GeodeticPoint) -> Metres {
        point.distance_to(&self.closest_point(point), self.ellipsoid)
    }

    /// Whether a point is ahead of the start point and within the length of
    /// the segment.
    #[allow(clippy::float_cmp)]
    #[must_use]
    fn is_alongside(&self, point: &GeodeticPoint) -> bool {
        let to_point = self.start.distance_and_bearing(point, self.ellipsoid);
        if to_point.distance().0 == 0.0 {
            return true;
        }

        let segment = self.inverse();
        let delta_azimuth = (to_point.azimuth() - segment.azimuth()).to_radians().0;
        0.0 < libm::cos(delta_azimuth) && to_point.distance() <= segment.distance()
    }

    /// Calculate the intersection point of two geodesic segments.
    ///
    /// The intersection is calculated from the start points and azimuths of
    /// the segments on a sphere.
    /// * `other` - the other segment.
    ///
    /// returns the intersection point if it lies on both segments, None otherwise.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<GeodeticPoint> {
        let point = intersection::calculate_intersection(
            &self.start,
            self.azimuth(),
            &other.start,
            other.azimuth(),
        )?;
        if self.is_alongside(&point) && other.is_alongside(&point) {
            Some(point)
        } else {
            None
        }
    }
}

impl From<(&GeodeticPoint, &GeodeticPoint)> for GeodesicSegment<'_> {
    /// Construct a `GeodesicSegment` on the WGS-84 `Ellipsoid`.
    fn from(params: (&GeodeticPoint, &GeodeticPoint)) -> Self {
        Self::new(*params.0, *params.1, &WGS84_ELLIPSOID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;
    use core::mem::size_of;

    #[test]
    fn test_ellipsoid_wgs84() {
        let geoid = Ellipsoid::wgs84();
        assert_eq!(ellipsoid::wgs84::A, geoid.a());
        assert_eq!(ellipsoid::wgs84::F, geoid.f());
        assert_eq!(
            ellipsoid::calculate_minor_axis(ellipsoid::wgs84::A, ellipsoid::wgs84::F),
            geoid.b()
        );
        assert_eq!(1.0 - ellipsoid::wgs84::F, geoid.one_minus_f());
        assert_eq!(
            ellipsoid::calculate_sq_eccentricity(ellipsoid::wgs84::F),
            geoid.e_2()
        );
        assert_eq!(
            ellipsoid::calculate_sq_2nd_eccentricity(ellipsoid::wgs84::F),
            geoid.ep_2()
        );
        assert!(is_within_tolerance(0.081_819_190_842_6, geoid.e(), 1e-12));

        assert_eq!(geoid, *WGS84_ELLIPSOID);
    }

    #[test]
    fn test_ellipsoid_grs80_and_clarke_1866() {
        let grs80 = Ellipsoid::grs80();
        assert_eq!(ellipsoid::grs80::A, grs80.a());
        assert!(is_within_tolerance(6_356_752.314_140_347, grs80.b().0, 1e-6));
        assert_ne!(*WGS84_ELLIPSOID, grs80);

        let clarke = Ellipsoid::clarke_1866();
        assert_eq!(ellipsoid::clarke1866::A, clarke.a());
        assert_eq!(ellipsoid::clarke1866::B, clarke.b());
        assert!(is_within_tolerance(1.0 / 294.978_698_2, clarke.f(), 1e-12));
    }

    #[test]
    fn test_ellipsoid_new() {
        let geoid = Ellipsoid::new(Metres(6_378_137.0), Metres(6_356_752.314_245_179)).unwrap();
        assert!(is_within_tolerance(ellipsoid::wgs84::F, geoid.f(), 1e-15));
        assert!(is_within_tolerance(WGS84_ELLIPSOID.e(), geoid.e(), 1e-12));

        // a sphere
        let sphere = Ellipsoid::new(Metres(6_371_000.0), Metres(6_371_000.0)).unwrap();
        assert_eq!(0.0, sphere.f());
        assert_eq!(0.0, sphere.e());

        assert_eq!(
            Err(Error::InvalidEquatorialRadius(0.0)),
            Ellipsoid::new(Metres(0.0), Metres(1.0))
        );
        assert!(matches!(
            Ellipsoid::new(Metres(f64::NAN), Metres(1.0)),
            Err(Error::InvalidEquatorialRadius(_))
        ));
        assert_eq!(
            Err(Error::InvalidPolarRadius {
                polar: 7_000_000.0,
                equatorial: 6_378_137.0
            }),
            Ellipsoid::new(Metres(6_378_137.0), Metres(7_000_000.0))
        );
        assert!(matches!(
            Ellipsoid::new(Metres(6_378_137.0), Metres(-1.0)),
            Err(Error::InvalidPolarRadius { .. })
        ));
        assert!(matches!(
            Ellipsoid::new(Metres(6_378_137.0), Metres(f64::INFINITY)),
            Err(Error::InvalidPolarRadius { .. })
        ));
    }

    #[test]
    fn test_ellipsoid_from_flattening() {
        let geoid = Ellipsoid::from_flattening(ellipsoid::wgs84::A, ellipsoid::wgs84::F).unwrap();
        assert_eq!(*WGS84_ELLIPSOID, geoid);

        assert_eq!(
            Err(Error::InvalidFlattening(1.0)),
            Ellipsoid::from_flattening(ellipsoid::wgs84::A, 1.0)
        );
        assert_eq!(
            Err(Error::InvalidFlattening(-0.1)),
            Ellipsoid::from_flattening(ellipsoid::wgs84::A, -0.1)
        );
        assert_eq!(
            Err(Error::InvalidEquatorialRadius(f64::INFINITY)),
            Ellipsoid::from_flattening(Metres(f64::INFINITY), 0.0)
        );
    }

    #[test]
    fn test_ellipsoid_calculations() {
        let lat = Radians(45.0_f64.to_radians());
        let beta = WGS84_ELLIPSOID.calculate_reduced_latitude(lat);
        assert!(beta.0 < lat.0);
        assert_eq!(
            ellipsoid::calculate_reduced_latitude(lat, WGS84_ELLIPSOID.one_minus_f()),
            beta
        );

        assert_eq!(
            WGS84_ELLIPSOID.a(),
            WGS84_ELLIPSOID.calculate_prime_vertical_radius(Radians(0.0))
        );
    }

    #[test]
    fn test_ellipsoid_traits() {
        let geoid = Ellipsoid::wgs84();

        let geoid_clone = geoid.clone();
        assert!(geoid_clone == geoid);

        println!("Ellipsoid: {geoid:?}");
    }

    #[test]
    fn test_calculate_distance_and_azimuth() {
        let a = GeodeticPoint::from_degrees(42.0, 29.0);
        let b = GeodeticPoint::from_degrees(39.0, -77.0);

        let (distance, azimuth) = calculate_distance_and_azimuth(&a, &b, &WGS84_ELLIPSOID);
        assert!(is_within_tolerance(8_339_863.136_024_5, distance.0, 1e-6));
        assert!(is_within_tolerance(309.306_246_959_031_5, azimuth.degrees(), 1e-9));

        let (distance, azimuth) = calculate_distance_and_azimuth(&a, &a, &WGS84_ELLIPSOID);
        assert_eq!(Metres(0.0), distance);
        assert_eq!(Azimuth::NORTH, azimuth);
    }

    #[test]
    fn test_calculate_destination() {
        let a = GeodeticPoint::from_degrees(42.0, 29.0);

        let result = calculate_destination(
            &a,
            Azimuth::new(309.306_246_959_031_5),
            Metres(8_339_863.136_024_5),
            &WGS84_ELLIPSOID,
        );
        assert!(result.eq_with_precision(&GeodeticPoint::from_degrees(39.0, -77.0), 9));
    }

    #[test]
    fn test_geodesic_segment() {
        let a = GeodeticPoint::from_degrees(0.0, 0.0);
        let b = GeodeticPoint::from_degrees(0.0, 10.0);
        let segment = GeodesicSegment::from((&a, &b));
        assert!(segment.is_valid());
        assert_eq!(a, segment.start());
        assert_eq!(b, segment.end());
        assert_eq!(*WGS84_ELLIPSOID, *segment.ellipsoid());

        assert!(is_within_tolerance(1_113_194.907_932_264, segment.length().0, 1e-6));
        assert!(is_within_tolerance(90.0, segment.azimuth().degrees(), 1e-9));
        assert!(is_within_tolerance(90.0, segment.final_azimuth().degrees(), 1e-9));
        assert_eq!(Convergence::Converged, segment.inverse().convergence());

        let reverse = segment.reverse();
        assert_eq!(b, reverse.start());
        assert_eq!(a, reverse.end());
        assert!(is_within_tolerance(segment.length().0, reverse.length().0, 1e-6));
        assert!(is_within_tolerance(270.0, reverse.azimuth().degrees(), 1e-9));

        let invalid = GeodesicSegment::new(a, GeodeticPoint::INVALID, &WGS84_ELLIPSOID);
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_geodesic_segment_mid_point() {
        let a = GeodeticPoint::from_degrees(40.0, -10.0);
        let b = GeodeticPoint::from_degrees(50.0, 10.0);
        let segment = GeodesicSegment::from((&a, &b));

        let mid_point = segment.mid_point();
        assert!(is_within_tolerance(45.438_810_119_3, mid_point.lat().degrees(), 1e-9));
        assert!(is_within_tolerance(-0.880_909_155_3, mid_point.lon().degrees(), 1e-9));

        let length = segment.length();
        assert!(is_within_tolerance(
            0.5 * length.0,
            a.distance_to(&mid_point, &WGS84_ELLIPSOID).0,
            1e-3
        ));
    }

    #[test]
    fn test_geodesic_segment_closest_point() {
        let a = GeodeticPoint::from_degrees(0.0, 0.0);
        let b = GeodeticPoint::from_degrees(0.0, 10.0);
        let segment = GeodesicSegment::from((&a, &b));

        // abeam
        let point = GeodeticPoint::from_degrees(1.0, 5.0);
        let result = segment.closest_point(&point);
        assert!(is_within_tolerance(0.0, result.lat().degrees(), 1e-9));
        assert!(is_within_tolerance(4.999_996_625_5, result.lon().degrees(), 1e-9));
        assert!(is_within_tolerance(110_574.388_558_598, segment.distance_to(&point).0, 1e-3));

        // behind the start
        let point = GeodeticPoint::from_degrees(-2.0, -3.0);
        assert_eq!(a, segment.closest_point(&point));
        assert!(is_within_tolerance(400_487.621_661_039, segment.distance_to(&point).0, 1e-3));

        // beyond the end
        let point = GeodeticPoint::from_degrees(3.0, 15.0);
        assert_eq!(b, segment.closest_point(&point));
        assert!(is_within_tolerance(647_735.565_432_103, segment.distance_to(&point).0, 1e-3));

        // the start point
        assert_eq!(a, segment.closest_point(&a));
        assert_eq!(Metres(0.0), segment.distance_to(&a));
    }

    #[test]
    fn test_geodesic_segment_closest_point_oblique() {
        let a = GeodeticPoint::from_degrees(40.0, -10.0);
        let b = GeodeticPoint::from_degrees(50.0, 10.0);
        let segment = GeodesicSegment::new(a, b, &WGS84_ELLIPSOID);

        let point = GeodeticPoint::from_degrees(47.0, -2.0);
        let result = segment.closest_point(&point);
        assert!(is_within_tolerance(45.611_060_014_8, result.lat().degrees(), 1e-9));
        assert!(is_within_tolerance(-0.539_591_745_4, result.lon().degrees(), 1e-9));
        assert!(is_within_tolerance(191_025.114_681_253, segment.distance_to(&point).0, 1e-3));
    }

    #[test]
    fn test_geodesic_segment_intersection() {
        let a = GeodeticPoint::from_degrees(0.0, -10.0);
        let b = GeodeticPoint::from_degrees(0.0, 30.0);
        let equator = GeodesicSegment::from((&a, &b));

        let c = GeodeticPoint::from_degrees(-10.0, 20.0);
        let d = GeodeticPoint::from_degrees(10.0, 20.0);
        let meridian = GeodesicSegment::from((&c, &d));

        let point = equator.intersection(&meridian).unwrap();
        assert!(is_within_tolerance(0.0, point.lat().degrees(), 1e-9));
        assert!(is_within_tolerance(20.0, point.lon().degrees(), 1e-9));

        let point = meridian.intersection(&equator).unwrap();
        assert!(is_within_tolerance(0.0, point.lat().degrees(), 1e-9));
        assert!(is_within_tolerance(20.0, point.lon().degrees(), 1e-9));

        // the meridian segment is North of the Equator
        let e = GeodeticPoint::from_degrees(5.0, 20.0);
        let north = GeodesicSegment::from((&e, &d));
        assert!(equator.intersection(&north).is_none());

        // the meridian is beyond the end of the equator segment
        let f = GeodeticPoint::from_degrees(0.0, 15.0);
        let short = GeodesicSegment::from((&a, &f));
        assert!(short.intersection(&meridian).is_none());

        // parallel segments
        let g = GeodeticPoint::from_degrees(0.0, 40.0);
        let parallel = GeodesicSegment::from((&b, &g));
        assert!(equator.intersection(&parallel).is_none());
    }

    #[test]
    fn test_geodesic_segment_traits() {
        let a = GeodeticPoint::from_degrees(0.0, 0.0);
        let b = GeodeticPoint::from_degrees(0.0, 10.0);
        let segment = GeodesicSegment::from((&a, &b));

        let segment_clone = segment;
        assert!(segment_clone == segment);

        println!("GeodesicSegment: {segment:?}");
        println!("GeodesicSegment size: {:?}", size_of::<GeodesicSegment>());
    }
}
