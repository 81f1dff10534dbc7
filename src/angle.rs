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

//! The angle module contains the angular types used by the library.
//!
//! `Latitude`, `Longitude` and `Azimuth` are values in degrees, built on the
//! `angle_sc` `Degrees` and `Radians` newtypes, with their own normalisation
//! rules:
//! - `Latitude`: -90° <= value <= 90°;
//! - `Longitude`: -180° <= value <= 180°;
//! - `Azimuth`: 0° <= value < 360°.
//!
//! NaN represents an invalid or unspecified value and ±infinity an infinite
//! value; both propagate through arithmetic and are left unchanged by
//! `normalize`.

#![allow(clippy::float_cmp)]

use angle_sc::{Degrees, Radians, Validate};
use core::fmt;
use core::ops::{Add, Neg, Sub};

/// Round a value to a number of decimal places.
#[must_use]
pub(crate) fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let scale = libm::pow(10.0, f64::from(decimals));
    libm::round(value * scale) / scale
}

/// Wrap a value in degrees into the range -180° <= value < 180°.
#[must_use]
pub(crate) fn wrap_180(degrees: f64) -> f64 {
    degrees - 360.0 * libm::floor((degrees + 180.0) / 360.0)
}

/// Write an angle in degrees with an optional hemisphere suffix,
/// honouring any requested precision.
fn write_degrees(f: &mut fmt::Formatter<'_>, value: f64, suffix: &str) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if let Some(precision) = f.precision() {
        write!(f, "{value:.precision$}°{suffix}")
    } else {
        write!(f, "{value}°{suffix}")
    }
}

/// Implement the members shared by `Latitude`, `Longitude` and `Azimuth`.
macro_rules! impl_angle_value {
    ($t:ident) => {
        impl $t {
            /// Construct from a value in degrees, the value is not normalized.
            #[must_use]
            pub const fn new(degrees: f64) -> Self {
                Self(degrees)
            }

            /// Construct from a value in radians, the value is not normalized.
            #[must_use]
            pub const fn from_radians(angle: Radians) -> Self {
                Self(angle.0.to_degrees())
            }

            /// The value in degrees.
            #[must_use]
            pub const fn degrees(self) -> f64 {
                self.0
            }

            /// The value in radians.
            #[must_use]
            pub const fn to_radians(self) -> Radians {
                Radians(self.0.to_radians())
            }

            /// Whether the value is NaN, i.e. invalid or unspecified.
            #[must_use]
            pub const fn is_invalid(self) -> bool {
                self.0.is_nan()
            }

            /// Whether the value is positive or negative infinity.
            #[must_use]
            pub const fn is_infinity(self) -> bool {
                self.0.is_infinite()
            }

            /// The value rounded to a number of decimal places.
            /// * `decimals` - the number of decimal places.
            #[must_use]
            pub fn round(self, decimals: i32) -> Self {
                Self(round_to_decimals(self.0, decimals))
            }
        }

        impl From<Degrees> for $t {
            fn from(a: Degrees) -> Self {
                Self(a.0)
            }
        }

        impl From<$t> for Degrees {
            fn from(a: $t) -> Self {
                Self(a.0)
            }
        }

        impl From<$t> for Radians {
            fn from(a: $t) -> Self {
                a.to_radians()
            }
        }

        impl Add for $t {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                Self(self.0 + other.0)
            }
        }

        impl Sub for $t {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                Self(self.0 - other.0)
            }
        }

        impl Neg for $t {
            type Output = Self;

            fn neg(self) -> Self {
                Self(-self.0)
            }
        }
    };
}

/// A latitude in degrees, positive North of the Equator.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Latitude(f64);

impl_angle_value!(Latitude);

impl Latitude {
    /// The Equator.
    pub const EQUATOR: Self = Self(0.0);
    /// The North pole.
    pub const NORTH_POLE: Self = Self(90.0);
    /// The South pole.
    pub const SOUTH_POLE: Self = Self(-90.0);
    /// An invalid `Latitude`.
    pub const INVALID: Self = Self(f64::NAN);

    /// Whether -90° <= latitude <= 90°.
    #[must_use]
    pub fn is_normalized(self) -> bool {
        (-90.0..=90.0).contains(&self.0)
    }

    /// Normalize the latitude into the range -90° <= latitude <= 90°.
    ///
    /// A latitude past a pole is reflected back over it, e.g. 100° becomes 80°.
    /// # Examples
    /// ```
    /// use vincenty_wgs84::Latitude;
    ///
    /// assert_eq!(Latitude::new(80.0), Latitude::new(100.0).normalize());
    /// assert_eq!(Latitude::new(-10.0), Latitude::new(190.0).normalize());
    /// ```
    #[must_use]
    pub fn normalize(self) -> Self {
        if !self.0.is_finite() || self.is_normalized() {
            return self;
        }

        let value = wrap_180(self.0);
        if 90.0 < value {
            Self(180.0 - value)
        } else if value < -90.0 {
            Self(-180.0 - value)
        } else {
            Self(value)
        }
    }

}

impl Validate for Latitude {
    /// Whether the latitude is normalized; NaN and infinity are not valid.
    fn is_valid(&self) -> bool {
        self.is_normalized()
    }
}

impl fmt::Display for Latitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hemisphere = if self.0 < 0.0 { "S" } else { "N" };
        write_degrees(f, libm::fabs(self.0), hemisphere)
    }
}

/// A longitude in degrees, positive East of the prime meridian.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Longitude(f64);

impl_angle_value!(Longitude);

impl Longitude {
    /// The prime meridian.
    pub const PRIME_MERIDIAN: Self = Self(0.0);
    /// The antimeridian.
    pub const ANTIMERIDIAN: Self = Self(180.0);
    /// An invalid `Longitude`.
    pub const INVALID: Self = Self(f64::NAN);

    /// Whether -180° <= longitude <= 180°.
    #[must_use]
    pub fn is_normalized(self) -> bool {
        (-180.0..=180.0).contains(&self.0)
    }

    /// Normalize the longitude into the range -180° <= longitude <= 180°.
    ///
    /// Longitudes outside of the range are wrapped modulo 360° into the
    /// range -180° <= longitude < 180°.
    #[must_use]
    pub fn normalize(self) -> Self {
        if !self.0.is_finite() || self.is_normalized() {
            self
        } else {
            Self(wrap_180(self.0))
        }
    }
}

impl Validate for Longitude {
    /// Whether the longitude is normalized; NaN and infinity are not valid.
    fn is_valid(&self) -> bool {
        self.is_normalized()
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hemisphere = if self.0 < 0.0 { "W" } else { "E" };
        write_degrees(f, libm::fabs(self.0), hemisphere)
    }
}

/// An azimuth (bearing) in degrees, clockwise from North.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Azimuth(f64);

impl_angle_value!(Azimuth);

impl Azimuth {
    /// Due North.
    pub const NORTH: Self = Self(0.0);
    /// Due East.
    pub const EAST: Self = Self(90.0);
    /// Due South.
    pub const SOUTH: Self = Self(180.0);
    /// Due West.
    pub const WEST: Self = Self(270.0);
    /// An invalid `Azimuth`.
    pub const INVALID: Self = Self(f64::NAN);

    /// Whether 0° <= azimuth < 360°.
    #[must_use]
    pub fn is_normalized(self) -> bool {
        (0.0..360.0).contains(&self.0)
    }

    /// Normalize the azimuth into the range 0° <= azimuth < 360°.
    /// # Examples
    /// ```
    /// use vincenty_wgs84::Azimuth;
    ///
    /// assert_eq!(Azimuth::new(270.0), Azimuth::new(-90.0).normalize());
    /// assert_eq!(Azimuth::NORTH, Azimuth::new(720.0).normalize());
    /// ```
    #[must_use]
    pub fn normalize(self) -> Self {
        if !self.0.is_finite() || self.is_normalized() {
            return self;
        }

        let value = self.0 - 360.0 * libm::floor(self.0 / 360.0);
        // a tiny negative value rounds up to exactly 360°
        if 360.0 <= value {
            Self(0.0)
        } else {
            Self(value)
        }
    }

    /// The opposite azimuth, normalized.
    #[must_use]
    pub fn mirror(self) -> Self {
        Self(self.0 + 180.0).normalize()
    }
}

impl Validate for Azimuth {
    /// Whether the azimuth is normalized; NaN and infinity are not valid.
    fn is_valid(&self) -> bool {
        self.is_normalized()
    }
}

impl fmt::Display for Azimuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_degrees(f, self.0, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_round_to_decimals() {
        assert_eq!(35.433_333_333_3, round_to_decimals(35.433_333_333_333_33, 10));
        assert_eq!(-97.466_666_666_7, round_to_decimals(-97.466_666_666_666_67, 10));
        assert_eq!(1.0, round_to_decimals(0.999_999_999_999_9, 10));
        assert!(round_to_decimals(f64::NAN, 10).is_nan());
    }

    #[test]
    fn test_wrap_180() {
        assert_eq!(0.0, wrap_180(360.0));
        assert_eq!(-180.0, wrap_180(180.0));
        assert_eq!(170.0, wrap_180(-190.0));
        assert_eq!(-170.0, wrap_180(190.0));
        assert_eq!(10.0, wrap_180(730.0));
    }

    #[test]
    fn test_latitude_normalize() {
        assert_eq!(Latitude::new(45.0), Latitude::new(45.0).normalize());
        assert_eq!(Latitude::NORTH_POLE, Latitude::new(90.0).normalize());
        assert_eq!(Latitude::new(80.0), Latitude::new(100.0).normalize());
        assert_eq!(Latitude::new(-80.0), Latitude::new(-100.0).normalize());
        assert_eq!(Latitude::new(-10.0), Latitude::new(190.0).normalize());
        assert_eq!(Latitude::new(10.0), Latitude::new(370.0).normalize());

        assert!(Latitude::INVALID.normalize().is_invalid());
        assert!(Latitude::new(f64::INFINITY).normalize().is_infinity());

        assert!(Latitude::new(-90.0).is_valid());
        assert!(!Latitude::new(90.5).is_valid());
        assert!(!Latitude::INVALID.is_valid());
    }

    #[test]
    fn test_longitude_normalize() {
        assert_eq!(Longitude::new(-105.0), Longitude::new(-105.0).normalize());
        assert_eq!(Longitude::ANTIMERIDIAN, Longitude::new(180.0).normalize());
        assert_eq!(Longitude::new(-180.0), Longitude::new(-180.0).normalize());
        assert_eq!(Longitude::new(-170.0), Longitude::new(190.0).normalize());
        assert_eq!(Longitude::new(170.0), Longitude::new(-190.0).normalize());
        assert_eq!(Longitude::new(-90.0), Longitude::new(270.0).normalize());
        assert_eq!(Longitude::new(-180.0), Longitude::new(540.0).normalize());

        assert!(Longitude::INVALID.normalize().is_invalid());
        assert!(Longitude::new(f64::NEG_INFINITY).normalize().is_infinity());

        assert!(Longitude::new(180.0).is_valid());
        assert!(!Longitude::new(181.0).is_valid());
    }

    #[test]
    fn test_azimuth_normalize() {
        assert_eq!(Azimuth::NORTH, Azimuth::new(0.0).normalize());
        assert_eq!(Azimuth::NORTH, Azimuth::new(360.0).normalize());
        assert_eq!(Azimuth::WEST, Azimuth::new(-90.0).normalize());
        assert_eq!(Azimuth::new(10.0), Azimuth::new(730.0).normalize());
        assert_eq!(Azimuth::NORTH, Azimuth::new(-1.0e-20).normalize());
        assert!(Azimuth::INVALID.normalize().is_invalid());

        assert!(Azimuth::new(359.9).is_valid());
        assert!(!Azimuth::new(360.0).is_valid());
        assert!(!Azimuth::new(-0.1).is_valid());
    }

    #[test]
    fn test_azimuth_mirror() {
        assert_eq!(Azimuth::SOUTH, Azimuth::NORTH.mirror());
        assert_eq!(Azimuth::new(56.5), Azimuth::new(236.5).mirror());

        assert!(Azimuth::INVALID.mirror().is_invalid());
    }

    #[test]
    fn test_angle_value_arithmetic() {
        let a = Latitude::new(30.0);
        let b = Latitude::new(45.0);
        assert_eq!(Latitude::new(75.0), a + b);
        assert_eq!(Latitude::new(-15.0), a - b);
        assert_eq!(Latitude::new(-30.0), -a);
        assert!(a < b);

        let lon = Longitude::from(Degrees(170.0)) + Longitude::new(20.0);
        assert_eq!(Longitude::new(190.0), lon);
        assert_eq!(Longitude::new(-170.0), lon.normalize());

        let nan = Azimuth::INVALID + Azimuth::EAST;
        assert!(nan.is_invalid());
        let infinity = Azimuth::new(f64::INFINITY) + Azimuth::EAST;
        assert!(infinity.is_infinity());
    }

    #[test]
    fn test_angle_value_conversions() {
        let lat = Latitude::from_radians(Radians(core::f64::consts::FRAC_PI_4));
        assert!(is_within_tolerance(45.0, lat.degrees(), 1e-12));
        assert!(is_within_tolerance(
            core::f64::consts::FRAC_PI_4,
            lat.to_radians().0,
            1e-15
        ));
        assert_eq!(Degrees(45.0), Degrees::from(Latitude::new(45.0)));
        assert!(is_within_tolerance(
            core::f64::consts::PI,
            Radians::from(Azimuth::SOUTH).0,
            f64::EPSILON
        ));
        assert_eq!(Longitude::new(12.346), Longitude::new(12.345_6).round(3));
    }

    #[test]
    fn test_angle_display() {
        assert_eq!("39.75°N", Latitude::new(39.75).to_string());
        assert_eq!("35.43°S", format!("{:.2}", Latitude::new(-35.433_33)));
        assert_eq!("105°W", Longitude::new(-105.0).to_string());
        assert_eq!("97.47°E", format!("{:.2}", Longitude::new(97.466_67)));
        assert_eq!("236.589°", format!("{:.3}", Azimuth::new(236.589_21)));
        assert_eq!("NaN", Azimuth::INVALID.to_string());
        assert_eq!("NaN", Latitude::INVALID.to_string());
    }
}
