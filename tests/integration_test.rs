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

// extern crate we're testing, same as any other code would do.
extern crate vincenty_wgs84;

use vincenty_wgs84::{geodesic, Azimuth, GeodeticPoint, Metres, WGS84_ELLIPSOID};

const FILENAME: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/geodesic_examples.csv");

type DataRecord = (f64, f64, f64, f64, f64, f64, f64);

/// The maximum permitted difference between calculated and expected distances.
const DISTANCE_TOLERANCE: f64 = 1e-3;
/// The maximum permitted difference between calculated and expected azimuths.
const AZIMUTH_TOLERANCE: f64 = 1e-6;
/// The maximum permitted difference between calculated and expected positions.
const POSITION_TOLERANCE: f64 = 1e-8;

/// The difference between a pair of angles in degrees, in the range 0 to 180.
fn angular_difference(a: f64, b: f64) -> f64 {
    let delta = (a - b).abs() % 360.0;
    delta.min(360.0 - delta)
}

#[test]
fn test_geodesic_inverse_examples() -> Result<(), Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_path(FILENAME)?;

    let mut line_number = 1;
    for result in rdr.deserialize::<DataRecord>() {
        let record = result?;
        line_number += 1;

        let (lat1, lon1, azi1, lat2, lon2, azi2, s12) = record;
        let a = GeodeticPoint::from_degrees(lat1, lon1);
        let b = GeodeticPoint::from_degrees(lat2, lon2);

        let solution = geodesic::calculate_inverse(&a, &b, &WGS84_ELLIPSOID);
        assert!(
            !solution.is_degraded(),
            "line: {line_number} did not converge"
        );

        let delta_length = (s12 - solution.distance().0).abs();
        assert!(
            delta_length <= DISTANCE_TOLERANCE,
            "length, line: {line_number} delta: {delta_length}"
        );

        let delta_azimuth = angular_difference(azi1, solution.azimuth().degrees());
        assert!(
            delta_azimuth <= AZIMUTH_TOLERANCE,
            "azimuth, line: {line_number} delta: {delta_azimuth}"
        );

        let delta_final_azimuth = angular_difference(azi2, solution.final_azimuth().degrees());
        assert!(
            delta_final_azimuth <= AZIMUTH_TOLERANCE,
            "final azimuth, line: {line_number} delta: {delta_final_azimuth}"
        );
    }

    assert!(2 < line_number);
    Ok(())
}

#[test]
fn test_geodesic_direct_examples() -> Result<(), Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_path(FILENAME)?;

    let mut line_number = 1;
    for result in rdr.deserialize::<DataRecord>() {
        let (lat1, lon1, azi1, lat2, lon2, _azi2, s12) = result?;
        line_number += 1;

        let a = GeodeticPoint::from_degrees(lat1, lon1);
        let destination = a.destination(Azimuth::new(azi1), Metres(s12), &WGS84_ELLIPSOID);

        let delta_lat = (lat2 - destination.lat().degrees()).abs();
        let delta_lon = angular_difference(lon2, destination.lon().degrees());
        assert!(
            delta_lat <= POSITION_TOLERANCE && delta_lon <= POSITION_TOLERANCE,
            "position, line: {line_number} destination: {destination}"
        );
    }

    Ok(())
}
