// Copyright (c) 2025 Ken Barker

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

extern crate spherical_nav;

use angle_sc::is_within_tolerance;
use spherical_nav::*;

const FILENAME: &str = "data/city_pair_examples.csv";

/// lat1, lon1, lat2, lon2, distance_km, distance_nm, initial_bearing,
/// final_bearing, mid_lat, mid_lon
type DataRecord = (f64, f64, f64, f64, f64, f64, f64, f64, f64, f64);

#[test]
fn test_city_pair_examples() -> Result<(), Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_path(FILENAME)?;

    let mut count = 0;
    for result in rdr.deserialize::<DataRecord>() {
        let record = result?;

        let a = Coordinate::new(record.0, record.1);
        let b = Coordinate::new(record.2, record.3);

        let d = distance(&a, &b);
        assert!(
            is_within_tolerance(record.4, d, 1.0e-8),
            "distance, record: {count} expected: {} result: {d}",
            record.4
        );

        let d_nm = distance_in_nm(&a, &b);
        assert!(
            is_within_tolerance(record.5, d_nm, 1.0e-8),
            "distance_in_nm, record: {count} expected: {} result: {d_nm}",
            record.5
        );

        let azimuth = bearing(&a, &b);
        assert!(
            is_within_tolerance(record.6, azimuth, 1.0e-9),
            "bearing, record: {count} expected: {} result: {azimuth}",
            record.6
        );

        let end_azimuth = final_bearing(&a, &b);
        assert!(
            is_within_tolerance(record.7, end_azimuth, 1.0e-9),
            "final_bearing, record: {count} expected: {} result: {end_azimuth}",
            record.7
        );

        let mid = midpoint(&a, &b);
        assert!(
            is_within_tolerance(record.8, mid.lat(), 1.0e-9),
            "midpoint latitude, record: {count} expected: {} result: {}",
            record.8,
            mid.lat()
        );
        assert!(
            is_within_tolerance(record.9, mid.lon(), 1.0e-9),
            "midpoint longitude, record: {count} expected: {} result: {}",
            record.9,
            mid.lon()
        );

        count += 1;
    }
    assert_eq!(7, count);

    Ok(())
}
