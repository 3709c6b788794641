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

//! The `intersection` module contains functions for calculating where
//! great circle paths cross each other and where they cross parallels of
//! latitude.
//!
//! Both functions return `None` when the geometry has no solution: the
//! paths diverge or coincide, or the great circle never reaches the
//! parallel. Absence is a valid result, not an error.

#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

use crate::angle::wrap180;
use crate::great_circle;
use crate::Coordinate;
use angle_sc::trig::UnitNegRange;
use core::f64::consts::TAU;

/// Calculate the intersection of two great circle paths, each defined by a
/// start position and an initial bearing.
/// * `p1` - the start position of the first path.
/// * `bearing1` - the initial bearing of the first path in degrees.
/// * `p2` - the start position of the second path.
/// * `bearing2` - the initial bearing of the second path in degrees.
///
/// returns the intersection point ahead of both start positions, or `None`
/// if the paths are coincident or diverge.
/// Returns `p1` if `p1` and `p2` are the same position.
///
/// # Examples
/// ```
/// use spherical_nav::{intersection::intersection, Coordinate};
///
/// let istanbul = Coordinate::new(41.28111111, 28.75333333);
/// let rome = Coordinate::new(41.8002778, 12.2388889);
///
/// assert!(intersection(&istanbul, 270.0, &rome, 45.0).is_none());
///
/// let result = intersection(&istanbul, 270.0, &rome, 90.0).unwrap();
/// assert_eq!(41, result.lat().round() as i32);
/// assert_eq!(24, result.lon().round() as i32);
/// ```
#[must_use]
pub fn intersection(
    p1: &Coordinate,
    bearing1: f64,
    p2: &Coordinate,
    bearing2: f64,
) -> Option<Coordinate> {
    let lat1 = p1.lat_radians().0;
    let lat2 = p2.lat_radians().0;
    let theta13 = bearing1.to_radians();
    let theta23 = bearing2.to_radians();

    // the angular distance between the start positions
    let delta12 = great_circle::central_angle(p1, p2).0;
    if delta12 == 0.0 {
        return Some(*p1);
    }

    let sin_lat1 = libm::sin(lat1);
    let cos_lat1 = libm::cos(lat1);
    let sin_lat2 = libm::sin(lat2);
    let sin_delta12 = libm::sin(delta12);
    let cos_delta12 = libm::cos(delta12);

    // the bearings between the start positions
    let theta_a = libm::acos(
        UnitNegRange::clamp((sin_lat2 - sin_lat1 * cos_delta12) / (sin_delta12 * cos_lat1)).0,
    );
    let theta_b = libm::acos(
        UnitNegRange::clamp(
            (sin_lat1 - sin_lat2 * cos_delta12) / (sin_delta12 * libm::cos(lat2)),
        )
        .0,
    );
    let (theta12, theta21) = if 0.0 < libm::sin(p2.lon_radians().0 - p1.lon_radians().0) {
        (theta_a, TAU - theta_b)
    } else {
        (TAU - theta_a, theta_b)
    };

    // the angles at p1 and p2 of the triangle p1, p2, p3
    let alpha1 = theta13 - theta12;
    let alpha2 = theta21 - theta23;
    let sin_alpha1 = libm::sin(alpha1);
    let sin_alpha2 = libm::sin(alpha2);

    if sin_alpha1 == 0.0 && sin_alpha2 == 0.0 {
        log::debug!("intersection: paths are coincident");
        return None;
    }
    if sin_alpha1 * sin_alpha2 < 0.0 {
        log::debug!("intersection: paths diverge");
        return None;
    }

    let cos_alpha1 = libm::cos(alpha1);
    let cos_alpha2 = libm::cos(alpha2);
    let cos_alpha3 = -cos_alpha1 * cos_alpha2 + sin_alpha1 * sin_alpha2 * cos_delta12;

    // the angular distance from p1 to the intersection point
    let delta13 = libm::atan2(
        sin_delta12 * sin_alpha1 * sin_alpha2,
        cos_alpha2 + cos_alpha1 * cos_alpha3,
    );
    let sin_delta13 = libm::sin(delta13);
    let cos_delta13 = libm::cos(delta13);

    let lat3 = libm::asin(
        UnitNegRange::clamp(sin_lat1 * cos_delta13 + cos_lat1 * sin_delta13 * libm::cos(theta13))
            .0,
    );
    let delta_lon13 = libm::atan2(
        libm::sin(theta13) * sin_delta13 * cos_lat1,
        cos_delta13 - sin_lat1 * libm::sin(lat3),
    );
    let lon3 = p1.lon_radians().0 + delta_lon13;

    Some(Coordinate::new(lat3.to_degrees(), lon3.to_degrees()))
}

/// Calculate the longitudes where the great circle through a pair of
/// positions crosses a parallel of latitude.
/// * `start`, `end` - positions on the great circle.
/// * `latitude` - the latitude of the parallel in degrees.
///
/// returns the pair of longitudes where the great circle crosses the
/// parallel, each in the range [-180, 180), or `None` if the great circle
/// does not reach the latitude.
/// Returns `None` if `start` and `end` are the same position or if the
/// great circle lies along the parallel.
///
/// # Examples
/// ```
/// use spherical_nav::{intersection::crossing_parallels, Coordinate};
///
/// let istanbul = Coordinate::new(41.28111111, 28.75333333);
/// let san_francisco = Coordinate::new(37.615223, -122.389977);
///
/// assert!(crossing_parallels(&istanbul, &san_francisco, 80.0).is_none());
///
/// let (lon1, lon2) = crossing_parallels(&istanbul, &san_francisco, 70.0).unwrap();
/// assert_eq!(-12, lon1.round() as i32);
/// assert_eq!(-80, lon2.round() as i32);
/// ```
#[must_use]
pub fn crossing_parallels(
    start: &Coordinate,
    end: &Coordinate,
    latitude: f64,
) -> Option<(f64, f64)> {
    if start == end {
        log::debug!("crossing_parallels: start and end are the same position");
        return None;
    }

    let lat = latitude.to_radians();
    let lat1 = start.lat_radians().0;
    let lat2 = end.lat_radians().0;
    let lon1 = start.lon_radians().0;
    let delta_lon = end.lon_radians().0 - lon1;

    let sin_lat1_cos_lat2 = libm::sin(lat1) * libm::cos(lat2);
    let cos_lat = libm::cos(lat);

    let x = sin_lat1_cos_lat2 * cos_lat * libm::sin(delta_lon);
    let y = sin_lat1_cos_lat2 * cos_lat * libm::cos(delta_lon)
        - libm::cos(lat1) * libm::sin(lat2) * cos_lat;
    let z = libm::cos(lat1) * libm::cos(lat2) * libm::sin(lat) * libm::sin(delta_lon);

    let sq_xy = x * x + y * y;
    if sq_xy < z * z {
        log::debug!("crossing_parallels: great circle does not reach latitude {latitude}");
        return None;
    }
    if sq_xy == 0.0 {
        log::debug!("crossing_parallels: great circle lies along latitude {latitude}");
        return None;
    }

    // the longitude of the maximum latitude, relative to start
    let lon_max = libm::atan2(-y, x);
    // the longitude difference from lon_max to the crossings
    let delta_lon_i = libm::acos(UnitNegRange::clamp(z / libm::sqrt(sq_xy)).0);

    let lon_i1 = lon1 + lon_max - delta_lon_i;
    let lon_i2 = lon1 + lon_max + delta_lon_i;
    Some((
        wrap180(lon_i1.to_degrees()),
        wrap180(lon_i2.to_degrees()),
    ))
}
