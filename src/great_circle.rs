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

//! The `great_circle` module contains functions for calculating great circle
//! paths between positions on the surface of a sphere.
//!
//! The functions in this module are independent of the radius of the
//! sphere: distances are central angles in `Radians`, bearings and
//! latitudes are in degrees. See [`Sphere`](crate::Sphere) for the
//! equivalent distances in kilometres.
//!
//! The formulae are from Ed Williams'
//! [Aviation Formulary](https://edwilliams.org/avform147.htm) and Chris Veness'
//! [Movable Type Scripts](https://www.movable-type.co.uk/scripts/latlong.html).

#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::angle::wrap360;
use crate::Coordinate;
use angle_sc::trig::UnitNegRange;
use angle_sc::Radians;

/// Calculate the central angle between a pair of positions using the
/// haversine formula.
/// * `a`, `b` - the positions.
///
/// returns the great circle distance between the positions on a unit sphere.
#[must_use]
pub fn central_angle(a: &Coordinate, b: &Coordinate) -> Radians {
    let lat1 = a.lat_radians().0;
    let lat2 = b.lat_radians().0;
    let sin_half_delta_lat = libm::sin(0.5 * (lat2 - lat1));
    let sin_half_delta_lon = libm::sin(0.5 * (b.lon_radians().0 - a.lon_radians().0));

    let h = sin_half_delta_lat * sin_half_delta_lat
        + libm::cos(lat1) * libm::cos(lat2) * sin_half_delta_lon * sin_half_delta_lon;
    Radians(2.0 * libm::asin(UnitNegRange::clamp(libm::sqrt(h)).0))
}

/// Calculate the initial bearing of the great circle path from `a` to `b`.
/// * `a`, `b` - the start and finish positions.
///
/// returns the bearing at `a` in degrees clockwise from North, in the
/// range [0, 360). Zero if `a` and `b` are the same position.
///
/// # Examples
/// ```
/// use spherical_nav::{great_circle, Coordinate};
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(0.0, 10.0);
/// assert_eq!(90.0, great_circle::bearing(&a, &b));
/// assert_eq!(0.0, great_circle::bearing(&a, &a));
/// ```
#[must_use]
pub fn bearing(a: &Coordinate, b: &Coordinate) -> f64 {
    if a == b {
        return 0.0;
    }

    let lat1 = a.lat_radians().0;
    let lat2 = b.lat_radians().0;
    let delta_lon = b.lon_radians().0 - a.lon_radians().0;

    let y = libm::sin(delta_lon) * libm::cos(lat2);
    let x = libm::cos(lat1) * libm::sin(lat2)
        - libm::sin(lat1) * libm::cos(lat2) * libm::cos(delta_lon);
    wrap360(libm::atan2(y, x).to_degrees())
}

/// Calculate the final bearing of the great circle path from `a` to `b`.
/// * `a`, `b` - the start and finish positions.
///
/// returns the bearing at `b` in degrees clockwise from North, in the
/// range [0, 360).
#[must_use]
pub fn final_bearing(a: &Coordinate, b: &Coordinate) -> f64 {
    wrap360(bearing(b, a) + 180.0)
}

/// Calculate the position half way along the great circle path between
/// a pair of positions.
/// * `a`, `b` - the start and finish positions.
///
/// Note: the longitude is not normalised, it is `a`'s longitude plus the
/// longitude difference to the mid point.
#[must_use]
pub fn midpoint(a: &Coordinate, b: &Coordinate) -> Coordinate {
    let lat1 = a.lat_radians().0;
    let lat2 = b.lat_radians().0;
    let delta_lon = b.lon_radians().0 - a.lon_radians().0;

    let bx = libm::cos(lat2) * libm::cos(delta_lon);
    let by = libm::cos(lat2) * libm::sin(delta_lon);
    let cos_lat1_bx = libm::cos(lat1) + bx;

    let lat = libm::atan2(
        libm::sin(lat1) + libm::sin(lat2),
        libm::sqrt(cos_lat1_bx * cos_lat1_bx + by * by),
    );
    let lon = a.lon_radians().0 + libm::atan2(by, cos_lat1_bx);
    Coordinate::new(lat.to_degrees(), lon.to_degrees())
}

/// Calculate the position at a fraction of the way along the great circle
/// path between a pair of positions.
/// * `a`, `b` - the start and finish positions.
/// * `fraction` - the fraction of the distance from `a` to `b`:
///   0.0 is `a`, 1.0 is `b`. Values outside [0, 1] extrapolate beyond
///   `a` or `b` along the same great circle.
///
/// returns `a` if `a` and `b` are the same position.
/// The result is undefined if `a` and `b` are antipodal.
#[must_use]
pub fn intermediate(a: &Coordinate, b: &Coordinate, fraction: f64) -> Coordinate {
    if a == b {
        return *a;
    }

    let lat1 = a.lat_radians().0;
    let lon1 = a.lon_radians().0;
    let lat2 = b.lat_radians().0;
    let lon2 = b.lon_radians().0;

    let c = central_angle(a, b).0;
    let sin_c = libm::sin(c);
    let weight_a = libm::sin((1.0 - fraction) * c) / sin_c;
    let weight_b = libm::sin(fraction * c) / sin_c;

    let x = weight_a * libm::cos(lat1) * libm::cos(lon1)
        + weight_b * libm::cos(lat2) * libm::cos(lon2);
    let y = weight_a * libm::cos(lat1) * libm::sin(lon1)
        + weight_b * libm::cos(lat2) * libm::sin(lon2);
    let z = weight_a * libm::sin(lat1) + weight_b * libm::sin(lat2);

    let lat = libm::atan2(z, libm::sqrt(x * x + y * y));
    let lon = libm::atan2(y, x);
    Coordinate::new(lat.to_degrees(), lon.to_degrees())
}

/// Calculate the position at a great circle distance along a bearing from
/// a start position, the "direct" problem.
/// * `start` - the start position.
/// * `bearing` - the initial bearing in degrees.
/// * `arc_distance` - the great circle distance on a unit sphere.
///
/// Note: the longitude is not normalised.
#[must_use]
pub fn arc_destination(start: &Coordinate, bearing: f64, arc_distance: Radians) -> Coordinate {
    let lat1 = start.lat_radians().0;
    let bearing = bearing.to_radians();
    let delta = arc_distance.0;

    let sin_lat1 = libm::sin(lat1);
    let cos_lat1 = libm::cos(lat1);
    let sin_delta = libm::sin(delta);
    let cos_delta = libm::cos(delta);

    let lat = libm::asin(
        UnitNegRange::clamp(sin_lat1 * cos_delta + cos_lat1 * sin_delta * libm::cos(bearing)).0,
    );
    let lon = start.lon_radians().0
        + libm::atan2(
            libm::sin(bearing) * sin_delta * cos_lat1,
            cos_delta - sin_lat1 * libm::sin(lat),
        );
    Coordinate::new(lat.to_degrees(), lon.to_degrees())
}

/// The central angle and relative bearing of `current` from `start`,
/// relative to the path from `start` to `end`.
fn angle_and_relative_bearing(
    current: &Coordinate,
    start: &Coordinate,
    end: &Coordinate,
) -> (f64, f64) {
    let delta13 = central_angle(start, current).0;
    let theta13 = bearing(start, current).to_radians();
    let theta12 = bearing(start, end).to_radians();
    (delta13, theta13 - theta12)
}

/// Calculate the across track distance of a position from the great circle
/// path from `start` to `end`.
/// * `current` - the position.
/// * `start`, `end` - the start and end positions of the path.
///
/// returns the across track distance on a unit sphere: positive if
/// `current` is to the right of the path, negative if it is to the left.
/// Zero if `current` is `start`.
#[must_use]
pub fn cross_track_angle(current: &Coordinate, start: &Coordinate, end: &Coordinate) -> Radians {
    if current == start {
        return Radians(0.0);
    }

    let (delta13, relative_bearing) = angle_and_relative_bearing(current, start, end);
    Radians(libm::asin(
        UnitNegRange::clamp(libm::sin(delta13) * libm::sin(relative_bearing)).0,
    ))
}

/// Calculate the along track distance of a position along the great circle
/// path from `start` to `end`.
/// * `current` - the position.
/// * `start`, `end` - the start and end positions of the path.
///
/// returns the distance on a unit sphere from `start` to the closest point
/// on the path to `current`: negative if the closest point is behind
/// `start`. Zero if `current` is `start`.
#[must_use]
pub fn along_track_angle(current: &Coordinate, start: &Coordinate, end: &Coordinate) -> Radians {
    if current == start {
        return Radians(0.0);
    }

    let (delta13, relative_bearing) = angle_and_relative_bearing(current, start, end);
    let delta_xt = libm::asin(
        UnitNegRange::clamp(libm::sin(delta13) * libm::sin(relative_bearing)).0,
    );
    let delta_at = libm::acos(
        UnitNegRange::clamp(libm::cos(delta13) / libm::fabs(libm::cos(delta_xt))).0,
    );
    Radians(libm::copysign(delta_at, libm::cos(relative_bearing)))
}

/// Calculate the maximum latitude of a great circle path using Clairaut's
/// formula.
/// * `start` - the start position.
/// * `bearing` - the initial bearing in degrees.
///
/// returns acos(sin(bearing) * cos(lat)) in degrees. The minimum latitude
/// is the negative of the maximum latitude.
///
/// Note: the sine of the bearing is signed, so the result is greater
/// than 90° for bearings in the range (180°, 360°).
#[must_use]
pub fn max_latitude(start: &Coordinate, bearing: f64) -> f64 {
    let clairaut = libm::sin(bearing.to_radians()) * libm::cos(start.lat_radians().0);
    libm::acos(UnitNegRange::clamp(clairaut).0).to_degrees()
}
