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

//! The sphere module contains functions for converting between great circle
//! distances on a unit sphere and distances on a sphere of a given radius.

pub mod earth;

use angle_sc::Radians;
use icao_units::si::Metres;

/// Convert a great circle distance on a unit sphere to kilometres.
/// * `arc_distance` - the great circle distance on a unit sphere.
/// * `radius` - the radius of the sphere in kilometres.
///
/// # Examples
/// ```
/// use angle_sc::Radians;
/// use spherical_nav::sphere::{earth, radians_to_kilometres};
///
/// let quarter = radians_to_kilometres(Radians(core::f64::consts::FRAC_PI_2), earth::MEAN_RADIUS);
/// assert_eq!(10010.370831398517, quarter);
/// ```
#[must_use]
pub fn radians_to_kilometres(arc_distance: Radians, radius: f64) -> f64 {
    arc_distance.0 * radius
}

/// Convert a distance in kilometres to a great circle distance on a unit sphere.
/// * `distance` - the distance in kilometres.
/// * `radius` - the radius of the sphere in kilometres.
#[must_use]
pub fn kilometres_to_radians(distance: f64, radius: f64) -> Radians {
    Radians(distance / radius)
}

/// Convert a distance in kilometres to nautical miles.
/// * `distance` - the distance in kilometres.
#[must_use]
pub fn kilometres_to_nautical_miles(distance: f64) -> f64 {
    distance * (1.0 / earth::KILOMETRES_PER_NAUTICAL_MILE)
}

/// Convert a distance in kilometres to `Metres`.
/// * `distance` - the distance in kilometres.
#[must_use]
pub fn kilometres_to_metres(distance: f64) -> Metres {
    Metres(1000.0 * distance)
}
