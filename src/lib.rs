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

//! spherical-nav
//!
//! A library for performing great circle navigation calculations on a
//! spherical model of the Earth.
//!
//! The shortest path between two points on the surface of a sphere is a
//! [great circle arc](https://en.wikipedia.org/wiki/Great_circle).
//! This library calculates:
//!
//! - the distance, initial and final bearings between two positions;
//! - the mid point and intermediate points of a great circle path;
//! - the destination at a distance along a bearing from a start position;
//! - the across track and along track distances of a position relative to a path;
//! - the intersection of two paths defined by start positions and bearings;
//! - the maximum latitude of a path and the longitudes where it crosses a parallel.
//!
//! ## Design
//!
//! Positions are [`Coordinate`]s: latitude and longitude pairs in decimal
//! degrees. Bearings and latitudes are also in degrees, all trigonometry
//! is performed in radians internally.
//!
//! The [`great_circle`] and [`intersection`](mod@intersection) modules are
//! independent of the radius of the sphere: they calculate distances as
//! central angles on a unit sphere.  
//! The [`Sphere`] class scales those angles by its radius in kilometres.
//! The static [`MEAN_EARTH`] represents the Earth by a sphere of mean radius
//! 6372.8 km and is used by the free functions: [`distance`],
//! [`distance_in_nm`], [`destination`], [`cross_track_distance`] and
//! [`along_track_distance_to`].
//!
//! Note: a spherical model is an approximation, the distances calculated
//! may differ from WGS 84 geodesic distances by up to 0.5%.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Radians`
//!   and to clamp trigonometric values into range;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to convert
//!   to and from its `LatLong` type.
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`
//!   and `NauticalMiles`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod angle;
pub mod coordinate;
pub mod great_circle;
pub mod intersection;
pub mod sphere;

pub use angle::{to_degrees, to_radians, wrap180, wrap360};
pub use angle_sc::{Radians, Validate};
pub use coordinate::{Coordinate, ParseCoordinateError};
pub use great_circle::{bearing, final_bearing, intermediate, max_latitude, midpoint};
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use intersection::{crossing_parallels, intersection};
pub use unit_sphere::LatLong;

/// A sphere, defined by its radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    /// The radius of the sphere in kilometres.
    radius: f64,
}

impl Sphere {
    /// Constructor.
    /// * `radius` - the radius of the `Sphere` in kilometres.
    #[must_use]
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Construct a `Sphere` with the mean radius of the Earth.
    #[must_use]
    pub const fn mean_earth() -> Self {
        Self::new(sphere::earth::MEAN_RADIUS)
    }

    /// The radius of the sphere in kilometres.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Calculate the great circle distance between a pair of positions.
    /// * `a`, `b` - the positions.
    ///
    /// returns the distance in kilometres.
    #[must_use]
    pub fn distance(&self, a: &Coordinate, b: &Coordinate) -> f64 {
        sphere::radians_to_kilometres(great_circle::central_angle(a, b), self.radius)
    }

    /// Calculate the great circle distance between a pair of positions in
    /// nautical miles.
    /// * `a`, `b` - the positions.
    #[must_use]
    pub fn distance_in_nm(&self, a: &Coordinate, b: &Coordinate) -> f64 {
        sphere::kilometres_to_nautical_miles(self.distance(a, b))
    }

    /// Calculate the great circle distance between a pair of positions in
    /// `Metres`.
    /// * `a`, `b` - the positions.
    #[must_use]
    pub fn length(&self, a: &Coordinate, b: &Coordinate) -> Metres {
        sphere::kilometres_to_metres(self.distance(a, b))
    }

    /// Calculate the position at a distance along a bearing from a start
    /// position.
    /// * `start` - the start position.
    /// * `bearing` - the initial bearing in degrees.
    /// * `distance` - the distance in kilometres.
    #[must_use]
    pub fn destination(&self, start: &Coordinate, bearing: f64, distance: f64) -> Coordinate {
        great_circle::arc_destination(
            start,
            bearing,
            sphere::kilometres_to_radians(distance, self.radius),
        )
    }

    /// Calculate the across track distance of a position from the great
    /// circle path from `start` to `end`.
    /// * `current` - the position.
    /// * `start`, `end` - the start and end positions of the path.
    ///
    /// returns the distance in kilometres: positive to the right of the path,
    /// negative to the left.
    #[must_use]
    pub fn cross_track_distance(
        &self,
        current: &Coordinate,
        start: &Coordinate,
        end: &Coordinate,
    ) -> f64 {
        sphere::radians_to_kilometres(
            great_circle::cross_track_angle(current, start, end),
            self.radius,
        )
    }

    /// Calculate the distance from `start` to the closest point to `current`
    /// on the great circle path from `start` to `end`.
    /// * `current` - the position.
    /// * `start`, `end` - the start and end positions of the path.
    ///
    /// returns the distance in kilometres: negative if the closest point is
    /// behind `start`.
    #[must_use]
    pub fn along_track_distance_to(
        &self,
        current: &Coordinate,
        start: &Coordinate,
        end: &Coordinate,
    ) -> f64 {
        sphere::radians_to_kilometres(
            great_circle::along_track_angle(current, start, end),
            self.radius,
        )
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::mean_earth()
    }
}

/// A static instance of the mean Earth `Sphere`.
pub static MEAN_EARTH: Sphere = Sphere::mean_earth();

/// Calculate the great circle distance between a pair of positions on the
/// mean Earth, using the haversine formula.
/// * `a`, `b` - the positions.
///
/// returns the distance in kilometres.
///
/// # Examples
/// ```
/// use spherical_nav::*;
///
/// let istanbul = Coordinate::new(41.28111111, 28.75333333);
/// let jfk = Coordinate::new(40.63980103, -73.77890015);
///
/// let distance_km = distance(&istanbul, &jfk);
/// println!("Istanbul-JFK distance: {:.1} km", distance_km);
/// assert_eq!(8029, distance_km.round() as i32);
///
/// let initial_bearing = bearing(&istanbul, &jfk);
/// println!("Istanbul-JFK initial bearing: {:.1}", initial_bearing);
/// assert_eq!(309, initial_bearing.round() as i32);
/// ```
#[must_use]
pub fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
    MEAN_EARTH.distance(a, b)
}

/// Calculate the great circle distance between a pair of positions on the
/// mean Earth in nautical miles.
/// * `a`, `b` - the positions.
#[must_use]
pub fn distance_in_nm(a: &Coordinate, b: &Coordinate) -> f64 {
    MEAN_EARTH.distance_in_nm(a, b)
}

/// Calculate the position at a distance along a bearing from a start
/// position on the mean Earth.
/// * `start` - the start position.
/// * `bearing` - the initial bearing in degrees.
/// * `distance` - the distance in kilometres.
#[must_use]
pub fn destination(start: &Coordinate, bearing: f64, distance: f64) -> Coordinate {
    MEAN_EARTH.destination(start, bearing, distance)
}

/// Calculate the across track distance of a position from the great circle
/// path from `start` to `end` on the mean Earth.
/// * `current` - the position.
/// * `start`, `end` - the start and end positions of the path.
///
/// returns the distance in kilometres: positive to the right of the path,
/// negative to the left. Zero if `current` is `start`.
#[must_use]
pub fn cross_track_distance(current: &Coordinate, start: &Coordinate, end: &Coordinate) -> f64 {
    MEAN_EARTH.cross_track_distance(current, start, end)
}

/// Calculate the along track distance of a position on the great circle
/// path from `start` to `end` on the mean Earth.
/// * `current` - the position.
/// * `start`, `end` - the start and end positions of the path.
///
/// returns the distance in kilometres from `start`. Zero if `current` is `start`.
#[must_use]
pub fn along_track_distance_to(current: &Coordinate, start: &Coordinate, end: &Coordinate) -> f64 {
    MEAN_EARTH.along_track_distance_to(current, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    const ISTANBUL: Coordinate = Coordinate::new(41.28111111, 28.75333333);
    const JFK: Coordinate = Coordinate::new(40.63980103, -73.77890015);
    const LONDON: Coordinate = Coordinate::new(51.47, -0.4543);
    const ROME: Coordinate = Coordinate::new(41.8002778, 12.2388889);

    #[test]
    fn test_sphere_traits() {
        let sphere = Sphere::mean_earth();
        let sphere_copy = sphere;
        assert!(sphere_copy == sphere);
        assert_eq!(sphere, Sphere::default());
        assert_eq!(MEAN_EARTH, sphere);
        assert_eq!(6372.8, sphere.radius());

        print!("Sphere: {:?}", sphere);
    }

    #[test]
    fn test_sphere_distance() {
        let sphere = Sphere::new(1.0);
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 90.0);
        assert!(is_within_tolerance(
            core::f64::consts::FRAC_PI_2,
            sphere.distance(&a, &b),
            4.0 * f64::EPSILON
        ));

        let result = MEAN_EARTH.distance(&ISTANBUL, &JFK);
        assert!(is_within_tolerance(8028.747885130455, result, 1.0e-8));
        assert_eq!(result, distance(&ISTANBUL, &JFK));

        let result = MEAN_EARTH.distance_in_nm(&ISTANBUL, &JFK);
        assert!(is_within_tolerance(4335.177043806941, result, 1.0e-8));
        assert_eq!(result, distance_in_nm(&ISTANBUL, &JFK));

        let length = MEAN_EARTH.length(&ISTANBUL, &JFK);
        assert!(is_within_tolerance(8028747.885130455, length.0, 1.0e-5));
        assert!(is_within_tolerance(
            result,
            NauticalMiles::from(length).0,
            1.0e-8
        ));
    }

    #[test]
    fn test_distance_properties() {
        let positions = [ISTANBUL, JFK, LONDON, ROME, Coordinate::new(-90.0, 0.0)];
        for a in &positions {
            assert_eq!(0.0, distance(a, a));
            assert_eq!(0.0, bearing(a, a));
            for b in &positions {
                assert_eq!(distance(a, b), distance(b, a));
            }
        }

        // antipodal positions are half the circumference apart
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        assert!(is_within_tolerance(
            20020.741662797034,
            distance(&a, &b),
            1.0e-9
        ));
    }

    #[test]
    fn test_destination() {
        let result = destination(&ISTANBUL, 123.0, 0.0);
        assert!(is_within_tolerance(ISTANBUL.lat(), result.lat(), 1.0e-12));
        assert!(is_within_tolerance(ISTANBUL.lon(), result.lon(), 1.0e-12));

        let quarter = 0.5 * core::f64::consts::PI * MEAN_EARTH.radius();
        let result = destination(&Coordinate::new(0.0, 0.0), 90.0, quarter);
        assert!(is_within_tolerance(0.0, result.lat(), 1.0e-12));
        assert!(is_within_tolerance(90.0, result.lon(), 1.0e-9));

        // round trip
        let result = destination(&ISTANBUL, bearing(&ISTANBUL, &JFK), distance(&ISTANBUL, &JFK));
        assert!(is_within_tolerance(JFK.lat(), result.lat(), 1.0e-9));
        assert!(is_within_tolerance(JFK.lon(), result.lon(), 1.0e-9));

        let sphere = Sphere::new(1.0);
        let result = sphere.destination(&ISTANBUL, 45.0, 0.1);
        let expected = great_circle::arc_destination(&ISTANBUL, 45.0, Radians(0.1));
        assert_eq!(expected, result);
    }

    #[test]
    fn test_cross_track_distance() {
        assert_eq!(0.0, cross_track_distance(&ISTANBUL, &ISTANBUL, &JFK));

        let result = cross_track_distance(&ROME, &ISTANBUL, &JFK);
        assert!(is_within_tolerance(-704.2466108528045, result, 1.0e-8));

        let result = cross_track_distance(&ISTANBUL, &LONDON, &JFK);
        assert!(is_within_tolerance(100.58853032508641, result, 1.0e-8));

        let start = Coordinate::new(0.0, 0.0);
        let end = Coordinate::new(0.0, 10.0);
        let result = cross_track_distance(&Coordinate::new(1.0, 0.0), &start, &end);
        assert!(is_within_tolerance(-111.22634257109463, result, 1.0e-9));
    }

    #[test]
    fn test_along_track_distance_to() {
        assert_eq!(0.0, along_track_distance_to(&ISTANBUL, &ISTANBUL, &JFK));

        let result = along_track_distance_to(&ROME, &ISTANBUL, &JFK);
        assert!(is_within_tolerance(1182.1448127087615, result, 1.0e-8));

        // behind the start of the path
        let result = along_track_distance_to(&ISTANBUL, &LONDON, &JFK);
        assert!(is_within_tolerance(-2486.7593274089345, result, 1.0e-8));

        let start = Coordinate::new(0.0, 0.0);
        let end = Coordinate::new(0.0, 10.0);
        let result = along_track_distance_to(&Coordinate::new(1.0, 5.0), &start, &end);
        assert!(is_within_tolerance(556.1317128554804, result, 1.0e-9));
    }
}
