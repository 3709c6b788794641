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

//! The coordinate module contains the `Coordinate` type: a latitude and
//! longitude pair in decimal degrees.
//!
//! A `Coordinate` is a plain value: it does not clamp or validate its
//! components, see [`Validate`] to test whether it lies within the normal
//! latitude and longitude ranges.

#![allow(clippy::float_cmp)]

use angle_sc::{Degrees, Radians, Validate};
use core::fmt;
use core::num::ParseFloatError;
use core::str::FromStr;
use unit_sphere::LatLong;

/// The errors that can occur when parsing a `Coordinate` from a string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseCoordinateError {
    /// The string was empty or only contained whitespace.
    #[error("empty coordinate string")]
    Empty,
    /// The string did not contain a comma separating the latitude and longitude.
    #[error("missing comma between latitude and longitude")]
    MissingComma,
    /// The latitude was not a decimal number.
    #[error("invalid latitude: {0}")]
    InvalidLatitude(#[source] ParseFloatError),
    /// The longitude was not a decimal number.
    #[error("invalid longitude: {0}")]
    InvalidLongitude(#[source] ParseFloatError),
}

/// A position on the surface of a sphere.
///
/// Two `Coordinate`s are equal only if both their latitudes and
/// longitudes are exactly equal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinate {
    /// The latitude in degrees.
    lat: f64,
    /// The longitude in degrees.
    lon: f64,
}

impl Coordinate {
    /// Constructor.
    /// * `lat` - the latitude in degrees.
    /// * `lon` - the longitude in degrees.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Accessor for the latitude in degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Accessor for the longitude in degrees.
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.lon
    }

    /// The latitude in radians.
    #[must_use]
    pub fn lat_radians(&self) -> Radians {
        Radians(self.lat.to_radians())
    }

    /// The longitude in radians.
    #[must_use]
    pub fn lon_radians(&self) -> Radians {
        Radians(self.lon.to_radians())
    }
}

impl Validate for Coordinate {
    /// Test whether a `Coordinate` is valid.
    /// Whether -90° <= `lat` <= 90° and -180° <= `lon` <= 180°.
    fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lon)
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parse a `Coordinate` from a string of the form "lat, lon".
    ///
    /// The string is split on the first comma, each part is trimmed and
    /// parsed as a decimal number of degrees.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            log::trace!("Coordinate::from_str: empty string");
            return Err(ParseCoordinateError::Empty);
        }

        let (lat, lon) = s.split_once(',').ok_or_else(|| {
            log::trace!("Coordinate::from_str: no comma in {s:?}");
            ParseCoordinateError::MissingComma
        })?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(ParseCoordinateError::InvalidLatitude)?;
        let lon = lon
            .trim()
            .parse::<f64>()
            .map_err(ParseCoordinateError::InvalidLongitude)?;

        Ok(Self::new(lat, lon))
    }
}

impl TryFrom<&str> for Coordinate {
    type Error = ParseCoordinateError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Construct a `Coordinate` from a (latitude, longitude) tuple in degrees.
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl From<LatLong> for Coordinate {
    fn from(a: LatLong) -> Self {
        Self::new(a.lat().0, a.lon().0)
    }
}

impl From<&Coordinate> for LatLong {
    fn from(a: &Coordinate) -> Self {
        Self::new(Degrees(a.lat), Degrees(a.lon))
    }
}
