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

//! The angle module contains functions for converting between degrees and
//! radians and for normalising angles into their canonical ranges.
//!
//! Angles are plain `f64` values: the unit is given by the function name.

#![allow(clippy::float_cmp)]

/// Convert an angle in degrees to radians.
/// * `degrees` - the angle in degrees.
///
/// # Examples
/// ```
/// use spherical_nav::angle::to_radians;
///
/// assert_eq!(core::f64::consts::PI, to_radians(180.0));
/// ```
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Convert an angle in radians to degrees.
/// * `radians` - the angle in radians.
#[must_use]
pub fn to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Normalise an angle in degrees into the range [0, 360).
/// * `degrees` - the angle in degrees, any finite value.
///
/// # Examples
/// ```
/// use spherical_nav::angle::wrap360;
///
/// assert_eq!(270.0, wrap360(-90.0));
/// assert_eq!(0.0, wrap360(720.0));
/// ```
#[must_use]
pub fn wrap360(degrees: f64) -> f64 {
    if (0.0..360.0).contains(&degrees) {
        degrees
    } else {
        ((degrees % 360.0) + 360.0) % 360.0
    }
}

/// Normalise an angle in degrees into the range [-180, 180).
///
/// Used for longitudes and longitude differences that may span the
/// antimeridian, so +180° maps to -180°.
/// * `degrees` - the angle in degrees, any finite value.
///
/// # Examples
/// ```
/// use spherical_nav::angle::wrap180;
///
/// assert_eq!(-180.0, wrap180(180.0));
/// assert_eq!(-170.0, wrap180(190.0));
/// ```
#[must_use]
pub fn wrap180(degrees: f64) -> f64 {
    if (-180.0..180.0).contains(&degrees) {
        degrees
    } else {
        // ((x + 540) mod 360) - 180, with a floored mod for large negative x
        wrap360(degrees + 540.0) - 180.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_to_radians_and_to_degrees() {
        assert_eq!(0.0, to_radians(0.0));
        assert_eq!(core::f64::consts::FRAC_PI_2, to_radians(90.0));
        assert_eq!(-core::f64::consts::PI, to_radians(-180.0));

        assert_eq!(180.0, to_degrees(core::f64::consts::PI));
        assert_eq!(-90.0, to_degrees(-core::f64::consts::FRAC_PI_2));

        for i in -360..361 {
            let degrees = f64::from(i);
            assert!(is_within_tolerance(
                degrees,
                to_degrees(to_radians(degrees)),
                256.0 * f64::EPSILON
            ));
        }
    }

    #[test]
    fn test_wrap360() {
        // values in range are unchanged
        assert_eq!(0.0, wrap360(0.0));
        assert_eq!(123.456, wrap360(123.456));
        assert_eq!(359.999, wrap360(359.999));

        assert_eq!(0.0, wrap360(360.0));
        assert_eq!(270.0, wrap360(-90.0));
        assert_eq!(180.0, wrap360(-180.0));
        assert_eq!(10.0, wrap360(370.0));
        assert_eq!(350.0, wrap360(-370.0));
        assert_eq!(0.0, wrap360(-720.0));
    }

    #[test]
    fn test_wrap360_is_periodic() {
        let values = [-725.5, -359.25, -0.5, 0.0, 12.75, 181.0, 359.5, 1000.125];
        for value in values {
            let expected = wrap360(value);
            assert!((0.0..360.0).contains(&expected));
            for k in -3..4 {
                let result = wrap360(value + 360.0 * f64::from(k));
                assert!(is_within_tolerance(expected, result, 1.0e-9));
            }
        }
    }

    #[test]
    fn test_wrap180() {
        // values in range are unchanged
        assert_eq!(-180.0, wrap180(-180.0));
        assert_eq!(-45.5, wrap180(-45.5));
        assert_eq!(179.5, wrap180(179.5));

        assert_eq!(-180.0, wrap180(180.0));
        assert_eq!(-170.0, wrap180(190.0));
        assert_eq!(170.0, wrap180(-190.0));
        assert_eq!(0.0, wrap180(360.0));
        assert_eq!(-90.0, wrap180(270.0));

        // beyond the range of a single turn
        assert_eq!(120.0, wrap180(-600.0));
        assert_eq!(-80.0, wrap180(640.0));
    }
}
