//! Color mapping utilities for choropleth grading.

use std::fmt;

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    /// Format as CSS: rgb(r,g,b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Neutral gray for counties with no data (#ccc).
pub const NO_DATA: Rgb = Rgb { r: 204, g: 204, b: 204 };

/// Six-step sequential ramp, pale yellow to dark red, with the strictly-greater-than
/// threshold that activates each step. Checked top down; values are percentage points.
const BREAKS: &[(f64, Rgb)] = &[
    (30.0, Rgb { r: 128, g:   0, b:  38 }), // #800026
    (20.0, Rgb { r: 189, g:   0, b:  38 }), // #BD0026
    (15.0, Rgb { r: 227, g:  26, b:  28 }), // #E31A1C
    (10.0, Rgb { r: 252, g:  78, b:  42 }), // #FC4E2A
    ( 5.0, Rgb { r: 253, g: 141, b:  60 }), // #FD8D3C
];

/// Lightest step, for values at or below the lowest threshold (#FFEDA0).
const BASE: Rgb = Rgb { r: 255, g: 237, b: 160 };

/// Choropleth color ramp for a metric value in percentage points.
///
/// Discrete bucketing, no interpolation. Comparisons are strict `>`, so a value
/// exactly equal to a threshold falls into the bucket below it. `None` (and
/// non-finite values) map to the neutral gray.
pub fn color_for(value: Option<f64>) -> Rgb {
    let Some(v) = value else { return NO_DATA };
    if !v.is_finite() { return NO_DATA }

    for &(threshold, color) in BREAKS {
        if v > threshold { return color }
    }
    BASE
}
