// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Injected layout configuration: viewport dimensions and spacing constants.

use kurbo::Point;

/// Current screen dimensions, injected by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Screen width in pixels.
    pub width: f64,
    /// Screen height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Construct from width and height.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Screen center point.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Padding constants applied between and around buttons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacing {
    /// Horizontal gap between adjacent main-row buttons.
    pub padding: f64,
    /// Gap between the main row and the bottom screen edge.
    pub padding_vertical: f64,
    /// Horizontal gap between adjacent sub-row buttons.
    pub sub_padding: f64,
    /// Gap between a sub-row and its owning button.
    pub sub_padding_vertical: f64,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            padding: 16.0,
            padding_vertical: 16.0,
            sub_padding: 8.0,
            sub_padding_vertical: 8.0,
        }
    }
}
