#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// An axis-aligned rectangle in viewport (client) coordinates, CSS pixels.
///
/// Mirrors what `getBoundingClientRect` reports.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Horizontal center line.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// The larger of width and height.
    #[must_use]
    pub fn max_side(&self) -> f64 {
        self.width.max(self.height)
    }
}
