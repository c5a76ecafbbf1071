//! Plain geometry values.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described only by its size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle with the given size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width multiplied by height.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area() {
        assert!((Rectangle::new(10.0, 20.0).area() - 200.0).abs() < f64::EPSILON);
        assert!(Rectangle::default().area().abs() < f64::EPSILON);
    }
}
