// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned bounds for drawing geometry
//!
//! Used twice per extraction: once in raw drawing units to drive the unit
//! heuristic and anchor fallback, and once in normalized meters for the
//! final floor-plan envelope. Always recomputed, never mutated in place
//! by consumers.

use crate::document::{DrawingDocument, Entity, Point2};

/// 2D axis-aligned bounding box in f64 precision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    /// Number of points sampled
    pub sample_count: usize,
}

impl Bounds {
    /// Create new bounds initialized to invalid state
    pub fn new() -> Self {
        Self {
            min_x: f64::MAX,
            min_y: f64::MAX,
            max_x: f64::MIN,
            max_y: f64::MIN,
            sample_count: 0,
        }
    }

    /// Bounds spanning two corner points
    pub fn from_corners(min: Point2, max: Point2) -> Self {
        let mut bounds = Self::new();
        bounds.expand(min.x, min.y);
        bounds.expand(max.x, max.y);
        bounds
    }

    /// Check if bounds are valid (at least one point added)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.sample_count > 0
    }

    /// Expand bounds to include a point
    #[inline]
    pub fn expand(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
        self.sample_count += 1;
    }

    /// Width along X
    #[inline]
    pub fn width(&self) -> f64 {
        if self.is_valid() {
            self.max_x - self.min_x
        } else {
            0.0
        }
    }

    /// Height along Y
    #[inline]
    pub fn height(&self) -> f64 {
        if self.is_valid() {
            self.max_y - self.min_y
        } else {
            0.0
        }
    }

    /// Largest of width and height, the input to the unit heuristic
    #[inline]
    pub fn max_dimension(&self) -> f64 {
        self.width().max(self.height())
    }

    /// Minimum corner
    #[inline]
    pub fn min_point(&self) -> Point2 {
        if self.is_valid() {
            Point2::new(self.min_x, self.min_y)
        } else {
            Point2::new(0.0, 0.0)
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan a document for its raw geometric extent
///
/// Walks top-level entities only: block geometry is in local coordinates
/// and would skew the extent; the insert position stands in for it. Non-
/// finite coordinates are skipped rather than poisoning the box.
pub fn scan_raw_bounds(document: &DrawingDocument) -> Bounds {
    let mut bounds = Bounds::new();
    let mut add = |p: Point2| {
        if p.x.is_finite() && p.y.is_finite() {
            bounds.expand(p.x, p.y);
        }
    };

    for entity in document.entities() {
        match entity {
            Entity::Line(line) => {
                add(line.start);
                add(line.end);
            }
            Entity::Polyline(polyline) => {
                for vertex in &polyline.vertices {
                    add(*vertex);
                }
            }
            Entity::Insert(insert) => add(insert.position),
        }
    }

    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Line;

    #[test]
    fn test_bounds_creation() {
        let bounds = Bounds::new();
        assert!(!bounds.is_valid());
        assert_eq!(bounds.max_dimension(), 0.0);
        assert_eq!(bounds.min_point(), Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_bounds_expand() {
        let mut bounds = Bounds::new();
        bounds.expand(100.0, 200.0);
        bounds.expand(150.0, 250.0);

        assert!(bounds.is_valid());
        assert_eq!(bounds.min_x, 100.0);
        assert_eq!(bounds.max_x, 150.0);
        assert_eq!(bounds.width(), 50.0);
        assert_eq!(bounds.height(), 50.0);
        assert_eq!(bounds.sample_count, 2);
    }

    #[test]
    fn test_scan_raw_bounds_skips_non_finite() {
        let mut doc = DrawingDocument::new();
        doc.add_entity(Entity::Line(Line {
            start: Point2::new(0.0, 0.0),
            end: Point2::new(f64::NAN, 5.0),
            layer: "0".into(),
        }));
        doc.add_entity(Entity::Line(Line {
            start: Point2::new(10.0, 20.0),
            end: Point2::new(30.0, 40.0),
            layer: "0".into(),
        }));

        let bounds = scan_raw_bounds(&doc);
        assert_eq!(bounds.sample_count, 3);
        assert_eq!(bounds.max_x, 30.0);
        assert_eq!(bounds.max_y, 40.0);
    }
}
