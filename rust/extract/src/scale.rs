// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unit and coordinate-frame resolution
//!
//! Combines the `$INSUNITS` header declaration, the extent heuristic and
//! an outlier-robust anchor into a single [`ScaleContext`] that maps raw
//! drawing coordinates into meters with the plan's lower-left corner near
//! the origin.

use dxf_lite_core::{scan_raw_bounds, units, Bounds, DrawingDocument, Entity, Point2};
use tracing::debug;

/// Closed-polyline population needed before the percentile anchor is trusted
const ANCHOR_MIN_SAMPLES: usize = 6;

/// Fallback extent when a drawing carries no geometry and no header extents
const FALLBACK_EXTENT: f64 = 100.0;

/// Resolved coordinate frame for one drawing
///
/// `normalize` applies anchor subtraction and unit scaling in one step;
/// every meter-space coordinate downstream goes through it exactly once.
#[derive(Debug, Clone, Copy)]
pub struct ScaleContext {
    /// Short unit label for metadata ("mm", "cm", "m", "in", "ft")
    pub units_label: &'static str,
    /// Multiplier from raw drawing units to meters
    pub meters_per_unit: f64,
    /// Raw-coordinate anchor subtracted before scaling
    pub anchor: Point2,
    /// Whether units came from `$INSUNITS` rather than the extent heuristic
    pub explicit_units: bool,
    /// Raw drawing extent used for resolution
    pub raw_bounds: Bounds,
}

impl ScaleContext {
    /// Resolve units and anchor for a parsed drawing
    pub fn resolve(document: &DrawingDocument) -> Self {
        let mut raw_bounds = scan_raw_bounds(document);
        if !raw_bounds.is_valid() {
            // No geometry: fall back to header extents, then a default box
            raw_bounds = match (document.header.ext_min, document.header.ext_max) {
                (Some(min), Some(max)) => Bounds::from_corners(min, max),
                _ => Bounds::from_corners(
                    Point2::new(0.0, 0.0),
                    Point2::new(FALLBACK_EXTENT, FALLBACK_EXTENT),
                ),
            };
        }

        let explicit = document.header.insunits.and_then(units::from_insunits);
        let explicit_units = explicit.is_some();
        let scale =
            explicit.unwrap_or_else(|| units::infer_from_extent(raw_bounds.max_dimension()));

        let anchor = resolve_anchor(document, &raw_bounds);

        debug!(
            units = scale.label,
            explicit = explicit_units,
            anchor_x = anchor.x,
            anchor_y = anchor.y,
            "resolved drawing scale"
        );

        Self {
            units_label: scale.label,
            meters_per_unit: scale.meters_per_unit,
            anchor,
            explicit_units,
            raw_bounds,
        }
    }

    /// Map a raw drawing point into anchored meter space
    #[inline]
    pub fn normalize(&self, point: Point2) -> Point2 {
        Point2::new(
            (point.x - self.anchor.x) * self.meters_per_unit,
            (point.y - self.anchor.y) * self.meters_per_unit,
        )
    }

    /// Scale a raw length into meters (no anchor shift)
    #[inline]
    pub fn scale_length(&self, length: f64) -> f64 {
        length * self.meters_per_unit
    }
}

/// Pick the raw-coordinate anchor
///
/// Title blocks and stray annotation far from the plan make the bounding
/// box minimum unreliable, so when enough closed polylines exist the
/// anchor is the 10th percentile of their first-vertex coordinates,
/// per axis independently. Small drawings use the box minimum.
fn resolve_anchor(document: &DrawingDocument, raw_bounds: &Bounds) -> Point2 {
    let mut xs: Vec<f64> = Vec::new();
    let mut ys: Vec<f64> = Vec::new();

    for entity in document.entities() {
        if let Entity::Polyline(polyline) = entity {
            if polyline.closed {
                let first = polyline.vertices[0];
                if first.x.is_finite() && first.y.is_finite() {
                    xs.push(first.x);
                    ys.push(first.y);
                }
            }
        }
    }

    if xs.len() < ANCHOR_MIN_SAMPLES {
        return raw_bounds.min_point();
    }

    Point2::new(percentile_10(&mut xs), percentile_10(&mut ys))
}

fn percentile_10(values: &mut [f64]) -> f64 {
    values.sort_by(|a, b| a.total_cmp(b));
    let index = ((values.len() as f64) * 0.10).floor() as usize;
    values[index.min(values.len() - 1)]
}
