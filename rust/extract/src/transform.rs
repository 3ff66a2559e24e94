// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Block insertion transforms
//!
//! INSERT entities place block geometry at a position with per-axis scale
//! and a rotation. Nested inserts compose; the composed transform is a 2D
//! homogeneous matrix applied to every point visited inside the block.

use dxf_lite_core::{Insert, Point2};
use nalgebra::Matrix3;

/// Composed 2D affine transform from block-local to drawing coordinates
#[derive(Debug, Clone, Copy)]
pub struct LocalTransform {
    matrix: Matrix3<f64>,
}

impl LocalTransform {
    /// Identity transform for top-level entities
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Compose this transform with an INSERT's placement
    ///
    /// Block-local points are scaled, then rotated, then translated to the
    /// insert position, matching DXF reference order. The result maps the
    /// inserted block's local frame into the same frame `self` maps from.
    pub fn then_insert(&self, insert: &Insert) -> Self {
        let (sin, cos) = insert.rotation_deg.to_radians().sin_cos();
        let placement = Matrix3::new(
            cos * insert.scale_x,
            -sin * insert.scale_y,
            insert.position.x,
            sin * insert.scale_x,
            cos * insert.scale_y,
            insert.position.y,
            0.0,
            0.0,
            1.0,
        );
        Self {
            matrix: self.matrix * placement,
        }
    }

    /// Apply the transform to a point
    #[inline]
    pub fn apply(&self, point: Point2) -> Point2 {
        let m = &self.matrix;
        Point2::new(
            m[(0, 0)] * point.x + m[(0, 1)] * point.y + m[(0, 2)],
            m[(1, 0)] * point.x + m[(1, 1)] * point.y + m[(1, 2)],
        )
    }
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn insert(x: f64, y: f64, sx: f64, sy: f64, rot: f64) -> Insert {
        Insert {
            block_name: "B".into(),
            position: Point2::new(x, y),
            scale_x: sx,
            scale_y: sy,
            rotation_deg: rot,
            layer: "0".into(),
        }
    }

    #[test]
    fn test_identity_is_noop() {
        let t = LocalTransform::identity();
        let p = t.apply(Point2::new(3.5, -2.0));
        assert_eq!(p, Point2::new(3.5, -2.0));
    }

    #[test]
    fn test_translation_only() {
        let t = LocalTransform::identity().then_insert(&insert(100.0, 50.0, 1.0, 1.0, 0.0));
        let p = t.apply(Point2::new(10.0, 20.0));
        assert_relative_eq!(p.x, 110.0);
        assert_relative_eq!(p.y, 70.0);
    }

    #[test]
    fn test_rotation_90_degrees() {
        let t = LocalTransform::identity().then_insert(&insert(0.0, 0.0, 1.0, 1.0, 90.0));
        let p = t.apply(Point2::new(1.0, 0.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_scale_then_rotate_then_translate() {
        let t = LocalTransform::identity().then_insert(&insert(10.0, 0.0, 2.0, 3.0, 90.0));
        // (1, 1) scales to (2, 3), rotates to (-3, 2), translates to (7, 2)
        let p = t.apply(Point2::new(1.0, 1.0));
        assert_relative_eq!(p.x, 7.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_nested_inserts_compose() {
        let outer = LocalTransform::identity().then_insert(&insert(100.0, 0.0, 1.0, 1.0, 0.0));
        let inner = outer.then_insert(&insert(0.0, 50.0, 1.0, 1.0, 0.0));
        let p = inner.apply(Point2::new(1.0, 2.0));
        assert_relative_eq!(p.x, 101.0);
        assert_relative_eq!(p.y, 52.0);
    }
}
