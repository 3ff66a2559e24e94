// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parsed drawing document model
//!
//! Immutable once parsing completes: layers, block definitions and a flat
//! list of top-level entities, each carrying its source layer name.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A 2D point in raw drawing units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// Create a new point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: Point2) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// A named layer from the TABLES section
///
/// Architectural drawings encode semantics in layer names ("A-WALL",
/// "E-LIGHTING"); the color is kept for diagnostics only.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    pub color: i32,
}

/// Header variables relevant to unit and extent resolution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    /// `$INSUNITS` code, when the exporter declared one
    pub insunits: Option<i32>,
    /// `$EXTMIN` drawing extent minimum
    pub ext_min: Option<Point2>,
    /// `$EXTMAX` drawing extent maximum
    pub ext_max: Option<Point2>,
}

/// A straight line segment
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub start: Point2,
    pub end: Point2,
    pub layer: String,
}

/// A polyline (LWPOLYLINE, or a legacy POLYLINE/VERTEX sequence)
///
/// Invariant: at least two vertices. `closed` records only the explicit
/// DXF closed flag (group 70 bit 0); endpoint-coincidence closure is a
/// meter-space question and is derived downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub vertices: SmallVec<[Point2; 8]>,
    pub closed: bool,
    pub layer: String,
}

/// A block reference placing a block definition at position/scale/rotation
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub block_name: String,
    pub position: Point2,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation_deg: f64,
    pub layer: String,
}

/// A drawable primitive from the ENTITIES section or a block definition
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Line(Line),
    Polyline(Polyline),
    Insert(Insert),
}

impl Entity {
    /// Layer name the entity was drawn on
    #[inline]
    pub fn layer(&self) -> &str {
        match self {
            Entity::Line(line) => &line.layer,
            Entity::Polyline(polyline) => &polyline.layer,
            Entity::Insert(insert) => &insert.layer,
        }
    }

    /// Representative point for point-like classification (MEP hotspots)
    ///
    /// Insert position for block references, first vertex otherwise.
    #[inline]
    pub fn representative_point(&self) -> Point2 {
        match self {
            Entity::Line(line) => line.start,
            Entity::Polyline(polyline) => polyline.vertices[0],
            Entity::Insert(insert) => insert.position,
        }
    }
}

/// A fully parsed DXF drawing
///
/// Produced once by the parser and read-only afterwards. Missing optional
/// sections (HEADER, TABLES, BLOCKS) leave the corresponding collections
/// empty rather than failing.
#[derive(Debug, Clone, Default)]
pub struct DrawingDocument {
    pub header: Header,
    layers: Vec<Layer>,
    blocks: FxHashMap<String, Vec<Entity>>,
    entities: Vec<Entity>,
}

impl DrawingDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level entity
    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Register a layer record
    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Register a block definition
    pub fn add_block(&mut self, name: String, entities: Vec<Entity>) {
        self.blocks.insert(name, entities);
    }

    /// Top-level entities in document order
    #[inline]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Number of top-level entities
    #[inline]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Layer records in table order
    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Look up a block definition's child entities
    #[inline]
    pub fn block(&self, name: &str) -> Option<&[Entity]> {
        self.blocks.get(name).map(Vec::as_slice)
    }

    /// Number of block definitions
    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_point_distance() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_representative_point_per_variant() {
        let line = Entity::Line(Line {
            start: Point2::new(1.0, 2.0),
            end: Point2::new(3.0, 4.0),
            layer: "0".into(),
        });
        assert_eq!(line.representative_point(), Point2::new(1.0, 2.0));

        let polyline = Entity::Polyline(Polyline {
            vertices: smallvec![Point2::new(5.0, 6.0), Point2::new(7.0, 8.0)],
            closed: false,
            layer: "A-WALL".into(),
        });
        assert_eq!(polyline.representative_point(), Point2::new(5.0, 6.0));

        let insert = Entity::Insert(Insert {
            block_name: "CHAIR".into(),
            position: Point2::new(9.0, 10.0),
            scale_x: 1.0,
            scale_y: 1.0,
            rotation_deg: 0.0,
            layer: "FURN".into(),
        });
        assert_eq!(insert.representative_point(), Point2::new(9.0, 10.0));
    }

    #[test]
    fn test_block_lookup() {
        let mut doc = DrawingDocument::new();
        doc.add_block("DESK".into(), Vec::new());
        assert!(doc.block("DESK").is_some());
        assert!(doc.block("CHAIR").is_none());
        assert_eq!(doc.block_count(), 1);
    }
}
