// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity classification and geometry extraction
//!
//! Single pass over the top-level entity list with recursive descent into
//! block inserts. Each entity can contribute an MEP hotspot independently
//! of its room/wall classification; the paths are not mutually exclusive.

use dxf_lite_core::{Bounds, DrawingDocument, Entity, Insert, Line, Point2, Polyline};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::classify::{
    furniture_code, is_wall_layer, mep_category, room_type_from_area, room_type_from_layer,
};
use crate::model::{BlockInsertion, MepHotspot, PlanBounds, Room, Wall, WorldPoint};
use crate::scale::ScaleContext;
use crate::transform::LocalTransform;

/// Room area window in square meters, exclusive on both ends
pub const ROOM_AREA_MIN_SQM: f64 = 4.0;
pub const ROOM_AREA_MAX_SQM: f64 = 2000.0;

/// Endpoint-coincidence tolerance for treating a polyline as closed
pub const CLOSURE_TOLERANCE_M: f64 = 0.1;

/// Candidate wall segments shorter than this are dropped
pub const MIN_WALL_LENGTH_M: f64 = 0.05;

pub const DEFAULT_WALL_HEIGHT_M: f64 = 3.0;
pub const DEFAULT_WALL_THICKNESS_M: f64 = 0.15;

/// Confidence attached to rooms recovered from closed polylines
pub const ROOM_CONFIDENCE: f64 = 0.9;

/// Result-list caps for pathological inputs; excess entries are truncated
pub const MAX_ROOMS: usize = 500;
pub const MAX_WALLS: usize = 5000;

/// Self-referencing or absurdly nested block structures stop here
const MAX_BLOCK_DEPTH: usize = 8;

/// Geometry lists produced by one extraction pass
#[derive(Debug, Default)]
pub struct ExtractedGeometry {
    /// Rooms sorted by descending area, capped at [`MAX_ROOMS`]
    pub rooms: Vec<Room>,
    /// Walls in discovery order, capped at [`MAX_WALLS`]
    pub walls: Vec<Wall>,
    pub block_inserts: Vec<BlockInsertion>,
    pub mep_hotspots: Vec<MepHotspot>,
    /// Envelope of all normalized geometry in meters
    pub bounds: Bounds,
}

impl ExtractedGeometry {
    /// Sum of room areas in square meters
    pub fn total_room_area(&self) -> f64 {
        self.rooms.iter().map(|room| room.area_square_meters).sum()
    }
}

/// Absolute shoelace area of a polygon given its ordered vertices
pub fn polygon_area(vertices: &[Point2]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut doubled = 0.0;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[(i + 1) % vertices.len()];
        doubled += a.x * b.y - b.x * a.y;
    }
    (doubled / 2.0).abs()
}

/// Run the classification pass over a parsed drawing
pub fn extract_geometry(document: &DrawingDocument, scale: &ScaleContext) -> ExtractedGeometry {
    let mut extractor = Extractor {
        document,
        scale,
        rooms: Vec::new(),
        walls: Vec::new(),
        block_inserts: Vec::new(),
        mep_hotspots: Vec::new(),
        bounds: Bounds::new(),
        walls_truncated: false,
    };

    extractor.walk(document.entities(), &LocalTransform::identity(), 0);
    extractor.finish()
}

struct Extractor<'a> {
    document: &'a DrawingDocument,
    scale: &'a ScaleContext,
    rooms: Vec<Room>,
    walls: Vec<Wall>,
    block_inserts: Vec<BlockInsertion>,
    mep_hotspots: Vec<MepHotspot>,
    bounds: Bounds,
    walls_truncated: bool,
}

impl<'a> Extractor<'a> {
    fn walk(&mut self, entities: &[Entity], transform: &LocalTransform, depth: usize) {
        for entity in entities {
            match entity {
                Entity::Insert(insert) => {
                    self.record_insert(insert, transform);
                    self.detect_mep(entity, transform);
                    self.recurse_block(insert, transform, depth);
                }
                Entity::Polyline(polyline) => {
                    self.detect_mep(entity, transform);
                    self.classify_polyline(polyline, transform);
                }
                Entity::Line(line) => {
                    self.detect_mep(entity, transform);
                    self.classify_line(line, transform);
                }
            }
        }
    }

    /// Map a block-local point through the insert chain into meters
    #[inline]
    fn to_meters(&mut self, point: Point2, transform: &LocalTransform) -> Point2 {
        let normalized = self.scale.normalize(transform.apply(point));
        if normalized.x.is_finite() && normalized.y.is_finite() {
            self.bounds.expand(normalized.x, normalized.y);
        }
        normalized
    }

    fn record_insert(&mut self, insert: &Insert, transform: &LocalTransform) {
        let position = self.to_meters(insert.position, transform);
        self.block_inserts.push(BlockInsertion {
            id: format!("block-{}", self.block_inserts.len() + 1),
            block_name: insert.block_name.clone(),
            furniture_code: furniture_code(&insert.block_name).map(str::to_string),
            position_meters: position,
            rotation_degrees: insert.rotation_deg,
            source_layer: insert.layer.clone(),
        });
    }

    fn recurse_block(&mut self, insert: &Insert, transform: &LocalTransform, depth: usize) {
        if depth >= MAX_BLOCK_DEPTH {
            warn!(
                block = insert.block_name.as_str(),
                depth, "block nesting depth limit reached, not descending"
            );
            return;
        }
        match self.document.block(&insert.block_name) {
            Some(children) => {
                let child_transform = transform.then_insert(insert);
                self.walk(children, &child_transform, depth + 1);
            }
            None => {
                debug!(
                    block = insert.block_name.as_str(),
                    "INSERT references undefined block"
                );
            }
        }
    }

    fn detect_mep(&mut self, entity: &Entity, transform: &LocalTransform) {
        let Some(category) = mep_category(entity.layer()) else {
            return;
        };
        let location = self.to_meters(entity.representative_point(), transform);
        self.mep_hotspots.push(MepHotspot {
            id: format!("mep-{}", self.mep_hotspots.len() + 1),
            category,
            location_meters: location,
            source_layer: entity.layer().to_string(),
        });
    }

    fn classify_polyline(&mut self, polyline: &Polyline, transform: &LocalTransform) {
        let vertices: SmallVec<[Point2; 8]> = polyline
            .vertices
            .iter()
            .map(|vertex| self.to_meters(*vertex, transform))
            .collect();

        // Explicit flag, or endpoints that meet within tolerance in meters
        let closed = polyline.closed
            || vertices[0].distance(vertices[vertices.len() - 1]) < CLOSURE_TOLERANCE_M;

        if closed {
            let area = polygon_area(&vertices);
            if area > ROOM_AREA_MIN_SQM && area < ROOM_AREA_MAX_SQM {
                self.record_room(vertices, area, &polyline.layer);
                return;
            }
        }

        // Out-of-window closed shapes still count as walls when the layer says so
        if is_wall_layer(&polyline.layer) {
            for pair in vertices.windows(2) {
                self.record_wall(pair[0], pair[1], &polyline.layer);
            }
        }
    }

    fn classify_line(&mut self, line: &Line, transform: &LocalTransform) {
        if !is_wall_layer(&line.layer) {
            return;
        }
        let start = self.to_meters(line.start, transform);
        let end = self.to_meters(line.end, transform);
        self.record_wall(start, end, &line.layer);
    }

    fn record_room(&mut self, vertices: SmallVec<[Point2; 8]>, area: f64, layer: &str) {
        let inferred_type =
            room_type_from_layer(layer).unwrap_or_else(|| room_type_from_area(area));

        let mut bounds = Bounds::new();
        for vertex in &vertices {
            bounds.expand(vertex.x, vertex.y);
        }

        self.rooms.push(Room {
            id: format!("room-{}", self.rooms.len() + 1),
            inferred_type,
            area_square_meters: area,
            bounds: PlanBounds::from(&bounds),
            vertices,
            source_layer: layer.to_string(),
            confidence: ROOM_CONFIDENCE,
        });
    }

    fn record_wall(&mut self, start: Point2, end: Point2, layer: &str) {
        let length = start.distance(end);
        if length < MIN_WALL_LENGTH_M {
            return;
        }
        if self.walls.len() >= MAX_WALLS {
            if !self.walls_truncated {
                warn!(cap = MAX_WALLS, "wall list cap reached, truncating");
                self.walls_truncated = true;
            }
            return;
        }

        let dx = end.x - start.x;
        let dy = end.y - start.y;
        // Sign matches the viewport's coordinate handedness
        let rotation = -dy.atan2(dx);

        self.walls.push(Wall {
            id: format!("wall-{}", self.walls.len() + 1),
            center_position: WorldPoint {
                x: (start.x + end.x) / 2.0,
                y: DEFAULT_WALL_HEIGHT_M / 2.0,
                z: (start.y + end.y) / 2.0,
            },
            length_meters: length,
            height_meters: DEFAULT_WALL_HEIGHT_M,
            thickness_meters: DEFAULT_WALL_THICKNESS_M,
            rotation_radians: rotation,
            source_layer: layer.to_string(),
        });
    }

    fn finish(mut self) -> ExtractedGeometry {
        self.rooms
            .sort_by(|a, b| b.area_square_meters.total_cmp(&a.area_square_meters));
        if self.rooms.len() > MAX_ROOMS {
            warn!(cap = MAX_ROOMS, "room list cap reached, truncating");
            self.rooms.truncate(MAX_ROOMS);
        }

        ExtractedGeometry {
            rooms: self.rooms,
            walls: self.walls,
            block_inserts: self.block_inserts,
            mep_hotspots: self.mep_hotspots,
            bounds: self.bounds,
        }
    }
}
