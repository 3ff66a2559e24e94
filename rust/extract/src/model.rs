// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Extraction result model
//!
//! The structures handed back to callers, serialized with camelCase
//! field names for the viewport and BOQ consumers. Everything here is
//! meter-space and immutable once the extractor has built it.

use dxf_lite_core::{Bounds, Point2};
use serde::Serialize;
use smallvec::SmallVec;

use crate::classify::{MepCategory, RoomType};

/// Axis-aligned rectangle in normalized meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl PlanBounds {
    /// Degenerate box at the origin, used when no geometry survived
    pub fn empty() -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 0.0,
            max_y: 0.0,
        }
    }
}

impl From<&Bounds> for PlanBounds {
    fn from(bounds: &Bounds) -> Self {
        if bounds.is_valid() {
            Self {
                min_x: bounds.min_x,
                min_y: bounds.min_y,
                max_x: bounds.max_x,
                max_y: bounds.max_y,
            }
        } else {
            Self::empty()
        }
    }
}

/// A point in viewport world space (Y up, plan Y mapped to Z)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A closed space recovered from a room polygon
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub inferred_type: RoomType,
    pub area_square_meters: f64,
    pub bounds: PlanBounds,
    /// Normalized polygon vertices in meters
    pub vertices: SmallVec<[Point2; 8]>,
    pub source_layer: String,
    pub confidence: f64,
}

/// One straight wall segment
///
/// `center_position` is the segment midpoint lifted to the wall's
/// vertical center: plan Y becomes world Z, world Y is height/2.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Wall {
    pub id: String,
    pub center_position: WorldPoint,
    pub length_meters: f64,
    pub height_meters: f64,
    pub thickness_meters: f64,
    pub rotation_radians: f64,
    pub source_layer: String,
}

/// A building-services marker detected from layer naming
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MepHotspot {
    pub id: String,
    pub category: MepCategory,
    pub location_meters: Point2,
    pub source_layer: String,
}

/// One INSERT entity, with its block name mapped to a catalog code
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInsertion {
    pub id: String,
    pub block_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub furniture_code: Option<String>,
    pub position_meters: Point2,
    pub rotation_degrees: f64,
    pub source_layer: String,
}

/// Severity of a health issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
}

/// A single diagnostic surfaced to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthIssue {
    pub severity: Severity,
    pub message: String,
}

/// Coarse extraction quality summary for the UI
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub score: u32,
    pub issues: Vec<HealthIssue>,
    pub recommendations: Vec<String>,
}

/// Drawing-level diagnostics for the file card
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CadMetadata {
    pub file_name: String,
    pub units_label: String,
    pub scale_factor: f64,
    pub entity_count: usize,
    pub wall_count: usize,
}

/// Normalized floor-plan envelope
///
/// `scale` is always 1.0: geometry is already in meters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlan {
    pub total_area_square_meters: f64,
    pub bounds: PlanBounds,
    pub scale: f64,
}

/// Static provenance tags attached to every result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    pub analysis_version: String,
    pub confidence: f64,
    pub agent_id: String,
}

/// The aggregate result returned to callers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub source_type: String,
    pub cad_metadata: CadMetadata,
    pub floor_plan: FloorPlan,
    pub rooms: Vec<Room>,
    pub walls: Vec<Wall>,
    pub block_inserts: Vec<BlockInsertion>,
    pub mep_hotspots: Vec<MepHotspot>,
    pub health_check: HealthReport,
    pub metadata: AnalysisMetadata,
}
