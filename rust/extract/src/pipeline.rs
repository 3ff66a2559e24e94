// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end extraction pipeline
//!
//! Parse, resolve scale, extract, summarize. Pure and synchronous; hosts
//! run it on a worker thread and receive progress through an explicit
//! callback rather than any ambient channel.

use dxf_lite_core::parse_drawing;
use tracing::info;

use crate::error::Result;
use crate::extractor::extract_geometry;
use crate::health::summarize;
use crate::model::{AnalysisMetadata, CadMetadata, ExtractionResult, FloorPlan, PlanBounds};
use crate::scale::ScaleContext;

/// Discriminator for results produced by this pipeline
pub const SOURCE_TYPE: &str = "cad-dxf";

/// Provenance tags for the consuming application
pub const ANALYSIS_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AGENT_ID: &str = "dxf-lite-extractor";

/// Pipeline phase reported to the progress callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Parsing,
    ResolvingScale,
    Extracting,
    Summarizing,
}

/// Run the full pipeline without progress reporting
pub fn extract_floor_plan(content: &str, file_name: &str) -> Result<ExtractionResult> {
    extract_floor_plan_with_progress(content, file_name, |_| {})
}

/// Run the full pipeline, reporting each phase as it starts
///
/// Parse failures are fatal and returned as errors; semantically sparse
/// drawings always produce a (possibly empty) result.
pub fn extract_floor_plan_with_progress(
    content: &str,
    file_name: &str,
    mut progress: impl FnMut(Phase),
) -> Result<ExtractionResult> {
    progress(Phase::Parsing);
    let document = parse_drawing(content)?;

    progress(Phase::ResolvingScale);
    let scale = ScaleContext::resolve(&document);

    progress(Phase::Extracting);
    let geometry = extract_geometry(&document, &scale);

    progress(Phase::Summarizing);
    let health = summarize(&geometry, &scale);

    info!(
        file = file_name,
        rooms = geometry.rooms.len(),
        walls = geometry.walls.len(),
        inserts = geometry.block_inserts.len(),
        hotspots = geometry.mep_hotspots.len(),
        score = health.score,
        "floor plan extracted"
    );

    let confidence = f64::from(health.score) / 100.0;

    Ok(ExtractionResult {
        source_type: SOURCE_TYPE.to_string(),
        cad_metadata: CadMetadata {
            file_name: file_name.to_string(),
            units_label: scale.units_label.to_string(),
            scale_factor: scale.meters_per_unit,
            entity_count: document.entity_count(),
            wall_count: geometry.walls.len(),
        },
        floor_plan: FloorPlan {
            total_area_square_meters: geometry.total_room_area(),
            bounds: PlanBounds::from(&geometry.bounds),
            // Geometry is already normalized to meters
            scale: 1.0,
        },
        health_check: health,
        metadata: AnalysisMetadata {
            analysis_version: ANALYSIS_VERSION.to_string(),
            confidence,
            agent_id: AGENT_ID.to_string(),
        },
        rooms: geometry.rooms,
        walls: geometry.walls,
        block_inserts: geometry.block_inserts,
        mep_hotspots: geometry.mep_hotspots,
    })
}
