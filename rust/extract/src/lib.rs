//! DXF-Lite Floor-Plan Extraction
//!
//! Semantic interpretation of parsed DXF drawings: unit and anchor
//! resolution, room/wall/MEP classification with recursive block
//! expansion, and a health summary, packaged as one synchronous pipeline.

pub mod classify;
pub mod error;
pub mod extractor;
pub mod health;
pub mod model;
pub mod pipeline;
pub mod scale;
pub mod transform;

pub use classify::{MepCategory, RoomType};
pub use error::{Error, Result};
pub use extractor::{extract_geometry, polygon_area, ExtractedGeometry};
pub use health::summarize;
pub use model::{
    AnalysisMetadata, BlockInsertion, CadMetadata, ExtractionResult, FloorPlan, HealthIssue,
    HealthReport, MepHotspot, PlanBounds, Room, Severity, Wall, WorldPoint,
};
pub use pipeline::{extract_floor_plan, extract_floor_plan_with_progress, Phase};
pub use scale::ScaleContext;
pub use transform::LocalTransform;
