// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # DXF-Lite Core Parser
//!
//! Tolerant, zero-copy DXF parser for architectural floor-plan drawings.
//!
//! ## Overview
//!
//! This crate provides the core parsing functionality for DXF-Lite:
//!
//! - **Pair Reading**: Zero-copy scanning of the DXF group-code/value
//!   stream using [memchr](https://docs.rs/memchr)
//! - **Section Parsing**: HEADER, TABLES, BLOCKS and ENTITIES with
//!   unknown sections and entity kinds skipped, not rejected
//! - **Unit Resolution**: `$INSUNITS` mapping plus an extent-based
//!   heuristic for drawings that omit unit metadata
//! - **Bounds Scanning**: Raw-extent computation feeding the unit
//!   heuristic and the coordinate anchor fallback
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxf_lite_core::{parse_drawing, scan_raw_bounds, units};
//!
//! let document = parse_drawing(&content)?;
//! let bounds = scan_raw_bounds(&document);
//! let scale = document
//!     .header
//!     .insunits
//!     .and_then(units::from_insunits)
//!     .unwrap_or_else(|| units::infer_from_extent(bounds.max_dimension()));
//! println!("{} entities, units {}", document.entity_count(), scale.label);
//! ```
//!
//! Semantic interpretation (rooms, walls, MEP hotspots) lives in the
//! companion `dxf-lite-extract` crate; this crate stops at the faithful
//! geometric document.

pub mod bounds;
pub mod document;
pub mod error;
pub mod parser;
pub mod reader;
pub mod units;

pub use bounds::{scan_raw_bounds, Bounds};
pub use document::{DrawingDocument, Entity, Header, Insert, Layer, Line, Point2, Polyline};
pub use error::{Error, Result};
pub use parser::parse_drawing;
pub use reader::PairReader;
pub use units::{from_insunits, infer_from_extent, UnitScale};
