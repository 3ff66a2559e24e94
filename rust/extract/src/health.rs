// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Extraction quality summary
//!
//! A coarse score and issue list for the UI, not a validation engine.
//! Baseline 70, plus 10 per populated category (rooms, walls, block
//! insertions), capped at 100.

use crate::extractor::ExtractedGeometry;
use crate::model::{HealthIssue, HealthReport, Severity};
use crate::scale::ScaleContext;

const BASELINE_SCORE: u32 = 70;
const CATEGORY_BONUS: u32 = 10;
const MAX_SCORE: u32 = 100;

/// Summarize extraction output into a [`HealthReport`]
pub fn summarize(geometry: &ExtractedGeometry, scale: &ScaleContext) -> HealthReport {
    let mut score = BASELINE_SCORE;
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    if geometry.rooms.is_empty() {
        issues.push(HealthIssue {
            severity: Severity::Warning,
            message: "No closed spaces detected; room areas and types are unavailable".to_string(),
        });
        recommendations.push(
            "Export room boundaries as closed polylines on dedicated room layers".to_string(),
        );
    } else {
        score += CATEGORY_BONUS;
    }

    if geometry.walls.is_empty() {
        issues.push(HealthIssue {
            severity: Severity::Info,
            message: "No wall segments detected".to_string(),
        });
        recommendations
            .push("Place wall linework on layers containing 'wall' or 'partition'".to_string());
    } else {
        score += CATEGORY_BONUS;
    }

    if !geometry.block_inserts.is_empty() {
        score += CATEGORY_BONUS;
    }

    if !scale.explicit_units {
        issues.push(HealthIssue {
            severity: Severity::Info,
            message: format!(
                "Drawing units were inferred from geometry extent ({})",
                scale.units_label
            ),
        });
        recommendations
            .push("Set $INSUNITS in the DXF header for reliable unit detection".to_string());
    }

    HealthReport {
        score: score.min(MAX_SCORE),
        issues,
        recommendations,
    }
}
