// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Drawing unit resolution
//!
//! Maps the `$INSUNITS` header code to meters-per-unit, with a geometry
//! extent heuristic for the many architectural exports that omit or lie
//! about their unit metadata.

/// A resolved drawing unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitScale {
    /// Short label ("mm", "cm", "m", "in", "ft")
    pub label: &'static str,
    /// Multiplier to convert drawing units to meters
    pub meters_per_unit: f64,
}

pub const MILLIMETERS: UnitScale = UnitScale {
    label: "mm",
    meters_per_unit: 0.001,
};
pub const CENTIMETERS: UnitScale = UnitScale {
    label: "cm",
    meters_per_unit: 0.01,
};
pub const METERS: UnitScale = UnitScale {
    label: "m",
    meters_per_unit: 1.0,
};
pub const INCHES: UnitScale = UnitScale {
    label: "in",
    meters_per_unit: 0.0254,
};
pub const FEET: UnitScale = UnitScale {
    label: "ft",
    meters_per_unit: 0.3048,
};

/// Resolve an explicit `$INSUNITS` code
///
/// Codes outside the mapped set (including 0 = unitless) return `None`
/// and fall through to the extent heuristic.
#[inline]
pub fn from_insunits(code: i32) -> Option<UnitScale> {
    match code {
        1 => Some(INCHES),
        2 => Some(FEET),
        4 => Some(MILLIMETERS),
        5 => Some(CENTIMETERS),
        6 => Some(METERS),
        _ => None,
    }
}

/// Infer units from the largest raw drawing dimension
///
/// Detailed fit-out drawings are overwhelmingly exported in millimeters,
/// so large extents favor mm: a 20 m wide office is 20000 raw units in mm
/// but only 20 in meters.
#[inline]
pub fn infer_from_extent(max_dimension: f64) -> UnitScale {
    if max_dimension > 5000.0 {
        MILLIMETERS
    } else if max_dimension > 500.0 {
        CENTIMETERS
    } else {
        METERS
    }
}
