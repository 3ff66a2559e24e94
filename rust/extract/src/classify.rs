// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Layer and block-name classification heuristics
//!
//! Architectural drawings carry semantics in naming conventions, not in
//! the format itself. All lookups here are plain ordered tables with
//! first-match-wins semantics over lower-cased names, so they stay
//! testable and extensible without touching extractor control flow.

use serde::Serialize;

/// Inferred usage of a closed room polygon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    ExecutiveOffice,
    MeetingRoom,
    Conference,
    OpenWorkspace,
    Reception,
    Corridor,
    Storage,
}

/// Building-services category for MEP hotspot markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MepCategory {
    Electrical,
    Hvac,
    Plumbing,
    FireSafety,
}

/// Room-type keywords, first match wins
///
/// "executive" must precede the generic entries so "A-ROOM-EXECUTIVE"
/// does not fall through to an area guess.
const ROOM_TYPE_KEYWORDS: &[(&str, RoomType)] = &[
    ("executive", RoomType::ExecutiveOffice),
    ("exec", RoomType::ExecutiveOffice),
    ("conference", RoomType::Conference),
    ("meeting", RoomType::MeetingRoom),
    ("open", RoomType::OpenWorkspace),
    ("workspace", RoomType::OpenWorkspace),
    ("reception", RoomType::Reception),
    ("lobby", RoomType::Reception),
    ("corridor", RoomType::Corridor),
    ("circulation", RoomType::Corridor),
    ("storage", RoomType::Storage),
    ("store", RoomType::Storage),
];

/// Wall-pattern layer substrings
const WALL_LAYER_KEYWORDS: &[&str] = &["wall", "partition", "boundaries", "boundary"];

/// MEP keyword sets, tested in declaration order
const MEP_KEYWORDS: &[(MepCategory, &[&str])] = &[
    (MepCategory::Electrical, &["elec", "power", "light", "outlet"]),
    (MepCategory::Hvac, &["hvac", "duct", "mech", "vent"]),
    (MepCategory::Plumbing, &["plumb", "pipe", "sanitary", "water"]),
    (
        MepCategory::FireSafety,
        &["fire", "sprinkler", "alarm", "smoke"],
    ),
];

/// Furniture catalog codes keyed by block-name substrings
///
/// Every substring in an entry must match, so the specific entries
/// ("desk"+"exec") stay above their generic fallbacks ("desk").
const FURNITURE_CODES: &[(&str, &[&str])] = &[
    ("DESK-EXEC-01", &["desk", "exec"]),
    ("CHAIR-EXEC-01", &["chair", "exec"]),
    ("TABLE-CONF-01", &["table", "conf"]),
    ("DESK-STD-01", &["desk"]),
    ("CHAIR-TASK-01", &["chair"]),
    ("TABLE-STD-01", &["table"]),
    ("SOFA-01", &["sofa"]),
    ("CABINET-01", &["cabinet"]),
];

/// Infer a room type from its source layer name
pub fn room_type_from_layer(layer: &str) -> Option<RoomType> {
    let lower = layer.to_lowercase();
    ROOM_TYPE_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, room_type)| *room_type)
}

/// Area-threshold fallback when the layer name says nothing
pub fn room_type_from_area(area_sqm: f64) -> RoomType {
    if area_sqm > 100.0 {
        RoomType::OpenWorkspace
    } else if area_sqm > 40.0 {
        RoomType::MeetingRoom
    } else if area_sqm > 20.0 {
        RoomType::ExecutiveOffice
    } else {
        RoomType::Corridor
    }
}

/// Whether a layer name marks wall geometry
///
/// The default layer "0" counts as a wall layer: unlayered exports put
/// their partition linework there.
pub fn is_wall_layer(layer: &str) -> bool {
    if layer == "0" {
        return true;
    }
    let lower = layer.to_lowercase();
    WALL_LAYER_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}

/// Match a layer name to an MEP category, fixed category order
pub fn mep_category(layer: &str) -> Option<MepCategory> {
    let lower = layer.to_lowercase();
    MEP_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(category, _)| *category)
}

/// Map a block name to a furniture catalog code
pub fn furniture_code(block_name: &str) -> Option<&'static str> {
    let lower = block_name.to_lowercase();
    FURNITURE_CODES
        .iter()
        .find(|(_, keywords)| keywords.iter().all(|keyword| lower.contains(keyword)))
        .map(|(code, _)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_type_from_layer() {
        assert_eq!(
            room_type_from_layer("A-ROOM-EXECUTIVE"),
            Some(RoomType::ExecutiveOffice)
        );
        assert_eq!(
            room_type_from_layer("MEETING-ROOMS"),
            Some(RoomType::MeetingRoom)
        );
        assert_eq!(room_type_from_layer("A-ROOM"), None);
        assert_eq!(room_type_from_layer(""), None);
    }

    #[test]
    fn test_room_type_area_fallback() {
        assert_eq!(room_type_from_area(150.0), RoomType::OpenWorkspace);
        assert_eq!(room_type_from_area(60.0), RoomType::MeetingRoom);
        assert_eq!(room_type_from_area(24.0), RoomType::ExecutiveOffice);
        assert_eq!(room_type_from_area(8.0), RoomType::Corridor);
    }

    #[test]
    fn test_wall_layer_patterns() {
        assert!(is_wall_layer("A-WALL"));
        assert!(is_wall_layer("partition-int"));
        assert!(is_wall_layer("Boundaries"));
        assert!(is_wall_layer("0"));
        assert!(!is_wall_layer("A-FURN"));
        assert!(!is_wall_layer("00"));
    }

    #[test]
    fn test_mep_category_order() {
        assert_eq!(mep_category("E-LIGHTING"), Some(MepCategory::Electrical));
        assert_eq!(mep_category("M-HVAC-DUCT"), Some(MepCategory::Hvac));
        assert_eq!(mep_category("P-SANITARY"), Some(MepCategory::Plumbing));
        assert_eq!(mep_category("F-SPRINKLER"), Some(MepCategory::FireSafety));
        // Electrical is tested first when a layer matches several sets
        assert_eq!(
            mep_category("FIRE-ALARM-POWER"),
            Some(MepCategory::Electrical)
        );
        assert_eq!(mep_category("A-WALL"), None);
    }

    #[test]
    fn test_stair_layer_is_not_hvac() {
        assert_eq!(mep_category("A-STAIR"), None);
    }

    #[test]
    fn test_furniture_codes_prefer_specific() {
        assert_eq!(furniture_code("CHAIR_EXEC_01"), Some("CHAIR-EXEC-01"));
        assert_eq!(furniture_code("Executive Desk"), Some("DESK-EXEC-01"));
        assert_eq!(furniture_code("TASK_CHAIR"), Some("CHAIR-TASK-01"));
        assert_eq!(furniture_code("CONF-TABLE-L"), Some("TABLE-CONF-01"));
        assert_eq!(furniture_code("DOOR_900"), None);
    }

    #[test]
    fn test_serialized_category_names() {
        assert_eq!(
            serde_json::to_string(&MepCategory::Hvac).unwrap(),
            "\"HVAC\""
        );
        assert_eq!(
            serde_json::to_string(&MepCategory::FireSafety).unwrap(),
            "\"FIRE_SAFETY\""
        );
        assert_eq!(
            serde_json::to_string(&RoomType::OpenWorkspace).unwrap(),
            "\"OPEN_WORKSPACE\""
        );
    }
}
