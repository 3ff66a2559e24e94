// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tolerant DXF section/entity parser
//!
//! Dispatches over the SECTION stream and materializes the entity kinds
//! the extraction pipeline consumes: LINE, LWPOLYLINE, legacy
//! POLYLINE/VERTEX sequences and INSERT. Everything else is skipped
//! without error, since architectural exports are full of annotation
//! entities that carry no floor-plan geometry. Only structural damage
//! (broken group pairs, unterminated sections) is fatal.

use smallvec::SmallVec;

use crate::document::{DrawingDocument, Entity, Header, Insert, Layer, Line, Point2, Polyline};
use crate::error::{Error, Result};
use crate::reader::{parse_float, parse_int, PairReader};

/// POLYLINE flag bits that mark 3D mesh variants we do not extract
const POLYLINE_MESH_FLAGS: i32 = 0x10 | 0x40;

/// Parse raw DXF text into a [`DrawingDocument`]
///
/// Missing optional sections default to empty collections. Returns a
/// [`Error::Parse`] only for structurally malformed input.
pub fn parse_drawing(content: &str) -> Result<DrawingDocument> {
    DxfParser::new(content).parse()
}

struct DxfParser<'a> {
    reader: PairReader<'a>,
}

impl<'a> DxfParser<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            reader: PairReader::new(content),
        }
    }

    fn parse(mut self) -> Result<DrawingDocument> {
        let mut document = DrawingDocument::new();

        while let Some((code, value)) = self.reader.next_pair()? {
            // 999 is the DXF comment group
            if code == 999 {
                continue;
            }
            if code != 0 {
                return Err(Error::parse(
                    self.reader.line(),
                    format!("expected group 0 (SECTION or EOF), found group {code}"),
                ));
            }
            match value {
                "SECTION" => {
                    let (name_code, name) = self
                        .reader
                        .next_pair()?
                        .ok_or_else(|| Error::UnexpectedEof("SECTION without a name".to_string()))?;
                    if name_code != 2 {
                        return Err(Error::parse(
                            self.reader.line(),
                            format!("SECTION name uses group {name_code}, expected 2"),
                        ));
                    }
                    match name {
                        "HEADER" => self.parse_header(&mut document.header)?,
                        "TABLES" => self.parse_tables(&mut document)?,
                        "BLOCKS" => self.parse_blocks(&mut document)?,
                        "ENTITIES" => self.parse_entities(&mut document)?,
                        _ => self.skip_section()?,
                    }
                }
                "EOF" => break,
                unexpected => {
                    return Err(Error::parse(
                        self.reader.line(),
                        format!("unexpected token '{unexpected}', expected SECTION or EOF"),
                    ));
                }
            }
        }

        Ok(document)
    }

    fn skip_section(&mut self) -> Result<()> {
        loop {
            match self.reader.next_pair()? {
                Some((0, "ENDSEC")) => return Ok(()),
                Some(_) => continue,
                None => {
                    return Err(Error::UnexpectedEof(
                        "SECTION not terminated by ENDSEC".to_string(),
                    ))
                }
            }
        }
    }

    /// Skip the body of an entity or record up to the next group 0
    fn skip_entity_body(&mut self) -> Result<()> {
        loop {
            match self.reader.next_pair()? {
                Some(pair @ (0, _)) => {
                    self.reader.put_back(pair);
                    return Ok(());
                }
                Some(_) => continue,
                None => return Ok(()),
            }
        }
    }

    fn parse_header(&mut self, header: &mut Header) -> Result<()> {
        let mut variable: Option<&'a str> = None;
        let mut ext_min = (None, None);
        let mut ext_max = (None, None);

        loop {
            match self.reader.next_pair()? {
                Some((0, "ENDSEC")) => break,
                Some((9, name)) => variable = Some(name),
                Some((code, value)) => match (variable, code) {
                    (Some("$INSUNITS"), 70) => {
                        header.insunits =
                            Some(parse_int(value, self.reader.line(), "$INSUNITS value")?);
                    }
                    (Some("$EXTMIN"), 10) => {
                        ext_min.0 = Some(parse_float(value, self.reader.line(), "$EXTMIN X")?);
                    }
                    (Some("$EXTMIN"), 20) => {
                        ext_min.1 = Some(parse_float(value, self.reader.line(), "$EXTMIN Y")?);
                    }
                    (Some("$EXTMAX"), 10) => {
                        ext_max.0 = Some(parse_float(value, self.reader.line(), "$EXTMAX X")?);
                    }
                    (Some("$EXTMAX"), 20) => {
                        ext_max.1 = Some(parse_float(value, self.reader.line(), "$EXTMAX Y")?);
                    }
                    _ => {}
                },
                None => {
                    return Err(Error::UnexpectedEof(
                        "HEADER not terminated by ENDSEC".to_string(),
                    ))
                }
            }
        }

        if let (Some(x), Some(y)) = ext_min {
            header.ext_min = Some(Point2::new(x, y));
        }
        if let (Some(x), Some(y)) = ext_max {
            header.ext_max = Some(Point2::new(x, y));
        }
        Ok(())
    }

    fn parse_tables(&mut self, document: &mut DrawingDocument) -> Result<()> {
        loop {
            match self.reader.next_pair()? {
                Some((0, "ENDSEC")) => return Ok(()),
                Some((0, "LAYER")) => {
                    if let Some(layer) = self.parse_layer_record()? {
                        document.add_layer(layer);
                    }
                }
                Some(_) => continue,
                None => {
                    return Err(Error::UnexpectedEof(
                        "TABLES not terminated by ENDSEC".to_string(),
                    ))
                }
            }
        }
    }

    fn parse_layer_record(&mut self) -> Result<Option<Layer>> {
        let mut name: Option<String> = None;
        let mut color = 7;

        loop {
            match self.reader.next_pair()? {
                Some(pair @ (0, _)) => {
                    self.reader.put_back(pair);
                    break;
                }
                Some((2, value)) => name = Some(value.to_string()),
                Some((62, value)) => {
                    color = parse_int(value, self.reader.line(), "LAYER color")?;
                }
                Some(_) => continue,
                None => break,
            }
        }

        Ok(name.map(|name| Layer { name, color }))
    }

    fn parse_blocks(&mut self, document: &mut DrawingDocument) -> Result<()> {
        loop {
            match self.reader.next_pair()? {
                Some((0, "ENDSEC")) => return Ok(()),
                Some((0, "BLOCK")) => self.parse_block_definition(document)?,
                Some((0, _)) => self.skip_entity_body()?,
                Some(_) => continue,
                None => {
                    return Err(Error::UnexpectedEof(
                        "BLOCKS not terminated by ENDSEC".to_string(),
                    ))
                }
            }
        }
    }

    fn parse_block_definition(&mut self, document: &mut DrawingDocument) -> Result<()> {
        let mut name: Option<String> = None;
        let mut entities: Vec<Entity> = Vec::new();

        // Block header body (name, base point, handles)
        loop {
            match self.reader.next_pair()? {
                Some(pair @ (0, _)) => {
                    self.reader.put_back(pair);
                    break;
                }
                Some((2, value)) => {
                    if name.is_none() {
                        name = Some(value.to_string());
                    }
                }
                Some(_) => continue,
                None => {
                    return Err(Error::UnexpectedEof(
                        "BLOCK not terminated by ENDBLK".to_string(),
                    ))
                }
            }
        }

        // Anonymous blocks (*Model_Space, *Paper_Space, hatch internals)
        // are consumed but not registered
        let collect = name.as_deref().is_some_and(|n| !n.starts_with('*'));

        loop {
            match self.reader.next_pair()? {
                Some((0, "ENDBLK")) => {
                    self.skip_entity_body()?;
                    break;
                }
                Some((0, kind)) => {
                    if collect {
                        if let Some(entity) = self.parse_entity(kind)? {
                            entities.push(entity);
                        }
                    } else {
                        self.skip_entity_body()?;
                    }
                }
                Some(_) => continue,
                None => {
                    return Err(Error::UnexpectedEof(
                        "BLOCK not terminated by ENDBLK".to_string(),
                    ))
                }
            }
        }

        if collect {
            if let Some(name) = name {
                document.add_block(name, entities);
            }
        }
        Ok(())
    }

    fn parse_entities(&mut self, document: &mut DrawingDocument) -> Result<()> {
        loop {
            match self.reader.next_pair()? {
                Some((0, "ENDSEC")) => return Ok(()),
                Some((0, kind)) => {
                    if let Some(entity) = self.parse_entity(kind)? {
                        document.add_entity(entity);
                    }
                }
                Some(_) => continue,
                None => {
                    return Err(Error::UnexpectedEof(
                        "ENTITIES not terminated by ENDSEC".to_string(),
                    ))
                }
            }
        }
    }

    /// Parse one entity by kind, or skip it when unsupported/degenerate
    fn parse_entity(&mut self, kind: &str) -> Result<Option<Entity>> {
        match kind {
            "LINE" => self.parse_line().map(Some),
            "LWPOLYLINE" => self.parse_lwpolyline(),
            "POLYLINE" => self.parse_polyline_sequence(),
            "INSERT" => self.parse_insert(),
            _ => {
                self.skip_entity_body()?;
                Ok(None)
            }
        }
    }

    fn parse_line(&mut self) -> Result<Entity> {
        let mut layer: Option<String> = None;
        let mut start_x = None;
        let mut start_y = None;
        let mut end_x = None;
        let mut end_y = None;

        loop {
            match self.reader.next_pair()? {
                Some(pair @ (0, _)) => {
                    self.reader.put_back(pair);
                    break;
                }
                Some((code, value)) => {
                    let line = self.reader.line();
                    match code {
                        8 => layer = Some(value.to_string()),
                        10 => start_x = Some(parse_float(value, line, "LINE start X")?),
                        20 => start_y = Some(parse_float(value, line, "LINE start Y")?),
                        11 => end_x = Some(parse_float(value, line, "LINE end X")?),
                        21 => end_y = Some(parse_float(value, line, "LINE end Y")?),
                        _ => {}
                    }
                }
                None => break,
            }
        }

        let line = self.reader.line();
        let sx = start_x.ok_or_else(|| Error::parse(line, "LINE missing start X (group 10)"))?;
        let sy = start_y.ok_or_else(|| Error::parse(line, "LINE missing start Y (group 20)"))?;
        let ex = end_x.ok_or_else(|| Error::parse(line, "LINE missing end X (group 11)"))?;
        let ey = end_y.ok_or_else(|| Error::parse(line, "LINE missing end Y (group 21)"))?;

        Ok(Entity::Line(Line {
            start: Point2::new(sx, sy),
            end: Point2::new(ex, ey),
            layer: layer.unwrap_or_else(|| "0".to_string()),
        }))
    }

    fn parse_lwpolyline(&mut self) -> Result<Option<Entity>> {
        let mut layer: Option<String> = None;
        let mut closed = false;
        let mut vertices: SmallVec<[Point2; 8]> = SmallVec::new();
        let mut pending_x: Option<f64> = None;

        loop {
            match self.reader.next_pair()? {
                Some(pair @ (0, _)) => {
                    self.reader.put_back(pair);
                    break;
                }
                Some((code, value)) => {
                    let line = self.reader.line();
                    match code {
                        8 => layer = Some(value.to_string()),
                        70 => {
                            let flags = parse_int(value, line, "LWPOLYLINE flags")?;
                            closed = flags & 0x01 == 0x01;
                        }
                        10 => {
                            let x = parse_float(value, line, "LWPOLYLINE vertex X")?;
                            if pending_x.replace(x).is_some() {
                                return Err(Error::parse(
                                    line,
                                    "LWPOLYLINE vertex X (group 10) without matching Y (group 20)",
                                ));
                            }
                        }
                        20 => {
                            let y = parse_float(value, line, "LWPOLYLINE vertex Y")?;
                            let x = pending_x.take().ok_or_else(|| {
                                Error::parse(
                                    line,
                                    "LWPOLYLINE vertex Y (group 20) without preceding X (group 10)",
                                )
                            })?;
                            vertices.push(Point2::new(x, y));
                        }
                        _ => {}
                    }
                }
                None => break,
            }
        }

        if pending_x.is_some() {
            return Err(Error::parse(
                self.reader.line(),
                "LWPOLYLINE ended with an incomplete vertex",
            ));
        }

        // Fewer than two vertices cannot form a segment
        if vertices.len() < 2 {
            return Ok(None);
        }

        Ok(Some(Entity::Polyline(Polyline {
            vertices,
            closed,
            layer: layer.unwrap_or_else(|| "0".to_string()),
        })))
    }

    /// Legacy POLYLINE header followed by VERTEX records and SEQEND
    fn parse_polyline_sequence(&mut self) -> Result<Option<Entity>> {
        let mut layer: Option<String> = None;
        let mut flags = 0;

        loop {
            match self.reader.next_pair()? {
                Some(pair @ (0, _)) => {
                    self.reader.put_back(pair);
                    break;
                }
                Some((code, value)) => {
                    let line = self.reader.line();
                    match code {
                        8 => layer = Some(value.to_string()),
                        70 => flags = parse_int(value, line, "POLYLINE flags")?,
                        _ => {}
                    }
                }
                None => break,
            }
        }

        let extract = flags & POLYLINE_MESH_FLAGS == 0;
        let mut vertices: SmallVec<[Point2; 8]> = SmallVec::new();

        loop {
            match self.reader.next_pair()? {
                Some((0, "VERTEX")) => {
                    if let Some(vertex) = self.parse_vertex_record()? {
                        if extract {
                            vertices.push(vertex);
                        }
                    }
                }
                Some((0, "SEQEND")) => {
                    self.skip_entity_body()?;
                    break;
                }
                Some(pair @ (0, _)) => {
                    self.reader.put_back(pair);
                    break;
                }
                Some(_) => continue,
                None => break,
            }
        }

        if !extract || vertices.len() < 2 {
            return Ok(None);
        }

        Ok(Some(Entity::Polyline(Polyline {
            vertices,
            closed: flags & 0x01 == 0x01,
            layer: layer.unwrap_or_else(|| "0".to_string()),
        })))
    }

    fn parse_vertex_record(&mut self) -> Result<Option<Point2>> {
        let mut x = None;
        let mut y = None;
        let mut flags = 0;

        loop {
            match self.reader.next_pair()? {
                Some(pair @ (0, _)) => {
                    self.reader.put_back(pair);
                    break;
                }
                Some((code, value)) => {
                    let line = self.reader.line();
                    match code {
                        10 => x = Some(parse_float(value, line, "VERTEX X")?),
                        20 => y = Some(parse_float(value, line, "VERTEX Y")?),
                        70 => flags = parse_int(value, line, "VERTEX flags")?,
                        _ => {}
                    }
                }
                None => break,
            }
        }

        // Face-record vertices (bit 0x80, no coordinates) carry indices, not geometry
        if flags & 0x80 != 0 && x.is_none() {
            return Ok(None);
        }

        match (x, y) {
            (Some(x), Some(y)) => Ok(Some(Point2::new(x, y))),
            _ => Ok(None),
        }
    }

    fn parse_insert(&mut self) -> Result<Option<Entity>> {
        let mut layer: Option<String> = None;
        let mut block_name: Option<String> = None;
        let mut x = 0.0;
        let mut y = 0.0;
        let mut scale_x = 1.0;
        let mut scale_y = 1.0;
        let mut rotation_deg = 0.0;

        loop {
            match self.reader.next_pair()? {
                Some(pair @ (0, _)) => {
                    self.reader.put_back(pair);
                    break;
                }
                Some((code, value)) => {
                    let line = self.reader.line();
                    match code {
                        8 => layer = Some(value.to_string()),
                        2 => block_name = Some(value.to_string()),
                        10 => x = parse_float(value, line, "INSERT X")?,
                        20 => y = parse_float(value, line, "INSERT Y")?,
                        41 => scale_x = parse_float(value, line, "INSERT X scale")?,
                        42 => scale_y = parse_float(value, line, "INSERT Y scale")?,
                        50 => rotation_deg = parse_float(value, line, "INSERT rotation")?,
                        _ => {}
                    }
                }
                None => break,
            }
        }

        // An INSERT without a block name references nothing
        let block_name = match block_name {
            Some(name) if !name.is_empty() => name,
            _ => return Ok(None),
        };

        Ok(Some(Entity::Insert(Insert {
            block_name,
            position: Point2::new(x, y),
            scale_x,
            scale_y,
            rotation_deg,
            layer: layer.unwrap_or_else(|| "0".to_string()),
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dxf(pairs: &[(&str, &str)]) -> String {
        let mut out = String::new();
        for (code, value) in pairs {
            out.push_str(code);
            out.push('\n');
            out.push_str(value);
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_empty_entities_section() {
        let content = dxf(&[
            ("0", "SECTION"),
            ("2", "ENTITIES"),
            ("0", "ENDSEC"),
            ("0", "EOF"),
        ]);
        let doc = parse_drawing(&content).unwrap();
        assert_eq!(doc.entity_count(), 0);
        assert!(doc.layers().is_empty());
    }

    #[test]
    fn test_header_insunits_and_extents() {
        let content = dxf(&[
            ("0", "SECTION"),
            ("2", "HEADER"),
            ("9", "$ACADVER"),
            ("1", "AC1009"),
            ("9", "$INSUNITS"),
            ("70", "4"),
            ("9", "$EXTMIN"),
            ("10", "0.0"),
            ("20", "0.0"),
            ("9", "$EXTMAX"),
            ("10", "12000.0"),
            ("20", "9000.0"),
            ("0", "ENDSEC"),
            ("0", "EOF"),
        ]);
        let doc = parse_drawing(&content).unwrap();
        assert_eq!(doc.header.insunits, Some(4));
        assert_eq!(doc.header.ext_min, Some(Point2::new(0.0, 0.0)));
        assert_eq!(doc.header.ext_max, Some(Point2::new(12000.0, 9000.0)));
    }

    #[test]
    fn test_line_entity() {
        let content = dxf(&[
            ("0", "SECTION"),
            ("2", "ENTITIES"),
            ("0", "LINE"),
            ("8", "A-WALL"),
            ("10", "0.0"),
            ("20", "0.0"),
            ("11", "5000.0"),
            ("21", "0.0"),
            ("0", "ENDSEC"),
            ("0", "EOF"),
        ]);
        let doc = parse_drawing(&content).unwrap();
        assert_eq!(doc.entity_count(), 1);
        match &doc.entities()[0] {
            Entity::Line(line) => {
                assert_eq!(line.layer, "A-WALL");
                assert_eq!(line.end, Point2::new(5000.0, 0.0));
            }
            other => panic!("expected Line, got {other:?}"),
        }
    }

    #[test]
    fn test_lwpolyline_closed_flag() {
        let content = dxf(&[
            ("0", "SECTION"),
            ("2", "ENTITIES"),
            ("0", "LWPOLYLINE"),
            ("8", "A-ROOM"),
            ("90", "4"),
            ("70", "1"),
            ("10", "0.0"),
            ("20", "0.0"),
            ("10", "5000.0"),
            ("20", "0.0"),
            ("10", "5000.0"),
            ("20", "4000.0"),
            ("10", "0.0"),
            ("20", "4000.0"),
            ("0", "ENDSEC"),
            ("0", "EOF"),
        ]);
        let doc = parse_drawing(&content).unwrap();
        match &doc.entities()[0] {
            Entity::Polyline(polyline) => {
                assert!(polyline.closed);
                assert_eq!(polyline.vertices.len(), 4);
                assert_eq!(polyline.layer, "A-ROOM");
            }
            other => panic!("expected Polyline, got {other:?}"),
        }
    }

    #[test]
    fn test_single_vertex_lwpolyline_dropped() {
        let content = dxf(&[
            ("0", "SECTION"),
            ("2", "ENTITIES"),
            ("0", "LWPOLYLINE"),
            ("8", "0"),
            ("10", "1.0"),
            ("20", "2.0"),
            ("0", "ENDSEC"),
            ("0", "EOF"),
        ]);
        let doc = parse_drawing(&content).unwrap();
        assert_eq!(doc.entity_count(), 0);
    }

    #[test]
    fn test_legacy_polyline_sequence() {
        let content = dxf(&[
            ("0", "SECTION"),
            ("2", "ENTITIES"),
            ("0", "POLYLINE"),
            ("8", "A-WALL"),
            ("66", "1"),
            ("70", "0"),
            ("0", "VERTEX"),
            ("10", "0.0"),
            ("20", "0.0"),
            ("0", "VERTEX"),
            ("10", "100.0"),
            ("20", "0.0"),
            ("0", "VERTEX"),
            ("10", "100.0"),
            ("20", "50.0"),
            ("0", "SEQEND"),
            ("0", "ENDSEC"),
            ("0", "EOF"),
        ]);
        let doc = parse_drawing(&content).unwrap();
        match &doc.entities()[0] {
            Entity::Polyline(polyline) => {
                assert_eq!(polyline.vertices.len(), 3);
                assert!(!polyline.closed);
            }
            other => panic!("expected Polyline, got {other:?}"),
        }
    }

    #[test]
    fn test_polyface_mesh_skipped() {
        let content = dxf(&[
            ("0", "SECTION"),
            ("2", "ENTITIES"),
            ("0", "POLYLINE"),
            ("8", "0"),
            ("70", "64"),
            ("0", "VERTEX"),
            ("10", "0.0"),
            ("20", "0.0"),
            ("0", "SEQEND"),
            ("0", "ENDSEC"),
            ("0", "EOF"),
        ]);
        let doc = parse_drawing(&content).unwrap();
        assert_eq!(doc.entity_count(), 0);
    }

    #[test]
    fn test_block_definition_and_insert() {
        let content = dxf(&[
            ("0", "SECTION"),
            ("2", "BLOCKS"),
            ("0", "BLOCK"),
            ("2", "CHAIR_EXEC_01"),
            ("10", "0.0"),
            ("20", "0.0"),
            ("0", "LINE"),
            ("8", "FURN"),
            ("10", "0.0"),
            ("20", "0.0"),
            ("11", "500.0"),
            ("21", "0.0"),
            ("0", "ENDBLK"),
            ("0", "ENDSEC"),
            ("0", "SECTION"),
            ("2", "ENTITIES"),
            ("0", "INSERT"),
            ("8", "FURN"),
            ("2", "CHAIR_EXEC_01"),
            ("10", "2000.0"),
            ("20", "3000.0"),
            ("50", "90.0"),
            ("0", "ENDSEC"),
            ("0", "EOF"),
        ]);
        let doc = parse_drawing(&content).unwrap();
        assert_eq!(doc.block_count(), 1);
        assert_eq!(doc.block("CHAIR_EXEC_01").unwrap().len(), 1);
        match &doc.entities()[0] {
            Entity::Insert(insert) => {
                assert_eq!(insert.block_name, "CHAIR_EXEC_01");
                assert_eq!(insert.position, Point2::new(2000.0, 3000.0));
                assert_eq!(insert.rotation_deg, 90.0);
                assert_eq!(insert.scale_x, 1.0);
            }
            other => panic!("expected Insert, got {other:?}"),
        }
    }

    #[test]
    fn test_anonymous_blocks_not_registered() {
        let content = dxf(&[
            ("0", "SECTION"),
            ("2", "BLOCKS"),
            ("0", "BLOCK"),
            ("2", "*Model_Space"),
            ("0", "ENDBLK"),
            ("0", "ENDSEC"),
            ("0", "EOF"),
        ]);
        let doc = parse_drawing(&content).unwrap();
        assert_eq!(doc.block_count(), 0);
    }

    #[test]
    fn test_layer_table() {
        let content = dxf(&[
            ("0", "SECTION"),
            ("2", "TABLES"),
            ("0", "TABLE"),
            ("2", "LAYER"),
            ("70", "2"),
            ("0", "LAYER"),
            ("2", "A-WALL"),
            ("62", "3"),
            ("0", "LAYER"),
            ("2", "E-LIGHTING"),
            ("62", "2"),
            ("0", "ENDTAB"),
            ("0", "ENDSEC"),
            ("0", "EOF"),
        ]);
        let doc = parse_drawing(&content).unwrap();
        assert_eq!(doc.layers().len(), 2);
        assert_eq!(doc.layers()[0].name, "A-WALL");
        assert_eq!(doc.layers()[0].color, 3);
    }

    #[test]
    fn test_unsupported_entities_skipped() {
        let content = dxf(&[
            ("0", "SECTION"),
            ("2", "ENTITIES"),
            ("0", "MTEXT"),
            ("8", "ANNOT"),
            ("1", "Total area 120 sqm"),
            ("0", "CIRCLE"),
            ("8", "0"),
            ("10", "1.0"),
            ("20", "1.0"),
            ("40", "5.0"),
            ("0", "ENDSEC"),
            ("0", "EOF"),
        ]);
        let doc = parse_drawing(&content).unwrap();
        assert_eq!(doc.entity_count(), 0);
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let doc = parse_drawing("0\nEOF\n").unwrap();
        assert_eq!(doc.entity_count(), 0);
        assert_eq!(doc.block_count(), 0);
        assert_eq!(doc.header, Header::default());
    }

    #[test]
    fn test_malformed_structure_is_fatal() {
        // Stray non-zero group at top level
        let content = "8\nA-WALL\n0\nEOF\n";
        assert!(parse_drawing(content).is_err());

        // Unterminated section
        let content = dxf(&[("0", "SECTION"), ("2", "ENTITIES"), ("0", "LINE")]);
        assert!(parse_drawing(&content).is_err());
    }
}
