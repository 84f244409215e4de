//! Minimal line highlighter producing the base map the engine layers its
//! spelling and style spans over.

use prosaic_engine::{
    Highlight, HighlightMap, LineClass,
    parsing::{
        ParsedDoc,
        kinds::{AtxHeading, ListMarker},
    },
};

pub fn base_highlights(doc: &ParsedDoc<'_>) -> HighlightMap {
    let mut map = HighlightMap::new();
    for (row, (line, class)) in doc.lines.iter().zip(&doc.classes).enumerate() {
        let end = line.trim_end().len();
        if end == 0 {
            continue;
        }
        match class {
            LineClass::Frontmatter => map.push(row, Highlight::new(0, end, "comment")),
            LineClass::FencedCode => map.push(row, Highlight::new(0, end, "string")),
            LineClass::Prose => prose_line(&mut map, row, line),
        }
    }
    map
}

fn prose_line(map: &mut HighlightMap, row: usize, line: &str) {
    let indent = line.len() - line.trim_start().len();
    let end = line.trim_end().len();

    if let Some(n) = AtxHeading::marker_len(&line[indent..]) {
        map.push(row, Highlight::new(indent, end, "heading"));
        map.push(row, Highlight::new(indent, indent + n, "heading.marker"));
    } else if let Some(n) = ListMarker::prefix_len(line) {
        let marker_end = line[..n].trim_end().len();
        map.push(row, Highlight::new(indent, marker_end, "list.marker"));
    }
}
