use super::{Highlight, HighlightLayer, HighlightMap};

/// Combines the base syntax map with the spelling and inline style layers.
///
/// Returns a new map; `base` is left untouched. Per row the paint order is
/// base entries (relative order preserved), then spelling spans, then style
/// spans, so spelling underlines are never hidden by syntax colouring and
/// inline styles are painted last.
pub fn merge(
    base: &HighlightMap,
    spelling: &HighlightLayer,
    styles: &HighlightLayer,
) -> HighlightMap {
    let mut out = base.clone();
    for layer in [spelling, styles] {
        for (row, spans) in layer.iter() {
            for span in spans {
                out.push(row, Highlight::from(*span));
            }
        }
    }
    out
}
