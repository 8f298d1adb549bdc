//! Technology radar: rings, item numbering, blip placement and SVG.
//!
//! The radar is drawn in a 200×200 view box centered on (100, 100). Each
//! quadrant covers a quarter turn, each ring a band between the previous
//! ring's radius and its own.

use std::fmt::Write;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use xp_cms::models::{RadarItem, RadarQuadrant, RadarRing};
use xp_markdown::escape_html;

/// Ring with its outer radius (percent of the radar radius).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingPosition {
    pub ring: RadarRing,
    pub radius: u32,
}

/// Rings from the center outwards.
pub const RINGS: [RingPosition; 4] = [
    RingPosition {
        ring: RadarRing::Adopt,
        radius: 25,
    },
    RingPosition {
        ring: RadarRing::Trial,
        radius: 50,
    },
    RingPosition {
        ring: RadarRing::Assess,
        radius: 75,
    },
    RingPosition {
        ring: RadarRing::Hold,
        radius: 100,
    },
];

/// Characters `encodeURIComponent` leaves alone.
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const CENTER: f64 = 100.0;

/// Link to a radar item page, remembering the page it was opened from.
#[must_use]
pub fn build_radar_item_link(slug: &str, parent_page_slug: Option<&str>) -> String {
    match parent_page_slug {
        Some(parent) => format!(
            "/radar-items/{slug}?from={}",
            utf8_percent_encode(parent, COMPONENT_ENCODE_SET)
        ),
        None => format!("/radar-items/{slug}"),
    }
}

/// Inner and outer radius of `ring`.
#[must_use]
pub fn ring_bounds(ring: RadarRing) -> (u32, u32) {
    let mut inner = 0;
    for position in RINGS {
        if position.ring == ring {
            return (inner, position.radius);
        }
        inner = position.radius;
    }
    (inner, inner)
}

/// Radar item with its display number and position.
#[derive(Debug, Clone, PartialEq)]
pub struct Blip<'a> {
    pub number: usize,
    pub item: &'a RadarItem,
    pub x: f64,
    pub y: f64,
}

/// Number and place items.
///
/// Items are ordered by quadrant, then ring, then title; numbers start at 1
/// and follow that order. Within a quadrant/ring cell blips are spread evenly
/// over the quarter turn and alternate between two depths of the ring band,
/// so the layout only depends on the item set.
#[must_use]
pub fn layout_blips(items: &[RadarItem]) -> Vec<Blip<'_>> {
    let mut ordered: Vec<&RadarItem> = items.iter().collect();
    ordered.sort_by(|a, b| {
        (a.quadrant.index(), a.ring, &a.title).cmp(&(b.quadrant.index(), b.ring, &b.title))
    });

    let mut blips = Vec::with_capacity(ordered.len());
    let mut start = 0;
    while start < ordered.len() {
        let cell = (ordered[start].quadrant, ordered[start].ring);
        let end = ordered[start..]
            .iter()
            .position(|item| (item.quadrant, item.ring) != cell)
            .map_or(ordered.len(), |offset| start + offset);

        let count = end - start;
        for (slot, &item) in ordered[start..end].iter().enumerate() {
            let (x, y) = blip_position(cell.0, cell.1, slot, count);
            blips.push(Blip {
                number: blips.len() + 1,
                item,
                x,
                y,
            });
        }
        start = end;
    }
    blips
}

#[expect(clippy::cast_precision_loss)]
fn blip_position(quadrant: RadarQuadrant, ring: RadarRing, slot: usize, count: usize) -> (f64, f64) {
    let (inner, outer) = ring_bounds(ring);
    let band = f64::from(outer - inner);
    let depth = if slot % 2 == 0 { 0.35 } else { 0.7 };
    let radius = f64::from(inner) + band * depth;

    let quarter = std::f64::consts::FRAC_PI_2;
    let fraction = (slot + 1) as f64 / (count + 1) as f64;
    let angle = quarter * quadrant.index() as f64 + quarter * fraction;

    (
        round2(CENTER + radius * angle.cos()),
        round2(CENTER - radius * angle.sin()),
    )
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render the radar as an inline SVG.
///
/// Blips link to their item page with `parent_page_slug` as back reference.
#[must_use]
pub fn render_radar_svg(items: &[RadarItem], parent_page_slug: Option<&str>) -> String {
    let mut svg = String::with_capacity(4096);
    svg.push_str(
        "<svg class=\"radar\" viewBox=\"0 0 200 200\" xmlns=\"http://www.w3.org/2000/svg\" \
         role=\"img\" aria-label=\"Technology radar\">\n",
    );

    for position in RINGS.iter().rev() {
        let _ = writeln!(
            svg,
            "<circle class=\"radar-ring radar-ring-{}\" cx=\"100\" cy=\"100\" r=\"{}\" fill=\"none\" stroke=\"currentColor\"/>",
            position.ring.label().to_lowercase(),
            position.radius
        );
    }
    svg.push_str("<line x1=\"0\" y1=\"100\" x2=\"200\" y2=\"100\" stroke=\"currentColor\"/>\n");
    svg.push_str("<line x1=\"100\" y1=\"0\" x2=\"100\" y2=\"200\" stroke=\"currentColor\"/>\n");

    for position in RINGS {
        let (inner, outer) = ring_bounds(position.ring);
        let _ = writeln!(
            svg,
            "<text class=\"radar-ring-label\" x=\"{}\" y=\"98\" font-size=\"4\" text-anchor=\"middle\">{}</text>",
            100 + (inner + outer) / 2,
            position.ring.label()
        );
    }

    for blip in layout_blips(items) {
        let href = build_radar_item_link(&blip.item.slug, parent_page_slug);
        let _ = writeln!(
            svg,
            "<a href=\"{}\" class=\"radar-blip radar-quadrant-{}\"><title>{}</title>\
             <circle cx=\"{}\" cy=\"{}\" r=\"3\"/>\
             <text x=\"{}\" y=\"{}\" font-size=\"3\" text-anchor=\"middle\" fill=\"white\">{}</text></a>",
            escape_html(&href),
            blip.item.quadrant.index(),
            escape_html(&blip.item.title),
            blip.x,
            blip.y,
            blip.x,
            round2(blip.y + 1.0),
            blip.number
        );
    }

    svg.push_str("</svg>");
    svg
}

/// Numbered legend per quadrant and ring.
#[must_use]
pub fn render_radar_legend(items: &[RadarItem], parent_page_slug: Option<&str>) -> String {
    let blips = layout_blips(items);
    let mut html = String::from("<div class=\"radar-legend\">\n");
    for quadrant in RadarQuadrant::ALL {
        let _ = writeln!(
            html,
            "<section class=\"radar-legend-quadrant\"><h3>{}</h3>",
            escape_html(quadrant.label())
        );
        for ring in RadarRing::ALL {
            let in_cell: Vec<&Blip<'_>> = blips
                .iter()
                .filter(|b| b.item.quadrant == quadrant && b.item.ring == ring)
                .collect();
            if in_cell.is_empty() {
                continue;
            }
            let _ = write!(html, "<h4>{}</h4><ol>", ring.label());
            for blip in in_cell {
                let _ = write!(
                    html,
                    "<li value=\"{}\"><a href=\"{}\">{}</a></li>",
                    blip.number,
                    escape_html(&build_radar_item_link(&blip.item.slug, parent_page_slug)),
                    escape_html(&blip.item.title)
                );
            }
            html.push_str("</ol>\n");
        }
        html.push_str("</section>\n");
    }
    html.push_str("</div>");
    html
}
