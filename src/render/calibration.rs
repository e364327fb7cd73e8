//! Margin calibration sheet
//!
//! A print-scale A4 page that outlines the printable area, puts 10 mm rulers
//! along its edges and marks the sheet corners, so the real offsets of a
//! printer can be measured and entered as margins.

use glam::dvec2;

use crate::errors::RenderError;
use crate::geometry::{PrintMargins, SHEET_HEIGHT, SHEET_WIDTH, available_area, sheet_size};
use crate::types::{Mm, Point, Rect, Rotation, Scaler};

use super::defaults;
use super::svg::{GroupNode, LineNode, RectNode, Stroke, SvgNode, TextLine, TextNode, write_document};
use super::types::{Anchor, DashPattern, WritingMode};

pub const TITLE: &str = "Testdruck - Ordnerrücken-Designer";
pub const INSTRUCTIONS: &str =
    "Messen Sie die Abstände vom Papierrand zum gestrichelten Rahmen. Passen Sie die Ränder entsprechend an.";

const INK: &str = "#000000";

/// Text lines of the info block.
pub fn info_lines(margins: &PrintMargins) -> Vec<String> {
    let area = available_area(margins);
    vec![
        TITLE.to_string(),
        format!(
            "Ränder: Oben {}mm, Rechts {}mm, Unten {}mm, Links {}mm",
            margins.top, margins.right, margins.bottom, margins.left
        ),
        format!("Druckbereich: {}mm × {}mm", area.w, area.h),
        INSTRUCTIONS.to_string(),
    ]
}

/// Tick offsets along a ruler of `length`, starting at 0.
fn ticks(length: Mm) -> impl Iterator<Item = f64> {
    let step = defaults::RULER_STEP.raw();
    let count = if length.raw() > 0.0 { (length.raw() / step).floor() as usize + 1 } else { 0 };
    (0..count).map(move |i| i as f64 * step)
}

fn tick(from: glam::DVec2, to: glam::DVec2, width: f64) -> SvgNode {
    LineNode { from, to, stroke: Stroke::solid(INK, width) }.into()
}

/// Render the calibration sheet for `margins`.
pub fn calibration_svg(margins: &PrintMargins) -> Result<String, RenderError> {
    let scaler = Scaler::PRINT;
    let hairline = scaler.len(defaults::HAIRLINE.to_mm());
    let area = available_area(margins);
    let (left, top) = (margins.left.raw(), margins.top.raw());
    let (right, bottom) = (left + area.w.raw(), top + area.h.raw());
    let depth = defaults::RULER_DEPTH.raw();

    let mut nodes: Vec<SvgNode> = vec![
        RectNode {
            rect: scaler.rect(Rect::new(Point::default(), sheet_size())),
            fill: Some(defaults::SHEET_FILL.to_string()),
            stroke: None,
        }
        .into(),
    ];

    // printable area
    let (on, off) = defaults::DASHED;
    nodes.push(
        RectNode {
            rect: scaler.rect(Rect::new(Point::new(margins.left, margins.top), area)),
            fill: None,
            stroke: Some(Stroke {
                color: defaults::FRAME_COLOR.to_string(),
                width: hairline,
                dash: Some(DashPattern { on: scaler.len(on.to_mm()), off: scaler.len(off.to_mm()) }),
            }),
        }
        .into(),
    );

    // rulers on all four inner edges
    let mut rulers = Vec::new();
    for dx in ticks(area.w) {
        let x = left + dx;
        rulers.push(tick(dvec2(x, top), dvec2(x, top + depth), hairline));
        rulers.push(tick(dvec2(x, bottom - depth), dvec2(x, bottom), hairline));
    }
    for dy in ticks(area.h) {
        let y = top + dy;
        rulers.push(tick(dvec2(left, y), dvec2(left + depth, y), hairline));
        rulers.push(tick(dvec2(right - depth, y), dvec2(right, y), hairline));
    }
    nodes.push(GroupNode { label_id: None, transform: None, children: rulers }.into());

    // centre cross
    let centre = dvec2((left + right) / 2.0, (top + bottom) / 2.0);
    let half = defaults::CROSS_LENGTH.raw() / 2.0;
    let thickness = defaults::CROSS_THICKNESS.raw();
    nodes.push(tick(centre - dvec2(half, 0.0), centre + dvec2(half, 0.0), thickness));
    nodes.push(tick(centre - dvec2(0.0, half), centre + dvec2(0.0, half), thickness));

    // corner marks, one L per sheet corner
    let inset = defaults::CORNER_INSET.raw();
    let arm = defaults::CORNER_LENGTH.raw();
    let (w, h) = (SHEET_WIDTH.raw(), SHEET_HEIGHT.raw());
    for (corner, sx, sy) in [
        (dvec2(inset, inset), 1.0, 1.0),
        (dvec2(w - inset, inset), -1.0, 1.0),
        (dvec2(inset, h - inset), 1.0, -1.0),
        (dvec2(w - inset, h - inset), -1.0, -1.0),
    ] {
        nodes.push(tick(corner, corner + dvec2(sx * arm, 0.0), hairline));
        nodes.push(tick(corner, corner + dvec2(0.0, sy * arm), hairline));
    }

    // info block, with a blank line between entries
    let font_size = scaler.len(defaults::INFO_FONT_SIZE.to_mm());
    let advance = 2.0 * font_size * defaults::LINE_HEIGHT;
    let origin = dvec2(left, top) + dvec2(defaults::INFO_OFFSET.raw(), defaults::INFO_OFFSET.raw());
    let lines = info_lines(margins)
        .into_iter()
        .enumerate()
        .map(|(i, text)| TextLine { at: origin + dvec2(0.0, i as f64 * advance), text })
        .collect();
    nodes.push(
        TextNode {
            lines,
            anchor: Anchor::Start,
            font_family: Some(defaults::INFO_FONT.to_string()),
            font_size,
            bold: false,
            italic: false,
            fill: defaults::INFO_COLOR.to_string(),
            writing_mode: WritingMode::HorizontalTb,
        }
        .into(),
    );

    crate::log::debug!(top = %margins.top, left = %margins.left, "built calibration sheet");
    write_document(scaler.size(sheet_size()), "mm", Rotation::Deg0, &nodes)
}
