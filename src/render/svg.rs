//! SVG generation for label sheets
//!
//! Output is built as a small node tree and written with `std::fmt::Write`.
//! Print sheets use millimetre user units on a `210mm × 297mm` canvas;
//! previews use CSS pixels.

use std::fmt::{self, Write};

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

use crate::errors::RenderError;
use crate::geometry::{PrintMargins, available_area, sheet_size};
use crate::layout::{SheetOrientation, layout_page, pages};
use crate::model::{FontStyle, FontWeight, Label};
use crate::types::{Point, Rect, Rotation, Scaler, Size};

use super::defaults;
use super::types::*;
use super::{RenderMode, map_label};

/// Compact number formatting: at most three decimals, no trailing zeros.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = (self.0 * 1000.0).round() / 1000.0;
        // collapse -0
        let v = if v == 0.0 { 0.0 } else { v };
        write!(f, "{v}")
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ============================================================================
// Nodes
// ============================================================================

/// Anything that can write itself as SVG markup
#[enum_dispatch]
pub trait WriteSvg {
    fn write_svg(&self, out: &mut String) -> fmt::Result;
}

/// Stroke paint shared by rects and lines
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    pub dash: Option<DashPattern>,
}

impl Stroke {
    pub fn solid(color: &str, width: f64) -> Self {
        Self { color: color.to_string(), width, dash: None }
    }

    fn write_attrs(&self, out: &mut String) -> fmt::Result {
        write!(
            out,
            r#" stroke="{}" stroke-width="{}""#,
            escape_xml(&self.color),
            Num(self.width)
        )?;
        if let Some(dash) = self.dash {
            write!(out, r#" stroke-dasharray="{} {}""#, Num(dash.on), Num(dash.off))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectNode {
    pub rect: RectOut,
    /// `None` writes `fill="none"`
    pub fill: Option<String>,
    pub stroke: Option<Stroke>,
}

impl WriteSvg for RectNode {
    fn write_svg(&self, out: &mut String) -> fmt::Result {
        let r = &self.rect;
        write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
            Num(r.origin.x),
            Num(r.origin.y),
            Num(r.size.w),
            Num(r.size.h),
            self.fill.as_deref().map(escape_xml).unwrap_or_else(|| "none".to_string())
        )?;
        if let Some(stroke) = &self.stroke {
            stroke.write_attrs(out)?;
        }
        writeln!(out, "/>")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineNode {
    pub from: DVec2,
    pub to: DVec2,
    pub stroke: Stroke,
}

impl WriteSvg for LineNode {
    fn write_svg(&self, out: &mut String) -> fmt::Result {
        write!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            Num(self.from.x),
            Num(self.from.y),
            Num(self.to.x),
            Num(self.to.y)
        )?;
        self.stroke.write_attrs(out)?;
        writeln!(out, "/>")
    }
}

/// One positioned line of a text element
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub at: DVec2,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    pub lines: Vec<TextLine>,
    pub anchor: Anchor,
    pub font_family: Option<String>,
    pub font_size: f64,
    pub bold: bool,
    pub italic: bool,
    pub fill: String,
    pub writing_mode: WritingMode,
}

impl WriteSvg for TextNode {
    fn write_svg(&self, out: &mut String) -> fmt::Result {
        write!(
            out,
            r#"<text text-anchor="{}" dominant-baseline="central" font-size="{}" fill="{}""#,
            self.anchor.as_svg(),
            Num(self.font_size),
            escape_xml(&self.fill)
        )?;
        if let Some(family) = &self.font_family {
            write!(out, r#" font-family="{}""#, escape_xml(family))?;
        }
        if self.bold {
            write!(out, r#" font-weight="bold""#)?;
        }
        if self.italic {
            write!(out, r#" font-style="italic""#)?;
        }
        if self.writing_mode == WritingMode::VerticalRl {
            write!(out, r#" writing-mode="{}""#, self.writing_mode.as_css())?;
        }
        write!(out, ">")?;
        for line in &self.lines {
            write!(
                out,
                r#"<tspan x="{}" y="{}">{}</tspan>"#,
                Num(line.at.x),
                Num(line.at.y),
                escape_xml(&line.text)
            )?;
        }
        writeln!(out, "</text>")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageNode {
    pub rect: RectOut,
    pub href: String,
}

impl WriteSvg for ImageNode {
    fn write_svg(&self, out: &mut String) -> fmt::Result {
        writeln!(
            out,
            r#"<image x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid meet" href="{}"/>"#,
            Num(self.rect.origin.x),
            Num(self.rect.origin.y),
            Num(self.rect.size.w),
            Num(self.rect.size.h),
            escape_xml(&self.href)
        )
    }
}

/// Quarter-turn rotation about a pivot, followed by a translation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate: DVec2,
    pub rotation: Rotation,
    pub pivot: DVec2,
}

impl Transform {
    pub fn rotate_about(rotation: Rotation, pivot: DVec2) -> Self {
        Self { translate: DVec2::ZERO, rotation, pivot }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.translate != DVec2::ZERO {
            parts.push(format!("translate({} {})", Num(self.translate.x), Num(self.translate.y)));
        }
        if self.rotation != Rotation::Deg0 {
            if self.pivot == DVec2::ZERO {
                parts.push(format!("rotate({})", self.rotation.degrees()));
            } else {
                parts.push(format!(
                    "rotate({} {} {})",
                    self.rotation.degrees(),
                    Num(self.pivot.x),
                    Num(self.pivot.y)
                ));
            }
        }
        f.write_str(&parts.join(" "))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupNode {
    /// Written as `data-label-id`
    pub label_id: Option<String>,
    pub transform: Option<Transform>,
    pub children: Vec<SvgNode>,
}

impl WriteSvg for GroupNode {
    fn write_svg(&self, out: &mut String) -> fmt::Result {
        write!(out, "<g")?;
        if let Some(id) = &self.label_id {
            write!(out, r#" data-label-id="{}""#, escape_xml(id))?;
        }
        if let Some(transform) = &self.transform {
            write!(out, r#" transform="{transform}""#)?;
        }
        writeln!(out, ">")?;
        for child in &self.children {
            child.write_svg(out)?;
        }
        writeln!(out, "</g>")
    }
}

#[enum_dispatch(WriteSvg)]
#[derive(Debug, Clone, PartialEq)]
pub enum SvgNode {
    Rect(RectNode),
    Line(LineNode),
    Text(TextNode),
    Image(ImageNode),
    Group(GroupNode),
}

/// Wrap `node` in a rotating group unless the rotation is a no-op.
fn rotated(node: SvgNode, rotation: Rotation, pivot: DVec2) -> SvgNode {
    if rotation == Rotation::Deg0 {
        node
    } else {
        GroupNode {
            label_id: None,
            transform: Some(Transform::rotate_about(rotation, pivot)),
            children: vec![node],
        }
        .into()
    }
}

fn to_vec(p: PointOut) -> DVec2 {
    dvec2(p.x, p.y)
}

// ============================================================================
// Label boxes
// ============================================================================

fn text_node(block: &TextBlock) -> Option<SvgNode> {
    if block.is_blank() {
        return None;
    }
    let content = block.region.content();
    let centre = content.center();
    let advance = block.font_size * defaults::LINE_HEIGHT;
    let n = block.lines.len() as f64;

    let lines = block
        .lines
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let i = i as f64;
            let at = match block.writing_mode {
                WritingMode::HorizontalTb => {
                    dvec2(block.anchor.x_in(&content), centre.y + (i - (n - 1.0) / 2.0) * advance)
                }
                // columns run right to left
                WritingMode::VerticalRl => {
                    let width = n * advance;
                    let left = match block.anchor {
                        Anchor::Start => content.origin.x,
                        Anchor::Middle => centre.x - width / 2.0,
                        Anchor::End => content.right() - width,
                    };
                    dvec2(left + (n - i - 0.5) * advance, centre.y)
                }
            };
            TextLine { at, text: text.clone() }
        })
        .collect();

    let node = TextNode {
        lines,
        anchor: match block.writing_mode {
            WritingMode::HorizontalTb => block.anchor,
            WritingMode::VerticalRl => Anchor::Middle,
        },
        font_family: Some(block.font_family.clone()),
        font_size: block.font_size,
        bold: block.font_weight == FontWeight::Bold,
        italic: block.font_style == FontStyle::Italic,
        fill: block.color.clone(),
        writing_mode: block.writing_mode,
    };
    Some(rotated(node.into(), block.rotation, to_vec(block.region.rect.center())))
}

fn divider_node(stroke: &DividerStroke) -> SvgNode {
    match stroke.dash {
        None => RectNode {
            rect: stroke.rect,
            fill: Some(stroke.color.clone()),
            stroke: None,
        }
        .into(),
        Some(dash) => {
            let (from, to) = stroke.center_line();
            LineNode {
                from: to_vec(from),
                to: to_vec(to),
                stroke: Stroke {
                    color: stroke.color.clone(),
                    width: stroke.thickness(),
                    dash: Some(dash),
                },
            }
            .into()
        }
    }
}

fn icon_node(icon: &IconOverlay) -> SvgNode {
    let footprint = icon.footprint();
    let node: SvgNode = match &icon.content {
        IconContent::Symbol { glyph, font_size, color } => TextNode {
            lines: vec![TextLine {
                at: dvec2(icon.anchor.x_in(&icon.area.content()), footprint.center().y),
                text: glyph.clone(),
            }],
            anchor: icon.anchor,
            font_family: None,
            font_size: *font_size,
            bold: false,
            italic: false,
            fill: color.clone(),
            writing_mode: WritingMode::HorizontalTb,
        }
        .into(),
        IconContent::Image { href, .. } => ImageNode {
            rect: footprint,
            href: href.clone(),
        }
        .into(),
    };
    rotated(node, icon.rotation, to_vec(footprint.center()))
}

/// Nodes of one label, back to front: background, text, divider, icon.
pub fn label_node(b: &LabelBox, border: Option<Stroke>) -> SvgNode {
    let mut children: Vec<SvgNode> = vec![
        RectNode {
            rect: b.rect,
            fill: Some(b.background.clone()),
            stroke: border,
        }
        .into(),
    ];
    children.extend(text_node(&b.header));
    children.extend(text_node(&b.body));
    children.extend(b.divider.as_ref().map(divider_node));
    children.extend(b.icon.as_ref().map(icon_node));

    GroupNode {
        label_id: Some(b.id.to_string()),
        transform: None,
        children,
    }
    .into()
}

// ============================================================================
// Sheets
// ============================================================================

fn sheet_nodes(page_labels: &[Label], margins: &PrintMargins, mode: RenderMode) -> Result<Vec<SvgNode>, RenderError> {
    let scaler = mode.scaler()?;
    let sheet = scaler.rect(Rect::new(Point::default(), sheet_size()));
    let hairline = scaler.len(defaults::HAIRLINE.to_mm());

    let mut nodes: Vec<SvgNode> = vec![
        RectNode {
            rect: sheet,
            fill: Some(defaults::SHEET_FILL.to_string()),
            stroke: mode
                .is_preview()
                .then(|| Stroke::solid(defaults::SHEET_BORDER, hairline)),
        }
        .into(),
    ];

    if mode.is_preview() {
        nodes.push(guide_node(margins, &scaler, hairline));
    }

    let placements = layout_page(page_labels, margins);
    for placement in &placements {
        let b = map_label(placement.label, &placement.rect, mode)?;
        let border = mode
            .is_preview()
            .then(|| Stroke::solid(defaults::LABEL_BORDER, hairline));
        nodes.push(label_node(&b, border));
    }

    if placements.is_empty() && mode.is_preview() {
        let centre = sheet.center();
        let hint = TextNode {
            lines: vec![TextLine {
                at: to_vec(centre),
                text: defaults::EMPTY_PAGE_HINT.to_string(),
            }],
            anchor: Anchor::Middle,
            font_family: None,
            font_size: scaler.len(defaults::HINT_FONT_SIZE.to_mm()),
            bold: false,
            italic: false,
            fill: defaults::HINT_COLOR.to_string(),
            writing_mode: WritingMode::HorizontalTb,
        };
        nodes.push(rotated(hint.into(), Rotation::Deg270, to_vec(centre)));
    }

    crate::log::debug!(labels = placements.len(), preview = mode.is_preview(), "built sheet");
    Ok(nodes)
}

/// Dashed outline of the printable area.
fn guide_node(margins: &PrintMargins, scaler: &Scaler, hairline: f64) -> SvgNode {
    let area = available_area(margins);
    let (on, off) = defaults::GUIDE_DASH;
    RectNode {
        rect: scaler.rect(Rect::new(Point::new(margins.left, margins.top), area)),
        fill: None,
        stroke: Some(Stroke {
            color: defaults::GUIDE_COLOR.to_string(),
            width: hairline,
            dash: Some(DashPattern {
                on: scaler.len(on.to_mm()),
                off: scaler.len(off.to_mm()),
            }),
        }),
    }
    .into()
}

/// Write a complete SVG document.
///
/// `units` is appended to the width and height attributes (`"mm"` for print).
/// A quarter-turn `rotation` swaps the canvas and turns the content with it.
pub(crate) fn write_document(
    size: Size<f64>,
    units: &str,
    rotation: Rotation,
    nodes: &[SvgNode],
) -> Result<String, RenderError> {
    let canvas = if rotation.is_quarter_turn() { size.transposed() } else { size };
    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}{units}" height="{h}{units}" viewBox="0 0 {w} {h}">"#,
        w = Num(canvas.w),
        h = Num(canvas.h),
    )?;

    let transform = match rotation {
        Rotation::Deg0 => None,
        Rotation::Deg90 => Some(dvec2(size.h, 0.0)),
        Rotation::Deg180 => Some(dvec2(size.w, size.h)),
        Rotation::Deg270 => Some(dvec2(0.0, size.w)),
    }
    .map(|translate| Transform { translate, rotation, pivot: DVec2::ZERO });

    match transform {
        Some(transform) => GroupNode {
            label_id: None,
            transform: Some(transform),
            children: nodes.to_vec(),
        }
        .write_svg(&mut out)?,
        None => {
            for node in nodes {
                node.write_svg(&mut out)?;
            }
        }
    }
    writeln!(out, "</svg>")?;
    Ok(out)
}

/// One A4 sheet holding `page_labels` (at most five).
pub fn sheet_svg(page_labels: &[Label], margins: &PrintMargins, mode: RenderMode) -> Result<String, RenderError> {
    let nodes = sheet_nodes(page_labels, margins, mode)?;
    let size = mode.scaler()?.size(sheet_size());
    let units = if mode.is_preview() { "" } else { "mm" };
    write_document(size, units, Rotation::Deg0, &nodes)
}

/// On-screen sheet for the given orientation, zoom included.
pub fn preview_svg(
    page_labels: &[Label],
    margins: &PrintMargins,
    orientation: SheetOrientation,
) -> Result<String, RenderError> {
    let mode = RenderMode::Preview { zoom: orientation.preview_zoom() };
    let nodes = sheet_nodes(page_labels, margins, mode)?;
    let size = mode.scaler()?.size(sheet_size());
    write_document(size, "", orientation.preview_rotation(), &nodes)
}

/// Every page of the collection at print scale, one document per sheet.
pub fn document_svgs(labels: &[Label], margins: &PrintMargins) -> Result<Vec<String>, RenderError> {
    pages(labels)
        .into_iter()
        .map(|page| sheet_svg(page, margins, RenderMode::Print))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LineStyle, TextAlign};
    use crate::types::{Mm, Percent};

    fn label(text: &str) -> Label {
        let mut l = Label::new();
        l.body.text = text.to_string();
        l
    }

    // ==================== formatting ====================

    #[test]
    fn numbers_are_compact() {
        assert_eq!(Num(10.0).to_string(), "10");
        assert_eq!(Num(65.75).to_string(), "65.75");
        assert_eq!(Num(0.26455026).to_string(), "0.265");
        assert_eq!(Num(-0.0001).to_string(), "0");
    }

    #[test]
    fn xml_is_escaped() {
        assert_eq!(escape_xml(r#"A&B <"x">"#), "A&amp;B &lt;&quot;x&quot;&gt;");
    }

    #[test]
    fn line_node_markup() {
        let node: SvgNode = LineNode {
            from: dvec2(0.0, 0.0),
            to: dvec2(0.0, 10.0),
            stroke: Stroke {
                color: "#000000".into(),
                width: 0.5,
                dash: Some(DashPattern { on: 1.0, off: 2.0 }),
            },
        }
        .into();
        let mut out = String::new();
        node.write_svg(&mut out).unwrap();
        insta::assert_snapshot!(out.trim_end(), @r##"<line x1="0" y1="0" x2="0" y2="10" stroke="#000000" stroke-width="0.5" stroke-dasharray="1 2"/>"##);
    }

    #[test]
    fn transform_formats_translate_then_rotate() {
        let t = Transform { translate: dvec2(297.0, 0.0), rotation: Rotation::Deg90, pivot: DVec2::ZERO };
        assert_eq!(t.to_string(), "translate(297 0) rotate(90)");
        let r = Transform::rotate_about(Rotation::Deg180, dvec2(5.0, 7.5));
        assert_eq!(r.to_string(), "rotate(180 5 7.5)");
    }

    // ==================== sheets ====================

    #[test]
    fn print_sheet_is_a4_in_millimetres() {
        let svg = sheet_svg(&[label("2024")], &PrintMargins::default(), RenderMode::Print).unwrap();
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="210mm" height="297mm" viewBox="0 0 210 297">"#
        ));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r##"<rect x="10" y="10" width="190" height="54" fill="#ffffff"/>"##));
        assert!(svg.contains(">2024</tspan>"));
        assert!(!svg.contains("stroke-dasharray"));
    }

    #[test]
    fn print_sheet_has_no_placeholders() {
        let mut l = Label::new();
        l.header.text.clear();
        let svg = sheet_svg(&[l.clone()], &PrintMargins::default(), RenderMode::Print).unwrap();
        assert!(!svg.contains(defaults::HEADER_PLACEHOLDER));
        let preview = sheet_svg(&[l], &PrintMargins::default(), RenderMode::Preview { zoom: 1.0 }).unwrap();
        assert!(preview.contains(defaults::HEADER_PLACEHOLDER));
    }

    #[test]
    fn slots_follow_layout() {
        let labels: Vec<_> = (0..5).map(|i| label(&i.to_string())).collect();
        let svg = sheet_svg(&labels, &PrintMargins::default(), RenderMode::Print).unwrap();
        for y in ["10", "65.75", "121.5", "177.25", "233"] {
            let needle = format!(r#"<rect x="10" y="{y}" width="190" height="54""#);
            assert!(svg.contains(&needle), "missing slot at y={y}");
        }
        assert_eq!(svg.matches("data-label-id=").count(), 5);
    }

    #[test]
    fn empty_preview_shows_guide_and_hint() {
        let svg = sheet_svg(&[], &PrintMargins::default(), RenderMode::Preview { zoom: 1.0 }).unwrap();
        assert!(svg.contains(defaults::EMPTY_PAGE_HINT));
        assert!(svg.contains(r##"stroke="#d1d5db""##));
        assert!(svg.contains("rotate(270"));

        let print = sheet_svg(&[], &PrintMargins::default(), RenderMode::Print).unwrap();
        assert!(!print.contains(defaults::EMPTY_PAGE_HINT));
    }

    #[test]
    fn dashed_divider_becomes_dashed_line() {
        let mut l = Label::new();
        l.divider.style = LineStyle::Dashed;
        l.divider.horizontal_position = Percent(50.0);
        let svg = sheet_svg(&[l], &PrintMargins::default(), RenderMode::Print).unwrap();
        assert!(svg.contains(r#"<line x1="105" y1="10" x2="105" y2="64""#));
        assert!(svg.contains(r#"stroke-dasharray="1.058 1.058""#));
    }

    #[test]
    fn rotated_text_is_wrapped_in_a_group() {
        let mut l = label("Akten");
        l.body.orientation = crate::model::Orientation::Horizontal;
        l.body.text_align = TextAlign::Left;
        l.body.rotation = Rotation::Deg90;
        let svg = sheet_svg(&[l], &PrintMargins::default(), RenderMode::Print).unwrap();
        // body region spans x 86..200, y 10..64
        assert!(svg.contains(r#"<g transform="rotate(90 143 37)">"#));
        assert!(svg.contains(r#"text-anchor="start""#));
    }

    #[test]
    fn landscape_preview_swaps_canvas() {
        let svg = preview_svg(&[label("x")], &PrintMargins::default(), SheetOrientation::Landscape).unwrap();
        assert!(svg.contains(r#"width="1122.66" height="793.8""#));
        assert!(svg.contains("translate(1122.66 0) rotate(90)"));

        let portrait = preview_svg(&[label("x")], &PrintMargins::default(), SheetOrientation::Portrait).unwrap();
        assert!(portrait.contains(r#"width="595.35" height="841.995""#));
        assert!(!portrait.contains("rotate(90)"));
    }

    #[test]
    fn document_has_one_sheet_per_page() {
        let labels: Vec<_> = (0..7).map(|_| Label::new()).collect();
        let docs = document_svgs(&labels, &PrintMargins::uniform(Mm(5.0))).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1].matches("data-label-id=").count(), 2);
        assert_eq!(document_svgs(&[], &PrintMargins::default()).unwrap().len(), 1);
    }

    #[test]
    fn image_icons_are_embedded() {
        let mut l = Label::new();
        l.icon = Some(
            crate::model::ImageData::from_bytes(b"GIF89a", "image/gif")
                .unwrap()
                .into_icon(Default::default()),
        );
        let svg = sheet_svg(&[l], &PrintMargins::default(), RenderMode::Print).unwrap();
        assert!(svg.contains(r#"href="data:image/gif;base64,R0lGODlh""#));
    }
}
