//! Label rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes, patterns and placeholder strings
//! - `types`: The declarative label description (`LabelBox` and its parts)
//! - `svg`: SVG generation for sheets and documents
//! - `calibration`: The margin calibration test sheet
//!
//! [`map_label`] is the single mapping from label data to a drawable box.
//! Preview and print both go through it and differ only in the scale.

pub mod calibration;
pub mod defaults;
pub mod svg;
pub mod types;

pub use calibration::calibration_svg;
pub use svg::{document_svgs, preview_svg, sheet_svg};
pub use types::*;

use crate::errors::RenderError;
use crate::model::{
    Divider, IconKind, IconPosition, Label, LabelIcon, LineStyle, Orientation, TextAlign, TextSection,
};
use crate::types::{Mm, Point, Pt, Px, Rect, RectMm, Rotation, Scaler, Size};

/// Output target of a render
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderMode {
    /// Physical output, one unit per millimetre
    Print,
    /// On-screen output in CSS pixels; `zoom = 1.0` is actual size
    Preview { zoom: f64 },
}

impl RenderMode {
    pub fn scaler(self) -> Result<Scaler, RenderError> {
        match self {
            RenderMode::Print => Ok(Scaler::PRINT),
            RenderMode::Preview { zoom } => {
                Scaler::preview(zoom).map_err(|reason| RenderError::InvalidZoom { value: zoom, reason })
            }
        }
    }

    pub fn is_preview(self) -> bool {
        matches!(self, RenderMode::Preview { .. })
    }
}

/// Which text section a block belongs to; picks the placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    Body,
}

impl Section {
    fn placeholder(self) -> &'static str {
        match self {
            Section::Header => defaults::HEADER_PLACEHOLDER,
            Section::Body => defaults::BODY_PLACEHOLDER,
        }
    }
}

/// Map a label placed at `slot` (millimetres on the sheet) to its render
/// description.
pub fn map_label(label: &Label, slot: &RectMm, mode: RenderMode) -> Result<LabelBox, RenderError> {
    let scaler = mode.scaler()?;
    let rect = scaler.rect(*slot);
    let padding = scaler.len(defaults::REGION_PADDING);

    let split = label.divider.horizontal_position.fraction() * rect.size.w;
    let header_rect = Rect::new(rect.origin, Size::new(split, rect.size.h));
    let body_rect = Rect::new(
        Point::new(rect.origin.x + split, rect.origin.y),
        Size::new(rect.size.w - split, rect.size.h),
    );

    let header = map_text(&label.header, Section::Header, Region { rect: header_rect, padding }, &scaler, mode);
    let body = map_text(&label.body, Section::Body, Region { rect: body_rect, padding }, &scaler, mode);
    let divider = map_divider(&label.divider, &rect, rect.origin.x + split, &scaler);
    let icon = label
        .drawable_icon()
        .map(|icon| map_icon(icon, Region { rect, padding }, &scaler));

    crate::log::trace!(
        id = %label.id,
        split,
        divider = divider.is_some(),
        icon = icon.is_some(),
        "mapped label"
    );

    Ok(LabelBox {
        id: label.id.clone(),
        rect,
        background: label.background_color.clone(),
        header,
        body,
        divider,
        icon,
    })
}

/// Rotations applied to a text section, in order.
///
/// Vertical text is flipped by 180° first; the section's own rotation is
/// applied on top of that.
pub fn text_transforms(section: &TextSection) -> Vec<Rotation> {
    let mut transforms = Vec::with_capacity(2);
    if section.orientation == Orientation::Vertical {
        transforms.push(Rotation::Deg180);
    }
    if section.rotation != Rotation::Deg0 {
        transforms.push(section.rotation);
    }
    transforms
}

fn map_text(section: &TextSection, which: Section, region: Region, scaler: &Scaler, mode: RenderMode) -> TextBlock {
    let transforms = text_transforms(section);
    let rotation = transforms.iter().fold(Rotation::Deg0, |acc, r| acc.then(*r));

    let placeholder = section.text.is_empty() && mode.is_preview();
    let lines = if placeholder {
        vec![which.placeholder().to_string()]
    } else if section.text.is_empty() {
        Vec::new()
    } else {
        section.text.split('\n').map(str::to_string).collect()
    };

    TextBlock {
        region,
        lines,
        placeholder,
        font_family: section.font_family.clone(),
        font_size: scaler.len(section.font_size.to_mm()),
        font_weight: section.font_weight,
        font_style: section.font_style,
        color: if placeholder {
            defaults::PLACEHOLDER_COLOR.to_string()
        } else {
            section.color.clone()
        },
        anchor: match section.text_align {
            TextAlign::Left => Anchor::Start,
            TextAlign::Center => Anchor::Middle,
            TextAlign::Right => Anchor::End,
        },
        writing_mode: match section.orientation {
            Orientation::Horizontal => WritingMode::HorizontalTb,
            Orientation::Vertical => WritingMode::VerticalRl,
        },
        transforms,
        rotation,
    }
}

/// Place the divider stroke on the header/body split at `split_x`.
///
/// The stroke length is `height`% of the box height for both axes. The
/// stroke slides along the free vertical track by `vertical_position`: 0
/// touches the top edge, 50 centres it, 100 touches the bottom edge.
fn map_divider(divider: &Divider, rect: &RectOut, split_x: f64, scaler: &Scaler) -> Option<DividerStroke> {
    if !divider.visible {
        return None;
    }
    let thickness = scaler.len(divider.thickness.to_mm());
    let length = divider.height.fraction() * rect.size.h;
    let along = divider.vertical_position.fraction();

    let (axis, size) = if divider.rotation.is_quarter_turn() {
        (StrokeAxis::Horizontal, Size::new(length, thickness))
    } else {
        (StrokeAxis::Vertical, Size::new(thickness, length))
    };
    let x = split_x - size.w / 2.0;
    let y = rect.origin.y + (rect.size.h - size.h) * along;

    Some(DividerStroke {
        rect: Rect::new(Point::new(x, y), size),
        axis,
        color: divider.color.clone(),
        dash: dash_pattern(divider.style, scaler),
    })
}

/// On/off pattern for a line style, in output units. Solid lines have none.
pub fn dash_pattern(style: LineStyle, scaler: &Scaler) -> Option<DashPattern> {
    let (on, off): (Px, Px) = match style {
        LineStyle::Solid => return None,
        LineStyle::Dashed => defaults::DASHED,
        LineStyle::Dotted => defaults::DOTTED,
    };
    Some(DashPattern {
        on: scaler.len(on.to_mm()),
        off: scaler.len(off.to_mm()),
    })
}

fn map_icon(icon: &LabelIcon, area: Region, scaler: &Scaler) -> IconOverlay {
    let content = match icon.kind {
        IconKind::Symbol => IconContent::Symbol {
            glyph: icon.value.clone(),
            font_size: scaler.len(icon.size.to_mm()),
            color: icon.color.clone(),
        },
        IconKind::Image => IconContent::Image {
            href: icon.value.clone(),
            max_size: scaler.len(image_box(icon.size)),
        },
    };
    IconOverlay {
        area,
        anchor: match icon.position {
            IconPosition::Left => Anchor::Start,
            IconPosition::Center => Anchor::Middle,
            IconPosition::Right => Anchor::End,
        },
        content,
        rotation: icon.rotation,
    }
}

/// Side of the square an image icon of `size` fits into.
fn image_box(size: Pt) -> Mm {
    Px(size.raw() * defaults::IMAGE_SIZE_FACTOR).to_mm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FontWeight, LabelIcon};
    use crate::types::{Percent, Px, PX_PER_MM};

    fn slot() -> RectMm {
        Rect::new(Point::new(Mm(10.0), Mm(10.0)), Size::new(Mm(190.0), Mm(54.0)))
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn print(label: &Label) -> LabelBox {
        map_label(label, &slot(), RenderMode::Print).unwrap()
    }

    // ==================== regions ====================

    #[test]
    fn regions_split_at_horizontal_position() {
        let b = print(&Label::new());
        assert!(close(b.header.region.rect.size.w, 76.0));
        assert!(close(b.body.region.rect.origin.x, 86.0));
        assert!(close(b.body.region.rect.size.w, 114.0));
        assert!(close(b.header.region.padding, 2.0));
    }

    #[test]
    fn split_ignores_divider_visibility() {
        let mut label = Label::new();
        label.divider.visible = false;
        label.divider.horizontal_position = Percent(25.0);
        let b = print(&label);
        assert!(b.divider.is_none());
        assert!(close(b.header.region.rect.size.w, 47.5));
    }

    #[test]
    fn preview_scales_by_zoom() {
        let label = Label::new();
        let b = map_label(&label, &slot(), RenderMode::Preview { zoom: 0.5 }).unwrap();
        assert!(close(b.rect.size.w, 190.0 * PX_PER_MM * 0.5));
        assert!(close(b.rect.origin.y, 10.0 * PX_PER_MM * 0.5));
        let p = print(&label);
        assert!(close(b.header.font_size, p.header.font_size * PX_PER_MM * 0.5));
    }

    #[test]
    fn invalid_zoom_is_rejected() {
        let err = map_label(&Label::new(), &slot(), RenderMode::Preview { zoom: -1.0 }).unwrap_err();
        assert!(matches!(err, RenderError::InvalidZoom { .. }));
    }

    // ==================== text ====================

    #[test]
    fn vertical_text_is_flipped_then_rotated() {
        let mut label = Label::new();
        label.header.rotation = Rotation::Deg90;
        let b = print(&label);
        assert_eq!(b.header.transforms, vec![Rotation::Deg180, Rotation::Deg90]);
        assert_eq!(b.header.rotation, Rotation::Deg270);
        assert_eq!(b.header.writing_mode, WritingMode::VerticalRl);
    }

    #[test]
    fn horizontal_unrotated_text_has_no_transforms() {
        let mut label = Label::new();
        label.body.orientation = Orientation::Horizontal;
        label.body.text_align = TextAlign::Right;
        let b = print(&label);
        assert!(b.body.transforms.is_empty());
        assert_eq!(b.body.rotation, Rotation::Deg0);
        assert_eq!(b.body.anchor, Anchor::End);
        assert_eq!(b.body.writing_mode, WritingMode::HorizontalTb);
    }

    #[test]
    fn empty_text_shows_placeholder_in_preview_only() {
        let mut label = Label::new();
        label.header.text.clear();
        label.body.text.clear();

        let preview = map_label(&label, &slot(), RenderMode::Preview { zoom: 1.0 }).unwrap();
        assert_eq!(preview.header.lines, vec!["Titel eingeben...".to_string()]);
        assert_eq!(preview.body.lines, vec!["Text eingeben...".to_string()]);
        assert!(preview.header.placeholder);

        let printed = print(&label);
        assert!(printed.header.lines.is_empty());
        assert!(printed.body.is_blank());
        assert!(!printed.body.placeholder);
    }

    #[test]
    fn multi_line_text_keeps_lines() {
        let mut label = Label::new();
        label.body.text = "Buchhaltung\n2025".into();
        assert_eq!(print(&label).body.lines, vec!["Buchhaltung", "2025"]);
    }

    #[test]
    fn font_size_is_converted_from_points() {
        let label = crate::model::TextSection::styled("x", 72.0, FontWeight::Normal);
        let mut l = Label::new();
        l.header = label;
        assert!(close(print(&l).header.font_size, 25.4));
    }

    // ==================== divider ====================

    #[test]
    fn vertical_divider_centred_on_split() {
        let b = print(&Label::new());
        let d = b.divider.unwrap();
        assert_eq!(d.axis, StrokeAxis::Vertical);
        let t = Px(1.0).to_mm().raw();
        assert!(close(d.rect.size.w, t));
        assert!(close(d.rect.center().x, 86.0));
        assert!(close(d.rect.size.h, 54.0));
        assert!(close(d.rect.origin.y, 10.0));
        assert!(d.dash.is_none());
    }

    #[test]
    fn vertical_position_slides_the_stroke() {
        let mut label = Label::new();
        label.divider.height = Percent(50.0);
        for (vp, y) in [(0.0, 10.0), (50.0, 23.5), (100.0, 37.0)] {
            label.divider.vertical_position = Percent(vp);
            let d = print(&label).divider.unwrap();
            assert!(close(d.rect.origin.y, y), "vp {vp}: {}", d.rect.origin.y);
        }
    }

    #[test]
    fn quarter_turn_divider_is_horizontal() {
        let mut label = Label::new();
        label.divider.rotation = Rotation::Deg270;
        label.divider.height = Percent(50.0);
        label.divider.thickness = Px(3.78);
        label.divider.style = LineStyle::Dotted;
        let d = print(&label).divider.unwrap();
        assert_eq!(d.axis, StrokeAxis::Horizontal);
        assert!(close(d.rect.size.w, 27.0));
        assert!(close(d.thickness(), 1.0));
        assert!(close(d.rect.center().x, 86.0));
        assert!(close(d.rect.center().y, 37.0));
        let dash = d.dash.unwrap();
        assert!(close(dash.on, 2.0 / PX_PER_MM));
        assert!(close(dash.off, 4.0 / PX_PER_MM));
        let (from, to) = d.center_line();
        assert!(close(from.y, to.y));
        assert!(close(to.x - from.x, 27.0));
    }

    #[test]
    fn dashed_pattern_in_preview_pixels() {
        let scaler = RenderMode::Preview { zoom: 1.0 }.scaler().unwrap();
        let dash = dash_pattern(LineStyle::Dashed, &scaler).unwrap();
        assert!(close(dash.on, 4.0));
        assert!(close(dash.off, 4.0));
        assert!(dash_pattern(LineStyle::Solid, &scaler).is_none());
    }

    // ==================== icon ====================

    #[test]
    fn icon_without_value_draws_nothing() {
        let mut label = Label::new();
        label.icon = Some(LabelIcon::default());
        assert!(print(&label).icon.is_none());
    }

    #[test]
    fn symbol_icon_spans_the_box() {
        let mut label = Label::new();
        label.icon = Some(LabelIcon {
            value: "€".into(),
            position: IconPosition::Left,
            rotation: Rotation::Deg90,
            ..LabelIcon::default()
        });
        let icon = map_label(&label, &slot(), RenderMode::Preview { zoom: 2.0 }).unwrap().icon.unwrap();
        assert_eq!(icon.anchor, Anchor::Start);
        assert_eq!(icon.rotation, Rotation::Deg90);
        assert!(close(icon.area.rect.size.w, 190.0 * PX_PER_MM * 2.0));
        match icon.content {
            IconContent::Symbol { font_size, .. } => {
                assert!(close(font_size, Pt(24.0).to_mm().raw() * PX_PER_MM * 2.0));
            }
            other => panic!("expected symbol, got {other:?}"),
        }
    }

    #[test]
    fn image_icon_box_is_one_and_a_half_times_size() {
        let mut label = Label::new();
        label.icon = Some(LabelIcon {
            kind: IconKind::Image,
            value: "data:image/png;base64,AAAA".into(),
            size: Pt(24.0),
            ..LabelIcon::default()
        });
        let icon = map_label(&label, &slot(), RenderMode::Preview { zoom: 1.0 }).unwrap().icon.unwrap();
        match icon.content {
            IconContent::Image { max_size, .. } => assert!(close(max_size, 36.0)),
            other => panic!("expected image, got {other:?}"),
        }
        let fp = icon.footprint();
        assert!(close(fp.size.w, 36.0));
    }
}
