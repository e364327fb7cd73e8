//! Tagged field updates for a label.
//!
//! Every legal mutation of a label is one variant here. Applying an edit
//! clamps the value it touches, so a label edited only through [`LabelEdit`]
//! always satisfies its range invariants.

use crate::types::{Mm, Percent, Pt, Px, Rotation};

use super::defaults;
use super::label::{
    Divider, FontStyle, FontWeight, IconKind, IconPosition, Label, LabelIcon, LineStyle,
    Orientation, TextAlign, TextSection, HORIZONTAL_POSITION_MAX, HORIZONTAL_POSITION_MIN,
};

pub const FONT_SIZE_MIN: Pt = Pt(6.0);
pub const FONT_SIZE_MAX: Pt = Pt(72.0);
pub const THICKNESS_MIN: Px = Px(1.0);
pub const THICKNESS_MAX: Px = Px(10.0);
pub const ICON_SIZE_MIN: Pt = Pt(12.0);
pub const ICON_SIZE_MAX: Pt = Pt(48.0);

fn clamp_f64(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() { lo } else { v.clamp(lo, hi) }
}

/// One change to a text section
#[derive(Debug, Clone, PartialEq)]
pub enum TextEdit {
    Text(String),
    FontFamily(String),
    FontSize(Pt),
    FontWeight(FontWeight),
    FontStyle(FontStyle),
    Color(String),
    Align(TextAlign),
    Orientation(Orientation),
    Rotation(Rotation),
    RotateClockwise,
    RotateCounterClockwise,
}

impl TextEdit {
    pub fn apply(self, section: &mut TextSection) {
        match self {
            TextEdit::Text(text) => section.text = text,
            TextEdit::FontFamily(family) => section.font_family = family,
            TextEdit::FontSize(size) => {
                section.font_size = Pt(clamp_f64(size.0, FONT_SIZE_MIN.0, FONT_SIZE_MAX.0));
            }
            TextEdit::FontWeight(weight) => section.font_weight = weight,
            TextEdit::FontStyle(style) => section.font_style = style,
            TextEdit::Color(color) => section.color = color,
            TextEdit::Align(align) => section.text_align = align,
            TextEdit::Orientation(orientation) => section.orientation = orientation,
            TextEdit::Rotation(rotation) => section.rotation = rotation,
            TextEdit::RotateClockwise => section.rotation = section.rotation.clockwise(),
            TextEdit::RotateCounterClockwise => {
                section.rotation = section.rotation.counter_clockwise();
            }
        }
    }
}

/// One change to the divider
#[derive(Debug, Clone, PartialEq)]
pub enum DividerEdit {
    Visible(bool),
    Color(String),
    Thickness(Px),
    Height(Percent),
    VerticalPosition(Percent),
    HorizontalPosition(Percent),
    Style(LineStyle),
    MarginTop(Mm),
    MarginBottom(Mm),
    Rotation(Rotation),
    RotateClockwise,
    RotateCounterClockwise,
}

impl DividerEdit {
    pub fn apply(self, divider: &mut Divider) {
        match self {
            DividerEdit::Visible(visible) => divider.visible = visible,
            DividerEdit::Color(color) => divider.color = color,
            DividerEdit::Thickness(px) => {
                divider.thickness = Px(clamp_f64(px.0, THICKNESS_MIN.0, THICKNESS_MAX.0));
            }
            DividerEdit::Height(p) => divider.height = p.clamp(0.0, 100.0),
            DividerEdit::VerticalPosition(p) => divider.vertical_position = p.clamp(0.0, 100.0),
            DividerEdit::HorizontalPosition(p) => {
                divider.horizontal_position = p.clamp(HORIZONTAL_POSITION_MIN, HORIZONTAL_POSITION_MAX);
            }
            DividerEdit::Style(style) => divider.style = style,
            DividerEdit::MarginTop(mm) => divider.margin_top = mm.max(Mm::ZERO),
            DividerEdit::MarginBottom(mm) => divider.margin_bottom = mm.max(Mm::ZERO),
            DividerEdit::Rotation(rotation) => divider.rotation = rotation,
            DividerEdit::RotateClockwise => divider.rotation = divider.rotation.clockwise(),
            DividerEdit::RotateCounterClockwise => {
                divider.rotation = divider.rotation.counter_clockwise();
            }
        }
    }
}

/// One change to the icon overlay.
///
/// Image payloads are not set here; they go through
/// [`ImageData`](super::icon::ImageData) so the size limit is enforced.
#[derive(Debug, Clone, PartialEq)]
pub enum IconEdit {
    /// Switch to a symbol icon showing `glyph`
    Symbol(String),
    Size(Pt),
    Color(String),
    Position(IconPosition),
    Rotation(Rotation),
    RotateClockwise,
    RotateCounterClockwise,
    Remove,
}

impl IconEdit {
    /// Apply to an optional icon. Edits on a missing icon start from the
    /// default preset.
    pub fn apply(self, icon: &mut Option<LabelIcon>) {
        if let IconEdit::Remove = self {
            *icon = None;
            return;
        }
        let icon = icon.get_or_insert_with(defaults::icon);
        match self {
            IconEdit::Symbol(glyph) => {
                icon.kind = IconKind::Symbol;
                icon.value = glyph;
            }
            IconEdit::Size(size) => icon.size = Pt(clamp_f64(size.0, ICON_SIZE_MIN.0, ICON_SIZE_MAX.0)),
            IconEdit::Color(color) => icon.color = color,
            IconEdit::Position(position) => icon.position = position,
            IconEdit::Rotation(rotation) => icon.rotation = rotation,
            IconEdit::RotateClockwise => icon.rotation = icon.rotation.clockwise(),
            IconEdit::RotateCounterClockwise => icon.rotation = icon.rotation.counter_clockwise(),
            IconEdit::Remove => {}
        }
    }
}

/// A single field update on a label
#[derive(Debug, Clone, PartialEq)]
pub enum LabelEdit {
    Header(TextEdit),
    Body(TextEdit),
    Divider(DividerEdit),
    Background(String),
    Icon(IconEdit),
}

impl LabelEdit {
    pub fn apply(self, label: &mut Label) {
        match self {
            LabelEdit::Header(edit) => edit.apply(&mut label.header),
            LabelEdit::Body(edit) => edit.apply(&mut label.body),
            LabelEdit::Divider(edit) => edit.apply(&mut label.divider),
            LabelEdit::Background(color) => label.background_color = color,
            LabelEdit::Icon(edit) => edit.apply(&mut label.icon),
        }
    }
}
