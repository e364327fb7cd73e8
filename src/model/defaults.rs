//! Default presets for new labels and icons

use crate::types::{Mm, Percent, Pt, Px, Rotation};

use super::label::{
    Divider, FontStyle, FontWeight, IconKind, IconPosition, LabelIcon, LineStyle, Orientation,
    TextAlign, TextSection,
};

pub const DEFAULT_FONT: &str = "Inter";
pub const TEXT_COLOR: &str = "#000000";
pub const BACKGROUND_COLOR: &str = "#ffffff";

/// Font choices offered by the editor: (display name, CSS font-family value)
pub const AVAILABLE_FONTS: &[(&str, &str)] = &[
    ("Inter", "Inter"),
    ("Roboto", "Roboto"),
    ("Open Sans", "Open Sans"),
    ("Lato", "Lato"),
    ("Montserrat", "Montserrat"),
    ("Poppins", "Poppins"),
    ("Source Sans 3", "Source Sans 3"),
    ("Nunito", "Nunito"),
    ("Raleway", "Raleway"),
    ("PT Sans", "PT Sans"),
    ("Arial", "Arial, sans-serif"),
    ("Times New Roman", "Times New Roman, serif"),
    ("Georgia", "Georgia, serif"),
    ("Courier New", "Courier New, monospace"),
];

pub fn text_section() -> TextSection {
    TextSection {
        text: String::new(),
        font_family: DEFAULT_FONT.to_string(),
        font_size: Pt(14.0),
        font_weight: FontWeight::Normal,
        font_style: FontStyle::Normal,
        color: TEXT_COLOR.to_string(),
        text_align: TextAlign::Center,
        orientation: Orientation::Vertical,
        rotation: Rotation::Deg0,
    }
}

/// Visible 1px solid black divider at a 40/60 header/body split.
pub fn divider() -> Divider {
    Divider {
        visible: true,
        color: TEXT_COLOR.to_string(),
        thickness: Px(1.0),
        height: Percent(100.0),
        vertical_position: Percent(50.0),
        horizontal_position: Percent(40.0),
        style: LineStyle::Solid,
        margin_top: Mm::mm(3.0),
        margin_bottom: Mm::mm(3.0),
        rotation: Rotation::Deg0,
    }
}

/// Starting point for icon edits on a label that has no icon yet.
pub fn icon() -> LabelIcon {
    LabelIcon {
        kind: IconKind::Symbol,
        value: String::new(),
        size: Pt(24.0),
        color: TEXT_COLOR.to_string(),
        position: IconPosition::Center,
        rotation: Rotation::Deg0,
    }
}
