//! Label schema: text sections, divider, icon and the label itself.
//!
//! Field names serialize in camelCase so project files stay compatible with
//! the browser editor that produced them.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::LabelFormat;
use crate::types::{Mm, Percent, Pt, Px, Rotation};

use super::defaults;

/// Divider split bounds (percent of label length given to the header)
pub const HORIZONTAL_POSITION_MIN: f64 = 10.0;
pub const HORIZONTAL_POSITION_MAX: f64 = 90.0;

/// Unique label identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelId(String);

impl LabelId {
    /// Mint a fresh random (v4 UUID) id.
    pub fn generate() -> Self {
        LabelId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LabelId {
    fn from(s: &str) -> Self {
        LabelId(s.to_string())
    }
}

impl From<String> for LabelId {
    fn from(s: String) -> Self {
        LabelId(s)
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Baseline direction of a text section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    /// Top-to-bottom text flow, pre-rotated by 180°
    #[default]
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// One block of label text (header or body)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSection {
    pub text: String,
    pub font_family: String,
    pub font_size: Pt,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub color: String,
    pub text_align: TextAlign,
    pub orientation: Orientation,
    /// Applied on top of the orientation's own rotation. Older project files
    /// lack this field, hence the default.
    #[serde(default)]
    pub rotation: Rotation,
}

impl Default for TextSection {
    fn default() -> Self {
        defaults::text_section()
    }
}

impl TextSection {
    /// Copy with replaced text, size and weight; handy for presets.
    pub fn styled(text: &str, size: f64, weight: FontWeight) -> Self {
        Self {
            text: text.to_string(),
            font_size: Pt(size),
            font_weight: weight,
            ..defaults::text_section()
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }
}

/// Separator between the header and body regions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Divider {
    pub visible: bool,
    pub color: String,
    pub thickness: Px,
    /// Stroke length, percent of the available track
    pub height: Percent,
    /// 0 = top, 50 = centre, 100 = bottom
    pub vertical_position: Percent,
    /// Share of the label length given to the header, always within [10, 90]
    pub horizontal_position: Percent,
    pub style: LineStyle,
    /// Part of the schema; layout ignores it.
    pub margin_top: Mm,
    /// Part of the schema; layout ignores it.
    pub margin_bottom: Mm,
    #[serde(default)]
    pub rotation: Rotation,
}

impl Default for Divider {
    fn default() -> Self {
        defaults::divider()
    }
}

impl Divider {
    /// Re-establish the percentage invariants.
    pub fn clamp_percentages(&mut self) {
        self.horizontal_position = self
            .horizontal_position
            .clamp(HORIZONTAL_POSITION_MIN, HORIZONTAL_POSITION_MAX);
        self.height = self.height.clamp(0.0, 100.0);
        self.vertical_position = self.vertical_position.clamp(0.0, 100.0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    #[default]
    Symbol,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    Left,
    #[default]
    Center,
    Right,
}

/// Overlay symbol or embedded image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelIcon {
    #[serde(rename = "type")]
    pub kind: IconKind,
    /// The glyph, or a `data:` URL for images
    pub value: String,
    pub size: Pt,
    /// Ignored for images
    pub color: String,
    pub position: IconPosition,
    #[serde(default)]
    pub rotation: Rotation,
}

impl Default for LabelIcon {
    fn default() -> Self {
        defaults::icon()
    }
}

impl LabelIcon {
    /// An icon without a value draws nothing.
    pub fn is_drawable(&self) -> bool {
        !self.value.is_empty()
    }
}

/// The unit of design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: LabelId,
    #[serde(default)]
    pub format: LabelFormat,
    pub header: TextSection,
    pub divider: Divider,
    pub body: TextSection,
    pub background_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<LabelIcon>,
}

impl Label {
    /// A fresh label: bold "Titel" header, "2025" body, divider at 40/60.
    pub fn new() -> Self {
        Self {
            id: LabelId::generate(),
            format: LabelFormat::Standard,
            header: TextSection::styled("Titel", 16.0, FontWeight::Bold),
            divider: defaults::divider(),
            body: TextSection::styled("2025", 12.0, FontWeight::Normal),
            background_color: defaults::BACKGROUND_COLOR.to_string(),
            icon: None,
        }
    }

    /// Deep copy under a new id.
    pub fn duplicate(&self) -> Self {
        Self {
            id: LabelId::generate(),
            ..self.clone()
        }
    }

    /// Re-establish invariants on data that did not come through the edit API.
    pub fn normalize(&mut self) {
        self.divider.clamp_percentages();
    }

    /// The icon, if there is something to draw.
    pub fn drawable_icon(&self) -> Option<&LabelIcon> {
        self.icon.as_ref().filter(|icon| icon.is_drawable())
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::new()
    }
}
