//! Declarative description of a rendered label.
//!
//! Everything here is in output units (millimetres for print, CSS pixels
//! for previews), already scaled.

use crate::model::{FontStyle, FontWeight, LabelId};
use crate::types::{Point, Rect, Rotation, Size};

pub type RectOut = Rect<f64>;
pub type PointOut = Point<f64>;

/// Horizontal anchoring inside an area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    /// SVG `text-anchor` value
    pub fn as_svg(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }

    /// X coordinate of this anchor within `rect`.
    pub fn x_in(self, rect: &RectOut) -> f64 {
        match self {
            Anchor::Start => rect.origin.x,
            Anchor::Middle => rect.center().x,
            Anchor::End => rect.right(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritingMode {
    HorizontalTb,
    VerticalRl,
}

impl WritingMode {
    pub fn as_css(self) -> &'static str {
        match self {
            WritingMode::HorizontalTb => "horizontal-tb",
            WritingMode::VerticalRl => "vertical-rl",
        }
    }
}

/// A padded rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub rect: RectOut,
    pub padding: f64,
}

impl Region {
    /// The rectangle inside the padding. Collapses to zero size rather than
    /// going negative.
    pub fn content(&self) -> RectOut {
        let w = (self.rect.size.w - 2.0 * self.padding).max(0.0);
        let h = (self.rect.size.h - 2.0 * self.padding).max(0.0);
        Rect::new(
            Point::new(self.rect.origin.x + self.padding, self.rect.origin.y + self.padding),
            Size::new(w, h),
        )
    }
}

/// Header or body text, ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub region: Region,
    /// One entry per source line; empty when nothing is drawn
    pub lines: Vec<String>,
    /// True when `lines` holds the preview placeholder
    pub placeholder: bool,
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub color: String,
    pub anchor: Anchor,
    pub writing_mode: WritingMode,
    /// Rotations in application order (orientation flip first)
    pub transforms: Vec<Rotation>,
    /// Net effect of `transforms`
    pub rotation: Rotation,
}

impl TextBlock {
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.is_empty())
    }
}

/// Which way a divider stroke runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeAxis {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    pub on: f64,
    pub off: f64,
}

/// Visible divider as a filled rectangle, optionally dashed along `axis`
#[derive(Debug, Clone, PartialEq)]
pub struct DividerStroke {
    pub rect: RectOut,
    pub axis: StrokeAxis,
    pub color: String,
    pub dash: Option<DashPattern>,
}

impl DividerStroke {
    /// Stroke width across the axis
    pub fn thickness(&self) -> f64 {
        match self.axis {
            StrokeAxis::Vertical => self.rect.size.w,
            StrokeAxis::Horizontal => self.rect.size.h,
        }
    }

    /// Centre line of the stroke, start to end
    pub fn center_line(&self) -> (PointOut, PointOut) {
        let r = &self.rect;
        let c = r.center();
        match self.axis {
            StrokeAxis::Vertical => (Point::new(c.x, r.origin.y), Point::new(c.x, r.bottom())),
            StrokeAxis::Horizontal => (Point::new(r.origin.x, c.y), Point::new(r.right(), c.y)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum IconContent {
    Symbol { glyph: String, font_size: f64, color: String },
    /// `href` is a `data:` URL; the image fits a `max_size` square
    Image { href: String, max_size: f64 },
}

/// Icon layer drawn above both text regions
#[derive(Debug, Clone, PartialEq)]
pub struct IconOverlay {
    /// The whole label box, padded
    pub area: Region,
    pub anchor: Anchor,
    pub content: IconContent,
    pub rotation: Rotation,
}

impl IconOverlay {
    /// Extent of the drawn glyph or image, used as rotation pivot.
    pub fn footprint(&self) -> RectOut {
        let content = self.area.content();
        let side = match &self.content {
            IconContent::Symbol { font_size, .. } => *font_size,
            IconContent::Image { max_size, .. } => *max_size,
        };
        let x = match self.anchor {
            Anchor::Start => content.origin.x,
            Anchor::Middle => content.center().x - side / 2.0,
            Anchor::End => content.right() - side,
        };
        let y = content.center().y - side / 2.0;
        Rect::new(Point::new(x, y), Size::new(side, side))
    }
}

/// Complete render description of one label
#[derive(Debug, Clone, PartialEq)]
pub struct LabelBox {
    pub id: LabelId,
    pub rect: RectOut,
    pub background: String,
    pub header: TextBlock,
    pub body: TextBlock,
    pub divider: Option<DividerStroke>,
    pub icon: Option<IconOverlay>,
}
