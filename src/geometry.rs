//! Fixed physical geometry: the A4 sheet, the one supported label format and
//! the printable area left over by the print margins.

use serde::{Deserialize, Serialize};

use crate::types::{Mm, Size, SizeMm};

/// A4 sheet width
pub const SHEET_WIDTH: Mm = Mm::mm(210.0);
/// A4 sheet height
pub const SHEET_HEIGHT: Mm = Mm::mm(297.0);

/// Smallest allowed print margin
pub const MARGIN_MIN: Mm = Mm::mm(0.0);
/// Largest allowed print margin
pub const MARGIN_MAX: Mm = Mm::mm(50.0);

pub fn sheet_size() -> SizeMm {
    Size::new(SHEET_WIDTH, SHEET_HEIGHT)
}

/// Physical description of a label format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelDimensions {
    /// Short axis (the folder spine width)
    pub width: Mm,
    /// Long axis (the label length)
    pub height: Mm,
    pub name: &'static str,
    pub model: &'static str,
    pub labels_per_sheet: usize,
    pub folder_width: &'static str,
}

impl LabelDimensions {
    /// Size of the label as placed on the sheet.
    ///
    /// Labels lie across the sheet, so the declared width and height swap:
    /// placement width is the long axis and placement height the short one.
    pub fn effective_size(&self) -> SizeMm {
        Size::new(self.width, self.height).transposed()
    }
}

/// Avery Zweckform C32267 folder insert labels.
pub const C32267: LabelDimensions = LabelDimensions {
    width: Mm::mm(54.0),
    height: Mm::mm(190.0),
    name: "Avery C32267",
    model: "C32267",
    labels_per_sheet: 5,
    folder_width: "5,5 cm",
};

/// Supported label formats. There is exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelFormat {
    #[default]
    Standard,
}

impl LabelFormat {
    pub fn dimensions(self) -> &'static LabelDimensions {
        match self {
            LabelFormat::Standard => &C32267,
        }
    }
}

/// One edge of the sheet, used to address a single margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarginSide {
    Top,
    Right,
    Bottom,
    Left,
}

/// Distances from the sheet edges to the printable area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrintMargins {
    pub top: Mm,
    pub right: Mm,
    pub bottom: Mm,
    pub left: Mm,
}

impl Default for PrintMargins {
    fn default() -> Self {
        Self::uniform(Mm::mm(10.0))
    }
}

impl PrintMargins {
    pub fn uniform(m: Mm) -> Self {
        Self { top: m, right: m, bottom: m, left: m }
    }

    pub fn get(&self, side: MarginSide) -> Mm {
        match side {
            MarginSide::Top => self.top,
            MarginSide::Right => self.right,
            MarginSide::Bottom => self.bottom,
            MarginSide::Left => self.left,
        }
    }

    /// Return a copy with one side replaced, clamped to `[0, 50]` mm.
    pub fn with_side(mut self, side: MarginSide, value: Mm) -> Self {
        let value = value.clamp(MARGIN_MIN, MARGIN_MAX);
        match side {
            MarginSide::Top => self.top = value,
            MarginSide::Right => self.right = value,
            MarginSide::Bottom => self.bottom = value,
            MarginSide::Left => self.left = value,
        }
        self
    }

    /// Every side clamped to `[0, 50]` mm.
    pub fn clamped(self) -> Self {
        Self {
            top: self.top.clamp(MARGIN_MIN, MARGIN_MAX),
            right: self.right.clamp(MARGIN_MIN, MARGIN_MAX),
            bottom: self.bottom.clamp(MARGIN_MIN, MARGIN_MAX),
            left: self.left.clamp(MARGIN_MIN, MARGIN_MAX),
        }
    }
}

/// Printable area inside the margins.
///
/// Not clamped: margins wider than the sheet yield negative dimensions, which
/// is a caller error.
pub fn available_area(margins: &PrintMargins) -> SizeMm {
    let area = Size::new(
        SHEET_WIDTH - margins.left - margins.right,
        SHEET_HEIGHT - margins.top - margins.bottom,
    );
    if area.w <= Mm::ZERO || area.h <= Mm::ZERO {
        crate::log::warn!(width = area.w.raw(), height = area.h.raw(), "printable area is degenerate");
    }
    area
}
