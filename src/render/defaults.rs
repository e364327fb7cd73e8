//! Default sizes and settings for label and sheet output

use crate::types::{Mm, Pt, Px};

/// Inner padding of the header, body and icon areas
pub const REGION_PADDING: Mm = Mm::mm(2.0);

/// Dashed divider pattern (on, off)
pub const DASHED: (Px, Px) = (Px(4.0), Px(4.0));
/// Dotted divider pattern (on, off)
pub const DOTTED: (Px, Px) = (Px(2.0), Px(4.0));

pub const HEADER_PLACEHOLDER: &str = "Titel eingeben...";
pub const BODY_PLACEHOLDER: &str = "Text eingeben...";
pub const PLACEHOLDER_COLOR: &str = "#9ca3af";

/// Image icons fit a square of `size * IMAGE_SIZE_FACTOR` pixels
pub const IMAGE_SIZE_FACTOR: f64 = 1.5;

/// Line advance as a multiple of the font size
pub const LINE_HEIGHT: f64 = 1.2;

pub const SHEET_FILL: &str = "#ffffff";
pub const SHEET_BORDER: &str = "#e2e8f0";
pub const LABEL_BORDER: &str = "#e2e8f0";
/// Printable-area outline in previews
pub const GUIDE_COLOR: &str = "#d1d5db";
pub const GUIDE_DASH: (Px, Px) = (Px(4.0), Px(2.0));
pub const HAIRLINE: Px = Px(1.0);

pub const EMPTY_PAGE_HINT: &str = "Klicke hier um ein Etikett zu erstellen";
pub const HINT_COLOR: &str = "#9ca3af";
pub const HINT_FONT_SIZE: Pt = Pt(10.5);

// Calibration sheet

pub const RULER_DEPTH: Mm = Mm::mm(5.0);
pub const RULER_STEP: Mm = Mm::mm(10.0);
pub const CROSS_LENGTH: Mm = Mm::mm(20.0);
pub const CROSS_THICKNESS: Mm = Mm::mm(0.5);
pub const CORNER_INSET: Mm = Mm::mm(5.0);
pub const CORNER_LENGTH: Mm = Mm::mm(10.0);
pub const INFO_OFFSET: Mm = Mm::mm(10.0);
pub const INFO_FONT_SIZE: Pt = Pt(10.0);
pub const FRAME_COLOR: &str = "#999999";
pub const INFO_COLOR: &str = "#333333";
pub const INFO_FONT: &str = "Arial, sans-serif";
