//! Pagination and per-slot placement of labels on A4 sheets.
//!
//! A sheet is a fixed grid of five slots separated by four equal gaps. The
//! grid does not depend on how many labels a page holds: a page with one
//! label reserves the same slot positions as a full page.

use std::ops::Range;

use crate::geometry::{LabelFormat, PrintMargins, SHEET_HEIGHT, SHEET_WIDTH, available_area};
use crate::model::Label;
use crate::types::{Mm, Point, Rect, RectMm, Rotation, Size};

/// Slots per sheet
pub const LABELS_PER_PAGE: usize = 5;

/// Number of pages needed for `count` labels. Never zero.
pub fn page_count(count: usize) -> usize {
    count.div_ceil(LABELS_PER_PAGE).max(1)
}

/// Indices of the labels on `page`, clipped to `count`.
pub fn page_range(page: usize, count: usize) -> Range<usize> {
    let start = (page * LABELS_PER_PAGE).min(count);
    let end = (start + LABELS_PER_PAGE).min(count);
    start..end
}

/// The page a label appended to a collection of `count_before` labels lands on.
pub fn page_for_insert(count_before: usize) -> usize {
    count_before / LABELS_PER_PAGE
}

/// Labels of one page.
pub fn page_slice(labels: &[Label], page: usize) -> &[Label] {
    &labels[page_range(page, labels.len())]
}

/// Every page's slice, in order. An empty collection still yields one
/// (empty) page.
pub fn pages(labels: &[Label]) -> Vec<&[Label]> {
    (0..page_count(labels.len()))
        .map(|page| page_slice(labels, page))
        .collect()
}

/// Slot grid of a sheet for a given set of margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGeometry {
    /// Left edge shared by every slot
    pub x: Mm,
    /// Top edge of slot 0
    pub top: Mm,
    /// Space between two consecutive slots; negative when margins leave too
    /// little height
    pub gap: Mm,
    /// Placement width (label long axis)
    pub label_width: Mm,
    /// Placement height (label short axis)
    pub label_height: Mm,
}

impl SheetGeometry {
    pub fn compute(margins: &PrintMargins) -> Self {
        let label = LabelFormat::Standard.dimensions().effective_size();
        let available = available_area(margins);
        let slots = LABELS_PER_PAGE as f64;

        let gap = (available.h - label.h * slots) / (slots - 1.0);
        let centred = (SHEET_WIDTH - label.w) / 2.0;
        let x = margins.left.max(centred);

        crate::log::trace!(gap = gap.raw(), x = x.raw(), "sheet geometry");
        Self {
            x,
            top: margins.top,
            gap,
            label_width: label.w,
            label_height: label.h,
        }
    }

    /// Top edge of slot `k` (0-indexed).
    pub fn slot_y(&self, k: usize) -> Mm {
        self.top + (self.label_height + self.gap) * k as f64
    }

    pub fn slot_rect(&self, k: usize) -> RectMm {
        Rect::new(
            Point::new(self.x, self.slot_y(k)),
            Size::new(self.label_width, self.label_height),
        )
    }

    /// Distance from the sheet bottom to the bottom edge of the last slot.
    pub fn bottom_clearance(&self) -> Mm {
        SHEET_HEIGHT - self.slot_rect(LABELS_PER_PAGE - 1).bottom()
    }
}

/// Where one label sits on its sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a> {
    pub label: &'a Label,
    pub slot: usize,
    pub rect: RectMm,
}

/// Place up to five labels into consecutive slots, starting at slot 0.
///
/// Labels beyond the fifth are ignored; callers pass a single page.
pub fn layout_page<'a>(labels: &'a [Label], margins: &PrintMargins) -> Vec<Placement<'a>> {
    if labels.is_empty() {
        return Vec::new();
    }
    let grid = SheetGeometry::compute(margins);
    labels
        .iter()
        .take(LABELS_PER_PAGE)
        .enumerate()
        .map(|(slot, label)| Placement {
            label,
            slot,
            rect: grid.slot_rect(slot),
        })
        .collect()
}

/// Layout of one sheet in a document
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout<'a> {
    pub index: usize,
    pub placements: Vec<Placement<'a>>,
}

/// Paginate and place a whole collection.
pub fn layout_document<'a>(labels: &'a [Label], margins: &PrintMargins) -> Vec<PageLayout<'a>> {
    let layout: Vec<_> = pages(labels)
        .into_iter()
        .enumerate()
        .map(|(index, page)| PageLayout {
            index,
            placements: layout_page(page, margins),
        })
        .collect();
    crate::log::debug!(labels = labels.len(), pages = layout.len(), "laid out document");
    layout
}

/// How the sheet is shown on screen. Print output is always portrait A4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SheetOrientation {
    /// Sheet turned sideways so the labels read left to right
    #[default]
    Landscape,
    Portrait,
}

impl SheetOrientation {
    pub fn toggled(self) -> Self {
        match self {
            SheetOrientation::Landscape => SheetOrientation::Portrait,
            SheetOrientation::Portrait => SheetOrientation::Landscape,
        }
    }

    /// Zoom factor for the on-screen sheet.
    pub fn preview_zoom(self) -> f64 {
        match self {
            SheetOrientation::Landscape => 1.0,
            SheetOrientation::Portrait => 0.75,
        }
    }

    /// Rotation applied to the whole sheet preview.
    pub fn preview_rotation(self) -> Rotation {
        match self {
            SheetOrientation::Landscape => Rotation::Deg90,
            SheetOrientation::Portrait => Rotation::Deg0,
        }
    }
}
