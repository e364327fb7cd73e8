//! Label data model: schema, defaults, templates, catalogs and edits.

pub mod defaults;
mod edit;
mod icon;
mod label;
pub mod symbols;
pub mod templates;

pub use edit::{
    DividerEdit, FONT_SIZE_MAX, FONT_SIZE_MIN, ICON_SIZE_MAX, ICON_SIZE_MIN, IconEdit, LabelEdit,
    THICKNESS_MAX, THICKNESS_MIN, TextEdit,
};
pub use icon::{ImageData, MAX_IMAGE_BYTES};
pub use label::{
    Divider, FontStyle, FontWeight, HORIZONTAL_POSITION_MAX, HORIZONTAL_POSITION_MIN, IconKind,
    IconPosition, Label, LabelIcon, LabelId, LineStyle, Orientation, TextAlign, TextSection,
};
pub use templates::Template;
