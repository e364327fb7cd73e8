//! Folder spine labels for Avery C32267 sheets.
//!
//! Labels are edited through an [`Editor`], laid out five to an A4 sheet and
//! rendered to SVG for preview and print. Projects round-trip through JSON.

pub mod collection;
pub mod editor;
pub mod errors;
pub mod geometry;
pub mod layout;
pub mod log;
pub mod model;
pub mod project;
pub mod render;
pub mod types;

pub use collection::{LabelCollection, MAX_LABELS};
pub use editor::{Applied, Command, Editor};
pub use errors::{EditorError, IconError, ProjectError, RenderError};
pub use geometry::{MarginSide, PrintMargins};
pub use layout::{LABELS_PER_PAGE, SheetOrientation};
pub use model::{Label, LabelEdit, LabelId, Template};
pub use project::{FileStore, MemoryStore, Project, ProjectStore};
pub use render::{RenderMode, calibration_svg, document_svgs, preview_svg, sheet_svg};

/// Render a project file to print-ready SVG sheets, one per page.
///
/// Returns the documents on success, or an error with diagnostics pointing
/// into `source`.
pub fn render_project(source: &str) -> Result<Vec<String>, miette::Report> {
    let project = Project::from_json(source)?;
    let margins = project.print_margins.unwrap_or_default();
    let sheets = document_svgs(&project.labels, &margins)?;
    Ok(sheets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_minimal_project() {
        let sheets = render_project(r#"{"labels": []}"#).unwrap();
        assert_eq!(sheets.len(), 1);
        assert!(sheets[0].contains(r#"viewBox="0 0 210 297""#));
    }

    #[test]
    fn reports_syntax_errors() {
        let err = render_project("{\"labels\": [").unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn reports_missing_labels() {
        let err = render_project(r#"{"name": "x"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid project format"));
    }
}
