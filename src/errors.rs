//! Error types with rich diagnostics using miette
//!
//! Project loading errors carry the offending JSON as source so the
//! location of a syntax error can be pointed at.

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::types::NumericError;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (file name or "<project>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }

    /// Byte span of a 1-based `line`/`column` position as reported by serde_json.
    ///
    /// Column 0 (serde_json's "before the first character") maps to the
    /// start of the line; positions past the end clamp to the last byte.
    pub fn span_at(&self, line: usize, column: usize) -> SourceSpan {
        let mut offset = 0usize;
        for (idx, text) in self.source.split_inclusive('\n').enumerate() {
            if idx + 1 == line {
                let col = column.saturating_sub(1).min(text.len());
                offset += col;
                break;
            }
            offset += text.len();
        }
        let offset = offset.min(self.source.len().saturating_sub(1));
        let len = usize::from(offset < self.source.len());
        (offset, len).into()
    }
}

// ============================================================================
// Project Errors
// ============================================================================

/// Errors that occur while saving or loading a project
#[derive(Error, Diagnostic, Debug)]
pub enum ProjectError {
    #[error("project file is not valid JSON: {message}")]
    #[diagnostic(code(spinelab::project::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parsing stopped here")]
        span: SourceSpan,
    },

    #[error("invalid project format: {reason}")]
    #[diagnostic(
        code(spinelab::project::invalid_format),
        help("a project file is a JSON object with a `labels` array and optional `printMargins`")
    )]
    InvalidFormat {
        reason: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a valid project")]
        span: Option<SourceSpan>,
    },

    #[error("failed to serialize project")]
    #[diagnostic(code(spinelab::project::serialize))]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot access project file {}", path.display())]
    #[diagnostic(code(spinelab::project::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// Icon Errors
// ============================================================================

/// Errors raised when attaching an uploaded image as a label icon
#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum IconError {
    #[error("image is too large: {size} bytes (limit {limit} bytes)")]
    #[diagnostic(
        code(spinelab::icon::image_too_large),
        help("images are embedded in the project file; use one of at most 500 KB")
    )]
    ImageTooLarge { size: usize, limit: usize },

    #[error("image is empty")]
    #[diagnostic(code(spinelab::icon::empty_image))]
    EmptyImage,

    #[error("unsupported media type: {media_type}")]
    #[diagnostic(
        code(spinelab::icon::unsupported_media_type),
        help("only image/* payloads can be used as icons")
    )]
    UnsupportedMediaType { media_type: String },
}

// ============================================================================
// Editor Errors
// ============================================================================

/// Errors surfaced by editor commands. The editor state is unchanged when
/// one of these is returned.
#[derive(Error, Diagnostic, Debug)]
pub enum EditorError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Icon(#[from] IconError),

    #[error("no label with id {id}")]
    #[diagnostic(code(spinelab::editor::unknown_label))]
    UnknownLabel { id: String },

    #[error("no template named {id}")]
    #[diagnostic(
        code(spinelab::editor::unknown_template),
        help("built-in templates: blank, classic, business, colorful, minimal, archive")
    )]
    UnknownTemplate { id: String },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while setting up rendering
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("invalid preview zoom {value}")]
    #[diagnostic(code(spinelab::render::invalid_zoom))]
    InvalidZoom {
        value: f64,
        #[source]
        reason: NumericError,
    },

    #[error("failed to write SVG output")]
    #[diagnostic(code(spinelab::render::format))]
    Format(#[from] std::fmt::Error),
}
