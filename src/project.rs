//! Project snapshots: the JSON file format and where it is stored.
//!
//! A [`Project`] is the only external representation of the editor state.
//! Loading validates the shape before touching any label, so a rejected
//! file never produces a partial load.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{ProjectError, SourceContext};
use crate::geometry::PrintMargins;
use crate::model::Label;

/// Format version written into every saved project
pub const PROJECT_VERSION: &str = "1.0.0";

/// Storage key of the autosave slot
pub const AUTOSAVE_KEY: &str = "ordnerruecken-designer-project";

/// Name of the autosave snapshot
pub const AUTOSAVE_NAME: &str = "Autosave";

/// Prefix of exported project names, followed by the export date
pub const EXPORT_PREFIX: &str = "Ordneretiketten";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
    pub labels: Vec<Label>,
    /// Absent in some older files; loading then keeps the margins in use
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_margins: Option<PrintMargins>,
}

impl Project {
    pub fn new(name: impl Into<String>, labels: Vec<Label>, print_margins: PrintMargins, now: DateTime<Utc>) -> Self {
        Self {
            version: PROJECT_VERSION.to_string(),
            name: name.into(),
            created_at: now,
            updated_at: now,
            labels,
            print_margins: Some(print_margins),
        }
    }

    /// Snapshot for a file download, named after the day of export.
    pub fn export(labels: Vec<Label>, print_margins: PrintMargins, now: DateTime<Utc>) -> Self {
        let name = format!("{EXPORT_PREFIX}_{}", now.format("%Y-%m-%d"));
        Self::new(name, labels, print_margins, now)
    }

    /// Snapshot for the autosave slot.
    pub fn autosave(labels: Vec<Label>, print_margins: PrintMargins, now: DateTime<Utc>) -> Self {
        Self::new(AUTOSAVE_NAME, labels, print_margins, now)
    }

    /// Download file name
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name)
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, ProjectError> {
        serde_json::to_string_pretty(self).map_err(|source| ProjectError::Serialize { source })
    }

    /// Parse a project file. `name` labels the source in diagnostics.
    pub fn from_json_named(name: &str, source: &str) -> Result<Self, ProjectError> {
        let ctx = SourceContext::new(name, source);

        let value: Value = serde_json::from_str(source).map_err(|e| ProjectError::Syntax {
            message: e.to_string(),
            src: ctx.named_source(),
            span: ctx.span_at(e.line(), e.column()),
        })?;

        let shape_error = match value.get("labels") {
            _ if !value.is_object() => Some("expected a JSON object"),
            None => Some("missing `labels`"),
            Some(labels) if !labels.is_array() => Some("`labels` must be an array"),
            Some(_) => None,
        };
        if let Some(reason) = shape_error {
            crate::log::warn!(source = name, reason, "rejecting project");
            return Err(ProjectError::InvalidFormat {
                reason: reason.to_string(),
                src: ctx.named_source(),
                span: None,
            });
        }

        let mut project: Project =
            serde_json::from_str(source).map_err(|e| ProjectError::InvalidFormat {
                reason: e.to_string(),
                src: ctx.named_source(),
                span: Some(ctx.span_at(e.line(), e.column())),
            })?;
        project.normalize();

        crate::log::debug!(
            source = name,
            labels = project.labels.len(),
            version = %project.version,
            "loaded project"
        );
        Ok(project)
    }

    pub fn from_json(source: &str) -> Result<Self, ProjectError> {
        Self::from_json_named("<project>", source)
    }

    /// Re-establish the range invariants on loaded data.
    pub fn normalize(&mut self) {
        self.print_margins = self.print_margins.map(PrintMargins::clamped);
        for label in &mut self.labels {
            label.normalize();
        }
    }
}

/// Somewhere a single project snapshot can be kept.
pub trait ProjectStore {
    fn save(&mut self, project: &Project) -> Result<(), ProjectError>;

    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Project>, ProjectError>;
}

/// In-process key/value store, the stand-in for browser local storage.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    key: String,
    entries: HashMap<String, String>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::with_key(AUTOSAVE_KEY)
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: HashMap::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Raw stored JSON, if any
    pub fn raw(&self) -> Option<&str> {
        self.entries.get(&self.key).map(String::as_str)
    }
}

impl ProjectStore for MemoryStore {
    fn save(&mut self, project: &Project) -> Result<(), ProjectError> {
        let json = serde_json::to_string(project).map_err(|source| ProjectError::Serialize { source })?;
        self.entries.insert(self.key.clone(), json);
        Ok(())
    }

    fn load(&self) -> Result<Option<Project>, ProjectError> {
        self.raw()
            .map(|json| Project::from_json_named(&self.key, json))
            .transpose()
    }
}

/// A project file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> ProjectError {
        ProjectError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ProjectStore for FileStore {
    fn save(&mut self, project: &Project) -> Result<(), ProjectError> {
        let json = project.to_json()?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }

    fn load(&self) -> Result<Option<Project>, ProjectError> {
        let source = match fs::read_to_string(&self.path) {
            Ok(source) => source,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        let name = self.path.display().to_string();
        Project::from_json_named(&name, &source).map(Some)
    }
}
