//! Editor state as a single-writer command loop.
//!
//! Every user action is a [`Command`]. [`Editor::apply`] is the only way to
//! change the state, and it either applies a command completely or leaves
//! the state as it was.

use chrono::{DateTime, Utc};

use crate::collection::LabelCollection;
use crate::errors::EditorError;
use crate::geometry::{MarginSide, PrintMargins};
use crate::layout::{self, SheetOrientation};
use crate::model::{ImageData, Label, LabelEdit, LabelId, templates};
use crate::project::Project;
use crate::types::Mm;

/// One user action
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddLabel,
    AddFromTemplate(String),
    DuplicateSelected,
    DeleteSelected,
    Select(LabelId),
    ClearSelection,
    MoveLabel { from: usize, to: usize },
    MoveSelectedUp,
    MoveSelectedDown,
    /// Replace a label wholesale (matched by id)
    UpdateLabel(Label),
    Edit { id: LabelId, edit: LabelEdit },
    /// Upload an image as the icon of a label
    AttachImage { id: LabelId, bytes: Vec<u8>, media_type: String },
    SetMargin(MarginSide, Mm),
    SetMargins(PrintMargins),
    ResetMargins,
    NextPage,
    PreviousPage,
    GoToPage(usize),
    ToggleOrientation,
    /// Replace labels and margins with a loaded project
    LoadProject(Box<Project>),
}

/// Outcome of a successful [`Editor::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Changed,
    /// The command was valid but had nothing to do (full collection, no
    /// selection, already at the first page, ...)
    Ignored,
}

impl From<bool> for Applied {
    fn from(changed: bool) -> Self {
        if changed { Applied::Changed } else { Applied::Ignored }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Editor {
    labels: LabelCollection,
    selected: Option<LabelId>,
    margins: PrintMargins,
    current_page: usize,
    orientation: SheetOrientation,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labels(&self) -> &LabelCollection {
        &self.labels
    }

    pub fn selected_id(&self) -> Option<&LabelId> {
        self.selected.as_ref()
    }

    pub fn selected_label(&self) -> Option<&Label> {
        self.selected.as_ref().and_then(|id| self.labels.get(id))
    }

    pub fn margins(&self) -> &PrintMargins {
        &self.margins
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.labels.page_count()
    }

    /// Labels shown on the current page
    pub fn page_labels(&self) -> &[Label] {
        self.labels.page(self.current_page)
    }

    pub fn orientation(&self) -> SheetOrientation {
        self.orientation
    }

    /// Snapshot for a file download.
    pub fn export(&self, now: DateTime<Utc>) -> Project {
        Project::export(self.labels.labels().to_vec(), self.margins, now)
    }

    /// Snapshot for the autosave slot.
    pub fn autosave(&self, now: DateTime<Utc>) -> Project {
        Project::autosave(self.labels.labels().to_vec(), self.margins, now)
    }

    pub fn apply(&mut self, command: Command) -> Result<Applied, EditorError> {
        crate::log::trace!(?command, "apply");
        let applied = match command {
            Command::AddLabel => {
                let count = self.labels.len();
                let id = self.labels.add_new();
                self.inserted(count, id)
            }
            Command::AddFromTemplate(template_id) => {
                let template = templates::find(&template_id)
                    .ok_or(EditorError::UnknownTemplate { id: template_id })?;
                let count = self.labels.len();
                let id = self.labels.add_from_template(&template);
                self.inserted(count, id)
            }
            Command::DuplicateSelected => match self.selected.clone() {
                Some(source) => {
                    let count = self.labels.len();
                    let id = self.labels.duplicate(&source)?;
                    self.inserted(count, id)
                }
                None => Applied::Ignored,
            },
            Command::DeleteSelected => match self.selected.take() {
                Some(id) => {
                    let removed = self.labels.remove(&id).is_some();
                    self.clamp_page();
                    Applied::from(removed)
                }
                None => Applied::Ignored,
            },
            Command::Select(id) => {
                if self.labels.get(&id).is_none() {
                    return Err(EditorError::UnknownLabel { id: id.to_string() });
                }
                let changed = self.selected.as_ref() != Some(&id);
                self.selected = Some(id);
                Applied::from(changed)
            }
            Command::ClearSelection => Applied::from(self.selected.take().is_some()),
            Command::MoveLabel { from, to } => Applied::from(from != to && self.labels.move_label(from, to)),
            Command::MoveSelectedUp => match &self.selected {
                Some(id) => Applied::from(self.labels.move_up(id)),
                None => Applied::Ignored,
            },
            Command::MoveSelectedDown => match &self.selected {
                Some(id) => Applied::from(self.labels.move_down(id)),
                None => Applied::Ignored,
            },
            Command::UpdateLabel(label) => {
                let mut label = label;
                label.normalize();
                self.labels.update(label)?;
                Applied::Changed
            }
            Command::Edit { id, edit } => {
                self.labels.edit(&id, edit)?;
                Applied::Changed
            }
            Command::AttachImage { id, bytes, media_type } => {
                let current = self
                    .labels
                    .get(&id)
                    .ok_or_else(|| EditorError::UnknownLabel { id: id.to_string() })?;
                let image = ImageData::from_bytes(&bytes, &media_type)?;
                let mut label = current.clone();
                label.icon = Some(image.into_icon(label.icon.take().unwrap_or_default()));
                self.labels.update(label)?;
                Applied::Changed
            }
            Command::SetMargin(side, value) => self.set_margins(self.margins.with_side(side, value)),
            Command::SetMargins(margins) => self.set_margins(margins.clamped()),
            Command::ResetMargins => self.set_margins(PrintMargins::default()),
            Command::NextPage => self.go_to(self.current_page.saturating_add(1)),
            Command::PreviousPage => self.go_to(self.current_page.saturating_sub(1)),
            Command::GoToPage(page) => self.go_to(page),
            Command::ToggleOrientation => {
                self.orientation = self.orientation.toggled();
                Applied::Changed
            }
            Command::LoadProject(project) => {
                let mut project = *project;
                project.normalize();
                self.labels = LabelCollection::from_labels(project.labels);
                if let Some(margins) = project.print_margins {
                    self.margins = margins;
                }
                self.selected = None;
                self.current_page = 0;
                crate::log::debug!(labels = self.labels.len(), "project loaded into editor");
                Applied::Changed
            }
        };
        Ok(applied)
    }

    /// Select a freshly appended label and show its page.
    fn inserted(&mut self, count_before: usize, id: Option<LabelId>) -> Applied {
        match id {
            Some(id) => {
                self.selected = Some(id);
                self.current_page = layout::page_for_insert(count_before);
                Applied::Changed
            }
            None => Applied::Ignored,
        }
    }

    fn set_margins(&mut self, margins: PrintMargins) -> Applied {
        let changed = margins != self.margins;
        self.margins = margins;
        Applied::from(changed)
    }

    /// Move to `page`, clamped to the existing pages.
    fn go_to(&mut self, page: usize) -> Applied {
        let page = page.min(self.page_count() - 1);
        let changed = page != self.current_page;
        self.current_page = page;
        Applied::from(changed)
    }

    fn clamp_page(&mut self) {
        self.current_page = self.current_page.min(self.page_count() - 1);
    }
}
