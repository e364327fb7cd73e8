//! The ordered label collection.
//!
//! Order is significant: a label's index decides its page and slot. All
//! creation, reordering and removal goes through this type.

use crate::errors::EditorError;
use crate::layout;
use crate::model::{Label, LabelEdit, LabelId, Template};

/// Hard cap on the number of labels (20 full sheets)
pub const MAX_LABELS: usize = 100;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelCollection {
    labels: Vec<Label>,
}

impl LabelCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from loaded labels, keeping at most [`MAX_LABELS`].
    pub fn from_labels(mut labels: Vec<Label>) -> Self {
        if labels.len() > MAX_LABELS {
            crate::log::warn!(count = labels.len(), max = MAX_LABELS, "dropping labels over the cap");
            labels.truncate(MAX_LABELS);
        }
        Self { labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.labels.len() >= MAX_LABELS
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Label> {
        self.labels.iter()
    }

    pub fn index_of(&self, id: &LabelId) -> Option<usize> {
        self.labels.iter().position(|l| &l.id == id)
    }

    pub fn get(&self, id: &LabelId) -> Option<&Label> {
        self.labels.iter().find(|l| &l.id == id)
    }

    pub fn page_count(&self) -> usize {
        layout::page_count(self.labels.len())
    }

    pub fn page(&self, page: usize) -> &[Label] {
        layout::page_slice(&self.labels, page)
    }

    /// Append a label. Returns its index, or `None` (and drops the label)
    /// when the collection is full.
    pub fn push(&mut self, label: Label) -> Option<usize> {
        if self.is_full() {
            crate::log::debug!(id = %label.id, "collection full, label not added");
            return None;
        }
        self.labels.push(label);
        Some(self.labels.len() - 1)
    }

    /// Append a default label.
    pub fn add_new(&mut self) -> Option<LabelId> {
        self.push_and_id(Label::new())
    }

    pub fn add_from_template(&mut self, template: &Template) -> Option<LabelId> {
        self.push_and_id(template.instantiate())
    }

    /// Append a copy of `id` under a fresh id. `Ok(None)` when full.
    pub fn duplicate(&mut self, id: &LabelId) -> Result<Option<LabelId>, EditorError> {
        let copy = self.require(id)?.duplicate();
        Ok(self.push_and_id(copy))
    }

    fn push_and_id(&mut self, label: Label) -> Option<LabelId> {
        let id = label.id.clone();
        self.push(label).map(|_| id)
    }

    fn require(&self, id: &LabelId) -> Result<&Label, EditorError> {
        self.get(id).ok_or_else(|| EditorError::UnknownLabel { id: id.to_string() })
    }

    pub fn remove(&mut self, id: &LabelId) -> Option<Label> {
        let index = self.index_of(id)?;
        Some(self.labels.remove(index))
    }

    /// Move the label at `from` so it ends up at index `to`.
    ///
    /// Out-of-range indices leave the collection untouched and return false.
    pub fn move_label(&mut self, from: usize, to: usize) -> bool {
        let len = self.labels.len();
        if from >= len || to >= len {
            return false;
        }
        if from != to {
            let label = self.labels.remove(from);
            self.labels.insert(to, label);
        }
        true
    }

    /// Swap `id` with its predecessor. False at the front or when unknown.
    pub fn move_up(&mut self, id: &LabelId) -> bool {
        match self.index_of(id) {
            Some(index) if index > 0 => self.move_label(index, index - 1),
            _ => false,
        }
    }

    /// Swap `id` with its successor. False at the back or when unknown.
    pub fn move_down(&mut self, id: &LabelId) -> bool {
        match self.index_of(id) {
            Some(index) => self.move_label(index, index + 1),
            None => false,
        }
    }

    /// Replace the label carrying the same id.
    pub fn update(&mut self, label: Label) -> Result<(), EditorError> {
        let index = self
            .index_of(&label.id)
            .ok_or_else(|| EditorError::UnknownLabel { id: label.id.to_string() })?;
        self.labels[index] = label;
        Ok(())
    }

    pub fn edit(&mut self, id: &LabelId, edit: LabelEdit) -> Result<(), EditorError> {
        let label = self
            .labels
            .iter_mut()
            .find(|l| &l.id == id)
            .ok_or_else(|| EditorError::UnknownLabel { id: id.to_string() })?;
        edit.apply(label);
        Ok(())
    }

    pub fn into_vec(self) -> Vec<Label> {
        self.labels
    }
}

impl<'a> IntoIterator for &'a LabelCollection {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::model::{TextEdit, templates};

    fn collection(n: usize) -> LabelCollection {
        let mut c = LabelCollection::new();
        for _ in 0..n {
            c.add_new();
        }
        c
    }

    fn ids(c: &LabelCollection) -> Vec<LabelId> {
        c.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn add_stops_at_capacity() {
        let mut c = collection(MAX_LABELS);
        assert!(c.is_full());
        assert_eq!(c.add_new(), None);
        assert_eq!(c.add_from_template(&templates::find("classic").unwrap()), None);
        let first = c.labels()[0].id.clone();
        assert_eq!(c.duplicate(&first).unwrap(), None);
        assert_eq!(c.len(), MAX_LABELS);
    }

    #[test]
    fn duplicate_gets_a_fresh_id() {
        let mut c = collection(3);
        let source = c.labels()[1].clone();
        let new_id = c.duplicate(&source.id).unwrap().unwrap();

        let existing: HashSet<_> = ids(&c)[..3].iter().cloned().collect();
        assert!(!existing.contains(&new_id));

        let copy = c.get(&new_id).unwrap();
        assert_eq!(Label { id: source.id.clone(), ..copy.clone() }, source);
        assert_eq!(c.index_of(&new_id), Some(3));
    }

    #[test]
    fn duplicate_of_unknown_label_is_an_error() {
        let mut c = collection(1);
        let err = c.duplicate(&LabelId::from("nope")).unwrap_err();
        assert!(matches!(err, EditorError::UnknownLabel { .. }));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn move_preserves_membership() {
        for (from, to) in [(0, 4), (4, 0), (2, 2), (1, 3), (3, 1)] {
            let mut c = collection(5);
            let before = ids(&c);
            assert!(c.move_label(from, to));
            let after = ids(&c);
            assert_eq!(after.len(), before.len());
            assert_eq!(
                after.iter().collect::<HashSet<_>>(),
                before.iter().collect::<HashSet<_>>()
            );
            assert_eq!(after[to], before[from]);
        }
    }

    #[test]
    fn move_out_of_range_is_rejected() {
        let mut c = collection(3);
        let before = ids(&c);
        assert!(!c.move_label(0, 3));
        assert!(!c.move_label(7, 0));
        assert_eq!(ids(&c), before);
    }

    #[test]
    fn move_up_and_down_stop_at_the_ends() {
        let mut c = collection(3);
        let before = ids(&c);
        assert!(!c.move_up(&before[0]));
        assert!(!c.move_down(&before[2]));
        assert!(c.move_down(&before[0]));
        assert_eq!(ids(&c), vec![before[1].clone(), before[0].clone(), before[2].clone()]);
        assert!(c.move_up(&before[2]));
        assert_eq!(ids(&c), vec![before[1].clone(), before[2].clone(), before[0].clone()]);
    }

    #[test]
    fn remove_and_update() {
        let mut c = collection(2);
        let first = c.labels()[0].id.clone();

        let mut changed = c.labels()[1].clone();
        changed.background_color = "#f5f5f4".into();
        c.update(changed.clone()).unwrap();
        assert_eq!(c.labels()[1], changed);

        assert!(c.remove(&first).is_some());
        assert!(c.remove(&first).is_none());
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn edit_unknown_label_fails() {
        let mut c = collection(1);
        let err = c
            .edit(&LabelId::from("ghost"), LabelEdit::Header(TextEdit::Text("x".into())))
            .unwrap_err();
        assert_eq!(err.to_string(), "no label with id ghost");
    }

    #[test]
    fn from_labels_truncates_over_cap() {
        let labels: Vec<_> = (0..MAX_LABELS + 4).map(|_| Label::new()).collect();
        assert_eq!(LabelCollection::from_labels(labels).len(), MAX_LABELS);
    }

    #[test]
    fn pages_follow_order() {
        let c = collection(7);
        assert_eq!(c.page_count(), 2);
        assert_eq!(c.page(1).len(), 2);
        assert_eq!(c.page(1)[0].id, c.labels()[5].id);
    }
}
