use std::collections::BTreeSet;

use crate::model::checklist::{ChecklistItem, ChecklistTemplateDto};

/// Checked state of a checklist being filled in.
///
/// Items are keyed by id, so switching templates must [`reset`](Self::reset) the run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChecklistRun {
    checked: BTreeSet<String>,
}

impl ChecklistRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips an item and returns whether it is now checked.
    pub fn toggle(&mut self, item_id: &str) -> bool {
        if self.checked.remove(item_id) {
            false
        } else {
            self.checked.insert(item_id.to_string());
            true
        }
    }

    pub fn is_checked(&self, item_id: &str) -> bool {
        self.checked.contains(item_id)
    }

    pub fn reset(&mut self) {
        self.checked.clear();
    }

    /// Checked item ids in template order, ignoring ids the template does not have.
    pub fn checked_items(&self, template: &ChecklistTemplateDto) -> Vec<String> {
        template
            .items()
            .filter(|item| self.is_checked(&item.id))
            .map(|item| item.id.clone())
            .collect()
    }

    /// `(checked, total)` for the template.
    pub fn progress(&self, template: &ChecklistTemplateDto) -> (usize, usize) {
        (
            self.checked_items(template).len(),
            template.total_items(),
        )
    }

    /// Critical items that are still unchecked.
    pub fn pending_critical<'a>(&self, template: &'a ChecklistTemplateDto) -> Vec<&'a ChecklistItem> {
        template
            .items()
            .filter(|item| item.critical && !self.is_checked(&item.id))
            .collect()
    }
}
