use revmeta_core::types::{Change, ParentCommit, Revision};

/// Parents of `revision` when its commit carries a parent list, otherwise of
/// the change's current revision. Any missing link yields an empty slice.
pub fn compute_parents<'a>(
    change: Option<&'a Change>,
    revision: Option<&'a Revision>,
) -> &'a [ParentCommit] {
    if let Some(parents) = revision.and_then(Revision::parents) {
        return parents;
    }
    change
        .and_then(Change::current_revision)
        .and_then(Revision::parents)
        .unwrap_or(&[])
}

pub fn parents_label(parents: &[ParentCommit]) -> &'static str {
    if parents.len() == 1 {
        "Parent"
    } else {
        "Parents"
    }
}

pub fn parent_list_class(parents: &[ParentCommit], is_current: bool) -> String {
    let kind = if parents.len() > 1 { "merge" } else { "nonMerge" };
    let current = if is_current { "current" } else { "notCurrent" };
    format!("parentList {kind} {current}")
}

/// Live view over a change and the revision currently selected for display.
/// `current_parents` is re-derived from the inputs on every call, so
/// selecting another revision or replacing the change is immediately visible.
#[derive(Debug, Clone, Default)]
pub struct ParentLineage {
    change: Option<Change>,
    selected: Option<Revision>,
}

impl ParentLineage {
    pub fn new(change: Change) -> Self {
        Self {
            change: Some(change),
            selected: None,
        }
    }

    pub fn set_change(&mut self, change: Option<Change>) {
        self.change = change;
    }

    pub fn select_revision(&mut self, revision: Option<Revision>) {
        self.selected = revision;
    }

    pub fn change(&self) -> Option<&Change> {
        self.change.as_ref()
    }

    pub fn selected_revision(&self) -> Option<&Revision> {
        self.selected.as_ref()
    }

    pub fn current_parents(&self) -> &[ParentCommit] {
        compute_parents(self.change.as_ref(), self.selected.as_ref())
    }
}
