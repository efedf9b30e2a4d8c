use revmeta_core::types::Change;

/// Change fields the viewer may edit in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutableField {
    Topic,
    Hashtags,
    Assignee,
}

impl MutableField {
    pub const ALL: [MutableField; 3] = [
        MutableField::Topic,
        MutableField::Hashtags,
        MutableField::Assignee,
    ];

    /// Key of the action that gates this field.
    pub fn action_name(&self) -> &'static str {
        match self {
            MutableField::Topic => "topic",
            MutableField::Hashtags => "hashtags",
            MutableField::Assignee => "assignee",
        }
    }
}

/// Read-only unless the viewer can edit at all and the server enables the
/// field's action on this change.
pub fn is_read_only(field: MutableField, mutable: bool, change: &Change) -> bool {
    !(mutable && change.action_enabled(field.action_name()))
}

pub fn topic_read_only(mutable: bool, change: &Change) -> bool {
    is_read_only(MutableField::Topic, mutable, change)
}

pub fn hashtag_read_only(mutable: bool, change: &Change) -> bool {
    is_read_only(MutableField::Hashtags, mutable, change)
}

pub fn assignee_read_only(mutable: bool, change: &Change) -> bool {
    is_read_only(MutableField::Assignee, mutable, change)
}
