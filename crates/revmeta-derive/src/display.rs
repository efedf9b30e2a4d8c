use revmeta_core::types::Change;

/// Merged and abandoned changes have no pending submit strategy.
pub fn hide_strategy(change: &Change) -> bool {
    !change.is_open()
}

pub fn submit_strategy_label(change: &Change) -> Option<&'static str> {
    change.submit_type.map(|t| t.display_name())
}

/// Submit status is worth showing for open changes that are work in
/// progress or have labels or requirements to report.
pub fn show_requirements(change: &Change) -> bool {
    if !change.is_open() {
        return false;
    }
    if change.work_in_progress {
        return true;
    }
    !change.labels.is_empty() || !change.requirements.is_empty()
}

fn has_topic(change: Option<&Change>) -> bool {
    change
        .and_then(|c| c.topic.as_deref())
        .is_some_and(|t| !t.is_empty())
}

pub fn show_add_topic(change: Option<&Change>, setting_topic: bool) -> bool {
    !has_topic(change) && !setting_topic
}

pub fn show_topic_chip(change: Option<&Change>, setting_topic: bool) -> bool {
    has_topic(change) && !setting_topic
}

pub fn show_cherry_pick_of(change: Option<&Change>) -> bool {
    change.is_some_and(|c| c.cherry_pick_of_change.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use revmeta_core::types::{ChangeStatus, Label, SubmitRequirement, SubmitType};
    use revmeta_core::ChangeNumber;

    fn with_status(status: ChangeStatus) -> Change {
        Change {
            status,
            ..Change::default()
        }
    }

    fn with_topic(topic: Option<&str>) -> Change {
        Change {
            topic: topic.map(str::to_string),
            ..Change::default()
        }
    }

    #[test]
    fn strategy_only_for_open_changes() {
        assert!(!hide_strategy(&with_status(ChangeStatus::New)));
        assert!(hide_strategy(&with_status(ChangeStatus::Merged)));
        assert!(hide_strategy(&with_status(ChangeStatus::Abandoned)));

        let mut change = with_status(ChangeStatus::New);
        assert_eq!(submit_strategy_label(&change), None);
        change.submit_type = Some(SubmitType::CherryPick);
        assert_eq!(submit_strategy_label(&change), Some("Cherry Pick"));
        change.submit_type = Some(SubmitType::RebaseAlways);
        assert_eq!(submit_strategy_label(&change), Some("Rebase Always"));
    }

    #[test]
    fn requirements_visibility() {
        assert!(!show_requirements(&with_status(ChangeStatus::Merged)));
        assert!(!show_requirements(&with_status(ChangeStatus::Abandoned)));
        assert!(!show_requirements(&with_status(ChangeStatus::New)));

        let mut wip = with_status(ChangeStatus::New);
        wip.work_in_progress = true;
        assert!(show_requirements(&wip));

        let mut labelled = with_status(ChangeStatus::New);
        labelled.labels.insert("Verified".into(), Label::default());
        assert!(show_requirements(&labelled));

        let mut required = with_status(ChangeStatus::New);
        required.requirements.push(SubmitRequirement {
            status: "OK".into(),
            fallback_text: "Resolve all comments".into(),
            kind: None,
        });
        assert!(show_requirements(&required));
    }

    #[test]
    fn add_topic_and_topic_chip() {
        let none = with_topic(None);
        let foo = with_topic(Some("foo"));
        assert!(show_add_topic(None, false));
        assert!(show_add_topic(Some(&none), false));
        assert!(!show_add_topic(Some(&none), true));
        assert!(!show_add_topic(Some(&foo), true));
        assert!(!show_add_topic(Some(&foo), false));

        assert!(!show_topic_chip(None, false));
        assert!(!show_topic_chip(Some(&none), false));
        assert!(!show_topic_chip(Some(&none), true));
        assert!(!show_topic_chip(Some(&foo), true));
        assert!(show_topic_chip(Some(&foo), false));
    }

    #[test]
    fn empty_topic_counts_as_no_topic() {
        let empty = with_topic(Some(""));
        assert!(show_add_topic(Some(&empty), false));
        assert!(!show_topic_chip(Some(&empty), false));
    }

    #[test]
    fn cherry_pick_of() {
        assert!(!show_cherry_pick_of(None));
        assert!(!show_cherry_pick_of(Some(&Change::default())));
        let picked = Change {
            cherry_pick_of_change: Some(ChangeNumber::new(123)),
            cherry_pick_of_patch_set: Some(1),
            ..Change::default()
        };
        assert!(show_cherry_pick_of(Some(&picked)));
    }
}
