use serde::Serialize;

use revmeta_core::types::{Account, Change, ParentCommit, ServerConfig, WebLink};

use crate::certificate::{validate_push_certificate, PushCertificateValidation};
use crate::display;
use crate::mutability::{is_read_only, MutableField};
use crate::parents::{compute_parents, parent_list_class, parents_label};
use crate::role::{non_owner_role, ChangeRole};
use crate::weblinks::{compute_weblinks, RawWeblinks, WeblinkSource};

/// Viewer-side inputs that are not part of the change snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeriveOptions {
    /// The viewer may edit the change at all (signed in, not a snapshot).
    pub mutable: bool,
    pub parent_is_current: bool,
    pub setting_topic: bool,
}

/// Every display fact derived from one change snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct ChangeMetadata {
    pub uploader: Option<Account>,
    pub author: Option<Account>,
    pub committer: Option<Account>,
    pub push_certificate: Option<PushCertificateValidation>,
    pub parents: Vec<ParentCommit>,
    pub parents_label: &'static str,
    pub parent_list_class: String,
    pub web_links: Option<Vec<WebLink>>,
    pub topic_read_only: bool,
    pub hashtag_read_only: bool,
    pub assignee_read_only: bool,
    pub assignee_enabled: bool,
    pub strategy: Option<&'static str>,
    pub show_requirements: bool,
    pub show_add_topic: bool,
    pub show_topic_chip: bool,
    pub show_cherry_pick_of: bool,
}

impl ChangeMetadata {
    pub fn derive(change: &Change, config: &ServerConfig, options: DeriveOptions) -> Self {
        Self::derive_with(&RawWeblinks, change, config, options)
    }

    pub fn derive_with(
        source: &dyn WeblinkSource,
        change: &Change,
        config: &ServerConfig,
        options: DeriveOptions,
    ) -> Self {
        let parents = compute_parents(Some(change), None);
        let strategy = if display::hide_strategy(change) {
            None
        } else {
            display::submit_strategy_label(change)
        };

        Self {
            uploader: non_owner_role(change, ChangeRole::Uploader).cloned(),
            author: non_owner_role(change, ChangeRole::Author).cloned(),
            committer: non_owner_role(change, ChangeRole::Committer).cloned(),
            push_certificate: validate_push_certificate(config, change),
            parents: parents.to_vec(),
            parents_label: parents_label(parents),
            parent_list_class: parent_list_class(parents, options.parent_is_current),
            web_links: compute_weblinks(source, change.current_commit(), config),
            topic_read_only: is_read_only(MutableField::Topic, options.mutable, change),
            hashtag_read_only: is_read_only(MutableField::Hashtags, options.mutable, change),
            assignee_read_only: is_read_only(MutableField::Assignee, options.mutable, change),
            assignee_enabled: config.assignee_enabled(),
            strategy,
            show_requirements: display::show_requirements(change),
            show_add_topic: display::show_add_topic(Some(change), options.setting_topic),
            show_topic_chip: display::show_topic_chip(Some(change), options.setting_topic),
            show_cherry_pick_of: display::show_cherry_pick_of(Some(change)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHANGE: &str = r##"{
        "_number": 42,
        "status": "NEW",
        "submit_type": "CHERRY_PICK",
        "owner": {"email": "abc@def", "_account_id": 1019328},
        "topic": "the topic",
        "actions": {"topic": {"enabled": true}},
        "revisions": {
            "rev1": {
                "_number": 1,
                "uploader": {"email": "abc@def", "_account_id": 1019328},
                "commit": {
                    "author": {"email": "jkl@def"},
                    "committer": {"email": "abc@def"},
                    "parents": [{"commit": "p1", "subject": "one"}, {"commit": "p2", "subject": "two"}],
                    "web_links": [{"name": "gitiles", "url": "#"}, {"name": "browse", "url": "#b"}]
                },
                "push_certificate": {"key": {"status": "TRUSTED"}}
            }
        },
        "current_revision": "rev1"
    }"##;

    #[test]
    fn derives_all_facts() {
        let change: Change = serde_json::from_str(CHANGE).unwrap();
        let config: ServerConfig =
            serde_json::from_str(r#"{"receive": {"enable_signed_push": true}}"#).unwrap();
        let meta = ChangeMetadata::derive(
            &change,
            &config,
            DeriveOptions {
                mutable: true,
                ..DeriveOptions::default()
            },
        );

        assert!(meta.uploader.is_none());
        assert!(meta.committer.is_none());
        assert_eq!(meta.author.unwrap().email.as_deref(), Some("jkl@def"));
        assert_eq!(meta.push_certificate.unwrap().class.as_str(), "trusted");
        assert_eq!(meta.parents.len(), 2);
        assert_eq!(meta.parents_label, "Parents");
        assert_eq!(meta.parent_list_class, "parentList merge notCurrent");
        let links = meta.web_links.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].name, "browse");
        assert_eq!(links[0].url, "#b");
        assert!(!meta.topic_read_only);
        assert!(meta.hashtag_read_only);
        assert!(meta.assignee_read_only);
        assert!(!meta.assignee_enabled);
        assert_eq!(meta.strategy, Some("Cherry Pick"));
        assert!(!meta.show_requirements);
        assert!(meta.show_topic_chip);
        assert!(!meta.show_add_topic);
        assert!(!meta.show_cherry_pick_of);
    }

    #[test]
    fn empty_change_degrades_quietly() {
        let meta = ChangeMetadata::derive(
            &Change::default(),
            &ServerConfig::default(),
            DeriveOptions::default(),
        );
        assert!(meta.uploader.is_none());
        assert!(meta.push_certificate.is_none());
        assert!(meta.parents.is_empty());
        assert!(meta.web_links.is_none());
        assert!(meta.topic_read_only);
        assert!(meta.show_add_topic);
    }
}
