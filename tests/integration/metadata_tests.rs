use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use revmeta_core::decode_json;
use revmeta_core::types::{Account, Change, ServerConfig};
use revmeta_core::{ChangeNumber, RevisionId};
use revmeta_derive::{
    compute_parents, filter_weblinks, is_read_only, non_owner_role, parent_list_class,
    parents_label, show_role_class, validate_push_certificate, ChangeMetadata, ChangeRole,
    DeriveOptions, MutableField, ParentLineage, ValidationClass,
};
use revmeta_sync::{ChangeRemote, HashtagsInput, MetadataEvent, MetadataSession, SyncError};

const CHANGE_JSON: &str = include_str!("fixtures/change.json");
const SERVER_INFO_JSON: &str = include_str!("fixtures/server_info.json");

fn fixture() -> (Change, ServerConfig) {
    let change: Change = decode_json(CHANGE_JSON).unwrap();
    let config: ServerConfig = decode_json(SERVER_INFO_JSON).unwrap();
    (change, config)
}

// === Derivations over a realistic snapshot ===

#[test]
fn test_roles_on_current_revision() {
    let (change, _) = fixture();
    let uploader = non_owner_role(&change, ChangeRole::Uploader).unwrap();
    assert_eq!(uploader.email.as_deref(), Some("ghi@def"));
    let author = non_owner_role(&change, ChangeRole::Author).unwrap();
    assert_eq!(author.name.as_deref(), Some("Jay"));
    assert!(non_owner_role(&change, ChangeRole::Committer).is_some());
    assert_eq!(show_role_class(&change, ChangeRole::Author), "");
}

#[test]
fn test_roles_hidden_when_owner_did_everything() {
    let (mut change, _) = fixture();
    change.current_revision = Some(RevisionId::from("rev1"));
    for role in [ChangeRole::Uploader, ChangeRole::Author, ChangeRole::Committer] {
        assert!(non_owner_role(&change, role).is_none());
        assert_eq!(show_role_class(&change, role), "hideDisplay");
    }
}

#[test]
fn test_dangling_current_revision_degrades_everywhere() {
    let (mut change, config) = fixture();
    change.current_revision = Some(RevisionId::from("does-not-exist"));
    for role in [ChangeRole::Uploader, ChangeRole::Author, ChangeRole::Committer] {
        assert!(non_owner_role(&change, role).is_none());
    }
    assert!(validate_push_certificate(&config, &change).is_none());
    assert!(compute_parents(Some(&change), None).is_empty());
    assert!(filter_weblinks(change.current_commit(), &config).is_none());
}

#[test]
fn test_bad_push_certificate_verdict() {
    let (change, config) = fixture();
    let verdict = validate_push_certificate(&config, &change).unwrap();
    assert_eq!(
        verdict.message,
        "Push certificate is invalid:\nNo public keys found for key ID E5E20E52"
    );
    assert_eq!(verdict.icon, "gr-icons:close");
    assert_eq!(verdict.class, ValidationClass::Invalid);

    assert!(validate_push_certificate(&ServerConfig::default(), &change).is_none());
}

#[test]
fn test_older_revision_without_certificate_asks_for_help() {
    let (mut change, config) = fixture();
    change.current_revision = Some(RevisionId::from("rev1"));
    let verdict = validate_push_certificate(&config, &change).unwrap();
    assert_eq!(verdict.class, ValidationClass::Help);
}

#[test]
fn test_parent_lineage_follows_selection() {
    let (change, _) = fixture();
    let parents = compute_parents(Some(&change), None);
    assert_eq!(parents.len(), 2);
    assert_eq!(parents_label(parents), "Parents");
    assert_eq!(parent_list_class(parents, true), "parentList merge current");

    let older = change.revisions[&RevisionId::from("rev1")].clone();
    let mut lineage = ParentLineage::new(change);
    lineage.select_revision(Some(older));
    assert_eq!(lineage.current_parents().len(), 1);
    assert_eq!(parents_label(lineage.current_parents()), "Parent");
    lineage.select_revision(None);
    assert_eq!(lineage.current_parents()[0].commit, "222bbb");
}

#[test]
fn test_weblinks_hide_configured_primary() {
    let (change, config) = fixture();
    let links = filter_weblinks(change.current_commit(), &config).unwrap();
    let names: Vec<&str> = links.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["gitiles", "ci"]);

    let links = filter_weblinks(change.current_commit(), &ServerConfig::default()).unwrap();
    let names: Vec<&str> = links.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["browser", "ci"]);
}

#[test]
fn test_mutability_truth_table() {
    let (change, _) = fixture();
    assert!(!is_read_only(MutableField::Topic, true, &change));
    assert!(is_read_only(MutableField::Topic, false, &change));
    assert!(is_read_only(MutableField::Hashtags, true, &change));
    assert!(is_read_only(MutableField::Hashtags, false, &change));
    assert!(!is_read_only(MutableField::Assignee, true, &change));
}

#[test]
fn test_summary_serializes() {
    let (change, config) = fixture();
    let meta = ChangeMetadata::derive(
        &change,
        &config,
        DeriveOptions {
            mutable: true,
            ..DeriveOptions::default()
        },
    );
    let json = serde_json::to_value(&meta).unwrap();
    assert_eq!(json["strategy"], "Rebase Always");
    assert_eq!(json["parents_label"], "Parents");
    assert_eq!(json["push_certificate"]["class"], "invalid");
    assert_eq!(json["topic_read_only"], false);
    assert_eq!(json["hashtag_read_only"], true);
    assert_eq!(json["show_requirements"], true);
    assert_eq!(json["show_topic_chip"], true);
}

// === Session against an in-memory remote ===

struct FakeServer {
    change: Change,
    config: ServerConfig,
    set_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

#[async_trait]
impl ChangeRemote for FakeServer {
    async fn get_change(&self, _change: ChangeNumber) -> Result<Change, SyncError> {
        Ok(self.change.clone())
    }

    async fn get_server_config(&self) -> Result<ServerConfig, SyncError> {
        Ok(self.config.clone())
    }

    async fn get_assignee(&self, _change: ChangeNumber) -> Result<Option<Account>, SyncError> {
        Ok(self.change.assignee.clone())
    }

    async fn set_assignee(
        &self,
        _change: ChangeNumber,
        assignee: &Account,
    ) -> Result<Account, SyncError> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        Ok(assignee.clone())
    }

    async fn delete_assignee(&self, _change: ChangeNumber) -> Result<(), SyncError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn set_topic(
        &self,
        _change: ChangeNumber,
        topic: Option<&str>,
    ) -> Result<String, SyncError> {
        Ok(topic.unwrap_or_default().to_string())
    }

    async fn set_hashtags(
        &self,
        _change: ChangeNumber,
        input: &HashtagsInput,
    ) -> Result<Vec<String>, SyncError> {
        let mut tags = self.change.hashtags.clone().unwrap_or_default();
        tags.retain(|t| !input.remove.contains(t));
        tags.extend(input.add.iter().cloned());
        Ok(tags)
    }
}

fn fake_server() -> Arc<FakeServer> {
    let (change, config) = fixture();
    Arc::new(FakeServer {
        change,
        config,
        set_calls: AtomicUsize::new(0),
        delete_calls: AtomicUsize::new(0),
    })
}

#[tokio::test]
async fn test_session_assignee_round_trip() {
    let server = fake_server();
    let mut session = MetadataSession::load(server.clone(), ChangeNumber::new(42))
        .await
        .unwrap();
    let mut events = session.subscribe();
    let bojack = Account {
        name: Some("bojack".into()),
        ..Account::with_id(1)
    };

    session.edit_assignee(&[bojack.clone()]).await.unwrap();
    session.edit_assignee(&[bojack.clone()]).await.unwrap();
    assert_eq!(server.set_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        events.recv().await.unwrap(),
        MetadataEvent::AssigneeChanged(Some(bojack))
    );

    session.edit_assignee(&[]).await.unwrap();
    session.edit_assignee(&[]).await.unwrap();
    assert_eq!(server.delete_calls.load(Ordering::SeqCst), 1);
    assert!(session.change().assignee.is_none());
}

#[tokio::test]
async fn test_session_rejects_multiple_assignees() {
    let server = fake_server();
    let mut session = MetadataSession::load(server.clone(), ChangeNumber::new(42))
        .await
        .unwrap();
    let err = session
        .edit_assignee(&[Account::with_id(1), Account::with_id(2)])
        .await
        .unwrap_err();
    assert!(matches!(err, SyncError::InvalidAssignee(2)));
    assert_eq!(server.set_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_session_hashtags_and_topic_feed_derivations() {
    let server = fake_server();
    let mut session = MetadataSession::load(server, ChangeNumber::new(42))
        .await
        .unwrap();

    let tags = session.add_hashtag("new hashtag").await.unwrap();
    assert_eq!(tags, vec!["test-hashtag".to_string(), "new hashtag".to_string()]);

    let tags = session.remove_hashtag("test-hashtag").await.unwrap();
    assert!(tags.is_empty());
    assert_eq!(session.change().hashtags, Some(Vec::new()));

    session.set_topic(None).await.unwrap();
    let meta = session.metadata(DeriveOptions::default());
    assert!(meta.show_add_topic);
    assert!(!meta.show_topic_chip);
}
