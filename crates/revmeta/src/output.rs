use revmeta_core::types::{Account, Change};
use revmeta_derive::ChangeMetadata;

fn person(account: &Option<Account>) -> Option<String> {
    account.as_ref().map(Account::display_name)
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "editable"
    } else {
        "read-only"
    }
}

pub fn render_metadata(change: &Change, meta: &ChangeMetadata) -> String {
    let mut out = Vec::new();

    match change.number {
        Some(n) => out.push(format!("Change {n} ({:?})", change.status)),
        None => out.push(format!("Change ({:?})", change.status)),
    }
    out.push(format!("Owner:      {}", change.owner.display_name()));
    if let Some(name) = person(&meta.uploader) {
        out.push(format!("Uploader:   {name}"));
    }
    if let Some(name) = person(&meta.author) {
        out.push(format!("Author:     {name}"));
    }
    if let Some(name) = person(&meta.committer) {
        out.push(format!("Committer:  {name}"));
    }
    if meta.assignee_enabled {
        let assignee = person(&change.assignee).unwrap_or_else(|| "none".into());
        out.push(format!("Assignee:   {assignee} [{}]", yes_no(!meta.assignee_read_only)));
    }
    if let Some(strategy) = meta.strategy {
        out.push(format!("Strategy:   {strategy}"));
    }
    let topic = change.topic.as_deref().filter(|t| !t.is_empty()).unwrap_or("none");
    out.push(format!("Topic:      {topic} [{}]", yes_no(!meta.topic_read_only)));
    let hashtags = change
        .hashtags
        .as_ref()
        .filter(|h| !h.is_empty())
        .map(|h| h.join(", "))
        .unwrap_or_else(|| "none".into());
    out.push(format!("Hashtags:   {hashtags} [{}]", yes_no(!meta.hashtag_read_only)));
    if meta.show_cherry_pick_of {
        if let Some(of) = change.cherry_pick_of_change {
            let ps = change
                .cherry_pick_of_patch_set
                .map(|p| format!(",{p}"))
                .unwrap_or_default();
            out.push(format!("Cherry-pick of: {of}{ps}"));
        }
    }
    if let Some(cert) = &meta.push_certificate {
        out.push(format!(
            "Push cert:  [{}] {}",
            cert.class.as_str(),
            cert.message.replace('\n', " ")
        ));
    }
    if !meta.parents.is_empty() {
        out.push(format!("{}:", meta.parents_label));
        for parent in &meta.parents {
            let short: String = parent.commit.chars().take(7).collect();
            out.push(format!("  {short} {}", parent.subject));
        }
    }
    if let Some(links) = &meta.web_links {
        out.push("Links:".to_string());
        for link in links {
            out.push(format!("  {}: {}", link.name, link.url));
        }
    }
    if meta.show_requirements {
        out.push("Submit requirements apply".to_string());
    }

    out.join("\n")
}
