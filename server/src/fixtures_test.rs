use super::*;

#[test]
fn seed_populates_every_collection() {
    let store = seed();
    assert_eq!(store.articles.len(), ARTICLE_COUNT);
    assert_eq!(store.channels.len(), 3);
    assert_eq!(store.configs.len(), 3);
    assert_eq!(store.issues.len(), 3);
    assert_eq!(store.content_items.len(), 30);
    assert_eq!(store.content_sources.len(), 3);
    assert_eq!(store.users.len(), UserRole::ALL.len());
}

#[test]
fn every_role_has_a_user() {
    let store = seed();
    for role in UserRole::ALL {
        assert!(store.users.iter().any(|u| u.role == role), "{role}");
    }
}

#[test]
fn article_progress_is_consistent_with_history() {
    for stored in seed().articles {
        let progress = stored.article.approval_progress.expect("progress");
        assert!(progress.is_consistent(), "{}", stored.article.id);
        assert_eq!(progress.completed_count, stored.approvals.len(), "{}", stored.article.id);
        assert_eq!(stored.article.rejected, stored.rejection.is_some());
    }
}

#[test]
fn article_ids_are_unique() {
    let store = seed();
    let mut ids: Vec<_> = store.articles.iter().map(|a| a.article.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), ARTICLE_COUNT);
}

#[test]
fn draft_issues_exist_for_block_assignment() {
    let store = seed();
    let drafts = store.issues.iter().filter(|i| i.status == IssueStatus::Draft).count();
    assert_eq!(drafts, 2);
    assert_eq!(store.blocks.get("issue-3").map(Vec::len), Some(1));
}

#[test]
fn email_channel_is_seeded_without_oauth_state() {
    let store = seed();
    assert!(store.channels.iter().any(|c| c.channel_type == ChannelType::Email));
    assert!(store.oauth_states.is_empty());
}
