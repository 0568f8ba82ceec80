use super::*;

fn articles_key() -> QueryKey {
    QueryKey::Articles { page: 1, page_size: 20 }
}

// =============================================================
// get / set
// =============================================================

#[test]
fn set_then_get_returns_typed_value() {
    let mut cache = QueryCache::default();
    assert!(cache.set(QueryKey::Channels, &vec!["ch-1".to_owned()]));
    let value: Option<Vec<String>> = cache.get(&QueryKey::Channels);
    assert_eq!(value, Some(vec!["ch-1".to_owned()]));
    assert!(!cache.is_stale(&QueryKey::Channels));
}

#[test]
fn get_with_wrong_type_is_none() {
    let mut cache = QueryCache::default();
    cache.set(QueryKey::Users, &"not a list");
    let value: Option<Vec<String>> = cache.get(&QueryKey::Users);
    assert_eq!(value, None);
}

#[test]
fn missing_entry_is_stale() {
    let cache = QueryCache::default();
    assert!(cache.is_stale(&articles_key()));
    assert_eq!(cache.get::<u32>(&articles_key()), None);
}

#[test]
fn remove_drops_entry() {
    let mut cache = QueryCache::default();
    cache.set(QueryKey::DraftIssues, &1_u32);
    cache.remove(&QueryKey::DraftIssues);
    assert_eq!(cache.get::<u32>(&QueryKey::DraftIssues), None);
}

// =============================================================
// invalidation
// =============================================================

#[test]
fn invalidate_marks_only_matching_scope_stale() {
    let mut cache = QueryCache::default();
    cache.set(articles_key(), &1_u32);
    cache.set(QueryKey::Article("a-1".to_owned()), &2_u32);
    cache.set(QueryKey::Channels, &3_u32);

    cache.invalidate(QueryScope::Articles);

    assert!(cache.is_stale(&articles_key()));
    assert!(cache.is_stale(&QueryKey::Article("a-1".to_owned())));
    assert!(!cache.is_stale(&QueryKey::Channels));
    assert_eq!(cache.get::<u32>(&articles_key()), Some(1), "stale values stay readable");
}

#[test]
fn invalidate_bumps_generation() {
    let mut cache = QueryCache::default();
    assert_eq!(cache.generation(QueryScope::Articles), 0);
    cache.invalidate(QueryScope::Articles);
    cache.invalidate(QueryScope::Articles);
    assert_eq!(cache.generation(QueryScope::Articles), 2);
    assert_eq!(cache.generation(QueryScope::Users), 0);
}

#[test]
fn set_after_invalidate_is_fresh() {
    let mut cache = QueryCache::default();
    cache.set(QueryKey::Channels, &1_u32);
    cache.invalidate(QueryScope::Channels);
    cache.set(QueryKey::Channels, &2_u32);
    assert!(!cache.is_stale(&QueryKey::Channels));
}

// =============================================================
// mutations
// =============================================================

#[test]
fn approve_and_reject_invalidate_articles() {
    assert_eq!(Mutation::ApproveArticle.invalidates(), &[QueryScope::Articles]);
    assert_eq!(Mutation::RejectArticle.invalidates(), &[QueryScope::Articles]);
}

#[test]
fn add_blocks_invalidates_issues_and_content() {
    assert_eq!(Mutation::AddBlocks.invalidates(), &[QueryScope::Issues, QueryScope::ContentItems]);
}

#[test]
fn channel_config_and_role_mutations_map_to_their_scope() {
    assert_eq!(Mutation::DisconnectChannel.invalidates(), &[QueryScope::Channels]);
    assert_eq!(Mutation::CompleteOAuth.invalidates(), &[QueryScope::Channels]);
    assert_eq!(Mutation::DeleteNewsletterConfig.invalidates(), &[QueryScope::NewsletterConfigs]);
    assert_eq!(Mutation::UpdateUserRole.invalidates(), &[QueryScope::Users]);
}

#[test]
fn apply_invalidates_every_listed_scope() {
    let mut cache = QueryCache::default();
    cache.set(QueryKey::DraftIssues, &1_u32);
    cache.set(QueryKey::ContentItems("page=1".to_owned()), &2_u32);
    cache.set(QueryKey::ContentSources, &3_u32);

    cache.apply(Mutation::AddBlocks);

    assert!(cache.is_stale(&QueryKey::DraftIssues));
    assert!(cache.is_stale(&QueryKey::ContentItems("page=1".to_owned())));
    assert!(!cache.is_stale(&QueryKey::ContentSources));
    assert_eq!(cache.generation(QueryScope::Issues), 1);
    assert_eq!(cache.generation(QueryScope::ContentItems), 1);
}

#[test]
fn key_scopes_group_article_detail_with_list() {
    assert_eq!(QueryKey::ApprovalHistory("a".to_owned()).scope(), QueryScope::Articles);
    assert_eq!(QueryKey::DraftIssues.scope(), QueryScope::Issues);
}

#[test]
fn fresh_hides_invalidated_entries() {
    let mut cache = QueryCache::default();
    cache.set(QueryKey::Users, &vec!["u1".to_owned()]);
    assert_eq!(cache.fresh::<Vec<String>>(&QueryKey::Users), Some(vec!["u1".to_owned()]));

    cache.invalidate(QueryScope::Users);
    assert_eq!(cache.fresh::<Vec<String>>(&QueryKey::Users), None);
    assert_eq!(cache.get::<Vec<String>>(&QueryKey::Users), Some(vec!["u1".to_owned()]));
}

// =============================================================
// remount
// =============================================================

#[test]
fn expire_forces_next_read_to_fetch_without_refetching_mounted_resources() {
    let mut cache = QueryCache::default();
    cache.set(articles_key(), &1_u32);

    cache.expire(QueryScope::Articles);

    assert_eq!(cache.fresh::<u32>(&articles_key()), None, "a remounted page fetches again");
    assert_eq!(cache.get::<u32>(&articles_key()), Some(1));
    assert_eq!(cache.generation(QueryScope::Articles), 0);
}

#[test]
fn unmounting_a_scope_user_expires_its_entries() {
    let root = Owner::new();
    root.set();
    let cache = RwSignal::new(QueryCache::default());
    provide_context(cache);
    cache.update(|c| {
        c.set(QueryKey::Channels, &1_u32);
        c.set(QueryKey::Users, &2_u32);
    });

    let page = root.child();
    page.with(|| {
        let _ = use_generation(QueryScope::Channels);
    });
    assert_eq!(cache.with_untracked(|c| c.fresh::<u32>(&QueryKey::Channels)), Some(1));

    page.cleanup();
    assert!(cache.with_untracked(|c| c.is_stale(&QueryKey::Channels)));
    assert!(!cache.with_untracked(|c| c.is_stale(&QueryKey::Users)));
    assert_eq!(cache.with_untracked(|c| c.generation(QueryScope::Channels)), 0);
}

#[test]
fn only_the_latest_content_query_is_kept() {
    let mut cache = QueryCache::default();
    let first = QueryKey::ContentItems("search=a&page=1".to_owned());
    let second = QueryKey::ContentItems("search=ab&page=1".to_owned());
    cache.set(first.clone(), &1_u32);
    cache.set(QueryKey::ContentSources, &9_u32);
    cache.set(second.clone(), &2_u32);

    assert_eq!(cache.get::<u32>(&first), None);
    assert_eq!(cache.get::<u32>(&second), Some(2));
    assert_eq!(cache.get::<u32>(&QueryKey::ContentSources), Some(9));
}

#[test]
fn release_and_reset_invalidate_articles() {
    assert_eq!(Mutation::ReleaseArticle.invalidates(), &[QueryScope::Articles]);
    assert_eq!(Mutation::ResetArticle.invalidates(), &[QueryScope::Articles]);
    assert_eq!(QueryKey::IssueBlocks("issue-2".to_owned()).scope(), QueryScope::Issues);
}
