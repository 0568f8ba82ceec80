use super::*;

fn valid_input() -> NewsletterConfigInput {
    NewsletterConfigInput { name: "Weekly Threat Brief".to_owned(), ..NewsletterConfigInput::default() }
}

fn fields(errors: &[FieldError]) -> Vec<&'static str> {
    errors.iter().map(|e| e.field).collect()
}

#[test]
fn cadence_uses_hyphenated_wire_name() {
    assert_eq!(serde_json::to_string(&Cadence::BiWeekly).expect("encode"), "\"bi-weekly\"");
    assert_eq!("monthly".parse::<Cadence>(), Ok(Cadence::Monthly));
}

#[test]
fn enums_round_trip_through_from_str() {
    for ty in ContentType::ALL {
        assert_eq!(ty.as_str().parse::<ContentType>(), Ok(*ty));
    }
    for block in BlockType::ALL {
        assert_eq!(block.as_str().parse::<BlockType>(), Ok(*block));
    }
    let err = "podcast".parse::<ContentType>().expect_err("unknown");
    assert_eq!(err.to_string(), "unknown content type: podcast");
}

#[test]
fn default_input_with_a_name_is_valid() {
    assert!(valid_input().validate().is_empty());
}

#[test]
fn blank_name_is_required() {
    let input = NewsletterConfigInput { name: "   ".to_owned(), ..valid_input() };
    let errors = input.validate();
    assert_eq!(fields(&errors), vec!["name"]);
    assert_eq!(errors[0].message, "Name is required");
}

#[test]
fn every_bound_is_reported_per_field() {
    let input = NewsletterConfigInput {
        name: "n".repeat(MAX_CONFIG_NAME + 1),
        description: Some("d".repeat(MAX_CONFIG_DESCRIPTION + 1)),
        timezone: String::new(),
        max_blocks: 11,
        content_freshness_days: 0,
        send_day_of_week: Some(7),
        ..valid_input()
    };
    assert_eq!(
        fields(&input.validate()),
        vec!["name", "description", "timezone", "max_blocks", "content_freshness_days", "send_day_of_week"]
    );
}

#[test]
fn zero_blocks_is_invalid() {
    let input = NewsletterConfigInput { max_blocks: 0, ..valid_input() };
    assert_eq!(fields(&input.validate()), vec!["max_blocks"]);
}

#[test]
fn configuration_decodes_and_labels_schedule() {
    let config: NewsletterConfiguration = serde_json::from_value(serde_json::json!({
        "id": "cfg-1",
        "name": "Weekly Threat Brief",
        "cadence": "weekly",
        "send_day_of_week": 2,
        "timezone": "America/New_York",
        "max_blocks": 6,
        "content_freshness_days": 7,
        "is_active": true,
        "created_at": "2026-09-01T00:00:00Z",
        "updated_at": "2026-09-01T00:00:00Z"
    }))
    .expect("decode");
    assert_eq!(config.schedule_label(), "Weekly on Tuesday");

    let input = NewsletterConfigInput::from(&config);
    assert_eq!(input.timezone, "America/New_York");
    assert!(input.validate().is_empty());
}

#[test]
fn issue_display_name_prefers_subject() {
    let mut issue = NewsletterIssue {
        id: "iss-1".to_owned(),
        configuration_id: "cfg-1".to_owned(),
        issue_number: 12,
        subject_line: Some("October roundup".to_owned()),
        status: IssueStatus::Draft,
        block_count: 0,
        created_at: String::new(),
    };
    assert_eq!(issue.display_name(), "#12 · October roundup");
    issue.subject_line = None;
    assert_eq!(issue.display_name(), "Issue #12");
}

#[test]
fn bulk_add_bounds_item_count() {
    let empty = BulkAddBlocksRequest { content_item_ids: vec![], block_type: BlockType::News };
    assert_eq!(empty.validate().len(), 1);

    let ids = (0..=MAX_BULK_ITEMS).map(|i| format!("item_{i}")).collect();
    let too_many = BulkAddBlocksRequest { content_item_ids: ids, block_type: BlockType::News };
    assert_eq!(too_many.validate()[0].message, "At most 20 items can be added at once");

    let one = BulkAddBlocksRequest { content_item_ids: vec!["item_1".to_owned()], block_type: BlockType::Hero };
    assert!(one.validate().is_empty());
}

#[test]
fn content_source_decodes_source_type() {
    let source: ContentSource = serde_json::from_value(serde_json::json!({
        "id": "src-1",
        "name": "Vendor blog",
        "source_type": "rss",
        "feed_url": "https://vendor.example/feed.xml",
        "trust_score": 0.9
    }))
    .expect("decode");
    assert_eq!(source.source_type, SourceType::Rss);
    assert!(source.is_active);
    assert_eq!(source.error_count, 0);
}
