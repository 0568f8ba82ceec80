use super::*;

#[test]
fn channel_uses_type_on_the_wire() {
    let channel: Channel = serde_json::from_value(serde_json::json!({
        "id": "ch-1",
        "type": "linkedin",
        "account_name": "ACI Security",
        "status": "connected",
        "health": "degraded",
        "stats": {
            "posts_published": 12,
            "total_engagement": 340,
            "total_impressions": 9800,
            "avg_engagement_rate": 3.47
        },
        "last_error": "rate limited"
    }))
    .expect("decode");
    assert_eq!(channel.channel_type, ChannelType::Linkedin);
    assert!(channel.status.is_connected());
    assert_eq!(channel.health, ChannelHealth::Degraded);
    assert_eq!(channel.stats.posts_published, 12);
    assert_eq!(channel.stats.last_post_date, None);

    let json = serde_json::to_value(&channel).expect("encode");
    assert_eq!(json["type"], "linkedin");
}

#[test]
fn channel_defaults_missing_health_and_stats() {
    let channel: Channel = serde_json::from_value(serde_json::json!({
        "id": "ch-2",
        "type": "email",
        "account_name": "news@aci.example",
        "status": "pending"
    }))
    .expect("decode");
    assert_eq!(channel.health, ChannelHealth::Healthy);
    assert_eq!(channel.stats, ChannelStats::default());
}

#[test]
fn channel_type_parses_and_labels() {
    assert_eq!("instagram".parse::<ChannelType>(), Ok(ChannelType::Instagram));
    assert_eq!(ChannelType::Linkedin.label(), "LinkedIn");
    let err = "myspace".parse::<ChannelType>().expect_err("unknown");
    assert_eq!(err.to_string(), "unknown channel type: myspace");
}

#[test]
fn disconnect_reason_is_fixed() {
    let body = serde_json::to_value(DisconnectRequest::user_initiated()).expect("encode");
    assert_eq!(body, serde_json::json!({ "reason": "User initiated disconnect" }));
}

#[test]
fn create_request_renames_type() {
    let body = serde_json::to_value(CreateChannelRequest {
        channel_type: ChannelType::Twitter,
        account_name: "@aci".to_owned(),
    })
    .expect("encode");
    assert_eq!(body, serde_json::json!({ "type": "twitter", "account_name": "@aci" }));
}
