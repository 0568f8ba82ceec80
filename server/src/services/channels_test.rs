use super::*;

use crate::fixtures;

fn callback(channel_type: ChannelType, state: &str) -> OAuthCallbackRequest {
    OAuthCallbackRequest { channel_type, code: "auth-code".into(), state: state.into() }
}

#[test]
fn create_adds_email_channel() {
    let mut store = fixtures::seed();
    let request = CreateChannelRequest { channel_type: ChannelType::Email, account_name: " ops@aci.example ".into() };
    let channel = create(&mut store, &request, "channel-new".into()).expect("create");
    assert_eq!(channel.account_name, "ops@aci.example");
    assert_eq!(channel.status, ConnectionStatus::Connected);
    assert_eq!(list(&store).len(), 4);
}

#[test]
fn create_refuses_oauth_types_and_bad_addresses() {
    let mut store = fixtures::seed();
    let oauth = CreateChannelRequest { channel_type: ChannelType::Twitter, account_name: "a@b".into() };
    assert!(matches!(create(&mut store, &oauth, "x".into()), Err(ApiError::BadRequest(_))));
    let bad = CreateChannelRequest { channel_type: ChannelType::Email, account_name: "ops".into() };
    assert!(matches!(create(&mut store, &bad, "x".into()), Err(ApiError::BadRequest(_))));
}

#[test]
fn initiate_then_complete_connects_new_channel() {
    let mut store = fixtures::seed();
    let issued = initiate(&mut store, ChannelType::Instagram, "st-1".into()).expect("initiate");
    assert_eq!(issued.state, "st-1");

    let channel = complete(&mut store, &callback(ChannelType::Instagram, "st-1"), "channel-ig".into()).expect("complete");
    assert_eq!(channel.id, "channel-ig");
    assert_eq!(channel.channel_type, ChannelType::Instagram);
    assert!(store.oauth_states.is_empty());
}

#[test]
fn complete_reconnects_existing_channel() {
    let mut store = fixtures::seed();
    initiate(&mut store, ChannelType::Twitter, "st-2".into()).expect("initiate");
    let channel = complete(&mut store, &callback(ChannelType::Twitter, "st-2"), "unused".into()).expect("complete");
    assert_eq!(channel.id, "channel-twitter");
    assert_eq!(channel.status, ConnectionStatus::Connected);
    assert_eq!(channel.last_error, None);
    assert_eq!(list(&store).len(), 3);
}

#[test]
fn state_is_single_use() {
    let mut store = fixtures::seed();
    initiate(&mut store, ChannelType::Facebook, "st-3".into()).expect("initiate");
    complete(&mut store, &callback(ChannelType::Facebook, "st-3"), "fb".into()).expect("first");
    let again = complete(&mut store, &callback(ChannelType::Facebook, "st-3"), "fb2".into());
    assert!(matches!(again, Err(ApiError::BadRequest(_))));
}

#[test]
fn state_for_another_type_is_rejected() {
    let mut store = fixtures::seed();
    initiate(&mut store, ChannelType::Linkedin, "st-4".into()).expect("initiate");
    let err = complete(&mut store, &callback(ChannelType::Twitter, "st-4"), "x".into()).expect_err("mismatch");
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[test]
fn initiate_email_is_bad_request() {
    let mut store = fixtures::seed();
    assert!(matches!(initiate(&mut store, ChannelType::Email, "s".into()), Err(ApiError::BadRequest(_))));
    assert!(store.oauth_states.is_empty());
}

#[test]
fn disconnect_marks_channel() {
    let mut store = fixtures::seed();
    let channel = disconnect(&mut store, "channel-linkedin", &DisconnectRequest::user_initiated()).expect("disconnect");
    assert_eq!(channel.status, ConnectionStatus::Disconnected);
}

#[test]
fn disconnect_requires_reason_and_known_id() {
    let mut store = fixtures::seed();
    let blank = DisconnectRequest { reason: " ".into() };
    assert!(matches!(disconnect(&mut store, "channel-linkedin", &blank), Err(ApiError::BadRequest(_))));
    assert!(matches!(
        disconnect(&mut store, "nope", &DisconnectRequest::user_initiated()),
        Err(ApiError::NotFound { .. })
    ));
}
