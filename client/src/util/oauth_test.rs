use super::*;

fn stored() -> StoredOAuthState {
    StoredOAuthState { state: "st-123".to_owned(), channel_type: ChannelType::Linkedin }
}

fn params(code: Option<&str>, state: Option<&str>) -> CallbackParams {
    CallbackParams {
        code: code.map(str::to_owned),
        state: state.map(str::to_owned),
        ..CallbackParams::default()
    }
}

// =============================================================
// authorize_url
// =============================================================

#[test]
fn authorize_url_encodes_every_parameter() {
    let url = authorize_url(
        ChannelType::Linkedin,
        "client id",
        "https://app.aci.example/channels/callback",
        "a+b",
    )
    .expect("linkedin is an oauth provider");
    assert_eq!(
        url,
        "https://www.linkedin.com/oauth/v2/authorization?response_type=code&client_id=client%20id\
         &redirect_uri=https%3A%2F%2Fapp.aci.example%2Fchannels%2Fcallback&state=a%2Bb\
         &scope=r_liteprofile%20r_emailaddress%20w_member_social"
    );
}

#[test]
fn twitter_uses_its_own_endpoint() {
    let url = authorize_url(ChannelType::Twitter, "tw", "https://x/cb", "s").expect("twitter");
    assert!(url.starts_with("https://twitter.com/i/oauth2/authorize?"));
    assert!(url.contains("scope=tweet.read%20tweet.write%20users.read"));
}

#[test]
fn email_has_no_provider() {
    assert_eq!(provider(ChannelType::Email), None);
    assert_eq!(authorize_url(ChannelType::Email, "id", "https://x/cb", "s"), None);
}

#[test]
fn every_oauth_provider_has_scopes() {
    for ty in ChannelType::ALL {
        if let Some(p) = provider(ty) {
            assert!(!p.scopes.is_empty(), "{ty} has no scopes");
            assert!(p.authorize_url.starts_with("https://"));
        }
    }
}

// =============================================================
// verify_callback
// =============================================================

#[test]
fn matching_state_and_code_verifies() {
    let verified = verify_callback(Some(&stored()), &params(Some("code-1"), Some("st-123"))).expect("verified");
    assert_eq!(
        verified,
        VerifiedCallback { channel_type: ChannelType::Linkedin, code: "code-1".to_owned(), state: "st-123".to_owned() }
    );
}

#[test]
fn provider_error_is_reported_first() {
    let p = CallbackParams {
        error: Some("access_denied".to_owned()),
        error_description: Some("User cancelled".to_owned()),
        ..CallbackParams::default()
    };
    assert_eq!(verify_callback(None, &p), Err(CallbackError::Provider("User cancelled".to_owned())));

    let bare = CallbackParams { error: Some("access_denied".to_owned()), ..CallbackParams::default() };
    assert_eq!(verify_callback(Some(&stored()), &bare), Err(CallbackError::Provider("access_denied".to_owned())));
}

#[test]
fn missing_record_is_rejected() {
    assert_eq!(verify_callback(None, &params(Some("c"), Some("st-123"))), Err(CallbackError::MissingRecord));
}

#[test]
fn state_mismatch_is_rejected() {
    assert_eq!(
        verify_callback(Some(&stored()), &params(Some("c"), Some("forged"))),
        Err(CallbackError::StateMismatch)
    );
    assert_eq!(verify_callback(Some(&stored()), &params(Some("c"), None)), Err(CallbackError::StateMismatch));
}

#[test]
fn missing_or_empty_code_is_rejected() {
    assert_eq!(verify_callback(Some(&stored()), &params(None, Some("st-123"))), Err(CallbackError::MissingCode));
    assert_eq!(verify_callback(Some(&stored()), &params(Some(""), Some("st-123"))), Err(CallbackError::MissingCode));
}

#[test]
fn stored_record_serializes_channel_type() {
    let json = serde_json::to_value(stored()).expect("encode");
    assert_eq!(json, serde_json::json!({ "state": "st-123", "channel_type": "linkedin" }));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn pending_record_is_absent_without_browser_storage() {
    save_pending(&stored());
    assert_eq!(load_pending(), None);
    clear_pending();
}
