use super::*;

#[test]
fn non_empty_drops_blank_values() {
    assert_eq!(non_empty(None), None);
    assert_eq!(non_empty(Some("  ")), None);
    assert_eq!(non_empty(Some(" abc ")), Some("abc".to_owned()));
}

#[test]
fn normalize_base_strips_trailing_slash() {
    assert_eq!(normalize_base("https://api.aci.example/"), "https://api.aci.example");
    assert_eq!(normalize_base(""), "");
}

#[test]
fn url_joins_base_and_path() {
    let cfg = ClientConfig { api_base: "https://api.aci.example".to_owned(), ..ClientConfig::default() };
    assert_eq!(cfg.url("/v1/articles"), "https://api.aci.example/v1/articles");
    assert_eq!(ClientConfig::default().url("/v1/articles"), "/v1/articles");
}

#[test]
fn client_id_is_per_channel_type() {
    let cfg = ClientConfig { linkedin_client_id: Some("li-123".to_owned()), ..ClientConfig::default() };
    assert_eq!(cfg.client_id(ChannelType::Linkedin), Some("li-123"));
    assert_eq!(cfg.client_id(ChannelType::Twitter), None);
}

#[test]
fn redirect_uri_defaults_to_callback_route() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.redirect_uri("https://app.aci.example/"), "https://app.aci.example/channels/callback");

    let pinned = ClientConfig { oauth_redirect_uri: Some("https://fixed.example/cb".to_owned()), ..cfg };
    assert_eq!(pinned.redirect_uri("https://ignored.example"), "https://fixed.example/cb");
}
