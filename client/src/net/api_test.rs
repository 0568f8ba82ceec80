use super::*;

#[test]
fn status_error_prefers_server_message() {
    let body = r#"{"success":false,"error":{"code":"CONFLICT","message":"article is not pending"}}"#;
    let err = status_error(409, body);
    assert_eq!(err, ApiError::Status { status: 409, message: "article is not pending".to_owned() });
    assert_eq!(err.to_string(), "article is not pending");
}

#[test]
fn status_error_falls_back_to_status_code() {
    assert_eq!(status_error(502, "<html>bad gateway</html>").to_string(), "request failed: 502");
    assert_eq!(status_error(500, r#"{"data":1}"#).to_string(), "request failed: 500");
}

#[test]
fn parse_body_treats_empty_as_null() {
    assert_eq!(parse_body(""), Ok(Value::Null));
    assert_eq!(parse_body("  "), Ok(Value::Null));
    assert_eq!(parse_body(r#"{"a":1}"#), Ok(serde_json::json!({"a": 1})));
    assert!(matches!(parse_body("{"), Err(ApiError::Envelope(_))));
}

#[test]
fn envelope_errors_convert_to_display_text() {
    let err: ApiError = EnvelopeError::Unsuccessful("forbidden".to_owned()).into();
    assert_eq!(err, ApiError::Envelope("forbidden".to_owned()));
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "network error: offline");
}

#[test]
fn unreadable_body_is_a_network_error() {
    assert_eq!(body_text::<String>(Ok("{}".to_owned())), Ok("{}".to_owned()));
    let err = body_text(Err("connection reset")).expect_err("unreadable");
    assert_eq!(err, ApiError::Network("response body unreadable: connection reset".to_owned()));
}
