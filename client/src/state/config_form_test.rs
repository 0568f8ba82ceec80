use super::*;

fn config() -> NewsletterConfiguration {
    NewsletterConfiguration {
        id: "cfg-1".to_owned(),
        name: "Weekly Threat Brief".to_owned(),
        description: None,
        segment_id: None,
        cadence: Cadence::Weekly,
        send_day_of_week: Some(2),
        timezone: "UTC".to_owned(),
        max_blocks: 6,
        content_freshness_days: 7,
        is_active: true,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

#[test]
fn closed_form_never_submits() {
    let mut form = ConfigFormState::default();
    assert!(!form.is_open());
    assert_eq!(form.submit(), None);
}

#[test]
fn create_with_blank_name_reports_inline_error() {
    let mut form = ConfigFormState::default();
    form.open_create();
    assert_eq!(form.title(), "New configuration");
    assert_eq!(form.submit(), None);
    assert_eq!(form.error_for("name").as_deref(), Some("Name is required"));
    assert!(!form.pending);
}

#[test]
fn editing_a_field_clears_its_error() {
    let mut form = ConfigFormState::default();
    form.open_create();
    form.submit();
    form.set_name("Monthly Digest".to_owned());
    assert_eq!(form.error_for("name"), None);
}

#[test]
fn unparseable_numbers_fail_validation() {
    let mut form = ConfigFormState::default();
    form.open_create();
    form.set_name("Digest".to_owned());
    form.set_max_blocks("lots");
    form.set_freshness_days("");
    form.set_send_day("funday");
    assert_eq!(form.submit(), None);
    assert!(form.error_for("max_blocks").is_some());
    assert!(form.error_for("content_freshness_days").is_some());
    assert!(form.error_for("send_day_of_week").is_some());
}

#[test]
fn valid_create_returns_trimmed_body_and_marks_pending() {
    let mut form = ConfigFormState::default();
    form.open_create();
    form.set_name("  Monthly Digest ".to_owned());
    form.set_cadence("monthly");
    form.set_send_day("");
    let (id, body) = form.submit().expect("valid");
    assert_eq!(id, None);
    assert_eq!(body.name, "Monthly Digest");
    assert_eq!(body.cadence, Cadence::Monthly);
    assert_eq!(body.send_day_of_week, None);
    assert!(form.pending);
    assert_eq!(form.submit(), None, "pending blocks resubmission");
}

#[test]
fn edit_prefills_and_submits_with_id() {
    let mut form = ConfigFormState::default();
    form.open_edit(&config());
    assert_eq!(form.title(), "Edit configuration");
    assert_eq!(form.input.name, "Weekly Threat Brief");
    form.set_active(false);
    let (id, body) = form.submit().expect("valid");
    assert_eq!(id.as_deref(), Some("cfg-1"));
    assert!(!body.is_active);
}

#[test]
fn failure_allows_retry() {
    let mut form = ConfigFormState::default();
    form.open_edit(&config());
    form.submit().expect("valid");
    form.finish_failure();
    assert!(form.submit().is_some());
}

#[test]
fn blank_description_is_none() {
    let mut form = ConfigFormState::default();
    form.open_create();
    form.set_description("   ".to_owned());
    assert_eq!(form.input.description, None);
    form.set_description("Sent to all customers".to_owned());
    assert_eq!(form.input.description.as_deref(), Some("Sent to all customers"));
}
