//! Create/edit form state for newsletter configurations.
//!
//! Text inputs are parsed as they change; an unparseable number becomes 0 so
//! the per-field validation reports it rather than silently keeping the old
//! value. Nothing is sent while any field has an error.

#[cfg(test)]
#[path = "config_form_test.rs"]
mod config_form_test;

use models::newsletter::{Cadence, NewsletterConfigInput, NewsletterConfiguration};
use models::FieldError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Closed,
    Create,
    Edit(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigFormState {
    pub mode: FormMode,
    pub input: NewsletterConfigInput,
    pub errors: Vec<FieldError>,
    pub pending: bool,
}

impl ConfigFormState {
    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    pub fn open_create(&mut self) {
        *self = Self { mode: FormMode::Create, ..Self::default() };
    }

    pub fn open_edit(&mut self, config: &NewsletterConfiguration) {
        *self = Self {
            mode: FormMode::Edit(config.id.clone()),
            input: NewsletterConfigInput::from(config),
            ..Self::default()
        };
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Edit(_) => "Edit configuration",
            _ => "New configuration",
        }
    }

    /// First error for `field`, if any.
    pub fn error_for(&self, field: &str) -> Option<String> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message.clone())
    }

    pub fn set_name(&mut self, value: String) {
        self.input.name = value;
        self.clear_error("name");
    }

    pub fn set_description(&mut self, value: String) {
        self.input.description = (!value.trim().is_empty()).then_some(value);
        self.clear_error("description");
    }

    pub fn set_cadence(&mut self, value: &str) {
        if let Ok(cadence) = value.parse::<Cadence>() {
            self.input.cadence = cadence;
        }
    }

    /// Empty clears the day; anything unparseable becomes an out-of-range day.
    pub fn set_send_day(&mut self, value: &str) {
        let value = value.trim();
        self.input.send_day_of_week = if value.is_empty() { None } else { Some(value.parse().unwrap_or(u8::MAX)) };
        self.clear_error("send_day_of_week");
    }

    pub fn set_timezone(&mut self, value: String) {
        self.input.timezone = value;
        self.clear_error("timezone");
    }

    pub fn set_max_blocks(&mut self, value: &str) {
        self.input.max_blocks = value.trim().parse().unwrap_or(0);
        self.clear_error("max_blocks");
    }

    pub fn set_freshness_days(&mut self, value: &str) {
        self.input.content_freshness_days = value.trim().parse().unwrap_or(0);
        self.clear_error("content_freshness_days");
    }

    pub fn set_active(&mut self, active: bool) {
        self.input.is_active = active;
    }

    /// Validate and, when clean, mark pending and return the body together
    /// with the id being edited (`None` for create).
    pub fn submit(&mut self) -> Option<(Option<String>, NewsletterConfigInput)> {
        if self.pending {
            return None;
        }
        let id = match &self.mode {
            FormMode::Closed => return None,
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id.clone()),
        };
        self.errors = self.input.validate();
        if !self.errors.is_empty() {
            return None;
        }
        self.pending = true;
        let mut body = self.input.clone();
        body.name = body.name.trim().to_owned();
        Some((id, body))
    }

    pub fn finish_failure(&mut self) {
        self.pending = false;
    }

    fn clear_error(&mut self, field: &str) {
        self.errors.retain(|e| e.field != field);
    }
}
