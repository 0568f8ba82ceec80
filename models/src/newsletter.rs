//! Newsletter configurations, issues and the content pool they draw from.
//!
//! Newsletter payloads use snake_case field names on the wire.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{FieldError, ParseEnumError};

pub const MAX_CONFIG_NAME: usize = 200;
pub const MAX_CONFIG_DESCRIPTION: usize = 1000;
pub const MAX_BLOCKS_LIMIT: u32 = 10;
/// Upper bound on items assigned to an issue in one request.
pub const MAX_BULK_ITEMS: usize = 20;

/// Declares a fixed string enum with its wire names and labels.
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal, { $($variant:ident => ($wire:literal, $label:literal)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant),+
        }

        impl $name {
            pub const ALL: &[$name] = &[$(Self::$variant),+];

            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            #[must_use]
            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| ParseEnumError::new($kind, s))
            }
        }
    };
}

wire_enum!(
    /// How often a configuration produces an issue.
    Cadence, "cadence", {
        Weekly => ("weekly", "Weekly"),
        BiWeekly => ("bi-weekly", "Bi-weekly"),
        Monthly => ("monthly", "Monthly"),
    }
);

wire_enum!(
    IssueStatus, "issue status", {
        Draft => ("draft", "Draft"),
        PendingApproval => ("pending_approval", "Pending approval"),
        Approved => ("approved", "Approved"),
        Scheduled => ("scheduled", "Scheduled"),
        Sent => ("sent", "Sent"),
        Failed => ("failed", "Failed"),
    }
);

wire_enum!(
    ContentType, "content type", {
        Blog => ("blog", "Blog"),
        News => ("news", "News"),
        CaseStudy => ("case_study", "Case study"),
        Webinar => ("webinar", "Webinar"),
        ProductUpdate => ("product_update", "Product update"),
        Event => ("event", "Event"),
    }
);

wire_enum!(
    SourceType, "source type", {
        Rss => ("rss", "RSS"),
        Api => ("api", "API"),
        Manual => ("manual", "Manual"),
    }
);

wire_enum!(
    /// Section of an issue a content item is placed in.
    BlockType, "block type", {
        Hero => ("hero", "Hero"),
        News => ("news", "News"),
        Content => ("content", "Content"),
        Events => ("events", "Events"),
        Spotlight => ("spotlight", "Spotlight"),
    }
);

/// Day names indexed by `send_day_of_week` (0 = Sunday).
pub const WEEKDAYS: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterConfiguration {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<String>,
    pub cadence: Cadence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_day_of_week: Option<u8>,
    pub timezone: String,
    pub max_blocks: u32,
    pub content_freshness_days: u32,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl NewsletterConfiguration {
    /// e.g. `"Weekly on Tuesday"`, or just the cadence when no day is set.
    #[must_use]
    pub fn schedule_label(&self) -> String {
        match self.send_day_of_week.and_then(|d| WEEKDAYS.get(usize::from(d))) {
            Some(day) => format!("{} on {day}", self.cadence.label()),
            None => self.cadence.label().to_owned(),
        }
    }
}

/// Create/update body for a newsletter configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterConfigInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<String>,
    pub cadence: Cadence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_day_of_week: Option<u8>,
    pub timezone: String,
    pub max_blocks: u32,
    pub content_freshness_days: u32,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

impl Default for NewsletterConfigInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            segment_id: None,
            cadence: Cadence::Weekly,
            send_day_of_week: Some(2),
            timezone: "UTC".to_owned(),
            max_blocks: 6,
            content_freshness_days: 7,
            is_active: true,
        }
    }
}

impl From<&NewsletterConfiguration> for NewsletterConfigInput {
    fn from(config: &NewsletterConfiguration) -> Self {
        Self {
            name: config.name.clone(),
            description: config.description.clone(),
            segment_id: config.segment_id.clone(),
            cadence: config.cadence,
            send_day_of_week: config.send_day_of_week,
            timezone: config.timezone.clone(),
            max_blocks: config.max_blocks,
            content_freshness_days: config.content_freshness_days,
            is_active: config.is_active,
        }
    }
}

impl NewsletterConfigInput {
    /// Per-field validation; an empty result means the body may be sent.
    #[must_use]
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let name_len = self.name.trim().chars().count();
        if name_len == 0 {
            errors.push(FieldError::new("name", "Name is required"));
        } else if name_len > MAX_CONFIG_NAME {
            errors.push(FieldError::new("name", format!("Name must be at most {MAX_CONFIG_NAME} characters")));
        }
        if self.description.as_ref().is_some_and(|d| d.chars().count() > MAX_CONFIG_DESCRIPTION) {
            errors.push(FieldError::new(
                "description",
                format!("Description must be at most {MAX_CONFIG_DESCRIPTION} characters"),
            ));
        }
        if self.timezone.trim().is_empty() {
            errors.push(FieldError::new("timezone", "Timezone is required"));
        }
        if !(1..=MAX_BLOCKS_LIMIT).contains(&self.max_blocks) {
            errors.push(FieldError::new("max_blocks", format!("Max blocks must be between 1 and {MAX_BLOCKS_LIMIT}")));
        }
        if self.content_freshness_days < 1 {
            errors.push(FieldError::new("content_freshness_days", "Freshness must be at least 1 day"));
        }
        if self.send_day_of_week.is_some_and(|d| d > 6) {
            errors.push(FieldError::new("send_day_of_week", "Send day must be between 0 (Sunday) and 6 (Saturday)"));
        }
        errors
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterIssue {
    pub id: String,
    pub configuration_id: String,
    pub issue_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_line: Option<String>,
    pub status: IssueStatus,
    #[serde(default)]
    pub block_count: u32,
    #[serde(default)]
    pub created_at: String,
}

impl NewsletterIssue {
    /// e.g. `"#12 · October threat roundup"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.subject_line {
            Some(subject) if !subject.is_empty() => format!("#{} · {subject}", self.issue_number),
            _ => format!("Issue #{}", self.issue_number),
        }
    }
}

/// A candidate item for inclusion in a newsletter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub content_type: ContentType,
    #[serde(default)]
    pub topic_tags: Vec<String>,
    #[serde(default)]
    pub framework_tags: Vec<String>,
    pub publish_date: String,
    #[serde(default)]
    pub trust_score: f64,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentSource {
    pub id: String,
    pub name: String,
    pub source_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_url: Option<String>,
    #[serde(default)]
    pub trust_score: f64,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
    #[serde(default)]
    pub error_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

/// Body of `POST /v1/newsletter/issues/{id}/blocks`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAddBlocksRequest {
    pub content_item_ids: Vec<String>,
    pub block_type: BlockType,
}

impl BulkAddBlocksRequest {
    #[must_use]
    pub fn validate(&self) -> Vec<FieldError> {
        let count = self.content_item_ids.len();
        if count == 0 {
            vec![FieldError::new("content_item_ids", "Select at least one content item")]
        } else if count > MAX_BULK_ITEMS {
            vec![FieldError::new(
                "content_item_ids",
                format!("At most {MAX_BULK_ITEMS} items can be added at once"),
            )]
        } else {
            Vec::new()
        }
    }
}

/// A content item placed in an issue, as listed by
/// `GET /v1/newsletter/issues/{id}/blocks`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueBlock {
    pub content_item_id: String,
    pub block_type: BlockType,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAddBlocksResponse {
    pub created_count: u32,
    pub skipped_count: u32,
    #[serde(default)]
    pub skipped_ids: Vec<String>,
}

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod tests;
