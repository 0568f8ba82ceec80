//! Shared domain model for the ACI dashboard.
//!
//! This crate owns the JSON representation exchanged between the REST backend,
//! the `client` SPA, the `cli`, and the `server` dev host. Every entity here is
//! server-owned: consumers decode it, display it, and send mutation requests,
//! but never compute or enforce backend rules from it.

pub mod article;
pub mod channel;
pub mod envelope;
pub mod gate;
pub mod newsletter;
pub mod paths;
pub mod role;

pub use article::{
    ApprovalActionResult, ApprovalHistory, ApprovalHistoryEntry, ApproveRequest, Approver, Article,
    RejectRequest, RejectionDetails, Severity,
};
pub use channel::{
    Channel, ChannelHealth, ChannelStats, ChannelType, ConnectionStatus, CreateChannelRequest, DisconnectRequest,
    OAuthCallbackRequest, OAuthInitiateRequest, OAuthInitiateResponse,
};
pub use envelope::{Envelope, EnvelopeError, Page, PageInfo, decode, decode_page};
pub use gate::{ApprovalProgress, ApprovalStatus, Gate, GateState};
pub use newsletter::{
    BlockType, BulkAddBlocksRequest, BulkAddBlocksResponse, Cadence, ContentItem, ContentSource, ContentType,
    IssueBlock, IssueStatus, NewsletterConfigInput, NewsletterConfiguration, NewsletterIssue, SourceType,
};
pub use role::{AdminUser, UpdateRoleRequest, UserRole};

/// Error returned when parsing one of the fixed string enums from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    /// Enum being parsed, e.g. `"gate"`.
    pub kind: &'static str,
    /// Rejected input.
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self { kind, value: value.to_owned() }
    }
}

/// A single field-level validation failure, rendered inline next to the field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldError {
    /// Wire name of the offending field.
    pub field: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl FieldError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}
