//! View-state machines and the query cache.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every type here is a plain struct wrapped in an `RwSignal` by the page or
//! component that owns it. Keeping the transitions free of Leptos lets them be
//! tested without a browser.

pub mod approval;
pub mod config_form;
pub mod content_selector;
pub mod newsletter_sheet;
pub mod query_cache;
pub mod review_queue;
pub mod role_selector;
pub mod toast;
pub mod ui;
