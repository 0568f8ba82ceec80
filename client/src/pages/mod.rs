//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod article;
pub mod channels;
pub mod newsletter_configs;
pub mod newsletter_content;
pub mod oauth_callback;
pub mod review;
pub mod users;
