//! UI components.
//!
//! Each component renders one view-state from `crate::state` and reports user
//! intent through callbacks or by updating the signal it was handed. Network
//! calls for mutations are spawned from the component that owns the action.

pub mod add_to_newsletter_sheet;
pub mod approval_history_list;
pub mod approve_reject_buttons;
pub mod channel_card;
pub mod channel_hub;
pub mod configuration_form;
pub mod configuration_list;
pub mod content_review_card;
pub mod content_selector;
pub mod gate_progress;
pub mod list_status;
pub mod nav_bar;
pub mod pagination_bar;
pub mod reject_dialog;
pub mod review_queue;
pub mod role_selector;
pub mod toast_stack;
