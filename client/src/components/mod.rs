//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the storefront chrome and the session surfaces. Session
//! state arrives through an explicit `SessionHandle` prop rather than context,
//! so each component's dependencies are visible at its call site.

pub mod agent_control_bar;
pub mod chat_entry;
pub mod chat_input;
pub mod chat_transcript;
pub mod drink_visualization;
pub mod order_receipt;
pub mod track_toggle;
pub mod welcome_view;
