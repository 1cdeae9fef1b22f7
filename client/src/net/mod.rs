//! Session seam between the storefront UI and the real-time gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the event/command wire schema, `session_client` runs the
//! browser binding, `session` exposes the handle components use, and
//! `data_channel` fans agent data packets out to topic listeners.

pub mod data_channel;
pub mod session;
pub mod session_client;
pub mod types;
