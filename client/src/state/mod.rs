//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `chat`, `visualization`, etc.) so
//! individual components can depend on small focused models. Every model
//! here is plain data; signals wrap them at the component/handle layer.

pub mod chat;
pub mod controls;
pub mod session;
pub mod ui;
pub mod visualization;
