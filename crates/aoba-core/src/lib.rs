//! Service plumbing shared by the aoba workspace.
//!
//! Nothing in here knows about users, orders, or authentication; it is the
//! layer every axum service in the workspace starts from.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
