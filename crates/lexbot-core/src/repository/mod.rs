//! Repository trait definitions (ports).
//!
//! These traits define the remote interface that the infrastructure layer
//! (lexbot-infra) implements. The core crate never depends on a specific
//! cloud SDK.

pub mod bot;
