//! Shared domain types for lexbot.
//!
//! This crate contains the bot, intent and message shapes exchanged with the
//! model-building service, the HTTP request bodies, configuration types and
//! the error enums used across the workspace.
//!
//! Zero infrastructure dependencies -- only serde, secrecy, thiserror.

pub mod bot;
pub mod config;
pub mod error;
pub mod intent;
pub mod message;
pub mod serde;
