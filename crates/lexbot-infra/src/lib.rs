//! Infrastructure layer for lexbot.
//!
//! Contains the implementation of the repository trait defined in
//! `lexbot-core` against the Amazon Lex model building API, and the
//! startup-time configuration loader.

pub mod config;
pub mod lex;
