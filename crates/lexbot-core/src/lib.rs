//! Bot workflows and repository trait definitions for lexbot.
//!
//! This crate defines the "port" (the model-building repository trait) that
//! the infrastructure layer implements, and the service that sequences the
//! remote calls. It depends only on `lexbot-types` -- never on
//! `lexbot-infra` or any SDK crate.

pub mod repository;
pub mod service;
