//! Amazon Lex (V1) model building integration.
//!
//! - `client`: [`LexModelRepository`], the SDK-backed bot model repository
//! - `convert`: domain <-> SDK shape conversions and error flattening

pub mod client;
mod convert;

pub use client::LexModelRepository;
