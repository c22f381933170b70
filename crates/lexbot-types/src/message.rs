//! Message, prompt and statement types shared by bots and intents.
//!
//! A [`Statement`] is a list of messages the bot says once (abort,
//! conclusion). A [`Prompt`] is a list of messages the bot uses to ask the
//! user again, bounded by `max_attempts`.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Number of times a bot re-asks before giving up on a clarification.
pub const CLARIFICATION_MAX_ATTEMPTS: u32 = 5;

/// Content type of a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContentType {
    #[default]
    PlainText,
    #[serde(rename = "SSML")]
    Ssml,
    CustomPayload,
}

impl ContentType {
    /// Wire name used by the model-building API.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::PlainText => "PlainText",
            ContentType::Ssml => "SSML",
            ContentType::CustomPayload => "CustomPayload",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PlainText" => Ok(ContentType::PlainText),
            "SSML" => Ok(ContentType::Ssml),
            "CustomPayload" => Ok(ContentType::CustomPayload),
            other => Err(format!("invalid content type: '{other}'")),
        }
    }
}

/// A single message with its content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub content: String,
    pub content_type: ContentType,
}

impl Message {
    /// Wrap a string as a plain-text message.
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            content_type: ContentType::PlainText,
        }
    }
}

/// Wrap every string as a plain-text message, preserving order.
pub fn plain_text_messages<I, S>(contents: I) -> Vec<Message>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    contents.into_iter().map(Message::plain_text).collect()
}

/// Messages the bot says once, e.g. when it aborts a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Statement {
    pub messages: Vec<Message>,
}

impl Statement {
    pub fn plain_text<I, S>(contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            messages: plain_text_messages(contents),
        }
    }
}

/// Messages the bot uses to re-ask the user, with a retry bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub messages: Vec<Message>,
    pub max_attempts: u32,
}

impl Prompt {
    /// Clarification prompt with the fixed [`CLARIFICATION_MAX_ATTEMPTS`].
    pub fn clarification<I, S>(contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            messages: plain_text_messages(contents),
            max_attempts: CLARIFICATION_MAX_ATTEMPTS,
        }
    }
}
