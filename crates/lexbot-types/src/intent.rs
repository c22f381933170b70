use serde::{Deserialize, Serialize};

use crate::message::Statement;

/// How the bot fulfills an intent once all slots are elicited.
///
/// Only `ReturnIntent` is produced: the intent and its slot values are
/// handed back to the client application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FulfillmentActivity {
    #[default]
    ReturnIntent,
}

impl FulfillmentActivity {
    pub fn as_str(&self) -> &'static str {
        match self {
            FulfillmentActivity::ReturnIntent => "ReturnIntent",
        }
    }
}

/// An intent to define on the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentDefinition {
    pub name: String,
    /// Said to the user after the intent is fulfilled.
    pub conclusion_statement: Statement,
    /// Example phrases that trigger the intent.
    pub sample_utterances: Vec<String>,
    pub fulfillment_activity: FulfillmentActivity,
}

/// A (name, version) pair linking an intent to a bot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntentRef {
    pub intent_name: String,
    pub intent_version: String,
}

impl IntentRef {
    pub fn new(intent_name: impl Into<String>, intent_version: impl Into<String>) -> Self {
        Self {
            intent_name: intent_name.into(),
            intent_version: intent_version.into(),
        }
    }
}
