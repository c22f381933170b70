use serde::{Deserialize, Serialize};

use crate::intent::{FulfillmentActivity, IntentDefinition, IntentRef};
use crate::message::{Prompt, Statement};
use crate::serde::null_as_default;

/// Version selector that always resolves to the working draft of a bot.
pub const LATEST_VERSION: &str = "$LATEST";

/// A bot as the remote model-building service sees it.
///
/// The same shape is used for writes (define-bot) and for reads (fetch-bot).
/// `checksum` must be carried over from the most recent fetch when writing an
/// existing bot, otherwise the service rejects the write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotDefinition {
    /// Unique within the account.
    pub name: String,
    /// Locale code such as `en-US`.
    pub locale: String,
    pub child_directed: bool,
    pub abort_statement: Option<Statement>,
    pub clarification_prompt: Option<Prompt>,
    pub intents: Vec<IntentRef>,
    /// Optimistic-concurrency token; `None` when creating.
    pub checksum: Option<String>,
    /// Version reported by the service on fetch. Ignored on writes.
    pub version: Option<String>,
}

/// A named pointer to a specific bot version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotAlias {
    pub name: String,
    pub bot_name: String,
    pub bot_version: String,
}

impl BotAlias {
    /// The alias published for a freshly created bot: same name, `$LATEST`.
    pub fn latest_for(bot_name: &str) -> Self {
        Self {
            name: bot_name.to_string(),
            bot_name: bot_name.to_string(),
            bot_version: LATEST_VERSION.to_string(),
        }
    }
}

/// Request body for creating a bot.
///
/// Missing or `null` fields bind to their zero values; nothing is validated
/// before the remote call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateBotRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub child_directed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub locale: String,
    #[serde(deserialize_with = "null_as_default")]
    pub abort_messages: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub clarification_prompts: Vec<String>,
}

impl CreateBotRequest {
    /// The define-bot payload for this request: no intents, no checksum.
    pub fn to_definition(&self) -> BotDefinition {
        BotDefinition {
            name: self.name.clone(),
            locale: self.locale.clone(),
            child_directed: self.child_directed,
            abort_statement: Some(Statement::plain_text(self.abort_messages.iter().cloned())),
            clarification_prompt: Some(Prompt::clarification(
                self.clarification_prompts.iter().cloned(),
            )),
            intents: Vec::new(),
            checksum: None,
            version: None,
        }
    }
}

/// Request body for attaching a new intent to an existing bot.
///
/// `child_directed` and `locale` are accepted for symmetry with
/// [`CreateBotRequest`] but the fetched bot's values are what get resubmitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateBotRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub child_directed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub locale: String,
    /// Conclusion messages for the new intent.
    #[serde(deserialize_with = "null_as_default")]
    pub messages: Vec<String>,
    /// Sample utterances for the new intent.
    #[serde(deserialize_with = "null_as_default")]
    pub utterances: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub intent_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub abort_messages: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub clarification_prompts: Vec<String>,
    /// Version or alias to fetch, e.g. `$LATEST`.
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
}

impl UpdateBotRequest {
    pub fn to_intent(&self) -> IntentDefinition {
        IntentDefinition {
            name: self.intent_name.clone(),
            conclusion_statement: Statement::plain_text(self.messages.iter().cloned()),
            sample_utterances: self.utterances.clone(),
            fulfillment_activity: FulfillmentActivity::ReturnIntent,
        }
    }

    /// Build the resubmitted definition from the fetched bot.
    ///
    /// Identity, locale, flag and checksum come from `current`; the new
    /// intent is appended after the existing ones; abort and clarification
    /// content is replaced wholesale by this request's lists.
    pub fn merge_into(&self, current: BotDefinition, new_intent: IntentRef) -> BotDefinition {
        let mut intents = current.intents;
        intents.push(new_intent);

        BotDefinition {
            name: current.name,
            locale: current.locale,
            child_directed: current.child_directed,
            abort_statement: Some(Statement::plain_text(self.abort_messages.iter().cloned())),
            clarification_prompt: Some(Prompt::clarification(
                self.clarification_prompts.iter().cloned(),
            )),
            intents,
            checksum: current.checksum,
            version: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;

    fn fetched(intents: Vec<IntentRef>) -> BotDefinition {
        BotDefinition {
            name: "OrderFlowers".to_string(),
            locale: "en-US".to_string(),
            child_directed: true,
            abort_statement: Some(Statement::plain_text(["old abort"])),
            clarification_prompt: Some(Prompt::clarification(["old clarify"])),
            intents,
            checksum: Some("abc123".to_string()),
            version: Some("$LATEST".to_string()),
        }
    }

    #[test]
    fn test_create_request_missing_fields_bind_to_zero_values() {
        let req: CreateBotRequest = serde_json::from_str(r#"{"name":"Luna"}"#).unwrap();
        assert_eq!(req.name, "Luna");
        assert!(!req.child_directed);
        assert!(req.locale.is_empty());
        assert!(req.abort_messages.is_empty());
        assert!(req.clarification_prompts.is_empty());
    }

    #[test]
    fn test_create_request_wrong_type_is_rejected() {
        let result = serde_json::from_str::<CreateBotRequest>(r#"{"child_directed":"yes"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_null_fields_bind_to_zero_values() {
        let body = r#"{
            "name": "Luna",
            "child_directed": null,
            "locale": null,
            "abort_messages": null,
            "clarification_prompts": ["Pardon?"]
        }"#;
        let req: CreateBotRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.name, "Luna");
        assert!(!req.child_directed);
        assert!(req.locale.is_empty());
        assert!(req.abort_messages.is_empty());
        assert_eq!(req.clarification_prompts, vec!["Pardon?".to_string()]);
    }

    #[test]
    fn test_update_request_null_fields_bind_to_zero_values() {
        let body = r#"{"name": "OrderFlowers", "version": null, "utterances": null}"#;
        let req: UpdateBotRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.name, "OrderFlowers");
        assert!(req.version.is_empty());
        assert!(req.utterances.is_empty());
    }

    #[test]
    fn test_update_request_full_body() {
        let body = r#"{
            "name": "OrderFlowers",
            "child_directed": false,
            "locale": "en-US",
            "messages": ["Done"],
            "utterances": ["I want flowers"],
            "intent_name": "BuyFlowers",
            "abort_messages": ["Bye"],
            "clarification_prompts": ["Pardon?"],
            "version": "$LATEST"
        }"#;
        let req: UpdateBotRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.intent_name, "BuyFlowers");
        assert_eq!(req.version, LATEST_VERSION);
        assert_eq!(req.utterances, vec!["I want flowers".to_string()]);
    }

    #[test]
    fn test_to_definition_has_no_intents_or_checksum() {
        let req = CreateBotRequest {
            name: "Luna".to_string(),
            child_directed: true,
            locale: "en-GB".to_string(),
            abort_messages: vec!["a".to_string(), "b".to_string()],
            clarification_prompts: vec!["c".to_string()],
        };
        let def = req.to_definition();
        assert!(def.intents.is_empty());
        assert!(def.checksum.is_none());
        assert_eq!(def.clarification_prompt.unwrap().max_attempts, 5);
        assert_eq!(
            def.abort_statement.unwrap().messages,
            vec![Message::plain_text("a"), Message::plain_text("b")]
        );
    }

    #[test]
    fn test_alias_points_at_latest() {
        let alias = BotAlias::latest_for("Luna");
        assert_eq!(alias.name, "Luna");
        assert_eq!(alias.bot_name, "Luna");
        assert_eq!(alias.bot_version, "$LATEST");
    }

    #[test]
    fn test_merge_appends_intent_last() {
        let req = UpdateBotRequest::default();
        let current = fetched(vec![IntentRef::new("Greet", "1"), IntentRef::new("Help", "3")]);
        let merged = req.merge_into(current, IntentRef::new("BuyFlowers", "1"));
        assert_eq!(merged.intents.len(), 3);
        assert_eq!(merged.intents[0], IntentRef::new("Greet", "1"));
        assert_eq!(merged.intents[2], IntentRef::new("BuyFlowers", "1"));
    }

    #[test]
    fn test_merge_on_bot_without_intents() {
        let req = UpdateBotRequest::default();
        let merged = req.merge_into(fetched(Vec::new()), IntentRef::new("BuyFlowers", "1"));
        assert_eq!(merged.intents, vec![IntentRef::new("BuyFlowers", "1")]);
    }

    #[test]
    fn test_merge_replaces_messages_and_keeps_identity() {
        let req = UpdateBotRequest {
            locale: "de-DE".to_string(),
            child_directed: false,
            abort_messages: vec!["new abort 1".to_string(), "new abort 2".to_string()],
            clarification_prompts: vec!["new clarify".to_string()],
            ..Default::default()
        };
        let merged = req.merge_into(fetched(Vec::new()), IntentRef::new("X", "1"));

        assert_eq!(merged.name, "OrderFlowers");
        assert_eq!(merged.locale, "en-US");
        assert!(merged.child_directed);
        assert_eq!(merged.checksum.as_deref(), Some("abc123"));
        assert_eq!(
            merged.abort_statement.unwrap(),
            Statement::plain_text(["new abort 1", "new abort 2"])
        );
        assert_eq!(
            merged.clarification_prompt.unwrap(),
            Prompt::clarification(["new clarify"])
        );
    }

    #[test]
    fn test_to_intent_returns_intent() {
        let req = UpdateBotRequest {
            intent_name: "BuyFlowers".to_string(),
            messages: vec!["Thanks!".to_string()],
            utterances: vec!["flowers please".to_string(), "buy roses".to_string()],
            ..Default::default()
        };
        let intent = req.to_intent();
        assert_eq!(intent.name, "BuyFlowers");
        assert_eq!(intent.fulfillment_activity, FulfillmentActivity::ReturnIntent);
        assert_eq!(intent.sample_utterances.len(), 2);
        assert_eq!(intent.conclusion_statement.messages[0].content, "Thanks!");
    }
}
