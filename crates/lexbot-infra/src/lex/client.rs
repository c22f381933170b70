//! LexModelRepository -- concrete [`BotModelRepository`] implementation for
//! the Amazon Lex (V1) model building API.
//!
//! Authenticates with the static account credentials from [`AwsSettings`].
//! The secret key is only exposed when handing it to the SDK credentials
//! provider.

use aws_sdk_lexmodelbuilding::Client;
use aws_sdk_lexmodelbuilding::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_lexmodelbuilding::types::Locale;
use secrecy::ExposeSecret;

use lexbot_core::repository::bot::BotModelRepository;
use lexbot_types::bot::{BotAlias, BotDefinition};
use lexbot_types::config::AwsSettings;
use lexbot_types::error::RepositoryError;
use lexbot_types::intent::{IntentDefinition, IntentRef};

use super::convert;

/// Name reported by the static credentials provider.
const CREDENTIALS_PROVIDER: &str = "lexbot-environment";

/// Amazon Lex model building repository.
///
/// Cloning is cheap: the SDK client is reference-counted internally.
#[derive(Clone, Debug)]
pub struct LexModelRepository {
    client: Client,
}

impl LexModelRepository {
    /// Build a client for the configured region and static credentials.
    pub fn new(settings: &AwsSettings) -> Self {
        let credentials = Credentials::new(
            settings.access_key_id.clone(),
            settings.secret_access_key.expose_secret().to_string(),
            None,
            None,
            CREDENTIALS_PROVIDER,
        );

        let config = aws_sdk_lexmodelbuilding::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .credentials_provider(credentials)
            .build();

        tracing::info!(region = %settings.region, "Lex model building client configured");

        Self {
            client: Client::from_conf(config),
        }
    }
}

impl BotModelRepository for LexModelRepository {
    async fn put_bot(&self, bot: &BotDefinition) -> Result<(), RepositoryError> {
        let abort_statement = bot
            .abort_statement
            .as_ref()
            .map(convert::statement)
            .transpose()?;
        let clarification_prompt = bot
            .clarification_prompt
            .as_ref()
            .map(convert::prompt)
            .transpose()?;
        let intents = convert::intents(&bot.intents)?;

        let output = self
            .client
            .put_bot()
            .name(&bot.name)
            .locale(Locale::from(bot.locale.as_str()))
            .child_directed(bot.child_directed)
            .set_checksum(bot.checksum.clone())
            .set_abort_statement(abort_statement)
            .set_clarification_prompt(clarification_prompt)
            .set_intents(intents)
            .send()
            .await
            .map_err(convert::sdk_error)?;

        tracing::debug!(
            bot = %bot.name,
            status = ?output.status(),
            checksum = ?output.checksum(),
            "PutBot accepted"
        );
        Ok(())
    }

    async fn get_bot(
        &self,
        name: &str,
        version_or_alias: &str,
    ) -> Result<BotDefinition, RepositoryError> {
        let output = self
            .client
            .get_bot()
            .name(name)
            .version_or_alias(version_or_alias)
            .send()
            .await
            .map_err(convert::sdk_error)?;

        convert::bot_definition(&output)
    }

    async fn put_intent(&self, intent: &IntentDefinition) -> Result<IntentRef, RepositoryError> {
        let output = self
            .client
            .put_intent()
            .name(&intent.name)
            .conclusion_statement(convert::statement(&intent.conclusion_statement)?)
            .set_sample_utterances(Some(intent.sample_utterances.clone()))
            .fulfillment_activity(convert::fulfillment_activity(intent.fulfillment_activity)?)
            .send()
            .await
            .map_err(convert::sdk_error)?;

        let name = output.name().ok_or_else(|| {
            RepositoryError::MalformedResponse("PutIntent returned no intent name".to_string())
        })?;
        let version = output.version().ok_or_else(|| {
            RepositoryError::MalformedResponse("PutIntent returned no intent version".to_string())
        })?;

        Ok(IntentRef::new(name, version))
    }

    async fn put_bot_alias(&self, alias: &BotAlias) -> Result<(), RepositoryError> {
        self.client
            .put_bot_alias()
            .name(&alias.name)
            .bot_name(&alias.bot_name)
            .bot_version(&alias.bot_version)
            .send()
            .await
            .map_err(convert::sdk_error)?;

        Ok(())
    }
}
