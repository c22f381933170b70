//! Bot management service.
//!
//! Sequences the remote calls behind the two HTTP operations. Creating a bot
//! is define-bot followed by publish-alias; updating a bot is fetch-bot,
//! define-intent, then define-bot again with the fetched checksum. Each step
//! depends on the previous one, so the first failure ends the workflow and
//! nothing already written is rolled back.

use lexbot_types::bot::{BotAlias, CreateBotRequest, UpdateBotRequest};
use lexbot_types::error::{BotError, BotStep};

use crate::repository::bot::BotModelRepository;

/// Service orchestrating bot creation and intent attachment.
///
/// Generic over the repository trait to maintain clean architecture --
/// lexbot-core never depends on lexbot-infra.
pub struct BotService<R: BotModelRepository> {
    repo: R,
}

impl<R: BotModelRepository> BotService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new bot and publish an alias for it.
    ///
    /// 1. Submits the bot with plain-text abort and clarification messages
    ///    (clarification max attempts fixed at 5)
    /// 2. Publishes an alias named after the bot pointing at `$LATEST`
    pub async fn create_bot(&self, request: CreateBotRequest) -> Result<(), BotError> {
        let definition = request.to_definition();

        tracing::debug!(bot = %definition.name, "defining bot");
        self.repo
            .put_bot(&definition)
            .await
            .map_err(BotError::remote(BotStep::DefineBot))
            .inspect_err(log_failure)?;

        let alias = BotAlias::latest_for(&definition.name);
        tracing::debug!(bot = %alias.bot_name, alias = %alias.name, "publishing alias");
        self.repo
            .put_bot_alias(&alias)
            .await
            .map_err(BotError::remote(BotStep::PublishAlias))
            .inspect_err(log_failure)?;

        tracing::info!(bot = %definition.name, "bot created");
        Ok(())
    }

    /// Define a new intent and attach it to an existing bot.
    ///
    /// 1. Fetches the bot by name and version or alias
    /// 2. Defines the intent (conclusion messages, utterances, `ReturnIntent`)
    /// 3. Appends the intent to the fetched intent list
    /// 4. Resubmits the bot with the fetched checksum and the request's
    ///    abort and clarification messages
    pub async fn update_bot(&self, request: UpdateBotRequest) -> Result<(), BotError> {
        tracing::debug!(bot = %request.name, version = %request.version, "fetching bot");
        let current = self
            .repo
            .get_bot(&request.name, &request.version)
            .await
            .map_err(BotError::remote(BotStep::FetchBot))
            .inspect_err(log_failure)?;

        let intent = request.to_intent();
        tracing::debug!(intent = %intent.name, "defining intent");
        let intent_ref = self
            .repo
            .put_intent(&intent)
            .await
            .map_err(BotError::remote(BotStep::DefineIntent))
            .inspect_err(log_failure)?;

        let updated = request.merge_into(current, intent_ref);
        tracing::debug!(
            bot = %updated.name,
            intents = updated.intents.len(),
            "resubmitting bot"
        );
        self.repo
            .put_bot(&updated)
            .await
            .map_err(BotError::remote(BotStep::DefineBot))
            .inspect_err(log_failure)?;

        tracing::info!(bot = %updated.name, intent = %intent.name, "bot updated with new intent");
        Ok(())
    }
}

fn log_failure(err: &BotError) {
    tracing::warn!(step = %err.step(), error = %err, "remote call failed");
}
