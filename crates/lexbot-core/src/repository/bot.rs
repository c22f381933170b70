//! Bot model repository trait definition.

use lexbot_types::bot::{BotAlias, BotDefinition};
use lexbot_types::error::RepositoryError;
use lexbot_types::intent::{IntentDefinition, IntentRef};

/// Repository trait for the remote bot model-building API.
///
/// Implementations live in lexbot-infra (e.g., LexModelRepository).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait BotModelRepository: Send + Sync {
    /// Create or replace a bot keyed by name.
    ///
    /// Replacing an existing bot requires `bot.checksum` from the latest fetch.
    fn put_bot(
        &self,
        bot: &BotDefinition,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Fetch a bot by name and version or alias.
    fn get_bot(
        &self,
        name: &str,
        version_or_alias: &str,
    ) -> impl std::future::Future<Output = Result<BotDefinition, RepositoryError>> + Send;

    /// Create or replace an intent. Returns the name and version assigned.
    fn put_intent(
        &self,
        intent: &IntentDefinition,
    ) -> impl std::future::Future<Output = Result<IntentRef, RepositoryError>> + Send;

    /// Create or replace an alias pointing at a bot version.
    fn put_bot_alias(
        &self,
        alias: &BotAlias,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
