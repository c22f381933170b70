//! Application state wiring the bot service to its repository.
//!
//! The service is generic over the repository trait; `AppState::init` pins it
//! to the Lex implementation built from the startup configuration.

use std::sync::Arc;

use lexbot_core::repository::bot::BotModelRepository;
use lexbot_core::service::bot::BotService;
use lexbot_infra::config::load_aws_settings;
use lexbot_infra::lex::LexModelRepository;

/// Shared application state used by the REST API handlers.
pub struct AppState<R: BotModelRepository> {
    pub bot_service: Arc<BotService<R>>,
}

impl<R: BotModelRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            bot_service: Arc::clone(&self.bot_service),
        }
    }
}

impl<R: BotModelRepository> AppState<R> {
    pub fn new(bot_service: BotService<R>) -> Self {
        Self {
            bot_service: Arc::new(bot_service),
        }
    }
}

impl AppState<LexModelRepository> {
    /// Read credentials and region from the environment and wire the service.
    ///
    /// Missing configuration is fatal: the error names the absent variable.
    pub fn init() -> anyhow::Result<Self> {
        let settings = load_aws_settings()?;
        let repo = LexModelRepository::new(&settings);
        Ok(Self::new(BotService::new(repo)))
    }
}
