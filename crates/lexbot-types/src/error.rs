use std::fmt;

use thiserror::Error;

/// Errors from the model-building port (used by trait definitions in lexbot-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The remote service answered with an error.
    #[error("{}", service_message(.code, .message))]
    Service {
        code: Option<String>,
        message: String,
    },

    /// The request never got a service answer (dispatch, timeout, bad response).
    #[error("{0}")]
    Transport(String),

    /// The outgoing request could not be assembled.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The service answered without a field the workflow depends on.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

fn service_message(code: &Option<String>, message: &str) -> String {
    match code {
        Some(code) => format!("{code}: {message}"),
        None => message.to_string(),
    }
}

/// The remote step a bot workflow was on when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotStep {
    DefineBot,
    PublishAlias,
    FetchBot,
    DefineIntent,
}

impl fmt::Display for BotStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotStep::DefineBot => write!(f, "define-bot"),
            BotStep::PublishAlias => write!(f, "publish-alias"),
            BotStep::FetchBot => write!(f, "fetch-bot"),
            BotStep::DefineIntent => write!(f, "define-intent"),
        }
    }
}

/// Errors related to bot workflows.
///
/// Displays as the remote message alone so it can be handed to clients
/// verbatim.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("{source}")]
    Remote {
        step: BotStep,
        #[source]
        source: RepositoryError,
    },
}

impl BotError {
    pub fn remote(step: BotStep) -> impl FnOnce(RepositoryError) -> BotError {
        move |source| BotError::Remote { step, source }
    }

    pub fn step(&self) -> BotStep {
        match self {
            BotError::Remote { step, .. } => *step,
        }
    }
}

/// Errors loading process configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),

    #[error("environment variable {0} is empty")]
    Empty(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display_with_code() {
        let err = RepositoryError::Service {
            code: Some("NotFoundException".to_string()),
            message: "The bot you're looking for wasn't found.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "NotFoundException: The bot you're looking for wasn't found."
        );
    }

    #[test]
    fn test_service_error_display_without_code() {
        let err = RepositoryError::Service {
            code: None,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_bot_error_passes_message_through() {
        let err = BotError::remote(BotStep::PublishAlias)(RepositoryError::Transport(
            "dispatch failure".to_string(),
        ));
        assert_eq!(err.to_string(), "dispatch failure");
        assert_eq!(err.step(), BotStep::PublishAlias);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Missing("AWS_REGION");
        assert_eq!(err.to_string(), "environment variable AWS_REGION is not set");
    }
}
