//! Startup configuration loader for lexbot.
//!
//! Loads `.env` from the working directory (if present) into the process
//! environment, then reads the required AWS settings. Variables already set
//! in the environment take precedence over `.env` entries.

use std::path::PathBuf;

use lexbot_types::config::AwsSettings;
use lexbot_types::error::ConfigError;

/// Load `.env` into the process environment.
///
/// Returns the path that was loaded, or `None` when there is no `.env` file.
/// Runs before logging is initialized, so the caller reports the outcome.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenv::Error> {
    match dotenv::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(dotenv::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

/// Read `ACCESS_KEY_ID`, `SECRET_ACCESS_KEY` and `AWS_REGION` from the
/// process environment.
pub fn load_aws_settings() -> Result<AwsSettings, ConfigError> {
    AwsSettings::from_lookup(env_lookup)
}

/// Non-unicode values are treated as missing rather than erroring.
fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_lookup_absent_variable() {
        assert!(env_lookup("LEXBOT_TEST_VARIABLE_THAT_IS_NEVER_SET").is_none());
    }
}
