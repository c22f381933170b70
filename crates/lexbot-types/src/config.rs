//! Process configuration types for lexbot.
//!
//! `AwsSettings` carries the account credentials and region used to reach
//! the model-building service. It is built once at startup and passed
//! explicitly to whatever constructs the remote client.

use secrecy::SecretString;

use crate::error::ConfigError;

pub const ACCESS_KEY_ID_VAR: &str = "ACCESS_KEY_ID";
pub const SECRET_ACCESS_KEY_VAR: &str = "SECRET_ACCESS_KEY";
pub const AWS_REGION_VAR: &str = "AWS_REGION";

/// Static account credentials plus region.
///
/// The secret key is a [`SecretString`] and never shows up in `Debug` output.
#[derive(Debug)]
pub struct AwsSettings {
    pub access_key_id: String,
    pub secret_access_key: SecretString,
    pub region: String,
}

impl AwsSettings {
    /// Build settings from an arbitrary key lookup.
    ///
    /// All three variables are required; an absent or blank value is an error
    /// naming the variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            let value = lookup(key).ok_or(ConfigError::Missing(key))?;
            if value.trim().is_empty() {
                return Err(ConfigError::Empty(key));
            }
            Ok(value)
        };

        Ok(Self {
            access_key_id: required(ACCESS_KEY_ID_VAR)?,
            secret_access_key: SecretString::from(required(SECRET_ACCESS_KEY_VAR)?),
            region: required(AWS_REGION_VAR)?,
        })
    }
}
