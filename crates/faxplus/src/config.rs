//! Fax.Plus credential and endpoint configuration.

use proto::ConfigError;

/// Environment variable holding the Fax.Plus API access token.
pub const ENV_ACCESS_TOKEN: &str = "FAXPLUS_ACCESS_TOKEN";
/// Environment variable holding the Fax.Plus account/user id.
pub const ENV_USER_ID: &str = "FAXPLUS_USER_ID";

const DEFAULT_BASE_URL: &str = "https://restapi.fax.plus/v3";

/// Resolved Fax.Plus credentials and endpoint
#[derive(Debug, Clone)]
pub struct FaxConfig {
    /// API access token sent as a bearer credential.
    pub access_token: String,
    /// Account/user identifier scoping every API path.
    pub user_id: String,
    /// Base URL of the REST API.
    pub base_url: String,
}

impl FaxConfig {
    /// Creates a config targeting the default Fax.Plus endpoint.
    pub fn new(access_token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            user_id: user_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the base URL (useful for proxies/tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Loads credentials from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads credentials through the given variable lookup.
    ///
    /// Empty and whitespace-only values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let access_token = required(&lookup, ENV_ACCESS_TOKEN)?;
        let user_id = required(&lookup, ENV_USER_ID)?;
        Ok(Self::new(access_token, user_id))
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<String, ConfigError> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::MissingField(key.to_string())),
    }
}
