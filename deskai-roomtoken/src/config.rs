use thiserror::Error;

pub const ENV_ACCOUNT_SID: &str = "TWILIO_ACCOUNT_SID";
pub const ENV_API_KEY: &str = "TWILIO_API_KEY";
pub const ENV_API_SECRET: &str = "TWILIO_API_SECRET";
pub const ENV_ROOM_NAME: &str = "TWILIO_ROOM_NAME";
pub const ENV_ALLOWED_ORIGIN: &str = "ALLOWED_ORIGIN";

pub const DEFAULT_ROOM_NAME: &str = "math_classroom";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Twilio credentials are not set; missing {0}. Check the service environment.")]
    MissingSecrets(String),
}

/// Signing material for the video provider. All three values must be
/// present together; a partial set is treated as missing.
#[derive(Clone)]
pub struct ProviderSecrets {
    pub account_sid: String,
    pub api_key: String,
    pub api_secret: String,
}

impl std::fmt::Debug for ProviderSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSecrets")
            .field("account_sid", &self.account_sid)
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone)]
enum SecretsState {
    Present(ProviderSecrets),
    Missing(Vec<&'static str>),
}

/// Service configuration, resolved once at startup. The service starts
/// even when secrets are absent; token requests then fail until the
/// environment is fixed and the process restarted.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    secrets: SecretsState,
    pub room_name: String,
    pub allowed_origin: String,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(ENV_ACCOUNT_SID).ok(),
            std::env::var(ENV_API_KEY).ok(),
            std::env::var(ENV_API_SECRET).ok(),
            std::env::var(ENV_ROOM_NAME).ok(),
            std::env::var(ENV_ALLOWED_ORIGIN).ok(),
        )
    }

    pub fn from_values(
        account_sid: Option<String>,
        api_key: Option<String>,
        api_secret: Option<String>,
        room_name: Option<String>,
        allowed_origin: Option<String>,
    ) -> Self {
        let account_sid = nonblank(account_sid);
        let api_key = nonblank(api_key);
        let api_secret = nonblank(api_secret);

        let mut missing = Vec::new();
        if account_sid.is_none() {
            missing.push(ENV_ACCOUNT_SID);
        }
        if api_key.is_none() {
            missing.push(ENV_API_KEY);
        }
        if api_secret.is_none() {
            missing.push(ENV_API_SECRET);
        }

        let secrets = match (account_sid, api_key, api_secret) {
            (Some(account_sid), Some(api_key), Some(api_secret)) => {
                SecretsState::Present(ProviderSecrets {
                    account_sid,
                    api_key,
                    api_secret,
                })
            }
            _ => SecretsState::Missing(missing),
        };

        Self {
            secrets,
            room_name: nonblank(room_name).unwrap_or_else(|| DEFAULT_ROOM_NAME.into()),
            allowed_origin: nonblank(allowed_origin)
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.into()),
        }
    }

    pub fn secrets(&self) -> Result<&ProviderSecrets, ConfigError> {
        match &self.secrets {
            SecretsState::Present(secrets) => Ok(secrets),
            SecretsState::Missing(names) => {
                Err(ConfigError::MissingSecrets(names.join(", ")))
            }
        }
    }
}

fn nonblank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
