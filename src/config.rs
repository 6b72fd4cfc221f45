use crate::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 8000;

pub struct Config {
    pub discord_token: String,
    pub database_url: String,

    /// Port for the health endpoint.
    pub port: u16,

    /// When set, slash commands are registered to this guild only instead of globally.
    pub dev_guild_id: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            database_url: required("DATABASE_URL")?,
            port: optional_parsed("PORT")?.unwrap_or(DEFAULT_PORT),
            dev_guild_id: optional_parsed("DEV_GUILD_ID")?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_parsed<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    let Ok(value) = std::env::var(name) else {
        return Ok(None);
    };

    if value.trim().is_empty() {
        return Ok(None);
    }

    value
        .trim()
        .parse::<T>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}
