//! [`Config`]-related definitions.

use std::time;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::Debug;
use secrecy::SecretString;
use serde::Deserialize;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: Server,

    /// Service configuration.
    pub service: Service,

    /// Google Slides configuration.
    pub slides: Slides,

    /// Postgres configuration.
    pub postgres: Postgres,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("0.0.0.0".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(8080)]
    pub port: u16,

    /// [CORS] configuration.
    ///
    /// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
    pub cors: Cors,
}

/// [CORS] configuration.
///
/// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Cors {
    /// List of allowed origins.
    #[default(vec!["*".to_owned()])]
    pub origins: Vec<String>,
}

/// Service configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Service {
    /// ID of the presentation template used by projects which haven't
    /// chosen one.
    pub default_template: Option<String>,
}

impl TryFrom<Service> for service::Config {
    type Error = &'static str;

    fn try_from(value: Service) -> Result<Self, Self::Error> {
        let Service { default_template } = value;
        Ok(Self {
            default_template: default_template
                .filter(|t| !t.is_empty())
                .map(|t| t.parse())
                .transpose()?,
        })
    }
}

/// Google Slides configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Slides {
    /// OAuth 2.0 access token of the account owning the templates.
    ///
    /// Ignored if a [`ServiceAccount`] is configured.
    #[debug(skip)]
    pub access_token: String,

    /// [`ServiceAccount`] owning the templates.
    pub service_account: Option<ServiceAccount>,

    /// Base URL of the Google Slides API.
    #[default("https://slides.googleapis.com/v1".to_owned())]
    pub slides_url: String,

    /// Base URL of the Google Drive API.
    #[default("https://www.googleapis.com/drive/v3".to_owned())]
    pub drive_url: String,

    /// Timeout of a single API request.
    #[default(time::Duration::from_secs(30))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

impl From<Slides> for service::infra::google_slides::Config {
    fn from(value: Slides) -> Self {
        let Slides {
            access_token,
            service_account,
            slides_url,
            drive_url,
            timeout,
        } = value;

        Self {
            access_token: SecretString::from(access_token),
            service_account: service_account.map(Into::into),
            slides_url,
            drive_url,
            timeout,
        }
    }
}

/// Google service account configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct ServiceAccount {
    /// Email of the service account.
    pub client_email: String,

    /// PEM-encoded RSA private key of the service account.
    #[debug(skip)]
    pub private_key: String,

    /// URL of the OAuth 2.0 token endpoint.
    #[default("https://oauth2.googleapis.com/token".to_owned())]
    pub token_url: String,
}

impl From<ServiceAccount> for service::infra::google_slides::ServiceAccount {
    fn from(value: ServiceAccount) -> Self {
        let ServiceAccount {
            client_email,
            private_key,
            token_url,
        } = value;

        Self {
            client_email,
            private_key: SecretString::from(private_key),
            token_url,
        }
    }
}

/// Postgres configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Postgres {
    /// Host to connect to.
    #[default("127.0.0.1".to_owned())]
    pub host: String,

    /// Port to connect to.
    #[default(5432)]
    pub port: u16,

    /// User to connect as.
    #[default("postgres".to_owned())]
    pub user: String,

    /// Password to connect with.
    #[debug(skip)]
    #[default("postgres".to_owned())]
    pub password: String,

    /// Database name to connect to.
    #[default("postgres".to_owned())]
    pub dbname: String,
}

impl From<Postgres> for service::infra::postgres::Config {
    fn from(value: Postgres) -> Self {
        let Postgres {
            host,
            port,
            user,
            password,
            dbname,
        } = value;

        Self {
            host: Some(host),
            port: Some(port),
            user: Some(user),
            password: Some(password),
            dbname: Some(dbname),
            ..Self::default()
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
