use std::time::Duration;

use lettre::Address;
use secrecy::{ExposeSecret, Secret};

#[derive(serde::Deserialize, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub smtp: SmtpSettings,
}

#[derive(serde::Deserialize, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
}

#[derive(serde::Deserialize, Debug)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub tls: TlsMode,
    // The account doubles as the sender address and the organization inbox.
    pub username: String,
    // Secret does not let us expose this by mistake (e.g. Debug display)
    pub password: Secret<String>,
    pub timeout_seconds: Option<u64>,
}

/// How the connection to the relay is secured.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    /// Implicit TLS from the first byte (SMTPS, usually port 465).
    Wrapper,
    /// Plain connection upgraded with STARTTLS (usually port 587).
    Starttls,
    /// No encryption. Only meant for local relays.
    None,
}

#[derive(thiserror::Error, Debug)]
pub enum CredentialsError {
    #[error("The SMTP account is not configured. Set GMAIL_USER or APP_SMTP__USERNAME.")]
    MissingUsername,
    #[error("The SMTP password is not configured. Set GMAIL_APP_PASSWORD or APP_SMTP__PASSWORD.")]
    MissingPassword,
    #[error("The SMTP account `{0}` is not a valid email address.")]
    InvalidAccount(String),
}

impl SmtpSettings {
    /// The mailbox address of the relay account.
    ///
    /// Both credentials are checked here so that a misconfigured deployment
    /// fails at startup instead of on the first form submission.
    pub fn account(&self) -> Result<Address, CredentialsError> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(CredentialsError::MissingUsername);
        }
        if self.password.expose_secret().trim().is_empty() {
            return Err(CredentialsError::MissingPassword);
        }
        username
            .parse()
            .map_err(|_| CredentialsError::InvalidAccount(username.to_string()))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. \
                Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Merge variables in .env file to OS environment variables.
    // This makes the variables accessible for `config` below.
    dotenv::dotenv().ok();

    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into()) // By default, we use Local environment.
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let base = config::File::from(configuration_directory.join("base.yaml"));
    let environment = config::File::from(configuration_directory.join(environment_filename));

    let settings = config::Config::builder()
        .add_source(base)
        .add_source(environment)
        // APP_SMTP__USERNAME will map to Settings.smtp.username
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        // The names the website deployment has always used win over everything else.
        .set_override_option("smtp.username", std::env::var("GMAIL_USER").ok())?
        .set_override_option("smtp.password", std::env::var("GMAIL_APP_PASSWORD").ok())?
        .build()?;

    settings.try_deserialize::<Settings>()
}
