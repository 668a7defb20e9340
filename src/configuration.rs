use serde;
use serde_aux::field_attributes::deserialize_number_from_string;
use serde_aux::field_attributes::deserialize_option_number_from_string;
use std::net::IpAddr;

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub application: ApplicationSettings,
    pub demo_user: DemoUserSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub port: Option<u16>,
    pub host: IpAddr,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    /// SQLite database file, created on first start if missing.
    pub path: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub pool_size: u32,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct DemoUserSettings {
    pub username: String,
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
                "{} is not a supported environment. Use either 'local' or 'production'.",
                other
            )),
        }
    }
}

impl DatabaseSettings {
    pub fn connection_string(&self) -> String {
        self.path.clone()
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {}", e))
    })?;
    let configuration_directory = base_path.join("configuration");
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let mut settings = config::Config::default();
    settings.merge(config::File::from(configuration_directory.join("base")).required(true))?;
    settings.merge(
        config::File::from(configuration_directory.join(environment.as_str())).required(true),
    )?;
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;
    settings.try_into()
}
