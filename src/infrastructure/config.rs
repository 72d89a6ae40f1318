use std::env;
use std::fmt;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_pass: String,
    pub db_name: String,
    pub rpc_port: u16,
    pub max_connections: u32,
    pub seed_data: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required variable absent or empty
    Missing(&'static str),
    /// Variable present but not parseable
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => {
                write!(f, "Required environment variable {} is not set", key)
            }
            ConfigError::Invalid { key, value } => {
                write!(f, "Environment variable {} has invalid value '{}'", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// Debug output omits the password
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_user", &self.db_user)
            .field("db_name", &self.db_name)
            .field("rpc_port", &self.rpc_port)
            .field("max_connections", &self.max_connections)
            .field("seed_data", &self.seed_data)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let db_host = required("DB_HOST")?;
        let db_port = parse(required("DB_PORT")?, "DB_PORT")?;
        let db_user = required("DB_USER")?;
        let db_pass = required("DB_PASS")?;
        let db_name = required("DB_NAME")?;
        let rpc_port = parse(required("RPC_PORT")?, "RPC_PORT")?;

        let max_connections = match lookup("DB_MAX_CONNECTIONS").filter(|v| !v.is_empty()) {
            Some(v) => parse(v, "DB_MAX_CONNECTIONS")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let seed_data = lookup("SEED_DATA")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);

        Ok(Self {
            db_host,
            db_port,
            db_user,
            db_pass,
            db_name,
            rpc_port,
            max_connections,
            seed_data,
        })
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            urlencoding::encode(&self.db_user),
            urlencoding::encode(&self.db_pass),
            self.db_host,
            self.db_port,
            self.db_name
        )
    }
}

fn parse<T: std::str::FromStr>(value: String, key: &'static str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}
