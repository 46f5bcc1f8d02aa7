//! Runtime configuration read from the environment.

use crate::constants::{DEFAULT_MATCH_THRESHOLD, DEFAULT_MAX_RESULTS};
use crate::env_config::{env_parse_with_default, env_string};

/// PostgreSQL connection settings.
///
/// `DATABASE_URL` wins when set; otherwise the URL is assembled from
/// `DATABASE_HOST`, `DATABASE_PORT`, `DATABASE_NAME`, `DATABASE_USERNAME`
/// and `DATABASE_PASSWORD`.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "***"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_owned(),
            port: 5432,
            name: "facevault".to_owned(),
            username: "postgres".to_owned(),
            password: String::new(),
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: env_string(&["DATABASE_URL"]),
            host: env_string(&["DATABASE_HOST"]).unwrap_or(defaults.host),
            port: env_parse_with_default("DATABASE_PORT", defaults.port),
            name: env_string(&["DATABASE_NAME"]).unwrap_or(defaults.name),
            username: env_string(&["DATABASE_USERNAME"]).unwrap_or(defaults.username),
            password: std::env::var("DATABASE_PASSWORD").unwrap_or(defaults.password),
        }
    }

    /// Connection URL for the application database.
    #[must_use]
    pub fn database_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!("postgres://{}@{}:{}/{}", self.userinfo(), self.host, self.port, self.name),
        }
    }

    /// Connection URL for the `postgres` maintenance database, used to create
    /// the application database when it does not exist yet.
    ///
    /// Returns `None` when an explicit `DATABASE_URL` was given, since its
    /// parts are not known.
    #[must_use]
    pub fn maintenance_url(&self) -> Option<String> {
        self.url
            .is_none()
            .then(|| format!("postgres://{}@{}:{}/postgres", self.userinfo(), self.host, self.port))
    }

    /// Percent-encoded `user[:password]` so passwords containing `@`, `:` or `/` survive.
    fn userinfo(&self) -> String {
        let username = urlencoding::encode(&self.username);
        if self.password.is_empty() {
            username.into_owned()
        } else {
            format!("{username}:{}", urlencoding::encode(&self.password))
        }
    }
}

/// Nearest-neighbor matching parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    /// Cosine distance a stored embedding must be strictly below to match.
    pub threshold: f64,
    /// Maximum number of faces processed per identification request.
    pub max_results: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { threshold: DEFAULT_MATCH_THRESHOLD, max_results: DEFAULT_MAX_RESULTS }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let threshold = env_parse_with_default("MATCH_THRESHOLD", DEFAULT_MATCH_THRESHOLD);
        let max_results = env_parse_with_default("MATCH_MAX_RESULTS", DEFAULT_MAX_RESULTS);
        Self { threshold, max_results }
    }
}
