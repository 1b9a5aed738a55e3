use serde::Deserialize;

use safai_core::config::Config;

/// Accounts service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct AccountsConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3181). Env var: `ACCOUNTS_PORT`.
    #[serde(default = "default_port")]
    pub accounts_port: u16,
    /// HS256 secret the identity provider signs session tokens with.
    /// Env var: `SESSION_JWT_SECRET`.
    pub session_jwt_secret: String,
}

fn default_port() -> u16 {
    3181
}

impl Config for AccountsConfig {}
