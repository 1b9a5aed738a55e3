use serde::Deserialize;

use safai_core::config::Config;

/// Complaints service configuration loaded from environment variables.
///
/// The CDN credentials are optional at startup: uploads fail with
/// `UPLOAD_NOT_CONFIGURED` at request time when either is absent, so a
/// deployment without image support still serves listings.
#[derive(Debug, Deserialize)]
pub struct ComplaintsConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3182). Env var: `COMPLAINTS_PORT`.
    #[serde(default = "default_port")]
    pub complaints_port: u16,
    /// Image CDN cloud name. Env var: `CDN_CLOUD_NAME`.
    pub cdn_cloud_name: Option<String>,
    /// Image CDN unsigned upload preset. Env var: `CDN_UPLOAD_PRESET`.
    pub cdn_upload_preset: Option<String>,
}

fn default_port() -> u16 {
    3182
}

impl Config for ComplaintsConfig {}
