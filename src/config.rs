use std::env;

use anyhow::{Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn is_development(self) -> bool {
        self == AppEnv::Development
    }
}

/// Process-wide configuration, read once at startup. Everything request
/// scoped (token, tenant host) lives in `ApiContext` instead.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Upstream API base URL, without a trailing slash.
    pub api_endpoint: String,
    pub env: AppEnv,
    /// Domain the tenant subdomain is joined onto for `X-Forwarded-Host`.
    pub tenant_domain: String,
    /// When set, every request forwards this host instead of the
    /// subdomain-derived one. Used against shared test environments.
    pub test_tenant_host: Option<String>,
}

pub fn from_env() -> Result<AppConfig> {
    let api_endpoint = env::var("API_ENDPOINT")
        .context("API_ENDPOINT not set")?
        .trim_end_matches('/')
        .to_string();

    let env_mode = match env::var("APP_ENV").as_deref() {
        Ok("production") => AppEnv::Production,
        _ => AppEnv::Development,
    };

    let tenant_domain = env::var("TENANT_DOMAIN").unwrap_or_else(|_| "consub.io".into());
    let test_tenant_host = env::var("TEST_TENANT_HOST").ok().filter(|h| !h.is_empty());

    Ok(AppConfig {
        api_endpoint,
        env: env_mode,
        tenant_domain,
        test_tenant_host,
    })
}
