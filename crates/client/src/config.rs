use shared_types::PortalConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<PortalConfig> = OnceLock::new();

/// `config.toml` from the workspace root. A wasm bundle has no filesystem,
/// so the file is compiled in.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Build-time override for `backend.base_url`.
const API_URL_OVERRIDE: Option<&str> = option_env!("LIBRARY_API_URL");

/// Parse the embedded config, apply the build-time override, and keep the
/// result for the lifetime of the app. Safe to call repeatedly.
///
/// An unparseable file logs an error and falls back to defaults.
pub fn portal_config() -> &'static PortalConfig {
    CONFIG.get_or_init(|| resolve(EMBEDDED_CONFIG, API_URL_OVERRIDE))
}

fn resolve(contents: &str, api_url_override: Option<&str>) -> PortalConfig {
    let config = PortalConfig::from_toml(contents).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to parse config.toml, using defaults");
        PortalConfig::default()
    });
    match api_url_override.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => {
            tracing::info!(base_url = url, "Backend origin overridden at build time");
            config.with_base_url(url)
        }
        None => config,
    }
}
