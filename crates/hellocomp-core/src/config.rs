use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value. Every
/// variable has a default, so an empty environment always succeeds.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let feed_url = or_default(
        "HELLOCOMP_FEED_URL",
        "https://www.hellocomp.cz/heureka/export/products.xml",
    );
    let http_timeout_secs = parse_u64("HELLOCOMP_HTTP_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("HELLOCOMP_USER_AGENT", "hellocomp/0.1 (content-toolkit)");
    let inventory_csv = PathBuf::from(or_default("HELLOCOMP_INVENTORY_CSV", "./data/products.csv"));
    let log_level = or_default("HELLOCOMP_LOG_LEVEL", "info");
    let gemini_api_key = lookup("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
    let gemini_base_url = or_default(
        "HELLOCOMP_GEMINI_BASE_URL",
        "https://generativelanguage.googleapis.com",
    );
    let gemini_model = or_default("HELLOCOMP_GEMINI_MODEL", "gemini-2.5-flash");

    Ok(AppConfig {
        feed_url,
        http_timeout_secs,
        user_agent,
        inventory_csv,
        log_level,
        gemini_api_key,
        gemini_base_url,
        gemini_model,
    })
}
