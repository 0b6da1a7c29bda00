use crate::app_config::AppConfig;
use crate::ConfigError;

/// Default desktop browser User-Agent sent to the blog host.
const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Mobile User-Agent; the mobile pages render a simpler template that the
/// detail extractors depend on.
const MOBILE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_0 like Mac OS X) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.0 Mobile/15E148 Safari/604.1";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid. Every variable
/// has a default, so a bare environment always succeeds.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function — the parsing/validation core, decoupled from the process
/// environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    Ok(AppConfig {
        bind_addr: parse_addr("BLOGDEX_BIND_ADDR", "0.0.0.0:5000")?,
        log_level: or_default("BLOGDEX_LOG_LEVEL", "info"),
        desktop_base_url: or_default("BLOGDEX_DESKTOP_BASE_URL", "https://blog.naver.com"),
        mobile_base_url: or_default("BLOGDEX_MOBILE_BASE_URL", "https://m.blog.naver.com"),
        rss_base_url: or_default("BLOGDEX_RSS_BASE_URL", "https://rss.blog.naver.com"),
        search_base_url: or_default("BLOGDEX_SEARCH_BASE_URL", "https://search.naver.com"),
        suggest_base_url: or_default("BLOGDEX_SUGGEST_BASE_URL", "https://mac.search.naver.com"),
        trends_base_url: or_default("BLOGDEX_TRENDS_BASE_URL", "https://datalab.naver.com"),
        desktop_user_agent: or_default("BLOGDEX_DESKTOP_USER_AGENT", DESKTOP_UA),
        mobile_user_agent: or_default("BLOGDEX_MOBILE_USER_AGENT", MOBILE_UA),
        request_timeout_secs: parse_u64("BLOGDEX_REQUEST_TIMEOUT_SECS", "10")?,
        proxy_timeout_secs: parse_u64("BLOGDEX_PROXY_TIMEOUT_SECS", "5")?,
        max_enriched_posts: parse_usize("BLOGDEX_MAX_ENRICHED_POSTS", "30")?,
        enrich_workers: parse_usize("BLOGDEX_ENRICH_WORKERS", "5")?,
        enrich_delay_ms: parse_u64("BLOGDEX_ENRICH_DELAY_MS", "300")?,
    })
}
