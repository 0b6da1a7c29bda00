use std::net::SocketAddr;

/// Application configuration.
///
/// Every upstream base URL is configurable so tests can point the pipeline
/// at a local mock server instead of the real platform.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Base URL of the desktop blog host (list/profile/counter/prologue pages).
    pub desktop_base_url: String,
    /// Base URL of the mobile blog host (home + post detail pages).
    pub mobile_base_url: String,
    /// Base URL of the RSS host.
    pub rss_base_url: String,
    /// Base URL of the search host (blog-vertical search).
    pub search_base_url: String,
    /// Base URL of the autocomplete-suggestion host.
    pub suggest_base_url: String,
    /// Base URL of the keyword-trend host.
    pub trends_base_url: String,
    pub desktop_user_agent: String,
    pub mobile_user_agent: String,
    pub request_timeout_secs: u64,
    /// Shorter timeout for the suggestion/trend proxies.
    pub proxy_timeout_secs: u64,
    /// How many feed posts get detail enrichment.
    pub max_enriched_posts: usize,
    /// Bounded worker count for the enrichment fan-out.
    pub enrich_workers: usize,
    /// Courtesy delay between the detail fetch and the search check inside
    /// one enrichment task.
    pub enrich_delay_ms: u64,
}
