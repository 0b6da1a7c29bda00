use std::time::Duration;

use blogdex_core::AppConfig;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::header::{HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER, USER_AGENT};
use reqwest::Client;

use crate::error::ScrapeError;

/// HTTP client for the blog platform's public pages.
///
/// Wraps one `reqwest::Client` with the pipeline's timeout and sends either
/// the desktop or the mobile User-Agent per request — the mobile pages
/// render a simpler template that the detail extractors rely on. Non-2xx
/// responses become typed errors; callers decide whether that aborts a
/// stage or just a single field.
pub struct BlogClient {
    client: Client,
    desktop_user_agent: String,
    mobile_user_agent: String,
    desktop_base: String,
    mobile_base: String,
    rss_base: String,
    search_base: String,
}

impl BlogClient {
    /// Creates a `BlogClient` from application config.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(config: &AppConfig) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            desktop_user_agent: config.desktop_user_agent.clone(),
            mobile_user_agent: config.mobile_user_agent.clone(),
            desktop_base: trim_base(&config.desktop_base_url),
            mobile_base: trim_base(&config.mobile_base_url),
            rss_base: trim_base(&config.rss_base_url),
            search_base: trim_base(&config.search_base_url),
        })
    }

    /// Fetches a page with the desktop User-Agent and blog referer.
    ///
    /// # Errors
    ///
    /// [`ScrapeError::Http`] on network/timeout failure,
    /// [`ScrapeError::UnexpectedStatus`] on any non-2xx status.
    pub async fn get_desktop(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.desktop_user_agent.as_str())
            .header(
                ACCEPT,
                HeaderValue::from_static(
                    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
                ),
            )
            .header(
                ACCEPT_LANGUAGE,
                HeaderValue::from_static("ko-KR,ko;q=0.9,en-US;q=0.8,en;q=0.7"),
            )
            .header(REFERER, format!("{}/", self.desktop_base))
            .send()
            .await?;
        Self::body_text(response).await
    }

    /// Fetches a page with the mobile User-Agent.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::get_desktop`].
    pub async fn get_mobile(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.mobile_user_agent.as_str())
            .header(
                ACCEPT,
                HeaderValue::from_static(
                    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
                ),
            )
            .header(ACCEPT_LANGUAGE, HeaderValue::from_static("ko-KR,ko;q=0.9"))
            .send()
            .await?;
        Self::body_text(response).await
    }

    async fn body_text(response: reqwest::Response) -> Result<String, ScrapeError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::UnexpectedStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response.text().await?)
    }

    /// Desktop "all posts" list page (the iframe target, not the shell).
    pub(crate) fn post_list_url(&self, blog_id: &str) -> String {
        format!(
            "{}/PostList.naver?blogId={blog_id}&from=postList&categoryNo=0",
            self.desktop_base
        )
    }

    pub(crate) fn rss_url(&self, blog_id: &str) -> String {
        format!("{}/{blog_id}", self.rss_base)
    }

    pub(crate) fn profile_url(&self, blog_id: &str) -> String {
        format!("{}/profile/intro.naver?blogId={blog_id}", self.desktop_base)
    }

    /// Visitor-counter widget endpoint (only populated when the blog owner
    /// left the widget public).
    pub(crate) fn visitor_counter_url(&self, blog_id: &str) -> String {
        format!(
            "{}/NVisitorg498Ajax.naver?blogId={blog_id}",
            self.desktop_base
        )
    }

    pub(crate) fn prologue_url(&self, blog_id: &str) -> String {
        format!(
            "{}/prologue/PrologueList.naver?blogId={blog_id}",
            self.desktop_base
        )
    }

    pub(crate) fn mobile_home_url(&self, blog_id: &str) -> String {
        format!("{}/{blog_id}", self.mobile_base)
    }

    pub(crate) fn mobile_post_url(&self, blog_id: &str, log_no: &str) -> String {
        format!("{}/{blog_id}/{log_no}", self.mobile_base)
    }

    /// Blog-vertical search results for a keyword.
    pub(crate) fn search_url(&self, keyword: &str) -> String {
        let encoded = utf8_percent_encode(keyword, NON_ALPHANUMERIC).to_string();
        format!(
            "{}/search.naver?where=blog&query={encoded}",
            self.search_base
        )
    }
}

fn trim_base(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
