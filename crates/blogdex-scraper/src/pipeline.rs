//! Blog analysis pipeline.
//!
//! Stage order is a contract, not a convenience: later stages may only
//! fill fields earlier stages left at their defaults, so reordering them
//! changes results. The index is computed once the aggregate stages are
//! done; enrichment runs afterwards and touches none of the index inputs.

use std::sync::Arc;

use blogdex_core::types::{BlogProfile, WeeklyStats};
use blogdex_core::AppConfig;
use chrono::{Local, NaiveDateTime, Timelike};

use crate::client::BlogClient;
use crate::enrich::{enrich_posts, EnrichOptions};
use crate::error::ScrapeError;
use crate::stages::{main_page, mobile, profile_page, rss, visitors};

/// Stateless analysis pipeline.
///
/// Holds only immutable configuration and a cheap-to-clone HTTP client; no
/// state survives a request, so one `Analyzer` is safely shared across
/// concurrent requests.
pub struct Analyzer {
    client: BlogClient,
    enrich: EnrichOptions,
}

impl Analyzer {
    /// Build an analyzer from application config.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &Arc<AppConfig>) -> Result<Self, ScrapeError> {
        Ok(Self {
            client: BlogClient::new(config)?,
            enrich: EnrichOptions {
                max_posts: config.max_enriched_posts,
                workers: config.enrich_workers,
                delay_ms: config.enrich_delay_ms,
            },
        })
    }

    /// Analyze a blog with the current wall clock.
    pub async fn analyze(&self, blog_id: &str, weekly: WeeklyStats) -> BlogProfile {
        self.analyze_at(blog_id, weekly, Local::now().naive_local())
            .await
    }

    /// Analyze a blog at an injected instant — the entry point tests use
    /// for deterministic clocks.
    pub async fn analyze_at(
        &self,
        blog_id: &str,
        weekly: WeeklyStats,
        now: NaiveDateTime,
    ) -> BlogProfile {
        let mut profile = BlogProfile::new(blog_id);
        profile.crawled_at = now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string();

        // 1. Desktop list page: nickname, post count, neighbors, scraps.
        match self.client.get_desktop(&self.client.post_list_url(blog_id)).await {
            Ok(html) => main_page::apply_main_page(&html, &mut profile),
            Err(e) => tracing::warn!(blog = blog_id, error = %e, "main page crawl failed"),
        }

        // 2. RSS feed: blog name, profile image, post summaries, recency.
        match self.client.get_desktop(&self.client.rss_url(blog_id)).await {
            Ok(xml) => rss::apply_rss(&xml, now, &mut profile),
            Err(e) => tracing::warn!(blog = blog_id, error = %e, "RSS crawl failed"),
        }

        // 3. Profile page: neighbor correction, blog age.
        match self.client.get_desktop(&self.client.profile_url(blog_id)).await {
            Ok(html) => profile_page::apply_profile_page(&html, now, &mut profile),
            Err(e) => tracing::warn!(blog = blog_id, error = %e, "profile crawl failed"),
        }

        // 4. Visitor counter, plus the prologue fallback for yesterday.
        match self
            .client
            .get_desktop(&self.client.visitor_counter_url(blog_id))
            .await
        {
            Ok(body) => visitors::apply_visitor_counter(&body, &mut profile),
            Err(e) => tracing::warn!(blog = blog_id, error = %e, "visitor counter crawl failed"),
        }
        if profile.yesterday_visitors == 0 {
            match self.client.get_desktop(&self.client.prologue_url(blog_id)).await {
                Ok(body) => visitors::apply_prologue_yesterday(&body, &mut profile),
                Err(e) => {
                    tracing::warn!(blog = blog_id, error = %e, "prologue crawl failed");
                }
            }
        }

        // 5. Mobile page: gap filler, runs last among the aggregate stages.
        match self.client.get_mobile(&self.client.mobile_home_url(blog_id)).await {
            Ok(html) => mobile::apply_mobile_page(&html, &mut profile),
            Err(e) => tracing::warn!(blog = blog_id, error = %e, "mobile page crawl failed"),
        }

        // 6. Influence index over the settled aggregate fields.
        let inputs = blogdex_score::IndexInputs {
            daily_visitors: profile.daily_visitors,
            yesterday_visitors: profile.yesterday_visitors,
            total_visitors: profile.total_visitors,
            neighbors: profile.neighbors,
            total_posts: profile.total_posts,
            recent_30days_posts: profile.recent_30days_posts,
            blog_age_days: profile.blog_age_days,
        };
        profile.index = Some(blogdex_score::calculate_index(
            &inputs,
            weekly,
            now.hour(),
        ));

        // 7. Per-post enrichment and scores.
        if !profile.recent_posts.is_empty() {
            let mut enriched =
                enrich_posts(&self.client, blog_id, &profile.recent_posts, &self.enrich).await;
            for post in &mut enriched {
                post.score = blogdex_score::calculate_post_score(post);
            }
            profile.posts_with_index = enriched;
        }

        profile
    }
}
