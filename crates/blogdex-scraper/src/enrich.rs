//! Bounded concurrent post enrichment.
//!
//! Fans the detail fetcher and exposure checker out over the first N feed
//! posts with at most W tasks in flight — a courtesy throttle against the
//! upstream site, not a throughput optimization. Each task carries its
//! original index and lands in a fixed slot, so completion order (which is
//! racy by nature) never changes the output order. A failing task
//! contributes a default-enriched post instead of aborting the batch.

use std::time::Duration;

use blogdex_core::types::{EnrichedPost, PostSummary};
use futures::stream::{self, StreamExt};

use crate::client::BlogClient;
use crate::exposure::check_search_exposure;
use crate::post_detail::fetch_post_details;

pub(crate) struct EnrichOptions {
    pub max_posts: usize,
    pub workers: usize,
    /// Delay between the detail fetch and the search check inside one task.
    pub delay_ms: u64,
}

/// Enrich the first `max_posts` summaries, preserving input order.
pub(crate) async fn enrich_posts(
    client: &BlogClient,
    blog_id: &str,
    posts: &[PostSummary],
    options: &EnrichOptions,
) -> Vec<EnrichedPost> {
    let selected: Vec<(usize, PostSummary)> = posts
        .iter()
        .take(options.max_posts)
        .cloned()
        .enumerate()
        .collect();
    let count = selected.len();

    let mut slots: Vec<Option<EnrichedPost>> = Vec::with_capacity(count);
    slots.resize_with(count, || None);

    let mut completed = stream::iter(selected)
        .map(|(index, summary)| async move {
            let enriched = enrich_one(client, blog_id, summary, options.delay_ms).await;
            (index, enriched)
        })
        .buffer_unordered(options.workers.max(1));

    while let Some((index, enriched)) = completed.next().await {
        slots[index] = Some(enriched);
    }

    slots.into_iter().flatten().collect()
}

async fn enrich_one(
    client: &BlogClient,
    blog_id: &str,
    summary: PostSummary,
    delay_ms: u64,
) -> EnrichedPost {
    let link = summary.link.clone().unwrap_or_default();
    let title = summary.title.clone().unwrap_or_default();

    let detail = fetch_post_details(client, blog_id, &link).await;

    if delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }

    let (exposure, keyword) = check_search_exposure(client, blog_id, &title, &link).await;

    let mut post = EnrichedPost::defaults_for(summary);
    post.likes = detail.likes;
    post.comments = detail.comments;
    post.images = detail.images;
    post.char_count = detail.char_count;
    post.word_count = detail.word_count;
    post.subheading_count = detail.subheading_count;
    post.link_count = detail.link_count;
    post.has_video = detail.has_video;
    post.image_seo = detail.image_seo;
    post.exposure = exposure;
    post.keyword = keyword;
    post
}
