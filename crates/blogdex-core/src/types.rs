//! Wire records for blog analysis results.
//!
//! These replace the original service's ad-hoc dict merging with explicit
//! typed records: which stage may write which field is enforced by the
//! stage functions, not by key-collision order.

use serde::{Deserialize, Serialize};

/// Everything extracted and computed for one blog identifier.
///
/// Count fields default to 0, which doubles as "not yet extracted" — later
/// stages only fill a count that is still 0 and never overwrite a non-zero
/// value (except the documented total-post correction, which may only raise
/// it). Identity fields use `None` as the unset marker instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogProfile {
    pub blog_id: String,
    pub blog_name: Option<String>,
    pub blog_nickname: Option<String>,
    pub profile_image: Option<String>,
    pub neighbors: u32,
    /// Reserved by the upstream schema; never populated by any stage.
    pub mutual_neighbors: u32,
    pub total_posts: u32,
    pub total_scraps: u32,
    pub daily_visitors: u32,
    pub yesterday_visitors: u32,
    pub total_visitors: u32,
    pub recent_posts: Vec<PostSummary>,
    /// Per-day visitor samples are collected client-side; always empty here.
    pub visitor_history: Vec<serde_json::Value>,
    pub blog_age_days: u32,
    pub recent_30days_posts: u32,
    pub crawled_at: String,
    pub index: Option<IndexResult>,
    pub posts_with_index: Vec<EnrichedPost>,
    /// Set only when the pipeline itself fails, never on partial extraction.
    pub error: Option<String>,
}

impl BlogProfile {
    #[must_use]
    pub fn new(blog_id: &str) -> Self {
        Self {
            blog_id: blog_id.to_string(),
            ..Self::default()
        }
    }
}

/// One RSS feed item, in feed order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub title: Option<String>,
    pub link: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

/// A feed item augmented with fetched detail metrics and its search
/// exposure classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedPost {
    #[serde(flatten)]
    pub summary: PostSummary,
    pub likes: u32,
    pub comments: u32,
    pub images: u32,
    pub char_count: u32,
    pub word_count: u32,
    pub subheading_count: u32,
    pub link_count: u32,
    pub has_video: bool,
    pub exposure: ExposureState,
    pub keyword: String,
    pub image_seo: ImageSeoReport,
    /// Authoring-rubric score in [0, 100], attached after enrichment.
    pub score: u32,
}

impl EnrichedPost {
    /// An enriched post carrying only its summary and default metrics —
    /// the substitute used when a per-post task fails.
    #[must_use]
    pub fn defaults_for(summary: PostSummary) -> Self {
        Self {
            summary,
            likes: 0,
            comments: 0,
            images: 0,
            char_count: 0,
            word_count: 0,
            subheading_count: 0,
            link_count: 0,
            has_video: false,
            exposure: ExposureState::Unknown,
            keyword: String::new(),
            image_seo: ImageSeoReport::default(),
            score: 0,
        }
    }
}

/// Whether a post was found in the platform's blog-vertical search results
/// for its derived keyword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExposureState {
    Indexed,
    Pending,
    Missing,
    #[default]
    Unknown,
}

/// Alt-text coverage tier for a post's content images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AltQuality {
    NoImages,
    Excellent,
    Good,
    Average,
    Poor,
    #[default]
    Unknown,
}

/// Image-SEO findings for one post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSeoReport {
    pub total_images: u32,
    pub with_alt: u32,
    pub without_alt: u32,
    pub alt_quality: AltQuality,
    pub has_descriptive_filename: bool,
    pub recommendations: Vec<String>,
}

/// Caller-supplied precomputed visitor average (multi-day history).
#[derive(Debug, Clone, Copy, Default)]
pub struct WeeklyStats {
    pub avg: u32,
    /// Number of distinct days backing `avg`.
    pub count: u32,
}

/// How reliable the index inputs were, judged purely by how many days of
/// visitor history the caller supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataReliability {
    High,
    Medium,
    Low,
}

/// Blog-level influence index: composite score, discrete grade tier, and
/// the sub-scores and inputs behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResult {
    pub grade: String,
    pub level: String,
    pub score: f64,
    pub color: String,
    pub breakdown: IndexBreakdown,
    pub detail: IndexDetail,
    /// Which fallback tier supplied the effective daily-visitor figure.
    pub visitor_source: String,
    pub data_reliability: DataReliability,
    pub reliability_msg: String,
    pub weekly_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexBreakdown {
    pub exposure: f64,
    pub activity: f64,
    pub trust: f64,
}

/// Echo of the aggregate inputs the index was computed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexDetail {
    pub daily_visitors: u32,
    pub total_visitors: u32,
    pub recent_30days_posts: u32,
    pub total_posts: u32,
    pub neighbors: u32,
}
