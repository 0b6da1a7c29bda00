//! Blog-level SEO aggregate over enriched posts.

use blogdex_core::types::{AltQuality, EnrichedPost, ExposureState};
use serde::{Deserialize, Serialize};

/// How many posts the aggregate inspects.
const SAMPLE_SIZE: usize = 10;

/// Component threshold below which a recommendation is emitted.
const ADVICE_THRESHOLD: f64 = 15.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeoScore {
    pub total: f64,
    pub breakdown: SeoBreakdown,
    pub recommendations: Vec<String>,
}

/// Four components, each 0–25.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeoBreakdown {
    pub title: f64,
    pub image: f64,
    pub content: f64,
    pub exposure: f64,
}

/// Aggregate SEO sub-scores over the first ten enriched posts.
///
/// An empty post list yields an all-zero score with no recommendations.
#[must_use]
pub fn calculate_seo_score(posts: &[EnrichedPost]) -> SeoScore {
    if posts.is_empty() {
        return SeoScore::default();
    }
    let sample = &posts[..posts.len().min(SAMPLE_SIZE)];

    let title = round1(average(sample.iter().map(title_score)));
    let image = round1(average(sample.iter().map(image_score)));
    let content = round1(average(sample.iter().map(content_score)));

    let indexed = sample
        .iter()
        .filter(|p| p.exposure == ExposureState::Indexed)
        .count();
    #[allow(clippy::cast_precision_loss)]
    let exposure = round1(indexed as f64 / posts.len().min(SAMPLE_SIZE) as f64 * 25.0);

    let total = round1(title + image + content + exposure);

    let mut recommendations = Vec::new();
    if title < ADVICE_THRESHOLD {
        recommendations.push("제목에 키워드를 포함하고 20-45자로 작성하세요".to_string());
    }
    if image < ADVICE_THRESHOLD {
        recommendations.push("이미지 5-15개 사용 및 ALT 태그 설정을 권장합니다".to_string());
    }
    if content < ADVICE_THRESHOLD {
        recommendations.push("본문 2000자 이상, 소제목 2개 이상 사용을 권장합니다".to_string());
    }
    if exposure < ADVICE_THRESHOLD {
        recommendations.push("롱테일 키워드로 검색 노출률을 높이세요".to_string());
    }

    SeoScore {
        total,
        breakdown: SeoBreakdown {
            title,
            image,
            content,
            exposure,
        },
        recommendations,
    }
}

fn title_score(post: &EnrichedPost) -> f64 {
    let title = post.summary.title.as_deref().unwrap_or("");
    let len = title.chars().count();
    let mut score = 0.0;
    if (20..=45).contains(&len) {
        score += 10.0;
    } else if (15..=50).contains(&len) {
        score += 5.0;
    }
    if !post.keyword.is_empty() && title.contains(&post.keyword) {
        score += 15.0;
    }
    score
}

fn image_score(post: &EnrichedPost) -> f64 {
    let mut score = 0.0;
    if (5..=15).contains(&post.images) {
        score += 15.0;
    } else if (3..5).contains(&post.images) {
        score += 10.0;
    } else if post.images > 0 {
        score += 5.0;
    }
    score += match post.image_seo.alt_quality {
        AltQuality::Excellent => 10.0,
        AltQuality::Good => 7.0,
        AltQuality::Average => 4.0,
        _ => 0.0,
    };
    score
}

fn content_score(post: &EnrichedPost) -> f64 {
    let mut score = 0.0;
    if post.char_count >= 2000 {
        score += 15.0;
    } else if post.char_count >= 1500 {
        score += 10.0;
    } else if post.char_count >= 1000 {
        score += 5.0;
    }
    if post.subheading_count >= 2 {
        score += 10.0;
    } else if post.subheading_count > 0 {
        score += 5.0;
    }
    score
}

fn average(scores: impl Iterator<Item = f64>) -> f64 {
    let collected: Vec<f64> = scores.collect();
    if collected.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let denom = collected.len() as f64;
    collected.iter().sum::<f64>() / denom
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
