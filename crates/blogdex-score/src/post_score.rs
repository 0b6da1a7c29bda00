//! Per-post optimization score.
//!
//! A flat additive rubric against fixed authoring best practices — unlike
//! the blog index this scores one post, so there is no population curve,
//! just target bands with partial credit.

use blogdex_core::types::{EnrichedPost, ExposureState};

/// Score one enriched post on a 0–100 scale.
#[must_use]
pub fn calculate_post_score(post: &EnrichedPost) -> u32 {
    let mut score: i32 = 40;

    // Title length, in characters.
    let title_len = post
        .summary
        .title
        .as_deref()
        .map_or(0, |t| t.chars().count());
    if (20..=40).contains(&title_len) {
        score += 15;
    } else if (15..=50).contains(&title_len) {
        score += 8;
    } else if title_len < 15 {
        score -= 5;
    }

    // Image count; a flood of images still earns partial credit, zero is
    // penalized.
    if (3..=10).contains(&post.images) {
        score += 15;
    } else if (1..3).contains(&post.images) {
        score += 8;
    } else if post.images > 10 {
        score += 12;
    } else {
        score -= 10;
    }

    // Body length.
    if post.char_count >= 2000 {
        score += 15;
    } else if post.char_count >= 1500 {
        score += 12;
    } else if post.char_count >= 1000 {
        score += 8;
    } else if post.char_count >= 500 {
        score += 4;
    } else {
        score -= 5;
    }

    // Subheadings.
    if (2..=5).contains(&post.subheading_count) {
        score += 5;
    } else if post.subheading_count > 0 {
        score += 2;
    }

    // Search exposure.
    match post.exposure {
        ExposureState::Indexed => score += 20,
        ExposureState::Pending => score += 8,
        ExposureState::Missing | ExposureState::Unknown => {}
    }

    // Engagement.
    let engagement = post.likes + post.comments;
    if engagement >= 20 {
        score += 10;
    } else if engagement >= 10 {
        score += 7;
    } else if engagement >= 5 {
        score += 4;
    }

    #[allow(clippy::cast_sign_loss)]
    {
        score.clamp(0, 100) as u32
    }
}

#[cfg(test)]
mod tests {
    use blogdex_core::types::PostSummary;

    use super::*;

    fn post_with_title(title: &str) -> EnrichedPost {
        EnrichedPost::defaults_for(PostSummary {
            title: Some(title.to_string()),
            link: None,
            date: None,
            description: None,
        })
    }

    #[test]
    fn default_post_scores_below_base() {
        // Empty title (−5), no images (−10), short body (−5) against base 40.
        let post = EnrichedPost::defaults_for(PostSummary::default());
        assert_eq!(calculate_post_score(&post), 20);
    }

    #[test]
    fn well_formed_post_scores_full_marks() {
        let mut post = post_with_title("서울 강남역 근처 분위기 좋은 파스타 맛집 후기입니다");
        post.images = 5;
        post.char_count = 2400;
        post.subheading_count = 3;
        post.exposure = ExposureState::Indexed;
        post.likes = 15;
        post.comments = 10;
        assert_eq!(calculate_post_score(&post), 100);
    }

    #[test]
    fn title_band_edges() {
        let mut exact = post_with_title(&"가".repeat(20));
        exact.images = 1; // avoid the zero-image penalty dominating
        let mut wide = post_with_title(&"가".repeat(45));
        wide.images = 1;
        let mut short = post_with_title(&"가".repeat(10));
        short.images = 1;
        assert!(calculate_post_score(&exact) > calculate_post_score(&wide));
        assert!(calculate_post_score(&wide) > calculate_post_score(&short));
    }

    #[test]
    fn too_many_images_earn_partial_credit() {
        let mut in_band = post_with_title(&"가".repeat(25));
        in_band.images = 8;
        let mut flood = post_with_title(&"가".repeat(25));
        flood.images = 40;
        let in_band_score = calculate_post_score(&in_band);
        let flood_score = calculate_post_score(&flood);
        assert!(flood_score < in_band_score);
        assert_eq!(in_band_score - flood_score, 3);
    }

    #[test]
    fn pending_exposure_earns_partial_credit() {
        let mut indexed = post_with_title(&"가".repeat(25));
        indexed.exposure = ExposureState::Indexed;
        let mut pending = post_with_title(&"가".repeat(25));
        pending.exposure = ExposureState::Pending;
        let mut missing = post_with_title(&"가".repeat(25));
        missing.exposure = ExposureState::Missing;
        assert_eq!(
            calculate_post_score(&indexed) - calculate_post_score(&pending),
            12
        );
        assert_eq!(
            calculate_post_score(&pending) - calculate_post_score(&missing),
            8
        );
    }

    #[test]
    fn engagement_steps() {
        let base = post_with_title(&"가".repeat(25));
        let mut low = base.clone();
        low.likes = 3;
        low.comments = 2;
        let mut mid = base.clone();
        mid.likes = 10;
        let mut high = base.clone();
        high.likes = 12;
        high.comments = 9;
        assert_eq!(calculate_post_score(&low) - calculate_post_score(&base), 4);
        assert_eq!(calculate_post_score(&mid) - calculate_post_score(&base), 7);
        assert_eq!(calculate_post_score(&high) - calculate_post_score(&base), 10);
    }

    #[test]
    fn score_never_leaves_bounds() {
        let worst = EnrichedPost::defaults_for(PostSummary::default());
        assert!(calculate_post_score(&worst) <= 100);

        let mut best = post_with_title(&"가".repeat(30));
        best.images = 7;
        best.char_count = 10_000;
        best.subheading_count = 4;
        best.exposure = ExposureState::Indexed;
        best.likes = 500;
        best.comments = 100;
        assert_eq!(calculate_post_score(&best), 100);
    }
}
