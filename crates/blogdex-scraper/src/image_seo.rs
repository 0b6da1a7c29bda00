//! Image-SEO analysis: alt-text coverage and filename quality for the
//! content images of one post.

use blogdex_core::types::{AltQuality, ImageSeoReport};
use regex::Regex;
use scraper::Html;

use crate::parse_util::selector;

/// Hosts that serve post body images. Anything else is UI chrome.
const CONTENT_HOSTS: &[&str] = &["blogfiles", "postfiles", "pstatic.net"];

/// Profile-thumbnail path marker; excluded even on content hosts.
const PROFILE_THUMB: &str = "blogpfthumb";

/// Alt text this short is treated as placeholder noise.
const MIN_ALT_LEN: usize = 2;

pub(crate) fn analyze_image_seo(document: &Html) -> ImageSeoReport {
    let mut report = ImageSeoReport::default();

    let img = selector("img");
    let mut content_srcs: Vec<(String, Option<String>)> = Vec::new();
    for elem in document.select(&img) {
        let src = elem
            .value()
            .attr("src")
            .filter(|s| !s.is_empty())
            .or_else(|| elem.value().attr("data-lazy-src").filter(|s| !s.is_empty()))
            .or_else(|| elem.value().attr("data-src").filter(|s| !s.is_empty()))
            .unwrap_or("");
        if CONTENT_HOSTS.iter().any(|host| src.contains(host)) && !src.contains(PROFILE_THUMB) {
            content_srcs.push((
                src.to_string(),
                elem.value().attr("alt").map(str::to_string),
            ));
        }
    }

    report.total_images = u32::try_from(content_srcs.len()).unwrap_or(u32::MAX);

    for (_, alt) in &content_srcs {
        let alt = alt.as_deref().unwrap_or("").trim();
        if alt.chars().count() > MIN_ALT_LEN {
            report.with_alt += 1;
        } else {
            report.without_alt += 1;
        }
    }

    report.alt_quality = alt_quality(report.with_alt, report.total_images);

    // A Hangul path or a 5+-letter run in the final segment counts as a
    // descriptive filename.
    let latin_run = Regex::new(r"[a-zA-Z]{5,}").expect("valid regex");
    for (src, _) in &content_srcs {
        let has_hangul = src.chars().any(|c| ('가'..='힣').contains(&c));
        let last_segment = src.rsplit('/').next().unwrap_or("");
        if has_hangul || latin_run.is_match(last_segment) {
            report.has_descriptive_filename = true;
            break;
        }
    }

    if report.without_alt > 0 {
        report.recommendations.push(format!(
            "이미지 {}개에 ALT 태그 추가 권장",
            report.without_alt
        ));
    }
    if report.total_images == 0 {
        report
            .recommendations
            .push("본문에 이미지를 추가하면 SEO에 도움됩니다".to_string());
    } else if report.total_images < 3 {
        report
            .recommendations
            .push("이미지를 3개 이상 추가하면 좋습니다".to_string());
    }
    if report.total_images > 0
        && matches!(report.alt_quality, AltQuality::Poor | AltQuality::Average)
    {
        report
            .recommendations
            .push("이미지 ALT 태그에 키워드를 포함하세요".to_string());
    }

    report
}

fn alt_quality(with_alt: u32, total: u32) -> AltQuality {
    if total == 0 {
        AltQuality::NoImages
    } else if with_alt == total {
        AltQuality::Excellent
    } else if f64::from(with_alt) >= f64::from(total) * 0.7 {
        AltQuality::Good
    } else if f64::from(with_alt) >= f64::from(total) * 0.3 {
        AltQuality::Average
    } else {
        AltQuality::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(html: &str) -> ImageSeoReport {
        analyze_image_seo(&Html::parse_document(html))
    }

    #[test]
    fn no_images_tier_with_add_image_advice() {
        let report = analyze("<p>이미지 없는 글</p>");
        assert_eq!(report.total_images, 0);
        assert_eq!(report.alt_quality, AltQuality::NoImages);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("이미지를 추가하면")));
    }

    #[test]
    fn ui_chrome_images_are_excluded() {
        let html = r#"
            <img src="https://blogimgs.pstatic.net/nblog/icon_star.png" alt="별점 아이콘">
            <img src="https://blogpfthumb-phinf.pstatic.net/me/profile.jpg" alt="프로필 사진">
        "#;
        // Only the profile thumbnail is excluded here; the icon sits on a
        // content host and passes this filter (the stricter path exclusions
        // apply to image counting, not alt analysis).
        let report = analyze(html);
        assert_eq!(report.total_images, 1);
    }

    #[test]
    fn full_alt_coverage_is_excellent() {
        let html = r#"
            <img src="https://postfiles.pstatic.net/a/강남파스타.jpg" alt="강남 파스타 사진">
            <img src="https://postfiles.pstatic.net/b/two.jpg" alt="매장 내부 전경">
        "#;
        let report = analyze(html);
        assert_eq!(report.total_images, 2);
        assert_eq!(report.with_alt, 2);
        assert_eq!(report.alt_quality, AltQuality::Excellent);
        assert!(report.has_descriptive_filename);
    }

    #[test]
    fn short_or_missing_alt_counts_as_uncovered() {
        let html = r#"
            <img src="https://postfiles.pstatic.net/a/1.jpg" alt="ab">
            <img src="https://postfiles.pstatic.net/b/2.jpg">
            <img src="https://postfiles.pstatic.net/c/3.jpg" alt="충분히 긴 설명">
        "#;
        let report = analyze(html);
        assert_eq!(report.with_alt, 1);
        assert_eq!(report.without_alt, 2);
        assert_eq!(report.alt_quality, AltQuality::Average);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("2개에 ALT")));
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("키워드를 포함")));
    }

    #[test]
    fn lazy_src_attributes_are_read() {
        let html = r#"<img data-lazy-src="https://blogfiles.pstatic.net/x/photo.jpg" alt="지연 로딩 사진">"#;
        let report = analyze(html);
        assert_eq!(report.total_images, 1);
        assert_eq!(report.with_alt, 1);
    }

    #[test]
    fn numeric_filenames_are_not_descriptive() {
        let html = r#"<img src="https://postfiles.pstatic.net/x9/1234.jpg" alt="설명이 있는 사진">"#;
        let report = analyze(html);
        assert!(!report.has_descriptive_filename);
    }

    #[test]
    fn few_images_advice_below_three() {
        let html = r#"<img src="https://postfiles.pstatic.net/a/photo_seoul.jpg" alt="서울 사진 설명">"#;
        let report = analyze(html);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("3개 이상")));
    }
}
