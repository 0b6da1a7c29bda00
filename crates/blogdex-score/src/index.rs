//! Blog-level influence index.
//!
//! Exposure dominates by design: visits are the most direct observable
//! proxy for search exposure, so the composite weighs it 70% and a weak
//! exposure score caps the total outright.

use blogdex_core::types::{
    DataReliability, IndexBreakdown, IndexDetail, IndexResult, WeeklyStats,
};

use crate::grade::grade_for_score;

/// Aggregate blog fields the index is computed from.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexInputs {
    pub daily_visitors: u32,
    pub yesterday_visitors: u32,
    pub total_visitors: u32,
    pub neighbors: u32,
    pub total_posts: u32,
    pub recent_30days_posts: u32,
    pub blog_age_days: u32,
}

/// A daily-visitor figure below this is treated as "not really measured"
/// and eligible for fallback estimation.
const UNSET_THRESHOLD: u32 = 10;

/// Compute the influence index from aggregate fields.
///
/// `weekly` is the caller-supplied multi-day visitor average (zeroed when
/// absent); `current_hour` is the local hour in [0, 24), injected so the
/// yesterday-based correction is deterministic in tests.
#[must_use]
pub fn calculate_index(
    inputs: &IndexInputs,
    weekly: WeeklyStats,
    current_hour: u32,
) -> IndexResult {
    let (daily_visitors, visitor_source) = resolve_daily_visitors(inputs, weekly, current_hour);

    let exposure_score = exposure_score(daily_visitors).clamp(0.0, 100.0);
    let activity_score = activity_score(inputs.recent_30days_posts).clamp(0.0, 100.0);
    let trust_score = trust_score(inputs).clamp(0.0, 100.0);

    let mut total_score = exposure_score * 0.7 + activity_score * 0.15 + trust_score * 0.15;

    // Weak exposure caps the composite regardless of activity/trust. The
    // two ceilings are mutually exclusive: only the first applicable one
    // fires.
    if exposure_score < 20.0 {
        total_score = total_score.min(35.0);
    } else if exposure_score < 40.0 {
        total_score = total_score.min(50.0);
    }
    let total_score = round2(total_score.clamp(0.0, 100.0));

    let (grade, level, color) = grade_for_score(total_score);

    let (data_reliability, reliability_msg) = classify_reliability(weekly.count);

    IndexResult {
        grade: grade.to_string(),
        level: level.to_string(),
        score: total_score,
        color: color.to_string(),
        breakdown: IndexBreakdown {
            exposure: round2(exposure_score),
            activity: round2(activity_score),
            trust: round2(trust_score),
        },
        detail: IndexDetail {
            daily_visitors,
            total_visitors: inputs.total_visitors,
            recent_30days_posts: inputs.recent_30days_posts,
            total_posts: inputs.total_posts,
            neighbors: inputs.neighbors,
        },
        visitor_source,
        data_reliability,
        reliability_msg,
        weekly_count: weekly.count,
    }
}

/// Resolve the effective daily-visitor figure, in strict priority order:
/// weekly average (3+ days), yesterday's count scaled by time of day,
/// total-visitor estimation, then a neighbor-count floor. Each fallback
/// only fires while the figure still looks unset (< 10).
fn resolve_daily_visitors(
    inputs: &IndexInputs,
    weekly: WeeklyStats,
    current_hour: u32,
) -> (u32, String) {
    let mut daily = inputs.daily_visitors;
    let mut source = "today".to_string();

    if weekly.avg > 0 && weekly.count >= 3 {
        daily = weekly.avg;
        source = format!("weekly_avg_{}days", weekly.count);
    } else {
        if daily < UNSET_THRESHOLD && inputs.yesterday_visitors > 0 {
            let yesterday = f64::from(inputs.yesterday_visitors);
            if current_hour < 6 {
                // Today's counter has barely accumulated; take yesterday whole.
                daily = inputs.yesterday_visitors;
                source = "yesterday_full".to_string();
            } else if current_hour < 12 {
                daily = daily.max(truncate(yesterday * 0.5));
                source = "yesterday_50pct".to_string();
            } else {
                daily = daily.max(truncate(yesterday * 0.3));
                source = "yesterday_30pct".to_string();
            }
        }

        if daily < UNSET_THRESHOLD && inputs.total_visitors > 0 {
            if inputs.blog_age_days > 0 {
                let estimated =
                    f64::from(inputs.total_visitors) / f64::from(inputs.blog_age_days.max(1));
                // 0.7 damping against early-life spikes.
                daily = daily.max(truncate(estimated * 0.7));
                source = "total_estimated".to_string();
            } else {
                let floor = total_visitor_floor(inputs.total_visitors);
                daily = daily.max(floor);
                source = "total_tier".to_string();
            }
        }
    }

    // Neighbor floor applies last and never changes the source tag.
    if daily < UNSET_THRESHOLD {
        let floor = if inputs.neighbors >= 500 {
            50
        } else if inputs.neighbors >= 100 {
            20
        } else if inputs.neighbors >= 30 {
            10
        } else {
            0
        };
        daily = daily.max(floor);
    }

    (daily, source)
}

fn total_visitor_floor(total_visitors: u32) -> u32 {
    if total_visitors >= 100_000 {
        150
    } else if total_visitors >= 50_000 {
        100
    } else if total_visitors >= 20_000 {
        60
    } else if total_visitors >= 10_000 {
        40
    } else if total_visitors >= 5_000 {
        25
    } else if total_visitors >= 2_000 {
        15
    } else if total_visitors >= 1_000 {
        10
    } else if total_visitors >= 500 {
        8
    } else {
        0
    }
}

/// Piecewise-linear exposure curve: steep at the low end where small
/// visitor gains matter most, flattening toward 100 above 1000/day.
fn exposure_score(daily_visitors: u32) -> f64 {
    let d = f64::from(daily_visitors);
    if daily_visitors >= 1000 {
        95.0 + ((d - 1000.0) / 1000.0).min(5.0)
    } else if daily_visitors >= 500 {
        85.0 + (d - 500.0) / 50.0
    } else if daily_visitors >= 200 {
        70.0 + (d - 200.0) / 20.0
    } else if daily_visitors >= 100 {
        55.0 + (d - 100.0) / 6.67
    } else if daily_visitors >= 50 {
        40.0 + (d - 50.0) / 3.33
    } else if daily_visitors >= 20 {
        25.0 + (d - 20.0) / 2.0
    } else if daily_visitors >= 5 {
        10.0 + (d - 5.0)
    } else {
        d * 2.0
    }
}

/// Posting-frequency curve with a deliberate penalty band: 120+ posts in
/// 30 days reads as probable automation and scores below the 60–90 band.
fn activity_score(recent_posts: u32) -> f64 {
    let n = f64::from(recent_posts);
    if recent_posts >= 120 {
        40.0
    } else if recent_posts >= 60 {
        70.0 + (90.0 - n)
    } else if recent_posts >= 30 {
        60.0 + (n - 30.0) * 0.33
    } else if recent_posts >= 10 {
        40.0 + (n - 10.0)
    } else {
        n * 4.0
    }
}

/// Sum of three individually-capped logarithmic terms; caps 30/40/30 make
/// the maximum exactly 100.
fn trust_score(inputs: &IndexInputs) -> f64 {
    let mut score = 0.0;
    if inputs.neighbors > 0 {
        score += (10.0 * f64::from(inputs.neighbors + 1).log10()).min(30.0);
    }
    if inputs.total_visitors > 0 {
        score += (8.0 * f64::from(inputs.total_visitors + 1).log10()).min(40.0);
    }
    if inputs.total_posts > 0 {
        score += (10.0 * f64::from(inputs.total_posts + 1).log10()).min(30.0);
    }
    score
}

fn classify_reliability(weekly_count: u32) -> (DataReliability, String) {
    if weekly_count >= 7 {
        (
            DataReliability::High,
            format!("{weekly_count}일 평균 데이터 (신뢰도 높음)"),
        )
    } else if weekly_count >= 3 {
        (
            DataReliability::Medium,
            format!("{weekly_count}일 평균 데이터 (신뢰도 보통)"),
        )
    } else {
        (
            DataReliability::Low,
            "분석 데이터 부족 (3일 이상 분석 필요)".to_string(),
        )
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate(value: f64) -> u32 {
    value.max(0.0) as u32
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "index_test.rs"]
mod tests;
