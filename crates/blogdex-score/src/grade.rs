//! Grade-tier lookup table.

/// One grade band: minimum composite score, display label, machine slug,
/// and display color.
pub(crate) struct GradeBand {
    pub min_score: f64,
    pub grade: &'static str,
    pub level: &'static str,
    pub color: &'static str,
}

/// Eleven ordered tiers, best first. Bands partition [0, 100]: a score
/// belongs to the first band whose `min_score` it reaches, and the final
/// band has no floor.
pub(crate) const GRADE_BANDS: &[GradeBand] = &[
    GradeBand {
        min_score: 85.0,
        grade: "최적",
        level: "optimal",
        color: "#00C853",
    },
    GradeBand {
        min_score: 80.0,
        grade: "NB",
        level: "nb",
        color: "#00E676",
    },
    GradeBand {
        min_score: 75.0,
        grade: "준최1",
        level: "semi1",
        color: "#69F0AE",
    },
    GradeBand {
        min_score: 70.0,
        grade: "준최2",
        level: "semi2",
        color: "#B9F6CA",
    },
    GradeBand {
        min_score: 65.0,
        grade: "준최3",
        level: "semi3",
        color: "#FFC107",
    },
    GradeBand {
        min_score: 60.0,
        grade: "준최4",
        level: "semi4",
        color: "#FFD54F",
    },
    GradeBand {
        min_score: 55.0,
        grade: "준최5",
        level: "semi5",
        color: "#FFE082",
    },
    GradeBand {
        min_score: 50.0,
        grade: "준최6",
        level: "semi6",
        color: "#FFAB91",
    },
    GradeBand {
        min_score: 45.0,
        grade: "준최7",
        level: "semi7",
        color: "#FF8A65",
    },
    GradeBand {
        min_score: 30.0,
        grade: "일반",
        level: "normal",
        color: "#9E9E9E",
    },
    GradeBand {
        min_score: 0.0,
        grade: "저품",
        level: "low",
        color: "#F44336",
    },
];

/// Resolve the grade band containing `score`.
#[must_use]
pub fn grade_for_score(score: f64) -> (&'static str, &'static str, &'static str) {
    for band in GRADE_BANDS {
        if score >= band.min_score {
            return (band.grade, band.level, band.color);
        }
    }
    // Negative input falls through to the bottom tier.
    let last = &GRADE_BANDS[GRADE_BANDS.len() - 1];
    (last.grade, last.level, last.color)
}
