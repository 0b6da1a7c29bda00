//! Pure scoring functions for blogdex.
//!
//! Turns extracted blog aggregates into the composite influence index,
//! scores individual posts against an authoring rubric, and aggregates an
//! SEO breakdown across a blog's enriched posts. Everything here is a pure
//! function of its arguments — time-of-day enters only as an explicit
//! parameter so results are reproducible.

mod grade;
mod index;
mod post_score;
mod seo;

pub use grade::grade_for_score;
pub use index::{calculate_index, IndexInputs};
pub use post_score::calculate_post_score;
pub use seo::{calculate_seo_score, SeoBreakdown, SeoScore};
