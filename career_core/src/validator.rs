//! Submission gate run before any inference.

use crate::error::RecommendError;
use crate::types::{SkillVector, SKILL_COUNT};

/// Share of skills that must be rated Beginner or above
pub const DEFAULT_READINESS_THRESHOLD: f64 = 0.70;

/// Fraction of ratings at Beginner or above. An empty vector scores 0.0.
pub fn readiness_ratio(vector: &SkillVector) -> f64 {
    if vector.is_empty() {
        return 0.0;
    }
    ready_count(vector) as f64 / vector.len() as f64
}

fn ready_count(vector: &SkillVector) -> usize {
    vector.ratings().iter().filter(|r| r.is_ready()).count()
}

/// Rejects degenerate submissions.
///
/// The all-zero check runs before the readiness check. The ratio is compared
/// with a strict `<` and is not rounded.
pub fn validate(vector: &SkillVector, threshold: f64) -> Result<(), RecommendError> {
    if vector.is_empty() {
        return Err(RecommendError::ShapeMismatch {
            expected: SKILL_COUNT,
            actual: 0,
        });
    }

    if vector.ratings().iter().all(|r| r.value() == 0) {
        log::warn!("Rejected submission: all skills rated 'Not Interested'");
        return Err(RecommendError::AllSkillsZero);
    }

    let ratio = readiness_ratio(vector);
    if ratio < threshold {
        log::warn!(
            "Rejected submission: readiness {:.2} below threshold {:.2}",
            ratio,
            threshold
        );
        return Err(RecommendError::InsufficientReadiness {
            ready: ready_count(vector),
            total: vector.len(),
            threshold,
        });
    }

    Ok(())
}
