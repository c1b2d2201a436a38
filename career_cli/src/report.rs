/// Plain-text output for the non-interactive commands
use career_core::{AssetKind, Recommendation, SkillRating, SKILL_COLUMNS};
use std::fmt::Write;

pub fn recommendation_text(recommendation: &Recommendation) -> String {
    let label = &recommendation.label;
    let mut out = String::new();
    let _ = writeln!(out, "{}", recommendation.success_message());
    let _ = writeln!(
        out,
        "Readiness: {:.0}%",
        recommendation.readiness * 100.0
    );
    let _ = writeln!(
        out,
        "  {}",
        recommendation.assets.image.message(AssetKind::Image, label)
    );
    let _ = writeln!(out, "{}", recommendation.roadmap_intro());
    let _ = writeln!(
        out,
        "  {}",
        recommendation
            .assets
            .roadmap
            .message(AssetKind::Roadmap, label)
    );
    out
}

/// Ordered skill list followed by the rating scale
pub fn skills_text() -> String {
    let mut out = String::from("Skills (in input order):\n");
    for (i, skill) in SKILL_COLUMNS.iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {}", i + 1, skill);
    }
    out.push_str("\nRating scale:\n");
    for rating in SkillRating::ALL {
        let _ = writeln!(out, "  {} = {}", rating.value(), rating.label());
    }
    out
}
