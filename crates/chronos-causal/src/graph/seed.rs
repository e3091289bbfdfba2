//! The canonical timeline every engine starts from.

use chrono::{DateTime, Utc};
use chronos_core::models::{Anchor, AnchorStatus, CausalLink, EffectPolarity, TimelineBranch};

/// The eight anchors, one per era, oldest first.
pub fn canonical_anchors(created_at: DateTime<Utc>) -> Vec<Anchor> {
    use AnchorStatus::*;

    let rows: [(&str, i32, &str, &str, &str, AnchorStatus); 8] = [
        (
            "n1",
            800,
            "Dark Ages",
            "The Awakening",
            "Ancient temporal rift first detected by monks",
            Stable,
        ),
        ("n2", 1200, "Medieval", "Castle Siege", "War over the first temporal artifact", Stable),
        (
            "n3",
            1400,
            "Renaissance",
            "Leonardo's Workshop",
            "Da Vinci discovers the Chronos blueprints",
            Shifting,
        ),
        ("n4", 1750, "Enlightenment", "The Invention", "First temporal compass assembled", Stable),
        (
            "n5",
            1900,
            "Industrial",
            "The Machine",
            "Industrial-scale temporal experiments begin",
            Stable,
        ),
        ("n6", 2024, "Digital", "The Singularity", "AI becomes aware of temporal rifts", Shifting),
        (
            "n7",
            2200,
            "Neo Age",
            "First Colony",
            "Humanity's first temporal colony established",
            Stable,
        ),
        (
            "n8",
            2847,
            "Cyberpunk",
            "Neo-Kyoto",
            "The Chronos Paradox reaches critical mass",
            Paradox,
        ),
    ];

    rows.into_iter()
        .map(|(id, year, era, label, description, status)| {
            Anchor::new(id, year, era, label, description, created_at).with_status(status)
        })
        .collect()
}

/// The nine seeded links. No back-edges.
pub fn canonical_links() -> Vec<CausalLink> {
    use EffectPolarity::*;

    vec![
        CausalLink::new("n1", "n2", Positive, 0.3, "Discovery leads to conflict"),
        CausalLink::new("n2", "n3", Positive, 0.5, "Artifacts inspire Renaissance minds"),
        CausalLink::new("n3", "n4", Positive, 0.7, "Blueprints enable the invention"),
        CausalLink::new("n3", "n5", Neutral, 0.2, "Alternate industrial path"),
        CausalLink::new("n4", "n5", Positive, 0.6, "Compass powers the machine"),
        CausalLink::new("n5", "n6", Positive, 0.8, "Machine data feeds digital age"),
        CausalLink::new("n6", "n7", Positive, 0.5, "AI enables colony planning"),
        CausalLink::new("n6", "n8", Negative, 0.4, "Digital overreach creates dystopia"),
        CausalLink::new("n7", "n8", Positive, 0.6, "Colony resources flow to Neo-Kyoto"),
    ]
}

/// The primary timeline plus the cyberpunk branch.
pub fn canonical_branches() -> Vec<TimelineBranch> {
    vec![
        TimelineBranch::new("primary", "Alpha Timeline", "n1", 0.7, true),
        TimelineBranch::new("b7", "Branch B-7 (Cyberpunk)", "n6", 0.3, false),
    ]
}
