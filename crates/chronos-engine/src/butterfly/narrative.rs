//! Narrative templates for procedural effects.

use crate::intent::IntentBucket;

/// Appended whenever an effect crosses the paradox threshold.
pub const PARADOX_WARNING: &str = "PARADOX WARNING: Causal loop approaching gridlock threshold";

/// A flavour line keyed on an era reached by the ripple.
struct EraFlavor {
    era: &'static str,
    line: &'static str,
}

const SAVE_FLAVOR: &[EraFlavor] = &[
    EraFlavor {
        era: "Cyberpunk",
        line: "2847 AD: Neo-Kyoto's architecture evolves; brass and organic motifs emerge",
    },
    EraFlavor {
        era: "Neo Age",
        line: "2200 AD: Colony resources redistribute based on new lineage",
    },
];

const DESTROY_FLAVOR: &[EraFlavor] = &[
    EraFlavor {
        era: "Digital",
        line: "2024 AD: The Singularity event accelerates unpredictably",
    },
    EraFlavor {
        era: "Cyberpunk",
        line: "2847 AD: Neo-Kyoto descends further into dystopia",
    },
];

/// Build the narrative lines. Never empty.
pub fn generate(bucket: IntentBucket, era: &str, affected: &[String]) -> Vec<String> {
    let reached = |name: &str| affected.iter().any(|e| e == name);
    let flavor = |table: &[EraFlavor]| -> Vec<String> {
        table
            .iter()
            .filter(|f| reached(f.era))
            .map(|f| f.line.to_string())
            .collect()
    };

    let mut lines = Vec::new();
    match bucket {
        IntentBucket::Save => {
            lines.push(format!("Action in {era}: A life is preserved. The timeline shifts."));
            lines.extend(flavor(SAVE_FLAVOR));
        }
        IntentBucket::Destroy => {
            lines.push(format!("Action in {era}: Destruction ripples forward. Stability drops."));
            lines.extend(flavor(DESTROY_FLAVOR));
        }
        IntentBucket::Change | IntentBucket::Other => {
            lines.push(format!("Action in {era}: The timeline adjusts to accommodate changes"));
            lines.push(format!(
                "Temporal flux detected across {} eras, recalibrating",
                affected.len()
            ));
        }
    }
    lines
}
