//! Shape and range checks for oracle suggestions.
//!
//! A suggestion is accepted only when:
//! - `affected_eras` is a non-empty list of non-empty, distinct names whose
//!   first entry is the triggering era;
//! - `paradox_risk` is a finite number in [0, 1];
//! - `narrative_changes` holds at least one string;
//! - every `world_state_delta` key is an affected era, every
//!   `stability_change` is an integer within the configured bound, and every
//!   `tech_level_shift` is -1, 0 or 1.

use std::collections::BTreeMap;

use chronos_core::errors::OracleError;
use chronos_core::models::{ButterflyEffect, EraDelta};
use serde_json::{Map, Value};

pub fn validate_suggestion(
    raw: &Value,
    command: &str,
    era: &str,
    max_stability_change: i32,
) -> Result<ButterflyEffect, OracleError> {
    let obj = raw.as_object().ok_or_else(|| OracleError::Malformed {
        reason: "suggestion is not a JSON object".to_string(),
    })?;

    let affected_eras = affected_eras(obj, era)?;
    let paradox_risk = paradox_risk(obj)?;
    let narrative_changes = narrative_changes(obj)?;
    let world_state_delta = world_state_delta(obj, &affected_eras, max_stability_change)?;

    Ok(ButterflyEffect {
        source_action: command.to_string(),
        affected_eras,
        paradox_risk,
        narrative_changes,
        world_state_delta,
    })
}

fn invalid(field: &str, reason: impl Into<String>) -> OracleError {
    OracleError::Invalid {
        field: field.to_string(),
        reason: reason.into(),
    }
}

fn required<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a Value, OracleError> {
    obj.get(field).ok_or_else(|| OracleError::Malformed {
        reason: format!("missing field `{field}`"),
    })
}

fn string_list(value: &Value, field: &str) -> Result<Vec<String>, OracleError> {
    let items = value
        .as_array()
        .ok_or_else(|| invalid(field, "expected a list of strings"))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| invalid(field, "expected a list of strings"))
        })
        .collect()
}

fn affected_eras(obj: &Map<String, Value>, era: &str) -> Result<Vec<String>, OracleError> {
    const FIELD: &str = "affected_eras";
    let eras = string_list(required(obj, FIELD)?, FIELD)?;
    match eras.first() {
        None => return Err(invalid(FIELD, "must not be empty")),
        Some(first) if first != era => {
            return Err(invalid(FIELD, format!("first entry must be `{era}`, got `{first}`")))
        }
        Some(_) => {}
    }
    if eras.iter().any(|e| e.trim().is_empty()) {
        return Err(invalid(FIELD, "era names must not be empty"));
    }
    for (i, name) in eras.iter().enumerate() {
        if eras[..i].contains(name) {
            return Err(invalid(FIELD, format!("duplicate era `{name}`")));
        }
    }
    Ok(eras)
}

fn paradox_risk(obj: &Map<String, Value>) -> Result<f64, OracleError> {
    const FIELD: &str = "paradox_risk";
    let risk = required(obj, FIELD)?
        .as_f64()
        .ok_or_else(|| invalid(FIELD, "expected a number"))?;
    if !risk.is_finite() || !(0.0..=1.0).contains(&risk) {
        return Err(invalid(FIELD, format!("{risk} is outside [0, 1]")));
    }
    Ok(risk)
}

fn narrative_changes(obj: &Map<String, Value>) -> Result<Vec<String>, OracleError> {
    const FIELD: &str = "narrative_changes";
    let lines = string_list(required(obj, FIELD)?, FIELD)?;
    if lines.is_empty() {
        return Err(invalid(FIELD, "at least one narrative line is required"));
    }
    Ok(lines)
}

fn world_state_delta(
    obj: &Map<String, Value>,
    affected: &[String],
    max_stability_change: i32,
) -> Result<BTreeMap<String, EraDelta>, OracleError> {
    const FIELD: &str = "world_state_delta";
    let Some(value) = obj.get(FIELD) else {
        return Ok(BTreeMap::new());
    };
    let entries = value
        .as_object()
        .ok_or_else(|| invalid(FIELD, "expected an object keyed by era"))?;

    let mut deltas = BTreeMap::new();
    for (era, delta) in entries {
        if !affected.contains(era) {
            return Err(invalid(FIELD, format!("`{era}` is not an affected era")));
        }
        let delta = delta
            .as_object()
            .ok_or_else(|| invalid(FIELD, format!("delta for `{era}` is not an object")))?;

        let stability_change = match delta.get("stability_change") {
            None => 0,
            Some(v) => {
                let change = v.as_i64().ok_or_else(|| {
                    invalid(FIELD, format!("`{era}` stability_change is not an integer"))
                })?;
                let bound = max_stability_change.unsigned_abs();
                if change.unsigned_abs() > u64::from(bound) {
                    return Err(invalid(
                        FIELD,
                        format!("`{era}` stability_change {change} exceeds ±{bound}"),
                    ));
                }
                change as i32
            }
        };

        let tech_level_shift = match delta.get("tech_level_shift") {
            None => None,
            Some(v) => match v.as_i64() {
                Some(shift @ -1..=1) => Some(shift as i32),
                _ => {
                    return Err(invalid(
                        FIELD,
                        format!("`{era}` tech_level_shift must be -1, 0 or 1"),
                    ))
                }
            },
        };

        deltas.insert(
            era.clone(),
            EraDelta {
                stability_change,
                tech_level_shift,
            },
        );
    }
    Ok(deltas)
}
