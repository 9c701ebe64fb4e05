//! Best-effort interpretation of free-text asset inventory fields.
//!
//! These functions turn spreadsheet vocabulary ("RSA", "weekly", "rigid",
//! "yes") into scoring inputs. The scoring core knows none of this; it only
//! receives the numbers and labels produced here.

use crate::config::SensitivityLevel;

/// Algorithms assumed breakable by a cryptographically-relevant quantum computer
pub const CLASSICAL_ALGORITHMS: [&str; 4] = ["rsa", "ecdsa", "dh", "dsa"];

/// Harvestability floor when a third party handles the data without PQC
pub const THIRD_PARTY_MIN_Q: f64 = 0.7;

/// Harvestability cap once a PQC or hybrid transition algorithm is deployed
pub const TRANSITION_MAX_Q: f64 = 0.3;

/// Sensitivity used when the label is missing or unrecognized
pub const DEFAULT_SENSITIVITY: SensitivityLevel = SensitivityLevel::Moderate;

/// True when the algorithm name is a classical public-key algorithm.
pub fn algorithm_visibility(algorithm: &str) -> bool {
    let normalized = algorithm.trim().to_lowercase();
    CLASSICAL_ALGORITHMS.contains(&normalized.as_str())
}

/// Rotations per year for a named frequency.
pub fn named_frequency(frequency: &str) -> Option<f64> {
    match frequency.trim().to_lowercase().as_str() {
        "daily" => Some(365.0),
        "weekly" => Some(52.0),
        "monthly" => Some(12.0),
        "annual" | "annually" | "yearly" => Some(1.0),
        _ => None,
    }
}

/// Rotations per year from a numeric or named frequency; unknown text is 0.
pub fn parse_frequency(frequency: &str) -> f64 {
    parse_number(frequency).or_else(|| named_frequency(frequency)).unwrap_or(0.0)
}

/// More frequent key rotation leaves less to harvest: `q = exp(-freq / 2)`.
pub fn harvestability_from_frequency(rotations_per_year: f64) -> f64 {
    (-rotations_per_year / 2.0).exp().clamp(0.0, 1.0)
}

/// Migration-time adjustment (years) for an architecture flexibility rating.
pub fn architecture_adjustment(flexibility: &str) -> f64 {
    match flexibility.trim().to_lowercase().as_str() {
        "high" | "flexible" | "modular" => -0.5,
        "low" | "rigid" => 1.0,
        _ => 0.0,
    }
}

pub fn is_affirmative(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "yes" | "true" | "1")
}

pub fn is_negative(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "no" | "false" | "0")
}

/// True when a transition algorithm already provides quantum resistance.
pub fn is_quantum_safe_transition(algorithm: &str) -> bool {
    let normalized = algorithm.to_lowercase();
    normalized.contains("pqc") || normalized.contains("hybrid")
}

/// Uppercase the first letter of each word and lowercase the rest.
pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Canonical sensitivity label, defaulting to Moderate.
pub fn normalize_sensitivity(raw: Option<&str>) -> SensitivityLevel {
    raw.and_then(|value| SensitivityLevel::from_label(&title_case(value)))
        .unwrap_or(DEFAULT_SENSITIVITY)
}

/// Parse a finite number, ignoring surrounding whitespace.
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// Visibility and harvestability after third-party and transition rules.
///
/// A third party using the data without quantum safety forces exposure; a PQC
/// or hybrid transition algorithm then removes it and caps harvestability.
pub fn adjust_exposure(
    v: bool,
    q: f64,
    third_party_unsafe: bool,
    quantum_safe_transition: bool,
) -> (bool, f64) {
    let (mut v, mut q) = (v, q);
    if third_party_unsafe {
        q = q.max(THIRD_PARTY_MIN_Q);
        v = true;
    }
    if quantum_safe_transition {
        v = false;
        q = q.min(TRANSITION_MAX_Q);
    }
    (v, q)
}
