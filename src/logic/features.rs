//! Feature vocabulary
//!
//! Single source of truth for the classifier's input features: the five raw
//! factors plus their lagged variants, in the order the mock report emits
//! them. Each entry carries the baseline importance the mock trainer jitters
//! around.

use crate::models::FeatureImportance;

/// Feature names and baseline importances, in report order
pub const FEATURE_BASE_IMPORTANCE: &[(&str, f64)] = &[
    // === Raw factors (0-4) ===
    ("temperature", 0.23),
    ("humidity", 0.18),
    ("rainfall", 0.15),
    ("population_density", 0.12),
    ("mobility_index", 0.20),
    // === Case history (5-7) ===
    ("cases_lag_1", 0.35),
    ("cases_lag_2", 0.28),
    ("cases_lag_3", 0.21),
    // === One-day factor lags (8-11) ===
    ("temp_lag_1", 0.14),
    ("humidity_lag_1", 0.12),
    ("rainfall_lag_1", 0.10),
    ("mobility_lag_1", 0.16),
    // === Two-day factor lags (12-14) ===
    ("temp_lag_2", 0.09),
    ("humidity_lag_2", 0.08),
    ("rainfall_lag_2", 0.07),
];

/// Total number of features
pub const FEATURE_COUNT: usize = 15;

// ============================================================================
// DISPLAY RANKING
// ============================================================================

/// Number of features shown in the importance chart
const TOP_FEATURES: usize = 10;

/// Names longer than this are shortened for axis labels
const MAX_LABEL_LEN: usize = 15;

/// Length of the kept prefix when shortening
const TRUNCATED_LEN: usize = 12;

/// Chart-side ranking of an importance list: top 10 by descending
/// importance, long names shortened to a 12-character prefix plus "...".
///
/// This is display policy for consumers; trainers always emit the full
/// unranked list.
pub fn display_ranking(features: &[FeatureImportance]) -> Vec<FeatureImportance> {
    let mut ranked = features.to_vec();
    ranked.sort_by(|a, b| {
        b.importance
            .partial_cmp(&a.importance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(TOP_FEATURES);

    for entry in &mut ranked {
        if entry.feature.chars().count() > MAX_LABEL_LEN {
            let prefix: String = entry.feature.chars().take(TRUNCATED_LEN).collect();
            entry.feature = format!("{}...", prefix);
        }
    }

    ranked
}
