//! Mock SVM trainer
//!
//! No model is fit. The report jitters around fixed baselines taken from a
//! representative training run, so repeated calls look like retraining while
//! a fixed seed reproduces the exact report.

use rand::Rng;

use crate::logic::features::{FEATURE_BASE_IMPORTANCE, FEATURE_COUNT};
use crate::models::{ClassMetrics, ClassReport, ClassificationReport, FeatureImportance};

/// Baseline overall accuracy
const BASE_ACCURACY: f64 = 0.87;

/// Baseline (precision, recall) for the non-outbreak class
const BASE_CLASS_0: (f64, f64) = (0.89, 0.92);

/// Baseline (precision, recall) for the outbreak class
const BASE_CLASS_1: (f64, f64) = (0.83, 0.78);

/// Half-width of the uniform jitter applied to each metric
const METRIC_JITTER: f64 = 0.015;

/// Half-width of the uniform jitter applied to each importance
const IMPORTANCE_JITTER: f64 = 0.02;

/// Produce a full classification report over the feature vocabulary.
pub fn train<R: Rng>(rng: &mut R) -> ClassificationReport {
    let accuracy = jitter(rng, BASE_ACCURACY, METRIC_JITTER);

    let report = ClassReport {
        class_0: class_metrics(rng, BASE_CLASS_0),
        class_1: class_metrics(rng, BASE_CLASS_1),
    };

    let mut feature_importance = Vec::with_capacity(FEATURE_COUNT);
    for (name, base) in FEATURE_BASE_IMPORTANCE {
        feature_importance.push(FeatureImportance {
            feature: name.to_string(),
            importance: jitter(rng, *base, IMPORTANCE_JITTER),
        });
    }

    ClassificationReport {
        accuracy,
        report,
        feature_importance,
    }
}

fn class_metrics<R: Rng>(rng: &mut R, (precision, recall): (f64, f64)) -> ClassMetrics {
    let precision = jitter(rng, precision, METRIC_JITTER);
    let recall = jitter(rng, recall, METRIC_JITTER);
    ClassMetrics {
        precision,
        recall,
        f1_score: f1(precision, recall),
    }
}

fn jitter<R: Rng>(rng: &mut R, base: f64, spread: f64) -> f64 {
    (base + rng.gen_range(-spread..spread)).clamp(0.0, 1.0)
}

/// Harmonic mean of precision and recall
fn f1(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        return 0.0;
    }
    2.0 * precision * recall / (precision + recall)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_report_covers_full_vocabulary() {
        let report = train(&mut rng());
        assert_eq!(report.feature_importance.len(), FEATURE_COUNT);
        // emitted in vocabulary order, unranked
        assert_eq!(report.feature_importance[0].feature, "temperature");
        assert_eq!(report.feature_importance[5].feature, "cases_lag_1");
    }

    #[test]
    fn test_metrics_stay_in_unit_interval() {
        let report = train(&mut rng());
        assert!((0.0..=1.0).contains(&report.accuracy));
        for m in [&report.report.class_0, &report.report.class_1] {
            assert!((0.0..=1.0).contains(&m.precision));
            assert!((0.0..=1.0).contains(&m.recall));
            assert!((0.0..=1.0).contains(&m.f1_score));
        }
        for f in &report.feature_importance {
            assert!((0.0..=1.0).contains(&f.importance));
        }
    }

    #[test]
    fn test_metrics_track_their_baselines() {
        let report = train(&mut rng());
        assert!((report.accuracy - BASE_ACCURACY).abs() <= METRIC_JITTER);
        assert!((report.report.class_0.precision - BASE_CLASS_0.0).abs() <= METRIC_JITTER);
        assert!((report.report.class_1.recall - BASE_CLASS_1.1).abs() <= METRIC_JITTER);
    }

    #[test]
    fn test_f1_is_harmonic_mean() {
        let report = train(&mut rng());
        let m = &report.report.class_0;
        let expected = 2.0 * m.precision * m.recall / (m.precision + m.recall);
        assert!((m.f1_score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_f1_degenerate_case() {
        assert_eq!(f1(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let a = train(&mut StdRng::seed_from_u64(7));
        let b = train(&mut StdRng::seed_from_u64(7));
        assert_eq!(a.accuracy, b.accuracy);
        assert_eq!(a.feature_importance, b.feature_importance);
    }
}
