mod common;

use common::{bundled_templates, fan_of_lines};
use std::sync::Arc;
use strokematch::config::{EvaluateParams, ScoreAccumulation};
use strokematch::consts::DIGIT_COUNT;
use strokematch::evaluation::{evaluate, self_check};
use strokematch::matcher::Matcher;
use strokematch::TemplateSet;
use strum::IntoEnumIterator;

#[test]
fn test_bundled_templates_pass_self_check() {
    for mode in ScoreAccumulation::iter() {
        let matcher = Matcher::new(bundled_templates(), mode);
        let results = self_check(&matcher).unwrap();
        assert_eq!(results.len(), DIGIT_COUNT);
        for (digit, details) in results {
            assert_eq!(details.digit, digit);
            assert_eq!(details.score, 0);
        }
    }
}

#[test]
fn test_self_check_flags_duplicate_reference() {
    let mut strokes = fan_of_lines();
    strokes[8] = strokes[3];
    let matcher = Matcher::new(
        Arc::new(TemplateSet::new(strokes)),
        ScoreAccumulation::Truncating,
    );
    let results = self_check(&matcher).unwrap();
    // Reference 8 is indistinguishable from 3 and loses the tie.
    assert_eq!(results[8].1.digit, 3);
    assert_eq!(results[3].1.digit, 3);
}

#[test]
fn test_evaluation_counts_every_sample() {
    let params = EvaluateParams {
        samples: 6,
        ..Default::default()
    };
    let report = evaluate(bundled_templates(), ScoreAccumulation::Truncating, &params).unwrap();
    for digit in 0..DIGIT_COUNT {
        assert_eq!(report.total(digit), 6);
    }
}

#[test]
fn test_evaluation_is_reproducible() {
    let params = EvaluateParams {
        samples: 8,
        jitter: 20,
        seed: 1234,
        ..Default::default()
    };
    let a = evaluate(bundled_templates(), ScoreAccumulation::Exact, &params).unwrap();
    let b = evaluate(bundled_templates(), ScoreAccumulation::Exact, &params).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_clean_fan_samples_are_recognized() {
    // The fan references differ by a clear slope, so noise-free samples land home.
    let params = EvaluateParams {
        samples: 4,
        jitter: 0,
        decimate_to: 0,
        seed: 9,
    };
    let report = evaluate(
        Arc::new(TemplateSet::new(fan_of_lines())),
        ScoreAccumulation::Truncating,
        &params,
    )
    .unwrap();
    assert_eq!(report.overall_accuracy(), 1.0);
}
