//! Offline accuracy checks over a template set: a self-check that every
//! reference recognizes as itself, and a noisy-sample evaluation.

use crate::config::{EvaluateParams, ScoreAccumulation};
use crate::consts::DIGIT_COUNT;
use crate::error::StrokeResult;
use crate::geometry::Point;
use crate::matcher::{MatchDetails, Matcher};
use crate::recognizer::Recognizer;
use crate::templates::TemplateSet;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Recognizes each reference stroke verbatim. A healthy set yields digit `d`
/// with score 0 for reference `d`.
pub fn self_check(matcher: &Matcher) -> StrokeResult<Vec<(usize, MatchDetails)>> {
    let mut results = Vec::with_capacity(DIGIT_COUNT);
    for (digit, reference) in matcher.templates().iter() {
        let mut session = Recognizer::with_matcher(matcher.clone());
        for &p in reference {
            session.add_point(p)?;
        }
        let details = session.match_details()?;
        if details.digit != digit || details.score != 0 {
            warn!(
                "Reference {} recognized as {} (score {})",
                digit, details.digit, details.score
            );
        }
        results.push((digit, details));
    }
    Ok(results)
}

/// Confusion counts: `confusion[expected][recognized]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationReport {
    pub confusion: [[usize; DIGIT_COUNT]; DIGIT_COUNT],
}

impl EvaluationReport {
    pub fn total(&self, digit: usize) -> usize {
        self.confusion[digit].iter().sum()
    }

    pub fn correct(&self, digit: usize) -> usize {
        self.confusion[digit][digit]
    }

    pub fn accuracy(&self, digit: usize) -> f64 {
        match self.total(digit) {
            0 => 0.0,
            n => self.correct(digit) as f64 / n as f64,
        }
    }

    pub fn overall_accuracy(&self) -> f64 {
        let total: usize = (0..DIGIT_COUNT).map(|d| self.total(d)).sum();
        let correct: usize = (0..DIGIT_COUNT).map(|d| self.correct(d)).sum();
        if total == 0 {
            0.0
        } else {
            correct as f64 / total as f64
        }
    }
}

/// Builds a noisy pen-style rendition of `reference`: decimated, jittered,
/// and shifted and resized away from the canonical frame.
pub fn jittered_sample(
    reference: &[Point],
    params: &EvaluateParams,
    rng: &mut fastrand::Rng,
) -> Vec<Point> {
    let keep = match params.decimate_to {
        0 => reference.len(),
        n => n.clamp(2, reference.len()),
    };
    let offset = Point::new(rng.i32(0..400), rng.i32(0..400));
    let zoom = 0.5 + rng.f64() * 1.5;
    let jitter = params.jitter.max(0);

    (0..keep)
        .map(|i| {
            // Spread picks over the whole stroke, always keeping both ends.
            let idx = if keep == 1 { 0 } else { i * (reference.len() - 1) / (keep - 1) };
            let p = reference[idx];
            let jx = rng.i32(-jitter..=jitter);
            let jy = rng.i32(-jitter..=jitter);
            Point::new(
                offset.x + ((f64::from(p.x + jx)) * zoom) as i32,
                offset.y + ((f64::from(p.y + jy)) * zoom) as i32,
            )
        })
        .collect()
}

/// Classifies `params.samples` noisy samples per reference, one recognizer
/// per sample, spread over the rayon pool. Deterministic for a given seed.
pub fn evaluate(
    templates: Arc<TemplateSet>,
    accumulation: ScoreAccumulation,
    params: &EvaluateParams,
) -> StrokeResult<EvaluationReport> {
    info!(
        "Evaluating {} samples per digit (jitter {}, seed {}, {})",
        params.samples, params.jitter, params.seed, accumulation
    );
    let matcher = Matcher::new(templates, accumulation);

    let jobs: Vec<(usize, usize)> = (0..DIGIT_COUNT)
        .flat_map(|d| (0..params.samples).map(move |s| (d, s)))
        .collect();

    let outcomes: Vec<(usize, usize)> = jobs
        .par_iter()
        .map(|&(digit, sample)| -> StrokeResult<(usize, usize)> {
            let stream = (digit * params.samples + sample) as u64;
            let mut rng = fastrand::Rng::with_seed(params.seed ^ stream.wrapping_mul(0x9E37_79B9));
            let reference = matcher.templates().stroke(digit)?;
            let points = jittered_sample(reference, params, &mut rng);

            let mut session = Recognizer::with_matcher(matcher.clone());
            for p in points {
                session.add_point(p)?;
            }
            Ok((digit, session.find_match()?))
        })
        .collect::<StrokeResult<_>>()?;

    let mut report = EvaluationReport::default();
    for (expected, recognized) in outcomes {
        report.confusion[expected][recognized] += 1;
    }
    debug!("Confusion matrix: {:?}", report.confusion);
    Ok(report)
}
