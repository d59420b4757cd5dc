use crate::config::ScoreAccumulation;
use crate::consts::DIGIT_COUNT;
use crate::error::{StrokeError, StrokeResult};
use crate::geometry::Point;
use crate::matcher::types::MatchDetails;
use crate::templates::TemplateSet;
use tracing::debug;

/// Elastic-matching distance: the sum of distances between index-aligned
/// points. Both strokes must have the same length.
///
/// Normalized strokes score far below `u32::MAX`. Raw strokes with very large
/// coordinates saturate at `u32::MAX` in either mode.
pub fn compute_score(
    stroke: &[Point],
    reference: &[Point],
    mode: ScoreAccumulation,
) -> StrokeResult<u32> {
    if stroke.len() != reference.len() {
        return Err(StrokeError::LengthMismatch {
            left: stroke.len(),
            right: reference.len(),
        });
    }

    let pairs = stroke.iter().zip(reference);
    let score = match mode {
        // The running total drops its fractional part after every step.
        ScoreAccumulation::Truncating => pairs.fold(0u32, |acc, (a, b)| {
            (f64::from(acc) + a.distance(b)) as u32
        }),
        ScoreAccumulation::Exact => pairs.map(|(a, b)| a.distance(b)).sum::<f64>() as u32,
    };
    Ok(score)
}

/// Scores `stroke` against every reference and keeps the strictly lowest
/// score; the lower digit wins a tie.
pub fn score_all(
    stroke: &[Point],
    templates: &TemplateSet,
    mode: ScoreAccumulation,
) -> StrokeResult<MatchDetails> {
    let mut scores = [0u32; DIGIT_COUNT];
    for (digit, reference) in templates.iter() {
        scores[digit] = compute_score(stroke, reference, mode)?;
    }

    let mut best = 0;
    for digit in 1..DIGIT_COUNT {
        if scores[digit] < scores[best] {
            best = digit;
        }
    }

    debug!("Scores ({}): {:?} -> digit {}", mode, scores, best);

    Ok(MatchDetails {
        digit: best,
        score: scores[best],
        scores,
    })
}
