//! In-place transformations that bring a captured stroke into the canonical
//! frame: anchored at the origin, longer axis stretched to [`CANVAS_EXTENT`],
//! exactly [`STROKE_SIZE`] points.

use crate::consts::{CANVAS_EXTENT, STROKE_SIZE};
use crate::error::{StrokeError, StrokeResult};
use crate::stroke::StrokeBuffer;
use tracing::debug;

fn require(stroke: &StrokeBuffer, required: usize) -> StrokeResult<()> {
    if stroke.len() < required {
        return Err(StrokeError::InsufficientPoints {
            required,
            actual: stroke.len(),
        });
    }
    Ok(())
}

/// Slides the stroke so its minimum x and minimum y are both 0.
///
/// Fails with `CoordinateOverflow`, leaving the stroke untouched, when either
/// extent does not fit in an `i32`.
pub fn translate(stroke: &mut StrokeBuffer) -> StrokeResult<()> {
    let bounds = stroke.bounds().ok_or(StrokeError::InsufficientPoints {
        required: 1,
        actual: 0,
    })?;

    let extent = bounds.width().max(bounds.height());
    if extent > i64::from(i32::MAX) {
        return Err(StrokeError::CoordinateOverflow { extent });
    }

    for p in stroke.points_mut() {
        p.x -= bounds.min_x;
        p.y -= bounds.min_y;
    }
    Ok(())
}

/// Uniformly scales a translated stroke so its longer axis spans
/// [`CANVAS_EXTENT`] units. Coordinates are truncated, not rounded.
/// A stroke with zero extent is left untouched.
pub fn scale(stroke: &mut StrokeBuffer) -> StrokeResult<()> {
    let bounds = stroke.bounds().ok_or(StrokeError::InsufficientPoints {
        required: 1,
        actual: 0,
    })?;

    let longer = bounds.max_x.max(bounds.max_y);
    if longer == 0 {
        return Ok(());
    }

    let factor = CANVAS_EXTENT / f64::from(longer);
    for p in stroke.points_mut() {
        p.x = (f64::from(p.x) * factor) as i32;
        p.y = (f64::from(p.y) * factor) as i32;
    }
    Ok(())
}

/// Index of the first point of the longest segment. Only a strictly longer
/// segment displaces an earlier one.
fn longest_segment(stroke: &StrokeBuffer) -> usize {
    let mut best = 0;
    let mut best_dist = f64::NEG_INFINITY;
    for (i, pair) in stroke.points().windows(2).enumerate() {
        let d = pair[0].distance(&pair[1]);
        if d > best_dist {
            best_dist = d;
            best = i;
        }
    }
    best
}

/// Inserts the midpoint of the longest segment between its endpoints.
pub fn insert_one_point(stroke: &mut StrokeBuffer) -> StrokeResult<()> {
    require(stroke, 2)?;
    let i = longest_segment(stroke);
    let mid = stroke.points()[i].midpoint(&stroke.points()[i + 1]);
    stroke.insert(i + 1, mid)
}

/// Inserts midpoints until the stroke holds exactly [`STROKE_SIZE`] points.
pub fn resample(stroke: &mut StrokeBuffer) -> StrokeResult<()> {
    require(stroke, 2)?;
    let before = stroke.len();
    while stroke.len() < STROKE_SIZE {
        insert_one_point(stroke)?;
    }
    debug!("Resampled stroke from {} to {} points", before, stroke.len());
    Ok(())
}

/// Runs translate, scale and resample, in that order.
pub fn normalize(stroke: &mut StrokeBuffer) -> StrokeResult<()> {
    require(stroke, 2)?;
    translate(stroke)?;
    scale(stroke)?;
    resample(stroke)
}
