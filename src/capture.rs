//! Reading captured strokes from disk, standing in for a live pen canvas.

use crate::error::{SmResult, StrokeMatchError};
use crate::geometry::Point;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Loads a stroke from a CSV file of `x,y` rows.
///
/// A non-numeric row before the first point is taken as a header. Lines
/// starting with `#` are comments. Any other malformed row is an error that
/// names its line in the file.
pub fn load_stroke_file<P: AsRef<Path>>(path: P) -> SmResult<Vec<Point>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let points = read_stroke(file).map_err(|e| match e {
        StrokeMatchError::StrokeFile { reason, .. } => StrokeMatchError::StrokeFile {
            path: path.display().to_string(),
            reason,
        },
        other => other,
    })?;
    debug!("Read {} points from {}", points.len(), path.display());
    Ok(points)
}

pub fn read_stroke<R: Read>(reader: R) -> SmResult<Vec<Point>> {
    // Comment rows come through as records so each record's position is the
    // line it sits on.
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut points = Vec::new();
    let mut header_seen = false;
    for result in rdr.records() {
        let rec = result?;
        if rec.iter().all(|f| f.is_empty()) || rec[0].starts_with('#') {
            continue;
        }
        let line = rec.position().map_or(0, |p| p.line());
        if rec.len() < 2 {
            return Err(bad_line(line, "expected two columns"));
        }

        match (rec[0].parse::<i32>(), rec[1].parse::<i32>()) {
            (Ok(x), Ok(y)) => points.push(Point::new(x, y)),
            _ if points.is_empty() && !header_seen => header_seen = true,
            _ => return Err(bad_line(line, "coordinates must be integers")),
        }
    }
    Ok(points)
}

fn bad_line(line: u64, what: &str) -> StrokeMatchError {
    StrokeMatchError::StrokeFile {
        path: "<input>".to_string(),
        reason: format!("line {}: {}", line, what),
    }
}
