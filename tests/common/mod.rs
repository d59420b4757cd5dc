#![allow(dead_code)]

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use strokematch::consts::{DIGIT_COUNT, STROKE_SIZE};
use strokematch::templates::ReferenceStroke;
use strokematch::{Point, TemplateSet};
use tempfile::NamedTempFile;

/// The reference data shipped with the repository.
pub fn bundled_templates_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/strokedata.txt")
}

pub fn bundled_templates() -> Arc<TemplateSet> {
    Arc::new(TemplateSet::load_from_file(bundled_templates_path()).unwrap())
}

/// A straight canonical stroke from (0, 0) to (250, rise), evenly spaced.
/// Already translated and scaled for any `rise` in 0..=250.
pub fn sloped_stroke(rise: i32) -> ReferenceStroke {
    let last = (STROKE_SIZE - 1) as i32;
    let mut stroke = [Point::default(); STROKE_SIZE];
    for (i, p) in stroke.iter_mut().enumerate() {
        let i = i as i32;
        *p = Point::new(i * 250 / last, i * rise / last);
    }
    stroke
}

/// Ten distinguishable canonical strokes: reference `d` rises by `25 * d`.
pub fn fan_of_lines() -> [ReferenceStroke; DIGIT_COUNT] {
    let mut strokes = [[Point::default(); STROKE_SIZE]; DIGIT_COUNT];
    for (d, s) in strokes.iter_mut().enumerate() {
        *s = sloped_stroke(25 * d as i32);
    }
    strokes
}

pub fn write_templates(set: &TemplateSet) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    set.write_to(File::create(file.path()).unwrap()).unwrap();
    file
}
