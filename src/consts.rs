/// Number of points in a reference stroke, and in a user stroke once resampled.
/// Also the capacity of the capture buffer.
pub const STROKE_SIZE: usize = 150;

/// Number of reference strokes in a template set, one per digit class 0-9.
pub const DIGIT_COUNT: usize = 10;

/// Length of the longer bounding-box axis in the canonical frame.
pub const CANVAS_EXTENT: f64 = 250.0;

/// Lines in a reference data file: one x and one y line per point.
pub const TEMPLATE_FILE_LINES: usize = DIGIT_COUNT * STROKE_SIZE * 2;

/// Default location of the reference data file, relative to the working directory.
pub const DEFAULT_TEMPLATE_PATH: &str = "data/strokedata.txt";
