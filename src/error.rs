use thiserror::Error;

/// Precondition violations raised by the capture buffer and the matching core.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeError {
    #[error("Stroke is full: capacity is {capacity} points")]
    StrokeFull { capacity: usize },

    #[error("Point index {index} out of range for stroke of {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Operation requires at least {required} points, stroke has {actual}")]
    InsufficientPoints { required: usize, actual: usize },

    #[error("Cannot score strokes of different lengths ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("Digit {0} is not a valid template index")]
    DigitOutOfRange(usize),

    #[error("Stroke spans {extent} units, more than a coordinate can hold")]
    CoordinateOverflow { extent: i64 },
}

pub type StrokeResult<T> = Result<T, StrokeError>;

#[derive(Error, Debug)]
pub enum StrokeMatchError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template data line {line}: '{value}' is not an integer")]
    Parse { line: usize, value: String },

    #[error("Template data ended early: expected a value on line {line}")]
    MissingData { line: usize },

    #[error("Template data has unexpected content on line {line}")]
    TrailingData { line: usize },

    #[error("Stroke file {path}: {reason}")]
    StrokeFile { path: String, reason: String },

    #[error(transparent)]
    Stroke(#[from] StrokeError),
}

pub type SmResult<T> = Result<T, StrokeMatchError>;
