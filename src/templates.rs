use crate::consts::{DIGIT_COUNT, STROKE_SIZE, TEMPLATE_FILE_LINES};
use crate::error::{SmResult, StrokeError, StrokeMatchError, StrokeResult};
use crate::geometry::Point;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info};

/// One canonical reference stroke.
pub type ReferenceStroke = [Point; STROKE_SIZE];

/// The ten reference strokes, indexed by digit. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSet {
    strokes: Box<[ReferenceStroke; DIGIT_COUNT]>,
}

impl TemplateSet {
    pub fn new(strokes: [ReferenceStroke; DIGIT_COUNT]) -> Self {
        Self {
            strokes: Box::new(strokes),
        }
    }

    /// Builds a set from loosely-typed strokes, checking the shape.
    pub fn try_from_strokes(strokes: &[Vec<Point>]) -> StrokeResult<Self> {
        if strokes.len() != DIGIT_COUNT {
            return Err(StrokeError::LengthMismatch {
                left: strokes.len(),
                right: DIGIT_COUNT,
            });
        }
        let mut out = Box::new([[Point::default(); STROKE_SIZE]; DIGIT_COUNT]);
        for (slot, stroke) in out.iter_mut().zip(strokes) {
            if stroke.len() != STROKE_SIZE {
                return Err(StrokeError::LengthMismatch {
                    left: stroke.len(),
                    right: STROKE_SIZE,
                });
            }
            slot.copy_from_slice(stroke);
        }
        Ok(Self { strokes: out })
    }

    /// Loads the reference data file: 3000 integer lines, stroke by stroke,
    /// alternating x and y for points 0..150.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SmResult<Self> {
        let path = path.as_ref();
        info!("📂 Loading templates from: {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> SmResult<Self> {
        let mut lines = reader.lines();
        let mut line_no = 0;

        let mut strokes = Box::new([[Point::default(); STROKE_SIZE]; DIGIT_COUNT]);
        for stroke in strokes.iter_mut() {
            for point in stroke.iter_mut() {
                let x = read_value(&mut lines, &mut line_no)?;
                let y = read_value(&mut lines, &mut line_no)?;
                *point = Point::new(x, y);
            }
        }

        for line in lines {
            line_no += 1;
            if !line?.trim().is_empty() {
                return Err(StrokeMatchError::TrailingData { line: line_no });
            }
        }

        debug!(
            "Loaded {} reference strokes ({} values)",
            DIGIT_COUNT, TEMPLATE_FILE_LINES
        );
        Ok(Self { strokes })
    }

    /// Writes the set in the same line format `from_reader` accepts.
    pub fn write_to<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        for stroke in self.strokes.iter() {
            for p in stroke {
                writeln!(out, "{}", p.x)?;
                writeln!(out, "{}", p.y)?;
            }
        }
        out.flush()
    }

    pub fn stroke(&self, digit: usize) -> StrokeResult<&ReferenceStroke> {
        self.strokes
            .get(digit)
            .ok_or(StrokeError::DigitOutOfRange(digit))
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &ReferenceStroke)> {
        self.strokes.iter().enumerate()
    }

    pub fn len(&self) -> usize {
        DIGIT_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

fn read_value<I>(lines: &mut I, line_no: &mut usize) -> SmResult<i32>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    *line_no += 1;
    let line = lines
        .next()
        .ok_or(StrokeMatchError::MissingData { line: *line_no })??;
    let value = line.trim();
    value.parse().map_err(|_| StrokeMatchError::Parse {
        line: *line_no,
        value: value.to_string(),
    })
}
