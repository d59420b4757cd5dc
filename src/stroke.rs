use crate::consts::STROKE_SIZE;
use crate::error::{StrokeError, StrokeResult};
use crate::geometry::{BoundingBox, Point};
use tinyvec::ArrayVec;
use tracing::warn;

/// The stroke currently being captured.
///
/// Storage is inline and fixed at [`STROKE_SIZE`] points; the logical length
/// never exceeds that capacity. `reset` keeps the storage for the next session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeBuffer {
    points: ArrayVec<[Point; STROKE_SIZE]>,
}

impl StrokeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a buffer from a point sequence, failing if it holds more than
    /// [`STROKE_SIZE`] points.
    pub fn try_from_points<I>(points: I) -> StrokeResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        let mut buf = Self::new();
        for p in points {
            buf.append(p.into())?;
        }
        Ok(buf)
    }

    /// Appends a point. A full buffer rejects the point and reports it.
    pub fn append(&mut self, point: Point) -> StrokeResult<()> {
        match self.points.try_push(point) {
            None => Ok(()),
            Some(rejected) => {
                warn!("Stroke full, dropping point {}", rejected);
                Err(StrokeError::StrokeFull {
                    capacity: STROKE_SIZE,
                })
            }
        }
    }

    pub fn reset(&mut self) {
        self.points.clear();
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.points.len() == STROKE_SIZE
    }

    pub fn point_at(&self, index: usize) -> StrokeResult<Point> {
        self.get(index).ok_or(StrokeError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::of(&self.points)
    }

    pub(crate) fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    /// Inserts `point` at `index`, shifting later points one slot right.
    pub(crate) fn insert(&mut self, index: usize, point: Point) -> StrokeResult<()> {
        if index > self.len() {
            return Err(StrokeError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        match self.points.try_insert(index, point) {
            None => Ok(()),
            Some(_) => Err(StrokeError::StrokeFull {
                capacity: STROKE_SIZE,
            }),
        }
    }
}

impl<'a> IntoIterator for &'a StrokeBuffer {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
