use crate::config::{MatchConfig, ScoreAccumulation};
use crate::error::{SmResult, StrokeResult};
use crate::geometry::Point;
use crate::matcher::{MatchDetails, Matcher};
use crate::normalizer;
use crate::stroke::StrokeBuffer;
use crate::templates::TemplateSet;
use std::sync::Arc;
use strum_macros::Display;
use tracing::debug;

/// Where a capture session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SessionState {
    Empty,
    Capturing,
    Normalized,
    Scored,
}

/// One capture session: a stroke buffer plus a matcher over shared templates.
///
/// The buffer is mutated in place, so an instance serves one session at a
/// time. Run concurrent sessions on separate instances sharing the same
/// `Arc<TemplateSet>`.
#[derive(Debug, Clone)]
pub struct Recognizer {
    stroke: StrokeBuffer,
    matcher: Matcher,
    state: SessionState,
}

impl Recognizer {
    pub fn new(templates: Arc<TemplateSet>, accumulation: ScoreAccumulation) -> Self {
        Self::with_matcher(Matcher::new(templates, accumulation))
    }

    pub fn with_matcher(matcher: Matcher) -> Self {
        Self {
            stroke: StrokeBuffer::new(),
            matcher,
            state: SessionState::Empty,
        }
    }

    pub fn from_config(config: &MatchConfig) -> SmResult<Self> {
        Ok(Self::with_matcher(Matcher::from_config(config)?))
    }

    /// Appends a captured point. Fails with `StrokeFull` once 150 points are held.
    pub fn add_point(&mut self, point: Point) -> StrokeResult<()> {
        self.stroke.append(point)?;
        self.state = SessionState::Capturing;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.stroke.reset();
        self.state = SessionState::Empty;
    }

    pub fn num_points(&self) -> usize {
        self.stroke.len()
    }

    pub fn point_at(&self, index: usize) -> StrokeResult<Point> {
        self.stroke.point_at(index)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn stroke(&self) -> &StrokeBuffer {
        &self.stroke
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Brings the captured stroke into the canonical frame. A stroke that is
    /// already normalized is left as is.
    pub fn normalize(&mut self) -> StrokeResult<()> {
        if matches!(self.state, SessionState::Normalized | SessionState::Scored) {
            return Ok(());
        }
        normalizer::normalize(&mut self.stroke)?;
        debug!("Normalized stroke, bounds {:?}", self.stroke.bounds());
        self.state = SessionState::Normalized;
        Ok(())
    }

    /// Recognizes the captured stroke, returning the digit 0-9.
    pub fn find_match(&mut self) -> StrokeResult<usize> {
        self.match_details().map(|d| d.digit)
    }

    /// Like [`find_match`](Self::find_match), with the score against every reference.
    pub fn match_details(&mut self) -> StrokeResult<MatchDetails> {
        self.normalize()?;
        let details = self.matcher.best_match(self.stroke.points())?;
        self.state = SessionState::Scored;
        Ok(details)
    }

    /// Score of the current stroke against one reference. The stroke must
    /// already be normalized to full length.
    pub fn compute_score(&self, digit: usize) -> StrokeResult<u32> {
        self.matcher.compute_score(self.stroke.points(), digit)
    }
}
