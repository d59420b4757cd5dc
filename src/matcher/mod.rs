pub mod engine;
pub mod types;

pub use self::types::MatchDetails;
use crate::config::{MatchConfig, ScoreAccumulation};
use crate::error::{SmResult, StrokeResult};
use crate::geometry::Point;
use crate::templates::TemplateSet;
use std::sync::Arc;

/// Scores normalized strokes against a shared, read-only template set.
#[derive(Debug, Clone)]
pub struct Matcher {
    templates: Arc<TemplateSet>,
    accumulation: ScoreAccumulation,
}

impl Matcher {
    pub fn new(templates: Arc<TemplateSet>, accumulation: ScoreAccumulation) -> Self {
        Self {
            templates,
            accumulation,
        }
    }

    pub fn from_config(config: &MatchConfig) -> SmResult<Self> {
        let templates = TemplateSet::load_from_file(&config.templates)?;
        Ok(Self::new(Arc::new(templates), config.accumulation))
    }

    /// Score of `stroke` against the reference for `digit`.
    pub fn compute_score(&self, stroke: &[Point], digit: usize) -> StrokeResult<u32> {
        let reference = self.templates.stroke(digit)?;
        engine::compute_score(stroke, reference, self.accumulation)
    }

    pub fn best_match(&self, stroke: &[Point]) -> StrokeResult<MatchDetails> {
        engine::score_all(stroke, &self.templates, self.accumulation)
    }

    pub fn templates(&self) -> &Arc<TemplateSet> {
        &self.templates
    }

    pub fn accumulation(&self) -> ScoreAccumulation {
        self.accumulation
    }
}
