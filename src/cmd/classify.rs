use crate::reports;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use strokematch::capture::load_stroke_file;
use strokematch::error::{SmResult, StrokeError};
use strokematch::matcher::{MatchDetails, Matcher};
use strokematch::recognizer::Recognizer;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// Stroke files, one `x,y` pair per row.
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Keep the first 150 points of longer strokes instead of failing.
    #[arg(long, default_value_t = false)]
    pub truncate: bool,

    /// Print one JSON object per stroke instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct Classification {
    pub file: String,
    pub points: usize,
    #[serde(flatten)]
    pub details: MatchDetails,
}

pub fn run(args: ClassifyArgs, matcher: &Matcher) -> SmResult<bool> {
    let mut session = Recognizer::with_matcher(matcher.clone());
    let mut results = Vec::with_capacity(args.files.len());

    for path in &args.files {
        let points = load_stroke_file(path)?;
        session.reset();

        for p in &points {
            match session.add_point(*p) {
                Ok(()) => {}
                Err(StrokeError::StrokeFull { capacity }) if args.truncate => {
                    warn!(
                        "{}: keeping first {} of {} points",
                        path.display(),
                        capacity,
                        points.len()
                    );
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        let details = session.match_details()?;
        results.push(Classification {
            file: path.display().to_string(),
            points: points.len(),
            details,
        });
    }

    if args.json {
        for r in &results {
            println!("{}", serde_json::to_string(r)?);
        }
    } else {
        reports::print_classification_report(&results);
    }
    Ok(true)
}
