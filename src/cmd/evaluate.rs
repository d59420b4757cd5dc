use crate::reports;
use clap::Args;
use std::time::Instant;
use strokematch::config::EvaluateParams;
use strokematch::error::SmResult;
use strokematch::evaluation::evaluate;
use strokematch::matcher::Matcher;

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub params: EvaluateParams,
}

pub fn run(params: EvaluateParams, matcher: &Matcher) -> SmResult<bool> {
    println!(
        "🔥 Evaluating on {} threads: {} samples per digit",
        rayon::current_num_threads(),
        params.samples
    );

    let start = Instant::now();
    let report = evaluate(matcher.templates().clone(), matcher.accumulation(), &params)?;
    let elapsed = start.elapsed();

    reports::print_accuracy_report(&report);
    reports::print_confusion_matrix(&report);
    println!(
        "Overall accuracy: {:.1}% in {:?}",
        report.overall_accuracy() * 100.0,
        elapsed
    );
    Ok(true)
}
