use crate::reports;
use clap::Args;
use strokematch::error::SmResult;
use strokematch::evaluation::self_check;
use strokematch::matcher::Matcher;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Only check this digit.
    #[arg(short, long)]
    pub digit: Option<usize>,
}

pub fn run(args: ValidateArgs, matcher: &Matcher) -> SmResult<bool> {
    let mut results = self_check(matcher)?;
    if let Some(d) = args.digit {
        results.retain(|(digit, _)| *digit == d);
        if results.is_empty() {
            println!("No reference stroke for digit {}.", d);
            return Ok(false);
        }
    }

    println!("\n🔎 === TEMPLATE SELF-CHECK === 🔎");
    reports::print_self_check_report(&results);

    let failures = results
        .iter()
        .filter(|(digit, d)| d.digit != *digit || d.score != 0)
        .count();
    if failures == 0 {
        println!("All {} reference strokes match themselves.", results.len());
    } else {
        println!("{} reference stroke(s) failed the self-check.", failures);
    }
    Ok(failures == 0)
}
