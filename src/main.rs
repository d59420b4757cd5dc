use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use std::sync::Arc;
use strokematch::config::{ConfigFile, MatchConfig};
use strokematch::matcher::Matcher;
use strokematch::templates::TemplateSet;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Unistroke digit recognition by elastic matching", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    matching: MatchConfig,

    /// JSON file with `matching` and `evaluate` sections; CLI flags win.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recognize strokes stored as `x,y` CSV files.
    Classify(cmd::classify::ClassifyArgs),
    /// Check that every reference stroke recognizes as itself.
    Validate(cmd::validate::ValidateArgs),
    /// Measure accuracy on jittered copies of the references.
    Evaluate(cmd::evaluate::EvaluateArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let mut file_config = match &cli.config {
        Some(path) => {
            info!("⚖️  Loading config from: {}", path);
            ConfigFile::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ Failed to load config '{}': {}", path, e);
                process::exit(1);
            })
        }
        None => ConfigFile::default(),
    };
    file_config.matching.merge_from_cli(&cli.matching, &matches);
    let config = file_config.matching.clone();

    let templates = TemplateSet::load_from_file(&config.templates).unwrap_or_else(|e| {
        error!("❌ Cannot load templates '{}': {}", config.templates, e);
        process::exit(1);
    });
    let matcher = Matcher::new(Arc::new(templates), config.accumulation);
    info!("🚀 Matcher ready ({} accumulation)", config.accumulation);

    let outcome = match cli.command {
        Commands::Classify(args) => cmd::classify::run(args, &matcher),
        Commands::Validate(args) => cmd::validate::run(args, &matcher),
        Commands::Evaluate(args) => {
            let mut params = file_config.evaluate;
            if let Some(sub) = matches.subcommand_matches("evaluate") {
                params.merge_from_cli(&args.params, sub);
            }
            cmd::evaluate::run(params, &matcher)
        }
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("❌ {}", e);
            process::exit(1);
        }
    }
}
