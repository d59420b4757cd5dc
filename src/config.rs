use crate::consts::DEFAULT_TEMPLATE_PATH;
use crate::error::SmResult;
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

/// How per-point distances are accumulated into a score.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    ValueEnum,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ScoreAccumulation {
    /// Truncate the running total to an integer after every addition.
    #[default]
    Truncating,
    /// Sum in full precision, truncate once at the end.
    Exact,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Reference data file (3000 lines of alternating x/y integers).
    #[arg(global = true, short, long, default_value = DEFAULT_TEMPLATE_PATH)]
    pub templates: String,

    #[arg(global = true, long, value_enum, default_value_t = ScoreAccumulation::Truncating)]
    pub accumulation: ScoreAccumulation,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            templates: DEFAULT_TEMPLATE_PATH.to_string(),
            accumulation: ScoreAccumulation::Truncating,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluateParams {
    /// Noisy samples generated per reference stroke.
    #[arg(long, default_value_t = 50)]
    pub samples: usize,
    /// Maximum per-coordinate jitter, in canonical units.
    #[arg(long, default_value_t = 12)]
    pub jitter: i32,
    /// Points kept from each reference before jittering; 0 keeps all.
    #[arg(long, default_value_t = 40)]
    pub decimate_to: usize,
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

impl Default for EvaluateParams {
    fn default() -> Self {
        Self {
            samples: 50,
            jitter: 12,
            decimate_to: 40,
            seed: 42,
        }
    }
}

/// On-disk form of `--config`: every section optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub matching: MatchConfig,
    pub evaluate: EvaluateParams,
}

impl ConfigFile {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SmResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

macro_rules! update_if_present {
    ($target:ident, $cli:ident, $matches:ident, $field:ident) => {
        if $matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
            $target.$field = $cli.$field.clone();
        }
    };
}

impl MatchConfig {
    /// Copies over the fields the user typed on the command line, leaving
    /// file-provided values for everything else.
    pub fn merge_from_cli(&mut self, cli: &MatchConfig, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, templates);
        update_if_present!(self, cli, matches, accumulation);
    }
}

impl EvaluateParams {
    pub fn merge_from_cli(&mut self, cli: &EvaluateParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, samples);
        update_if_present!(self, cli, matches, jitter);
        update_if_present!(self, cli, matches, decimate_to);
        update_if_present!(self, cli, matches, seed);
    }
}
