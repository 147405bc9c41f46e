//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::tree_walker::MergeMode;

/// 语言文件维护工具
#[derive(Parser, Debug)]
#[command(name = "locale_fanyi")]
#[command(version, about = "Locale JSON maintenance: script conversion, upside-down locale, TODO checks")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project root that locale paths are resolved against
    #[arg(long, global = true, default_value = ".", env = "LOCALE_FANYI_ROOT")]
    pub root: PathBuf,

    /// Locale directory relative to the project root
    #[arg(long, global = true, default_value = "src/locales")]
    pub locales_dir: PathBuf,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert zh-Hans.json to zh-Hant.json (Simplified to Traditional)
    ZhHant(ConvertArgs),

    /// Convert en.json to the upside-down en-ud.json
    UpsideDown(ConvertArgs),

    /// Fail if any of the given locale files still contains %TODO
    Check(CheckArgs),

    /// Write <TARGET>.json with every string of <SOURCE>.json prefixed by %TODO
    Placeholder(PairArgs),

    /// Remove keys from <TARGET>.json that no longer exist in <SOURCE>.json
    Prune(PairArgs),
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::ZhHant(_) => "zh-hant",
            Commands::UpsideDown(_) => "upside-down",
            Commands::Check(_) => "check",
            Commands::Placeholder(_) => "placeholder",
            Commands::Prune(_) => "prune",
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConvertArgs {
    /// Only sync structure: keep existing values, convert new keys
    #[arg(long)]
    pub align: bool,

    /// Ignore the existing output entirely
    #[arg(long, conflicts_with = "align")]
    pub no_merge: bool,

    /// Override the input file path
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Override the output file path
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Extra prefix treated as a link and never converted (repeatable)
    #[arg(long = "preserve-prefix", value_name = "PREFIX")]
    pub preserve_prefixes: Vec<String>,
}

impl ConvertArgs {
    pub fn merge_mode(&self) -> MergeMode {
        if self.align {
            MergeMode::Align
        } else if self.no_merge {
            MergeMode::Overwrite
        } else {
            MergeMode::PreserveLinks
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Locale JSON files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct PairArgs {
    /// Source locale name, e.g. `en`
    pub source: String,

    /// Target locale name, e.g. `zh-Hans`
    pub target: String,
}
