//! CLI argument parsing for change assessment.
//!
//! The CLI only collects answers and scores; every decision is made by the
//! classify/risk/approval modules.
use crate::classify::Classification;
use crate::risk::RiskTier;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "chgate",
    version,
    about = "Classify a proposed change, score its risk, and select its approval path",
    after_help = "Examples:\n  chgate classify --pre-approved\n  chgate score --scores 3,4,2,3,3,4,2\n  chgate path --classification normal --tier high\n  chgate paths\n  chgate assess --scores 3,4,2,3,3,4,2 --json\n  chgate init --out change.json\n  chgate assess --request change.json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Classify(ClassifyArgs),
    Score(ScoreArgs),
    Path(PathArgs),
    Paths(PathsArgs),
    Assess(AssessArgs),
    Init(InitArgs),
}

/// The two classification questions.
#[derive(Args, Debug, Clone, Copy)]
pub struct SignalArgs {
    /// The service is currently down or critically degraded
    #[arg(long)]
    pub service_down: bool,

    /// The change matches a pre-approved change model
    #[arg(long)]
    pub pre_approved: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Classify a change as Standard, Normal, or Emergency")]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub signals: SignalArgs,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Score the seven risk dimensions of a Normal change")]
pub struct ScoreArgs {
    /// Seven comma-separated scores (1-5): impact scope, complexity,
    /// reversibility, testing confidence, deployment history,
    /// timing sensitivity, dependency count
    #[arg(
        long,
        value_name = "N,N,N,N,N,N,N",
        value_delimiter = ',',
        allow_hyphen_values = true,
        required = true
    )]
    pub scores: Vec<i64>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Show the approval path for a classification and risk tier")]
pub struct PathArgs {
    #[arg(long, value_enum)]
    pub classification: Classification,

    /// Risk tier; required for normal changes
    #[arg(long, value_enum)]
    pub tier: Option<RiskTier>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(about = "List all five approval paths")]
pub struct PathsArgs {
    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Run classification, risk scoring, and path selection together")]
pub struct AssessArgs {
    /// Change request JSON (see `chgate init`)
    #[arg(long, value_name = "PATH", conflicts_with_all = ["service_down", "pre_approved", "scores"])]
    pub request: Option<PathBuf>,

    #[command(flatten)]
    pub signals: SignalArgs,

    /// Seven comma-separated scores (1-5); required for normal changes
    #[arg(
        long,
        value_name = "N,N,N,N,N,N,N",
        value_delimiter = ',',
        allow_hyphen_values = true
    )]
    pub scores: Option<Vec<i64>>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Write a change request stub with every dimension at the midpoint")]
pub struct InitArgs {
    /// Output path for the request JSON; prints to stdout when omitted
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long, requires = "out")]
    pub force: bool,
}
