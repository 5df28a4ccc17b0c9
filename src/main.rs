use anyhow::{anyhow, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod approval;
mod assessment;
mod classify;
mod cli;
mod error;
mod render;
mod request;
mod risk;

use approval::{resolve_approval_path, ApprovalPathKey};
use assessment::{assess_change, RiskReport};
use classify::{classify_change, ChangeSignals};
use cli::{
    AssessArgs, ClassifyArgs, Command, InitArgs, PathArgs, PathsArgs, RootArgs, ScoreArgs,
    SignalArgs,
};

fn main() -> Result<()> {
    init_tracing();
    let args = RootArgs::parse();

    match args.command {
        Command::Classify(args) => cmd_classify(args),
        Command::Score(args) => cmd_score(args),
        Command::Path(args) => cmd_path(args),
        Command::Paths(args) => cmd_paths(args),
        Command::Assess(args) => cmd_assess(args),
        Command::Init(args) => cmd_init(args),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Serialize)]
struct ClassificationOutput {
    classification: classify::Classification,
    summary: &'static str,
}

fn cmd_classify(args: ClassifyArgs) -> Result<()> {
    let classification = classify_change(signals_from(args.signals));
    if args.json {
        return print_json(&ClassificationOutput {
            classification,
            summary: classification.summary(),
        });
    }
    print!("{}", render::render_classification(classification));
    Ok(())
}

fn cmd_score(args: ScoreArgs) -> Result<()> {
    let report = RiskReport::new(&args.scores)?;
    tracing::info!(
        composite = report.assessment.composite,
        tier = %report.assessment.tier,
        "risk scored"
    );
    if args.json {
        return print_json(&report);
    }
    print!("{}", render::render_risk(&report));
    Ok(())
}

fn cmd_path(args: PathArgs) -> Result<()> {
    let path = resolve_approval_path(args.classification, args.tier)?;
    if args.json {
        return print_json(path);
    }
    print!("{}", render::render_approval_path(path));
    Ok(())
}

fn cmd_paths(args: PathsArgs) -> Result<()> {
    let paths: Vec<_> = ApprovalPathKey::ALL.iter().map(|key| key.path()).collect();
    if args.json {
        return print_json(&paths);
    }
    let rendered: Vec<String> = ApprovalPathKey::ALL
        .iter()
        .map(|key| render::render_approval_path(key.path()))
        .collect();
    print!("{}", rendered.join("\n"));
    Ok(())
}

fn cmd_assess(args: AssessArgs) -> Result<()> {
    let (signals, scores) = match &args.request {
        Some(path) => {
            let request = request::load_request(path)?;
            request::validate_request(&request)?;
            tracing::debug!(path = %path.display(), ?request, "loaded change request");
            (request.signals(), request.scores().map(Vec::from))
        }
        None => (signals_from(args.signals), args.scores.clone()),
    };

    let classification = classify_change(signals);
    if classification.requires_risk_assessment() && scores.is_none() {
        return Err(anyhow!(
            "risk scores required for Normal changes (pass --scores or a request with a risk block)"
        ));
    }

    let assessment = assess_change(signals, scores.as_deref())?;
    tracing::info!(
        classification = %assessment.classification,
        composite = assessment.risk.as_ref().map(|r| r.assessment.composite),
        path = assessment.approval_path.title,
        "change assessed"
    );
    if args.json {
        return print_json(&assessment);
    }
    print!("{}", render::render_assessment(&assessment));
    Ok(())
}

fn cmd_init(args: InitArgs) -> Result<()> {
    let Some(out) = &args.out else {
        println!("{}", request::request_stub()?);
        return Ok(());
    };
    if out.exists() && !args.force {
        return Err(anyhow!(
            "{} already exists (use --force to overwrite)",
            out.display()
        ));
    }
    request::write_request(out, &request::default_request())?;
    println!("Wrote change request stub to {}", out.display());
    Ok(())
}

fn signals_from(args: SignalArgs) -> ChangeSignals {
    ChangeSignals {
        service_down: args.service_down,
        pre_approved: args.pre_approved,
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
