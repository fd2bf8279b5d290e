//! Generation command handler.

use super::GenerateArgs;
use rehash::{
    AgentKind, AgentOptions, AgentResult, FormatHint, Orchestrator, RehashConfig, RunSummary,
    WriteReport, driver_from_config, parse_file, write_outputs,
};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use strum::IntoEnumIterator;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Run `rehash generate`.
///
/// Command-line flags override configuration values. Ctrl-C cancels agents
/// still in flight; artifacts already produced are still written.
///
/// # Errors
///
/// Returns an error if configuration, parsing or backend setup fails, if the
/// output directory cannot be created, or if any agent failed.
pub async fn run_generate(args: GenerateArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let mut config = match config_path {
        Some(path) => RehashConfig::from_file(path)?,
        None => RehashConfig::load()?,
    };
    if let Some(model) = args.model {
        config.model.name = model;
    }
    if let Some(max_attempts) = args.max_attempts {
        config.model.max_attempts = max_attempts;
    }

    let dialogue = parse_file(&args.input, FormatHint::from_path(&args.input))?;
    info!(
        input = %args.input.display(),
        turns = dialogue.len(),
        title = dialogue.title().as_deref().unwrap_or("untitled"),
        "Dialogue parsed"
    );

    let options = AgentOptions {
        marp_theme: args.theme.or(config.generation.marp_theme),
    };
    let mut orchestrator = match args.agents.or(config.generation.agents) {
        Some(names) => Orchestrator::with_agents(names, &options)?,
        None => Orchestrator::new(&options),
    };
    if let Some(secs) = args.timeout.or(config.generation.timeout_secs) {
        orchestrator = orchestrator.with_timeout(Duration::from_secs(secs));
    }

    let driver = driver_from_config(&config.model)?;
    info!(
        provider = driver.provider_name(),
        model = driver.model_name(),
        agents = ?orchestrator.agent_names(),
        "Starting generation"
    );

    let cancel = CancellationToken::new();
    let ctrl_c = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, cancelling agents in flight");
                cancel.cancel();
            }
        })
    };

    let started = Instant::now();
    let mut results = orchestrator
        .generate(Arc::new(dialogue), driver, cancel)
        .await;
    ctrl_c.abort();
    results.sort_by(|a, b| a.agent_name().cmp(b.agent_name()));

    let output_dir = args.output.unwrap_or(config.generation.output_dir);
    let mut summary =
        RunSummary::from_results(args.input.display().to_string(), started.elapsed(), &results);
    let report = write_outputs(&output_dir, &results, &mut summary).await?;

    print_report(&results, &report, &output_dir);
    println!(
        "Done: {} artifacts, {} failed, {} ms",
        summary.outputs().len(),
        summary.failed(),
        summary.duration_ms()
    );

    if !summary.is_complete() {
        anyhow::bail!(
            "{} of {} agents failed",
            summary.failed(),
            results.len()
        );
    }
    Ok(())
}

fn print_report(results: &[AgentResult], report: &WriteReport, output_dir: &Path) {
    for result in results {
        if !result.is_success() {
            println!(
                "[ERROR] {}: {}",
                result.agent_name(),
                result.failure().as_deref().unwrap_or("unknown failure")
            );
            continue;
        }
        let path = output_dir.join(result.output_file());
        if report.written.contains(&path) {
            println!("[OK] {} -> {}", result.agent_name(), path.display());
        }
    }
    for failure in &report.failed {
        println!("[ERROR] {}", failure);
    }
    match &report.summary_path {
        Some(path) => println!("Summary: {}", path.display()),
        None => println!("[WARN] summary.json was not written"),
    }
}

/// Print every agent with its artifact file and a short description.
pub fn list_agents() {
    for kind in AgentKind::iter() {
        println!(
            "{:<10} {:<14} {}",
            kind.name(),
            kind.output_file(),
            kind.description()
        );
    }
}
