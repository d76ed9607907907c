use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "elevate", version)]
struct Cli {
    /// Log verbosity (-v for debug, -vv for trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every route and its reveal sets.
    Routes(RoutesArgs),
    /// Replay a scenario script and print the event timeline.
    Run(RunArgs),
    /// Navigate to a route, wait, and print the resulting state.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct RoutesArgs {
    /// Motion config JSON (defaults to the site timings).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Scenario JSON.
    #[arg(long)]
    script: PathBuf,

    /// Motion config JSON; overrides the scenario's own `config`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full report as JSON instead of a text timeline.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Route path, e.g. `/about` or `#/about`.
    #[arg(long)]
    route: String,

    /// Milliseconds to advance after navigating.
    #[arg(long, default_value_t = 0)]
    at: u64,

    /// Scroll offset applied right after navigating.
    #[arg(long)]
    scroll: Option<f64>,

    /// Motion config JSON (defaults to the site timings).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Routes(args) => cmd_routes(args),
        Command::Run(args) => cmd_run(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config(path: Option<&Path>) -> anyhow::Result<Option<elevate::MotionConfig>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    let cfg = elevate::MotionConfig::from_json_str(&s)
        .with_context(|| format!("parse config '{}'", path.display()))?;
    Ok(Some(cfg))
}

fn read_scenario(path: &Path) -> anyhow::Result<elevate::Scenario> {
    let f = File::open(path).with_context(|| format!("open script '{}'", path.display()))?;
    let scenario: elevate::Scenario = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse script '{}'", path.display()))?;
    if let Some(cfg) = &scenario.config {
        cfg.validate()
            .with_context(|| format!("script '{}' config", path.display()))?;
    }
    Ok(scenario)
}

fn cmd_routes(args: RoutesArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?.unwrap_or_default();
    for route in elevate::Route::ALL {
        let page = elevate::pages::page(route, &cfg);
        let sets: Vec<String> = page
            .reveals
            .iter()
            .map(|r| format!("{} ({})", r.id, r.elements.len()))
            .collect();
        println!("{:<10} {}", route.path(), sets.join(", "));
    }
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let scenario = read_scenario(&args.script)?;
    let cfg = read_config(args.config.as_deref())?;
    let report = scenario
        .run(cfg.as_ref())
        .with_context(|| format!("run script '{}'", args.script.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    for event in &report.events {
        println!("{event}");
    }
    for failure in &report.failures {
        eprintln!(
            "step {} ({}) failed: {}",
            failure.step, failure.name, failure.message
        );
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?.unwrap_or_default();
    let mut site = elevate::Site::open(cfg, &args.route)
        .with_context(|| format!("open '{}'", args.route))?;
    if let Some(y) = args.scroll {
        site.scroll_to(y);
    }
    site.advance(args.at);
    println!("{}", serde_json::to_string_pretty(&site.snapshot())?);
    Ok(())
}
