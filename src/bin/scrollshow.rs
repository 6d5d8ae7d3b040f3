use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "scrollshow", version)]
struct Cli {
    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print resolved slide layouts as JSON.
    Layout(LayoutArgs),
    /// Print one slide's reveal timeline as JSON.
    Timeline(TimelineArgs),
    /// Print the in-page navigation links as JSON.
    Nav(DeckArgs),
    /// Scroll the page top to bottom and back, writing one snapshot per frame.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct DeckArgs {
    /// Input deck JSON. The bundled deck is used when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    #[command(flatten)]
    deck: DeckArgs,

    /// Only print the slide with this id.
    #[arg(long)]
    slide: Option<String>,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    #[command(flatten)]
    deck: DeckArgs,

    /// Slide id.
    #[arg(long)]
    slide: String,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    deck: DeckArgs,

    /// Output trace JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Presentation config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frames per scroll direction.
    #[arg(long, default_value_t = 120)]
    frames: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Nav(args) => cmd_nav(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_deck(args: &DeckArgs) -> anyhow::Result<scrollshow::SlideFeed> {
    let Some(path) = &args.in_path else {
        return scrollshow::SlideFeed::builtin().context("load bundled deck");
    };
    let f = File::open(path).with_context(|| format!("open deck '{}'", path.display()))?;
    let feed = scrollshow::SlideFeed::from_reader(BufReader::new(f))
        .with_context(|| format!("parse deck '{}'", path.display()))?;
    Ok(feed)
}

fn read_config(path: Option<&Path>) -> anyhow::Result<scrollshow::PresentationConfig> {
    let Some(path) = path else {
        return Ok(scrollshow::PresentationConfig::default());
    };
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let cfg = scrollshow::PresentationConfig::from_reader(BufReader::new(f))
        .with_context(|| format!("parse config '{}'", path.display()))?;
    Ok(cfg)
}

fn slide_index(feed: &scrollshow::SlideFeed, id: &str) -> anyhow::Result<usize> {
    feed.position(id)
        .with_context(|| format!("no slide with id '{id}'"))
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).context("write JSON to stdout")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let feed = read_deck(&args.deck)?;
    let layouts: Vec<scrollshow::SlideLayout> = match &args.slide {
        Some(id) => {
            let i = slide_index(&feed, id)?;
            vec![scrollshow::resolve_layout(&feed.slides()[i], i)]
        }
        None => feed
            .slides()
            .iter()
            .enumerate()
            .map(|(i, s)| scrollshow::resolve_layout(s, i))
            .collect(),
    };
    print_json(&layouts)
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let feed = read_deck(&args.deck)?;
    let i = slide_index(&feed, &args.slide)?;
    let layout = scrollshow::resolve_layout(&feed.slides()[i], i);
    print_json(&scrollshow::reveal_timeline(&layout))
}

fn cmd_nav(args: DeckArgs) -> anyhow::Result<()> {
    let feed = read_deck(&args)?;
    print_json(&scrollshow::navigation_links(&feed))
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let feed = read_deck(&args.deck)?;
    let cfg = read_config(args.config.as_deref())?;
    let trace = scrollshow::simulate_scroll(&feed, cfg, args.frames)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let json = trace.to_json_pretty()?;
    std::fs::write(&args.out, json)
        .with_context(|| format!("write trace '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} frames)",
        args.out.display(),
        trace.frames.len()
    );
    Ok(())
}
