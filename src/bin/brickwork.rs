use std::{
    fs::File,
    io::{BufReader, Read as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "brickwork", version)]
struct Cli {
    /// Log layout passes to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out a scene and print the pass reports as JSON.
    Pack(PackArgs),
    /// Print the breakpoint a scene resolves to at a given width.
    Breakpoint(BreakpointArgs),
    /// Check a scene's configuration.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct PackArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Viewport width, overriding the scene's.
    #[arg(long)]
    width: Option<f64>,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct BreakpointArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Viewport width to resolve.
    #[arg(long)]
    width: f64,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Pack(args) => cmd_pack(args),
        Command::Breakpoint(args) => cmd_breakpoint(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn read_scene_json(path: &Path) -> anyhow::Result<brickwork::Scene> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let mut s = String::new();
    BufReader::new(f)
        .read_to_string(&mut s)
        .with_context(|| format!("read scene '{}'", path.display()))?;
    let scene = brickwork::Scene::from_json_str(&s).with_context(|| "parse scene JSON")?;
    Ok(scene)
}

fn cmd_pack(args: PackArgs) -> anyhow::Result<()> {
    let mut scene = read_scene_json(&args.in_path)?;
    if let Some(width) = args.width {
        scene.viewport_width = width;
    }

    let reports = scene.run()?;
    let out = if args.pretty {
        serde_json::to_string_pretty(&reports)
    } else {
        serde_json::to_string(&reports)
    }
    .with_context(|| "serialize reports")?;
    println!("{out}");
    Ok(())
}

fn cmd_breakpoint(args: BreakpointArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    let breakpoints = brickwork::Breakpoints::from_config(&scene.config)?;
    let active = breakpoints.resolve(&brickwork::FixedViewport::new(args.width));
    println!(
        "{}",
        serde_json::to_string(&active).with_context(|| "serialize breakpoint")?
    );
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    eprintln!(
        "ok: {} breakpoints, {} bricks",
        scene.config.sizes.len(),
        scene.bricks.len() + scene.appended.len()
    );
    Ok(())
}
