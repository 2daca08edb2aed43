use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cellfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an effect chain over a PNG for one frame and write the result as a PNG.
    Frame(FrameArgs),
    /// Trace the outline walk from a start cell and report how it ended.
    Outline(OutlineArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input PNG; every pixel becomes one cell.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Effect chain JSON (`{"effects": [...]}` or a bare array).
    #[arg(long)]
    chain: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct OutlineArgs {
    /// Input PNG; every pixel becomes one cell.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Start column.
    #[arg(long)]
    x: u32,

    /// Start row.
    #[arg(long)]
    y: u32,

    /// Initial heading.
    #[arg(long, value_enum, default_value_t = DirectionChoice::Right)]
    direction: DirectionChoice,

    /// Largest per-channel color step the walker accepts.
    #[arg(long, default_value_t = cellfx::effects::outline::DEFAULT_OUTLINE_THRESHOLD)]
    threshold: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirectionChoice {
    Up,
    Right,
    Down,
    Left,
}

impl From<DirectionChoice> for cellfx::Direction {
    fn from(d: DirectionChoice) -> Self {
        match d {
            DirectionChoice::Up => Self::Up,
            DirectionChoice::Right => Self::Right,
            DirectionChoice::Down => Self::Down,
            DirectionChoice::Left => Self::Left,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Outline(args) => cmd_outline(args),
    }
}

fn read_surface(path: &Path) -> anyhow::Result<cellfx::PixelSurface> {
    let img = image::open(path)
        .with_context(|| format!("open image '{}'", path.display()))?
        .to_rgba8();
    Ok(cellfx::surface::image_io::from_rgba_image(&img)?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let input = read_surface(&args.in_path)?;
    let chain_json = std::fs::read_to_string(&args.chain)
        .with_context(|| format!("read chain '{}'", args.chain.display()))?;
    let spec = cellfx::ChainSpec::from_json_str(&chain_json)
        .with_context(|| format!("parse chain '{}'", args.chain.display()))?;
    let mut chain = spec.build();

    let mut output = cellfx::PixelSurface::new(input.width(), input.height(), cellfx::Rgb8::BLACK)?;
    let mut ctx = cellfx::RenderEffectContext::new(&input, &mut output);
    chain
        .run(&mut ctx, cellfx::FrameIndex(args.frame))
        .with_context(|| format!("run chain at frame {}", args.frame))?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    cellfx::surface::image_io::to_rgba_image(&output)
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({}x{})",
        args.out.display(),
        output.width(),
        output.height()
    );
    Ok(())
}

fn cmd_outline(args: OutlineArgs) -> anyhow::Result<()> {
    let input = read_surface(&args.in_path)?;
    let walker = cellfx::OutlineRotator::new(args.x, args.y, args.direction.into())
        .with_threshold(args.threshold);
    let trace = walker
        .trace(&input)
        .with_context(|| format!("trace outline from ({}, {})", args.x, args.y))?;

    let end = match trace.end {
        cellfx::OutlineEnd::Closed => "closed",
        cellfx::OutlineEnd::DeadEnd => "dead_end",
        cellfx::OutlineEnd::StepLimit => "step_limit",
    };
    println!("cells: {}", trace.cells.len());
    println!("end: {end}");
    Ok(())
}
