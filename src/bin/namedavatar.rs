use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "namedavatar", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the avatar descriptor as JSON.
    Json(JsonArgs),
    /// Print or write the avatar as SVG markup.
    Svg(SvgArgs),
    /// Rasterize the avatar to a PNG.
    Png(PngArgs),
    /// Compose avatars for a JSON array of names.
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct StyleArgs {
    /// Options JSON applied on top of the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Label selection strategy.
    #[arg(long, value_enum)]
    strategy: Option<StrategyChoice>,

    /// Avatar width in px.
    #[arg(long)]
    width: Option<f64>,

    /// Avatar height in px (defaults to width).
    #[arg(long)]
    height: Option<f64>,

    /// Fixed background color, bypassing the palette.
    #[arg(long)]
    background: Option<String>,
}

#[derive(Args, Debug)]
struct JsonArgs {
    /// Full name; omit for a nameless avatar.
    #[arg(long)]
    name: Option<String>,

    #[command(flatten)]
    style: StyleArgs,
}

#[derive(Args, Debug)]
struct SvgArgs {
    /// Full name; omit for a nameless avatar.
    #[arg(long)]
    name: Option<String>,

    #[command(flatten)]
    style: StyleArgs,

    /// Emit a `data:` URI instead of raw markup.
    #[arg(long, default_value_t = false)]
    data_uri: bool,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PngArgs {
    /// Full name; omit for a nameless avatar.
    #[arg(long)]
    name: Option<String>,

    #[command(flatten)]
    style: StyleArgs,

    /// Edge length in px when no width is configured.
    #[arg(long, default_value_t = 64)]
    size: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Input JSON array of names; non-string entries produce nameless avatars.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    style: StyleArgs,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyChoice {
    FirstName,
    LastName,
    Initials,
}

impl From<StrategyChoice> for namedavatar::LabelStrategy {
    fn from(c: StrategyChoice) -> Self {
        match c {
            StrategyChoice::FirstName => Self::FirstName,
            StrategyChoice::LastName => Self::LastName,
            StrategyChoice::Initials => Self::Initials,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Json(args) => cmd_json(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Png(args) => cmd_png(args),
        Command::Batch(args) => cmd_batch(args),
    }
}

/// Install `--config` as the process-wide defaults and return the per-call flag overrides.
fn apply_style(style: &StyleArgs) -> anyhow::Result<namedavatar::OptionsOverrides> {
    if let Some(path) = &style.config {
        let file = namedavatar::OptionsOverrides::from_path(path)?;
        namedavatar::configure(&file)
            .with_context(|| format!("apply options from '{}'", path.display()))?;
    }

    Ok(namedavatar::OptionsOverrides {
        label_strategy: style.strategy.map(Into::into),
        width: style.width,
        height: style.height,
        background_color: style.background.as_deref().map(namedavatar::Color::new),
        ..namedavatar::OptionsOverrides::default()
    })
}

fn compose_one(
    name: Option<&str>,
    style: &StyleArgs,
) -> anyhow::Result<namedavatar::AvatarDescriptor> {
    let overrides = apply_style(style)?;
    Ok(namedavatar::compose_with_defaults(name, &overrides)?)
}

fn write_or_print(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            ensure_parent_dir(path)?;
            std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_json(args: JsonArgs) -> anyhow::Result<()> {
    let desc = compose_one(args.name.as_deref(), &args.style)?;
    let json = serde_json::to_string_pretty(&desc)
        .map_err(|e| namedavatar::AvatarError::serde(e.to_string()))?;
    write_or_print(None, &json)
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let desc = compose_one(args.name.as_deref(), &args.style)?;
    let baseline = namedavatar::TextBaseline::default();
    let text = if args.data_uri {
        namedavatar::to_data_uri(&desc, baseline)
    } else {
        namedavatar::to_svg(&desc, baseline)
    };
    write_or_print(args.out.as_deref(), &text)
}

fn cmd_png(args: PngArgs) -> anyhow::Result<()> {
    let desc = compose_one(args.name.as_deref(), &args.style)?;
    let bitmap = namedavatar::rasterize(&desc, args.size)?;

    ensure_parent_dir(&args.out)?;
    bitmap.write_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let f = File::open(&args.in_path)
        .with_context(|| format!("open names '{}'", args.in_path.display()))?;
    let names: Vec<serde_json::Value> = serde_json::from_reader(BufReader::new(f))
        .with_context(|| "parse names JSON (expected an array)")?;

    let overrides = apply_style(&args.style)?;
    let descs = names
        .iter()
        .map(|n| namedavatar::compose_with_defaults(n, &overrides))
        .collect::<Result<Vec<_>, _>>()?;

    let json = serde_json::to_string_pretty(&descs)
        .map_err(|e| namedavatar::AvatarError::serde(e.to_string()))?;
    write_or_print(args.out.as_deref(), &json)
}
