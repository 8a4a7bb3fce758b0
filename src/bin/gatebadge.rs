use std::{
    io::{Read as _, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use gatebadge::{BadgeConfig, BadgeStatus, ImageService, resolve_font};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "gatebadge", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one badge as SVG.
    Render(RenderArgs),
    /// Print every status with its text, color and block width.
    List(ConfigArgs),
    /// Print diagnostics about badge font resolution (family name + SHA-256 of font bytes).
    Fonts(ConfigArgs),
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Badge configuration JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Status name, e.g. OK, WARN or NOT_FOUND.
    #[arg(long)]
    status: String,

    /// Output SVG path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    #[command(flatten)]
    config: ConfigArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::List(args) => cmd_list(args),
        Command::Fonts(args) => cmd_fonts(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &ConfigArgs) -> anyhow::Result<BadgeConfig> {
    match &args.config {
        Some(path) => BadgeConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display())),
        None => Ok(BadgeConfig::default()),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    // Parse before building the service so a bad name fails without touching fonts.
    let status: BadgeStatus = args.status.parse()?;
    let service = ImageService::new(load_config(&args.config)?)?;

    let mut svg = Vec::new();
    service
        .image_for(status)?
        .read_to_end(&mut svg)
        .context("read rendered badge")?;

    match &args.out {
        Some(out) => {
            write_file(out, &svg)?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&svg).context("write badge to stdout")?;
            stdout.flush().context("flush stdout")?;
        }
    }
    Ok(())
}

fn cmd_list(args: ConfigArgs) -> anyhow::Result<()> {
    let service = ImageService::new(load_config(&args)?)?;
    let catalog = service.catalog();
    for status in BadgeStatus::ALL {
        println!(
            "{:<10} {:<10} {} {}",
            status.name(),
            catalog.display_text(status),
            catalog.display_background_color(status).to_hex(),
            catalog.display_width(status),
        );
    }
    Ok(())
}

fn cmd_fonts(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;
    match resolve_font(&cfg.font) {
        Ok(font) => {
            let bytes = font.font_bytes().unwrap_or_default();
            println!(
                "family={} bytes={} sha256={}",
                font.family(),
                bytes.len(),
                sha256_hex(bytes)
            );
        }
        Err(err) => {
            println!("family={} builtin-metrics ({err})", gatebadge::GENERIC_FAMILY);
        }
    }
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write svg '{}'", path.display()))
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
