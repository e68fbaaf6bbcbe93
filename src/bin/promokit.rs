use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "promokit", version, about = "Render store-listing promo tiles and icons")]
struct Cli {
    /// Job description JSON. Missing fields use the built-in defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output root; icon and tile paths are resolved against it.
    #[arg(long, global = true, default_value = ".")]
    out: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Print diagnostics about font resolution (family name + SHA-256 of font bytes).
    #[arg(long, global = true)]
    dump_fonts: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Render the bookmark icon at every configured size (RGBA PNG).
    Icons,
    /// Render the promo tiles (24-bit PNG).
    Promo,
    /// Render icons, then promo tiles using the fresh icon.
    All,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => promokit::AssetConfig::load(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => promokit::AssetConfig::default(),
    };
    config.validate().context("invalid config")?;

    if cli.dump_fonts {
        dump_font_diagnostics(&config.fonts);
    }

    let mut report = promokit::BatchReport::default();
    if matches!(cli.cmd, Command::Icons | Command::All) {
        report.append(promokit::generate_icons(&config, &cli.out));
    }
    if matches!(cli.cmd, Command::Promo | Command::All) {
        report.append(promokit::generate_promo_tiles(&config, &cli.out));
    }

    for written in report.written() {
        println!("wrote {written}");
    }

    let failed = report.failures().count();
    if failed > 0 {
        for (path, err) in report.failures() {
            eprintln!("failed {}: {err}", path.display());
        }
        anyhow::bail!("{failed} of {} assets failed", report.outcomes.len());
    }
    Ok(())
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
        .with_target(false)
        .init();
}

fn dump_font_diagnostics(source: &promokit::FontSource) {
    eprintln!("font diagnostics:");
    match promokit::FontProvider::resolve(source) {
        promokit::FontProvider::Resolved(font) => {
            eprintln!("  family:      {}", font.family_name());
            eprintln!("  sha256:      {}", sha256_hex(font.font_bytes()));
        }
        promokit::FontProvider::Default(_) => {
            eprintln!("  family:      {} (built-in fallback)", promokit::DefaultFont::FAMILY);
        }
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
