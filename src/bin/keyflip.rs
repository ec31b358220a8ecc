// Keyflip CLI
// Convert text typed on the wrong keyboard layout (QWERTY <-> Arabic 102)

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use keyflip_core::settings::Settings;
use keyflip_core::{arabic_102, script, Converter};

/// Fix text typed with the wrong keyboard layout
#[derive(Parser, Debug)]
#[command(name = "keyflip")]
#[command(version)]
#[command(about = "Convert text between the QWERTY and Arabic (102) AZERTY layouts", long_about = None)]
struct Args {
    /// Text to convert (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Print the detected script instead of converting
    #[arg(long)]
    classify: bool,

    /// List layout characters that cannot be recovered by reverse conversion
    #[arg(long)]
    collisions: bool,

    /// TOML settings file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Validate settings and exit
    #[arg(long)]
    check_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_settings(args: &Args) -> anyhow::Result<Settings> {
    match &args.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        None => Settings::load_default().context("failed to load default settings"),
    }
}

fn log_filter(args: &Args, settings: &Settings) -> String {
    if args.verbose {
        return "debug".to_string();
    }
    settings.log_level().unwrap_or("warn").to_string()
}

fn init_logging(filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();
}

/// Joined arguments, or all of stdin without its trailing newline
fn input_text(args: &Args) -> anyhow::Result<String> {
    if !args.text.is_empty() {
        return Ok(args.text.join(" "));
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;
    let trimmed = buf.trim_end_matches(['\n', '\r']).len();
    buf.truncate(trimmed);
    Ok(buf)
}

fn print_collisions() {
    let table = arabic_102();
    if table.collisions().is_empty() {
        println!("No collisions");
        return;
    }
    println!("{} lossy reverse mapping(s):", table.collisions().len());
    for collision in table.collisions() {
        println!("  {}", collision);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings = load_settings(&args)?;
    init_logging(&log_filter(&args, &settings));

    if let Some(path) = settings.source_path() {
        log::debug!("settings loaded from {}", path.display());
    }

    if args.check_config {
        println!("Configuration is valid");
        return Ok(());
    }

    if args.collisions {
        print_collisions();
        return Ok(());
    }

    let text = input_text(&args)?;

    if args.classify {
        println!("{}", script::classify(&text));
        return Ok(());
    }

    let result = Converter::global().convert(&text);
    log::debug!("direction: {:?}", result.direction());
    let (output, _) = result.into_parts();
    println!("{}", output);
    Ok(())
}
