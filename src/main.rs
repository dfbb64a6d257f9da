use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};

use dicthtml::{document_digest, render_page_with, PageDescription, RenderConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    Json,
    Yaml,
}

/// Render a page description file into a standalone HTML document
#[derive(Debug, Parser)]
#[command(name = "dicthtml", version, about)]
struct Cli {
    /// Page description (JSON or YAML)
    input: PathBuf,

    /// Write the document here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input format; guessed from the file extension when omitted
    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    /// Label of the save button appended to forms
    #[arg(long)]
    save_label: Option<String>,

    /// Render and report success without writing the document
    #[arg(long)]
    check: bool,

    /// Print the SHA-256 of the rendered document instead of the document
    #[arg(long, conflicts_with = "check")]
    digest: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn detect_format(path: &Path) -> InputFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => InputFormat::Yaml,
        _ => InputFormat::Json,
    }
}

fn run(cli: Cli) -> Result<()> {
    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let format = cli.format.unwrap_or_else(|| detect_format(&cli.input));
    debug!("parsing {} as {:?}", cli.input.display(), format);

    let page = match format {
        InputFormat::Json => PageDescription::from_json_str(&source),
        InputFormat::Yaml => PageDescription::from_yaml_str(&source),
    }
    .with_context(|| format!("failed to parse {}", cli.input.display()))?;

    let mut config = RenderConfig::default();
    if let Some(label) = cli.save_label {
        config.save_label = label;
    }

    let html = render_page_with(&page, config)
        .with_context(|| format!("failed to render {}", cli.input.display()))?;

    if cli.check {
        println!("{}: ok ({} bytes)", cli.input.display(), html.len());
        return Ok(());
    }

    let body = if cli.digest { document_digest(&html) } else { html };
    match &cli.output {
        Some(path) => {
            fs::write(path, &body).with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(body.as_bytes())?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Err(e) = run(cli) {
        eprintln!("dicthtml: {:#}", e);
        std::process::exit(1);
    }
}
