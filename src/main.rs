//! docx-extract CLI - text, table and image extraction for .docx files

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use docx_extract::report::{image_line, image_total, render_content, render_json};
use docx_extract::{DocxDocument, Extractor, ImageOrder, OutputFormat, ReportStyle, Settings};

#[derive(Parser)]
#[command(name = "docx-extract")]
#[command(version)]
#[command(about = "Extract paragraph text, tables and embedded images from .docx files", long_about = None)]
struct Cli {
    /// Input .docx file
    #[arg(value_name = "FILE", required_unless_present = "init_config")]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Console)]
    format: OutputFormat,

    /// Output file (text: defaults to the configured text output; json: stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Directory for extracted images
    #[arg(long, value_name = "DIR")]
    image_dir: Option<PathBuf>,

    /// Skip image extraction
    #[arg(long)]
    no_images: bool,

    /// Image numbering order
    #[arg(long, value_enum)]
    image_order: Option<ImageOrder>,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if cli.init_config {
        match Settings::init_default()? {
            Some(path) => println!("Wrote default config to {}", path.display()),
            None => anyhow::bail!("Could not determine a config directory"),
        }
        return Ok(());
    }

    let settings = Settings::load().context("Failed to load settings")?;
    let Some(input) = cli.input.as_deref() else {
        anyhow::bail!("No input file given");
    };

    let document = DocxDocument::open(input)
        .with_context(|| format!("Failed to open {}", input.display()))?;
    let extractor = Extractor::new(&document);

    let image_dir = cli.image_dir.clone().unwrap_or(settings.image_dir.clone());
    let image_order = cli.image_order.unwrap_or(settings.image_order);

    match cli.format {
        OutputFormat::Console => {
            print!("{}", render_content(&extractor, ReportStyle::Console)?);

            if !cli.no_images {
                let images = extractor
                    .extract_images_with(&image_dir, image_order, |image| {
                        println!("{}", image_line(image))
                    })
                    .with_context(|| image_dir_context(&image_dir))?;
                println!("{}", image_total(images.len()));
            }
        }
        OutputFormat::Text => {
            let output = cli.output.clone().unwrap_or(settings.text_output.clone());
            let content = render_content(&extractor, ReportStyle::TextFile)?;
            fs::write(&output, content)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Content extracted to {}", output.display());
        }
        OutputFormat::Json => {
            let images = if cli.no_images {
                Vec::new()
            } else {
                extractor
                    .extract_images(&image_dir, image_order)
                    .with_context(|| image_dir_context(&image_dir))?
            };

            let json = render_json(&document, &input.to_string_lossy(), &images)?;
            match &cli.output {
                Some(output) => fs::write(output, json)
                    .with_context(|| format!("Failed to write {}", output.display()))?,
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}

fn image_dir_context(image_dir: &Path) -> String {
    format!("Failed to extract images into {}", image_dir.display())
}
