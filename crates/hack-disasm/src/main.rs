use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::collections::HashMap;
use std::path::PathBuf;

use hack_disasm::{disassemble, load_labels, load_raw_image, render_text};

#[derive(Parser, Debug)]
#[command(author, version, about = "Hack memory image disassembler", long_about = None)]
struct Cli {
    /// Input image (`v2.0 raw` hex format)
    #[arg(value_name = "IMAGE")]
    input: PathBuf,
    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Show the hex word next to each instruction (text format only)
    #[arg(long)]
    show_words: bool,
    /// Import labels from a symbol file written by `hack-asm --symbols`
    #[arg(long, value_name = "FILE")]
    labels: Option<PathBuf>,
    /// Write output to file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let img = load_raw_image(&cli.input)?;
    let labels = match &cli.labels {
        Some(path) => load_labels(path)?,
        None => HashMap::new(),
    };

    let entries = disassemble(&img, &labels);
    let out = match cli.format {
        OutputFormat::Text => render_text(&entries, cli.show_words),
        OutputFormat::Json => serde_json::to_string_pretty(&entries)?,
    };

    if let Some(path) = cli.out {
        std::fs::write(path, out)?;
    } else {
        print!("{}", out);
    }
    Ok(())
}
