use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hack_asm::decoder::{Decoder, HackDecoder};
use hack_asm::disasm::fmt_decoded;
use hack_asm::{assemble, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assemble a Hack program into a hex memory image"
)]
struct Opts {
    /// Assembly source
    #[arg(value_name = "INPUT", default_value = "symbols.asm")]
    input: PathBuf,
    /// Output image
    #[arg(value_name = "OUTPUT", default_value = "code.bin")]
    output: PathBuf,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Raw)]
    format: OutputFormat,
    /// Export the final symbol table as JSON
    #[arg(long, value_name = "FILE")]
    symbols: Option<PathBuf>,
    /// Print an address / word / disassembly listing
    #[arg(long)]
    listing: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let source = std::fs::read_to_string(&opts.input)
        .with_context(|| format!("reading {}", opts.input.display()))?;

    let program = assemble(&source)?;

    std::fs::write(&opts.output, program.render(opts.format))
        .with_context(|| format!("writing {}", opts.output.display()))?;

    if let Some(path) = &opts.symbols {
        let json = serde_json::to_string_pretty(&program.symbols.entries())?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    }

    if opts.listing {
        let dec = HackDecoder::new();
        for (pc, &word) in program.words.iter().enumerate() {
            match dec.decode(word) {
                Some(d) => println!("{pc:5}: {word:04X}  {}", fmt_decoded(&d)),
                None => println!("{pc:5}: {word:04X}  .word {word:#06x}"),
            }
        }
    }

    println!(
        "Assembled {} -> {}",
        opts.input.display(),
        opts.output.display()
    );
    Ok(())
}
