use serde::{Deserialize, Serialize};

use crate::encoder::{encode, encode_compute, Field};
use crate::error::{AsmError, LineError};
use crate::output::{render, OutputFormat};
use crate::parser::{classify, clean_line, parse, Instruction, Line};
use crate::symbols::SymbolTable;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AsmConfig {
    pub format: OutputFormat,
}

/// Result of a full run: the instruction words and the final bindings.
#[derive(Debug, Clone)]
pub struct Program {
    pub words: Vec<u16>,
    pub symbols: SymbolTable,
}

impl Program {
    pub fn render(&self, format: OutputFormat) -> String {
        render(&self.words, format)
    }
}

/// Normalized, non-empty lines with their 1-based line numbers.
fn lines(source: &str) -> impl Iterator<Item = (usize, String)> + '_ {
    source
        .lines()
        .enumerate()
        .map(|(i, raw)| (i + 1, clean_line(raw)))
        .filter(|(_, clean)| !clean.is_empty())
}

/// Pass 1: bind every label to the address of the next instruction.
pub fn scan_labels(source: &str) -> Result<SymbolTable, LineError> {
    let mut table = SymbolTable::new();
    let mut pc: u32 = 0;
    let mut labels = 0usize;
    for (no, clean) in lines(source) {
        match classify(&clean) {
            Some(Line::Label(name)) => {
                table.insert_label(name, pc).map_err(|e| LineError::new(no, e))?;
                tracing::debug!(label = name, addr = pc, "label bound");
                labels += 1;
            }
            Some(Line::Instr(_)) => pc += 1,
            None => {}
        }
    }
    tracing::info!(labels, instructions = pc, "pass 1 done");
    Ok(table)
}

/// Pass 2: allocate variables and encode every instruction. `table` must
/// come from [`scan_labels`] over the same source.
pub fn translate(source: &str, table: &mut SymbolTable) -> Result<Vec<u16>, LineError> {
    let mut words = Vec::new();
    for (no, clean) in lines(source) {
        let Some(Line::Instr(text)) = classify(&clean) else { continue };
        let word = encode_line(text, table).map_err(|e| LineError::new(no, e))?;
        words.push(word);
    }
    tracing::info!(words = words.len(), variables = table.variable_count(), "pass 2 done");
    Ok(words)
}

fn encode_line(text: &str, table: &mut SymbolTable) -> Result<u16, AsmError> {
    match parse(text) {
        Instruction::Address { target } => {
            if target.is_empty() {
                return Err(AsmError::UnrecognizedLine(text.to_string()));
            }
            if target.bytes().all(|b| b.is_ascii_digit()) {
                let addr = target
                    .parse::<u32>()
                    .map_err(|_| AsmError::InvalidAddress(target.clone()))?;
                return Ok(encode(Field::Address(addr))?.value);
            }
            let addr = table.resolve_or_allocate(&target);
            encode(Field::Address(addr))
                .map(|bits| bits.value)
                .map_err(|_| AsmError::InvalidAddress(format!("{target} -> {addr}")))
        }
        Instruction::Compute { dest, comp, jump } => {
            if comp.is_empty() {
                return Err(AsmError::UnrecognizedLine(text.to_string()));
            }
            encode_compute(&dest, &comp, &jump)
        }
    }
}

/// Run both passes over `source` with a fresh symbol table.
pub fn assemble(source: &str) -> Result<Program, LineError> {
    let mut symbols = scan_labels(source)?;
    let words = translate(source, &mut symbols)?;
    Ok(Program { words, symbols })
}

/// Assemble and render in the configured output format.
pub fn assemble_with(source: &str, cfg: &AsmConfig) -> Result<String, LineError> {
    Ok(assemble(source)?.render(cfg.format))
}
