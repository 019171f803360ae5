pub mod assembler;
pub mod decoder;
pub mod disasm;
pub mod encoder;
pub mod error;
pub mod output;
pub mod parser;
pub mod symbols;
pub mod tables;

pub use assembler::{assemble, assemble_with, scan_labels, translate, AsmConfig, Program};
pub use error::{AsmError, LineError};
pub use output::OutputFormat;
pub use symbols::{SymbolEntry, SymbolKind, SymbolTable};
