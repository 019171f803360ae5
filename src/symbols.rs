use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{AsmError, Result};
use crate::tables::{PREDEFINED, REGISTER_COUNT};

/// First RAM slot handed out to variables.
pub const VARIABLE_BASE: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Predefined,
    Label,
    Variable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub name: String,
    pub addr: u32,
    pub kind: SymbolKind,
}

/// Name -> address bindings for one translation run. Predefined, label and
/// variable names share a single namespace and a binding never changes once
/// made.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    map: HashMap<String, (u32, SymbolKind)>,
    next_var: u32,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        let mut map = HashMap::new();
        for i in 0..REGISTER_COUNT {
            map.insert(format!("R{i}"), (i, SymbolKind::Predefined));
        }
        for &(name, addr) in PREDEFINED {
            map.insert(name.to_string(), (addr, SymbolKind::Predefined));
        }
        Self { map, next_var: VARIABLE_BASE }
    }

    /// Bind a label. Fails if `name` is empty or already bound, predefined
    /// names included.
    pub fn insert_label(&mut self, name: &str, addr: u32) -> Result<()> {
        if name.is_empty() {
            return Err(AsmError::EmptyLabel);
        }
        if self.map.contains_key(name) {
            return Err(AsmError::DuplicateSymbol(name.to_string()));
        }
        self.map.insert(name.to_string(), (addr, SymbolKind::Label));
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<u32> {
        self.map.get(name).map(|&(addr, _)| addr)
    }

    /// Existing binding for `name`, or the next free variable slot.
    ///
    /// Only names are checked for uniqueness; a variable slot is never
    /// compared against label addresses.
    pub fn resolve_or_allocate(&mut self, name: &str) -> u32 {
        if let Some(addr) = self.lookup(name) {
            return addr;
        }
        let addr = self.next_var;
        self.next_var += 1;
        self.map.insert(name.to_string(), (addr, SymbolKind::Variable));
        tracing::debug!(name, addr, "variable allocated");
        addr
    }

    /// Number of variables allocated so far.
    pub fn variable_count(&self) -> u32 {
        self.next_var - VARIABLE_BASE
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All bindings, ordered by address then name.
    pub fn entries(&self) -> Vec<SymbolEntry> {
        let mut out: Vec<SymbolEntry> = self
            .map
            .iter()
            .map(|(name, &(addr, kind))| SymbolEntry { name: name.clone(), addr, kind })
            .collect();
        out.sort_by(|a, b| a.addr.cmp(&b.addr).then_with(|| a.name.cmp(&b.name)));
        out
    }
}
