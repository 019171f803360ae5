use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

use hack_asm::output::parse_raw_image;
use hack_asm::{SymbolEntry, SymbolKind};

/// A ROM image: one instruction word per address, starting at 0.
#[derive(Debug, Clone)]
pub struct Image {
    pub words: Vec<u16>,
}

impl Image {
    pub fn word(&self, addr: u32) -> Option<u16> {
        self.words.get(addr as usize).copied()
    }

    pub fn len(&self) -> u32 {
        self.words.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

pub fn load_raw_image(path: &Path) -> Result<Image> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let words = parse_raw_image(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(Image { words })
}

/// Code labels from a symbol file written by `hack-asm --symbols`, keyed by
/// address. Several labels may share one address.
pub fn load_labels(path: &Path) -> Result<HashMap<u32, Vec<String>>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let entries: Vec<SymbolEntry> = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(labels_by_addr(entries))
}

pub fn labels_by_addr(entries: Vec<SymbolEntry>) -> HashMap<u32, Vec<String>> {
    let mut out: HashMap<u32, Vec<String>> = HashMap::new();
    for e in entries.into_iter().filter(|e| e.kind == SymbolKind::Label) {
        out.entry(e.addr).or_default().push(e.name);
    }
    for names in out.values_mut() {
        names.sort();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_reads_words() {
        let cwd = std::env::current_dir().unwrap();
        let path = cwd.join("_test_image.hex");
        std::fs::write(&path, "v2.0 raw\n0002 EA87 ").unwrap();
        let img = load_raw_image(&path).unwrap();
        assert_eq!(img.len(), 2);
        assert_eq!(img.word(1), Some(0xEA87));
        assert_eq!(img.word(2), None);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn only_code_labels_are_kept() {
        let entries = vec![
            SymbolEntry { name: "SP".into(), addr: 0, kind: SymbolKind::Predefined },
            SymbolEntry { name: "LOOP".into(), addr: 0, kind: SymbolKind::Label },
            SymbolEntry { name: "START".into(), addr: 0, kind: SymbolKind::Label },
            SymbolEntry { name: "i".into(), addr: 16, kind: SymbolKind::Variable },
        ];
        let labels = labels_by_addr(entries);
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[&0], vec!["LOOP".to_string(), "START".to_string()]);
    }
}
