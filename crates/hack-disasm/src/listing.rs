use std::collections::HashMap;
use std::fmt::Write as _;

use serde::Serialize;

use hack_asm::decoder::{Decoder, HackDecoder};
use hack_asm::disasm::fmt_decoded;

use crate::model::Image;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub addr: u32,
    pub word: u16,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

pub fn disassemble(img: &Image, labels: &HashMap<u32, Vec<String>>) -> Vec<Entry> {
    let dec = HackDecoder::new();
    img.words
        .iter()
        .enumerate()
        .map(|(i, &word)| {
            let addr = i as u32;
            let text = match dec.decode(word) {
                Some(d) => fmt_decoded(&d),
                None => format!(".word {word:#06x}"),
            };
            let labels = labels.get(&addr).cloned().unwrap_or_default();
            Entry { addr, word, text, labels }
        })
        .collect()
}

pub fn render_text(entries: &[Entry], show_words: bool) -> String {
    let mut buf = String::new();
    for e in entries {
        for l in &e.labels {
            let _ = writeln!(buf, "{l}:");
        }
        if show_words {
            let _ = writeln!(buf, "{:5}: {:04X}  {}", e.addr, e.word, e.text);
        } else {
            let _ = writeln!(buf, "{:5}: {}", e.addr, e.text);
        }
    }
    buf
}
