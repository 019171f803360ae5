use std::fmt::Write as _;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First line of a hex memory image.
pub const RAW_HEADER: &str = "v2.0 raw";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `v2.0 raw` header, then 4-digit uppercase hex words
    #[default]
    Raw,
    /// One 16-character binary string per line
    Hack,
}

pub fn render(words: &[u16], format: OutputFormat) -> String {
    match format {
        OutputFormat::Raw => render_raw(words),
        OutputFormat::Hack => render_hack(words),
    }
}

/// Every word is followed by a single space, the last one included.
pub fn render_raw(words: &[u16]) -> String {
    let mut out = String::with_capacity(RAW_HEADER.len() + 1 + words.len() * 5);
    out.push_str(RAW_HEADER);
    out.push('\n');
    for w in words {
        let _ = write!(out, "{w:04X} ");
    }
    out
}

pub fn render_hack(words: &[u16]) -> String {
    let mut out = String::with_capacity(words.len() * 17);
    for w in words {
        let _ = writeln!(out, "{w:016b}");
    }
    out
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("missing `v2.0 raw` header")]
    MissingHeader,
    #[error("bad word `{token}` at index {index}")]
    BadWord { index: usize, token: String },
}

/// Read a hex image produced by [`render_raw`].
pub fn parse_raw_image(text: &str) -> Result<Vec<u16>, ImageError> {
    let mut lines = text.lines();
    match lines.next() {
        Some(h) if h.trim() == RAW_HEADER => {}
        _ => return Err(ImageError::MissingHeader),
    }
    let mut words = Vec::new();
    for (index, token) in lines.flat_map(str::split_whitespace).enumerate() {
        let ok = (1..=4).contains(&token.len()) && token.chars().all(|c| c.is_ascii_hexdigit());
        let word = ok
            .then(|| u16::from_str_radix(token, 16).ok())
            .flatten()
            .ok_or_else(|| ImageError::BadWord { index, token: token.to_string() })?;
        words.push(word);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn raw_layout() {
        assert_eq!(render_raw(&[0x0000, 0xEA87]), "v2.0 raw\n0000 EA87 ");
        assert_eq!(render_raw(&[]), "v2.0 raw\n");
    }

    #[test]
    fn hack_layout() {
        assert_eq!(
            render(&[0x0002, 0xEA87], OutputFormat::Hack),
            "0000000000000010\n1110101010000111\n"
        );
    }

    #[test]
    fn raw_image_reads_back() {
        let text = render_raw(&[0x0010, 0xFC10, 0x7FFF]);
        assert_eq!(parse_raw_image(&text).unwrap(), vec![0x0010, 0xFC10, 0x7FFF]);
        assert_eq!(parse_raw_image("0000 EA87"), Err(ImageError::MissingHeader));
        assert_eq!(
            parse_raw_image("v2.0 raw\n0000 G1\n"),
            Err(ImageError::BadWord { index: 1, token: "G1".into() })
        );
    }
}
