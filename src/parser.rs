use serde::{Deserialize, Serialize};

/// Start of a comment; everything after it on the line is dropped.
pub const COMMENT: &str = "//";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// `@target`: decimal literal or symbol name.
    Address { target: String },
    /// `[dest=]comp[;jump]`; `dest` and `jump` may be empty.
    Compute { dest: String, comp: String, jump: String },
}

/// A normalized, non-empty source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `(name)`; the name may be empty, callers reject that.
    Label(&'a str),
    Instr(&'a str),
}

/// Strip the comment and every whitespace character from a raw line.
pub fn clean_line(raw: &str) -> String {
    let code = match raw.find(COMMENT) {
        Some(p) => &raw[..p],
        None => raw,
    };
    code.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn classify(clean: &str) -> Option<Line<'_>> {
    if clean.is_empty() {
        return None;
    }
    match clean.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        Some(name) => Some(Line::Label(name)),
        None => Some(Line::Instr(clean)),
    }
}

/// Split a clean, non-label line into its fields. Mnemonics are not
/// validated here.
pub fn parse(line: &str) -> Instruction {
    if let Some(target) = line.strip_prefix('@') {
        return Instruction::Address { target: target.to_string() };
    }
    let (dest, rest) = line.split_once('=').unwrap_or(("", line));
    let (comp, jump) = rest.split_once(';').unwrap_or((rest, ""));
    Instruction::Compute {
        dest: dest.to_string(),
        comp: comp.to_string(),
        jump: jump.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compute(dest: &str, comp: &str, jump: &str) -> Instruction {
        Instruction::Compute { dest: dest.into(), comp: comp.into(), jump: jump.into() }
    }

    #[test]
    fn clean_strips_comments_and_spaces() {
        assert_eq!(clean_line("  D = M + 1 ; JGT // bump"), "D=M+1;JGT");
        assert_eq!(clean_line("// only a comment"), "");
        assert_eq!(clean_line("\t @ R2\r"), "@R2");
        assert_eq!(clean_line(""), "");
    }

    #[test]
    fn classify_labels() {
        assert_eq!(classify("(LOOP)"), Some(Line::Label("LOOP")));
        assert_eq!(classify("()"), Some(Line::Label("")));
        assert_eq!(classify("(LOOP"), Some(Line::Instr("(LOOP")));
        assert_eq!(classify(""), None);
    }

    #[test]
    fn parse_shapes() {
        assert_eq!(parse("@17"), Instruction::Address { target: "17".into() });
        assert_eq!(parse("@i"), Instruction::Address { target: "i".into() });
        assert_eq!(parse("D=M"), compute("D", "M", ""));
        assert_eq!(parse("0;JMP"), compute("", "0", "JMP"));
        assert_eq!(parse("AM=M-1;JNE"), compute("AM", "M-1", "JNE"));
        assert_eq!(parse("D;"), compute("", "D", ""));
        assert_eq!(parse("D+1"), compute("", "D+1", ""));
    }
}
