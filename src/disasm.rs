use crate::decoder::Decoded;
use crate::tables::{Dest, MEMORY, OPERAND, REGISTER};

/// Render a decoded word as source text the assembler accepts.
pub fn fmt_decoded(d: &Decoded) -> String {
    match *d {
        Decoded::Address(n) => format!("@{n}"),
        Decoded::Compute { memory, comp, dest, jump } => {
            let operand = if memory { MEMORY } else { REGISTER };
            let comp: String = comp.chars().map(|c| if c == OPERAND { operand } else { c }).collect();
            let mut s = dest_str(dest);
            if !s.is_empty() {
                s.push('=');
            }
            s.push_str(&comp);
            if let Some(j) = jump {
                s.push(';');
                s.push_str(j);
            }
            s
        }
    }
}

fn dest_str(dest: Dest) -> String {
    [(Dest::A, 'A'), (Dest::D, 'D'), (Dest::M, 'M')]
        .iter()
        .filter(|(flag, _)| dest.contains(*flag))
        .map(|&(_, c)| c)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_compute() {
        let d = Decoded::Compute { memory: true, comp: "X-1", dest: Dest::A | Dest::M, jump: Some("JNE") };
        assert_eq!(fmt_decoded(&d), "AM=M-1;JNE");
        let d = Decoded::Compute { memory: false, comp: "D|X", dest: Dest::D, jump: None };
        assert_eq!(fmt_decoded(&d), "D=D|A");
        assert_eq!(fmt_decoded(&Decoded::Address(32767)), "@32767");
    }
}
