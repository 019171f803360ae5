use std::fmt;

use crate::error::{AsmError, Result};
use crate::tables::{self, Dest, MEMORY, OPERAND, REGISTER};

/// Largest value an address instruction can load.
pub const MAX_ADDRESS: u32 = 0x7FFF;

/// Bits 15..13 of every compute instruction.
pub const COMPUTE_PREFIX: u16 = 0b111;

/// One instruction field, ready to be encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    Address(u32),
    Dest(&'a str),
    Comp(&'a str),
    Jump(&'a str),
}

/// An encoded field: `width` low bits of `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bits {
    pub value: u16,
    pub width: u8,
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.value, width = self.width as usize)
    }
}

pub fn encode(field: Field<'_>) -> Result<Bits> {
    match field {
        Field::Address(n) => encode_address(n),
        Field::Dest(s) => encode_dest(s),
        Field::Comp(s) => encode_comp(s),
        Field::Jump(s) => encode_jump(s),
    }
}

/// 16-bit address word; bit 15 is always clear.
pub fn encode_address(n: u32) -> Result<Bits> {
    if n > MAX_ADDRESS {
        return Err(AsmError::InvalidAddress(n.to_string()));
    }
    Ok(Bits { value: n as u16, width: 16 })
}

pub fn encode_dest(dest: &str) -> Result<Bits> {
    let mut bits = Dest::empty();
    for c in dest.chars() {
        let flag = Dest::from_mnemonic(c)
            .ok_or_else(|| AsmError::InvalidDestination(dest.to_string()))?;
        if bits.contains(flag) {
            return Err(AsmError::InvalidDestination(dest.to_string()));
        }
        bits |= flag;
    }
    Ok(Bits { value: bits.bits(), width: 3 })
}

/// Selector bit followed by the 6-bit ALU code.
pub fn encode_comp(comp: &str) -> Result<Bits> {
    let selector = u16::from(comp.contains(MEMORY));
    let canonical: String = comp
        .chars()
        .map(|c| if c == MEMORY || c == REGISTER { OPERAND } else { c })
        .collect();
    let code = tables::comp_code(&canonical)
        .ok_or_else(|| AsmError::InvalidComputation(comp.to_string()))?;
    Ok(Bits { value: (selector << 6) | code, width: 7 })
}

pub fn encode_jump(jump: &str) -> Result<Bits> {
    if jump.is_empty() {
        return Ok(Bits { value: 0, width: 3 });
    }
    let code = tables::jump_code(jump).ok_or_else(|| AsmError::InvalidJump(jump.to_string()))?;
    Ok(Bits { value: code, width: 3 })
}

/// Full compute word. Fields are encoded in comp, dest, jump order so the
/// first malformed one is reported.
pub fn encode_compute(dest: &str, comp: &str, jump: &str) -> Result<u16> {
    let comp = encode(Field::Comp(comp))?;
    let dest = encode(Field::Dest(dest))?;
    let jump = encode(Field::Jump(jump))?;
    Ok((COMPUTE_PREFIX << 13) | (comp.value << 6) | (dest.value << 3) | jump.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_render_zero_padded() {
        assert_eq!(encode_address(5).unwrap().to_string(), "0000000000000101");
        assert_eq!(encode_dest("M").unwrap().to_string(), "001");
        assert_eq!(encode_comp("M").unwrap().to_string(), "1110000");
        assert_eq!(encode_comp("0").unwrap().to_string(), "0101010");
        assert_eq!(encode_jump("").unwrap().to_string(), "000");
    }

    #[test]
    fn address_range() {
        assert_eq!(encode(Field::Address(32767)).unwrap().value, 0x7FFF);
        assert_eq!(encode(Field::Address(32768)), Err(AsmError::InvalidAddress("32768".into())));
    }

    #[test]
    fn dest_rejects_repeats_and_unknowns() {
        assert_eq!(encode_dest("AMD").unwrap().value, 0b111);
        assert_eq!(encode_dest("DDA"), Err(AsmError::InvalidDestination("DDA".into())));
        assert_eq!(encode_dest("X"), Err(AsmError::InvalidDestination("X".into())));
    }

    #[test]
    fn comp_selector_bit_follows_operand() {
        assert_eq!(encode_comp("D+A").unwrap().value, 0b0_000010);
        assert_eq!(encode_comp("D+M").unwrap().value, 0b1_000010);
        assert_eq!(encode_comp("M+D"), Err(AsmError::InvalidComputation("M+D".into())));
        assert_eq!(encode_comp("X"), encode_comp("A"));
    }

    #[test]
    fn compute_word_layout() {
        assert_eq!(encode_compute("", "0", "JMP").unwrap(), 0xEA87);
        assert_eq!(encode_compute("D", "M", "").unwrap(), 0b1111_1100_0001_0000);
        assert_eq!(encode_compute("Q", "Z", "JXX"), Err(AsmError::InvalidComputation("Z".into())));
    }
}
