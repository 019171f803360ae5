use serde::Serialize;

use crate::encoder::COMPUTE_PREFIX;
use crate::tables::{self, Dest, OPERAND};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Decoded {
    Address(u16),
    Compute {
        /// Selector bit: the operand is `M` rather than `A`.
        memory: bool,
        comp: &'static str,
        dest: Dest,
        jump: Option<&'static str>,
    },
}

pub trait Decoder {
    fn decode(&self, word: u16) -> Option<Decoded>;
}

pub struct HackDecoder;

impl HackDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HackDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for HackDecoder {
    fn decode(&self, word: u16) -> Option<Decoded> {
        if word & 0x8000 == 0 {
            return Some(Decoded::Address(word));
        }
        if word >> 13 != COMPUTE_PREFIX {
            return None;
        }
        let memory = (word >> 12) & 1 == 1;
        let comp = tables::comp_mnemonic((word >> 6) & 0x3F)?;
        // selector bit set on an operand-free computation has no source form
        if memory && !comp.contains(OPERAND) {
            return None;
        }
        let dest = Dest::from_bits_truncate((word >> 3) & 0x7);
        let jump = tables::jump_mnemonic(word & 0x7);
        Some(Decoded::Compute { memory, comp, dest, jump })
    }
}
