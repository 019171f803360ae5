use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Operand placeholder used by [`COMP_TABLE`]; stands for either `A` or `M`.
pub const OPERAND: char = 'X';

/// Marker that selects the indirect (memory) operand.
pub const MEMORY: char = 'M';

/// Marker that selects the direct (register) operand.
pub const REGISTER: char = 'A';

bitflags! {
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dest: u16 {
const A = 0b100;
const D = 0b010;
const M = 0b001;
}
}

impl Dest {
    pub fn from_mnemonic(c: char) -> Option<Self> {
        match c {
            'A' => Some(Dest::A),
            'D' => Some(Dest::D),
            'M' => Some(Dest::M),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CompDesc {
    pub mnemonic: &'static str,
    pub code: u16,
}

pub const COMP_TABLE: &[CompDesc] = &[
    CompDesc { mnemonic: "0", code: 0b101010 },
    CompDesc { mnemonic: "1", code: 0b111111 },
    CompDesc { mnemonic: "-1", code: 0b111010 },
    CompDesc { mnemonic: "D", code: 0b001100 },
    CompDesc { mnemonic: "X", code: 0b110000 },
    CompDesc { mnemonic: "!D", code: 0b001101 },
    CompDesc { mnemonic: "!X", code: 0b110001 },
    CompDesc { mnemonic: "-D", code: 0b001111 },
    CompDesc { mnemonic: "-X", code: 0b110011 },
    CompDesc { mnemonic: "D+1", code: 0b011111 },
    CompDesc { mnemonic: "X+1", code: 0b110111 },
    CompDesc { mnemonic: "D-1", code: 0b001110 },
    CompDesc { mnemonic: "X-1", code: 0b110010 },
    CompDesc { mnemonic: "D+X", code: 0b000010 },
    CompDesc { mnemonic: "D-X", code: 0b010011 },
    CompDesc { mnemonic: "X-D", code: 0b000111 },
    CompDesc { mnemonic: "D&X", code: 0b000000 },
    CompDesc { mnemonic: "D|X", code: 0b010101 },
];

#[derive(Debug, Clone, Copy)]
pub struct JumpDesc {
    pub mnemonic: &'static str,
    pub code: u16,
}

pub const JUMP_TABLE: &[JumpDesc] = &[
    JumpDesc { mnemonic: "JGT", code: 0b001 },
    JumpDesc { mnemonic: "JEQ", code: 0b010 },
    JumpDesc { mnemonic: "JGE", code: 0b011 },
    JumpDesc { mnemonic: "JLT", code: 0b100 },
    JumpDesc { mnemonic: "JNE", code: 0b101 },
    JumpDesc { mnemonic: "JLE", code: 0b110 },
    JumpDesc { mnemonic: "JMP", code: 0b111 },
];

/// Named addresses other than `R0`..`R15`.
pub const PREDEFINED: &[(&str, u32)] = &[
    ("SP", 0),
    ("LCL", 1),
    ("ARG", 2),
    ("THIS", 3),
    ("THAT", 4),
    ("SCREEN", 32640),
    ("KBD", 32767),
];

/// Number of `R<n>` register aliases.
pub const REGISTER_COUNT: u32 = 16;

pub fn comp_code(canonical: &str) -> Option<u16> {
    COMP_TABLE
        .iter()
        .find(|d| d.mnemonic == canonical)
        .map(|d| d.code)
}

pub fn comp_mnemonic(code: u16) -> Option<&'static str> {
    COMP_TABLE.iter().find(|d| d.code == code).map(|d| d.mnemonic)
}

pub fn jump_code(mnemonic: &str) -> Option<u16> {
    JUMP_TABLE
        .iter()
        .find(|d| d.mnemonic == mnemonic)
        .map(|d| d.code)
}

pub fn jump_mnemonic(code: u16) -> Option<&'static str> {
    JUMP_TABLE.iter().find(|d| d.code == code).map(|d| d.mnemonic)
}
