//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that serves
//! as the single source of truth for all 6502 instruction information.
//!
//! The table covers:
//! - **151 documented opcodes** - the official NMOS 6502 instruction set
//! - **105 illegal opcodes** - the undocumented-but-reproducible remainder:
//!   stable combinations (SLO, RLA, SRE, RRA, LAX, SAX, DCP, ISC, ANC, ALR,
//!   ARR, SBX, USBC and the extra NOPs), the twelve JAM slots that halt the
//!   processor, and the seven unstable opcodes (ANE, LXA, SHA, SHX, SHY, TAS,
//!   LAS) that are present with documented metadata but trapped at execution.
//!
//! Each entry records the mnemonic, addressing mode, instruction size in bytes,
//! and base cycle cost (page-crossing penalties are added dynamically by the
//! handlers). Metadata for the illegal opcodes follows the public NMOS 6502
//! reference.

use crate::addressing::AddressingMode;

/// Instruction mnemonic.
///
/// One variant per distinct operation, documented or not. The execution loop
/// dispatches on this tag with an exhaustive `match`, so every opcode byte -
/// legal or illegal - has a defined behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    // Documented instruction set.
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx,
    Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay,
    Tsx, Txa, Txs, Tya,
    // Stable illegal opcodes.
    Slo, Rla, Sre, Rra, Sax, Lax, Dcp, Isc, Anc, Alr, Arr, Sbx, Usbc,
    // Illegal opcodes that halt the processor.
    Jam,
    // Unstable illegal opcodes; present in the table, trapped at execution.
    Ane, Lxa, Sha, Shx, Shy, Tas, Las,
}

impl Mnemonic {
    /// Conventional upper-case assembly name.
    pub fn name(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC", Mnemonic::And => "AND", Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC", Mnemonic::Bcs => "BCS", Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT", Mnemonic::Bmi => "BMI", Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL", Mnemonic::Brk => "BRK", Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS", Mnemonic::Clc => "CLC", Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI", Mnemonic::Clv => "CLV", Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX", Mnemonic::Cpy => "CPY", Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX", Mnemonic::Dey => "DEY", Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC", Mnemonic::Inx => "INX", Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP", Mnemonic::Jsr => "JSR", Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX", Mnemonic::Ldy => "LDY", Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP", Mnemonic::Ora => "ORA", Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP", Mnemonic::Pla => "PLA", Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL", Mnemonic::Ror => "ROR", Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS", Mnemonic::Sbc => "SBC", Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED", Mnemonic::Sei => "SEI", Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX", Mnemonic::Sty => "STY", Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY", Mnemonic::Tsx => "TSX", Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS", Mnemonic::Tya => "TYA", Mnemonic::Slo => "SLO",
            Mnemonic::Rla => "RLA", Mnemonic::Sre => "SRE", Mnemonic::Rra => "RRA",
            Mnemonic::Sax => "SAX", Mnemonic::Lax => "LAX", Mnemonic::Dcp => "DCP",
            Mnemonic::Isc => "ISC", Mnemonic::Anc => "ANC", Mnemonic::Alr => "ALR",
            Mnemonic::Arr => "ARR", Mnemonic::Sbx => "SBX", Mnemonic::Usbc => "USBC",
            Mnemonic::Jam => "JAM", Mnemonic::Ane => "ANE", Mnemonic::Lxa => "LXA",
            Mnemonic::Sha => "SHA", Mnemonic::Shx => "SHX", Mnemonic::Shy => "SHY",
            Mnemonic::Tas => "TAS", Mnemonic::Las => "LAS",
        }
    }

    /// True for the seven unstable illegal opcodes whose behavior depends on
    /// analog chip conditions. The execution loop traps these with
    /// `ExecutionError::UnstableOpcode` instead of modeling them.
    pub fn is_unstable(self) -> bool {
        matches!(
            self,
            Mnemonic::Ane
                | Mnemonic::Lxa
                | Mnemonic::Sha
                | Mnemonic::Shx
                | Mnemonic::Shy
                | Mnemonic::Tas
                | Mnemonic::Las
        )
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Metadata for a single 6502 opcode.
///
/// This struct contains all static information about an instruction needed
/// for decoding and execution planning.
///
/// # Examples
///
/// ```
/// use core6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert_eq!(lda_imm.base_cycles, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands).
    ///
    /// BRK is the one oddity: it is listed as 2 bytes because the byte after
    /// the opcode is consumed as padding and discarded.
    pub size_bytes: u8,

    /// Base cycle cost before page-crossing penalties.
    ///
    /// JAM opcodes carry 0 here; they never complete.
    pub base_cycles: u8,
}

const fn op(
    mnemonic: Mnemonic,
    addressing_mode: AddressingMode,
    size_bytes: u8,
    base_cycles: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        size_bytes,
        base_cycles,
    }
}

use self::Mnemonic::*;
use crate::addressing::AddressingMode::*;

/// Complete 256-entry opcode metadata table indexed by the raw opcode byte.
///
/// Every slot is populated: documented instructions with their reference
/// metadata, stable illegal opcodes with the timings observed in silicon,
/// JAM in the twelve dead slots, and the unstable seven with their documented
/// shapes (the execution loop refuses to run those).
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    op(Brk, Implied, 2, 7),     // 0x00
    op(Ora, IndirectX, 2, 6),   // 0x01
    op(Jam, Implied, 1, 0),     // 0x02
    op(Slo, IndirectX, 2, 8),   // 0x03
    op(Nop, ZeroPage, 2, 3),    // 0x04
    op(Ora, ZeroPage, 2, 3),    // 0x05
    op(Asl, ZeroPage, 2, 5),    // 0x06
    op(Slo, ZeroPage, 2, 5),    // 0x07
    op(Php, Implied, 1, 3),     // 0x08
    op(Ora, Immediate, 2, 2),   // 0x09
    op(Asl, Accumulator, 1, 2), // 0x0A
    op(Anc, Immediate, 2, 2),   // 0x0B
    op(Nop, Absolute, 3, 4),    // 0x0C
    op(Ora, Absolute, 3, 4),    // 0x0D
    op(Asl, Absolute, 3, 6),    // 0x0E
    op(Slo, Absolute, 3, 6),    // 0x0F
    op(Bpl, Relative, 2, 2),    // 0x10
    op(Ora, IndirectY, 2, 5),   // 0x11
    op(Jam, Implied, 1, 0),     // 0x12
    op(Slo, IndirectY, 2, 8),   // 0x13
    op(Nop, ZeroPageX, 2, 4),   // 0x14
    op(Ora, ZeroPageX, 2, 4),   // 0x15
    op(Asl, ZeroPageX, 2, 6),   // 0x16
    op(Slo, ZeroPageX, 2, 6),   // 0x17
    op(Clc, Implied, 1, 2),     // 0x18
    op(Ora, AbsoluteY, 3, 4),   // 0x19
    op(Nop, Implied, 1, 2),     // 0x1A
    op(Slo, AbsoluteY, 3, 7),   // 0x1B
    op(Nop, AbsoluteX, 3, 4),   // 0x1C
    op(Ora, AbsoluteX, 3, 4),   // 0x1D
    op(Asl, AbsoluteX, 3, 7),   // 0x1E
    op(Slo, AbsoluteX, 3, 7),   // 0x1F
    op(Jsr, Absolute, 3, 6),    // 0x20
    op(And, IndirectX, 2, 6),   // 0x21
    op(Jam, Implied, 1, 0),     // 0x22
    op(Rla, IndirectX, 2, 8),   // 0x23
    op(Bit, ZeroPage, 2, 3),    // 0x24
    op(And, ZeroPage, 2, 3),    // 0x25
    op(Rol, ZeroPage, 2, 5),    // 0x26
    op(Rla, ZeroPage, 2, 5),    // 0x27
    op(Plp, Implied, 1, 4),     // 0x28
    op(And, Immediate, 2, 2),   // 0x29
    op(Rol, Accumulator, 1, 2), // 0x2A
    op(Anc, Immediate, 2, 2),   // 0x2B
    op(Bit, Absolute, 3, 4),    // 0x2C
    op(And, Absolute, 3, 4),    // 0x2D
    op(Rol, Absolute, 3, 6),    // 0x2E
    op(Rla, Absolute, 3, 6),    // 0x2F
    op(Bmi, Relative, 2, 2),    // 0x30
    op(And, IndirectY, 2, 5),   // 0x31
    op(Jam, Implied, 1, 0),     // 0x32
    op(Rla, IndirectY, 2, 8),   // 0x33
    op(Nop, ZeroPageX, 2, 4),   // 0x34
    op(And, ZeroPageX, 2, 4),   // 0x35
    op(Rol, ZeroPageX, 2, 6),   // 0x36
    op(Rla, ZeroPageX, 2, 6),   // 0x37
    op(Sec, Implied, 1, 2),     // 0x38
    op(And, AbsoluteY, 3, 4),   // 0x39
    op(Nop, Implied, 1, 2),     // 0x3A
    op(Rla, AbsoluteY, 3, 7),   // 0x3B
    op(Nop, AbsoluteX, 3, 4),   // 0x3C
    op(And, AbsoluteX, 3, 4),   // 0x3D
    op(Rol, AbsoluteX, 3, 7),   // 0x3E
    op(Rla, AbsoluteX, 3, 7),   // 0x3F
    op(Rti, Implied, 1, 6),     // 0x40
    op(Eor, IndirectX, 2, 6),   // 0x41
    op(Jam, Implied, 1, 0),     // 0x42
    op(Sre, IndirectX, 2, 8),   // 0x43
    op(Nop, ZeroPage, 2, 3),    // 0x44
    op(Eor, ZeroPage, 2, 3),    // 0x45
    op(Lsr, ZeroPage, 2, 5),    // 0x46
    op(Sre, ZeroPage, 2, 5),    // 0x47
    op(Pha, Implied, 1, 3),     // 0x48
    op(Eor, Immediate, 2, 2),   // 0x49
    op(Lsr, Accumulator, 1, 2), // 0x4A
    op(Alr, Immediate, 2, 2),   // 0x4B
    op(Jmp, Absolute, 3, 3),    // 0x4C
    op(Eor, Absolute, 3, 4),    // 0x4D
    op(Lsr, Absolute, 3, 6),    // 0x4E
    op(Sre, Absolute, 3, 6),    // 0x4F
    op(Bvc, Relative, 2, 2),    // 0x50
    op(Eor, IndirectY, 2, 5),   // 0x51
    op(Jam, Implied, 1, 0),     // 0x52
    op(Sre, IndirectY, 2, 8),   // 0x53
    op(Nop, ZeroPageX, 2, 4),   // 0x54
    op(Eor, ZeroPageX, 2, 4),   // 0x55
    op(Lsr, ZeroPageX, 2, 6),   // 0x56
    op(Sre, ZeroPageX, 2, 6),   // 0x57
    op(Cli, Implied, 1, 2),     // 0x58
    op(Eor, AbsoluteY, 3, 4),   // 0x59
    op(Nop, Implied, 1, 2),     // 0x5A
    op(Sre, AbsoluteY, 3, 7),   // 0x5B
    op(Nop, AbsoluteX, 3, 4),   // 0x5C
    op(Eor, AbsoluteX, 3, 4),   // 0x5D
    op(Lsr, AbsoluteX, 3, 7),   // 0x5E
    op(Sre, AbsoluteX, 3, 7),   // 0x5F
    op(Rts, Implied, 1, 6),     // 0x60
    op(Adc, IndirectX, 2, 6),   // 0x61
    op(Jam, Implied, 1, 0),     // 0x62
    op(Rra, IndirectX, 2, 8),   // 0x63
    op(Nop, ZeroPage, 2, 3),    // 0x64
    op(Adc, ZeroPage, 2, 3),    // 0x65
    op(Ror, ZeroPage, 2, 5),    // 0x66
    op(Rra, ZeroPage, 2, 5),    // 0x67
    op(Pla, Implied, 1, 4),     // 0x68
    op(Adc, Immediate, 2, 2),   // 0x69
    op(Ror, Accumulator, 1, 2), // 0x6A
    op(Arr, Immediate, 2, 2),   // 0x6B
    op(Jmp, Indirect, 3, 5),    // 0x6C
    op(Adc, Absolute, 3, 4),    // 0x6D
    op(Ror, Absolute, 3, 6),    // 0x6E
    op(Rra, Absolute, 3, 6),    // 0x6F
    op(Bvs, Relative, 2, 2),    // 0x70
    op(Adc, IndirectY, 2, 5),   // 0x71
    op(Jam, Implied, 1, 0),     // 0x72
    op(Rra, IndirectY, 2, 8),   // 0x73
    op(Nop, ZeroPageX, 2, 4),   // 0x74
    op(Adc, ZeroPageX, 2, 4),   // 0x75
    op(Ror, ZeroPageX, 2, 6),   // 0x76
    op(Rra, ZeroPageX, 2, 6),   // 0x77
    op(Sei, Implied, 1, 2),     // 0x78
    op(Adc, AbsoluteY, 3, 4),   // 0x79
    op(Nop, Implied, 1, 2),     // 0x7A
    op(Rra, AbsoluteY, 3, 7),   // 0x7B
    op(Nop, AbsoluteX, 3, 4),   // 0x7C
    op(Adc, AbsoluteX, 3, 4),   // 0x7D
    op(Ror, AbsoluteX, 3, 7),   // 0x7E
    op(Rra, AbsoluteX, 3, 7),   // 0x7F
    op(Nop, Immediate, 2, 2),   // 0x80
    op(Sta, IndirectX, 2, 6),   // 0x81
    op(Nop, Immediate, 2, 2),   // 0x82
    op(Sax, IndirectX, 2, 6),   // 0x83
    op(Sty, ZeroPage, 2, 3),    // 0x84
    op(Sta, ZeroPage, 2, 3),    // 0x85
    op(Stx, ZeroPage, 2, 3),    // 0x86
    op(Sax, ZeroPage, 2, 3),    // 0x87
    op(Dey, Implied, 1, 2),     // 0x88
    op(Nop, Immediate, 2, 2),   // 0x89
    op(Txa, Implied, 1, 2),     // 0x8A
    op(Ane, Immediate, 2, 2),   // 0x8B
    op(Sty, Absolute, 3, 4),    // 0x8C
    op(Sta, Absolute, 3, 4),    // 0x8D
    op(Stx, Absolute, 3, 4),    // 0x8E
    op(Sax, Absolute, 3, 4),    // 0x8F
    op(Bcc, Relative, 2, 2),    // 0x90
    op(Sta, IndirectY, 2, 6),   // 0x91
    op(Jam, Implied, 1, 0),     // 0x92
    op(Sha, IndirectY, 2, 6),   // 0x93
    op(Sty, ZeroPageX, 2, 4),   // 0x94
    op(Sta, ZeroPageX, 2, 4),   // 0x95
    op(Stx, ZeroPageY, 2, 4),   // 0x96
    op(Sax, ZeroPageY, 2, 4),   // 0x97
    op(Tya, Implied, 1, 2),     // 0x98
    op(Sta, AbsoluteY, 3, 5),   // 0x99
    op(Txs, Implied, 1, 2),     // 0x9A
    op(Tas, AbsoluteY, 3, 5),   // 0x9B
    op(Shy, AbsoluteX, 3, 5),   // 0x9C
    op(Sta, AbsoluteX, 3, 5),   // 0x9D
    op(Shx, AbsoluteY, 3, 5),   // 0x9E
    op(Sha, AbsoluteY, 3, 5),   // 0x9F
    op(Ldy, Immediate, 2, 2),   // 0xA0
    op(Lda, IndirectX, 2, 6),   // 0xA1
    op(Ldx, Immediate, 2, 2),   // 0xA2
    op(Lax, IndirectX, 2, 6),   // 0xA3
    op(Ldy, ZeroPage, 2, 3),    // 0xA4
    op(Lda, ZeroPage, 2, 3),    // 0xA5
    op(Ldx, ZeroPage, 2, 3),    // 0xA6
    op(Lax, ZeroPage, 2, 3),    // 0xA7
    op(Tay, Implied, 1, 2),     // 0xA8
    op(Lda, Immediate, 2, 2),   // 0xA9
    op(Tax, Implied, 1, 2),     // 0xAA
    op(Lxa, Immediate, 2, 2),   // 0xAB
    op(Ldy, Absolute, 3, 4),    // 0xAC
    op(Lda, Absolute, 3, 4),    // 0xAD
    op(Ldx, Absolute, 3, 4),    // 0xAE
    op(Lax, Absolute, 3, 4),    // 0xAF
    op(Bcs, Relative, 2, 2),    // 0xB0
    op(Lda, IndirectY, 2, 5),   // 0xB1
    op(Jam, Implied, 1, 0),     // 0xB2
    op(Lax, IndirectY, 2, 5),   // 0xB3
    op(Ldy, ZeroPageX, 2, 4),   // 0xB4
    op(Lda, ZeroPageX, 2, 4),   // 0xB5
    op(Ldx, ZeroPageY, 2, 4),   // 0xB6
    op(Lax, ZeroPageY, 2, 4),   // 0xB7
    op(Clv, Implied, 1, 2),     // 0xB8
    op(Lda, AbsoluteY, 3, 4),   // 0xB9
    op(Tsx, Implied, 1, 2),     // 0xBA
    op(Las, AbsoluteY, 3, 4),   // 0xBB
    op(Ldy, AbsoluteX, 3, 4),   // 0xBC
    op(Lda, AbsoluteX, 3, 4),   // 0xBD
    op(Ldx, AbsoluteY, 3, 4),   // 0xBE
    op(Lax, AbsoluteY, 3, 4),   // 0xBF
    op(Cpy, Immediate, 2, 2),   // 0xC0
    op(Cmp, IndirectX, 2, 6),   // 0xC1
    op(Nop, Immediate, 2, 2),   // 0xC2
    op(Dcp, IndirectX, 2, 8),   // 0xC3
    op(Cpy, ZeroPage, 2, 3),    // 0xC4
    op(Cmp, ZeroPage, 2, 3),    // 0xC5
    op(Dec, ZeroPage, 2, 5),    // 0xC6
    op(Dcp, ZeroPage, 2, 5),    // 0xC7
    op(Iny, Implied, 1, 2),     // 0xC8
    op(Cmp, Immediate, 2, 2),   // 0xC9
    op(Dex, Implied, 1, 2),     // 0xCA
    op(Sbx, Immediate, 2, 2),   // 0xCB
    op(Cpy, Absolute, 3, 4),    // 0xCC
    op(Cmp, Absolute, 3, 4),    // 0xCD
    op(Dec, Absolute, 3, 6),    // 0xCE
    op(Dcp, Absolute, 3, 6),    // 0xCF
    op(Bne, Relative, 2, 2),    // 0xD0
    op(Cmp, IndirectY, 2, 5),   // 0xD1
    op(Jam, Implied, 1, 0),     // 0xD2
    op(Dcp, IndirectY, 2, 8),   // 0xD3
    op(Nop, ZeroPageX, 2, 4),   // 0xD4
    op(Cmp, ZeroPageX, 2, 4),   // 0xD5
    op(Dec, ZeroPageX, 2, 6),   // 0xD6
    op(Dcp, ZeroPageX, 2, 6),   // 0xD7
    op(Cld, Implied, 1, 2),     // 0xD8
    op(Cmp, AbsoluteY, 3, 4),   // 0xD9
    op(Nop, Implied, 1, 2),     // 0xDA
    op(Dcp, AbsoluteY, 3, 7),   // 0xDB
    op(Nop, AbsoluteX, 3, 4),   // 0xDC
    op(Cmp, AbsoluteX, 3, 4),   // 0xDD
    op(Dec, AbsoluteX, 3, 7),   // 0xDE
    op(Dcp, AbsoluteX, 3, 7),   // 0xDF
    op(Cpx, Immediate, 2, 2),   // 0xE0
    op(Sbc, IndirectX, 2, 6),   // 0xE1
    op(Nop, Immediate, 2, 2),   // 0xE2
    op(Isc, IndirectX, 2, 8),   // 0xE3
    op(Cpx, ZeroPage, 2, 3),    // 0xE4
    op(Sbc, ZeroPage, 2, 3),    // 0xE5
    op(Inc, ZeroPage, 2, 5),    // 0xE6
    op(Isc, ZeroPage, 2, 5),    // 0xE7
    op(Inx, Implied, 1, 2),     // 0xE8
    op(Sbc, Immediate, 2, 2),   // 0xE9
    op(Nop, Implied, 1, 2),     // 0xEA
    op(Usbc, Immediate, 2, 2),  // 0xEB
    op(Cpx, Absolute, 3, 4),    // 0xEC
    op(Sbc, Absolute, 3, 4),    // 0xED
    op(Inc, Absolute, 3, 6),    // 0xEE
    op(Isc, Absolute, 3, 6),    // 0xEF
    op(Beq, Relative, 2, 2),    // 0xF0
    op(Sbc, IndirectY, 2, 5),   // 0xF1
    op(Jam, Implied, 1, 0),     // 0xF2
    op(Isc, IndirectY, 2, 8),   // 0xF3
    op(Nop, ZeroPageX, 2, 4),   // 0xF4
    op(Sbc, ZeroPageX, 2, 4),   // 0xF5
    op(Inc, ZeroPageX, 2, 6),   // 0xF6
    op(Isc, ZeroPageX, 2, 6),   // 0xF7
    op(Sed, Implied, 1, 2),     // 0xF8
    op(Sbc, AbsoluteY, 3, 4),   // 0xF9
    op(Nop, Implied, 1, 2),     // 0xFA
    op(Isc, AbsoluteY, 3, 7),   // 0xFB
    op(Nop, AbsoluteX, 3, 4),   // 0xFC
    op(Sbc, AbsoluteX, 3, 4),   // 0xFD
    op(Inc, AbsoluteX, 3, 7),   // 0xFE
    op(Isc, AbsoluteX, 3, 7),   // 0xFF
];
