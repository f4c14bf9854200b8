//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor.
//! Each mode determines how the CPU interprets operand bytes and calculates
//! effective addresses.

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by the instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in the instruction itself.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in the zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X; wraps within the zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y; wraps within the zero page.
    ///
    /// Example: LDX $80,Y (LDX/STX and the illegal LAX/SAX only)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the address
    /// of the next instruction.
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X.
    ///
    /// May incur a +1 cycle penalty on read instructions when the index
    /// carries into the high address byte.
    AbsoluteX,

    /// 16-bit address indexed by Y.
    ///
    /// Same page-crossing penalty rule as `AbsoluteX`.
    AbsoluteY,

    /// Indirect jump through a 16-bit pointer. Only used by JMP.
    ///
    /// The pointer read reproduces the NMOS page-boundary bug: the high byte
    /// never carries into the next page.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y. May incur the page-crossing penalty.
    IndirectY,
}

/// The outcome of resolving an addressing mode against the current CPU state.
///
/// `addr` is the effective address the instruction operates on (for
/// `Immediate` it is the address of the operand byte itself; for `Relative`
/// it is the branch target). `page_crossed` is true when the high byte of
/// the final address differs from the high byte of the pre-index base, which
/// costs read instructions one extra cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAddress {
    /// Effective address of the operand.
    pub addr: u16,
    /// Whether index arithmetic carried into the high address byte.
    pub page_crossed: bool,
}
