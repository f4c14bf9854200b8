//! # Control Flow Instructions
//!
//! JMP (absolute and bugged indirect), JSR/RTS, BRK/RTI, and NOP - both the
//! documented 0xEA and the illegal variants that carry an addressing mode.
//!
//! The JSR/RTS pair agrees on an off-by-one convention: JSR pushes the
//! address of its own last byte, and RTS adds 1 after popping. BRK and RTI
//! do NOT share that convention - RTI resumes at exactly the popped address.

use crate::addressing::AddressingMode;
use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// JMP - set PC to the resolved target.
///
/// The indirect form goes through `read16_wrapped`, reproducing the NMOS
/// page-boundary bug: `JMP ($12FF)` fetches its high byte from `$1200`.
pub(crate) fn jmp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let resolved = cpu.resolve_address(metadata.addressing_mode);

    cpu.pc = resolved.addr;
    cpu.cycles += metadata.base_cycles as u64;
}

/// JSR - Jump to Subroutine.
///
/// Pushes `PC + 2`, the address of the last byte of the 3-byte JSR
/// instruction, then jumps. RTS undoes the off-by-one.
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let target = cpu.resolve_address(metadata.addressing_mode).addr;

    let return_addr = cpu.pc.wrapping_add(2);
    cpu.push16(return_addr);
    cpu.pc = target;

    cpu.cycles += metadata.base_cycles as u64;
}

/// RTS - Return from Subroutine: pop an address and resume one past it.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.pc = cpu.pop16().wrapping_add(1);
    cpu.cycles += metadata.base_cycles as u64;
}

/// BRK - Force Interrupt.
///
/// BRK is a 2-byte instruction: the byte after the opcode is a padding byte
/// the hardware fetches and discards. The pushed return address is the byte
/// after that padding. The status byte goes onto the stack with B and bit 5
/// set, I is set, and execution vectors through 0xFFFE/0xFFFF.
pub(crate) fn brk<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let return_addr = cpu.pc.wrapping_add(2);
    cpu.push16(return_addr);

    let status = cpu.status() | 0b0011_0000;
    cpu.push(status);

    cpu.flag_i = true;
    cpu.pc = cpu.memory.read16(0xFFFE);

    cpu.cycles += metadata.base_cycles as u64;
}

/// RTI - Return from Interrupt.
///
/// Pops the status byte (B discarded, bit 5 has no storage), then the
/// return address. Unlike RTS there is no +1 adjustment: interrupts push
/// the exact resume address.
pub(crate) fn rti<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let status = cpu.pop();
    cpu.set_status(status);
    cpu.flag_b = false;

    cpu.pc = cpu.pop16();
    cpu.cycles += metadata.base_cycles as u64;
}

/// NOP - No Operation.
///
/// The documented 0xEA does nothing for 2 cycles. The illegal NOPs carry a
/// real addressing mode: they perform the operand read (observable through
/// a memory-mapped bus) and the absolute,X forms pay the page-crossing
/// penalty like any other read.
pub(crate) fn nop<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let mut cycles = metadata.base_cycles as u64;

    if metadata.addressing_mode != AddressingMode::Implied {
        let (_, page_crossed) = cpu.operand_value(metadata.addressing_mode);
        cycles += page_crossed as u64;
    }

    cpu.cycles += cycles;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}
