//! # Load and Store Instructions
//!
//! - LDA, LDX, LDY: load a register from memory, setting Z and N
//! - STA, STX, STY: store a register to memory, touching no flags
//!
//! Loads take the page-crossing penalty on indexed modes; stores never do
//! (their base cycle counts already include the fix-up cycle).

use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// LDA - Load Accumulator. Sets Z and N from the loaded value.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode);

    cpu.a = value;
    cpu.set_zn(value);

    cpu.cycles += metadata.base_cycles as u64 + page_crossed as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// LDX - Load X Register. Sets Z and N from the loaded value.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode);

    cpu.x = value;
    cpu.set_zn(value);

    cpu.cycles += metadata.base_cycles as u64 + page_crossed as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// LDY - Load Y Register. Sets Z and N from the loaded value.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode);

    cpu.y = value;
    cpu.set_zn(value);

    cpu.cycles += metadata.base_cycles as u64 + page_crossed as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// STA - Store Accumulator. No flags affected, no page-cross penalty.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let resolved = cpu.resolve_address(metadata.addressing_mode);

    cpu.memory.write(resolved.addr, cpu.a);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// STX - Store X Register. No flags affected.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let resolved = cpu.resolve_address(metadata.addressing_mode);

    cpu.memory.write(resolved.addr, cpu.x);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// STY - Store Y Register. No flags affected.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let resolved = cpu.resolve_address(metadata.addressing_mode);

    cpu.memory.write(resolved.addr, cpu.y);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}
