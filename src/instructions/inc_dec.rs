//! # Increment and Decrement Instructions
//!
//! INC/DEC are read-modify-write on memory; INX/INY/DEX/DEY operate on the
//! index registers. All wrap modulo 256 and set Z/N from the result. The
//! memory forms use fixed cycle counts - RMW instructions never take the
//! page-crossing penalty.

use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// INC - Increment Memory.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let resolved = cpu.resolve_address(metadata.addressing_mode);

    let result = cpu.memory.read(resolved.addr).wrapping_add(1);
    cpu.memory.write(resolved.addr, result);
    cpu.set_zn(result);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// DEC - Decrement Memory.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let resolved = cpu.resolve_address(metadata.addressing_mode);

    let result = cpu.memory.read(resolved.addr).wrapping_sub(1);
    cpu.memory.write(resolved.addr, result);
    cpu.set_zn(result);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// INX - Increment X Register.
pub(crate) fn inx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_zn(cpu.x);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// INY - Increment Y Register.
pub(crate) fn iny<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_zn(cpu.y);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// DEX - Decrement X Register.
pub(crate) fn dex<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_zn(cpu.x);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// DEY - Decrement Y Register.
pub(crate) fn dey<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_zn(cpu.y);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}
