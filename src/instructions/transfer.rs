//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA, TSX copy between registers and set Z/N from the
//! destination. TXS is the odd one out: it loads the stack pointer and
//! touches no flags.

use crate::{MemoryBus, CPU, OPCODE_TABLE};

fn advance<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// TAX - Transfer Accumulator to X.
pub(crate) fn tax<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.x = cpu.a;
    cpu.set_zn(cpu.x);
    advance(cpu, opcode);
}

/// TAY - Transfer Accumulator to Y.
pub(crate) fn tay<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.y = cpu.a;
    cpu.set_zn(cpu.y);
    advance(cpu, opcode);
}

/// TXA - Transfer X to Accumulator.
pub(crate) fn txa<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.a = cpu.x;
    cpu.set_zn(cpu.a);
    advance(cpu, opcode);
}

/// TYA - Transfer Y to Accumulator.
pub(crate) fn tya<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.a = cpu.y;
    cpu.set_zn(cpu.a);
    advance(cpu, opcode);
}

/// TSX - Transfer Stack Pointer to X.
pub(crate) fn tsx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.x = cpu.sp;
    cpu.set_zn(cpu.x);
    advance(cpu, opcode);
}

/// TXS - Transfer X to Stack Pointer. Flags are NOT affected.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.sp = cpu.x;
    advance(cpu, opcode);
}
