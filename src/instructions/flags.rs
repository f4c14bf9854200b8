//! # Status Flag Manipulation Instructions
//!
//! CLC, SEC, CLI, SEI, CLV, CLD, SED. All use implied addressing and take
//! 2 cycles. The D flag is stored and restored faithfully even though this
//! core's arithmetic ignores it (NES-variant binary mode).

use crate::{MemoryBus, CPU, OPCODE_TABLE};

fn advance<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// CLC - Clear Carry Flag.
pub(crate) fn clc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flag_c = false;
    advance(cpu, opcode);
}

/// SEC - Set Carry Flag.
pub(crate) fn sec<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flag_c = true;
    advance(cpu, opcode);
}

/// CLI - Clear Interrupt Disable.
pub(crate) fn cli<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flag_i = false;
    advance(cpu, opcode);
}

/// SEI - Set Interrupt Disable.
pub(crate) fn sei<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flag_i = true;
    advance(cpu, opcode);
}

/// CLV - Clear Overflow Flag. There is no SEV on the 6502.
pub(crate) fn clv<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flag_v = false;
    advance(cpu, opcode);
}

/// CLD - Clear Decimal Mode.
pub(crate) fn cld<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flag_d = false;
    advance(cpu, opcode);
}

/// SED - Set Decimal Mode.
pub(crate) fn sed<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flag_d = true;
    advance(cpu, opcode);
}
