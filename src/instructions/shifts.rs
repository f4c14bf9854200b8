//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR. Each operates on the accumulator when the addressing
//! mode is `Accumulator`, otherwise read-modify-write on memory. The carry
//! flag receives the shifted-out bit; the rotates feed the old carry into
//! the vacated bit. Z and N come from the result.
//!
//! The value-level helpers (`asl_value` etc.) update C only; they are shared
//! with the illegal RMW combinations in `illegal.rs`, which derive Z/N from
//! the accumulator after combining.

use crate::addressing::AddressingMode;
use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Shift left; C takes the old bit 7.
pub(crate) fn asl_value<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    cpu.flag_c = value & 0x80 != 0;
    value << 1
}

/// Shift right; C takes the old bit 0.
pub(crate) fn lsr_value<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    cpu.flag_c = value & 0x01 != 0;
    value >> 1
}

/// Rotate left through carry.
pub(crate) fn rol_value<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    let carry_in = cpu.flag_c as u8;
    cpu.flag_c = value & 0x80 != 0;
    (value << 1) | carry_in
}

/// Rotate right through carry.
pub(crate) fn ror_value<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    let carry_in = (cpu.flag_c as u8) << 7;
    cpu.flag_c = value & 0x01 != 0;
    (value >> 1) | carry_in
}

/// Applies a shift helper to the accumulator or the addressed memory byte,
/// then sets Z/N and accounts cycles. RMW instructions use fixed cycle
/// counts - no page-crossing penalty.
fn shift_op<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
    apply: fn(&mut CPU<M>, u8) -> u8,
) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let result = if metadata.addressing_mode == AddressingMode::Accumulator {
        let value = cpu.a;
        let result = apply(cpu, value);
        cpu.a = result;
        result
    } else {
        let resolved = cpu.resolve_address(metadata.addressing_mode);
        let value = cpu.memory.read(resolved.addr);
        let result = apply(cpu, value);
        cpu.memory.write(resolved.addr, result);
        result
    };

    cpu.set_zn(result);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// ASL - Arithmetic Shift Left.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    shift_op(cpu, opcode, asl_value);
}

/// LSR - Logical Shift Right. N is always cleared (bit 7 becomes 0).
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    shift_op(cpu, opcode, lsr_value);
}

/// ROL - Rotate Left through carry.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    shift_op(cpu, opcode, rol_value);
}

/// ROR - Rotate Right through carry.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    shift_op(cpu, opcode, ror_value);
}
