//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! Logic: AND, ORA, EOR, BIT. Arithmetic: ADC, SBC. Comparison: CMP, CPX,
//! CPY.
//!
//! ADC computes A + M + C as a 9-bit sum: C takes bit 8, V takes the signed
//! overflow `(A^R) & (M^R) & 0x80`, and A takes the low 8 bits. SBC is ADC
//! of the one's complement of the operand, which is exactly `A - M - (1-C)`.
//! Decimal mode is ignored (NES-variant binary arithmetic).

use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Adds `value` plus the carry flag into A, setting C, V, Z, N.
///
/// Shared by ADC, SBC (with the operand complemented), and the illegal
/// RRA/ISC/USBC combinations.
pub(crate) fn add_to_a<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let sum = a as u16 + value as u16 + cpu.flag_c as u16;
    let result = sum as u8;

    cpu.flag_c = sum > 0xFF;
    // Signed overflow: both inputs share a sign the result does not.
    cpu.flag_v = (a ^ result) & (value ^ result) & 0x80 != 0;
    cpu.a = result;
    cpu.set_zn(result);
}

/// Computes `register - value` for the compare family: C = no borrow,
/// Z = equal, N = bit 7 of the difference. The register is not written.
pub(crate) fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    cpu.flag_c = register >= value;
    cpu.set_zn(register.wrapping_sub(value));
}

/// AND - bitwise AND into the accumulator. Sets Z and N.
pub(crate) fn and<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode);

    cpu.a &= value;
    cpu.set_zn(cpu.a);

    cpu.cycles += metadata.base_cycles as u64 + page_crossed as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// ORA - bitwise OR into the accumulator. Sets Z and N.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode);

    cpu.a |= value;
    cpu.set_zn(cpu.a);

    cpu.cycles += metadata.base_cycles as u64 + page_crossed as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// EOR - bitwise exclusive OR into the accumulator. Sets Z and N.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode);

    cpu.a ^= value;
    cpu.set_zn(cpu.a);

    cpu.cycles += metadata.base_cycles as u64 + page_crossed as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// BIT - Bit Test. Z from A & M; N and V copied from bits 7 and 6 of the
/// memory operand. A is not modified.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.operand_value(metadata.addressing_mode);

    cpu.flag_z = cpu.a & value == 0;
    cpu.flag_n = value & 0x80 != 0;
    cpu.flag_v = value & 0x40 != 0;

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// ADC - Add with Carry.
pub(crate) fn adc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode);

    add_to_a(cpu, value);

    cpu.cycles += metadata.base_cycles as u64 + page_crossed as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// SBC - Subtract with Carry: ADC of the complemented operand.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode);

    add_to_a(cpu, !value);

    cpu.cycles += metadata.base_cycles as u64 + page_crossed as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// CMP - Compare with Accumulator.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode);

    let a = cpu.a;
    compare(cpu, a, value);

    cpu.cycles += metadata.base_cycles as u64 + page_crossed as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// CPX - Compare with X Register.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.operand_value(metadata.addressing_mode);

    let x = cpu.x;
    compare(cpu, x, value);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// CPY - Compare with Y Register.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.operand_value(metadata.addressing_mode);

    let y = cpu.y;
    compare(cpu, y, value);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}
