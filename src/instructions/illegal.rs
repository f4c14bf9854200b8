//! # Stable Illegal Opcodes
//!
//! The undocumented opcodes with reproducible behavior. Most are fusions of
//! two documented operations that ended up sharing silicon:
//!
//! - Read-modify-write then combine with A: SLO (ASL+ORA), RLA (ROL+AND),
//!   SRE (LSR+EOR), RRA (ROR+ADC)
//! - Load/store fusions: LAX (LDA+LDX), SAX (store A & X)
//! - RMW then compare/subtract: DCP (DEC+CMP), ISC (INC+SBC)
//! - Immediate combinations: ANC, ALR, ARR, SBX, USBC
//!
//! The RMW forms use fixed cycle counts; LAX is a plain read and pays the
//! page-crossing penalty. The seven unstable opcodes (ANE, LXA, SHA, SHX,
//! SHY, TAS, LAS) are not here - the execution loop traps them.

use super::{alu, shifts};
use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// SLO - shift memory left, then OR it into A. C from the shift, Z/N from A.
pub(crate) fn slo<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let resolved = cpu.resolve_address(metadata.addressing_mode);

    let value = cpu.memory.read(resolved.addr);
    let shifted = shifts::asl_value(cpu, value);
    cpu.memory.write(resolved.addr, shifted);

    cpu.a |= shifted;
    cpu.set_zn(cpu.a);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// RLA - rotate memory left, then AND it into A.
pub(crate) fn rla<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let resolved = cpu.resolve_address(metadata.addressing_mode);

    let value = cpu.memory.read(resolved.addr);
    let rotated = shifts::rol_value(cpu, value);
    cpu.memory.write(resolved.addr, rotated);

    cpu.a &= rotated;
    cpu.set_zn(cpu.a);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// SRE - shift memory right, then EOR it into A.
pub(crate) fn sre<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let resolved = cpu.resolve_address(metadata.addressing_mode);

    let value = cpu.memory.read(resolved.addr);
    let shifted = shifts::lsr_value(cpu, value);
    cpu.memory.write(resolved.addr, shifted);

    cpu.a ^= shifted;
    cpu.set_zn(cpu.a);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// RRA - rotate memory right, then ADC the result into A.
pub(crate) fn rra<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let resolved = cpu.resolve_address(metadata.addressing_mode);

    let value = cpu.memory.read(resolved.addr);
    let rotated = shifts::ror_value(cpu, value);
    cpu.memory.write(resolved.addr, rotated);

    // The rotate's carry-out feeds straight into the addition.
    alu::add_to_a(cpu, rotated);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// LAX - load A and X with the same memory byte.
pub(crate) fn lax<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode);

    cpu.a = value;
    cpu.x = value;
    cpu.set_zn(value);

    cpu.cycles += metadata.base_cycles as u64 + page_crossed as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// SAX - store A & X. No flags affected.
pub(crate) fn sax<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let resolved = cpu.resolve_address(metadata.addressing_mode);

    cpu.memory.write(resolved.addr, cpu.a & cpu.x);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// DCP - decrement memory, then compare A against it.
pub(crate) fn dcp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let resolved = cpu.resolve_address(metadata.addressing_mode);

    let result = cpu.memory.read(resolved.addr).wrapping_sub(1);
    cpu.memory.write(resolved.addr, result);

    let a = cpu.a;
    alu::compare(cpu, a, result);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// ISC - increment memory, then SBC it from A.
pub(crate) fn isc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let resolved = cpu.resolve_address(metadata.addressing_mode);

    let result = cpu.memory.read(resolved.addr).wrapping_add(1);
    cpu.memory.write(resolved.addr, result);

    alu::add_to_a(cpu, !result);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// ANC - AND immediate, with C mirroring the resulting N bit.
pub(crate) fn anc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.operand_value(metadata.addressing_mode);

    cpu.a &= value;
    cpu.set_zn(cpu.a);
    cpu.flag_c = cpu.flag_n;

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// ALR - AND immediate, then LSR A.
pub(crate) fn alr<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.operand_value(metadata.addressing_mode);

    let masked = cpu.a & value;
    let result = shifts::lsr_value(cpu, masked);
    cpu.a = result;
    cpu.set_zn(result);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// ARR - AND immediate, then ROR A, with C and V derived from the rotated
/// result: C from bit 6, V from bit 6 XOR bit 5.
pub(crate) fn arr<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.operand_value(metadata.addressing_mode);

    let masked = cpu.a & value;
    let result = (masked >> 1) | ((cpu.flag_c as u8) << 7);
    cpu.a = result;
    cpu.set_zn(result);
    cpu.flag_c = result & 0x40 != 0;
    cpu.flag_v = ((result >> 6) ^ (result >> 5)) & 0x01 != 0;

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// SBX - X = (A & X) - immediate, with CMP-style flags on X.
pub(crate) fn sbx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.operand_value(metadata.addressing_mode);

    let masked = cpu.a & cpu.x;
    cpu.flag_c = masked >= value;
    cpu.x = masked.wrapping_sub(value);
    cpu.set_zn(cpu.x);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// USBC - duplicate encoding of SBC immediate.
pub(crate) fn usbc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.operand_value(metadata.addressing_mode);

    alu::add_to_a(cpu, !value);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}
