//! Tests for JMP, including the indirect page-boundary hardware bug.

use core6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write16(0xFFFC, 0x8000);
    CPU::new(memory)
}

#[test]
fn test_jmp_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x4C, 0x34, 0x12]).unwrap();

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cycles, 3);
}

#[test]
fn test_jmp_indirect() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write16(0x3000, 0x5678);
    cpu.memory_mut().load(0x8000, &[0x6C, 0x00, 0x30]).unwrap();

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x5678);
    assert_eq!(cycles, 5);
}

#[test]
fn test_jmp_indirect_page_boundary_bug() {
    let mut cpu = setup_cpu();
    // Pointer at 0x12FF: low byte from 0x12FF, but the high byte wraps to
    // 0x1200 instead of reading 0x1300.
    cpu.memory_mut().write(0x12FF, 0x00);
    cpu.memory_mut().write(0x1200, 0x40);
    cpu.memory_mut().write(0x1300, 0x99); // would be read by a correct CPU
    cpu.memory_mut().load(0x8000, &[0x6C, 0xFF, 0x12]).unwrap();

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x4000);
}

#[test]
fn test_jmp_does_not_touch_flags_or_stack() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x4C, 0x00, 0x90]).unwrap();
    let status_before = cpu.status();
    let sp_before = cpu.sp();

    cpu.step().unwrap();

    assert_eq!(cpu.status(), status_before);
    assert_eq!(cpu.sp(), sp_before);
}
