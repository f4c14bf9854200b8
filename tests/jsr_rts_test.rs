//! Tests for the JSR/RTS pair.
//!
//! JSR pushes the address of its own last byte (PC + 2); RTS pops and adds
//! one. The two must agree or every subroutine return lands off by one.

use core6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write16(0xFFFC, 0x8000);
    CPU::new(memory)
}

#[test]
fn test_jsr_pushes_return_address_minus_one() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90]).unwrap();

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFB);
    // 0x8002 = address of the JSR's last byte, little-endian on the stack.
    assert_eq!(cpu.memory_mut().read(0x01FD), 0x80);
    assert_eq!(cpu.memory_mut().read(0x01FC), 0x02);
    assert_eq!(cycles, 6);
}

#[test]
fn test_rts_resumes_after_the_jsr() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90]).unwrap();
    cpu.memory_mut().write(0x9000, 0x60); // RTS

    cpu.step().unwrap(); // JSR
    let cycles = cpu.step().unwrap(); // RTS

    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cycles, 6);
}

#[test]
fn test_nested_subroutines() {
    let mut cpu = setup_cpu();
    // main: JSR outer / outer: JSR inner, RTS / inner: RTS
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90]).unwrap();
    cpu.memory_mut()
        .load(0x9000, &[0x20, 0x00, 0xA0, 0x60])
        .unwrap();
    cpu.memory_mut().write(0xA000, 0x60);

    cpu.step().unwrap(); // JSR 0x9000
    cpu.step().unwrap(); // JSR 0xA000
    assert_eq!(cpu.sp(), 0xF9);

    cpu.step().unwrap(); // inner RTS
    assert_eq!(cpu.pc(), 0x9003);

    cpu.step().unwrap(); // outer RTS
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_jsr_rts_preserve_registers_and_flags() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90]).unwrap();
    cpu.memory_mut().write(0x9000, 0x60);
    cpu.set_a(0x13);
    cpu.set_flag_c(true);
    cpu.set_flag_n(true);

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x13);
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}
