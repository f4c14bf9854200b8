//! Execution loop tests: single-stepping, the run_until stop conditions,
//! cycle budgets, and a set of small end-to-end programs.

use core6502::{ExecutionError, FlatMemory, MemoryBus, StopCondition, CPU};

fn setup_with_program(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x8000, program).unwrap();
    memory.write16(0xFFFC, 0x8000);
    memory.write16(0xFFFE, 0xF000); // BRK handler parking address
    CPU::new(memory)
}

#[test]
fn test_step_is_single_instruction() {
    let mut cpu = setup_with_program(&[0xEA, 0xEA]);

    assert_eq!(cpu.step().unwrap(), 2);
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.step().unwrap(), 2);
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_run_for_cycles_executes_whole_instructions() {
    let mut cpu = setup_with_program(&[0xEA; 16]);

    let consumed = cpu.run_for_cycles(10).unwrap();

    assert_eq!(consumed, 10); // 5 NOPs
    assert_eq!(cpu.pc(), 0x8005);
}

#[test]
fn test_run_until_pc_reached() {
    let mut cpu = setup_with_program(&[0xEA, 0xEA, 0xEA, 0x00]);

    cpu.run_until(StopCondition::PcReached(0x8003)).unwrap();

    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_run_until_cycles_elapsed() {
    let mut cpu = setup_with_program(&[0xEA; 16]);

    cpu.run_until(StopCondition::CyclesElapsed(5)).unwrap();

    // 3 NOPs = 6 cycles; the budget overshoots by instruction granularity.
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_run_until_brk_stops_after_vectoring() {
    let mut cpu = setup_with_program(&[0xEA, 0x00]);

    cpu.run_until(StopCondition::BrkExecuted).unwrap();

    // The BRK itself was executed hardware-accurately.
    assert_eq!(cpu.pc(), 0xF000);
    assert!(cpu.flag_i());
}

#[test]
fn test_run_until_propagates_jam() {
    let mut cpu = setup_with_program(&[0xEA, 0x02]);

    let err = cpu.run_until(StopCondition::BrkExecuted).unwrap_err();

    assert_eq!(err, ExecutionError::Halted(0x02));
    assert!(cpu.is_halted());
}

// ========== End-to-end programs ==========

#[test]
fn test_program_lda_tax_inx_brk() {
    // LDA #$C0, TAX, INX, BRK
    let mut cpu = setup_with_program(&[0xA9, 0xC0, 0xAA, 0xE8, 0x00]);

    cpu.run_until(StopCondition::BrkExecuted).unwrap();

    assert_eq!(cpu.a(), 0xC0);
    assert_eq!(cpu.x(), 0xC1);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.pc(), 0xF000); // through the IRQ/BRK vector

    // Stack frame: return address 0x8006 (BRK at 0x8004 + 2), then status
    // with B set and N from the INX result.
    assert_eq!(cpu.memory_mut().read(0x01FD), 0x80);
    assert_eq!(cpu.memory_mut().read(0x01FC), 0x06);
    let pushed = cpu.memory_mut().read(0x01FB);
    assert_eq!(pushed & 0b0011_0000, 0b0011_0000);
    assert_eq!(pushed & 0b1000_0000, 0b1000_0000);
}

#[test]
fn test_program_inx_wraps_through_zero() {
    // INX, INX, BRK with X preloaded to 0xFF.
    let mut cpu = setup_with_program(&[0xE8, 0xE8, 0x00]);
    cpu.set_x(0xFF);

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x01);
    assert!(!cpu.flag_z());

    cpu.run_until(StopCondition::BrkExecuted).unwrap();
}

#[test]
fn test_program_adc_simple() {
    // LDA #$05, ADC #$03, BRK
    let mut cpu = setup_with_program(&[0xA9, 0x05, 0x69, 0x03, 0x00]);

    cpu.run_until(StopCondition::BrkExecuted).unwrap();

    assert_eq!(cpu.a(), 0x08);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_program_adc_signed_overflow() {
    // LDA #$7F, ADC #$01, BRK
    let mut cpu = setup_with_program(&[0xA9, 0x7F, 0x69, 0x01, 0x00]);

    cpu.run_until(StopCondition::BrkExecuted).unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
}

#[test]
fn test_program_adc_unsigned_wrap() {
    // LDA #$FF, ADC #$01, BRK
    let mut cpu = setup_with_program(&[0xA9, 0xFF, 0x69, 0x01, 0x00]);

    cpu.run_until(StopCondition::BrkExecuted).unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_v());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_program_jsr_subroutine() {
    // At 0x0600: JSR $0606, BRK, pad / at 0x0606: LDA #$42, RTS
    let mut memory = FlatMemory::new();
    memory
        .load(0x0600, &[0x20, 0x06, 0x06, 0x00, 0x00, 0x00, 0xA9, 0x42, 0x60])
        .unwrap();
    memory.write16(0xFFFC, 0x0600);
    memory.write16(0xFFFE, 0xF000);
    let mut cpu = CPU::new(memory);
    let sp_at_start = cpu.sp();

    cpu.run_until(StopCondition::BrkExecuted).unwrap();

    assert_eq!(cpu.a(), 0x42);
    // RTS restored SP before the BRK pushed its own 3-byte frame.
    assert_eq!(cpu.sp(), sp_at_start.wrapping_sub(3));
    // The BRK at 0x0603 pushed 0x0605.
    assert_eq!(cpu.memory_mut().read16(0x01FC), 0x0605);
}

#[test]
fn test_program_loop_with_branch() {
    // LDX #$05 / loop: DEX, BNE loop / BRK
    let mut cpu = setup_with_program(&[0xA2, 0x05, 0xCA, 0xD0, 0xFD, 0x00]);

    cpu.run_until(StopCondition::BrkExecuted).unwrap();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_program_memory_increment() {
    // INC $10, INC $10, LDA $10, BRK
    let mut cpu = setup_with_program(&[0xE6, 0x10, 0xE6, 0x10, 0xA5, 0x10, 0x00]);
    cpu.memory_mut().write(0x0010, 0x40);

    cpu.run_until(StopCondition::BrkExecuted).unwrap();

    assert_eq!(cpu.memory_mut().read(0x0010), 0x42);
    assert_eq!(cpu.a(), 0x42);
}
