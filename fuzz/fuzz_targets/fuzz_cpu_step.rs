//! Fuzz target for CPU step execution.
//!
//! Creates arbitrary CPU states and memory contents, then executes a handful
//! of instructions. The CPU must never panic: every opcode byte, legal or
//! illegal, has a defined outcome (including the Halted and UnstableOpcode
//! errors), and every addressing computation wraps instead of overflowing.

#![no_main]

use arbitrary::Arbitrary;
use core6502::{FlatMemory, MemoryBus, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing.
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

/// Memory regions the fuzzer controls.
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction stream).
    instruction_bytes: [u8; 16],
    /// Zero page contents (pointers for the indirect modes).
    zero_page: [u8; 256],
    /// Stack page contents.
    stack_page: [u8; 256],
    /// A window of main memory at 0x4000 for absolute addressing.
    main_memory: [u8; 256],
}

/// Complete fuzz input.
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    // Vectors: reset to 0x8000, IRQ/BRK and NMI parked at fixed handlers.
    memory.write16(0xFFFC, 0x8000);
    memory.write16(0xFFFE, 0x9000);
    memory.write16(0xFFFA, 0x9100);

    for (i, &byte) in input.memory.instruction_bytes.iter().enumerate() {
        memory.write(0x8000 + i as u16, byte);
    }
    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        memory.write(0x0100 + i as u16, byte);
    }
    for (i, &byte) in input.memory.main_memory.iter().enumerate() {
        memory.write(0x4000 + i as u16, byte);
    }

    let mut cpu = CPU::new(memory);

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    // Execute a few instructions. Errors (Halted, UnstableOpcode) are fine;
    // panics are the bug we are hunting.
    for _ in 0..8 {
        let before = cpu.cycles();
        match cpu.step() {
            Ok(cycles) => {
                // A completed instruction always costs at least one cycle
                // and reports exactly what it added to the counter.
                assert!(cycles >= 1);
                assert_eq!(cpu.cycles() - before, cycles as u64);
            }
            Err(_) => break,
        }
    }
});
