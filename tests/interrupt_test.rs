//! Tests for the hardware interrupt machinery: the irq()/nmi() entry points
//! and the level-sensitive IRQ line sampled from the memory bus after every
//! instruction.

use core6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write16(0xFFFC, 0x8000);
    memory.write16(0xFFFE, 0x9000); // IRQ vector
    memory.write16(0xFFFA, 0xA000); // NMI vector
    CPU::new(memory)
}

/// Flat RAM plus a host-controlled IRQ line.
struct IrqMemory {
    data: Box<[u8; 65536]>,
    irq_line: bool,
}

impl IrqMemory {
    fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
            irq_line: false,
        }
    }
}

impl MemoryBus for IrqMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn irq_active(&self) -> bool {
        self.irq_line
    }
}

#[test]
fn test_irq_suppressed_while_i_set() {
    let mut cpu = setup_cpu();
    // Reset leaves I set.
    assert!(cpu.flag_i());

    cpu.irq();

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn test_irq_serviced_when_i_clear() {
    let mut cpu = setup_cpu();
    cpu.set_flag_i(false);
    cpu.set_flag_c(true);

    cpu.irq();

    assert_eq!(cpu.pc(), 0x9000);
    assert!(cpu.flag_i());
    assert_eq!(cpu.cycles(), 7);

    // Pushed frame: PC then status with B clear, bit 5 set.
    assert_eq!(cpu.memory_mut().read(0x01FD), 0x80);
    assert_eq!(cpu.memory_mut().read(0x01FC), 0x00);
    let pushed = cpu.memory_mut().read(0x01FB);
    assert_eq!(pushed & 0b0001_0000, 0, "B clear in interrupt frames");
    assert_eq!(pushed & 0b0010_0000, 0b0010_0000, "bit 5 set");
    assert_eq!(pushed & 0b0000_0001, 0b0000_0001, "C preserved");
}

#[test]
fn test_nmi_ignores_interrupt_disable() {
    let mut cpu = setup_cpu();
    assert!(cpu.flag_i());

    cpu.nmi();

    assert_eq!(cpu.pc(), 0xA000);
    assert_eq!(cpu.cycles(), 7);
    assert!(cpu.flag_i());
}

#[test]
fn test_rti_returns_from_nmi() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0xA000, 0x40); // handler: RTI

    cpu.nmi();
    cpu.step().unwrap();

    // NMI pushed the exact PC, so RTI comes back to it.
    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_bus_irq_line_sampled_after_instruction() {
    let mut memory = IrqMemory::new();
    memory.write16(0xFFFC, 0x8000);
    memory.write16(0xFFFE, 0x9000);
    memory.write(0x8000, 0xEA); // NOP
    memory.irq_line = true;

    let mut cpu = CPU::new(memory);
    cpu.set_flag_i(false);

    let cycles = cpu.step().unwrap();

    // NOP (2) + interrupt entry (7), reported as one atomic step.
    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cycles, 9);
    // The pushed return address is the instruction after the NOP.
    assert_eq!(cpu.memory_mut().read(0x01FD), 0x80);
    assert_eq!(cpu.memory_mut().read(0x01FC), 0x01);
}

#[test]
fn test_bus_irq_line_ignored_while_i_set() {
    let mut memory = IrqMemory::new();
    memory.write16(0xFFFC, 0x8000);
    memory.write16(0xFFFE, 0x9000);
    memory.write(0x8000, 0xEA);
    memory.irq_line = true;

    let mut cpu = CPU::new(memory);
    // I is set after reset: the line stays pending, nothing is serviced.

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_irq_does_not_wake_a_jammed_cpu() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x02); // JAM
    let _ = cpu.step();
    assert!(cpu.is_halted());

    cpu.set_flag_i(false);
    cpu.irq();
    cpu.nmi();

    assert!(cpu.is_halted());
    assert_eq!(cpu.pc(), 0x8000);
}
