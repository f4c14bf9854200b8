//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next instruction
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C (individual bool fields)
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! - `step()`: execute one instruction, returning the cycles it consumed
//! - `run_until()`: iterate until a stop condition is met (BRK, PC target,
//!   cycle budget)
//! - `run_for_cycles()`: frame-locked execution against a cycle budget
//! - `irq()` / `nmi()`: external interrupt assertion
//!
//! Each `step()` is an atomic transition from one valid CPU state to another;
//! there are no suspension points inside an instruction.

use crate::addressing::{AddressingMode, ResolvedAddress};
use crate::instructions::{
    alu, branches, control, flags, illegal, inc_dec, load_store, shifts, stack, transfer,
};
use crate::opcodes::Mnemonic;
use crate::{ExecutionError, MemoryBus, OPCODE_TABLE};

// Status byte bit positions (NV-BDIZC).
const FLAG_N: u8 = 0b1000_0000;
const FLAG_V: u8 = 0b0100_0000;
const FLAG_UNUSED: u8 = 0b0010_0000;
const FLAG_B: u8 = 0b0001_0000;
const FLAG_D: u8 = 0b0000_1000;
const FLAG_I: u8 = 0b0000_0100;
const FLAG_Z: u8 = 0b0000_0010;
const FLAG_C: u8 = 0b0000_0001;

/// Base address of the stack page.
const STACK_BASE: u16 = 0x0100;

/// NMI vector location.
const NMI_VECTOR: u16 = 0xFFFA;
/// Reset vector location.
const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ/BRK vector location.
const IRQ_VECTOR: u16 = 0xFFFE;

/// Condition that ends a [`CPU::run_until`] loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopCondition {
    /// Stop after a BRK instruction has been executed (state pushed, vector
    /// taken). The host decides what BRK means; the core always performs the
    /// hardware-accurate sequence first.
    BrkExecuted,
    /// Stop when PC lands exactly on the given address (checked before each
    /// fetch).
    PcReached(u16),
    /// Stop once at least this many cycles have elapsed since the call.
    CyclesElapsed(u64),
}

/// 6502 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags,
/// program counter, stack pointer, and cycle counter. It is generic over the
/// memory implementation via the [`MemoryBus`] trait.
///
/// # Examples
///
/// ```
/// use core6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write16(0xFFFC, 0x8000); // reset vector
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag_i());
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register.
    pub(crate) a: u8,

    /// X index register.
    pub(crate) x: u8,

    /// Y index register.
    pub(crate) y: u8,

    /// Program counter (address of the next instruction).
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 | sp gives the full stack address).
    pub(crate) sp: u8,

    /// Negative flag (bit 7 of the last result).
    pub(crate) flag_n: bool,

    /// Overflow flag (signed overflow of ADC/SBC, bit 6 via BIT).
    pub(crate) flag_v: bool,

    /// Break flag. Has no effect on execution; it only matters in status
    /// bytes pushed by BRK/PHP (pushed set) versus IRQ/NMI (pushed clear).
    pub(crate) flag_b: bool,

    /// Decimal mode flag. Stored and restored, but arithmetic ignores it
    /// (NES-variant binary-only ADC/SBC).
    pub(crate) flag_d: bool,

    /// Interrupt disable flag (blocks IRQ when set; never blocks NMI).
    pub(crate) flag_i: bool,

    /// Zero flag.
    pub(crate) flag_z: bool,

    /// Carry flag.
    pub(crate) flag_c: bool,

    /// Total CPU cycles executed.
    pub(crate) cycles: u64,

    /// When a JAM opcode executes, the opcode byte is latched here and the
    /// CPU refuses further work until reset.
    pub(crate) halted: Option<u8>,

    /// Memory bus implementation.
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU on the given memory bus and resets it.
    ///
    /// The power-on state matches the hardware reset sequence described at
    /// [`reset`](CPU::reset): PC comes from the vector at 0xFFFC/0xFFFD, SP
    /// is 0xFD, and the I flag is set.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0xFD,
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: true,
            flag_z: false,
            flag_c: false,
            cycles: 0,
            halted: None,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Resets the CPU to its power-on register state.
    ///
    /// - A, X, Y are cleared
    /// - P becomes 0x24 (I set; bit 5 reads as 1)
    /// - SP becomes 0xFD, simulating the three decrements the hardware
    ///   performs during the reset sequence
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD
    /// - a latched JAM halt is cleared
    ///
    /// Memory contents and the cumulative cycle counter persist across
    /// resets.
    pub fn reset(&mut self) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = 0xFD;
        self.flag_n = false;
        self.flag_v = false;
        self.flag_b = false;
        self.flag_d = false;
        self.flag_i = true;
        self.flag_z = false;
        self.flag_c = false;
        self.halted = None;
        self.pc = self.memory.read16(RESET_VECTOR);
    }

    /// Executes one instruction and returns the cycles it consumed.
    ///
    /// Performs the fetch-decode-resolve-execute cycle:
    /// 1. Fetch the opcode byte at PC
    /// 2. Look up its metadata in the opcode table
    /// 3. Execute the handler for its mnemonic (which resolves the
    ///    addressing mode, mutates state, advances PC, and accounts base
    ///    cycles plus any page-crossing or branch penalties)
    /// 4. Sample the bus IRQ line and service an interrupt if it is active
    ///    and the I flag is clear
    ///
    /// # Errors
    ///
    /// - [`ExecutionError::Halted`] when a JAM opcode executes, and on every
    ///   subsequent call until [`reset`](CPU::reset). PC stays on the jammed
    ///   opcode.
    /// - [`ExecutionError::UnstableOpcode`] when one of the seven unstable
    ///   illegal opcodes is fetched. PC is advanced past the instruction so
    ///   callers that choose to ignore the error are not wedged.
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        if let Some(opcode) = self.halted {
            return Err(ExecutionError::Halted(opcode));
        }

        let start_cycles = self.cycles;
        let opcode = self.memory.read(self.pc);
        let metadata = &OPCODE_TABLE[opcode as usize];

        match metadata.mnemonic {
            // Load/store.
            Mnemonic::Lda => load_store::lda(self, opcode),
            Mnemonic::Ldx => load_store::ldx(self, opcode),
            Mnemonic::Ldy => load_store::ldy(self, opcode),
            Mnemonic::Sta => load_store::sta(self, opcode),
            Mnemonic::Stx => load_store::stx(self, opcode),
            Mnemonic::Sty => load_store::sty(self, opcode),

            // Register transfers.
            Mnemonic::Tax => transfer::tax(self, opcode),
            Mnemonic::Tay => transfer::tay(self, opcode),
            Mnemonic::Txa => transfer::txa(self, opcode),
            Mnemonic::Tya => transfer::tya(self, opcode),
            Mnemonic::Tsx => transfer::tsx(self, opcode),
            Mnemonic::Txs => transfer::txs(self, opcode),

            // Stack operations.
            Mnemonic::Pha => stack::pha(self, opcode),
            Mnemonic::Php => stack::php(self, opcode),
            Mnemonic::Pla => stack::pla(self, opcode),
            Mnemonic::Plp => stack::plp(self, opcode),

            // Logic and arithmetic.
            Mnemonic::And => alu::and(self, opcode),
            Mnemonic::Ora => alu::ora(self, opcode),
            Mnemonic::Eor => alu::eor(self, opcode),
            Mnemonic::Bit => alu::bit(self, opcode),
            Mnemonic::Adc => alu::adc(self, opcode),
            Mnemonic::Sbc => alu::sbc(self, opcode),
            Mnemonic::Cmp => alu::cmp(self, opcode),
            Mnemonic::Cpx => alu::cpx(self, opcode),
            Mnemonic::Cpy => alu::cpy(self, opcode),

            // Increment/decrement.
            Mnemonic::Inc => inc_dec::inc(self, opcode),
            Mnemonic::Dec => inc_dec::dec(self, opcode),
            Mnemonic::Inx => inc_dec::inx(self, opcode),
            Mnemonic::Iny => inc_dec::iny(self, opcode),
            Mnemonic::Dex => inc_dec::dex(self, opcode),
            Mnemonic::Dey => inc_dec::dey(self, opcode),

            // Shifts and rotates.
            Mnemonic::Asl => shifts::asl(self, opcode),
            Mnemonic::Lsr => shifts::lsr(self, opcode),
            Mnemonic::Rol => shifts::rol(self, opcode),
            Mnemonic::Ror => shifts::ror(self, opcode),

            // Branches.
            Mnemonic::Bcc => branches::bcc(self, opcode),
            Mnemonic::Bcs => branches::bcs(self, opcode),
            Mnemonic::Beq => branches::beq(self, opcode),
            Mnemonic::Bne => branches::bne(self, opcode),
            Mnemonic::Bmi => branches::bmi(self, opcode),
            Mnemonic::Bpl => branches::bpl(self, opcode),
            Mnemonic::Bvc => branches::bvc(self, opcode),
            Mnemonic::Bvs => branches::bvs(self, opcode),

            // Control flow.
            Mnemonic::Jmp => control::jmp(self, opcode),
            Mnemonic::Jsr => control::jsr(self, opcode),
            Mnemonic::Rts => control::rts(self, opcode),
            Mnemonic::Rti => control::rti(self, opcode),
            Mnemonic::Brk => control::brk(self, opcode),
            Mnemonic::Nop => control::nop(self, opcode),

            // Flag manipulation.
            Mnemonic::Clc => flags::clc(self, opcode),
            Mnemonic::Sec => flags::sec(self, opcode),
            Mnemonic::Cli => flags::cli(self, opcode),
            Mnemonic::Sei => flags::sei(self, opcode),
            Mnemonic::Clv => flags::clv(self, opcode),
            Mnemonic::Cld => flags::cld(self, opcode),
            Mnemonic::Sed => flags::sed(self, opcode),

            // Stable illegal opcodes.
            Mnemonic::Slo => illegal::slo(self, opcode),
            Mnemonic::Rla => illegal::rla(self, opcode),
            Mnemonic::Sre => illegal::sre(self, opcode),
            Mnemonic::Rra => illegal::rra(self, opcode),
            Mnemonic::Lax => illegal::lax(self, opcode),
            Mnemonic::Sax => illegal::sax(self, opcode),
            Mnemonic::Dcp => illegal::dcp(self, opcode),
            Mnemonic::Isc => illegal::isc(self, opcode),
            Mnemonic::Anc => illegal::anc(self, opcode),
            Mnemonic::Alr => illegal::alr(self, opcode),
            Mnemonic::Arr => illegal::arr(self, opcode),
            Mnemonic::Sbx => illegal::sbx(self, opcode),
            Mnemonic::Usbc => illegal::usbc(self, opcode),

            // JAM latches the halt state; PC stays on the offending byte.
            Mnemonic::Jam => {
                self.halted = Some(opcode);
                return Err(ExecutionError::Halted(opcode));
            }

            // Unstable illegal opcodes are trapped rather than modeled.
            Mnemonic::Ane
            | Mnemonic::Lxa
            | Mnemonic::Sha
            | Mnemonic::Shx
            | Mnemonic::Shy
            | Mnemonic::Tas
            | Mnemonic::Las => {
                self.cycles += metadata.base_cycles as u64;
                self.pc = self.pc.wrapping_add(metadata.size_bytes as u16);
                return Err(ExecutionError::UnstableOpcode(opcode));
            }
        }

        // The IRQ line is level-sensitive: sample it once per instruction.
        if self.memory.irq_active() && !self.flag_i {
            self.interrupt(IRQ_VECTOR);
        }

        Ok((self.cycles - start_cycles) as u8)
    }

    /// Runs the CPU until `cond` is met.
    ///
    /// The conditions cover the usual host termination rules: a BRK was
    /// executed, PC reached a target address, or a cycle budget elapsed.
    /// A `PcReached` target that execution never lands on loops forever;
    /// guarding against that is the caller's job.
    ///
    /// # Errors
    ///
    /// Propagates [`ExecutionError`] from [`step`](CPU::step): a jammed CPU
    /// or an unstable opcode ends the run early.
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{CPU, FlatMemory, MemoryBus, StopCondition};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x8000, &[0xA9, 0x05, 0x69, 0x03, 0x00]).unwrap();
    /// memory.write16(0xFFFC, 0x8000);
    ///
    /// let mut cpu = CPU::new(memory);
    /// cpu.run_until(StopCondition::BrkExecuted).unwrap();
    /// assert_eq!(cpu.a(), 0x08);
    /// ```
    pub fn run_until(&mut self, cond: StopCondition) -> Result<(), ExecutionError> {
        match cond {
            StopCondition::BrkExecuted => loop {
                let opcode = self.memory.read(self.pc);
                self.step()?;
                if opcode == 0x00 {
                    return Ok(());
                }
            },
            StopCondition::PcReached(target) => {
                while self.pc != target {
                    self.step()?;
                }
                Ok(())
            }
            StopCondition::CyclesElapsed(budget) => {
                self.run_for_cycles(budget)?;
                Ok(())
            }
        }
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes instructions until the cycle budget is exhausted or an error
    /// occurs. Returns the actual number of cycles consumed, which may exceed
    /// the budget by the tail of the final instruction.
    ///
    /// This is useful for frame-locked execution models where the CPU must
    /// run for an exact number of cycles per frame (e.g. 29780 cycles for
    /// 60Hz NTSC).
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles + cycle_budget;

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Asserts the IRQ line once.
    ///
    /// If the I flag is clear (and the CPU is not jammed), pushes PC and the
    /// status byte (B clear, bit 5 set), sets I, loads PC from the vector at
    /// 0xFFFE, and consumes 7 cycles. Silently ignored while I is set - the
    /// level-sensitive line is simply not serviced.
    pub fn irq(&mut self) {
        if self.flag_i || self.halted.is_some() {
            return;
        }
        self.interrupt(IRQ_VECTOR);
    }

    /// Asserts the NMI line.
    ///
    /// Identical to [`irq`](CPU::irq) except that it vectors through 0xFFFA
    /// and cannot be masked by the I flag. A jammed CPU stays jammed.
    pub fn nmi(&mut self) {
        if self.halted.is_some() {
            return;
        }
        self.interrupt(NMI_VECTOR);
    }

    /// Hardware interrupt entry sequence, shared by IRQ and NMI.
    fn interrupt(&mut self, vector: u16) {
        self.push16(self.pc);
        // Interrupts push B clear; only BRK/PHP push it set. Bit 5 is
        // already set by status().
        self.push(self.status() & !FLAG_B);
        self.flag_i = true;
        self.pc = self.memory.read16(vector);
        self.cycles += 7;
    }

    // ========== Status Register ==========

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC), with the unused bit 5 always reading as 1:
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: unused, always 1
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    pub fn status(&self) -> u8 {
        let mut status = FLAG_UNUSED;

        if self.flag_n {
            status |= FLAG_N;
        }
        if self.flag_v {
            status |= FLAG_V;
        }
        if self.flag_b {
            status |= FLAG_B;
        }
        if self.flag_d {
            status |= FLAG_D;
        }
        if self.flag_i {
            status |= FLAG_I;
        }
        if self.flag_z {
            status |= FLAG_Z;
        }
        if self.flag_c {
            status |= FLAG_C;
        }

        status
    }

    /// Restores every flag from a packed status byte.
    ///
    /// Bit 5 is ignored (it has no storage; [`status`](CPU::status) always
    /// reports it set). Bit 4 lands in the stored B flag; PLP and RTI
    /// discard it separately per the hardware convention.
    pub fn set_status(&mut self, value: u8) {
        self.flag_n = value & FLAG_N != 0;
        self.flag_v = value & FLAG_V != 0;
        self.flag_b = value & FLAG_B != 0;
        self.flag_d = value & FLAG_D != 0;
        self.flag_i = value & FLAG_I != 0;
        self.flag_z = value & FLAG_Z != 0;
        self.flag_c = value & FLAG_C != 0;
    }

    /// Sets Z and N from a byte result: Z iff zero, N from bit 7.
    ///
    /// This is the "assign, then derive flags from the assigned value"
    /// pattern every load/arithmetic/shift handler follows.
    pub(crate) fn set_zn(&mut self, result: u8) {
        self.flag_z = result == 0;
        self.flag_n = result & 0x80 != 0;
    }

    // ========== Stack Engine ==========

    /// Pushes a byte onto the stack at `0x0100 | SP`, then decrements SP.
    ///
    /// SP wraps modulo 256; there is no overflow trap.
    pub fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping), then reads the byte at `0x0100 | SP`.
    pub fn pop(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes a 16-bit word, high byte first.
    ///
    /// The ordering leaves the word little-endian in memory and is what
    /// JSR/RTS and the interrupt entry/exit sequences rely on.
    pub fn push16(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push((value & 0xFF) as u8);
    }

    /// Pops a 16-bit word: low byte first, then high.
    pub fn pop16(&mut self) -> u16 {
        let lo = self.pop() as u16;
        let hi = self.pop() as u16;
        (hi << 8) | lo
    }

    // ========== Addressing-Mode Resolution ==========

    /// Resolves an addressing mode to an effective address.
    ///
    /// PC still points at the opcode byte when handlers run, so the operand
    /// bytes start at `PC + 1`. `page_crossed` reports whether indexing
    /// carried into the high address byte (or, for `Relative`, whether the
    /// branch target sits on a different page than the next instruction);
    /// read instructions turn that into a one-cycle penalty.
    ///
    /// `Implied` and `Accumulator` have no effective address and must not be
    /// passed here; handlers special-case them.
    pub(crate) fn resolve_address(&self, mode: AddressingMode) -> ResolvedAddress {
        let operand_pc = self.pc.wrapping_add(1);

        match mode {
            AddressingMode::Immediate => ResolvedAddress {
                // The operand byte itself is the value.
                addr: operand_pc,
                page_crossed: false,
            },
            AddressingMode::ZeroPage => ResolvedAddress {
                addr: self.memory.read(operand_pc) as u16,
                page_crossed: false,
            },
            AddressingMode::ZeroPageX => ResolvedAddress {
                // Indexing wraps within the zero page.
                addr: self.memory.read(operand_pc).wrapping_add(self.x) as u16,
                page_crossed: false,
            },
            AddressingMode::ZeroPageY => ResolvedAddress {
                addr: self.memory.read(operand_pc).wrapping_add(self.y) as u16,
                page_crossed: false,
            },
            AddressingMode::Relative => {
                let offset = self.memory.read(operand_pc) as i8;
                let base = self.pc.wrapping_add(2);
                let addr = base.wrapping_add_signed(offset as i16);
                ResolvedAddress {
                    addr,
                    page_crossed: (base & 0xFF00) != (addr & 0xFF00),
                }
            }
            AddressingMode::Absolute => ResolvedAddress {
                addr: self.memory.read16(operand_pc),
                page_crossed: false,
            },
            AddressingMode::AbsoluteX => {
                let base = self.memory.read16(operand_pc);
                let addr = base.wrapping_add(self.x as u16);
                ResolvedAddress {
                    addr,
                    page_crossed: (base & 0xFF00) != (addr & 0xFF00),
                }
            }
            AddressingMode::AbsoluteY => {
                let base = self.memory.read16(operand_pc);
                let addr = base.wrapping_add(self.y as u16);
                ResolvedAddress {
                    addr,
                    page_crossed: (base & 0xFF00) != (addr & 0xFF00),
                }
            }
            AddressingMode::Indirect => {
                // JMP only. The pointer dereference reproduces the NMOS
                // page-boundary bug.
                let ptr = self.memory.read16(operand_pc);
                ResolvedAddress {
                    addr: self.memory.read16_wrapped(ptr),
                    page_crossed: false,
                }
            }
            AddressingMode::IndirectX => {
                let zp = self.memory.read(operand_pc).wrapping_add(self.x);
                ResolvedAddress {
                    addr: self.memory.read16_zp(zp),
                    page_crossed: false,
                }
            }
            AddressingMode::IndirectY => {
                let base = self.memory.read16_zp(self.memory.read(operand_pc));
                let addr = base.wrapping_add(self.y as u16);
                ResolvedAddress {
                    addr,
                    page_crossed: (base & 0xFF00) != (addr & 0xFF00),
                }
            }
            AddressingMode::Implied | AddressingMode::Accumulator => {
                unreachable!("{:?} has no effective address", mode)
            }
        }
    }

    /// Reads the operand value for a memory-addressed instruction.
    ///
    /// Returns the byte at the resolved effective address together with the
    /// page-crossing flag for cycle accounting.
    pub(crate) fn operand_value(&self, mode: AddressingMode) -> (u8, bool) {
        let resolved = self.resolve_address(mode);
        (self.memory.read(resolved.addr), resolved.page_crossed)
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 | SP; the stack grows downward from
    /// 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the total number of CPU cycles executed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns true if a JAM opcode has latched the CPU in its halt state.
    pub fn is_halted(&self) -> bool {
        self.halted.is_some()
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Register Setters (for hosts and tests) ==========

    /// Sets the accumulator register value.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register value.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register value.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter value.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer value.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    /// Returns a mutable reference to the memory bus.
    ///
    /// This is how hosts and tests write programs and inspect memory.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu() -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.write16(0xFFFC, 0x8000);
        CPU::new(mem)
    }

    #[test]
    fn test_cpu_initialization() {
        let cpu = setup_cpu();

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.cycles(), 0);
        assert!(!cpu.is_halted());

        // P = 0x24: I set, bit 5 reads as 1, everything else clear.
        assert_eq!(cpu.status(), 0x24);
    }

    #[test]
    fn test_reset_reloads_vector_and_keeps_memory() {
        let mut cpu = setup_cpu();
        cpu.set_a(0x55);
        cpu.set_flag_c(true);
        cpu.memory_mut().write(0x1234, 0x99);

        // Move the reset vector, then reset.
        cpu.memory_mut().write16(0xFFFC, 0xC000);
        cpu.reset();

        assert_eq!(cpu.pc(), 0xC000);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.status(), 0x24);
        assert_eq!(cpu.memory_mut().read(0x1234), 0x99);
    }

    #[test]
    fn test_status_roundtrip_spot_values() {
        let mut cpu = setup_cpu();

        cpu.set_status(0x00);
        assert_eq!(cpu.status(), 0x20); // bit 5 always reads 1

        cpu.set_status(0xFF);
        assert_eq!(cpu.status(), 0xFF);

        cpu.set_status(0b1100_0011);
        assert_eq!(cpu.status(), 0b1110_0011);
    }

    #[test]
    fn test_stack_push_pop_lifo() {
        let mut cpu = setup_cpu();
        let initial_sp = cpu.sp();

        cpu.push(0x11);
        cpu.push(0x22);
        assert_eq!(cpu.sp(), initial_sp.wrapping_sub(2));

        assert_eq!(cpu.pop(), 0x22);
        assert_eq!(cpu.pop(), 0x11);
        assert_eq!(cpu.sp(), initial_sp);
    }

    #[test]
    fn test_push16_layout_is_little_endian_in_memory() {
        let mut cpu = setup_cpu();
        cpu.set_sp(0xFD);

        cpu.push16(0xABCD);
        // High byte goes first (higher address), low byte second.
        assert_eq!(cpu.memory_mut().read(0x01FD), 0xAB);
        assert_eq!(cpu.memory_mut().read(0x01FC), 0xCD);
        assert_eq!(cpu.pop16(), 0xABCD);
    }

    #[test]
    fn test_stack_wraps_at_page_boundary() {
        let mut cpu = setup_cpu();
        cpu.set_sp(0x00);

        cpu.push(0x42);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.memory_mut().read(0x0100), 0x42);
        assert_eq!(cpu.pop(), 0x42);
        assert_eq!(cpu.sp(), 0x00);
    }
}
