//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor
//! state and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! - **Registers**: accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next instruction
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C as individual bool fields
//!
//! ## Execution Model
//!
//! `step()` executes exactly one instruction: fetch the opcode at PC,
//! resolve the addressing mode (advancing PC past the operand bytes), and
//! perform the operation. There is no terminal state; the host controls
//! pacing by how often it calls `step()`. Opcode bytes the decode table
//! does not know are no-ops, and nothing during execution returns an
//! error — all failure modes are confined to the configuration phase.

use crate::addressing::AddressingMode;
use crate::bus::AddressBus;
use crate::instructions::{alu, control, inc_dec, load_store, shifts, stack, transfer};
use crate::opcodes::{self, Mnemonic};

/// Base address of the fixed stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// Address of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// 6502 CPU state and execution context.
///
/// The CPU owns the [`AddressBus`] it executes against. Registers and
/// flags are public fields so hosts and tests can inspect or seed state
/// between steps; the bus contents are reachable through the byte/word
/// accessors or [`bus_mut`](CPU::bus_mut).
///
/// # Examples
///
/// ```rust
/// use bus6502::{AddressBus, RamDevice, CPU};
///
/// let mut bus = AddressBus::new();
/// bus.map(Box::new(RamDevice::new()), 0xFFFF).unwrap();
///
/// let mut cpu = CPU::new(bus);
/// cpu.write_word(0xFFFC, 0x8000); // reset vector
/// cpu.reset();
/// assert_eq!(cpu.pc, 0x8000);
///
/// cpu.write(0x8000, 0xA9); // LDA #$10
/// cpu.write(0x8001, 0x10);
/// cpu.step();
/// assert_eq!(cpu.a, 0x10);
/// ```
pub struct CPU {
    /// Accumulator register
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Program counter (address of the next instruction byte)
    pub pc: u16,

    /// Stack pointer (0x0100 + sp gives the full stack address)
    pub sp: u8,

    /// Negative flag (bit 7 of the last result)
    pub flag_n: bool,

    /// Overflow flag (signed overflow in arithmetic)
    pub flag_v: bool,

    /// Break flag (always packed as 1 in the status byte)
    pub flag_b: bool,

    /// Decimal mode flag (BCD arithmetic is not implemented; see `step`)
    pub flag_d: bool,

    /// Interrupt disable flag
    pub flag_i: bool,

    /// Zero flag (last result was zero)
    pub flag_z: bool,

    /// Carry flag (unsigned overflow, shift-out bit, or no-borrow)
    pub flag_c: bool,

    bus: AddressBus,
}

impl CPU {
    /// Create a CPU attached to a configured bus.
    ///
    /// Registers power on zeroed and all flags raised; call
    /// [`reset`](CPU::reset) to establish the documented start state and
    /// load PC from the reset vector.
    pub fn new(bus: AddressBus) -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            flag_n: true,
            flag_v: true,
            flag_b: true,
            flag_d: true,
            flag_i: true,
            flag_z: true,
            flag_c: true,
            bus,
        }
    }

    /// Shared access to the bus.
    pub fn bus(&self) -> &AddressBus {
        &self.bus
    }

    /// Exclusive access to the bus, e.g. to inject peripheral input
    /// between steps.
    pub fn bus_mut(&mut self) -> &mut AddressBus {
        &mut self.bus
    }

    /// Reset the processor: `B` and `I` raised, `D` cleared, `SP` zeroed,
    /// and PC loaded from the little-endian word at [`RESET_VECTOR`].
    pub fn reset(&mut self) {
        self.flag_b = true;
        self.flag_d = false;
        self.flag_i = true;
        self.sp = 0;
        self.pc = self.read_word(RESET_VECTOR);
    }

    // ========== Bus access ==========

    /// Read the byte at an absolute address.
    pub fn read(&self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    /// Write the byte at an absolute address.
    pub fn write(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }

    /// Read a little-endian 16-bit word at an absolute address.
    pub fn read_word(&self, addr: u16) -> u16 {
        self.bus.read_word(addr)
    }

    /// Write a little-endian 16-bit word at an absolute address.
    pub fn write_word(&mut self, addr: u16, value: u16) {
        self.bus.write_word(addr, value);
    }

    /// Fetch the byte at PC and advance PC by one.
    pub fn read_next(&mut self) -> u8 {
        let value = self.bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Fetch the little-endian word at PC and advance PC by two.
    pub fn read_next_word(&mut self) -> u16 {
        let value = self.bus.read_word(self.pc);
        self.pc = self.pc.wrapping_add(2);
        value
    }

    // ========== Status register ==========

    /// Pack the flags into the status byte.
    ///
    /// Bit layout is NV11DIZC: bits 4 and 5 are always 1 in the packed
    /// byte, whatever the `B` flag holds.
    pub fn status(&self) -> u8 {
        let mut status = 0b0011_0000;

        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }

        status
    }

    /// Restore flags from a packed status byte.
    ///
    /// N, V, D, I, Z, and C are restored individually; bits 4 and 5 are
    /// discarded, so `B` is untouched.
    pub fn load_status(&mut self, value: u8) {
        self.flag_n = value & 0b1000_0000 != 0;
        self.flag_v = value & 0b0100_0000 != 0;
        self.flag_d = value & 0b0000_1000 != 0;
        self.flag_i = value & 0b0000_0100 != 0;
        self.flag_z = value & 0b0000_0010 != 0;
        self.flag_c = value & 0b0000_0001 != 0;
    }

    // ========== Stack ==========

    /// Push a byte onto the stack page and decrement SP (wrapping).
    pub(crate) fn push(&mut self, value: u8) {
        self.write(STACK_PAGE + u16::from(self.sp), value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increment SP (wrapping) and read the byte it now points at.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.read(STACK_PAGE + u16::from(self.sp))
    }

    /// Push a 16-bit word, high byte first.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push((value & 0xFF) as u8);
    }

    /// Pull a 16-bit word pushed by [`push_word`](CPU::push_word).
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = u16::from(self.pull());
        let hi = u16::from(self.pull());
        lo | (hi << 8)
    }

    // ========== Flag helpers ==========

    /// Set the zero and negative flags from a result byte.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = value & 0x80 != 0;
    }

    // ========== Addressing modes ==========

    /// Resolve the operand value for a read-type operation, advancing PC
    /// past the operand bytes.
    pub(crate) fn operand_value(&mut self, mode: AddressingMode) -> u8 {
        if mode == AddressingMode::Immediate {
            return self.read_next();
        }

        let addr = self.operand_address(mode);
        self.read(addr)
    }

    /// Resolve the effective address for a write-type operation, advancing
    /// PC past the operand bytes.
    ///
    /// Zero-page indexed modes wrap the index add at 8 bits, so the
    /// effective address stays inside the zero page; only the indirect
    /// modes dereference a full 16-bit pointer.
    pub(crate) fn operand_address(&mut self, mode: AddressingMode) -> u16 {
        match mode {
            AddressingMode::ZeroPage => u16::from(self.read_next()),
            AddressingMode::ZeroPageX => {
                let base = self.read_next();
                u16::from(base.wrapping_add(self.x))
            }
            AddressingMode::ZeroPageY => {
                let base = self.read_next();
                u16::from(base.wrapping_add(self.y))
            }
            AddressingMode::Absolute => self.read_next_word(),
            AddressingMode::AbsoluteX => self.read_next_word().wrapping_add(u16::from(self.x)),
            AddressingMode::AbsoluteY => self.read_next_word().wrapping_add(u16::from(self.y)),
            AddressingMode::Indirect => {
                let ptr = self.read_next_word();
                self.read_word(ptr)
            }
            AddressingMode::IndirectX => {
                let ptr = self.read_next().wrapping_add(self.x);
                self.read_word(u16::from(ptr))
            }
            AddressingMode::IndirectY => {
                let ptr = u16::from(self.read_next());
                self.read_word(ptr).wrapping_add(u16::from(self.y))
            }
            AddressingMode::Implied | AddressingMode::Accumulator | AddressingMode::Immediate => {
                unreachable!("no effective address for {:?}", mode)
            }
        }
    }

    // ========== Execution ==========

    /// Execute exactly one instruction.
    ///
    /// Fetches the opcode at PC, resolves its addressing mode, and
    /// performs the operation. Opcode bytes absent from the decode table
    /// fall through without touching registers, flags, or memory.
    pub fn step(&mut self) {
        let opcode = self.read_next();

        let Some((mnemonic, mode)) = opcodes::decode(opcode) else {
            return;
        };

        match mnemonic {
            Mnemonic::Nop => {}

            // Arithmetic
            Mnemonic::Adc => {
                let value = self.operand_value(mode);
                alu::adc(self, value);
            }
            Mnemonic::Sbc => {
                let value = self.operand_value(mode);
                alu::sbc(self, value);
            }

            // Logicals
            Mnemonic::And => {
                let value = self.operand_value(mode);
                alu::and(self, value);
            }
            Mnemonic::Eor => {
                let value = self.operand_value(mode);
                alu::eor(self, value);
            }
            Mnemonic::Ora => {
                let value = self.operand_value(mode);
                alu::ora(self, value);
            }
            Mnemonic::Bit => {
                let value = self.operand_value(mode);
                alu::bit(self, value);
            }

            // Compares
            Mnemonic::Cmp => {
                let value = self.operand_value(mode);
                let register = self.a;
                alu::compare(self, register, value);
            }
            Mnemonic::Cpx => {
                let value = self.operand_value(mode);
                let register = self.x;
                alu::compare(self, register, value);
            }
            Mnemonic::Cpy => {
                let value = self.operand_value(mode);
                let register = self.y;
                alu::compare(self, register, value);
            }

            // Loads and stores
            Mnemonic::Lda => {
                let value = self.operand_value(mode);
                load_store::lda(self, value);
            }
            Mnemonic::Ldx => {
                let value = self.operand_value(mode);
                load_store::ldx(self, value);
            }
            Mnemonic::Ldy => {
                let value = self.operand_value(mode);
                load_store::ldy(self, value);
            }
            Mnemonic::Sta => {
                let addr = self.operand_address(mode);
                load_store::sta(self, addr);
            }
            Mnemonic::Stx => {
                let addr = self.operand_address(mode);
                load_store::stx(self, addr);
            }
            Mnemonic::Sty => {
                let addr = self.operand_address(mode);
                load_store::sty(self, addr);
            }

            // Transfers
            Mnemonic::Tax => transfer::tax(self),
            Mnemonic::Tay => transfer::tay(self),
            Mnemonic::Tsx => transfer::tsx(self),
            Mnemonic::Txa => transfer::txa(self),
            Mnemonic::Txs => transfer::txs(self),
            Mnemonic::Tya => transfer::tya(self),

            // Stack
            Mnemonic::Pha => stack::pha(self),
            Mnemonic::Php => stack::php(self),
            Mnemonic::Pla => stack::pla(self),
            Mnemonic::Plp => stack::plp(self),

            // Shifts and rotates
            Mnemonic::Asl => shifts::asl(self, mode),
            Mnemonic::Lsr => shifts::lsr(self, mode),
            Mnemonic::Rol => shifts::rol(self, mode),
            Mnemonic::Ror => shifts::ror(self, mode),

            // Increments and decrements
            Mnemonic::Inc => {
                let addr = self.operand_address(mode);
                inc_dec::inc(self, addr);
            }
            Mnemonic::Dec => {
                let addr = self.operand_address(mode);
                inc_dec::dec(self, addr);
            }
            Mnemonic::Inx => inc_dec::inx(self),
            Mnemonic::Iny => inc_dec::iny(self),
            Mnemonic::Dex => inc_dec::dex(self),
            Mnemonic::Dey => inc_dec::dey(self),

            // Jumps and subroutines
            Mnemonic::Jmp => control::jmp(self, mode),
            Mnemonic::Jsr => control::jsr(self),
            Mnemonic::Rts => control::rts(self),
        }
    }
}
