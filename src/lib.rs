//! # Modular 6502 CPU Emulator
//!
//! An NMOS 6502 CPU emulator built around a pluggable address bus. The 64KiB
//! address space is assembled at configuration time out of independently-sized
//! devices (RAM, ROM, custom peripherals) laid out back-to-back in mapping
//! order, plus small "external register" windows bound to fixed absolute
//! addresses that take priority over the device chain.
//!
//! ## Quick Start
//!
//! ```rust
//! use bus6502::{AddressBus, RamDevice, RomDevice, CPU};
//!
//! // 32KiB of RAM at the bottom of the address space
//! let mut bus = AddressBus::new();
//! bus.map(Box::new(RamDevice::new()), 0x7FFF).unwrap();
//!
//! // ROM image with a program and the reset vector pointing at its start
//! let mut image = vec![0; 0x7FFF];
//! image[0] = 0xA9; // LDA #$2A
//! image[1] = 0x2A;
//! image[0xFFFC - 0x7FFF] = 0xFF; // reset vector low byte
//! image[0xFFFD - 0x7FFF] = 0x7F; // reset vector high byte -> $7FFF
//! bus.map(Box::new(RomDevice::new(image)), 0x7FFF).unwrap();
//!
//! let mut cpu = CPU::new(bus);
//! cpu.reset();
//! assert_eq!(cpu.pc, 0x7FFF);
//!
//! cpu.step();
//! assert_eq!(cpu.a, 0x2A);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: the CPU talks to memory only through [`AddressBus`],
//!   which routes every access to a [`Device`] or [`ExternalRegister`]
//! - **Positional layout**: a device's base address is the running sum of
//!   the sizes mapped before it; devices never overlap by construction
//! - **Soft failures**: unmapped accesses, unrecognized opcodes, and
//!   decimal-mode arithmetic degrade gracefully instead of aborting;
//!   diagnostics go through the [`log`] facade so hosts can redirect or
//!   suppress them
//! - **Configuration-time errors only**: the two fallible operations are
//!   mapping a device and constructing an external register; once
//!   execution starts, nothing returns an error
//!
//! ## Modules
//!
//! - `cpu` - CPU state, addressing-mode resolution, and execution
//! - `bus` - address bus and device/register routing
//! - `devices` - the `Device` trait plus RAM and ROM implementations
//! - `register` - external peripheral registers
//! - `opcodes` - opcode decode table
//! - `addressing` - addressing mode enumeration

pub mod addressing;
pub mod bus;
pub mod cpu;
pub mod devices;
pub mod opcodes;
pub mod register;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use bus::AddressBus;
pub use cpu::CPU;
pub use devices::{Device, RamDevice, RomDevice};
pub use opcodes::Mnemonic;
pub use register::ExternalRegister;

use thiserror::Error;

/// Errors raised while assembling the address space.
///
/// All of these occur strictly during the one-time configuration phase.
/// Execution itself never fails: unmapped accesses and unrecognized
/// opcodes are soft no-ops by design.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The cumulative size of all mapped devices would exceed the 16-bit
    /// address space.
    #[error("unable to allocate {requested} byte(s): address space exhausted")]
    AddressSpaceExhausted {
        /// Size of the device that could not be mapped
        requested: u16,
    },

    /// A device was asked to occupy more bytes than it supports.
    #[error("device does not support {requested} address(es), maximum is {max}")]
    UnsupportedSize {
        /// Requested window size
        requested: u16,
        /// The device's declared maximum
        max: u16,
    },

    /// A fixed-size device was asked to occupy a different size.
    #[error("device requires a window of exactly {fixed} byte(s), got {requested}")]
    FixedSizeMismatch {
        /// The device's declared fixed size
        fixed: u16,
        /// Requested window size
        requested: u16,
    },

    /// A device without a fixed size was mapped without an explicit size.
    #[error("device does not provide a fixed size")]
    MissingFixedSize,

    /// An external register requested more storage than registers allow.
    #[error(
        "external registers can only hold a max of 4 bytes, requested \
         {requested}; use a device if more storage is needed"
    )]
    RegisterTooLarge {
        /// Requested register size in bytes
        requested: u16,
    },
}
