//! Shared helpers for the integration tests.
//!
//! The standard machine is the smallest useful layout: 32KiB of RAM at
//! the bottom of the address space followed by a 32KiB ROM window whose
//! image carries the program under test and a reset vector pointing at
//! the ROM's first byte (0x7FFF).

#![allow(dead_code)]

use bus6502::{AddressBus, RamDevice, RomDevice, CPU};

/// Arbitrary ROM bytes for tests that only care about the fetch path.
pub const SAMPLE_ROM: [u8; 7] = [4, 66, 123, 15, 55, 255, 54];

/// Build a machine with `program` at the start of ROM, reset it, and
/// park the stack pointer at the top of the stack page.
pub fn create_with_rom(program: &[u8]) -> CPU {
    let mut image = vec![0u8; 0x7FFF];
    image[..program.len()].copy_from_slice(program);

    // Reset vector points at the first ROM byte
    image[0xFFFC - 0x7FFF] = 0xFF;
    image[0xFFFD - 0x7FFF] = 0x7F;

    let mut bus = AddressBus::new();
    bus.map(Box::new(RamDevice::new()), 0x7FFF).unwrap();
    bus.map(Box::new(RomDevice::new(image)), 0x7FFF).unwrap();

    let mut cpu = CPU::new(bus);
    cpu.reset();
    cpu.sp = 0xFF;
    cpu
}

/// Build the standard machine with [`SAMPLE_ROM`] as its program.
pub fn create_basic() -> CPU {
    create_with_rom(&SAMPLE_ROM)
}
