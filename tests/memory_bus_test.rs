//! Integration tests for address-bus routing, word access, and the
//! configuration-phase error surface.

mod common;

use bus6502::{AddressBus, ConfigError, Device, RamDevice, RomDevice};
use common::create_basic;
use pretty_assertions::assert_eq;

#[test]
fn test_write_read() {
    let mut cpu = create_basic();

    cpu.write(0x400, 4);

    assert_eq!(cpu.read(0x400), 4);
}

#[test]
fn test_write_read_word() {
    let mut cpu = create_basic();

    cpu.write_word(0x400, 0x3F4D);

    assert_eq!(cpu.read_word(0x400), 0x3F4D);
}

#[test]
fn test_word_access_is_little_endian() {
    let mut cpu = create_basic();

    cpu.write_word(0x400, 0x1234);

    assert_eq!(cpu.read(0x400), 0x34);
    assert_eq!(cpu.read(0x401), 0x12);
}

#[test]
fn test_unmapped_read_returns_zero() {
    // The standard machine maps 0x0000-0xFFFD; the last two addresses
    // belong to nothing.
    let cpu = create_basic();

    assert_eq!(cpu.read(0xFFFE), 0);
    assert_eq!(cpu.read(0xFFFF), 0);
}

#[test]
fn test_unmapped_write_is_ignored() {
    let mut cpu = create_basic();

    cpu.write(0xFFFE, 0x42);

    assert_eq!(cpu.read(0xFFFE), 0);
}

#[test]
fn test_rom_window_is_read_only() {
    let mut cpu = create_basic();

    let original = cpu.read(0x7FFF);
    cpu.write(0x7FFF, original.wrapping_add(1));

    assert_eq!(cpu.read(0x7FFF), original);
}

#[test]
fn test_rom_reads_past_image_return_zero() {
    let mut bus = AddressBus::new();
    bus.map(Box::new(RomDevice::new(vec![0x11, 0x22])), 0x100)
        .unwrap();

    assert_eq!(bus.read(0x0000), 0x11);
    assert_eq!(bus.read(0x0001), 0x22);
    assert_eq!(bus.read(0x0002), 0x00);
    assert_eq!(bus.read(0x00FF), 0x00);
}

#[test]
fn test_devices_are_laid_out_in_mapping_order() {
    let mut bus = AddressBus::new();
    bus.map(Box::new(RomDevice::new(vec![0xAA; 0x10])), 0x10)
        .unwrap();
    bus.map(Box::new(RomDevice::new(vec![0xBB; 0x10])), 0x10)
        .unwrap();
    bus.map(Box::new(RomDevice::new(vec![0xCC; 0x10])), 0x10)
        .unwrap();

    assert_eq!(bus.read(0x0000), 0xAA);
    assert_eq!(bus.read(0x000F), 0xAA);
    assert_eq!(bus.read(0x0010), 0xBB);
    assert_eq!(bus.read(0x0020), 0xCC);
    assert_eq!(bus.read(0x0030), 0x00);
}

#[test]
fn test_mapping_past_address_space_fails() {
    let mut bus = AddressBus::new();
    bus.map(Box::new(RamDevice::new()), 0xFFFF).unwrap();

    let err = bus.map(Box::new(RamDevice::new()), 1).unwrap_err();

    assert_eq!(err, ConfigError::AddressSpaceExhausted { requested: 1 });
}

struct TwoBytePort;

impl Device for TwoBytePort {
    fn fixed_size(&self) -> Option<u16> {
        Some(2)
    }
}

#[test]
fn test_fixed_size_device_rejects_other_sizes() {
    let mut bus = AddressBus::new();

    let err = bus.map(Box::new(TwoBytePort), 8).unwrap_err();
    assert_eq!(
        err,
        ConfigError::FixedSizeMismatch {
            fixed: 2,
            requested: 8
        }
    );

    assert!(bus.map_fixed(Box::new(TwoBytePort)).is_ok());
}

#[test]
fn test_map_fixed_without_fixed_size_fails() {
    let mut bus = AddressBus::new();

    let err = bus.map_fixed(Box::new(RamDevice::new())).unwrap_err();

    assert_eq!(err, ConfigError::MissingFixedSize);
}

struct TinyDevice;

impl Device for TinyDevice {
    fn max_size(&self) -> u16 {
        4
    }
}

#[test]
fn test_device_max_size_is_enforced() {
    let mut bus = AddressBus::new();

    let err = bus.map(Box::new(TinyDevice), 5).unwrap_err();

    assert_eq!(
        err,
        ConfigError::UnsupportedSize {
            requested: 5,
            max: 4
        }
    );
}
