//! # Address Bus
//!
//! The address bus owns every mapped device and external register and
//! routes byte accesses to them. Devices are laid out positionally: each
//! mapped device occupies the next free slice of the address space, so a
//! device's base address is the running sum of the sizes mapped before it.
//!
//! ## Soft failures
//!
//! Accesses that no device or register claims are never fatal: reads warn
//! through the [`log`] facade and return zero, writes warn and are dropped.
//! This mirrors a physical bus, where an unclaimed address floats instead
//! of crashing the machine.

use std::collections::BTreeMap;

use log::warn;

use crate::devices::Device;
use crate::register::ExternalRegister;
use crate::ConfigError;

/// Total number of bytes the device chain may allocate.
pub const ADDRESS_SPACE_LIMIT: u32 = 0xFFFF;

/// Width of an external register's address window, in bytes past its base.
///
/// The window test is inclusive at both ends, so a register claims five
/// addresses (`base ..= base + 4`) no matter how small its storage is.
/// Accesses inside the window but past the register's storage read zero
/// and ignore writes.
const REGISTER_WINDOW: u16 = 4;

/// A device bound to its slice of the address space.
struct DeviceMapping {
    base: u16,
    size: u16,
    device: Box<dyn Device>,
}

/// Memory mapper that routes byte accesses to devices and registers.
///
/// # Address Resolution
///
/// For every read or write:
/// 1. External registers are checked first, in ascending base-address
///    order; the first register whose window covers the address wins.
///    Registers may shadow device-mapped ranges.
/// 2. Otherwise the device chain is walked in mapping order and the access
///    is handed to the device whose slice contains the address, rebased to
///    a device-relative offset.
/// 3. Otherwise the access is unmapped: reads return zero, writes are
///    dropped, and a warning is logged.
///
/// # Examples
///
/// ```rust
/// use bus6502::{AddressBus, RamDevice};
///
/// let mut bus = AddressBus::new();
///
/// // 16KiB of RAM starting at address 0
/// bus.map(Box::new(RamDevice::new()), 16384).unwrap();
///
/// bus.write(0x1234, 0x42);
/// assert_eq!(bus.read(0x1234), 0x42);
///
/// // Unmapped reads are zero, not an error
/// assert_eq!(bus.read(0x8000), 0x00);
/// ```
pub struct AddressBus {
    devices: Vec<DeviceMapping>,
    registers: BTreeMap<u16, ExternalRegister>,
    total_allocated: u32,
}

impl AddressBus {
    /// Create an empty bus with nothing mapped.
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
            registers: BTreeMap::new(),
            total_allocated: 0,
        }
    }

    /// Map a device into the next `size` bytes of the address space.
    ///
    /// The device's base address becomes the sum of all previously mapped
    /// sizes; mapping order is layout order. The device's `init` hook runs
    /// once the size has been validated.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::FixedSizeMismatch`] if the device declares a fixed
    ///   size different from `size`
    /// - [`ConfigError::UnsupportedSize`] if `size` exceeds the device's
    ///   declared maximum
    /// - [`ConfigError::AddressSpaceExhausted`] if the cumulative
    ///   allocation would exceed [`ADDRESS_SPACE_LIMIT`]
    pub fn map(&mut self, mut device: Box<dyn Device>, size: u16) -> Result<(), ConfigError> {
        if let Some(fixed) = device.fixed_size() {
            if fixed != size {
                return Err(ConfigError::FixedSizeMismatch {
                    fixed,
                    requested: size,
                });
            }
        }

        let max = device.max_size();
        if size > max {
            return Err(ConfigError::UnsupportedSize {
                requested: size,
                max,
            });
        }

        let total = self.total_allocated + u32::from(size);
        if total > ADDRESS_SPACE_LIMIT {
            return Err(ConfigError::AddressSpaceExhausted { requested: size });
        }

        let base = self.total_allocated as u16;
        device.init(size);

        self.total_allocated = total;
        self.devices.push(DeviceMapping { base, size, device });
        Ok(())
    }

    /// Map a fixed-size device using its declared size.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingFixedSize`] if the device does not declare a
    /// fixed size, plus anything [`map`](AddressBus::map) can return.
    pub fn map_fixed(&mut self, device: Box<dyn Device>) -> Result<(), ConfigError> {
        match device.fixed_size() {
            Some(size) => self.map(device, size),
            None => Err(ConfigError::MissingFixedSize),
        }
    }

    /// Bind an external register at an absolute base address.
    ///
    /// Registers are checked before the device chain and may shadow
    /// device-mapped ranges. A register's window spans `base ..= base + 4`
    /// regardless of its storage size. Binding a second register at the
    /// same base replaces the first; overlapping windows at different
    /// bases resolve to the smallest base address.
    pub fn map_register(&mut self, register: ExternalRegister, addr: u16) {
        self.registers.insert(addr, register);
    }

    /// Read the byte at an absolute address.
    ///
    /// Unmapped reads log a warning and return zero.
    pub fn read(&self, addr: u16) -> u8 {
        for (&base, register) in &self.registers {
            if addr >= base && addr - base <= REGISTER_WINDOW {
                return register.read(addr - base);
            }
        }

        for mapping in &self.devices {
            if addr >= mapping.base && addr - mapping.base < mapping.size {
                return mapping.device.read(addr - mapping.base);
            }
        }

        warn!("read from unmapped address ${:04X}", addr);
        0
    }

    /// Write the byte at an absolute address.
    ///
    /// Unmapped writes log a warning and are dropped.
    pub fn write(&mut self, addr: u16, value: u8) {
        for (&base, register) in &mut self.registers {
            if addr >= base && addr - base <= REGISTER_WINDOW {
                register.write(addr - base, value);
                return;
            }
        }

        for mapping in &mut self.devices {
            if addr >= mapping.base && addr - mapping.base < mapping.size {
                mapping.device.write(addr - mapping.base, value);
                return;
            }
        }

        warn!("write to unmapped address ${:04X}", addr);
    }

    /// Read a 16-bit word at an absolute address.
    ///
    /// Words are always little-endian, composed from two byte reads. The
    /// high byte's address wraps around the top of the address space.
    pub fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        lo | (hi << 8)
    }

    /// Write a 16-bit word at an absolute address, little-endian.
    pub fn write_word(&mut self, addr: u16, value: u16) {
        self.write(addr, (value & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }
}

impl Default for AddressBus {
    fn default() -> Self {
        Self::new()
    }
}
