//! Memory-mapped device support.
//!
//! This module provides the [`Device`] trait through which the address bus
//! talks to every pluggable memory region, plus the RAM and ROM
//! implementations.
//!
//! # Architecture
//!
//! - **Device trait**: abstract interface for memory-mapped hardware
//! - **Positional layout**: devices do not declare a base address; the bus
//!   assigns each device the next free slice of the address space in
//!   mapping order (see [`crate::AddressBus::map`])
//! - **Offset-based access**: a device always sees addresses relative to
//!   its own window (0 to size-1), never absolute bus addresses

pub mod ram;
pub mod rom;

// Re-export device types
pub use ram::RamDevice;
pub use rom::RomDevice;

use log::warn;

/// Abstract interface for memory-mapped hardware devices.
///
/// Devices implement this trait to provide read/write access to their
/// internal storage and state. The address bus calls these methods with
/// offset-based addressing (0 to size-1) to keep devices independent of
/// where they land in the address space.
///
/// # Sizing
///
/// A device is sized when it is mapped, not when it is constructed:
/// [`init`](Device::init) receives the window size the bus granted and is
/// the place to allocate backing storage. [`max_size`](Device::max_size)
/// and [`fixed_size`](Device::fixed_size) let a device constrain what the
/// bus may grant; violations surface as [`crate::ConfigError`] at mapping
/// time.
///
/// # Partially-implemented peripherals
///
/// The default `read` and `write` implementations emit a warning and
/// behave as a zero-read / ignored-write. A device that only supports one
/// direction simply leaves the other default in place; the bus never
/// treats a missing direction as an error.
///
/// # Examples
///
/// ```rust
/// use bus6502::Device;
///
/// struct OutputPort {
///     latch: u8,
/// }
///
/// impl Device for OutputPort {
///     fn fixed_size(&self) -> Option<u16> {
///         Some(1)
///     }
///
///     fn write(&mut self, _offset: u16, value: u8) {
///         self.latch = value;
///     }
///
///     // Reads fall back to the default: warn and return zero.
/// }
/// ```
pub trait Device {
    /// Largest window this device can be asked to occupy.
    fn max_size(&self) -> u16 {
        0xFFFF
    }

    /// Exact window size for devices that cannot be resized.
    ///
    /// Devices returning `Some(n)` can be mapped without an explicit size
    /// via [`crate::AddressBus::map_fixed`] and reject any other size.
    fn fixed_size(&self) -> Option<u16> {
        None
    }

    /// Called once when the device is mapped, with the granted window size.
    ///
    /// Devices that size their backing storage dynamically allocate it
    /// here. The bus validates the size against `max_size`/`fixed_size`
    /// before calling.
    fn init(&mut self, allocated_size: u16) {
        let _ = allocated_size;
    }

    /// Read a byte at an offset relative to the device's window.
    fn read(&self, offset: u16) -> u8 {
        let _ = offset;
        warn!("device does not support read operations");
        0
    }

    /// Write a byte at an offset relative to the device's window.
    fn write(&mut self, offset: u16, value: u8) {
        let _ = (offset, value);
        warn!("device does not support write operations");
    }
}
