//! RAM device implementation.
//!
//! Provides readable and writable memory storage via the Device trait.

use super::Device;

/// Simple RAM device with readable and writable storage.
///
/// The backing buffer is zero-initialized and sized when the device is
/// mapped, so the same type serves any window size the host asks for.
///
/// # Examples
///
/// ```rust
/// use bus6502::{AddressBus, RamDevice};
///
/// let mut bus = AddressBus::new();
/// bus.map(Box::new(RamDevice::new()), 1024).unwrap();
///
/// bus.write(0x42, 0xAA);
/// assert_eq!(bus.read(0x42), 0xAA);
/// ```
pub struct RamDevice {
    data: Vec<u8>,
}

impl RamDevice {
    /// Create a new, unsized RAM device.
    ///
    /// Storage is allocated when the bus maps the device.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Load bytes into RAM at the specified offset.
    ///
    /// Useful for seeding memory with program data before execution.
    /// Only meaningful after the device has been mapped.
    ///
    /// # Panics
    ///
    /// Panics if `offset + bytes.len()` exceeds the allocated size.
    pub fn load_bytes(&mut self, offset: u16, bytes: &[u8]) {
        let start = offset as usize;
        let end = start + bytes.len();
        self.data[start..end].copy_from_slice(bytes);
    }
}

impl Default for RamDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for RamDevice {
    fn init(&mut self, allocated_size: u16) {
        self.data = vec![0; allocated_size as usize];
    }

    fn read(&self, offset: u16) -> u8 {
        self.data[offset as usize]
    }

    fn write(&mut self, offset: u16, value: u8) {
        self.data[offset as usize] = value;
    }
}
