//! ROM device implementation.
//!
//! Provides read-only memory storage via the Device trait.

use super::Device;

/// Read-only memory device.
///
/// `RomDevice` stores an immutable image supplied at construction. Writes
/// fall through to the default unsupported-write behavior (warn and
/// ignore). Reads past the end of the image return zero, so an image
/// smaller than its mapped window is fine — for example a program with
/// vector bytes placed near the end of the window.
///
/// # Examples
///
/// ```rust
/// use bus6502::{Device, RomDevice};
///
/// let rom = RomDevice::new(vec![0xEA, 0xEA, 0xEA]);
///
/// assert_eq!(rom.read(0), 0xEA);
///
/// // Reads beyond the image return zero
/// assert_eq!(rom.read(100), 0x00);
/// ```
pub struct RomDevice {
    data: Vec<u8>,
}

impl RomDevice {
    /// Create a new ROM device with the given image.
    ///
    /// The image is immutable after construction.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl Device for RomDevice {
    fn read(&self, offset: u16) -> u8 {
        self.data.get(offset as usize).copied().unwrap_or(0)
    }

    // Writes inherit the default: warn and ignore.
}
