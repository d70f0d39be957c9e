//! # Stack Operations
//!
//! The stack lives in the fixed page at 0x0100 and grows downward. A push
//! writes at `0x0100 + SP` then decrements SP; a pull increments SP then
//! reads. SP wraps mod 256 with no bounds enforcement, so overflowing the
//! stack silently wraps around the page.

use crate::cpu::CPU;

/// Executes PHA: push the accumulator onto the stack.
pub(crate) fn pha(cpu: &mut CPU) {
    let value = cpu.a;
    cpu.push(value);
}

/// Executes PHP: push the packed status byte onto the stack.
///
/// The pushed byte has bits 4 and 5 forced to 1, as
/// [`CPU::status`] always packs them.
pub(crate) fn php(cpu: &mut CPU) {
    let status = cpu.status();
    cpu.push(status);
}

/// Executes PLA: pull a byte off the stack into the accumulator,
/// updating Z and N.
pub(crate) fn pla(cpu: &mut CPU) {
    let value = cpu.pull();
    cpu.a = value;
    cpu.set_zn(value);
}

/// Executes PLP: pull a byte off the stack and unpack it into the flags.
///
/// Z and N are taken from the packed byte like every other flag; PLP
/// trusts the pulled status rather than deriving flags from the value.
pub(crate) fn plp(cpu: &mut CPU) {
    let status = cpu.pull();
    cpu.load_status(status);
}
