//! # Increment and Decrement Instructions
//!
//! INC/DEC are read-modify-write on memory; INX/INY/DEX/DEY operate on
//! the index registers. All wrap mod 256 and update Z/N from the result;
//! none of them touch C or V.

use crate::cpu::CPU;

/// Executes INC: increment the byte at the effective address.
pub(crate) fn inc(cpu: &mut CPU, addr: u16) {
    let result = cpu.read(addr).wrapping_add(1);
    cpu.write(addr, result);
    cpu.set_zn(result);
}

/// Executes DEC: decrement the byte at the effective address.
pub(crate) fn dec(cpu: &mut CPU, addr: u16) {
    let result = cpu.read(addr).wrapping_sub(1);
    cpu.write(addr, result);
    cpu.set_zn(result);
}

/// Executes INX: increment the X register.
pub(crate) fn inx(cpu: &mut CPU) {
    cpu.x = cpu.x.wrapping_add(1);
    let result = cpu.x;
    cpu.set_zn(result);
}

/// Executes INY: increment the Y register.
pub(crate) fn iny(cpu: &mut CPU) {
    cpu.y = cpu.y.wrapping_add(1);
    let result = cpu.y;
    cpu.set_zn(result);
}

/// Executes DEX: decrement the X register.
pub(crate) fn dex(cpu: &mut CPU) {
    cpu.x = cpu.x.wrapping_sub(1);
    let result = cpu.x;
    cpu.set_zn(result);
}

/// Executes DEY: decrement the Y register.
pub(crate) fn dey(cpu: &mut CPU) {
    cpu.y = cpu.y.wrapping_sub(1);
    let result = cpu.y;
    cpu.set_zn(result);
}
