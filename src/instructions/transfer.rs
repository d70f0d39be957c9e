//! # Register Transfer Instructions
//!
//! Register-to-register copies. Every transfer updates Z and N from the
//! destination except TXS: the stack pointer is not flag-observable.

use crate::cpu::CPU;

/// Executes TAX: copy the accumulator into X.
pub(crate) fn tax(cpu: &mut CPU) {
    cpu.x = cpu.a;
    let result = cpu.x;
    cpu.set_zn(result);
}

/// Executes TAY: copy the accumulator into Y.
pub(crate) fn tay(cpu: &mut CPU) {
    cpu.y = cpu.a;
    let result = cpu.y;
    cpu.set_zn(result);
}

/// Executes TSX: copy the stack pointer into X.
pub(crate) fn tsx(cpu: &mut CPU) {
    cpu.x = cpu.sp;
    let result = cpu.x;
    cpu.set_zn(result);
}

/// Executes TXA: copy X into the accumulator.
pub(crate) fn txa(cpu: &mut CPU) {
    cpu.a = cpu.x;
    let result = cpu.a;
    cpu.set_zn(result);
}

/// Executes TXS: copy X into the stack pointer. No flags are affected.
pub(crate) fn txs(cpu: &mut CPU) {
    cpu.sp = cpu.x;
}

/// Executes TYA: copy Y into the accumulator.
pub(crate) fn tya(cpu: &mut CPU) {
    cpu.a = cpu.y;
    let result = cpu.a;
    cpu.set_zn(result);
}
