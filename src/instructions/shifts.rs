//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, and ROR each have an accumulator form and a
//! read-modify-write memory form; the addressing mode picks which. C
//! captures the bit shifted out, the rotates additionally shift the
//! previous C into the vacated bit, and LSR forces N clear since the top
//! bit is always 0 after a right shift.

use crate::addressing::AddressingMode;
use crate::cpu::CPU;

/// Executes ASL (Arithmetic Shift Left).
pub(crate) fn asl(cpu: &mut CPU, mode: AddressingMode) {
    modify(cpu, mode, |cpu, value| {
        cpu.flag_c = value & 0b1000_0000 != 0;
        value << 1
    });
}

/// Executes LSR (Logical Shift Right).
pub(crate) fn lsr(cpu: &mut CPU, mode: AddressingMode) {
    modify(cpu, mode, |cpu, value| {
        cpu.flag_c = value & 0b0000_0001 != 0;
        value >> 1
    });
}

/// Executes ROL (Rotate Left through carry).
pub(crate) fn rol(cpu: &mut CPU, mode: AddressingMode) {
    modify(cpu, mode, |cpu, value| {
        let carry_in = cpu.flag_c;
        cpu.flag_c = value & 0b1000_0000 != 0;
        let mut result = value << 1;
        if carry_in {
            result |= 0b0000_0001;
        }
        result
    });
}

/// Executes ROR (Rotate Right through carry).
pub(crate) fn ror(cpu: &mut CPU, mode: AddressingMode) {
    modify(cpu, mode, |cpu, value| {
        let carry_in = cpu.flag_c;
        cpu.flag_c = value & 0b0000_0001 != 0;
        let mut result = value >> 1;
        if carry_in {
            result |= 0b1000_0000;
        }
        result
    });
}

/// Shared read-modify-write plumbing for the shift family.
///
/// Accumulator mode operates on A directly; every other mode resolves an
/// effective address, reads, transforms, and writes back. Z and N follow
/// the result either way (N ends up clear for LSR because its result
/// never has bit 7 set).
fn modify(cpu: &mut CPU, mode: AddressingMode, op: impl Fn(&mut CPU, u8) -> u8) {
    let result = if mode == AddressingMode::Accumulator {
        let value = cpu.a;
        let result = op(cpu, value);
        cpu.a = result;
        result
    } else {
        let addr = cpu.operand_address(mode);
        let value = cpu.read(addr);
        let result = op(cpu, value);
        cpu.write(addr, result);
        result
    };

    cpu.set_zn(result);
}
