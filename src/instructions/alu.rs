//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! Arithmetic and logical operations: ADC, SBC, AND, ORA, EOR, BIT, and
//! the compare family (CMP, CPX, CPY share one implementation).

use crate::cpu::CPU;

/// Executes ADC (Add with Carry).
///
/// Adds the operand plus the carry flag to the accumulator. C is set on
/// unsigned overflow past 255, V on signed overflow (both operands share a
/// sign the result lacks), and Z/N follow the 8-bit result.
///
/// With the decimal flag set the operation does nothing: BCD arithmetic
/// is an unimplemented mode of this core, and binary semantics are
/// deliberately not applied in its place.
pub(crate) fn adc(cpu: &mut CPU, value: u8) {
    if cpu.flag_d {
        // TODO: BCD arithmetic when the decimal flag is set
        return;
    }

    let carry_in = u16::from(cpu.flag_c);
    let sum = u16::from(cpu.a) + u16::from(value) + carry_in;
    let result = sum as u8;

    cpu.flag_c = sum > 0xFF;
    cpu.flag_v = (cpu.a ^ result) & (value ^ result) & 0x80 != 0;
    cpu.a = result;
    cpu.set_zn(result);
}

/// Executes SBC (Subtract with Carry).
///
/// Subtracts the operand and the borrow (the inverted carry flag) from
/// the accumulator. C is set when no borrow was needed (A >= operand +
/// borrow), V on signed overflow, Z/N from the result.
///
/// Decimal mode is the same unimplemented stub as [`adc`].
pub(crate) fn sbc(cpu: &mut CPU, value: u8) {
    if cpu.flag_d {
        // TODO: BCD arithmetic when the decimal flag is set
        return;
    }

    let borrow = u16::from(!cpu.flag_c);
    let a = cpu.a;
    let result = u16::from(a)
        .wrapping_sub(u16::from(value))
        .wrapping_sub(borrow) as u8;

    cpu.flag_c = u16::from(a) >= u16::from(value) + borrow;
    cpu.flag_v = (a ^ value) & (a ^ result) & 0x80 != 0;
    cpu.a = result;
    cpu.set_zn(result);
}

/// Executes AND: bitwise AND of the operand into the accumulator.
pub(crate) fn and(cpu: &mut CPU, value: u8) {
    cpu.a &= value;
    let result = cpu.a;
    cpu.set_zn(result);
}

/// Executes EOR: bitwise exclusive OR of the operand into the accumulator.
pub(crate) fn eor(cpu: &mut CPU, value: u8) {
    cpu.a ^= value;
    let result = cpu.a;
    cpu.set_zn(result);
}

/// Executes ORA: bitwise OR of the operand into the accumulator.
pub(crate) fn ora(cpu: &mut CPU, value: u8) {
    cpu.a |= value;
    let result = cpu.a;
    cpu.set_zn(result);
}

/// Executes BIT (Bit Test).
///
/// Z comes from `A AND operand`, but the AND result is discarded and the
/// accumulator is untouched. N and V are copied straight from bits 7 and
/// 6 of the operand itself, not of the AND result.
pub(crate) fn bit(cpu: &mut CPU, value: u8) {
    cpu.flag_z = cpu.a & value == 0;
    cpu.flag_n = value & 0b1000_0000 != 0;
    cpu.flag_v = value & 0b0100_0000 != 0;
}

/// Shared implementation of CMP, CPX, and CPY.
///
/// Behaves like a subtraction whose result is discarded except for flags:
/// C is set when the register is greater than or equal to the operand (no
/// borrow), Z on equality, N from bit 7 of the difference.
pub(crate) fn compare(cpu: &mut CPU, register: u8, value: u8) {
    let result = register.wrapping_sub(value);
    cpu.flag_c = register >= value;
    cpu.set_zn(result);
}
