//! # Control Flow Instructions
//!
//! JMP, JSR, and RTS. None of them affect flags.
//!
//! JSR pushes the address of its own last operand byte (the return
//! address minus one); RTS compensates by adding one to the pulled word.

use crate::addressing::AddressingMode;
use crate::cpu::CPU;

/// Executes JMP: set PC to the target address.
///
/// Absolute mode jumps to the operand word; indirect mode reads the
/// target as a little-endian word at the address the operand points to.
pub(crate) fn jmp(cpu: &mut CPU, mode: AddressingMode) {
    let target = match mode {
        AddressingMode::Absolute => cpu.read_next_word(),
        AddressingMode::Indirect => {
            let ptr = cpu.read_next_word();
            cpu.read_word(ptr)
        }
        _ => unreachable!("JMP does not support {:?}", mode),
    };

    cpu.pc = target;
}

/// Executes JSR: push PC-1 as the return address, then jump.
pub(crate) fn jsr(cpu: &mut CPU) {
    let target = cpu.read_next_word();
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_addr);
    cpu.pc = target;
}

/// Executes RTS: pull the return address and resume one byte past it.
pub(crate) fn rts(cpu: &mut CPU) {
    cpu.pc = cpu.pull_word().wrapping_add(1);
}
