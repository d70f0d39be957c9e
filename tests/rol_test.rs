//! Tests for the ROL (Rotate Left through carry) instruction.

mod common;

use common::create_with_rom;

#[test]
fn test_rol_accumulator_carry_in_and_out() {
    let mut cpu = create_with_rom(&[0x2A, 0x2A]);
    cpu.a = 0b0101_0101;
    cpu.flag_c = true;

    cpu.step();
    assert_eq!(cpu.a, 0b1010_1011);
    assert!(cpu.flag_n);
    assert!(!cpu.flag_z);
    assert!(!cpu.flag_c);

    cpu.flag_c = true;
    cpu.step();
    assert_eq!(cpu.a, 0b0101_0111);
    assert!(!cpu.flag_n);
    assert!(!cpu.flag_z);
    assert!(cpu.flag_c);
}

#[test]
fn test_rol_memory() {
    let mut cpu = create_with_rom(&[0x26, 0x00, 0x26, 0x00]);
    cpu.write(0x00, 0b0101_0101);
    cpu.flag_c = true;

    cpu.step();
    assert_eq!(cpu.read(0x00), 0b1010_1011);
    assert!(!cpu.flag_c);

    cpu.flag_c = true;
    cpu.step();
    assert_eq!(cpu.read(0x00), 0b0101_0111);
    assert!(cpu.flag_c);
}

#[test]
fn test_rol_without_carry_in() {
    let mut cpu = create_with_rom(&[0x2A]);
    cpu.a = 0b1000_0000;
    cpu.flag_c = false;

    cpu.step();

    assert_eq!(cpu.a, 0);
    assert!(cpu.flag_z);
    assert!(cpu.flag_c);
}
