//! Tests for the LDA (Load Accumulator) instruction.

mod common;

use common::create_with_rom;

#[test]
fn test_lda_immediate() {
    let mut cpu = create_with_rom(&[0xA9, 52]);

    cpu.step();

    assert_eq!(cpu.a, 52);
    assert!(!cpu.flag_z);
    assert!(!cpu.flag_n);
}

#[test]
fn test_lda_zero_sets_z() {
    let mut cpu = create_with_rom(&[0xA9, 0]);

    cpu.step();

    assert_eq!(cpu.a, 0);
    assert!(cpu.flag_z);
}

#[test]
fn test_lda_negative_sets_n() {
    let mut cpu = create_with_rom(&[0xA9, 234]);

    cpu.step();

    assert_eq!(cpu.a, 234);
    assert!(cpu.flag_n);
}

#[test]
fn test_lda_absolute() {
    let mut cpu = create_with_rom(&[0xAD, 0x00, 0x20]);
    cpu.write(0x2000, 0x42);

    cpu.step();

    assert_eq!(cpu.a, 0x42);
}

#[test]
fn test_lda_indirect_x() {
    let mut cpu = create_with_rom(&[0xA1, 0x02]);
    cpu.x = 1;
    cpu.write_word(0x03, 0x2000);
    cpu.write(0x2000, 0x42);

    cpu.step();

    assert_eq!(cpu.a, 0x42);
}

#[test]
fn test_lda_indirect_y() {
    let mut cpu = create_with_rom(&[0xB1, 0x05]);
    cpu.y = 1;
    cpu.write_word(0x05, 0x1FFF);
    cpu.write(0x2000, 0x42);

    cpu.step();

    assert_eq!(cpu.a, 0x42);
}

#[test]
fn test_lda_zero_page_x_wraps() {
    // Base 0xFF + X 2 wraps within the zero page to 0x01
    let mut cpu = create_with_rom(&[0xB5, 0xFF]);
    cpu.x = 2;
    cpu.write(0x01, 0x99);

    cpu.step();

    assert_eq!(cpu.a, 0x99);
}
