//! Tests for the DEX (Decrement X Register) instruction.

mod common;

use common::create_with_rom;

#[test]
fn test_dex_basic() {
    let mut cpu = create_with_rom(&[0xCA]);
    cpu.x = 5;

    cpu.step();

    assert_eq!(cpu.x, 4);
    assert!(!cpu.flag_n);
    assert!(!cpu.flag_z);
}

#[test]
fn test_dex_wraps() {
    let mut cpu = create_with_rom(&[0xCA]);
    cpu.x = 0;

    cpu.step();

    assert_eq!(cpu.x, 0xFF);
    assert!(cpu.flag_n);
}
