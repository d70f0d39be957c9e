//! Tests for the JSR (Jump to Subroutine) instruction and the full
//! call/return round trip with RTS.

mod common;

use common::create_with_rom;

#[test]
fn test_jsr_pushes_return_address_minus_one() {
    // JSR at 0x7FFF: the instruction ends at 0x8001, so the pushed
    // return address is 0x8001
    let mut cpu = create_with_rom(&[0x20, 0x00, 0x10]);

    cpu.step();

    assert_eq!(cpu.pc, 0x1000);
    assert_eq!(cpu.sp, 0xFD);
    assert_eq!(cpu.read_word(0x01FE), 0x8001);
}

#[test]
fn test_jsr_rts_round_trip() {
    // LDX #$40; JSR $8006; (NOPs); subroutine: LDA #$00; RTS
    let mut cpu = create_with_rom(&[
        0xA2, 0x40, 0x20, 0x06, 0x80, 0xEA, 0xEA, 0xA9, 0x00, 0x60,
    ]);
    cpu.a = 0x55;

    for _ in 0..4 {
        cpu.step();
    }

    assert_eq!(cpu.a, 0);
    assert_eq!(cpu.x, 0x40);
    assert_eq!(cpu.pc, 0x8004); // back at the instruction after the JSR
    assert_eq!(cpu.sp, 0xFF); // stack balanced again
}

#[test]
fn test_nested_jsr() {
    // JSR $1000 -> JSR $2000 -> RTS -> RTS lands after the first call
    let mut cpu = create_with_rom(&[0x20, 0x00, 0x10]);
    cpu.write(0x1000, 0x20); // JSR $2000
    cpu.write_word(0x1001, 0x2000);
    cpu.write(0x1003, 0x60); // RTS
    cpu.write(0x2000, 0x60); // RTS

    cpu.step(); // JSR $1000
    cpu.step(); // JSR $2000
    assert_eq!(cpu.sp, 0xFB);

    cpu.step(); // RTS -> 0x1003
    assert_eq!(cpu.pc, 0x1003);

    cpu.step(); // RTS -> 0x8002
    assert_eq!(cpu.pc, 0x8002);
    assert_eq!(cpu.sp, 0xFF);
}
