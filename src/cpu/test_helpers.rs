#![macro_use]

//! Test harness adapted from the teacher's macro-driven assembly-text DSL:
//! the same flag constants and assert-mismatch reporting, but driven by
//! literal byte-array programs rather than re-implementing a 6502
//! assembler, which is out of this crate's scope.

use crate::bus::{Bus, Memory};
use crate::cpu::{Cpu, StatusFlag};

pub const P: u8 = StatusFlag::InterruptDisable as u8 | StatusFlag::Unused as u8;
pub const C: u8 = StatusFlag::Carry as u8;
pub const Z: u8 = StatusFlag::Zero as u8;
pub const I: u8 = StatusFlag::InterruptDisable as u8;
pub const D: u8 = StatusFlag::Decimal as u8;
pub const B: u8 = StatusFlag::Break as u8;
pub const U: u8 = StatusFlag::Unused as u8;
pub const V: u8 = StatusFlag::Overflow as u8;
pub const N: u8 = StatusFlag::Negative as u8;

/// Where test programs are loaded. Arbitrary, but far enough from the
/// zero and stack pages that indexed/indirect test operands never
/// collide with the program bytes themselves.
pub const PROGRAM_START: u16 = 0x8000;

/// Wires up a full 64K RAM bus with `bytes` loaded at `PROGRAM_START` and
/// the reset vector pointed at it, resets the CPU onto it, then runs
/// exactly `instructions` full instructions with `clock(bus, true)` —
/// this core never halts on its own, so the caller always says how many
/// instructions the scenario needs.
pub fn run_program(bytes: &[u8], instructions: usize) -> (Cpu, Bus) {
    // Lets `RUST_LOG=trace cargo test -- --nocapture` show the `log`
    // events `Cpu::clock` emits per fetch; harmless if already set up by
    // an earlier test in the same binary.
    let _ = env_logger::try_init();

    let mem = Memory::new(0x0000, 0xFFFF);
    let mut bus = Bus::new();
    bus.connect(Box::new(mem));
    for (i, &byte) in bytes.iter().enumerate() {
        bus.write8(PROGRAM_START.wrapping_add(i as u16), byte);
    }
    bus.write16(0xFFFC, PROGRAM_START);

    let mut cpu = Cpu::new();
    cpu.reset(&bus);
    for _ in 0..instructions {
        cpu.clock(&mut bus, true);
    }
    (cpu, bus)
}

pub fn assert_status(cpu: &Cpu, expected: u8) {
    let flags = [
        ("Carry", C),
        ("Zero", Z),
        ("InterruptDisable", I),
        ("Decimal", D),
        ("Break", B),
        ("Unused", U),
        ("Overflow", V),
        ("Negative", N),
    ];
    let mut mismatches = String::new();
    for (name, bit) in flags {
        let want = expected & bit != 0;
        let got = cpu.snapshot().p & bit != 0;
        if want != got {
            mismatches.push_str(&format!(
                "Expected StatusFlag::{} to be {} but received {}\n",
                name, want, got
            ));
        }
    }
    if cpu.snapshot().p != expected {
        panic!(
            "\nExpected cpu status 0b{:08b} to match 0b{:08b}\n{}",
            cpu.snapshot().p,
            expected,
            mismatches
        );
    }
}

pub fn assert_register_a(bytes: &[u8], instructions: usize, value: u8, status: u8) {
    let (cpu, _bus) = run_program(bytes, instructions);
    if cpu.snapshot().a != value {
        panic!(
            "Expected register A to be {:#04x} but it was {:#04x}",
            value,
            cpu.snapshot().a
        );
    }
    assert_status(&cpu, status);
}

pub fn assert_register_x(bytes: &[u8], instructions: usize, value: u8, status: u8) {
    let (cpu, _bus) = run_program(bytes, instructions);
    if cpu.snapshot().x != value {
        panic!(
            "Expected register X to be {:#04x} but it was {:#04x}",
            value,
            cpu.snapshot().x
        );
    }
    assert_status(&cpu, status);
}

pub fn assert_register_y(bytes: &[u8], instructions: usize, value: u8, status: u8) {
    let (cpu, _bus) = run_program(bytes, instructions);
    if cpu.snapshot().y != value {
        panic!(
            "Expected register Y to be {:#04x} but it was {:#04x}",
            value,
            cpu.snapshot().y
        );
    }
    assert_status(&cpu, status);
}

#[macro_export]
macro_rules! register_a {
    ($name:ident, $bytes:expr, $instructions:expr, $a:expr, $p:expr) => {
        #[test]
        fn $name() {
            assert_register_a(&$bytes, $instructions, $a, $p);
        }
    };
}

#[macro_export]
macro_rules! register_x {
    ($name:ident, $bytes:expr, $instructions:expr, $x:expr, $p:expr) => {
        #[test]
        fn $name() {
            assert_register_x(&$bytes, $instructions, $x, $p);
        }
    };
}

#[macro_export]
macro_rules! register_y {
    ($name:ident, $bytes:expr, $instructions:expr, $y:expr, $p:expr) => {
        #[test]
        fn $name() {
            assert_register_y(&$bytes, $instructions, $y, $p);
        }
    };
}

#[macro_export]
macro_rules! status {
    ($name:ident, $bytes:expr, $instructions:expr, $p:expr) => {
        #[test]
        fn $name() {
            let (cpu, _bus) = run_program(&$bytes, $instructions);
            assert_status(&cpu, $p);
        }
    };
}
