//! Arithmetic, logic, comparisons, increments/decrements, and the
//! shift/rotate family (which operate on either the accumulator or a
//! memory operand depending on addressing mode).

use crate::bus::Bus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::{Cpu, StatusFlag};

/// Function: A := A | {adr}
/// Flags: N Z
pub fn ora(cpu: &mut Cpu, bus: &mut Bus, _mode: AddressingMode, address: u16, _crossed: bool) -> u8 {
    cpu.a |= bus.read8(address);
    cpu.update_zero_and_negative(cpu.a);
    0
}

/// Function: A := A & {adr}
/// Flags: N Z
pub fn and(cpu: &mut Cpu, bus: &mut Bus, _mode: AddressingMode, address: u16, _crossed: bool) -> u8 {
    cpu.a &= bus.read8(address);
    cpu.update_zero_and_negative(cpu.a);
    0
}

/// Function: A := A ^ {adr}
/// Flags: N Z
pub fn eor(cpu: &mut Cpu, bus: &mut Bus, _mode: AddressingMode, address: u16, _crossed: bool) -> u8 {
    cpu.a ^= bus.read8(address);
    cpu.update_zero_and_negative(cpu.a);
    0
}

/// Shared core of ADC and SBC: SBC feeds in the one's complement of its
/// operand, so the carry/overflow arithmetic below only has to be written
/// once. The overflow flag is derived from the accumulator's value
/// *before* this call updates it.
fn add_with_carry(cpu: &mut Cpu, operand: u8) {
    let carry_in = cpu.flag(StatusFlag::Carry) as u16;
    let a = cpu.a;
    let sum = a as u16 + operand as u16 + carry_in;
    let result = sum as u8;
    cpu.set_flag(StatusFlag::Carry, sum > 0xFF);
    cpu.set_flag(StatusFlag::Overflow, (a ^ result) & (operand ^ result) & 0x80 != 0);
    cpu.a = result;
    cpu.update_zero_and_negative(cpu.a);
}

/// Function: A := A + {adr} + C
/// Flags: N V Z C
pub fn adc(cpu: &mut Cpu, bus: &mut Bus, _mode: AddressingMode, address: u16, _crossed: bool) -> u8 {
    let operand = bus.read8(address);
    add_with_carry(cpu, operand);
    0
}

/// Function: A := A - {adr} - (1 - C)
/// Flags: N V Z C
pub fn sbc(cpu: &mut Cpu, bus: &mut Bus, _mode: AddressingMode, address: u16, _crossed: bool) -> u8 {
    let operand = bus.read8(address);
    add_with_carry(cpu, !operand);
    0
}

fn compare(cpu: &mut Cpu, register: u8, operand: u8) {
    let result = register.wrapping_sub(operand);
    cpu.set_flag(StatusFlag::Carry, register >= operand);
    cpu.set_flag(StatusFlag::Zero, register == operand);
    cpu.set_flag(StatusFlag::Negative, result & 0x80 != 0);
}

/// Function: A - {adr}
/// Flags: N Z C
pub fn cmp(cpu: &mut Cpu, bus: &mut Bus, _mode: AddressingMode, address: u16, _crossed: bool) -> u8 {
    let operand = bus.read8(address);
    compare(cpu, cpu.a, operand);
    0
}

/// Function: X - {adr}
/// Flags: N Z C
pub fn cpx(cpu: &mut Cpu, bus: &mut Bus, _mode: AddressingMode, address: u16, _crossed: bool) -> u8 {
    let operand = bus.read8(address);
    compare(cpu, cpu.x, operand);
    0
}

/// Function: Y - {adr}
/// Flags: N Z C
pub fn cpy(cpu: &mut Cpu, bus: &mut Bus, _mode: AddressingMode, address: u16, _crossed: bool) -> u8 {
    let operand = bus.read8(address);
    compare(cpu, cpu.y, operand);
    0
}

/// Function: {adr} := {adr} - 1
/// Flags: N Z
pub fn dec(cpu: &mut Cpu, bus: &mut Bus, _mode: AddressingMode, address: u16, _crossed: bool) -> u8 {
    let value = bus.read8(address).wrapping_sub(1);
    bus.write8(address, value);
    cpu.update_zero_and_negative(value);
    0
}

/// Function: X := X - 1
/// Flags: N Z
pub fn dex(cpu: &mut Cpu, _bus: &mut Bus, _mode: AddressingMode, _address: u16, _crossed: bool) -> u8 {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zero_and_negative(cpu.x);
    0
}

/// Function: Y := Y - 1
/// Flags: N Z
pub fn dey(cpu: &mut Cpu, _bus: &mut Bus, _mode: AddressingMode, _address: u16, _crossed: bool) -> u8 {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zero_and_negative(cpu.y);
    0
}

/// Function: {adr} := {adr} + 1
/// Flags: N Z
pub fn inc(cpu: &mut Cpu, bus: &mut Bus, _mode: AddressingMode, address: u16, _crossed: bool) -> u8 {
    let value = bus.read8(address).wrapping_add(1);
    bus.write8(address, value);
    cpu.update_zero_and_negative(value);
    0
}

/// Function: X := X + 1
/// Flags: N Z
pub fn inx(cpu: &mut Cpu, _bus: &mut Bus, _mode: AddressingMode, _address: u16, _crossed: bool) -> u8 {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zero_and_negative(cpu.x);
    0
}

/// Function: Y := Y + 1
/// Flags: N Z
pub fn iny(cpu: &mut Cpu, _bus: &mut Bus, _mode: AddressingMode, _address: u16, _crossed: bool) -> u8 {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zero_and_negative(cpu.y);
    0
}

fn read_shiftable(cpu: &Cpu, bus: &Bus, mode: AddressingMode, address: u16) -> u8 {
    if mode == AddressingMode::Accumulator {
        cpu.a
    } else {
        bus.read8(address)
    }
}

fn write_shiftable(cpu: &mut Cpu, bus: &mut Bus, mode: AddressingMode, address: u16, value: u8) {
    if mode == AddressingMode::Accumulator {
        cpu.a = value;
    } else {
        bus.write8(address, value);
    }
}

/// Function: {adr} := {adr} * 2
/// Flags: N Z C
pub fn asl(cpu: &mut Cpu, bus: &mut Bus, mode: AddressingMode, address: u16, _crossed: bool) -> u8 {
    let value = read_shiftable(cpu, bus, mode, address);
    let result = value << 1;
    write_shiftable(cpu, bus, mode, address, result);
    cpu.set_flag(StatusFlag::Carry, value & 0x80 != 0);
    cpu.update_zero_and_negative(result);
    0
}

/// Function: {adr} := {adr} * 2 + C
/// Flags: N Z C
pub fn rol(cpu: &mut Cpu, bus: &mut Bus, mode: AddressingMode, address: u16, _crossed: bool) -> u8 {
    let value = read_shiftable(cpu, bus, mode, address);
    let carry_in = cpu.flag(StatusFlag::Carry) as u8;
    let result = (value << 1) | carry_in;
    write_shiftable(cpu, bus, mode, address, result);
    cpu.set_flag(StatusFlag::Carry, value & 0x80 != 0);
    cpu.update_zero_and_negative(result);
    0
}

/// Function: {adr} := {adr} / 2
/// Flags: N Z C
pub fn lsr(cpu: &mut Cpu, bus: &mut Bus, mode: AddressingMode, address: u16, _crossed: bool) -> u8 {
    let value = read_shiftable(cpu, bus, mode, address);
    let result = value >> 1;
    write_shiftable(cpu, bus, mode, address, result);
    cpu.set_flag(StatusFlag::Carry, value & 0x01 != 0);
    cpu.update_zero_and_negative(result);
    0
}

/// Function: {adr} := {adr} / 2 + C * 128
/// Flags: N Z C
pub fn ror(cpu: &mut Cpu, bus: &mut Bus, mode: AddressingMode, address: u16, _crossed: bool) -> u8 {
    let value = read_shiftable(cpu, bus, mode, address);
    let carry_in = cpu.flag(StatusFlag::Carry) as u8;
    let result = (value >> 1) | (carry_in << 7);
    write_shiftable(cpu, bus, mode, address, result);
    cpu.set_flag(StatusFlag::Carry, value & 0x01 != 0);
    cpu.update_zero_and_negative(result);
    0
}
