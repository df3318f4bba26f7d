//! Loads, stores, register transfers, and the stack-oriented accumulator/
//! status instructions.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::{Cpu, StatusFlag};

/// Function: A := {adr}
/// Flags: N Z
pub fn lda(cpu: &mut Cpu, bus: &mut Bus, _mode: AddressingMode, address: u16, _crossed: bool) -> u8 {
    cpu.a = bus.read8(address);
    cpu.update_zero_and_negative(cpu.a);
    0
}

/// Function: {adr} := A
pub fn sta(cpu: &mut Cpu, bus: &mut Bus, _mode: AddressingMode, address: u16, _crossed: bool) -> u8 {
    bus.write8(address, cpu.a);
    0
}

/// Function: X := {adr}
/// Flags: N Z
pub fn ldx(cpu: &mut Cpu, bus: &mut Bus, _mode: AddressingMode, address: u16, _crossed: bool) -> u8 {
    cpu.x = bus.read8(address);
    cpu.update_zero_and_negative(cpu.x);
    0
}

/// Function: {adr} := X
pub fn stx(cpu: &mut Cpu, bus: &mut Bus, _mode: AddressingMode, address: u16, _crossed: bool) -> u8 {
    bus.write8(address, cpu.x);
    0
}

/// Function: Y := {adr}
/// Flags: N Z
pub fn ldy(cpu: &mut Cpu, bus: &mut Bus, _mode: AddressingMode, address: u16, _crossed: bool) -> u8 {
    cpu.y = bus.read8(address);
    cpu.update_zero_and_negative(cpu.y);
    0
}

/// Function: {adr} := Y
pub fn sty(cpu: &mut Cpu, bus: &mut Bus, _mode: AddressingMode, address: u16, _crossed: bool) -> u8 {
    bus.write8(address, cpu.y);
    0
}

/// Function: X := A
/// Flags: N Z
pub fn tax(cpu: &mut Cpu, _bus: &mut Bus, _mode: AddressingMode, _address: u16, _crossed: bool) -> u8 {
    cpu.x = cpu.a;
    cpu.update_zero_and_negative(cpu.x);
    0
}

/// Function: A := X
/// Flags: N Z
pub fn txa(cpu: &mut Cpu, _bus: &mut Bus, _mode: AddressingMode, _address: u16, _crossed: bool) -> u8 {
    cpu.a = cpu.x;
    cpu.update_zero_and_negative(cpu.a);
    0
}

/// Function: Y := A
/// Flags: N Z
pub fn tay(cpu: &mut Cpu, _bus: &mut Bus, _mode: AddressingMode, _address: u16, _crossed: bool) -> u8 {
    cpu.y = cpu.a;
    cpu.update_zero_and_negative(cpu.y);
    0
}

/// Function: A := Y
/// Flags: N Z
pub fn tya(cpu: &mut Cpu, _bus: &mut Bus, _mode: AddressingMode, _address: u16, _crossed: bool) -> u8 {
    cpu.a = cpu.y;
    cpu.update_zero_and_negative(cpu.a);
    0
}

/// Function: X := SP
/// Flags: N Z
pub fn tsx(cpu: &mut Cpu, _bus: &mut Bus, _mode: AddressingMode, _address: u16, _crossed: bool) -> u8 {
    cpu.x = cpu.sp;
    cpu.update_zero_and_negative(cpu.x);
    0
}

/// Function: SP := X
pub fn txs(cpu: &mut Cpu, _bus: &mut Bus, _mode: AddressingMode, _address: u16, _crossed: bool) -> u8 {
    cpu.sp = cpu.x;
    0
}

/// Function: {SP} := A, SP := SP - 1
pub fn pha(cpu: &mut Cpu, bus: &mut Bus, _mode: AddressingMode, _address: u16, _crossed: bool) -> u8 {
    let value = cpu.a;
    cpu.push8(bus, value);
    0
}

/// Function: SP := SP + 1, A := {SP}
/// Flags: N Z
pub fn pla(cpu: &mut Cpu, bus: &mut Bus, _mode: AddressingMode, _address: u16, _crossed: bool) -> u8 {
    cpu.a = cpu.pull8(bus);
    cpu.update_zero_and_negative(cpu.a);
    0
}

/// Function: {SP} := P | B | U, SP := SP - 1
///
/// The pushed copy always has the break and unused bits set; the live
/// status register is untouched.
pub fn php(cpu: &mut Cpu, bus: &mut Bus, _mode: AddressingMode, _address: u16, _crossed: bool) -> u8 {
    let pushed = cpu.p | StatusFlag::Break as u8 | StatusFlag::Unused as u8;
    cpu.push8(bus, pushed);
    0
}

/// Function: SP := SP + 1, P := {SP}
///
/// The break bit is cleared and the unused bit forced on when the pulled
/// byte is folded back into the live status register, matching hardware's
/// lack of a real break/unused latch outside the pushed copy.
pub fn plp(cpu: &mut Cpu, bus: &mut Bus, _mode: AddressingMode, _address: u16, _crossed: bool) -> u8 {
    let pulled = cpu.pull8(bus);
    cpu.p = (pulled & !(StatusFlag::Break as u8)) | StatusFlag::Unused as u8;
    0
}
