//! The 256-entry decode table binding each opcode byte to its mnemonic,
//! addressing mode, base cycle count, illegal-opcode flag, and executor.
//!
//! Generated from the canonical MOS 6502 opcode matrix (mnemonic/mode/cycle
//! columns); the twelve halt-on-execution ("KIL"/"JAM") slots are corrected
//! to the documented 2-cycle, 1-byte cost instead of being treated as a
//! hang, since this core never actually halts on an illegal opcode.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::instructions_illegal as illegal;
use crate::cpu::instructions_jump as jump;
use crate::cpu::instructions_logical as logical;
use crate::cpu::instructions_move as movement;
use crate::cpu::Cpu;

/// An opcode's executor: reads/writes through the resolved operand,
/// mutates registers and flags, and returns any cycles beyond the base
/// count in the table (branch-taken, page-cross on a branch, BRK/JSR's
/// own fixed cost already folds into `cycles`).
pub type ExecuteFn = fn(&mut Cpu, &mut Bus, AddressingMode, u16, bool) -> u8;

/// One row of the 256-entry decode table.
#[derive(Clone, Copy)]
pub struct OpcodeDef {
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    pub cycles: u8,
    pub illegal: bool,
    pub execute: ExecuteFn,
}

impl OpcodeDef {
    pub fn for_opcode(opcode: u8) -> &'static OpcodeDef {
        &OPCODES[opcode as usize]
    }
}

/// Mnemonics whose indexed/indirect-indexed addressing forms add a cycle
/// when the effective address crosses a page boundary. Branches carry
/// their own page-cross accounting in `instructions_jump::branch` and are
/// deliberately absent here.
pub fn has_page_penalty(mnemonic: &str) -> bool {
    matches!(
        mnemonic,
        "ADC" | "AND" | "CMP" | "EOR" | "LDA" | "LDX" | "LDY" | "ORA" | "SBC" | "NOP"
    )
}

pub static OPCODES: [OpcodeDef; 256] = [
    OpcodeDef { mnemonic: "BRK", mode: AddressingMode::Implied, cycles: 7, illegal: false, execute: jump::brk }, // 0x00
    OpcodeDef { mnemonic: "ORA", mode: AddressingMode::IndirectX, cycles: 6, illegal: false, execute: logical::ora }, // 0x01
    OpcodeDef { mnemonic: "KIL", mode: AddressingMode::Implied, cycles: 2, illegal: true, execute: illegal::illegal }, // 0x02
    OpcodeDef { mnemonic: "SLO", mode: AddressingMode::IndirectX, cycles: 8, illegal: true, execute: illegal::illegal }, // 0x03
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::ZeroPage, cycles: 3, illegal: true, execute: jump::nop }, // 0x04
    OpcodeDef { mnemonic: "ORA", mode: AddressingMode::ZeroPage, cycles: 3, illegal: false, execute: logical::ora }, // 0x05
    OpcodeDef { mnemonic: "ASL", mode: AddressingMode::ZeroPage, cycles: 5, illegal: false, execute: logical::asl }, // 0x06
    OpcodeDef { mnemonic: "SLO", mode: AddressingMode::ZeroPage, cycles: 5, illegal: true, execute: illegal::illegal }, // 0x07
    OpcodeDef { mnemonic: "PHP", mode: AddressingMode::Implied, cycles: 3, illegal: false, execute: movement::php }, // 0x08
    OpcodeDef { mnemonic: "ORA", mode: AddressingMode::Immediate, cycles: 2, illegal: false, execute: logical::ora }, // 0x09
    OpcodeDef { mnemonic: "ASL", mode: AddressingMode::Accumulator, cycles: 2, illegal: false, execute: logical::asl }, // 0x0a
    OpcodeDef { mnemonic: "ANC", mode: AddressingMode::Immediate, cycles: 2, illegal: true, execute: illegal::illegal }, // 0x0b
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::Absolute, cycles: 4, illegal: true, execute: jump::nop }, // 0x0c
    OpcodeDef { mnemonic: "ORA", mode: AddressingMode::Absolute, cycles: 4, illegal: false, execute: logical::ora }, // 0x0d
    OpcodeDef { mnemonic: "ASL", mode: AddressingMode::Absolute, cycles: 6, illegal: false, execute: logical::asl }, // 0x0e
    OpcodeDef { mnemonic: "SLO", mode: AddressingMode::Absolute, cycles: 6, illegal: true, execute: illegal::illegal }, // 0x0f
    OpcodeDef { mnemonic: "BPL", mode: AddressingMode::Relative, cycles: 2, illegal: false, execute: jump::bpl }, // 0x10
    OpcodeDef { mnemonic: "ORA", mode: AddressingMode::IndirectY, cycles: 5, illegal: false, execute: logical::ora }, // 0x11
    OpcodeDef { mnemonic: "KIL", mode: AddressingMode::Implied, cycles: 2, illegal: true, execute: illegal::illegal }, // 0x12
    OpcodeDef { mnemonic: "SLO", mode: AddressingMode::IndirectY, cycles: 8, illegal: true, execute: illegal::illegal }, // 0x13
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::ZeroPageX, cycles: 4, illegal: true, execute: jump::nop }, // 0x14
    OpcodeDef { mnemonic: "ORA", mode: AddressingMode::ZeroPageX, cycles: 4, illegal: false, execute: logical::ora }, // 0x15
    OpcodeDef { mnemonic: "ASL", mode: AddressingMode::ZeroPageX, cycles: 6, illegal: false, execute: logical::asl }, // 0x16
    OpcodeDef { mnemonic: "SLO", mode: AddressingMode::ZeroPageX, cycles: 6, illegal: true, execute: illegal::illegal }, // 0x17
    OpcodeDef { mnemonic: "CLC", mode: AddressingMode::Implied, cycles: 2, illegal: false, execute: jump::clc }, // 0x18
    OpcodeDef { mnemonic: "ORA", mode: AddressingMode::AbsoluteY, cycles: 4, illegal: false, execute: logical::ora }, // 0x19
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::Implied, cycles: 2, illegal: true, execute: jump::nop }, // 0x1a
    OpcodeDef { mnemonic: "SLO", mode: AddressingMode::AbsoluteY, cycles: 7, illegal: true, execute: illegal::illegal }, // 0x1b
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::AbsoluteX, cycles: 4, illegal: true, execute: jump::nop }, // 0x1c
    OpcodeDef { mnemonic: "ORA", mode: AddressingMode::AbsoluteX, cycles: 4, illegal: false, execute: logical::ora }, // 0x1d
    OpcodeDef { mnemonic: "ASL", mode: AddressingMode::AbsoluteX, cycles: 7, illegal: false, execute: logical::asl }, // 0x1e
    OpcodeDef { mnemonic: "SLO", mode: AddressingMode::AbsoluteX, cycles: 7, illegal: true, execute: illegal::illegal }, // 0x1f
    OpcodeDef { mnemonic: "JSR", mode: AddressingMode::Absolute, cycles: 6, illegal: false, execute: jump::jsr }, // 0x20
    OpcodeDef { mnemonic: "AND", mode: AddressingMode::IndirectX, cycles: 6, illegal: false, execute: logical::and }, // 0x21
    OpcodeDef { mnemonic: "KIL", mode: AddressingMode::Implied, cycles: 2, illegal: true, execute: illegal::illegal }, // 0x22
    OpcodeDef { mnemonic: "RLA", mode: AddressingMode::IndirectX, cycles: 8, illegal: true, execute: illegal::illegal }, // 0x23
    OpcodeDef { mnemonic: "BIT", mode: AddressingMode::ZeroPage, cycles: 3, illegal: false, execute: jump::bit }, // 0x24
    OpcodeDef { mnemonic: "AND", mode: AddressingMode::ZeroPage, cycles: 3, illegal: false, execute: logical::and }, // 0x25
    OpcodeDef { mnemonic: "ROL", mode: AddressingMode::ZeroPage, cycles: 5, illegal: false, execute: logical::rol }, // 0x26
    OpcodeDef { mnemonic: "RLA", mode: AddressingMode::ZeroPage, cycles: 5, illegal: true, execute: illegal::illegal }, // 0x27
    OpcodeDef { mnemonic: "PLP", mode: AddressingMode::Implied, cycles: 4, illegal: false, execute: movement::plp }, // 0x28
    OpcodeDef { mnemonic: "AND", mode: AddressingMode::Immediate, cycles: 2, illegal: false, execute: logical::and }, // 0x29
    OpcodeDef { mnemonic: "ROL", mode: AddressingMode::Accumulator, cycles: 2, illegal: false, execute: logical::rol }, // 0x2a
    OpcodeDef { mnemonic: "ANC", mode: AddressingMode::Immediate, cycles: 2, illegal: true, execute: illegal::illegal }, // 0x2b
    OpcodeDef { mnemonic: "BIT", mode: AddressingMode::Absolute, cycles: 4, illegal: false, execute: jump::bit }, // 0x2c
    OpcodeDef { mnemonic: "AND", mode: AddressingMode::Absolute, cycles: 4, illegal: false, execute: logical::and }, // 0x2d
    OpcodeDef { mnemonic: "ROL", mode: AddressingMode::Absolute, cycles: 6, illegal: false, execute: logical::rol }, // 0x2e
    OpcodeDef { mnemonic: "RLA", mode: AddressingMode::Absolute, cycles: 6, illegal: true, execute: illegal::illegal }, // 0x2f
    OpcodeDef { mnemonic: "BMI", mode: AddressingMode::Relative, cycles: 2, illegal: false, execute: jump::bmi }, // 0x30
    OpcodeDef { mnemonic: "AND", mode: AddressingMode::IndirectY, cycles: 5, illegal: false, execute: logical::and }, // 0x31
    OpcodeDef { mnemonic: "KIL", mode: AddressingMode::Implied, cycles: 2, illegal: true, execute: illegal::illegal }, // 0x32
    OpcodeDef { mnemonic: "RLA", mode: AddressingMode::IndirectY, cycles: 8, illegal: true, execute: illegal::illegal }, // 0x33
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::ZeroPageX, cycles: 4, illegal: true, execute: jump::nop }, // 0x34
    OpcodeDef { mnemonic: "AND", mode: AddressingMode::ZeroPageX, cycles: 4, illegal: false, execute: logical::and }, // 0x35
    OpcodeDef { mnemonic: "ROL", mode: AddressingMode::ZeroPageX, cycles: 6, illegal: false, execute: logical::rol }, // 0x36
    OpcodeDef { mnemonic: "RLA", mode: AddressingMode::ZeroPageX, cycles: 6, illegal: true, execute: illegal::illegal }, // 0x37
    OpcodeDef { mnemonic: "SEC", mode: AddressingMode::Implied, cycles: 2, illegal: false, execute: jump::sec }, // 0x38
    OpcodeDef { mnemonic: "AND", mode: AddressingMode::AbsoluteY, cycles: 4, illegal: false, execute: logical::and }, // 0x39
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::Implied, cycles: 2, illegal: true, execute: jump::nop }, // 0x3a
    OpcodeDef { mnemonic: "RLA", mode: AddressingMode::AbsoluteY, cycles: 7, illegal: true, execute: illegal::illegal }, // 0x3b
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::AbsoluteX, cycles: 4, illegal: true, execute: jump::nop }, // 0x3c
    OpcodeDef { mnemonic: "AND", mode: AddressingMode::AbsoluteX, cycles: 4, illegal: false, execute: logical::and }, // 0x3d
    OpcodeDef { mnemonic: "ROL", mode: AddressingMode::AbsoluteX, cycles: 7, illegal: false, execute: logical::rol }, // 0x3e
    OpcodeDef { mnemonic: "RLA", mode: AddressingMode::AbsoluteX, cycles: 7, illegal: true, execute: illegal::illegal }, // 0x3f
    OpcodeDef { mnemonic: "RTI", mode: AddressingMode::Implied, cycles: 6, illegal: false, execute: jump::rti }, // 0x40
    OpcodeDef { mnemonic: "EOR", mode: AddressingMode::IndirectX, cycles: 6, illegal: false, execute: logical::eor }, // 0x41
    OpcodeDef { mnemonic: "KIL", mode: AddressingMode::Implied, cycles: 2, illegal: true, execute: illegal::illegal }, // 0x42
    OpcodeDef { mnemonic: "SRE", mode: AddressingMode::IndirectX, cycles: 8, illegal: true, execute: illegal::illegal }, // 0x43
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::ZeroPage, cycles: 3, illegal: true, execute: jump::nop }, // 0x44
    OpcodeDef { mnemonic: "EOR", mode: AddressingMode::ZeroPage, cycles: 3, illegal: false, execute: logical::eor }, // 0x45
    OpcodeDef { mnemonic: "LSR", mode: AddressingMode::ZeroPage, cycles: 5, illegal: false, execute: logical::lsr }, // 0x46
    OpcodeDef { mnemonic: "SRE", mode: AddressingMode::ZeroPage, cycles: 5, illegal: true, execute: illegal::illegal }, // 0x47
    OpcodeDef { mnemonic: "PHA", mode: AddressingMode::Implied, cycles: 3, illegal: false, execute: movement::pha }, // 0x48
    OpcodeDef { mnemonic: "EOR", mode: AddressingMode::Immediate, cycles: 2, illegal: false, execute: logical::eor }, // 0x49
    OpcodeDef { mnemonic: "LSR", mode: AddressingMode::Accumulator, cycles: 2, illegal: false, execute: logical::lsr }, // 0x4a
    OpcodeDef { mnemonic: "ALR", mode: AddressingMode::Immediate, cycles: 2, illegal: true, execute: illegal::illegal }, // 0x4b
    OpcodeDef { mnemonic: "JMP", mode: AddressingMode::Absolute, cycles: 3, illegal: false, execute: jump::jmp }, // 0x4c
    OpcodeDef { mnemonic: "EOR", mode: AddressingMode::Absolute, cycles: 4, illegal: false, execute: logical::eor }, // 0x4d
    OpcodeDef { mnemonic: "LSR", mode: AddressingMode::Absolute, cycles: 6, illegal: false, execute: logical::lsr }, // 0x4e
    OpcodeDef { mnemonic: "SRE", mode: AddressingMode::Absolute, cycles: 6, illegal: true, execute: illegal::illegal }, // 0x4f
    OpcodeDef { mnemonic: "BVC", mode: AddressingMode::Relative, cycles: 2, illegal: false, execute: jump::bvc }, // 0x50
    OpcodeDef { mnemonic: "EOR", mode: AddressingMode::IndirectY, cycles: 5, illegal: false, execute: logical::eor }, // 0x51
    OpcodeDef { mnemonic: "KIL", mode: AddressingMode::Implied, cycles: 2, illegal: true, execute: illegal::illegal }, // 0x52
    OpcodeDef { mnemonic: "SRE", mode: AddressingMode::IndirectY, cycles: 8, illegal: true, execute: illegal::illegal }, // 0x53
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::ZeroPageX, cycles: 4, illegal: true, execute: jump::nop }, // 0x54
    OpcodeDef { mnemonic: "EOR", mode: AddressingMode::ZeroPageX, cycles: 4, illegal: false, execute: logical::eor }, // 0x55
    OpcodeDef { mnemonic: "LSR", mode: AddressingMode::ZeroPageX, cycles: 6, illegal: false, execute: logical::lsr }, // 0x56
    OpcodeDef { mnemonic: "SRE", mode: AddressingMode::ZeroPageX, cycles: 6, illegal: true, execute: illegal::illegal }, // 0x57
    OpcodeDef { mnemonic: "CLI", mode: AddressingMode::Implied, cycles: 2, illegal: false, execute: jump::cli }, // 0x58
    OpcodeDef { mnemonic: "EOR", mode: AddressingMode::AbsoluteY, cycles: 4, illegal: false, execute: logical::eor }, // 0x59
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::Implied, cycles: 2, illegal: true, execute: jump::nop }, // 0x5a
    OpcodeDef { mnemonic: "SRE", mode: AddressingMode::AbsoluteY, cycles: 7, illegal: true, execute: illegal::illegal }, // 0x5b
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::AbsoluteX, cycles: 4, illegal: true, execute: jump::nop }, // 0x5c
    OpcodeDef { mnemonic: "EOR", mode: AddressingMode::AbsoluteX, cycles: 4, illegal: false, execute: logical::eor }, // 0x5d
    OpcodeDef { mnemonic: "LSR", mode: AddressingMode::AbsoluteX, cycles: 7, illegal: false, execute: logical::lsr }, // 0x5e
    OpcodeDef { mnemonic: "SRE", mode: AddressingMode::AbsoluteX, cycles: 7, illegal: true, execute: illegal::illegal }, // 0x5f
    OpcodeDef { mnemonic: "RTS", mode: AddressingMode::Implied, cycles: 6, illegal: false, execute: jump::rts }, // 0x60
    OpcodeDef { mnemonic: "ADC", mode: AddressingMode::IndirectX, cycles: 6, illegal: false, execute: logical::adc }, // 0x61
    OpcodeDef { mnemonic: "KIL", mode: AddressingMode::Implied, cycles: 2, illegal: true, execute: illegal::illegal }, // 0x62
    OpcodeDef { mnemonic: "RRA", mode: AddressingMode::IndirectX, cycles: 8, illegal: true, execute: illegal::illegal }, // 0x63
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::ZeroPage, cycles: 3, illegal: true, execute: jump::nop }, // 0x64
    OpcodeDef { mnemonic: "ADC", mode: AddressingMode::ZeroPage, cycles: 3, illegal: false, execute: logical::adc }, // 0x65
    OpcodeDef { mnemonic: "ROR", mode: AddressingMode::ZeroPage, cycles: 5, illegal: false, execute: logical::ror }, // 0x66
    OpcodeDef { mnemonic: "RRA", mode: AddressingMode::ZeroPage, cycles: 5, illegal: true, execute: illegal::illegal }, // 0x67
    OpcodeDef { mnemonic: "PLA", mode: AddressingMode::Implied, cycles: 4, illegal: false, execute: movement::pla }, // 0x68
    OpcodeDef { mnemonic: "ADC", mode: AddressingMode::Immediate, cycles: 2, illegal: false, execute: logical::adc }, // 0x69
    OpcodeDef { mnemonic: "ROR", mode: AddressingMode::Accumulator, cycles: 2, illegal: false, execute: logical::ror }, // 0x6a
    OpcodeDef { mnemonic: "ARR", mode: AddressingMode::Immediate, cycles: 2, illegal: true, execute: illegal::illegal }, // 0x6b
    OpcodeDef { mnemonic: "JMP", mode: AddressingMode::Indirect, cycles: 5, illegal: false, execute: jump::jmp }, // 0x6c
    OpcodeDef { mnemonic: "ADC", mode: AddressingMode::Absolute, cycles: 4, illegal: false, execute: logical::adc }, // 0x6d
    OpcodeDef { mnemonic: "ROR", mode: AddressingMode::Absolute, cycles: 6, illegal: false, execute: logical::ror }, // 0x6e
    OpcodeDef { mnemonic: "RRA", mode: AddressingMode::Absolute, cycles: 6, illegal: true, execute: illegal::illegal }, // 0x6f
    OpcodeDef { mnemonic: "BVS", mode: AddressingMode::Relative, cycles: 2, illegal: false, execute: jump::bvs }, // 0x70
    OpcodeDef { mnemonic: "ADC", mode: AddressingMode::IndirectY, cycles: 5, illegal: false, execute: logical::adc }, // 0x71
    OpcodeDef { mnemonic: "KIL", mode: AddressingMode::Implied, cycles: 2, illegal: true, execute: illegal::illegal }, // 0x72
    OpcodeDef { mnemonic: "RRA", mode: AddressingMode::IndirectY, cycles: 8, illegal: true, execute: illegal::illegal }, // 0x73
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::ZeroPageX, cycles: 4, illegal: true, execute: jump::nop }, // 0x74
    OpcodeDef { mnemonic: "ADC", mode: AddressingMode::ZeroPageX, cycles: 4, illegal: false, execute: logical::adc }, // 0x75
    OpcodeDef { mnemonic: "ROR", mode: AddressingMode::ZeroPageX, cycles: 6, illegal: false, execute: logical::ror }, // 0x76
    OpcodeDef { mnemonic: "RRA", mode: AddressingMode::ZeroPageX, cycles: 6, illegal: true, execute: illegal::illegal }, // 0x77
    OpcodeDef { mnemonic: "SEI", mode: AddressingMode::Implied, cycles: 2, illegal: false, execute: jump::sei }, // 0x78
    OpcodeDef { mnemonic: "ADC", mode: AddressingMode::AbsoluteY, cycles: 4, illegal: false, execute: logical::adc }, // 0x79
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::Implied, cycles: 2, illegal: true, execute: jump::nop }, // 0x7a
    OpcodeDef { mnemonic: "RRA", mode: AddressingMode::AbsoluteY, cycles: 7, illegal: true, execute: illegal::illegal }, // 0x7b
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::AbsoluteX, cycles: 4, illegal: true, execute: jump::nop }, // 0x7c
    OpcodeDef { mnemonic: "ADC", mode: AddressingMode::AbsoluteX, cycles: 4, illegal: false, execute: logical::adc }, // 0x7d
    OpcodeDef { mnemonic: "ROR", mode: AddressingMode::AbsoluteX, cycles: 7, illegal: false, execute: logical::ror }, // 0x7e
    OpcodeDef { mnemonic: "RRA", mode: AddressingMode::AbsoluteX, cycles: 7, illegal: true, execute: illegal::illegal }, // 0x7f
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::Immediate, cycles: 2, illegal: true, execute: jump::nop }, // 0x80
    OpcodeDef { mnemonic: "STA", mode: AddressingMode::IndirectX, cycles: 6, illegal: false, execute: movement::sta }, // 0x81
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::Immediate, cycles: 2, illegal: true, execute: jump::nop }, // 0x82
    OpcodeDef { mnemonic: "SAX", mode: AddressingMode::IndirectX, cycles: 6, illegal: true, execute: illegal::illegal }, // 0x83
    OpcodeDef { mnemonic: "STY", mode: AddressingMode::ZeroPage, cycles: 3, illegal: false, execute: movement::sty }, // 0x84
    OpcodeDef { mnemonic: "STA", mode: AddressingMode::ZeroPage, cycles: 3, illegal: false, execute: movement::sta }, // 0x85
    OpcodeDef { mnemonic: "STX", mode: AddressingMode::ZeroPage, cycles: 3, illegal: false, execute: movement::stx }, // 0x86
    OpcodeDef { mnemonic: "SAX", mode: AddressingMode::ZeroPage, cycles: 3, illegal: true, execute: illegal::illegal }, // 0x87
    OpcodeDef { mnemonic: "DEY", mode: AddressingMode::Implied, cycles: 2, illegal: false, execute: logical::dey }, // 0x88
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::Immediate, cycles: 2, illegal: true, execute: jump::nop }, // 0x89
    OpcodeDef { mnemonic: "TXA", mode: AddressingMode::Implied, cycles: 2, illegal: false, execute: movement::txa }, // 0x8a
    OpcodeDef { mnemonic: "XAA", mode: AddressingMode::Immediate, cycles: 2, illegal: true, execute: illegal::illegal }, // 0x8b
    OpcodeDef { mnemonic: "STY", mode: AddressingMode::Absolute, cycles: 4, illegal: false, execute: movement::sty }, // 0x8c
    OpcodeDef { mnemonic: "STA", mode: AddressingMode::Absolute, cycles: 4, illegal: false, execute: movement::sta }, // 0x8d
    OpcodeDef { mnemonic: "STX", mode: AddressingMode::Absolute, cycles: 4, illegal: false, execute: movement::stx }, // 0x8e
    OpcodeDef { mnemonic: "SAX", mode: AddressingMode::Absolute, cycles: 4, illegal: true, execute: illegal::illegal }, // 0x8f
    OpcodeDef { mnemonic: "BCC", mode: AddressingMode::Relative, cycles: 2, illegal: false, execute: jump::bcc }, // 0x90
    OpcodeDef { mnemonic: "STA", mode: AddressingMode::IndirectY, cycles: 6, illegal: false, execute: movement::sta }, // 0x91
    OpcodeDef { mnemonic: "KIL", mode: AddressingMode::Implied, cycles: 2, illegal: true, execute: illegal::illegal }, // 0x92
    OpcodeDef { mnemonic: "AHX", mode: AddressingMode::IndirectY, cycles: 6, illegal: true, execute: illegal::illegal }, // 0x93
    OpcodeDef { mnemonic: "STY", mode: AddressingMode::ZeroPageX, cycles: 4, illegal: false, execute: movement::sty }, // 0x94
    OpcodeDef { mnemonic: "STA", mode: AddressingMode::ZeroPageX, cycles: 4, illegal: false, execute: movement::sta }, // 0x95
    OpcodeDef { mnemonic: "STX", mode: AddressingMode::ZeroPageY, cycles: 4, illegal: false, execute: movement::stx }, // 0x96
    OpcodeDef { mnemonic: "SAX", mode: AddressingMode::ZeroPageY, cycles: 4, illegal: true, execute: illegal::illegal }, // 0x97
    OpcodeDef { mnemonic: "TYA", mode: AddressingMode::Implied, cycles: 2, illegal: false, execute: movement::tya }, // 0x98
    OpcodeDef { mnemonic: "STA", mode: AddressingMode::AbsoluteY, cycles: 5, illegal: false, execute: movement::sta }, // 0x99
    OpcodeDef { mnemonic: "TXS", mode: AddressingMode::Implied, cycles: 2, illegal: false, execute: movement::txs }, // 0x9a
    OpcodeDef { mnemonic: "TAS", mode: AddressingMode::AbsoluteY, cycles: 5, illegal: true, execute: illegal::illegal }, // 0x9b
    OpcodeDef { mnemonic: "SHY", mode: AddressingMode::AbsoluteX, cycles: 5, illegal: true, execute: illegal::illegal }, // 0x9c
    OpcodeDef { mnemonic: "STA", mode: AddressingMode::AbsoluteX, cycles: 5, illegal: false, execute: movement::sta }, // 0x9d
    OpcodeDef { mnemonic: "SHX", mode: AddressingMode::AbsoluteY, cycles: 5, illegal: true, execute: illegal::illegal }, // 0x9e
    OpcodeDef { mnemonic: "AHX", mode: AddressingMode::AbsoluteY, cycles: 5, illegal: true, execute: illegal::illegal }, // 0x9f
    OpcodeDef { mnemonic: "LDY", mode: AddressingMode::Immediate, cycles: 2, illegal: false, execute: movement::ldy }, // 0xa0
    OpcodeDef { mnemonic: "LDA", mode: AddressingMode::IndirectX, cycles: 6, illegal: false, execute: movement::lda }, // 0xa1
    OpcodeDef { mnemonic: "LDX", mode: AddressingMode::Immediate, cycles: 2, illegal: false, execute: movement::ldx }, // 0xa2
    OpcodeDef { mnemonic: "LAX", mode: AddressingMode::IndirectX, cycles: 6, illegal: true, execute: illegal::illegal }, // 0xa3
    OpcodeDef { mnemonic: "LDY", mode: AddressingMode::ZeroPage, cycles: 3, illegal: false, execute: movement::ldy }, // 0xa4
    OpcodeDef { mnemonic: "LDA", mode: AddressingMode::ZeroPage, cycles: 3, illegal: false, execute: movement::lda }, // 0xa5
    OpcodeDef { mnemonic: "LDX", mode: AddressingMode::ZeroPage, cycles: 3, illegal: false, execute: movement::ldx }, // 0xa6
    OpcodeDef { mnemonic: "LAX", mode: AddressingMode::ZeroPage, cycles: 3, illegal: true, execute: illegal::illegal }, // 0xa7
    OpcodeDef { mnemonic: "TAY", mode: AddressingMode::Implied, cycles: 2, illegal: false, execute: movement::tay }, // 0xa8
    OpcodeDef { mnemonic: "LDA", mode: AddressingMode::Immediate, cycles: 2, illegal: false, execute: movement::lda }, // 0xa9
    OpcodeDef { mnemonic: "TAX", mode: AddressingMode::Implied, cycles: 2, illegal: false, execute: movement::tax }, // 0xaa
    OpcodeDef { mnemonic: "LAX", mode: AddressingMode::Immediate, cycles: 2, illegal: true, execute: illegal::illegal }, // 0xab
    OpcodeDef { mnemonic: "LDY", mode: AddressingMode::Absolute, cycles: 4, illegal: false, execute: movement::ldy }, // 0xac
    OpcodeDef { mnemonic: "LDA", mode: AddressingMode::Absolute, cycles: 4, illegal: false, execute: movement::lda }, // 0xad
    OpcodeDef { mnemonic: "LDX", mode: AddressingMode::Absolute, cycles: 4, illegal: false, execute: movement::ldx }, // 0xae
    OpcodeDef { mnemonic: "LAX", mode: AddressingMode::Absolute, cycles: 4, illegal: true, execute: illegal::illegal }, // 0xaf
    OpcodeDef { mnemonic: "BCS", mode: AddressingMode::Relative, cycles: 2, illegal: false, execute: jump::bcs }, // 0xb0
    OpcodeDef { mnemonic: "LDA", mode: AddressingMode::IndirectY, cycles: 5, illegal: false, execute: movement::lda }, // 0xb1
    OpcodeDef { mnemonic: "KIL", mode: AddressingMode::Implied, cycles: 2, illegal: true, execute: illegal::illegal }, // 0xb2
    OpcodeDef { mnemonic: "LAX", mode: AddressingMode::IndirectY, cycles: 5, illegal: true, execute: illegal::illegal }, // 0xb3
    OpcodeDef { mnemonic: "LDY", mode: AddressingMode::ZeroPageX, cycles: 4, illegal: false, execute: movement::ldy }, // 0xb4
    OpcodeDef { mnemonic: "LDA", mode: AddressingMode::ZeroPageX, cycles: 4, illegal: false, execute: movement::lda }, // 0xb5
    OpcodeDef { mnemonic: "LDX", mode: AddressingMode::ZeroPageY, cycles: 4, illegal: false, execute: movement::ldx }, // 0xb6
    OpcodeDef { mnemonic: "LAX", mode: AddressingMode::ZeroPageY, cycles: 4, illegal: true, execute: illegal::illegal }, // 0xb7
    OpcodeDef { mnemonic: "CLV", mode: AddressingMode::Implied, cycles: 2, illegal: false, execute: jump::clv }, // 0xb8
    OpcodeDef { mnemonic: "LDA", mode: AddressingMode::AbsoluteY, cycles: 4, illegal: false, execute: movement::lda }, // 0xb9
    OpcodeDef { mnemonic: "TSX", mode: AddressingMode::Implied, cycles: 2, illegal: false, execute: movement::tsx }, // 0xba
    OpcodeDef { mnemonic: "LAS", mode: AddressingMode::AbsoluteY, cycles: 4, illegal: true, execute: illegal::illegal }, // 0xbb
    OpcodeDef { mnemonic: "LDY", mode: AddressingMode::AbsoluteX, cycles: 4, illegal: false, execute: movement::ldy }, // 0xbc
    OpcodeDef { mnemonic: "LDA", mode: AddressingMode::AbsoluteX, cycles: 4, illegal: false, execute: movement::lda }, // 0xbd
    OpcodeDef { mnemonic: "LDX", mode: AddressingMode::AbsoluteY, cycles: 4, illegal: false, execute: movement::ldx }, // 0xbe
    OpcodeDef { mnemonic: "LAX", mode: AddressingMode::AbsoluteY, cycles: 4, illegal: true, execute: illegal::illegal }, // 0xbf
    OpcodeDef { mnemonic: "CPY", mode: AddressingMode::Immediate, cycles: 2, illegal: false, execute: logical::cpy }, // 0xc0
    OpcodeDef { mnemonic: "CMP", mode: AddressingMode::IndirectX, cycles: 6, illegal: false, execute: logical::cmp }, // 0xc1
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::Immediate, cycles: 2, illegal: true, execute: jump::nop }, // 0xc2
    OpcodeDef { mnemonic: "DCP", mode: AddressingMode::IndirectX, cycles: 8, illegal: true, execute: illegal::illegal }, // 0xc3
    OpcodeDef { mnemonic: "CPY", mode: AddressingMode::ZeroPage, cycles: 3, illegal: false, execute: logical::cpy }, // 0xc4
    OpcodeDef { mnemonic: "CMP", mode: AddressingMode::ZeroPage, cycles: 3, illegal: false, execute: logical::cmp }, // 0xc5
    OpcodeDef { mnemonic: "DEC", mode: AddressingMode::ZeroPage, cycles: 5, illegal: false, execute: logical::dec }, // 0xc6
    OpcodeDef { mnemonic: "DCP", mode: AddressingMode::ZeroPage, cycles: 5, illegal: true, execute: illegal::illegal }, // 0xc7
    OpcodeDef { mnemonic: "INY", mode: AddressingMode::Implied, cycles: 2, illegal: false, execute: logical::iny }, // 0xc8
    OpcodeDef { mnemonic: "CMP", mode: AddressingMode::Immediate, cycles: 2, illegal: false, execute: logical::cmp }, // 0xc9
    OpcodeDef { mnemonic: "DEX", mode: AddressingMode::Implied, cycles: 2, illegal: false, execute: logical::dex }, // 0xca
    OpcodeDef { mnemonic: "AXS", mode: AddressingMode::Immediate, cycles: 2, illegal: true, execute: illegal::illegal }, // 0xcb
    OpcodeDef { mnemonic: "CPY", mode: AddressingMode::Absolute, cycles: 4, illegal: false, execute: logical::cpy }, // 0xcc
    OpcodeDef { mnemonic: "CMP", mode: AddressingMode::Absolute, cycles: 4, illegal: false, execute: logical::cmp }, // 0xcd
    OpcodeDef { mnemonic: "DEC", mode: AddressingMode::Absolute, cycles: 6, illegal: false, execute: logical::dec }, // 0xce
    OpcodeDef { mnemonic: "DCP", mode: AddressingMode::Absolute, cycles: 6, illegal: true, execute: illegal::illegal }, // 0xcf
    OpcodeDef { mnemonic: "BNE", mode: AddressingMode::Relative, cycles: 2, illegal: false, execute: jump::bne }, // 0xd0
    OpcodeDef { mnemonic: "CMP", mode: AddressingMode::IndirectY, cycles: 5, illegal: false, execute: logical::cmp }, // 0xd1
    OpcodeDef { mnemonic: "KIL", mode: AddressingMode::Implied, cycles: 2, illegal: true, execute: illegal::illegal }, // 0xd2
    OpcodeDef { mnemonic: "DCP", mode: AddressingMode::IndirectY, cycles: 8, illegal: true, execute: illegal::illegal }, // 0xd3
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::ZeroPageX, cycles: 4, illegal: true, execute: jump::nop }, // 0xd4
    OpcodeDef { mnemonic: "CMP", mode: AddressingMode::ZeroPageX, cycles: 4, illegal: false, execute: logical::cmp }, // 0xd5
    OpcodeDef { mnemonic: "DEC", mode: AddressingMode::ZeroPageX, cycles: 6, illegal: false, execute: logical::dec }, // 0xd6
    OpcodeDef { mnemonic: "DCP", mode: AddressingMode::ZeroPageX, cycles: 6, illegal: true, execute: illegal::illegal }, // 0xd7
    OpcodeDef { mnemonic: "CLD", mode: AddressingMode::Implied, cycles: 2, illegal: false, execute: jump::cld }, // 0xd8
    OpcodeDef { mnemonic: "CMP", mode: AddressingMode::AbsoluteY, cycles: 4, illegal: false, execute: logical::cmp }, // 0xd9
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::Implied, cycles: 2, illegal: true, execute: jump::nop }, // 0xda
    OpcodeDef { mnemonic: "DCP", mode: AddressingMode::AbsoluteY, cycles: 7, illegal: true, execute: illegal::illegal }, // 0xdb
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::AbsoluteX, cycles: 4, illegal: true, execute: jump::nop }, // 0xdc
    OpcodeDef { mnemonic: "CMP", mode: AddressingMode::AbsoluteX, cycles: 4, illegal: false, execute: logical::cmp }, // 0xdd
    OpcodeDef { mnemonic: "DEC", mode: AddressingMode::AbsoluteX, cycles: 7, illegal: false, execute: logical::dec }, // 0xde
    OpcodeDef { mnemonic: "DCP", mode: AddressingMode::AbsoluteX, cycles: 7, illegal: true, execute: illegal::illegal }, // 0xdf
    OpcodeDef { mnemonic: "CPX", mode: AddressingMode::Immediate, cycles: 2, illegal: false, execute: logical::cpx }, // 0xe0
    OpcodeDef { mnemonic: "SBC", mode: AddressingMode::IndirectX, cycles: 6, illegal: false, execute: logical::sbc }, // 0xe1
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::Immediate, cycles: 2, illegal: true, execute: jump::nop }, // 0xe2
    OpcodeDef { mnemonic: "ISC", mode: AddressingMode::IndirectX, cycles: 8, illegal: true, execute: illegal::illegal }, // 0xe3
    OpcodeDef { mnemonic: "CPX", mode: AddressingMode::ZeroPage, cycles: 3, illegal: false, execute: logical::cpx }, // 0xe4
    OpcodeDef { mnemonic: "SBC", mode: AddressingMode::ZeroPage, cycles: 3, illegal: false, execute: logical::sbc }, // 0xe5
    OpcodeDef { mnemonic: "INC", mode: AddressingMode::ZeroPage, cycles: 5, illegal: false, execute: logical::inc }, // 0xe6
    OpcodeDef { mnemonic: "ISC", mode: AddressingMode::ZeroPage, cycles: 5, illegal: true, execute: illegal::illegal }, // 0xe7
    OpcodeDef { mnemonic: "INX", mode: AddressingMode::Implied, cycles: 2, illegal: false, execute: logical::inx }, // 0xe8
    OpcodeDef { mnemonic: "SBC", mode: AddressingMode::Immediate, cycles: 2, illegal: false, execute: logical::sbc }, // 0xe9
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::Implied, cycles: 2, illegal: false, execute: jump::nop }, // 0xea
    OpcodeDef { mnemonic: "SBC", mode: AddressingMode::Immediate, cycles: 2, illegal: true, execute: illegal::illegal }, // 0xeb (undocumented duplicate of 0xe9)
    OpcodeDef { mnemonic: "CPX", mode: AddressingMode::Absolute, cycles: 4, illegal: false, execute: logical::cpx }, // 0xec
    OpcodeDef { mnemonic: "SBC", mode: AddressingMode::Absolute, cycles: 4, illegal: false, execute: logical::sbc }, // 0xed
    OpcodeDef { mnemonic: "INC", mode: AddressingMode::Absolute, cycles: 6, illegal: false, execute: logical::inc }, // 0xee
    OpcodeDef { mnemonic: "ISC", mode: AddressingMode::Absolute, cycles: 6, illegal: true, execute: illegal::illegal }, // 0xef
    OpcodeDef { mnemonic: "BEQ", mode: AddressingMode::Relative, cycles: 2, illegal: false, execute: jump::beq }, // 0xf0
    OpcodeDef { mnemonic: "SBC", mode: AddressingMode::IndirectY, cycles: 5, illegal: false, execute: logical::sbc }, // 0xf1
    OpcodeDef { mnemonic: "KIL", mode: AddressingMode::Implied, cycles: 2, illegal: true, execute: illegal::illegal }, // 0xf2
    OpcodeDef { mnemonic: "ISC", mode: AddressingMode::IndirectY, cycles: 8, illegal: true, execute: illegal::illegal }, // 0xf3
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::ZeroPageX, cycles: 4, illegal: true, execute: jump::nop }, // 0xf4
    OpcodeDef { mnemonic: "SBC", mode: AddressingMode::ZeroPageX, cycles: 4, illegal: false, execute: logical::sbc }, // 0xf5
    OpcodeDef { mnemonic: "INC", mode: AddressingMode::ZeroPageX, cycles: 6, illegal: false, execute: logical::inc }, // 0xf6
    OpcodeDef { mnemonic: "ISC", mode: AddressingMode::ZeroPageX, cycles: 6, illegal: true, execute: illegal::illegal }, // 0xf7
    OpcodeDef { mnemonic: "SED", mode: AddressingMode::Implied, cycles: 2, illegal: false, execute: jump::sed }, // 0xf8
    OpcodeDef { mnemonic: "SBC", mode: AddressingMode::AbsoluteY, cycles: 4, illegal: false, execute: logical::sbc }, // 0xf9
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::Implied, cycles: 2, illegal: true, execute: jump::nop }, // 0xfa
    OpcodeDef { mnemonic: "ISC", mode: AddressingMode::AbsoluteY, cycles: 7, illegal: true, execute: illegal::illegal }, // 0xfb
    OpcodeDef { mnemonic: "NOP", mode: AddressingMode::AbsoluteX, cycles: 4, illegal: true, execute: jump::nop }, // 0xfc
    OpcodeDef { mnemonic: "SBC", mode: AddressingMode::AbsoluteX, cycles: 4, illegal: false, execute: logical::sbc }, // 0xfd
    OpcodeDef { mnemonic: "INC", mode: AddressingMode::AbsoluteX, cycles: 7, illegal: false, execute: logical::inc }, // 0xfe
    OpcodeDef { mnemonic: "ISC", mode: AddressingMode::AbsoluteX, cycles: 7, illegal: true, execute: illegal::illegal }, // 0xff
];
