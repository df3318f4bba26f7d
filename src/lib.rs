//! A cycle-approximate interpreter core for the MOS 6502 as wired into the
//! Nintendo Entertainment System: the fetch-decode-execute engine, the
//! thirteen addressing-mode resolvers, the documented instruction set, the
//! interrupt sequences, and the address-space abstraction the CPU reads and
//! writes through. Peripherals (PPU, APU, controller input, cartridge
//! mappers, ROM loading) are out of scope; they are external collaborators
//! that attach to the bus this crate defines.

pub mod bus;
pub mod constants;
pub mod cpu;
