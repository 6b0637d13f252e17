use std::{
    fmt,
    ops::{Index, IndexMut},
};

use strum_macros::EnumIter;
use ux::u3;

/// the number of registers in the LC-2K ISA
pub const REGISTERS_COUNT: u8 = 8;

/// register names, unlike risc-v there is no hardwired zero register.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, EnumIter)]
#[repr(u8)]
pub enum Register {
    R0 = 0,
    R1 = 1,
    R2 = 2,
    R3 = 3,
    R4 = 4,
    R5 = 5,
    R6 = 6,
    R7 = 7,
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", *self as u8)
    }
}

impl From<u3> for Register {
    fn from(value: u3) -> Self {
        match u8::from(value) {
            0 => Self::R0,
            1 => Self::R1,
            2 => Self::R2,
            3 => Self::R3,
            4 => Self::R4,
            5 => Self::R5,
            6 => Self::R6,
            _ => Self::R7,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub struct RegisterFile {
    registers: [i32; REGISTERS_COUNT as usize],
}

impl Index<Register> for RegisterFile {
    type Output = i32;
    fn index(&self, index: Register) -> &Self::Output {
        &self.registers[index as usize]
    }
}

impl IndexMut<Register> for RegisterFile {
    fn index_mut(&mut self, index: Register) -> &mut Self::Output {
        &mut self.registers[index as usize]
    }
}

impl RegisterFile {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            registers: [0; REGISTERS_COUNT as usize],
        }
    }

    /// Initialize the register file with the provided defaults, makes everything else 0
    pub fn initialize(&mut self, mappings: &[(Register, i32)]) {
        self.registers = [0; REGISTERS_COUNT as usize];
        for (mapping, value) in mappings {
            self[*mapping] = *value;
        }
    }

    #[must_use]
    pub const fn read(&self, reg: Register) -> i32 {
        self.registers[reg as usize]
    }

    pub fn write(&mut self, reg: Register, value: i32) {
        self.registers[reg as usize] = value;
        log::debug!("{reg} is modified to {value}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_register_zero_is_writable() {
        let mut rf = RegisterFile::new();
        rf.write(Register::R0, 9);
        assert_eq!(rf.read(Register::R0), 9);
    }

    #[test]
    fn test_initialize_clears_other_registers() {
        let mut rf = RegisterFile::new();
        rf[Register::R4] = 1;
        rf.initialize(&[(Register::R1, -7), (Register::R7, 3)]);
        assert_eq!(
            Register::iter().map(|reg| rf.read(reg)).collect::<Vec<_>>(),
            vec![0, -7, 0, 0, 0, 0, 0, 3]
        );
    }

    #[test]
    fn test_from_field() {
        for (i, reg) in Register::iter().enumerate() {
            assert_eq!(Register::from(u3::new(i as u8)), reg);
        }
    }
}
