use std::fmt;

use ux::u3;

use crate::error::SimError;

/// the operations of the LC-2K ISA, encoded in bits 24..22 of an instruction.
///
/// `Halt` and `Noop` are control sentinels, everything else has an effect on the pipeline.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum Opcode {
    Add = 0b000,
    Nor = 0b001,
    Lw = 0b010,
    Sw = 0b011,
    Beq = 0b100,
    Jalr = 0b101,
    Halt = 0b110,
    Noop = 0b111,
}

impl TryFrom<u8> for Opcode {
    type Error = SimError;
    fn try_from(value: u8) -> Result<Self, SimError> {
        Ok(match value {
            0b000 => Self::Add,
            0b001 => Self::Nor,
            0b010 => Self::Lw,
            0b011 => Self::Sw,
            0b100 => Self::Beq,
            0b101 => Self::Jalr,
            0b110 => Self::Halt,
            0b111 => Self::Noop,
            opcode => {
                return Err(SimError::InvalidOpcode {
                    opcode: opcode.into(),
                })
            }
        })
    }
}

/// a raw 32-bit machine code word.
///
/// | bits   | 31..25 | 24..22 | 21..19 | 18..16 | 15..0               |
/// |--------|--------|--------|--------|--------|---------------------|
/// | field  | unused | opcode | regA   | regB   | offset / destReg    |
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Instruction(i32);

impl Default for Instruction {
    fn default() -> Self {
        Self::NOOP
    }
}

impl From<i32> for Instruction {
    fn from(word: i32) -> Self {
        Self(word)
    }
}

impl Instruction {
    /// the encoding used to fill empty pipeline registers.
    pub const NOOP: Self = Self(0x1c0_0000);

    pub fn encode(opcode: Opcode, reg_a: u3, reg_b: u3, field: u16) -> Self {
        Self(
            ((opcode as i32) << 22)
                | (i32::from(u8::from(reg_a)) << 19)
                | (i32::from(u8::from(reg_b)) << 16)
                | i32::from(field),
        )
    }

    #[must_use]
    pub const fn word(self) -> i32 {
        self.0
    }

    /// decode the opcode from everything above bit 21, so words with any of the unused high bits
    /// set (or negative words) fail as `InvalidOpcode`.
    pub fn opcode(self) -> Result<Opcode, SimError> {
        let opcode = self.0 >> 22;
        u8::try_from(opcode)
            .map_err(|_| SimError::InvalidOpcode { opcode })
            .and_then(Opcode::try_from)
    }

    pub fn reg_a(self) -> u3 {
        u3::new(((self.0 >> 19) & 0x7) as u8)
    }

    pub fn reg_b(self) -> u3 {
        u3::new(((self.0 >> 16) & 0x7) as u8)
    }

    #[must_use]
    pub const fn immediate_field(self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }

    /// the immediate field sign-extended to 32 bits.
    #[must_use]
    pub const fn offset(self) -> i32 {
        self.immediate_field() as i16 as i32
    }

    /// destination register of an add or nor, the low 3 bits of the immediate field.
    pub fn dest(self) -> u3 {
        u3::new((self.immediate_field() & 0x7) as u8)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.opcode() {
            Ok(opcode) => write!(f, "{opcode}")?,
            Err(_) => f.write_str("data")?,
        }
        write!(
            f,
            " {} {} {}",
            self.reg_a(),
            self.reg_b(),
            self.immediate_field()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_extraction() {
        // lw 1 2 -3
        let inst = Instruction::from(0b010_001_010_1111_1111_1111_1101);

        assert_eq!(inst.opcode().unwrap(), Opcode::Lw);
        assert_eq!(inst.reg_a(), u3::new(1));
        assert_eq!(inst.reg_b(), u3::new(2));
        assert_eq!(inst.immediate_field(), 0xFFFD);
        assert_eq!(inst.offset(), -3);
        assert_eq!(inst.dest(), u3::new(5));
    }

    #[test]
    fn test_encode_matches_assembler_output() {
        // add 1 2 3
        assert_eq!(
            Instruction::encode(Opcode::Add, u3::new(1), u3::new(2), 3).word(),
            655363
        );
        // beq 0 0 -2
        assert_eq!(
            Instruction::encode(Opcode::Beq, u3::new(0), u3::new(0), 0xFFFE).word(),
            16842750
        );
        assert_eq!(Instruction::encode(Opcode::Halt, u3::new(0), u3::new(0), 0).word(), 25165824);
        assert_eq!(
            Instruction::encode(Opcode::Noop, u3::new(0), u3::new(0), 0),
            Instruction::NOOP
        );
    }

    #[test]
    fn test_positive_offset_is_not_extended() {
        let inst = Instruction::from(0x7FFF);
        assert_eq!(inst.offset(), 32767);
        let inst = Instruction::from(0x8000);
        assert_eq!(inst.offset(), -32768);
    }

    #[test]
    fn test_opcode_out_of_range() {
        assert_eq!(
            Opcode::try_from(8),
            Err(SimError::InvalidOpcode { opcode: 8 })
        );
        assert_eq!(Opcode::try_from(5), Ok(Opcode::Jalr));
    }

    #[test]
    fn test_high_bits_make_data() {
        let word = Instruction::encode(Opcode::Add, u3::new(1), u3::new(1), 3).word() | 1 << 25;
        let inst = Instruction::from(word);
        assert_eq!(inst.opcode(), Err(SimError::InvalidOpcode { opcode: 8 }));
        assert_eq!(inst.to_string(), "data 1 1 3");

        // bits 24..22 read 110 but this is not a halt
        let inst = Instruction::from(-5000000);
        assert_eq!(inst.opcode(), Err(SimError::InvalidOpcode { opcode: -2 }));
        assert_eq!(inst.to_string(), "data 6 3 46272");
    }

    #[test]
    fn test_display() {
        assert_eq!(Instruction::NOOP.to_string(), "noop 0 0 0");
        assert_eq!(Instruction::from(655363).to_string(), "add 1 2 3");
        assert_eq!(Instruction::from(16842750).to_string(), "beq 0 0 65534");
        assert_eq!(Instruction::from(-1).to_string(), "data 7 7 65535");
        assert_eq!(Instruction::from(5).to_string(), "add 0 0 5");
    }
}
