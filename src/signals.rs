use crate::{
    alu::{alu_control_unit, ALUControl},
    instruction::{Instruction, Opcode},
};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
/// a struct that holds the control signals that the Control Unit generates for an opcode.
pub struct ControlSignals {
    /// the operation the ALU performs, `None` when the ALU is idle.
    pub alu_control: Option<ALUControl>,
    /// whether the second ALU operand is the register value or the sign-extended offset.
    pub alu_src: ALUSrc,
    /// tells the memory stage to read data memory into the write back value.
    pub mem_read: bool,
    /// tells the memory stage to store regB into data memory.
    pub mem_write: bool,
    /// the branch signal controls whether a branch *can* be taken. (the condition itself is a zero ALU result.)
    pub branch: bool,
    /// jalr links and redirects the pc as soon as it reaches execute.
    pub jump: bool,
    /// where the write back stage writes to, `None` when it doesn't write.
    pub reg_write: Option<RegDst>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[repr(u8)]
/// a 1 bit signal that tells the ALU whether to use the register value (0) or the immediate value (1) as the second operand.
pub enum ALUSrc {
    #[default]
    Register = 0,
    Immediate = 1,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// which field of the instruction names the destination register.
pub enum RegDst {
    /// the regB field, used by lw
    RegB,
    /// the low 3 bits of the immediate field, used by add and nor
    Dest,
}

/// the signals a stage acts on for the instruction it holds.
///
/// Data words have no opcode and get the idle signals, so they pass through without effect.
pub fn decode_signals(instruction: Instruction) -> ControlSignals {
    match instruction.opcode() {
        Ok(opcode) => control_unit(opcode),
        Err(err) => {
            log::debug!("{err} in {instruction}, treated as a bubble");
            ControlSignals::default()
        }
    }
}

pub fn control_unit(opcode: Opcode) -> ControlSignals {
    let alu_control = alu_control_unit(opcode);
    match opcode {
        Opcode::Add | Opcode::Nor => ControlSignals {
            alu_control,
            reg_write: Some(RegDst::Dest),
            ..Default::default()
        },
        Opcode::Lw => ControlSignals {
            alu_control,
            alu_src: ALUSrc::Immediate,
            mem_read: true,
            reg_write: Some(RegDst::RegB),
            ..Default::default()
        },
        Opcode::Sw => ControlSignals {
            alu_control,
            alu_src: ALUSrc::Immediate,
            mem_write: true,
            ..Default::default()
        },
        Opcode::Beq => ControlSignals {
            alu_control,
            branch: true,
            ..Default::default()
        },
        Opcode::Jalr => ControlSignals {
            jump: true,
            ..Default::default()
        },
        Opcode::Halt | Opcode::Noop => ControlSignals::default(),
    }
}
