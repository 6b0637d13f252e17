//! Structs that represent the pipeline registers sitting between the stages.
//!
//! Every register starts out holding a noop and zeroes, so a stage never acts on garbage.

use crate::instruction::Instruction;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct IFID {
    pub instruction: Instruction,
    pub pc_plus_1: i32,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct IDEX {
    pub instruction: Instruction,
    pub pc_plus_1: i32,
    pub read_reg_a: i32,
    pub read_reg_b: i32,
    /// sign-extended immediate field
    pub offset: i32,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct EXMEM {
    pub instruction: Instruction,
    pub branch_target: i32,
    pub alu_result: i32,
    /// the value sw stores
    pub read_reg_b: i32,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct MEMWB {
    pub instruction: Instruction,
    pub write_data: i32,
}

/// what left the write back stage, kept only so traces show it.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct WBEND {
    pub instruction: Instruction,
    pub write_data: i32,
}
