use crate::instruction::Opcode;

/// tells the ALU what operation to perform.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ALUControl {
    /// add and nor results, and effective addresses of lw and sw
    ADD,
    NOR,
    /// beq compares by subtracting, equal operands leave a zero result
    SUB,
}

/// This function mimics the ALU Control Unit: it maps an opcode to the ALU operation it needs.
///
/// Opcodes that never use the ALU (jalr, halt, noop) return `None`, in which case the execute stage
/// leaves the previous ALU result in the EX/MEM register untouched.
pub fn alu_control_unit(opcode: Opcode) -> Option<ALUControl> {
    match opcode {
        Opcode::Add | Opcode::Lw | Opcode::Sw => Some(ALUControl::ADD),
        Opcode::Nor => Some(ALUControl::NOR),
        Opcode::Beq => Some(ALUControl::SUB),
        Opcode::Jalr | Opcode::Halt | Opcode::Noop => None,
    }
}

/// two's complement arithmetic, overflow wraps like the hardware would.
pub fn alu(control: ALUControl, operand0: i32, operand1: i32) -> i32 {
    match control {
        ALUControl::ADD => operand0.wrapping_add(operand1),
        ALUControl::NOR => !(operand0 | operand1),
        ALUControl::SUB => operand0.wrapping_sub(operand1),
    }
}
