//! Human readable dumps of the machine, in the layout graders diff against.

use std::fmt;

use strum::IntoEnumIterator;

use crate::{
    cpu::State,
    instruction::Instruction,
    memory::Memory,
    registers::Register,
    stages::{EXMEM, IDEX, IFID, MEMWB, WBEND},
};

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n@@@\nstate before cycle {} starts\n", self.cycles)?;
        writeln!(f, "\tpc {}", self.pc)?;
        writeln!(f, "\tdata memory:")?;
        for (i, word) in self.data_mem.populated().iter().enumerate() {
            writeln!(f, "\t\tdataMem[ {i} ] {word}")?;
        }
        writeln!(f, "\tregisters:")?;
        for reg in Register::iter() {
            writeln!(f, "\t\treg[ {} ] {}", reg as u8, self.reg.read(reg))?;
        }
        write!(
            f,
            "{}{}{}{}{}",
            self.ifid, self.idex, self.exmem, self.memwb, self.wbend
        )
    }
}

impl fmt::Display for IFID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tIFID:")?;
        writeln!(f, "\t\tinstruction {}", self.instruction)?;
        writeln!(f, "\t\tpcPlus1 {}", self.pc_plus_1)
    }
}

impl fmt::Display for IDEX {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tIDEX:")?;
        writeln!(f, "\t\tinstruction {}", self.instruction)?;
        writeln!(f, "\t\tpcPlus1 {}", self.pc_plus_1)?;
        writeln!(f, "\t\treadRegA {}", self.read_reg_a)?;
        writeln!(f, "\t\treadRegB {}", self.read_reg_b)?;
        writeln!(f, "\t\toffset {}", self.offset)
    }
}

impl fmt::Display for EXMEM {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tEXMEM:")?;
        writeln!(f, "\t\tinstruction {}", self.instruction)?;
        writeln!(f, "\t\tbranchTarget {}", self.branch_target)?;
        writeln!(f, "\t\taluResult {}", self.alu_result)?;
        writeln!(f, "\t\treadRegB {}", self.read_reg_b)
    }
}

impl fmt::Display for MEMWB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tMEMWB:")?;
        writeln!(f, "\t\tinstruction {}", self.instruction)?;
        writeln!(f, "\t\twriteData {}", self.write_data)
    }
}

impl fmt::Display for WBEND {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tWBEND:")?;
        writeln!(f, "\t\tinstruction {}", self.instruction)?;
        writeln!(f, "\t\twriteData {}", self.write_data)
    }
}

/// the listing printed once after loading: every word, then every word decoded.
pub struct ProgramListing<'a>(pub &'a Memory);

impl fmt::Display for ProgramListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = self.0.populated();
        for (i, word) in words.iter().enumerate() {
            writeln!(f, "memory[{i}]={word}")?;
        }
        writeln!(f, "{} memory words", words.len())?;
        writeln!(f, "\tinstruction memory:")?;
        for (i, word) in words.iter().enumerate() {
            writeln!(f, "\t\tinstrMem[ {i} ] {}", Instruction::from(*word))?;
        }
        Ok(())
    }
}

/// the trailer printed once the halt retires.
pub struct HaltSummary(pub u64);

impl fmt::Display for HaltSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "machine halted")?;
        writeln!(f, "total of {} cycles executed", self.0)
    }
}
