use crate::{
    alu::alu,
    error::{SimError, Stage},
    instruction::Opcode,
    memory::Memory,
    registers::{Register, RegisterFile},
    signals::{decode_signals, ALUSrc, RegDst},
    stages::{EXMEM, IDEX, IFID, MEMWB, WBEND},
};

/// a string that holds a report of the CPU state.
pub type Report = String;

/// The architectural state of the machine at a clock edge.
///
/// Each cycle the stages read one `State` and write into a clone of it, which then replaces the
/// original in a single assignment.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct State {
    pub pc: i32,
    /// fetch reads from here, nothing ever writes to it.
    pub instr_mem: Memory,
    /// lw and sw operate on this copy of the program.
    pub data_mem: Memory,
    pub reg: RegisterFile,
    pub ifid: IFID,
    pub idex: IDEX,
    pub exmem: EXMEM,
    pub memwb: MEMWB,
    pub wbend: WBEND,
    pub cycles: u64,
}

impl State {
    pub fn new(program: Vec<i32>) -> Result<Self, SimError> {
        let instr_mem = Memory::load(program)?;
        Ok(Self {
            pc: 0,
            data_mem: instr_mem.clone(),
            instr_mem,
            reg: RegisterFile::new(),
            ifid: IFID::default(),
            idex: IDEX::default(),
            exmem: EXMEM::default(),
            memwb: MEMWB::default(),
            wbend: WBEND::default(),
            cycles: 0,
        })
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Status {
    Running,
    Halted,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CPU {
    state: State,
    status: Status,
}

impl CPU {
    /// Initialize the CPU state
    pub fn new(program: Vec<i32>) -> Result<Self, SimError> {
        Ok(Self {
            state: State::new(program)?,
            status: Status::Running,
        })
    }

    pub fn initialize_rf(&mut self, mappings: &[(Register, i32)]) {
        self.state.reg.initialize(mappings);
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn get_total_clock_cycles(&self) -> u64 {
        self.state.cycles
    }

    pub fn is_done(&self) -> bool {
        self.status == Status::Halted
    }

    /// the full state dump printed before every cycle.
    pub fn report(&self) -> Report {
        self.state.to_string()
    }

    /// Main loop of the CPU simulator, returns the total number of cycles executed.
    pub fn run(&mut self) -> Result<u64, SimError> {
        self.run_with(|_| {})
    }

    /// Run to completion, showing `observe` the state before each cycle and the final state.
    pub fn run_with(&mut self, mut observe: impl FnMut(&State)) -> Result<u64, SimError> {
        loop {
            observe(&self.state);
            if self.run_step()? == Status::Halted {
                return Ok(self.state.cycles);
            }
        }
    }

    /// Body of the main loop of the CPU simulator, separated for testing purposes
    ///
    /// Halts without running any stage once the halt instruction sits in MEM/WB.
    pub fn run_step(&mut self) -> Result<Status, SimError> {
        if self.status == Status::Halted {
            return Ok(Status::Halted);
        }
        if self.state.memwb.instruction.opcode() == Ok(Opcode::Halt) {
            log::info!("machine halted after {} cycles", self.state.cycles);
            self.status = Status::Halted;
            return Ok(Status::Halted);
        }

        let cycle = self.state.cycles + 1;
        let mut next = self.state.clone();

        fetch(&self.state, &mut next).map_err(|e| e.at(cycle, Stage::Fetch))?;
        decode(&self.state, &mut next);
        execute(&self.state, &mut next);
        mem(&self.state, &mut next).map_err(|e| e.at(cycle, Stage::Memory))?;
        write_back(&self.state, &mut next);

        next.cycles = cycle;
        self.state = next;
        log::trace!("total_clock_cycles {cycle}, pc is {}", self.state.pc);

        Ok(Status::Running)
    }
}

fn fetch(state: &State, next: &mut State) -> Result<(), SimError> {
    next.ifid.instruction = state.instr_mem.read(state.pc)?.into();
    next.ifid.pc_plus_1 = state.pc.wrapping_add(1);
    next.pc = state.pc.wrapping_add(1);
    Ok(())
}

fn decode(state: &State, next: &mut State) {
    let instruction = state.ifid.instruction;

    next.idex.instruction = instruction;
    next.idex.pc_plus_1 = state.ifid.pc_plus_1;
    // the current register file, a write back committing this cycle is not visible yet
    next.idex.read_reg_a = state.reg.read(instruction.reg_a().into());
    next.idex.read_reg_b = state.reg.read(instruction.reg_b().into());
    next.idex.offset = instruction.offset();
}

fn execute(state: &State, next: &mut State) {
    let idex = state.idex;
    let signals = decode_signals(idex.instruction);

    let operand0 = idex.read_reg_a;
    let operand1 = match signals.alu_src {
        ALUSrc::Register => idex.read_reg_b,
        ALUSrc::Immediate => idex.offset,
    };
    if let Some(control) = signals.alu_control {
        next.exmem.alu_result = alu(control, operand0, operand1);
    }

    if signals.jump {
        let link = Register::from(idex.instruction.reg_b());
        log::debug!("jalr links {link} to {} and jumps to {operand0}", idex.pc_plus_1);
        next.reg.write(link, idex.pc_plus_1);
        next.pc = operand0;
    }

    next.exmem.instruction = idex.instruction;
    next.exmem.branch_target = idex.pc_plus_1.wrapping_add(idex.offset);
    next.exmem.read_reg_b = idex.read_reg_b;
}

fn mem(state: &State, next: &mut State) -> Result<(), SimError> {
    let exmem = state.exmem;
    let signals = decode_signals(exmem.instruction);

    next.memwb.instruction = exmem.instruction;

    if signals.mem_read {
        next.memwb.write_data = state.data_mem.read(exmem.alu_result)?;
    } else if signals.reg_write.is_some() {
        next.memwb.write_data = exmem.alu_result;
    }

    if signals.mem_write {
        next.data_mem.write(exmem.alu_result, exmem.read_reg_b)?;
    }

    // in-flight instructions are not flushed
    if signals.branch && exmem.alu_result == 0 {
        log::debug!("branch taken, pc is modified to {}", exmem.branch_target);
        next.pc = exmem.branch_target;
    }
    Ok(())
}

fn write_back(state: &State, next: &mut State) {
    let memwb = state.memwb;
    let signals = decode_signals(memwb.instruction);

    if let Some(dst) = signals.reg_write {
        let reg = match dst {
            RegDst::RegB => memwb.instruction.reg_b(),
            RegDst::Dest => memwb.instruction.dest(),
        };
        next.reg.write(Register::from(reg), memwb.write_data);
    }

    next.wbend.instruction = memwb.instruction;
    next.wbend.write_data = memwb.write_data;
}
