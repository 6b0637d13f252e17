use thiserror::Error;

use crate::memory::MAX_MEMORY;

/// the stages that touch memory, the only ones that can fault.
#[derive(Debug, PartialEq, Eq, Clone, Copy, strum_macros::Display)]
pub enum Stage {
    #[strum(serialize = "IF")]
    Fetch,
    #[strum(serialize = "MEM")]
    Memory,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("error in reading address {address}: {line:?} is not a decimal integer")]
    MalformedLine { address: usize, line: String },

    #[error("program has {words} words but memory only holds {}", MAX_MEMORY)]
    CapacityExceeded { words: usize },

    #[error("address {address} is outside of memory (0..{})", MAX_MEMORY)]
    AddressOutOfRange { address: i32 },

    #[error("invalid opcode {opcode}")]
    InvalidOpcode { opcode: i32 },

    #[error("cycle {cycle}, {stage} stage: {source}")]
    AtCycle {
        cycle: u64,
        stage: Stage,
        #[source]
        source: Box<SimError>,
    },
}

impl SimError {
    /// attach the cycle and stage a fault was raised in.
    pub fn at(self, cycle: u64, stage: Stage) -> Self {
        Self::AtCycle {
            cycle,
            stage,
            source: Box::new(self),
        }
    }
}
