pub mod alu;
pub mod cpu;
pub mod error;
pub mod instruction;
pub mod loader;
pub mod memory;
pub mod registers;
pub mod report;
pub mod signals;
pub mod stages;
