use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lc2k_pipeline::{
    cpu::CPU,
    loader::parse_machine_code,
    report::{HaltSummary, ProgramListing},
};

/// Cycle-accurate five stage pipeline simulator for LC-2K machine code.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// machine code file produced by the assembler, one decimal word per line
    machine_code: PathBuf,

    /// only print the final state instead of the state before every cycle
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    // read the file
    let file = std::fs::read_to_string(&args.machine_code)
        .with_context(|| format!("can't open file {}", args.machine_code.display()))?;

    // parse the file
    let program = parse_machine_code(&file)?;
    log::info!(
        "loaded {} words from {}",
        program.len(),
        args.machine_code.display()
    );

    // Initialize the CPU state
    let mut cpu = CPU::new(program)?;
    print!("{}", ProgramListing(&cpu.state().instr_mem));

    // Run the CPU
    let cycles = if args.quiet {
        let cycles = cpu.run()?;
        print!("{}", cpu.report());
        cycles
    } else {
        cpu.run_with(|state| print!("{state}"))?
    };
    print!("{}", HaltSummary(cycles));

    Ok(())
}
