use std::io::Write;

use anyhow::{Context, Result};
use dmgcore::cpu::LogTracer;
use dmgcore::GameBoy;

mod config;

pub use config::{RunConfig, USAGE};

/// T-cycles per slice between serial checks (one LCD frame).
const SLICE_CYCLES: u64 = 70_224;

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub cycles: u64,
    pub serial: Vec<u8>,
    /// Whether `stop_on_serial` was seen.
    pub matched: bool,
}

/// Load the ROM named by `config` and run it headless, echoing serial
/// output to stdout as it appears.
pub fn run(config: &RunConfig) -> Result<RunOutcome> {
    let rom = std::fs::read(&config.rom_path)
        .with_context(|| format!("failed to read ROM '{}'", config.rom_path.display()))?;

    let mut gb = GameBoy::new();
    gb.load_rom(&rom)
        .with_context(|| format!("cannot load '{}'", config.rom_path.display()))?;
    if config.trace {
        gb.set_tracer(Box::new(LogTracer));
    }

    log::info!(
        "running '{}' for up to {} cycles",
        config.rom_path.display(),
        config.max_cycles
    );
    run_machine(&mut gb, config)
}

/// Drive an already loaded machine. CPU faults end the run with an error.
pub fn run_machine(gb: &mut GameBoy, config: &RunConfig) -> Result<RunOutcome> {
    let mut stdout = std::io::stdout();
    let mut cycles = 0u64;
    let mut echoed = 0usize;
    let mut matched = false;

    while cycles < config.max_cycles {
        let budget = SLICE_CYCLES.min(config.max_cycles - cycles);
        let ran = gb
            .run_cycles(budget)
            .with_context(|| format!("CPU fault after {cycles} cycles"))?;
        cycles += ran;

        let serial = gb.serial_output();
        if serial.len() > echoed {
            stdout.write_all(&serial[echoed..])?;
            stdout.flush()?;
            echoed = serial.len();
        }

        if let Some(needle) = &config.stop_on_serial {
            if String::from_utf8_lossy(serial).contains(needle.as_str()) {
                matched = true;
                break;
            }
        }
    }

    Ok(RunOutcome {
        cycles,
        serial: gb.serial_output().to_vec(),
        matched,
    })
}
