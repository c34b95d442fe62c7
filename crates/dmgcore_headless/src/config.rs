use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use typed_builder::TypedBuilder;

pub const USAGE: &str = "\
usage: dmgcore <rom.gb> [--max-cycles N] [--until TEXT] [--trace]

  --max-cycles N  stop after N T-cycles (default 200000000)
  --until TEXT    stop as soon as the serial output contains TEXT
  --trace         log every instruction at trace level (needs RUST_LOG=trace)";

#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct RunConfig {
    pub rom_path: PathBuf,
    #[builder(default = 200_000_000)]
    pub max_cycles: u64,
    #[builder(default = false)]
    pub trace: bool,
    /// Serial text that ends the run early.
    #[builder(default)]
    pub stop_on_serial: Option<String>,
}

impl RunConfig {
    /// Parse the command line (without the program name).
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut rom_path = None;
        let mut max_cycles = 200_000_000;
        let mut trace = false;
        let mut stop_on_serial = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if !arg.starts_with("--") {
                if rom_path.is_some() {
                    bail!("unexpected argument '{arg}'");
                }
                rom_path = Some(PathBuf::from(arg));
                continue;
            }

            match arg.as_str() {
                "--trace" => trace = true,
                "--max-cycles" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--max-cycles needs a value"))?;
                    max_cycles = value
                        .parse()
                        .with_context(|| format!("invalid --max-cycles value '{value}'"))?;
                }
                "--until" => {
                    let value = args.next().ok_or_else(|| anyhow!("--until needs a value"))?;
                    stop_on_serial = Some(value);
                }
                flag => bail!("unknown option '{flag}'"),
            }
        }

        let rom_path = rom_path.ok_or_else(|| anyhow!("no ROM path given"))?;
        Ok(Self::builder()
            .rom_path(rom_path)
            .max_cycles(max_cycles)
            .trace(trace)
            .stop_on_serial(stop_on_serial)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_apply_when_only_rom_is_given() {
        let config = RunConfig::from_args(args(&["cpu_instrs.gb"])).unwrap();
        assert_eq!(
            config,
            RunConfig::builder()
                .rom_path(PathBuf::from("cpu_instrs.gb"))
                .build()
        );
        assert_eq!(config.max_cycles, 200_000_000);
        assert!(!config.trace);
        assert_eq!(config.stop_on_serial, None);
    }

    #[test]
    fn flags_are_parsed_in_any_order() {
        let config = RunConfig::from_args(args(&[
            "--trace",
            "--until",
            "Passed",
            "rom.gb",
            "--max-cycles",
            "1000",
        ]))
        .unwrap();
        assert!(config.trace);
        assert_eq!(config.stop_on_serial.as_deref(), Some("Passed"));
        assert_eq!(config.max_cycles, 1000);
        assert_eq!(config.rom_path, PathBuf::from("rom.gb"));
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(RunConfig::from_args(args(&[])).is_err());
        assert!(RunConfig::from_args(args(&["a.gb", "b.gb"])).is_err());
        assert!(RunConfig::from_args(args(&["a.gb", "--max-cycles", "lots"])).is_err());
        assert!(RunConfig::from_args(args(&["a.gb", "--fast"])).is_err());
    }
}
