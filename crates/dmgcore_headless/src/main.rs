use anyhow::bail;
use dmgcore_headless::{RunConfig, USAGE};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match RunConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let outcome = dmgcore_headless::run(&config)?;
    log::info!(
        "stopped after {} cycles, {} serial bytes",
        outcome.cycles,
        outcome.serial.len()
    );

    if let Some(needle) = &config.stop_on_serial {
        if !outcome.matched {
            bail!("serial output never contained {needle:?}");
        }
    }
    Ok(())
}
