use anyhow::{Context, Result};
use retroboy::DEFAULT_INSTRUCTIONS;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(rom_path) = args.next() else {
        eprintln!("Usage: retroboy <rom_path> [instructions]");
        std::process::exit(2);
    };
    let instructions = match args.next() {
        Some(count) => count
            .parse()
            .with_context(|| format!("invalid instruction count '{count}'"))?,
        None => DEFAULT_INSTRUCTIONS,
    };

    log::info!("Running ROM path: '{}'", rom_path);
    let rom = std::fs::read(&rom_path)
        .with_context(|| format!("failed to read ROM file '{rom_path}'"))?;

    let summary = retroboy::run(&rom, instructions)?;
    println!(
        "{} instructions, {} machine cycles, PC=0x{:04X}, {:?}",
        summary.instructions, summary.cycles, summary.pc, summary.state
    );
    Ok(())
}
